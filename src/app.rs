// App state and main loop.
// Picks a verse, shows it, counts down, then blinks until the operator presses Enter.

use std::io::{self, Write};

use chrono::Local;

use crate::blink::BlinkHandle;
use crate::cache::{CachedVerse, VerseCache};
use crate::config::{Config, Selection};
use crate::display::{Provenance, Screen};
use crate::error::{Result, VerseError};
use crate::esv::PassageSource;
use crate::input::AckReceiver;
use crate::verses::{random_index, table, week_index};

/// A verse ready for display.
#[derive(Debug)]
pub struct Resolved {
    pub verse: CachedVerse,
    pub provenance: Provenance,
    /// Set when the verse was fetched but the cache file could not be written.
    pub persist_error: Option<VerseError>,
}

/// Look up a verse in the cache, fetching and caching it on a miss.
///
/// A failure to write the cache file does not fail the lookup: the verse
/// stays cached in memory and the error is handed back for display.
pub async fn resolve_verse<S: PassageSource>(
    cache: &mut VerseCache,
    source: &S,
    index: u32,
) -> Result<Resolved> {
    if let Some(verse) = cache.lookup(index) {
        return Ok(Resolved {
            verse: verse.clone(),
            provenance: Provenance::Cached,
            persist_error: None,
        });
    }

    let reference = table::lookup(index).ok_or(VerseError::UnknownIndex(index))?;
    let text = source.passage_text(reference.verse).await?;
    let verse = CachedVerse::fetched(reference, text);

    let persist_error = cache.insert(index, verse.clone()).err();
    if let Some(e) = &persist_error {
        log::warn!(
            "Could not save verse cache to {}: {}",
            cache.path().display(),
            e
        );
    }

    Ok(Resolved {
        verse,
        provenance: Provenance::Fetched,
        persist_error,
    })
}

/// Main application state.
pub struct App<S, W> {
    config: Config,
    source: S,
    cache: VerseCache,
    screen: Screen<W>,
    blink: BlinkHandle,
    acks: AckReceiver,
}

impl<S: PassageSource, W: Write> App<S, W> {
    pub fn new(
        config: Config,
        source: S,
        cache: VerseCache,
        screen: Screen<W>,
        blink: BlinkHandle,
        acks: AckReceiver,
    ) -> Self {
        Self {
            config,
            source,
            cache,
            screen,
            blink,
            acks,
        }
    }

    /// Run cycles until Ctrl-C or a fatal error, then shut the LED down.
    pub async fn run(self) -> Result<()> {
        self.run_until(tokio::signal::ctrl_c()).await
    }

    /// Run cycles until `interrupt` completes or a fatal error occurs.
    ///
    /// A cycle in progress is abandoned on interrupt. The blink worker is
    /// always shut down and joined before returning.
    pub async fn run_until<F>(mut self, interrupt: F) -> Result<()>
    where
        F: Future<Output = io::Result<()>>,
    {
        tokio::pin!(interrupt);

        let outcome = loop {
            tokio::select! {
                result = self.cycle() => {
                    if let Err(e) = result {
                        break Err(e);
                    }
                }
                signal = &mut interrupt => {
                    break match signal {
                        Ok(()) => self
                            .screen
                            .notice("Caught keyboard interrupt, shutting down")
                            .map_err(VerseError::from),
                        Err(e) => Err(e.into()),
                    };
                }
            }
        };

        let Self { blink, .. } = self;
        let joined = tokio::task::spawn_blocking(move || blink.shutdown())
            .await
            .map_err(|e| VerseError::Other(format!("blink shutdown failed: {}", e)))?;

        outcome.and(joined)
    }

    /// One display cycle. Fetch problems are reported and end only this cycle.
    pub async fn cycle(&mut self) -> Result<()> {
        match self.show_next().await {
            Err(e) if !e.is_fatal() => {
                log::warn!("Cycle abandoned: {}", e);
                self.screen
                    .error(&format!("Could not fetch the verse: {}", e))?;
                // Back off before the next attempt.
                tokio::time::sleep(self.config.minute).await;
                Ok(())
            }
            other => other,
        }
    }

    async fn show_next(&mut self) -> Result<()> {
        // Enter presses only count once the LED is blinking.
        self.acks.discard_pending();

        let index = self.next_index();
        let resolved = resolve_verse(&mut self.cache, &self.source, index).await?;
        log::info!(
            "Verse {} ({}) {:?}",
            index,
            resolved.verse.verse,
            resolved.provenance
        );

        self.screen.show_verse(&resolved.verse, resolved.provenance)?;
        if let Some(warning) = self.cache.take_load_warning() {
            self.screen.warning(&warning)?;
        }
        if let Some(e) = &resolved.persist_error {
            self.screen
                .warning(&format!("Could not save the verse cache: {}", e))?;
        }
        self.countdown().await?;

        if !self.config.continuous {
            self.blink.start();
            if !self.acks.wait().await {
                log::warn!("Standard input closed, not waiting for Enter");
            }
            self.blink.stop();
        }

        Ok(())
    }

    fn next_index(&self) -> u32 {
        match self.config.selection {
            Selection::Weekly => week_index(Local::now().date_naive(), self.config.base_year),
            Selection::Random => random_index(&mut rand::rng()),
        }
    }

    /// Count down the configured minutes, one number per minute.
    async fn countdown(&mut self) -> Result<()> {
        self.screen.countdown_start()?;
        for remaining in (1..=self.config.delay_minutes).rev() {
            self.screen.countdown_tick(remaining)?;
            tokio::time::sleep(self.config.minute).await;
        }
        self.screen.countdown_end()?;
        Ok(())
    }
}
