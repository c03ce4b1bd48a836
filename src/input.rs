// Operator input.
// Reads stdin lines on a dedicated thread so waiting for Enter stays cancellable.

use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;

/// Lines typed by the operator. Only their arrival matters, not their content.
pub struct AckReceiver {
    lines: mpsc::UnboundedReceiver<()>,
}

impl AckReceiver {
    /// Start reading stdin in the background.
    pub fn spawn_stdin() -> io::Result<Self> {
        let (tx, lines) = mpsc::unbounded_channel();
        thread::Builder::new()
            .name("stdin".to_string())
            .spawn(move || forward_lines(io::stdin().lock(), tx))?;
        Ok(Self { lines })
    }

    /// Receive acknowledgments from an arbitrary source.
    #[cfg(test)]
    pub fn from_channel(lines: mpsc::UnboundedReceiver<()>) -> Self {
        Self { lines }
    }

    /// Wait for the operator to press Enter.
    ///
    /// Lines typed before the call are discarded. Returns false if input has
    /// closed, in which case no acknowledgment can ever arrive.
    pub async fn wait(&mut self) -> bool {
        self.discard_pending();
        self.lines.recv().await.is_some()
    }

    /// Drop lines typed so far, returning how many there were.
    pub fn discard_pending(&mut self) -> usize {
        let mut discarded = 0;
        while self.lines.try_recv().is_ok() {
            discarded += 1;
        }
        if discarded > 0 {
            log::debug!("Ignoring {} early line(s) of input", discarded);
        }
        discarded
    }
}

fn forward_lines<R: BufRead>(reader: R, tx: mpsc::UnboundedSender<()>) {
    for line in reader.lines() {
        if line.is_err() || tx.send(()).is_err() {
            break;
        }
    }
    log::debug!("Standard input closed");
}
