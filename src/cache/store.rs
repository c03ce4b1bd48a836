// Verse cache store.
// Loads the cached verse map once and rewrites the whole file on every insert.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::verses::VerseReference;

/// A verse whose text has been fetched from the ESV API.
///
/// Entries never expire: the text of a passage does not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedVerse {
    pub topic: String,
    pub verse: String,
    /// Display text, with highlight markers in place of brackets.
    pub text: String,
    /// When the text was fetched. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}

impl CachedVerse {
    /// Create an entry for freshly fetched text.
    pub fn fetched(reference: &VerseReference, text: String) -> Self {
        Self {
            topic: reference.topic.to_string(),
            verse: reference.verse.to_string(),
            text,
            fetched_at: Some(Utc::now()),
        }
    }
}

/// In-memory verse cache backed by a single JSON file.
#[derive(Debug)]
pub struct VerseCache {
    path: PathBuf,
    entries: BTreeMap<u32, CachedVerse>,
    /// Why an existing cache file was ignored, until someone shows it.
    load_warning: Option<String>,
}

impl VerseCache {
    /// An empty cache that will persist to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
            load_warning: None,
        }
    }

    /// Load the cache from `path`.
    ///
    /// A missing file is a first run. An unreadable or corrupt file is logged
    /// and replaced by an empty cache; this never fails.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match read_entries(&path) {
            Ok(Some(entries)) => {
                log::info!("Loaded {} cached verses from {}", entries.len(), path.display());
                Self {
                    path,
                    entries,
                    load_warning: None,
                }
            }
            Ok(None) => {
                log::debug!("No verse cache at {}, starting empty", path.display());
                Self::empty(path)
            }
            Err(e) => {
                let warning =
                    format!("Ignoring unreadable verse cache {}: {}", path.display(), e);
                log::warn!("{}", warning);
                Self {
                    load_warning: Some(warning),
                    ..Self::empty(path)
                }
            }
        }
    }

    /// The problem that made `load` start empty, reported once.
    pub fn take_load_warning(&mut self) -> Option<String> {
        self.load_warning.take()
    }

    /// Cached verse for `index`, if any.
    pub fn lookup(&self, index: u32) -> Option<&CachedVerse> {
        self.entries.get(&index)
    }

    /// Add an entry and rewrite the cache file.
    ///
    /// The entry stays in memory even when writing fails.
    pub fn insert(&mut self, index: u32, verse: CachedVerse) -> Result<()> {
        self.entries.insert(index, verse);
        self.persist()
    }

    /// Number of cached verses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        write_atomic(&self.path, json.as_bytes())?;
        log::debug!(
            "Wrote {} cached verses to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<Option<BTreeMap<u32, CachedVerse>>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let entries = serde_json::from_str(&contents)?;
    Ok(Some(entries))
}

/// Write a file atomically via a temp file in the same directory.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
