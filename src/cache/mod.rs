// Cache module for local filesystem storage.
// Keeps fetched verse texts on disk so each passage is requested only once.

pub mod paths;
pub mod store;

pub use paths::StoragePaths;
pub use store::{CachedVerse, VerseCache};
