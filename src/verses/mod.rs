// Verse schedule module.
// Maps dates onto the static Fighter Verses table.

pub mod index;
pub mod table;

pub use index::{DEFAULT_BASE_YEAR, random_index, week_index};

/// One entry of the memorization schedule: a topic and a scripture reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseReference {
    pub topic: &'static str,
    pub verse: &'static str,
}

impl VerseReference {
    pub const fn new(topic: &'static str, verse: &'static str) -> Self {
        Self { topic, verse }
    }
}
