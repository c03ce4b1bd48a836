// ESV API module.
// Client, response types and text transforms for the Crossway ESV API.

pub mod client;
pub mod passage;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::EsvClient;

use crate::error::Result;

/// Something that can turn a scripture reference into display text.
pub trait PassageSource {
    /// Fetch the display text for `reference`.
    async fn passage_text(&self, reference: &str) -> Result<String>;
}

impl PassageSource for EsvClient {
    async fn passage_text(&self, reference: &str) -> Result<String> {
        EsvClient::passage_text(self, reference).await
    }
}
