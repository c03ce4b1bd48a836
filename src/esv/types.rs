// ESV API response types.
// Only the fields the passage text endpoint returns that we care about.

use serde::Deserialize;

/// Body of `GET /v3/passage/text/`.
#[derive(Debug, Clone, Deserialize)]
pub struct PassageTextResponse {
    /// Canonical form of the requested reference, e.g. "John 3:16".
    #[serde(default)]
    pub canonical: String,
    /// Rendered passages; one per range in the query.
    #[serde(default)]
    pub passages: Vec<String>,
}
