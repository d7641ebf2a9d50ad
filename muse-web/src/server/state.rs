//! Process-wide suggestion client
//!
//! The client is constructed in `main` after configuration has loaded and
//! installed here exactly once. Server functions borrow it; it lives until
//! process shutdown.

use anyhow::Result;
use muse_core::GeminiClient;
use std::sync::OnceLock;

static CLIENT: OnceLock<GeminiClient> = OnceLock::new();

/// Install the client built at startup. Errors on a second call.
pub fn init(client: GeminiClient) -> Result<()> {
    CLIENT
        .set(client)
        .map_err(|_| anyhow::anyhow!("Suggestion client already initialized"))
}

/// The installed client, or an error when startup never installed one
pub fn client() -> Result<&'static GeminiClient> {
    CLIENT
        .get()
        .ok_or_else(|| anyhow::anyhow!("Suggestion client not initialized"))
}
