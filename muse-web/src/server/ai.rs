use muse_core::{GeminiClient, SuggestError};

/// Generate topic suggestions for the submitted keywords.
///
/// Thin shim over muse-core for the web layer.
pub async fn generate_topics(
    client: &GeminiClient,
    keywords: &str,
) -> Result<Vec<String>, SuggestError> {
    muse_core::generate_suggestions(client, keywords).await
}
