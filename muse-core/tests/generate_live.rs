//! Live integration test against the real Gemini API
//!
//! Run with: cargo test -p muse-core --test generate_live -- --ignored --nocapture

use anyhow::Result;
use muse_core::{Config, GeminiClient, generate_suggestions};

#[tokio::test]
#[ignore]
async fn generates_topics_for_keywords() -> Result<()> {
    let config = Config::from_env()?;
    let client = GeminiClient::new(&config);

    let suggestions =
        generate_suggestions(&client, "artificial intelligence, machine learning").await?;

    println!("Got {} topics:", suggestions.len());
    for (i, topic) in suggestions.iter().enumerate() {
        println!("  {}. {}", i + 1, topic);
    }

    assert!(!suggestions.is_empty(), "expected at least one topic");
    for topic in &suggestions {
        assert_eq!(topic.trim(), topic, "topics should come back trimmed");
        assert!(!topic.is_empty());
    }

    Ok(())
}
