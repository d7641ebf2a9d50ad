//! Topic suggestion adapter
//!
//! Turns a keyword string into a prompt, runs one generation call, and
//! parses the numbered-list reply into clean topic lines.

use crate::error::SuggestError;
use crate::gemini::{GeminiClient, GenerateContentRequest};
use regex::Regex;
use std::sync::OnceLock;
use std::time::Instant;
use tracing::{debug, info};

/// Number of topics the prompt asks for. The reply is not required to
/// contain exactly this many lines; see [`generate_suggestions`].
const SUGGESTION_COUNT: usize = 5;

/// System instruction for the generation call
const SYSTEM_INSTRUCTION: &str = "You are an expert topic generator.";

/// Temperature for sampling
const TEMPERATURE: f32 = 0.7;

/// Maximum tokens in the reply
const MAX_OUTPUT_TOKENS: u32 = 300;

/// Thinking budget accompanying the output-token cap
const THINKING_BUDGET: u32 = 100;

fn build_prompt(keywords: &str) -> String {
    format!(
        r#"The user has entered the following keywords:
"{keywords}"

Please suggest {SUGGESTION_COUNT} engaging, creative and practical topics based on these keywords.
Each topic must be a single complete and clear sentence.
Return only the topics as a numbered list, without any extra commentary."#
    )
}

/// Matches a leading "<digits>." ordinal, with any amount of spacing after
/// the dot
fn ordinal_prefix() -> &'static Regex {
    static ORDINAL_PREFIX: OnceLock<Regex> = OnceLock::new();
    ORDINAL_PREFIX
        .get_or_init(|| Regex::new(r"^\d+\.\s*").expect("ordinal prefix pattern is valid"))
}

/// Parse a model reply into topic lines.
///
/// Lines are trimmed, a leading ordinal prefix is stripped, and lines that
/// end up empty are dropped. Order is preserved.
pub fn parse_suggestions(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(|line| ordinal_prefix().replace(line.trim(), "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Generate topic suggestions for the given keywords.
///
/// The caller supplies non-empty, trimmed text; the keywords are embedded
/// in the prompt verbatim. One request per invocation, no retries. The
/// parsed list is returned as-is: the model is asked for five topics but
/// the count is not enforced.
pub async fn generate_suggestions(
    client: &GeminiClient,
    keywords: &str,
) -> Result<Vec<String>, SuggestError> {
    let start = Instant::now();

    let request = GenerateContentRequest::user_text(build_prompt(keywords))
        .system_instruction(SYSTEM_INSTRUCTION)
        .temperature(TEMPERATURE)
        .max_output_tokens(MAX_OUTPUT_TOKENS)
        .thinking_budget(THINKING_BUDGET);

    let reply = client.generate_content(&request).await?;
    let suggestions = parse_suggestions(&reply);

    if suggestions.len() != SUGGESTION_COUNT {
        debug!(
            count = suggestions.len(),
            "Model returned an unexpected number of topics"
        );
    }

    info!(
        model = %client.model(),
        count = suggestions.len(),
        duration_ms = %start.elapsed().as_millis(),
        "Suggestion generation completed"
    );

    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_ordinals_and_blank_lines() {
        let reply = "1. Topic A\n2. Topic B\n\n3.Topic C";
        assert_eq!(parse_suggestions(reply), vec!["Topic A", "Topic B", "Topic C"]);
    }

    #[test]
    fn test_parse_without_ordinals_is_unchanged() {
        let reply = "Topic A\nTopic B";
        assert_eq!(parse_suggestions(reply), vec!["Topic A", "Topic B"]);
    }

    #[test]
    fn test_parse_handles_multi_digit_ordinals_and_extra_spacing() {
        let reply = "10.   Long list entry\n  11. Indented entry  ";
        assert_eq!(
            parse_suggestions(reply),
            vec!["Long list entry", "Indented entry"]
        );
    }

    #[test]
    fn test_parse_drops_whitespace_only_lines() {
        let reply = "1. Topic A\n   \n\t\n2. Topic B";
        assert_eq!(parse_suggestions(reply), vec!["Topic A", "Topic B"]);
    }

    #[test]
    fn test_parse_tolerates_crlf() {
        let reply = "1. Topic A\r\n2. Topic B\r\n";
        assert_eq!(parse_suggestions(reply), vec!["Topic A", "Topic B"]);
    }

    #[test]
    fn test_parse_preserves_order() {
        let reply = "3. Third\n1. First\n2. Second";
        assert_eq!(parse_suggestions(reply), vec!["Third", "First", "Second"]);
    }

    #[test]
    fn test_parse_empty_reply_yields_no_suggestions() {
        assert!(parse_suggestions("").is_empty());
        assert!(parse_suggestions("\n\n").is_empty());
        // A line that is only an ordinal has no topic left after stripping
        assert!(parse_suggestions("1.\n2. ").is_empty());
    }

    #[test]
    fn test_ordinal_is_only_stripped_at_line_start() {
        let reply = "Topic about 3. things";
        assert_eq!(parse_suggestions(reply), vec!["Topic about 3. things"]);
    }

    #[test]
    fn test_prompt_embeds_keywords_verbatim() {
        let prompt = build_prompt("rust, async runtimes, \"quoted\"");
        assert!(prompt.contains("\"rust, async runtimes, \"quoted\"\""));
        assert!(prompt.contains("suggest 5"));
        assert!(prompt.contains("numbered list"));
    }
}
