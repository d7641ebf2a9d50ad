use crate::utils::pluralize;
use leptos::prelude::*;

/// Single user-facing message for all remote failures; the original error
/// is only ever logged.
const GENERIC_ERROR: &str = "Could not generate topics right now. Please try again.";

/// Inline validation message for an empty keyword field
const EMPTY_KEYWORDS_ERROR: &str = "Please enter some keywords first.";

#[server]
pub async fn generate_topics(keywords: String) -> Result<Vec<String>, ServerFnError> {
    use crate::server::{ai, state};
    use std::time::Instant;

    let client = state::client().map_err(|_| ServerFnError::new("Service not configured"))?;

    let start = Instant::now();
    let result = ai::generate_topics(client, &keywords).await;
    let duration_ms = start.elapsed().as_millis();

    match &result {
        Ok(topics) => {
            tracing::info!(
                keywords = %keywords,
                topics = topics.len(),
                duration_ms = %duration_ms,
                "Topic generation completed"
            );
        }
        Err(e) => {
            tracing::error!(
                keywords = %keywords,
                error = %e,
                duration_ms = %duration_ms,
                "Topic generation failed"
            );
        }
    }

    result.map_err(|_| ServerFnError::new("Topic generation failed"))
}

/// Trimmed keyword text, or `None` when nothing submittable was entered
fn normalized_keywords(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn Home() -> impl IntoView {
    let (keywords, set_keywords) = signal(String::new());
    let (suggestions, set_suggestions) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    // Shared submission path for the form, the Enter key, and the example
    // chips. A second submission while a request is in flight is a no-op.
    let submit = move |input: String| {
        if loading.get() {
            return;
        }

        let Some(trimmed) = normalized_keywords(&input) else {
            set_error.set(Some(EMPTY_KEYWORDS_ERROR.to_string()));
            return;
        };

        set_loading.set(true);
        set_error.set(None);
        set_suggestions.set(Vec::new());

        leptos::task::spawn_local(async move {
            match generate_topics(trimmed).await {
                Ok(topics) => {
                    set_suggestions.set(topics);
                    set_error.set(None);
                }
                Err(e) => {
                    set_error.set(Some(GENERIC_ERROR.to_string()));
                    leptos::logging::error!("API error: {}", e);
                }
            }
            set_loading.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit(keywords.get());
    };

    // Handle Enter key (Shift+Enter for new line)
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit(keywords.get());
        }
    };

    // Execute example keywords directly
    let run_example = move |text: &'static str| {
        set_keywords.set(text.to_string());
        submit(text.to_string());
    };

    view! {
        <div class="home-container">
            <header class="hero">
                <h1>"Muse"</h1>
                <p class="tagline">
                    "Enter a few keywords and get five engaging, ready-to-use topic ideas."
                </p>
            </header>

            <form class="keyword-form" on:submit=on_submit>
                <label class="keyword-label" for="keywords">"Your keywords:"</label>
                <textarea
                    id="keywords"
                    class="keyword-input"
                    placeholder="e.g. artificial intelligence, machine learning, the future of technology"
                    rows="4"
                    prop:value=keywords
                    on:input=move |ev| {
                        set_keywords.set(event_target_value(&ev));
                        // Editing dismisses a shown error; an in-flight
                        // request keeps running
                        if error.get_untracked().is_some() {
                            set_error.set(None);
                        }
                    }
                    on:keydown=on_keydown
                />

                <button type="submit" class="submit-button" prop:disabled=loading>
                    {move || if loading.get() { "Generating topics..." } else { "Suggest topics" }}
                </button>
            </form>

            {move || (suggestions.get().is_empty() && !loading.get()).then(|| view! {
                <section class="examples">
                    <h3>"Try one of these:"</h3>
                    <div class="example-keywords">
                        <ExampleKeywords text="space exploration, photography" on_click=run_example/>
                        <ExampleKeywords text="healthy cooking on a budget" on_click=run_example/>
                        <ExampleKeywords text="rust, web development, wasm" on_click=run_example/>
                    </div>
                </section>
            })}

            {move || error.get().map(|err| view! {
                <div class="error-message" role="alert">
                    <span class="icon">"⚠️"</span>
                    <span>{err}</span>
                </div>
            })}

            {move || {
                let topics = suggestions.get();
                (!topics.is_empty()).then(move || {
                    let count = topics.len();
                    let items: Vec<(usize, String)> = topics.into_iter().enumerate().collect();

                    view! {
                        <section class="results">
                            <h2 class="results-title">
                                "Found " {count} " " {pluralize(count, "topic", "topics")}
                            </h2>
                            <ol class="topic-list">
                                <For
                                    each=move || items.clone()
                                    key=|(i, _)| *i
                                    children=move |(_, topic)| view! {
                                        <li class="topic">{topic}</li>
                                    }
                                />
                            </ol>
                        </section>
                    }
                })
            }}
        </div>
    }
}

#[component]
fn ExampleKeywords(
    text: &'static str,
    on_click: impl Fn(&'static str) + Copy + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="example-chip"
            on:click=move |_| on_click(text)
        >
            <span class="text">{text}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::normalized_keywords;

    #[test]
    fn test_empty_input_is_not_submittable() {
        assert_eq!(normalized_keywords(""), None);
        assert_eq!(normalized_keywords("   "), None);
        assert_eq!(normalized_keywords("\n\t  \n"), None);
    }

    #[test]
    fn test_keywords_are_trimmed_before_submission() {
        assert_eq!(
            normalized_keywords("  rust, async  ").as_deref(),
            Some("rust, async")
        );
    }

    #[test]
    fn test_inner_whitespace_is_preserved() {
        assert_eq!(
            normalized_keywords("machine learning,\nphotography").as_deref(),
            Some("machine learning,\nphotography")
        );
    }
}
