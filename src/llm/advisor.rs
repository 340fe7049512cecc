//! Advice generation: keyword suggestions and free-text resume advice

use crate::llm::client::{CompletionClient, LlmError};
use crate::llm::prompts::PromptTemplates;
use crate::processing::keywords::KeywordSet;
use log::{debug, info};
use regex::Regex;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

pub const SUGGESTION_ERROR_PREFIX: &str = "⚠️ Error generating suggestions: ";
pub const ADVICE_ERROR_PREFIX: &str = "⚠️ Unable to generate advice: ";
pub const NO_ADVICE: &str = "No advice generated.";

pub struct AdviceGenerator {
    client: Arc<dyn CompletionClient>,
    templates: PromptTemplates,
    max_suggestions: usize,
}

impl AdviceGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, max_suggestions: usize) -> Self {
        Self {
            client,
            templates: PromptTemplates::default(),
            max_suggestions,
        }
    }

    /// Ask the model for keywords covering the gap.
    ///
    /// An empty `missing_keywords` set returns an empty list without a call.
    pub async fn suggest_keywords(
        &self,
        missing_keywords: &KeywordSet,
        resume_keywords: &KeywordSet,
    ) -> Result<Vec<String>, LlmError> {
        if missing_keywords.is_empty() {
            debug!("No missing keywords, skipping suggestion request");
            return Ok(Vec::new());
        }

        let prompt = self
            .templates
            .render_keyword_suggestions(missing_keywords.as_slice(), resume_keywords.as_slice());
        info!("Requesting keyword suggestions from {}", self.client.model());

        let response = self.client.complete(&prompt).await?;
        Ok(response
            .map(|text| parse_suggested_keywords(&text, self.max_suggestions))
            .unwrap_or_default())
    }

    /// Model advice for the resume, returned verbatim.
    pub async fn generate_advice(&self, resume_text: &str, job_description: &str) -> Result<String, LlmError> {
        let prompt = self.templates.render_resume_advice(resume_text, job_description);
        info!("Requesting resume advice from {}", self.client.model());

        let response = self.client.complete(&prompt).await?;
        Ok(response.unwrap_or_else(|| NO_ADVICE.to_string()))
    }
}

/// Placeholder list shown when suggestions could not be generated
pub fn suggestion_failure(err: &LlmError) -> Vec<String> {
    vec![format!("{}{}", SUGGESTION_ERROR_PREFIX, err)]
}

/// Placeholder text shown when advice could not be generated
pub fn advice_failure(err: &LlmError) -> String {
    format!("{}{}", ADVICE_ERROR_PREFIX, err)
}

/// Pull keywords out of a free-form model response.
///
/// Bold spans (`**like this**`) win; without any, every word-like token is a
/// candidate. The first `limit` candidates are kept, then deduplicated.
pub fn parse_suggested_keywords(response: &str, limit: usize) -> Vec<String> {
    static EMPHASIS: OnceLock<Regex> = OnceLock::new();
    static WORD: OnceLock<Regex> = OnceLock::new();
    let emphasis = EMPHASIS.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid emphasis regex"));
    let word = WORD.get_or_init(|| Regex::new(r"\b[A-Za-z0-9_-]+\b").expect("Invalid word regex"));

    let mut candidates: Vec<&str> = emphasis
        .captures_iter(response)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect();
    if candidates.is_empty() {
        candidates = word.find_iter(response).map(|m| m.as_str()).collect();
    }

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .take(limit)
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.to_string()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedClient {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CompletionClient for FixedClient {
        async fn complete(&self, _prompt: &str) -> Result<Option<String>, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }

        fn model(&self) -> &str {
            "fixed"
        }
    }

    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        async fn complete(&self, _prompt: &str) -> Result<Option<String>, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        }

        fn model(&self) -> &str {
            "failing"
        }
    }

    fn keywords(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_parse_emphasized_spans() {
        let response = "Consider adding **Docker**, **Kubernetes** and **CI/CD**. Also **Docker** again.";
        assert_eq!(parse_suggested_keywords(response, 10), vec!["Docker", "Kubernetes", "CI/CD"]);
    }

    #[test]
    fn test_parse_falls_back_to_words() {
        let response = "docker, kubernetes; ci-cd docker";
        assert_eq!(parse_suggested_keywords(response, 10), vec!["docker", "kubernetes", "ci-cd"]);
    }

    #[test]
    fn test_parse_caps_candidates() {
        let response = (1..=15).map(|i| format!("**k{}**", i)).collect::<Vec<_>>().join(" ");
        let parsed = parse_suggested_keywords(&response, 10);
        assert_eq!(parsed.len(), 10);
        assert_eq!(parsed[0], "k1");
        assert_eq!(parsed[9], "k10");
    }

    #[test]
    fn test_parse_empty_response() {
        assert!(parse_suggested_keywords("", 10).is_empty());
        assert!(parse_suggested_keywords("** **", 10).is_empty());
    }

    #[tokio::test]
    async fn test_empty_missing_set_skips_call() {
        let client = Arc::new(FixedClient {
            reply: Some("**x**".to_string()),
            calls: AtomicUsize::new(0),
        });
        let advisor = AdviceGenerator::new(client.clone(), 10);

        let suggestions = advisor.suggest_keywords(&KeywordSet::new(), &keywords(&["java"])).await.unwrap();
        assert!(suggestions.is_empty());
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_suggestions_and_advice() {
        let client = Arc::new(FixedClient {
            reply: Some("Add **Python** and **SQL**".to_string()),
            calls: AtomicUsize::new(0),
        });
        let advisor = AdviceGenerator::new(client.clone(), 10);

        let suggestions = advisor
            .suggest_keywords(&keywords(&["python", "sql"]), &keywords(&["java"]))
            .await
            .unwrap();
        assert_eq!(suggestions, vec!["Python", "SQL"]);

        let advice = advisor.generate_advice("Java", "Python SQL").await.unwrap();
        assert_eq!(advice, "Add **Python** and **SQL**");
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_replies() {
        let client = Arc::new(FixedClient {
            reply: None,
            calls: AtomicUsize::new(0),
        });
        let advisor = AdviceGenerator::new(client, 10);

        let suggestions = advisor.suggest_keywords(&keywords(&["go"]), &KeywordSet::new()).await.unwrap();
        assert!(suggestions.is_empty());
        assert_eq!(advisor.generate_advice("a", "b").await.unwrap(), NO_ADVICE);
    }

    #[tokio::test]
    async fn test_failures_become_placeholders() {
        let advisor = AdviceGenerator::new(Arc::new(FailingClient), 10);

        let err = advisor.suggest_keywords(&keywords(&["go"]), &KeywordSet::new()).await.unwrap_err();
        let placeholder = suggestion_failure(&err);
        assert_eq!(placeholder.len(), 1);
        assert!(placeholder[0].starts_with(SUGGESTION_ERROR_PREFIX));
        assert!(placeholder[0].contains("overloaded"));

        let err = advisor.generate_advice("a", "b").await.unwrap_err();
        assert!(advice_failure(&err).starts_with(ADVICE_ERROR_PREFIX));
    }
}
