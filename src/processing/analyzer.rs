//! Per-resume analysis: score, keyword gap, suggestions and advice

use crate::config::ProcessingConfig;
use crate::llm::advisor::{advice_failure, suggestion_failure, AdviceGenerator};
use crate::llm::client::CompletionClient;
use crate::processing::keywords::{KeywordExtractor, KeywordSet, StopWords};
use crate::processing::similarity::SimilarityScorer;
use log::{debug, warn};
use std::sync::Arc;

/// Result of analysing one resume, before the caller attaches its name
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeAnalysis {
    /// TF-IDF cosine score, 0.0 to 100.0 with one decimal
    pub match_score: f64,
    pub resume_keywords: KeywordSet,
    pub job_keywords: KeywordSet,
    /// `job_keywords - resume_keywords`
    pub missing_keywords: KeywordSet,
    /// At most ten entries, or a single warning placeholder
    pub suggested_keywords: Vec<String>,
    /// Model advice, or a warning placeholder
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub resume: String,
    pub analysis: ResumeAnalysis,
}

impl AnalysisResult {
    pub fn new(resume: impl Into<String>, analysis: ResumeAnalysis) -> Self {
        Self {
            resume: resume.into(),
            analysis,
        }
    }

    pub fn match_score(&self) -> f64 {
        self.analysis.match_score
    }
}

pub struct ResumeAnalyzer {
    keyword_extractor: KeywordExtractor,
    scorer: SimilarityScorer,
    advisor: AdviceGenerator,
    num_keywords: usize,
}

impl ResumeAnalyzer {
    pub fn new(stop_words: Arc<StopWords>, client: Arc<dyn CompletionClient>, processing: &ProcessingConfig) -> Self {
        Self {
            keyword_extractor: KeywordExtractor::new(stop_words),
            scorer: SimilarityScorer::new(),
            advisor: AdviceGenerator::new(client, processing.max_suggestions),
            num_keywords: processing.num_keywords,
        }
    }

    /// Analyse one resume against the job description.
    ///
    /// Never fails: model errors degrade the suggestion and advice fields only.
    pub async fn analyze(&self, resume_text: &str, job_description: &str) -> ResumeAnalysis {
        let resume_keywords = self.keyword_extractor.extract_keywords(resume_text, self.num_keywords);
        let job_keywords = self.keyword_extractor.extract_keywords(job_description, self.num_keywords);

        let match_score = self.scorer.calculate_similarity(resume_text, job_description);
        let missing_keywords = job_keywords.difference(&resume_keywords);
        debug!(
            "Match score {:.1}, {} of {} job keywords missing",
            match_score,
            missing_keywords.len(),
            job_keywords.len()
        );

        let (suggestions, advice) = tokio::join!(
            self.advisor.suggest_keywords(&missing_keywords, &resume_keywords),
            self.advisor.generate_advice(resume_text, job_description),
        );

        let suggested_keywords = suggestions.unwrap_or_else(|e| {
            warn!("Keyword suggestions unavailable: {}", e);
            suggestion_failure(&e)
        });
        let advice = advice.unwrap_or_else(|e| {
            warn!("Advice unavailable: {}", e);
            advice_failure(&e)
        });

        ResumeAnalysis {
            match_score,
            resume_keywords,
            job_keywords,
            missing_keywords,
            suggested_keywords,
            advice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::advisor::{ADVICE_ERROR_PREFIX, SUGGESTION_ERROR_PREFIX};
    use crate::llm::client::LlmError;
    use async_trait::async_trait;

    struct EchoClient;

    #[async_trait]
    impl CompletionClient for EchoClient {
        async fn complete(&self, prompt: &str) -> Result<Option<String>, LlmError> {
            if prompt.starts_with("Missing Keywords") {
                Ok(Some("**Django** and **PostgreSQL**".to_string()))
            } else {
                Ok(Some("Quantify your impact.".to_string()))
            }
        }

        fn model(&self) -> &str {
            "echo"
        }
    }

    struct DownClient;

    #[async_trait]
    impl CompletionClient for DownClient {
        async fn complete(&self, _prompt: &str) -> Result<Option<String>, LlmError> {
            Err(LlmError::MissingApiKey)
        }

        fn model(&self) -> &str {
            "down"
        }
    }

    fn analyzer(client: Arc<dyn CompletionClient>) -> ResumeAnalyzer {
        ResumeAnalyzer::new(Arc::new(StopWords::english()), client, &ProcessingConfig::default())
    }

    #[tokio::test]
    async fn test_identical_texts() {
        let analysis = analyzer(Arc::new(EchoClient)).analyze("Python Java SQL", "Python Java SQL").await;

        assert_eq!(analysis.match_score, 100.0);
        assert!(analysis.missing_keywords.is_empty());
        assert!(analysis.suggested_keywords.is_empty());
        assert_eq!(analysis.advice, "Quantify your impact.");
    }

    #[tokio::test]
    async fn test_disjoint_texts() {
        let analysis = analyzer(Arc::new(EchoClient)).analyze("Java", "Python SQL").await;

        assert_eq!(analysis.match_score, 0.0);
        assert_eq!(analysis.missing_keywords.as_slice(), &["python", "sql"]);
        assert_eq!(analysis.suggested_keywords, vec!["Django", "PostgreSQL"]);
    }

    #[tokio::test]
    async fn test_missing_is_set_difference() {
        let resume = "Rust engineer. Built Kafka pipelines and Postgres services in Rust on AWS.";
        let job = "We want a Rust engineer who knows Kafka, Kubernetes, Terraform and AWS. Kubernetes daily.";
        let analysis = analyzer(Arc::new(EchoClient)).analyze(resume, job).await;

        for keyword in analysis.job_keywords.iter() {
            let in_missing = analysis.missing_keywords.contains(keyword);
            assert_eq!(in_missing, !analysis.resume_keywords.contains(keyword));
        }
        assert!(analysis.missing_keywords.iter().all(|k| analysis.job_keywords.contains(k)));
        assert!(analysis.missing_keywords.contains("kubernetes"));
        assert!(!analysis.missing_keywords.contains("rust"));
    }

    #[tokio::test]
    async fn test_service_failure_degrades_fields() {
        let analyzer = analyzer(Arc::new(DownClient));

        let analysis = analyzer.analyze("Java", "Python SQL").await;
        assert_eq!(analysis.suggested_keywords.len(), 1);
        assert!(analysis.suggested_keywords[0].starts_with(SUGGESTION_ERROR_PREFIX));
        assert!(analysis.advice.starts_with(ADVICE_ERROR_PREFIX));
        assert_eq!(analysis.match_score, 0.0);

        // nothing missing: suggestions short-circuit even though the service is down
        let analysis = analyzer.analyze("Python SQL", "Python SQL").await;
        assert!(analysis.suggested_keywords.is_empty());
        assert!(analysis.advice.starts_with(ADVICE_ERROR_PREFIX));
    }
}
