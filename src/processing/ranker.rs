//! Batch ranking of resumes against one job description

use crate::input::manager::{Document, InputManager};
use crate::processing::analyzer::{AnalysisResult, ResumeAnalyzer};
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};
use std::path::Path;

/// A supported document that could not be read
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedDocument {
    pub name: String,
    pub reason: String,
}

/// Results in descending match-score order; ties keep input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedBatch {
    pub results: Vec<AnalysisResult>,
    pub skipped: Vec<SkippedDocument>,
}

impl RankedBatch {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, resume: &str) -> Option<&AnalysisResult> {
        self.results.iter().find(|r| r.resume == resume)
    }
}

enum Outcome {
    Analyzed(AnalysisResult),
    Skipped(SkippedDocument),
}

pub struct BatchRanker {
    analyzer: ResumeAnalyzer,
    input: InputManager,
    max_concurrency: usize,
}

impl BatchRanker {
    pub fn new(analyzer: ResumeAnalyzer, max_concurrency: usize) -> Self {
        Self {
            analyzer,
            input: InputManager::new(),
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Analyse every supported document and sort by match score.
    ///
    /// Unsupported extensions are dropped without trace in the output;
    /// unreadable documents are reported in `skipped`.
    pub async fn rank<P: AsRef<Path>>(&self, paths: &[P], job_description: &str) -> RankedBatch {
        let documents: Vec<Document> = paths
            .iter()
            .filter_map(|path| {
                let path = path.as_ref();
                let document = Document::from_path(path);
                if document.is_none() {
                    debug!("Skipping unsupported file: {}", path.display());
                }
                document
            })
            .collect();

        info!(
            "Ranking {} resume(s) with up to {} in flight",
            documents.len(),
            self.max_concurrency
        );

        // `buffered` yields in input order, which keeps the final sort stable
        let pending: Vec<_> = documents
            .iter()
            .map(|document| self.process(document, job_description))
            .collect();
        let outcomes: Vec<Outcome> = stream::iter(pending)
            .buffered(self.max_concurrency)
            .collect()
            .await;

        let mut batch = RankedBatch::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Analyzed(result) => batch.results.push(result),
                Outcome::Skipped(skipped) => batch.skipped.push(skipped),
            }
        }
        sort_by_score(&mut batch.results);

        info!(
            "Ranked {} resume(s), skipped {}",
            batch.results.len(),
            batch.skipped.len()
        );
        batch
    }

    async fn process(&self, document: &Document, job_description: &str) -> Outcome {
        match self.input.extract_text(document).await {
            Ok(text) => {
                let analysis = self.analyzer.analyze(&text, job_description).await;
                info!("{}: match score {:.1}%", document.name, analysis.match_score);
                Outcome::Analyzed(AnalysisResult::new(document.name.clone(), analysis))
            }
            Err(e) => {
                warn!("Skipping {}: {}", document.name, e);
                Outcome::Skipped(SkippedDocument {
                    name: document.name.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Stable sort, highest score first
pub fn sort_by_score(results: &mut [AnalysisResult]) {
    results.sort_by(|a, b| b.match_score().total_cmp(&a.match_score()));
}
