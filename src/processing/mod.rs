//! Text processing and analysis module

pub mod keywords;
pub mod similarity;
pub mod analyzer;
pub mod ranker;

pub use analyzer::{AnalysisResult, ResumeAnalysis, ResumeAnalyzer};
pub use keywords::{KeywordExtractor, KeywordSet, StopWords};
pub use ranker::{BatchRanker, RankedBatch, SkippedDocument};
pub use similarity::SimilarityScorer;
