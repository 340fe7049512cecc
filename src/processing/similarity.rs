//! TF-IDF cosine similarity between two texts
//!
//! The vector space is built from exactly the two input documents: the
//! vocabulary is the union of their terms and document frequency is counted
//! over that two-document corpus. Weighting follows the usual vectorizer
//! defaults (raw counts, smoothed IDF, L2 norm), so the score matches what a
//! stock TF-IDF + cosine routine reports.

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

pub struct SimilarityScorer {
    token_regex: Regex,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityScorer {
    pub fn new() -> Self {
        // Tokens of two or more word characters
        let token_regex = Regex::new(r"\b\w\w+\b").expect("Invalid token regex");
        Self { token_regex }
    }

    /// Match score in `[0, 100]`, rounded to one decimal.
    pub fn calculate_similarity(&self, text1: &str, text2: &str) -> f64 {
        let counts1 = self.term_counts(text1);
        let counts2 = self.term_counts(text2);
        if counts1.is_empty() || counts2.is_empty() {
            return 0.0;
        }

        let vocabulary: BTreeSet<&str> = counts1.keys().chain(counts2.keys()).map(String::as_str).collect();
        let corpus_size = 2.0_f64;

        let mut vec1 = Vec::with_capacity(vocabulary.len());
        let mut vec2 = Vec::with_capacity(vocabulary.len());
        for term in vocabulary {
            let tf1 = counts1.get(term).copied().unwrap_or(0) as f64;
            let tf2 = counts2.get(term).copied().unwrap_or(0) as f64;
            let df = (tf1 > 0.0) as u8 as f64 + (tf2 > 0.0) as u8 as f64;
            let idf = ((1.0 + corpus_size) / (1.0 + df)).ln() + 1.0;
            vec1.push(tf1 * idf);
            vec2.push(tf2 * idf);
        }

        to_score(cosine_similarity(&vec1, &vec2))
    }

    fn term_counts(&self, text: &str) -> BTreeMap<String, usize> {
        let lowered = text.to_lowercase();
        let mut counts = BTreeMap::new();
        for token in self.token_regex.find_iter(&lowered) {
            *counts.entry(token.as_str().to_string()).or_insert(0) += 1;
        }
        counts
    }
}

/// Cosine of two equal-length weight vectors; 0.0 when either has zero norm
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

fn to_score(cosine: f64) -> f64 {
    let score = (cosine * 100.0 * 10.0).round() / 10.0;
    score.clamp(0.0, 100.0)
}
