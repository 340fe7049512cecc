//! Frequency-based keyword extraction

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// English stop words (NLTK list)
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing",
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each",
    "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o",
    "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't",
    "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't",
    "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Fixed stop-word set, built once at startup and shared
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOP_WORDS.iter().copied())
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Unique keywords kept in rank order (most frequent first)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Keywords of `self` absent from `other`, in `self`'s order.
    pub fn difference(&self, other: &KeywordSet) -> KeywordSet {
        self.keywords
            .iter()
            .filter(|k| !other.contains(k))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.keywords.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn join(&self, separator: &str) -> String {
        self.keywords.join(separator)
    }
}

impl FromIterator<String> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let keywords = iter.into_iter().filter(|k| seen.insert(k.clone())).collect();
        Self { keywords }
    }
}

pub struct KeywordExtractor {
    stop_words: Arc<StopWords>,
    word_regex: Regex,
}

impl KeywordExtractor {
    pub fn new(stop_words: Arc<StopWords>) -> Self {
        // Maximal runs of ASCII word characters
        let word_regex = Regex::new(r"[A-Za-z0-9_]+").expect("Invalid word regex");
        Self { stop_words, word_regex }
    }

    /// Top `num_keywords` non-stop-word tokens by frequency.
    ///
    /// Ties keep the order in which the tokens first appeared.
    pub fn extract_keywords(&self, text: &str, num_keywords: usize) -> KeywordSet {
        let lowered = text.to_lowercase();

        let mut order: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for token in self.word_regex.find_iter(&lowered).map(|m| m.as_str()) {
            if self.stop_words.contains(token) {
                continue;
            }
            match index.get(token) {
                Some(&i) => order[i].1 += 1,
                None => {
                    index.insert(token, order.len());
                    order.push((token, 1));
                }
            }
        }

        // sort_by is stable, so equal counts stay in first-seen order
        order.sort_by(|a, b| b.1.cmp(&a.1));
        order
            .into_iter()
            .take(num_keywords)
            .map(|(token, _)| token.to_string())
            .collect()
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}
