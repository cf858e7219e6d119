//! Weighted n-gram vectorization (TF-IDF)

use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Common English words excluded from the feature space. Fixed and
/// English-only; stop-word handling is not locale-aware.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "you", "your", "yours", "yourself",
    "yourselves",
];

/// An immutable mapping from n-gram term to feature index and inverse
/// document frequency, learned once from the training corpus. Shared
/// read-only by every inference call after fitting.
#[derive(Debug, Clone)]
pub struct FittedVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    ngram_max: usize,
}

impl FittedVectorizer {
    /// Learns the feature space from the corpus texts.
    ///
    /// Features are n-grams of length 1..=`ngram_max` over lowercased,
    /// stop-word-filtered tokens. When the corpus vocabulary exceeds
    /// `max_features`, the most frequent terms are kept; ties break
    /// lexicographically so repeated fits over the same corpus always
    /// produce the same feature space.
    pub fn fit(texts: &[String], ngram_max: usize, max_features: usize) -> Self {
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        let mut corpus_frequency: HashMap<String, usize> = HashMap::new();

        for text in texts {
            let terms = ngrams(&tokenize(text), ngram_max);
            let unique: HashSet<&String> = terms.iter().collect();
            for term in &unique {
                *document_frequency.entry((*term).clone()).or_insert(0) += 1;
            }
            for term in &terms {
                *corpus_frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }

        // Cap the feature space deterministically: highest corpus frequency
        // first, lexicographic order as the tie-breaker
        let mut ranked: Vec<(String, usize)> = corpus_frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_features);

        // Indices are assigned in lexicographic term order
        let mut terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort();

        let n_documents = texts.len() as f64;
        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (idx, term) in terms.into_iter().enumerate() {
            let df = document_frequency.get(&term).copied().unwrap_or(0) as f64;
            // Smoothed IDF keeps terms present in every document from
            // dominating and never divides by zero
            idf.push(((1.0 + n_documents) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        Self {
            vocabulary,
            idf,
            ngram_max,
        }
    }

    /// Maps text into the fixed feature space established at fit time.
    /// Terms absent from the learned vocabulary are ignored.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.vocabulary.len()];
        for term in ngrams(&tokenize(text), self.ngram_max) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                features[idx] += 1.0;
            }
        }

        for (idx, value) in features.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        // L2 normalization so document length does not dominate
        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        features
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature terms in index order, mainly for inspection and tests.
    pub fn terms(&self) -> Vec<String> {
        let mut terms: Vec<(usize, String)> = self
            .vocabulary
            .iter()
            .map(|(term, &idx)| (idx, term.clone()))
            .collect();
        terms.sort();
        terms.into_iter().map(|(_, term)| term).collect()
    }
}

/// Lowercased word tokens with stop words and single characters removed
fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(|word| word.to_lowercase())
        .filter(|word| word.chars().count() > 1 && !STOP_WORDS.contains(&word.as_str()))
        .collect()
}

/// All contiguous n-grams of length 1..=max, joined with single spaces
fn ngrams(tokens: &[String], max: usize) -> Vec<String> {
    let mut terms = Vec::new();
    for n in 1..=max {
        if n > tokens.len() {
            break;
        }
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}
