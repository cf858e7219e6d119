//! Skill keyword matching against a fixed vocabulary

use crate::error::{Result, ResumeClassifierError};
use aho_corasick::AhoCorasick;
use std::collections::HashSet;

/// Matches known skill terms as case-insensitive substrings.
///
/// This is intentionally a plain presence test: a short term embedded in a
/// longer unrelated word ("c" inside "vacation") will false-positive. The
/// vocabulary is fixed at construction and immutable afterwards, so one
/// matcher can serve any number of concurrent calls.
pub struct SkillMatcher {
    matcher: AhoCorasick,
    vocabulary: Vec<String>,
}

impl SkillMatcher {
    pub fn new(vocabulary: Vec<String>) -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&vocabulary)
            .map_err(|e| {
                ResumeClassifierError::Configuration(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self { matcher, vocabulary })
    }

    /// Returns matched terms deduplicated and ordered by vocabulary
    /// position, not by where they occur in the text. An empty result means
    /// no recognizable skills were found.
    pub fn match_skills(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        // Overlapping search so every contained term is reported, even when
        // one term sits inside another ("java" inside "javascript").
        for mat in self.matcher.find_overlapping_iter(text) {
            seen.insert(mat.pattern().as_usize());
        }

        self.vocabulary
            .iter()
            .enumerate()
            .filter(|(idx, _)| seen.contains(idx))
            .map(|(_, term)| term.clone())
            .collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
