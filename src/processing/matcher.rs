//! Whole-word keyword matching against a normalized resume

use crate::processing::keywords::KeywordSet;
use crate::processing::normalizer::{normalize, NormalizedText};
use log::debug;
use serde::{Deserialize, Serialize};

/// Keywords split into those found in the resume and those that are not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub present: KeywordSet,
    pub missing: KeywordSet,
}

impl MatchResult {
    pub fn present_count(&self) -> usize {
        self.present.len()
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub fn total(&self) -> usize {
        self.present.len() + self.missing.len()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// True when `needle` occurs in `haystack` with no letter or digit directly
/// before or after it.
///
/// `+`, `#` and spaces all count as edges, so `c++` is found in "c++ and rust"
/// but not in "c++11", and `css` is found in "html+css".
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();

        let clear_before = haystack[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
        let clear_after = haystack[end..].chars().next().map_or(true, |c| !is_word_char(c));
        if clear_before && clear_after {
            return true;
        }

        // Step one character so overlapping occurrences are still tried.
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }

    false
}

pub struct KeywordMatcher {
    resume: NormalizedText,
}

impl KeywordMatcher {
    pub fn new(resume: &NormalizedText) -> Self {
        Self { resume: resume.clone() }
    }

    /// Whether `keyword` appears in the resume as a whole word or phrase.
    /// The keyword is normalized first, so raw input still matches case-insensitively.
    pub fn is_present(&self, keyword: &str) -> bool {
        contains_word(self.resume.as_str(), normalize(keyword).as_str())
    }

    pub fn classify(&self, keywords: &KeywordSet) -> MatchResult {
        let (present, missing): (Vec<&str>, Vec<&str>) = keywords.iter().partition(|k| self.is_present(k));

        debug!(
            "Matched {} of {} keywords against {} resume words",
            present.len(),
            keywords.len(),
            self.resume.tokens().count()
        );

        MatchResult {
            present: present.into_iter().collect(),
            missing: missing.into_iter().collect(),
        }
    }
}

/// Partition `keywords` by whole-word presence in `resume`.
pub fn match_keywords(resume: &NormalizedText, keywords: &KeywordSet) -> MatchResult {
    KeywordMatcher::new(resume).classify(keywords)
}
