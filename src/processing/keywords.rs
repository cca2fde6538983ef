//! Keyword extraction from normalized job description text

use crate::config::{KeywordConfig, DEFAULT_KNOWN_PHRASES};
use crate::error::{Result, ResumeMatcherError};
use crate::processing::normalizer::{normalize, NormalizedText};
use aho_corasick::AhoCorasick;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordered list of multi-word phrases that are kept together as one keyword.
///
/// Entries are normalized on construction, empty ones are dropped and repeats
/// collapse onto their first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Vec<String>,
}

impl PhraseList {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let phrases = phrases
            .into_iter()
            .map(|p| normalize(p.as_ref()).into_string())
            .filter(|p| !p.is_empty())
            .filter(|p| seen.insert(p.clone()))
            .collect();

        Self { phrases }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(|p| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl Default for PhraseList {
    fn default() -> Self {
        Self::new(DEFAULT_KNOWN_PHRASES)
    }
}

/// Deduplicated keywords, always iterated in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|k| k.as_str())
    }

    pub fn to_sorted_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

pub struct KeywordExtractor {
    phrases: PhraseList,
    phrase_matcher: Option<AhoCorasick>,
    min_token_length: usize,
}

impl KeywordExtractor {
    pub fn new(phrases: PhraseList, min_token_length: usize) -> Result<Self> {
        let phrase_matcher = if phrases.is_empty() {
            None
        } else {
            let patterns: Vec<&str> = phrases.iter().collect();
            let matcher = AhoCorasick::new(&patterns)
                .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to build phrase matcher: {}", e)))?;
            Some(matcher)
        };

        Ok(Self {
            phrases,
            phrase_matcher,
            min_token_length,
        })
    }

    pub fn from_config(config: &KeywordConfig) -> Result<Self> {
        Self::new(PhraseList::new(&config.known_phrases), config.min_token_length)
    }

    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    /// Known phrases occurring anywhere in `text`, in phrase-list order.
    ///
    /// Each phrase is tested on its own, so overlapping phrases are all reported.
    pub fn find_phrases(&self, text: &str) -> Vec<&str> {
        let Some(matcher) = &self.phrase_matcher else {
            return Vec::new();
        };

        let mut found = vec![false; self.phrases.len()];
        for mat in matcher.find_overlapping_iter(text) {
            found[mat.pattern().as_usize()] = true;
        }

        self.phrases
            .iter()
            .zip(found)
            .filter_map(|(phrase, hit)| hit.then_some(phrase))
            .collect()
    }

    /// Extract the keyword set of a normalized job description.
    ///
    /// Only the first occurrence of each found phrase is cut out before splitting,
    /// so a phrase repeated later in the text still yields its component words.
    pub fn extract(&self, job_text: &NormalizedText) -> KeywordSet {
        let text = job_text.as_str();
        let found = self.find_phrases(text);

        let mut working = text.to_string();
        for phrase in &found {
            working = working.replacen(*phrase, " ", 1);
        }

        let mut keywords: BTreeSet<String> = working
            .split(' ')
            .filter(|token| token.len() > self.min_token_length)
            .map(str::to_string)
            .collect();
        keywords.extend(found.iter().map(|p| p.to_string()));

        debug!(
            "Extracted {} keywords ({} known phrases) from job description",
            keywords.len(),
            found.len()
        );

        KeywordSet(keywords)
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::from_config(&KeywordConfig::default()).expect("Failed to create default keyword extractor")
    }
}
