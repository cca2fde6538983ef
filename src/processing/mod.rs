//! Keyword matching pipeline

pub mod normalizer;
pub mod keywords;
pub mod matcher;
pub mod scorer;
pub mod analyzer;

pub use analyzer::{analyze, Analysis, Analyzer};
pub use keywords::{KeywordExtractor, KeywordSet, PhraseList};
pub use matcher::{contains_word, match_keywords, MatchResult};
pub use normalizer::{normalize, NormalizedText};
pub use scorer::{score, ScoreReport};
