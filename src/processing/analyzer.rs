//! End-to-end keyword analysis: normalize, extract, match, score

use crate::config::KeywordConfig;
use crate::error::Result;
use crate::processing::keywords::{KeywordExtractor, KeywordSet};
use crate::processing::matcher::{match_keywords, MatchResult};
use crate::processing::normalizer::normalize;
use crate::processing::scorer::{score_report, ScoreReport};
use log::debug;
use serde::{Deserialize, Serialize};

/// Outcome of one resume / job description comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub keywords: KeywordSet,
    pub matches: MatchResult,
    pub summary: ScoreReport,
}

pub struct Analyzer {
    extractor: KeywordExtractor,
}

impl Analyzer {
    pub fn new(config: &KeywordConfig) -> Result<Self> {
        Ok(Self {
            extractor: KeywordExtractor::from_config(config)?,
        })
    }

    pub fn with_extractor(extractor: KeywordExtractor) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    pub fn keywords(&self, job_text: &str) -> KeywordSet {
        self.extractor.extract(&normalize(job_text))
    }

    pub fn analyze(&self, resume_text: &str, job_text: &str) -> Analysis {
        let resume = normalize(resume_text);
        let job = normalize(job_text);
        debug!(
            "Normalized resume to {} chars, job description to {} chars",
            resume.as_str().len(),
            job.as_str().len()
        );

        let keywords = self.extractor.extract(&job);
        let matches = match_keywords(&resume, &keywords);
        let summary = score_report(&matches);

        Analysis {
            keywords,
            matches,
            summary,
        }
    }
}

/// One-shot analysis with a freshly built extractor.
pub fn analyze(resume_text: &str, job_text: &str, config: &KeywordConfig) -> Result<Analysis> {
    Ok(Analyzer::new(config)?.analyze(resume_text, job_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_scenario() {
        let analysis = analyze(
            "I have experience with machine learning",
            "Experience with SQL Server and machine learning required.",
            &KeywordConfig::default(),
        )
        .unwrap();

        assert_eq!(analysis.keywords.len(), 6);
        assert_eq!(analysis.summary.present_count, 3);
        assert_eq!(analysis.summary.missing_count, 3);
        assert_eq!(analysis.summary.score, 50.0);
        assert!(analysis.matches.missing.contains("sql server"));
    }

    #[test]
    fn test_empty_job_description_scores_zero() {
        let analysis = analyze("Rust developer", "", &KeywordConfig::default()).unwrap();
        assert!(analysis.keywords.is_empty());
        assert_eq!(analysis.summary.total_keywords, 0);
        assert_eq!(analysis.summary.score, 0.0);
    }

    #[test]
    fn test_perfect_match() {
        let analysis = analyze(
            "Senior C++ engineer. Deep learning, data analysis.",
            "C++ deep learning data analysis",
            &KeywordConfig::default(),
        )
        .unwrap();

        assert!(analysis.matches.missing.is_empty());
        assert_eq!(analysis.summary.score, 100.0);
    }

    #[test]
    fn test_analyzer_is_reusable() {
        let analyzer = Analyzer::new(&KeywordConfig::default()).unwrap();
        let first = analyzer.analyze("python", "python rust");
        let second = analyzer.analyze("python", "python rust");
        assert_eq!(first, second);
        assert_eq!(first.summary.score, 50.0);
    }

    #[test]
    fn test_custom_phrases() {
        let config = KeywordConfig {
            known_phrases: vec!["Distributed Systems".to_string()],
            min_token_length: 2,
        };
        let analysis = analyze(
            "Built distributed systems at scale",
            "Distributed systems experience",
            &config,
        )
        .unwrap();

        assert!(analysis.matches.present.contains("distributed systems"));
        assert!(analysis.matches.missing.contains("experience"));
    }
}
