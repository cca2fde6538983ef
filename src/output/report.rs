//! Report structures handed to the output formatters

use crate::processing::analyzer::Analysis;
use crate::processing::scorer::ScoreReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for an empty keyword list.
pub const EMPTY_LIST: &str = "(none)";

/// Everything a presentation layer needs about one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub summary: ScoreReport,
    /// All job description keywords, sorted.
    pub keywords: Vec<String>,
    pub present: Vec<String>,
    pub missing: Vec<String>,
    pub tips: Vec<String>,
    pub seniority: Seniority,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub matcher_version: String,
    pub resume_source: String,
    pub job_source: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Junior,
    #[default]
    Mid,
    Senior,
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seniority::Junior => write!(f, "junior"),
            Seniority::Mid => write!(f, "mid"),
            Seniority::Senior => write!(f, "senior"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Low,
    Decent,
    Strong,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            ScoreBand::Low
        } else if score < 70.0 {
            ScoreBand::Decent
        } else {
            ScoreBand::Strong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Low => "LOW",
            ScoreBand::Decent => "DECENT",
            ScoreBand::Strong => "STRONG",
        }
    }
}

/// Advice for the candidate, ordered: score band, missing keywords, seniority.
pub fn build_tips(score: f64, missing_count: usize, seniority: Seniority) -> Vec<String> {
    let mut tips = Vec::new();

    tips.push(match ScoreBand::from_score(score) {
        ScoreBand::Low => "Your match score is low. Re‑read the job description and add skills you actually have.",
        ScoreBand::Decent => "Your match score is decent. Try to naturally include a few more missing keywords.",
        ScoreBand::Strong => "Your match score is strong. Focus on clarity and achievements.",
    }.to_string());

    if missing_count > 0 {
        tips.push("Pick 3–5 missing keywords that genuinely describe you and add them to your bullet points.".to_string());
    }

    match seniority {
        Seniority::Junior => tips.push(
            "For junior roles, highlight projects and coursework that use these technologies.".to_string(),
        ),
        Seniority::Senior => tips.push(
            "For senior roles, emphasize leadership, ownership, and impact, not just tools.".to_string(),
        ),
        Seniority::Mid => {}
    }

    tips
}

/// Width of the score bar in percent, clamped to `[0, 100]`.
pub fn score_bar_width(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

pub fn format_keyword_list(keywords: &[String]) -> String {
    if keywords.is_empty() {
        EMPTY_LIST.to_string()
    } else {
        keywords.join(", ")
    }
}

impl ScoreReport {
    pub fn summary_line(&self) -> String {
        format!(
            "Match score: {}% · JD keywords: {} · Present: {} · Missing: {}",
            self.score, self.total_keywords, self.present_count, self.missing_count
        )
    }
}

impl MatchReport {
    pub fn from_analysis(
        analysis: &Analysis,
        seniority: Seniority,
        include_tips: bool,
        resume_source: impl Into<String>,
        job_source: impl Into<String>,
    ) -> Self {
        let tips = if include_tips {
            build_tips(analysis.summary.score, analysis.summary.missing_count, seniority)
        } else {
            Vec::new()
        };

        Self {
            summary: analysis.summary,
            keywords: analysis.keywords.to_sorted_vec(),
            present: analysis.matches.present.to_sorted_vec(),
            missing: analysis.matches.missing.to_sorted_vec(),
            tips,
            seniority,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                matcher_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_source: resume_source.into(),
                job_source: job_source.into(),
            },
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.summary.score)
    }
}
