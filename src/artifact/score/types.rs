//! Score records returned by the scoring engine

use serde::Serialize;
use std::fmt;

use crate::artifact::score::size::SizeScore;
use crate::artifact::url::Category;

/// Upper bound of every composite score
pub const MAX_SCORE: f64 = 10.0;

/// Popularity inputs echoed into the score details
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Signals {
    Model {
        downloads: u64,
        likes: u64,
        has_model_card: bool,
        pipeline_tag: String,
    },
    Dataset {
        downloads: u64,
        likes: u64,
        has_description: bool,
    },
    Code {
        stars: u64,
        forks: u64,
        has_description: bool,
        has_license: bool,
        language: String,
    },
}

/// `skip_serializing_if` predicate for flags only emitted when set
pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}

/// Breakdown attached to every [`ScoreResult`]
///
/// `size_score` is always present, whichever path produced the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreDetails {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub fallback: bool,
    #[serde(flatten)]
    pub signals: Option<Signals>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub license: String,
    pub size_score: SizeScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_factor_latency: Option<u64>,
}

impl ScoreDetails {
    /// Details carrying only a name and a size score
    pub fn new(name: impl Into<String>, size_score: SizeScore) -> Self {
        Self {
            name: name.into(),
            error: None,
            fallback: false,
            signals: None,
            license: String::new(),
            size_score,
            bus_factor: None,
            bus_factor_latency: None,
        }
    }
}

/// Composite trust score of one URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub url: String,
    pub category: Category,
    pub score: f64,
    pub max_score: f64,
    pub details: ScoreDetails,
}

impl ScoreResult {
    /// Score as a percentage of `max_score`; 0 when `max_score` is 0.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.max_score > 0.0 {
            self.score / self.max_score * 100.0
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.details.error.is_some()
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.details.fallback
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.1}/{:.1} ({:.1}%)",
            self.category,
            self.score,
            self.max_score,
            self.percentage()
        )
    }
}
