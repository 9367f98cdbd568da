//! NDJSON output records and run summaries

use serde::Serialize;
use std::fmt;

use crate::artifact::score::size::SizeScore;
use crate::artifact::score::types::{ScoreResult, Signals, is_false};
use crate::artifact::url::Category;

/// One NDJSON line per scored URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    pub url: String,
    pub name: String,
    pub category: Category,
    /// Score rescaled to `[0, 1]`, two decimals
    pub net_score: f64,
    pub net_score_latency: u64,
    #[serde(flatten)]
    pub signals: Option<Signals>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub license: String,
    pub size_score: SizeScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_factor_latency: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub fallback: bool,
}

impl ScoreRecord {
    /// Record for `result`, which took `latency_ms` to produce.
    #[must_use]
    pub fn new(result: &ScoreResult, latency_ms: u64) -> Self {
        let net_score = result.percentage().round() / 100.0;
        let details = &result.details;
        Self {
            url: result.url.clone(),
            name: details.name.clone(),
            category: result.category,
            net_score,
            net_score_latency: latency_ms,
            signals: details.signals.clone(),
            license: details.license.clone(),
            size_score: details.size_score,
            bus_factor: details.bus_factor,
            bus_factor_latency: details.bus_factor_latency,
            error: details.error.clone(),
            fallback: details.fallback,
        }
    }

    /// Compact JSON, without the trailing newline
    pub fn to_ndjson_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Qualitative band of an average score percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrustLevel {
    Excellent,
    Good,
    Moderate,
    Low,
}

impl TrustLevel {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::Excellent
        } else if percentage >= 60.0 {
            Self::Good
        } else if percentage >= 40.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Moderate => "MODERATE",
            Self::Low => "LOW",
        };
        f.write_str(label)
    }
}

/// Aggregate over the results that scored above zero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub analyzed: usize,
    pub average_score: f64,
    pub average_percentage: f64,
}

impl RunSummary {
    #[must_use]
    pub fn from_results(results: &[ScoreResult]) -> Self {
        let scored: Vec<&ScoreResult> = results.iter().filter(|r| r.score > 0.0).collect();
        let analyzed = scored.len();
        let total_score: f64 = scored.iter().map(|r| r.score).sum();
        let total_max: f64 = scored.iter().map(|r| r.max_score).sum();

        let average_score = if analyzed > 0 {
            total_score / analyzed as f64
        } else {
            0.0
        };
        let average_percentage = if total_max > 0.0 {
            total_score / total_max * 100.0
        } else {
            0.0
        };

        Self {
            total: results.len(),
            analyzed,
            average_score,
            average_percentage,
        }
    }

    /// `None` when nothing was analyzed
    #[must_use]
    pub fn level(&self) -> Option<TrustLevel> {
        (self.analyzed > 0).then(|| TrustLevel::from_percentage(self.average_percentage))
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level() {
            Some(level) => write!(
                f,
                "{}/{} URLs analyzed, average {:.1} ({:.1}%), trust level {level}",
                self.analyzed, self.total, self.average_score, self.average_percentage
            ),
            None => write!(f, "0/{} URLs analyzed", self.total),
        }
    }
}
