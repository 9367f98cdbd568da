//! Hardware-size compatibility scoring

use serde::Serialize;

use crate::artifact::config::SizePolicy;
use crate::artifact::types::FetchResult;

/// Identifier used when no artifact id could be extracted
pub const UNKNOWN_ARTIFACT: &str = "unknown";

/// Estimate for unknown artifacts, in MB
pub const UNKNOWN_ESTIMATE_MB: f64 = 500.0;

/// Estimate for every known artifact, in MB
pub const DEFAULT_ESTIMATE_MB: f64 = 1000.0;

/// Deployment target classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareTier {
    RaspberryPi,
    JetsonNano,
    DesktopPc,
    AwsServer,
}

impl HardwareTier {
    pub const ALL: [HardwareTier; 4] = [
        HardwareTier::RaspberryPi,
        HardwareTier::JetsonNano,
        HardwareTier::DesktopPc,
        HardwareTier::AwsServer,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RaspberryPi => "raspberry_pi",
            Self::JetsonNano => "jetson_nano",
            Self::DesktopPc => "desktop_pc",
            Self::AwsServer => "aws_server",
        }
    }

    /// Size (MB) at or below which the tier scores 1.0
    #[must_use]
    pub fn min_mb(&self) -> f64 {
        0.0
    }

    /// Size (MB) at or above which the tier scores 0.0
    #[must_use]
    pub fn max_mb(&self) -> f64 {
        match self {
            Self::RaspberryPi => 200.0,
            Self::JetsonNano => 500.0,
            Self::DesktopPc => 5_000.0,
            Self::AwsServer => 50_000.0,
        }
    }
}

/// Compatibility score in `[0, 1]` for each hardware tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeScore {
    pub raspberry_pi: f64,
    pub jetson_nano: f64,
    pub desktop_pc: f64,
    pub aws_server: f64,
}

impl SizeScore {
    #[must_use]
    pub fn get(&self, tier: HardwareTier) -> f64 {
        match tier {
            HardwareTier::RaspberryPi => self.raspberry_pi,
            HardwareTier::JetsonNano => self.jetson_nano,
            HardwareTier::DesktopPc => self.desktop_pc,
            HardwareTier::AwsServer => self.aws_server,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (HardwareTier, f64)> + '_ {
        HardwareTier::ALL.into_iter().map(|tier| (tier, self.get(tier)))
    }
}

/// Piecewise-linear compatibility of a `size_mb` artifact with each tier.
#[must_use]
pub fn size_score(size_mb: f64) -> SizeScore {
    SizeScore {
        raspberry_pi: tier_score(size_mb, HardwareTier::RaspberryPi),
        jetson_nano: tier_score(size_mb, HardwareTier::JetsonNano),
        desktop_pc: tier_score(size_mb, HardwareTier::DesktopPc),
        aws_server: tier_score(size_mb, HardwareTier::AwsServer),
    }
}

fn tier_score(size_mb: f64, tier: HardwareTier) -> f64 {
    let (min, max) = (tier.min_mb(), tier.max_mb());
    let score = if size_mb <= min {
        1.0
    } else if size_mb >= max {
        0.0
    } else {
        // f64::max drops NaN, so a NaN size lands on 0.0
        (1.0 - (size_mb - min) / (max - min)).max(0.0)
    };
    (score * 100.0).round() / 100.0
}

/// Policy that turns an artifact into an estimated size in MB
pub trait SizeEstimator: Send + Sync {
    fn estimate_mb(&self, artifact_id: &str, fetched: Option<&FetchResult>) -> f64;
}

/// Placeholder estimate: 500 MB for unknown ids, 1000 MB otherwise.
///
/// This does not inspect the artifact at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConservativeEstimate;

impl SizeEstimator for ConservativeEstimate {
    fn estimate_mb(&self, artifact_id: &str, _fetched: Option<&FetchResult>) -> f64 {
        if artifact_id.is_empty() || artifact_id == UNKNOWN_ARTIFACT {
            UNKNOWN_ESTIMATE_MB
        } else {
            DEFAULT_ESTIMATE_MB
        }
    }
}

/// Sum of the fetched file listing, or the placeholder when there is none
#[derive(Debug, Clone, Copy, Default)]
pub struct FileListingEstimate;

impl SizeEstimator for FileListingEstimate {
    fn estimate_mb(&self, artifact_id: &str, fetched: Option<&FetchResult>) -> f64 {
        match fetched.map(FetchResult::size_info) {
            Some(info) if info.total_bytes > 0 => info.total_mb(),
            _ => ConservativeEstimate.estimate_mb(artifact_id, fetched),
        }
    }
}

/// Estimator implementing `policy`
#[must_use]
pub fn estimator_for(policy: SizePolicy) -> Box<dyn SizeEstimator> {
    match policy {
        SizePolicy::Conservative => Box::new(ConservativeEstimate),
        SizePolicy::Listing => Box::new(FileListingEstimate),
    }
}
