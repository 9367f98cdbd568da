//! Bus factor: resilience to contributor turnover

use serde::Serialize;
use std::time::Instant;

use crate::artifact::url::{Category, namespace_of};

/// Floor applied to artifacts published by a major organization
pub const MAJOR_ORG_SCORE: f64 = 0.95;

/// Organizations assumed to have institutional redundancy
const MAJOR_ORGANIZATIONS: &[&str] = &[
    "google",
    "google-bert",
    "google-research",
    "deepmind",
    "microsoft",
    "openai",
    "facebook",
    "facebookresearch",
    "meta",
    "meta-llama",
    "huggingface",
    "nvidia",
    "amazon",
    "aws",
    "apple",
    "ibm",
    "intel",
    "anthropic",
    "mistralai",
    "allenai",
    "stanfordnlp",
    "tensorflow",
    "pytorch",
];

/// `(minimum contributors, score)` steps, highest first
type Buckets = &'static [(usize, f64)];

const MODEL_BUCKETS: Buckets = &[(5, 1.0), (2, 0.6), (1, 0.3)];
const DATASET_BUCKETS: Buckets = &[(3, 1.0), (2, 0.8), (1, 0.5)];
const CODE_BUCKETS: Buckets = &[(10, 1.0), (5, 0.7), (2, 0.4), (1, 0.2)];

/// Whether the namespace of `artifact_id` is a major organization.
#[must_use]
pub fn is_major_organization(artifact_id: &str) -> bool {
    let namespace = namespace_of(artifact_id).trim().to_ascii_lowercase();
    !namespace.is_empty() && MAJOR_ORGANIZATIONS.contains(&namespace.as_str())
}

fn bucket_score(contributors: usize, buckets: Buckets) -> f64 {
    buckets
        .iter()
        .find(|(min, _)| contributors >= *min)
        .map_or(0.0, |(_, score)| *score)
}

fn with_org_floor(raw: f64, artifact_id: &str) -> f64 {
    if is_major_organization(artifact_id) {
        raw.max(MAJOR_ORG_SCORE)
    } else {
        raw
    }
}

#[must_use]
pub fn model_bus_factor(contributors: usize, artifact_id: &str) -> f64 {
    with_org_floor(bucket_score(contributors, MODEL_BUCKETS), artifact_id)
}

#[must_use]
pub fn dataset_bus_factor(contributors: usize, artifact_id: &str) -> f64 {
    with_org_floor(bucket_score(contributors, DATASET_BUCKETS), artifact_id)
}

#[must_use]
pub fn code_bus_factor(contributors: usize, artifact_id: &str) -> f64 {
    with_org_floor(bucket_score(contributors, CODE_BUCKETS), artifact_id)
}

/// Bus factor in `[0, 1]` for an artifact of `category`.
#[must_use]
pub fn bus_factor(category: Category, contributors: usize, artifact_id: &str) -> f64 {
    match category {
        Category::Model => model_bus_factor(contributors, artifact_id),
        Category::Dataset => dataset_bus_factor(contributors, artifact_id),
        Category::Code => code_bus_factor(contributors, artifact_id),
        Category::Invalid => 0.0,
    }
}

/// Bus factor with the time spent computing it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BusFactor {
    pub score: f64,
    pub latency_ms: u64,
}

/// [`bus_factor`] plus its own wall-clock duration in whole milliseconds.
#[must_use]
pub fn timed_bus_factor(category: Category, contributors: usize, artifact_id: &str) -> BusFactor {
    let start = Instant::now();
    let score = bus_factor(category, contributors, artifact_id);
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    BusFactor { score, latency_ms }
}
