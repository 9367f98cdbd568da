//! Trust scoring of model, dataset and code URLs
//!
//! The engine fetches an artifact once and derives every sub-score from that
//! single record:
//!
//! - popularity (base credit plus threshold ladders),
//! - bus factor, with its computation latency, when contributors resolved,
//! - hardware-size compatibility, from the configured [`SizeEstimator`].
//!
//! Every path returns a [`ScoreResult`] whose details carry a `size_score`.

pub mod bus_factor;
pub mod popularity;
pub mod size;
pub mod types;

use log::{info, warn};

use crate::artifact::config::EngineConfig;
use crate::artifact::fetch::MetadataFetcher;
use crate::artifact::transport::{ReqwestTransport, Transport};
use crate::artifact::url::{ArtifactRef, Category, UrlRecord};

use bus_factor::timed_bus_factor;
use popularity::{BASE_CREDIT, popularity_score, signals_for};
use size::{SizeEstimator, UNKNOWN_ARTIFACT, estimator_for, size_score};
use types::{MAX_SCORE, ScoreDetails, ScoreResult};

/// Scores URLs using a [`MetadataFetcher`] and a size estimation policy
pub struct ScoringEngine<T: Transport = ReqwestTransport> {
    fetcher: MetadataFetcher<T>,
    estimator: Box<dyn SizeEstimator>,
}

impl ScoringEngine<ReqwestTransport> {
    pub fn new(config: EngineConfig) -> crate::TrustResult<Self> {
        let estimator = estimator_for(config.size_policy);
        let fetcher = MetadataFetcher::new(config.fetch)?;
        Ok(Self::with_fetcher(fetcher, estimator))
    }
}

impl<T: Transport> ScoringEngine<T> {
    pub fn with_fetcher(fetcher: MetadataFetcher<T>, estimator: Box<dyn SizeEstimator>) -> Self {
        Self { fetcher, estimator }
    }

    #[must_use]
    pub fn fetcher(&self) -> &MetadataFetcher<T> {
        &self.fetcher
    }

    /// Score a classified record.
    pub async fn score_record(&self, record: &UrlRecord) -> ScoreResult {
        self.score(record.link(), record.category()).await
    }

    /// Score `url` as an artifact of `category`. Never fails.
    pub async fn score(&self, url: &str, category: Category) -> ScoreResult {
        if category == Category::Invalid {
            return self.error_result(url, category, "Invalid category");
        }

        let artifact = match ArtifactRef::from_link(url, category) {
            Ok(artifact) => artifact,
            Err(e) => {
                warn!("{e}");
                return self.error_result(url, category, "Invalid URL");
            }
        };

        let name = artifact.id();
        let fetched = self.fetcher.fetch_artifact(&artifact, url).await;
        let sizes = size_score(self.estimator.estimate_mb(&name, Some(&fetched)));
        let bus = fetched
            .contributors_resolved()
            .then(|| timed_bus_factor(category, fetched.contributors.len(), &name));

        let mut details = ScoreDetails::new(name, sizes);
        details.license = fetched.license.clone();
        details.bus_factor = bus.map(|b| b.score);
        details.bus_factor_latency = bus.map(|b| b.latency_ms);

        if !fetched.has_metadata() {
            info!("{}: metadata unavailable, using fallback score", details.name);
            details.fallback = true;
            return ScoreResult {
                url: url.to_string(),
                category,
                score: BASE_CREDIT,
                max_score: MAX_SCORE,
                details,
            };
        }

        let signals = signals_for(&fetched);
        let score = popularity_score(&signals);
        details.signals = Some(signals);

        ScoreResult {
            url: url.to_string(),
            category,
            score,
            max_score: MAX_SCORE,
            details,
        }
    }

    fn error_result(&self, url: &str, category: Category, error: &str) -> ScoreResult {
        let sizes = size_score(self.estimator.estimate_mb(UNKNOWN_ARTIFACT, None));
        let mut details = ScoreDetails::new(UNKNOWN_ARTIFACT, sizes);
        details.error = Some(error.to_string());
        ScoreResult {
            url: url.to_string(),
            category,
            score: 0.0,
            max_score: MAX_SCORE,
            details,
        }
    }
}
