//! Metadata fetching for models, datasets and code repositories
//!
//! Each category issues its own set of requests. Every request is independent:
//! a failure only resets the field it feeds and is recorded on the result, so a
//! fetch for a well-formed identifier always yields a [`FetchResult`].

mod github;
mod huggingface;
pub mod resolve;

use log::{debug, info};

use crate::artifact::config::FetchConfig;
use crate::artifact::error::{FetchError, TrustError, TrustResult};
use crate::artifact::transport::{ReqwestTransport, Transport};
use crate::artifact::types::{Degradation, FetchField, FetchResult};
use crate::artifact::url::{ArtifactRef, UrlRecord};

/// Fetches and normalizes artifact metadata over a reused transport
pub struct MetadataFetcher<T: Transport = ReqwestTransport> {
    transport: T,
    config: FetchConfig,
}

impl MetadataFetcher<ReqwestTransport> {
    /// Fetcher over a fresh `reqwest` client built from `config`
    pub fn new(config: FetchConfig) -> TrustResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> MetadataFetcher<T> {
    pub fn with_transport(transport: T, config: FetchConfig) -> Self {
        Self { transport, config }
    }

    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch metadata for a classified link.
    ///
    /// Invalid links fail with [`TrustError::InvalidUrl`] before any request.
    pub async fn fetch(&self, record: &UrlRecord) -> TrustResult<FetchResult> {
        if !record.is_valid() {
            return Err(TrustError::InvalidUrl {
                link: record.link().to_string(),
                category: record.category(),
            });
        }
        let artifact = ArtifactRef::parse(record)?;
        Ok(self.fetch_artifact(&artifact, record.link()).await)
    }

    /// Fetch metadata for an extracted identifier. Never fails.
    pub async fn fetch_artifact(&self, artifact: &ArtifactRef, url: &str) -> FetchResult {
        info!("Fetching {} data for: {}", artifact.category(), artifact.id());
        let result = match artifact {
            ArtifactRef::Model { id } => huggingface::fetch_model(self, id, url).await,
            ArtifactRef::Dataset { id } => huggingface::fetch_dataset(self, id, url).await,
            ArtifactRef::Code { owner, repo } => github::fetch_code(self, owner, repo, url).await,
        };
        if !result.degraded.is_empty() {
            info!(
                "{}: {} of its requests degraded",
                result.name,
                result.degraded.len()
            );
        }
        result
    }
}

/// Folds per-request results into field values, remembering failures
pub(crate) struct Degradations<'a> {
    name: &'a str,
    entries: Vec<Degradation>,
}

impl<'a> Degradations<'a> {
    pub(crate) fn new(name: &'a str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// The value on success, otherwise the default with the failure recorded.
    pub(crate) fn take<V: Default>(&mut self, field: FetchField, result: Result<V, FetchError>) -> V {
        match result {
            Ok(value) => value,
            Err(reason) => {
                debug!("{}: {field} unavailable: {reason}", self.name);
                self.entries.push(Degradation { field, reason });
                V::default()
            }
        }
    }

    pub(crate) fn into_vec(self) -> Vec<Degradation> {
        self.entries
    }
}
