//! Artifact trust scoring module
//!
//! Classifies artifact URLs, fetches their hosting-platform metadata and turns
//! it into trust scores.

pub mod config;
pub mod error;
pub mod fetch;
pub mod input;
pub mod report;
pub mod score;
pub mod transport;
pub mod types;
pub mod url;

// Re-export error types
pub use error::{FetchError, TrustError, TrustResult};

// Re-export configuration
pub use config::{EngineConfig, FetchConfig, SizePolicy, USER_AGENT};

// Re-export classification types
pub use url::{ArtifactRef, Category, UrlRecord, classify, namespace_of, normalize_link};

// Re-export fetching types
pub use fetch::MetadataFetcher;
pub use fetch::resolve::{license_from_readme, resolve_contributors, resolve_license};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
pub use types::{Degradation, FetchField, FetchResult, FileEntry, PlatformDetails, SizeInfo};

// Re-export scoring types
pub use score::ScoringEngine;
pub use score::bus_factor::{
    BusFactor, MAJOR_ORG_SCORE, bus_factor, code_bus_factor, dataset_bus_factor,
    is_major_organization, model_bus_factor, timed_bus_factor,
};
pub use score::popularity::{BASE_CREDIT, ladder_bonus, popularity_score, signals_for};
pub use score::size::{
    ConservativeEstimate, DEFAULT_ESTIMATE_MB, FileListingEstimate, HardwareTier, SizeEstimator,
    SizeScore, UNKNOWN_ARTIFACT, UNKNOWN_ESTIMATE_MB, estimator_for, size_score,
};
pub use score::types::{MAX_SCORE, ScoreDetails, ScoreResult, Signals};

// Re-export input/output helpers
pub use input::{parse_url_lines, read_url_file};
pub use report::{RunSummary, ScoreRecord, TrustLevel};
