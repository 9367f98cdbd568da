//! `artifact_trust` - trust scoring for ML models, datasets and code repositories
//!
//! This library classifies artifact URLs (Hugging Face models and datasets,
//! GitHub repositories), fetches their metadata with per-request graceful
//! degradation, and reduces it to a composite score with popularity, bus
//! factor and hardware-size compatibility sub-scores.

// Module declarations
pub mod artifact;
pub mod logging;

// Re-export error types
pub use artifact::{FetchError, TrustError, TrustResult};

// Re-export configuration
pub use artifact::{EngineConfig, FetchConfig, SizePolicy};

// Re-export the pipeline
pub use artifact::{
    ArtifactRef, Category, FetchResult, MetadataFetcher, ReqwestTransport, ScoreResult,
    ScoringEngine, Transport, UrlRecord, classify,
};

// Re-export logging setup
pub use logging::{LogConfig, LogLevel, LoggingError};
