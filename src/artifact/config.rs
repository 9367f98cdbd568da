//! Configuration for metadata fetching and scoring

use std::time::Duration;

/// User agent sent with every upstream request
pub const USER_AGENT: &str = "artifact-trust/0.5";

/// Configuration for upstream metadata requests
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-request timeout; there are no retries
    pub api_timeout: Duration,
    /// Hugging Face site root, used for raw README downloads
    pub hf_base: String,
    /// Hugging Face API root (`{hf_api_base}/api/models/...`)
    pub hf_api_base: String,
    /// GitHub REST API root
    pub github_api_base: String,
    pub hf_token: Option<String>,
    pub github_token: Option<String>,
    /// Contributors kept from the GitHub contributors endpoint
    pub max_contributors: usize,
    /// Commits kept from the GitHub commits endpoint
    pub max_commits: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_timeout: Duration::from_secs(10),
            hf_base: "https://huggingface.co".to_string(),
            hf_api_base: "https://huggingface.co".to_string(),
            github_api_base: "https://api.github.com".to_string(),
            hf_token: None,
            github_token: None,
            max_contributors: 10,
            max_commits: 10,
        }
    }
}

impl FetchConfig {
    /// Defaults plus tokens from `HF_TOKEN` (or `HUGGINGFACE_TOKEN`) and `GITHUB_TOKEN`.
    #[must_use]
    pub fn from_env() -> Self {
        let hf_token = non_empty_var("HF_TOKEN").or_else(|| non_empty_var("HUGGINGFACE_TOKEN"));
        Self {
            hf_token,
            github_token: non_empty_var("GITHUB_TOKEN"),
            ..Self::default()
        }
    }

    /// `Authorization` header value for Hugging Face requests
    #[must_use]
    pub fn hf_authorization(&self) -> Option<String> {
        self.hf_token.as_ref().map(|t| format!("Bearer {t}"))
    }

    /// `Authorization` header value for GitHub requests
    #[must_use]
    pub fn github_authorization(&self) -> Option<String> {
        self.github_token.as_ref().map(|t| format!("token {t}"))
    }
}

/// Which size estimation policy the engine uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SizePolicy {
    /// Fixed 500/1000 MB placeholder
    #[default]
    Conservative,
    /// Sum of the file listing, falling back to the placeholder
    Listing,
}

/// Configuration for the scoring engine
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub fetch: FetchConfig,
    pub size_policy: SizePolicy,
}

impl EngineConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            fetch: FetchConfig::from_env(),
            size_policy: SizePolicy::default(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
