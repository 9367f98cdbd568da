//! Normalized metadata records produced by the fetcher

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::artifact::error::FetchError;
use crate::artifact::url::Category;

/// One entry of a repository file listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Aggregate size of a file listing
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SizeInfo {
    pub total_bytes: u64,
    pub total_gb: f64,
    pub num_files: usize,
}

impl SizeInfo {
    #[must_use]
    pub fn from_files(files: &BTreeMap<String, FileEntry>) -> Self {
        let total_bytes: u64 = files.values().map(|f| f.size).sum();
        let total_gb = if total_bytes > 0 {
            total_bytes as f64 / (1024.0 * 1024.0 * 1024.0)
        } else {
            0.0
        };
        Self {
            total_bytes,
            total_gb,
            num_files: files.len(),
        }
    }

    #[must_use]
    pub fn total_mb(&self) -> f64 {
        self.total_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Category-specific fields that have no common slot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlatformDetails {
    Model {
        library_name: String,
        pipeline_tag: String,
        has_model_card: bool,
    },
    Dataset {
        description: String,
        size_info: SizeInfo,
    },
    Code {
        description: String,
        language: String,
        recent_commits: Vec<Value>,
    },
}

/// Sub-request of a fetch that may degrade independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchField {
    Info,
    Files,
    Readme,
    Contributors,
    Commits,
}

impl fmt::Display for FetchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Info => "info",
            Self::Files => "files",
            Self::Readme => "readme",
            Self::Contributors => "contributors",
            Self::Commits => "commits",
        };
        f.write_str(name)
    }
}

/// A field that fell back to its default, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degradation {
    pub field: FetchField,
    pub reason: FetchError,
}

/// Best-effort metadata for one artifact
///
/// Every field is populated: anything upstream did not provide is the
/// type's empty value. `degraded` lists the requests that failed.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    pub category: Category,
    pub name: String,
    pub url: String,
    pub readme: String,
    pub license: String,
    pub numeric_metrics: BTreeMap<String, u64>,
    pub last_modified: String,
    pub tags: Vec<String>,
    pub files: BTreeMap<String, FileEntry>,
    pub contributors: Vec<String>,
    pub platform: PlatformDetails,
    pub raw_metadata: Value,
    pub degraded: Vec<Degradation>,
}

impl FetchResult {
    /// Numeric metric by key, 0 when absent
    #[must_use]
    pub fn metric(&self, key: &str) -> u64 {
        self.numeric_metrics.get(key).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_degraded(&self, field: FetchField) -> bool {
        self.degraded.iter().any(|d| d.field == field)
    }

    /// Whether the primary info request succeeded
    #[must_use]
    pub fn has_metadata(&self) -> bool {
        !self.is_degraded(FetchField::Info)
    }

    /// Whether the request that yields contributors succeeded: the info
    /// request on Hugging Face (author), the contributors endpoint on GitHub.
    #[must_use]
    pub fn contributors_resolved(&self) -> bool {
        match self.category {
            Category::Code => !self.is_degraded(FetchField::Contributors),
            _ => self.has_metadata(),
        }
    }

    #[must_use]
    pub fn size_info(&self) -> SizeInfo {
        SizeInfo::from_files(&self.files)
    }
}
