//! URL classification and artifact identifier extraction
//!
//! A link is classified by trying each category's identifier pattern in order
//! (model, dataset, code). The first pattern that yields an identifier wins;
//! anything else is [`Category::Invalid`].

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::artifact::error::{TrustError, TrustResult};

/// Kind of artifact a link points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Model,
    Dataset,
    Code,
    Invalid,
}

impl Category {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "MODEL",
            Self::Dataset => "DATASET",
            Self::Code => "CODE",
            Self::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level Hugging Face paths that are site pages, not model namespaces.
const RESERVED_HF_SEGMENTS: &[&str] = &[
    "datasets",
    "spaces",
    "models",
    "api",
    "docs",
    "blog",
    "papers",
    "collections",
    "organizations",
    "settings",
    "pricing",
    "tasks",
    "login",
    "join",
];

/// Repository routes that may follow a single-segment id (`/gpt2/tree/main`).
const HF_ROUTE_SEGMENTS: &[&str] = &[
    "tree",
    "blob",
    "resolve",
    "raw",
    "commit",
    "commits",
    "discussions",
    "edit",
];

lazy_static! {
    static ref HF_DATASET_RE: Result<Regex, regex::Error> =
        Regex::new(r"(?i)^https?://(?:www\.)?huggingface\.co/datasets/([^/]+)(?:/([^/]+))?(?:/.*)?$");
    static ref HF_MODEL_RE: Result<Regex, regex::Error> =
        Regex::new(r"(?i)^https?://(?:www\.)?huggingface\.co/([^/]+)(?:/([^/]+))?(?:/.*)?$");
    static ref GITHUB_REPO_RE: Result<Regex, regex::Error> =
        Regex::new(r"(?i)^https?://(?:www\.)?github\.com/([^/]+)/([^/]+)(?:/.*)?$");
}

/// Strip whitespace, query string, fragment and trailing slashes.
#[must_use]
pub fn normalize_link(link: &str) -> &str {
    let trimmed = link.trim();
    let end = trimmed.find(['?', '#']).unwrap_or(trimmed.len());
    trimmed[..end].trim_end_matches('/')
}

/// Classify a link. Total and deterministic; never touches the network.
#[must_use]
pub fn classify(link: &str) -> Category {
    [Category::Model, Category::Dataset, Category::Code]
        .into_iter()
        .find(|category| ArtifactRef::from_link(link, *category).is_ok())
        .unwrap_or(Category::Invalid)
}

/// A link together with its category, computed once on construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    link: String,
    category: Category,
}

impl UrlRecord {
    pub fn new(link: impl Into<String>) -> Self {
        let link = link.into().trim().to_string();
        let category = classify(&link);
        Self { link, category }
    }

    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.category != Category::Invalid
    }
}

impl fmt::Display for UrlRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.link, self.category)
    }
}

/// Platform identifier of an artifact, one variant per category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArtifactRef {
    /// Hugging Face model id, e.g. `google/gemma-3-270m` or `gpt2`
    Model { id: String },
    /// Hugging Face dataset id, e.g. `squad` or `xlangai/AgentNet`
    Dataset { id: String },
    /// GitHub repository
    Code { owner: String, repo: String },
}

impl ArtifactRef {
    /// Extract the identifier for `category` from `link`.
    pub fn from_link(link: &str, category: Category) -> TrustResult<Self> {
        let normalized = normalize_link(link);
        let parsed = match category {
            Category::Model => parse_model(normalized),
            Category::Dataset => parse_dataset(normalized),
            Category::Code => parse_code(normalized),
            Category::Invalid => None,
        };
        parsed.ok_or_else(|| TrustError::InvalidUrl {
            link: link.trim().to_string(),
            category,
        })
    }

    /// Extract the identifier for an already classified record.
    pub fn parse(record: &UrlRecord) -> TrustResult<Self> {
        Self::from_link(record.link(), record.category())
    }

    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::Model { .. } => Category::Model,
            Self::Dataset { .. } => Category::Dataset,
            Self::Code { .. } => Category::Code,
        }
    }

    /// Display identifier (`owner/repo` for code)
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::Model { id } | Self::Dataset { id } => id.clone(),
            Self::Code { owner, repo } => format!("{owner}/{repo}"),
        }
    }
}

/// Organization segment of an identifier: everything before the first `/`.
#[must_use]
pub fn namespace_of(artifact_id: &str) -> &str {
    artifact_id.split('/').next().unwrap_or("")
}

/// Join the first segment with the second unless the second is a route.
fn hf_id(first: &str, second: Option<&str>) -> String {
    match second {
        Some(s) if !HF_ROUTE_SEGMENTS.contains(&s.to_ascii_lowercase().as_str()) => {
            format!("{first}/{s}")
        }
        _ => first.to_string(),
    }
}

fn parse_model(link: &str) -> Option<ArtifactRef> {
    let re = HF_MODEL_RE.as_ref().ok()?;
    let caps = re.captures(link)?;
    let first = caps.get(1)?.as_str();
    if RESERVED_HF_SEGMENTS.contains(&first.to_ascii_lowercase().as_str()) {
        return None;
    }
    let second = caps.get(2).map(|m| m.as_str());
    Some(ArtifactRef::Model {
        id: hf_id(first, second),
    })
}

fn parse_dataset(link: &str) -> Option<ArtifactRef> {
    let re = HF_DATASET_RE.as_ref().ok()?;
    let caps = re.captures(link)?;
    let first = caps.get(1)?.as_str();
    let second = caps.get(2).map(|m| m.as_str());
    Some(ArtifactRef::Dataset {
        id: hf_id(first, second),
    })
}

fn parse_code(link: &str) -> Option<ArtifactRef> {
    let re = GITHUB_REPO_RE.as_ref().ok()?;
    let caps = re.captures(link)?;
    let owner = caps.get(1)?.as_str().to_string();
    let repo = caps.get(2)?.as_str();
    let repo = repo.strip_suffix(".git").unwrap_or(repo).to_string();
    if repo.is_empty() {
        return None;
    }
    Some(ArtifactRef::Code { owner, repo })
}
