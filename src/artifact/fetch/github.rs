//! GitHub repository metadata

use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::resolve::{lenient, resolve_license};
use super::{Degradations, MetadataFetcher};
use crate::artifact::error::FetchError;
use crate::artifact::transport::{Transport, get_json};
use crate::artifact::types::{FetchField, FetchResult, PlatformDetails};
use crate::artifact::url::Category;

/// Subset of `GET /repos/{owner}/{repo}` we read
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RepoInfo {
    #[serde(deserialize_with = "lenient")]
    stargazers_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    forks_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    open_issues_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    size: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    language: Option<String>,
    #[serde(deserialize_with = "lenient")]
    updated_at: Option<String>,
    #[serde(deserialize_with = "lenient")]
    topics: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    license: Option<RepoLicense>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RepoLicense {
    spdx_id: Option<String>,
    name: Option<String>,
}

impl RepoLicense {
    fn identifier(&self) -> Option<&str> {
        self.spdx_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.name.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ReadmePayload {
    content: String,
}

#[derive(Debug, Deserialize)]
struct Contributor {
    login: Option<String>,
}

pub(super) async fn fetch_code<T: Transport>(
    fetcher: &MetadataFetcher<T>,
    owner: &str,
    repo: &str,
    url: &str,
) -> FetchResult {
    let config = fetcher.config();
    let transport = fetcher.transport();
    let api = config.github_api_base.trim_end_matches('/');
    let base = format!("{api}/repos/{owner}/{repo}");
    let auth = config.github_authorization();
    let auth = auth.as_deref();
    let name = format!("{owner}/{repo}");

    let readme_url = format!("{base}/readme");
    let contributors_url = format!("{base}/contributors");
    let commits_url = format!("{base}/commits");
    let (info, readme, contributors, commits) = tokio::join!(
        fetch_repo(transport, &base, auth),
        fetch_readme(transport, &readme_url, auth),
        fetch_contributors(transport, &contributors_url, auth, config.max_contributors),
        fetch_commits(transport, &commits_url, auth, config.max_commits),
    );

    let mut degraded = Degradations::new(&name);
    let (info, raw) = degraded.take(FetchField::Info, info);
    let readme = degraded.take(FetchField::Readme, readme);
    let contributors = degraded.take(FetchField::Contributors, contributors);
    let recent_commits = degraded.take(FetchField::Commits, commits);

    let tags = info.topics.unwrap_or_default();
    let direct_license = info.license.as_ref().and_then(RepoLicense::identifier);
    let license = resolve_license(&tags, direct_license, &readme);

    let numeric_metrics = BTreeMap::from([
        ("stars".to_string(), info.stargazers_count.unwrap_or(0)),
        ("forks".to_string(), info.forks_count.unwrap_or(0)),
        ("open_issues".to_string(), info.open_issues_count.unwrap_or(0)),
        ("size_kb".to_string(), info.size.unwrap_or(0)),
    ]);
    let degraded = degraded.into_vec();

    FetchResult {
        category: Category::Code,
        name,
        url: url.to_string(),
        readme,
        license,
        numeric_metrics,
        last_modified: info.updated_at.unwrap_or_default(),
        tags,
        files: BTreeMap::new(),
        contributors,
        platform: PlatformDetails::Code {
            description: info.description.unwrap_or_default(),
            language: info.language.unwrap_or_default(),
            recent_commits,
        },
        raw_metadata: raw,
        degraded,
    }
}

async fn fetch_repo<T: Transport>(
    transport: &T,
    url: &str,
    auth: Option<&str>,
) -> Result<(RepoInfo, Value), FetchError> {
    let raw = get_json(transport, url, auth).await?;
    if !raw.is_object() {
        return Err(FetchError::Parse(format!("{url}: expected a JSON object")));
    }
    let info = serde_json::from_value(raw.clone())?;
    Ok((info, raw))
}

/// The readme endpoint returns base64 with embedded line breaks.
async fn fetch_readme<T: Transport>(
    transport: &T,
    url: &str,
    auth: Option<&str>,
) -> Result<String, FetchError> {
    let payload: ReadmePayload = serde_json::from_value(get_json(transport, url, auth).await?)?;
    decode_readme(&payload.content)
}

fn decode_readme(content: &str) -> Result<String, FetchError> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = general_purpose::STANDARD.decode(compact)?;
    String::from_utf8(bytes).map_err(|e| FetchError::Parse(format!("readme is not UTF-8: {e}")))
}

/// Logins of the first `limit` contributors, in API order.
async fn fetch_contributors<T: Transport>(
    transport: &T,
    url: &str,
    auth: Option<&str>,
    limit: usize,
) -> Result<Vec<String>, FetchError> {
    let contributors: Vec<Contributor> =
        serde_json::from_value(get_json(transport, url, auth).await?)?;
    Ok(contributors
        .into_iter()
        .take(limit)
        .filter_map(|c| c.login.filter(|login| !login.is_empty()))
        .collect())
}

/// The first `limit` commits, in API order.
async fn fetch_commits<T: Transport>(
    transport: &T,
    url: &str,
    auth: Option<&str>,
    limit: usize,
) -> Result<Vec<Value>, FetchError> {
    match get_json(transport, url, auth).await? {
        Value::Array(commits) => Ok(commits.into_iter().take(limit).collect()),
        _ => Err(FetchError::Parse(format!("{url}: expected a JSON array"))),
    }
}
