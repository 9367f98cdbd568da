//! Hugging Face model and dataset metadata

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::resolve::{
    is_present, lenient, license_value, parse_file_listing, resolve_contributors, resolve_license,
};
use super::{Degradations, MetadataFetcher};
use crate::artifact::error::FetchError;
use crate::artifact::transport::{Transport, get_json, get_text};
use crate::artifact::types::{FetchField, FetchResult, FileEntry, PlatformDetails, SizeInfo};
use crate::artifact::url::Category;

/// Subset of `/api/models/{id}` and `/api/datasets/{id}` we read
///
/// A field of an unexpected type reads as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HubInfo {
    #[serde(deserialize_with = "lenient")]
    downloads: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    likes: Option<u64>,
    #[serde(rename = "lastModified", deserialize_with = "lenient")]
    last_modified: Option<String>,
    #[serde(deserialize_with = "lenient")]
    tags: Option<Vec<Value>>,
    license: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    library_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pipeline_tag: Option<String>,
    #[serde(rename = "cardData")]
    card_data: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    author: Option<String>,
    #[serde(deserialize_with = "lenient")]
    description: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum HubKind {
    Model,
    Dataset,
}

impl HubKind {
    fn api_segment(self) -> &'static str {
        match self {
            Self::Model => "models",
            Self::Dataset => "datasets",
        }
    }

    fn site_prefix(self) -> &'static str {
        match self {
            Self::Model => "",
            Self::Dataset => "datasets/",
        }
    }
}

pub(super) async fn fetch_model<T: Transport>(
    fetcher: &MetadataFetcher<T>,
    id: &str,
    url: &str,
) -> FetchResult {
    fetch_hub(fetcher, HubKind::Model, id, url).await
}

pub(super) async fn fetch_dataset<T: Transport>(
    fetcher: &MetadataFetcher<T>,
    id: &str,
    url: &str,
) -> FetchResult {
    fetch_hub(fetcher, HubKind::Dataset, id, url).await
}

async fn fetch_hub<T: Transport>(
    fetcher: &MetadataFetcher<T>,
    kind: HubKind,
    id: &str,
    url: &str,
) -> FetchResult {
    let config = fetcher.config();
    let transport = fetcher.transport();
    let api = config.hf_api_base.trim_end_matches('/');
    let site = config.hf_base.trim_end_matches('/');
    let segment = kind.api_segment();

    let info_url = format!("{api}/api/{segment}/{id}");
    let tree_url = format!("{api}/api/{segment}/{id}/tree/main");
    let readme_url = format!("{site}/{}{id}/raw/main/README.md", kind.site_prefix());
    let auth = config.hf_authorization();
    let auth = auth.as_deref();

    let (info, files, readme) = tokio::join!(
        fetch_info(transport, &info_url, auth),
        fetch_listing(transport, &tree_url, auth),
        get_text(transport, &readme_url, auth),
    );

    let mut degraded = Degradations::new(id);
    let (info, raw) = degraded.take(FetchField::Info, info);
    let files = degraded.take(FetchField::Files, files);
    let readme = degraded.take(FetchField::Readme, readme);

    let tags: Vec<String> = info
        .tags
        .unwrap_or_default()
        .into_iter()
        .filter_map(|tag| tag.as_str().map(str::to_string))
        .collect();
    let direct_license = license_value(info.license.as_ref());
    let license = resolve_license(&tags, direct_license.as_deref(), &readme);
    let contributors = resolve_contributors(info.author.as_deref(), id);

    let mut numeric_metrics = BTreeMap::new();
    numeric_metrics.insert("downloads".to_string(), info.downloads.unwrap_or(0));
    numeric_metrics.insert("likes".to_string(), info.likes.unwrap_or(0));

    let (category, platform) = match kind {
        HubKind::Model => (
            Category::Model,
            PlatformDetails::Model {
                library_name: info.library_name.unwrap_or_default(),
                pipeline_tag: info.pipeline_tag.unwrap_or_default(),
                has_model_card: is_present(info.card_data.as_ref()),
            },
        ),
        HubKind::Dataset => (
            Category::Dataset,
            PlatformDetails::Dataset {
                description: info.description.unwrap_or_default(),
                size_info: SizeInfo::from_files(&files),
            },
        ),
    };

    FetchResult {
        category,
        name: id.to_string(),
        url: url.to_string(),
        readme,
        license,
        numeric_metrics,
        last_modified: info.last_modified.unwrap_or_default(),
        tags,
        files,
        contributors,
        platform,
        raw_metadata: raw,
        degraded: degraded.into_vec(),
    }
}

async fn fetch_info<T: Transport>(
    transport: &T,
    url: &str,
    auth: Option<&str>,
) -> Result<(HubInfo, Value), FetchError> {
    let raw = get_json(transport, url, auth).await?;
    if !raw.is_object() {
        return Err(FetchError::Parse(format!("{url}: expected a JSON object")));
    }
    let info = serde_json::from_value(raw.clone())?;
    Ok((info, raw))
}

async fn fetch_listing<T: Transport>(
    transport: &T,
    url: &str,
    auth: Option<&str>,
) -> Result<BTreeMap<String, FileEntry>, FetchError> {
    let listing = get_json(transport, url, auth).await?;
    parse_file_listing(&listing)
}
