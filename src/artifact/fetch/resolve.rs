//! Field resolution rules shared by the platform adapters

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::artifact::error::FetchError;
use crate::artifact::types::FileEntry;
use crate::artifact::url::namespace_of;

const LICENSE_TAG_PREFIX: &str = "license:";

lazy_static! {
    static ref README_LICENSE_RE: Result<Regex, regex::Error> =
        Regex::new(r"(?i)license:\s*([^\n]+)");
}

/// Resolve a license: `license:` tag, then the direct field, then the README.
///
/// Returns an empty string when nothing matches.
#[must_use]
pub fn resolve_license(tags: &[String], direct: Option<&str>, readme: &str) -> String {
    if let Some(tag) = tags
        .iter()
        .find_map(|tag| tag.strip_prefix(LICENSE_TAG_PREFIX))
    {
        return tag.trim().to_string();
    }

    if let Some(direct) = direct.map(str::trim).filter(|d| !d.is_empty()) {
        return direct.to_string();
    }

    license_from_readme(readme).unwrap_or_default()
}

/// Remainder of the first `license:` line in a README, if any
#[must_use]
pub fn license_from_readme(readme: &str) -> Option<String> {
    let re = README_LICENSE_RE.as_ref().ok()?;
    let caps = re.captures(readme)?;
    let value = caps.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Contributors for a Hugging Face artifact: the author, else the namespace.
#[must_use]
pub fn resolve_contributors(author: Option<&str>, artifact_id: &str) -> Vec<String> {
    match author.map(str::trim).filter(|a| !a.is_empty()) {
        Some(author) => vec![author.to_string()],
        None => vec![namespace_of(artifact_id).to_string()],
    }
}

/// Convert a `[{path, size, type}, ...]` listing into a path-keyed map.
///
/// Entries without a string `path` are skipped.
pub fn parse_file_listing(listing: &Value) -> Result<BTreeMap<String, FileEntry>, FetchError> {
    let entries = listing
        .as_array()
        .ok_or_else(|| FetchError::Parse("file listing is not an array".to_string()))?;

    Ok(entries
        .iter()
        .filter_map(|entry| {
            let path = entry.get("path")?.as_str()?;
            let size = entry.get("size").and_then(Value::as_u64).unwrap_or(0);
            let kind = entry
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("file")
                .to_string();
            Some((path.to_string(), FileEntry { size, kind }))
        })
        .collect())
}

/// License as found in a loosely typed `license` field: a string, or the
/// first string of a list.
#[must_use]
pub fn license_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(|v| v.as_str().map(str::to_string)),
        _ => None,
    }
}

/// Truthiness of a JSON value: null, false, 0, "" and empty containers are false.
#[must_use]
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Serde field adapter: a value of the wrong shape reads as `None` instead of
/// failing the whole payload.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
