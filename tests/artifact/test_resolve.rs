//! Tests for license, contributor and file listing resolution.

use artifact_trust::artifact::FetchError;
use artifact_trust::artifact::fetch::resolve::{
    is_present, license_from_readme, license_value, parse_file_listing, resolve_contributors,
    resolve_license,
};
use serde_json::json;

#[test]
fn test_license_tag_wins() {
    let tags = vec!["text-generation".to_string(), "license:apache-2.0".to_string()];
    assert_eq!(resolve_license(&tags, Some("mit"), "license: gpl"), "apache-2.0");
}

#[test]
fn test_direct_license_before_readme() {
    let tags = vec!["pytorch".to_string()];
    assert_eq!(resolve_license(&tags, Some("mit"), "license: gpl"), "mit");
}

#[test]
fn test_readme_license_fallback() {
    let readme = "---\nlanguage: en\nLicense:   cc-by-4.0\n---\n# Card";
    assert_eq!(resolve_license(&[], None, readme), "cc-by-4.0");
    assert_eq!(resolve_license(&[], Some("  "), readme), "cc-by-4.0");
}

#[test]
fn test_no_license_is_empty() {
    assert_eq!(resolve_license(&[], None, "# Nothing here"), "");
    assert_eq!(license_from_readme("license:   \n"), None);
}

#[test]
fn test_contributors_from_author_or_namespace() {
    assert_eq!(resolve_contributors(Some("alice"), "org/model"), vec!["alice"]);
    assert_eq!(resolve_contributors(None, "org/model"), vec!["org"]);
    assert_eq!(resolve_contributors(Some(" "), "gpt2"), vec!["gpt2"]);
}

#[test]
fn test_parse_file_listing() {
    let listing = json!([
        {"path": "model.safetensors", "size": 1024, "type": "file"},
        {"path": "configs", "type": "directory"},
        {"size": 3}
    ]);
    let files = parse_file_listing(&listing).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files["model.safetensors"].size, 1024);
    assert_eq!(files["configs"].size, 0);
    assert_eq!(files["configs"].kind, "directory");
}

#[test]
fn test_parse_file_listing_rejects_non_array() {
    let err = parse_file_listing(&json!({"error": "not found"})).unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[test]
fn test_license_value_shapes() {
    assert_eq!(license_value(Some(&json!("mit"))), Some("mit".to_string()));
    assert_eq!(
        license_value(Some(&json!(["apache-2.0", "mit"]))),
        Some("apache-2.0".to_string())
    );
    assert_eq!(license_value(Some(&json!(5))), None);
    assert_eq!(license_value(None), None);
}

#[test]
fn test_is_present_truthiness() {
    assert!(!is_present(None));
    assert!(!is_present(Some(&json!(null))));
    assert!(!is_present(Some(&json!({}))));
    assert!(!is_present(Some(&json!(""))));
    assert!(!is_present(Some(&json!(0))));
    assert!(!is_present(Some(&json!([]))));
    assert!(is_present(Some(&json!({"license": "mit"}))));
    assert!(is_present(Some(&json!(true))));
}
