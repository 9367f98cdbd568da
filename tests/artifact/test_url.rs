//! Tests for URL classification and identifier extraction.

use artifact_trust::artifact::{
    ArtifactRef, Category, TrustError, UrlRecord, classify, namespace_of, normalize_link,
};

#[test]
fn test_classify_each_category() {
    assert_eq!(
        classify("https://huggingface.co/google/gemma-3-270m"),
        Category::Model
    );
    assert_eq!(
        classify("https://huggingface.co/datasets/xlangai/AgentNet"),
        Category::Dataset
    );
    assert_eq!(
        classify("https://github.com/SkyworkAI/Matrix-Game"),
        Category::Code
    );
}

#[test]
fn test_classify_single_segment_model() {
    assert_eq!(classify("https://huggingface.co/model"), Category::Model);
    assert_eq!(classify("https://huggingface.co/gpt2/tree/main"), Category::Model);
}

#[test]
fn test_classify_invalid() {
    assert_eq!(classify(""), Category::Invalid);
    assert_eq!(classify("not a url"), Category::Invalid);
    assert_eq!(classify("https://example.com/foo/bar"), Category::Invalid);
    assert_eq!(classify("https://github.com/just-owner"), Category::Invalid);
    assert_eq!(classify("https://huggingface.co/datasets"), Category::Invalid);
    assert_eq!(classify("https://huggingface.co/spaces/org/demo"), Category::Invalid);
}

#[test]
fn test_classify_is_case_insensitive() {
    assert_eq!(classify("HTTPS://HuggingFace.co/google/bert"), Category::Model);
    assert_eq!(classify("https://GitHub.com/owner/repo"), Category::Code);
}

#[test]
fn test_normalize_link() {
    assert_eq!(
        normalize_link("  https://github.com/a/b/?tab=readme#top "),
        "https://github.com/a/b"
    );
    assert_eq!(normalize_link("https://huggingface.co/gpt2"), "https://huggingface.co/gpt2");
}

#[test]
fn test_model_ids() {
    let cases = [
        ("https://huggingface.co/google/gemma-3-270m", "google/gemma-3-270m"),
        ("https://huggingface.co/google/gemma-3-270m/tree/main", "google/gemma-3-270m"),
        ("https://huggingface.co/gpt2/blob/main/config.json", "gpt2"),
        ("https://huggingface.co/google/bert?library=transformers", "google/bert"),
    ];
    for (link, id) in cases {
        let artifact = ArtifactRef::from_link(link, Category::Model).unwrap();
        assert_eq!(artifact, ArtifactRef::Model { id: id.to_string() }, "{link}");
    }
}

#[test]
fn test_dataset_ids() {
    let squad = ArtifactRef::from_link("https://huggingface.co/datasets/squad", Category::Dataset)
        .unwrap();
    assert_eq!(squad.id(), "squad");
    assert_eq!(squad.category(), Category::Dataset);

    let nested = ArtifactRef::from_link(
        "https://huggingface.co/datasets/xlangai/AgentNet/tree/main",
        Category::Dataset,
    )
    .unwrap();
    assert_eq!(nested.id(), "xlangai/AgentNet");
}

#[test]
fn test_code_ids() {
    let artifact =
        ArtifactRef::from_link("https://github.com/SkyworkAI/Matrix-Game.git", Category::Code)
            .unwrap();
    assert_eq!(
        artifact,
        ArtifactRef::Code {
            owner: "SkyworkAI".to_string(),
            repo: "Matrix-Game".to_string(),
        }
    );
    assert_eq!(artifact.id(), "SkyworkAI/Matrix-Game");

    let deep = ArtifactRef::from_link("https://github.com/owner/repo/tree/main/src", Category::Code)
        .unwrap();
    assert_eq!(deep.id(), "owner/repo");
}

#[test]
fn test_extraction_for_wrong_category_fails() {
    let err = ArtifactRef::from_link("https://github.com/a/b", Category::Model).unwrap_err();
    assert!(matches!(
        err,
        TrustError::InvalidUrl {
            category: Category::Model,
            ..
        }
    ));
    assert!(ArtifactRef::from_link("https://huggingface.co/gpt2", Category::Invalid).is_err());
}

#[test]
fn test_url_record() {
    let record = UrlRecord::new("  https://github.com/a/b ");
    assert_eq!(record.link(), "https://github.com/a/b");
    assert_eq!(record.category(), Category::Code);
    assert!(record.is_valid());
    assert_eq!(record.to_string(), "https://github.com/a/b [CODE]");

    let parsed = ArtifactRef::parse(&record).unwrap();
    assert_eq!(parsed.id(), "a/b");

    assert!(!UrlRecord::new("ftp://nowhere").is_valid());
}

#[test]
fn test_namespace_of() {
    assert_eq!(namespace_of("google/bert"), "google");
    assert_eq!(namespace_of("gpt2"), "gpt2");
    assert_eq!(namespace_of(""), "");
}

#[test]
fn test_category_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Category::Dataset).unwrap(), "\"DATASET\"");
    assert_eq!(Category::Invalid.as_str(), "INVALID");
}
