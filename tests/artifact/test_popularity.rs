//! Tests for popularity ladders and signal extraction.

use artifact_trust::artifact::{BASE_CREDIT, MAX_SCORE, Signals, ladder_bonus, popularity_score};

fn model(downloads: u64, likes: u64, has_model_card: bool, pipeline_tag: &str) -> Signals {
    Signals::Model {
        downloads,
        likes,
        has_model_card,
        pipeline_tag: pipeline_tag.to_string(),
    }
}

#[test]
fn test_ladder_thresholds_are_exclusive() {
    let ladder = [(100, 2.0), (10, 1.0)];
    assert_eq!(ladder_bonus(100, &ladder), 1.0);
    assert_eq!(ladder_bonus(101, &ladder), 2.0);
    assert_eq!(ladder_bonus(10, &ladder), 0.0);
    assert_eq!(ladder_bonus(0, &[]), 0.0);
}

#[test]
fn test_model_without_signals_gets_base_credit() {
    assert_eq!(popularity_score(&model(0, 0, false, "")), BASE_CREDIT);
}

#[test]
fn test_model_high_metrics_empty_card() {
    // An empty card object does not count as a model card
    assert_eq!(popularity_score(&model(500_000, 200, false, "text-generation")), 8.0);
}

#[test]
fn test_model_score_is_capped() {
    assert_eq!(popularity_score(&model(200_000, 150, true, "text-classification")), MAX_SCORE);
}

#[test]
fn test_model_ladder_steps() {
    assert_eq!(popularity_score(&model(1_001, 21, false, "")), 4.0);
    assert_eq!(popularity_score(&model(10_001, 0, false, "")), 4.0);
}

#[test]
fn test_dataset_scores() {
    let squad = Signals::Dataset {
        downloads: 50_000,
        likes: 100,
        has_description: true,
    };
    assert_eq!(popularity_score(&squad), 9.0);

    let quiet = Signals::Dataset {
        downloads: 50,
        likes: 1,
        has_description: false,
    };
    assert_eq!(popularity_score(&quiet), 2.0);

    let mid = Signals::Dataset {
        downloads: 101,
        likes: 11,
        has_description: false,
    };
    assert_eq!(popularity_score(&mid), 4.0);
}

#[test]
fn test_code_scores() {
    let popular = Signals::Code {
        stars: 5_000,
        forks: 500,
        has_description: true,
        has_license: true,
        language: "Python".to_string(),
    };
    assert_eq!(popularity_score(&popular), MAX_SCORE);

    let small = Signals::Code {
        stars: 5,
        forks: 1,
        has_description: false,
        has_license: false,
        language: String::new(),
    };
    assert_eq!(popularity_score(&small), 2.0);

    let mid = Signals::Code {
        stars: 150,
        forks: 11,
        has_description: false,
        has_license: true,
        language: String::new(),
    };
    assert_eq!(popularity_score(&mid), 5.5);
}

#[test]
fn test_signals_serialize_flat() {
    let json = serde_json::to_value(model(10, 2, true, "fill-mask")).unwrap();
    assert_eq!(json["downloads"], 10);
    assert_eq!(json["has_model_card"], true);
    assert_eq!(json["pipeline_tag"], "fill-mask");
}
