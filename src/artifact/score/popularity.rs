//! Popularity score computation from fetched metadata

use crate::artifact::score::types::{MAX_SCORE, Signals};
use crate::artifact::types::{FetchResult, PlatformDetails};

/// Credit for a well-formed URL, before any popularity signal
pub const BASE_CREDIT: f64 = 2.0;

/// `(exclusive threshold, bonus)` steps, highest first
type Ladder = &'static [(u64, f64)];

const MODEL_DOWNLOADS: Ladder = &[(100_000, 3.0), (10_000, 2.0), (1_000, 1.0)];
const MODEL_LIKES: Ladder = &[(100, 2.0), (20, 1.0)];
const DATASET_DOWNLOADS: Ladder = &[(10_000, 3.0), (1_000, 2.0), (100, 1.0)];
const DATASET_LIKES: Ladder = &[(50, 2.0), (10, 1.0)];
const CODE_STARS: Ladder = &[(1_000, 3.0), (100, 2.0), (10, 1.0)];
const CODE_FORKS: Ladder = &[(100, 1.0), (10, 0.5)];

const MODEL_CARD_BONUS: f64 = 2.0;
const PIPELINE_TAG_BONUS: f64 = 1.0;
const DESCRIPTION_BONUS: f64 = 2.0;
const LICENSE_BONUS: f64 = 1.0;
const LANGUAGE_BONUS: f64 = 1.0;

/// Bonus of the first step whose threshold `value` exceeds.
#[must_use]
pub fn ladder_bonus(value: u64, ladder: &[(u64, f64)]) -> f64 {
    ladder
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map_or(0.0, |(_, bonus)| *bonus)
}

fn flag(present: bool, bonus: f64) -> f64 {
    if present { bonus } else { 0.0 }
}

/// Popularity inputs of a fetched record
#[must_use]
pub fn signals_for(fetched: &FetchResult) -> Signals {
    match &fetched.platform {
        PlatformDetails::Model {
            pipeline_tag,
            has_model_card,
            ..
        } => Signals::Model {
            downloads: fetched.metric("downloads"),
            likes: fetched.metric("likes"),
            has_model_card: *has_model_card,
            pipeline_tag: pipeline_tag.clone(),
        },
        PlatformDetails::Dataset { description, .. } => Signals::Dataset {
            downloads: fetched.metric("downloads"),
            likes: fetched.metric("likes"),
            has_description: !description.trim().is_empty(),
        },
        PlatformDetails::Code {
            description,
            language,
            ..
        } => Signals::Code {
            stars: fetched.metric("stars"),
            forks: fetched.metric("forks"),
            has_description: !description.trim().is_empty(),
            has_license: !fetched.license.is_empty(),
            language: language.clone(),
        },
    }
}

/// Base credit plus ladder and flag bonuses, capped at [`MAX_SCORE`].
#[must_use]
pub fn popularity_score(signals: &Signals) -> f64 {
    let bonus = match signals {
        Signals::Model {
            downloads,
            likes,
            has_model_card,
            pipeline_tag,
        } => {
            ladder_bonus(*downloads, MODEL_DOWNLOADS)
                + ladder_bonus(*likes, MODEL_LIKES)
                + flag(*has_model_card, MODEL_CARD_BONUS)
                + flag(!pipeline_tag.is_empty(), PIPELINE_TAG_BONUS)
        }
        Signals::Dataset {
            downloads,
            likes,
            has_description,
        } => {
            ladder_bonus(*downloads, DATASET_DOWNLOADS)
                + ladder_bonus(*likes, DATASET_LIKES)
                + flag(*has_description, DESCRIPTION_BONUS)
        }
        Signals::Code {
            stars,
            forks,
            has_description,
            has_license,
            language,
        } => {
            ladder_bonus(*stars, CODE_STARS)
                + ladder_bonus(*forks, CODE_FORKS)
                + flag(*has_description, DESCRIPTION_BONUS)
                + flag(*has_license, LICENSE_BONUS)
                + flag(!language.is_empty(), LANGUAGE_BONUS)
        }
    };

    (BASE_CREDIT + bonus).min(MAX_SCORE)
}
