//! Metadata feature extraction.
//!
//! The column list below is the schema the regression artifact was fitted
//! against. Names, order and derivation formulas are frozen together with
//! the artifact; `ModelContext` refuses bundles that disagree.

use crate::features::FeatureVector;
use crate::{PostMetadata, PostType};

pub const FEATURE_COLUMNS: [&str; 11] = [
    "is_text",
    "is_image",
    "is_video",
    "is_link",
    "is_reel",
    "month_num",
    "impressions",
    "reach",
    "clicks",
    "impression_to_reach_ratio",
    "click_through_rate",
];

pub fn extract_metadata_features(metadata: &PostMetadata) -> FeatureVector {
    let mut features = FeatureVector::new();

    for post_type in PostType::ALL {
        let indicator = if metadata.post_type == post_type {
            1.0
        } else {
            0.0
        };
        features.push(post_type.column_name(), indicator);
    }

    features.push("month_num", metadata.month.number() as f64);
    features.push("impressions", metadata.impressions as f64);
    features.push("reach", metadata.reach as f64);
    features.push("clicks", metadata.clicks as f64);

    let impression_to_reach_ratio = if metadata.reach > 0 {
        metadata.impressions as f64 / metadata.reach as f64
    } else {
        0.0
    };
    features.push("impression_to_reach_ratio", impression_to_reach_ratio);

    let click_through_rate = if metadata.impressions > 0 {
        metadata.clicks as f64 / metadata.impressions as f64 * 100.0
    } else {
        0.0
    };
    features.push("click_through_rate", click_through_rate);

    features
}
