use std::collections::HashSet;

use engage_sim::model::bundle::BUNDLE_VERSION;
use engage_sim::model::{DecisionTree, ForestRegressor, ModelBundle, ModelContext, StandardScaler, TreeNode};
use engage_sim::{
    compare_all_post_types, predict_from_metadata, EngagementRating, Month, PostMetadata, PostType,
    FEATURE_COLUMNS,
};

fn leaf(value: f64) -> TreeNode {
    TreeNode {
        feature: 0,
        threshold: 0.0,
        left: 0,
        right: 0,
        value: Some(value),
    }
}

fn split(feature: usize, threshold: f64, left: usize, right: usize) -> TreeNode {
    TreeNode {
        feature,
        threshold,
        left,
        right,
        value: None,
    }
}

fn context_with_tree(nodes: Vec<TreeNode>) -> ModelContext {
    let columns: Vec<String> = FEATURE_COLUMNS.iter().map(|name| name.to_string()).collect();
    let len = columns.len();
    let bundle = ModelBundle {
        version: BUNDLE_VERSION,
        feature_columns: columns,
        scaler: StandardScaler {
            mean: vec![0.0; len],
            std: vec![1.0; len],
        },
        forest: ForestRegressor {
            trees: vec![DecisionTree { nodes }],
        },
    };
    ModelContext::new(bundle).unwrap()
}

fn constant_context(value: f64) -> ModelContext {
    context_with_tree(vec![leaf(value)])
}

/// One score per post type: video 2000, reel 1500, text 900, image 700,
/// link 300 (one-hot columns are at indices 0-4).
fn per_type_context() -> ModelContext {
    context_with_tree(vec![
        split(2, 0.5, 1, 2),
        split(3, 0.5, 3, 4),
        leaf(2000.0),
        split(4, 0.5, 5, 6),
        leaf(300.0),
        split(0, 0.5, 7, 8),
        leaf(1500.0),
        leaf(700.0),
        leaf(900.0),
    ])
}

fn metadata(post_type: PostType) -> PostMetadata {
    PostMetadata {
        post_type,
        month: Month::May,
        impressions: 1000,
        reach: 1200,
        clicks: 100,
    }
}

#[test]
fn ratings_follow_the_predicted_score() {
    let low = predict_from_metadata(&constant_context(500.0), &metadata(PostType::Text)).unwrap();
    assert_eq!(low.rating, EngagementRating::Low);

    let medium =
        predict_from_metadata(&constant_context(1000.0), &metadata(PostType::Text)).unwrap();
    assert_eq!(medium.rating, EngagementRating::Medium);

    let high = predict_from_metadata(&constant_context(1500.0), &metadata(PostType::Text)).unwrap();
    assert_eq!(high.rating, EngagementRating::High);
}

#[test]
fn sub_estimates_use_the_fixed_split() {
    let result = predict_from_metadata(&constant_context(1000.0), &metadata(PostType::Text)).unwrap();
    assert_eq!(result.estimated_reactions, 700);
    assert_eq!(result.estimated_comments, 150);
    assert_eq!(result.estimated_shares, 30);
}

#[test]
fn low_ctr_link_post_gets_both_tips() {
    let context = constant_context(600.0);
    let meta = PostMetadata {
        post_type: PostType::Link,
        month: Month::May,
        impressions: 5000,
        reach: 6000,
        clicks: 50,
    };
    let result = predict_from_metadata(&context, &meta).unwrap();

    assert_eq!(result.recommendations.len(), 2);
    assert!(result.recommendations[0].contains("Links reduce engagement"));
    assert!(result.recommendations[1].contains("Low CTR"));
}

#[test]
fn underperforming_reach_adds_the_peak_times_tip() {
    let context = constant_context(600.0);
    let meta = PostMetadata {
        post_type: PostType::Text,
        month: Month::May,
        impressions: 5000,
        reach: 5000,
        clicks: 500,
    };
    let result = predict_from_metadata(&context, &meta).unwrap();

    // CTR is 10%, so only the type tip and the reach tip fire, in order.
    assert_eq!(result.recommendations.len(), 2);
    assert!(result.recommendations[1].contains("peak times"));
}

#[test]
fn comparison_covers_all_types_sorted_descending() {
    let context = per_type_context();
    let comparison = compare_all_post_types(&context, Month::May, 1000, 1200, 100).unwrap();

    assert_eq!(comparison.len(), 5);

    let types: HashSet<&str> = comparison
        .iter()
        .map(|entry| entry.post_type.label())
        .collect();
    assert_eq!(types.len(), 5);

    for pair in comparison.windows(2) {
        assert!(pair[0].engagement_score >= pair[1].engagement_score);
    }

    assert_eq!(comparison[0].post_type, PostType::Video);
    assert_eq!(comparison[4].post_type, PostType::Link);
}

#[test]
fn identical_inputs_give_identical_predictions() {
    let context = per_type_context();
    let first = predict_from_metadata(&context, &metadata(PostType::Reel)).unwrap();
    let second = predict_from_metadata(&context, &metadata(PostType::Reel)).unwrap();
    assert_eq!(first.engagement_score, second.engagement_score);
    assert_eq!(first.recommendations, second.recommendations);
}
