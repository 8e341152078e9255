//! Rating and recommendation rules for the metadata path.

use serde::{Deserialize, Serialize};

use crate::PostType;

const MEDIUM_THRESHOLD: f64 = 800.0;
const HIGH_THRESHOLD: f64 = 1400.0;

const REACTIONS_SHARE: f64 = 0.70;
const COMMENTS_SHARE: f64 = 0.15;
const SHARES_SHARE: f64 = 0.03;

const LOW_CTR_THRESHOLD: f64 = 0.05;
const REACH_HEADROOM: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementRating {
    Low,
    Medium,
    High,
}

impl EngagementRating {
    pub fn label(self) -> &'static str {
        match self {
            EngagementRating::Low => "Low",
            EngagementRating::Medium => "Medium",
            EngagementRating::High => "High",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            EngagementRating::Low => "red",
            EngagementRating::Medium => "yellow",
            EngagementRating::High => "green",
        }
    }
}

pub fn rate_engagement(score: f64) -> EngagementRating {
    if score < MEDIUM_THRESHOLD {
        EngagementRating::Low
    } else if score < HIGH_THRESHOLD {
        EngagementRating::Medium
    } else {
        EngagementRating::High
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngagementEstimates {
    pub reactions: i64,
    pub comments: i64,
    pub shares: i64,
}

/// Fixed proportional split of the predicted score, not independently
/// modeled sub-metrics.
pub fn estimate_breakdown(score: f64) -> EngagementEstimates {
    EngagementEstimates {
        reactions: (score * REACTIONS_SHARE).round() as i64,
        comments: (score * COMMENTS_SHARE).round() as i64,
        shares: (score * SHARES_SHARE).round() as i64,
    }
}

/// Rule checks run in a fixed order: post-type tip, then CTR, then reach.
/// Every applicable tip is emitted.
pub fn build_recommendations(
    post_type: PostType,
    impressions: u64,
    reach: u64,
    clicks: u64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    let type_tip = match post_type {
        PostType::Text => "Text posts perform well; keep the tone conversational.",
        PostType::Video => "Videos get strong engagement; aim for under 60 seconds.",
        PostType::Image => "Images work well; lead with an eye-catching visual.",
        PostType::Link => "Links reduce engagement; consider posting the link in a comment.",
        PostType::Reel => "Reels are trending; make them easy to share.",
    };
    recommendations.push(type_tip.to_string());

    let ctr = if impressions > 0 {
        clicks as f64 / impressions as f64
    } else {
        0.0
    };
    if ctr < LOW_CTR_THRESHOLD {
        recommendations
            .push("Low CTR; strengthen your hook and call-to-action.".to_string());
    }

    if (reach as f64) < impressions as f64 * REACH_HEADROOM {
        recommendations.push(
            "Boost reach by posting at peak times (8-10 AM or 12-1 PM).".to_string(),
        );
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_boundary_exact() {
        assert_eq!(rate_engagement(799.99), EngagementRating::Low);
        assert_eq!(rate_engagement(800.0), EngagementRating::Medium);
        assert_eq!(rate_engagement(1399.99), EngagementRating::Medium);
        assert_eq!(rate_engagement(1400.0), EngagementRating::High);
    }

    #[test]
    fn breakdown_uses_fixed_split() {
        let estimates = estimate_breakdown(1000.0);
        assert_eq!(estimates.reactions, 700);
        assert_eq!(estimates.comments, 150);
        assert_eq!(estimates.shares, 30);
    }

    #[test]
    fn zero_impressions_counts_as_low_ctr() {
        let recommendations = build_recommendations(PostType::Text, 0, 0, 0);
        assert!(recommendations
            .iter()
            .any(|tip| tip.contains("Low CTR")));
    }

    #[test]
    fn healthy_metrics_emit_only_the_type_tip() {
        // CTR 10%, reach well above impressions.
        let recommendations = build_recommendations(PostType::Video, 1000, 2000, 100);
        assert_eq!(recommendations.len(), 1);
        assert!(recommendations[0].contains("Videos"));
    }
}
