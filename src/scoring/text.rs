//! Rule-based scoring of raw post text.
//!
//! Scoring starts at a base of 50 and applies independent additive
//! adjustments, so evaluation order cannot change the number. Feedback is a
//! separate pass with its own fixed line order: word count, hashtags, hook,
//! CTA, links, line breaks, list usage.

use serde::{Deserialize, Serialize};

use crate::features::text::TextFeatures;

const BASE_SCORE: i32 = 50;

const EXCELLENT_THRESHOLD: u32 = 80;
const GOOD_THRESHOLD: u32 = 65;
const AVERAGE_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentRating {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl ContentRating {
    pub fn label(self) -> &'static str {
        match self {
            ContentRating::Excellent => "Excellent",
            ContentRating::Good => "Good",
            ContentRating::Average => "Average",
            ContentRating::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ContentRating::Excellent => "green",
            ContentRating::Good => "yellow",
            ContentRating::Average => "orange",
            ContentRating::NeedsImprovement => "red",
        }
    }
}

pub fn rate_content(score: u32) -> ContentRating {
    if score >= EXCELLENT_THRESHOLD {
        ContentRating::Excellent
    } else if score >= GOOD_THRESHOLD {
        ContentRating::Good
    } else if score >= AVERAGE_THRESHOLD {
        ContentRating::Average
    } else {
        ContentRating::NeedsImprovement
    }
}

pub fn score_text(features: &TextFeatures) -> u32 {
    let mut score = BASE_SCORE;

    // Word count, optimal 150-200.
    if (150..=200).contains(&features.word_count) {
        score += 10;
    } else if (100..=250).contains(&features.word_count) {
        score += 5;
    } else if features.word_count < 50 || features.word_count > 300 {
        score -= 5;
    }

    // Hashtags, optimal 3-5.
    if (3..=5).contains(&features.hashtag_count) {
        score += 8;
    } else if features.hashtag_count == 0 {
        score -= 5;
    } else if features.hashtag_count > 7 {
        score -= 3;
    }

    // Emoji, a light touch helps.
    if (1..=3).contains(&features.emoji_count) {
        score += 5;
    } else if features.emoji_count > 5 {
        score -= 2;
    }

    // Hook signals stack independently.
    if features.hook_has_number {
        score += 5;
    }
    if features.hook_has_emoji {
        score += 5;
    }
    if features.hook_has_question {
        score += 5;
    }
    if features.hook_length > 100 {
        score -= 3;
    }

    // Engagement triggers.
    if features.has_cta {
        score += 8;
    }
    if features.has_list {
        score += 7;
    }
    if features.question_marks > 0 {
        score += 5;
    }

    // Sentiment.
    if features.polarity > 0.3 {
        score += 5;
    } else if features.polarity < -0.2 {
        score -= 3;
    }

    // Links suppress in-feed engagement.
    if features.url_count > 0 {
        score -= 10;
    }

    // Readability.
    if features.line_breaks >= 3 {
        score += 5;
    }

    score.clamp(0, 100) as u32
}

/// One feedback line per checked dimension, corrective or confirming.
pub fn build_feedback(features: &TextFeatures) -> Vec<String> {
    let mut feedback = Vec::new();

    if features.word_count < 100 {
        feedback.push(
            "Post is too short; aim for 150-200 words for better engagement.".to_string(),
        );
    } else if features.word_count > 250 {
        feedback.push(
            "Post is too long; consider breaking it into smaller sections.".to_string(),
        );
    } else {
        feedback.push("Word count is optimal.".to_string());
    }

    if features.hashtag_count == 0 {
        feedback.push("Add 3-5 relevant hashtags to increase discoverability.".to_string());
    } else if features.hashtag_count < 3 {
        feedback.push("Add a few more hashtags; 3-5 is optimal.".to_string());
    } else if features.hashtag_count > 7 {
        feedback.push("Too many hashtags; reduce to 3-5 for better results.".to_string());
    } else {
        feedback.push("Hashtag count is on target.".to_string());
    }

    if !features.hook_has_emoji && !features.hook_has_number {
        feedback.push(
            "Strengthen your hook with an emoji or a number in the first line.".to_string(),
        );
    } else {
        feedback.push("Strong hook detected.".to_string());
    }

    if !features.has_cta {
        feedback.push(
            "Add a call-to-action: ask a question or invite comments.".to_string(),
        );
    } else {
        feedback.push("Call-to-action present.".to_string());
    }

    if features.url_count > 0 {
        feedback.push(
            "Links reduce engagement; consider posting them in a comment instead.".to_string(),
        );
    }

    if features.line_breaks < 3 {
        feedback.push("Add more line breaks for better readability.".to_string());
    } else {
        feedback.push("Good formatting with line breaks.".to_string());
    }

    if !features.has_list {
        feedback.push(
            "Consider bullet points or a numbered list for clarity.".to_string(),
        );
    } else {
        feedback.push("List format detected; great for engagement.".to_string());
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_features() -> TextFeatures {
        TextFeatures {
            word_count: 120,
            char_count: 600,
            line_breaks: 0,
            sentence_count: 6,
            hashtag_count: 1,
            mention_count: 0,
            url_count: 0,
            question_marks: 0,
            exclamation_marks: 0,
            emoji_count: 0,
            polarity: 0.0,
            subjectivity: 0.5,
            hook_length: 40,
            hook_has_number: false,
            hook_has_emoji: false,
            hook_has_question: false,
            has_cta: false,
            has_list: false,
        }
    }

    #[test]
    fn base_features_land_near_the_midpoint() {
        // 50 + 5 (word count 100-250).
        assert_eq!(score_text(&base_features()), 55);
    }

    #[test]
    fn all_penalties_together_stay_in_range() {
        let features = TextFeatures {
            word_count: 10,
            hashtag_count: 0,
            url_count: 2,
            polarity: -0.9,
            hook_length: 120,
            emoji_count: 9,
            ..base_features()
        };
        // 50 - 5 - 5 - 2 - 3 - 3 - 10 = 22.
        assert_eq!(score_text(&features), 22);
    }

    #[test]
    fn all_bonuses_together_clamp_at_100() {
        let features = TextFeatures {
            word_count: 175,
            hashtag_count: 4,
            emoji_count: 2,
            question_marks: 2,
            polarity: 0.6,
            line_breaks: 4,
            hook_has_number: true,
            hook_has_emoji: true,
            hook_has_question: true,
            has_cta: true,
            has_list: true,
            ..base_features()
        };
        // Raw total is 108 before the clamp.
        assert_eq!(score_text(&features), 100);
    }

    #[test]
    fn rating_tiers_are_boundary_exact() {
        assert_eq!(rate_content(80), ContentRating::Excellent);
        assert_eq!(rate_content(79), ContentRating::Good);
        assert_eq!(rate_content(65), ContentRating::Good);
        assert_eq!(rate_content(64), ContentRating::Average);
        assert_eq!(rate_content(50), ContentRating::Average);
        assert_eq!(rate_content(49), ContentRating::NeedsImprovement);
    }

    #[test]
    fn feedback_order_is_fixed() {
        let features = TextFeatures {
            url_count: 1,
            ..base_features()
        };
        let feedback = build_feedback(&features);
        assert_eq!(feedback.len(), 7);
        assert!(feedback[0].contains("Word count") || feedback[0].contains("too short"));
        assert!(feedback[1].contains("hashtag") || feedback[1].contains("Hashtag"));
        assert!(feedback[2].contains("hook") || feedback[2].contains("Hook"));
        assert!(feedback[3].contains("all-to-action"));
        assert!(feedback[4].contains("Links"));
        assert!(feedback[5].contains("line break"));
        assert!(feedback[6].contains("list") || feedback[6].contains("List"));
    }

    #[test]
    fn link_feedback_only_when_urls_present() {
        let feedback = build_feedback(&base_features());
        assert_eq!(feedback.len(), 6);
        assert!(!feedback.iter().any(|line| line.contains("Links reduce")));
    }
}
