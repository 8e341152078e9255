pub mod config;
pub mod errors;
pub mod features;
pub mod model;
pub mod scoring;
pub mod sentiment;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use errors::{PredictorError, Result};
pub use features::text::TextFeatures;
pub use features::{
    extract_metadata_features, extract_text_features, FeatureVector, FEATURE_COLUMNS,
};
pub use model::{ModelBundle, ModelContext};
pub use scoring::{ContentRating, EngagementEstimates, EngagementRating};
pub use sentiment::{LexiconAnalyzer, Sentiment, SentimentAnalyzer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostType {
    Text,
    Image,
    Video,
    Link,
    Reel,
}

impl PostType {
    pub const ALL: [PostType; 5] = [
        PostType::Text,
        PostType::Image,
        PostType::Video,
        PostType::Link,
        PostType::Reel,
    ];

    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "text" => Some(PostType::Text),
            "image" | "photo" => Some(PostType::Image),
            "video" => Some(PostType::Video),
            "link" => Some(PostType::Link),
            "reel" => Some(PostType::Reel),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostType::Text => "Text",
            PostType::Image => "Image",
            PostType::Video => "Video",
            PostType::Link => "Link",
            PostType::Reel => "Reel",
        }
    }

    pub fn column_name(self) -> &'static str {
        match self {
            PostType::Text => "is_text",
            PostType::Image => "is_image",
            PostType::Video => "is_video",
            PostType::Link => "is_link",
            PostType::Reel => "is_reel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "january" | "jan" => Some(Month::January),
            "february" | "feb" => Some(Month::February),
            "march" | "mar" => Some(Month::March),
            "april" | "apr" => Some(Month::April),
            "may" => Some(Month::May),
            "june" | "jun" => Some(Month::June),
            "july" | "jul" => Some(Month::July),
            "august" | "aug" => Some(Month::August),
            "september" | "sep" => Some(Month::September),
            "october" | "oct" => Some(Month::October),
            "november" | "nov" => Some(Month::November),
            "december" | "dec" => Some(Month::December),
            _ => None,
        }
    }

    /// Lenient parse for the string boundary. Unknown names fall back to
    /// May, the mid-year default the artifact has always been exercised
    /// with; the fallback is logged rather than silent.
    pub fn parse_lenient(value: &str) -> Month {
        match Self::from_name(value) {
            Some(month) => month,
            None => {
                warn!(month = value, "unknown month name, defaulting to May");
                Month::May
            }
        }
    }

    pub fn number(self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
            Month::July => 7,
            Month::August => 8,
            Month::September => 9,
            Month::October => 10,
            Month::November => 11,
            Month::December => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PostMetadata {
    pub post_type: PostType,
    pub month: Month,
    pub impressions: u64,
    pub reach: u64,
    pub clicks: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub post_type: PostType,
    pub engagement_score: f64,
    pub rating: EngagementRating,
    pub estimated_reactions: i64,
    pub estimated_comments: i64,
    pub estimated_shares: i64,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostTypeComparison {
    pub post_type: PostType,
    pub engagement_score: f64,
    pub rating: EngagementRating,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextScoreResult {
    pub post_type: PostType,
    pub score: u32,
    pub rating: ContentRating,
    pub feedback: Vec<String>,
    pub features: TextFeatures,
}

/// The training target: reactions weighted 1, comments 3, shares 5. The
/// regression artifact predicts in this unit.
pub fn engagement_score(reactions: u64, comments: u64, shares: u64) -> u64 {
    reactions + comments * 3 + shares * 5
}

pub fn predict_from_metadata(
    context: &ModelContext,
    metadata: &PostMetadata,
) -> Result<PredictionResult> {
    let features = extract_metadata_features(metadata);
    let raw_score = context.predict(&features)?;
    let engagement_score = raw_score.round();

    let estimates = scoring::estimate_breakdown(engagement_score);
    let recommendations = scoring::build_recommendations(
        metadata.post_type,
        metadata.impressions,
        metadata.reach,
        metadata.clicks,
    );

    Ok(PredictionResult {
        post_type: metadata.post_type,
        engagement_score,
        rating: scoring::rate_engagement(engagement_score),
        estimated_reactions: estimates.reactions,
        estimated_comments: estimates.comments,
        estimated_shares: estimates.shares,
        recommendations,
    })
}

/// Runs the metadata prediction for every post type and returns the results
/// sorted by score, best first.
pub fn compare_all_post_types(
    context: &ModelContext,
    month: Month,
    impressions: u64,
    reach: u64,
    clicks: u64,
) -> Result<Vec<PostTypeComparison>> {
    let mut results = Vec::with_capacity(PostType::ALL.len());
    for post_type in PostType::ALL {
        let metadata = PostMetadata {
            post_type,
            month,
            impressions,
            reach,
            clicks,
        };
        let prediction = predict_from_metadata(context, &metadata)?;
        results.push(PostTypeComparison {
            post_type,
            engagement_score: prediction.engagement_score,
            rating: prediction.rating,
        });
    }
    results.sort_by(|a, b| {
        b.engagement_score
            .partial_cmp(&a.engagement_score)
            .unwrap_or(Ordering::Equal)
    });
    Ok(results)
}

const MIN_TEXT_CHARS: usize = 10;

pub fn predict_from_text(text: &str, post_type: PostType) -> Result<TextScoreResult> {
    predict_from_text_with(text, post_type, &LexiconAnalyzer)
}

/// Text-path prediction with a caller-supplied sentiment analyzer.
pub fn predict_from_text_with(
    text: &str,
    post_type: PostType,
    analyzer: &dyn SentimentAnalyzer,
) -> Result<TextScoreResult> {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_TEXT_CHARS {
        return Err(PredictorError::validation(format!(
            "post text must be at least {} characters",
            MIN_TEXT_CHARS
        )));
    }

    let features = extract_text_features(trimmed, analyzer);
    let score = scoring::score_text(&features);
    let feedback = scoring::build_feedback(&features);

    Ok(TextScoreResult {
        post_type,
        score,
        rating: scoring::rate_content(score),
        feedback,
        features,
    })
}

pub fn format_number(value: f64) -> String {
    let rounded = value.round().max(0.0) as i64;
    let mut chars: Vec<char> = rounded.to_string().chars().collect();
    let mut result = String::new();
    let mut count = 0usize;

    while let Some(ch) = chars.pop() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
