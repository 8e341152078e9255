use serde::{Deserialize, Serialize};

use engage_sim::{
    Month, PostMetadata, PostType, PostTypeComparison, PredictionResult, PredictorError,
    TextScoreResult,
};

#[derive(Debug, Deserialize)]
pub struct ApiPredictRequest {
    pub post_type: String,
    pub month: Option<String>,
    pub impressions: Option<u64>,
    pub reach: Option<u64>,
    pub clicks: Option<u64>,
}

impl ApiPredictRequest {
    pub fn into_metadata(self) -> Result<PostMetadata, PredictorError> {
        let post_type = PostType::from_str(&self.post_type).ok_or_else(|| {
            PredictorError::validation(format!("invalid post type: {}", self.post_type))
        })?;
        let month = self
            .month
            .as_deref()
            .map(Month::parse_lenient)
            .unwrap_or(Month::May);

        Ok(PostMetadata {
            post_type,
            month,
            impressions: self.impressions.unwrap_or(1000),
            reach: self.reach.unwrap_or(1200),
            clicks: self.clicks.unwrap_or(100),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiPredictResponse {
    pub post_type: String,
    pub engagement_score: f64,
    pub rating: String,
    pub color: String,
    pub estimated_reactions: i64,
    pub estimated_comments: i64,
    pub estimated_shares: i64,
    pub recommendations: Vec<String>,
}

impl ApiPredictResponse {
    pub fn from_result(result: PredictionResult) -> Self {
        Self {
            post_type: result.post_type.label().to_string(),
            engagement_score: result.engagement_score,
            rating: result.rating.label().to_string(),
            color: result.rating.color().to_string(),
            estimated_reactions: result.estimated_reactions,
            estimated_comments: result.estimated_comments,
            estimated_shares: result.estimated_shares,
            recommendations: result.recommendations,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiCompareRequest {
    pub month: Option<String>,
    pub impressions: Option<u64>,
    pub reach: Option<u64>,
    pub clicks: Option<u64>,
}

impl ApiCompareRequest {
    pub fn month(&self) -> Month {
        self.month
            .as_deref()
            .map(Month::parse_lenient)
            .unwrap_or(Month::May)
    }
}

#[derive(Debug, Serialize)]
pub struct ApiCompareEntry {
    pub post_type: String,
    pub engagement_score: f64,
    pub rating: String,
}

impl ApiCompareEntry {
    pub fn from_comparison(entry: PostTypeComparison) -> Self {
        Self {
            post_type: entry.post_type.label().to_string(),
            engagement_score: entry.engagement_score,
            rating: entry.rating.label().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiAnalyzeRequest {
    pub text: Option<String>,
    pub post_type: Option<String>,
}

impl ApiAnalyzeRequest {
    pub fn into_parts(self) -> Result<(String, PostType), PredictorError> {
        let text = self.text.unwrap_or_default();
        if text.trim().is_empty() {
            return Err(PredictorError::validation("text is required".to_string()));
        }
        let post_type = match self.post_type.as_deref() {
            Some(value) => PostType::from_str(value).ok_or_else(|| {
                PredictorError::validation(format!("invalid post type: {}", value))
            })?,
            None => PostType::Text,
        };
        Ok((text, post_type))
    }
}

#[derive(Debug, Serialize)]
pub struct ApiAnalyzeResponse {
    pub score: u32,
    pub rating: String,
    pub color: String,
    pub feedback: Vec<String>,
    pub features: engage_sim::TextFeatures,
}

impl ApiAnalyzeResponse {
    pub fn from_result(result: TextScoreResult) -> Self {
        Self {
            score: result.score,
            rating: result.rating.label().to_string(),
            color: result.rating.color().to_string(),
            feedback: result.feedback,
            features: result.features,
        }
    }
}
