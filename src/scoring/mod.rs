pub mod rating;
pub mod text;

pub use rating::{
    build_recommendations, estimate_breakdown, rate_engagement, EngagementEstimates,
    EngagementRating,
};
pub use text::{build_feedback, rate_content, score_text, ContentRating};
