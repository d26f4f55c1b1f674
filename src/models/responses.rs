use serde::{Deserialize, Serialize};
use crate::models::domain::Recommendations;

/// Response for the mentor recommendation endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecommendMentorsResponse {
    pub success: bool,
    pub count: usize,
    pub data: Recommendations,
}

/// Response for the skill gap endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapResponse {
    pub success: bool,
    pub missing_skills: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
