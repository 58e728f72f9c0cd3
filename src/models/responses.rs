use crate::models::domain::ScoreReport;
use serde::{Deserialize, Serialize};

/// Response for the candidate ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankCandidatesResponse {
    pub reports: Vec<ScoreReport>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the team compatibility endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCompatibilityResponse {
    #[serde(rename = "teamId")]
    pub team_id: String,
    pub score: u8,
    #[serde(rename = "memberCount")]
    pub member_count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
