use crate::core::resume::ParsedResume;
use crate::models::domain::{CandidateProfile, Job, Team, TeamMember};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to score a single candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub candidate: CandidateProfile,
    pub job: Job,
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

/// Request to rank candidates for a job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankCandidatesRequest {
    pub job: Job,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[validate(length(min = 1))]
    pub candidates: Vec<CandidateProfile>,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u16,
}

fn default_limit() -> u16 {
    20
}

/// Request to score a team's overall compatibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCompatibilityRequest {
    pub team: Team,
}

/// Request to find the skills a team is missing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillGapRequest {
    pub team: Team,
    #[validate(length(min = 1))]
    #[serde(alias = "required_skills", rename = "requiredSkills")]
    pub required_skills: Vec<String>,
}

/// Parsed resume JSON to normalize into a candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NormalizeResumeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "file_name", rename = "fileName")]
    pub file_name: String,
    pub resume: ParsedResume,
}

/// Query string of the raw resume upload endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParseResumeQuery {
    #[validate(length(min = 1, max = 255))]
    #[serde(alias = "file_name", rename = "fileName")]
    pub file_name: String,
}
