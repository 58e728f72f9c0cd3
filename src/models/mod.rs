// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, Collaboration, Communication, Education, ExperienceLevel, Job, MatchMode, Pace,
    RequiredSkill, ScoreBreakdown, ScoreReport, ScoringConstants, ScoringWeights, Skill,
    SkillLevel, Team, TeamMember, WorkExperience, WorkStyle,
};
pub use requests::{
    NormalizeResumeRequest, ParseResumeQuery, RankCandidatesRequest, ScoreRequest,
    SkillGapRequest, TeamCompatibilityRequest,
};
pub use responses::{
    ErrorResponse, HealthResponse, RankCandidatesResponse, TeamCompatibilityResponse,
};
