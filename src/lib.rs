//! TalentFit - candidate, job and team compatibility scoring
//!
//! This library provides the scoring heuristics behind TalentFit: job skill
//! coverage, team fit, team compatibility, work-style alignment and
//! experience, blended into one explainable 0-100 score. Resume parser output
//! is normalized into candidate profiles before scoring.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{FileOutcome, RankResult, Scorer, SkillMatcher, SynonymTable};
pub use models::{
    CandidateProfile, Job, MatchMode, RequiredSkill, ScoreBreakdown, ScoreReport,
    ScoringConstants, ScoringWeights, Skill, SkillLevel, TeamMember,
};
