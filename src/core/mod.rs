// Core scoring exports
pub mod compatibility;
pub mod experience;
pub mod job_match;
pub mod resume;
pub mod scorer;
pub mod scoring;
pub mod skills;
pub mod team_fit;

pub use compatibility::{team_compatibility, team_skill_gaps, SkillGapAnalysis};
pub use experience::{experience_score, parse_duration_years, ExperienceMatch};
pub use job_match::{job_match_score, JobMatch};
pub use resume::{normalize_batch, normalize_resume, FileOutcome, ParsedResume, ResumeError};
pub use scorer::{RankResult, Scorer};
pub use scoring::{calculate_overall_score, clamp_score};
pub use skills::{normalize_skill_name, MatchKind, SkillKey, SkillMatcher, SynonymError, SynonymTable};
pub use team_fit::{team_fit_score, work_style_alignment, work_style_match, TeamFit};
