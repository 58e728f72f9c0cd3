use serde::{Deserialize, Serialize};

/// Proficiency level attached to a skill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Parse a free-form level string. Unknown values fall back to intermediate.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "expert" => SkillLevel::Expert,
            "advanced" | "proficient" => SkillLevel::Advanced,
            "beginner" | "familiar" | "novice" => SkillLevel::Beginner,
            _ => SkillLevel::Intermediate,
        }
    }

    /// Relative weight used when comparing a candidate's level with a required one
    pub fn weight(self) -> f64 {
        match self {
            SkillLevel::Beginner => 0.4,
            SkillLevel::Intermediate => 0.6,
            SkillLevel::Advanced => 0.8,
            SkillLevel::Expert => 1.0,
        }
    }
}

impl From<String> for SkillLevel {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Seniority level of a person or of a job opening
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    #[default]
    Mid,
    Senior,
    Lead,
    Any,
}

impl ExperienceLevel {
    /// Parse a free-form level string. Unknown values fall back to mid.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "entry" => ExperienceLevel::Entry,
            "junior" => ExperienceLevel::Junior,
            "senior" => ExperienceLevel::Senior,
            "lead" | "principal" | "staff" => ExperienceLevel::Lead,
            "any" => ExperienceLevel::Any,
            _ => ExperienceLevel::Mid,
        }
    }

    /// (minimum years, ideal years) expected at this level
    pub fn years_required(self) -> (f64, f64) {
        match self {
            ExperienceLevel::Entry | ExperienceLevel::Junior => (0.0, 1.0),
            ExperienceLevel::Mid => (2.0, 4.0),
            ExperienceLevel::Senior => (5.0, 8.0),
            ExperienceLevel::Lead => (7.0, 12.0),
            ExperienceLevel::Any => (0.0, 0.0),
        }
    }

    /// Infer a level from accumulated years of experience
    pub fn from_years(years: f64) -> Self {
        if years < 1.0 {
            ExperienceLevel::Entry
        } else if years < 2.0 {
            ExperienceLevel::Junior
        } else if years < 5.0 {
            ExperienceLevel::Mid
        } else if years < 7.0 {
            ExperienceLevel::Senior
        } else {
            ExperienceLevel::Lead
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
            ExperienceLevel::Any => "any",
        }
    }
}

impl From<String> for ExperienceLevel {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// A named skill with proficiency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(rename = "yearsOfExperience", default)]
    pub years_of_experience: Option<f32>,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level,
            years_of_experience: None,
        }
    }
}

/// Skill a job asks for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub name: String,
    #[serde(default)]
    pub level: Option<SkillLevel>,
    #[serde(default)]
    pub mandatory: Option<bool>,
}

impl RequiredSkill {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
            mandatory: None,
        }
    }

    /// Requirements are mandatory unless explicitly marked nice-to-have
    pub fn is_mandatory(&self) -> bool {
        self.mandatory.unwrap_or(true)
    }
}

/// One entry of a candidate's work history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Communication {
    Async,
    Sync,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collaboration {
    Independent,
    Collaborative,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Fast,
    Steady,
    Flexible,
}

/// Work-style preferences of a team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkStyle {
    pub communication: Communication,
    pub collaboration: Collaboration,
    pub pace: Pace,
}

/// One education entry of a candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub field: Option<String>,
}

/// Candidate profile as consumed by the scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(rename = "workStyle", default)]
    pub work_style: Option<WorkStyle>,
    #[serde(rename = "githubUrl", default)]
    pub github_url: Option<String>,
    #[serde(rename = "linkedinUrl", default)]
    pub linkedin_url: Option<String>,
    #[serde(rename = "websiteUrl", default)]
    pub website_url: Option<String>,
    #[serde(rename = "otherLinks", default)]
    pub other_links: Vec<String>,
}

impl CandidateProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, skills: Vec<Skill>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            phone: None,
            location: None,
            title: None,
            summary: None,
            skills,
            experience: Vec::new(),
            education: Vec::new(),
            experience_level: None,
            work_style: None,
            github_url: None,
            linkedin_url: None,
            website_url: None,
            other_links: Vec::new(),
        }
    }
}

/// Existing member of a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: ExperienceLevel,
    #[serde(rename = "workStyle", default)]
    pub work_style: Option<WorkStyle>,
}

/// Ordered collection of members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// Job opening requirements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Vec<RequiredSkill>,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: ExperienceLevel,
    #[serde(rename = "teamId", default)]
    pub team_id: Option<String>,
}

/// Sub-scores and the blended overall TalentFit score, each in 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "skillsMatch")]
    pub skills_match: u8,
    #[serde(rename = "experienceMatch")]
    pub experience_match: u8,
    #[serde(rename = "workStyleAlignment")]
    pub work_style_alignment: u8,
    #[serde(rename = "teamFit")]
    pub team_fit: u8,
    pub overall: u8,
}

/// Breakdown plus the evidence behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    #[serde(rename = "candidateName")]
    pub candidate_name: String,
    pub breakdown: ScoreBreakdown,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
    #[serde(rename = "complementarySkills")]
    pub complementary_skills: Vec<String>,
    #[serde(rename = "overlappingSkills")]
    pub overlapping_skills: Vec<String>,
    #[serde(rename = "experienceYears")]
    pub experience_years: f64,
    pub reasoning: String,
}

/// How skill names are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-insensitive equality after separator folding
    #[default]
    Exact,
    /// Exact plus alias table lookup (js -> javascript)
    Synonym,
    /// Synonym plus small edit-distance tolerance for longer names
    Fuzzy,
}

/// Weights used to blend sub-scores into the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub team_fit: f64,
    pub work_style: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            experience: 0.30,
            team_fit: 0.20,
            work_style: 0.10,
        }
    }
}

/// Tunable constants of the scoring heuristics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConstants {
    /// Job-match score for a candidate covering none of the requirements
    pub skill_match_base: f64,
    /// Points added on top of the base for full coverage
    pub skill_match_spread: f64,
    pub skill_match_cap: u8,
    /// Job-match score when the job lists no requirements
    pub no_requirements_score: u8,
    /// Weight of a nice-to-have requirement relative to a mandatory one
    pub nice_to_have_weight: f64,
    /// Credit of a requirement met through an alias rather than the exact name
    pub synonym_match_credit: f64,
    /// Multiplier on the similarity of a requirement met through a near-miss spelling
    pub fuzzy_match_factor: f64,

    pub team_fit_base: f64,
    /// Points per candidate skill no team member has
    pub complementary_weight: f64,
    /// Points per candidate skill already present in the team
    pub overlap_weight: f64,
    pub team_fit_cap: u8,
    pub empty_team_fit: u8,

    pub compatibility_baseline: f64,
    pub single_member_compatibility: u8,
    /// Expected distinct skills per member at full diversity
    pub skill_diversity_divisor: f64,
    pub skill_diversity_points: f64,
    /// Number of distinct levels counted as full experience diversity
    pub experience_level_span: f64,
    pub experience_diversity_points: f64,
    pub work_style_bonus_points: f64,

    /// Work-style alignment when either side has no style to compare
    pub work_style_neutral: u8,
}

impl Default for ScoringConstants {
    fn default() -> Self {
        Self {
            skill_match_base: 60.0,
            skill_match_spread: 35.0,
            skill_match_cap: 95,
            no_requirements_score: 70,
            nice_to_have_weight: 0.5,
            synonym_match_credit: 0.95,
            fuzzy_match_factor: 0.9,

            team_fit_base: 70.0,
            complementary_weight: 6.0,
            overlap_weight: 4.0,
            team_fit_cap: 98,
            empty_team_fit: 75,

            compatibility_baseline: 70.0,
            single_member_compatibility: 75,
            skill_diversity_divisor: 5.0,
            skill_diversity_points: 15.0,
            experience_level_span: 4.0,
            experience_diversity_points: 10.0,
            work_style_bonus_points: 5.0,

            work_style_neutral: 75,
        }
    }
}
