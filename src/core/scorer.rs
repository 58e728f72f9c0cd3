use crate::core::{
    compatibility::{team_compatibility, team_skill_gaps, SkillGapAnalysis},
    experience::experience_score,
    job_match::job_match_score,
    scoring::calculate_overall_score,
    skills::SkillMatcher,
    team_fit::{team_fit_score, work_style_alignment},
};
use crate::models::{CandidateProfile, Job, ScoreBreakdown, ScoreReport, ScoringConstants, ScoringWeights, TeamMember};

/// Result of ranking candidates for a job
#[derive(Debug)]
pub struct RankResult {
    pub reports: Vec<ScoreReport>,
    pub total_candidates: usize,
}

/// Single entry point for all compatibility scoring
///
/// # Scoring stages
/// 1. Job match: required-skill coverage
/// 2. Experience: years of history against the job's target level
/// 3. Team fit: complementary vs overlapping skills
/// 4. Work style: alignment with members' declared styles
/// 5. Weighted blend into the overall TalentFit score
///
/// Every method is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: ScoringWeights,
    constants: ScoringConstants,
    skills: SkillMatcher,
    min_overall_score: u8,
}

impl Scorer {
    pub fn new(weights: ScoringWeights, constants: ScoringConstants, skills: SkillMatcher) -> Self {
        Self {
            weights,
            constants,
            skills,
            min_overall_score: 0,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            ScoringWeights::default(),
            ScoringConstants::default(),
            SkillMatcher::exact(),
        )
    }

    /// Drop candidates whose overall score is below `min` when ranking
    pub fn with_min_overall_score(mut self, min: u8) -> Self {
        self.min_overall_score = min;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn constants(&self) -> &ScoringConstants {
        &self.constants
    }

    pub fn skill_matcher(&self) -> &SkillMatcher {
        &self.skills
    }

    /// Score one candidate for a job and the team they would join
    pub fn score(&self, candidate: &CandidateProfile, job: &Job, team: &[TeamMember]) -> ScoreReport {
        let job_match = job_match_score(
            &candidate.skills,
            &job.required_skills,
            &self.skills,
            &self.constants,
        );

        let title = (!job.title.trim().is_empty()).then_some(job.title.as_str());
        let experience = experience_score(candidate, job.experience_level, title);

        let team_fit = team_fit_score(&candidate.skills, team, &self.skills, &self.constants);

        let work_style = work_style_alignment(candidate.work_style.as_ref(), team, &self.constants);

        let overall = calculate_overall_score(
            job_match.score,
            experience.score,
            team_fit.score,
            work_style,
            &self.weights,
        );

        let reasoning = if job_match.missing.is_empty() {
            format!("Covers all required skills. {}", experience.reasoning)
        } else {
            format!(
                "Missing {} required skill(s). {}",
                job_match.missing.len(),
                experience.reasoning
            )
        };

        ScoreReport {
            candidate_id: candidate.id.clone(),
            candidate_name: candidate.name.clone(),
            breakdown: ScoreBreakdown {
                skills_match: job_match.score,
                experience_match: experience.score,
                work_style_alignment: work_style,
                team_fit: team_fit.score,
                overall,
            },
            matched_skills: job_match.matched,
            missing_skills: job_match.missing,
            complementary_skills: team_fit.complementary,
            overlapping_skills: team_fit.overlapping,
            experience_years: experience.years,
            reasoning,
        }
    }

    /// Score and rank candidates for a job
    ///
    /// Ordered by overall score (descending), then skills match
    /// (descending), then candidate id, and truncated to `limit`.
    pub fn rank_candidates(
        &self,
        job: &Job,
        team: &[TeamMember],
        candidates: Vec<CandidateProfile>,
        limit: usize,
    ) -> RankResult {
        let total_candidates = candidates.len();

        let mut reports: Vec<ScoreReport> = candidates
            .iter()
            .map(|candidate| self.score(candidate, job, team))
            .filter(|report| report.breakdown.overall >= self.min_overall_score)
            .collect();

        reports.sort_by(|a, b| {
            b.breakdown
                .overall
                .cmp(&a.breakdown.overall)
                .then_with(|| b.breakdown.skills_match.cmp(&a.breakdown.skills_match))
                .then_with(|| a.candidate_id.cmp(&b.candidate_id))
        });

        reports.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} candidates for job {}",
            reports.len(),
            total_candidates,
            job.id
        );

        RankResult {
            reports,
            total_candidates,
        }
    }

    /// Overall compatibility of a team's members
    pub fn team_compatibility(&self, members: &[TeamMember]) -> u8 {
        team_compatibility(members, &self.skills, &self.constants)
    }

    /// Required skills the team lacks and the seniority to hire for
    pub fn team_skill_gaps(&self, members: &[TeamMember], required_skills: &[String]) -> SkillGapAnalysis {
        team_skill_gaps(members, required_skills, &self.skills)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
