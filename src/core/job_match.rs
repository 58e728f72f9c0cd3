use crate::core::scoring::clamp_score;
use crate::core::skills::{SkillKey, SkillMatcher};
use crate::models::{RequiredSkill, ScoringConstants, Skill};

/// Outcome of matching a candidate's skills against a job's requirements
#[derive(Debug, Clone, PartialEq)]
pub struct JobMatch {
    pub score: u8,
    /// Weighted share of requirements covered, in 0.0..=1.0
    pub fraction: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Score how well a candidate's skills cover a job's required skills
///
/// score = clamp(round(base + spread * fraction), 0, cap)
///
/// Mandatory requirements weigh 1.0, nice-to-have ones `nice_to_have_weight`.
/// An alias match earns `synonym_match_credit` and a near-miss spelling its
/// similarity times `fuzzy_match_factor`. A matched skill below the required
/// level earns partial credit proportional to the level weights on top of
/// that. A job without requirements yields `no_requirements_score`.
pub fn job_match_score(
    candidate_skills: &[Skill],
    required_skills: &[RequiredSkill],
    matcher: &SkillMatcher,
    constants: &ScoringConstants,
) -> JobMatch {
    let requirements: Vec<&RequiredSkill> = required_skills
        .iter()
        .filter(|req| !req.name.trim().is_empty())
        .collect();

    if requirements.is_empty() {
        return JobMatch {
            score: constants.no_requirements_score.min(100),
            fraction: 1.0,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let candidate_keys: Vec<SkillKey> = candidate_skills
        .iter()
        .map(|skill| matcher.skill_key(&skill.name))
        .collect();
    let mut used = vec![false; candidate_skills.len()];

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut earned = 0.0;
    let mut total_weight = 0.0;

    for req in requirements {
        let weight = if req.is_mandatory() {
            1.0
        } else {
            constants.nice_to_have_weight
        };
        total_weight += weight;

        let req_key = matcher.skill_key(&req.name);
        let mut best: Option<(usize, f64)> = None;
        for (i, skill) in candidate_skills.iter().enumerate() {
            if used[i] {
                continue;
            }
            let Some(kind) = matcher.match_kind(&candidate_keys[i], &req_key) else {
                continue;
            };
            let credit = kind.credit(constants) * level_credit(skill, req);
            if best.map_or(true, |(_, best_credit)| credit > best_credit) {
                best = Some((i, credit));
            }
        }

        match best {
            Some((i, credit)) => {
                used[i] = true;
                earned += credit * weight;
                matched.push(candidate_skills[i].name.trim().to_string());
            }
            None => missing.push(req.name.trim().to_string()),
        }
    }

    let fraction = if total_weight > 0.0 {
        (earned / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let raw = constants.skill_match_base + constants.skill_match_spread * fraction;

    JobMatch {
        score: clamp_score(raw, constants.skill_match_cap),
        fraction,
        matched,
        missing,
    }
}

/// Credit (0..=1) for a candidate skill against a requirement's minimum level
#[inline]
fn level_credit(skill: &Skill, req: &RequiredSkill) -> f64 {
    match req.level {
        Some(required) if skill.level < required => skill.level.weight() / required.weight(),
        _ => 1.0,
    }
}
