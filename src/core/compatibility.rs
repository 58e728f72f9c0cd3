use crate::core::scoring::clamp_score;
use crate::core::skills::SkillMatcher;
use crate::core::team_fit::team_skill_keys;
use crate::models::{ExperienceLevel, ScoringConstants, TeamMember};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Overall compatibility score (0-100) for a set of team members
///
/// Scoring formula:
/// score = baseline
///     + skill_diversity * 15       # unique skills / (members * divisor), capped at 1
///     + experience_diversity * 10  # distinct levels / span, capped at 1
///     + style_bonus * 5            # work styles are not all identical
///
/// Edge cases: no members scores 0, a single member scores the fixed
/// single-member value, and members identical in every dimension score the
/// bare baseline.
pub fn team_compatibility(
    members: &[TeamMember],
    matcher: &SkillMatcher,
    constants: &ScoringConstants,
) -> u8 {
    match members.len() {
        0 => return 0,
        1 => return constants.single_member_compatibility.min(100),
        _ => {}
    }

    if all_identical(members, matcher) {
        return clamp_score(constants.compatibility_baseline, 100);
    }

    let member_count = members.len() as f64;
    let unique_skills = team_skill_keys(members, matcher).len() as f64;
    let skill_diversity = if constants.skill_diversity_divisor > 0.0 {
        (unique_skills / (member_count * constants.skill_diversity_divisor)).min(1.0)
    } else {
        0.0
    };

    let distinct_levels: HashSet<ExperienceLevel> =
        members.iter().map(|m| m.experience_level).collect();
    // Not capped at 1; only the final score is clamped
    let experience_diversity = if constants.experience_level_span > 0.0 {
        distinct_levels.len() as f64 / constants.experience_level_span
    } else {
        0.0
    };

    let style_bonus = if work_styles_differ(members) { 1.0 } else { 0.0 };

    let raw = constants.compatibility_baseline
        + skill_diversity * constants.skill_diversity_points
        + experience_diversity * constants.experience_diversity_points
        + style_bonus * constants.work_style_bonus_points;

    tracing::trace!(
        "Team compatibility: members={}, unique_skills={}, levels={}, style_bonus={}, raw={:.2}",
        members.len(),
        unique_skills,
        distinct_levels.len(),
        style_bonus,
        raw
    );

    clamp_score(raw, 100)
}

/// True when at least two members declare a work style and they are not all equal
fn work_styles_differ(members: &[TeamMember]) -> bool {
    let mut styles = members.iter().filter_map(|m| m.work_style.as_ref());
    match styles.next() {
        Some(first) => styles.any(|s| s != first),
        None => false,
    }
}

fn all_identical(members: &[TeamMember], matcher: &SkillMatcher) -> bool {
    let Some((first, rest)) = members.split_first() else {
        return true;
    };

    let skill_set = |m: &TeamMember| -> BTreeSet<String> {
        matcher
            .key_map(m.skills.iter().map(|s| s.name.as_str()))
            .into_keys()
            .collect()
    };

    let first_skills = skill_set(first);
    rest.iter().all(|m| {
        m.experience_level == first.experience_level
            && m.work_style == first.work_style
            && skill_set(m) == first_skills
    })
}

/// What a team is missing relative to a set of required skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    #[serde(rename = "skillGaps")]
    pub skill_gaps: Vec<String>,
    #[serde(rename = "preferredExperience")]
    pub preferred_experience: ExperienceLevel,
}

/// Required skills no member covers, and the seniority the next hire should bring
///
/// Preferred experience is senior while the team has fewer than two seniors,
/// then mid while nobody is mid-level, otherwise any.
pub fn team_skill_gaps(
    members: &[TeamMember],
    required_skills: &[String],
    matcher: &SkillMatcher,
) -> SkillGapAnalysis {
    let team_keys = team_skill_keys(members, matcher);

    let mut seen = HashSet::new();
    let skill_gaps = required_skills
        .iter()
        .filter(|name| !name.trim().is_empty())
        .filter(|name| {
            let key = matcher.key(name);
            let covered = team_keys.contains_key(&key)
                || team_keys.keys().any(|team_key| matcher.keys_match(&key, team_key));
            !covered && seen.insert(key)
        })
        .map(|name| name.trim().to_string())
        .collect();

    let seniors = members
        .iter()
        .filter(|m| m.experience_level == ExperienceLevel::Senior)
        .count();
    let has_mid = members
        .iter()
        .any(|m| m.experience_level == ExperienceLevel::Mid);

    let preferred_experience = if seniors < 2 {
        ExperienceLevel::Senior
    } else if !has_mid {
        ExperienceLevel::Mid
    } else {
        ExperienceLevel::Any
    };

    SkillGapAnalysis {
        skill_gaps,
        preferred_experience,
    }
}
