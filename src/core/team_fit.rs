use crate::core::scoring::clamp_score;
use crate::core::skills::SkillMatcher;
use crate::models::{Collaboration, Communication, Pace, ScoringConstants, Skill, TeamMember, WorkStyle};
use std::collections::BTreeMap;

/// Outcome of scoring a candidate against an existing team's skill set
#[derive(Debug, Clone, PartialEq)]
pub struct TeamFit {
    pub score: u8,
    /// Candidate skills no current member has
    pub complementary: Vec<String>,
    /// Candidate skills already present in the team
    pub overlapping: Vec<String>,
}

/// Aggregate skill keys of all team members
pub fn team_skill_keys(members: &[TeamMember], matcher: &SkillMatcher) -> BTreeMap<String, String> {
    matcher.key_map(
        members
            .iter()
            .flat_map(|m| m.skills.iter().map(|s| s.name.as_str())),
    )
}

/// Score how a candidate's skills complement a team
///
/// score = clamp(round(base + wc * |complementary| + wo * |overlap|), 0, cap)
///
/// Complementary skills are weighted above overlapping ones, so adding a
/// skill nobody on the team has never lowers the score. An empty team yields
/// `empty_team_fit`.
pub fn team_fit_score(
    candidate_skills: &[Skill],
    members: &[TeamMember],
    matcher: &SkillMatcher,
    constants: &ScoringConstants,
) -> TeamFit {
    if members.is_empty() {
        return TeamFit {
            score: constants.empty_team_fit.min(100),
            complementary: Vec::new(),
            overlapping: Vec::new(),
        };
    }

    let team_keys = team_skill_keys(members, matcher);
    let candidate_keys = matcher.key_map(candidate_skills.iter().map(|s| s.name.as_str()));

    let mut complementary = Vec::new();
    let mut overlapping = Vec::new();
    for (key, display) in candidate_keys {
        let shared = team_keys.contains_key(&key)
            || team_keys.keys().any(|team_key| matcher.keys_match(&key, team_key));
        if shared {
            overlapping.push(display);
        } else {
            complementary.push(display);
        }
    }

    let raw = constants.team_fit_base
        + constants.complementary_weight * complementary.len() as f64
        + constants.overlap_weight * overlapping.len() as f64;

    TeamFit {
        score: clamp_score(raw, constants.team_fit_cap),
        complementary,
        overlapping,
    }
}

/// Pairwise work-style compatibility (0-100)
///
/// Each dimension scores highest on an exact match, lower when either side
/// is the flexible middle option, lowest on a hard mismatch.
pub fn work_style_match(a: &WorkStyle, b: &WorkStyle) -> f64 {
    let communication = if a.communication == b.communication {
        40.0
    } else if a.communication == Communication::Mixed || b.communication == Communication::Mixed {
        30.0
    } else {
        15.0
    };

    let collaboration = if a.collaboration == b.collaboration {
        35.0
    } else if a.collaboration == Collaboration::Balanced || b.collaboration == Collaboration::Balanced {
        25.0
    } else {
        10.0
    };

    let pace = if a.pace == b.pace {
        25.0
    } else if a.pace == Pace::Flexible || b.pace == Pace::Flexible {
        20.0
    } else {
        10.0
    };

    communication + collaboration + pace
}

/// Mean work-style compatibility of a candidate with the team members that
/// declare a style; `work_style_neutral` when there is nothing to compare
pub fn work_style_alignment(
    candidate_style: Option<&WorkStyle>,
    members: &[TeamMember],
    constants: &ScoringConstants,
) -> u8 {
    let Some(candidate_style) = candidate_style else {
        return constants.work_style_neutral.min(100);
    };

    let styles: Vec<&WorkStyle> = members.iter().filter_map(|m| m.work_style.as_ref()).collect();
    if styles.is_empty() {
        return constants.work_style_neutral.min(100);
    }

    let total: f64 = styles
        .iter()
        .map(|style| work_style_match(candidate_style, style))
        .sum();
    clamp_score(total / styles.len() as f64, 100)
}
