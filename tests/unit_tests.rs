// Unit tests for TalentFit scoring components

use talentfit::core::{
    experience::{experience_score, parse_duration_years},
    job_match::job_match_score,
    scoring::calculate_overall_score,
    skills::{SkillMatcher, SynonymTable},
    team_compatibility,
    team_fit::{team_fit_score, work_style_match},
};
use talentfit::models::{
    CandidateProfile, Collaboration, Communication, ExperienceLevel, MatchMode, Pace,
    RequiredSkill, ScoringConstants, ScoringWeights, Skill, SkillLevel, TeamMember,
    WorkExperience, WorkStyle,
};

fn skills(names: &[&str]) -> Vec<Skill> {
    names
        .iter()
        .map(|n| Skill::new(*n, SkillLevel::Intermediate))
        .collect()
}

fn required(names: &[&str]) -> Vec<RequiredSkill> {
    names.iter().map(|n| RequiredSkill::new(*n)).collect()
}

fn member(id: &str, names: &[&str], level: ExperienceLevel) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: format!("Member {}", id),
        skills: skills(names),
        experience_level: level,
        work_style: None,
    }
}

#[test]
fn test_job_match_worked_example() {
    let result = job_match_score(
        &skills(&["React", "Node.js", "AWS"]),
        &required(&["React", "Node.js", "Go"]),
        &SkillMatcher::exact(),
        &ScoringConstants::default(),
    );

    assert_eq!(result.score, 83);
    assert_eq!(result.matched, vec!["React", "Node.js"]);
    assert_eq!(result.missing, vec!["Go"]);
}

#[test]
fn test_job_match_is_case_insensitive() {
    let result = job_match_score(
        &skills(&["react", "NODE.JS"]),
        &required(&["React", "Node.js"]),
        &SkillMatcher::exact(),
        &ScoringConstants::default(),
    );

    assert_eq!(result.score, 95);
}

#[test]
fn test_job_match_empty_candidate_scores_floor() {
    let result = job_match_score(
        &[],
        &required(&["Rust", "Go"]),
        &SkillMatcher::exact(),
        &ScoringConstants::default(),
    );

    assert_eq!(result.score, 60);
    assert_eq!(result.fraction, 0.0);
}

#[test]
fn test_job_match_stays_within_bounds() {
    let constants = ScoringConstants::default();
    let matcher = SkillMatcher::exact();
    let pool = ["Rust", "Go", "SQL", "AWS", "React", "Docker"];

    for take in 0..=pool.len() {
        for req_take in 0..=pool.len() {
            let result = job_match_score(
                &skills(&pool[..take]),
                &required(&pool[..req_take]),
                &matcher,
                &constants,
            );
            assert!(result.score <= 95, "score {} above cap", result.score);
        }
    }
}

#[test]
fn test_synonym_mode_matches_aliases() {
    let matcher = SkillMatcher::new(MatchMode::Synonym, SynonymTable::builtin());
    let result = job_match_score(
        &skills(&["JS", "k8s"]),
        &required(&["JavaScript", "Kubernetes"]),
        &matcher,
        &ScoringConstants::default(),
    );

    // Each alias earns 0.95 credit
    assert_eq!(result.score, 93);
    assert!(result.missing.is_empty());

    // Aliases are ignored in exact mode
    let exact = job_match_score(
        &skills(&["JS", "k8s"]),
        &required(&["JavaScript", "Kubernetes"]),
        &SkillMatcher::exact(),
        &ScoringConstants::default(),
    );
    assert_eq!(exact.score, 60);
}

#[test]
fn test_fuzzy_mode_tolerates_typos() {
    let matcher = SkillMatcher::new(MatchMode::Fuzzy, SynonymTable::builtin());

    assert!(matcher.matches("Kubernetes", "Kubernets"));
    assert!(!matcher.matches("Java", "Lava"));
    assert!(!SkillMatcher::exact().matches("Kubernetes", "Kubernets"));
}

#[test]
fn test_team_fit_empty_team() {
    let result = team_fit_score(
        &skills(&["React", "SQL"]),
        &[],
        &SkillMatcher::exact(),
        &ScoringConstants::default(),
    );

    assert_eq!(result.score, 75);
}

#[test]
fn test_team_fit_worked_example() {
    let team = vec![member("1", &["React", "SQL"], ExperienceLevel::Mid)];
    let result = team_fit_score(
        &skills(&["React", "Go", "Rust"]),
        &team,
        &SkillMatcher::exact(),
        &ScoringConstants::default(),
    );

    assert_eq!(result.score, 86);
    assert_eq!(result.overlapping, vec!["React"]);
    assert_eq!(result.complementary.len(), 2);
}

#[test]
fn test_team_fit_complementary_skill_never_lowers_score() {
    let team = vec![member("1", &["React", "SQL"], ExperienceLevel::Mid)];
    let matcher = SkillMatcher::exact();
    let constants = ScoringConstants::default();

    let mut candidate = skills(&["React"]);
    let mut previous = team_fit_score(&candidate, &team, &matcher, &constants).score;

    for extra in ["Go", "Rust", "Kafka", "Terraform", "Elixir", "Haskell", "OCaml"] {
        candidate.push(Skill::new(extra, SkillLevel::Advanced));
        let score = team_fit_score(&candidate, &team, &matcher, &constants).score;
        assert!(score >= previous);
        assert!(score <= 98);
        previous = score;
    }
    assert_eq!(previous, 98);
}

#[test]
fn test_team_compatibility_defaults() {
    let matcher = SkillMatcher::exact();
    let constants = ScoringConstants::default();

    assert_eq!(team_compatibility(&[], &matcher, &constants), 0);
    assert_eq!(
        team_compatibility(&[member("1", &["Rust"], ExperienceLevel::Senior)], &matcher, &constants),
        75
    );
}

#[test]
fn test_work_style_match_extremes() {
    let style = WorkStyle {
        communication: Communication::Async,
        collaboration: Collaboration::Independent,
        pace: Pace::Fast,
    };
    let opposite = WorkStyle {
        communication: Communication::Sync,
        collaboration: Collaboration::Collaborative,
        pace: Pace::Steady,
    };

    assert_eq!(work_style_match(&style, &style), 100.0);
    assert_eq!(work_style_match(&style, &opposite), 35.0);
}

#[test]
fn test_overall_score_weighting() {
    let weights = ScoringWeights::default();

    assert_eq!(calculate_overall_score(100, 100, 100, 100, &weights), 100);
    assert_eq!(calculate_overall_score(0, 0, 0, 0, &weights), 0);
    // 0.4*90 + 0.3*80 + 0.2*70 + 0.1*60 = 80
    assert_eq!(calculate_overall_score(90, 80, 70, 60, &weights), 80);
}

#[test]
fn test_parse_duration_years() {
    assert_eq!(parse_duration_years("3 years"), 3.0);
    assert_eq!(parse_duration_years("18 months"), 1.5);
    assert_eq!(parse_duration_years("2016-2020"), 4.0);
    assert_eq!(parse_duration_years("whenever"), 0.0);
}

#[test]
fn test_experience_score_levels() {
    let mut candidate = CandidateProfile::new("c1", "Ada", vec![]);
    candidate.experience = vec![WorkExperience {
        title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        duration: "6 years".to_string(),
        description: None,
    }];

    let senior = experience_score(&candidate, ExperienceLevel::Senior, None);
    assert_eq!(senior.years, 6.0);
    assert!(senior.score >= 70 && senior.score < 100);

    let mid = experience_score(&candidate, ExperienceLevel::Mid, None);
    assert_eq!(mid.score, 100);

    let any = experience_score(&CandidateProfile::new("c2", "Bob", vec![]), ExperienceLevel::Any, None);
    assert_eq!(any.score, 100);
}
