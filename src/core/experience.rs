use crate::core::scoring::clamp_score;
use crate::models::{CandidateProfile, ExperienceLevel, WorkExperience};
use chrono::Datelike;

/// Cap on bonus points for past titles relevant to the job title
const MAX_RELEVANCE_BONUS: f64 = 15.0;
const RELEVANCE_BONUS_PER_ROLE: f64 = 5.0;
/// Flat bonus, awarded once, for any past role at a well-known employer
const TOP_COMPANY_BONUS: f64 = 3.0;
const TOP_COMPANIES: &[&str] = &[
    "google", "meta", "amazon", "microsoft", "apple", "netflix", "stripe", "airbnb", "uber",
    "openai", "anthropic",
];

/// Outcome of comparing a candidate's history with a job's target level
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceMatch {
    pub score: u8,
    pub years: f64,
    pub relevant_roles: Vec<String>,
    /// First past employer found in the top-company list
    pub top_company: Option<String>,
    pub reasoning: String,
}

/// Parse a free-text duration into years
///
/// Understands "2 years", "18 months", "1.5 yrs", "6mos", a bare number of years and
/// year ranges such as "2019-2022" or "Mar 2020 - present". Anything that
/// parses counts for at least half a year; unparseable text counts zero.
pub fn parse_duration_years(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = lower.split_whitespace().collect();

    let mut years = 0.0;
    let mut found = false;
    for (i, token) in tokens.iter().enumerate() {
        let token = token.trim_start_matches(|c: char| !c.is_ascii_digit());
        let split = token
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(token.len());
        let (number, suffix) = token.split_at(split);
        let Ok(value) = number.parse::<f64>() else {
            continue;
        };
        if !value.is_finite() || value < 0.0 {
            continue;
        }

        // "18months" carries its unit, "18 months" takes the next token
        let suffix = suffix.trim_matches(|c: char| !c.is_ascii_alphanumeric());
        let unit = if suffix.is_empty() {
            tokens.get(i + 1).copied()
        } else {
            Some(suffix)
        };

        match unit {
            Some(unit) if is_year_unit(unit) => {
                years += value;
                found = true;
            }
            Some(unit) if is_month_unit(unit) => {
                years += value / 12.0;
                found = true;
            }
            None if tokens.len() == 1 && value < 100.0 => {
                years += value;
                found = true;
            }
            _ => {}
        }
    }

    if !found {
        if let Some(range) = parse_year_range(&lower) {
            years = range;
            found = true;
        }
    }

    if found {
        years.max(0.5)
    } else {
        0.0
    }
}

fn is_year_unit(unit: &str) -> bool {
    unit.starts_with("year") || unit.starts_with("yr") || unit == "y"
}

fn is_month_unit(unit: &str) -> bool {
    unit.starts_with("month") || unit.starts_with("mo")
}

/// "2019-2022", "2019 to 2021", "jan 2020 - present"
fn parse_year_range(lower: &str) -> Option<f64> {
    let (start, end) = lower
        .split_once(" to ")
        .or_else(|| lower.split_once('–'))
        .or_else(|| lower.split_once('-'))?;

    let start = extract_year(start)?;
    let end = if ["present", "current", "now", "today"]
        .iter()
        .any(|word| end.contains(word))
    {
        chrono::Utc::now().year()
    } else {
        extract_year(end)?
    };

    if start > 1900 && end >= start {
        Some((end - start) as f64)
    } else {
        None
    }
}

fn extract_year(part: &str) -> Option<i32> {
    part.split(|c: char| !c.is_ascii_digit())
        .find(|digits| digits.len() == 4)
        .and_then(|digits| digits.parse().ok())
}

/// Total years across all work history entries
pub fn total_years(experience: &[WorkExperience]) -> f64 {
    experience
        .iter()
        .map(|entry| parse_duration_years(&entry.duration))
        .sum()
}

/// Score a candidate's experience against a target level
///
/// years >= ideal          -> 100
/// min <= years < ideal    -> 70 + 30 * (years - min) / (ideal - min)
/// years < min             -> 70 * years / min
///
/// plus 5 points per past title sharing a keyword with the job title,
/// capped at 15, and 3 points once for a role at a top company. A candidate without history but with a declared level is
/// credited that level's ideal years.
pub fn experience_score(
    candidate: &CandidateProfile,
    target: ExperienceLevel,
    job_title: Option<&str>,
) -> ExperienceMatch {
    let mut years = total_years(&candidate.experience);
    if candidate.experience.is_empty() {
        if let Some(level) = candidate.experience_level {
            years = level.years_required().1;
        }
    }

    let (min_years, ideal_years) = target.years_required();
    let years_score = if target == ExperienceLevel::Any || years >= ideal_years {
        100.0
    } else if years >= min_years {
        70.0 + 30.0 * (years - min_years) / (ideal_years - min_years).max(0.1)
    } else {
        (years / min_years.max(0.1) * 70.0).min(70.0)
    };

    let relevant_roles = relevant_roles(&candidate.experience, job_title);
    let mut bonus = (relevant_roles.len() as f64 * RELEVANCE_BONUS_PER_ROLE).min(MAX_RELEVANCE_BONUS);

    let top_company = top_company(&candidate.experience);
    if top_company.is_some() {
        bonus += TOP_COMPANY_BONUS;
    }

    let reasoning = if target == ExperienceLevel::Any {
        "Any experience level accepted".to_string()
    } else if years >= ideal_years {
        format!(
            "Exceeds experience requirement ({:.1} years for {} role)",
            years,
            target.as_str()
        )
    } else if years >= min_years {
        format!("Meets minimum experience ({:.1} years)", years)
    } else {
        format!(
            "Below required experience ({:.1}/{:.1} years)",
            years, min_years
        )
    };

    ExperienceMatch {
        score: clamp_score(years_score + bonus, 100),
        years,
        relevant_roles,
        top_company,
        reasoning,
    }
}

fn top_company(experience: &[WorkExperience]) -> Option<String> {
    experience
        .iter()
        .find(|entry| {
            let company = entry.company.to_lowercase();
            TOP_COMPANIES.iter().any(|top| company.contains(top))
        })
        .map(|entry| entry.company.trim().to_string())
}

/// Past titles sharing a keyword (longer than two characters) with the job title
fn relevant_roles(experience: &[WorkExperience], job_title: Option<&str>) -> Vec<String> {
    let Some(job_title) = job_title else {
        return Vec::new();
    };
    let job_lower = job_title.to_lowercase();
    let keywords: Vec<&str> = job_lower
        .split_whitespace()
        .filter(|k| k.len() > 2)
        .collect();
    if keywords.is_empty() {
        return Vec::new();
    }

    experience
        .iter()
        .filter(|entry| {
            let title = entry.title.to_lowercase();
            keywords.iter().any(|k| title.contains(k))
        })
        .map(|entry| entry.title.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, duration: &str) -> WorkExperience {
        WorkExperience {
            title: title.to_string(),
            company: "Acme".to_string(),
            duration: duration.to_string(),
            description: None,
        }
    }

    fn candidate(entries: Vec<WorkExperience>) -> CandidateProfile {
        let mut profile = CandidateProfile::new("c1", "Casey", vec![]);
        profile.experience = entries;
        profile
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_duration_years("2 years"), 2.0);
        assert_eq!(parse_duration_years("18 months"), 1.5);
        assert_eq!(parse_duration_years("1 year 6 months"), 1.5);
        assert_eq!(parse_duration_years("3"), 3.0);
        assert_eq!(parse_duration_years("2 months"), 0.5);
    }

    #[test]
    fn test_parse_attached_units() {
        assert_eq!(parse_duration_years("18months"), 1.5);
        assert_eq!(parse_duration_years("18mo"), 1.5);
        assert_eq!(parse_duration_years("6mos"), 0.5);
        assert_eq!(parse_duration_years("3yrs"), 3.0);
        assert_eq!(parse_duration_years("2y 6mo"), 2.5);
        assert_eq!(
            ExperienceLevel::from_years(parse_duration_years("6mos")),
            ExperienceLevel::Entry
        );
    }

    #[test]
    fn test_parse_year_ranges() {
        assert_eq!(parse_duration_years("2019-2022"), 3.0);
        assert_eq!(parse_duration_years("Jan 2018 - Mar 2021"), 3.0);
        assert_eq!(parse_duration_years("2016 to 2020"), 4.0);
        assert!(parse_duration_years("2020 - present") >= 0.5);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_duration_years(""), 0.0);
        assert_eq!(parse_duration_years("a while"), 0.0);
        assert_eq!(parse_duration_years("2022-2019"), 0.0);
    }

    #[test]
    fn test_senior_candidate_for_senior_role() {
        let c = candidate(vec![entry("Engineer", "5 years"), entry("Engineer", "4 years")]);
        let result = experience_score(&c, ExperienceLevel::Senior, None);
        assert_eq!(result.score, 100);
        assert_eq!(result.years, 9.0);
    }

    #[test]
    fn test_between_min_and_ideal() {
        let c = candidate(vec![entry("Engineer", "3 years")]);
        // mid: 70 + 30 * (3 - 2) / 2 = 85
        let result = experience_score(&c, ExperienceLevel::Mid, None);
        assert_eq!(result.score, 85);
    }

    #[test]
    fn test_below_minimum() {
        let c = candidate(vec![entry("Intern", "1 year")]);
        // senior: 70 * 1 / 5 = 14
        let result = experience_score(&c, ExperienceLevel::Senior, None);
        assert_eq!(result.score, 14);
        assert!(result.reasoning.starts_with("Below"));
    }

    #[test]
    fn test_any_level_is_full_score() {
        let c = candidate(vec![]);
        assert_eq!(experience_score(&c, ExperienceLevel::Any, None).score, 100);
    }

    #[test]
    fn test_declared_level_stands_in_for_history() {
        let mut c = candidate(vec![]);
        c.experience_level = Some(ExperienceLevel::Senior);
        assert_eq!(experience_score(&c, ExperienceLevel::Senior, None).score, 100);
    }

    #[test]
    fn test_top_company_bonus_applies_once() {
        let mut first = entry("Engineer", "1 year");
        first.company = "Google LLC".to_string();
        let mut second = entry("Engineer", "1 year");
        second.company = "Stripe".to_string();
        let c = candidate(vec![first, second]);

        // senior: 70 * 2 / 5 = 28, plus 3 once
        let result = experience_score(&c, ExperienceLevel::Senior, None);
        assert_eq!(result.score, 31);
        assert_eq!(result.top_company.as_deref(), Some("Google LLC"));

        let plain = candidate(vec![entry("Engineer", "2 years")]);
        let result = experience_score(&plain, ExperienceLevel::Senior, None);
        assert_eq!(result.score, 28);
        assert_eq!(result.top_company, None);
    }

    #[test]
    fn test_relevance_bonus_is_capped() {
        let c = candidate(vec![
            entry("Backend Engineer", "1 year"),
            entry("Senior Backend Developer", "1 year"),
            entry("Backend Lead", "1 year"),
            entry("Backend Architect", "1 year"),
        ]);
        // 70 * 4 / 5 = 56, plus 15 capped bonus
        let result = experience_score(&c, ExperienceLevel::Senior, Some("Backend Engineer"));
        assert_eq!(result.relevant_roles.len(), 4);
        assert_eq!(result.score, 71);
    }
}
