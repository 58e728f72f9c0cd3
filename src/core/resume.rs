//! Normalization of resume-parser output into scorer-ready candidate profiles.
//!
//! The parsing service returns loosely-typed fields. This module trims them,
//! parses skill levels, enforces name-unique skills and reports a per-file
//! error string for anything that cannot be used. Failed files are never
//! retried and are excluded from scoring.

use crate::core::experience::total_years;
use crate::core::skills::normalize_skill_name;
use crate::models::{CandidateProfile, Education, ExperienceLevel, Skill, SkillLevel, WorkExperience};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that make a parsed resume unusable for scoring
#[derive(Debug, Error, PartialEq)]
pub enum ResumeError {
    #[error("Resume contains neither skills nor work experience")]
    EmptyProfile,

    #[error("Resume parsing failed: {0}")]
    ParseFailed(String),
}

/// Skill as extracted by the parsing service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: String,
}

/// Work history entry as extracted by the parsing service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedExperience {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Education entry as extracted by the parsing service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEducation {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub field: Option<String>,
}

/// Raw output of the resume parsing service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(default)]
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
    pub skills: Vec<ExtractedSkill>,
    #[serde(default)]
    pub experience: Vec<ExtractedExperience>,
    #[serde(default)]
    pub education: Vec<ExtractedEducation>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub other_links: Vec<String>,
}

/// Per-file result: a candidate or the error string shown to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileOutcome {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub candidate: Option<CandidateProfile>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn success(file_name: impl Into<String>, candidate: CandidateProfile) -> Self {
        Self {
            file_name: file_name.into(),
            candidate: Some(candidate),
            error: None,
        }
    }

    pub fn failure(file_name: impl Into<String>, error: impl ToString) -> Self {
        Self {
            file_name: file_name.into(),
            candidate: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.candidate.is_some()
    }
}

/// Turn a parsed resume into a candidate profile
pub fn normalize_resume(parsed: ParsedResume) -> Result<CandidateProfile, ResumeError> {
    let skills = normalize_skills(&parsed.skills);

    let experience: Vec<WorkExperience> = parsed
        .experience
        .into_iter()
        .filter_map(|entry| {
            let title = entry.title.trim().to_string();
            let company = entry.company.trim().to_string();
            if title.is_empty() && company.is_empty() {
                return None;
            }
            Some(WorkExperience {
                title,
                company,
                duration: entry.duration.trim().to_string(),
                description: non_empty(entry.description),
            })
        })
        .collect();

    let education: Vec<Education> = parsed
        .education
        .into_iter()
        .filter_map(|entry| {
            let degree = entry.degree.trim().to_string();
            let institution = entry.institution.trim().to_string();
            if degree.is_empty() && institution.is_empty() {
                return None;
            }
            Some(Education {
                degree,
                institution,
                year: entry.year.trim().to_string(),
                field: non_empty(entry.field),
            })
        })
        .collect();

    if skills.is_empty() && experience.is_empty() {
        return Err(ResumeError::EmptyProfile);
    }

    let experience_level = if experience.is_empty() {
        None
    } else {
        Some(ExperienceLevel::from_years(total_years(&experience)))
    };

    let name = parsed.name.trim();
    let name = if name.is_empty() { "Unknown" } else { name };

    let other_links = parsed
        .other_links
        .into_iter()
        .map(|link| link.trim().to_string())
        .filter(|link| !link.is_empty())
        .collect();

    Ok(CandidateProfile {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: non_empty(parsed.email),
        phone: non_empty(parsed.phone),
        location: non_empty(parsed.location),
        title: non_empty(parsed.title),
        summary: non_empty(parsed.summary),
        skills,
        experience,
        education,
        experience_level,
        work_style: None,
        github_url: non_empty(parsed.github_url),
        linkedin_url: non_empty(parsed.linkedin_url),
        website_url: non_empty(parsed.website_url),
        other_links,
    })
}

/// Normalize a batch of per-file parse results, keeping file order
pub fn normalize_batch<I>(results: I) -> Vec<FileOutcome>
where
    I: IntoIterator<Item = (String, Result<ParsedResume, String>)>,
{
    results
        .into_iter()
        .map(|(file_name, result)| {
            let normalized = result
                .map_err(ResumeError::ParseFailed)
                .and_then(normalize_resume);
            match normalized {
                Ok(candidate) => FileOutcome::success(file_name, candidate),
                Err(e) => {
                    tracing::warn!("Resume {} excluded from scoring: {}", file_name, e);
                    FileOutcome::failure(file_name, e)
                }
            }
        })
        .collect()
}

/// Drop blank names and keep one entry per name, at its highest level
fn normalize_skills(extracted: &[ExtractedSkill]) -> Vec<Skill> {
    let mut skills: Vec<Skill> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for raw in extracted {
        let name = raw.name.trim();
        let key = normalize_skill_name(name);
        if key.is_empty() {
            continue;
        }
        let level = SkillLevel::parse(&raw.level);

        match index.get(&key) {
            Some(&i) => {
                if level > skills[i].level {
                    skills[i].level = level;
                }
            }
            None => {
                index.insert(key, skills.len());
                skills.push(Skill::new(name, level));
            }
        }
    }

    skills
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, level: &str) -> ExtractedSkill {
        ExtractedSkill {
            name: name.to_string(),
            level: level.to_string(),
        }
    }

    #[test]
    fn test_normalize_dedupes_skills_keeping_highest_level() {
        let parsed = ParsedResume {
            name: "  Ada Lovelace ".to_string(),
            skills: vec![
                skill("Rust", "beginner"),
                skill("rust", "Expert"),
                skill("  ", "expert"),
                skill("SQL", "proficient"),
            ],
            ..Default::default()
        };

        let candidate = normalize_resume(parsed).unwrap();
        assert_eq!(candidate.name, "Ada Lovelace");
        assert_eq!(candidate.skills.len(), 2);
        assert_eq!(candidate.skills[0].name, "Rust");
        assert_eq!(candidate.skills[0].level, SkillLevel::Expert);
        assert_eq!(candidate.skills[1].level, SkillLevel::Advanced);
        assert!(candidate.experience_level.is_none());
    }

    #[test]
    fn test_missing_name_defaults_to_unknown() {
        let parsed = ParsedResume {
            skills: vec![skill("Go", "intermediate")],
            ..Default::default()
        };
        assert_eq!(normalize_resume(parsed).unwrap().name, "Unknown");
    }

    #[test]
    fn test_experience_infers_level() {
        let parsed = ParsedResume {
            name: "Grace".to_string(),
            experience: vec![
                ExtractedExperience {
                    title: "Engineer".to_string(),
                    company: "Navy".to_string(),
                    duration: "2015-2021".to_string(),
                    description: Some("  ".to_string()),
                },
                ExtractedExperience::default(),
            ],
            ..Default::default()
        };

        let candidate = normalize_resume(parsed).unwrap();
        assert_eq!(candidate.experience.len(), 1);
        assert_eq!(candidate.experience[0].description, None);
        assert_eq!(candidate.experience_level, Some(ExperienceLevel::Senior));
    }

    #[test]
    fn test_contact_summary_and_education_are_kept() {
        let parsed = ParsedResume {
            name: "Ada".to_string(),
            phone: Some(" +44 20 7946 0000 ".to_string()),
            location: Some("London, UK".to_string()),
            summary: Some("   ".to_string()),
            skills: vec![skill("Rust", "expert")],
            education: vec![
                ExtractedEducation {
                    degree: " BSc ".to_string(),
                    institution: "University of London".to_string(),
                    year: "1835".to_string(),
                    field: Some("Mathematics".to_string()),
                },
                ExtractedEducation {
                    year: "2001".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let candidate = normalize_resume(parsed).unwrap();
        assert_eq!(candidate.phone.as_deref(), Some("+44 20 7946 0000"));
        assert_eq!(candidate.location.as_deref(), Some("London, UK"));
        assert_eq!(candidate.summary, None);
        assert_eq!(candidate.education.len(), 1);
        assert_eq!(candidate.education[0].degree, "BSc");
        assert_eq!(candidate.education[0].field.as_deref(), Some("Mathematics"));
    }

    #[test]
    fn test_parser_json_fields_deserialize() {
        let parsed: ParsedResume = serde_json::from_str(
            r#"{
                "name": "Grace",
                "phone": "555-0100",
                "summary": "Compiler pioneer",
                "education": [{"degree": "PhD", "institution": "Yale", "year": "1934", "field": null}]
            }"#,
        )
        .unwrap();

        assert_eq!(parsed.phone.as_deref(), Some("555-0100"));
        assert_eq!(parsed.education[0].institution, "Yale");
    }

    #[test]
    fn test_empty_resume_is_rejected() {
        let parsed = ParsedResume {
            name: "Nobody".to_string(),
            ..Default::default()
        };
        assert_eq!(normalize_resume(parsed), Err(ResumeError::EmptyProfile));
    }

    #[test]
    fn test_batch_reports_errors_per_file() {
        let ok = ParsedResume {
            name: "Linus".to_string(),
            skills: vec![skill("C", "expert")],
            ..Default::default()
        };

        let outcomes = normalize_batch(vec![
            ("a.pdf".to_string(), Ok(ok)),
            ("b.pdf".to_string(), Err("Unsupported file format".to_string())),
            ("c.pdf".to_string(), Ok(ParsedResume::default())),
        ]);

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_success());
        assert_eq!(
            outcomes[1].error.as_deref(),
            Some("Resume parsing failed: Unsupported file format")
        );
        assert_eq!(
            outcomes[2].error.as_deref(),
            Some("Resume contains neither skills nor work experience")
        );
    }
}
