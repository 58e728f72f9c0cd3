use crate::models::{MatchMode, ScoringConstants, ScoringWeights};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub resume_parser: ResumeParserSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub constants: ScoringConstants,
    #[serde(default)]
    pub match_mode: MatchMode,
    /// Candidates below this overall score are dropped from rankings
    #[serde(default)]
    pub min_overall_score: u8,
    /// Optional TOML file of extra skill aliases
    pub synonyms_path: Option<String>,
}

impl ScoringSettings {
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights {
            skills: self.weights.skills,
            experience: self.weights.experience,
            team_fit: self.weights.team_fit,
            work_style: self.weights.work_style,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_team_fit_weight")]
    pub team_fit: f64,
    #[serde(default = "default_work_style_weight")]
    pub work_style: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            experience: default_experience_weight(),
            team_fit: default_team_fit_weight(),
            work_style: default_work_style_weight(),
        }
    }
}

fn default_skills_weight() -> f64 { 0.40 }
fn default_experience_weight() -> f64 { 0.30 }
fn default_team_fit_weight() -> f64 { 0.20 }
fn default_work_style_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeParserSettings {
    #[serde(default = "default_parser_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
    #[serde(default = "default_parser_timeout")]
    pub timeout_secs: u64,
}

impl ResumeParserSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ResumeParserSettings {
    fn default() -> Self {
        Self {
            endpoint: default_parser_endpoint(),
            api_key: None,
            timeout_secs: default_parser_timeout(),
        }
    }
}

fn default_parser_endpoint() -> String { "http://localhost:8000".to_string() }
fn default_parser_timeout() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with TALENTFIT__)
    /// 4. RESUME_PARSER_URL and RESUME_PARSER_API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Development overrides
            .add_source(File::with_name("config/local").required(false))
            // e.g., TALENTFIT__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("TALENTFIT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply the unprefixed parser variables shared with the parsing service
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(endpoint) = env::var("RESUME_PARSER_URL") {
        builder = builder.set_override("resume_parser.endpoint", endpoint)?;
    }
    if let Ok(api_key) = env::var("RESUME_PARSER_API_KEY") {
        builder = builder.set_override("resume_parser.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.skills, 0.40);
        assert_eq!(weights.experience, 0.30);
        assert_eq!(weights.team_fit, 0.20);
        assert_eq!(weights.work_style, 0.10);
        assert_eq!(ScoringSettings::default().weights(), ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings: Settings = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.scoring.match_mode, MatchMode::Exact);
        assert_eq!(settings.scoring.min_overall_score, 0);
        assert_eq!(settings.resume_parser.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("talentfit-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9090

[scoring]
match_mode = "fuzzy"
min_overall_score = 65

[scoring.weights]
skills = 0.5

[scoring.constants]
team_fit_cap = 90

[resume_parser]
endpoint = "http://parser:8000"
"#
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.scoring.match_mode, MatchMode::Fuzzy);
        assert_eq!(settings.scoring.min_overall_score, 65);
        assert_eq!(settings.scoring.weights.skills, 0.5);
        assert_eq!(settings.scoring.weights.experience, 0.30);
        assert_eq!(settings.scoring.constants.team_fit_cap, 90);
        assert_eq!(settings.scoring.constants.team_fit_base, 70.0);
        assert_eq!(settings.logging.level, "info");
    }
}
