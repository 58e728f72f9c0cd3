use crate::models::{MatchMode, ScoringConstants};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;
use strsim::{damerau_levenshtein, normalized_damerau_levenshtein};
use thiserror::Error;

/// Errors that can occur while loading a synonym file
#[derive(Debug, Error)]
pub enum SynonymError {
    #[error("Failed to read synonym file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid synonym file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Built-in alias vocabulary, canonical name first
const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    ("javascript", &["js", "ecmascript", "es6"]),
    ("typescript", &["ts"]),
    ("python", &["py", "python3"]),
    ("postgresql", &["postgres", "psql", "pgsql"]),
    ("mongodb", &["mongo"]),
    ("kubernetes", &["k8s"]),
    ("react", &["reactjs", "react.js", "react js"]),
    ("node.js", &["node", "nodejs", "node js"]),
    ("vue", &["vuejs", "vue.js"]),
    ("graphql", &["gql"]),
    ("machine learning", &["ml"]),
    ("aws", &["amazon web services"]),
    ("gcp", &["google cloud platform", "google cloud"]),
    ("golang", &["go"]),
    ("csharp", &["c#"]),
    ("cpp", &["c++"]),
];

/// Lowercase, trim and fold `-`, `_` and whitespace runs into single spaces
pub fn normalize_skill_name(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Deserialize)]
struct SynonymFile {
    #[serde(default)]
    aliases: HashMap<String, Vec<String>>,
}

/// Alias -> canonical skill name lookup
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    alias_to_canonical: HashMap<String, String>,
}

impl SynonymTable {
    /// Table with no aliases at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table seeded with the built-in vocabulary
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (canonical, aliases) in BUILTIN_ALIASES {
            table.insert(canonical, aliases.iter().copied());
        }
        table
    }

    /// Parse a TOML table of the form `[aliases] canonical = ["alias", ...]`
    pub fn from_toml_str(input: &str) -> Result<Self, SynonymError> {
        let file: SynonymFile = toml::from_str(input)?;
        let mut table = Self::empty();
        for (canonical, aliases) in &file.aliases {
            table.insert(canonical, aliases.iter().map(String::as_str));
        }
        Ok(table)
    }

    /// Load the built-in vocabulary extended with a TOML synonym file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SynonymError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let mut table = Self::builtin();
        table.extend(Self::from_toml_str(&contents)?);
        tracing::info!(
            "Loaded synonym table from {} ({} aliases)",
            path.as_ref().display(),
            table.len()
        );
        Ok(table)
    }

    pub fn insert<'a>(&mut self, canonical: &str, aliases: impl IntoIterator<Item = &'a str>) {
        let canonical = normalize_skill_name(canonical);
        for alias in aliases {
            self.alias_to_canonical
                .insert(normalize_skill_name(alias), canonical.clone());
        }
        self.alias_to_canonical
            .insert(canonical.clone(), canonical);
    }

    /// Merge another table, its entries winning on conflict
    pub fn extend(&mut self, other: SynonymTable) {
        self.alias_to_canonical.extend(other.alias_to_canonical);
    }

    /// Canonical form of an already-normalized name (the name itself when unknown)
    pub fn canonical(&self, normalized: &str) -> String {
        self.alias_to_canonical
            .get(normalized)
            .cloned()
            .unwrap_or_else(|| normalized.to_string())
    }

    pub fn len(&self) -> usize {
        self.alias_to_canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alias_to_canonical.is_empty()
    }
}

/// Compares skill names under a configured [`MatchMode`]
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    mode: MatchMode,
    synonyms: Arc<SynonymTable>,
}

impl SkillMatcher {
    pub fn new(mode: MatchMode, synonyms: SynonymTable) -> Self {
        Self {
            mode,
            synonyms: Arc::new(synonyms),
        }
    }

    /// Exact, case-insensitive matching
    pub fn exact() -> Self {
        Self::new(MatchMode::Exact, SynonymTable::empty())
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Comparison key for a skill name under the active mode
    pub fn key(&self, name: &str) -> String {
        self.skill_key(name).key
    }

    /// Whether two keys produced by [`SkillMatcher::key`] refer to the same skill
    pub fn keys_match(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        self.mode == MatchMode::Fuzzy && is_near_miss(a, b)
    }

    /// Whether two raw skill names refer to the same skill
    pub fn matches(&self, a: &str, b: &str) -> bool {
        self.keys_match(&self.key(a), &self.key(b))
    }

    /// Normalized name and comparison key of a skill name
    pub fn skill_key(&self, name: &str) -> SkillKey {
        let normalized = normalize_skill_name(name);
        let key = match self.mode {
            MatchMode::Exact => normalized.clone(),
            MatchMode::Synonym | MatchMode::Fuzzy => self.synonyms.canonical(&normalized),
        };
        SkillKey { normalized, key }
    }

    /// How two skills matched, if they did
    pub fn match_kind(&self, a: &SkillKey, b: &SkillKey) -> Option<MatchKind> {
        if a.key.is_empty() || b.key.is_empty() {
            return None;
        }
        if a.normalized == b.normalized {
            return Some(MatchKind::Exact);
        }
        if a.key == b.key {
            return Some(MatchKind::Synonym);
        }
        if self.mode == MatchMode::Fuzzy && is_near_miss(&a.key, &b.key) {
            return Some(MatchKind::Fuzzy(normalized_damerau_levenshtein(&a.key, &b.key)));
        }
        None
    }

    /// Distinct keys of a list of names, mapped to the first display name seen
    pub fn key_map<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> BTreeMap<String, String> {
        let mut keys = BTreeMap::new();
        for name in names {
            let key = self.key(name);
            if key.is_empty() {
                continue;
            }
            keys.entry(key).or_insert_with(|| name.trim().to_string());
        }
        keys
    }
}

/// Normalized form of a skill name paired with its mode-dependent key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillKey {
    pub normalized: String,
    pub key: String,
}

/// How a candidate skill met a requirement
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    Exact,
    Synonym,
    /// Near-miss spelling with its normalized similarity in 0.0..=1.0
    Fuzzy(f64),
}

impl MatchKind {
    /// Share of a requirement's credit this kind of match earns
    pub fn credit(self, constants: &ScoringConstants) -> f64 {
        match self {
            MatchKind::Exact => 1.0,
            MatchKind::Synonym => constants.synonym_match_credit,
            MatchKind::Fuzzy(similarity) => similarity * constants.fuzzy_match_factor,
        }
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::exact()
    }
}

/// Edit-distance tolerance for names of five or more characters
fn is_near_miss(a: &str, b: &str) -> bool {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a < 5 || len_b < 5 {
        return false;
    }

    let distance = damerau_levenshtein(a, b);
    distance <= 1 || (len_a.max(len_b) >= 8 && distance <= 2)
}
