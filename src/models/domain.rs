use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::error::MatchError;

/// A prospective mentor as supplied by the caller
///
/// Only `skills` is inspected; every other field rides along untouched in
/// `metadata` and is written back out next to the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Candidate {
    pub fn new(skills: Vec<String>) -> Self {
        Self {
            skills,
            metadata: Map::new(),
        }
    }

    /// Attach a pass-through field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Look up a pass-through field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }
}

impl TryFrom<Value> for Candidate {
    type Error = MatchError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut metadata = match value {
            Value::Object(map) => map,
            other => {
                return Err(MatchError::invalid_input(
                    "alumni",
                    format!("expected an object, got {}", value_kind(&other)),
                ))
            }
        };

        let skills = match metadata.remove("skills") {
            Some(raw) => skills_from_value("skills", &raw)?,
            None => Vec::new(),
        };

        Ok(Self { skills, metadata })
    }
}

/// A candidate annotated with its similarity to the student, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub match_score: f64,
}

impl ScoredCandidate {
    /// Wrap a candidate with its score, replacing any `match_score` it already carried
    pub fn new(mut candidate: Candidate, match_score: f64) -> Self {
        candidate.metadata.remove("match_score");
        Self {
            candidate,
            match_score,
        }
    }
}

/// Outcome of a scoring call
///
/// `Unranked` is returned when no document contributes a single vocabulary
/// token, in which case the candidates come back as given and without scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Recommendations {
    Ranked(Vec<ScoredCandidate>),
    Unranked(Vec<Candidate>),
}

impl Recommendations {
    pub fn len(&self) -> usize {
        match self {
            Recommendations::Ranked(scored) => scored.len(),
            Recommendations::Unranked(candidates) => candidates.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, Recommendations::Ranked(_))
    }

    /// Keep at most `limit` entries, preserving order
    pub fn truncate(&mut self, limit: usize) {
        match self {
            Recommendations::Ranked(scored) => scored.truncate(limit),
            Recommendations::Unranked(candidates) => candidates.truncate(limit),
        }
    }

    pub fn ranked(&self) -> Option<&[ScoredCandidate]> {
        match self {
            Recommendations::Ranked(scored) => Some(scored),
            Recommendations::Unranked(_) => None,
        }
    }
}

/// Read a JSON value as a list of skill strings
///
/// `field` names the offending field in the returned error.
pub fn skills_from_value(field: &str, value: &Value) -> Result<Vec<String>, MatchError> {
    let items = value.as_array().ok_or_else(|| {
        MatchError::invalid_input(
            field,
            format!("expected an array of strings, got {}", value_kind(value)),
        )
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                MatchError::invalid_input(
                    field,
                    format!("element {} is {}, not a string", i, value_kind(item)),
                )
            })
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
