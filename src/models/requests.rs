use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Request to rank mentors for a student
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendMentorsRequest {
    #[validate(required)]
    pub student: Option<Map<String, Value>>,
    #[validate(required, length(min = 1))]
    pub alumni: Option<Vec<Value>>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl RecommendMentorsRequest {
    /// An empty student object counts as missing
    pub fn has_student(&self) -> bool {
        self.student.as_ref().is_some_and(|s| !s.is_empty())
    }
}

/// Request to compute the skills a student lacks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapRequest {
    #[serde(default = "empty_list")]
    pub student_skills: Value,
    #[serde(default = "empty_list")]
    pub target_skills: Value,
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}
