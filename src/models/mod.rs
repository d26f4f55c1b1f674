// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, ScoredCandidate, Recommendations, skills_from_value};
pub use requests::{RecommendMentorsRequest, SkillGapRequest};
pub use responses::{RecommendMentorsResponse, SkillGapResponse, HealthResponse, ErrorResponse};
