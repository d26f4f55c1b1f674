use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{gap, score};
use crate::error::MatchError;
use crate::models::{
    skills_from_value, Candidate, ErrorResponse, HealthResponse, RecommendMentorsRequest,
    RecommendMentorsResponse, SkillGapRequest, SkillGapResponse,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matching: MatchingSettings,
}

/// Configure the recommendation and gap-analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend/mentors", web::post().to(recommend_mentors))
        .route("/analyze/gap", web::post().to(analyze_gap));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank alumni as mentors for a student
///
/// POST /recommend/mentors
///
/// Request body:
/// ```json
/// {
///   "student": { "skills": ["react", "node"] },
///   "alumni": [{ "_id": "1", "firstName": "John", "skills": ["python", "react"] }],
///   "limit": 10
/// }
/// ```
async fn recommend_mentors(
    state: web::Data<AppState>,
    req: web::Json<RecommendMentorsRequest>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        tracing::info!("Rejected recommend_mentors request: {}", errors);
        return missing_student_or_alumni(errors.to_string());
    }
    if !req.has_student() {
        tracing::info!("Rejected recommend_mentors request: empty student");
        return missing_student_or_alumni("student must not be empty".to_string());
    }

    let (student_skills, candidates) = match decode_recommend(req.student, req.alumni) {
        Ok(decoded) => decoded,
        Err(e) => return invalid_input(e),
    };

    let mut recommendations = score(&student_skills, &candidates);
    if !recommendations.is_ranked() {
        tracing::debug!("Empty skill vocabulary, returning {} alumni unscored", candidates.len());
    }

    if let Some(limit) = state.matching.effective_limit(req.limit) {
        recommendations.truncate(limit);
    }

    tracing::info!(
        "Returning {} recommendations (from {} alumni)",
        recommendations.len(),
        candidates.len()
    );

    HttpResponse::Ok().json(RecommendMentorsResponse {
        success: true,
        count: recommendations.len(),
        data: recommendations,
    })
}

/// Compute which target skills a student lacks
///
/// POST /analyze/gap
///
/// Request body:
/// ```json
/// { "student_skills": ["python"], "target_skills": ["python", "sql"] }
/// ```
async fn analyze_gap(req: web::Json<SkillGapRequest>) -> impl Responder {
    let student_skills = match skills_from_value("student_skills", &req.student_skills) {
        Ok(skills) => skills,
        Err(e) => return invalid_input(e),
    };
    let target_skills = match skills_from_value("target_skills", &req.target_skills) {
        Ok(skills) => skills,
        Err(e) => return invalid_input(e),
    };

    let missing_skills = gap(&student_skills, &target_skills);

    tracing::debug!(
        "Skill gap: {} of {} target skills missing",
        missing_skills.len(),
        target_skills.len()
    );

    HttpResponse::Ok().json(SkillGapResponse {
        success: true,
        missing_skills,
    })
}

type Decoded = (Vec<String>, Vec<Candidate>);

fn decode_recommend(
    student: Option<serde_json::Map<String, Value>>,
    alumni: Option<Vec<Value>>,
) -> Result<Decoded, MatchError> {
    let student_skills = match student.as_ref().and_then(|s| s.get("skills")) {
        Some(raw) => skills_from_value("student.skills", raw)?,
        None => Vec::new(),
    };

    let candidates = alumni
        .unwrap_or_default()
        .into_iter()
        .map(Candidate::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((student_skills, candidates))
}

fn missing_student_or_alumni(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Missing student or alumni data".to_string(),
        message,
        status_code: 400,
    })
}

fn invalid_input(err: MatchError) -> HttpResponse {
    tracing::info!("Invalid input: {}", err);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "invalid_input".to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}
