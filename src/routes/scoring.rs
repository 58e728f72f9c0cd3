use super::AppState;
use crate::models::{
    ErrorResponse, HealthResponse, RankCandidatesRequest, RankCandidatesResponse, ScoreRequest,
    SkillGapRequest, TeamCompatibilityRequest, TeamCompatibilityResponse,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure all scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/score", web::post().to(score_candidate))
        .route("/jobs/rank", web::post().to(rank_candidates))
        .route("/teams/compatibility", web::post().to(team_compatibility))
        .route("/teams/gaps", web::post().to(team_skill_gaps));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one candidate against a job and its team
///
/// POST /api/v1/score
///
/// Request body:
/// ```json
/// {
///   "candidate": { "id": "c1", "name": "Ada", "skills": [{"name": "Rust", "level": "expert"}] },
///   "job": { "id": "j1", "title": "Backend", "requiredSkills": [{"name": "Rust"}] },
///   "team": []
/// }
/// ```
async fn score_candidate(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    let report = state.scorer.score(&req.candidate, &req.job, &req.team);

    tracing::info!(
        "Scored candidate {} for job {}: overall {}",
        report.candidate_id,
        req.job.id,
        report.breakdown.overall
    );

    HttpResponse::Ok().json(report)
}

/// Rank candidates for a job
///
/// POST /api/v1/jobs/rank
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return validation_error(errors);
    }

    let req = req.into_inner();
    let job_id = req.job.id.clone();
    let result = state
        .scorer
        .rank_candidates(&req.job, &req.team, req.candidates, req.limit as usize);

    tracing::info!(
        "Returning {} ranked candidates for job {} (from {} candidates)",
        result.reports.len(),
        job_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(RankCandidatesResponse {
        reports: result.reports,
        total_candidates: result.total_candidates,
    })
}

/// POST /api/v1/teams/compatibility
async fn team_compatibility(
    state: web::Data<AppState>,
    req: web::Json<TeamCompatibilityRequest>,
) -> impl Responder {
    let team = &req.team;
    let score = state.scorer.team_compatibility(&team.members);

    tracing::debug!("Team {} ({} members) compatibility: {}", team.id, team.members.len(), score);

    HttpResponse::Ok().json(TeamCompatibilityResponse {
        team_id: team.id.clone(),
        score,
        member_count: team.members.len(),
    })
}

/// POST /api/v1/teams/gaps
async fn team_skill_gaps(
    state: web::Data<AppState>,
    req: web::Json<SkillGapRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let analysis = state
        .scorer
        .team_skill_gaps(&req.team.members, &req.required_skills);

    tracing::debug!(
        "Team {} is missing {} of {} required skills",
        req.team.id,
        analysis.skill_gaps.len(),
        req.required_skills.len()
    );

    HttpResponse::Ok().json(analysis)
}
