use super::AppState;
use crate::core::resume::{normalize_batch, FileOutcome};
use crate::models::{ErrorResponse, NormalizeResumeRequest, ParseResumeQuery};
use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

/// Configure resume intake routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/resumes/normalize", web::post().to(normalize_resume))
        .route("/resumes/parse", web::post().to(parse_resume));
}

fn outcome_response(outcome: FileOutcome) -> HttpResponse {
    if outcome.is_success() {
        HttpResponse::Ok().json(outcome)
    } else {
        HttpResponse::UnprocessableEntity().json(outcome)
    }
}

/// Normalize already-parsed resume JSON into a candidate profile
///
/// POST /api/v1/resumes/normalize
///
/// Request body:
/// ```json
/// {
///   "fileName": "ada.pdf",
///   "resume": { "name": "Ada", "skills": [{"name": "Rust", "level": "expert"}] }
/// }
/// ```
async fn normalize_resume(req: web::Json<NormalizeResumeRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let file_name = req.file_name.clone();
    let outcome = normalize_batch([(req.file_name, Ok(req.resume))])
        .pop()
        .unwrap_or_else(|| FileOutcome::failure(file_name, "No result produced"));

    outcome_response(outcome)
}

/// Forward a raw resume file to the parsing service and normalize the result
///
/// POST /api/v1/resumes/parse?fileName=ada.pdf
async fn parse_resume(
    state: web::Data<AppState>,
    query: web::Query<ParseResumeQuery>,
    body: web::Bytes,
    http_req: HttpRequest,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if body.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Empty upload".to_string(),
            message: "Request body must contain the resume file".to_string(),
            status_code: 400,
        });
    }

    let content_type = http_req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream");

    tracing::info!(
        "Parsing uploaded resume {} ({} bytes, {})",
        query.file_name,
        body.len(),
        content_type
    );

    let outcome = state
        .resume_parser
        .parse_and_normalize(&query.file_name, content_type, body.to_vec())
        .await;

    outcome_response(outcome)
}
