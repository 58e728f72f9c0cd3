// Route exports
pub mod resumes;
pub mod scoring;

use crate::core::Scorer;
use crate::services::ResumeParserClient;
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub scorer: Scorer,
    pub resume_parser: Arc<ResumeParserClient>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(scoring::configure)
            .configure(resumes::configure),
    );
}
