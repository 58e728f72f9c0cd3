use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use std::io;
use std::sync::Arc;
use talentfit::config::Settings;
use talentfit::core::{Scorer, SkillMatcher, SynonymTable};
use talentfit::models::MatchMode;
use talentfit::routes::{self, AppState};
use talentfit::services::ResumeParserClient;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn build_skill_matcher(mode: MatchMode, synonyms_path: Option<&str>) -> io::Result<SkillMatcher> {
    if mode == MatchMode::Exact {
        return Ok(SkillMatcher::exact());
    }

    let synonyms = match synonyms_path {
        Some(path) => SynonymTable::load(path).map_err(|e| {
            error!("Failed to load synonyms from {}: {}", path, e);
            io::Error::new(io::ErrorKind::InvalidData, e.to_string())
        })?,
        None => SynonymTable::builtin(),
    };

    Ok(SkillMatcher::new(mode, synonyms))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting TalentFit scoring service...");

    let skills = build_skill_matcher(
        settings.scoring.match_mode,
        settings.scoring.synonyms_path.as_deref(),
    )?;

    let weights = settings.scoring.weights();
    let scorer = Scorer::new(weights, settings.scoring.constants, skills)
        .with_min_overall_score(settings.scoring.min_overall_score);

    info!(
        "Scorer initialized with weights: {:?}, match mode: {:?}",
        weights, settings.scoring.match_mode
    );

    let resume_parser = ResumeParserClient::new(
        settings.resume_parser.endpoint.clone(),
        settings.resume_parser.api_key.clone(),
        settings.resume_parser.timeout(),
    )
    .map_err(|e| {
        error!("Failed to build resume parser client: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    info!("Resume parser client targeting {}", settings.resume_parser.endpoint);

    let app_state = AppState {
        scorer,
        resume_parser: Arc::new(resume_parser),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
