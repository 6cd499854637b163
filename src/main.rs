//! Attendance backend entry point: loads the roster and serves the
//! check-in API

use std::sync::Arc;

use ats_backend::api;
use ats_backend::config::Config;
use ats_backend::logging;
use ats_backend::models::roster::Roster;
use ats_backend::services::roster_service::{RosterService, RosterSource};
use ats_backend::services::submission_service::{MemorySink, SubmissionFactory};
use ats_backend::services::workflow_service::AttendanceWorkflow;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = Config::from_env()?;
    config.log_config();

    let factory = SubmissionFactory::system(config.display_timezone());
    let sink = Arc::new(MemorySink::new());
    let workflow = Arc::new(AttendanceWorkflow::new(config.profile, factory, sink));

    // The roster is loaded exactly once per session; the form stays
    // interactive over an empty roster until a remote fetch resolves
    match &config.roster_source {
        Some(raw) => {
            let source = RosterSource::parse(raw);
            workflow.spawn_roster_load(RosterService::new(), source);
        }
        None => {
            workflow
                .install_roster(ats_backend::services::roster_service::RosterLoadOutcome {
                    roster: Roster::builtin(),
                    error: None,
                })
                .await;
            info!("Using builtin roster (no roster source configured)");
        }
    }

    let cors = build_cors_layer(&config.cors_origins);

    let app = Router::new()
        .nest("/api", api::create_attendance_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(workflow);

    let addr = config.bind_address();
    info!("Attendance backend listening on http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "Ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();
        cors.allow_origin(AllowOrigin::list(parsed))
    }
}
