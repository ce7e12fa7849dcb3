use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health::health_check;
use super::students::student_routes;
use super::trainer::trainer_routes;
use crate::services::{Clock, FeedbackBoard, FeedbackService, RosterStore};

/// Shared handles every handler works against
#[derive(Clone)]
pub struct AppState {
    pub roster: RosterStore,
    pub feedback_service: FeedbackService,
    pub board: Arc<FeedbackBoard>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(roster: RosterStore, feedback_service: FeedbackService, clock: Arc<dyn Clock>) -> Self {
        Self {
            roster,
            feedback_service,
            board: Arc::new(FeedbackBoard::new()),
            clock,
        }
    }
}

pub fn create_routes(state: AppState) -> Router {
    let api_v1 = Router::new()
        .nest("/students", student_routes())
        .nest("/trainer", trainer_routes());

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_v1)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
