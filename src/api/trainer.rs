use axum::{extract::State, response::Json, routing::get, Router};

use super::error::{feedback_unavailable, ApiFailure};
use super::routes::AppState;
use crate::models::{AttendanceReport, TrainerSummary};
use crate::services::monthly_attendance;

pub fn trainer_routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_trainer_summary))
        .route("/attendance", get(get_attendance))
}

/// AI summary, alerts and weekly challenge for the whole roster
pub async fn get_trainer_summary(
    State(state): State<AppState>,
) -> Result<Json<TrainerSummary>, ApiFailure> {
    let students = state.roster.students().await;

    state
        .feedback_service
        .trainer_summary(&students)
        .await
        .map(Json)
        .ok_or_else(feedback_unavailable)
}

/// Trainer-led sessions per student for the current month
pub async fn get_attendance(State(state): State<AppState>) -> Json<AttendanceReport> {
    let students = state.roster.students().await;
    Json(monthly_attendance(&students, state.clock.as_ref()))
}
