use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use super::error::{failure, feedback_unavailable, roster_failure, ApiFailure};
use super::routes::AppState;
use crate::models::{StudentProfile, WorkoutFeedback, WorkoutSession};
use crate::services::Selection;

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectWorkoutRequest {
    pub workout_id: String,
}

fn find_workout(student: &StudentProfile, workout_id: &str) -> Result<WorkoutSession, ApiFailure> {
    student.workout(workout_id).cloned().ok_or_else(|| {
        failure(StatusCode::NOT_FOUND, "WORKOUT_NOT_FOUND", "Workout not found")
    })
}

/// Generate feedback for one workout and wait for it
pub async fn get_workout_feedback(
    State(state): State<AppState>,
    Path((student_id, workout_id)): Path<(String, String)>,
) -> Result<Json<WorkoutFeedback>, ApiFailure> {
    let student = state.roster.student(&student_id).await.map_err(roster_failure)?;
    let workout = find_workout(&student, &workout_id)?;

    state
        .feedback_service
        .workout_feedback(&workout)
        .await
        .map(Json)
        .ok_or_else(feedback_unavailable)
}

/// Switch the student's selected workout; feedback is generated in the background
pub async fn select_workout(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(request): Json<SelectWorkoutRequest>,
) -> Result<(StatusCode, Json<Selection>), ApiFailure> {
    let student = state.roster.student(&student_id).await.map_err(roster_failure)?;
    let workout = find_workout(&student, &request.workout_id)?;

    let token = state
        .board
        .select_and_generate(&state.feedback_service, &student_id, workout)
        .await;

    tracing::debug!(student_id = %student_id, workout_id = %request.workout_id, token = token.value(), "Workout selected");

    let selection = state.board.current(&student_id).await.ok_or_else(|| {
        failure(StatusCode::INTERNAL_SERVER_ERROR, "SELECTION_LOST", "Selection was not recorded")
    })?;

    Ok((StatusCode::ACCEPTED, Json(selection)))
}

pub async fn get_selection(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Selection>, ApiFailure> {
    state.roster.student(&student_id).await.map_err(roster_failure)?;

    state
        .board
        .current(&student_id)
        .await
        .map(Json)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "NO_SELECTION", "No workout selected"))
}
