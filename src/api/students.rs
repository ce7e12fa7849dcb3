use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::error::{failure, roster_failure, ApiFailure};
use super::feedback::{get_selection, get_workout_feedback, select_workout};
use super::routes::AppState;
use crate::models::{StudentProfile, StudentStats, WeeklySchedule};

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentCard {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
    pub age: u32,
    pub stats: StudentStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentDetail {
    pub student: StudentProfile,
    pub stats: StudentStats,
    pub schedule_description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleUpdateResponse {
    pub student: StudentProfile,
    pub schedule_description: String,
    pub roster_version: u64,
}

impl From<&StudentProfile> for StudentCard {
    fn from(student: &StudentProfile) -> Self {
        Self {
            id: student.id.clone(),
            name: student.name.clone(),
            avatar_url: student.avatar_url.clone(),
            age: student.age,
            stats: student.stats(),
        }
    }
}

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students))
        .route("/:student_id", get(get_student))
        .route("/:student_id/schedule", put(update_schedule))
        .route("/:student_id/selection", get(get_selection).put(select_workout))
        .route("/:student_id/workouts/:workout_id/feedback", get(get_workout_feedback))
}

/// Roster cards for the trainer dashboard
pub async fn list_students(State(state): State<AppState>) -> Json<Vec<StudentCard>> {
    let students = state.roster.students().await;
    Json(students.iter().map(StudentCard::from).collect())
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentDetail>, ApiFailure> {
    let student = state.roster.student(&student_id).await.map_err(roster_failure)?;

    Ok(Json(StudentDetail {
        stats: student.stats(),
        schedule_description: student.schedule_or_default().describe(),
        student,
    }))
}

/// Replace a student's weekly schedule with the submitted mapping
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(schedule): Json<WeeklySchedule>,
) -> Result<Json<ScheduleUpdateResponse>, ApiFailure> {
    if let Some((day, time)) = schedule
        .iter()
        .find(|(_, time)| NaiveTime::parse_from_str(time, "%H:%M").is_err())
    {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            "INVALID_SCHEDULE",
            &format!("Invalid time '{}' for {}; expected HH:MM", time, day),
        ));
    }

    let (student, roster_version) = state
        .roster
        .replace_schedule(&student_id, schedule)
        .await
        .map_err(roster_failure)?;

    Ok(Json(ScheduleUpdateResponse {
        schedule_description: student.schedule_or_default().describe(),
        student,
        roster_version,
    }))
}
