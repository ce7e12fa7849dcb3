use serde::{Deserialize, Serialize};

/// Coaching feedback for a single workout, as returned by the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkoutFeedback {
    pub heart_rate_analysis: String,
    pub distance_feedback: String,
    pub overall_motivation: String,
    pub next_workout_suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StudentAlert {
    pub student_name: String,
    pub alert: String,
}

/// Roster-level insight for the trainer dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TrainerSummary {
    pub overall_summary: String,
    pub alerts: Vec<StudentAlert>,
    pub challenge_suggestion: String,
}
