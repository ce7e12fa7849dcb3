use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use super::feedback_service::FeedbackService;
use crate::models::{WorkoutFeedback, WorkoutSession};

/// Identifies one feedback request. Later requests get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    last: AtomicU64,
}

impl RequestTracker {
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.last.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "feedback", rename_all = "snake_case")]
pub enum FeedbackPanel {
    Loading,
    Ready(WorkoutFeedback),
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub workout_id: String,
    pub token: RequestToken,
    pub panel: FeedbackPanel,
}

/// Which workout each student is looking at and the feedback shown for it.
///
/// A result is applied only while its token is still the student's active
/// token, so a slow answer for an earlier selection never replaces the
/// panel of a newer one.
#[derive(Debug, Default)]
pub struct FeedbackBoard {
    tracker: RequestTracker,
    selections: Mutex<HashMap<String, Selection>>,
}

impl FeedbackBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `workout_id` the student's active selection and put its panel
    /// into the loading state.
    pub async fn select(&self, student_id: &str, workout_id: &str) -> RequestToken {
        let token = self.tracker.issue();
        let selection = Selection {
            workout_id: workout_id.to_string(),
            token,
            panel: FeedbackPanel::Loading,
        };

        self.selections
            .lock()
            .await
            .insert(student_id.to_string(), selection);

        token
    }

    /// Apply a finished request. Returns `false` when the result was stale
    /// and has been discarded.
    pub async fn complete(
        &self,
        student_id: &str,
        token: RequestToken,
        result: Option<WorkoutFeedback>,
    ) -> bool {
        let mut selections = self.selections.lock().await;

        match selections.get_mut(student_id) {
            Some(selection) if selection.token == token => {
                selection.panel = match result {
                    Some(feedback) => FeedbackPanel::Ready(feedback),
                    None => FeedbackPanel::Unavailable,
                };
                true
            }
            _ => {
                debug!(student_id, token = token.value(), "Discarding stale feedback response");
                false
            }
        }
    }

    pub async fn current(&self, student_id: &str) -> Option<Selection> {
        self.selections.lock().await.get(student_id).cloned()
    }

    /// Select `workout` and generate its feedback in a background task.
    pub async fn select_and_generate(
        self: &Arc<Self>,
        service: &FeedbackService,
        student_id: &str,
        workout: WorkoutSession,
    ) -> RequestToken {
        let token = self.select(student_id, &workout.id).await;

        let board = Arc::clone(self);
        let service = service.clone();
        let student_id = student_id.to_string();
        tokio::spawn(async move {
            let result = service.workout_feedback(&workout).await;
            board.complete(&student_id, token, result).await;
        });

        token
    }
}
