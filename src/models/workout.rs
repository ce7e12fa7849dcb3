use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One heart-rate reading taken during a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateSample {
    /// Minutes since the start of the session
    pub time: u32,
    pub bpm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: String,
    pub date: DateTime<Utc>,
    /// Duration in minutes
    pub duration: u32,
    /// Distance in kilometres
    pub distance: f64,
    pub avg_heart_rate: u32,
    pub max_heart_rate: u32,
    #[serde(default)]
    pub heart_rate_data: Vec<HeartRateSample>,
    pub with_trainer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl WorkoutSession {
    /// Serialized sample sequence as embedded in generation prompts.
    pub fn samples_json(&self) -> String {
        serde_json::to_string(&self.heart_rate_data).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Aggregates shown on a student card and fed into the trainer summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentStats {
    pub workout_count: usize,
    pub total_distance_km: f64,
    /// `None` when there are no workouts to average over
    pub mean_heart_rate: Option<f64>,
}

impl StudentStats {
    pub fn from_workouts(workouts: &[WorkoutSession]) -> Self {
        let workout_count = workouts.len();
        // fold from +0.0; `Sum` for f64 starts at -0.0
        let total_distance_km = workouts.iter().fold(0.0, |acc, w| acc + w.distance);
        let mean_heart_rate = if workout_count == 0 {
            None
        } else {
            let total: f64 = workouts.iter().map(|w| f64::from(w.avg_heart_rate)).sum();
            Some(total / workout_count as f64)
        };

        Self {
            workout_count,
            total_distance_km,
            mean_heart_rate,
        }
    }

    /// Mean heart rate rounded to whole bpm (halves away from zero), or `N/A`.
    pub fn mean_heart_rate_label(&self) -> String {
        match self.mean_heart_rate {
            Some(mean) => format!("{}", mean.round()),
            None => "N/A".to_string(),
        }
    }
}
