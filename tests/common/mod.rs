#![allow(dead_code)]

use bonafit_coach::api::routes::{create_routes, AppState};
use bonafit_coach::config::{GeminiConfig, RosterSeeder};
use bonafit_coach::models::StudentProfile;
use bonafit_coach::services::{FeedbackService, FixedClock, GeminiClient, RosterStore};
use chrono::{DateTime, FixedOffset, TimeZone};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use std::sync::Arc;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

pub const TEST_API_KEY: &str = "test-key";
pub const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

/// 20 Oct 2024, noon in UTC-3
pub fn test_now() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 10, 20, 12, 0, 0)
        .unwrap()
}

pub fn seeded_roster() -> Vec<StudentProfile> {
    RosterSeeder::new(test_now(), StdRng::seed_from_u64(42)).seed_all()
}

/// Client with no credential; never touches the network.
pub fn offline_service() -> FeedbackService {
    FeedbackService::new(GeminiClient::new(GeminiConfig::default()).unwrap())
}

/// Client with a credential, pointed at `base_url`.
pub fn live_service(base_url: &str) -> FeedbackService {
    let config = GeminiConfig::default()
        .with_api_key(TEST_API_KEY)
        .with_base_url(base_url);
    FeedbackService::new(GeminiClient::new(config).unwrap())
}

pub fn test_state(service: FeedbackService) -> AppState {
    AppState::new(
        RosterStore::new(seeded_roster()),
        service,
        Arc::new(FixedClock(test_now())),
    )
}

pub fn test_app(service: FeedbackService) -> axum::Router {
    create_routes(test_state(service))
}

/// Wrap a structured answer the way `generateContent` returns it.
pub fn gemini_reply(answer: &Value) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": answer.to_string() }]
            },
            "finishReason": "STOP"
        }]
    })
}

pub fn sample_feedback_json() -> Value {
    json!({
        "heartRateAnalysis": "Boa parte do treino na zona aeróbica.",
        "distanceFeedback": "Ritmo constante ao longo do percurso.",
        "overallMotivation": "Excelente dedicação!",
        "nextWorkoutSuggestion": "Inclua um treino intervalado curto."
    })
}
