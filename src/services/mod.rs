// Business logic services

pub mod attendance_service;
pub mod clock;
pub mod feedback_board;
pub mod feedback_service;
pub mod generation_client;
pub mod roster_store;

pub use attendance_service::{monthly_attendance, monthly_sessions};
pub use clock::{Clock, FixedClock, SystemClock};
pub use feedback_board::{FeedbackBoard, FeedbackPanel, RequestToken, RequestTracker, Selection};
pub use feedback_service::{FeedbackService, TrainerSummaryRequest, WorkoutFeedbackRequest};
pub use generation_client::{GeminiClient, GenerationError, StructuredRequest};
pub use roster_store::{RosterError, RosterSnapshot, RosterStore};
