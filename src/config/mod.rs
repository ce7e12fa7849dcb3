// Runtime configuration and seed data

pub mod app;
pub mod gemini;
pub mod seeding;

pub use app::AppConfig;
pub use gemini::GeminiConfig;
pub use seeding::RosterSeeder;
