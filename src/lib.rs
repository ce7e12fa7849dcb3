// Library exports for the BonaFit coaching service
// This allows testing of internal modules

pub mod api;
pub mod config;
pub mod models;
pub mod services;
