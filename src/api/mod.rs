// API routes and handlers

pub mod error;
pub mod feedback;
pub mod health;
pub mod routes;
pub mod students;
pub mod trainer;
