// Domain models for the coaching dashboard

pub mod attendance;
pub mod feedback;
pub mod student;
pub mod workout;

pub use attendance::*;
pub use feedback::*;
pub use student::*;
pub use workout::*;
