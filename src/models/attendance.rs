use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAttendance {
    pub student_id: String,
    pub student_name: String,
    pub session_count: usize,
    /// Session times formatted `DD/MM - HH:MM`, joined by `"; "`
    pub session_times: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    pub title: String,
    pub month: u32,
    pub year: i32,
    pub students: Vec<MonthlyAttendance>,
}
