use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::{StudentProfile, WeeklySchedule};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Student not found: {0}")]
    StudentNotFound(String),
}

/// Point-in-time copy of the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterSnapshot {
    pub version: u64,
    pub students: Vec<StudentProfile>,
}

/// The in-memory roster shared by all call sites.
///
/// Reads hand out snapshots. The only write is [`RosterStore::replace_schedule`],
/// which swaps in a new profile value by id under the write lock and bumps the
/// version once per commit.
#[derive(Debug, Clone)]
pub struct RosterStore {
    inner: Arc<RwLock<RosterSnapshot>>,
}

impl RosterStore {
    pub fn new(students: Vec<StudentProfile>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RosterSnapshot {
                version: 0,
                students,
            })),
        }
    }

    pub async fn snapshot(&self) -> RosterSnapshot {
        self.inner.read().await.clone()
    }

    pub async fn students(&self) -> Vec<StudentProfile> {
        self.inner.read().await.students.clone()
    }

    pub async fn version(&self) -> u64 {
        self.inner.read().await.version
    }

    pub async fn student(&self, student_id: &str) -> Result<StudentProfile, RosterError> {
        self.inner
            .read()
            .await
            .students
            .iter()
            .find(|s| s.id == student_id)
            .cloned()
            .ok_or_else(|| RosterError::StudentNotFound(student_id.to_string()))
    }

    /// Replace one student's whole schedule. Days missing from `schedule`
    /// end up with no session; nothing is merged with the previous mapping.
    ///
    /// Returns the new profile and the roster version it was committed at.
    pub async fn replace_schedule(
        &self,
        student_id: &str,
        schedule: WeeklySchedule,
    ) -> Result<(StudentProfile, u64), RosterError> {
        let mut roster = self.inner.write().await;

        let slot = roster
            .students
            .iter_mut()
            .find(|s| s.id == student_id)
            .ok_or_else(|| RosterError::StudentNotFound(student_id.to_string()))?;

        let updated = slot.with_schedule(schedule);
        *slot = updated.clone();
        roster.version += 1;

        info!(
            student_id,
            days = updated.schedule_or_default().len(),
            version = roster.version,
            "Schedule replaced"
        );

        Ok((updated, roster.version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;
    use pretty_assertions::assert_eq;

    fn student(id: &str, schedule: Option<WeeklySchedule>) -> StudentProfile {
        StudentProfile {
            id: id.to_string(),
            name: format!("Aluna {}", id),
            avatar_url: String::new(),
            age: 30,
            workouts: vec![],
            schedule,
        }
    }

    fn store() -> RosterStore {
        let monday_friday = WeeklySchedule::new()
            .with(Weekday::Monday, "08:00")
            .with(Weekday::Friday, "08:00");
        RosterStore::new(vec![student("a", Some(monday_friday)), student("b", None)])
    }

    #[tokio::test]
    async fn test_replace_drops_days_not_submitted() {
        let store = store();
        let wednesday = WeeklySchedule::new().with(Weekday::Wednesday, "07:30");

        let (updated, version) = store.replace_schedule("a", wednesday.clone()).await.unwrap();
        let schedule = updated.schedule.unwrap();

        assert_eq!(version, 1);
        assert_eq!(schedule, wednesday);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.get(Weekday::Monday), None);
        assert_eq!(schedule.get(Weekday::Friday), None);
        assert_eq!(store.student("a").await.unwrap().schedule, Some(wednesday));
    }

    #[tokio::test]
    async fn test_replace_is_idempotent() {
        let store = store();
        let schedule = WeeklySchedule::new()
            .with(Weekday::Tuesday, "06:00")
            .with(Weekday::Thursday, "06:00");

        let (first, _) = store.replace_schedule("b", schedule.clone()).await.unwrap();
        let (second, version) = store.replace_schedule("b", schedule.clone()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.schedule, Some(schedule));
        assert_eq!(version, 2);
    }

    #[tokio::test]
    async fn test_unknown_student_changes_nothing() {
        let store = store();
        let before = store.snapshot().await;

        let result = store.replace_schedule("zzz", WeeklySchedule::new()).await;

        assert_eq!(result, Err(RosterError::StudentNotFound("zzz".to_string())));
        assert_eq!(store.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_other_students_untouched() {
        let store = store();
        store
            .replace_schedule("b", WeeklySchedule::new().with(Weekday::Sunday, "10:00"))
            .await
            .unwrap();

        let a = store.student("a").await.unwrap();
        assert_eq!(a.schedule.map(|s| s.len()), Some(2));
    }

    #[tokio::test]
    async fn test_concurrent_replaces_are_all_counted() {
        let store = store();
        let mut handles = Vec::new();

        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let time = format!("{:02}:00", i);
                store
                    .replace_schedule("a", WeeklySchedule::new().with(Weekday::Saturday, time))
                    .await
            }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.version().await, 16);
        assert_eq!(store.student("a").await.unwrap().schedule.map(|s| s.len()), Some(1));
    }
}
