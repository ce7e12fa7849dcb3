use chrono::Datelike;

use super::clock::Clock;
use crate::models::{AttendanceReport, MonthlyAttendance, StudentProfile, WorkoutSession};

const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

/// Trainer-led sessions for every student in the current month of `clock`.
///
/// Each workout date is read through [`Clock::local`], so a session late on
/// the last day of a month is not pushed into the next one by UTC, and one
/// recorded before a daylight-saving change keeps its own offset.
pub fn monthly_attendance(students: &[StudentProfile], clock: &dyn Clock) -> AttendanceReport {
    let now = clock.now();
    let students = students
        .iter()
        .map(|student| {
            let sessions = monthly_sessions(&student.workouts, clock);
            let session_times = sessions
                .iter()
                .map(|session| format_session_time(session, clock))
                .collect::<Vec<_>>()
                .join("; ");

            MonthlyAttendance {
                student_id: student.id.clone(),
                student_name: student.name.clone(),
                session_count: sessions.len(),
                session_times,
                caption: caption(sessions.len()),
            }
        })
        .collect();

    AttendanceReport {
        title: format!("Relatório de Frequência - {}", month_name(now.month())),
        month: now.month(),
        year: now.year(),
        students,
    }
}

/// Workouts done with the trainer in the same local month and year as now.
pub fn monthly_sessions<'a>(workouts: &'a [WorkoutSession], clock: &dyn Clock) -> Vec<&'a WorkoutSession> {
    let now = clock.now();
    workouts
        .iter()
        .filter(|w| {
            let local = clock.local(w.date);
            w.with_trainer && local.month() == now.month() && local.year() == now.year()
        })
        .collect()
}

fn format_session_time(session: &WorkoutSession, clock: &dyn Clock) -> String {
    clock.local(session.date).format("%d/%m - %H:%M").to_string()
}

fn caption(count: usize) -> String {
    let noun = if count == 1 { "aula" } else { "aulas" };
    format!("{} {} com a personal este mês.", count, noun)
}

fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::FixedClock;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn brt() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    fn session(id: &str, date: DateTime<FixedOffset>, with_trainer: bool) -> WorkoutSession {
        WorkoutSession {
            id: id.to_string(),
            date: date.with_timezone(&Utc),
            duration: 45,
            distance: 5.0,
            avg_heart_rate: 140,
            max_heart_rate: 160,
            heart_rate_data: vec![],
            with_trainer,
            photo_url: None,
        }
    }

    fn student(workouts: Vec<WorkoutSession>) -> StudentProfile {
        StudentProfile {
            id: "student-1".to_string(),
            name: "Ana Clara".to_string(),
            avatar_url: String::new(),
            age: 28,
            workouts,
            schedule: None,
        }
    }

    #[test]
    fn test_counts_only_trainer_sessions_this_month() {
        let now = brt().with_ymd_and_hms(2024, 10, 20, 12, 0, 0).unwrap();
        let roster = vec![student(vec![
            session("w1", brt().with_ymd_and_hms(2024, 10, 15, 8, 0, 0).unwrap(), true),
            session("w2", brt().with_ymd_and_hms(2024, 10, 12, 8, 0, 0).unwrap(), true),
            session("solo", brt().with_ymd_and_hms(2024, 10, 10, 18, 30, 0).unwrap(), false),
            session("last", brt().with_ymd_and_hms(2024, 9, 28, 8, 0, 0).unwrap(), true),
        ])];

        let report = monthly_attendance(&roster, &FixedClock(now));
        let row = &report.students[0];

        assert_eq!(row.session_count, 2);
        assert_eq!(row.session_times, "15/10 - 08:00; 12/10 - 08:00");
        assert_eq!(row.caption, "2 aulas com a personal este mês.");
        assert_eq!(report.title, "Relatório de Frequência - Outubro");
    }

    #[test]
    fn test_same_month_of_another_year_is_excluded() {
        let now = brt().with_ymd_and_hms(2024, 10, 20, 12, 0, 0).unwrap();
        let roster = vec![student(vec![session(
            "old",
            brt().with_ymd_and_hms(2023, 10, 15, 8, 0, 0).unwrap(),
            true,
        )])];

        let report = monthly_attendance(&roster, &FixedClock(now));

        assert_eq!(report.students[0].session_count, 0);
        assert_eq!(report.students[0].session_times, "");
        assert_eq!(report.students[0].caption, "0 aulas com a personal este mês.");
    }

    #[test]
    fn test_month_boundary_uses_local_calendar() {
        // 31 Oct 22:30 in UTC-3 is already 1 Nov in UTC.
        let now = brt().with_ymd_and_hms(2024, 10, 31, 23, 0, 0).unwrap();
        let roster = vec![student(vec![session(
            "late",
            brt().with_ymd_and_hms(2024, 10, 31, 22, 30, 0).unwrap(),
            true,
        )])];

        let report = monthly_attendance(&roster, &FixedClock(now));

        assert_eq!(report.students[0].session_count, 1);
        assert_eq!(report.students[0].session_times, "31/10 - 22:30");
        assert_eq!(report.students[0].caption, "1 aula com a personal este mês.");
    }

    #[test]
    fn test_student_without_workouts() {
        let now = brt().with_ymd_and_hms(2024, 1, 3, 9, 0, 0).unwrap();
        let report = monthly_attendance(&[student(vec![])], &FixedClock(now));

        assert_eq!(report.title, "Relatório de Frequência - Janeiro");
        assert_eq!((report.month, report.year), (1, 2024));
        assert_eq!(report.students[0].session_count, 0);
    }

    /// Central European rules for 2024: UTC+2 until 27 Oct 01:00 UTC, UTC+1 after.
    struct BerlinClock(DateTime<Utc>);

    impl BerlinClock {
        fn offset_at(instant: DateTime<Utc>) -> FixedOffset {
            let switch = Utc.with_ymd_and_hms(2024, 10, 27, 1, 0, 0).unwrap();
            let hours = if instant < switch { 2 } else { 1 };
            FixedOffset::east_opt(hours * 3600).unwrap()
        }
    }

    impl Clock for BerlinClock {
        fn now(&self) -> DateTime<FixedOffset> {
            self.0.with_timezone(&Self::offset_at(self.0))
        }

        fn local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
            instant.with_timezone(&Self::offset_at(instant))
        }
    }

    #[test]
    fn test_dates_keep_their_own_daylight_saving_offset() {
        // Now is in summer time (UTC+2); the session is after the switch (UTC+1).
        let clock = BerlinClock(Utc.with_ymd_and_hms(2024, 10, 5, 10, 0, 0).unwrap());
        let cet = FixedOffset::east_opt(3600).unwrap();
        let roster = vec![student(vec![session(
            "halloween",
            cet.with_ymd_and_hms(2024, 10, 31, 23, 30, 0).unwrap(),
            true,
        )])];

        let report = monthly_attendance(&roster, &clock);

        assert_eq!(report.month, 10);
        assert_eq!(report.students[0].session_count, 1);
        assert_eq!(report.students[0].session_times, "31/10 - 23:30");
    }
}
