use chrono::{DateTime, Datelike, FixedOffset, Months, NaiveDate, Utc};
use rand::Rng;

use crate::models::{HeartRateSample, StudentProfile, Weekday, WeeklySchedule, WorkoutSession};

/// Builds the demo roster the service starts with.
///
/// Workouts are dated relative to `now` so the current-month views always
/// have data: most sessions fall in the current month, one on the 28th of
/// the previous month.
pub struct RosterSeeder<R: Rng> {
    now: DateTime<FixedOffset>,
    rng: R,
}

impl<R: Rng> RosterSeeder<R> {
    pub fn new(now: DateTime<FixedOffset>, rng: R) -> Self {
        Self { now, rng }
    }

    pub fn seed_all(mut self) -> Vec<StudentProfile> {
        tracing::info!("Seeding demo roster...");

        let roster = vec![self.seed_ana(), self.seed_beatriz(), self.seed_carla()];

        tracing::info!(students = roster.len(), "Demo roster ready");
        roster
    }

    fn seed_ana(&mut self) -> StudentProfile {
        let schedule = WeeklySchedule::new()
            .with(Weekday::Monday, "08:00")
            .with(Weekday::Wednesday, "08:00")
            .with(Weekday::Friday, "08:00");

        StudentProfile {
            id: "student-1".to_string(),
            name: "Ana Clara".to_string(),
            avatar_url: "https://picsum.photos/seed/ana/200".to_string(),
            age: 28,
            schedule: Some(schedule),
            workouts: vec![
                WorkoutSession {
                    id: "w1".to_string(),
                    date: self.this_month(15, 8, 0),
                    duration: 45,
                    distance: 5.2,
                    avg_heart_rate: 145,
                    max_heart_rate: 168,
                    heart_rate_data: self.heart_rate_series(45, 120.0, 5.0, 20.0, 10.0),
                    with_trainer: true,
                    photo_url: Some("https://picsum.photos/seed/workout1/800/600".to_string()),
                },
                WorkoutSession {
                    id: "w2".to_string(),
                    date: self.this_month(12, 8, 0),
                    duration: 60,
                    distance: 7.1,
                    avg_heart_rate: 150,
                    max_heart_rate: 175,
                    heart_rate_data: self.heart_rate_series(60, 130.0, 6.0, 25.0, 5.0),
                    with_trainer: true,
                    photo_url: None,
                },
                WorkoutSession {
                    id: "w-solo-1".to_string(),
                    date: self.this_month(10, 18, 30),
                    duration: 30,
                    distance: 4.0,
                    avg_heart_rate: 140,
                    max_heart_rate: 160,
                    heart_rate_data: vec![],
                    with_trainer: false,
                    photo_url: None,
                },
                WorkoutSession {
                    id: "w-last-month".to_string(),
                    date: self.last_month(28, 8, 0),
                    duration: 50,
                    distance: 6.5,
                    avg_heart_rate: 148,
                    max_heart_rate: 172,
                    heart_rate_data: vec![],
                    with_trainer: true,
                    photo_url: None,
                },
            ],
        }
    }

    fn seed_beatriz(&mut self) -> StudentProfile {
        StudentProfile {
            id: "student-2".to_string(),
            name: "Beatriz Lima".to_string(),
            avatar_url: "https://picsum.photos/seed/bia/200".to_string(),
            age: 32,
            schedule: None,
            workouts: vec![
                WorkoutSession {
                    id: "w3".to_string(),
                    date: self.this_month(14, 9, 0),
                    duration: 30,
                    distance: 3.5,
                    avg_heart_rate: 138,
                    max_heart_rate: 155,
                    heart_rate_data: self.heart_rate_series(30, 125.0, 4.0, 15.0, 8.0),
                    with_trainer: true,
                    photo_url: None,
                },
                WorkoutSession {
                    id: "w3-2".to_string(),
                    date: self.this_month(7, 9, 0),
                    duration: 35,
                    distance: 4.0,
                    avg_heart_rate: 140,
                    max_heart_rate: 158,
                    heart_rate_data: vec![],
                    with_trainer: true,
                    photo_url: None,
                },
            ],
        }
    }

    fn seed_carla(&mut self) -> StudentProfile {
        StudentProfile {
            id: "student-3".to_string(),
            name: "Carla Souza".to_string(),
            avatar_url: "https://picsum.photos/seed/carla/200".to_string(),
            age: 25,
            schedule: None,
            workouts: vec![WorkoutSession {
                id: "w4".to_string(),
                date: self.this_month(9, 10, 0),
                duration: 50,
                distance: 6.0,
                avg_heart_rate: 148,
                max_heart_rate: 170,
                heart_rate_data: self.heart_rate_series(50, 135.0, 5.0, 20.0, 10.0),
                with_trainer: true,
                photo_url: None,
            }],
        }
    }

    /// `base + sin(i / period) * amplitude + jitter`, one sample per minute.
    fn heart_rate_series(
        &mut self,
        minutes: u32,
        base: f64,
        period: f64,
        amplitude: f64,
        jitter: f64,
    ) -> Vec<HeartRateSample> {
        (0..minutes)
            .map(|i| HeartRateSample {
                time: i + 1,
                bpm: base + (f64::from(i) / period).sin() * amplitude + self.rng.gen::<f64>() * jitter,
            })
            .collect()
    }

    fn this_month(&self, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        self.local_time(self.now.year(), self.now.month(), day, hour, minute)
    }

    fn last_month(&self, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        let previous = NaiveDate::from_ymd_opt(self.now.year(), self.now.month(), 1)
            .and_then(|first| first.checked_sub_months(Months::new(1)));

        match previous {
            Some(first) => self.local_time(first.year(), first.month(), day, hour, minute),
            None => self.now.with_timezone(&Utc),
        }
    }

    fn local_time(&self, year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .and_then(|naive| naive.and_local_timezone(*self.now.offset()).single())
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| self.now.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(now: DateTime<FixedOffset>) -> Vec<StudentProfile> {
        RosterSeeder::new(now, StdRng::seed_from_u64(7)).seed_all()
    }

    #[test]
    fn test_seed_roster_shape() {
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        let roster = seeded(offset.with_ymd_and_hms(2024, 10, 17, 12, 0, 0).unwrap());

        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].name, "Ana Clara");
        assert_eq!(roster[0].workouts.len(), 4);
        assert_eq!(roster[0].workouts[0].heart_rate_data.len(), 45);
        assert_eq!(roster[0].schedule.as_ref().map(|s| s.len()), Some(3));
        assert!(roster[1].schedule.is_none());
        assert_eq!(roster[2].workouts.len(), 1);
    }

    #[test]
    fn test_dates_follow_local_calendar() {
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        let roster = seeded(offset.with_ymd_and_hms(2024, 10, 17, 12, 0, 0).unwrap());

        let first = roster[0].workouts[0].date.with_timezone(&offset);
        assert_eq!((first.month(), first.day(), first.hour()), (10, 15, 8));
    }

    #[test]
    fn test_last_month_wraps_to_previous_year() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let roster = seeded(offset.with_ymd_and_hms(2025, 1, 5, 9, 0, 0).unwrap());

        let last = roster[0].workout("w-last-month").unwrap().date;
        assert_eq!((last.year(), last.month(), last.day()), (2024, 12, 28));
    }

    #[test]
    fn test_heart_rate_series_stays_in_band() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let roster = seeded(offset.with_ymd_and_hms(2024, 6, 20, 9, 0, 0).unwrap());

        for sample in &roster[0].workouts[0].heart_rate_data {
            assert!(sample.bpm >= 100.0 && sample.bpm <= 150.0, "bpm out of band: {}", sample.bpm);
        }
    }
}
