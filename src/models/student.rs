use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::workout::{StudentStats, WorkoutSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// pt-BR label used in student-facing text
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Segunda",
            Weekday::Tuesday => "Terça",
            Weekday::Wednesday => "Quarta",
            Weekday::Thursday => "Quinta",
            Weekday::Friday => "Sexta",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Training times per weekday. A missing key means no session that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule(BTreeMap<Weekday, String>);

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, day: Weekday, time: impl Into<String>) -> Self {
        self.0.insert(day, time.into());
        self
    }

    pub fn get(&self, day: Weekday) -> Option<&str> {
        self.0.get(&day).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &str)> {
        self.0.iter().map(|(day, time)| (*day, time.as_str()))
    }

    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "Nenhum treino agendado. A treinadora ainda não definiu sua agenda.".to_string();
        }

        let days: Vec<String> = self
            .iter()
            .map(|(day, time)| format!("{} às {}", day.label(), time))
            .collect();

        format!("Treinos agendados para: {}.", days.join(", "))
    }
}

impl FromIterator<(Weekday, String)> for WeeklySchedule {
    fn from_iter<I: IntoIterator<Item = (Weekday, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
    pub age: u32,
    pub workouts: Vec<WorkoutSession>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<WeeklySchedule>,
}

impl StudentProfile {
    pub fn stats(&self) -> StudentStats {
        StudentStats::from_workouts(&self.workouts)
    }

    pub fn workout(&self, workout_id: &str) -> Option<&WorkoutSession> {
        self.workouts.iter().find(|w| w.id == workout_id)
    }

    /// The schedule to show, treating "never set" as empty.
    pub fn schedule_or_default(&self) -> WeeklySchedule {
        self.schedule.clone().unwrap_or_default()
    }

    /// New profile value carrying `schedule` in place of the current one.
    pub fn with_schedule(&self, schedule: WeeklySchedule) -> Self {
        Self {
            schedule: Some(schedule),
            ..self.clone()
        }
    }
}
