use chrono::{DateTime, FixedOffset, Local, Utc};

/// Source of "now" in the caller's local calendar.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    /// `instant` on the local wall clock, using the offset in force at that
    /// instant rather than the one in force now.
    fn local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset>;
}

/// The host's time zone, daylight-saving rules included.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&Local).fixed_offset()
    }
}

/// Always reports the same instant and reads every date in its offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }

    fn local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(self.0.offset())
    }
}
