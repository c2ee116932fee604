use super::status::TimerStatus;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Aggregate state of the current (unarchived) session. Never stored;
/// recomputed by replaying the record log on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub status: TimerStatus,
    pub elapsed_minutes: i64,
    pub notes: Vec<String>,
    /// Date of the first START since the last ARCHIVE; drives rollover
    pub first_start_date: Option<NaiveDate>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            status: TimerStatus::Off,
            elapsed_minutes: 0,
            notes: Vec::new(),
            first_start_date: None,
        }
    }
}

impl Session {
    /// Minutes left until the daily target; negative once the target is
    /// exceeded.
    pub fn remaining_minutes(&self, day_target_minutes: i64) -> i64 {
        day_target_minutes - self.elapsed_minutes
    }

    /// Wall-clock time at which the daily target will be reached.
    pub fn finish_at(&self, now: NaiveDateTime, day_target_minutes: i64) -> NaiveDateTime {
        now + Duration::minutes(self.remaining_minutes(day_target_minutes))
    }
}
