//! Session reconstruction: a single left-to-right replay of the record log.

use crate::models::record::Record;
use crate::models::session::Session;
use crate::models::status::TimerStatus;
use crate::utils::time::minutes_between;
use chrono::NaiveDateTime;

/// Fold the records into the current session state.
///
/// Only records after the last ARCHIVE contribute; an archive line resets
/// the accumulation even when compaction has not happened yet.
pub fn replay(records: &[Record], now: NaiveDateTime) -> Session {
    let mut session = Session::default();
    let mut open_start: Option<NaiveDateTime> = None;

    for record in records {
        match record {
            // A second START while one is open overwrites it. The timer
            // refuses to write such a log itself; hand-edited files keep
            // their historical replay semantics.
            Record::Start(t) => {
                open_start = Some(*t);
                if session.first_start_date.is_none() {
                    session.first_start_date = Some(t.date());
                }
            }
            Record::Stop(t) => {
                if let Some(start) = open_start.take() {
                    session.elapsed_minutes += minutes_between(start, *t);
                }
            }
            Record::Note(text) => session.notes.push(text.clone()),
            Record::Archive { .. } => {
                open_start = None;
                session.elapsed_minutes = 0;
                session.notes.clear();
                session.first_start_date = None;
            }
        }
    }

    // Catch a START without a matching STOP
    if let Some(start) = open_start {
        session.status = TimerStatus::On;
        session.elapsed_minutes += minutes_between(start, now);
    }

    session
}
