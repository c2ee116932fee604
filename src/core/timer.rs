//! High-level timer operations over the record store.

use crate::core::{reducer, rollover};
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::models::session::Session;
use crate::store::LogStore;
use chrono::NaiveDateTime;

/// Outcome of a successful `start`, so callers can report rollover.
pub struct StartOutcome {
    pub archived: bool,
}

pub struct Timer {
    store: LogStore,
    note_separator: String,
}

impl Timer {
    pub fn new(store: LogStore, note_separator: &str) -> Self {
        Self {
            store,
            note_separator: note_separator.to_string(),
        }
    }

    /// Start the timer. When the current session began on another
    /// calendar day, the finished day is archived and the log compacted
    /// before the new START is appended.
    pub fn start(&self, now: NaiveDateTime) -> AppResult<StartOutcome> {
        let session = self.status(now)?;
        if session.status.is_on() {
            return Err(AppError::AlreadyRunning);
        }

        let mut archived = false;
        if rollover::needs_rollover(&session, now.date())
            && let Some(first) = session.first_start_date
        {
            rollover::archive(&self.store, first, &session, &self.note_separator)?;
            archived = true;
        }

        self.store.append(&Record::Start(now))?;
        Ok(StartOutcome { archived })
    }

    /// Stop the timer.
    pub fn stop(&self, now: NaiveDateTime) -> AppResult<()> {
        let session = self.status(now)?;
        if !session.status.is_on() {
            return Err(AppError::NotRunning);
        }

        self.store.append(&Record::Stop(now))
    }

    /// Attach a note to the current session. No precondition on the
    /// timer status.
    pub fn note(&self, text: &str) -> AppResult<()> {
        self.store.append(&Record::Note(text.to_string()))
    }

    /// Recompute the session by replaying the log. Never mutates.
    pub fn status(&self, now: NaiveDateTime) -> AppResult<Session> {
        let records = self.store.read_all()?;
        Ok(reducer::replay(&records, now))
    }
}
