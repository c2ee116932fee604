//! Day-rollover archival: collapse a finished day's records into one
//! ARCHIVE summary line and compact the log.

use crate::errors::AppResult;
use crate::models::record::Record;
use crate::models::session::Session;
use crate::store::LogStore;
use crate::utils::formatting::mins2readable;
use chrono::NaiveDate;

/// True when the unarchived session began on a different calendar day.
/// The full date is compared, so a session left over from Dec 31 is
/// caught on Jan 1.
pub fn needs_rollover(session: &Session, today: NaiveDate) -> bool {
    match session.first_start_date {
        Some(first) => first != today,
        None => false,
    }
}

/// Append an ARCHIVE summary for the session, then rewrite the file so
/// only archive lines (old and new) remain.
pub fn archive(
    store: &LogStore,
    date: NaiveDate,
    session: &Session,
    note_separator: &str,
) -> AppResult<Record> {
    let record = Record::Archive {
        date,
        summary: summary_line(session, note_separator),
    };
    store.append(&record)?;

    let archives: Vec<Record> = store
        .read_all()?
        .into_iter()
        .filter(|r| r.is_archive())
        .collect();
    store.rewrite(&archives)?;

    Ok(record)
}

/// One-line day summary: elapsed time plus the joined notes.
pub fn summary_line(session: &Session, note_separator: &str) -> String {
    let elapsed = mins2readable(session.elapsed_minutes, false, true);
    if session.notes.is_empty() {
        elapsed
    } else {
        format!("{} {}", elapsed, session.notes.join(note_separator))
    }
}
