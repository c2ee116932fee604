use crate::errors::{AppError, AppResult};
use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveDateTime};

/// One line of the record log.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Start(NaiveDateTime),
    Stop(NaiveDateTime),
    Note(String),
    Archive { date: NaiveDate, summary: String },
}

impl Record {
    /// Encode as one log line, without the trailing newline.
    pub fn encode(&self) -> String {
        match self {
            Record::Start(t) => format!("START {}", time::format_timestamp(t)),
            Record::Stop(t) => format!("STOP {}", time::format_timestamp(t)),
            Record::Note(text) => format!("NOTE {}", text),
            Record::Archive { date, summary } => {
                if summary.is_empty() {
                    format!("ARCHIVE {}", date::format_date(date))
                } else {
                    format!("ARCHIVE {} {}", date::format_date(date), summary)
                }
            }
        }
    }

    /// Decode one log line. The log is hand-editable, so anything
    /// unrecognized fails instead of being silently dropped.
    pub fn parse(line: &str) -> AppResult<Record> {
        let (kind, payload) = match line.split_once(' ') {
            Some((kind, payload)) => (kind, payload),
            None => (line, ""),
        };

        match kind {
            "START" => Ok(Record::Start(parse_timestamp(payload)?)),
            "STOP" => Ok(Record::Stop(parse_timestamp(payload)?)),
            "NOTE" => Ok(Record::Note(payload.to_string())),
            "ARCHIVE" => {
                let (date_str, summary) = match payload.split_once(' ') {
                    Some((date_str, summary)) => (date_str, summary),
                    None => (payload, ""),
                };
                let parsed = date::parse_date(date_str)
                    .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;
                Ok(Record::Archive {
                    date: parsed,
                    summary: summary.to_string(),
                })
            }
            _ => Err(AppError::InvalidRecord(line.to_string())),
        }
    }

    pub fn is_archive(&self) -> bool {
        matches!(self, Record::Archive { .. })
    }
}

fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    time::parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}
