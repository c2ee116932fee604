//! Multi-line status report printed by `tip info`.

use crate::config::Config;
use crate::models::session::Session;
use crate::utils::colors::{RESET, color_for_remaining};
use crate::utils::formatting::{bold, mins2readable};
use ansi_term::Colour;
use chrono::NaiveDateTime;

/// Color for the status word
fn color_for_status(session: &Session) -> Colour {
    if session.status.is_on() {
        Colour::Green
    } else {
        Colour::Red
    }
}

/// Render the detailed report: status, elapsed, remaining (or surplus once
/// past the daily target) and the collected notes.
pub fn render(session: &Session, cfg: &Config, now: NaiveDateTime) -> String {
    let target = cfg.day_target_minutes();
    let remaining = session.remaining_minutes(target);

    let mut detail = Vec::new();

    detail.push(format!(
        "Timer is: {}",
        color_for_status(session).paint(session.status.as_str())
    ));

    detail.push(format!(
        "Elapsed:    {}",
        bold(&mins2readable(session.elapsed_minutes, false, false))
    ));

    if remaining > 0 {
        detail.push(format!(
            "Remaining:  {}",
            mins2readable(remaining, false, false)
        ));

        if session.status.is_on() {
            let finish = session.finish_at(now, target);
            detail.push(format!("Finish at:  {}", finish.format("%H:%M")));
        }
    } else if remaining < 0 {
        detail.push(format!(
            "Surplus:    {}{}{}",
            color_for_remaining(-remaining),
            mins2readable(-remaining, true, false),
            RESET
        ));
    }

    if !session.notes.is_empty() {
        detail.push(format!(
            "Notes:      {}",
            session.notes.join(&cfg.note_separator)
        ));
    }

    detail.join("\n")
}
