use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timer::Timer;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::messages;

/// Attach a note to the current session. Works whether or not the timer
/// is running.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Note { text } = cmd {
        let timer = Timer::new(LogStore::new(cfg.record_path()), &cfg.note_separator);
        timer.note(&text.join(" "))?;
        messages::success("Note added");
    }
    Ok(())
}
