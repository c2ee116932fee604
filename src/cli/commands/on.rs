use crate::config::Config;
use crate::core::timer::Timer;
use crate::errors::{AppError, AppResult};
use crate::store::LogStore;
use crate::ui::messages;
use crate::utils::time;

/// Start the timer, archiving the previous day first when needed.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let timer = Timer::new(LogStore::new(cfg.record_path()), &cfg.note_separator);

    match timer.start(time::now()) {
        Ok(outcome) => {
            if outcome.archived {
                messages::info("Archived previous day");
            }
            messages::success("Timer started");
            Ok(())
        }
        Err(AppError::AlreadyRunning) => {
            messages::warning("Timer is running. Use \"tip off\" to stop it first.");
            messages::info(format!(
                "If you forgot to stop it earlier, edit \"{}\" after",
                cfg.record_file
            ));
            Ok(())
        }
        Err(e) => Err(e),
    }
}
