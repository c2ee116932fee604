use crate::config::Config;
use crate::core::timer::Timer;
use crate::errors::{AppError, AppResult};
use crate::store::LogStore;
use crate::ui::messages;
use crate::utils::time;

/// Stop the running timer.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let timer = Timer::new(LogStore::new(cfg.record_path()), &cfg.note_separator);

    match timer.stop(time::now()) {
        Ok(()) => {
            messages::success("Timer stopped");
            Ok(())
        }
        Err(AppError::NotRunning) => {
            messages::warning("Timer is not running. Use \"tip on\" to start it.");
            messages::info(format!(
                "If you forgot to start it earlier, edit \"{}\" after",
                cfg.record_file
            ));
            Ok(())
        }
        Err(e) => Err(e),
    }
}
