use crate::config::Config;
use crate::core::timer::Timer;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::report;
use crate::utils::time;

/// Print the status report. Never mutates the log.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let now = time::now();
    let timer = Timer::new(LogStore::new(cfg.record_path()), &cfg.note_separator);
    let session = timer.status(now)?;

    println!("{}", report::render(&session, cfg, now));
    Ok(())
}
