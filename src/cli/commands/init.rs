use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Write the configuration file with the effective settings. The record
/// file itself is created lazily by the first `tip on`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cfg.init(cli.test)?;

    if !cli.test {
        messages::success(format!(
            "Config file: {}",
            Config::config_file().display()
        ));
    }
    messages::info(format!("Record file: {}", cfg.record_path().display()));

    Ok(())
}
