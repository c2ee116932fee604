use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::process::Command;

/// View or edit the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:");
            let yaml =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        if *edit_config {
            let path = Config::config_file();

            // Editing an absent file would lose the defaults
            if !path.exists() {
                cfg.init(false)?;
            }

            let chosen = match editor {
                Some(e) => e.clone(),
                None => default_editor(),
            };

            let status = Command::new(&chosen).arg(&path).status()?;
            if !status.success() {
                return Err(AppError::Config(format!(
                    "Editor '{}' exited with an error",
                    chosen
                )));
            }

            messages::success(format!("Configuration updated: {}", path.display()));
        }
    }
    Ok(())
}

/// Default editor based on the environment and platform
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}
