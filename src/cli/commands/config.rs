use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, missing_fields};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const MASK: &str = "********";

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli
            .config
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(Config::config_file);

        // ---- PRINT CONFIG ----
        if *print_config {
            let mut shown = cfg.clone();
            if !shown.access_token.is_empty() {
                shown.access_token = MASK.to_string();
            }
            if shown.access_pin.is_some() {
                shown.access_pin = Some(MASK.to_string());
            }

            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(&shown)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}, defaults are in use.",
                    path.display()
                ));
            } else {
                let missing = missing_fields(&fs::read_to_string(&path)?)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!(
                        "Missing fields (defaults will be used): {}",
                        missing.join(", ")
                    ));
                }
                cfg.driver_policy()?;
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    let status = Command::new(&default_editor).arg(&path).status()?;
                    if status.success() {
                        success(format!(
                            "Configuration file edited successfully using fallback '{}'",
                            default_editor
                        ));
                    } else {
                        warning(format!(
                            "Failed to edit configuration file using fallback '{}'",
                            default_editor
                        ));
                    }
                }
            }
        }
    }

    Ok(())
}
