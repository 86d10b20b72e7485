pub mod config;
pub mod edit;
pub mod init;
pub mod months;
pub mod show;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::access::check_pin;
use crate::errors::{AppError, AppResult};
use crate::models::Month;
use crate::ui::messages::prompt_secret;

/// Resolve the month argument shared by show and edit.
pub(crate) fn parse_month(input: &str) -> AppResult<Month> {
    Month::from_input(input).ok_or_else(|| {
        AppError::InvalidMonth(format!(
            "'{}'. Use a sheet name ({}) or a number 1-12",
            input,
            Month::ALL
                .iter()
                .map(|m| m.sheet_name())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })
}

/// Gate for commands that read or write the sheet.
pub(crate) fn require_access(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let supplied = match (&cli.pin, cfg.pin()) {
        (Some(pin), _) => Some(pin.clone()),
        (None, Some(_)) => Some(prompt_secret("PIN")?),
        (None, None) => None,
    };
    check_pin(cfg.pin(), supplied.as_deref())
}
