//! ANSI color helper utilities for terminal output.

use crate::models::DriverStatus;
use ansi_term::Colour;

/// Colour of a driver status cell:
/// OK → green
/// missing driver → red
/// not required → plain
pub fn colorize_status(status: DriverStatus) -> String {
    match status {
        DriverStatus::Ok => Colour::Green.paint(status.as_cell()).to_string(),
        DriverStatus::MissingDriver => Colour::Red.bold().paint(status.as_cell()).to_string(),
        DriverStatus::NotRequired => String::new(),
    }
}
