//! User-facing status lines: coloured icon prefix, one line per message.

use ansi_term::Colour;
use std::fmt;
use std::io::{self, IsTerminal, Write};

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint(ICON_ERR), msg);
}

/// Section header, e.g. the month being shown.
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}\n",
        Colour::Blue
            .bold()
            .paint(format!("====================== {}", msg))
    );
}

/// Ask for a secret (the access PIN) without echoing it.
///
/// On a terminal the input is hidden; piped input is read as one line.
pub fn prompt_secret(label: &str) -> io::Result<String> {
    if io::stdin().is_terminal() {
        return rpassword::prompt_password(format!("{label}: "));
    }

    print!("{label}: ");
    io::stdout().flush()?;
    let secret = rpassword::read_password_from_bufread(&mut io::stdin().lock())?;
    println!();
    Ok(secret)
}
