//! Path utilities: expand `~` in configured locations.

use std::path::PathBuf;

/// Expand a leading `~/` (as written in the config file's `workbook_dir`).
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
