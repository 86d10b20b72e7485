//! Formatting utilities used for CLI output.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width. Uses the terminal width of the text, so names
/// like `Tomeček` line up with plain ASCII.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Lowercase and strip Czech diacritics, for lenient name matching.
pub fn fold_diacritics(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'č' => 'c',
            'ď' => 'd',
            'é' | 'ě' => 'e',
            'í' => 'i',
            'ň' => 'n',
            'ó' => 'o',
            'ř' => 'r',
            'š' => 's',
            'ť' => 't',
            'ú' | 'ů' => 'u',
            'ý' => 'y',
            'ž' => 'z',
            other => other,
        })
        .collect()
}

/// Human-readable flag cell for terminal output.
pub fn flag_mark(v: bool) -> &'static str {
    if v { "✓" } else { "·" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_czech_letters() {
        assert_eq!(fold_diacritics("Řidič kontrola"), "ridic kontrola");
        assert_eq!(fold_diacritics("ŠTOD"), "stod");
        assert_eq!(fold_diacritics("Přesčas (h)"), "prescas (h)");
    }

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_right("Tichý", 7), "Tichý  ");
        assert_eq!(pad_right("toolong", 3), "toolong");
    }
}
