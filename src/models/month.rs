use crate::utils::formatting::fold_diacritics;
use serde::Serialize;

/// One month of the schedule. Each month maps 1:1 to a sheet of the
/// spreadsheet, addressed by its localized name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Sheet name inside the spreadsheet.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Month::January => "Leden",
            Month::February => "Únor",
            Month::March => "Březen",
            Month::April => "Duben",
            Month::May => "Květen",
            Month::June => "Červen",
            Month::July => "Červenec",
            Month::August => "Srpen",
            Month::September => "Září",
            Month::October => "Říjen",
            Month::November => "Listopad",
            Month::December => "Prosinec",
        }
    }

    /// 1-based month number.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn from_number(n: u32) -> Option<Self> {
        n.checked_sub(1)
            .and_then(|i| Month::ALL.get(i as usize))
            .copied()
    }

    /// Helper: resolve user input to a month.
    ///
    /// Accepts the sheet name (case-insensitive, diacritics optional,
    /// so `cervenec` matches `Červenec`) or a number 1-12.
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();

        if let Ok(n) = trimmed.parse::<u32>() {
            return Month::from_number(n);
        }

        let wanted = fold_diacritics(trimmed);
        Month::ALL
            .iter()
            .find(|m| fold_diacritics(m.sheet_name()) == wanted)
            .copied()
    }
}
