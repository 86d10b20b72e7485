//! Fixed column contract of a month sheet.
//!
//! Header texts must stay bit-exact: they are matched against sheets that
//! already exist in the spreadsheet.

use super::person::Person;
use crate::utils::formatting::fold_diacritics;

/// Editor control used for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Date,
    Text,
    Choice,
    Flag,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    Weekday,
    IsWeekend,
    WorkType,
    Location,
    Warehouse,
    Vehicle,
    Roster(Person),
    Start,
    End,
    OvertimeHours,
    Notes,
    BlockFlag,
    DriverStatus,
}

/// All columns, in sheet order.
pub const COLUMNS: [Column; 18] = [
    Column::Date,
    Column::Weekday,
    Column::IsWeekend,
    Column::WorkType,
    Column::Location,
    Column::Warehouse,
    Column::Vehicle,
    Column::Roster(Person::Vagner),
    Column::Roster(Person::Vasak),
    Column::Roster(Person::Tomecek),
    Column::Roster(Person::Tichy),
    Column::Roster(Person::Stod),
    Column::Start,
    Column::End,
    Column::OvertimeHours,
    Column::Notes,
    Column::BlockFlag,
    Column::DriverStatus,
];

/// Columns the editor must not offer for editing. The model itself accepts
/// writes to them (the driver status is rewritten on every recompute).
pub const READ_ONLY_COLUMNS: [Column; 5] = [
    Column::Weekday,
    Column::IsWeekend,
    Column::OvertimeHours,
    Column::BlockFlag,
    Column::DriverStatus,
];

impl Column {
    /// Header text as stored in row 1 of the sheet.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Date => "Datum",
            Column::Weekday => "Den",
            Column::IsWeekend => "Víkend",
            Column::WorkType => "Práce",
            Column::Location => "Lokace",
            Column::Warehouse => "Sklad",
            Column::Vehicle => "Vozidlo",
            Column::Roster(p) => p.name(),
            Column::Start => "Start",
            Column::End => "Konec",
            Column::OvertimeHours => "Přesčas (h)",
            Column::Notes => "Poznámky",
            Column::BlockFlag => "Blokace Vágner",
            Column::DriverStatus => "Řidič kontrola",
        }
    }

    /// Language-neutral name accepted on the command line.
    pub fn logical_name(&self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::Weekday => "Weekday",
            Column::IsWeekend => "IsWeekend",
            Column::WorkType => "WorkType",
            Column::Location => "Location",
            Column::Warehouse => "Warehouse",
            Column::Vehicle => "Vehicle",
            Column::Roster(p) => p.name(),
            Column::Start => "Start",
            Column::End => "End",
            Column::OvertimeHours => "OvertimeHours",
            Column::Notes => "Notes",
            Column::BlockFlag => "BlockFlag",
            Column::DriverStatus => "DriverStatusCheck",
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Date => ColumnKind::Date,
            Column::WorkType | Column::Vehicle => ColumnKind::Choice,
            Column::Roster(_) => ColumnKind::Flag,
            Column::DriverStatus => ColumnKind::Status,
            _ => ColumnKind::Text,
        }
    }

    pub fn is_read_only(&self) -> bool {
        READ_ONLY_COLUMNS.contains(self)
    }

    /// Resolve a header or logical name (case-insensitive, diacritics optional).
    pub fn from_name(s: &str) -> Option<Self> {
        let wanted = fold_diacritics(s.trim());
        COLUMNS.iter().copied().find(|c| {
            fold_diacritics(c.header()) == wanted || fold_diacritics(c.logical_name()) == wanted
        })
    }
}

/// Header row, in sheet order.
pub fn headers() -> Vec<&'static str> {
    COLUMNS.iter().map(|c| c.header()).collect()
}
