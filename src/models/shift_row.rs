use super::column::Column;
use super::driver_status::DriverStatus;
use super::person::Assignment;
use super::vehicle::Vehicle;
use super::work_type::WorkType;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// One day's schedule entry for one crew.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftRow {
    pub date: Option<NaiveDate>, // ⇔ Datum ("DD.MM.YYYY", blank when absent)
    pub weekday: String,         // ⇔ Den (presentation only)
    pub is_weekend: String,      // ⇔ Víkend (presentation only)
    pub work_type: WorkType,     // ⇔ Práce
    pub location: String,        // ⇔ Lokace
    pub warehouse: String,       // ⇔ Sklad
    pub vehicle: Vehicle,        // ⇔ Vozidlo
    pub assigned: Assignment,    // ⇔ one "✓" column per roster member
    pub start: String,           // ⇔ Start
    pub end: String,             // ⇔ Konec
    pub overtime_hours: String,  // ⇔ Přesčas (h) (presentation only)
    pub notes: String,           // ⇔ Poznámky
    pub block_flag: String,      // ⇔ Blokace Vágner (presentation only)
    pub driver_status: DriverStatus, // ⇔ Řidič kontrola (derived)
}

/// A single value written into a cell by the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum CellEdit {
    Text(String),
    Flag(bool),
    Date(Option<NaiveDate>),
}

impl ShiftRow {
    /// Write `edit` into `column`.
    ///
    /// Every column is writable here, read-only columns included: hiding
    /// them is up to the presentation layer. Text written to the date column
    /// goes through the lenient date parser; text written to a choice column
    /// goes through the option mapping.
    pub fn apply(&mut self, column: Column, edit: CellEdit) -> AppResult<()> {
        match (column, edit) {
            (Column::Date, CellEdit::Date(d)) => self.date = d,
            (Column::Date, CellEdit::Text(s)) => self.date = parse_date(&s),
            (Column::Roster(p), CellEdit::Flag(v)) => self.assigned.set(p, v),
            (Column::WorkType, CellEdit::Text(s)) => self.work_type = WorkType::from_cell(&s),
            (Column::Vehicle, CellEdit::Text(s)) => self.vehicle = Vehicle::from_cell(&s),
            (Column::DriverStatus, CellEdit::Text(s)) => {
                self.driver_status = DriverStatus::from_cell(&s)
            }
            (Column::Weekday, CellEdit::Text(s)) => self.weekday = s,
            (Column::IsWeekend, CellEdit::Text(s)) => self.is_weekend = s,
            (Column::Location, CellEdit::Text(s)) => self.location = s,
            (Column::Warehouse, CellEdit::Text(s)) => self.warehouse = s,
            (Column::Start, CellEdit::Text(s)) => self.start = s,
            (Column::End, CellEdit::Text(s)) => self.end = s,
            (Column::OvertimeHours, CellEdit::Text(s)) => self.overtime_hours = s,
            (Column::Notes, CellEdit::Text(s)) => self.notes = s,
            (Column::BlockFlag, CellEdit::Text(s)) => self.block_flag = s,
            (column, edit) => {
                return Err(AppError::InvalidEdit(format!(
                    "{:?} does not fit column '{}'",
                    edit,
                    column.header()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::person::Person;

    #[test]
    fn apply_routes_values_to_fields() {
        let mut row = ShiftRow::default();

        row.apply(Column::Vehicle, CellEdit::Text("Dodávka".into()))
            .unwrap();
        row.apply(Column::Roster(Person::Tichy), CellEdit::Flag(true))
            .unwrap();
        row.apply(Column::Date, CellEdit::Text("3.2.2026".into()))
            .unwrap();
        row.apply(Column::Notes, CellEdit::Text("klíče u vrátnice".into()))
            .unwrap();

        assert_eq!(row.vehicle, Vehicle::Van);
        assert!(row.assigned.get(Person::Tichy));
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2026, 2, 3));
        assert_eq!(row.notes, "klíče u vrátnice");
    }

    #[test]
    fn read_only_columns_are_still_writable_in_the_model() {
        let mut row = ShiftRow::default();
        row.apply(Column::DriverStatus, CellEdit::Text("OK".into()))
            .unwrap();
        assert_eq!(row.driver_status, DriverStatus::Ok);
    }

    #[test]
    fn mismatched_edit_kind_is_rejected() {
        let mut row = ShiftRow::default();
        let err = row
            .apply(Column::Roster(Person::Vasak), CellEdit::Text("✓".into()))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidEdit(_)));

        let err = row.apply(Column::Notes, CellEdit::Flag(true)).unwrap_err();
        assert!(matches!(err, AppError::InvalidEdit(_)));
    }
}
