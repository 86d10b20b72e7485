//! Row codec: flat text cells of a sheet <-> typed shift rows.
//!
//! Decoding is total. A malformed cell degrades to an empty, false or
//! absent value and never aborts the row.

use crate::core::rule::{DriverPolicy, driver_status, recompute};
use crate::models::column::headers;
use crate::models::{COLUMNS, Column, DriverStatus, Month, ShiftRow, ShiftTable, Vehicle, WorkType};
use crate::utils::date::{format_date, parse_date};
use std::collections::HashMap;

/// Cells of a sheet, row-major. Row 0 is the header.
pub type Grid = Vec<Vec<String>>;

/// One data row keyed by header text.
pub type RawRecord = HashMap<String, String>;

/// The only spelling recognised as a checked roster cell.
pub const CHECK_MARK: &str = "✓";

/// Split a grid into header-keyed records.
///
/// Short rows are padded with blanks (the spreadsheet service drops
/// trailing empty cells); cells beyond the header width are ignored.
pub fn records_from_grid(grid: &[Vec<String>]) -> Vec<RawRecord> {
    let Some((header, rows)) = grid.split_first() else {
        return Vec::new();
    };

    rows.iter()
        .map(|row| {
            header
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), row.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect()
}

/// Insert every declared column missing from `record` as an empty cell.
pub fn fill_missing_columns(record: &mut RawRecord) {
    for h in headers() {
        record.entry(h.to_string()).or_default();
    }
}

/// Checkbox cell → bool: exactly `✓` after trimming, anything else is false.
pub fn parse_flag(s: &str) -> bool {
    s.trim() == CHECK_MARK
}

pub fn format_flag(v: bool) -> &'static str {
    if v { CHECK_MARK } else { "" }
}

/// Decode one record. The status cell is taken as stored; callers
/// recompute it.
pub fn decode_row(record: &RawRecord) -> ShiftRow {
    let mut record = record.clone();
    fill_missing_columns(&mut record);

    let mut row = ShiftRow::default();
    for column in COLUMNS {
        let cell = record
            .get(column.header())
            .map(String::as_str)
            .unwrap_or_default();

        match column {
            Column::Date => row.date = parse_date(cell),
            Column::Weekday => row.weekday = cell.to_string(),
            Column::IsWeekend => row.is_weekend = cell.to_string(),
            Column::WorkType => row.work_type = WorkType::from_cell(cell),
            Column::Location => row.location = cell.to_string(),
            Column::Warehouse => row.warehouse = cell.to_string(),
            Column::Vehicle => row.vehicle = Vehicle::from_cell(cell),
            Column::Roster(p) => row.assigned.set(p, parse_flag(cell)),
            Column::Start => row.start = cell.to_string(),
            Column::End => row.end = cell.to_string(),
            Column::OvertimeHours => row.overtime_hours = cell.to_string(),
            Column::Notes => row.notes = cell.to_string(),
            Column::BlockFlag => row.block_flag = cell.to_string(),
            Column::DriverStatus => row.driver_status = DriverStatus::from_cell(cell),
        }
    }
    row
}

/// Decode records into a month table with freshly computed statuses.
pub fn decode(month: Month, records: &[RawRecord], policy: &DriverPolicy) -> ShiftTable {
    let mut table = ShiftTable {
        month,
        rows: records.iter().map(decode_row).collect(),
    };
    recompute(&mut table, policy);
    table
}

/// Decode a whole sheet. An empty sheet yields an empty table.
pub fn decode_grid(month: Month, grid: &[Vec<String>], policy: &DriverPolicy) -> ShiftTable {
    decode(month, &records_from_grid(grid), policy)
}

/// Encode one row in column order. The status cell is always recomputed.
pub fn encode_row(row: &ShiftRow, policy: &DriverPolicy) -> Vec<String> {
    COLUMNS
        .iter()
        .map(|column| match column {
            Column::Date => format_date(row.date),
            Column::Weekday => row.weekday.clone(),
            Column::IsWeekend => row.is_weekend.clone(),
            Column::WorkType => row.work_type.as_cell().to_string(),
            Column::Location => row.location.clone(),
            Column::Warehouse => row.warehouse.clone(),
            Column::Vehicle => row.vehicle.as_cell().to_string(),
            Column::Roster(p) => format_flag(row.assigned.get(*p)).to_string(),
            Column::Start => row.start.clone(),
            Column::End => row.end.clone(),
            Column::OvertimeHours => row.overtime_hours.clone(),
            Column::Notes => row.notes.clone(),
            Column::BlockFlag => row.block_flag.clone(),
            Column::DriverStatus => driver_status(&row.vehicle, &row.assigned, policy)
                .as_cell()
                .to_string(),
        })
        .collect()
}

/// Encode a table: header row first, then every row, always all columns.
pub fn encode(table: &ShiftTable, policy: &DriverPolicy) -> Grid {
    let mut grid = Vec::with_capacity(table.len() + 1);
    grid.push(headers().into_iter().map(String::from).collect());
    grid.extend(table.rows.iter().map(|r| encode_row(r, policy)));
    grid
}
