use crate::cli::parser::{Cli, Commands};
use crate::cli::commands::{parse_month, require_access};
use crate::config::Config;
use crate::core::EditorSession;
use crate::errors::AppResult;
use crate::models::{COLUMNS, Column, ShiftRow, ShiftTable};
use crate::store::open_store;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::colorize_status;
use crate::utils::date::{format_date, is_weekend, weekday_name};
use crate::utils::formatting::flag_mark;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { month, missing } = &cli.command {
        let month = parse_month(month)?;
        require_access(cli, cfg)?;

        let store = open_store(cfg)?;
        let session = EditorSession::open(store, cfg.driver_policy()?, month)?;

        info(format!("Loaded from {}", session.store().describe()));
        print_table(session.table(), *missing);
    }
    Ok(())
}

/// Print the month grid. The status column goes last so its colour codes
/// do not disturb the alignment.
pub(crate) fn print_table(table: &ShiftTable, missing_only: bool) {
    header(table.month.sheet_name());

    if table.is_empty() {
        warning("The sheet has no rows.");
        return;
    }

    let shown_columns: Vec<Column> = COLUMNS
        .iter()
        .copied()
        .filter(|c| *c != Column::DriverStatus)
        .collect();

    let mut headers = vec!["#"];
    headers.extend(shown_columns.iter().map(|c| c.header()));
    let mut grid = Table::with_headers(&headers);

    let mut picked = Vec::new();
    for (i, row) in table.rows.iter().enumerate() {
        if missing_only && !row.driver_status.is_missing() {
            continue;
        }
        let mut cells = vec![(i + 1).to_string()];
        cells.extend(shown_columns.iter().map(|c| display_cell(row, *c)));
        grid.add_row(cells);
        picked.push(row.driver_status);
    }

    let rendered = grid.render();
    let mut lines = rendered.lines();
    if let Some(head) = lines.next() {
        println!("{}{}", head, Column::DriverStatus.header());
    }
    for (line, status) in lines.zip(picked) {
        println!("{}{}", line, colorize_status(status));
    }
    println!();

    let missing = table
        .rows
        .iter()
        .filter(|r| r.driver_status.is_missing())
        .count();

    if missing == 0 {
        success(format!("{} row(s), every vehicle has a driver.", table.len()));
    } else {
        warning(format!(
            "{} row(s), {} without a driver.",
            table.len(),
            missing
        ));
    }
}

/// Terminal text of one cell. Weekday and weekend fall back to values
/// derived from the date when the sheet leaves them blank.
fn display_cell(row: &ShiftRow, column: Column) -> String {
    match column {
        Column::Date => format_date(row.date),
        Column::Weekday if row.weekday.trim().is_empty() => row
            .date
            .map(|d| weekday_name(d).to_string())
            .unwrap_or_default(),
        Column::IsWeekend if row.is_weekend.trim().is_empty() => row
            .date
            .filter(|d| is_weekend(*d))
            .map(|_| "ano".to_string())
            .unwrap_or_default(),
        Column::Weekday => row.weekday.clone(),
        Column::IsWeekend => row.is_weekend.clone(),
        Column::WorkType => row.work_type.as_cell().to_string(),
        Column::Location => row.location.clone(),
        Column::Warehouse => row.warehouse.clone(),
        Column::Vehicle => row.vehicle.as_cell().to_string(),
        Column::Roster(p) => flag_mark(row.assigned.get(p)).to_string(),
        Column::Start => row.start.clone(),
        Column::End => row.end.clone(),
        Column::OvertimeHours => row.overtime_hours.clone(),
        Column::Notes => row.notes.clone(),
        Column::BlockFlag => row.block_flag.clone(),
        Column::DriverStatus => row.driver_status.as_cell().to_string(),
    }
}
