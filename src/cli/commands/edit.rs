use crate::cli::commands::show::print_table;
use crate::cli::commands::{parse_month, require_access};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::EditorSession;
use crate::errors::{AppError, AppResult};
use crate::models::{CellEdit, Column, ColumnKind, Vehicle, WorkType};
use crate::store::open_store;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::parse_date;
use crate::utils::formatting::fold_diacritics;

/// One `--set ROW:COLUMN=VALUE` argument, resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CellAssignment {
    /// 0-based row index.
    pub row: usize,
    pub column: Column,
    pub edit: CellEdit,
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        month,
        set,
        add_rows,
        remove_row,
        dry_run,
    } = &cli.command
    {
        //
        // 1. Parse everything before touching the sheet
        //
        let month = parse_month(month)?;
        let assignments = set
            .iter()
            .map(|s| parse_assignment(s))
            .collect::<AppResult<Vec<_>>>()?;

        require_access(cli, cfg)?;

        //
        // 2. Load
        //
        let store = open_store(cfg)?;
        let mut session = EditorSession::open(store, cfg.driver_policy()?, month)?;

        //
        // 3. Apply: new rows, cell edits, then removals (highest first)
        //
        for _ in 0..*add_rows {
            session.add_row();
        }

        for a in assignments {
            session.apply_edit(a.row, a.column, a.edit)?;
        }

        let mut removals = remove_row.clone();
        removals.sort_unstable();
        removals.dedup();
        for row in removals.into_iter().rev() {
            if row == 0 {
                return Err(AppError::InvalidRow(row));
            }
            session.remove_row(row - 1)?;
        }

        //
        // 4. Save (or just show)
        //
        if *dry_run {
            print_table(session.table(), false);
            warning("Dry run: nothing was saved.");
            return Ok(());
        }

        if !session.is_dirty() {
            info("No changes requested, rewriting the sheet with fresh driver checks.");
        }

        session.save()?;
        success(format!(
            "Saved {} row(s) to '{}' ({})",
            session.table().len(),
            month.sheet_name(),
            session.store().describe()
        ));
    }
    Ok(())
}

/// Parse `ROW:COLUMN=VALUE`. Read-only columns are refused here: the
/// editor surface never offers them, even though the model would accept
/// the write.
pub fn parse_assignment(s: &str) -> AppResult<CellAssignment> {
    let bad = || AppError::InvalidEdit(format!("'{}' is not ROW:COLUMN=VALUE", s));

    let (row, rest) = s.split_once(':').ok_or_else(bad)?;
    let (column, value) = rest.split_once('=').ok_or_else(bad)?;

    let row: usize = row.trim().parse().map_err(|_| bad())?;
    if row == 0 {
        return Err(AppError::InvalidRow(0));
    }

    let column =
        Column::from_name(column).ok_or_else(|| AppError::InvalidColumn(column.to_string()))?;
    if column.is_read_only() {
        return Err(AppError::ReadOnlyColumn(column.header().to_string()));
    }

    Ok(CellAssignment {
        row: row - 1,
        column,
        edit: parse_value(column, value)?,
    })
}

/// Coerce user text to the column's editor control.
fn parse_value(column: Column, value: &str) -> AppResult<CellEdit> {
    match column.kind() {
        ColumnKind::Flag => parse_checkbox(value)
            .map(CellEdit::Flag)
            .ok_or_else(|| {
                AppError::InvalidEdit(format!(
                    "'{}' is not a checkbox value for '{}' (use ✓/x, yes/no, 1/0)",
                    value,
                    column.header()
                ))
            }),
        ColumnKind::Date if value.trim().is_empty() => Ok(CellEdit::Date(None)),
        ColumnKind::Date => parse_date(value)
            .map(|d| CellEdit::Date(Some(d)))
            .ok_or_else(|| {
                AppError::InvalidEdit(format!("'{}' is not a date (DD.MM.YYYY)", value))
            }),
        ColumnKind::Choice => {
            let options: &[&str] = if column == Column::Vehicle {
                &Vehicle::OPTIONS
            } else {
                &WorkType::OPTIONS
            };
            let wanted = fold_diacritics(value.trim());
            options
                .iter()
                .find(|o| fold_diacritics(o) == wanted)
                .map(|o| CellEdit::Text(o.to_string()))
                .ok_or_else(|| {
                    AppError::InvalidEdit(format!(
                        "'{}' is not an option for '{}' (options: {})",
                        value,
                        column.header(),
                        options
                            .iter()
                            .filter(|o| !o.is_empty())
                            .copied()
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                })
        }
        ColumnKind::Text | ColumnKind::Status => Ok(CellEdit::Text(value.to_string())),
    }
}

fn parse_checkbox(value: &str) -> Option<bool> {
    match fold_diacritics(value.trim()).as_str() {
        "✓" | "x" | "y" | "yes" | "ano" | "true" | "1" => Some(true),
        "" | "-" | "n" | "no" | "ne" | "false" | "0" => Some(false),
        _ => None,
    }
}
