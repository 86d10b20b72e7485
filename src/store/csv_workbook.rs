//! Workbook fixture: a directory holding one `<sheet>.csv` file per month.
//!
//! Stands in for the spreadsheet in CLI tests and when the editor is
//! embedded against local data. It keeps the same whole-sheet,
//! last-writer-wins semantics and is not a cache or sync target for the
//! real spreadsheet.

use super::SheetStore;
use crate::core::codec::Grid;
use crate::errors::{AppError, AppResult};
use crate::models::Month;
use crate::models::column::headers;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CsvWorkbookStore {
    dir: PathBuf,
}

impl CsvWorkbookStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn sheet_path(&self, month: Month) -> PathBuf {
        self.dir.join(format!("{}.csv", month.sheet_name()))
    }

    /// Create the workbook directory and a header-only sheet for every
    /// month that does not exist yet. Returns how many sheets were created.
    pub fn create_sheets(&self) -> AppResult<usize> {
        fs::create_dir_all(&self.dir)?;

        let header: Vec<String> = headers().into_iter().map(String::from).collect();
        let mut created = 0;

        for month in Month::ALL {
            if self.sheet_path(month).exists() {
                continue;
            }
            write_grid(&self.sheet_path(month), std::slice::from_ref(&header))?;
            created += 1;
        }

        Ok(created)
    }
}

impl SheetStore for CsvWorkbookStore {
    fn load(&self, month: Month) -> AppResult<Grid> {
        let path = self.sheet_path(month);
        if !path.exists() {
            return Err(AppError::SheetNotFound(format!(
                "{} ({})",
                month.sheet_name(),
                path.display()
            )));
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;

        let mut grid = Vec::new();
        for record in rdr.records() {
            grid.push(record?.iter().map(String::from).collect());
        }
        Ok(grid)
    }

    fn save(&mut self, month: Month, grid: &[Vec<String>]) -> AppResult<()> {
        let path = self.sheet_path(month);
        if !path.exists() {
            return Err(AppError::SheetNotFound(format!(
                "{} ({})",
                month.sheet_name(),
                path.display()
            )));
        }
        write_grid(&path, grid)
    }

    fn describe(&self) -> String {
        format!("workbook {}", self.dir.display())
    }
}

/// Truncate `path` and write every row.
fn write_grid(path: &Path, grid: &[Vec<String>]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().flexible(true).from_path(path)?;
    for row in grid {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_workbook(name: &str) -> CsvWorkbookStore {
        let dir = env::temp_dir().join(format!("{}_shiftplan_workbook", name));
        fs::remove_dir_all(&dir).ok();
        CsvWorkbookStore::new(dir)
    }

    #[test]
    fn create_sheets_writes_header_only_files() {
        let store = temp_workbook("csv_create");
        assert_eq!(store.create_sheets().unwrap(), 12);
        assert_eq!(store.create_sheets().unwrap(), 0);

        let grid = store.load(Month::April).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0], headers());
    }

    #[test]
    fn save_replaces_the_whole_sheet() {
        let mut store = temp_workbook("csv_replace");
        store.create_sheets().unwrap();

        let first = vec![
            vec!["Datum".to_string(), "Lokace".to_string()],
            vec!["01.01.2026".to_string(), "Praha".to_string()],
            vec!["02.01.2026".to_string(), "Brno".to_string()],
        ];
        store.save(Month::January, &first).unwrap();

        let second = vec![vec!["Datum".to_string()], vec!["03.01.2026".to_string()]];
        store.save(Month::January, &second).unwrap();

        assert_eq!(store.load(Month::January).unwrap(), second);
    }

    #[test]
    fn missing_sheet_is_reported() {
        let store = temp_workbook("csv_missing");
        let err = store.load(Month::May).unwrap_err();
        assert!(matches!(err, AppError::SheetNotFound(_)));
    }
}
