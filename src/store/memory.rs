//! In-memory store, for tests and for embedding the editor without a backend.

use super::SheetStore;
use crate::core::codec::Grid;
use crate::errors::{AppError, AppResult};
use crate::models::Month;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct MemoryStore {
    sheets: HashMap<Month, Grid>,
    saves: usize,
    fail_saves: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Twelve empty month sheets.
    pub fn new() -> Self {
        Self {
            sheets: Month::ALL.iter().map(|m| (*m, Grid::new())).collect(),
            saves: 0,
            fail_saves: false,
        }
    }

    pub fn with_sheet(mut self, month: Month, grid: Grid) -> Self {
        self.sheets.insert(month, grid);
        self
    }

    pub fn sheet(&self, month: Month) -> Option<&Grid> {
        self.sheets.get(&month)
    }

    pub fn remove_sheet(&mut self, month: Month) {
        self.sheets.remove(&month);
    }

    /// Successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Make every following save fail like an unreachable service.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }
}

impl SheetStore for MemoryStore {
    fn load(&self, month: Month) -> AppResult<Grid> {
        self.sheets
            .get(&month)
            .cloned()
            .ok_or_else(|| AppError::SheetNotFound(month.sheet_name().to_string()))
    }

    fn save(&mut self, month: Month, grid: &[Vec<String>]) -> AppResult<()> {
        if self.fail_saves {
            return Err(AppError::SheetsApi {
                status: 503,
                message: "service unavailable".into(),
            });
        }

        let sheet = self
            .sheets
            .get_mut(&month)
            .ok_or_else(|| AppError::SheetNotFound(month.sheet_name().to_string()))?;
        sheet.clear();
        sheet.extend_from_slice(grid);
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory workbook".to_string()
    }
}
