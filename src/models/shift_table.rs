use super::month::Month;
use super::shift_row::ShiftRow;
use crate::errors::{AppError, AppResult};

/// Ordered rows of one month sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftTable {
    pub month: Month,
    pub rows: Vec<ShiftRow>,
}

impl ShiftTable {
    /// Empty table: what a blank sheet decodes to.
    pub fn new(month: Month) -> Self {
        Self {
            month,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row by 0-based index.
    pub fn row_mut(&mut self, index: usize) -> AppResult<&mut ShiftRow> {
        self.rows
            .get_mut(index)
            .ok_or(AppError::InvalidRow(index + 1))
    }

    pub fn push_row(&mut self, row: ShiftRow) {
        self.rows.push(row);
    }

    pub fn remove_row(&mut self, index: usize) -> AppResult<ShiftRow> {
        if index >= self.rows.len() {
            return Err(AppError::InvalidRow(index + 1));
        }
        Ok(self.rows.remove(index))
    }
}
