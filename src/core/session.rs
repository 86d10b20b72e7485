//! Editor session: one selected month, its in-memory table and the
//! clean/pending state, bound to a sheet store.
//!
//! Statuses are recomputed after every edit and once more right before a
//! save, so the sheet never receives a status that is stale for its row.

use crate::core::codec::{decode_grid, encode};
use crate::core::rule::{DriverPolicy, recompute};
use crate::errors::AppResult;
use crate::models::{CellEdit, Column, Month, ShiftRow, ShiftTable};
use crate::store::SheetStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Table matches what was last loaded or saved.
    Clean,
    /// In-memory edits not yet written back.
    Pending,
}

pub struct EditorSession<S: SheetStore> {
    store: S,
    policy: DriverPolicy,
    month: Month,
    table: ShiftTable,
    state: SessionState,
}

impl<S: SheetStore> EditorSession<S> {
    /// Start a session on `month`, loading its sheet.
    pub fn open(store: S, policy: DriverPolicy, month: Month) -> AppResult<Self> {
        let mut session = Self {
            store,
            policy,
            month,
            table: ShiftTable::new(month),
            state: SessionState::Clean,
        };
        session.reload()?;
        Ok(session)
    }

    /// Switch to another month. Unsaved edits are discarded.
    pub fn select_month(&mut self, month: Month) -> AppResult<()> {
        self.month = month;
        self.reload()
    }

    fn reload(&mut self) -> AppResult<()> {
        let grid = self.store.load(self.month)?;
        self.table = decode_grid(self.month, &grid, &self.policy);
        self.state = SessionState::Clean;
        Ok(())
    }

    /// Write one cell (0-based row) and refresh every status.
    pub fn apply_edit(&mut self, row: usize, column: Column, edit: CellEdit) -> AppResult<()> {
        self.table.row_mut(row)?.apply(column, edit)?;
        self.touch();
        Ok(())
    }

    /// Append an empty row, returning its 0-based index.
    pub fn add_row(&mut self) -> usize {
        self.table.push_row(ShiftRow::default());
        self.touch();
        self.table.len() - 1
    }

    pub fn remove_row(&mut self, row: usize) -> AppResult<ShiftRow> {
        let removed = self.table.remove_row(row)?;
        self.touch();
        Ok(removed)
    }

    fn touch(&mut self) {
        recompute(&mut self.table, &self.policy);
        self.state = SessionState::Pending;
    }

    /// Replace the whole month sheet with the current table.
    ///
    /// On failure the session stays pending; the sheet is left in whatever
    /// state the store reached.
    pub fn save(&mut self) -> AppResult<()> {
        recompute(&mut self.table, &self.policy);
        let grid = encode(&self.table, &self.policy);
        self.store.save(self.month, &grid)?;
        self.state = SessionState::Clean;
        Ok(())
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn table(&self) -> &ShiftTable {
        &self.table
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == SessionState::Pending
    }

    pub fn policy(&self) -> &DriverPolicy {
        &self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// End the session, handing the store back.
    pub fn into_store(self) -> S {
        self.store
    }
}
