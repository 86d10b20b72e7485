//! Sheet stores: where month tables live.
//!
//! Every store reads a whole sheet and writes a whole sheet. There is no
//! partial write and no revision check; the last writer wins.

pub mod auth;
pub mod csv_workbook;
pub mod google;
pub mod memory;
#[cfg(test)]
mod test_server;

pub use auth::{Credentials, ServiceAccountKey};
pub use csv_workbook::CsvWorkbookStore;
pub use google::GoogleSheetsStore;
pub use memory::MemoryStore;

use crate::config::{Backend, Config};
use crate::core::codec::Grid;
use crate::errors::AppResult;
use crate::models::Month;
use crate::utils::path::expand_tilde;

pub trait SheetStore {
    /// All cells of the month sheet, row 1 (headers) included. An empty
    /// sheet yields an empty grid.
    fn load(&self, month: Month) -> AppResult<Grid>;

    /// Clear the month sheet, then write `grid` into it.
    fn save(&mut self, month: Month, grid: &[Vec<String>]) -> AppResult<()>;

    /// Short human-readable location, for messages.
    fn describe(&self) -> String;
}

impl<T: SheetStore + ?Sized> SheetStore for Box<T> {
    fn load(&self, month: Month) -> AppResult<Grid> {
        (**self).load(month)
    }

    fn save(&mut self, month: Month, grid: &[Vec<String>]) -> AppResult<()> {
        (**self).save(month, grid)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Build the store selected by the configuration.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn SheetStore>> {
    match cfg.backend {
        Backend::Google => Ok(Box::new(GoogleSheetsStore::new(
            &cfg.api_base_url,
            &cfg.spreadsheet_id,
            &Credentials::from_config(cfg)?,
        )?)),
        Backend::Csv => Ok(Box::new(CsvWorkbookStore::new(expand_tilde(
            &cfg.workbook_dir,
        )))),
    }
}
