use crate::cli::parser::Cli;
use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::store::CsvWorkbookStore;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - for the CSV backend, the workbook directory with one header-only
///    sheet per month
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    println!("⚙️  Initializing shiftplan…");

    let cfg = Config::init_all(&path, cli.workbook.as_deref(), cli.test)?;

    if !cli.test {
        success(format!("Config file: {}", path.display()));
    }

    match cfg.backend {
        Backend::Csv => {
            let store = CsvWorkbookStore::new(expand_tilde(&cfg.workbook_dir));
            let created = store.create_sheets()?;
            success(format!(
                "Workbook:    {} ({} new sheet(s))",
                store.dir().display(),
                created
            ));
        }
        Backend::Google => {
            let id = if cfg.spreadsheet_id.is_empty() {
                "(not set)"
            } else {
                cfg.spreadsheet_id.as_str()
            };
            info(format!("Backend: Google Sheets, spreadsheet {}", id));
            info("Set spreadsheet_id and service_account_file in the config file, or SHIFTPLAN_SHEET_ID and SHIFTPLAN_SERVICE_ACCOUNT_FILE / SHIFTPLAN_SERVICE_ACCOUNT_JSON.");
        }
    }

    println!("🎉 shiftplan initialization completed!");
    Ok(())
}
