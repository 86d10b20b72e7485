#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER: &str = "Datum,Den,Víkend,Práce,Lokace,Sklad,Vozidlo,Vágner,Vašák,Tomeček,Tichý,Štod,Start,Konec,Přesčas (h),Poznámky,Blokace Vágner,Řidič kontrola";

/// Binary under test, isolated from the user's config and environment.
pub fn sp() -> Command {
    let mut cmd = cargo_bin_cmd!("shiftplan");
    cmd.env_remove("SHIFTPLAN_PIN")
        .env_remove("SHIFTPLAN_SHEET_ID")
        .env_remove("SHIFTPLAN_ACCESS_TOKEN")
        .env_remove("SHIFTPLAN_SERVICE_ACCOUNT_FILE")
        .env_remove("SHIFTPLAN_SERVICE_ACCOUNT_JSON");
    cmd
}

/// Fresh scratch directory inside the system temp dir
pub fn setup_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftplan", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Config path inside `dir` that does not exist yet, so defaults apply.
pub fn config_path(dir: &PathBuf) -> String {
    dir.join("shiftplan.conf").to_string_lossy().to_string()
}

/// Initialize a CSV workbook under `dir/workbook` and return its path.
pub fn init_workbook(dir: &PathBuf) -> String {
    let wb = dir.join("workbook").to_string_lossy().to_string();
    sp()
        .args(["--config", &config_path(dir), "--workbook", &wb, "--test", "init"])
        .assert()
        .success();
    wb
}

/// Overwrite one month sheet with `HEADER` followed by `rows`.
pub fn write_sheet(workbook: &str, sheet: &str, rows: &[&str]) {
    let mut content = String::from(HEADER);
    content.push('\n');
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }
    fs::write(PathBuf::from(workbook).join(format!("{}.csv", sheet)), content)
        .expect("write sheet");
}

pub fn read_sheet(workbook: &str, sheet: &str) -> String {
    fs::read_to_string(PathBuf::from(workbook).join(format!("{}.csv", sheet))).expect("read sheet")
}
