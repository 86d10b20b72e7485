use serde::Serialize;

/// Derived driver-coverage status of a row (column `Řidič kontrola`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DriverStatus {
    /// No vehicle planned, so nobody has to drive.
    #[default]
    NotRequired,
    Ok,
    MissingDriver,
}

impl DriverStatus {
    pub fn as_cell(&self) -> &'static str {
        match self {
            DriverStatus::NotRequired => "",
            DriverStatus::Ok => "OK",
            DriverStatus::MissingDriver => "CHYBÍ ŘIDIČ",
        }
    }

    /// Stored values are informational only; anything unknown reads as
    /// `NotRequired` and is replaced on the next recompute.
    pub fn from_cell(s: &str) -> Self {
        match s.trim() {
            "OK" => DriverStatus::Ok,
            "CHYBÍ ŘIDIČ" => DriverStatus::MissingDriver,
            _ => DriverStatus::NotRequired,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, DriverStatus::MissingDriver)
    }
}
