use serde::Serialize;

/// Vehicle used for the shift (single-select column `Vozidlo`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum Vehicle {
    #[default]
    Empty,
    Van,
    PersonalCar,
    /// Explicit "no vehicle" choice (`Žádné`).
    NoVehicle,
    /// Text not in the option list, kept verbatim.
    Other(String),
}

impl Vehicle {
    pub const OPTIONS: [&'static str; 4] = ["", "Dodávka", "Osobní auto", "Žádné"];

    /// Convert cell text → enum. Never fails.
    pub fn from_cell(s: &str) -> Self {
        match s.trim() {
            "" => Vehicle::Empty,
            "Dodávka" => Vehicle::Van,
            "Osobní auto" => Vehicle::PersonalCar,
            "Žádné" => Vehicle::NoVehicle,
            _ => Vehicle::Other(s.to_string()),
        }
    }

    /// Convert enum → cell text
    pub fn as_cell(&self) -> &str {
        match self {
            Vehicle::Empty => "",
            Vehicle::Van => "Dodávka",
            Vehicle::PersonalCar => "Osobní auto",
            Vehicle::NoVehicle => "Žádné",
            Vehicle::Other(s) => s,
        }
    }

    /// Whether a vehicle is actually planned, i.e. somebody has to drive.
    pub fn needs_driver(&self) -> bool {
        !matches!(self, Vehicle::Empty | Vehicle::NoVehicle)
    }
}
