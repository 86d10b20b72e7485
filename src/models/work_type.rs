use serde::Serialize;

/// Kind of work planned for the day (single-select column `Práce`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum WorkType {
    #[default]
    Empty,
    Delivery,
    Maintenance,
    EventInternal,
    EventExternal,
    /// Text not in the option list, kept verbatim.
    Other(String),
}

impl WorkType {
    /// Options offered by the editor, in display order.
    pub const OPTIONS: [&'static str; 5] = ["", "dovoz", "údržba", "Akce (TiC)", "Akce (externí)"];

    /// Convert cell text → enum. Never fails: blank text is `Empty`,
    /// unknown text is `Other`.
    pub fn from_cell(s: &str) -> Self {
        match s.trim() {
            "" => WorkType::Empty,
            "dovoz" => WorkType::Delivery,
            "údržba" => WorkType::Maintenance,
            "Akce (TiC)" => WorkType::EventInternal,
            "Akce (externí)" => WorkType::EventExternal,
            _ => WorkType::Other(s.to_string()),
        }
    }

    /// Convert enum → cell text
    pub fn as_cell(&self) -> &str {
        match self {
            WorkType::Empty => "",
            WorkType::Delivery => "dovoz",
            WorkType::Maintenance => "údržba",
            WorkType::EventInternal => "Akce (TiC)",
            WorkType::EventExternal => "Akce (externí)",
            WorkType::Other(s) => s,
        }
    }
}
