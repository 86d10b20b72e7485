pub mod column;
pub mod driver_status;
pub mod month;
pub mod person;
pub mod shift_row;
pub mod shift_table;
pub mod vehicle;
pub mod work_type;

pub use column::{COLUMNS, Column, ColumnKind, READ_ONLY_COLUMNS};
pub use driver_status::DriverStatus;
pub use month::Month;
pub use person::{Assignment, Person};
pub use shift_row::{CellEdit, ShiftRow};
pub use shift_table::ShiftTable;
pub use vehicle::Vehicle;
pub use work_type::WorkType;
