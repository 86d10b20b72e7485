//! Driver-coverage rule.
//!
//! A row that plans a vehicle needs at least one driver-eligible person
//! assigned. The rule only looks at the row's own vehicle and assignment
//! flags, so rows can be evaluated independently and in any order.

use crate::models::{Assignment, DriverStatus, Person, ShiftRow, ShiftTable, Vehicle};

/// The subset of the roster allowed to drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverPolicy {
    drivers: Vec<Person>,
}

impl Default for DriverPolicy {
    fn default() -> Self {
        Self::new([Person::Vagner, Person::Tomecek, Person::Tichy])
    }
}

impl DriverPolicy {
    pub fn new<I: IntoIterator<Item = Person>>(drivers: I) -> Self {
        let mut drivers: Vec<Person> = drivers.into_iter().collect();
        drivers.sort();
        drivers.dedup();
        Self { drivers }
    }

    pub fn drivers(&self) -> &[Person] {
        &self.drivers
    }

    pub fn is_driver(&self, person: Person) -> bool {
        self.drivers.contains(&person)
    }
}

/// Status of a single row:
/// - no vehicle (blank or `Žádné`) → `NotRequired`
/// - any eligible driver assigned → `Ok`
/// - otherwise → `MissingDriver`
pub fn driver_status(
    vehicle: &Vehicle,
    assigned: &Assignment,
    policy: &DriverPolicy,
) -> DriverStatus {
    if !vehicle.needs_driver() {
        return DriverStatus::NotRequired;
    }

    if policy.drivers().iter().any(|d| assigned.get(*d)) {
        DriverStatus::Ok
    } else {
        DriverStatus::MissingDriver
    }
}

pub fn recompute_row(row: &mut ShiftRow, policy: &DriverPolicy) {
    row.driver_status = driver_status(&row.vehicle, &row.assigned, policy);
}

/// Refresh the status column of every row.
pub fn recompute(table: &mut ShiftTable, policy: &DriverPolicy) {
    for row in &mut table.rows {
        recompute_row(row, policy);
    }
}
