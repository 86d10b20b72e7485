use shiftplan::core::codec::CHECK_MARK;
use shiftplan::core::{DriverPolicy, EditorSession, Grid, SessionState};
use shiftplan::errors::AppError;
use shiftplan::models::column::headers;
use shiftplan::models::{CellEdit, Column, DriverStatus, Month, Person};
use shiftplan::store::{MemoryStore, SheetStore};

fn header_row() -> Vec<String> {
    headers().into_iter().map(String::from).collect()
}

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// February sheet: one van row staffed by Štod only, one row without a vehicle.
fn february() -> Grid {
    let mut van = vec![String::new(); 18];
    van[0] = "02.02.2026".into();
    van[3] = "dovoz".into();
    van[4] = "Praha".into();
    van[6] = "Dodávka".into();
    van[11] = CHECK_MARK.into();

    let mut quiet = vec![String::new(); 18];
    quiet[0] = "03.02.2026".into();
    quiet[3] = "údržba".into();
    quiet[7] = CHECK_MARK.into();

    vec![header_row(), van, quiet]
}

fn open(store: MemoryStore) -> EditorSession<MemoryStore> {
    EditorSession::open(store, DriverPolicy::default(), Month::February).expect("open session")
}

#[test]
fn van_without_driver_is_flagged_on_load_and_save() {
    let store = MemoryStore::new().with_sheet(Month::February, february());
    let mut session = open(store);

    assert_eq!(session.state(), SessionState::Clean);
    assert_eq!(
        session.table().rows[0].driver_status,
        DriverStatus::MissingDriver
    );
    assert_eq!(
        session.table().rows[1].driver_status,
        DriverStatus::NotRequired
    );

    session.save().expect("save");

    let saved = session.store().sheet(Month::February).expect("sheet");
    assert_eq!(saved[0], header_row());
    assert_eq!(saved[1][17], "CHYBÍ ŘIDIČ");
    assert_eq!(saved[2][17], "");
}

#[test]
fn checking_a_driver_clears_the_warning() {
    let store = MemoryStore::new().with_sheet(Month::February, february());
    let mut session = open(store);

    session
        .apply_edit(0, Column::Roster(Person::Tichy), CellEdit::Flag(true))
        .expect("edit");

    assert!(session.is_dirty());
    assert_eq!(session.table().rows[0].driver_status, DriverStatus::Ok);

    session
        .apply_edit(0, Column::Vehicle, CellEdit::Text("Žádné".into()))
        .expect("edit");
    assert_eq!(
        session.table().rows[0].driver_status,
        DriverStatus::NotRequired
    );
}

#[test]
fn save_writes_every_column_in_canonical_order() {
    // columns shuffled and partly missing
    let grid = vec![
        cells(&["Vozidlo", "Poznámky", "Datum", "Tomeček"]),
        cells(&["Osobní auto", "klíče u vrátnice", "5.2.2026", "✓"]),
    ];
    let store = MemoryStore::new().with_sheet(Month::February, grid);
    let mut session = open(store);
    session.save().expect("save");

    let saved = session.store().sheet(Month::February).expect("sheet");
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0], header_row());
    assert_eq!(saved[1].len(), 18);
    assert_eq!(saved[1][0], "05.02.2026");
    assert_eq!(saved[1][6], "Osobní auto");
    assert_eq!(saved[1][9], CHECK_MARK);
    assert_eq!(saved[1][15], "klíče u vrátnice");
    assert_eq!(saved[1][17], "OK");
}

#[test]
fn padded_check_marks_count_as_checked() {
    let mut row = vec![String::new(); 18];
    row[6] = "Dodávka".into();
    row[7] = "  ✓ ".into();
    let store = MemoryStore::new().with_sheet(Month::February, vec![header_row(), row]);

    let session = open(store);
    assert!(session.table().rows[0].assigned.get(Person::Vagner));
    assert_eq!(session.table().rows[0].driver_status, DriverStatus::Ok);
}

#[test]
fn selecting_a_month_discards_pending_edits() {
    let store = MemoryStore::new().with_sheet(Month::February, february());
    let mut session = open(store);

    session.add_row();
    assert_eq!(session.table().len(), 3);

    session.select_month(Month::March).expect("select");
    assert_eq!(session.month(), Month::March);
    assert!(session.table().is_empty());
    assert_eq!(session.state(), SessionState::Clean);

    session.select_month(Month::February).expect("select");
    assert_eq!(session.table().len(), 2);
    assert_eq!(session.store().save_count(), 0);
}

#[test]
fn failed_save_keeps_edits_pending() {
    let store = MemoryStore::new().with_sheet(Month::February, february());
    let mut session = open(store);

    session
        .apply_edit(1, Column::Notes, CellEdit::Text("revize".into()))
        .expect("edit");
    session.store_mut().set_fail_saves(true);

    let err = session.save().unwrap_err();
    assert!(matches!(err, AppError::SheetsApi { status: 503, .. }));
    assert_eq!(session.state(), SessionState::Pending);
    assert_eq!(session.table().rows[1].notes, "revize");

    session.store_mut().set_fail_saves(false);
    session.save().expect("retry");
    assert_eq!(session.state(), SessionState::Clean);

    let store = session.into_store();
    assert_eq!(store.save_count(), 1);
}

#[test]
fn rows_can_be_added_and_removed() {
    let store = MemoryStore::new().with_sheet(Month::February, february());
    let mut session = open(store);

    let idx = session.add_row();
    assert_eq!(idx, 2);
    session
        .apply_edit(idx, Column::Vehicle, CellEdit::Text("Dodávka".into()))
        .expect("edit");
    assert_eq!(
        session.table().rows[idx].driver_status,
        DriverStatus::MissingDriver
    );

    let removed = session.remove_row(0).expect("remove");
    assert_eq!(removed.location, "Praha");
    assert!(matches!(session.remove_row(7), Err(AppError::InvalidRow(8))));

    session.save().expect("save");
    let saved = session.store().sheet(Month::February).expect("sheet");
    assert_eq!(saved.len(), 3);
    assert_eq!(saved[2][17], "CHYBÍ ŘIDIČ");
}

#[test]
fn custom_driver_policy_changes_the_verdict() {
    let store = MemoryStore::new().with_sheet(Month::February, february());
    let session = EditorSession::open(
        store,
        DriverPolicy::new([Person::Stod]),
        Month::February,
    )
    .expect("open");

    assert_eq!(session.table().rows[0].driver_status, DriverStatus::Ok);
}

#[test]
fn missing_sheet_is_reported() {
    let mut store = MemoryStore::new();
    store.remove_sheet(Month::April);

    let err = EditorSession::open(store, DriverPolicy::default(), Month::April)
        .err()
        .expect("must fail");
    assert!(matches!(err, AppError::SheetNotFound(_)));
}

#[test]
fn memory_store_describes_itself() {
    assert_eq!(MemoryStore::new().describe(), "in-memory workbook");
}
