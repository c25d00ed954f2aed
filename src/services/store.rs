//! Unit Store
//!
//! Durable CRUD for units in a local SQLite file.
//!
//! The store only holds the database path. Every operation opens its own
//! connection and drops it before returning, on success and error paths
//! alike; no transaction spans two operations.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, Row, ffi, params};
use tracing::{debug, info};

use crate::domain::unit::{Unit, UnitStatus, UnknownStatus};
use crate::error::{Error, Result};
use crate::helpers::ensure_dir;

const CREATE_UNITS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS units (
        unit_id TEXT PRIMARY KEY,
        location TEXT NOT NULL,
        size INTEGER NOT NULL,
        status TEXT NOT NULL,
        rent REAL,
        selling_price REAL,
        owner_id TEXT NOT NULL
    )
"#;

/// Handle to the units table in a database file
#[derive(Debug, Clone)]
pub struct UnitStore {
    path: PathBuf,
}

impl UnitStore {
    /// Create a store for the database at `path`; nothing is opened yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Ensure the `units` table exists. Safe to call on every startup.
    pub fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent)?;
        }

        let conn = self.connect()?;
        conn.execute_batch(CREATE_UNITS_TABLE)?;

        info!(path = ?self.path, "Units table initialized");
        Ok(())
    }

    /// Insert a new unit.
    ///
    /// Returns `Ok(false)` when the unit id already exists; the existing row
    /// is left untouched. Any other storage failure is an error.
    pub fn add_unit(&self, unit: &Unit) -> Result<bool> {
        let conn = self.connect()?;
        let inserted = conn.execute(
            "INSERT INTO units (unit_id, location, size, status, rent, selling_price, owner_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                unit.unit_id,
                unit.location,
                unit.size,
                unit.status.as_str(),
                unit.rent,
                unit.selling_price,
                unit.owner_id,
            ],
        );

        match inserted {
            Ok(_) => {
                debug!(unit = %unit, "Unit inserted");
                Ok(true)
            }
            Err(e) if is_duplicate_key(&e) => {
                debug!(unit_id = %unit.unit_id, "Unit id already exists");
                Ok(false)
            }
            Err(e) => Err(Error::Database { source: e }),
        }
    }

    /// All units, in insertion order
    pub fn list_all_units(&self) -> Result<Vec<Unit>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT unit_id, location, size, status, rent, selling_price, owner_id
             FROM units ORDER BY rowid",
        )?;

        let rows = stmt.query_map([], read_row)?;
        let mut units = Vec::new();
        for row in rows {
            units.push(decode_row(row?)?);
        }

        debug!(count = units.len(), "Units listed");
        Ok(units)
    }

    /// Set the status of a unit. A missing id changes nothing and is not an error.
    pub fn update_status(&self, unit_id: &str, status: UnitStatus) -> Result<()> {
        let conn = self.connect()?;
        let affected = conn.execute(
            "UPDATE units SET status = ?1 WHERE unit_id = ?2",
            params![status.as_str(), unit_id],
        )?;

        debug!(unit_id, status = %status, affected, "Unit status updated");
        Ok(())
    }

    /// Delete a unit by id. A missing id is a no-op.
    pub fn delete_unit(&self, unit_id: &str) -> Result<()> {
        let conn = self.connect()?;
        let affected = conn.execute("DELETE FROM units WHERE unit_id = ?1", params![unit_id])?;

        debug!(unit_id, affected, "Unit deleted");
        Ok(())
    }
}

/// Raw column values before the status text is decoded
struct RawUnit {
    unit: Unit,
    status: String,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawUnit> {
    Ok(RawUnit {
        unit: Unit {
            unit_id: row.get(0)?,
            location: row.get(1)?,
            size: row.get(2)?,
            status: UnitStatus::default(),
            rent: row.get(4)?,
            selling_price: row.get(5)?,
            owner_id: row.get(6)?,
        },
        status: row.get(3)?,
    })
}

fn decode_row(raw: RawUnit) -> Result<Unit> {
    let RawUnit { mut unit, status } = raw;
    unit.status = status.parse().map_err(|e: UnknownStatus| {
        Error::Decode {
            unit_id: unit.unit_id.clone(),
            message: e.to_string(),
        }
    })?;
    Ok(unit)
}

fn is_duplicate_key(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(e, _) if e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, UnitStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UnitStore::new(dir.path().join("units.db"));
        store.initialize().expect("initialize");
        (dir, store)
    }

    fn unit101() -> Unit {
        Unit {
            unit_id: "unit101".to_string(),
            location: "Downtown".to_string(),
            size: 1200,
            status: UnitStatus::Available,
            rent: None,
            selling_price: Some(300000.0),
            owner_id: "ownerA".to_string(),
        }
    }

    fn unit(id: &str) -> Unit {
        Unit {
            unit_id: id.to_string(),
            location: "Harbor".to_string(),
            size: 500,
            status: UnitStatus::Available,
            rent: Some(900.0),
            selling_price: None,
            owner_id: "ownerB".to_string(),
        }
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let (_dir, store) = temp_store();
        store.add_unit(&unit101()).expect("add");

        store.initialize().expect("second initialize");
        assert_eq!(store.list_all_units().expect("list").len(), 1);
    }

    #[test]
    fn test_initialize_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UnitStore::new(dir.path().join("nested").join("units.db"));

        store.initialize().expect("initialize");
        assert!(store.path().exists());
    }

    #[test]
    fn test_add_then_list_contains_exactly_the_record() {
        let (_dir, store) = temp_store();

        assert!(store.add_unit(&unit101()).expect("add"));
        assert_eq!(store.list_all_units().expect("list"), vec![unit101()]);
    }

    #[test]
    fn test_duplicate_add_returns_false_and_keeps_original() {
        let (_dir, store) = temp_store();
        assert!(store.add_unit(&unit101()).expect("add"));

        let mut imposter = unit101();
        imposter.location = "Suburbs".to_string();
        imposter.size = 10;

        assert!(!store.add_unit(&imposter).expect("duplicate add"));
        assert_eq!(store.list_all_units().expect("list"), vec![unit101()]);
    }

    #[test]
    fn test_ids_are_case_sensitive() {
        let (_dir, store) = temp_store();
        assert!(store.add_unit(&unit("unit1")).expect("add"));
        assert!(store.add_unit(&unit("UNIT1")).expect("add"));
        assert_eq!(store.list_all_units().expect("list").len(), 2);
    }

    #[test]
    fn test_absent_money_round_trips_as_none() {
        let (_dir, store) = temp_store();
        let mut bare = unit("bare");
        bare.rent = None;
        bare.selling_price = None;
        store.add_unit(&bare).expect("add");

        let listed = store.list_all_units().expect("list");
        assert_eq!(listed[0].rent, None);
        assert_eq!(listed[0].selling_price, None);
    }

    #[test]
    fn test_update_status_changes_only_status() {
        let (_dir, store) = temp_store();
        store.add_unit(&unit101()).expect("add");
        store.add_unit(&unit("unit102")).expect("add");

        store
            .update_status("unit101", UnitStatus::Rented)
            .expect("update");

        let listed = store.list_all_units().expect("list");
        let mut expected = unit101();
        expected.status = UnitStatus::Rented;
        assert_eq!(listed, vec![expected, unit("unit102")]);
    }

    #[test]
    fn test_update_status_on_missing_id_is_silent() {
        let (_dir, store) = temp_store();
        store.add_unit(&unit101()).expect("add");

        store
            .update_status("ghost", UnitStatus::Sold)
            .expect("no-op update");
        assert_eq!(store.list_all_units().expect("list"), vec![unit101()]);
    }

    #[test]
    fn test_sold_unit_can_become_rented() {
        let (_dir, store) = temp_store();
        store.add_unit(&unit101()).expect("add");

        store.update_status("unit101", UnitStatus::Sold).expect("sold");
        store
            .update_status("unit101", UnitStatus::Rented)
            .expect("rented");
        assert_eq!(
            store.list_all_units().expect("list")[0].status,
            UnitStatus::Rented
        );
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (_dir, store) = temp_store();
        store.add_unit(&unit101()).expect("add");
        store.add_unit(&unit("unit102")).expect("add");

        store.delete_unit("unit101").expect("delete");
        assert_eq!(store.list_all_units().expect("list"), vec![unit("unit102")]);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let (_dir, store) = temp_store();
        store.add_unit(&unit101()).expect("add");

        store.delete_unit("ghost").expect("no-op delete");
        assert_eq!(store.list_all_units().expect("list").len(), 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let (_dir, store) = temp_store();
        for id in ["c", "a", "b"] {
            store.add_unit(&unit(id)).expect("add");
        }

        let ids: Vec<_> = store
            .list_all_units()
            .expect("list")
            .into_iter()
            .map(|u| u.unit_id)
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_unknown_status_text_is_a_decode_error() {
        let (_dir, store) = temp_store();
        store.add_unit(&unit101()).expect("add");

        let conn = Connection::open(store.path()).expect("open");
        conn.execute("UPDATE units SET status = 'Leased'", [])
            .expect("corrupt row");
        drop(conn);

        let err = store.list_all_units().unwrap_err();
        assert!(matches!(err, Error::Decode { ref unit_id, .. } if unit_id == "unit101"));
    }

    #[test]
    fn test_unit101_scenario() {
        let (_dir, store) = temp_store();

        assert!(store.add_unit(&unit101()).expect("add"));
        assert_eq!(store.list_all_units().expect("list"), vec![unit101()]);

        assert!(!store.add_unit(&unit101()).expect("duplicate"));
        assert_eq!(store.list_all_units().expect("list"), vec![unit101()]);

        store
            .update_status("unit101", UnitStatus::Rented)
            .expect("update");
        let listed = store.list_all_units().expect("list");
        assert_eq!(listed[0].status, UnitStatus::Rented);
        assert_eq!(listed[0].size, 1200);
        assert_eq!(listed[0].location, "Downtown");

        store.delete_unit("unit101").expect("delete");
        assert!(store.list_all_units().expect("list").is_empty());
    }

    #[test]
    fn test_storage_fault_propagates() {
        let dir = tempfile::tempdir().expect("tempdir");
        // The database path is a directory, so opening it fails
        let store = UnitStore::new(dir.path());

        assert!(matches!(
            store.add_unit(&unit101()),
            Err(Error::Database { .. })
        ));
    }
}
