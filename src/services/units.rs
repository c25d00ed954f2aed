//! Unit Flows
//!
//! Add, status change, delete, and refresh as the form drives them, with
//! the user-facing outcome of each. Nothing here touches GPUI; the state
//! layer turns outcomes into notices, focus changes, and table updates.

use tracing::{info, warn};

use super::store::UnitStore;
use crate::domain::form::{FormField, UnitForm, ValidationError};
use crate::domain::unit::{Unit, UnitStatus};
use crate::error::Result;

/// Result of submitting the form
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// Stored; the form should be cleared and the list refreshed
    Added(Unit),
    /// The id is taken; the form keeps its values for correction
    Duplicate { unit_id: String },
    /// A field failed validation; nothing reached the store
    Invalid(ValidationError),
}

impl AddOutcome {
    /// Message shown to the user
    pub fn message(&self) -> String {
        match self {
            AddOutcome::Added(unit) => format!("Unit '{}' added successfully!", unit.unit_id),
            AddOutcome::Duplicate { unit_id } => {
                format!("Unit ID '{unit_id}' already exists! Please use a different ID.")
            }
            AddOutcome::Invalid(error) => error.to_string(),
        }
    }

    /// Field that should receive focus afterwards
    pub fn focus(&self) -> FormField {
        match self {
            AddOutcome::Added(_) | AddOutcome::Duplicate { .. } => FormField::UnitId,
            AddOutcome::Invalid(error) => error.field,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }
}

/// Result of "Mark as Rented" / "Mark as Sold"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    /// No row was selected; nothing changed
    NoSelection { status: UnitStatus },
    /// The update ran (a vanished id is a silent no-op in the store)
    Updated { unit_id: String, status: UnitStatus },
}

impl StatusOutcome {
    pub fn message(&self) -> String {
        match self {
            StatusOutcome::NoSelection { status } => {
                format!("Please select a unit to mark as {}!", status_word(*status))
            }
            StatusOutcome::Updated { unit_id, status } => {
                format!("Unit {unit_id} marked as {}!", status_word(*status))
            }
        }
    }
}

/// First step of the delete flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRequest {
    /// No row was selected
    NoSelection,
    /// Ask the user before deleting `unit_id`
    Confirm { unit_id: String },
}

impl DeleteRequest {
    pub fn message(&self) -> String {
        match self {
            DeleteRequest::NoSelection => "Please select a unit to delete!".to_string(),
            DeleteRequest::Confirm { unit_id } => {
                format!("Are you sure you want to delete unit {unit_id}?")
            }
        }
    }
}

fn status_word(status: UnitStatus) -> &'static str {
    match status {
        UnitStatus::Available => "available",
        UnitStatus::Rented => "rented",
        UnitStatus::Sold => "sold",
    }
}

/// Message for the successful end of the delete flow
pub fn deleted_message(unit_id: &str) -> String {
    format!("Unit {unit_id} deleted successfully!")
}

/// Message for an unanticipated storage fault
pub fn unexpected_error_message(error: &crate::error::Error) -> String {
    format!("An unexpected error occurred: {error}")
}

/// Form-driven operations on the unit store
#[derive(Debug, Clone)]
pub struct UnitService {
    store: UnitStore,
}

impl UnitService {
    pub fn new(store: UnitStore) -> Self {
        Self { store }
    }

    /// Create the service and make sure the table exists
    pub fn open(store: UnitStore) -> Result<Self> {
        store.initialize()?;
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &UnitStore {
        &self.store
    }

    /// Validate the form and insert the unit it describes
    pub fn add(&self, form: &UnitForm) -> Result<AddOutcome> {
        let unit = match form.validate() {
            Ok(unit) => unit,
            Err(error) => {
                info!(field = ?error.field, "Unit form rejected: {error}");
                return Ok(AddOutcome::Invalid(error));
            }
        };

        if self.store.add_unit(&unit)? {
            info!(unit_id = %unit.unit_id, "Unit added");
            Ok(AddOutcome::Added(unit))
        } else {
            warn!(unit_id = %unit.unit_id, "Unit id already exists");
            Ok(AddOutcome::Duplicate {
                unit_id: unit.unit_id,
            })
        }
    }

    /// Set the status of the selected unit, if any
    pub fn set_status(&self, selected: Option<&str>, status: UnitStatus) -> Result<StatusOutcome> {
        let Some(unit_id) = selected else {
            return Ok(StatusOutcome::NoSelection { status });
        };

        self.store.update_status(unit_id, status)?;
        info!(unit_id, status = %status, "Unit status changed");
        Ok(StatusOutcome::Updated {
            unit_id: unit_id.to_string(),
            status,
        })
    }

    /// Decide whether a delete may proceed to confirmation
    pub fn request_delete(&self, selected: Option<&str>) -> DeleteRequest {
        match selected {
            Some(unit_id) => DeleteRequest::Confirm {
                unit_id: unit_id.to_string(),
            },
            None => DeleteRequest::NoSelection,
        }
    }

    /// Delete after the user confirmed
    pub fn delete_confirmed(&self, unit_id: &str) -> Result<String> {
        self.store.delete_unit(unit_id)?;
        info!(unit_id, "Unit deleted");
        Ok(deleted_message(unit_id))
    }

    /// Fresh copy of every stored unit
    pub fn refresh(&self) -> Result<Vec<Unit>> {
        self.store.list_all_units()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::ValidationIssue;
    use tempfile::TempDir;

    fn temp_service() -> (TempDir, UnitService) {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = UnitService::open(UnitStore::new(dir.path().join("units.db"))).expect("open");
        (dir, service)
    }

    fn form101() -> UnitForm {
        UnitForm {
            unit_id: "unit101".to_string(),
            location: "Downtown".to_string(),
            size: "1200".to_string(),
            status: UnitStatus::Available,
            rent: String::new(),
            selling_price: "300000".to_string(),
            owner_id: "ownerA".to_string(),
        }
    }

    #[test]
    fn test_add_success() {
        let (_dir, service) = temp_service();

        let outcome = service.add(&form101()).expect("add");
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), "Unit 'unit101' added successfully!");

        let units = service.refresh().expect("refresh");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].selling_price, Some(300000.0));
    }

    #[test]
    fn test_add_duplicate_keeps_original() {
        let (_dir, service) = temp_service();
        service.add(&form101()).expect("add");

        let mut again = form101();
        again.location = "Elsewhere".to_string();
        let outcome = service.add(&again).expect("add");

        assert_eq!(
            outcome,
            AddOutcome::Duplicate {
                unit_id: "unit101".to_string()
            }
        );
        assert_eq!(outcome.focus(), FormField::UnitId);
        assert_eq!(
            outcome.message(),
            "Unit ID 'unit101' already exists! Please use a different ID."
        );

        let units = service.refresh().expect("refresh");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].location, "Downtown");
    }

    #[test]
    fn test_invalid_form_never_reaches_store() {
        let (_dir, service) = temp_service();
        let mut form = form101();
        form.size = "0".to_string();

        let outcome = service.add(&form).expect("add");
        match &outcome {
            AddOutcome::Invalid(error) => {
                assert_eq!(error.field, FormField::Size);
                assert_eq!(error.issue, ValidationIssue::NotPositive);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(outcome.focus(), FormField::Size);
        assert!(service.refresh().expect("refresh").is_empty());
    }

    #[test]
    fn test_set_status_requires_selection() {
        let (_dir, service) = temp_service();

        let outcome = service.set_status(None, UnitStatus::Rented).expect("status");
        assert_eq!(
            outcome,
            StatusOutcome::NoSelection {
                status: UnitStatus::Rented
            }
        );
        assert_eq!(outcome.message(), "Please select a unit to mark as rented!");
    }

    #[test]
    fn test_set_status_updates_selected_unit() {
        let (_dir, service) = temp_service();
        service.add(&form101()).expect("add");

        let outcome = service
            .set_status(Some("unit101"), UnitStatus::Sold)
            .expect("status");
        assert_eq!(outcome.message(), "Unit unit101 marked as sold!");

        let units = service.refresh().expect("refresh");
        assert_eq!(units[0].status, UnitStatus::Sold);
        assert_eq!(units[0].size, 1200);
    }

    #[test]
    fn test_set_status_on_vanished_unit_is_silent() {
        let (_dir, service) = temp_service();

        let outcome = service
            .set_status(Some("ghost"), UnitStatus::Rented)
            .expect("status");
        assert!(matches!(outcome, StatusOutcome::Updated { .. }));
        assert!(service.refresh().expect("refresh").is_empty());
    }

    #[test]
    fn test_delete_flow() {
        let (_dir, service) = temp_service();
        service.add(&form101()).expect("add");

        assert_eq!(service.request_delete(None), DeleteRequest::NoSelection);
        assert_eq!(
            DeleteRequest::NoSelection.message(),
            "Please select a unit to delete!"
        );

        let request = service.request_delete(Some("unit101"));
        assert_eq!(
            request.message(),
            "Are you sure you want to delete unit unit101?"
        );
        // Asking for confirmation alone deletes nothing
        assert_eq!(service.refresh().expect("refresh").len(), 1);

        let message = service.delete_confirmed("unit101").expect("delete");
        assert_eq!(message, "Unit unit101 deleted successfully!");
        assert!(service.refresh().expect("refresh").is_empty());
    }
}
