//! Units State
//!
//! Single source of truth for the units table: the rows last read from
//! storage, the selected unit, the notice bar, and a pending delete awaiting
//! confirmation.
//!
//! Each operation runs synchronously against the store. The `apply_*`
//! methods hold the logic and return the UI events to emit; the public
//! wrappers emit them and notify observers.

use crate::domain::form::{FormField, UnitForm};
use crate::domain::unit::{Unit, UnitStatus};
use crate::error::Error;
use crate::services::{DeleteRequest, StatusOutcome, UnitService, unexpected_error_message};
use crate::states::{Notice, NotificationSeverity, UIEvent};
use gpui::{Context, EventEmitter};
use tracing::error;

/// Units state - the table and everything the action bar acts on
pub struct UnitsState {
    service: UnitService,
    /// Rows in display order
    units: Vec<Unit>,
    /// Selected unit id
    selected: Option<String>,
    /// Current notice bar content
    notice: Option<Notice>,
    /// Unit id waiting for delete confirmation
    pending_delete: Option<String>,
}

impl UnitsState {
    /// Create a new units state; nothing is read until `load`
    pub fn new(service: UnitService) -> Self {
        Self {
            service,
            units: Vec::new(),
            selected: None,
            notice: None,
            pending_delete: None,
        }
    }

    // ==================== Getters ====================

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn selected_unit_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_unit(&self) -> Option<&Unit> {
        let id = self.selected.as_deref()?;
        self.units.iter().find(|u| u.unit_id == id)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Unit id awaiting confirmation, if the delete dialog is open
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Question shown in the delete confirmation
    pub fn delete_prompt(&self) -> Option<String> {
        let unit_id = self.pending_delete.clone()?;
        Some(DeleteRequest::Confirm { unit_id }.message())
    }

    // ==================== Operations ====================

    /// Create the table if needed and read every unit
    pub fn load(&mut self, cx: &mut Context<Self>) {
        self.apply_load();
        cx.notify();
    }

    /// Reload the table from storage
    pub fn refresh(&mut self, cx: &mut Context<Self>) {
        self.apply_refresh();
        cx.notify();
    }

    /// Validate `form` and add the unit it describes
    pub fn add_unit(&mut self, form: UnitForm, cx: &mut Context<Self>) {
        let events = self.apply_add(&form);
        self.emit_all(events, cx);
    }

    /// Set the selected unit's status
    pub fn mark_selected(&mut self, status: UnitStatus, cx: &mut Context<Self>) {
        self.apply_mark(status);
        cx.notify();
    }

    /// Start the delete flow for the selected unit
    pub fn request_delete(&mut self, cx: &mut Context<Self>) {
        self.apply_request_delete();
        cx.notify();
    }

    /// Delete the unit awaiting confirmation
    pub fn confirm_delete(&mut self, cx: &mut Context<Self>) {
        self.apply_confirm_delete();
        cx.notify();
    }

    /// Close the confirmation without deleting
    pub fn cancel_delete(&mut self, cx: &mut Context<Self>) {
        if self.apply_cancel_delete() {
            cx.notify();
        }
    }

    /// Select a row and copy its values into the form
    pub fn select_unit(&mut self, unit_id: Option<String>, cx: &mut Context<Self>) {
        let events = self.apply_select(unit_id);
        self.emit_all(events, cx);
    }

    /// Move the selection down one row
    pub fn select_next(&mut self, cx: &mut Context<Self>) {
        let next = self.neighbour(1);
        self.select_unit(next, cx);
    }

    /// Move the selection up one row
    pub fn select_previous(&mut self, cx: &mut Context<Self>) {
        let previous = self.neighbour(-1);
        self.select_unit(previous, cx);
    }

    /// Reset the form; the table selection is left alone
    pub fn clear_form(&mut self, cx: &mut Context<Self>) {
        let events = self.apply_clear();
        self.emit_all(events, cx);
    }

    pub fn dismiss_notice(&mut self, cx: &mut Context<Self>) {
        if self.notice.take().is_some() {
            cx.notify();
        }
    }

    fn emit_all(&mut self, events: Vec<UIEvent>, cx: &mut Context<Self>) {
        for event in events {
            cx.emit(event);
        }
        cx.notify();
    }

    // ==================== Flow Logic ====================

    fn apply_load(&mut self) {
        if let Err(e) = self.service.store().initialize() {
            self.report_fault("initialize", e);
            return;
        }
        self.apply_refresh();
    }

    fn apply_refresh(&mut self) {
        match self.service.refresh() {
            Ok(units) => self.set_units(units),
            Err(e) => self.report_fault("refresh", e),
        }
    }

    fn apply_add(&mut self, form: &UnitForm) -> Vec<UIEvent> {
        let outcome = match self.service.add(form) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.report_fault("add", e);
                return Vec::new();
            }
        };

        let mut events = Vec::new();
        if outcome.is_success() {
            self.notice = Some(Notice::success(outcome.message()));
            events.push(UIEvent::ClearForm);
            self.apply_refresh();
        } else {
            self.notice = Some(Notice::error(outcome.message()));
        }
        events.push(UIEvent::FocusField(outcome.focus()));
        events
    }

    fn apply_mark(&mut self, status: UnitStatus) {
        match self.service.set_status(self.selected.as_deref(), status) {
            Ok(outcome @ StatusOutcome::NoSelection { .. }) => {
                self.notice = Some(Notice::warning(outcome.message()));
            }
            Ok(outcome @ StatusOutcome::Updated { .. }) => {
                self.notice = Some(Notice::new(NotificationSeverity::Info, outcome.message()));
                self.apply_refresh();
            }
            Err(e) => self.report_fault("update status", e),
        }
    }

    fn apply_request_delete(&mut self) {
        match self.service.request_delete(self.selected.as_deref()) {
            request @ DeleteRequest::NoSelection => {
                self.notice = Some(Notice::warning(request.message()));
            }
            DeleteRequest::Confirm { unit_id } => {
                self.pending_delete = Some(unit_id);
            }
        }
    }

    fn apply_confirm_delete(&mut self) {
        let Some(unit_id) = self.pending_delete.take() else {
            return;
        };

        match self.service.delete_confirmed(&unit_id) {
            Ok(message) => {
                self.notice = Some(Notice::success(message));
                self.apply_refresh();
            }
            Err(e) => self.report_fault("delete", e),
        }
    }

    /// Drop the pending delete; true if one was open
    fn apply_cancel_delete(&mut self) -> bool {
        self.pending_delete.take().is_some()
    }

    fn apply_clear(&self) -> Vec<UIEvent> {
        vec![UIEvent::ClearForm, UIEvent::FocusField(FormField::UnitId)]
    }

    fn apply_select(&mut self, unit_id: Option<String>) -> Vec<UIEvent> {
        self.selected = unit_id.filter(|id| self.units.iter().any(|u| &u.unit_id == id));
        match self.selected_unit() {
            Some(unit) => vec![UIEvent::FillForm(UnitForm::from_unit(unit))],
            None => Vec::new(),
        }
    }

    /// Replace the rows, keeping the selection only if its id survived
    fn set_units(&mut self, units: Vec<Unit>) {
        self.units = units;
        let survived = self
            .selected
            .as_ref()
            .is_some_and(|id| self.units.iter().any(|u| &u.unit_id == id));
        if !survived {
            self.selected = None;
        }
    }

    /// Id of the row `step` positions away from the selection, clamped to the table
    fn neighbour(&self, step: isize) -> Option<String> {
        if self.units.is_empty() {
            return None;
        }

        let last = self.units.len() - 1;
        let index = match self.selected_unit_index() {
            Some(current) => current.saturating_add_signed(step).min(last),
            None if step < 0 => last,
            None => 0,
        };
        Some(self.units[index].unit_id.clone())
    }

    fn selected_unit_index(&self) -> Option<usize> {
        let id = self.selected.as_deref()?;
        self.units.iter().position(|u| u.unit_id == id)
    }

    fn report_fault(&mut self, operation: &'static str, e: Error) {
        error!(operation, error = %e, "Storage operation failed");
        self.notice = Some(Notice::error(unexpected_error_message(&e)));
    }
}

impl EventEmitter<UIEvent> for UnitsState {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::UnitStore;
    use tempfile::TempDir;

    fn loaded_state() -> (TempDir, UnitsState) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UnitStore::new(dir.path().join("units.db"));
        let mut state = UnitsState::new(UnitService::new(store));
        state.apply_load();
        (dir, state)
    }

    fn form(id: &str) -> UnitForm {
        UnitForm {
            unit_id: id.to_string(),
            location: "Downtown".to_string(),
            size: "1200".to_string(),
            status: UnitStatus::Available,
            rent: "1500".to_string(),
            selling_price: String::new(),
            owner_id: "ownerA".to_string(),
        }
    }

    fn notice_text(state: &UnitsState) -> String {
        state
            .notice()
            .map(|n| n.message.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_load_starts_empty() {
        let (_dir, state) = loaded_state();
        assert!(state.units().is_empty());
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_add_clears_form_and_refreshes() {
        let (_dir, mut state) = loaded_state();

        let events = state.apply_add(&form("unit101"));
        assert_eq!(
            events,
            vec![UIEvent::ClearForm, UIEvent::FocusField(FormField::UnitId)]
        );
        assert_eq!(state.units().len(), 1);
        assert_eq!(notice_text(&state), "Unit 'unit101' added successfully!");
        assert_eq!(
            state.notice().map(|n| n.severity),
            Some(NotificationSeverity::Success)
        );
    }

    #[test]
    fn test_invalid_add_keeps_form_and_focuses_field() {
        let (_dir, mut state) = loaded_state();
        let mut bad = form("unit101");
        bad.rent = "-5".to_string();

        let events = state.apply_add(&bad);
        assert_eq!(events, vec![UIEvent::FocusField(FormField::Rent)]);
        assert_eq!(notice_text(&state), "Rent cannot be negative!");
        assert!(state.units().is_empty());
    }

    #[test]
    fn test_duplicate_add_reports_conflict() {
        let (_dir, mut state) = loaded_state();
        state.apply_add(&form("unit101"));

        let events = state.apply_add(&form("unit101"));
        assert_eq!(events, vec![UIEvent::FocusField(FormField::UnitId)]);
        assert_eq!(
            notice_text(&state),
            "Unit ID 'unit101' already exists! Please use a different ID."
        );
        assert_eq!(state.units().len(), 1);
    }

    #[test]
    fn test_select_fills_form_with_plain_numbers() {
        let (_dir, mut state) = loaded_state();
        state.apply_add(&form("unit101"));

        let events = state.apply_select(Some("unit101".to_string()));
        let expected = UnitForm {
            rent: "1500".to_string(),
            selling_price: String::new(),
            ..form("unit101")
        };
        assert_eq!(events, vec![UIEvent::FillForm(expected)]);
        assert_eq!(state.selected_unit_id(), Some("unit101"));
    }

    #[test]
    fn test_selecting_unknown_id_clears_selection() {
        let (_dir, mut state) = loaded_state();
        state.apply_add(&form("unit101"));
        state.apply_select(Some("unit101".to_string()));

        assert!(state.apply_select(Some("ghost".to_string())).is_empty());
        assert_eq!(state.selected_unit_id(), None);
    }

    #[test]
    fn test_mark_without_selection_warns() {
        let (_dir, mut state) = loaded_state();
        state.apply_add(&form("unit101"));

        state.apply_mark(UnitStatus::Sold);
        assert_eq!(notice_text(&state), "Please select a unit to mark as sold!");
        assert_eq!(
            state.notice().map(|n| n.severity),
            Some(NotificationSeverity::Warning)
        );
        assert_eq!(state.units()[0].status, UnitStatus::Available);
    }

    #[test]
    fn test_mark_selected_updates_table() {
        let (_dir, mut state) = loaded_state();
        state.apply_add(&form("unit101"));
        state.apply_select(Some("unit101".to_string()));

        state.apply_mark(UnitStatus::Rented);
        assert_eq!(notice_text(&state), "Unit unit101 marked as rented!");
        assert_eq!(state.units()[0].status, UnitStatus::Rented);
        assert_eq!(state.selected_unit_id(), Some("unit101"));
    }

    #[test]
    fn test_delete_needs_selection() {
        let (_dir, mut state) = loaded_state();

        state.apply_request_delete();
        assert_eq!(notice_text(&state), "Please select a unit to delete!");
        assert_eq!(state.pending_delete(), None);
    }

    #[test]
    fn test_delete_waits_for_confirmation() {
        let (_dir, mut state) = loaded_state();
        state.apply_add(&form("unit101"));
        state.apply_select(Some("unit101".to_string()));

        state.apply_request_delete();
        assert_eq!(state.pending_delete(), Some("unit101"));
        assert_eq!(
            state.delete_prompt().as_deref(),
            Some("Are you sure you want to delete unit unit101?")
        );
        assert_eq!(state.units().len(), 1);

        state.apply_confirm_delete();
        assert_eq!(state.pending_delete(), None);
        assert!(state.units().is_empty());
        assert_eq!(state.selected_unit_id(), None);
        assert_eq!(notice_text(&state), "Unit unit101 deleted successfully!");
    }

    #[test]
    fn test_cancelled_delete_changes_nothing() {
        let (_dir, mut state) = loaded_state();
        state.apply_add(&form("unit101"));
        state.apply_select(Some("unit101".to_string()));
        state.apply_request_delete();

        assert!(state.apply_cancel_delete());
        assert_eq!(state.pending_delete(), None);
        assert_eq!(state.delete_prompt(), None);
        assert_eq!(state.units().len(), 1);
        assert_eq!(state.selected_unit_id(), Some("unit101"));

        // Nothing left to confirm or cancel
        state.apply_confirm_delete();
        assert_eq!(state.units().len(), 1);
        assert!(!state.apply_cancel_delete());
    }

    #[test]
    fn test_clear_resets_form_and_keeps_selection() {
        let (_dir, mut state) = loaded_state();
        state.apply_add(&form("unit101"));
        state.apply_select(Some("unit101".to_string()));

        assert_eq!(
            state.apply_clear(),
            vec![UIEvent::ClearForm, UIEvent::FocusField(FormField::UnitId)]
        );
        assert_eq!(state.selected_unit_id(), Some("unit101"));
        assert_eq!(state.units().len(), 1);
    }

    #[test]
    fn test_refresh_keeps_surviving_selection() {
        let (_dir, mut state) = loaded_state();
        state.apply_add(&form("a"));
        state.apply_add(&form("b"));
        state.apply_select(Some("b".to_string()));

        state.service.store().delete_unit("a").expect("delete");
        state.apply_refresh();
        assert_eq!(state.selected_unit_id(), Some("b"));

        state.service.store().delete_unit("b").expect("delete");
        state.apply_refresh();
        assert_eq!(state.selected_unit_id(), None);
    }

    #[test]
    fn test_neighbour_is_clamped() {
        let (_dir, mut state) = loaded_state();
        assert_eq!(state.neighbour(1), None);

        for id in ["a", "b", "c"] {
            state.apply_add(&form(id));
        }
        assert_eq!(state.neighbour(1).as_deref(), Some("a"));
        assert_eq!(state.neighbour(-1).as_deref(), Some("c"));

        state.apply_select(Some("c".to_string()));
        assert_eq!(state.neighbour(1).as_deref(), Some("c"));
        assert_eq!(state.neighbour(-1).as_deref(), Some("b"));

        state.apply_select(Some("a".to_string()));
        assert_eq!(state.neighbour(-1).as_deref(), Some("a"));
    }

    #[test]
    fn test_storage_fault_becomes_generic_notice() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory cannot be opened as a database
        let mut state = UnitsState::new(UnitService::new(UnitStore::new(dir.path())));

        state.apply_load();
        assert!(notice_text(&state).starts_with("An unexpected error occurred: "));
        assert_eq!(
            state.notice().map(|n| n.severity),
            Some(NotificationSeverity::Error)
        );
    }
}
