//! Unit Form
//!
//! The "Unit Information" group: six text inputs and a status dropdown.
//! Values are read out as a `UnitForm` on submit and written back when the
//! state layer fills, clears, or focuses a field.

use crate::constants::FORM_LABEL_WIDTH;
use crate::domain::form::{FormField, UnitForm};
use crate::domain::unit::UnitStatus;
use crate::helpers::StatusAction;
use crate::states::{UIEvent, UnitsState, i18n_units};
use gpui::{App, Context, Corner, Entity, SharedString, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, IconName,
    button::{Button, DropdownButton},
    h_flex,
    input::{Input, InputState},
    label::Label,
    v_flex,
};

impl From<StatusAction> for UnitStatus {
    fn from(action: StatusAction) -> Self {
        match action {
            StatusAction::Available => UnitStatus::Available,
            StatusAction::Rented => UnitStatus::Rented,
            StatusAction::Sold => UnitStatus::Sold,
        }
    }
}

fn status_action(status: UnitStatus) -> StatusAction {
    match status {
        UnitStatus::Available => StatusAction::Available,
        UnitStatus::Rented => StatusAction::Rented,
        UnitStatus::Sold => StatusAction::Sold,
    }
}

fn field_label_key(field: FormField) -> &'static str {
    match field {
        FormField::UnitId => "field_unit_id",
        FormField::Location => "field_location",
        FormField::Size => "field_size",
        FormField::Status => "field_status",
        FormField::Rent => "field_rent",
        FormField::SellingPrice => "field_selling_price",
        FormField::OwnerId => "field_owner_id",
    }
}

/// Text fields in tab order
const TEXT_FIELDS: [FormField; 6] = [
    FormField::UnitId,
    FormField::Location,
    FormField::Size,
    FormField::Rent,
    FormField::SellingPrice,
    FormField::OwnerId,
];

/// Unit form view component
pub struct UnitFormView {
    /// Text inputs, in `TEXT_FIELDS` order
    inputs: Vec<(FormField, Entity<InputState>)>,
    /// Value of the status dropdown
    status: UnitStatus,
    _subscriptions: Vec<Subscription>,
}

impl UnitFormView {
    /// Create a new form view bound to the units state
    pub fn new(units_state: Entity<UnitsState>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let inputs = TEXT_FIELDS
            .iter()
            .map(|&field| (field, cx.new(|cx| InputState::new(window, cx))))
            .collect();

        let subscriptions = vec![cx.subscribe_in(
            &units_state,
            window,
            |this, _state, event: &UIEvent, window, cx| match event {
                UIEvent::FillForm(form) => this.fill(form, window, cx),
                UIEvent::ClearForm => this.fill(&UnitForm::default(), window, cx),
                UIEvent::FocusField(field) => this.focus_field(*field, window, cx),
            },
        )];

        Self {
            inputs,
            status: UnitStatus::default(),
            _subscriptions: subscriptions,
        }
    }

    /// Current field values as typed
    pub fn form(&self, cx: &App) -> UnitForm {
        let text = |field: FormField| -> String {
            self.input(field)
                .map(|input| input.read(cx).value().to_string())
                .unwrap_or_default()
        };

        UnitForm {
            unit_id: text(FormField::UnitId),
            location: text(FormField::Location),
            size: text(FormField::Size),
            status: self.status,
            rent: text(FormField::Rent),
            selling_price: text(FormField::SellingPrice),
            owner_id: text(FormField::OwnerId),
        }
    }

    fn input(&self, field: FormField) -> Option<&Entity<InputState>> {
        self.inputs
            .iter()
            .find_map(|(f, input)| (*f == field).then_some(input))
    }

    fn fill(&mut self, form: &UnitForm, window: &mut Window, cx: &mut Context<Self>) {
        for (field, input) in &self.inputs {
            let value = form.get(*field).to_string();
            input.update(cx, |state, cx| state.set_value(value, window, cx));
        }
        self.status = form.status;
        cx.notify();
    }

    fn focus_field(&mut self, field: FormField, window: &mut Window, cx: &mut Context<Self>) {
        // The status dropdown always holds a valid value
        if let Some(input) = self.input(field) {
            input.update(cx, |state, cx| state.focus(window, cx));
        }
    }

    fn render_row(&self, field: FormField, content: impl IntoElement, cx: &App) -> impl IntoElement {
        h_flex()
            .w_full()
            .gap_2()
            .items_center()
            .child(
                Label::new(i18n_units(cx, field_label_key(field)))
                    .text_sm()
                    .w(px(FORM_LABEL_WIDTH)),
            )
            .child(div().flex_1().child(content))
    }

    fn render_text_row(&self, field: FormField, cx: &App) -> impl IntoElement {
        let input = self.input(field).map(|input| Input::new(input).w_full());
        self.render_row(field, div().children(input), cx)
    }

    fn render_status_row(&self, cx: &App) -> impl IntoElement {
        let current = self.status;
        let options: Vec<(UnitStatus, SharedString)> = UnitStatus::all()
            .iter()
            .map(|&status| (status, i18n_units(cx, status.i18n_key())))
            .collect();
        let current_label = options
            .iter()
            .find_map(|(status, label)| (*status == current).then(|| label.clone()))
            .unwrap_or_default();

        let dropdown = DropdownButton::new("status-dropdown")
            .button(
                Button::new("status-btn")
                    .outline()
                    .w_full()
                    .label(current_label)
                    .icon(IconName::ChevronDown),
            )
            .dropdown_menu_with_anchor(Corner::TopLeft, move |menu, _, _| {
                options.iter().fold(menu, |menu, (status, label)| {
                    menu.menu_with_check(
                        label.clone(),
                        *status == current,
                        Box::new(status_action(*status)),
                    )
                })
            });

        self.render_row(FormField::Status, dropdown, cx)
    }
}

impl Render for UnitFormView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let left = v_flex()
            .flex_1()
            .gap_2()
            .child(self.render_text_row(FormField::UnitId, cx))
            .child(self.render_text_row(FormField::Location, cx))
            .child(self.render_text_row(FormField::Size, cx))
            .child(self.render_status_row(cx));

        let right = v_flex()
            .flex_1()
            .gap_2()
            .child(self.render_text_row(FormField::Rent, cx))
            .child(self.render_text_row(FormField::SellingPrice, cx))
            .child(self.render_text_row(FormField::OwnerId, cx));

        v_flex()
            .w_full()
            .p_3()
            .gap_2()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .on_action(cx.listener(|this, action: &StatusAction, _window, cx| {
                this.status = (*action).into();
                cx.notify();
            }))
            .child(
                Label::new(i18n_units(cx, "form_title"))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(h_flex().w_full().gap_4().items_start().child(left).child(right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_action_mapping_is_symmetric() {
        for &status in UnitStatus::all() {
            assert_eq!(UnitStatus::from(status_action(status)), status);
        }
    }
}
