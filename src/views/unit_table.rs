//! Units Table
//!
//! The "Units List" group. Rows mirror `UnitsState::units` in order;
//! clicking a row selects it and fills the form.

use crate::constants::{TABLE_COLUMN_WEIGHTS, TABLE_ROW_HEIGHT};
use crate::domain::unit::{Unit, UnitStatus};
use crate::helpers::format_money;
use crate::states::{UnitsGlobalStore, UnitsState, i18n_units};
use gpui::{
    App, Context, Entity, FocusHandle, Hsla, SharedString, Subscription, Window, div, prelude::*, px, relative,
};
use gpui_component::{ActiveTheme, Colorize, h_flex, label::Label, v_flex};
use rust_i18n::t;

const COLUMN_KEYS: [&str; 7] = [
    "col_unit_id",
    "col_location",
    "col_size",
    "col_status",
    "col_rent",
    "col_price",
    "col_owner_id",
];

const STATUS_COLUMN: usize = 3;

/// Cell texts of one row, in column order
fn row_cells(unit: &Unit, status_label: SharedString) -> [SharedString; 7] {
    [
        unit.unit_id.clone().into(),
        unit.location.clone().into(),
        unit.size.to_string().into(),
        status_label,
        format_money(unit.rent).into(),
        format_money(unit.selling_price).into(),
        unit.owner_id.clone().into(),
    ]
}

fn column_width(index: usize) -> f32 {
    let total: f32 = TABLE_COLUMN_WEIGHTS.iter().sum();
    TABLE_COLUMN_WEIGHTS[index] / total
}

/// Units table view component
pub struct UnitTableView {
    units_state: Entity<UnitsState>,
    /// Focus target so arrow keys move the selection after a row click
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl UnitTableView {
    /// Create a new table view
    pub fn new(units_state: Entity<UnitsState>, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let subscriptions = vec![cx.observe(&units_state, |_this, _model, cx| {
            cx.notify();
        })];

        Self {
            units_state,
            focus_handle: cx.focus_handle(),
            _subscriptions: subscriptions,
        }
    }

    fn status_color(status: UnitStatus, cx: &App) -> Hsla {
        match status {
            UnitStatus::Available => cx.theme().success,
            UnitStatus::Rented => cx.theme().info,
            UnitStatus::Sold => cx.theme().muted_foreground,
        }
    }

    fn render_header(&self, cx: &App) -> impl IntoElement {
        h_flex()
            .w_full()
            .h(px(TABLE_ROW_HEIGHT))
            .px_2()
            .bg(cx.theme().secondary)
            .border_b_1()
            .border_color(cx.theme().border)
            .children(COLUMN_KEYS.iter().enumerate().map(|(index, key)| {
                div().w(relative(column_width(index))).child(
                    Label::new(i18n_units(cx, key))
                        .text_xs()
                        .text_color(cx.theme().muted_foreground),
                )
            }))
    }

    fn render_row(
        &self,
        index: usize,
        unit: &Unit,
        is_selected: bool,
        cx: &mut Context<Self>,
    ) -> gpui::Stateful<gpui::Div> {
        let unit_id = unit.unit_id.clone();
        let status_color = Self::status_color(unit.status, cx);
        let cells = row_cells(unit, i18n_units(cx, unit.status.i18n_key()));

        let bg = if is_selected {
            cx.theme().accent
        } else if index % 2 == 0 {
            if cx.theme().is_dark() {
                cx.theme().background.lighten(0.3)
            } else {
                cx.theme().background.darken(0.01)
            }
        } else {
            cx.theme().background
        };

        let text_color = if is_selected {
            cx.theme().accent_foreground
        } else {
            cx.theme().foreground
        };

        div()
            .id(("unit-row", index))
            .w_full()
            .h(px(TABLE_ROW_HEIGHT))
            .px_2()
            .flex()
            .items_center()
            .bg(bg)
            .cursor_pointer()
            .hover(|this| this.bg(cx.theme().accent.opacity(0.5)))
            .children(cells.into_iter().enumerate().map(|(column, text)| {
                let color = if column == STATUS_COLUMN && !is_selected {
                    status_color
                } else {
                    text_color
                };
                div()
                    .w(relative(column_width(column)))
                    .overflow_hidden()
                    .child(Label::new(text).text_sm().text_color(color).text_ellipsis())
            }))
            .on_click(cx.listener(move |this, _, window, cx| {
                window.focus(&this.focus_handle);
                let unit_id = unit_id.clone();
                this.units_state.update(cx, |state, cx| {
                    state.select_unit(Some(unit_id), cx);
                });
            }))
    }
}

impl Render for UnitTableView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = cx.global::<UnitsGlobalStore>().read(cx).locale().to_string();

        // Collect row data before mutable borrow
        let (units, selected): (Vec<Unit>, Option<String>) = {
            let state = self.units_state.read(cx);
            (
                state.units().to_vec(),
                state.selected_unit_id().map(str::to_string),
            )
        };

        let rows: Vec<_> = units
            .iter()
            .enumerate()
            .map(|(index, unit)| {
                let is_selected = selected.as_deref() == Some(unit.unit_id.as_str());
                self.render_row(index, unit, is_selected, cx)
            })
            .collect();

        let count_label = t!("units.count", count = units.len(), locale = &locale).to_string();

        v_flex()
            .track_focus(&self.focus_handle)
            .size_full()
            .p_3()
            .gap_2()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .justify_between()
                    .child(
                        Label::new(i18n_units(cx, "list_title"))
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        Label::new(count_label)
                            .text_xs()
                            .text_color(cx.theme().muted_foreground),
                    ),
            )
            .child(self.render_header(cx))
            .child(
                div()
                    .id("units-table-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .when(units.is_empty(), |this| {
                        this.child(
                            div().w_full().p_4().flex().justify_center().child(
                                Label::new(i18n_units(cx, "empty"))
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground),
                            ),
                        )
                    })
                    .children(rows),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_cells_format_money_and_absent_values() {
        let unit = Unit {
            unit_id: "unit101".to_string(),
            location: "Downtown".to_string(),
            size: 1200,
            status: UnitStatus::Rented,
            rent: Some(1234.5),
            selling_price: None,
            owner_id: "ownerA".to_string(),
        };

        let cells = row_cells(&unit, "Rented".into());
        let texts: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            texts,
            vec!["unit101", "Downtown", "1200", "Rented", "$1234.50", "N/A", "ownerA"]
        );
    }

    #[test]
    fn test_column_widths_fill_the_row() {
        let total: f32 = (0..COLUMN_KEYS.len()).map(column_width).sum();
        assert!((total - 1.0).abs() < 1e-5);
    }
}
