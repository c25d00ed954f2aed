//! Units Window
//!
//! Root view: title bar, form, action bar, notice bar, table, and the
//! delete confirmation overlay. Keyboard actions land here and are routed
//! to `UnitsState`.

use crate::assets::CustomIconName;
use crate::domain::unit::UnitStatus;
use crate::helpers::{
    ADD_KEYSTROKE, CLEAR_KEYSTROKE, REFRESH_KEYSTROKE, UnitAction, humanize_keystroke,
};
use crate::states::{
    LocaleAction, Notice, NotificationSeverity, ThemeAction, UnitsGlobalStore, UnitsState,
    i18n_common, i18n_units, save_app_state, update_app_state_and_save,
};
use crate::views::{ConfirmDialog, UnitFormView, UnitTableView, UnitsTitleBar};
use gpui::{App, Context, Entity, Hsla, SharedString, Subscription, Window, div, prelude::*};
use gpui_component::{
    ActiveTheme, IconName, Sizable, Theme, ThemeMode,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};
use tracing::{error, info};

/// Tooltip text: label followed by its shortcut
fn with_shortcut(label: SharedString, keystroke: &str) -> String {
    format!("{label} ({})", humanize_keystroke(keystroke))
}

/// Main window view
pub struct UnitsWindow {
    title_bar: Entity<UnitsTitleBar>,
    form: Entity<UnitFormView>,
    table: Entity<UnitTableView>,
    units_state: Entity<UnitsState>,
    _subscriptions: Vec<Subscription>,
}

impl UnitsWindow {
    /// Create the window content and load the table
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let units_state = cx.global::<UnitsGlobalStore>().units_state();

        let title_bar = cx.new(|cx| UnitsTitleBar::new(window, cx));
        let form = cx.new(|cx| UnitFormView::new(units_state.clone(), window, cx));
        let table = cx.new(|cx| UnitTableView::new(units_state.clone(), window, cx));

        let subscriptions = vec![cx.observe(&units_state, |_this, _model, cx| {
            cx.notify();
        })];

        // Remember the window size for the next launch
        window.on_window_should_close(cx, |window, cx| {
            let bounds = window.bounds();
            let store = cx.global::<UnitsGlobalStore>().clone();
            store.update(cx, |state, _| state.set_bounds(bounds));
            if let Err(e) = save_app_state(store.read(cx)) {
                error!(error = %e, "Failed to save window bounds");
            }
            true
        });

        units_state.update(cx, |state, cx| {
            state.load(cx);
            state.clear_form(cx);
        });

        Self {
            title_bar,
            form,
            table,
            units_state,
            _subscriptions: subscriptions,
        }
    }

    fn handle_unit_action(&mut self, action: &UnitAction, _window: &mut Window, cx: &mut Context<Self>) {
        let action = *action;
        match action {
            UnitAction::Add => {
                let form = self.form.read(cx).form(cx);
                self.units_state
                    .update(cx, |state, cx| state.add_unit(form, cx));
            }
            UnitAction::MarkRented | UnitAction::MarkSold => {
                let status = if action == UnitAction::MarkRented {
                    UnitStatus::Rented
                } else {
                    UnitStatus::Sold
                };
                self.units_state
                    .update(cx, |state, cx| state.mark_selected(status, cx));
            }
            UnitAction::Delete => {
                self.units_state
                    .update(cx, |state, cx| state.request_delete(cx));
            }
            UnitAction::Clear => {
                // Escape closes an open confirmation before it clears anything
                let confirming = self.units_state.read(cx).pending_delete().is_some();
                self.units_state.update(cx, |state, cx| {
                    if confirming {
                        state.cancel_delete(cx);
                    } else {
                        state.clear_form(cx);
                    }
                });
            }
            UnitAction::Refresh => {
                self.units_state.update(cx, |state, cx| state.refresh(cx));
            }
            UnitAction::SelectNext => {
                self.units_state.update(cx, |state, cx| state.select_next(cx));
            }
            UnitAction::SelectPrevious => {
                self.units_state
                    .update(cx, |state, cx| state.select_previous(cx));
            }
        }
    }

    fn handle_theme_action(&mut self, action: &ThemeAction, window: &mut Window, cx: &mut Context<Self>) {
        let mode = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };

        match mode {
            Some(mode) => Theme::change(mode, Some(window), cx),
            None => Theme::sync_system_appearance(Some(window), cx),
        }
        info!(theme = ?mode, "Theme changed");

        update_app_state_and_save(cx, "set_theme", move |state, _| {
            state.set_theme(mode);
        });
    }

    fn handle_locale_action(&mut self, action: &LocaleAction, _window: &mut Window, cx: &mut Context<Self>) {
        let locale = action.code();
        info!(locale, "Locale changed");

        update_app_state_and_save(cx, "set_locale", move |state, _| {
            state.set_locale(locale.to_string());
        });
    }

    fn render_action_bar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .w_full()
            .gap_2()
            .flex_wrap()
            .child(
                Button::new("add-unit")
                    .primary()
                    .icon(IconName::Plus)
                    .label(i18n_units(cx, "add"))
                    .tooltip(with_shortcut(i18n_units(cx, "add"), ADD_KEYSTROKE))
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.handle_unit_action(&UnitAction::Add, window, cx);
                    })),
            )
            .child(
                Button::new("mark-rented")
                    .outline()
                    .icon(CustomIconName::KeyRound)
                    .label(i18n_units(cx, "mark_rented"))
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.handle_unit_action(&UnitAction::MarkRented, window, cx);
                    })),
            )
            .child(
                Button::new("mark-sold")
                    .outline()
                    .icon(CustomIconName::BadgeDollar)
                    .label(i18n_units(cx, "mark_sold"))
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.handle_unit_action(&UnitAction::MarkSold, window, cx);
                    })),
            )
            .child(
                Button::new("delete-unit")
                    .danger()
                    .label(i18n_units(cx, "delete"))
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.handle_unit_action(&UnitAction::Delete, window, cx);
                    })),
            )
            .child(
                Button::new("clear-fields")
                    .ghost()
                    .label(i18n_units(cx, "clear"))
                    .tooltip(with_shortcut(i18n_units(cx, "clear"), CLEAR_KEYSTROKE))
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.handle_unit_action(&UnitAction::Clear, window, cx);
                    })),
            )
            .child(
                Button::new("refresh-units")
                    .ghost()
                    .label(i18n_units(cx, "refresh"))
                    .tooltip(with_shortcut(i18n_units(cx, "refresh"), REFRESH_KEYSTROKE))
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.handle_unit_action(&UnitAction::Refresh, window, cx);
                    })),
            )
    }

    fn severity_color(severity: NotificationSeverity, cx: &App) -> Hsla {
        match severity {
            NotificationSeverity::Info => cx.theme().info,
            NotificationSeverity::Success => cx.theme().success,
            NotificationSeverity::Warning => cx.theme().warning,
            NotificationSeverity::Error => cx.theme().danger,
        }
    }

    fn render_notice_bar(&self, notice: Notice, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let color = Self::severity_color(notice.severity, cx);

        h_flex()
            .w_full()
            .px_3()
            .py_1()
            .gap_2()
            .items_center()
            .rounded_md()
            .bg(color.opacity(0.15))
            .border_1()
            .border_color(color.opacity(0.5))
            .child(
                Label::new(notice.message)
                    .flex_1()
                    .text_sm()
                    .text_color(color),
            )
            .child(
                Button::new("dismiss-notice")
                    .ghost()
                    .xsmall()
                    .icon(IconName::Close)
                    .tooltip(i18n_common(cx, "dismiss"))
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.units_state
                            .update(cx, |state, cx| state.dismiss_notice(cx));
                    })),
            )
    }

    fn render_confirm_dialog(&self, prompt: String, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let confirm_state = self.units_state.clone();
        let cancel_state = self.units_state.clone();

        ConfirmDialog::new(i18n_common(cx, "confirm_delete_title"), prompt)
            .confirm_label(i18n_common(cx, "confirm_yes"))
            .cancel_label(i18n_common(cx, "confirm_no"))
            .on_confirm(move |_, cx| {
                confirm_state.update(cx, |state, cx| state.confirm_delete(cx));
            })
            .on_cancel(move |_, cx| {
                cancel_state.update(cx, |state, cx| state.cancel_delete(cx));
            })
    }
}

impl Render for UnitsWindow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (notice, prompt) = {
            let state = self.units_state.read(cx);
            (state.notice().cloned(), state.delete_prompt())
        };

        let notice_bar = notice.map(|notice| self.render_notice_bar(notice, cx));
        let confirm_dialog = prompt.map(|prompt| self.render_confirm_dialog(prompt, cx));

        div()
            .id("units-window")
            .relative()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .on_action(cx.listener(Self::handle_unit_action))
            .on_action(cx.listener(Self::handle_theme_action))
            .on_action(cx.listener(Self::handle_locale_action))
            .child(
                v_flex()
                    .size_full()
                    .child(self.title_bar.clone())
                    .child(
                        v_flex()
                            .flex_1()
                            .min_h_0()
                            .p_3()
                            .gap_3()
                            .child(self.form.clone())
                            .child(self.render_action_bar(cx))
                            .children(notice_bar)
                            .child(div().flex_1().min_h_0().child(self.table.clone())),
                    ),
            )
            .children(confirm_dialog)
    }
}
