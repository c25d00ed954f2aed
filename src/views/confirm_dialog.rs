//! Confirm Dialog
//!
//! A yes/no modal drawn over the window with a dimmed backdrop.

use crate::constants::CONFIRM_DIALOG_WIDTH;
use gpui::{App, ClickEvent, FontWeight, SharedString, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};
use std::rc::Rc;

type Handler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Confirmation dialog component
#[derive(IntoElement)]
pub struct ConfirmDialog {
    title: SharedString,
    message: SharedString,
    confirm_label: SharedString,
    cancel_label: SharedString,
    on_confirm: Option<Handler>,
    on_cancel: Option<Handler>,
}

impl ConfirmDialog {
    /// Create a new dialog
    pub fn new(title: impl Into<SharedString>, message: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "Yes".into(),
            cancel_label: "No".into(),
            on_confirm: None,
            on_cancel: None,
        }
    }

    pub fn confirm_label(mut self, label: impl Into<SharedString>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn cancel_label(mut self, label: impl Into<SharedString>) -> Self {
        self.cancel_label = label.into();
        self
    }

    /// Set the confirm handler
    pub fn on_confirm(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_confirm = Some(Rc::new(handler));
        self
    }

    /// Set the cancel handler, also used for backdrop clicks
    pub fn on_cancel(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_cancel = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for ConfirmDialog {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let on_cancel = self.on_cancel;
        let on_cancel_button = on_cancel.clone();

        // Backdrop
        div()
            .id("confirm-backdrop")
            .absolute()
            .inset_0()
            .bg(gpui::rgba(0x00000088))
            .flex()
            .items_center()
            .justify_center()
            .when_some(on_cancel, |el, handler| {
                el.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
            })
            .child(
                // Dialog container; swallow clicks so they don't reach the backdrop
                v_flex()
                    .id("confirm-dialog")
                    .w(px(CONFIRM_DIALOG_WIDTH))
                    .bg(cx.theme().background)
                    .border_1()
                    .border_color(cx.theme().border)
                    .rounded_lg()
                    .shadow_lg()
                    .on_click(|_, _, cx| cx.stop_propagation())
                    // Header
                    .child(
                        h_flex()
                            .px_6()
                            .py_4()
                            .gap_2()
                            .items_center()
                            .border_b_1()
                            .border_color(cx.theme().border)
                            .child(Label::new(self.title).font_weight(FontWeight::SEMIBOLD)),
                    )
                    // Content
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .child(Label::new(self.message).text_sm()),
                    )
                    // Footer
                    .child(
                        h_flex()
                            .px_6()
                            .pb_4()
                            .gap_2()
                            .justify_end()
                            .child(
                                Button::new("confirm-no")
                                    .outline()
                                    .label(self.cancel_label)
                                    .when_some(on_cancel_button, |btn, handler| {
                                        btn.on_click(move |_, window, cx| handler(window, cx))
                                    }),
                            )
                            .child(
                                Button::new("confirm-yes")
                                    .danger()
                                    .label(self.confirm_label)
                                    .when_some(self.on_confirm, |btn, handler| {
                                        btn.on_click(move |_, window, cx| handler(window, cx))
                                    }),
                            ),
                    ),
            )
    }
}
