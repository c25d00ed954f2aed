//! Title Bar Component
//!
//! Custom title bar with branding and the language / theme menu.

use crate::assets::CustomIconName;
use crate::states::{LocaleAction, ThemeAction, UnitsGlobalStore, i18n_common};
use gpui::{App, Context, Corner, Window, prelude::*};
use gpui_component::{
    Icon, IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct UnitsTitleBar;

impl UnitsTitleBar {
    /// Create a new title bar
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Render the settings dropdown menu
    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let store = cx.global::<UnitsGlobalStore>().read(cx);
        let (locale, theme) = (store.locale(), store.theme());

        menu
            // Language section
            .label(i18n_common(cx, "language"))
            .menu_with_check("中文", locale == "zh", Box::new(LocaleAction::Zh))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .separator()
            // Theme section
            .label(i18n_common(cx, "theme"))
            .menu_with_check(
                i18n_common(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_common(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
            .menu_with_check(
                i18n_common(cx, "system"),
                theme.is_none(),
                Box::new(ThemeAction::System),
            )
    }
}

impl Render for UnitsTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .gap_2()
                    .pl_4()
                    .child(Icon::from(CustomIconName::Building).small())
                    .child(Label::new(i18n_common(cx, "app_title")).text_sm()),
            )
            .child(
                h_flex().items_center().justify_end().px_2().mr_2().child(
                    Button::new("settings")
                        .tooltip(i18n_common(cx, "settings"))
                        .icon(IconName::Settings2)
                        .small()
                        .ghost()
                        .dropdown_menu(move |menu, window, cx| {
                            Self::render_settings_menu(menu, window, cx)
                        })
                        .anchor(Corner::TopRight),
                ),
            )
    }
}
