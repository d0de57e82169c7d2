use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::browser::{dom::document, listener::Listener, site_config, theme_shortcut, themes};

// the button only flips the attribute on <html>; which icon shows is decided
// by the stylesheet from that attribute, so nothing here needs to re-render
#[component]
pub fn ThemeToggle() -> Element {
    let key = site_config().theme.shortcut_key.to_ascii_uppercase();

    rsx! {
        button {
            class: "theme-toggle",
            id: "themeToggle",
            r#type: "button",
            title: "Toggle theme (Ctrl+{key})",
            aria_label: "Toggle theme",
            onclick: move |_| {
                themes().toggle();
            },
            span { class: "theme-icon theme-icon-light", "☀" }
            span { class: "theme-icon theme-icon-dark", "☾" }
        }
    }
}

// ThemeShortcut
//
// installs the global keydown listener for the theme shortcut.  the browser's
// own binding for the combination (the search bar, for ctrl+k) is suppressed
#[component]
pub fn ThemeShortcut() -> Element {
    use_hook(|| {
        let shortcut = theme_shortcut();

        let listener = document().and_then(|doc| {
            Listener::new(doc, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };

                if shortcut.matches(&event.key(), event.ctrl_key(), event.meta_key()) {
                    event.prevent_default();
                    debug!("theme shortcut pressed");
                    themes().toggle();
                }
            })
        });

        Rc::new(listener)
    });

    rsx! {}
}
