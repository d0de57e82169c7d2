use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use common::theme::{ThemeDocument, ThemePreference};

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const NAV_ID: &str = "site-nav";

const THEME_TRANSITION: &str = "background-color 0.3s ease, color 0.3s ease";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

// the <html> element, which carries the theme attribute that the css keys off
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeDocument for DocumentRoot {
    fn applied(&self) -> Option<ThemePreference> {
        document()?
            .document_element()?
            .get_attribute(THEME_ATTRIBUTE)?
            .parse()
            .ok()
    }

    fn apply(&self, theme: ThemePreference) {
        let Some(root) = document().and_then(|doc| doc.document_element()) else {
            warn!("no document element to apply theme to");
            return;
        };

        if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            warn!("failed to set {THEME_ATTRIBUTE}: {err:?}");
        }
    }

    fn ease_transition(&self) {
        if let Some(body) = document().and_then(|doc| doc.body()) {
            let _ = body.style().set_property("transition", THEME_TRANSITION);
        }
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

// flips the nav bar's "scrolled" class in place
//
// this runs from a raw scroll listener, outside of any component, so it
// works on the element directly instead of through a signal
pub fn set_nav_scrolled(scrolled: bool) {
    let Some(nav) = document().and_then(|doc| doc.get_element_by_id(NAV_ID)) else {
        return;
    };

    let _ = nav.class_list().toggle_with_force("scrolled", scrolled);
}

// the top of an element relative to the document, if it exists
pub fn element_top(id: &str) -> Option<f64> {
    let element = document()?.get_element_by_id(id)?;
    let element: HtmlElement = element.dyn_into().ok()?;

    Some(f64::from(element.offset_top()))
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);

    window.scroll_to_with_scroll_to_options(&options);
}
