use crate::config::NavConfig;

// whether the nav bar should switch to its compact "scrolled" styling
pub fn is_scrolled(config: &NavConfig, scroll_y: f64) -> bool {
    scroll_y > config.scrolled_threshold
}

// where to scroll so an anchor target lands just below the fixed header
pub fn anchor_scroll_target(config: &NavConfig, element_top: f64) -> f64 {
    (element_top - config.anchor_offset).max(0.0)
}

// the fragment an in-page link points at, e.g. "/#contact" -> "contact"
pub fn anchor_fragment(href: &str) -> Option<&str> {
    let (_, fragment) = href.split_once('#')?;

    (!fragment.is_empty()).then_some(fragment)
}

// nav links are highlighted when they point at the page being shown
//
// trailing slashes are ignored so "/about/" and "/about" match, and an empty
// path is treated as the landing page
pub fn is_active_link(current_path: &str, link_path: &str) -> bool {
    fn normalize(path: &str) -> &str {
        match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        }
    }

    normalize(current_path) == normalize(link_path)
}

#[cfg(test)]
#[path = "tests/nav_tests.rs"]
mod tests;
