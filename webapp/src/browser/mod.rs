use std::sync::LazyLock;

use tracing::error;

use common::{
    config::{SiteConfig, parse_config},
    theme::{Shortcut, ThemeController},
};

pub mod dom;
pub mod listener;
pub mod storage;
pub mod timer;

use dom::DocumentRoot;
use storage::LocalPrefs;

const SITE_TOML: &str = include_str!("../../site.toml");

// a broken config file should not take the whole site down, so we log it and
// carry on with the built-in defaults
static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(|| {
    parse_config(SITE_TOML).unwrap_or_else(|err| {
        error!("{err:#}, falling back to defaults");
        SiteConfig::default()
    })
});

pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

pub type Themes = ThemeController<LocalPrefs, DocumentRoot>;

// both halves are stateless handles onto the browser, so this is cheap enough
// to build wherever it is needed
pub fn themes() -> Themes {
    ThemeController::new(LocalPrefs, DocumentRoot, &site_config().theme)
}

pub fn theme_shortcut() -> Shortcut {
    Shortcut::from_config(&site_config().theme)
}
