use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ThemeConfig;

// structs and types

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

// durable key-value storage, i.e. window.localStorage
//
// values are stored raw, so a slot written by an older version of the site
// (a bare "light" or "dark") is still readable
pub trait PreferenceStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

// the document root carrying the theme attribute
pub trait ThemeDocument {
    // None if the attribute is missing or holds something we don't recognize
    fn applied(&self) -> Option<ThemePreference>;

    fn apply(&self, theme: ThemePreference);

    // cosmetic: lets the colour change fade rather than snap
    fn ease_transition(&self);
}

// ThemeController
//
// the document attribute is the source of truth for the current theme, and
// every change is written straight through to storage.  storage failures
// are logged and otherwise ignored: the page keeps the new theme for the rest
// of the session either way
pub struct ThemeController<P, D> {
    store: P,
    document: D,
    storage_key: String,
}

impl<P: PreferenceStore, D: ThemeDocument> ThemeController<P, D> {
    pub fn new(store: P, document: D, config: &ThemeConfig) -> Self {
        ThemeController {
            store,
            document,
            storage_key: config.storage_key.clone(),
        }
    }

    // run once at page load, before any interaction
    pub fn initialize(&self) -> ThemePreference {
        let theme = match self.store.load(&self.storage_key) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|err: UnknownTheme| {
                debug!("ignoring stored theme: {err}");
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(err) => {
                warn!("theme preference unavailable: {err:#}");
                ThemePreference::default()
            }
        };

        self.document.apply(theme);
        debug!(%theme, "applied initial theme");

        theme
    }

    pub fn toggle(&self) -> ThemePreference {
        let theme = self.document.applied().unwrap_or_default().toggled();

        self.document.apply(theme);
        self.document.ease_transition();

        if let Err(err) = self.store.save(&self.storage_key, theme.as_str()) {
            warn!("failed to persist theme preference: {err:#}");
        }

        info!(%theme, "toggled theme");
        theme
    }
}

// the keyboard binding for toggle(): ctrl (or cmd on macs) plus a letter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shortcut {
    key: char,
}

impl Shortcut {
    pub fn new(key: char) -> Self {
        Shortcut { key }
    }

    pub fn from_config(config: &ThemeConfig) -> Self {
        Shortcut::new(config.shortcut_key)
    }

    pub fn matches(&self, key: &str, ctrl: bool, meta: bool) -> bool {
        let mut chars = key.chars();

        (ctrl || meta) && chars.next() == Some(self.key) && chars.next().is_none()
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
