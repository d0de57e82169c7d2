use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::theme::PreferenceStore;

// gloo's LocalStorage::raw() throws if the browser has storage switched off
// (private windows, blocked cookies), so check for it before every access
fn local_storage_available() -> bool {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .is_some()
}

pub fn set_local_storage(key: &str, value: &str) -> anyhow::Result<()> {
    if !local_storage_available() {
        return Err(anyhow::Error::msg("local storage unavailable"));
    }

    LocalStorage::raw().set_item(key, value).map_err(|err| {
        console_error!(format!("Failed to set local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

pub fn get_local_storage(key: &str) -> anyhow::Result<Option<String>> {
    if !local_storage_available() {
        return Err(anyhow::Error::msg("local storage unavailable"));
    }

    LocalStorage::raw().get_item(key).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// values are stored raw: the theme slot holds a bare "light" or "dark", not json
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPrefs;

impl PreferenceStore for LocalPrefs {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        get_local_storage(key)
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        set_local_storage(key, value)
    }
}
