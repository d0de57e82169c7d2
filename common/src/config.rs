use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use api::mail::{EMAILJS_SEND_URL, MailRoute};

// site configuration
//
// every value has a default so that a partial (or empty) config document
// still produces a working site
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub contact: ContactConfig,
    pub notify: NotifyConfig,
    pub nav: NavConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    // local storage slot holding "light" or "dark"
    pub storage_key: String,

    // letter pressed together with ctrl (or cmd) to flip the theme
    pub shortcut_key: char,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            storage_key: String::from("theme"),
            shortcut_key: 'k',
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    // mail service account details
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,

    // where the mail service should be reached
    pub endpoint: String,

    // fixed destination for every contact form message
    pub recipient: String,

    // length of the scale feedback on the form after a successful send
    pub pulse_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            service_id: String::from("YOUR_SERVICE_ID"),
            template_id: String::from("YOUR_TEMPLATE_ID"),
            public_key: String::from("YOUR_PUBLIC_KEY"),
            endpoint: String::from(EMAILJS_SEND_URL),
            recipient: String::from("rajputrudra494@gmail.com"),
            pulse_ms: 200,
        }
    }
}

impl ContactConfig {
    pub fn route(&self) -> MailRoute {
        MailRoute {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            public_key: self.public_key.clone(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NotifyConfig {
    // delay between mounting a notification and starting its entrance
    pub enter_delay_ms: u32,

    // how long a notification stays fully visible
    pub dwell_ms: u32,

    // length of the exit transition, after which the element is removed
    pub exit_ms: u32,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        NotifyConfig {
            enter_delay_ms: 10,
            dwell_ms: 4000,
            exit_ms: 400,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    // scroll offset (px) past which the nav bar is styled as scrolled
    pub scrolled_threshold: f64,

    // height (px) of the fixed header, subtracted from anchor targets
    pub anchor_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            scrolled_threshold: 100.0,
            anchor_offset: 80.0,
        }
    }
}

// as with the server config, the site table lives under a [config] root so the
// file can grow other sections without touching this struct
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;

    debug!("successfully parsed site config");
    Ok(data.config)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
