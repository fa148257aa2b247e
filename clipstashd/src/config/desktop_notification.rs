use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DesktopNotificationConfig {
    #[serde(default = "DesktopNotificationConfig::default_enable")]
    pub enable: bool,

    #[serde(default = "DesktopNotificationConfig::default_icon")]
    pub icon: String,

    #[serde(default = "DesktopNotificationConfig::default_timeout_ms")]
    pub timeout_ms: u64,
}

impl DesktopNotificationConfig {
    pub const fn default_enable() -> bool { true }

    pub fn default_icon() -> String { String::from("accessories-clipboard") }

    pub const fn default_timeout_ms() -> u64 { 2000 }
}

impl Default for DesktopNotificationConfig {
    fn default() -> Self {
        Self {
            enable: Self::default_enable(),
            icon: Self::default_icon(),
            timeout_ms: Self::default_timeout_ms(),
        }
    }
}

impl From<DesktopNotificationConfig> for clipstash_server::DesktopNotificationConfig {
    fn from(DesktopNotificationConfig { enable, icon, timeout_ms }: DesktopNotificationConfig) -> Self {
        Self { enable, icon: PathBuf::from(icon), timeout: Duration::from_millis(timeout_ms) }
    }
}
