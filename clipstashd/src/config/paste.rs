use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PasteConfig {
    #[serde(default = "PasteConfig::default_focus_delay_ms")]
    pub focus_delay_ms: u64,
}

impl PasteConfig {
    pub const fn default_focus_delay_ms() -> u64 { 320 }
}

impl Default for PasteConfig {
    fn default() -> Self { Self { focus_delay_ms: Self::default_focus_delay_ms() } }
}

impl From<PasteConfig> for clipstash_server::PasteConfig {
    fn from(PasteConfig { focus_delay_ms }: PasteConfig) -> Self {
        Self { focus_delay: Duration::from_millis(focus_delay_ms) }
    }
}
