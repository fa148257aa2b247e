use std::{net::SocketAddr, path::PathBuf, time::Duration};

use crate::ClipboardWatcherOptions;

#[derive(Clone, Debug)]
pub struct Config {
    pub grpc_listen_address: SocketAddr,

    pub max_history: usize,

    pub history_file_path: PathBuf,

    pub favorites_file_path: PathBuf,

    pub poll_interval: Duration,

    pub echo_timeout: Duration,

    pub watcher: ClipboardWatcherOptions,

    pub paste: PasteConfig,

    pub desktop_notification: DesktopNotificationConfig,
}

#[derive(Clone, Debug)]
pub struct PasteConfig {
    pub focus_delay: Duration,
}

impl Default for PasteConfig {
    fn default() -> Self { Self { focus_delay: crate::paste::DEFAULT_FOCUS_DELAY } }
}

#[derive(Clone, Debug)]
pub struct DesktopNotificationConfig {
    pub enable: bool,

    pub icon: PathBuf,

    pub timeout: Duration,
}

impl Default for DesktopNotificationConfig {
    fn default() -> Self {
        Self {
            enable: true,
            icon: PathBuf::from("accessories-clipboard"),
            timeout: Duration::from_millis(2000),
        }
    }
}
