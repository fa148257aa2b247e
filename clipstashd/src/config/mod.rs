mod desktop_notification;
mod error;
mod grpc;
mod paste;
mod watcher;

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use directories::BaseDirs;
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::error::Error;
use self::{
    desktop_notification::DesktopNotificationConfig, grpc::GrpcConfig, paste::PasteConfig,
    watcher::WatcherConfig,
};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub daemonize: bool,

    #[serde(default = "Config::default_pid_file_path")]
    pub pid_file: PathBuf,

    #[serde(default = "Config::default_max_history")]
    pub max_history: usize,

    #[serde(default = "Config::default_history_file_path")]
    pub history_file_path: PathBuf,

    #[serde(default = "Config::default_favorites_file_path")]
    pub favorites_file_path: PathBuf,

    #[serde(default = "Config::default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default = "Config::default_echo_timeout_ms")]
    pub echo_timeout_ms: u64,

    #[serde(default)]
    pub log: clipstash_cli::config::LogConfig,

    #[serde(default)]
    pub watcher: WatcherConfig,

    #[serde(default)]
    pub grpc: GrpcConfig,

    #[serde(default)]
    pub paste: PasteConfig,

    #[serde(default)]
    pub desktop_notification: DesktopNotificationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daemonize: true,
            pid_file: Self::default_pid_file_path(),
            max_history: Self::default_max_history(),
            history_file_path: Self::default_history_file_path(),
            favorites_file_path: Self::default_favorites_file_path(),
            poll_interval_ms: Self::default_poll_interval_ms(),
            echo_timeout_ms: Self::default_echo_timeout_ms(),
            log: clipstash_cli::config::LogConfig::default(),
            watcher: WatcherConfig::default(),
            grpc: GrpcConfig::default(),
            paste: PasteConfig::default(),
            desktop_notification: DesktopNotificationConfig::default(),
        }
    }
}

impl Config {
    #[inline]
    pub fn search_config_file_path() -> PathBuf { Self::default_path() }

    #[inline]
    pub fn default_path() -> PathBuf {
        [
            clipstash_base::PROJECT_CONFIG_DIR.to_path_buf(),
            PathBuf::from(clipstash_base::DAEMON_CONFIG_NAME),
        ]
        .into_iter()
        .collect()
    }

    #[inline]
    pub fn default_history_file_path() -> PathBuf {
        let base_dirs = BaseDirs::new().expect("`BaseDirs::new` always success");
        [
            PathBuf::from(base_dirs.cache_dir()),
            PathBuf::from(clipstash_base::PROJECT_NAME),
            PathBuf::from(clipstash_base::DAEMON_HISTORY_FILE_NAME),
        ]
        .into_iter()
        .collect()
    }

    #[inline]
    pub fn default_favorites_file_path() -> PathBuf {
        let base_dirs = BaseDirs::new().expect("`BaseDirs::new` always success");
        [
            PathBuf::from(base_dirs.data_dir()),
            PathBuf::from(clipstash_base::PROJECT_NAME),
            PathBuf::from("favorites"),
        ]
        .into_iter()
        .collect()
    }

    #[inline]
    pub const fn default_max_history() -> usize { 50 }

    #[inline]
    pub const fn default_poll_interval_ms() -> u64 { 500 }

    #[inline]
    pub const fn default_echo_timeout_ms() -> u64 { 500 }

    #[inline]
    pub fn default_pid_file_path() -> PathBuf {
        let base_dirs = BaseDirs::new().expect("`BaseDirs::new` always success");
        [
            base_dirs.runtime_dir().map_or_else(std::env::temp_dir, PathBuf::from),
            PathBuf::from(format!("{}.pid", clipstash_base::DAEMON_PROGRAM_NAME)),
        ]
        .into_iter()
        .collect()
    }

    #[inline]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut config: Self = {
            let data = std::fs::read_to_string(&path)
                .context(error::OpenConfigSnafu { filename: path.as_ref().to_path_buf() })?;

            toml::from_str(&data)
                .context(error::ParseConfigSnafu { filename: path.as_ref().to_path_buf() })?
        };

        config.log.file_path = match config.log.file_path.map(|path| resolve_path(&path)) {
            Some(Ok(path)) => Some(path),
            Some(Err(err)) => return Err(err),
            None => None,
        };

        config.max_history =
            if config.max_history == 0 { Self::default_max_history() } else { config.max_history };

        config.history_file_path = resolve_path(&config.history_file_path)?;
        config.favorites_file_path = resolve_path(&config.favorites_file_path)?;

        Ok(config)
    }
}

impl From<Config> for clipstash_server::Config {
    fn from(
        Config {
            max_history,
            history_file_path,
            favorites_file_path,
            poll_interval_ms,
            echo_timeout_ms,
            watcher,
            grpc,
            paste,
            desktop_notification,
            ..
        }: Config,
    ) -> Self {
        Self {
            grpc_listen_address: grpc.socket_address(),
            max_history,
            history_file_path,
            favorites_file_path,
            poll_interval: Duration::from_millis(poll_interval_ms),
            echo_timeout: Duration::from_millis(echo_timeout_ms),
            watcher: clipstash_server::ClipboardWatcherOptions::from(watcher),
            paste: clipstash_server::PasteConfig::from(paste),
            desktop_notification: clipstash_server::DesktopNotificationConfig::from(
                desktop_notification,
            ),
        }
    }
}

fn resolve_path<P>(path: P) -> Result<PathBuf, Error>
where
    P: AsRef<Path>,
{
    path.as_ref()
        .try_resolve()
        .map(|path| path.to_path_buf())
        .with_context(|_| error::ResolveFilePathSnafu { file_path: path.as_ref().to_path_buf() })
}
