use std::sync::atomic::{AtomicBool, Ordering};

use auto_launch::{AutoLaunch, AutoLaunchBuilder};
use snafu::{ResultExt, Snafu};

pub trait Autostart: Send + Sync {
    /// # Errors
    fn is_enabled(&self) -> Result<bool, Error>;

    /// # Errors
    fn enable(&self) -> Result<(), Error>;

    /// # Errors
    fn disable(&self) -> Result<(), Error>;
}

/// Registers the daemon with the desktop session via `auto-launch`.
pub struct DesktopAutostart {
    inner: AutoLaunch,
}

impl DesktopAutostart {
    /// # Errors
    pub fn new() -> Result<Self, Error> {
        let app_path = std::env::current_exe().context(ResolveCurrentExecutableSnafu)?;
        let inner = AutoLaunchBuilder::new()
            .set_app_name(clipstash_base::DAEMON_PROGRAM_NAME)
            .set_app_path(&app_path.display().to_string())
            .build()
            .context(BuildAutoLaunchSnafu)?;
        Ok(Self { inner })
    }
}

impl Autostart for DesktopAutostart {
    fn is_enabled(&self) -> Result<bool, Error> {
        self.inner.is_enabled().context(QueryAutostartStateSnafu)
    }

    fn enable(&self) -> Result<(), Error> { self.inner.enable().context(UpdateAutostartSnafu) }

    fn disable(&self) -> Result<(), Error> { self.inner.disable().context(UpdateAutostartSnafu) }
}

#[derive(Debug, Default)]
pub struct MockAutostart {
    enabled: AtomicBool,
}

impl MockAutostart {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

impl Autostart for MockAutostart {
    fn is_enabled(&self) -> Result<bool, Error> { Ok(self.enabled.load(Ordering::Acquire)) }

    fn enable(&self) -> Result<(), Error> {
        self.enabled.store(true, Ordering::Release);
        Ok(())
    }

    fn disable(&self) -> Result<(), Error> {
        self.enabled.store(false, Ordering::Release);
        Ok(())
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not resolve current executable path, error: {source}"))]
    ResolveCurrentExecutable { source: std::io::Error },

    #[snafu(display("Could not build auto-launch entry, error: {source}"))]
    BuildAutoLaunch { source: auto_launch::Error },

    #[snafu(display("Could not query autostart state, error: {source}"))]
    QueryAutostartState { source: auto_launch::Error },

    #[snafu(display("Could not update autostart entry, error: {source}"))]
    UpdateAutostart { source: auto_launch::Error },
}

#[cfg(test)]
mod tests {
    use super::{Autostart, MockAutostart};

    #[test]
    fn mock_toggles_state() {
        let autostart = MockAutostart::new();
        assert!(!autostart.is_enabled().unwrap());
        autostart.enable().unwrap();
        assert!(autostart.is_enabled().unwrap());
        autostart.disable().unwrap();
        assert!(!autostart.is_enabled().unwrap());
    }
}
