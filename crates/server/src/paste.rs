use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use snafu::{ResultExt, Snafu};
use tokio::task;

pub const DEFAULT_FOCUS_DELAY: Duration = Duration::from_millis(320);

#[async_trait]
pub trait PasteInjector: Send + Sync {
    /// Sends the platform paste chord to the currently focused application.
    async fn inject(&self) -> Result<(), Error>;
}

/// Simulates the paste keystroke with `enigo`.
///
/// The focus delay gives the window manager time to hand focus back to the
/// application the user was working in before the paste lands.
pub struct EnigoPasteInjector {
    focus_delay: Duration,
}

impl Default for EnigoPasteInjector {
    fn default() -> Self { Self::new(DEFAULT_FOCUS_DELAY) }
}

impl EnigoPasteInjector {
    #[must_use]
    pub const fn new(focus_delay: Duration) -> Self { Self { focus_delay } }
}

#[async_trait]
impl PasteInjector for EnigoPasteInjector {
    async fn inject(&self) -> Result<(), Error> {
        tokio::time::sleep(self.focus_delay).await;

        task::spawn_blocking(|| {
            let mut enigo =
                Enigo::new(&Settings::default()).context(InitializeKeyboardSnafu)?;

            #[cfg(target_os = "macos")]
            let modifier = Key::Meta;
            #[cfg(not(target_os = "macos"))]
            let modifier = Key::Control;

            enigo.key(modifier, Direction::Press).context(SendKeystrokeSnafu)?;
            let result = enigo.key(Key::Unicode('v'), Direction::Click);
            drop(enigo.key(modifier, Direction::Release));
            result.context(SendKeystrokeSnafu)
        })
        .await
        .context(JoinTaskSnafu)?
    }
}

#[derive(Clone, Debug, Default)]
pub struct MockPasteInjector {
    injection_count: std::sync::Arc<AtomicUsize>,
}

impl MockPasteInjector {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn injection_count(&self) -> usize { self.injection_count.load(Ordering::Acquire) }
}

#[async_trait]
impl PasteInjector for MockPasteInjector {
    async fn inject(&self) -> Result<(), Error> {
        let _count = self.injection_count.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not join spawned task, error: {source}"))]
    JoinTask { source: tokio::task::JoinError },

    #[snafu(display("Could not initialize virtual keyboard, error: {source}"))]
    InitializeKeyboard { source: enigo::NewConError },

    #[snafu(display("Could not send keystroke, error: {source}"))]
    SendKeystroke { source: enigo::InputError },
}

#[cfg(test)]
mod tests {
    use super::{MockPasteInjector, PasteInjector};

    #[tokio::test]
    async fn mock_counts_injections() {
        let injector = MockPasteInjector::new();
        assert_eq!(injector.injection_count(), 0);
        injector.inject().await.unwrap();
        injector.inject().await.unwrap();
        assert_eq!(injector.injection_count(), 2);
    }
}
