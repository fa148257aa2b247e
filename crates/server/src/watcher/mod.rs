mod error;
mod options;
mod toggle;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use clipstash_base::{ClipEntry, ClipFilter, ClipboardContent};
use futures::{FutureExt, StreamExt};
use snafu::{OptionExt, ResultExt};
use tokio::sync::broadcast;

pub use self::{
    error::Error,
    options::{Error as ClipboardWatcherOptionsError, Options as ClipboardWatcherOptions},
    toggle::Toggle as ClipboardWatcherToggle,
};
use crate::{
    backend::{Backend, Error as BackendError},
    echo::EchoGuard,
    notification,
};

pub struct ClipboardWatcher<Notification> {
    is_watching: Arc<AtomicBool>,
    clip_sender: broadcast::Sender<ClipEntry>,
    notification: Notification,
}

impl<Notification> ClipboardWatcher<Notification>
where
    Notification: notification::Notification + Clone,
{
    pub fn new(
        backend: Arc<dyn Backend>,
        opts: ClipboardWatcherOptions,
        clip_filter: Arc<ClipFilter>,
        echo_guard: Arc<EchoGuard>,
        notification: Notification,
    ) -> (Self, Worker) {
        let (clip_sender, _event_receiver) = broadcast::channel(16);
        let is_watching = Arc::new(AtomicBool::new(true));
        let watcher = Self {
            is_watching: is_watching.clone(),
            clip_sender: clip_sender.clone(),
            notification,
        };
        let worker = Worker { backend, clip_sender, clip_filter, echo_guard, is_watching, opts };
        (watcher, worker)
    }

    #[inline]
    pub fn subscribe(&self) -> broadcast::Receiver<ClipEntry> { self.clip_sender.subscribe() }

    #[inline]
    pub fn get_toggle(&self) -> ClipboardWatcherToggle<Notification> {
        ClipboardWatcherToggle::new(self.is_watching.clone(), self.notification.clone())
    }
}

pub struct Worker {
    backend: Arc<dyn Backend>,
    clip_sender: broadcast::Sender<ClipEntry>,
    clip_filter: Arc<ClipFilter>,
    echo_guard: Arc<EchoGuard>,
    is_watching: Arc<AtomicBool>,
    opts: ClipboardWatcherOptions,
}

impl Worker {
    /// # Errors
    #[allow(clippy::redundant_pub_crate)]
    pub async fn serve(self, shutdown_signal: sigfinn::Shutdown) -> Result<(), Error> {
        let Self {
            backend,
            is_watching,
            clip_sender,
            clip_filter,
            echo_guard,
            opts: ClipboardWatcherOptions { load_current, .. },
        } = self;
        let mut subscriber = backend.subscribe().context(error::SubscribeSnafu)?;
        let mut shutdown_signal = shutdown_signal.into_stream();
        let mut current_content = ClipboardContent::default();

        if load_current {
            match backend.load(None).await {
                Ok(data) => {
                    if !clip_filter.filter_clipboard_content(&data) {
                        current_content = data.clone();
                        if let Err(_err) =
                            clip_sender.send(ClipEntry::from_clipboard_content(data, None))
                        {
                            tracing::info!("ClipEntry receiver is closed.");
                            return Err(Error::SendClipEntry);
                        }
                    }
                }
                Err(BackendError::EmptyClipboard) => {}
                Err(error) => {
                    tracing::error!("Failed to load clipboard, error: {error}");
                }
            }
        }

        loop {
            let maybe_event = tokio::select! {
                event = subscriber.next().fuse() => event,
                _ = shutdown_signal.next() => return Ok(()),
            };
            let mime = maybe_event.context(error::SubscriberClosedSnafu)?;
            if !is_watching.load(Ordering::Relaxed) || clip_filter.filter_by_mime_type(&mime) {
                continue;
            }

            match backend.load(Some(mime)).await {
                Ok(new_content)
                    if !clip_filter.filter_clipboard_content(&new_content)
                        && current_content != new_content =>
                {
                    current_content = new_content.clone();

                    // a self-initiated store comes back around through the
                    // OS clipboard, absorb it instead of reporting a copy
                    if echo_guard.try_absorb(current_content.id()) {
                        tracing::debug!("Clipboard event absorbed as a self-write");
                        continue;
                    }

                    let clip = ClipEntry::from_clipboard_content(new_content, None);
                    if let Err(_err) = clip_sender.send(clip) {
                        tracing::info!("ClipEntry receiver is closed.");
                        return Err(Error::SendClipEntry);
                    }
                }
                Ok(_) | Err(BackendError::EmptyClipboard) => {}
                Err(error) => {
                    tracing::error!("Failed to load clipboard, error: {error}");
                }
            }
        }
    }
}
