use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use futures::{FutureExt, StreamExt};
use notify_rust::Notification as DesktopNotification;
use tokio::sync::mpsc;

use crate::notification::traits;

enum Event {
    DaemonStarted,
    HistoryCleared,
    WatcherEnabled,
    WatcherDisabled,
    EntryPinned,
    EntryUnpinned,
    Shutdown,
}

#[derive(Clone, Debug)]
pub struct Notification {
    event_sender: mpsc::UnboundedSender<Event>,
}

impl Notification {
    pub fn new<IconPath>(icon: IconPath, timeout: Duration) -> (Self, Worker)
    where
        IconPath: AsRef<Path>,
    {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();
        (
            Self { event_sender },
            Worker { event_receiver, icon: icon.as_ref().to_path_buf(), timeout },
        )
    }
}

impl traits::Notification for Notification {
    fn on_started(&self) { drop(self.event_sender.send(Event::DaemonStarted)); }

    fn on_history_cleared(&self) { drop(self.event_sender.send(Event::HistoryCleared)); }

    fn on_watcher_enabled(&self) { drop(self.event_sender.send(Event::WatcherEnabled)); }

    fn on_watcher_disabled(&self) { drop(self.event_sender.send(Event::WatcherDisabled)); }

    fn on_entry_pinned(&self) { drop(self.event_sender.send(Event::EntryPinned)); }

    fn on_entry_unpinned(&self) { drop(self.event_sender.send(Event::EntryUnpinned)); }
}

pub struct Worker {
    event_receiver: mpsc::UnboundedReceiver<Event>,

    icon: PathBuf,

    timeout: Duration,
}

impl Worker {
    #[allow(clippy::redundant_pub_crate)]
    pub async fn serve(self, shutdown_signal: sigfinn::Shutdown) {
        let mut shutdown_signal = shutdown_signal.into_stream();
        let Self { mut event_receiver, ref icon, timeout } = self;
        let pid = std::process::id();

        loop {
            let maybe_event = tokio::select! {
                event = event_receiver.recv().fuse() => event,
                _ = shutdown_signal.next() => Some(Event::Shutdown),
            };

            let mut prepare_to_shutdown = false;
            let body = match maybe_event {
                Some(Event::DaemonStarted) => format!("Daemon is running (PID: {pid})."),
                Some(Event::HistoryCleared) => "Clipboard history has been cleared.".to_string(),
                Some(Event::WatcherEnabled) => format!(
                    "{project} is watching clipboard.",
                    project = clipstash_base::PROJECT_NAME_WITH_INITIAL_CAPITAL
                ),
                Some(Event::WatcherDisabled) => format!(
                    "{project} is not watching clipboard.",
                    project = clipstash_base::PROJECT_NAME_WITH_INITIAL_CAPITAL
                ),
                Some(Event::EntryPinned) => "Entry is pinned as a favorite.".to_string(),
                Some(Event::EntryUnpinned) => "Entry is unpinned.".to_string(),
                Some(Event::Shutdown) | None => {
                    prepare_to_shutdown = true;
                    format!("Daemon is shutting down (PID: {pid}).")
                }
            };
            if let Err(err) = DesktopNotification::new()
                .summary(clipstash_base::NOTIFICATION_SUMMARY)
                .body(&body)
                .icon(&icon.display().to_string())
                .timeout(timeout)
                .show_async()
                .await
            {
                tracing::warn!("Could not send desktop notification, error: {err}");
            }

            if prepare_to_shutdown {
                break;
            }
        }
    }
}
