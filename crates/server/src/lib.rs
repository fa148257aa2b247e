mod autostart;
pub mod backend;
pub mod config;
mod echo;
mod error;
mod favorites;
mod grpc;
mod history;
mod manager;
mod notification;
mod paste;
mod watcher;

use std::{future::Future, net::SocketAddr, pin::Pin, sync::Arc};

use clipstash_proto::{FavoritesServer, ManagerServer, SystemServer, WatcherServer};
use futures::{FutureExt, StreamExt};
use sigfinn::{ExitStatus, Handle, LifecycleManager, Shutdown};
use snafu::ResultExt;
use tokio::sync::{broadcast::error::RecvError, Mutex};

pub use self::{
    config::{Config, DesktopNotificationConfig, PasteConfig},
    echo::EchoGuard,
    error::{Error, Result},
    watcher::ClipboardWatcherOptions,
};
use self::{
    autostart::{Autostart, DesktopAutostart, MockAutostart},
    favorites::FavoritesManager,
    history::HistoryManager,
    manager::ClipboardManager,
    notification::{DesktopNotification, Notification as _},
    paste::{EnigoPasteInjector, PasteInjector},
    watcher::{ClipboardWatcher, ClipboardWatcherToggle},
};

/// # Errors
///
/// This function will return an error if the server fails to start.
#[allow(clippy::too_many_lines)]
pub async fn serve_with_shutdown(
    Config {
        grpc_listen_address,
        max_history,
        history_file_path,
        favorites_file_path,
        poll_interval,
        echo_timeout,
        watcher: watcher_opts,
        paste: paste_config,
        desktop_notification,
    }: Config,
) -> Result<()> {
    let clipboard_backend =
        backend::new_shared(poll_interval).context(error::CreateClipboardBackendSnafu)?;

    let echo_guard = Arc::new(EchoGuard::new(echo_timeout));

    let (notification, notification_worker) =
        DesktopNotification::new(&desktop_notification.icon, desktop_notification.timeout);

    let favorites_manager = {
        tracing::info!(
            "Favorites file path: `{path}`",
            path = favorites_file_path.display()
        );
        Arc::new(
            FavoritesManager::new(&favorites_file_path)
                .await
                .context(error::CreateFavoritesManagerSnafu)?,
        )
    };

    let (clipboard_manager, history_manager) = {
        tracing::info!("History file path: `{path}`", path = history_file_path.display());
        let mut history_manager = HistoryManager::new(&history_file_path)
            .await
            .context(error::CreateHistoryManagerSnafu)?;

        tracing::info!("Load history from `{path}`", path = history_manager.path().display());
        let history_clips = history_manager
            .load()
            .await
            .map_err(|err| {
                tracing::error!(
                    "Could not load history, data might be corrupted, please remove `{path}`, \
                     error: {err}",
                    path = history_manager.path().display()
                );
            })
            .unwrap_or_default();
        let clip_count = history_clips.len();
        if clip_count > 0 {
            tracing::info!("{clip_count} clip(s) loaded");
        }

        let (folders, pinned) = favorites_manager.load().await.unwrap_or_else(|err| {
            tracing::error!("Could not load favorites, starting empty, error: {err}");
            (Vec::new(), Vec::new())
        });
        let pinned_count = pinned.len();
        if pinned_count > 0 {
            tracing::info!(
                "{pinned_count} pinned clip(s) and {folder_count} folder(s) loaded",
                folder_count = folders.len()
            );
        }

        tracing::info!("Initialize ClipboardManager with capacity {max_history}");
        let mut clipboard_manager = ClipboardManager::with_capacity(
            clipboard_backend.clone(),
            max_history,
            echo_guard.clone(),
            notification.clone(),
        );

        tracing::info!("Import {clip_count} clip(s) into ClipboardManager");
        clipboard_manager.import(&history_clips);
        clipboard_manager.import_favorites(folders, pinned);

        (Arc::new(Mutex::new(clipboard_manager)), history_manager)
    };

    let clip_filter = Arc::new(
        watcher_opts.generate_clip_filter().context(error::GenerateClipFilterSnafu)?,
    );

    let (clipboard_watcher, clipboard_watcher_worker) = ClipboardWatcher::new(
        clipboard_backend,
        watcher_opts,
        clip_filter,
        echo_guard,
        notification.clone(),
    );

    let paste_injector: Arc<dyn PasteInjector> =
        Arc::new(EnigoPasteInjector::new(paste_config.focus_delay));

    let autostart: Arc<dyn Autostart> = match DesktopAutostart::new() {
        Ok(autostart) => Arc::new(autostart),
        Err(err) => {
            tracing::warn!("Autostart control is unavailable, error: {err}");
            Arc::new(MockAutostart::new())
        }
    };

    let lifecycle_manager = LifecycleManager::<Error>::new();
    let handle = lifecycle_manager.handle();
    let _handle = lifecycle_manager
        .spawn(
            "gRPC server",
            create_grpc_server_future(
                grpc_listen_address,
                clipboard_watcher.get_toggle(),
                clipboard_manager.clone(),
                favorites_manager.clone(),
                paste_injector,
                autostart,
            ),
        )
        .spawn(
            "Clipboard watcher worker",
            create_clipboard_watcher_worker_future(clipboard_watcher_worker),
        )
        .spawn(
            "Clipboard worker",
            create_clipboard_worker_future(
                clipboard_watcher,
                clipboard_manager,
                history_manager,
                favorites_manager,
                handle,
            ),
        );
    let _handle = if desktop_notification.enable {
        lifecycle_manager
            .spawn("Desktop notification worker", create_notification_worker_future(
                notification_worker,
            ))
    } else {
        lifecycle_manager.handle()
    };

    notification.on_started();

    if let Ok(Err(err)) = lifecycle_manager.serve().await {
        tracing::error!("{err}");
        Err(err)
    } else {
        Ok(())
    }
}

fn create_grpc_server_future(
    listen_address: SocketAddr,
    watcher_toggle: ClipboardWatcherToggle<DesktopNotification>,
    clipboard_manager: Arc<Mutex<ClipboardManager<DesktopNotification>>>,
    favorites_manager: Arc<FavoritesManager>,
    paste_injector: Arc<dyn PasteInjector>,
    autostart: Arc<dyn Autostart>,
) -> impl FnOnce(Shutdown) -> Pin<Box<dyn Future<Output = ExitStatus<Error>> + Send>> {
    move |signal| {
        async move {
            tracing::info!("Listen Clipstash gRPC endpoint on {listen_address}");

            let result = tonic::transport::Server::builder()
                .add_service(WatcherServer::new(grpc::WatcherService::new(watcher_toggle)))
                .add_service(ManagerServer::new(grpc::ManagerService::new(
                    clipboard_manager.clone(),
                    paste_injector,
                )))
                .add_service(FavoritesServer::new(grpc::FavoritesService::new(
                    clipboard_manager,
                    favorites_manager,
                )))
                .add_service(SystemServer::new(grpc::SystemService::new(autostart)))
                .serve_with_shutdown(listen_address, signal)
                .await
                .context(error::StartTonicServerSnafu);

            match result {
                Ok(()) => {
                    tracing::info!("gRPC server is shut down gracefully");
                    ExitStatus::Success
                }
                Err(err) => ExitStatus::Failure(err),
            }
        }
        .boxed()
    }
}

fn create_clipboard_watcher_worker_future(
    worker: watcher::Worker,
) -> impl FnOnce(Shutdown) -> Pin<Box<dyn Future<Output = ExitStatus<Error>> + Send>> {
    move |shutdown_signal| {
        async move {
            match worker.serve(shutdown_signal).await.context(error::ServeClipboardWatcherSnafu)
            {
                Ok(()) => {
                    tracing::info!("Clipboard watcher worker is shut down gracefully");
                    ExitStatus::Success
                }
                Err(err) => ExitStatus::Failure(err),
            }
        }
        .boxed()
    }
}

fn create_notification_worker_future(
    worker: notification::DesktopNotificationWorker,
) -> impl FnOnce(Shutdown) -> Pin<Box<dyn Future<Output = ExitStatus<Error>> + Send>> {
    move |shutdown_signal| {
        async move {
            worker.serve(shutdown_signal).await;
            tracing::info!("Desktop notification worker is shut down gracefully");
            ExitStatus::Success
        }
        .boxed()
    }
}

fn create_clipboard_worker_future(
    clipboard_watcher: ClipboardWatcher<DesktopNotification>,
    clipboard_manager: Arc<Mutex<ClipboardManager<DesktopNotification>>>,
    history_manager: HistoryManager,
    favorites_manager: Arc<FavoritesManager>,
    handle: Handle<Error>,
) -> impl FnOnce(Shutdown) -> Pin<Box<dyn Future<Output = ExitStatus<Error>> + Send>> {
    move |shutdown_signal| {
        async move {
            match serve_worker(
                &clipboard_watcher,
                clipboard_manager,
                history_manager,
                favorites_manager,
                handle,
                shutdown_signal,
            )
            .await
            {
                Ok(()) => {
                    tracing::info!("Clipboard worker is shut down gracefully");
                    ExitStatus::Success
                }
                Err(err) => ExitStatus::Failure(err),
            }
        }
        .boxed()
    }
}

#[allow(clippy::redundant_pub_crate)]
async fn serve_worker(
    clipboard_watcher: &ClipboardWatcher<DesktopNotification>,
    clipboard_manager: Arc<Mutex<ClipboardManager<DesktopNotification>>>,
    mut history_manager: HistoryManager,
    favorites_manager: Arc<FavoritesManager>,
    handle: Handle<Error>,
    shutdown_signal: Shutdown,
) -> Result<()> {
    let mut shutdown_signal = shutdown_signal.into_stream();
    let mut clip_recv = clipboard_watcher.subscribe();

    loop {
        let maybe_clip = tokio::select! {
            clip = clip_recv.recv().fuse() => clip,
            _ = shutdown_signal.next() => break,
        };

        match maybe_clip {
            Ok(clip) => {
                tracing::info!(
                    "New clip: {kind} [{printable}]",
                    kind = clip.kind(),
                    printable = clip.printable_data(Some(30))
                );
                let _unused = clipboard_manager.lock().await.insert(clip.clone());
                let _unused = history_manager.put(&clip).await;
            }
            Err(RecvError::Closed) => {
                tracing::info!("ClipboardWatcher is closing, no further clip will be received");

                tracing::info!("Internal shutdown signal is sent");
                handle.shutdown();

                break;
            }
            Err(RecvError::Lagged(_)) => {}
        }
    }

    let (clips, folders, pinned, history_capacity) = {
        let manager = clipboard_manager.lock().await;
        (manager.export(), manager.list_folders(), manager.pinned(), manager.capacity())
    };

    {
        tracing::info!("Save history and shrink to capacity {history_capacity}");
        if let Err(err) = history_manager.save_and_shrink_to(&clips, history_capacity).await {
            tracing::warn!("Failed to save history, error: {err}");
        }
        tracing::info!("Clips are stored in `{path}`", path = history_manager.path().display());
    }

    {
        if let Err(err) = favorites_manager.save(&folders, &pinned).await {
            tracing::warn!("Failed to save favorites, error: {err}");
        }
        tracing::info!(
            "Favorites are stored in `{path}`",
            path = favorites_manager.path().display()
        );
    }

    Ok(())
}
