use snafu::{Backtrace, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Error occurs while starting tonic server, error: {source}"))]
    StartTonicServer { source: tonic::transport::Error, backtrace: Backtrace },

    #[snafu(display("Could not create clipboard backend, error: {source}"))]
    CreateClipboardBackend { source: crate::backend::Error },

    #[snafu(display("Could not create HistoryManager, error: {source}"))]
    CreateHistoryManager { source: crate::history::Error },

    #[snafu(display("Could not create FavoritesManager, error: {source}"))]
    CreateFavoritesManager { source: crate::favorites::Error },

    #[snafu(display("Could not generate clip filter, error: {source}"))]
    GenerateClipFilter { source: crate::watcher::ClipboardWatcherOptionsError },

    #[snafu(display("Error occurs while serving clipboard watcher, error: {source}"))]
    ServeClipboardWatcher { source: crate::watcher::Error },
}
