use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not spawn tokio task, error: {source}"))]
    SpawnBlockingTask { source: tokio::task::JoinError },

    #[snafu(display("Clipboard is empty"))]
    EmptyClipboard,

    #[snafu(display("Could not initialize clipboard, error: {source}"))]
    InitializeClipboard { source: clipstash_clipboard::Error },

    #[snafu(display("Could not clear clipboard, error: {source}"))]
    ClearClipboard { source: clipstash_clipboard::Error },

    #[snafu(display("Could not store data to clipboard, error: {source}"))]
    StoreDataToClipboard { source: clipstash_clipboard::Error },

    #[snafu(display("Could not load data from clipboard, error: {source}"))]
    LoadDataFromClipboard { source: clipstash_clipboard::Error },

    #[snafu(display("Could not subscribe clipboard, error: {source}"))]
    SubscribeClipboard { source: clipstash_clipboard::Error },
}
