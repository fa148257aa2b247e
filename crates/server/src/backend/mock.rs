use async_trait::async_trait;
use clipstash_base::ClipboardContent;
use clipstash_clipboard::{ClipboardLoad, ClipboardStore, ClipboardSubscribe, MockClipboard};
use snafu::ResultExt;
use tokio::task;

use crate::backend::{error, Backend, Error, Result, Subscriber};

#[derive(Clone, Default, Debug)]
pub struct MockBackend(MockClipboard);

impl MockBackend {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn fail_next_operation(&self) { self.0.fail_next_operation(); }
}

#[async_trait]
impl Backend for MockBackend {
    #[inline]
    async fn load(&self, mime: Option<mime::Mime>) -> Result<ClipboardContent> {
        let clipboard = self.0.clone();
        task::spawn_blocking(move || match clipboard.load(mime) {
            Ok(data) => Ok(data),
            Err(clipstash_clipboard::Error::Empty) => Err(Error::EmptyClipboard),
            Err(source) => Err(Error::LoadDataFromClipboard { source }),
        })
        .await
        .context(error::SpawnBlockingTaskSnafu)?
    }

    #[inline]
    async fn store(&self, data: ClipboardContent) -> Result<()> {
        let clipboard = self.0.clone();
        task::spawn_blocking(move || clipboard.store(data))
            .await
            .context(error::SpawnBlockingTaskSnafu)?
            .context(error::StoreDataToClipboardSnafu)
    }

    #[inline]
    async fn clear(&self) -> Result<()> {
        let clipboard = self.0.clone();
        task::spawn_blocking(move || clipboard.clear())
            .await
            .context(error::SpawnBlockingTaskSnafu)?
            .context(error::ClearClipboardSnafu)
    }

    #[inline]
    fn subscribe(&self) -> Result<Subscriber> {
        self.0.subscribe().map(Subscriber::from).context(error::SubscribeClipboardSnafu)
    }
}
