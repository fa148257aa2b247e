use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use clipstash_base::ClipboardContent;
use clipstash_clipboard::{
    ClipboardLoad, ClipboardStore, ClipboardSubscribe, SystemClipboard,
};
use snafu::ResultExt;
use tokio::task;

use crate::backend::{error, Backend, Error, Result, Subscriber};

#[derive(Clone)]
pub struct SystemBackend {
    clipboard: Arc<SystemClipboard>,
}

impl SystemBackend {
    /// # Errors
    pub fn new(poll_interval: Duration) -> Result<Self> {
        let clipboard =
            SystemClipboard::new(poll_interval).context(error::InitializeClipboardSnafu)?;
        Ok(Self { clipboard: Arc::new(clipboard) })
    }
}

#[async_trait]
impl Backend for SystemBackend {
    #[inline]
    async fn load(&self, mime: Option<mime::Mime>) -> Result<ClipboardContent> {
        let clipboard = self.clipboard.clone();
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
        let clipboard = self.clipboard.clone();
        task::spawn_blocking(move || clipboard.store(data))
            .await
            .context(error::SpawnBlockingTaskSnafu)?
            .context(error::StoreDataToClipboardSnafu)
    }

    #[inline]
    async fn clear(&self) -> Result<()> {
        let clipboard = self.clipboard.clone();
        task::spawn_blocking(move || clipboard.clear())
            .await
            .context(error::SpawnBlockingTaskSnafu)?
            .context(error::ClearClipboardSnafu)
    }

    #[inline]
    fn subscribe(&self) -> Result<Subscriber> {
        self.clipboard
            .subscribe()
            .map(Subscriber::from)
            .context(error::SubscribeClipboardSnafu)
    }
}
