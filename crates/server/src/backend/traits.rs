use async_trait::async_trait;
use clipstash_base::ClipboardContent;

use crate::backend::{error::Result, Subscriber};

#[async_trait]
pub trait Backend: Sync + Send {
    async fn load(&self, mime: Option<mime::Mime>) -> Result<ClipboardContent>;

    async fn store(&self, data: ClipboardContent) -> Result<()>;

    async fn clear(&self) -> Result<()>;

    /// # Errors
    fn subscribe(&self) -> Result<Subscriber>;
}
