use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, RwLock,
};

use clipstash_base::ClipboardContent;

use crate::{
    pubsub::{self, Publisher, Subscriber},
    ClipboardLoad, ClipboardStore, ClipboardSubscribe, Error,
};

/// Clipboard double for failure-path tests. Behaves like `LocalClipboard`
/// until `fail_next` is raised, then every operation returns `Error::Mocked`
/// once.
#[derive(Clone, Debug)]
pub struct Clipboard {
    data: Arc<RwLock<Option<ClipboardContent>>>,
    fail_next: Arc<AtomicBool>,
    publisher: Arc<Publisher>,
    subscriber: Subscriber,
}

impl Default for Clipboard {
    fn default() -> Self {
        let (publisher, subscriber) = pubsub::new();
        Self {
            data: Arc::default(),
            fail_next: Arc::new(AtomicBool::new(false)),
            publisher: Arc::new(publisher),
            subscriber,
        }
    }
}

impl Clipboard {
    #[inline]
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn fail_next_operation(&self) { self.fail_next.store(true, Ordering::Release); }

    fn check_failure(&self) -> Result<(), Error> {
        if self.fail_next.swap(false, Ordering::AcqRel) {
            Err(Error::Mocked)
        } else {
            Ok(())
        }
    }
}

impl ClipboardSubscribe for Clipboard {
    type Subscriber = Subscriber;

    fn subscribe(&self) -> Result<Subscriber, Error> {
        self.check_failure()?;
        Ok(self.subscriber.clone())
    }
}

impl ClipboardLoad for Clipboard {
    fn load(&self, mime: Option<mime::Mime>) -> Result<ClipboardContent, Error> {
        self.check_failure()?;
        let content = self
            .data
            .read()
            .map_err(|_| Error::PrimitivePoisoned)?
            .as_ref()
            .cloned()
            .ok_or(Error::Empty)?;
        if let Some(mime) = mime {
            (content.mime() == mime).then_some(content).ok_or(Error::Empty)
        } else {
            Ok(content)
        }
    }
}

impl ClipboardStore for Clipboard {
    #[inline]
    fn store(&self, content: ClipboardContent) -> Result<(), Error> {
        self.check_failure()?;
        let mime = content.mime();
        match self.data.write() {
            Ok(mut data) => {
                *data = Some(content);
                self.publisher.notify_all(mime);
                Ok(())
            }
            Err(_err) => Err(Error::PrimitivePoisoned),
        }
    }

    fn clear(&self) -> Result<(), Error> {
        self.check_failure()?;
        match self.data.write() {
            Ok(mut data) => {
                *data = None;
                Ok(())
            }
            Err(_err) => Err(Error::PrimitivePoisoned),
        }
    }
}
