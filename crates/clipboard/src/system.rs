use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use bytes::Bytes;
use clipstash_base::{utils::RetryInterval, ClipboardContent};
use snafu::ResultExt;

use crate::{
    error::SpawnPollingThreadSnafu,
    pubsub::{self, Publisher, Subscriber},
    ClipboardLoad, ClipboardStore, ClipboardSubscribe, Error,
};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// System clipboard backed by `arboard`.
///
/// A background thread samples the OS clipboard on a fixed interval and
/// notifies subscribers when the content fingerprint changes.
pub struct Clipboard {
    is_running: Arc<AtomicBool>,
    publisher: Arc<Publisher>,
    subscriber: Subscriber,
}

impl Clipboard {
    /// # Errors
    pub fn new(poll_interval: Duration) -> Result<Self, Error> {
        // fail early when no clipboard is available on this session
        drop(arboard::Clipboard::new()?);

        let (publisher, subscriber) = pubsub::new();
        let publisher = Arc::new(publisher);
        let is_running = Arc::new(AtomicBool::new(true));

        let _join_handle = thread::Builder::new()
            .name("clipboard-poller".to_string())
            .spawn({
                let publisher = publisher.clone();
                let is_running = is_running.clone();
                move || poll_loop(&publisher, &is_running, poll_interval)
            })
            .context(SpawnPollingThreadSnafu)?;

        Ok(Self { is_running, publisher, subscriber })
    }
}

impl Drop for Clipboard {
    fn drop(&mut self) {
        self.is_running.store(false, Ordering::Release);
        self.publisher.close();
    }
}

impl ClipboardSubscribe for Clipboard {
    type Subscriber = Subscriber;

    fn subscribe(&self) -> Result<Self::Subscriber, Error> { Ok(self.subscriber.clone()) }
}

impl ClipboardLoad for Clipboard {
    fn load(&self, mime: Option<mime::Mime>) -> Result<ClipboardContent, Error> {
        let mut arboard = arboard::Clipboard::new()?;

        let want_text = mime.as_ref().map_or(true, |m| m.type_() == mime::TEXT);
        let want_image = mime.as_ref().map_or(true, |m| m.type_() == mime::IMAGE);

        if want_text {
            if let Ok(text) = arboard.get_text() {
                if !text.is_empty() {
                    return Ok(ClipboardContent::Plaintext(text));
                }
            }
        }

        if want_image {
            if let Ok(arboard::ImageData { width, height, bytes }) = arboard.get_image() {
                return Ok(ClipboardContent::Image {
                    width,
                    height,
                    bytes: Bytes::from(bytes.into_owned()),
                });
            }
        }

        Err(Error::Empty)
    }
}

impl ClipboardStore for Clipboard {
    fn store(&self, content: ClipboardContent) -> Result<(), Error> {
        let mut retry_interval = RetryInterval::default();
        loop {
            match try_store(&content) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    if let Some(interval) = retry_interval.next() {
                        tracing::warn!(
                            "Could not store content to system clipboard, retrying, error: {err}"
                        );
                        thread::sleep(interval);
                    } else {
                        return Err(err);
                    }
                }
            }
        }
    }

    fn clear(&self) -> Result<(), Error> {
        arboard::Clipboard::new()?.clear()?;
        Ok(())
    }
}

fn try_store(content: &ClipboardContent) -> Result<(), Error> {
    let mut arboard = arboard::Clipboard::new()?;
    match content {
        ClipboardContent::Plaintext(text) => arboard.set_text(text.clone())?,
        ClipboardContent::Image { width, height, bytes } => {
            arboard.set_image(arboard::ImageData {
                width: *width,
                height: *height,
                bytes: bytes.to_vec().into(),
            })?;
        }
    }
    Ok(())
}

fn poll_loop(publisher: &Publisher, is_running: &AtomicBool, poll_interval: Duration) {
    let mut last = read_fingerprint();

    while is_running.load(Ordering::Acquire) {
        thread::sleep(poll_interval);
        if !is_running.load(Ordering::Acquire) {
            break;
        }

        let current = read_fingerprint();
        if current != last {
            if let Some(mime) = current.mime() {
                publisher.notify_all(mime);
            }
            last = current;
        }
    }

    publisher.close();
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Fingerprint {
    Empty,
    Text(u64),
    Image(u64),
}

impl Fingerprint {
    const fn mime(&self) -> Option<mime::Mime> {
        match self {
            Self::Empty => None,
            Self::Text(_) => Some(mime::TEXT_PLAIN_UTF_8),
            Self::Image(_) => Some(mime::IMAGE_PNG),
        }
    }
}

fn read_fingerprint() -> Fingerprint {
    let Ok(mut arboard) = arboard::Clipboard::new() else {
        return Fingerprint::Empty;
    };

    if let Ok(text) = arboard.get_text() {
        if !text.is_empty() {
            let mut s = DefaultHasher::new();
            text.hash(&mut s);
            return Fingerprint::Text(s.finish());
        }
    }

    match arboard.get_image() {
        Ok(image) => Fingerprint::Image(sample_image(&image)),
        Err(_) => Fingerprint::Empty,
    }
}

// hashing whole images at poll frequency is too expensive, sample a few bytes
fn sample_image(image: &arboard::ImageData) -> u64 {
    let bytes = image.bytes.as_ref();
    let mut s = DefaultHasher::new();
    image.width.hash(&mut s);
    image.height.hash(&mut s);
    bytes.len().hash(&mut s);
    if !bytes.is_empty() {
        bytes[0].hash(&mut s);
        bytes[bytes.len() / 2].hash(&mut s);
        bytes[bytes.len() - 1].hash(&mut s);
    }
    s.finish()
}
