mod error;
mod local;
mod mock;
mod pubsub;
mod system;
mod traits;

pub use self::{
    error::Error,
    local::Clipboard as LocalClipboard,
    mock::Clipboard as MockClipboard,
    pubsub::Subscriber,
    system::Clipboard as SystemClipboard,
    traits::{
        Load as ClipboardLoad, LoadExt as ClipboardLoadExt, LoadWait as ClipboardLoadWait,
        Store as ClipboardStore, StoreExt as ClipboardStoreExt, Subscribe as ClipboardSubscribe,
        Wait as ClipboardWait,
    },
};
