use snafu::Snafu;

use crate::backend;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not store content to clipboard, error: {source}"))]
    StoreClipboardContent { source: backend::Error },
}
