use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{error}"))]
    Arboard { error: arboard::Error },

    #[snafu(display("Could not spawn clipboard polling thread, error: {source}"))]
    SpawnPollingThread { source: std::io::Error },

    #[snafu(display("Clipboard is empty"))]
    Empty,

    #[snafu(display("Primitive was poisoned"))]
    PrimitivePoisoned,

    #[snafu(display("Notifier is closed"))]
    NotifierClosed,

    #[snafu(display("Mock clipboard failure"))]
    Mocked,
}

impl From<arboard::Error> for Error {
    fn from(error: arboard::Error) -> Self { Self::Arboard { error } }
}
