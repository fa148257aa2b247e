use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not subscribe clipboard backend, error: {source}"))]
    Subscribe { source: crate::backend::Error },

    #[snafu(display("Could not send clip entry"))]
    SendClipEntry,

    #[snafu(display("Subscriber is closed"))]
    SubscriberClosed,
}
