pub mod error;
mod favorites;
mod manager;
mod system;
mod watcher;

use snafu::ResultExt;

pub use self::{
    error::{Error, Result},
    favorites::Favorites,
    manager::Manager,
    system::System,
    watcher::Watcher,
};

#[derive(Clone, Debug)]
pub struct Config {
    pub grpc_endpoint: http::Uri,
}

#[derive(Clone, Debug)]
pub struct Client {
    channel: tonic::transport::Channel,
}

impl Client {
    /// # Errors
    ///
    /// This function will return an error if the server is not connected.
    // SAFETY: it will never panic because `grpc_endpoint` is a valid URL
    #[allow(clippy::missing_panics_doc)]
    pub async fn new(Config { grpc_endpoint }: Config) -> Result<Self> {
        let channel = tonic::transport::Endpoint::from_shared(grpc_endpoint.to_string())
            .expect("`grpc_endpoint` is a valid URL; qed")
            .connect()
            .await
            .with_context(|_| error::ConnectToClipstashServerSnafu {
                endpoint: grpc_endpoint.clone(),
            })?;
        Ok(Self { channel })
    }
}
