use async_trait::async_trait;
use clipstash_proto as proto;
use tonic::Request;

use crate::{
    error::{
        DisableAutostartError, EnableAutostartError, GetAutostartStateError,
        GetSystemVersionError,
    },
    Client,
};

#[async_trait]
pub trait System {
    async fn get_version(&self) -> Result<semver::Version, GetSystemVersionError>;

    async fn get_autostart_state(&self) -> Result<bool, GetAutostartStateError>;

    async fn enable_autostart(&self) -> Result<bool, EnableAutostartError>;

    async fn disable_autostart(&self) -> Result<bool, DisableAutostartError>;
}

#[async_trait]
impl System for Client {
    async fn get_version(&self) -> Result<semver::Version, GetSystemVersionError> {
        let proto::GetSystemVersionResponse { major, minor, patch } =
            proto::SystemClient::new(self.channel.clone())
                .get_system_version(Request::new(proto::GetSystemVersionRequest {}))
                .await
                .map_err(|source| GetSystemVersionError::Status { source })?
                .into_inner();
        Ok(semver::Version {
            major,
            minor,
            patch,
            pre: semver::Prerelease::EMPTY,
            build: semver::BuildMetadata::EMPTY,
        })
    }

    async fn get_autostart_state(&self) -> Result<bool, GetAutostartStateError> {
        let proto::AutostartStateReply { enabled } = proto::SystemClient::new(self.channel.clone())
            .get_autostart_state(Request::new(proto::GetAutostartStateRequest {}))
            .await
            .map_err(|source| GetAutostartStateError::Status { source })?
            .into_inner();
        Ok(enabled)
    }

    async fn enable_autostart(&self) -> Result<bool, EnableAutostartError> {
        let proto::AutostartStateReply { enabled } = proto::SystemClient::new(self.channel.clone())
            .enable_autostart(Request::new(proto::EnableAutostartRequest {}))
            .await
            .map_err(|source| EnableAutostartError::Status { source })?
            .into_inner();
        Ok(enabled)
    }

    async fn disable_autostart(&self) -> Result<bool, DisableAutostartError> {
        let proto::AutostartStateReply { enabled } = proto::SystemClient::new(self.channel.clone())
            .disable_autostart(Request::new(proto::DisableAutostartRequest {}))
            .await
            .map_err(|source| DisableAutostartError::Status { source })?
            .into_inner();
        Ok(enabled)
    }
}
