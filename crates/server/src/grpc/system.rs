use std::sync::Arc;

use clipstash_proto as proto;
use lazy_static::lazy_static;
use tokio::task;
use tonic::{Request, Response, Status};

use crate::autostart::Autostart;

lazy_static! {
    static ref GET_SYSTEM_VERSION_RESPONSE: proto::GetSystemVersionResponse =
        proto::GetSystemVersionResponse {
            major: clipstash_base::PROJECT_SEMVER.major,
            minor: clipstash_base::PROJECT_SEMVER.minor,
            patch: clipstash_base::PROJECT_SEMVER.patch
        };
}

pub struct SystemService {
    autostart: Arc<dyn Autostart>,
}

impl SystemService {
    #[inline]
    pub fn new(autostart: Arc<dyn Autostart>) -> Self { Self { autostart } }

    async fn autostart_state(&self) -> bool {
        let autostart = self.autostart.clone();
        task::spawn_blocking(move || autostart.is_enabled())
            .await
            .unwrap_or(Ok(false))
            .unwrap_or_else(|err| {
                tracing::warn!("Could not query autostart state, error: {err}");
                false
            })
    }
}

#[tonic::async_trait]
impl proto::System for SystemService {
    async fn get_system_version(
        &self,
        _request: Request<proto::GetSystemVersionRequest>,
    ) -> Result<Response<proto::GetSystemVersionResponse>, Status> {
        Ok(Response::new(GET_SYSTEM_VERSION_RESPONSE.clone()))
    }

    async fn get_autostart_state(
        &self,
        _request: Request<proto::GetAutostartStateRequest>,
    ) -> Result<Response<proto::AutostartStateReply>, Status> {
        let enabled = self.autostart_state().await;
        Ok(Response::new(proto::AutostartStateReply { enabled }))
    }

    async fn enable_autostart(
        &self,
        _request: Request<proto::EnableAutostartRequest>,
    ) -> Result<Response<proto::AutostartStateReply>, Status> {
        let autostart = self.autostart.clone();
        if let Ok(Err(err)) = task::spawn_blocking(move || autostart.enable()).await {
            tracing::error!("Could not enable autostart, error: {err}");
            return Err(Status::internal(err.to_string()));
        }
        let enabled = self.autostart_state().await;
        Ok(Response::new(proto::AutostartStateReply { enabled }))
    }

    async fn disable_autostart(
        &self,
        _request: Request<proto::DisableAutostartRequest>,
    ) -> Result<Response<proto::AutostartStateReply>, Status> {
        let autostart = self.autostart.clone();
        if let Ok(Err(err)) = task::spawn_blocking(move || autostart.disable()).await {
            tracing::error!("Could not disable autostart, error: {err}");
            return Err(Status::internal(err.to_string()));
        }
        let enabled = self.autostart_state().await;
        Ok(Response::new(proto::AutostartStateReply { enabled }))
    }
}
