use clipstash_proto as proto;
use tonic::{Request, Response, Status};

use crate::{notification, watcher::ClipboardWatcherToggle};

pub struct WatcherService<Notification> {
    toggle: ClipboardWatcherToggle<Notification>,
}

impl<Notification> WatcherService<Notification>
where
    Notification: notification::Notification,
{
    #[inline]
    pub fn new(toggle: ClipboardWatcherToggle<Notification>) -> Self { Self { toggle } }
}

#[tonic::async_trait]
impl<Notification> proto::Watcher for WatcherService<Notification>
where
    Notification: notification::Notification + 'static,
{
    async fn enable_watcher(
        &self,
        _request: Request<proto::EnableWatcherRequest>,
    ) -> Result<Response<proto::WatcherStateReply>, Status> {
        self.toggle.enable();
        Ok(Response::new(proto::WatcherStateReply { state: self.toggle.state().into() }))
    }

    async fn disable_watcher(
        &self,
        _request: Request<proto::DisableWatcherRequest>,
    ) -> Result<Response<proto::WatcherStateReply>, Status> {
        self.toggle.disable();
        Ok(Response::new(proto::WatcherStateReply { state: self.toggle.state().into() }))
    }

    async fn toggle_watcher(
        &self,
        _request: Request<proto::ToggleWatcherRequest>,
    ) -> Result<Response<proto::WatcherStateReply>, Status> {
        self.toggle.toggle();
        Ok(Response::new(proto::WatcherStateReply { state: self.toggle.state().into() }))
    }

    async fn get_watcher_state(
        &self,
        _request: Request<proto::GetWatcherStateRequest>,
    ) -> Result<Response<proto::WatcherStateReply>, Status> {
        Ok(Response::new(proto::WatcherStateReply { state: self.toggle.state().into() }))
    }
}
