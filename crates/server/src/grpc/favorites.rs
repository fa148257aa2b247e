use std::sync::Arc;

use clipstash_proto as proto;
use tokio::sync::Mutex;
use tonic::{Request, Response, Status};

use crate::{favorites::FavoritesManager, manager::ClipboardManager, notification};

pub struct FavoritesService<Notification> {
    manager: Arc<Mutex<ClipboardManager<Notification>>>,
    favorites: Arc<FavoritesManager>,
}

impl<Notification> FavoritesService<Notification>
where
    Notification: notification::Notification,
{
    pub fn new(
        manager: Arc<Mutex<ClipboardManager<Notification>>>,
        favorites: Arc<FavoritesManager>,
    ) -> Self {
        Self { manager, favorites }
    }

    // every favorites mutation is followed by a synchronous snapshot write
    async fn persist(&self) {
        let (folders, pinned) = {
            let manager = self.manager.lock().await;
            (manager.list_folders(), manager.pinned())
        };
        if let Err(err) = self.favorites.save(&folders, &pinned).await {
            tracing::error!("Could not save favorites, error: {err}");
        }
    }
}

#[tonic::async_trait]
impl<Notification> proto::Favorites for FavoritesService<Notification>
where
    Notification: notification::Notification + 'static,
{
    async fn pin(
        &self,
        request: Request<proto::PinRequest>,
    ) -> Result<Response<proto::PinResponse>, Status> {
        let proto::PinRequest { id, folder_id } = request.into_inner();
        let ok = {
            let mut manager = self.manager.lock().await;
            manager.pin(id, folder_id)
        };
        if ok {
            self.persist().await;
        }
        Ok(Response::new(proto::PinResponse { ok }))
    }

    async fn unpin(
        &self,
        request: Request<proto::UnpinRequest>,
    ) -> Result<Response<proto::UnpinResponse>, Status> {
        let proto::UnpinRequest { id } = request.into_inner();
        let ok = {
            let mut manager = self.manager.lock().await;
            manager.unpin(id)
        };
        if ok {
            self.persist().await;
        }
        Ok(Response::new(proto::UnpinResponse { ok }))
    }

    async fn create_folder(
        &self,
        request: Request<proto::CreateFolderRequest>,
    ) -> Result<Response<proto::CreateFolderResponse>, Status> {
        let proto::CreateFolderRequest { name } = request.into_inner();
        if name.is_empty() {
            return Ok(Response::new(proto::CreateFolderResponse { folder: None }));
        }

        let folder = {
            let mut manager = self.manager.lock().await;
            manager.create_folder(name)
        };
        self.persist().await;
        Ok(Response::new(proto::CreateFolderResponse { folder: Some(folder.into()) }))
    }

    async fn rename_folder(
        &self,
        request: Request<proto::RenameFolderRequest>,
    ) -> Result<Response<proto::RenameFolderResponse>, Status> {
        let proto::RenameFolderRequest { id, name } = request.into_inner();
        let ok = {
            let mut manager = self.manager.lock().await;
            !name.is_empty() && manager.rename_folder(id, name)
        };
        if ok {
            self.persist().await;
        }
        Ok(Response::new(proto::RenameFolderResponse { ok }))
    }

    async fn remove_folder(
        &self,
        request: Request<proto::RemoveFolderRequest>,
    ) -> Result<Response<proto::RemoveFolderResponse>, Status> {
        let proto::RemoveFolderRequest { id } = request.into_inner();
        let ok = {
            let mut manager = self.manager.lock().await;
            manager.remove_folder(id)
        };
        if ok {
            self.persist().await;
        }
        Ok(Response::new(proto::RemoveFolderResponse { ok }))
    }

    async fn list_folders(
        &self,
        _request: Request<proto::ListFoldersRequest>,
    ) -> Result<Response<proto::ListFoldersResponse>, Status> {
        let folders = {
            let manager = self.manager.lock().await;
            manager.list_folders().into_iter().map(proto::Folder::from).collect()
        };
        Ok(Response::new(proto::ListFoldersResponse { folders }))
    }

    async fn list_pinned(
        &self,
        request: Request<proto::ListPinnedRequest>,
    ) -> Result<Response<proto::ListPinnedResponse>, Status> {
        let proto::ListPinnedRequest { folder_id, preview_length } = request.into_inner();
        let metadata = {
            let manager = self.manager.lock().await;
            manager
                .list_pinned(folder_id, usize::try_from(preview_length).unwrap_or(30))
                .into_iter()
                .map(proto::ClipEntryMetadata::from)
                .collect()
        };
        Ok(Response::new(proto::ListPinnedResponse { metadata }))
    }
}
