use async_trait::async_trait;
use clipstash_base::{ClipEntryMetadata, Folder};
use clipstash_proto as proto;
use tonic::Request;

use crate::{
    error::{
        CreateFolderError, ListFoldersError, ListPinnedError, PinClipError, RemoveFolderError,
        RenameFolderError, UnpinClipError,
    },
    Client,
};

#[async_trait]
pub trait Favorites {
    async fn pin(&self, id: u64, folder_id: Option<u64>) -> Result<(), PinClipError>;

    async fn unpin(&self, id: u64) -> Result<(), UnpinClipError>;

    async fn create_folder(&self, name: &str) -> Result<Folder, CreateFolderError>;

    async fn rename_folder(&self, id: u64, name: &str) -> Result<bool, RenameFolderError>;

    async fn remove_folder(&self, id: u64) -> Result<bool, RemoveFolderError>;

    async fn list_folders(&self) -> Result<Vec<Folder>, ListFoldersError>;

    async fn list_pinned(
        &self,
        folder_id: Option<u64>,
        preview_length: usize,
    ) -> Result<Vec<ClipEntryMetadata>, ListPinnedError>;
}

#[async_trait]
impl Favorites for Client {
    async fn pin(&self, id: u64, folder_id: Option<u64>) -> Result<(), PinClipError> {
        let proto::PinResponse { ok } = proto::FavoritesClient::new(self.channel.clone())
            .pin(Request::new(proto::PinRequest { id, folder_id }))
            .await
            .map_err(|source| PinClipError::Status { source, id })?
            .into_inner();
        if ok {
            Ok(())
        } else {
            Err(PinClipError::NotFound { id })
        }
    }

    async fn unpin(&self, id: u64) -> Result<(), UnpinClipError> {
        let proto::UnpinResponse { ok } = proto::FavoritesClient::new(self.channel.clone())
            .unpin(Request::new(proto::UnpinRequest { id }))
            .await
            .map_err(|source| UnpinClipError::Status { source, id })?
            .into_inner();
        if ok {
            Ok(())
        } else {
            Err(UnpinClipError::NotFound { id })
        }
    }

    async fn create_folder(&self, name: &str) -> Result<Folder, CreateFolderError> {
        proto::FavoritesClient::new(self.channel.clone())
            .create_folder(Request::new(proto::CreateFolderRequest { name: name.to_owned() }))
            .await
            .map_err(|source| CreateFolderError::Status { source })?
            .into_inner()
            .folder
            .map_or_else(|| Err(CreateFolderError::Empty), |folder| Ok(folder.into()))
    }

    async fn rename_folder(&self, id: u64, name: &str) -> Result<bool, RenameFolderError> {
        let proto::RenameFolderResponse { ok } = proto::FavoritesClient::new(self.channel.clone())
            .rename_folder(Request::new(proto::RenameFolderRequest {
                id,
                name: name.to_owned(),
            }))
            .await
            .map_err(|source| RenameFolderError::Status { source, id })?
            .into_inner();
        Ok(ok)
    }

    async fn remove_folder(&self, id: u64) -> Result<bool, RemoveFolderError> {
        let proto::RemoveFolderResponse { ok } = proto::FavoritesClient::new(self.channel.clone())
            .remove_folder(Request::new(proto::RemoveFolderRequest { id }))
            .await
            .map_err(|source| RemoveFolderError::Status { source, id })?
            .into_inner();
        Ok(ok)
    }

    async fn list_folders(&self) -> Result<Vec<Folder>, ListFoldersError> {
        let mut folders: Vec<_> = proto::FavoritesClient::new(self.channel.clone())
            .list_folders(Request::new(proto::ListFoldersRequest {}))
            .await
            .map_err(|source| ListFoldersError::Status { source })?
            .into_inner()
            .folders
            .into_iter()
            .map(Folder::from)
            .collect();
        folders.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        Ok(folders)
    }

    async fn list_pinned(
        &self,
        folder_id: Option<u64>,
        preview_length: usize,
    ) -> Result<Vec<ClipEntryMetadata>, ListPinnedError> {
        let mut list: Vec<_> = proto::FavoritesClient::new(self.channel.clone())
            .list_pinned(Request::new(proto::ListPinnedRequest {
                folder_id,
                preview_length: u64::try_from(preview_length).unwrap_or(30),
            }))
            .await
            .map_err(|source| ListPinnedError::Status { source })?
            .into_inner()
            .metadata
            .into_iter()
            .map(ClipEntryMetadata::from)
            .collect();
        list.sort_unstable();
        Ok(list)
    }
}
