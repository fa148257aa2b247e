mod utils;
mod proto {
    // SAFETY: allow: prost
    #![allow(
        unreachable_pub,
        unused_qualifications,
        unused_results,
        clippy::default_trait_access,
        clippy::derive_partial_eq_without_eq,
        clippy::doc_markdown,
        clippy::future_not_send,
        clippy::large_enum_variant,
        clippy::missing_const_for_fn,
        clippy::missing_errors_doc,
        clippy::must_use_candidate,
        clippy::return_self_not_must_use,
        clippy::similar_names,
        clippy::too_many_lines,
        clippy::use_self,
        clippy::wildcard_imports
    )]

    tonic::include_proto!("clipstash");
}

use std::str::FromStr;

use time::OffsetDateTime;

pub use self::proto::{
    favorites_client::FavoritesClient,
    favorites_server::{Favorites, FavoritesServer},
    manager_client::ManagerClient,
    manager_server::{Manager, ManagerServer},
    system_client::SystemClient,
    system_server::{System, SystemServer},
    watcher_client::WatcherClient,
    watcher_server::{Watcher, WatcherServer},
    AutostartStateReply, BatchRemoveRequest, BatchRemoveResponse, ClearRequest, ClearResponse,
    ClipEntry, ClipEntryMetadata, CreateFolderRequest, CreateFolderResponse,
    DisableAutostartRequest, DisableWatcherRequest, EnableAutostartRequest, EnableWatcherRequest,
    EntryKind, Folder, GetAutostartStateRequest, GetCurrentClipRequest, GetCurrentClipResponse,
    GetRequest, GetResponse, GetSystemVersionRequest, GetSystemVersionResponse,
    GetWatcherStateRequest, InsertRequest, InsertResponse, LengthRequest, LengthResponse,
    ListFoldersRequest, ListFoldersResponse, ListPinnedRequest, ListPinnedResponse, ListRequest,
    ListResponse, MarkRequest, MarkResponse, PasteRequest, PasteResponse, PinRequest, PinResponse,
    RemoveFolderRequest, RemoveFolderResponse, RemoveRequest, RemoveResponse, RenameFolderRequest,
    RenameFolderResponse, ToggleWatcherRequest, UnpinRequest, UnpinResponse, UpdateRequest,
    UpdateResponse, WatcherState, WatcherStateReply,
};

impl From<EntryKind> for clipstash_base::EntryKind {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Text => Self::Text,
            EntryKind::Image => Self::Image,
        }
    }
}

impl From<clipstash_base::EntryKind> for EntryKind {
    fn from(kind: clipstash_base::EntryKind) -> Self {
        match kind {
            clipstash_base::EntryKind::Text => Self::Text,
            clipstash_base::EntryKind::Image => Self::Image,
        }
    }
}

impl From<clipstash_base::ClipEntry> for ClipEntry {
    fn from(entry: clipstash_base::ClipEntry) -> Self {
        let mime = entry.mime().essence_str().to_owned();
        let data = entry.encoded().unwrap_or_default();
        let id = entry.id();
        let kind = entry.kind();
        let timestamp = utils::datetime_to_timestamp(&entry.timestamp());

        Self {
            id,
            data,
            kind: kind.into(),
            mime,
            timestamp: Some(timestamp),
            pinned: entry.is_pinned(),
            folder_id: entry.folder_id(),
        }
    }
}

impl From<ClipEntry> for clipstash_base::ClipEntry {
    fn from(
        ClipEntry { id: _, data, mime, kind: _, timestamp, pinned, folder_id }: ClipEntry,
    ) -> Self {
        let timestamp = timestamp.and_then(|ts| utils::timestamp_to_datetime(&ts).ok());
        let mime = mime::Mime::from_str(&mime).unwrap_or(mime::APPLICATION_OCTET_STREAM);
        let mut entry = Self::new(&data, &mime, timestamp).unwrap_or_default();
        if pinned {
            entry.pin(folder_id);
        }
        entry
    }
}

impl From<clipstash_base::ClipEntryMetadata> for ClipEntryMetadata {
    fn from(metadata: clipstash_base::ClipEntryMetadata) -> Self {
        let clipstash_base::ClipEntryMetadata {
            id,
            kind,
            timestamp,
            mime,
            pinned,
            folder_id,
            preview,
        } = metadata;
        let mime = mime.essence_str().to_owned();
        let timestamp = utils::datetime_to_timestamp(&timestamp);
        Self { id, preview, kind: kind.into(), mime, timestamp: Some(timestamp), pinned, folder_id }
    }
}

impl From<ClipEntryMetadata> for clipstash_base::ClipEntryMetadata {
    fn from(
        ClipEntryMetadata { id, mime, kind, timestamp, pinned, folder_id, preview }: ClipEntryMetadata,
    ) -> Self {
        let timestamp = timestamp
            .and_then(|ts| utils::timestamp_to_datetime(&ts).ok())
            .unwrap_or_else(OffsetDateTime::now_utc);
        let kind = clipstash_base::EntryKind::from(kind);
        let mime = mime::Mime::from_str(&mime).unwrap_or(mime::APPLICATION_OCTET_STREAM);
        Self { id, kind, timestamp, mime, pinned, folder_id, preview }
    }
}

impl From<clipstash_base::Folder> for Folder {
    fn from(folder: clipstash_base::Folder) -> Self {
        let clipstash_base::Folder { id, name, created_at } = folder;
        let created_at = utils::datetime_to_timestamp(&created_at);
        Self { id, name, created_at: Some(created_at) }
    }
}

impl From<Folder> for clipstash_base::Folder {
    fn from(Folder { id, name, created_at }: Folder) -> Self {
        let created_at = created_at
            .and_then(|ts| utils::timestamp_to_datetime(&ts).ok())
            .unwrap_or_else(OffsetDateTime::now_utc);
        Self { id, name, created_at }
    }
}

impl From<WatcherState> for clipstash_base::ClipboardWatcherState {
    fn from(state: WatcherState) -> Self {
        match state {
            WatcherState::Enabled => Self::Enabled,
            WatcherState::Disabled => Self::Disabled,
        }
    }
}

impl From<clipstash_base::ClipboardWatcherState> for WatcherState {
    fn from(val: clipstash_base::ClipboardWatcherState) -> Self {
        match val {
            clipstash_base::ClipboardWatcherState::Enabled => Self::Enabled,
            clipstash_base::ClipboardWatcherState::Disabled => Self::Disabled,
        }
    }
}
