mod error;

use std::path::{Path, PathBuf};

use clipstash_base::{ClipEntry, Folder};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use snafu::ResultExt;
use time::OffsetDateTime;

pub use self::error::Error;

#[derive(Debug, Default, Deserialize, Serialize)]
struct Snapshot {
    folders: Vec<Folder>,
    items: Vec<Item>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Item {
    id: u64,

    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,

    folder_id: Option<u64>,

    #[serde(flatten)]
    content: ItemContent,
}

// image payloads live as PNG sidecar files keyed by content digest, the
// snapshot only carries the digest
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "content")]
enum ItemContent {
    Text(String),
    Image { digest: String },
}

/// Persistent store for folders and pinned entries.
///
/// The snapshot is rewritten synchronously after every favorites mutation, so
/// a crash loses at most the mutation in flight.
pub struct FavoritesManager {
    file_path: PathBuf,
}

impl FavoritesManager {
    /// # Errors
    pub async fn new<P>(file_path: P) -> Result<Self, Error>
    where
        P: AsRef<Path> + Send,
    {
        let file_path = file_path.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&file_path)
            .await
            .context(error::CreateDirectorySnafu { file_path: file_path.clone() })?;
        Ok(Self { file_path })
    }

    #[inline]
    pub fn path(&self) -> &Path { &self.file_path }

    fn snapshot_file_path(&self) -> PathBuf {
        self.file_path.join(clipstash_base::DAEMON_FAVORITES_FILE_NAME)
    }

    fn image_dir_path(&self) -> PathBuf { self.file_path.join("images") }

    /// Loads folders and pinned entries. A missing snapshot is not an error,
    /// it is simply the first run.
    ///
    /// # Errors
    pub async fn load(&self) -> Result<(Vec<Folder>, Vec<ClipEntry>), Error> {
        let snapshot_file_path = self.snapshot_file_path();
        let image_dir_path = self.image_dir_path();

        tokio::task::spawn_blocking(move || {
            let content = match std::fs::read(&snapshot_file_path) {
                Ok(content) => content,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    return Ok((Vec::new(), Vec::new()));
                }
                Err(source) => {
                    return Err(Error::ReadFile { source, file_path: snapshot_file_path });
                }
            };

            let Snapshot { folders, items } = serde_json::from_slice(&content)
                .context(error::DeserializeSnapshotSnafu)?;

            let mut pinned = Vec::with_capacity(items.len());
            for Item { id, timestamp, folder_id, content } in items {
                let maybe_entry = match content {
                    ItemContent::Text(text) => {
                        ClipEntry::new(text.as_bytes(), &mime::TEXT_PLAIN_UTF_8, Some(timestamp))
                    }
                    ItemContent::Image { digest } => {
                        let file_path = image_file_path(&image_dir_path, &digest);
                        match std::fs::read(&file_path) {
                            Ok(bytes) => {
                                ClipEntry::new(&bytes, &mime::IMAGE_PNG, Some(timestamp))
                            }
                            Err(err) => {
                                tracing::warn!(
                                    "Could not read pinned image `{}`, skipping entry {id}, \
                                     error: {err}",
                                    file_path.display()
                                );
                                continue;
                            }
                        }
                    }
                };

                match maybe_entry {
                    Ok(mut entry) => {
                        entry.pin(folder_id);
                        pinned.push(entry);
                    }
                    Err(err) => {
                        tracing::warn!("Could not restore pinned entry {id}, error: {err}");
                    }
                }
            }

            Ok((folders, pinned))
        })
        .await
        .context(error::JoinTaskSnafu)?
    }

    /// # Errors
    pub async fn save(&self, folders: &[Folder], pinned: &[ClipEntry]) -> Result<(), Error> {
        let image_dir_path = self.image_dir_path();
        let mut referenced_images = Vec::new();
        let mut items = Vec::with_capacity(pinned.len());

        for entry in pinned {
            let content = if entry.is_utf8_string() {
                ItemContent::Text(entry.as_utf8_string())
            } else {
                let encoded = match entry.encoded() {
                    Ok(encoded) => encoded,
                    Err(err) => {
                        tracing::error!("Error occurs while encoding clip, error: {err}");
                        continue;
                    }
                };
                let digest = hex::encode(Sha256::digest(&encoded));
                let file_path = image_file_path(&image_dir_path, &digest);
                if !file_path.exists() {
                    tokio::fs::create_dir_all(&image_dir_path).await.context(
                        error::CreateDirectorySnafu { file_path: image_dir_path.clone() },
                    )?;
                    tokio::fs::write(&file_path, &encoded)
                        .await
                        .context(error::WriteFileSnafu { file_path: file_path.clone() })?;
                }
                referenced_images.push(file_path);
                ItemContent::Image { digest }
            };

            items.push(Item {
                id: entry.id(),
                timestamp: entry.timestamp(),
                folder_id: entry.folder_id(),
                content,
            });
        }

        let snapshot = Snapshot { folders: folders.to_vec(), items };
        let content =
            serde_json::to_vec_pretty(&snapshot).context(error::SerializeSnapshotSnafu)?;

        let snapshot_file_path = self.snapshot_file_path();
        tokio::fs::write(&snapshot_file_path, content)
            .await
            .context(error::WriteFileSnafu { file_path: snapshot_file_path })?;

        self.prune_images(&referenced_images).await;

        Ok(())
    }

    async fn prune_images(&self, referenced: &[PathBuf]) {
        let image_dir_path = self.image_dir_path();
        let Ok(mut entries) = tokio::fs::read_dir(&image_dir_path).await else {
            return;
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            let file_path = entry.path();
            if !referenced.contains(&file_path) {
                tracing::debug!("Remove image file `{}`", file_path.display());
                drop(tokio::fs::remove_file(file_path).await);
            }
        }
    }
}

#[inline]
fn image_file_path<P>(image_dir_path: P, digest: &str) -> PathBuf
where
    P: AsRef<Path>,
{
    image_dir_path.as_ref().join(format!("{digest}.png"))
}

#[cfg(test)]
mod tests {
    use clipstash_base::{ClipEntry, ClipboardContent, EntryKind, Folder};

    use super::FavoritesManager;

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "clipstash-favorites-{tag}-{pid}-{ts}",
            pid = std::process::id(),
            ts = time::OffsetDateTime::now_utc().unix_timestamp_nanos()
        ))
    }

    #[tokio::test]
    async fn missing_snapshot_is_empty() {
        let dir = temp_dir("empty");
        let manager = FavoritesManager::new(&dir).await.unwrap();
        let (folders, pinned) = manager.load().await.unwrap();
        assert!(folders.is_empty());
        assert!(pinned.is_empty());
        drop(tokio::fs::remove_dir_all(dir).await);
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let dir = temp_dir("roundtrip");
        let manager = FavoritesManager::new(&dir).await.unwrap();

        let folder = Folder::new("work");
        let mut entry = ClipEntry::from_string("pinned text");
        entry.pin(Some(folder.id));

        manager.save(&[folder.clone()], std::slice::from_ref(&entry)).await.unwrap();

        let (folders, pinned) = manager.load().await.unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].id, folder.id);
        assert_eq!(folders[0].name, "work");

        assert_eq!(pinned.len(), 1);
        assert_eq!(pinned[0].id(), entry.id());
        assert!(pinned[0].is_pinned());
        assert_eq!(pinned[0].folder_id(), Some(folder.id));

        drop(tokio::fs::remove_dir_all(dir).await);
    }

    #[tokio::test]
    async fn image_round_trip_writes_and_prunes_sidecar() {
        let dir = temp_dir("image");
        let manager = FavoritesManager::new(&dir).await.unwrap();

        let content =
            ClipboardContent::Image { width: 2, height: 2, bytes: vec![0xff; 2 * 2 * 4].into() };
        let mut entry = ClipEntry::from_clipboard_content(content, None);
        entry.pin(Some(7));

        manager.save(&[], std::slice::from_ref(&entry)).await.unwrap();

        let sidecars: Vec<_> = std::fs::read_dir(dir.join("images"))
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(sidecars.len(), 1);
        assert_eq!(sidecars[0].extension().and_then(std::ffi::OsStr::to_str), Some("png"));

        let (folders, pinned) = manager.load().await.unwrap();
        assert!(folders.is_empty());
        assert_eq!(pinned.len(), 1);
        assert_eq!(pinned[0].id(), entry.id());
        assert_eq!(pinned[0].kind(), EntryKind::Image);
        assert!(pinned[0].is_pinned());
        assert_eq!(pinned[0].folder_id(), Some(7));

        // unpinning the entry leaves its sidecar unreferenced
        manager.save(&[], &[]).await.unwrap();
        assert!(!sidecars[0].exists());

        drop(tokio::fs::remove_dir_all(dir).await);
    }
}
