mod error;

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    sync::Arc,
};

use clipstash_base::{ClipEntry, ClipEntryMetadata, Folder};
use snafu::ResultExt;
use time::OffsetDateTime;

pub use self::error::Error;
use crate::{backend::Backend, echo::EchoGuard, notification};

const DEFAULT_CAPACITY: usize = 40;

pub struct ClipboardManager<Notification> {
    backend: Arc<dyn Backend>,

    capacity: usize,

    // use id of ClipEntry as the key
    clips: HashMap<u64, ClipEntry>,

    current_clip: Option<u64>,

    // use BTreeMap to store timestamps for remove the oldest clip
    timestamp_to_id: BTreeMap<OffsetDateTime, u64>,

    pinned_ids: HashSet<u64>,

    folders: HashMap<u64, Folder>,

    echo_guard: Arc<EchoGuard>,

    notification: Notification,
}

impl<Notification> ClipboardManager<Notification>
where
    Notification: notification::Notification,
{
    pub fn with_capacity(
        backend: Arc<dyn Backend>,
        capacity: usize,
        echo_guard: Arc<EchoGuard>,
        notification: Notification,
    ) -> Self {
        let capacity = if capacity == 0 { DEFAULT_CAPACITY } else { capacity };
        Self {
            backend,
            capacity,
            clips: HashMap::new(),
            current_clip: None,
            timestamp_to_id: BTreeMap::new(),
            pinned_ids: HashSet::new(),
            folders: HashMap::new(),
            echo_guard,
            notification,
        }
    }

    #[cfg(test)]
    #[inline]
    pub fn new(backend: Arc<dyn Backend>, notification: Notification) -> Self {
        Self::with_capacity(backend, DEFAULT_CAPACITY, Arc::new(EchoGuard::default()), notification)
    }

    #[inline]
    pub const fn capacity(&self) -> usize { self.capacity }

    #[inline]
    pub fn import(&mut self, clips: &[ClipEntry]) { self.import_iter(clips.iter()); }

    pub fn import_iter<'a>(&'a mut self, clips_iter: impl Iterator<Item = &'a ClipEntry>) {
        self.clips.clear();
        self.timestamp_to_id.clear();
        self.pinned_ids.clear();
        for clip in clips_iter {
            let (id, timestamp) = (clip.id(), clip.timestamp());
            let _ = self.timestamp_to_id.insert(timestamp, id);
            drop(self.clips.insert(id, clip.clone()));
        }

        self.remove_oldest();
    }

    /// Restores pinned entries and folders from the favorites store. Entries
    /// already carry their pinned state and folder assignment.
    pub fn import_favorites(&mut self, folders: Vec<Folder>, pinned: Vec<ClipEntry>) {
        for folder in folders {
            drop(self.folders.insert(folder.id, folder));
        }
        for clip in pinned {
            let (id, timestamp) = (clip.id(), clip.timestamp());
            let _ = self.timestamp_to_id.insert(timestamp, id);
            drop(self.clips.insert(id, clip));
            let _unused = self.pinned_ids.insert(id);
        }

        self.remove_oldest();
    }

    #[inline]
    pub fn export(&self) -> Vec<ClipEntry> { self.iter().cloned().collect() }

    #[inline]
    pub fn pinned(&self) -> Vec<ClipEntry> {
        self.iter().filter(|entry| entry.is_pinned()).cloned().collect()
    }

    #[inline]
    pub fn list(&self, preview_length: usize) -> Vec<ClipEntryMetadata> {
        self.iter().map(|entry| entry.metadata(Some(preview_length))).collect()
    }

    pub fn list_pinned(
        &self,
        folder_id: Option<u64>,
        preview_length: usize,
    ) -> Vec<ClipEntryMetadata> {
        self.iter()
            .filter(|entry| {
                entry.is_pinned() && folder_id.map_or(true, |id| entry.folder_id() == Some(id))
            })
            .map(|entry| entry.metadata(Some(preview_length)))
            .collect()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ClipEntry> { self.clips.values() }

    #[inline]
    pub fn get(&self, id: u64) -> Option<ClipEntry> { self.clips.get(&id).cloned() }

    #[inline]
    pub fn get_current_clip(&self) -> Option<&ClipEntry> {
        self.current_clip.and_then(|id| self.clips.get(&id))
    }

    #[inline]
    pub fn insert(&mut self, data: ClipEntry) -> u64 { self.insert_inner(data) }

    fn insert_inner(&mut self, entry: ClipEntry) -> u64 {
        let id = entry.id();

        // deduplication-on-arrival: the same content moves to the front of the
        // history instead of producing a second entry, its pinned state and
        // folder assignment stay untouched
        if let Some(existing) = self.clips.get_mut(&id) {
            let _ = self.timestamp_to_id.remove(&existing.timestamp());
            existing.touch();
            let _unused = self.timestamp_to_id.insert(existing.timestamp(), id);
            self.current_clip = Some(id);
            return id;
        }

        let timestamp = entry.timestamp();
        self.current_clip = Some(id);
        drop(self.clips.insert(id, entry));
        let _unused = self.timestamp_to_id.insert(timestamp, id);
        self.remove_oldest();
        id
    }

    #[inline]
    pub fn len(&self) -> usize { self.clips.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.clips.is_empty() }

    fn remove_oldest(&mut self) {
        if self.is_empty() {
            return;
        }

        let pinned_count = self.pinned_ids.len();

        while self.clips.len() > self.capacity + pinned_count {
            if let Some((timestamp, id)) = self.timestamp_to_id.pop_first() {
                if self.pinned_ids.contains(&id) {
                    tracing::trace!("Retain pinned clip and update its timestamp (id: {id})");
                    if let Some(entry) = self.clips.get_mut(&id) {
                        entry.touch();
                        let _unused = self.timestamp_to_id.insert(entry.timestamp(), id);
                    }
                } else {
                    tracing::trace!("Remove old clip (id: {id}, timestamp: {timestamp})");
                    drop(self.clips.remove(&id));
                }
            }
        }
    }

    #[inline]
    pub fn remove(&mut self, id: u64) -> bool { self.remove_inner(id).is_some() }

    fn remove_inner(&mut self, id: u64) -> Option<ClipEntry> {
        if self.current_clip == Some(id) {
            self.current_clip = None;
        }
        let _unused = self.pinned_ids.remove(&id);

        if let Some(clip) = self.clips.remove(&id) {
            let _id = self.timestamp_to_id.remove(&clip.timestamp());
            Some(clip)
        } else {
            None
        }
    }

    /// Drops every unpinned entry. Pinned entries survive a clear.
    pub fn clear(&mut self) {
        self.timestamp_to_id.retain(|_, id| self.pinned_ids.contains(id));
        self.clips.retain(|id, _| self.pinned_ids.contains(id));
        if let Some(id) = self.current_clip {
            if !self.clips.contains_key(&id) {
                self.current_clip = None;
            }
        }
        self.notification.on_history_cleared();
    }

    /// Replaces the content of an entry. Content identity changes, so the new
    /// entry gets a new id; pinned state and folder assignment carry over.
    pub fn replace(&mut self, old_id: u64, data: &[u8], mime: &mime::Mime) -> (bool, u64) {
        let (pinned, folder_id) = self
            .clips
            .get(&old_id)
            .map_or((false, None), |clip| (clip.is_pinned(), clip.folder_id()));
        drop(self.remove_inner(old_id));

        ClipEntry::new(data, mime, None).map_or((false, old_id), |mut entry| {
            if pinned {
                entry.pin(folder_id);
            }
            let new_id = self.insert_inner(entry);
            if pinned {
                let _unused = self.pinned_ids.insert(new_id);
            }
            (true, new_id)
        })
    }

    /// Promotes an entry to the current clip: refreshes it, arms the echo
    /// guard and stores its content back to the OS clipboard.
    pub async fn mark(&mut self, id: u64) -> Result<(), Error> {
        if let Some(clip) = self.clips.get_mut(&id) {
            let _ = self.timestamp_to_id.remove(&clip.timestamp());
            clip.touch();
            let _unused = self.timestamp_to_id.insert(clip.timestamp(), id);
            self.current_clip = Some(id);

            let content = clip.to_clipboard_content();
            self.echo_guard.arm(id);
            self.backend.store(content).await.context(error::StoreClipboardContentSnafu)?;
        }

        Ok(())
    }

    /// Pins an entry, optionally into a folder. Fails when the entry or the
    /// target folder does not exist.
    pub fn pin(&mut self, id: u64, folder_id: Option<u64>) -> bool {
        if let Some(folder_id) = folder_id {
            if !self.folders.contains_key(&folder_id) {
                return false;
            }
        }

        if let Some(clip) = self.clips.get_mut(&id) {
            clip.pin(folder_id);
            let _unused = self.pinned_ids.insert(id);
            self.notification.on_entry_pinned();
            true
        } else {
            false
        }
    }

    pub fn unpin(&mut self, id: u64) -> bool {
        if let Some(clip) = self.clips.get_mut(&id) {
            clip.unpin();
            let _unused = self.pinned_ids.remove(&id);
            self.notification.on_entry_unpinned();
            true
        } else {
            false
        }
    }

    pub fn create_folder<S>(&mut self, name: S) -> Folder
    where
        S: Into<String>,
    {
        let folder = Folder::new(name);
        drop(self.folders.insert(folder.id, folder.clone()));
        folder
    }

    pub fn rename_folder<S>(&mut self, id: u64, name: S) -> bool
    where
        S: Into<String>,
    {
        self.folders.get_mut(&id).map_or(false, |folder| {
            folder.rename(name);
            true
        })
    }

    /// Removes a folder. Member entries stay pinned but lose their folder
    /// assignment.
    pub fn remove_folder(&mut self, id: u64) -> bool {
        if self.folders.remove(&id).is_none() {
            return false;
        }

        for clip in self.clips.values_mut() {
            if clip.folder_id() == Some(id) {
                clip.clear_folder();
            }
        }
        true
    }

    #[inline]
    pub fn list_folders(&self) -> Vec<Folder> { self.folders.values().cloned().collect() }

    #[inline]
    pub fn folder_exists(&self, id: u64) -> bool { self.folders.contains_key(&id) }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc};

    use clipstash_base::ClipEntry;

    use crate::{
        backend::{Backend as _, LocalBackend},
        manager::{ClipboardManager, DEFAULT_CAPACITY},
        notification::MockNotification,
    };

    fn create_clips(n: usize) -> Vec<ClipEntry> {
        (0..n).map(ClipEntry::from_string).collect()
    }

    fn create_manager() -> ClipboardManager<MockNotification> {
        ClipboardManager::new(Arc::new(LocalBackend::new()), MockNotification)
    }

    #[test]
    fn test_construction() {
        let mgr = create_manager();
        assert!(mgr.is_empty());
        assert_eq!(mgr.len(), 0);
        assert_eq!(mgr.capacity(), DEFAULT_CAPACITY);
        assert!(mgr.get_current_clip().is_none());

        let cap = 20;
        let mgr = ClipboardManager::with_capacity(
            Arc::new(LocalBackend::new()),
            cap,
            Arc::new(crate::echo::EchoGuard::default()),
            MockNotification,
        );
        assert!(mgr.is_empty());
        assert_eq!(mgr.capacity(), cap);
    }

    #[test]
    fn test_capacity() {
        let cap = 10;
        let mut mgr = ClipboardManager::with_capacity(
            Arc::new(LocalBackend::new()),
            cap,
            Arc::new(crate::echo::EchoGuard::default()),
            MockNotification,
        );

        let n = 20;
        for clip in create_clips(n) {
            let _ = mgr.insert(clip);
        }

        assert_eq!(mgr.len(), cap);
        assert_eq!(mgr.capacity(), cap);
    }

    #[allow(clippy::mutable_key_type)]
    #[test]
    fn test_insert() {
        let n = 20;
        let clips = create_clips(n);
        let mut mgr = create_manager();
        for clip in &clips {
            let _ = mgr.insert(clip.clone());
        }

        assert!(mgr.get_current_clip().is_some());
        assert_eq!(mgr.get_current_clip(), clips.last());
        assert_eq!(mgr.len(), n);

        let dumped = mgr.export().into_iter().collect::<HashSet<_>>();
        let clips = clips.into_iter().collect::<HashSet<_>>();

        assert_eq!(dumped, clips);
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut mgr = create_manager();

        let first = ClipEntry::from_string("repeated");
        let id = mgr.insert(first.clone());
        let _other = mgr.insert(ClipEntry::from_string("something else"));

        // same content arrives again: the entry moves to the front, no
        // duplicate is created
        let again = mgr.insert(ClipEntry::from_string("repeated"));
        assert_eq!(id, again);
        assert_eq!(mgr.len(), 2);
        assert_eq!(mgr.get_current_clip().map(ClipEntry::id), Some(id));
        assert!(mgr.get(id).map_or(false, |clip| clip.timestamp() >= first.timestamp()));
    }

    #[test]
    fn test_dedup_preserves_pin_state() {
        let mut mgr = create_manager();
        let id = mgr.insert(ClipEntry::from_string("keep me"));
        assert!(mgr.pin(id, None));

        let again = mgr.insert(ClipEntry::from_string("keep me"));
        assert_eq!(id, again);
        assert!(mgr.get(id).map_or(false, |clip| clip.is_pinned()));
    }

    #[test]
    fn test_import() {
        let n = 10;
        let mut clips = create_clips(n);
        let mut mgr = ClipboardManager::with_capacity(
            Arc::new(LocalBackend::new()),
            20,
            Arc::new(crate::echo::EchoGuard::default()),
            MockNotification,
        );

        mgr.import(&clips);
        assert_eq!(mgr.len(), n);
        assert!(mgr.get_current_clip().is_none());

        let mut exported = mgr.export();
        clips.sort_unstable();
        exported.sort_unstable();

        assert_eq!(exported, clips);
    }

    #[test]
    fn test_replace() {
        const MIME: mime::Mime = mime::TEXT_PLAIN_UTF_8;

        let data1 = "ABCDEFG";
        let data2 = "АБВГД";
        let mut mgr = create_manager();
        let old_id = mgr.insert(ClipEntry::from_string(data1));
        assert_eq!(mgr.len(), 1);

        let (ok, new_id) = mgr.replace(old_id, data2.as_bytes(), &MIME);
        assert!(ok);
        assert_ne!(old_id, new_id);
        assert_eq!(mgr.len(), 1);

        let clip = mgr.get(new_id).unwrap();
        assert_eq!(clip.as_bytes(), data2.as_bytes());
    }

    #[test]
    fn test_replace_carries_pin_state() {
        let mut mgr = create_manager();
        let folder = mgr.create_folder("work");
        let old_id = mgr.insert(ClipEntry::from_string("draft"));
        assert!(mgr.pin(old_id, Some(folder.id)));

        let (ok, new_id) = mgr.replace(old_id, b"final", &mime::TEXT_PLAIN_UTF_8);
        assert!(ok);

        let clip = mgr.get(new_id).unwrap();
        assert!(clip.is_pinned());
        assert_eq!(clip.folder_id(), Some(folder.id));
        assert_eq!(mgr.pinned().len(), 1);
    }

    #[tokio::test]
    async fn test_mark_promotes_and_arms_echo_guard() {
        let backend = Arc::new(LocalBackend::new());
        let echo_guard = Arc::new(crate::echo::EchoGuard::default());
        let mut mgr = ClipboardManager::with_capacity(
            backend.clone(),
            10,
            echo_guard.clone(),
            MockNotification,
        );

        let id = mgr.insert(ClipEntry::from_string("older"));
        let _newer = mgr.insert(ClipEntry::from_string("newer"));

        mgr.mark(id).await.unwrap();
        assert_eq!(mgr.get_current_clip().map(ClipEntry::id), Some(id));

        // the store went out to the backend and the echo guard is primed to
        // absorb the event it will cause
        let content = backend.load(None).await.unwrap();
        assert_eq!(ClipEntry::compute_id(&content), id);
        assert!(echo_guard.try_absorb(id));

        assert!(mgr.mark(12345).await.is_ok());
    }

    #[test]
    fn test_remove() {
        let mut mgr = create_manager();
        assert_eq!(mgr.len(), 0);
        assert!(!mgr.remove(43));

        let id = mgr.insert(ClipEntry::from_string("АБВГДЕ"));
        assert_eq!(mgr.len(), 1);
        assert!(mgr.get_current_clip().is_some());

        let ok = mgr.remove(id);
        assert!(ok);
        assert_eq!(mgr.len(), 0);
        assert!(mgr.get_current_clip().is_none());

        let ok = mgr.remove(id);
        assert!(!ok);
    }

    #[test]
    fn test_clear_retains_pinned() {
        let n = 20;
        let clips = create_clips(n);
        let mut mgr = create_manager();

        for clip in clips {
            let _ = mgr.insert(clip);
        }
        let pinned_id = mgr.insert(ClipEntry::from_string("favorite"));
        assert!(mgr.pin(pinned_id, None));
        assert_eq!(mgr.len(), n + 1);

        mgr.clear();
        assert_eq!(mgr.len(), 1);
        assert!(mgr.get(pinned_id).is_some());

        assert!(mgr.unpin(pinned_id));
        mgr.clear();
        assert!(mgr.is_empty());
    }

    #[test]
    fn test_pinned_entries_survive_eviction() {
        let cap = 5;
        let mut mgr = ClipboardManager::with_capacity(
            Arc::new(LocalBackend::new()),
            cap,
            Arc::new(crate::echo::EchoGuard::default()),
            MockNotification,
        );

        let pinned_id = mgr.insert(ClipEntry::from_string("pinned early"));
        assert!(mgr.pin(pinned_id, None));

        for clip in create_clips(30) {
            let _ = mgr.insert(clip);
        }

        assert_eq!(mgr.len(), cap + 1);
        assert!(mgr.get(pinned_id).is_some());
    }

    #[test]
    fn test_pin_requires_existing_folder() {
        let mut mgr = create_manager();
        let id = mgr.insert(ClipEntry::from_string("note"));

        assert!(!mgr.pin(id, Some(12345)));
        assert!(!mgr.get(id).unwrap().is_pinned());

        let folder = mgr.create_folder("notes");
        assert!(mgr.pin(id, Some(folder.id)));
        assert_eq!(mgr.get(id).unwrap().folder_id(), Some(folder.id));
    }

    #[test]
    fn test_pin_unknown_entry() {
        let mut mgr = create_manager();
        assert!(!mgr.pin(99, None));
        assert!(!mgr.unpin(99));
    }

    #[test]
    fn test_folders() {
        let mut mgr = create_manager();
        let folder = mgr.create_folder("snippets");
        assert!(mgr.folder_exists(folder.id));
        assert_eq!(mgr.list_folders().len(), 1);

        assert!(mgr.rename_folder(folder.id, "code snippets"));
        let folders = mgr.list_folders();
        assert_eq!(folders[0].name, "code snippets");
        assert_eq!(folders[0].id, folder.id);

        assert!(!mgr.rename_folder(999, "nope"));
        assert!(!mgr.remove_folder(999));
        assert!(mgr.remove_folder(folder.id));
        assert!(mgr.list_folders().is_empty());
    }

    #[test]
    fn test_remove_folder_keeps_members_pinned() {
        let mut mgr = create_manager();
        let folder = mgr.create_folder("work");
        let id = mgr.insert(ClipEntry::from_string("member"));
        assert!(mgr.pin(id, Some(folder.id)));

        assert!(mgr.remove_folder(folder.id));

        let clip = mgr.get(id).unwrap();
        assert!(clip.is_pinned());
        assert_eq!(clip.folder_id(), None);
    }
}
