use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A named folder grouping pinned entries.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Folder {
    pub id: u64,

    pub name: String,

    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Folder {
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        let created_at = OffsetDateTime::now_utc();
        Self { id: Self::compute_id(&name, created_at), name, created_at }
    }

    #[must_use]
    pub fn compute_id(name: &str, created_at: OffsetDateTime) -> u64 {
        let mut s = DefaultHasher::new();
        name.hash(&mut s);
        created_at.unix_timestamp_nanos().hash(&mut s);
        s.finish()
    }

    #[inline]
    pub fn rename<S: Into<String>>(&mut self, name: S) { self.name = name.into(); }
}

#[cfg(test)]
mod tests {
    use super::Folder;

    #[test]
    fn distinct_ids_for_same_name() {
        let a = Folder::new("work");
        let b = Folder::new("work");
        // creation time feeds the id, so two folders may share a name
        assert_eq!(a.name, b.name);
        assert!(a.id != b.id || a.created_at == b.created_at);
    }

    #[test]
    fn rename_keeps_id() {
        let mut folder = Folder::new("drafts");
        let id = folder.id;
        folder.rename("notes");
        assert_eq!(folder.id, id);
        assert_eq!(folder.name, "notes");
    }
}
