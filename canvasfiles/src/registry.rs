//! File registry — the single owner of every file record.
//!
//! Records are handed out immutably. The only write paths are
//! [`Registry::update_position`] and [`Registry::toggle_pinned`]; both
//! rebuild the collection with one record changed, so a [`Snapshot`] taken
//! earlier keeps seeing the old state.

use crate::kind::FileKind;
use egui::Pos2;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u32);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    pub kind: FileKind,
    /// Display string ("2.4 MB", "156 items"), not a byte count.
    pub size: String,
    /// Display string ("2 hours ago"), not a timestamp.
    pub modified: String,
    pub starred: bool,
    pub pinned: bool,
    pub x: f32,
    pub y: f32,
}

impl FileRecord {
    /// Top-left corner relative to the canvas origin.
    pub fn position(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate file id {0}")]
    DuplicateId(FileId),
}

/// Immutable view of the registry at one point in time.
pub type Snapshot = Arc<Vec<FileRecord>>;

#[derive(Debug, Clone)]
pub struct Registry {
    records: Snapshot,
    version: u64,
}

impl Registry {
    pub fn new(records: Vec<FileRecord>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(records.len());
        if let Some(dup) = records.iter().find(|r| !seen.insert(r.id)) {
            return Err(RegistryError::DuplicateId(dup.id));
        }
        Ok(Self { records: Arc::new(records), version: 0 })
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.records)
    }

    pub fn get(&self, id: FileId) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Bumped once per effective mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Move a record. No bounds are checked here; callers clamp.
    /// Returns false (and changes nothing) when `id` is unknown.
    pub fn update_position(&mut self, id: FileId, x: f32, y: f32) -> bool {
        self.rebuild_with(id, |record| {
            record.x = x;
            record.y = y;
        })
    }

    /// Flip the pinned flag. Returns false (and changes nothing) when `id`
    /// is unknown.
    pub fn toggle_pinned(&mut self, id: FileId) -> bool {
        self.rebuild_with(id, |record| record.pinned = !record.pinned)
    }

    /// Apply `change` to one record. A change that leaves the record equal
    /// to what it was is not a mutation: nothing is rebuilt and the version
    /// stays put.
    fn rebuild_with(&mut self, id: FileId, change: impl FnOnce(&mut FileRecord)) -> bool {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            tracing::debug!(%id, "ignoring update for unknown file");
            return false;
        };
        let mut updated = self.records[index].clone();
        change(&mut updated);
        if updated == self.records[index] {
            return true;
        }
        let mut rebuilt = self.records.as_ref().clone();
        rebuilt[index] = updated;
        self.records = Arc::new(rebuilt);
        self.version += 1;
        true
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(id: u32, x: f32, y: f32) -> FileRecord {
        FileRecord {
            id: FileId(id),
            name: format!("file-{id}"),
            kind: FileKind::Document,
            size: "1 KB".into(),
            modified: "just now".into(),
            starred: id % 2 == 0,
            pinned: false,
            x,
            y,
        }
    }

    fn registry() -> Registry {
        Registry::new(vec![record(1, 10.0, 10.0), record(2, 50.0, 80.0), record(3, 200.0, 120.0)])
            .unwrap()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Registry::new(vec![record(1, 0.0, 0.0), record(2, 0.0, 0.0), record(1, 5.0, 5.0)])
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId(FileId(1)));
    }

    #[test]
    fn test_update_position_changes_one_record() {
        let mut reg = registry();
        let before = reg.snapshot();
        assert!(reg.update_position(FileId(2), 300.0, 40.5));

        let moved = reg.get(FileId(2)).unwrap();
        assert_eq!(moved.position(), Pos2::new(300.0, 40.5));
        assert_eq!(moved.name, before[1].name);
        assert_eq!(moved.pinned, before[1].pinned);
        assert_eq!(reg.records()[0], before[0]);
        assert_eq!(reg.records()[2], before[2]);
        assert_eq!(reg.version(), 1);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut reg = registry();
        let before = reg.snapshot();
        assert!(!reg.update_position(FileId(99), 1.0, 1.0));
        assert_eq!(*reg.snapshot(), *before);
        assert!(Arc::ptr_eq(&reg.snapshot(), &before));
        assert_eq!(reg.version(), 0);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut reg = registry();
        assert!(!reg.toggle_pinned(FileId(42)));
        assert_eq!(reg.version(), 0);
    }

    #[test]
    fn test_toggle_pinned_twice_restores() {
        let mut reg = registry();
        let before = reg.snapshot();
        for id in [1, 2, 3] {
            let id = FileId(id);
            reg.toggle_pinned(id);
            for (now, was) in reg.records().iter().zip(before.iter()) {
                if now.id == id {
                    assert_eq!(now.pinned, !was.pinned);
                    assert_eq!(now.position(), was.position());
                    assert_eq!(now.starred, was.starred);
                } else {
                    assert_eq!(now, was);
                }
            }
            reg.toggle_pinned(id);
            assert_eq!(*reg.snapshot(), *before);
        }
        assert_eq!(reg.version(), 6);
    }

    #[test]
    fn test_snapshot_is_copy_on_write() {
        let mut reg = registry();
        let old = reg.snapshot();
        reg.update_position(FileId(1), 77.0, 88.0);
        reg.toggle_pinned(FileId(3));

        assert_eq!(old[0].position(), Pos2::new(10.0, 10.0));
        assert!(!old[2].pinned);
        assert!(!Arc::ptr_eq(&old, &reg.snapshot()));
    }

    #[test]
    fn test_order_is_preserved() {
        let mut reg = registry();
        reg.update_position(FileId(3), 0.0, 0.0);
        let ids: Vec<u32> = reg.records().iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_same_position_is_not_a_mutation() {
        let mut reg = registry();
        let before = reg.snapshot();
        for _ in 0..100 {
            assert!(reg.update_position(FileId(2), 50.0, 80.0));
        }
        assert_eq!(reg.version(), 0);
        assert!(Arc::ptr_eq(&reg.snapshot(), &before));

        reg.update_position(FileId(2), 51.0, 80.0);
        reg.update_position(FileId(2), 51.0, 80.0);
        assert_eq!(reg.version(), 1);
    }

    #[test]
    fn test_is_empty() {
        assert!(!registry().is_empty());
        let empty = Registry::new(Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }
}
