//! Recently decoded VINs.
//!
//! The list is newest first, holds at most [`MAX_RECENTS`] entries and never
//! contains the same VIN twice. It is persisted as a JSON array under a
//! single key of a [`KeyValueStore`].

mod store;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};

use crate::vin::Vin;
use tracing::warn;

/// Maximum number of VINs kept.
pub const MAX_RECENTS: usize = 10;

/// Store key holding the serialized list.
pub const RECENTS_KEY: &str = "recent_vins";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecentVins {
    items: Vec<Vin>,
}

impl RecentVins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `vin` to the front, dropping the oldest entry past the limit.
    pub fn record(&mut self, vin: Vin) {
        self.items.retain(|existing| existing != &vin);
        self.items.insert(0, vin);
        self.items.truncate(MAX_RECENTS);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vin> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read the list from `store`.
    ///
    /// Entries that are not valid VINs, and repeats of earlier entries, are
    /// dropped. A missing key, an unreadable list or a corrupt store yields
    /// an empty list.
    pub fn load(store: &impl KeyValueStore) -> Result<Self, StoreError> {
        let raw = match store.get(RECENTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Self::new()),
            Err(e @ StoreError::Corrupt { .. }) => {
                warn!("discarding unreadable recents store: {}", e);
                return Ok(Self::new());
            }
            Err(e) => return Err(e),
        };

        let entries: Vec<String> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("discarding unreadable recents list: {}", e);
                return Ok(Self::new());
            }
        };

        let mut items: Vec<Vin> = Vec::new();
        for entry in entries {
            match Vin::parse(&entry) {
                Ok(vin) if !items.contains(&vin) => items.push(vin),
                Ok(_) => {}
                Err(e) => warn!(entry = %entry, "skipping stored VIN: {}", e),
            }
            if items.len() == MAX_RECENTS {
                break;
            }
        }

        Ok(Self { items })
    }

    /// Write the list to `store`.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.items)?;
        store.set(RECENTS_KEY, &raw)
    }
}

impl<'a> IntoIterator for &'a RecentVins {
    type Item = &'a Vin;
    type IntoIter = std::slice::Iter<'a, Vin>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vin(n: usize) -> Vin {
        Vin::parse(&format!("1HGCM82633A{:06}", n)).unwrap()
    }

    fn as_strs(recents: &RecentVins) -> Vec<&str> {
        recents.iter().map(Vin::as_str).collect()
    }

    #[test]
    fn test_newest_first() {
        let mut recents = RecentVins::new();
        recents.record(vin(1));
        recents.record(vin(2));
        assert_eq!(as_strs(&recents), ["1HGCM82633A000002", "1HGCM82633A000001"]);
    }

    #[test]
    fn test_duplicate_moves_to_front() {
        let mut recents = RecentVins::new();
        recents.record(vin(1));
        recents.record(vin(2));
        recents.record(vin(1));
        assert_eq!(recents.len(), 2);
        assert_eq!(as_strs(&recents)[0], "1HGCM82633A000001");
    }

    #[test]
    fn test_capped_at_ten() {
        let mut recents = RecentVins::new();
        for n in 0..15 {
            recents.record(vin(n));
        }
        assert_eq!(recents.len(), MAX_RECENTS);
        assert_eq!(recents.iter().next(), Some(&vin(14)));
        assert_eq!(recents.iter().last(), Some(&vin(5)));
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        let mut recents = RecentVins::new();
        recents.record(vin(1));
        recents.record(vin(2));
        recents.save(&mut store).unwrap();

        let loaded = RecentVins::load(&store).unwrap();
        assert_eq!(loaded, recents);
    }

    #[test]
    fn test_load_missing_key() {
        let store = MemoryStore::new();
        assert!(RecentVins::load(&store).unwrap().is_empty());
    }

    #[test]
    fn test_load_sanitizes_entries() {
        let mut store = MemoryStore::new();
        let mut raw: Vec<String> = vec![
            "1HGCM82633A000001".to_string(),
            "not a vin".to_string(),
            "1HGCM82633A000001".to_string(),
            "1hgcm82633a000002".to_string(),
        ];
        raw.extend((10..30).map(|n| format!("1HGCM82633A{:06}", n)));
        store
            .set(RECENTS_KEY, &serde_json::to_string(&raw).unwrap())
            .unwrap();

        let loaded = RecentVins::load(&store).unwrap();
        assert_eq!(loaded.len(), MAX_RECENTS);
        assert_eq!(as_strs(&loaded)[..2], ["1HGCM82633A000001", "1HGCM82633A000002"]);
    }

    #[test]
    fn test_corrupt_file_store_loads_empty_and_recovers() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("store.json");
        std::fs::write(&path, "{truncated").unwrap();
        let mut store = JsonFileStore::new(&path);

        let mut recents = RecentVins::load(&store).unwrap();
        assert!(recents.is_empty());

        recents.record(vin(3));
        recents.save(&mut store).unwrap();
        assert_eq!(RecentVins::load(&store).unwrap(), recents);
    }

    #[test]
    fn test_load_unreadable_list() {
        let mut store = MemoryStore::new();
        store.set(RECENTS_KEY, "{oops").unwrap();
        assert!(RecentVins::load(&store).unwrap().is_empty());
    }
}
