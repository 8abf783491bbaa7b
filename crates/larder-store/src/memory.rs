//! In-memory [`DocumentStore`] implementation.
//!
//! Backs the workspace's controller tests and is handy for running the UI
//! without a real backend. Collections are created lazily on first write.
//! The `set_offline` switch makes every operation fail, so error paths
//! (stale-state preservation, toast surfacing) are testable.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;

use crate::document::{Document, DocumentStore, Fields};
use crate::Error;

/// Thread-safe in-memory document store.
#[derive(Default)]
pub struct MemoryStore {
    collections: DashMap<String, BTreeMap<String, Fields>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When offline, every operation returns [`Error::StoreOffline`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of documents currently held in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map_or(0, |c| c.len())
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    fn check_online(&self) -> Result<(), Error> {
        if self.offline.load(Ordering::SeqCst) {
            Err(Error::StoreOffline)
        } else {
            Ok(())
        }
    }
}

impl DocumentStore for MemoryStore {
    async fn query_collection(&self, collection: &str) -> Result<Vec<Document>, Error> {
        self.check_online()?;
        let docs = self.collections.get(collection).map_or_else(Vec::new, |c| {
            c.iter()
                .map(|(key, fields)| Document::new(key.clone(), fields.clone()))
                .collect()
        });
        Ok(docs)
    }

    async fn get_document(&self, collection: &str, key: &str) -> Result<Option<Fields>, Error> {
        self.check_online()?;
        Ok(self
            .collections
            .get(collection)
            .and_then(|c| c.get(key).cloned()))
    }

    async fn set_document(
        &self,
        collection: &str,
        key: &str,
        fields: Fields,
    ) -> Result<(), Error> {
        self.check_online()?;
        self.collections
            .entry(collection.to_owned())
            .or_default()
            .insert(key.to_owned(), fields);
        Ok(())
    }

    async fn delete_document(&self, collection: &str, key: &str) -> Result<(), Error> {
        self.check_online()?;
        if let Some(mut c) = self.collections.get_mut(collection) {
            c.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fields(quantity: u64) -> Fields {
        let mut f = Fields::new();
        f.insert("quantity".into(), json!(quantity));
        f
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        store.set_document("inventory", "apple", fields(3)).await.expect("set");

        let got = store.get_document("inventory", "apple").await.expect("get");
        assert_eq!(got, Some(fields(3)));
    }

    #[tokio::test]
    async fn get_absent_is_none() {
        let store = MemoryStore::new();
        let got = store.get_document("inventory", "ghost").await.expect("get");
        assert_eq!(got, None);
    }

    #[tokio::test]
    async fn delete_absent_is_ok() {
        let store = MemoryStore::new();
        store.delete_document("inventory", "ghost").await.expect("delete");
        assert!(store.is_empty("inventory"));
    }

    #[tokio::test]
    async fn set_replaces_all_fields() {
        let store = MemoryStore::new();
        let mut extra = fields(1);
        extra.insert("color".into(), json!("red"));
        store.set_document("inventory", "apple", extra).await.expect("set");

        store.set_document("inventory", "apple", fields(2)).await.expect("set");
        let got = store
            .get_document("inventory", "apple")
            .await
            .expect("get")
            .expect("present");
        assert!(got.get("color").is_none());
    }

    #[tokio::test]
    async fn offline_store_fails_every_op() {
        let store = MemoryStore::new();
        store.set_offline(true);
        assert!(store.query_collection("inventory").await.is_err());
        assert!(store.get_document("inventory", "a").await.is_err());
        assert!(store.set_document("inventory", "a", fields(1)).await.is_err());
        assert!(store.delete_document("inventory", "a").await.is_err());
    }
}
