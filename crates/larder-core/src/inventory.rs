// ── Inventory controller ──
//
// The three stateful operations (refresh, add-one, remove-one) against the
// document store, plus the reactive in-memory snapshot consumers render
// from. The snapshot is a cache: it is rebuilt wholesale from the store
// after every mutating operation, never incrementally patched.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, warn};

use larder_store::{DocumentStore, StoreClient, TlsMode, TransportConfig};

use crate::config::{AuthCredentials, StoreConfig, TlsVerification};
use crate::error::CoreError;
use crate::model::{quantity_fields, quantity_of, InventoryItem};
use crate::stream::ItemsStream;

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc`. Generic over the store so semantics are
/// testable against [`MemoryStore`](larder_store::MemoryStore); the TUI uses
/// `Inventory<StoreClient>`.
pub struct Inventory<S> {
    inner: Arc<InventoryInner<S>>,
}

impl<S> Clone for Inventory<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct InventoryInner<S> {
    store: S,
    collection: String,
    items: watch::Sender<Arc<Vec<InventoryItem>>>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl<S> Inventory<S> {
    /// Create a controller over an existing store handle.
    ///
    /// Does not touch the store — call [`refresh`](Self::refresh) to load
    /// the initial snapshot.
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        let (items, _) = watch::channel(Arc::new(Vec::new()));
        let (last_refresh, _) = watch::channel(None);

        Self {
            inner: Arc::new(InventoryInner {
                store,
                collection: collection.into(),
                items,
                last_refresh,
            }),
        }
    }

    /// The collection this controller operates on.
    pub fn collection(&self) -> &str {
        &self.inner.collection
    }

    // ── Snapshot accessors ───────────────────────────────────────

    /// Current in-memory item list, in store iteration order.
    pub fn items_snapshot(&self) -> Arc<Vec<InventoryItem>> {
        self.inner.items.borrow().clone()
    }

    pub fn item_count(&self) -> usize {
        self.inner.items.borrow().len()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> ItemsStream {
        ItemsStream::new(self.inner.items.subscribe())
    }

    /// When the last successful refresh completed, or `None` if never.
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.inner.last_refresh.borrow()
    }

    /// How long ago the last successful refresh occurred.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_refresh().map(|t| Utc::now() - t)
    }
}

impl<S: DocumentStore> Inventory<S> {
    // ── Operations ───────────────────────────────────────────────

    /// Re-read the entire collection and replace the in-memory snapshot.
    ///
    /// On error the prior snapshot is left untouched (no partial update)
    /// and no retry is attempted.
    pub async fn refresh(&self) -> Result<(), CoreError> {
        let docs = self
            .inner
            .store
            .query_collection(&self.inner.collection)
            .await?;

        let items: Vec<InventoryItem> = docs.iter().map(InventoryItem::from_document).collect();
        debug!(items = items.len(), "inventory refresh complete");

        self.inner.items.send_replace(Arc::new(items));
        let _ = self.inner.last_refresh.send(Some(Utc::now()));
        Ok(())
    }

    /// Add one unit of `name`: create the document at quantity 1, or write
    /// back `quantity + 1`.
    ///
    /// The write is a full replace — any fields beyond `quantity` on the
    /// existing document are dropped (preserved source behavior). The
    /// read-then-write sequence is not atomic: a concurrent writer between
    /// the get and the set loses its update.
    ///
    /// An empty name is a silent no-op. Otherwise [`refresh`](Self::refresh)
    /// runs unconditionally afterwards, even when the mutation failed, so
    /// the snapshot is always resynchronized with the store.
    pub async fn add_item(&self, name: &str) -> Result<(), CoreError> {
        if name.is_empty() {
            return Ok(());
        }

        let mutation = self.increment(name).await;
        self.resync(mutation).await
    }

    /// Remove one unit of `name`: delete the document at quantity 1, or
    /// write back `quantity - 1`. Removing an absent item is a silent
    /// no-op. Same unconditional-refresh and full-replace caveats as
    /// [`add_item`](Self::add_item).
    pub async fn remove_item(&self, name: &str) -> Result<(), CoreError> {
        let mutation = self.decrement(name).await;
        self.resync(mutation).await
    }

    async fn increment(&self, name: &str) -> Result<(), CoreError> {
        let collection = &self.inner.collection;
        let quantity = match self.inner.store.get_document(collection, name).await? {
            Some(fields) => quantity_of(&fields) + 1,
            None => 1,
        };

        self.inner
            .store
            .set_document(collection, name, quantity_fields(quantity))
            .await?;
        Ok(())
    }

    async fn decrement(&self, name: &str) -> Result<(), CoreError> {
        let collection = &self.inner.collection;
        let Some(fields) = self.inner.store.get_document(collection, name).await? else {
            // Absent item: nothing to remove.
            return Ok(());
        };

        let quantity = quantity_of(&fields);
        if quantity <= 1 {
            // Quantity 0 must never persist; delete the document instead.
            self.inner.store.delete_document(collection, name).await?;
        } else {
            self.inner
                .store
                .set_document(collection, name, quantity_fields(quantity - 1))
                .await?;
        }
        Ok(())
    }

    /// Trailing refresh shared by both mutations. The mutation error takes
    /// precedence over the refresh result; a refresh failure shadowed by a
    /// mutation failure is still logged.
    async fn resync(&self, mutation: Result<(), CoreError>) -> Result<(), CoreError> {
        let refreshed = self.refresh().await;
        match mutation {
            Ok(()) => refreshed,
            Err(e) => {
                if let Err(refresh_err) = refreshed {
                    warn!(error = %refresh_err, "post-mutation refresh failed");
                }
                Err(e)
            }
        }
    }
}

impl Inventory<StoreClient> {
    /// Build an HTTP-backed controller from connection configuration.
    pub fn connect(config: &StoreConfig) -> Result<Self, CoreError> {
        let transport = build_transport(config);
        let client = match &config.auth {
            AuthCredentials::ApiKey(key) => {
                StoreClient::from_api_key(config.url.as_str(), key, &transport)?
            }
            AuthCredentials::Anonymous => {
                StoreClient::anonymous(config.url.as_str(), &transport)?
            }
        };
        Ok(Self::new(client, config.collection.clone()))
    }
}

// ── Helpers ──────────────────────────────────────────────────────

/// Build a [`TransportConfig`] from the store configuration.
fn build_transport(config: &StoreConfig) -> TransportConfig {
    TransportConfig {
        tls: match &config.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        },
        timeout: config.timeout,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use larder_store::MemoryStore;

    use super::*;

    const COLLECTION: &str = "inventory";

    fn inventory() -> Inventory<MemoryStore> {
        Inventory::new(MemoryStore::new(), COLLECTION)
    }

    async fn seed(inv: &Inventory<MemoryStore>, entries: &[(&str, u64)]) {
        for (name, quantity) in entries {
            inv.inner
                .store
                .set_document(COLLECTION, name, quantity_fields(*quantity))
                .await
                .expect("seed");
        }
        inv.refresh().await.expect("seed refresh");
    }

    fn names(items: &[InventoryItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[tokio::test]
    async fn add_to_empty_store_creates_at_one() {
        let inv = inventory();
        inv.add_item("apple").await.expect("add");

        let items = inv.items_snapshot();
        assert_eq!(*items, vec![InventoryItem::new("apple", 1)]);
    }

    #[tokio::test]
    async fn add_existing_increments() {
        let inv = inventory();
        seed(&inv, &[("apple", 1)]).await;

        inv.add_item("apple").await.expect("add");
        assert_eq!(*inv.items_snapshot(), vec![InventoryItem::new("apple", 2)]);
    }

    #[tokio::test]
    async fn add_empty_name_is_noop() {
        let inv = inventory();
        seed(&inv, &[("apple", 1)]).await;

        inv.add_item("").await.expect("add");
        assert_eq!(*inv.items_snapshot(), vec![InventoryItem::new("apple", 1)]);
        assert_eq!(inv.inner.store.len(COLLECTION), 1);
    }

    #[tokio::test]
    async fn remove_above_one_decrements() {
        let inv = inventory();
        seed(&inv, &[("apple", 2)]).await;

        inv.remove_item("apple").await.expect("remove");
        assert_eq!(*inv.items_snapshot(), vec![InventoryItem::new("apple", 1)]);
    }

    #[tokio::test]
    async fn remove_at_one_deletes_document() {
        let inv = inventory();
        seed(&inv, &[("apple", 1)]).await;

        inv.remove_item("apple").await.expect("remove");
        assert!(inv.items_snapshot().is_empty());
        assert!(inv.inner.store.is_empty(COLLECTION));
    }

    #[tokio::test]
    async fn remove_absent_is_noop() {
        let inv = inventory();
        seed(&inv, &[("banana", 3)]).await;

        inv.remove_item("apple").await.expect("remove");
        assert_eq!(*inv.items_snapshot(), vec![InventoryItem::new("banana", 3)]);
    }

    #[tokio::test]
    async fn refresh_is_idempotent() {
        let inv = inventory();
        seed(&inv, &[("apple", 1), ("banana", 3)]).await;

        let first = inv.items_snapshot();
        inv.refresh().await.expect("refresh");
        assert_eq!(*first, *inv.items_snapshot());
    }

    #[tokio::test]
    async fn refresh_failure_leaves_prior_snapshot() {
        let inv = inventory();
        seed(&inv, &[("apple", 2)]).await;

        inv.inner.store.set_offline(true);
        assert!(inv.refresh().await.is_err());
        assert_eq!(*inv.items_snapshot(), vec![InventoryItem::new("apple", 2)]);
    }

    #[tokio::test]
    async fn add_failure_returns_mutation_error_and_keeps_snapshot() {
        let inv = inventory();
        seed(&inv, &[("apple", 1)]).await;

        inv.inner.store.set_offline(true);
        assert!(inv.add_item("apple").await.is_err());
        assert_eq!(*inv.items_snapshot(), vec![InventoryItem::new("apple", 1)]);
    }

    #[tokio::test]
    async fn increment_write_drops_extra_fields() {
        let inv = inventory();
        let mut fields = quantity_fields(1);
        fields.insert("color".into(), json!("red"));
        inv.inner
            .store
            .set_document(COLLECTION, "apple", fields)
            .await
            .expect("seed");

        inv.add_item("apple").await.expect("add");

        let fields = inv
            .inner
            .store
            .get_document(COLLECTION, "apple")
            .await
            .expect("get")
            .expect("present");
        assert_eq!(quantity_of(&fields), 2);
        // Full replace, not a merge: the extra field is gone.
        assert!(fields.get("color").is_none());
    }

    #[tokio::test]
    async fn zero_quantity_document_is_deleted_on_remove() {
        let inv = inventory();
        // A quantity-0 document violates the invariant; an external writer
        // could still produce one. Removing it must delete, not underflow.
        inv.inner
            .store
            .set_document(COLLECTION, "apple", quantity_fields(0))
            .await
            .expect("seed");

        inv.remove_item("apple").await.expect("remove");
        assert!(inv.inner.store.is_empty(COLLECTION));
    }

    #[tokio::test]
    async fn snapshot_subscription_sees_mutations() {
        let inv = inventory();
        let mut stream = inv.subscribe();
        assert!(stream.current().is_empty());

        inv.add_item("apple").await.expect("add");
        let snap = stream.changed().await.expect("change");
        assert_eq!(names(&snap), vec!["apple"]);
    }

    #[tokio::test]
    async fn last_refresh_is_stamped() {
        let inv = inventory();
        assert!(inv.last_refresh().is_none());
        inv.refresh().await.expect("refresh");
        assert!(inv.last_refresh().is_some());
        assert!(inv.data_age().is_some());
    }
}
