//! Document model and the store abstraction the rest of the workspace
//! consumes.
//!
//! A collection is a named set of documents keyed by a string; a document is
//! an opaque bag of JSON fields. Writes are full replaces, never merges.

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

/// The fields of a document — an opaque JSON object.
pub type Fields = serde_json::Map<String, Value>;

/// A single document: key plus fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub key: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(key: impl Into<String>, fields: Fields) -> Self {
        Self {
            key: key.into(),
            fields,
        }
    }
}

/// Abstraction over the remote document store.
///
/// [`StoreClient`](crate::StoreClient) is the HTTP implementation;
/// [`MemoryStore`](crate::MemoryStore) backs tests. Consumers (the inventory
/// controller) are generic over this trait, so semantics can be tested
/// without a network.
pub trait DocumentStore: Send + Sync {
    /// List every document in a collection. Iteration order is unspecified
    /// and may differ between calls.
    fn query_collection(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<Vec<Document>, Error>> + Send;

    /// Fetch a single document's fields, or `None` if the key is absent.
    fn get_document(
        &self,
        collection: &str,
        key: &str,
    ) -> impl Future<Output = Result<Option<Fields>, Error>> + Send;

    /// Write a document, replacing ALL of its fields (not a merge).
    fn set_document(
        &self,
        collection: &str,
        key: &str,
        fields: Fields,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    /// Delete a document. Deleting an absent key succeeds (idempotent).
    fn delete_document(
        &self,
        collection: &str,
        key: &str,
    ) -> impl Future<Output = Result<(), Error>> + Send;
}
