//! Inventory domain model.
//!
//! One document per item, keyed by the item's name. The only persisted
//! field is `quantity`; a persisted item always has `quantity >= 1`, and
//! absence of a document is equivalent to quantity 0.

use larder_store::{Document, Fields};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Quantity field name on inventory documents.
pub const QUANTITY_FIELD: &str = "quantity";

/// A single named inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique name; also the document key. Case-sensitive as stored.
    pub name: String,
    /// Units on hand. Never persisted at 0 — the document is deleted instead.
    pub quantity: u64,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Map a store document onto an item: key → name, `quantity` field →
    /// quantity. A missing or non-integer quantity field reads as 0.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            name: doc.key.clone(),
            quantity: quantity_of(&doc.fields),
        }
    }

    /// Display label: the stored name with its first character uppercased.
    /// The underlying name is never modified.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Read the quantity field out of a document's fields.
pub fn quantity_of(fields: &Fields) -> u64 {
    fields
        .get(QUANTITY_FIELD)
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

/// Build the full-replace write payload `{"quantity": n}`.
///
/// Any other fields present on the existing document are dropped by the
/// write — the store's set operation replaces, it does not merge.
pub fn quantity_fields(quantity: u64) -> Fields {
    let mut fields = Fields::new();
    fields.insert(QUANTITY_FIELD.into(), json!(quantity));
    fields
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_document_maps_key_and_quantity() {
        let doc = Document::new("apple", quantity_fields(3));
        let item = InventoryItem::from_document(&doc);
        assert_eq!(item, InventoryItem::new("apple", 3));
    }

    #[test]
    fn missing_quantity_reads_as_zero() {
        let doc = Document::new("apple", Fields::new());
        assert_eq!(InventoryItem::from_document(&doc).quantity, 0);
    }

    #[test]
    fn non_integer_quantity_reads_as_zero() {
        let mut fields = Fields::new();
        fields.insert(QUANTITY_FIELD.into(), json!("three"));
        let doc = Document::new("apple", fields);
        assert_eq!(InventoryItem::from_document(&doc).quantity, 0);
    }

    #[test]
    fn display_name_capitalizes_first_char_only() {
        assert_eq!(InventoryItem::new("apple", 1).display_name(), "Apple");
        assert_eq!(InventoryItem::new("olive oil", 1).display_name(), "Olive oil");
        assert_eq!(InventoryItem::new("", 1).display_name(), "");
        // Stored name is untouched
        let item = InventoryItem::new("apple", 1);
        let _ = item.display_name();
        assert_eq!(item.name, "apple");
    }

    #[test]
    fn quantity_fields_round_trip() {
        assert_eq!(quantity_of(&quantity_fields(7)), 7);
    }
}
