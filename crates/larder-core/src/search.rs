//! Client-side search filtering.
//!
//! Pure and synchronous — never touches the store. The TUI re-runs this on
//! every keystroke against its current snapshot.

use crate::model::InventoryItem;

/// Case-insensitive substring filter on item names.
///
/// An empty query yields the full list. Input order is preserved (the list
/// stays in store iteration order).
pub fn filter_by_name(items: &[InventoryItem], query: &str) -> Vec<InventoryItem> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn items() -> Vec<InventoryItem> {
        vec![
            InventoryItem::new("apple", 1),
            InventoryItem::new("banana", 3),
            InventoryItem::new("Applesauce", 2),
        ]
    }

    #[test]
    fn empty_query_returns_full_list() {
        assert_eq!(filter_by_name(&items(), ""), items());
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let filtered = filter_by_name(&items(), "ap");
        assert_eq!(
            filtered,
            vec![
                InventoryItem::new("apple", 1),
                InventoryItem::new("Applesauce", 2),
            ]
        );
    }

    #[test]
    fn query_matching_nothing_is_empty() {
        assert!(filter_by_name(&items(), "zucchini").is_empty());
    }

    #[test]
    fn single_item_scenario() {
        let list = vec![
            InventoryItem::new("apple", 1),
            InventoryItem::new("banana", 3),
        ];
        assert_eq!(
            filter_by_name(&list, "ap"),
            vec![InventoryItem::new("apple", 1)]
        );
    }
}
