use crate::error::{AppError, AppResult};
use crate::models::Item;

// ── ItemStore: the in-memory collection ──────────────────────────────────────

/// Ordered, list-backed collection of items.
///
/// Identifiers are unique on create. Update replaces a record wholesale at its
/// position without checking the new record's `id` against the one it
/// replaces, so lookups take the first match and deletes remove every match.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// All items in insertion order.
    pub fn list_items(&self) -> &[Item] {
        &self.items
    }

    pub fn get_item(&self, id: i64) -> AppResult<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(AppError::NotFound)
    }

    pub fn create_item(&mut self, item: Item) -> AppResult<Item> {
        if self.items.iter().any(|existing| existing.id == item.id) {
            return Err(AppError::Conflict);
        }
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn update_item(&mut self, id: i64, item: Item) -> AppResult<Item> {
        let slot = self
            .items
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(AppError::NotFound)?;
        *slot = item.clone();
        Ok(item)
    }

    /// Removes every item with `id`, returning how many were dropped.
    pub fn delete_item(&mut self, id: i64) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before - self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(id: i64, name: &str) -> Item {
        Item::new(id, name, 1.5)
    }

    fn ids(store: &ItemStore) -> Vec<i64> {
        store.list_items().iter().map(|i| i.id).collect()
    }

    // ── Basic ops ──────────────────────────────────────────────────────────────

    #[test]
    fn new_store_is_empty() {
        let store = ItemStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.list_items().is_empty());
    }

    #[test]
    fn create_then_get_returns_identical_record() {
        let mut store = ItemStore::new();
        let mut item = make(1, "Widget");
        item.description = Some("Round".to_string());
        let created = store.create_item(item.clone()).unwrap();
        assert_eq!(created, item);
        assert_eq!(store.get_item(1).unwrap(), &item);
    }

    #[test]
    fn duplicate_create_conflicts_and_keeps_one() {
        let mut store = ItemStore::new();
        store.create_item(make(7, "First")).unwrap();
        let err = store.create_item(make(7, "Second")).unwrap_err();
        assert_eq!(err, AppError::Conflict);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_item(7).unwrap().name, "First");
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = ItemStore::new();
        assert_eq!(store.get_item(42).unwrap_err(), AppError::NotFound);
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut store = ItemStore::new();
        store.create_item(make(1, "Widget")).unwrap();
        assert_eq!(store.delete_item(99), 0);
        assert_eq!(ids(&store), vec![1]);
    }

    // ── Update ─────────────────────────────────────────────────────────────────

    #[test]
    fn update_replaces_all_fields() {
        let mut store = ItemStore::new();
        store.create_item(make(1, "Widget")).unwrap();

        let replacement = Item {
            id: 1,
            name: "Widget2".to_string(),
            description: Some("Bigger".to_string()),
            price: 12.0,
            in_stock: false,
        };
        let updated = store.update_item(1, replacement.clone()).unwrap();
        assert_eq!(updated, replacement);
        assert_eq!(store.get_item(1).unwrap(), &replacement);
    }

    #[test]
    fn update_missing_is_not_found_and_unchanged() {
        let mut store = ItemStore::new();
        store.create_item(make(1, "Widget")).unwrap();
        let err = store.update_item(2, make(2, "Ghost")).unwrap_err();
        assert_eq!(err, AppError::NotFound);
        assert_eq!(store.list_items(), &[make(1, "Widget")]);
    }

    #[test]
    fn update_keeps_position() {
        let mut store = ItemStore::new();
        for id in 1..=3 {
            store.create_item(make(id, "Item")).unwrap();
        }
        store.update_item(2, make(2, "Middle")).unwrap();
        let names: Vec<&str> = store.list_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Item", "Middle", "Item"]);
    }

    #[test]
    fn update_does_not_cross_check_body_id() {
        let mut store = ItemStore::new();
        store.create_item(make(1, "Widget")).unwrap();
        store.update_item(1, make(5, "Renamed")).unwrap();
        assert_eq!(ids(&store), vec![5]);
        assert_eq!(store.get_item(1).unwrap_err(), AppError::NotFound);
    }

    #[test]
    fn delete_removes_every_match() {
        let mut store = ItemStore::new();
        store.create_item(make(1, "A")).unwrap();
        store.create_item(make(2, "B")).unwrap();
        // Re-keying 2 → 1 through update leaves two items with id 1.
        store.update_item(2, make(1, "B")).unwrap();
        assert_eq!(store.get_item(1).unwrap().name, "A", "lookup returns first match");
        assert_eq!(store.delete_item(1), 2);
        assert_eq!(store.len(), 0);
    }

    // ── Ordering ───────────────────────────────────────────────────────────────

    #[test]
    fn list_after_n_creates_and_one_delete_preserves_order() {
        let mut store = ItemStore::new();
        let created = [30, 10, 50, 20, 40];
        for id in created {
            store.create_item(make(id, "Item")).unwrap();
        }
        assert_eq!(store.delete_item(50), 1);
        assert_eq!(ids(&store), vec![30, 10, 20, 40]);
        assert_eq!(store.len(), created.len() - 1);
    }
}
