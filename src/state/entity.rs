//! Normalized keyed collection.
//!
//! Entities are looked up by key in O(1) and iterate in the order of the
//! last `set_all`. There is no delete: an entity disappears only when a
//! later `set_all` no longer contains it.

use indexmap::IndexMap;

use crate::model::Article;

/// An entity with a stable primary key.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Article {
    fn key(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore<T: Keyed> {
    entities: IndexMap<String, T>,
}

impl<T: Keyed> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            entities: IndexMap::new(),
        }
    }
}

impl<T: Keyed> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection. Iteration follows `items` order; a
    /// repeated key keeps its first position and its last value.
    pub fn set_all(&mut self, items: impl IntoIterator<Item = T>) {
        self.entities.clear();
        for item in items {
            self.entities.insert(item.key().to_string(), item);
        }
    }

    /// Insert or replace one entity. An existing key keeps its position.
    pub fn set_one(&mut self, item: T) {
        self.entities.insert(item.key().to_string(), item);
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entities.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entities.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entities.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
        value: u32,
    }

    impl Keyed for Item {
        fn key(&self) -> &str {
            self.id
        }
    }

    fn item(id: &'static str, value: u32) -> Item {
        Item { id, value }
    }

    #[test]
    fn set_all_keeps_input_order() {
        let mut store = EntityStore::new();
        store.set_all(vec![item("c", 1), item("a", 2), item("b", 3)]);
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn set_all_replaces_previous_contents() {
        let mut store = EntityStore::new();
        store.set_all(vec![item("a", 1), item("b", 2)]);
        store.set_all(vec![item("z", 9)]);
        assert_eq!(store.len(), 1);
        assert!(!store.contains("a"));
        assert_eq!(store.get("z").map(|i| i.value), Some(9));
    }

    #[test]
    fn set_one_replaces_in_place() {
        let mut store = EntityStore::new();
        store.set_all(vec![item("a", 1), item("b", 2), item("c", 3)]);
        store.set_one(item("b", 20));
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(store.get("b").map(|i| i.value), Some(20));
    }

    #[test]
    fn set_one_appends_unknown_key() {
        let mut store = EntityStore::new();
        store.set_all(vec![item("a", 1)]);
        store.set_one(item("n", 5));
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["a", "n"]);
    }

    #[test]
    fn duplicate_keys_in_set_all_keep_last_value() {
        let mut store = EntityStore::new();
        store.set_all(vec![item("a", 1), item("b", 2), item("a", 3)]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(store.get("a").map(|i| i.value), Some(3));
    }
}
