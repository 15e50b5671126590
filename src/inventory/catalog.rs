use tracing::debug;

use crate::models::item::{Item, ItemId};

/// Item repository trait for catalog access operations
pub trait ItemRepository {
    fn add(&mut self, item: Item);
    fn remove(&mut self, id: ItemId) -> Vec<Item>;
    fn get_by_id(&self, id: ItemId) -> Option<&Item>;
    fn get_by_id_mut(&mut self, id: ItemId) -> Option<&mut Item>;
    fn find_by_name(&self, search_term: &str) -> Vec<&Item>;
    fn list_all(&self) -> &[Item];
}

/// In-memory implementation of ItemRepository.
///
/// Items are kept in insertion order and every lookup is a linear scan;
/// catalogs hold a few dozen records at most.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl ItemRepository for Catalog {
    /// Appends without a uniqueness check; callers own id assignment.
    fn add(&mut self, item: Item) {
        debug!("Adding item {} ('{}') to catalog", item.id, item.name);
        self.items.push(item);
    }

    /// Removes every item carrying `id`; an unknown id removes nothing.
    fn remove(&mut self, id: ItemId) -> Vec<Item> {
        let (removed, kept): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.id == id);
        self.items = kept;
        debug!("Removed {} items with id {} from catalog", removed.len(), id);
        removed
    }

    fn get_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_by_id_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn find_by_name(&self, search_term: &str) -> Vec<&Item> {
        let term_lower = search_term.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&term_lower))
            .collect()
    }

    fn list_all(&self) -> &[Item] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::seed::sample_items;

    fn ids(items: &[&Item]) -> Vec<u32> {
        items.iter().map(|item| item.id.0).collect()
    }

    #[test]
    fn test_list_all_keeps_insertion_order() {
        let catalog: Catalog = sample_items().into_iter().collect();
        let listed: Vec<u32> = catalog.list_all().iter().map(|item| item.id.0).collect();
        assert_eq!(listed, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let catalog: Catalog = sample_items().into_iter().collect();
        let lower = ids(&catalog.find_by_name("georgian"));
        let upper = ids(&catalog.find_by_name("GEORGIAN"));
        assert_eq!(lower, vec![1, 3, 5]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let catalog: Catalog = sample_items().into_iter().collect();
        assert_eq!(catalog.find_by_name("").len(), catalog.len());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut catalog: Catalog = sample_items().into_iter().collect();
        assert!(catalog.remove(ItemId(99)).is_empty());
        assert_eq!(catalog.len(), 8);

        let removed = catalog.remove(ItemId(4));
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].name, "Bronze Pectoral Cross");
        assert!(catalog.get_by_id(ItemId(4)).is_none());
        assert!(!catalog.contains(ItemId(4)));
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let mut catalog = Catalog::new();
        let item = sample_items().remove(0);
        catalog.add(item.clone());
        catalog.add(item);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_remove_drops_every_item_with_id() {
        let mut catalog: Catalog = sample_items().into_iter().collect();
        let mut duplicate = sample_items().remove(0);
        duplicate.name = "Second Georgian Sword".to_string();
        catalog.add(duplicate);

        let removed = catalog.remove(ItemId(1));
        assert_eq!(removed.len(), 2);
        assert!(catalog.get_by_id(ItemId(1)).is_none());
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.list_all()[0].id, ItemId(2));
    }
}
