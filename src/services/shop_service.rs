use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    inventory::{Catalog, ItemRepository},
    models::{
        cart::{CartEntry, CartSummary},
        item::{Item, ItemError, ItemId},
    },
    services::cart_service::{Cart, CartError},
};

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Item {0} not found")]
    ItemNotFound(ItemId),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("Item error: {0}")]
    Item(#[from] ItemError),
}

/// One user's view of the shop: a catalog and the cart built against it.
///
/// Sessions are constructed explicitly and share nothing, so several can
/// coexist (one per terminal session or per test).
pub struct ShopSession {
    catalog: Catalog,
    cart: Cart,
}

impl ShopSession {
    pub fn new(catalog: Catalog) -> Self {
        info!("Starting shop session with {} catalog items", catalog.len());
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn list_items(&self) -> &[Item] {
        self.catalog.list_all()
    }

    /// Search by name; a blank query lists every item.
    pub fn search(&self, query: &str) -> Vec<&Item> {
        let query = query.trim();
        debug!("Searching catalog for '{}'", query);
        let results = self.catalog.find_by_name(query);
        debug!("Search returned {} items", results.len());
        results
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.catalog.get_by_id(id)
    }

    pub fn add_item(&mut self, item: Item) {
        if self.catalog.contains(item.id) {
            warn!("Catalog already holds an item with id {}", item.id);
        }
        info!("Adding item {} ('{}') to catalog", item.id, item.name);
        self.catalog.add(item);
    }

    /// Removes every catalog item with `id`.
    ///
    /// Cart lines refer to items by id, so the line for `id` is dropped once
    /// no catalog item carries that id any more. Removing an unknown id
    /// leaves both catalog and cart untouched.
    pub fn remove_item(&mut self, id: ItemId) -> Vec<Item> {
        let removed = self.catalog.remove(id);
        if removed.is_empty() {
            debug!("Item {} not in catalog, nothing to remove", id);
            return removed;
        }

        if !self.catalog.contains(id) && self.cart.remove_from_cart(id) {
            info!("Dropped cart line for removed item {}", id);
        }
        info!("Removed {} catalog items with id {}", removed.len(), id);
        removed
    }

    pub fn add_to_cart(&mut self, id: ItemId, quantity: u32) -> Result<(), ShopError> {
        let item = self
            .catalog
            .get_by_id(id)
            .ok_or(ShopError::ItemNotFound(id))?;
        self.cart.add_to_cart(item, quantity)?;
        Ok(())
    }

    pub fn remove_from_cart(&mut self, id: ItemId) -> bool {
        self.cart.remove_from_cart(id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        info!("Cart cleared");
    }

    pub fn cart_items(&self) -> Vec<CartEntry<'_>> {
        self.cart.cart_items(&self.catalog)
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.cart_total(&self.catalog)
    }

    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary(&self.catalog)
    }

    pub fn update_price(&mut self, id: ItemId, price: f64) -> Result<(), ShopError> {
        let item = self
            .catalog
            .get_by_id_mut(id)
            .ok_or(ShopError::ItemNotFound(id))?;
        item.update_price(price)?;
        info!("Updated price of item {} to {}", id, price);
        Ok(())
    }

    pub fn update_condition(&mut self, id: ItemId, condition: &str) -> Result<(), ShopError> {
        let item = self
            .catalog
            .get_by_id_mut(id)
            .ok_or(ShopError::ItemNotFound(id))?;
        item.update_condition(condition);
        info!("Updated condition of item {} to '{}'", id, condition);
        Ok(())
    }

    /// Reduces stock with floor-at-zero semantics; cart lines are left as they are.
    pub fn reduce_stock(&mut self, id: ItemId, count: u32) -> Result<u32, ShopError> {
        let item = self
            .catalog
            .get_by_id_mut(id)
            .ok_or(ShopError::ItemNotFound(id))?;
        item.reduce_quantity(count);
        info!("Reduced stock of item {} by {}, {} left", id, count, item.quantity);
        Ok(item.quantity)
    }
}
