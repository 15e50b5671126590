use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    inventory::ItemRepository,
    models::{
        cart::{CartEntry, CartLine, CartSummary},
        item::{Item, ItemId},
    },
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CartError {
    #[error(
        "Sorry, we only have {available} of \"{name}\" in stock. You already have {in_cart} in your cart."
    )]
    StockExceeded {
        item_id: ItemId,
        name: String,
        available: u32,
        in_cart: u32,
    },

    #[error("Invalid quantity {quantity}: quantity must be at least 1")]
    InvalidQuantity { quantity: u32 },
}

/// Purchase intent accumulated against live catalog stock.
///
/// Lines are kept in first-added order. Stock is checked only when a line is
/// added or grown; later stock changes do not retroactively shrink the cart.
#[derive(Debug, Default, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `quantity` more units of `item`.
    ///
    /// Fails without touching the cart when the reservation would exceed the
    /// item's current stock.
    pub fn add_to_cart(&mut self, item: &Item, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }

        let in_cart = self.quantity_of(item.id);
        let prospective_total = u64::from(in_cart) + u64::from(quantity);

        if prospective_total > u64::from(item.quantity) {
            warn!(
                "Rejected adding {} x '{}': {} in stock, {} already in cart",
                quantity, item.name, item.quantity, in_cart
            );
            return Err(CartError::StockExceeded {
                item_id: item.id,
                name: item.name.clone(),
                available: item.quantity,
                in_cart,
            });
        }

        match self.lines.iter_mut().find(|line| line.item_id == item.id) {
            Some(line) => line.quantity_in_cart += quantity,
            None => self.lines.push(CartLine::new(item.id, quantity)),
        }

        info!("Added {} x '{}' to cart", quantity, item.name);
        Ok(())
    }

    /// Returns true if a line was removed.
    pub fn remove_from_cart(&mut self, id: ItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.item_id != id);
        let removed = self.lines.len() != before;

        if removed {
            info!("Removed item {} from cart", id);
        } else {
            debug!("Item {} not in cart, nothing to remove", id);
        }
        removed
    }

    pub fn clear(&mut self) {
        debug!("Clearing cart with {} lines", self.lines.len());
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, id: ItemId) -> u32 {
        self.lines
            .iter()
            .find(|line| line.item_id == id)
            .map(|line| line.quantity_in_cart)
            .unwrap_or(0)
    }

    /// Cart lines resolved against `repository`, in cart order.
    ///
    /// Lines whose item is no longer in the repository are skipped.
    pub fn cart_items<'a, R: ItemRepository>(&self, repository: &'a R) -> Vec<CartEntry<'a>> {
        self.lines
            .iter()
            .filter_map(|line| {
                let item = repository.get_by_id(line.item_id);
                if item.is_none() {
                    warn!("Cart line for item {} has no catalog entry", line.item_id);
                }
                item.map(|item| CartEntry {
                    item,
                    quantity_in_cart: line.quantity_in_cart,
                })
            })
            .collect()
    }

    /// Sum of price times quantity using each item's current price.
    ///
    /// Folds from `0.0` so an empty cart totals positive zero.
    pub fn cart_total<R: ItemRepository>(&self, repository: &R) -> f64 {
        self.cart_items(repository)
            .iter()
            .fold(0.0, |sum, entry| sum + entry.subtotal())
    }

    pub fn summary<R: ItemRepository>(&self, repository: &R) -> CartSummary {
        let entries = self.cart_items(repository);
        CartSummary {
            line_count: entries.len(),
            unit_count: entries
                .iter()
                .map(|entry| u64::from(entry.quantity_in_cart))
                .sum(),
            total: entries.iter().fold(0.0, |sum, entry| sum + entry.subtotal()),
        }
    }

    /// Drops lines whose item no longer exists in `repository`.
    pub fn prune_missing<R: ItemRepository>(&mut self, repository: &R) -> usize {
        let before = self.lines.len();
        self.lines
            .retain(|line| repository.get_by_id(line.item_id).is_some());
        let pruned = before - self.lines.len();
        if pruned > 0 {
            info!("Pruned {} cart lines for removed items", pruned);
        }
        pruned
    }
}
