use serde::{Deserialize, Serialize};

use crate::models::item::{Item, ItemId};

/// A reservation of `quantity_in_cart` units of one catalog item.
///
/// Lines refer to items by id; the catalog stays the owner of the item itself,
/// so prices and stock are always read live.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub item_id: ItemId,
    pub quantity_in_cart: u32,
}

impl CartLine {
    pub fn new(item_id: ItemId, quantity_in_cart: u32) -> Self {
        Self {
            item_id,
            quantity_in_cart,
        }
    }
}

/// A cart line resolved against the catalog it was built from.
#[derive(Debug, Clone, Copy)]
pub struct CartEntry<'a> {
    pub item: &'a Item,
    pub quantity_in_cart: u32,
}

impl<'a> CartEntry<'a> {
    pub fn subtotal(&self) -> f64 {
        self.item.price * f64::from(self.quantity_in_cart)
    }
}

// Cart summary DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    pub line_count: usize,
    pub unit_count: u64,
    pub total: f64,
}
