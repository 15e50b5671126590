pub mod cart;
pub mod item;

pub use cart::*;
pub use item::*;
