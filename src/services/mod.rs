pub mod cart_service;
pub mod shop_service;

pub use cart_service::*;
pub use shop_service::*;
