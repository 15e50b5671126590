pub mod catalog;
pub mod loader;
pub mod seed;

pub use catalog::*;
pub use loader::*;
