pub mod customer;
pub mod product;
pub mod cart;

pub use customer::*;
pub use product::*;
pub use cart::*;
