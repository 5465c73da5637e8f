//! Typed clients over the generic store actors.

pub mod macros;
pub mod product_client;

pub use product_client::ProductClient;
