//! Checkout: turning a customer's cart into stock movements.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
