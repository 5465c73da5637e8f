use thiserror::Error;
use crate::product_actor::ProductError;

/// Errors that can abort a purchase.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuyError {
    #[error("insufficient stock of product '{product}'")]
    StockShortage { product: String },
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Product store error: {0}")]
    Store(#[from] ProductError),
}
