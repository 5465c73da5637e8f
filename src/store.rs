use async_trait::async_trait;
use crate::domain::Product;
use crate::product_actor::ProductError;

/// Persistence capability the shopping service is built on.
///
/// `ProductClient` implements it over the product store actor; anything that
/// can save and look up products by name can stand in for it.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Inserts or replaces the product with the same name.
    async fn save(&self, product: Product) -> Result<(), ProductError>;

    async fn find_all(&self) -> Result<Vec<Product>, ProductError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductError>;
}
