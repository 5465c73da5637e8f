use async_trait::async_trait;
use crate::actor_framework::ResourceClient;
use crate::domain::Product;
use crate::impl_basic_client;
use crate::product_actor::ProductError;
use crate::store::ProductStore;

/// Client for interacting with the Product store actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, String, ProductError, product);

#[async_trait]
impl ProductStore for ProductClient {
    async fn save(&self, product: Product) -> Result<(), ProductError> {
        self.save_product(product).await
    }

    async fn find_all(&self) -> Result<Vec<Product>, ProductError> {
        self.list_products().await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductError> {
        self.find_product(name.to_string()).await
    }
}
