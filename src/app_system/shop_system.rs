use tracing::{error, info, instrument};
use crate::actor_framework::ResourceActor;
use crate::app_system::SystemConfig;
use crate::clients::ProductClient;
use crate::domain::Product;
use crate::product_actor::ProductError;
use crate::shopping::ShoppingService;

/// The main application system: owns the product store actor and the
/// shopping service wired on top of it.
///
/// Must be created inside a tokio runtime.
pub struct ShopSystem {
    pub product_client: ProductClient,
    pub shopping_service: ShoppingService<ProductClient>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    #[instrument(name = "shop_system")]
    pub fn new(config: SystemConfig) -> Self {
        info!("Starting shop system");

        let (product_actor, product_resource_client) = ResourceActor::<Product>::new(config.buffer_size);
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        let shopping_service = ShoppingService::new(product_client.clone());

        info!("Shop system started");

        Self {
            product_client,
            shopping_service,
            handles: vec![product_handle],
        }
    }

    /// Saves the initial catalogue.
    #[instrument(skip(self, products))]
    pub async fn seed(&self, products: impl IntoIterator<Item = Product>) -> Result<usize, ProductError> {
        let mut seeded = 0;
        for product in products {
            self.product_client.save_product(product).await?;
            seeded += 1;
        }
        info!(seeded, "Catalogue seeded");
        Ok(seeded)
    }

    /// Stops the actors and waits for them to finish.
    ///
    /// Actors stop once every client handle is gone, so dropping the clients
    /// is the shutdown signal.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shop system");

        drop(self.shopping_service);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Shop system shutdown complete");
        Ok(())
    }
}
