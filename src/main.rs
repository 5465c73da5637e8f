use tracing::{error, info, warn, Instrument};
use shopping_cart::app_system::{setup_tracing, ShopSystem, SystemConfig};
use shopping_cart::domain::{Customer, Product};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting shop demo");

    let system = ShopSystem::new(SystemConfig::from_env());

    let tea = Product::new("Tea", 10);
    let milk = Product::new("Milk", 2);
    system
        .seed(vec![tea.clone(), milk.clone()])
        .await
        .map_err(|e| e.to_string())?;

    let service = &system.shopping_service;
    let mut cart = service.get_cart(Customer::new(1, "7-982-555-64-64"));
    cart.add(&tea, 7);
    cart.add(&milk, 1);

    let span = tracing::info_span!("first_purchase");
    let bought = async { service.buy(&cart).await }
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;
    info!(bought, "First purchase finished");

    // Asks for more tea than is left
    cart.edit(&tea, 5);
    let span = tracing::info_span!("second_purchase");
    match async { service.buy(&cart).await }.instrument(span).await {
        Ok(bought) => info!(bought, "Second purchase finished"),
        Err(e) => warn!(error = %e, "Second purchase refused"),
    }

    match service.get_all_products().await {
        Ok(products) => {
            for product in products {
                info!(product = %product.name, count = product.count, "Stock level");
            }
        }
        Err(e) => error!(error = %e, "Could not list products"),
    }

    system.shutdown().await?;

    info!("Shop demo completed");
    Ok(())
}
