use tracing::{debug, error, info, instrument, warn};
use crate::domain::{Cart, CartLine, Customer, Product};
use crate::shopping::BuyError;
use crate::store::ProductStore;

/// Validates carts against the product store and commits purchases.
///
/// Holds nothing but the injected store; carts belong to their callers.
#[derive(Clone)]
pub struct ShoppingService<S: ProductStore> {
    store: S,
}

impl<S: ProductStore> ShoppingService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Hands out a fresh, empty cart for `customer`.
    pub fn get_cart(&self, customer: Customer) -> Cart {
        Cart::new(customer)
    }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<Product>, BuyError> {
        debug!("Listing products");
        Ok(self.store.find_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_product_by_name(&self, name: &str) -> Result<Option<Product>, BuyError> {
        debug!("Looking up product");
        Ok(self.store.find_by_name(name).await?)
    }

    /// Buys everything in `cart`.
    ///
    /// Returns `Ok(false)` without touching the store when the cart is empty
    /// or any line requests a negative number of units. Otherwise lines are processed
    /// in cart order: each one is looked up, and its decremented stock saved
    /// before the next line is read. A shortage aborts the purchase with
    /// [`BuyError::StockShortage`]; stock already saved for earlier lines is
    /// not restored.
    ///
    /// # Errors
    /// - [`BuyError::StockShortage`] when a line asks for more than is in stock
    /// - [`BuyError::ProductNotFound`] when the store has no product by that name
    /// - [`BuyError::Store`] when the store itself fails
    #[instrument(fields(customer_id = cart.owner().id, lines = cart.len()), skip(self, cart))]
    pub async fn buy(&self, cart: &Cart) -> Result<bool, BuyError> {
        if cart.is_empty() {
            debug!("Cart is empty, nothing to buy");
            return Ok(false);
        }

        if let Some(line) = cart.items().find(|line| line.quantity < 0) {
            warn!(
                product = %line.product.name,
                quantity = line.quantity,
                "Refusing cart with negative quantity"
            );
            return Ok(false);
        }

        for line in cart.items() {
            self.buy_line(line).await?;
        }

        info!("Purchase completed");
        Ok(true)
    }

    /// Expects `line.quantity >= 0`.
    #[instrument(fields(product = %line.product.name, quantity = line.quantity), skip(self, line))]
    async fn buy_line(&self, line: &CartLine) -> Result<(), BuyError> {
        let name = &line.product.name;

        let product = match self.store.find_by_name(name).await? {
            Some(product) => product,
            None => {
                error!("Product not found");
                return Err(BuyError::ProductNotFound(name.clone()));
            }
        };

        let requested = line.quantity.unsigned_abs();
        match product.count.checked_sub(requested) {
            Some(remaining) => {
                self.store.save(product.with_count(remaining)).await?;
                info!(remaining, "Stock updated");
                Ok(())
            }
            None => {
                error!(available = product.count, "Insufficient stock");
                Err(BuyError::StockShortage {
                    product: name.clone(),
                })
            }
        }
    }
}
