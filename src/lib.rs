//! # Shopping Cart
//!
//! A cart-and-checkout service over an actor-backed product store.
//!
//! - **Domain types** - [`Product`](domain::Product), [`Customer`](domain::Customer)
//!   and the insertion-ordered [`Cart`](domain::Cart)
//! - **Store** - a generic [`ResourceActor`](actor_framework::ResourceActor) keyed by
//!   product name, reached through [`ProductClient`](clients::ProductClient), which
//!   implements the [`ProductStore`](store::ProductStore) capability
//! - **Checkout** - [`ShoppingService`](shopping::ShoppingService) checks each cart
//!   line against stock and saves the decremented count, line by line
//! - **System** - [`ShopSystem`](app_system::ShopSystem) starts and stops the actors;
//!   [`setup_tracing`](app_system::setup_tracing) configures logging
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use shopping_cart::app_system::{ShopSystem, SystemConfig};
//! use shopping_cart::domain::{Customer, Product};
//!
//! let system = ShopSystem::new(SystemConfig::from_env());
//! system.seed(vec![Product::new("Tea", 10)]).await?;
//!
//! let mut cart = system.shopping_service.get_cart(Customer::new(1, "555-0100"));
//! cart.add(&Product::new("Tea", 10), 2);
//! assert!(system.shopping_service.buy(&cart).await?);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod product_actor;
pub mod shopping;
pub mod store;

#[cfg(test)]
mod mock_framework;
