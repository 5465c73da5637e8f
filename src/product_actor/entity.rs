use crate::actor_framework::Entity;
use crate::domain::Product;

impl Entity for Product {
    type Id = String;

    /// Products are keyed by name.
    fn id(&self) -> &String { &self.name }

    /// Rejects products that could never be looked up again.
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name must not be empty".to_string());
        }
        Ok(())
    }
}
