/// Represents a product in the inventory.
///
/// The name is the identity key: the store holds at most one product per name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub count: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// Returns a copy of this product carrying a different stock count.
    pub fn with_count(&self, count: u32) -> Self {
        Self {
            name: self.name.clone(),
            count,
        }
    }
}
