/// A shopper. Identifies who owns a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: u64,
    pub contact: String,
}

impl Customer {
    /// Creates a new Customer.
    ///
    /// # Arguments
    /// * `id` - Customer number
    /// * `contact` - Phone number or other contact handle
    pub fn new(id: u64, contact: impl Into<String>) -> Self {
        Self {
            id,
            contact: contact.into(),
        }
    }
}
