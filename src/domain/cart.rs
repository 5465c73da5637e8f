use indexmap::IndexMap;
use crate::domain::{Customer, Product};

/// One entry of a cart: a product snapshot and how many units are requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i32,
}

/// A customer's basket for a single checkout attempt.
///
/// Lines are keyed by product name and kept in insertion order, which is the
/// order `ShoppingService::buy` processes them in.
///
/// Quantities are not validated here: zero and negative values are accepted
/// and left for the purchase step to deal with.
#[derive(Debug, Clone)]
pub struct Cart {
    owner: Customer,
    items: IndexMap<String, CartLine>,
}

impl Cart {
    pub fn new(owner: Customer) -> Self {
        Self {
            owner,
            items: IndexMap::new(),
        }
    }

    pub fn owner(&self) -> &Customer {
        &self.owner
    }

    /// Adds `quantity` units of `product`, increasing the existing line if the
    /// product is already in the cart.
    pub fn add(&mut self, product: &Product, quantity: i32) {
        self.items
            .entry(product.name.clone())
            .and_modify(|line| line.quantity = line.quantity.saturating_add(quantity))
            .or_insert_with(|| CartLine {
                product: product.clone(),
                quantity,
            });
    }

    /// Replaces the requested quantity for `product`.
    ///
    /// A product that is not in the cart yet is appended as a new line.
    pub fn edit(&mut self, product: &Product, quantity: i32) {
        match self.items.get_mut(&product.name) {
            Some(line) => line.quantity = quantity,
            None => {
                self.items.insert(
                    product.name.clone(),
                    CartLine {
                        product: product.clone(),
                        quantity,
                    },
                );
            }
        }
    }

    /// Drops the line for `name`, returning the quantity it held.
    pub fn remove(&mut self, name: &str) -> Option<i32> {
        // shift_remove keeps the remaining lines in insertion order
        self.items.shift_remove(name).map(|line| line.quantity)
    }

    pub fn quantity_of(&self, name: &str) -> Option<i32> {
        self.items.get(name).map(|line| line.quantity)
    }

    pub fn items(&self) -> impl Iterator<Item = &CartLine> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart() -> Cart {
        Cart::new(Customer::new(1, "7-982-555-64-64"))
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = cart();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.owner().id, 1);
    }

    #[test]
    fn test_add_accumulates_quantity() {
        let mut cart = cart();
        let tea = Product::new("Tea", 10);

        cart.add(&tea, 2);
        cart.add(&tea, 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("Tea"), Some(5));
    }

    #[test]
    fn test_edit_overwrites_quantity() {
        let mut cart = cart();
        let tea = Product::new("Tea", 10);

        cart.add(&tea, 7);
        cart.edit(&tea, 3);

        assert_eq!(cart.quantity_of("Tea"), Some(3));
    }

    #[test]
    fn test_edit_missing_product_appends_line() {
        let mut cart = cart();
        cart.add(&Product::new("Tea", 1), 1);
        cart.edit(&Product::new("Milk", 1), 4);

        let names: Vec<&str> = cart.items().map(|line| line.product.name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Milk"]);
        assert_eq!(cart.quantity_of("Milk"), Some(4));
    }

    #[test]
    fn test_items_keep_insertion_order_after_remove() {
        let mut cart = cart();
        for name in ["c", "a", "b"] {
            cart.add(&Product::new(name, 1), 1);
        }

        assert_eq!(cart.remove("a"), Some(1));
        assert_eq!(cart.remove("a"), None);

        let names: Vec<&str> = cart.items().map(|line| line.product.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b"]);
    }

    #[test]
    fn test_negative_quantity_is_accepted() {
        let mut cart = cart();
        cart.add(&Product::new("Mars", 3), -3);
        assert_eq!(cart.quantity_of("Mars"), Some(-3));
    }
}
