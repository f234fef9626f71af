//! Shopping Cart
//!
//! In-memory, insertion-ordered cart. One line per plant id.

use crate::models::{CartLine, Plant};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Add one unit of `plant`. Repeated adds bump the existing line.
    pub fn add(&mut self, plant: Plant) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.plant.id == plant.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine { plant, quantity: 1 });
        }
    }

    /// Drop the whole line for `plant_id`. Returns false if it was not in the cart.
    pub fn remove(&mut self, plant_id: u32) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|line| line.plant.id != plant_id);
        self.lines.len() < len_before
    }

    /// Sum of price x quantity over all lines
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantity_of(cart: &Cart, plant_id: u32) -> Option<u32> {
        cart.lines()
            .iter()
            .find(|line| line.plant.id == plant_id)
            .map(|line| line.quantity)
    }

    fn make_plant(id: u32, price: f64) -> Plant {
        Plant {
            id,
            name: format!("Plant {}", id),
            description: "A plant".to_string(),
            category: "Shade Tree".to_string(),
            price,
            image: String::new(),
        }
    }

    #[test]
    fn test_add_same_plant_twice_merges_lines() {
        let mut cart = Cart::default();
        cart.add(make_plant(1, 100.0));
        cart.add(make_plant(1, 100.0));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(quantity_of(&cart, 1), Some(2));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::default();
        cart.add(make_plant(7, 10.0));
        cart.add(make_plant(2, 10.0));
        cart.add(make_plant(7, 10.0));

        let ids: Vec<u32> = cart.lines().iter().map(|line| line.plant.id).collect();
        assert_eq!(ids, vec![7, 2]);
    }

    #[test]
    fn test_remove_missing_plant_is_noop() {
        let mut cart = Cart::default();
        cart.add(make_plant(1, 100.0));
        let before = cart.clone();

        assert!(!cart.remove(42));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_drops_whole_line() {
        let mut cart = Cart::default();
        cart.add(make_plant(1, 100.0));
        cart.add(make_plant(1, 100.0));
        cart.add(make_plant(2, 50.0));

        assert!(cart.remove(1));
        assert_eq!(quantity_of(&cart, 1), None);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::default();
        cart.add(make_plant(1, 100.0));
        cart.add(make_plant(1, 100.0));
        cart.add(make_plant(2, 50.0));
        assert_eq!(cart.total(), 250.0);

        cart.remove(1);
        assert_eq!(cart.total(), 50.0);

        cart.remove(2);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }
}
