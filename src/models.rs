//! Storefront Models
//!
//! Data structures matching the remote plant API.

use serde::{Deserialize, Serialize};

/// Plant record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

/// Category record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub category_name: String,
}

/// Plant list filter. `All` is the synthetic "All Trees" entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(u32),
}

/// One product in the cart plus its quantity (always >= 1)
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub plant: Plant,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.plant.price * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plant_ignores_unknown_fields() {
        let plant: Plant = serde_json::from_value(json!({
            "id": 3,
            "image": "https://i.ibb.co/neem.png",
            "name": "Neem Tree",
            "description": "Medicinal tree",
            "category": "Medicinal Tree",
            "price": 500,
            "rating": 4.5
        }))
        .unwrap();

        assert_eq!(plant.id, 3);
        assert_eq!(plant.name, "Neem Tree");
        assert_eq!(plant.price, 500.0);
    }

    #[test]
    fn test_cart_line_subtotal() {
        let line = CartLine {
            plant: Plant {
                id: 1,
                name: "Mango".to_string(),
                description: String::new(),
                category: "Fruit Tree".to_string(),
                price: 120.0,
                image: String::new(),
            },
            quantity: 3,
        };
        assert_eq!(line.subtotal(), 360.0);
    }
}
