//! Display Helpers
//!
//! Pure formatting used by the card, cart and modal components.

use crate::models::Plant;

pub const CURRENCY_SIGN: &str = "৳";

/// First `cap` plants in API order
pub fn visible_plants(plants: &[Plant], cap: usize) -> Vec<Plant> {
    plants.iter().take(cap).cloned().collect()
}

/// Fixed character slice followed by `...` (not word-aware)
pub fn truncate_description(text: &str, chars: usize) -> String {
    let preview: String = text.chars().take(chars).collect();
    format!("{}...", preview)
}

/// Whole amounts print without decimals, others with two
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
    }
}

pub fn format_price(amount: f64) -> String {
    format!("{}{}", CURRENCY_SIGN, format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_plant(id: u32) -> Plant {
        Plant {
            id,
            name: format!("Plant {}", id),
            description: String::new(),
            category: String::new(),
            price: 1.0,
            image: String::new(),
        }
    }

    #[test]
    fn test_visible_plants_caps_list() {
        let plants: Vec<Plant> = (1..=12).map(make_plant).collect();
        let shown = visible_plants(&plants, 9);
        assert_eq!(shown.len(), 9);
        assert_eq!(shown[0].id, 1);
        assert_eq!(shown[8].id, 9);

        assert_eq!(visible_plants(&plants[..2], 9).len(), 2);
    }

    #[test]
    fn test_truncate_description() {
        assert_eq!(truncate_description("A fast-growing tree", 8), "A fast-g...");
        assert_eq!(truncate_description("Fig", 8), "Fig...");
        // Multi-byte text is cut on char boundaries
        assert_eq!(truncate_description("নিম গাছ ঔষধি", 3), "নিম...");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(250.0), "৳250");
        assert_eq!(format_price(99.5), "৳99.50");
        assert_eq!(format_amount(0.0), "0");
    }
}
