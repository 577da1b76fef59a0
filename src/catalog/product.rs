use serde::Serialize;

/// One catalog entry.
///
/// Records are compiled into the binary and never mutated, so the
/// display list can hold plain copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Display name; the search key.
    pub name: &'static str,
    pub description: &'static str,
    /// Price in whole currency units; the sort key.
    pub price: u32,
    pub labels: &'static [&'static str],
}

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

/// The built-in catalog.
pub const PRODUCTS: [Product; 4] = [
    Product {
        name: "Decorus",
        description: LOREM,
        price: 1000,
        labels: &["Label 1", "Label 2", "Label 3"],
    },
    Product {
        name: "Eager",
        description: LOREM,
        price: 2000,
        labels: &["Label 1", "Label 2"],
    },
    Product {
        name: "Poppy Petals",
        description: LOREM,
        price: 3000,
        labels: &["Label 1", "Label 2"],
    },
    Product {
        name: "Electric Zap",
        description: LOREM,
        price: 4000,
        labels: &["Label 1", "Label 2"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_four_products_in_price_order() {
        let prices: Vec<u32> = PRODUCTS.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1000, 2000, 3000, 4000]);
    }

    #[test]
    fn decorus_carries_three_labels() {
        assert_eq!(PRODUCTS[0].labels.len(), 3);
        assert!(PRODUCTS[1..].iter().all(|p| p.labels.len() == 2));
    }
}
