use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductAvgCostDto {
    pub product_ref: String,
    pub product_name: Option<String>,
    pub total_quantity: f64,
    pub total_value: f64,
    pub avg_cost: f64,
    pub updated_at: String,
}

/// Posted purchasing line reduced to what the average needs
#[derive(Debug, Clone, PartialEq)]
pub struct CostInput {
    pub product_ref: String,
    pub quantity: f64,
    pub price: f64,
}

/// Weighted average per product: Σ(quantity * price) / Σ quantity.
/// Returns `(product_ref, total_quantity, total_value, avg_cost)` sorted by product.
pub fn compute_avg_costs(inputs: &[CostInput]) -> Vec<(String, f64, f64, f64)> {
    let mut totals: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for input in inputs {
        let slot = totals.entry(input.product_ref.as_str()).or_insert((0.0, 0.0));
        slot.0 += input.quantity;
        slot.1 += input.quantity * input.price;
    }
    totals
        .into_iter()
        .map(|(product, (qty, value))| {
            let avg = if qty > 0.0 { value / qty } else { 0.0 };
            (product.to_string(), qty, value, avg)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(p: &str, quantity: f64, price: f64) -> CostInput {
        CostInput {
            product_ref: p.into(),
            quantity,
            price,
        }
    }

    #[test]
    fn test_weighted_average() {
        let rows = compute_avg_costs(&[input("a", 10.0, 100.0), input("a", 30.0, 200.0), input("b", 0.0, 50.0)]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ("a".to_string(), 40.0, 7000.0, 175.0));
        assert_eq!(rows[1], ("b".to_string(), 0.0, 0.0, 0.0));
    }
}
