pub mod p900_stock_ledger;
pub mod p901_product_avg_cost;
