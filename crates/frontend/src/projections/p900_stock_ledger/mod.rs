pub mod ui;

pub use ui::{StockBalanceList, StockLedgerList};
