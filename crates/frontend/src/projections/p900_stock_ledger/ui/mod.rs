pub mod balances;
pub mod ledger;

pub use balances::StockBalanceList;
pub use ledger::StockLedgerList;
