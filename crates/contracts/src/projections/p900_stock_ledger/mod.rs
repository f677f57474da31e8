pub mod dto;
pub mod rules;

pub use dto::{
    LedgerDraft, LedgerEntryDto, LedgerListQuery, LedgerLocation, LedgerRefType, StockBalance,
    StockBalanceQuery,
};
