pub mod aggregate;

pub use aggregate::{Account, AccountDto, AccountId, AccountType, SetAccountParentRequest};
