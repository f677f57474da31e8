pub mod aggregate;

pub use aggregate::{
    AccountCard, AccountCategory, AccountParent, AccountParentDto, AccountParentId, BoardColumn,
    CategorizationBoard,
};
