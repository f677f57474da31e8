pub mod board;
pub mod details;
pub mod list;

pub use board::AccountBoard;
pub use list::AccountParentList;
