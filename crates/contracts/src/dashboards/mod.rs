pub mod common;
pub mod d400_overview;
pub mod d401_purchasing;
pub mod d402_color_kitchen;
