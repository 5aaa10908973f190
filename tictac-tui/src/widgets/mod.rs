//! Reusable widget components.

pub mod grid;
pub mod status;

pub use grid::BoardGrid;
pub use status::{BannerArea, BannerText, StatusBanner};
