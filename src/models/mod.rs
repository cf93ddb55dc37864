//! Shared data models spanning the screener layers.

pub mod market;

pub use market::{PricePoint, StockResult};
