pub mod basket;
pub mod rebalance;
pub mod strategy;

pub use basket::*;
pub use rebalance::*;
pub use strategy::*;
