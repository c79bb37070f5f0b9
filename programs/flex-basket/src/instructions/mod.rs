pub mod deposit;
pub mod initialize_basket;
pub mod initialize_rebalance;
pub mod initialize_strategy;
pub mod rebalance_once;
pub mod redeem;
pub mod set_basket_pause;
pub mod set_rebalance_interval;
pub mod set_rebalance_pause;
pub mod update_deposit_limits;
pub mod update_strategy;

pub use deposit::*;
pub use initialize_basket::*;
pub use initialize_rebalance::*;
pub use initialize_strategy::*;
pub use rebalance_once::*;
pub use redeem::*;
pub use set_basket_pause::*;
pub use set_rebalance_interval::*;
pub use set_rebalance_pause::*;
pub use update_deposit_limits::*;
pub use update_strategy::*;
