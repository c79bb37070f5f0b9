use anchor_lang::prelude::*;

use crate::state::Asset;

/// Event emitted when the basket ledger is created
#[event]
pub struct BasketInitialized {
    pub config: Pubkey,
    pub admin: Pubkey,
    pub guardian: Pubkey,
    pub emergency_admin: Pubkey,
    pub flex_mint: Pubkey,
    pub usdc_mint: Pubkey,
    pub usdt_mint: Pubkey,
    pub max_deposit_amount: u64,
    pub max_daily_deposit: u64,
    pub timestamp: i64,
}

/// Event emitted when a reserve asset is deposited for FLEX
#[event]
pub struct Deposited {
    pub user: Pubkey,
    pub asset: Asset,
    pub amount: u64,
    pub flex_minted: u64,
    pub nav: u64,
    pub flex_supply: u64,
    pub timestamp: i64,
}

/// Event emitted when FLEX is redeemed for a reserve asset
#[event]
pub struct Redeemed {
    pub user: Pubkey,
    pub asset: Asset,
    pub flex_burned: u64,
    pub payout: u64,
    pub nav: u64,
    pub flex_supply: u64,
    pub timestamp: i64,
}

/// Event emitted when deposits are paused or resumed
#[event]
pub struct BasketPauseToggled {
    pub authority: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}

#[event]
pub struct DepositLimitsUpdated {
    pub max_deposit_amount: u64,
    pub max_daily_deposit: u64,
    pub timestamp: i64,
}

#[event]
pub struct StrategyInitialized {
    pub admin: Pubkey,
    pub guardian: Pubkey,
    pub usdc_weight_bps: u16,
    pub usdt_weight_bps: u16,
    pub drift_threshold_bps: u16,
}

#[event]
pub struct TargetsUpdated {
    pub usdc_weight_bps: u16,
    pub usdt_weight_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct ThresholdUpdated {
    pub bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct CapsUpdated {
    pub usdc_cap_bps: u16,
    pub usdt_cap_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct RebalanceInitialized {
    pub admin: Pubkey,
    pub guardian: Pubkey,
    pub min_rebalance_interval: i64,
}

/// Event emitted only when a rebalance actually moves funds
#[event]
pub struct Rebalanced {
    pub keeper: Pubkey,
    pub from: Asset,
    pub to: Asset,
    pub amount: u64,
    pub usdc_weight_before_bps: u16,
    pub usdc_weight_after_bps: u16,
    pub nav: u64,
    pub timestamp: i64,
}

#[event]
pub struct RebalancingPauseToggled {
    pub guardian: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}

#[event]
pub struct RebalanceIntervalUpdated {
    pub min_rebalance_interval: i64,
    pub timestamp: i64,
}
