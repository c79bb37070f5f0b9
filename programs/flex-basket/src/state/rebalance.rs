use anchor_lang::prelude::*;

use crate::{
    authority::{Role, RoleHolders},
    errors::BasketError,
    math::{self, RebalancePlan, Reserves},
    state::{BasketConfig, StrategyConfig},
};

/// Rebalancer control state, independent of the basket-wide pause
#[account]
pub struct RebalanceConfig {
    pub admin: Pubkey,                  // 32 bytes
    pub guardian: Pubkey,               // 32 bytes

    /// Halts rebalancing only; deposits and redemptions continue
    pub paused: bool,                   // 1 byte

    /// Minimum seconds between transferring rebalances, 0 = no limit
    pub min_rebalance_interval: i64,    // 8 bytes

    pub last_rebalanced_at: i64,        // 8 bytes
    pub last_rebalanced_slot: u64,      // 8 bytes
    pub rebalance_count: u64,           // 8 bytes
    pub bump: u8,                       // 1 byte
    pub _reserved: [u8; 32],            // 32 bytes
}

impl RebalanceConfig {
    /// Whether enough time has passed since the last transferring rebalance
    pub fn interval_elapsed(&self, now: i64) -> bool {
        if self.rebalance_count == 0 || self.min_rebalance_interval == 0 {
            return true;
        }
        now.saturating_sub(self.last_rebalanced_at) >= self.min_rebalance_interval
    }

    pub fn record_rebalance(&mut self, now: i64, slot: u64) {
        self.last_rebalanced_at = now;
        self.last_rebalanced_slot = slot;
        self.rebalance_count = self.rebalance_count.saturating_add(1);
    }
}

impl RoleHolders for RebalanceConfig {
    fn holder(&self, role: Role) -> Option<Pubkey> {
        match role {
            Role::Admin => Some(self.admin),
            Role::Guardian => Some(self.guardian),
            Role::EmergencyAdmin => None,
        }
    }
}

/// Outcome of the rebalance gates for one call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebalanceDecision {
    RebalancingPaused,
    IntervalPending { last_rebalanced_at: i64 },
    Planned(RebalancePlan),
}

/// Runs every rebalance gate against live reserves
///
/// A paused basket and a target that differs from the strategy are errors,
/// in that order. Everything after them is a decision, never an error: the
/// rebalancer pause, the minimum interval, then the drift plan.
pub fn decide_rebalance(
    basket: &BasketConfig,
    strategy: &StrategyConfig,
    rebalance: &RebalanceConfig,
    target_usdc_weight: u16,
    reserves: Reserves,
    now: i64,
) -> Result<RebalanceDecision> {
    require!(!basket.paused, BasketError::Paused);
    require!(
        target_usdc_weight == strategy.target_weights.usdc_weight_bps,
        BasketError::TargetMismatch
    );

    if rebalance.paused {
        return Ok(RebalanceDecision::RebalancingPaused);
    }
    if !rebalance.interval_elapsed(now) {
        return Ok(RebalanceDecision::IntervalPending {
            last_rebalanced_at: rebalance.last_rebalanced_at,
        });
    }

    let plan = math::plan_rebalance(
        reserves.usdc,
        reserves.usdt,
        target_usdc_weight,
        strategy.drift_threshold.bps,
    )?;
    Ok(RebalanceDecision::Planned(plan))
}
