// FLEX Basket - stablecoin index vault on Solana
// Vault ledger, strategy registry and rebalance executor in one program so the
// vault authority PDA never has to be shared with another program.

use anchor_lang::prelude::*;

pub mod authority;
pub mod constants;
pub mod custody;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;
use state::*;

declare_id!("5MEwrvmxRSRgyDH1KXn135Ukg23UPo8r9kuwcyQvuen5");

#[program]
pub mod flex_basket {
    use super::*;

    /// Create the basket ledger, FLEX mint and reserve vaults
    ///
    /// Security considerations:
    /// - Admin must sign and pays for all accounts
    /// - Mint and vault authority is a PDA, never a held key
    /// - Fails with AlreadyInitialized on a second call
    pub fn initialize_basket(
        ctx: Context<InitializeBasket>,
        params: InitializeBasketParams,
    ) -> Result<()> {
        instructions::initialize_basket::handler(ctx, params)
    }

    /// Deposit USDC and receive FLEX priced against NAV
    ///
    /// Security considerations:
    /// - Blocked while paused
    /// - Per-transaction and daily caps enforced
    /// - NAV re-derived from both vaults and re-checked after the transfer
    pub fn deposit_usdc(ctx: Context<Deposit>, params: DepositParams) -> Result<()> {
        instructions::deposit::handler(ctx, Asset::Usdc, params)
    }

    /// Deposit USDT and receive FLEX priced against NAV
    pub fn deposit_usdt(ctx: Context<Deposit>, params: DepositParams) -> Result<()> {
        instructions::deposit::handler(ctx, Asset::Usdt, params)
    }

    /// Burn FLEX for a pro-rata share of NAV in one reserve asset
    ///
    /// Allowed while paused so holders can always exit.
    pub fn redeem_flex(ctx: Context<RedeemFlex>, params: RedeemFlexParams) -> Result<()> {
        instructions::redeem::handler(ctx, params)
    }

    /// Block deposits and rebalances (guardian or emergency admin)
    pub fn pause_basket(ctx: Context<SetBasketPause>) -> Result<()> {
        instructions::set_basket_pause::handler(ctx, true)
    }

    /// Resume deposits and rebalances (guardian or emergency admin)
    pub fn unpause_basket(ctx: Context<SetBasketPause>) -> Result<()> {
        instructions::set_basket_pause::handler(ctx, false)
    }

    pub fn update_deposit_limits(
        ctx: Context<UpdateDepositLimits>,
        params: UpdateDepositLimitsParams,
    ) -> Result<()> {
        instructions::update_deposit_limits::handler(ctx, params)
    }

    pub fn initialize_strategy(
        ctx: Context<InitializeStrategy>,
        params: InitializeStrategyParams,
    ) -> Result<()> {
        instructions::initialize_strategy::handler(ctx, params)
    }

    /// Set target weights (admin). Must sum to 10,000 bps within caps.
    pub fn set_targets(ctx: Context<UpdateStrategy>, targets: TargetWeights) -> Result<()> {
        instructions::update_strategy::set_targets_handler(ctx, targets)
    }

    /// Set the drift threshold (admin). 1..=10,000 bps.
    pub fn set_thresholds(ctx: Context<UpdateStrategy>, threshold: DriftThreshold) -> Result<()> {
        instructions::update_strategy::set_thresholds_handler(ctx, threshold)
    }

    pub fn set_caps(ctx: Context<UpdateStrategy>, caps: WeightCaps) -> Result<()> {
        instructions::update_strategy::set_caps_handler(ctx, caps)
    }

    pub fn initialize_rebalance(
        ctx: Context<InitializeRebalance>,
        params: InitializeRebalanceParams,
    ) -> Result<()> {
        instructions::initialize_rebalance::handler(ctx, params)
    }

    /// Move composition toward the governed target if drift exceeds the threshold
    ///
    /// Security considerations:
    /// - Callable by any keeper; settles 1:1 against the keeper's accounts
    /// - `target_usdc_weight` must equal the strategy target (TargetMismatch)
    /// - Paused rebalancing, rate limit and in-threshold drift are no-ops
    /// - NAV is unchanged
    pub fn rebalance_once(ctx: Context<RebalanceOnce>, target_usdc_weight: u16) -> Result<()> {
        instructions::rebalance_once::handler(ctx, target_usdc_weight)
    }

    pub fn pause_rebalancing(ctx: Context<SetRebalancePause>) -> Result<()> {
        instructions::set_rebalance_pause::handler(ctx, true)
    }

    pub fn unpause_rebalancing(ctx: Context<SetRebalancePause>) -> Result<()> {
        instructions::set_rebalance_pause::handler(ctx, false)
    }

    pub fn set_rebalance_interval(
        ctx: Context<SetRebalanceInterval>,
        min_rebalance_interval: i64,
    ) -> Result<()> {
        instructions::set_rebalance_interval::handler(ctx, min_rebalance_interval)
    }
}
