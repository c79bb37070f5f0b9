#![allow(dead_code)]

use anchor_lang::prelude::*;
use flex_basket::{
    authority::{Action, RoleHolders},
    errors::BasketError,
    math::{self, RebalanceLeg, RebalancePlan, Reserves},
    state::*,
};

pub const DAY_ONE: i64 = 1_700_000_000;

pub fn basket_config(admin: Pubkey, guardian: Pubkey, emergency_admin: Pubkey) -> BasketConfig {
    BasketConfig {
        admin,
        guardian,
        emergency_admin,
        flex_mint: Pubkey::new_unique(),
        usdc_mint: Pubkey::new_unique(),
        usdt_mint: Pubkey::new_unique(),
        usdc_vault: Pubkey::new_unique(),
        usdt_vault: Pubkey::new_unique(),
        nav: 0,
        paused: false,
        max_deposit_amount: u64::MAX,
        max_daily_deposit: u64::MAX,
        deposit_window_day: day_index(DAY_ONE),
        deposited_in_window: 0,
        bump: 255,
        mint_authority_bump: 254,
        usdc_vault_bump: 253,
        usdt_vault_bump: 252,
        _reserved: [0; 64],
    }
}

pub fn strategy_config(admin: Pubkey, guardian: Pubkey) -> StrategyConfig {
    StrategyConfig {
        admin,
        guardian,
        target_weights: TargetWeights::DEFAULT,
        drift_threshold: DriftThreshold::DEFAULT,
        weight_caps: WeightCaps::DEFAULT,
        last_updated: DAY_ONE,
        bump: 255,
        _reserved: [0; 32],
    }
}

pub fn rebalance_config(admin: Pubkey, guardian: Pubkey) -> RebalanceConfig {
    RebalanceConfig {
        admin,
        guardian,
        paused: false,
        min_rebalance_interval: 0,
        last_rebalanced_at: 0,
        last_rebalanced_slot: 0,
        rebalance_count: 0,
        bump: 255,
        _reserved: [0; 32],
    }
}

/// Name of the program error a failed call returned
pub fn error_name<T: std::fmt::Debug>(result: Result<T>) -> String {
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => err.error_name.clone(),
        other => panic!("expected a program error, got {:?}", other),
    }
}

/// In-memory basket driving the same quote, apply and decide functions the
/// instruction handlers call, with token transfers replaced by integer moves.
pub struct Ledger {
    pub admin: Pubkey,
    pub guardian: Pubkey,
    pub emergency_admin: Pubkey,
    pub config: BasketConfig,
    pub strategy: StrategyConfig,
    pub rebalance: RebalanceConfig,
    pub usdc_vault: u64,
    pub usdt_vault: u64,
    pub flex_supply: u64,
    pub now: i64,
    pub slot: u64,
}

impl Ledger {
    pub fn new() -> Self {
        let admin = Pubkey::new_unique();
        let guardian = Pubkey::new_unique();
        let emergency_admin = Pubkey::new_unique();
        Self {
            admin,
            guardian,
            emergency_admin,
            config: basket_config(admin, guardian, emergency_admin),
            strategy: strategy_config(admin, guardian),
            rebalance: rebalance_config(admin, guardian),
            usdc_vault: 0,
            usdt_vault: 0,
            flex_supply: 0,
            now: DAY_ONE,
            slot: 1,
        }
    }

    pub fn nav(&self) -> u64 {
        self.usdc_vault + self.usdt_vault
    }

    pub fn reserves(&self) -> Reserves {
        Reserves::new(self.usdc_vault, self.usdt_vault)
    }

    fn vault_mut(&mut self, asset: Asset) -> &mut u64 {
        match asset {
            Asset::Usdc => &mut self.usdc_vault,
            Asset::Usdt => &mut self.usdt_vault,
        }
    }

    /// Returns the FLEX minted
    pub fn deposit(&mut self, asset: Asset, amount: u64, min_flex_out: u64) -> Result<u64> {
        let quote = self.config.quote_deposit(
            amount,
            min_flex_out,
            self.reserves(),
            self.flex_supply,
            self.now,
        )?;
        self.config.apply_deposit(amount, &quote, self.now)?;

        *self.vault_mut(asset) += amount;
        self.flex_supply = quote.supply_after;
        require_eq!(self.nav(), self.config.nav, BasketError::NavMismatch);
        Ok(quote.flex_out)
    }

    /// Returns the payout; `balance` is the caller's FLEX balance
    pub fn redeem(
        &mut self,
        balance: u64,
        amount: u64,
        asset_out: Asset,
        min_asset_out: u64,
    ) -> Result<u64> {
        let quote = self.config.quote_redeem(
            amount,
            asset_out,
            min_asset_out,
            balance,
            self.reserves(),
            self.flex_supply,
        )?;
        self.config.apply_redeem(&quote);

        *self.vault_mut(asset_out) -= quote.payout;
        self.flex_supply = quote.supply_after;
        require_eq!(self.nav(), self.config.nav, BasketError::NavMismatch);
        Ok(quote.payout)
    }

    /// Returns the leg settled, or None for a no-op call
    pub fn rebalance_once(&mut self, target_usdc_weight: u16) -> Result<Option<RebalanceLeg>> {
        let reserves = self.reserves();
        let decision = decide_rebalance(
            &self.config,
            &self.strategy,
            &self.rebalance,
            target_usdc_weight,
            reserves,
            self.now,
        )?;
        self.config.nav = reserves.nav()?;

        let leg = match decision {
            RebalanceDecision::Planned(RebalancePlan::Move { leg, .. }) => leg,
            _ => return Ok(None),
        };

        let (usdc, usdt) = math::apply_leg(reserves.usdc, reserves.usdt, &leg)?;
        self.rebalance.record_rebalance(self.now, self.slot);
        self.usdc_vault = usdc;
        self.usdt_vault = usdt;
        require_eq!(self.nav(), self.config.nav, BasketError::NavMismatch);
        Ok(Some(leg))
    }

    pub fn set_basket_pause(&mut self, signer: &Pubkey, paused: bool) -> Result<()> {
        let action = if paused {
            Action::PauseBasket
        } else {
            Action::UnpauseBasket
        };
        self.config.authorize(signer, action)?;
        self.config.paused = paused;
        Ok(())
    }

    pub fn set_rebalance_pause(&mut self, signer: &Pubkey, paused: bool) -> Result<()> {
        let action = if paused {
            Action::PauseRebalancing
        } else {
            Action::UnpauseRebalancing
        };
        self.rebalance.authorize(signer, action)?;
        self.rebalance.paused = paused;
        Ok(())
    }

    pub fn set_targets(&mut self, signer: &Pubkey, targets: TargetWeights) -> Result<()> {
        self.strategy.authorize(signer, Action::SetTargets)?;
        self.strategy.set_targets(targets, self.now)
    }

    pub fn advance(&mut self, seconds: i64) {
        self.now += seconds;
        self.slot += (seconds as u64).max(1) * 2;
    }
}
