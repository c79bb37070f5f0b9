use anchor_lang::prelude::*;

use crate::{
    authority::{Role, RoleHolders},
    constants::SECONDS_PER_DAY,
    errors::BasketError,
    math::{self, Reserves},
};

/// Reserve stablecoins held by the basket
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    Usdc,
    Usdt,
}

impl Asset {
    pub fn other(self) -> Asset {
        match self {
            Asset::Usdc => Asset::Usdt,
            Asset::Usdt => Asset::Usdc,
        }
    }
}

/// Basket ledger state: roles, linked mints and vaults, NAV and deposit limits
///
/// Security considerations:
/// - `nav` is written back after every ledger instruction and always equals
///   the sum of the two vault balances once the instruction completes
/// - Mint and vault authority is a PDA, never a held key
/// - 64 bytes padding for future upgrades
#[account]
pub struct BasketConfig {
    /// Governance authority: deposit limits
    pub admin: Pubkey,              // 32 bytes

    /// May pause and unpause deposits
    pub guardian: Pubkey,           // 32 bytes

    /// May pause and unpause deposits
    pub emergency_admin: Pubkey,    // 32 bytes

    /// FLEX receipt mint
    pub flex_mint: Pubkey,          // 32 bytes

    pub usdc_mint: Pubkey,          // 32 bytes
    pub usdt_mint: Pubkey,          // 32 bytes
    pub usdc_vault: Pubkey,         // 32 bytes
    pub usdt_vault: Pubkey,         // 32 bytes

    /// Reserve value in smallest stablecoin units
    pub nav: u64,                   // 8 bytes

    /// Blocks deposits and rebalances; redemptions stay open
    pub paused: bool,               // 1 byte

    /// Per-transaction deposit cap
    pub max_deposit_amount: u64,    // 8 bytes

    /// Cap on total deposits per UTC day
    pub max_daily_deposit: u64,     // 8 bytes

    /// UTC day index the running total belongs to
    pub deposit_window_day: i64,    // 8 bytes

    /// Deposits accepted during `deposit_window_day`
    pub deposited_in_window: u64,   // 8 bytes

    pub bump: u8,                   // 1 byte
    pub mint_authority_bump: u8,    // 1 byte
    pub usdc_vault_bump: u8,        // 1 byte
    pub usdt_vault_bump: u8,        // 1 byte

    // Padding for future upgrades
    pub _reserved: [u8; 64],        // 64 bytes
}

impl BasketConfig {
    pub fn mint_for(&self, asset: Asset) -> Pubkey {
        match asset {
            Asset::Usdc => self.usdc_mint,
            Asset::Usdt => self.usdt_mint,
        }
    }

    /// Deposits already accepted in the UTC day containing `now`
    pub fn deposited_today(&self, now: i64) -> u64 {
        if self.deposit_window_day == day_index(now) {
            self.deposited_in_window
        } else {
            0
        }
    }

    /// Checks the per-transaction and daily caps without recording anything
    pub fn check_deposit_limits(&self, amount: u64, now: i64) -> Result<()> {
        require!(
            amount <= self.max_deposit_amount,
            BasketError::DepositLimitExceeded
        );

        let total = self
            .deposited_today(now)
            .checked_add(amount)
            .ok_or(error!(BasketError::MathOverflow))?;

        require!(
            total <= self.max_daily_deposit,
            BasketError::DepositLimitExceeded
        );

        Ok(())
    }

    /// Adds `amount` to today's running total, starting a new window on a new day
    pub fn record_deposit(&mut self, amount: u64, now: i64) -> Result<()> {
        let total = self
            .deposited_today(now)
            .checked_add(amount)
            .ok_or(error!(BasketError::MathOverflow))?;

        self.deposit_window_day = day_index(now);
        self.deposited_in_window = total;
        Ok(())
    }
}

/// Priced outcome of an accepted deposit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositQuote {
    pub nav_before: u64,
    pub flex_out: u64,
    pub nav_after: u64,
    pub supply_after: u64,
}

/// Priced outcome of an accepted redemption
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedeemQuote {
    pub payout: u64,
    pub nav_after: u64,
    pub supply_after: u64,
}

impl BasketConfig {
    /// Every deposit check that runs before tokens move
    ///
    /// Order: zero amount, pause, caps, pricing against live reserves,
    /// rounding to zero, slippage.
    pub fn quote_deposit(
        &self,
        amount: u64,
        min_flex_out: u64,
        reserves: Reserves,
        supply: u64,
        now: i64,
    ) -> Result<DepositQuote> {
        require!(amount > 0, BasketError::ZeroAmount);
        require!(!self.paused, BasketError::Paused);
        self.check_deposit_limits(amount, now)?;

        let nav_before = reserves.nav()?;
        let flex_out = math::receipt_for_deposit(amount, supply, nav_before)?;
        require!(flex_out > 0, BasketError::DepositTooSmall);
        require!(flex_out >= min_flex_out, BasketError::SlippageExceeded);

        Ok(DepositQuote {
            nav_before,
            flex_out,
            nav_after: nav_before
                .checked_add(amount)
                .ok_or(BasketError::MathOverflow)?,
            supply_after: supply
                .checked_add(flex_out)
                .ok_or(BasketError::MathOverflow)?,
        })
    }

    /// Ledger effects of an accepted deposit
    pub fn apply_deposit(&mut self, amount: u64, quote: &DepositQuote, now: i64) -> Result<()> {
        self.record_deposit(amount, now)?;
        self.nav = quote.nav_after;
        Ok(())
    }

    /// Every redemption check that runs before tokens move. Pause is not checked.
    pub fn quote_redeem(
        &self,
        amount: u64,
        asset_out: Asset,
        min_asset_out: u64,
        flex_balance: u64,
        reserves: Reserves,
        supply: u64,
    ) -> Result<RedeemQuote> {
        require!(amount > 0, BasketError::ZeroAmount);
        require!(
            flex_balance >= amount,
            BasketError::InsufficientReceiptBalance
        );

        let nav_before = reserves.nav()?;
        let payout = math::payout_for_redeem(amount, nav_before, supply)?;
        require!(payout > 0, BasketError::RedeemTooSmall);
        require!(payout >= min_asset_out, BasketError::SlippageExceeded);
        require!(
            reserves.balance(asset_out) >= payout,
            BasketError::InsufficientVaultLiquidity
        );

        Ok(RedeemQuote {
            payout,
            nav_after: nav_before
                .checked_sub(payout)
                .ok_or(BasketError::MathOverflow)?,
            supply_after: supply
                .checked_sub(amount)
                .ok_or(BasketError::MathOverflow)?,
        })
    }

    pub fn apply_redeem(&mut self, quote: &RedeemQuote) {
        self.nav = quote.nav_after;
    }
}

impl RoleHolders for BasketConfig {
    fn holder(&self, role: Role) -> Option<Pubkey> {
        match role {
            Role::Admin => Some(self.admin),
            Role::Guardian => Some(self.guardian),
            Role::EmergencyAdmin => Some(self.emergency_admin),
        }
    }
}

/// UTC day index of a unix timestamp
pub fn day_index(unix_timestamp: i64) -> i64 {
    unix_timestamp.div_euclid(SECONDS_PER_DAY)
}

/// Validates deposit caps for initialize and update
pub fn validate_deposit_limits(max_deposit_amount: u64, max_daily_deposit: u64) -> Result<()> {
    require!(
        max_deposit_amount > 0 && max_daily_deposit > 0,
        BasketError::InvalidDepositLimits
    );
    require!(
        max_deposit_amount <= max_daily_deposit,
        BasketError::InvalidDepositLimits
    );
    Ok(())
}
