use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    custody::VaultSigner,
    errors::*,
    events::*,
    math::{self, RebalanceLeg, RebalancePlan, Reserves},
    state::*,
};

/// Move the reserve composition toward the governed target
///
/// Settlement is a 1:1 exchange with the keeper: the over-weight vault pays
/// the keeper, and the keeper pays the same amount of the other asset into the
/// under-weight vault. NAV never changes.
#[derive(Accounts)]
pub struct RebalanceOnce<'info> {
    /// Any keeper; must hold enough of the asset being bought back into the basket
    /// Security: Must be signer; authorizes the inbound leg
    pub keeper: Signer<'info>,

    /// Basket config PDA
    /// Security: Validated by seeds, holds the basket pause and vault keys
    #[account(
        mut,
        seeds = [BASKET_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, BasketConfig>>,

    /// Strategy PDA
    /// Security: Validated by seeds; the only source of the target and threshold
    #[account(
        seeds = [STRATEGY_CONFIG_SEED],
        bump = strategy.bump,
    )]
    pub strategy: Box<Account<'info, StrategyConfig>>,

    /// Rebalancer PDA
    /// Security: Validated by seeds, holds the rebalancer pause and rate limit
    #[account(
        mut,
        seeds = [REBALANCE_CONFIG_SEED],
        bump = rebalance_config.bump,
    )]
    pub rebalance_config: Box<Account<'info, RebalanceConfig>>,

    /// Vault authority PDA
    /// Security: Only signs through VaultSigner
    /// CHECK: PDA owning the reserve vaults, validated by seeds
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump = config.mint_authority_bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// Security: Must match config.usdc_vault
    #[account(
        mut,
        address = config.usdc_vault @ BasketError::InvalidVault,
    )]
    pub usdc_vault: Box<Account<'info, TokenAccount>>,

    /// Security: Must match config.usdt_vault
    #[account(
        mut,
        address = config.usdt_vault @ BasketError::InvalidVault,
    )]
    pub usdt_vault: Box<Account<'info, TokenAccount>>,

    /// Security: Must be owned by keeper and hold the USDC mint
    #[account(
        mut,
        constraint = keeper_usdc_account.mint == config.usdc_mint @ BasketError::InvalidMint,
        constraint = keeper_usdc_account.owner == keeper.key() @ BasketError::InvalidOwner,
    )]
    pub keeper_usdc_account: Box<Account<'info, TokenAccount>>,

    /// Security: Must be owned by keeper and hold the USDT mint
    #[account(
        mut,
        constraint = keeper_usdt_account.mint == config.usdt_mint @ BasketError::InvalidMint,
        constraint = keeper_usdt_account.owner == keeper.key() @ BasketError::InvalidOwner,
    )]
    pub keeper_usdt_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<RebalanceOnce>, target_usdc_weight: u16) -> Result<()> {
    let accounts = ctx.accounts;
    let clock = Clock::get()?;

    let reserves = Reserves::new(accounts.usdc_vault.amount, accounts.usdt_vault.amount);
    let decision = decide_rebalance(
        &accounts.config,
        &accounts.strategy,
        &accounts.rebalance_config,
        target_usdc_weight,
        reserves,
        clock.unix_timestamp,
    )?;

    // Keep the stored NAV in step with the vaults even when nothing moves
    let nav = reserves.nav()?;
    accounts.config.nav = nav;

    let (leg, weight_before) = match decision {
        RebalanceDecision::RebalancingPaused => {
            msg!("Rebalancing paused; no transfer");
            return Ok(());
        }
        RebalanceDecision::IntervalPending { last_rebalanced_at } => {
            msg!(
                "Rebalance interval not elapsed (last at {}); no transfer",
                last_rebalanced_at
            );
            return Ok(());
        }
        RebalanceDecision::Planned(RebalancePlan::Hold {
            current_bps,
            drift_bps,
        }) => {
            msg!(
                "Within threshold: weight {} bps, drift {} bps; no transfer",
                current_bps,
                drift_bps
            );
            return Ok(());
        }
        RebalanceDecision::Planned(RebalancePlan::Move {
            leg, current_bps, ..
        }) => (leg, current_bps),
    };

    let (usdc_after, usdt_after) = math::apply_leg(reserves.usdc, reserves.usdt, &leg)?;
    let weight_after = math::weight_bps(usdc_after, nav)?;

    // EFFECTS
    accounts
        .rebalance_config
        .record_rebalance(clock.unix_timestamp, clock.slot);

    // INTERACTIONS
    settle_leg(accounts, &leg)?;

    accounts.usdc_vault.reload()?;
    accounts.usdt_vault.reload()?;
    require_eq!(accounts.usdc_vault.amount, usdc_after, BasketError::NavMismatch);
    require_eq!(accounts.usdt_vault.amount, usdt_after, BasketError::NavMismatch);
    require_eq!(
        math::nav_of(usdc_after, usdt_after)?,
        accounts.config.nav,
        BasketError::NavMismatch
    );

    emit!(Rebalanced {
        keeper: accounts.keeper.key(),
        from: leg.from,
        to: leg.to,
        amount: leg.amount,
        usdc_weight_before_bps: weight_before,
        usdc_weight_after_bps: weight_after,
        nav,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

fn settle_leg<'info>(accounts: &RebalanceOnce<'info>, leg: &RebalanceLeg) -> Result<()> {
    let (vault_out, keeper_in, keeper_out, vault_in) = match leg.from {
        Asset::Usdc => (
            &accounts.usdc_vault,
            &accounts.keeper_usdc_account,
            &accounts.keeper_usdt_account,
            &accounts.usdt_vault,
        ),
        Asset::Usdt => (
            &accounts.usdt_vault,
            &accounts.keeper_usdt_account,
            &accounts.keeper_usdc_account,
            &accounts.usdc_vault,
        ),
    };

    let signer = VaultSigner::new(
        accounts.mint_authority.to_account_info(),
        accounts.token_program.to_account_info(),
        accounts.config.mint_authority_bump,
    );
    signer.release(vault_out.to_account_info(), keeper_in.to_account_info(), leg.amount)?;

    let transfer_ctx = CpiContext::new(
        accounts.token_program.to_account_info(),
        Transfer {
            from: keeper_out.to_account_info(),
            to: vault_in.to_account_info(),
            authority: accounts.keeper.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, leg.amount)
}
