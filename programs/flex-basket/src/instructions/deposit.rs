use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    custody::VaultSigner,
    errors::*,
    events::*,
    math::{self, Reserves},
    state::*,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default)]
pub struct DepositParams {
    pub amount: u64,
    /// Fails with SlippageExceeded if fewer FLEX would be minted
    pub min_flex_out: u64,
}

/// Deposit a reserve stablecoin and receive FLEX priced against NAV
///
/// Security checklist:
/// ✅ 1. SIGNER VALIDATION: User must be signer
/// ✅ 2. ACCOUNT OWNERSHIP: Config, vaults and FLEX mint validated against stored keys
/// ✅ 6. MATH SAFETY: Checked floor arithmetic, u128 intermediates
/// ✅ 7. TOKEN ACCOUNT VALIDATION: Validates mint and owner
/// ✅ 8. BUSINESS LOGIC: Pause, caps and slippage checked before any effect
/// ✅ 10. EVENTS: Emits Deposited event
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// Depositor
    /// Security: Must be signer
    #[account(mut)]
    pub user: Signer<'info>,

    /// Basket config PDA
    /// Security: Validated by seeds, holds pause flag, caps and linked accounts
    #[account(
        mut,
        seeds = [BASKET_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, BasketConfig>>,

    /// Mint authority PDA
    /// Security: Only signs through VaultSigner
    /// CHECK: PDA used as mint authority, validated by seeds
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump = config.mint_authority_bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// FLEX mint
    /// Security: Must match config.flex_mint
    #[account(
        mut,
        address = config.flex_mint @ BasketError::InvalidMint,
    )]
    pub flex_mint: Box<Account<'info, Mint>>,

    /// USDC reserve vault
    /// Security: Must match config.usdc_vault; both vaults price the deposit
    #[account(
        mut,
        address = config.usdc_vault @ BasketError::InvalidVault,
    )]
    pub usdc_vault: Box<Account<'info, TokenAccount>>,

    /// USDT reserve vault
    /// Security: Must match config.usdt_vault
    #[account(
        mut,
        address = config.usdt_vault @ BasketError::InvalidVault,
    )]
    pub usdt_vault: Box<Account<'info, TokenAccount>>,

    /// User's reserve token account (source)
    /// Security: Owned by user; mint checked against the asset in the handler
    #[account(
        mut,
        constraint = user_asset_account.owner == user.key() @ BasketError::InvalidOwner,
    )]
    pub user_asset_account: Box<Account<'info, TokenAccount>>,

    /// User's FLEX account (destination)
    /// Security: Must be owned by user and hold the FLEX mint
    #[account(
        mut,
        constraint = user_flex_account.mint == config.flex_mint @ BasketError::InvalidMint,
        constraint = user_flex_account.owner == user.key() @ BasketError::InvalidOwner,
    )]
    pub user_flex_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Deposit>, asset: Asset, params: DepositParams) -> Result<()> {
    let DepositParams {
        amount,
        min_flex_out,
    } = params;
    let accounts = ctx.accounts;
    let now = Clock::get()?.unix_timestamp;

    // CHECKS
    require_keys_eq!(
        accounts.user_asset_account.mint,
        accounts.config.mint_for(asset),
        BasketError::InvalidMint
    );
    let reserves = Reserves::new(accounts.usdc_vault.amount, accounts.usdt_vault.amount);
    let quote = accounts.config.quote_deposit(
        amount,
        min_flex_out,
        reserves,
        accounts.flex_mint.supply,
        now,
    )?;

    // EFFECTS: update ledger state before external calls
    accounts.config.apply_deposit(amount, &quote, now)?;

    // INTERACTIONS
    let vault = match asset {
        Asset::Usdc => accounts.usdc_vault.to_account_info(),
        Asset::Usdt => accounts.usdt_vault.to_account_info(),
    };
    let transfer_ctx = CpiContext::new(
        accounts.token_program.to_account_info(),
        Transfer {
            from: accounts.user_asset_account.to_account_info(),
            to: vault,
            authority: accounts.user.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    let signer = VaultSigner::new(
        accounts.mint_authority.to_account_info(),
        accounts.token_program.to_account_info(),
        accounts.config.mint_authority_bump,
    );
    signer.mint_receipt(
        accounts.flex_mint.to_account_info(),
        accounts.user_flex_account.to_account_info(),
        quote.flex_out,
    )?;

    // Recorded NAV must match what the vaults now hold
    accounts.usdc_vault.reload()?;
    accounts.usdt_vault.reload()?;
    let observed_nav = math::nav_of(accounts.usdc_vault.amount, accounts.usdt_vault.amount)?;
    require_eq!(observed_nav, accounts.config.nav, BasketError::NavMismatch);

    emit!(Deposited {
        user: accounts.user.key(),
        asset,
        amount,
        flex_minted: quote.flex_out,
        nav: quote.nav_after,
        flex_supply: quote.supply_after,
        timestamp: now,
    });

    Ok(())
}
