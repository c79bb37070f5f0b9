use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    authority::role_or_admin,
    constants::*,
    errors::*,
    events::*,
    state::*,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default)]
pub struct InitializeBasketParams {
    /// Zero key: the admin also acts as guardian
    pub guardian: Pubkey,
    /// Zero key: the admin also acts as emergency admin
    pub emergency_admin: Pubkey,
    pub max_deposit_amount: u64,
    pub max_daily_deposit: u64,
}

/// Create the basket ledger, the FLEX mint and both reserve vaults
#[derive(Accounts)]
pub struct InitializeBasket<'info> {
    /// Basket admin - pays for and governs the basket
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Basket config PDA
    /// Security: a second initialize finds existing data and fails with AlreadyInitialized
    #[account(
        init_if_needed,
        payer = admin,
        space = BASKET_CONFIG_SIZE,
        seeds = [BASKET_CONFIG_SEED],
        bump
    )]
    pub config: Box<Account<'info, BasketConfig>>,

    /// CHECK: PDA used as FLEX mint authority and reserve vault owner, validated by seeds
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// FLEX receipt mint PDA
    #[account(
        init_if_needed,
        payer = admin,
        seeds = [FLEX_MINT_SEED],
        bump,
        mint::decimals = BASKET_DECIMALS,
        mint::authority = mint_authority,
    )]
    pub flex_mint: Box<Account<'info, Mint>>,

    #[account(
        constraint = usdc_mint.decimals == BASKET_DECIMALS @ BasketError::InvalidDecimals,
    )]
    pub usdc_mint: Box<Account<'info, Mint>>,

    #[account(
        constraint = usdt_mint.decimals == BASKET_DECIMALS @ BasketError::InvalidDecimals,
        constraint = usdt_mint.key() != usdc_mint.key() @ BasketError::DuplicateReserveMint,
    )]
    pub usdt_mint: Box<Account<'info, Mint>>,

    /// USDC reserve vault, owned by the mint authority PDA
    #[account(
        init_if_needed,
        payer = admin,
        seeds = [VAULT_SEED, usdc_mint.key().as_ref()],
        bump,
        token::mint = usdc_mint,
        token::authority = mint_authority,
    )]
    pub usdc_vault: Box<Account<'info, TokenAccount>>,

    /// USDT reserve vault, owned by the mint authority PDA
    #[account(
        init_if_needed,
        payer = admin,
        seeds = [VAULT_SEED, usdt_mint.key().as_ref()],
        bump,
        token::mint = usdt_mint,
        token::authority = mint_authority,
    )]
    pub usdt_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeBasket>, params: InitializeBasketParams) -> Result<()> {
    // CHECKS
    require!(
        ctx.accounts.config.admin == Pubkey::default(),
        BasketError::AlreadyInitialized
    );
    validate_deposit_limits(params.max_deposit_amount, params.max_daily_deposit)?;

    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();
    let config = &mut ctx.accounts.config;

    // EFFECTS
    config.admin = admin;
    config.guardian = role_or_admin(params.guardian, admin);
    config.emergency_admin = role_or_admin(params.emergency_admin, admin);
    config.flex_mint = ctx.accounts.flex_mint.key();
    config.usdc_mint = ctx.accounts.usdc_mint.key();
    config.usdt_mint = ctx.accounts.usdt_mint.key();
    config.usdc_vault = ctx.accounts.usdc_vault.key();
    config.usdt_vault = ctx.accounts.usdt_vault.key();
    config.nav = 0;
    config.paused = false;
    config.max_deposit_amount = params.max_deposit_amount;
    config.max_daily_deposit = params.max_daily_deposit;
    config.deposit_window_day = day_index(now);
    config.deposited_in_window = 0;
    config.bump = ctx.bumps.config;
    config.mint_authority_bump = ctx.bumps.mint_authority;
    config.usdc_vault_bump = ctx.bumps.usdc_vault;
    config.usdt_vault_bump = ctx.bumps.usdt_vault;
    config._reserved = [0; 64];

    emit!(BasketInitialized {
        config: config.key(),
        admin: config.admin,
        guardian: config.guardian,
        emergency_admin: config.emergency_admin,
        flex_mint: config.flex_mint,
        usdc_mint: config.usdc_mint,
        usdt_mint: config.usdt_mint,
        max_deposit_amount: config.max_deposit_amount,
        max_daily_deposit: config.max_daily_deposit,
        timestamp: now,
    });

    Ok(())
}
