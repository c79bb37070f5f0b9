use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::{
    constants::*,
    custody::VaultSigner,
    errors::*,
    events::*,
    math::{self, Reserves},
    state::*,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct RedeemFlexParams {
    /// FLEX to burn
    pub amount: u64,
    /// Reserve paid out; there is no cross-asset split
    pub asset_out: Asset,
    /// Fails with SlippageExceeded if the payout would be lower
    pub min_asset_out: u64,
}

/// Burn FLEX for a pro-rata share of NAV, paid in one reserve asset
///
/// Redemption ignores the basket pause so holders can always exit.
#[derive(Accounts)]
pub struct RedeemFlex<'info> {
    /// Holder redeeming FLEX
    /// Security: Must be signer and authority over the burned FLEX
    #[account(mut)]
    pub user: Signer<'info>,

    /// Basket config PDA
    /// Security: Validated by seeds; pause flag is not consulted
    #[account(
        mut,
        seeds = [BASKET_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, BasketConfig>>,

    /// Vault authority PDA
    /// Security: Only signs through VaultSigner
    /// CHECK: PDA owning the reserve vaults, validated by seeds
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump = config.mint_authority_bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// FLEX mint
    /// Security: Must match config.flex_mint; supply prices the payout
    #[account(
        mut,
        address = config.flex_mint @ BasketError::InvalidMint,
    )]
    pub flex_mint: Box<Account<'info, Mint>>,

    /// USDC reserve vault
    /// Security: Must match config.usdc_vault
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

    /// User's FLEX account (burned from)
    /// Security: Must be owned by user and hold the FLEX mint
    #[account(
        mut,
        constraint = user_flex_account.mint == config.flex_mint @ BasketError::InvalidMint,
        constraint = user_flex_account.owner == user.key() @ BasketError::InvalidOwner,
    )]
    pub user_flex_account: Box<Account<'info, TokenAccount>>,

    /// User's reserve token account (payout destination)
    /// Security: Owned by user; mint checked against asset_out in the handler
    #[account(
        mut,
        constraint = user_asset_account.owner == user.key() @ BasketError::InvalidOwner,
    )]
    pub user_asset_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<RedeemFlex>, params: RedeemFlexParams) -> Result<()> {
    let RedeemFlexParams {
        amount,
        asset_out,
        min_asset_out,
    } = params;
    let accounts = ctx.accounts;
    let now = Clock::get()?.unix_timestamp;

    // CHECKS
    require_keys_eq!(
        accounts.user_asset_account.mint,
        accounts.config.mint_for(asset_out),
        BasketError::InvalidMint
    );
    let reserves = Reserves::new(accounts.usdc_vault.amount, accounts.usdt_vault.amount);
    let quote = accounts.config.quote_redeem(
        amount,
        asset_out,
        min_asset_out,
        accounts.user_flex_account.amount,
        reserves,
        accounts.flex_mint.supply,
    )?;

    // EFFECTS
    accounts.config.apply_redeem(&quote);

    // INTERACTIONS
    let burn_ctx = CpiContext::new(
        accounts.token_program.to_account_info(),
        Burn {
            mint: accounts.flex_mint.to_account_info(),
            from: accounts.user_flex_account.to_account_info(),
            authority: accounts.user.to_account_info(),
        },
    );
    token::burn(burn_ctx, amount)?;

    let vault = match asset_out {
        Asset::Usdc => accounts.usdc_vault.to_account_info(),
        Asset::Usdt => accounts.usdt_vault.to_account_info(),
    };
    let signer = VaultSigner::new(
        accounts.mint_authority.to_account_info(),
        accounts.token_program.to_account_info(),
        accounts.config.mint_authority_bump,
    );
    signer.release(vault, accounts.user_asset_account.to_account_info(), quote.payout)?;

    accounts.usdc_vault.reload()?;
    accounts.usdt_vault.reload()?;
    let observed_nav = math::nav_of(accounts.usdc_vault.amount, accounts.usdt_vault.amount)?;
    require_eq!(observed_nav, accounts.config.nav, BasketError::NavMismatch);

    emit!(Redeemed {
        user: accounts.user.key(),
        asset: asset_out,
        flex_burned: amount,
        payout: quote.payout,
        nav: quote.nav_after,
        flex_supply: quote.supply_after,
        timestamp: now,
    });

    Ok(())
}
