use anchor_lang::prelude::*;

use crate::{authority::role_or_admin, constants::*, errors::*, events::*, state::*};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default)]
pub struct InitializeRebalanceParams {
    /// Zero key: the admin also acts as guardian
    pub guardian: Pubkey,
    /// Seconds between transferring rebalances, 0 = no limit
    pub min_rebalance_interval: i64,
}

#[derive(Accounts)]
pub struct InitializeRebalance<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = REBALANCE_CONFIG_SIZE,
        seeds = [REBALANCE_CONFIG_SEED],
        bump
    )]
    pub rebalance_config: Account<'info, RebalanceConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeRebalance>, params: InitializeRebalanceParams) -> Result<()> {
    require!(
        ctx.accounts.rebalance_config.admin == Pubkey::default(),
        BasketError::AlreadyInitialized
    );
    require!(
        params.min_rebalance_interval >= 0,
        BasketError::InvalidRebalanceInterval
    );

    let admin = ctx.accounts.admin.key();
    let config = &mut ctx.accounts.rebalance_config;

    config.admin = admin;
    config.guardian = role_or_admin(params.guardian, admin);
    config.paused = false;
    config.min_rebalance_interval = params.min_rebalance_interval;
    config.last_rebalanced_at = 0;
    config.last_rebalanced_slot = 0;
    config.rebalance_count = 0;
    config.bump = ctx.bumps.rebalance_config;
    config._reserved = [0; 32];

    emit!(RebalanceInitialized {
        admin: config.admin,
        guardian: config.guardian,
        min_rebalance_interval: config.min_rebalance_interval,
    });

    Ok(())
}
