use anchor_lang::prelude::*;

use crate::{authority::role_or_admin, constants::*, errors::*, events::*, state::*};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default)]
pub struct InitializeStrategyParams {
    /// Zero key: the admin also acts as guardian
    pub guardian: Pubkey,
}

#[derive(Accounts)]
pub struct InitializeStrategy<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = STRATEGY_CONFIG_SIZE,
        seeds = [STRATEGY_CONFIG_SEED],
        bump
    )]
    pub strategy: Account<'info, StrategyConfig>,

    pub system_program: Program<'info, System>,
}

/// Create the strategy with 50/50 targets, a 500 bps drift threshold and 80% caps
pub fn handler(ctx: Context<InitializeStrategy>, params: InitializeStrategyParams) -> Result<()> {
    require!(
        ctx.accounts.strategy.admin == Pubkey::default(),
        BasketError::AlreadyInitialized
    );

    let admin = ctx.accounts.admin.key();
    let strategy = &mut ctx.accounts.strategy;

    strategy.admin = admin;
    strategy.guardian = role_or_admin(params.guardian, admin);
    strategy.target_weights = TargetWeights::DEFAULT;
    strategy.drift_threshold = DriftThreshold::DEFAULT;
    strategy.weight_caps = WeightCaps::DEFAULT;
    strategy.last_updated = Clock::get()?.unix_timestamp;
    strategy.bump = ctx.bumps.strategy;
    strategy._reserved = [0; 32];

    emit!(StrategyInitialized {
        admin: strategy.admin,
        guardian: strategy.guardian,
        usdc_weight_bps: strategy.target_weights.usdc_weight_bps,
        usdt_weight_bps: strategy.target_weights.usdt_weight_bps,
        drift_threshold_bps: strategy.drift_threshold.bps,
    });

    Ok(())
}
