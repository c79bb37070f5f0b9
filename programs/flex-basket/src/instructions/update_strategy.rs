use anchor_lang::prelude::*;

use crate::{
    authority::{Action, RoleHolders},
    constants::*,
    events::*,
    state::*,
};

/// Admin-only strategy governance
#[derive(Accounts)]
pub struct UpdateStrategy<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [STRATEGY_CONFIG_SEED],
        bump = strategy.bump,
    )]
    pub strategy: Account<'info, StrategyConfig>,
}

pub fn set_targets_handler(ctx: Context<UpdateStrategy>, targets: TargetWeights) -> Result<()> {
    let strategy = &mut ctx.accounts.strategy;
    strategy.authorize(&ctx.accounts.admin.key(), Action::SetTargets)?;

    let now = Clock::get()?.unix_timestamp;
    strategy.set_targets(targets, now)?;

    emit!(TargetsUpdated {
        usdc_weight_bps: targets.usdc_weight_bps,
        usdt_weight_bps: targets.usdt_weight_bps,
        timestamp: now,
    });

    Ok(())
}

pub fn set_thresholds_handler(ctx: Context<UpdateStrategy>, threshold: DriftThreshold) -> Result<()> {
    let strategy = &mut ctx.accounts.strategy;
    strategy.authorize(&ctx.accounts.admin.key(), Action::SetThresholds)?;

    let now = Clock::get()?.unix_timestamp;
    strategy.set_threshold(threshold, now)?;

    emit!(ThresholdUpdated {
        bps: threshold.bps,
        timestamp: now,
    });

    Ok(())
}

pub fn set_caps_handler(ctx: Context<UpdateStrategy>, caps: WeightCaps) -> Result<()> {
    let strategy = &mut ctx.accounts.strategy;
    strategy.authorize(&ctx.accounts.admin.key(), Action::SetCaps)?;

    let now = Clock::get()?.unix_timestamp;
    strategy.set_caps(caps, now)?;

    emit!(CapsUpdated {
        usdc_cap_bps: caps.usdc_cap_bps,
        usdt_cap_bps: caps.usdt_cap_bps,
        timestamp: now,
    });

    Ok(())
}
