use anchor_lang::prelude::*;

use crate::{
    authority::{Action, RoleHolders},
    constants::*,
    events::*,
    state::*,
};

/// Halt or resume rebalancing without touching deposits or redemptions
#[derive(Accounts)]
pub struct SetRebalancePause<'info> {
    pub guardian: Signer<'info>,

    #[account(
        mut,
        seeds = [REBALANCE_CONFIG_SEED],
        bump = rebalance_config.bump,
    )]
    pub rebalance_config: Account<'info, RebalanceConfig>,
}

pub fn handler(ctx: Context<SetRebalancePause>, paused: bool) -> Result<()> {
    let action = if paused {
        Action::PauseRebalancing
    } else {
        Action::UnpauseRebalancing
    };
    let guardian = ctx.accounts.guardian.key();
    ctx.accounts.rebalance_config.authorize(&guardian, action)?;

    ctx.accounts.rebalance_config.paused = paused;

    emit!(RebalancingPauseToggled {
        guardian,
        paused,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
