use anchor_lang::prelude::*;

use crate::{
    authority::{Action, RoleHolders},
    constants::*,
    errors::*,
    events::*,
    state::*,
};

#[derive(Accounts)]
pub struct SetRebalanceInterval<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REBALANCE_CONFIG_SEED],
        bump = rebalance_config.bump,
    )]
    pub rebalance_config: Account<'info, RebalanceConfig>,
}

pub fn handler(ctx: Context<SetRebalanceInterval>, min_rebalance_interval: i64) -> Result<()> {
    ctx.accounts
        .rebalance_config
        .authorize(&ctx.accounts.admin.key(), Action::SetRebalanceInterval)?;
    require!(
        min_rebalance_interval >= 0,
        BasketError::InvalidRebalanceInterval
    );

    ctx.accounts.rebalance_config.min_rebalance_interval = min_rebalance_interval;

    emit!(RebalanceIntervalUpdated {
        min_rebalance_interval,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
