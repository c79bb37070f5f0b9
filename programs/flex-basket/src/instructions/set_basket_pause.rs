use anchor_lang::prelude::*;

use crate::{
    authority::{Action, RoleHolders},
    constants::*,
    events::*,
    state::*,
};

/// Pause or resume deposits and rebalances; redemptions are never paused
#[derive(Accounts)]
pub struct SetBasketPause<'info> {
    /// Guardian or emergency admin
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [BASKET_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, BasketConfig>,
}

pub fn handler(ctx: Context<SetBasketPause>, paused: bool) -> Result<()> {
    let action = if paused {
        Action::PauseBasket
    } else {
        Action::UnpauseBasket
    };
    let authority = ctx.accounts.authority.key();
    let role = ctx.accounts.config.authorize(&authority, action)?;

    ctx.accounts.config.paused = paused;
    msg!("Basket paused={} by {:?} {}", paused, role, authority);

    emit!(BasketPauseToggled {
        authority,
        paused,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
