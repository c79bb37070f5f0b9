use anchor_lang::prelude::*;

use crate::{
    authority::{Action, RoleHolders},
    constants::*,
    events::*,
    state::*,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default)]
pub struct UpdateDepositLimitsParams {
    pub max_deposit_amount: u64,
    pub max_daily_deposit: u64,
}

#[derive(Accounts)]
pub struct UpdateDepositLimits<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [BASKET_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, BasketConfig>,
}

/// Replace the per-transaction and daily deposit caps; today's running total is kept
pub fn handler(ctx: Context<UpdateDepositLimits>, params: UpdateDepositLimitsParams) -> Result<()> {
    ctx.accounts
        .config
        .authorize(&ctx.accounts.admin.key(), Action::UpdateDepositLimits)?;
    validate_deposit_limits(params.max_deposit_amount, params.max_daily_deposit)?;

    let config = &mut ctx.accounts.config;
    config.max_deposit_amount = params.max_deposit_amount;
    config.max_daily_deposit = params.max_daily_deposit;

    emit!(DepositLimitsUpdated {
        max_deposit_amount: config.max_deposit_amount,
        max_daily_deposit: config.max_daily_deposit,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
