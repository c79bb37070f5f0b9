use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOMINATOR, errors::BasketError, state::Asset};

/// Computes floor(n0 * n1 / d) with a u128 intermediate
///
/// Every ratio in the ledger rounds down so value can only stay in the vault.
#[inline(always)]
pub fn mul_div_floor(n0: u64, n1: u64, d: u64) -> Result<u64> {
    require!(d != 0, BasketError::DivisionByZero);

    let product = (n0 as u128)
        .checked_mul(n1 as u128)
        .ok_or(error!(BasketError::MathOverflow))?;

    u64::try_from(product / d as u128).map_err(|_| error!(BasketError::MathOverflow))
}

/// Computes ceil(n0 * n1 / d) with a u128 intermediate
pub fn mul_div_ceil(n0: u64, n1: u64, d: u64) -> Result<u64> {
    require!(d != 0, BasketError::DivisionByZero);

    let product = (n0 as u128)
        .checked_mul(n1 as u128)
        .ok_or(error!(BasketError::MathOverflow))?;

    u64::try_from(product.div_ceil(d as u128)).map_err(|_| error!(BasketError::MathOverflow))
}

/// Live balances of the two reserve vaults
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reserves {
    pub usdc: u64,
    pub usdt: u64,
}

impl Reserves {
    pub fn new(usdc: u64, usdt: u64) -> Self {
        Self { usdc, usdt }
    }

    pub fn nav(&self) -> Result<u64> {
        nav_of(self.usdc, self.usdt)
    }

    pub fn balance(&self, asset: Asset) -> u64 {
        match asset {
            Asset::Usdc => self.usdc,
            Asset::Usdt => self.usdt,
        }
    }
}

/// Net asset value of the basket: the sum of both reserve balances
pub fn nav_of(usdc_balance: u64, usdt_balance: u64) -> Result<u64> {
    usdc_balance
        .checked_add(usdt_balance)
        .ok_or(error!(BasketError::MathOverflow))
}

/// FLEX to mint for a deposit of `amount` reserve units
///
/// - Empty basket: 1:1
/// - Otherwise: floor(amount * supply / nav_before)
pub fn receipt_for_deposit(amount: u64, supply: u64, nav_before: u64) -> Result<u64> {
    if supply == 0 {
        return Ok(amount);
    }
    mul_div_floor(amount, supply, nav_before)
}

/// Reserve units owed for burning `amount_receipt` FLEX: floor(amount * nav / supply)
pub fn payout_for_redeem(amount_receipt: u64, nav_before: u64, supply_before: u64) -> Result<u64> {
    require!(
        amount_receipt <= supply_before,
        BasketError::InsufficientReceiptBalance
    );
    mul_div_floor(amount_receipt, nav_before, supply_before)
}

/// Share of `nav` held as `balance`, in bps, rounded down. An empty basket has weight 0.
pub fn weight_bps(balance: u64, nav: u64) -> Result<u16> {
    if nav == 0 {
        return Ok(0);
    }
    require!(balance <= nav, BasketError::MathOverflow);
    let bps = mul_div_floor(balance, BPS_DENOMINATOR as u64, nav)?;
    u16::try_from(bps).map_err(|_| error!(BasketError::MathOverflow))
}

/// One settlement leg of a rebalance: `amount` leaves the `from` vault and the
/// same amount of the other asset enters the `to` vault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RebalanceLeg {
    pub from: Asset,
    pub to: Asset,
    pub amount: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebalancePlan {
    /// Composition is within threshold, or too small to move
    Hold { current_bps: u16, drift_bps: u16 },
    Move {
        leg: RebalanceLeg,
        current_bps: u16,
        drift_bps: u16,
    },
}

/// Decides whether a rebalance should move funds and how much
///
/// A transfer is only planned when the drift strictly exceeds the threshold;
/// drift equal to the threshold holds. The amount brings the USDC balance to
/// ceil(nav * target / 10_000), the smallest balance whose weight reaches the
/// target, so the weight lands on the target whenever truncation allows it.
pub fn plan_rebalance(
    usdc_balance: u64,
    usdt_balance: u64,
    target_usdc_bps: u16,
    threshold_bps: u16,
) -> Result<RebalancePlan> {
    require!(
        target_usdc_bps <= BPS_DENOMINATOR,
        BasketError::InvalidWeights
    );

    let nav = nav_of(usdc_balance, usdt_balance)?;
    if nav == 0 {
        return Ok(RebalancePlan::Hold {
            current_bps: 0,
            drift_bps: 0,
        });
    }

    let current_bps = weight_bps(usdc_balance, nav)?;
    let drift_bps = current_bps.abs_diff(target_usdc_bps);
    if drift_bps <= threshold_bps {
        return Ok(RebalancePlan::Hold {
            current_bps,
            drift_bps,
        });
    }

    let desired_usdc = mul_div_ceil(nav, target_usdc_bps as u64, BPS_DENOMINATOR as u64)?;
    let (from, amount) = if usdc_balance > desired_usdc {
        (Asset::Usdc, usdc_balance - desired_usdc)
    } else {
        // desired_usdc <= nav, so the shortfall never exceeds the USDT balance
        (Asset::Usdt, desired_usdc - usdc_balance)
    };
    let leg = RebalanceLeg {
        from,
        to: from.other(),
        amount,
    };

    if leg.amount == 0 {
        return Ok(RebalancePlan::Hold {
            current_bps,
            drift_bps,
        });
    }

    Ok(RebalancePlan::Move {
        leg,
        current_bps,
        drift_bps,
    })
}

/// Reserve balances after applying a leg, as (usdc, usdt)
pub fn apply_leg(usdc_balance: u64, usdt_balance: u64, leg: &RebalanceLeg) -> Result<(u64, u64)> {
    let overflow = || error!(BasketError::MathOverflow);
    match leg.from {
        Asset::Usdc => Ok((
            usdc_balance.checked_sub(leg.amount).ok_or_else(overflow)?,
            usdt_balance.checked_add(leg.amount).ok_or_else(overflow)?,
        )),
        Asset::Usdt => Ok((
            usdc_balance.checked_add(leg.amount).ok_or_else(overflow)?,
            usdt_balance.checked_sub(leg.amount).ok_or_else(overflow)?,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_rounds_down() {
        assert_eq!(mul_div_floor(10, 10, 3).unwrap(), 33);
        assert_eq!(mul_div_floor(u64::MAX, 2, 2).unwrap(), u64::MAX);
    }

    #[test]
    fn test_mul_div_rejects_zero_divisor_and_overflow() {
        assert!(mul_div_floor(1, 1, 0).is_err());
        assert!(mul_div_floor(u64::MAX, 3, 2).is_err());
        assert!(mul_div_ceil(1, 1, 0).is_err());
    }

    #[test]
    fn test_mul_div_ceil_rounds_up_only_on_remainder() {
        assert_eq!(mul_div_ceil(10, 10, 3).unwrap(), 34);
        assert_eq!(mul_div_ceil(10, 9, 3).unwrap(), 30);
        assert_eq!(mul_div_ceil(0, 9, 3).unwrap(), 0);
    }

    #[test]
    fn test_first_deposit_is_one_to_one() {
        assert_eq!(receipt_for_deposit(100, 0, 0).unwrap(), 100);
    }

    #[test]
    fn test_deposit_after_gain_mints_fewer() {
        // 150 NAV backs 100 FLEX, so 30 units buy 20 FLEX
        assert_eq!(receipt_for_deposit(30, 100, 150).unwrap(), 20);
        // 31 * 100 / 150 = 20.66 -> 20
        assert_eq!(receipt_for_deposit(31, 100, 150).unwrap(), 20);
    }

    #[test]
    fn test_deposit_into_supply_without_backing_fails() {
        assert!(receipt_for_deposit(10, 100, 0).is_err());
    }

    #[test]
    fn test_redeem_payout() {
        assert_eq!(payout_for_redeem(75, 150, 150).unwrap(), 75);
        // 1 * 100 / 3 = 33.3 -> 33
        assert_eq!(payout_for_redeem(1, 100, 3).unwrap(), 33);
        assert!(payout_for_redeem(4, 100, 3).is_err());
    }

    #[test]
    fn test_weight_bps() {
        assert_eq!(weight_bps(80, 100).unwrap(), 8_000);
        assert_eq!(weight_bps(1, 3).unwrap(), 3_333);
        assert_eq!(weight_bps(0, 0).unwrap(), 0);
        assert!(weight_bps(5, 4).is_err());
    }

    #[test]
    fn test_plan_moves_excess_usdc() {
        let plan = plan_rebalance(80, 20, 5_000, 500).unwrap();
        assert_eq!(
            plan,
            RebalancePlan::Move {
                leg: RebalanceLeg {
                    from: Asset::Usdc,
                    to: Asset::Usdt,
                    amount: 30,
                },
                current_bps: 8_000,
                drift_bps: 3_000,
            }
        );
    }

    #[test]
    fn test_plan_moves_excess_usdt() {
        match plan_rebalance(1_000, 9_000, 6_000, 500).unwrap() {
            RebalancePlan::Move { leg, .. } => {
                assert_eq!(leg.from, Asset::Usdt);
                assert_eq!(leg.to, Asset::Usdc);
                assert_eq!(leg.amount, 5_000);
            }
            other => panic!("expected a transfer, got {:?}", other),
        }
    }

    #[test]
    fn test_plan_holds_at_threshold() {
        // drift of exactly 500 bps does not exceed a 500 bps threshold
        assert!(matches!(
            plan_rebalance(55, 45, 5_000, 500).unwrap(),
            RebalancePlan::Hold { drift_bps: 500, .. }
        ));
        assert!(matches!(
            plan_rebalance(56, 44, 5_000, 500).unwrap(),
            RebalancePlan::Move { .. }
        ));
    }

    #[test]
    fn test_plan_holds_on_empty_basket() {
        assert_eq!(
            plan_rebalance(0, 0, 5_000, 500).unwrap(),
            RebalancePlan::Hold {
                current_bps: 0,
                drift_bps: 0,
            }
        );
    }

    #[test]
    fn test_plan_lands_exactly_on_target_when_nav_is_not_round() {
        // nav 30_001: 15_000 USDC is 4999 bps, 15_001 is 5000 bps
        match plan_rebalance(24_001, 6_000, 5_000, 500).unwrap() {
            RebalancePlan::Move { leg, .. } => {
                assert_eq!(leg.from, Asset::Usdc);
                assert_eq!(leg.amount, 9_000);
                let (usdc, usdt) = apply_leg(24_001, 6_000, &leg).unwrap();
                assert_eq!((usdc, usdt), (15_001, 15_000));
                assert_eq!(weight_bps(usdc, 30_001).unwrap(), 5_000);
            }
            other => panic!("expected a transfer, got {:?}", other),
        }

        // Same nav, approaching from the USDT side
        match plan_rebalance(6_000, 24_001, 5_000, 500).unwrap() {
            RebalancePlan::Move { leg, .. } => {
                assert_eq!(leg.from, Asset::Usdt);
                assert_eq!(leg.amount, 9_001);
                assert_eq!(weight_bps(15_001, 30_001).unwrap(), 5_000);
            }
            other => panic!("expected a transfer, got {:?}", other),
        }
    }

    #[test]
    fn test_plan_holds_when_truncation_leaves_nothing_to_move() {
        // nav 3: current 6666 bps, target 3335 -> desired ceil(3 * 0.3335) = 2 = usdc
        assert!(matches!(
            plan_rebalance(2, 1, 3_335, 1).unwrap(),
            RebalancePlan::Hold { .. }
        ));
    }

    #[test]
    fn test_apply_leg_preserves_nav() {
        let leg = RebalanceLeg {
            from: Asset::Usdc,
            to: Asset::Usdt,
            amount: 30,
        };
        assert_eq!(apply_leg(80, 20, &leg).unwrap(), (50, 50));
        assert!(apply_leg(10, 20, &leg).is_err());
    }
}
