use anchor_lang::prelude::*;

use crate::{
    authority::{Role, RoleHolders},
    constants::*,
    errors::BasketError,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetWeights {
    pub usdc_weight_bps: u16,
    pub usdt_weight_bps: u16,
}

/// Minimum drift, in bps of NAV, that must be exceeded before a rebalance moves funds
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriftThreshold {
    pub bps: u16,
}

/// Per-asset upper bound on target weight
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeightCaps {
    pub usdc_cap_bps: u16,
    pub usdt_cap_bps: u16,
}

impl TargetWeights {
    pub const DEFAULT: TargetWeights = TargetWeights {
        usdc_weight_bps: DEFAULT_USDC_WEIGHT_BPS,
        usdt_weight_bps: DEFAULT_USDT_WEIGHT_BPS,
    };

    /// Weights must sum to exactly 10_000 bps and sit within the caps.
    /// Over-cap targets are rejected, never clamped.
    pub fn validate(&self, caps: &WeightCaps) -> Result<()> {
        let sum = (self.usdc_weight_bps as u32) + (self.usdt_weight_bps as u32);
        require!(
            sum == BPS_DENOMINATOR as u32,
            BasketError::InvalidWeights
        );
        require!(
            self.usdc_weight_bps <= caps.usdc_cap_bps && self.usdt_weight_bps <= caps.usdt_cap_bps,
            BasketError::InvalidWeights
        );
        Ok(())
    }
}

impl DriftThreshold {
    pub const DEFAULT: DriftThreshold = DriftThreshold {
        bps: DEFAULT_DRIFT_THRESHOLD_BPS,
    };

    pub fn validate(&self) -> Result<()> {
        require!(
            self.bps > 0 && self.bps <= BPS_DENOMINATOR,
            BasketError::InvalidThreshold
        );
        Ok(())
    }
}

impl WeightCaps {
    pub const DEFAULT: WeightCaps = WeightCaps {
        usdc_cap_bps: DEFAULT_WEIGHT_CAP_BPS,
        usdt_cap_bps: DEFAULT_WEIGHT_CAP_BPS,
    };

    /// Caps must be valid bps values that still admit a full allocation
    pub fn validate(&self) -> Result<()> {
        require!(
            self.usdc_cap_bps <= BPS_DENOMINATOR && self.usdt_cap_bps <= BPS_DENOMINATOR,
            BasketError::InvalidCaps
        );
        require!(
            (self.usdc_cap_bps as u32) + (self.usdt_cap_bps as u32) >= BPS_DENOMINATOR as u32,
            BasketError::InvalidCaps
        );
        Ok(())
    }
}

/// Governed allocation targets, read by the rebalancer
#[account]
pub struct StrategyConfig {
    pub admin: Pubkey,                      // 32 bytes
    pub guardian: Pubkey,                   // 32 bytes
    pub target_weights: TargetWeights,      // 4 bytes
    pub drift_threshold: DriftThreshold,    // 2 bytes
    pub weight_caps: WeightCaps,            // 4 bytes
    pub last_updated: i64,                  // 8 bytes
    pub bump: u8,                           // 1 byte
    pub _reserved: [u8; 32],                // 32 bytes
}

impl StrategyConfig {
    pub fn set_targets(&mut self, targets: TargetWeights, now: i64) -> Result<()> {
        targets.validate(&self.weight_caps)?;
        self.target_weights = targets;
        self.last_updated = now;
        Ok(())
    }

    pub fn set_threshold(&mut self, threshold: DriftThreshold, now: i64) -> Result<()> {
        threshold.validate()?;
        self.drift_threshold = threshold;
        self.last_updated = now;
        Ok(())
    }

    /// New caps must still admit the current targets
    pub fn set_caps(&mut self, caps: WeightCaps, now: i64) -> Result<()> {
        caps.validate()?;
        require!(
            self.target_weights.usdc_weight_bps <= caps.usdc_cap_bps
                && self.target_weights.usdt_weight_bps <= caps.usdt_cap_bps,
            BasketError::InvalidCaps
        );
        self.weight_caps = caps;
        self.last_updated = now;
        Ok(())
    }
}

impl RoleHolders for StrategyConfig {
    fn holder(&self, role: Role) -> Option<Pubkey> {
        match role {
            Role::Admin => Some(self.admin),
            Role::Guardian => Some(self.guardian),
            Role::EmergencyAdmin => None,
        }
    }
}
