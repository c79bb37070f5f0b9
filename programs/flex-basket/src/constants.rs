// Constants for the FLEX basket program

/// Seed for the basket config PDA
pub const BASKET_CONFIG_SEED: &[u8] = b"basket-config";

/// Seed for the strategy config PDA
pub const STRATEGY_CONFIG_SEED: &[u8] = b"strategy-config";

/// Seed for the rebalance config PDA
pub const REBALANCE_CONFIG_SEED: &[u8] = b"rebalance-config";

/// Seed for the PDA that mints FLEX and owns both reserve vaults
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint-authority";

/// Seed for the FLEX receipt mint PDA
pub const FLEX_MINT_SEED: &[u8] = b"flex-mint";

/// Seed prefix for reserve vault token accounts, followed by the reserve mint
pub const VAULT_SEED: &[u8] = b"vault";

/// FLEX and both reserve stablecoins use 6 fractional digits
pub const BASKET_DECIMALS: u8 = 6;

/// 10_000 bps = 100%
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Daily deposit windows roll over on UTC day boundaries
pub const SECONDS_PER_DAY: i64 = 86_400;

pub const DEFAULT_USDC_WEIGHT_BPS: u16 = 5_000;
pub const DEFAULT_USDT_WEIGHT_BPS: u16 = 5_000;
pub const DEFAULT_DRIFT_THRESHOLD_BPS: u16 = 500;
pub const DEFAULT_WEIGHT_CAP_BPS: u16 = 8_000;

/// Space for BasketConfig (8 discriminator + 3 * 32 roles + 5 * 32 linked
/// accounts + 8 nav + 1 paused + 8 max_deposit + 8 max_daily + 8 window day +
/// 8 window total + 4 bumps + 64 padding)
pub const BASKET_CONFIG_SIZE: usize = 8 + (3 * 32) + (5 * 32) + 8 + 1 + 8 + 8 + 8 + 8 + 4 + 64;

/// Space for StrategyConfig (8 discriminator + 2 * 32 roles + 4 targets +
/// 2 threshold + 4 caps + 8 last_updated + 1 bump + 32 padding)
pub const STRATEGY_CONFIG_SIZE: usize = 8 + (2 * 32) + 4 + 2 + 4 + 8 + 1 + 32;

/// Space for RebalanceConfig (8 discriminator + 2 * 32 roles + 1 paused +
/// 8 interval + 8 last timestamp + 8 last slot + 8 count + 1 bump + 32 padding)
pub const REBALANCE_CONFIG_SIZE: usize = 8 + (2 * 32) + 1 + 8 + 8 + 8 + 8 + 1 + 32;
