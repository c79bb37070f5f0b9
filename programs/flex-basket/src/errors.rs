use anchor_lang::prelude::*;

/// Error codes for the FLEX basket program
///
/// Every check raising one of these runs before any account is mutated.
#[error_code]
pub enum BasketError {
    #[msg("Unauthorized - signer does not hold a role permitted for this action")]
    Unauthorized,

    #[msg("Config account is already initialized")]
    AlreadyInitialized,

    #[msg("Target weights must sum to 10,000 bps and respect the per-asset caps")]
    InvalidWeights,

    #[msg("Drift threshold must be between 1 and 10,000 bps")]
    InvalidThreshold,

    #[msg("Weight caps must be at most 10,000 bps, admit a full allocation and cover current targets")]
    InvalidCaps,

    #[msg("Output amount is below the caller's minimum")]
    SlippageExceeded,

    #[msg("Selected reserve vault cannot cover the payout")]
    InsufficientVaultLiquidity,

    #[msg("Rebalance target does not match the governed strategy target")]
    TargetMismatch,

    #[msg("Basket is paused")]
    Paused,

    #[msg("Deposit exceeds the per-transaction or daily deposit limit")]
    DepositLimitExceeded,

    #[msg("Deposit limits must be non-zero and the per-transaction cap may not exceed the daily cap")]
    InvalidDepositLimits,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Deposit is too small to mint any FLEX")]
    DepositTooSmall,

    #[msg("Redemption is too small to pay out any reserve asset")]
    RedeemTooSmall,

    #[msg("Caller holds fewer FLEX than requested")]
    InsufficientReceiptBalance,

    #[msg("Invalid token mint for this account")]
    InvalidMint,

    #[msg("Invalid token account owner")]
    InvalidOwner,

    #[msg("Account is not the basket's reserve vault")]
    InvalidVault,

    #[msg("USDC and USDT reserves must use different mints")]
    DuplicateReserveMint,

    #[msg("Mint must use 6 decimals")]
    InvalidDecimals,

    #[msg("Rebalance interval must not be negative")]
    InvalidRebalanceInterval,

    #[msg("Recorded NAV diverges from reserve vault balances")]
    NavMismatch,

    #[msg("Math overflow occurred during calculation")]
    MathOverflow,

    #[msg("Cannot divide by zero")]
    DivisionByZero,
}
