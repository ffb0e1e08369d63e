//! Error types for lineage operations

use coldroot_crypto::CryptoError;
use thiserror::Error;

/// Errors produced by timestamp resolution and event construction.
#[derive(Debug, Error)]
pub enum LineageError {
    /// Label does not split into year and quarter on the `-Q` separator
    #[error("invalid epoch label {0:?}: expected YYYY-Qn")]
    InvalidLabel(String),

    /// Year or quarter token is not an integer
    #[error("invalid number in epoch label: {0}")]
    Parse(#[from] std::num::ParseIntError),

    /// Quarter token is an integer outside 1..=4
    #[error("quarter must be within 1..=4, got {0}")]
    InvalidQuarter(i32),

    /// Year parses but the UTC calendar cannot represent it
    #[error("epoch label {0:?} is outside the representable calendar range")]
    YearOutOfRange(String),

    /// Key material error from the crypto layer
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

/// Result alias for lineage operations
pub type Result<T> = std::result::Result<T, LineageError>;
