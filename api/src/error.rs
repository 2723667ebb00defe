use thiserror::Error;

/// Failures raised while building or signing transactions locally. Nothing
/// in this crate touches the network.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid rate {n}/{d}: both terms must be positive and fit in an i32")]
    InvalidRate { n: u32, d: u32 },

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("amount overflow")]
    AmountOverflow,

    #[error("invalid asset code '{0}'")]
    InvalidAssetCode(String),

    #[error("transaction has no operations")]
    NoOperations,

    #[error("transaction has {0} operations, the maximum is 100")]
    TooManyOperations(usize),

    #[error("fee overflow")]
    FeeOverflow,

    #[error("xdr error: {0}")]
    Xdr(#[from] stellar_xdr::curr::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
