use client::ClientError;
use thiserror::Error;

/// Domain errors for token operations.
///
/// Every variant is client-visible; the HTTP layer maps them to 4xx statuses.
/// Nothing here is retried.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Deployment artifacts are absent; there is no contract to talk to.
    #[error("token contract is not deployed or its address is missing")]
    ContractMissing,

    /// The address was malformed or the read against it failed.
    #[error("invalid or unrecognized address: {0}")]
    InvalidAddress(String),

    #[error("invalid private key format")]
    InvalidPrivateKey,

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("cannot transfer to the same address")]
    SameAddressTransfer,

    #[error("sender does not have enough tokens")]
    InsufficientBalance,

    #[error("allowance too low")]
    AllowanceTooLow,

    /// Transaction was rejected by the node or reverted on chain. Carries the
    /// underlying message when one is available.
    #[error("submission failed: {0}")]
    Submission(String),
}

impl From<ClientError> for TokenError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidPrivateKey(_) => Self::InvalidPrivateKey,
            ClientError::InvalidUrl(msg) => Self::Submission(msg),
        }
    }
}
