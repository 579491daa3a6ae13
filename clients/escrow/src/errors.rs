use std::fmt;

use anchor_lang::prelude::*;

#[error_code]
#[derive(PartialEq, Eq)]
pub enum EscrowError {
    #[msg("Missing identity: no wallet public key is connected")]
    MissingIdentity,
    #[msg("Invalid amount: value must be a non-negative integer that fits in 64 bits")]
    InvalidAmount,
    #[msg("Address derivation failed: no valid program address for these seeds")]
    AddressDerivation,
}

/// Failure of a client operation.
///
/// `E` is the submission channel's own error type; it is carried as-is.
#[derive(Debug)]
pub enum ClientError<E> {
    /// The request could not be built.
    Escrow(EscrowError),
    /// The submission channel rejected or failed the request.
    Submission(E),
}

impl<E> From<EscrowError> for ClientError<E> {
    fn from(error: EscrowError) -> Self {
        ClientError::Escrow(error)
    }
}

impl<E: fmt::Display> fmt::Display for ClientError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Escrow(error) => write!(f, "{error}"),
            ClientError::Submission(error) => write!(f, "Submission failed: {error}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for ClientError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Escrow(_) => None,
            ClientError::Submission(error) => Some(error),
        }
    }
}
