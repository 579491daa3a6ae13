use anchor_lang::prelude::*;

use crate::{
    errors::ClientError,
    state::{EscrowRequest, TransactionId},
};

/// Source of the connected wallet's public key.
pub trait IdentityProvider {
    /// `None` while no wallet is connected.
    fn public_key(&self) -> Option<Pubkey>;
}

impl IdentityProvider for Pubkey {
    fn public_key(&self) -> Option<Pubkey> {
        Some(*self)
    }
}

impl IdentityProvider for Option<Pubkey> {
    fn public_key(&self) -> Option<Pubkey> {
        *self
    }
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for &T {
    fn public_key(&self) -> Option<Pubkey> {
        (**self).public_key()
    }
}

/// Signs, broadcasts and confirms escrow requests, e.g. a wallet adapter
/// backed by an RPC connection.
#[allow(async_fn_in_trait)]
pub trait SubmissionChannel {
    type Error;

    /// Returns the transaction signature of the sent request.
    async fn send(&self, request: &EscrowRequest) -> std::result::Result<String, Self::Error>;
}

impl<T: SubmissionChannel + ?Sized> SubmissionChannel for &T {
    type Error = T::Error;

    async fn send(&self, request: &EscrowRequest) -> std::result::Result<String, Self::Error> {
        (**self).send(request).await
    }
}

/// Sends `request` once through `channel`.
///
/// Channel failures come back untouched inside [`ClientError::Submission`].
pub async fn submit<C: SubmissionChannel>(
    request: &EscrowRequest,
    channel: &C,
) -> std::result::Result<TransactionId, ClientError<C::Error>> {
    step!(
        "Sending {} transaction to program {}",
        request.operation(),
        request.program_id
    );
    let signature = channel
        .send(request)
        .await
        .map_err(ClientError::Submission)?;
    step!("Transaction signature: {}", signature);

    Ok(TransactionId(signature))
}
