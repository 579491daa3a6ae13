use crate::{
    amount::IntoAmount,
    config::EscrowConfig,
    errors::ClientError,
    instructions::{build_make_request, build_refund_request, build_take_request},
    provider::{submit, IdentityProvider, SubmissionChannel},
    state::TransactionId,
};

pub type ClientResult<T, C> = std::result::Result<T, ClientError<<C as SubmissionChannel>::Error>>;

/// Entry point for callers: reads the connected identity, builds the
/// request and submits it.
///
/// The identity is read once per call. Calls are independent; nothing is
/// serialised or deduplicated between them.
#[derive(Clone, Debug)]
pub struct EscrowClient<P, C> {
    config: EscrowConfig,
    identity: P,
    channel: C,
}

impl<P: IdentityProvider, C: SubmissionChannel> EscrowClient<P, C> {
    pub fn new(config: EscrowConfig, identity: P, channel: C) -> Self {
        Self {
            config,
            identity,
            channel,
        }
    }

    pub fn config(&self) -> &EscrowConfig {
        &self.config
    }

    /// Opens an escrow: deposits `deposit` and asks for `receive` in return.
    pub async fn create(
        &self,
        seed: impl IntoAmount,
        deposit: impl IntoAmount,
        receive: impl IntoAmount,
    ) -> ClientResult<TransactionId, C> {
        let request = build_make_request(
            seed,
            deposit,
            receive,
            self.identity.public_key(),
            &self.config,
        )?;
        submit(&request, &self.channel).await
    }

    /// Cancels the connected maker's escrow and returns the deposit.
    pub async fn refund(&self, seed: impl IntoAmount) -> ClientResult<TransactionId, C> {
        let request = build_refund_request(seed, self.identity.public_key(), &self.config)?;
        submit(&request, &self.channel).await
    }

    pub async fn take(&self, seed: impl IntoAmount) -> ClientResult<TransactionId, C> {
        let request = build_take_request(seed, self.identity.public_key(), &self.config)?;
        submit(&request, &self.channel).await
    }
}
