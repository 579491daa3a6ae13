/// Step logging through `msg!`, compiled in only with the `step-log` feature.
macro_rules! step {
    ($($arg:tt)*) => {
        #[cfg(feature = "step-log")]
        anchor_lang::prelude::msg!($($arg)*);
    };
}

pub mod amount;
pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod pda;
pub mod provider;
pub mod state;

pub use amount::IntoAmount;
pub use client::{ClientResult, EscrowClient};
pub use config::EscrowConfig;
pub use errors::{ClientError, EscrowError};
pub use instructions::{build_make_request, build_refund_request, build_take_request};
pub use pda::{derive_associated_token_address, derive_escrow_address, encode_seed};
pub use provider::{submit, IdentityProvider, SubmissionChannel};
pub use state::{EscrowCall, EscrowOperation, EscrowRequest, TransactionId};

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    #[test]
    fn step_arguments_are_only_evaluated_with_step_log() {
        let evaluated = Cell::new(false);

        step!("{}", {
            evaluated.set(true);
            1
        });

        assert_eq!(evaluated.get(), cfg!(feature = "step-log"));
    }
}
