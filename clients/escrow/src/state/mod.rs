use std::fmt;

use anchor_lang::{
    prelude::*,
    solana_program::instruction::{AccountMeta, Instruction},
    InstructionData,
};

use crate::instructions::{Make, MakeArgs, Refund, RefundArgs, Take, TakeArgs};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscrowOperation {
    Make,
    Refund,
    Take,
}

impl EscrowOperation {
    /// Instruction name in the program's IDL.
    pub fn name(&self) -> &'static str {
        match self {
            EscrowOperation::Make => "make",
            EscrowOperation::Refund => "refund",
            EscrowOperation::Take => "take",
        }
    }
}

impl fmt::Display for EscrowOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved accounts and arguments of one escrow call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscrowCall {
    Make { accounts: Make, args: MakeArgs },
    Refund { accounts: Refund },
    Take { accounts: Take },
}

/// A fully resolved call against the escrow program, ready to be signed
/// and sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EscrowRequest {
    pub program_id: Pubkey,
    pub call: EscrowCall,
}

impl EscrowRequest {
    pub fn operation(&self) -> EscrowOperation {
        match self.call {
            EscrowCall::Make { .. } => EscrowOperation::Make,
            EscrowCall::Refund { .. } => EscrowOperation::Refund,
            EscrowCall::Take { .. } => EscrowOperation::Take,
        }
    }

    /// The wallet that signs and pays: the maker, or the taker for `take`.
    pub fn authority(&self) -> Pubkey {
        match &self.call {
            EscrowCall::Make { accounts, .. } => accounts.maker,
            EscrowCall::Refund { accounts } => accounts.maker,
            EscrowCall::Take { accounts } => accounts.taker,
        }
    }

    pub fn escrow(&self) -> Pubkey {
        match &self.call {
            EscrowCall::Make { accounts, .. } => accounts.escrow,
            EscrowCall::Refund { accounts } => accounts.escrow,
            EscrowCall::Take { accounts } => accounts.escrow,
        }
    }

    pub fn vault(&self) -> Pubkey {
        match &self.call {
            EscrowCall::Make { accounts, .. } => accounts.vault,
            EscrowCall::Refund { accounts } => accounts.vault,
            EscrowCall::Take { accounts } => accounts.vault,
        }
    }

    pub fn account_metas(&self) -> Vec<AccountMeta> {
        match &self.call {
            EscrowCall::Make { accounts, .. } => accounts.to_account_metas(None),
            EscrowCall::Refund { accounts } => accounts.to_account_metas(None),
            EscrowCall::Take { accounts } => accounts.to_account_metas(None),
        }
    }

    /// Anchor instruction data: discriminator followed by the Borsh arguments.
    pub fn data(&self) -> Vec<u8> {
        match &self.call {
            EscrowCall::Make { args, .. } => args.data(),
            EscrowCall::Refund { .. } => RefundArgs.data(),
            EscrowCall::Take { .. } => TakeArgs.data(),
        }
    }

    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts: self.account_metas(),
            data: self.data(),
        }
    }
}

/// Opaque identifier the submission channel hands back, usually a
/// base58 transaction signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TransactionId {
    fn from(id: String) -> Self {
        TransactionId(id)
    }
}
