use anchor_lang::prelude::*;

/// Domain tag prefixed to every escrow PDA seed set.
pub const ESCROW_SEED: &[u8] = b"escrow";

/// SPL Token program.
pub const TOKEN_PROGRAM_ID: Pubkey = anchor_spl::token::ID;

/// SPL Associated Token Account program.
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = anchor_spl::associated_token::ID;

pub const SYSTEM_PROGRAM_ID: Pubkey = anchor_lang::system_program::ID;
