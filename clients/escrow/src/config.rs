use anchor_lang::prelude::*;

use crate::constants::{ASSOCIATED_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};

/// Program ids and the token mint every request is resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EscrowConfig {
    /// The deployed escrow program; owns the escrow PDAs.
    pub program_id: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
    /// Mint used for every associated token lookup (maker, taker and vault).
    ///
    /// Starts as the token program id, which is what the deployed web
    /// front-end passes in the mint position. Set a real mint with
    /// [`EscrowConfig::with_mint`] to target that mint's token accounts.
    pub mint: Pubkey,
}

impl EscrowConfig {
    /// Config for the escrow program deployed at `program_id`, using the SPL
    /// token, associated token and system programs.
    ///
    /// The program id comes from the deployment's IDL; there is no default.
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            token_program: TOKEN_PROGRAM_ID,
            associated_token_program: ASSOCIATED_TOKEN_PROGRAM_ID,
            system_program: SYSTEM_PROGRAM_ID,
            mint: TOKEN_PROGRAM_ID,
        }
    }

    pub fn with_mint(mut self, mint: Pubkey) -> Self {
        self.mint = mint;
        self
    }
}
