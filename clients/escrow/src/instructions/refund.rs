use anchor_lang::{prelude::*, solana_program::instruction::AccountMeta, Discriminator, InstructionData};

use crate::{
    amount::IntoAmount,
    config::EscrowConfig,
    errors::EscrowError,
    pda::{derive_associated_token_address, derive_escrow_address},
    state::{EscrowCall, EscrowRequest},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Refund {
    pub maker: Pubkey,
    pub mint_a: Pubkey,
    pub maker_ata_a: Pubkey,
    pub escrow: Pubkey,
    pub vault: Pubkey,
    pub associated_token_program: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for Refund {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.maker, is_signer.unwrap_or(true)),
            AccountMeta::new_readonly(self.mint_a, false),
            AccountMeta::new(self.maker_ata_a, false),
            AccountMeta::new(self.escrow, false),
            AccountMeta::new(self.vault, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// `refund` takes no arguments; the escrow account stores its own seed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefundArgs;

impl Discriminator for RefundArgs {
    // sha256("global:refund")[..8]
    const DISCRIMINATOR: &'static [u8] = &[0x02, 0x60, 0xb7, 0xfb, 0x3f, 0xd0, 0x2e, 0x2e];
}

impl InstructionData for RefundArgs {}

/// Builds a `refund` request for the escrow `maker` opened with `seed`.
pub fn build_refund_request(
    seed: impl IntoAmount,
    maker: Option<Pubkey>,
    config: &EscrowConfig,
) -> std::result::Result<EscrowRequest, EscrowError> {
    let maker = maker.ok_or(EscrowError::MissingIdentity)?;
    let seed = seed.into_amount()?;
    step!("Building refund request: seed {}, maker {}", seed, maker);

    let (escrow, _) = derive_escrow_address(&maker, seed, config)?;
    step!("Escrow PDA: {}", escrow);

    let maker_ata_a = derive_associated_token_address(&maker, &config.mint, config)?;
    step!("Maker ATA (A): {}", maker_ata_a);
    let vault = derive_associated_token_address(&escrow, &config.mint, config)?;
    step!("Vault: {}", vault);

    let accounts = Refund {
        maker,
        mint_a: maker_ata_a,
        maker_ata_a,
        escrow,
        vault,
        associated_token_program: config.associated_token_program,
        token_program: config.token_program,
        system_program: config.system_program,
    };

    Ok(EscrowRequest {
        program_id: config.program_id,
        call: EscrowCall::Refund { accounts },
    })
}
