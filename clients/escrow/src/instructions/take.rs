use anchor_lang::{prelude::*, solana_program::instruction::AccountMeta, Discriminator, InstructionData};

use crate::{
    amount::IntoAmount,
    config::EscrowConfig,
    errors::EscrowError,
    pda::{derive_associated_token_address, derive_escrow_address},
    state::{EscrowCall, EscrowRequest},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Take {
    pub taker: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub taker_ata_a: Pubkey,
    pub taker_ata_b: Pubkey,
    pub maker_ata_b: Pubkey,
    pub escrow: Pubkey,
    pub vault: Pubkey,
    pub associated_token_program: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for Take {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.taker, is_signer.unwrap_or(true)),
            AccountMeta::new_readonly(self.mint_a, false),
            AccountMeta::new_readonly(self.mint_b, false),
            AccountMeta::new(self.taker_ata_a, false),
            AccountMeta::new(self.taker_ata_b, false),
            AccountMeta::new(self.maker_ata_b, false),
            AccountMeta::new(self.escrow, false),
            AccountMeta::new(self.vault, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TakeArgs;

impl Discriminator for TakeArgs {
    // sha256("global:take")[..8]
    const DISCRIMINATOR: &'static [u8] = &[0x95, 0xe2, 0x34, 0x68, 0x06, 0x8e, 0xe6, 0x27];
}

impl InstructionData for TakeArgs {}

/// Builds a `take` request for `taker`.
///
/// Every address is resolved from the taker: the escrow PDA seeds, both
/// taker token accounts and the maker's receive account. This matches the
/// deployed front-end and is kept until the maker-side roles are settled.
pub fn build_take_request(
    seed: impl IntoAmount,
    taker: Option<Pubkey>,
    config: &EscrowConfig,
) -> std::result::Result<EscrowRequest, EscrowError> {
    let taker = taker.ok_or(EscrowError::MissingIdentity)?;
    let seed = seed.into_amount()?;
    step!("Building take request: seed {}, taker {}", seed, taker);

    let (escrow, _) = derive_escrow_address(&taker, seed, config)?;
    step!("Escrow PDA: {}", escrow);

    let taker_ata_a = derive_associated_token_address(&taker, &config.mint, config)?;
    step!("Taker ATA (A): {}", taker_ata_a);
    let taker_ata_b = derive_associated_token_address(&taker, &config.mint, config)?;
    step!("Taker ATA (B): {}", taker_ata_b);
    let maker_ata_b = derive_associated_token_address(&taker, &config.mint, config)?;
    step!("Maker ATA (B): {}", maker_ata_b);
    let vault = derive_associated_token_address(&escrow, &config.mint, config)?;
    step!("Vault: {}", vault);

    let accounts = Take {
        taker,
        mint_a: taker_ata_a,
        mint_b: taker_ata_b,
        taker_ata_a,
        taker_ata_b,
        maker_ata_b,
        escrow,
        vault,
        associated_token_program: config.associated_token_program,
        token_program: config.token_program,
        system_program: config.system_program,
    };

    Ok(EscrowRequest {
        program_id: config.program_id,
        call: EscrowCall::Take { accounts },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EscrowOperation;

    #[test]
    fn take_resolves_every_role_from_the_taker() {
        let config = EscrowConfig::new(Pubkey::new_unique());
        let taker = Pubkey::new_unique();

        let request = build_take_request(5u64, Some(taker), &config).unwrap();

        let (escrow, _) = derive_escrow_address(&taker, 5, &config).unwrap();
        let taker_ata = derive_associated_token_address(&taker, &config.mint, &config).unwrap();
        let EscrowCall::Take { accounts } = request.call else {
            panic!("expected a take call");
        };
        assert_eq!(accounts.escrow, escrow);
        assert_eq!(accounts.taker_ata_a, taker_ata);
        assert_eq!(accounts.taker_ata_b, taker_ata);
        assert_eq!(accounts.maker_ata_b, taker_ata);
        assert_eq!(
            accounts.vault,
            derive_associated_token_address(&escrow, &config.mint, &config).unwrap()
        );
    }

    #[test]
    fn take_account_order_and_flags() {
        let config = EscrowConfig::new(Pubkey::new_unique());
        let taker = Pubkey::new_unique();
        let request = build_take_request(5u64, Some(taker), &config).unwrap();

        let metas = request.account_metas();

        assert_eq!(request.operation(), EscrowOperation::Take);
        assert_eq!(metas.len(), 11);
        assert_eq!(metas[0].pubkey, taker);
        assert!(metas[0].is_signer);
        assert_eq!(metas[6].pubkey, request.escrow());
        assert_eq!(metas[7].pubkey, request.vault());
        assert_eq!(metas[10].pubkey, anchor_lang::system_program::ID);
    }

    #[test]
    fn take_rejects_negative_seed() {
        let result = build_take_request(-3i64, Some(Pubkey::new_unique()), &EscrowConfig::new(Pubkey::new_unique()));

        assert_eq!(result, Err(EscrowError::InvalidAmount));
    }
}
