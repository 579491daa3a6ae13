use anchor_lang::{prelude::*, solana_program::instruction::AccountMeta, Discriminator, InstructionData};

use crate::{
    amount::IntoAmount,
    config::EscrowConfig,
    errors::EscrowError,
    pda::{derive_associated_token_address, derive_escrow_address},
    state::{EscrowCall, EscrowRequest},
};

/// Accounts of the `make` instruction, in the order the program declares them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Make {
    pub maker: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub maker_ata_a: Pubkey,
    pub escrow: Pubkey,
    // vault is the escrow's token account, it receives the deposit
    pub vault: Pubkey,
    pub associated_token_program: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for Make {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.maker, is_signer.unwrap_or(true)),
            AccountMeta::new_readonly(self.mint_a, false),
            AccountMeta::new_readonly(self.mint_b, false),
            AccountMeta::new(self.maker_ata_a, false),
            AccountMeta::new(self.escrow, false),
            AccountMeta::new(self.vault, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// Arguments of the `make` instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MakeArgs {
    pub seed: u64,
    pub deposit: u64,
    pub receive: u64,
}

impl Discriminator for MakeArgs {
    // sha256("global:make")[..8]
    const DISCRIMINATOR: &'static [u8] = &[0x8a, 0xe3, 0xe8, 0x4d, 0xdf, 0xa6, 0x60, 0xc5];
}

impl InstructionData for MakeArgs {}

/// Builds a `make` request for `maker`.
///
/// The identity is checked before any input is converted or any address is
/// derived.
pub fn build_make_request(
    seed: impl IntoAmount,
    deposit: impl IntoAmount,
    receive: impl IntoAmount,
    maker: Option<Pubkey>,
    config: &EscrowConfig,
) -> std::result::Result<EscrowRequest, EscrowError> {
    let maker = maker.ok_or(EscrowError::MissingIdentity)?;
    let args = MakeArgs {
        seed: seed.into_amount()?,
        deposit: deposit.into_amount()?,
        receive: receive.into_amount()?,
    };
    step!(
        "Building make request: seed {}, deposit {}, receive {}, maker {}",
        args.seed,
        args.deposit,
        args.receive,
        maker
    );

    let (escrow, _) = derive_escrow_address(&maker, args.seed, config)?;
    step!("Escrow PDA: {}", escrow);

    let maker_ata_a = derive_associated_token_address(&maker, &config.mint, config)?;
    step!("Maker ATA (A): {}", maker_ata_a);
    let vault = derive_associated_token_address(&escrow, &config.mint, config)?;
    step!("Vault: {}", vault);

    // The mint slots carry the maker ATA and the vault, as the deployed
    // front-end fills them.
    let accounts = Make {
        maker,
        mint_a: maker_ata_a,
        mint_b: vault,
        maker_ata_a,
        escrow,
        vault,
        associated_token_program: config.associated_token_program,
        token_program: config.token_program,
        system_program: config.system_program,
    };

    Ok(EscrowRequest {
        program_id: config.program_id,
        call: EscrowCall::Make { accounts, args },
    })
}
