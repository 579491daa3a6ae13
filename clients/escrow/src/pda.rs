use anchor_lang::prelude::*;

use crate::{config::EscrowConfig, constants::ESCROW_SEED, errors::EscrowError};

/// Little-endian, fixed-width seed bytes as the escrow program expects them.
pub fn encode_seed(seed: u64) -> [u8; 8] {
    seed.to_le_bytes()
}

/// Escrow PDA for `owner` and `seed`: seeds `["escrow", owner, seed_le]`
/// under the escrow program. Returns the address and its bump.
pub fn derive_escrow_address(
    owner: &Pubkey,
    seed: u64,
    config: &EscrowConfig,
) -> std::result::Result<(Pubkey, u8), EscrowError> {
    let seed_bytes = encode_seed(seed);
    Pubkey::try_find_program_address(
        &[ESCROW_SEED, owner.as_ref(), seed_bytes.as_ref()],
        &config.program_id,
    )
    .ok_or(EscrowError::AddressDerivation)
}

/// Associated token account of `owner` for `mint`: seeds
/// `[owner, token_program, mint]` under the associated token program.
pub fn derive_associated_token_address(
    owner: &Pubkey,
    mint: &Pubkey,
    config: &EscrowConfig,
) -> std::result::Result<Pubkey, EscrowError> {
    Pubkey::try_find_program_address(
        &[owner.as_ref(), config.token_program.as_ref(), mint.as_ref()],
        &config.associated_token_program,
    )
    .map(|(address, _)| address)
    .ok_or(EscrowError::AddressDerivation)
}

#[cfg(test)]
mod tests {
    use anchor_spl::associated_token::get_associated_token_address_with_program_id;

    use super::*;

    #[test]
    fn seed_is_little_endian() {
        assert_eq!(encode_seed(1), [1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode_seed(256), [0, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode_seed(u64::MAX), [0xff; 8]);
    }

    #[test]
    fn escrow_address_is_deterministic() {
        let config = EscrowConfig::new(Pubkey::new_unique());
        let owner = Pubkey::new_unique();

        let first = derive_escrow_address(&owner, 42, &config).unwrap();
        let second = derive_escrow_address(&owner, 42, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn escrow_address_matches_program_seeds() {
        let config = EscrowConfig::new(Pubkey::new_unique());
        let owner = Pubkey::new_unique();

        let expected = Pubkey::find_program_address(
            &[b"escrow", owner.as_ref(), 42u64.to_le_bytes().as_ref()],
            &config.program_id,
        );

        assert_eq!(derive_escrow_address(&owner, 42, &config).unwrap(), expected);
    }

    #[test]
    fn escrow_address_depends_on_seed_and_owner() {
        let config = EscrowConfig::new(Pubkey::new_unique());
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let (alice_1, _) = derive_escrow_address(&alice, 1, &config).unwrap();
        let (alice_2, _) = derive_escrow_address(&alice, 2, &config).unwrap();
        let (bob_1, _) = derive_escrow_address(&bob, 1, &config).unwrap();

        assert_ne!(alice_1, alice_2);
        assert_ne!(alice_1, bob_1);
    }

    #[test]
    fn escrow_address_depends_on_program() {
        let owner = Pubkey::new_unique();
        let first = EscrowConfig::new(Pubkey::new_unique());
        let second = EscrowConfig::new(Pubkey::new_unique());

        assert_ne!(
            derive_escrow_address(&owner, 7, &first).unwrap().0,
            derive_escrow_address(&owner, 7, &second).unwrap().0,
        );
    }

    #[test]
    fn associated_token_address_matches_spl_helper() {
        let config = EscrowConfig::new(Pubkey::new_unique());
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        assert_eq!(
            derive_associated_token_address(&owner, &mint, &config).unwrap(),
            get_associated_token_address_with_program_id(&owner, &mint, &config.token_program),
        );
    }

    #[test]
    fn associated_token_address_accepts_off_curve_owner() {
        let config = EscrowConfig::new(Pubkey::new_unique());
        let (escrow, _) = derive_escrow_address(&Pubkey::new_unique(), 9, &config).unwrap();

        assert_eq!(
            derive_associated_token_address(&escrow, &config.mint, &config).unwrap(),
            get_associated_token_address_with_program_id(&escrow, &config.mint, &config.token_program),
        );
    }
}
