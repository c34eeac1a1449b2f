//! Instruction builders for the two scenarios
//!
//! Token and associated-token-account instructions come from the SPL crates
//! re-exported by `anchor-spl`; program calls are built from the Anchor
//! generated `accounts` and `instruction` modules of `token-contract`.

use anchor_lang::{
    solana_program::{
        instruction::Instruction, program_pack::Pack, pubkey::Pubkey, system_instruction,
    },
    InstructionData, ToAccountMetas,
};
use anchor_spl::{
    associated_token::{
        get_associated_token_address,
        spl_associated_token_account::instruction::create_associated_token_account,
    },
    token::spl_token::{self, instruction::initialize_mint, state::Mint},
};

use crate::error::Result;

/// Decimals of the scenario mint; balances are whole units
pub const MINT_DECIMALS: u8 = 0;

/// Size of the account allocated for the mint
pub const MINT_SPACE: usize = Mint::LEN;

/// Holding account of `owner` for `mint`
pub fn holding_account_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

/// Allocate the mint account, initialize it with `authority` as mint and
/// freeze authority, and create `authority`'s holding account.
///
/// Must be submitted as one transaction signed by `authority` and `mint`.
pub fn mint_setup_instructions(
    authority: &Pubkey,
    mint: &Pubkey,
    lamports: u64,
) -> Result<Vec<Instruction>> {
    Ok(vec![
        system_instruction::create_account(
            authority,
            mint,
            lamports,
            MINT_SPACE as u64,
            &spl_token::ID,
        ),
        initialize_mint(
            &spl_token::ID,
            mint,
            authority,
            Some(authority),
            MINT_DECIMALS,
        )?,
        create_holding_account_instruction(authority, authority, mint),
    ])
}

/// Create `owner`'s holding account for `mint`, paid by `payer`
pub fn create_holding_account_instruction(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    create_associated_token_account(payer, owner, mint, &spl_token::ID)
}

/// Call `mint_token` on the program
pub fn mint_token_instruction(
    mint: &Pubkey,
    token_account: &Pubkey,
    authority: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: token_contract::ID,
        accounts: token_contract::accounts::MintToken {
            mint: *mint,
            token_program: spl_token::ID,
            token_account: *token_account,
            authority: *authority,
        }
        .to_account_metas(None),
        data: token_contract::instruction::MintToken {}.data(),
    }
}

/// Call `transfer_token` on the program
pub fn transfer_token_instruction(
    from: &Pubkey,
    from_authority: &Pubkey,
    to: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: token_contract::ID,
        accounts: token_contract::accounts::TransferToken {
            token_program: spl_token::ID,
            from: *from,
            from_authority: *from_authority,
            to: *to,
        }
        .to_account_metas(None),
        data: token_contract::instruction::TransferToken {}.data(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::{solana_program::system_program, Discriminator};
    use anchor_spl::associated_token::spl_associated_token_account;

    #[test]
    fn test_setup_instruction_order() {
        let authority = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let ixs = mint_setup_instructions(&authority, &mint, 1_461_600).unwrap();

        assert_eq!(ixs.len(), 3);
        assert_eq!(ixs[0].program_id, system_program::ID);
        assert_eq!(ixs[1].program_id, spl_token::ID);
        assert_eq!(ixs[2].program_id, spl_associated_token_account::ID);

        // create_account: funder and new account both sign
        assert_eq!(ixs[0].accounts[0].pubkey, authority);
        assert!(ixs[0].accounts[1].is_signer);
        assert_eq!(ixs[0].accounts[1].pubkey, mint);

        // create_associated_token_account: payer, holding account, owner, mint
        assert_eq!(ixs[2].accounts[1].pubkey, holding_account_address(&authority, &mint));
        assert_eq!(ixs[2].accounts[2].pubkey, authority);
        assert_eq!(ixs[2].accounts[3].pubkey, mint);
    }

    #[test]
    fn test_holding_account_is_deterministic() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        assert_eq!(
            holding_account_address(&owner, &mint),
            holding_account_address(&owner, &mint)
        );
        assert_ne!(
            holding_account_address(&owner, &mint),
            holding_account_address(&Pubkey::new_unique(), &mint)
        );
    }

    #[test]
    fn test_mint_token_accounts() {
        let mint = Pubkey::new_unique();
        let token_account = Pubkey::new_unique();
        let authority = Pubkey::new_unique();

        let ix = mint_token_instruction(&mint, &token_account, &authority);

        assert_eq!(ix.program_id, token_contract::ID);
        assert!(ix.data.starts_with(token_contract::instruction::MintToken::DISCRIMINATOR));

        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(keys, vec![mint, spl_token::ID, token_account, authority]);

        assert!(ix.accounts[0].is_writable);
        assert!(!ix.accounts[1].is_writable);
        assert!(ix.accounts[2].is_writable);
        assert!(ix.accounts[3].is_signer);
        assert!(!ix.accounts[0].is_signer);
    }

    #[test]
    fn test_transfer_token_accounts() {
        let from = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let to = Pubkey::new_unique();

        let ix = transfer_token_instruction(&from, &authority, &to);

        assert_eq!(ix.program_id, token_contract::ID);
        assert!(ix.data.starts_with(token_contract::instruction::TransferToken::DISCRIMINATOR));

        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(keys, vec![spl_token::ID, from, authority, to]);

        assert!(ix.accounts[1].is_writable);
        assert!(ix.accounts[2].is_signer);
        assert!(!ix.accounts[2].is_writable);
        assert!(ix.accounts[3].is_writable);
    }
}
