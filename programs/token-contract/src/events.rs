use anchor_lang::prelude::*;

#[event]
pub struct TokensMinted {
    pub mint: Pubkey,
    pub token_account: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub supply: u64,
}

#[event]
pub struct TokensTransferred {
    pub mint: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
}
