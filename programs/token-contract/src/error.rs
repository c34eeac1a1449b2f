use anchor_lang::prelude::*;

#[error_code]
pub enum TokenContractError {
    #[msg("Unauthorized - signer does not own the source holding account")]
    Unauthorized,
}
