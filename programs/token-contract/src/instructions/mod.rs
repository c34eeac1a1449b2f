pub mod mint_token;
pub mod transfer_token;

#[allow(ambiguous_glob_reexports)]
pub use mint_token::*;
#[allow(ambiguous_glob_reexports)]
pub use transfer_token::*;
