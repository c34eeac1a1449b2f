/// Units minted into the destination holding account per `mint_token` call
pub const MINT_AMOUNT: u64 = 10;

/// Units moved from source to destination per `transfer_token` call
pub const TRANSFER_AMOUNT: u64 = 5;
