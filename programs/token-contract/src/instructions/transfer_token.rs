use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::TRANSFER_AMOUNT, error::TokenContractError, events::TokensTransferred};

#[derive(Accounts)]
pub struct TransferToken<'info> {
    pub token_program: Program<'info, Token>,

    // A holding account can only be drained by its owner; delegates are not accepted
    #[account(
        mut,
        constraint = from.owner == from_authority.key() @ TokenContractError::Unauthorized,
    )]
    pub from: Account<'info, TokenAccount>,

    pub from_authority: Signer<'info>,

    #[account(mut)]
    pub to: Account<'info, TokenAccount>,
}

pub fn handler(ctx: Context<TransferToken>) -> Result<()> {
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.from.to_account_info(),
                to: ctx.accounts.to.to_account_info(),
                authority: ctx.accounts.from_authority.to_account_info(),
            },
        ),
        TRANSFER_AMOUNT,
    )?;

    emit!(TokensTransferred {
        mint: ctx.accounts.from.mint,
        from: ctx.accounts.from.key(),
        to: ctx.accounts.to.key(),
        authority: ctx.accounts.from_authority.key(),
        amount: TRANSFER_AMOUNT,
    });

    Ok(())
}
