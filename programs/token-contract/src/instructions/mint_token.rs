use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::{constants::MINT_AMOUNT, events::TokensMinted};

#[derive(Accounts)]
pub struct MintToken<'info> {
    #[account(mut)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,

    #[account(mut)]
    pub token_account: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<MintToken>) -> Result<()> {
    // Mint authority and mint/account match are enforced by the token program
    token::mint_to(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.token_account.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        MINT_AMOUNT,
    )?;

    // Supply is stale until the mint is re-read after the CPI
    ctx.accounts.mint.reload()?;

    emit!(TokensMinted {
        mint: ctx.accounts.mint.key(),
        token_account: ctx.accounts.token_account.key(),
        authority: ctx.accounts.authority.key(),
        amount: MINT_AMOUNT,
        supply: ctx.accounts.mint.supply,
    });

    msg!(
        "Minted {} to {}",
        MINT_AMOUNT,
        ctx.accounts.token_account.key()
    );

    Ok(())
}
