use anchor_lang::prelude::*;
use anchor_spl::token::{
    close_account, transfer_checked, CloseAccount, Mint, Token, TokenAccount, TransferChecked,
};

use crate::errors::EscrowError;
use crate::state::{Escrow, ESCROW_SEED, VAULT_SEED};

#[derive(Accounts)]
pub struct Cancel<'info> {
    /// The seller aborting their own deal
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Refund destination, pinned to the token account recorded at open
    #[account(mut)]
    pub initializer_token_account: Account<'info, TokenAccount>,

    /// Vault to drain and close
    #[account(
        mut,
        seeds = [VAULT_SEED, initializer.key().as_ref()],
        bump = escrow_account.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Escrow record, closed to the initializer
    #[account(
        mut,
        close = initializer,
        has_one = initializer @ EscrowError::InvalidInitializer,
        has_one = initializer_token_account @ EscrowError::InvalidTokenAccount,
        has_one = mint @ EscrowError::InvalidMint,
        seeds = [ESCROW_SEED, initializer.key().as_ref()],
        bump = escrow_account.escrow_bump,
    )]
    pub escrow_account: Account<'info, Escrow>,

    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Cancel<'info> {
    /// Return the vault's full balance to the seller, signed by the vault
    /// PDA, then close the vault so its address is free for a future deal
    pub fn refund_and_close_vault(&self) -> Result<()> {
        let initializer = self.escrow_account.initializer;
        let signer_seeds: &[&[&[u8]]] = &[&[
            VAULT_SEED,
            initializer.as_ref(),
            &[self.escrow_account.vault_bump],
        ]];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.initializer_token_account.to_account_info(),
            authority: self.vault.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        transfer_checked(cpi_ctx, self.vault.amount, self.mint.decimals)?;

        let cpi_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.initializer.to_account_info(),
            authority: self.vault.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        close_account(cpi_ctx)
    }
}

pub fn handler(ctx: Context<Cancel>) -> Result<()> {
    require!(
        !ctx.accounts.escrow_account.is_completed,
        EscrowError::AlreadyCompleted
    );

    ctx.accounts.refund_and_close_vault()?;

    msg!("Escrow cancelled: tokens returned to initializer");

    Ok(())
}
