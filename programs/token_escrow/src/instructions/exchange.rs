use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::token::{
    close_account, transfer_checked, CloseAccount, Mint, Token, TokenAccount, TransferChecked,
};

use crate::errors::EscrowError;
use crate::state::{Escrow, ESCROW_SEED, VAULT_SEED};

#[derive(Accounts)]
pub struct Exchange<'info> {
    /// The buyer paying lamports and receiving the vaulted tokens
    #[account(mut)]
    pub taker: Signer<'info>,

    /// The seller, receiving the lamport leg plus the rent of both
    /// closed accounts
    #[account(mut)]
    pub initializer: SystemAccount<'info>,

    /// Buyer's token account, destination of the token leg
    #[account(
        mut,
        constraint = taker_token_account.owner == taker.key() @ EscrowError::InvalidTokenAccount,
        constraint = taker_token_account.mint == escrow_account.mint @ EscrowError::InvalidMint,
    )]
    pub taker_token_account: Box<Account<'info, TokenAccount>>,

    /// Vault holding the locked tokens, closed to the initializer after
    /// the swap
    #[account(
        mut,
        seeds = [VAULT_SEED, initializer.key().as_ref()],
        bump = escrow_account.vault_bump,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Escrow record, closed to the initializer once settled
    #[account(
        mut,
        close = initializer,
        has_one = initializer @ EscrowError::InvalidInitializer,
        has_one = mint @ EscrowError::InvalidMint,
        seeds = [ESCROW_SEED, initializer.key().as_ref()],
        bump = escrow_account.escrow_bump,
    )]
    pub escrow_account: Box<Account<'info, Escrow>>,

    pub mint: Box<Account<'info, Mint>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Exchange<'info> {
    /// Lamport leg: taker pays the initializer, signed by the taker
    pub fn pay_initializer(&self) -> Result<()> {
        let cpi_ctx = CpiContext::new(
            self.system_program.to_account_info(),
            Transfer {
                from: self.taker.to_account_info(),
                to: self.initializer.to_account_info(),
            },
        );
        transfer(cpi_ctx, self.escrow_account.amount_to_receive)
    }

    /// Token leg: move the vault's full balance to the taker, signed by
    /// the vault PDA, then close the vault with its rent going back to
    /// the initializer
    pub fn release_vault_to_taker(&self) -> Result<()> {
        let initializer = self.escrow_account.initializer;
        let signer_seeds: &[&[&[u8]]] = &[&[
            VAULT_SEED,
            initializer.as_ref(),
            &[self.escrow_account.vault_bump],
        ]];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.taker_token_account.to_account_info(),
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

pub fn handler(ctx: Context<Exchange>) -> Result<()> {
    require!(
        !ctx.accounts.escrow_account.is_completed,
        EscrowError::AlreadyCompleted
    );
    require_gte!(
        ctx.accounts.taker.lamports(),
        ctx.accounts.escrow_account.amount_to_receive,
        EscrowError::InsufficientLamports
    );

    ctx.accounts.pay_initializer()?;
    ctx.accounts.release_vault_to_taker()?;
    ctx.accounts.escrow_account.is_completed = true;

    msg!("Escrow settled: tokens and lamports exchanged");

    Ok(())
}
