use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

use crate::errors::EscrowError;
use crate::state::{Escrow, ESCROW_SEED, VAULT_SEED};

#[derive(Accounts)]
pub struct InitializeEscrow<'info> {
    /// The seller locking tokens and setting the exchange terms
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Mint of the token being escrowed
    pub mint: Account<'info, Mint>,

    /// Seller's token account, source of the deposit and refund
    /// destination on cancel
    #[account(
        mut,
        constraint = initializer_token_account.owner == initializer.key() @ EscrowError::InvalidTokenAccount,
        constraint = initializer_token_account.mint == mint.key() @ EscrowError::InvalidMint,
    )]
    pub initializer_token_account: Account<'info, TokenAccount>,

    /// Escrow record holding the deal terms. Keyed by the initializer
    /// alone, so a second open deal by the same seller fails here.
    #[account(
        init,
        payer = initializer,
        space = 8 + Escrow::INIT_SPACE,
        seeds = [ESCROW_SEED, initializer.key().as_ref()],
        bump,
    )]
    pub escrow_account: Account<'info, Escrow>,

    /// Vault holding the locked tokens. Its own authority, so only the
    /// program can sign for it through the derived seeds.
    #[account(
        init,
        payer = initializer,
        seeds = [VAULT_SEED, initializer.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = vault,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeEscrow<'info> {
    /// Record the deal terms and the bumps needed to re-derive both PDAs
    pub fn record_terms(
        &mut self,
        amount_to_send: u64,
        amount_to_receive: u64,
        bumps: &InitializeEscrowBumps,
    ) -> Result<()> {
        self.escrow_account.set_inner(Escrow {
            initializer: self.initializer.key(),
            initializer_token_account: self.initializer_token_account.key(),
            amount_to_send,
            amount_to_receive,
            mint: self.mint.key(),
            escrow_bump: bumps.escrow_account,
            vault_bump: bumps.vault,
            is_completed: false,
        });
        Ok(())
    }

    /// Move the offered tokens from the seller into the vault, signed by
    /// the seller
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.initializer_token_account.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.initializer.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, amount, self.mint.decimals)
    }
}

pub fn handler(
    ctx: Context<InitializeEscrow>,
    amount_to_send: u64,
    amount_to_receive: u64,
) -> Result<()> {
    require_gt!(amount_to_send, 0, EscrowError::InvalidAmount);
    require_gt!(amount_to_receive, 0, EscrowError::InvalidAmount);
    require_gte!(
        ctx.accounts.initializer_token_account.amount,
        amount_to_send,
        EscrowError::InsufficientTokenBalance
    );

    ctx.accounts.record_terms(amount_to_send, amount_to_receive, &ctx.bumps)?;
    ctx.accounts.deposit(amount_to_send)?;

    msg!(
        "Escrow opened: {} tokens locked, asking {} lamports",
        amount_to_send,
        amount_to_receive
    );

    Ok(())
}
