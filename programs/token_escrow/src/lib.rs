use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod state;

pub use instructions::*;
pub use state::*;

declare_id!("22222222222222222222222222222222222222222222");

#[program]
pub mod token_escrow {
    use super::*;

    /// Open an escrow: the initializer locks tokens in the vault and
    /// declares how many lamports they want in return
    pub fn initialize_escrow(
        ctx: Context<InitializeEscrow>,
        amount_to_send: u64,
        amount_to_receive: u64,
    ) -> Result<()> {
        instructions::initialize_escrow::handler(ctx, amount_to_send, amount_to_receive)
    }

    /// Settle the escrow: the taker pays lamports to the initializer and
    /// receives the vaulted tokens, all within one instruction
    pub fn exchange(ctx: Context<Exchange>) -> Result<()> {
        instructions::exchange::handler(ctx)
    }

    /// Abort the escrow: the initializer reclaims the vaulted tokens
    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        instructions::cancel::handler(ctx)
    }
}
