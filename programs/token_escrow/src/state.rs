use anchor_lang::prelude::*;

/// Seed tag for the escrow record PDA
pub const ESCROW_SEED: &[u8] = b"escrow";
/// Seed tag for the vault PDA
pub const VAULT_SEED: &[u8] = b"vault";

/// Escrow record storing the terms and lifecycle status of one deal.
///
/// Both PDAs are keyed by the initializer alone, so a seller can hold at
/// most one open deal at a time: a second `initialize_escrow` fails on the
/// occupied addresses.
#[account]
#[derive(InitSpace)]
pub struct Escrow {
    /// The seller; the only identity allowed to cancel, and the
    /// destination of the lamport leg on exchange
    pub initializer: Pubkey,
    /// The seller's token account; refund destination on cancel
    pub initializer_token_account: Pubkey,
    /// Token units locked in the vault
    pub amount_to_send: u64,
    /// Lamports the taker must pay to settle
    pub amount_to_receive: u64,
    /// Mint binding the vault and both parties' token accounts
    pub mint: Pubkey,
    /// Bump for the escrow record PDA
    pub escrow_bump: u8,
    /// Bump for the vault PDA
    pub vault_bump: u8,
    /// Set true at exchange, just before the record is closed
    pub is_completed: bool,
}

/// Derive the escrow record address for a seller
pub fn escrow_address(initializer: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ESCROW_SEED, initializer.as_ref()], &crate::ID)
}

/// Derive the vault address for a seller
pub fn vault_address(initializer: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, initializer.as_ref()], &crate::ID)
}
