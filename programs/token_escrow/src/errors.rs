use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Initializer's token account holds fewer tokens than the escrow amount")]
    InsufficientTokenBalance,
    #[msg("Escrow has already been completed")]
    AlreadyCompleted,
    #[msg("Token account mint does not match the escrow mint")]
    InvalidMint,
    #[msg("Initializer does not match the escrow record")]
    InvalidInitializer,
    #[msg("Token account does not match the one recorded in the escrow")]
    InvalidTokenAccount,
    #[msg("Taker does not hold enough lamports to settle")]
    InsufficientLamports,
}
