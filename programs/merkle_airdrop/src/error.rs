use anchor_lang::prelude::*;

#[error_code]
pub enum MerkleAirdropError {
    // Access control errors
    #[msg("Only operator can perform this action")]
    OnlyOperator,
    #[msg("Claimant must sign for its own account")]
    ClaimantMismatch,

    // Root and claim state errors
    #[msg("Merkle root already committed")]
    RootAlreadyCommitted,
    #[msg("No merkle root committed")]
    NoRootCommitted,
    #[msg("Already claimed")]
    AlreadyClaimed,

    // Payload validation errors
    #[msg("Token mint does not match airdrop's token mint")]
    TokenMintMismatch,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Invalid operator account")]
    InvalidOperator,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,
}

/// Coarse classification of [MerkleAirdropError] for clients deciding how to
/// report a rejected instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The signer may not perform the instruction.
    Authorization,
    /// The airdrop or claim state forbids the instruction.
    IllegalState,
    /// The supplied payload failed a domain check.
    Validation,
    /// The host could not complete the instruction.
    Runtime,
}

impl MerkleAirdropError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OnlyOperator | Self::ClaimantMismatch => ErrorKind::Authorization,
            Self::RootAlreadyCommitted | Self::NoRootCommitted | Self::AlreadyClaimed => {
                ErrorKind::IllegalState
            }
            Self::TokenMintMismatch | Self::InvalidProof | Self::InvalidOperator => {
                ErrorKind::Validation
            }
            Self::ArithmeticOverflow | Self::InsufficientVaultBalance => ErrorKind::Runtime,
        }
    }
}
