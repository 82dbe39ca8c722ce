use anchor_lang::prelude::*;

/// Event emitted when a new airdrop is created
#[event]
pub struct AirdropCreated {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Operator allowed to commit the merkle root
    pub operator: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Amount deposited into the vault at creation
    pub initial_total_amount: u64,
}

/// Event emitted when the merkle root is committed
#[event]
pub struct RootCommitted {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Operator who committed the root
    pub operator: Pubkey,
    /// The merkle root hash
    pub merkle_root: [u8; 32],
}

/// Event emitted when an entitlement is claimed
#[event]
pub struct TokensClaimed {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount paid out to the claimant
    pub amount: u64,
    /// Number of successful claims so far, this one included
    pub num_claims: u64,
    /// Total amount claimed from the airdrop by all users
    pub total_claimed: u64,
}
