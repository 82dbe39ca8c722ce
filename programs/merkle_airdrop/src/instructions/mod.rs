pub mod create_airdrop;
pub mod commit_root;
pub mod claim;

pub use create_airdrop::*;
pub use commit_root::*;
pub use claim::*;
