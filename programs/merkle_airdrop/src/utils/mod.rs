pub mod merkle;
pub mod pda;
pub mod token;

pub use merkle::*;
pub use pda::*;
pub use token::*;
