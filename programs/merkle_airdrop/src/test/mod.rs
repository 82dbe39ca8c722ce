pub mod merkle_tree;
pub mod test_commit_root;

use anchor_lang::error::Error;

/// Custom error code carried by `err`.
pub fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(e) => panic!("expected an anchor error, got {:?}", e),
    }
}
