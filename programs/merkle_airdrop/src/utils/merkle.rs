use std::fmt::Display;

use anchor_lang::solana_program::hash::hash as sha256;

/// SHA-256 of `data`.
pub fn hash(data: &[u8]) -> [u8; 32] {
    sha256(data).to_bytes()
}

/// Hash of `left || right`.
pub fn combine(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left);
    buf[32..].copy_from_slice(right);
    hash(&buf)
}

/// Leaf for one entitlement: the hash of `"<account> <amount>"`.
///
/// `account` is rendered with its `Display` impl (base58 for a `Pubkey`),
/// which must match the encoding the off-chain tree builder used.
pub fn leaf(account: &impl Display, amount: u64) -> [u8; 32] {
    hash(format!("{} {}", account, amount).as_bytes())
}

/// Returns true if `leaf` is a member of the tree committed to by `root`.
///
/// `proof` holds the sibling hashes from the leaf up to the root. Siblings
/// carry no left/right flag: at each level the smaller value goes first, so
/// the tree builder must order pairs the same way. An empty proof proves a
/// one-entry tree.
pub fn verify(leaf: [u8; 32], proof: &[[u8; 32]], root: [u8; 32]) -> bool {
    let mut computed_hash = leaf;
    for proof_element in proof {
        computed_hash = if computed_hash < *proof_element {
            combine(&computed_hash, proof_element)
        } else {
            combine(proof_element, &computed_hash)
        };
    }
    computed_hash == root
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use anchor_lang::prelude::Pubkey;

    use super::*;

    #[test]
    fn test_hash_is_sha256() {
        // sha256("abc")
        let expected: [u8; 32] = [
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
            0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
            0xf2, 0x00, 0x15, 0xad,
        ];
        assert_eq!(hash(b"abc"), expected);
    }

    #[test]
    fn test_combine_hashes_concatenation() {
        let left = hash(b"left");
        let right = hash(b"right");

        let mut concatenated = left.to_vec();
        concatenated.extend_from_slice(&right);

        assert_eq!(combine(&left, &right), hash(&concatenated));
        assert_ne!(combine(&left, &right), combine(&right, &left));
    }

    #[test]
    fn test_leaf_uses_canonical_encoding() {
        assert_eq!(leaf(&"alice", 100), hash(b"alice 100"));

        let claimant = Pubkey::from_str("3gmBN8LBomg3sZEjTgp2YsECMYgJpjcT7xUfpnDB4gSs").unwrap();
        assert_eq!(
            leaf(&claimant, 1000),
            hash(b"3gmBN8LBomg3sZEjTgp2YsECMYgJpjcT7xUfpnDB4gSs 1000")
        );
    }

    #[test]
    fn test_empty_proof() {
        let single = leaf(&"alice", 100);
        assert!(verify(single, &[], single));
        assert!(!verify(single, &[], leaf(&"alice", 101)));
    }

    #[test]
    fn test_sibling_order_is_normalized() {
        let a = hash(b"a");
        let b = hash(b"b");
        let root = if a < b { combine(&a, &b) } else { combine(&b, &a) };

        // Either child proves membership with the other as its only sibling.
        assert!(verify(a, &[b], root));
        assert!(verify(b, &[a], root));
    }

    #[test]
    fn test_equal_siblings() {
        let a = hash(b"a");
        let root = combine(&a, &a);
        assert!(verify(a, &[a], root));
    }
}
