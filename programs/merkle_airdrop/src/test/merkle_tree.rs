//! Test-only tree builder using the same pair ordering as `utils::verify`.

use crate::utils::combine;

pub struct SimpleMerkleTree {
    /// levels[0] are the leaves, the last level holds only the root
    levels: Vec<Vec<[u8; 32]>>,
}

impl SimpleMerkleTree {
    pub fn new(leaves: Vec<[u8; 32]>) -> Self {
        assert!(!leaves.is_empty(), "cannot build a tree without leaves");

        let mut levels = vec![leaves];
        while levels[levels.len() - 1].len() > 1 {
            let next = levels[levels.len() - 1]
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => Self::hash_intermediate(left, right),
                    // Odd node out is promoted unchanged
                    [single] => *single,
                    _ => unreachable!(),
                })
                .collect();
            levels.push(next);
        }

        SimpleMerkleTree { levels }
    }

    pub fn hash_intermediate(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
        if a < b {
            combine(a, b)
        } else {
            combine(b, a)
        }
    }

    pub fn root(&self) -> [u8; 32] {
        self.levels[self.levels.len() - 1][0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Sibling hashes from the leaf at `index` up to the root.
    pub fn proof(&self, index: usize) -> Vec<[u8; 32]> {
        assert!(index < self.leaf_count(), "index out of bounds");

        let mut proof = Vec::new();
        let mut current_index = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling_index = current_index ^ 1;
            if let Some(sibling) = level.get(sibling_index) {
                proof.push(*sibling);
            }
            current_index /= 2;
        }
        proof
    }
}
