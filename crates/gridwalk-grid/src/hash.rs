//! Layout fingerprinting for determinism checks.
//!
//! Uses FNV-1a: fast, deterministic, not cryptographically secure.
//! Two grids with the same dimensions and the same blocked mask hash
//! equal regardless of any search bookkeeping on their cells.

use crate::grid::Grid;
use gridwalk_core::CellState;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

impl Grid {
    /// Hash of the dimensions and blocked mask.
    pub fn layout_hash(&self) -> u64 {
        let mut hash = FNV_OFFSET;
        hash = fnv1a_u32(hash, self.width());
        hash = fnv1a_u32(hash, self.height());
        for (_, cell) in self.iter() {
            hash = fnv1a_byte(hash, u8::from(cell.state == CellState::Blocked));
        }
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::Coord;

    #[test]
    fn equal_layouts_hash_equal() {
        let a = Grid::with_blocked(4, 4, &[Coord::new(1, 1)]).unwrap();
        let b = Grid::with_blocked(4, 4, &[Coord::new(1, 1)]).unwrap();
        assert_eq!(a.layout_hash(), b.layout_hash());
    }

    #[test]
    fn blocked_mask_changes_hash() {
        let a = Grid::with_blocked(4, 4, &[Coord::new(1, 1)]).unwrap();
        let b = Grid::with_blocked(4, 4, &[Coord::new(1, 2)]).unwrap();
        assert_ne!(a.layout_hash(), b.layout_hash());
    }

    #[test]
    fn transposed_dimensions_differ() {
        let a = Grid::open(2, 8).unwrap();
        let b = Grid::open(8, 2).unwrap();
        assert_ne!(a.layout_hash(), b.layout_hash());
    }

    #[test]
    fn search_state_is_ignored() {
        let a = Grid::open(3, 3).unwrap();
        let mut b = a.clone();
        b[Coord::new(0, 0)].state = CellState::Visited;
        b[Coord::new(0, 1)].state = CellState::OnPath;
        assert_eq!(a.layout_hash(), b.layout_hash());
    }
}
