// Tile code -> walkable classification

use std::collections::BTreeSet;

/// Codes treated as walkable when no other table is configured:
/// background (0), plus the floor variants of the stock tileset.
pub const DEFAULT_WALKABLE_CODES: [u32; 5] = [0, 2, 3, 6, 11];

/// Which tile codes a body may stand on
///
/// The table is content configuration, separate from the map file; every
/// code not listed is solid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkabilityTable {
    walkable: BTreeSet<u32>,
}

impl WalkabilityTable {
    /// Table where exactly `codes` are walkable
    pub fn from_codes<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self {
            walkable: codes.into_iter().collect(),
        }
    }

    pub fn is_walkable(&self, code: u32) -> bool {
        self.walkable.contains(&code)
    }

    /// Walkable codes in ascending order
    pub fn walkable_codes(&self) -> impl Iterator<Item = u32> + '_ {
        self.walkable.iter().copied()
    }
}

impl Default for WalkabilityTable {
    fn default() -> Self {
        Self::from_codes(DEFAULT_WALKABLE_CODES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = WalkabilityTable::default();
        for code in [0, 2, 3, 6, 11] {
            assert!(table.is_walkable(code), "code {} should be walkable", code);
        }
        for code in [1, 4, 5, 7, 8, 9, 10, 12, 13, 14, 15] {
            assert!(!table.is_walkable(code), "code {} should be solid", code);
        }
    }

    #[test]
    fn test_single_code_table() {
        let table = WalkabilityTable::from_codes([3]);
        assert!(table.is_walkable(3));
        assert!(!table.is_walkable(0));
        assert_eq!(table.walkable_codes().collect::<Vec<_>>(), vec![3]);
    }
}
