//! Sample data fixtures for testing.
//!
//! This module provides ready-made monsters for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // conduct-types = { path = "../conduct-types", features = ["test-fixtures"] }
//!
//! use conduct_types::fixtures;
//!
//! let orc = fixtures::sample_monster("orc_warrior");
//! ```

use crate::Monster;

/// Returns the sample monsters from the fixtures file.
///
/// Contains 8 monsters, one per slot 0..8:
/// - `orc_warrior`: hostile orc, human intelligence
/// - `orc_priest`: friendly orc serving Beogh
/// - `angel`: holy, was neutral before the fight
/// - `zombie`: undead, brainless
/// - `jelly`: neutral slime
/// - `oklob_plant`: friendly plant
/// - `centaur`: hostile and fast (speed 15)
/// - `shadow_imp`: demonic creature of shadow
pub fn sample_monsters() -> Vec<Monster> {
    let json = include_str!("../tests/fixtures/sample_monsters.json");
    serde_json::from_str(json).expect("Failed to parse sample_monsters.json")
}

/// Returns the named sample monster.
///
/// Panics if no fixture has that name.
pub fn sample_monster(name: &str) -> Monster {
    sample_monsters()
        .into_iter()
        .find(|m| m.name == name)
        .unwrap_or_else(|| panic!("No sample monster named {}", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attitude, Genus, Holiness};

    #[test]
    fn test_sample_monsters_load() {
        let monsters = sample_monsters();
        assert_eq!(monsters.len(), 8);
        for (i, mon) in monsters.iter().enumerate() {
            assert_eq!(mon.mindex, i, "{} has the wrong slot", mon.name);
        }
    }

    #[test]
    fn test_sample_monster_lookup() {
        let priest = sample_monster("orc_priest");
        assert_eq!(priest.genus, Genus::Orc);
        assert_eq!(priest.attitude, Attitude::Friendly);

        let angel = sample_monster("angel");
        assert_eq!(angel.holiness, Holiness::Holy);
        assert!(angel.flags.was_neutral);
    }
}
