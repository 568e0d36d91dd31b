//! Player Components
//!
//! The slice of player state conduct resolution reads and writes: religion,
//! standing, progression metrics and named properties.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use conduct_types::{DeityId, PietyChange};

use crate::error::ConductError;
use crate::random::{div_rand_round, x_chance_in_y};

/// Piety ceiling for every god.
pub const MAX_PIETY: i32 = 200;

/// Piety thresholds for each rank, highest first.
const PIETY_BREAKPOINTS: [i32; 7] = [161, 120, 100, 75, 50, 30, 6];

/// Named property recording Ru's progress toward the next sacrifice.
pub const RU_SACRIFICE_PROGRESS_KEY: &str = "ru_progress_to_next_sacrifice";
/// Named property listing the sacrifices Ru currently offers.
pub const RU_AVAILABLE_SACRIFICES_KEY: &str = "available_sacrifices";

/// Dungeon branch the player is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    #[default]
    Dungeon,
    Lair,
    Abyss,
    Pandemonium,
}

/// Value of a named player property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Int(i64),
    List(Vec<String>),
}

/// Player standing and the progression metrics conducts depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub religion: DeityId,
    pub piety: i32,
    /// Outstanding penance, indexed by deity
    pub penance: [i32; DeityId::COUNT],
    pub experience_level: i32,
    /// Number of cursed items worn, for Ashenzari
    pub bondage_level: i32,
    /// Movement speed; 10 is normal
    pub movement_speed: i32,
    pub branch: Branch,
    /// Elyvilon's lifesaving prayer is in effect
    pub lifesaving: bool,
    pub num_turns: u64,
    pub props: BTreeMap<String, PropValue>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            religion: DeityId::NoGod,
            piety: 0,
            penance: [0; DeityId::COUNT],
            experience_level: 1,
            bondage_level: 0,
            movement_speed: 10,
            branch: Branch::Dungeon,
            lifesaving: false,
            num_turns: 0,
            props: BTreeMap::new(),
        }
    }
}

impl PlayerState {
    pub fn new(religion: DeityId) -> Self {
        Self {
            religion,
            ..Self::default()
        }
    }

    pub fn with_piety(mut self, piety: i32) -> Self {
        self.piety = piety;
        self
    }

    pub fn with_experience_level(mut self, level: i32) -> Self {
        self.experience_level = level;
        self
    }

    pub fn worships(&self, deity: DeityId) -> bool {
        self.religion == deity
    }

    /// Penance owed to the current god.
    pub fn current_penance(&self) -> i32 {
        self.penance[self.religion.index()]
    }

    pub fn piety_rank(&self) -> i32 {
        piety_rank(self.piety)
    }

    /// Reads an integer property.
    pub fn prop_int(&self, key: &'static str) -> Result<i64, ConductError> {
        match self.props.get(key) {
            Some(PropValue::Int(value)) => Ok(*value),
            Some(PropValue::List(_)) => Err(ConductError::PropertyType(key)),
            None => Err(ConductError::MissingProperty(key)),
        }
    }

    /// Reads a list property.
    pub fn prop_list(&self, key: &'static str) -> Result<&[String], ConductError> {
        match self.props.get(key) {
            Some(PropValue::List(values)) => Ok(values),
            Some(PropValue::Int(_)) => Err(ConductError::PropertyType(key)),
            None => Err(ConductError::MissingProperty(key)),
        }
    }

    pub fn set_prop(&mut self, key: impl Into<String>, value: PropValue) {
        self.props.insert(key.into(), value);
    }

    /// Applies a resolved conduct's change to piety and penance.
    pub fn apply_piety_change<R: Rng + ?Sized>(&mut self, change: &PietyChange, rng: &mut R) {
        if change.piety_change > 0 {
            self.gain_piety(change.piety_change, change.piety_denom, rng);
        } else {
            let loss = div_rand_round(
                rng,
                change.piety_change.saturating_neg(),
                change.piety_denom,
            );
            self.dock_piety(loss, change.penance);
        }
    }

    /// Adds `original / denominator` piety, rounding the remainder randomly.
    pub fn gain_piety<R: Rng + ?Sized>(&mut self, original: i32, denominator: i32, rng: &mut R) {
        if original <= 0 {
            return;
        }
        let denominator = denominator.max(1);

        let mut pgn = original;
        if x_chance_in_y(rng, pgn % denominator, denominator) {
            pgn = pgn.saturating_add(denominator);
        }
        pgn /= denominator;

        self.piety = self.piety.saturating_add(pgn).min(MAX_PIETY);
    }

    /// Removes piety and adds penance to the current god.
    pub fn dock_piety(&mut self, piety_loss: i32, penance: i32) {
        if piety_loss > 0 {
            self.piety = self.piety.saturating_sub(piety_loss).max(0);
        }
        if penance > 0 {
            let total = &mut self.penance[self.religion.index()];
            *total = total.saturating_add(penance);
        }
    }
}

/// Rank of a piety value: 0 below 6, up to 7 at 161 and above.
pub fn piety_rank(piety: i32) -> i32 {
    let count = PIETY_BREAKPOINTS.len() as i32;
    PIETY_BREAKPOINTS
        .iter()
        .position(|&threshold| piety >= threshold)
        .map(|i| count - i as i32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use conduct_types::ConductKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_piety_rank() {
        assert_eq!(piety_rank(0), 0);
        assert_eq!(piety_rank(5), 0);
        assert_eq!(piety_rank(6), 1);
        assert_eq!(piety_rank(30), 2);
        assert_eq!(piety_rank(99), 4);
        assert_eq!(piety_rank(160), 6);
        assert_eq!(piety_rank(200), 7);
    }

    #[test]
    fn test_dock_piety_floors_at_zero() {
        let mut player = PlayerState::new(DeityId::Zin).with_piety(3);
        player.dock_piety(5, 15);
        assert_eq!(player.piety, 0);
        assert_eq!(player.current_penance(), 15);
        assert_eq!(player.penance[DeityId::Trog.index()], 0);
    }

    #[test]
    fn test_gain_piety_exact_division() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut player = PlayerState::new(DeityId::Trog).with_piety(10);
        player.gain_piety(32, 16, &mut rng);
        assert_eq!(player.piety, 12);
    }

    #[test]
    fn test_gain_piety_capped() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut player = PlayerState::new(DeityId::Trog).with_piety(199);
        player.gain_piety(50, 1, &mut rng);
        assert_eq!(player.piety, MAX_PIETY);
    }

    #[test]
    fn test_apply_loss() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut player = PlayerState::new(DeityId::Zin).with_piety(50);
        let change = PietyChange::loss(ConductKind::Cannibalism, 5, 3);
        player.apply_piety_change(&change, &mut rng);
        assert_eq!(player.piety, 45);
        assert_eq!(player.current_penance(), 3);
    }

    #[test]
    fn test_props() {
        let mut player = PlayerState::new(DeityId::Ru);
        assert!(matches!(
            player.prop_int(RU_SACRIFICE_PROGRESS_KEY),
            Err(ConductError::MissingProperty(_))
        ));

        player.set_prop(RU_SACRIFICE_PROGRESS_KEY, PropValue::Int(4));
        player.set_prop(RU_AVAILABLE_SACRIFICES_KEY, PropValue::List(Vec::new()));
        assert_eq!(player.prop_int(RU_SACRIFICE_PROGRESS_KEY).unwrap(), 4);
        assert!(player.prop_list(RU_AVAILABLE_SACRIFICES_KEY).unwrap().is_empty());
        assert!(matches!(
            player.prop_list(RU_SACRIFICE_PROGRESS_KEY),
            Err(ConductError::PropertyType(_))
        ));
    }
}
