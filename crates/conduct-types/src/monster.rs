//! Monster Snapshot
//!
//! The victim-side data a conduct needs. A snapshot is a plain value so it
//! can outlive the creature it was taken from.

use serde::{Deserialize, Serialize};

use crate::deity::DeityId;

/// Broad species family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genus {
    Human,
    Orc,
    Slime,
    Plant,
    Fungus,
    Ballistomycete,
    Animal,
    Demon,
    Undead,
    Angel,
    #[default]
    Other,
}

/// Spiritual nature of a creature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiness {
    Holy,
    #[default]
    Natural,
    Undead,
    Demonic,
    Nonliving,
    Plant,
}

/// Stance toward the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attitude {
    #[default]
    Hostile,
    Neutral,
    StrictNeutral,
    GoodNeutral,
    Friendly,
}

/// Coarse intelligence band, ordered from least to most.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Intelligence {
    Brainless,
    Animal,
    #[default]
    Human,
}

/// Boolean monster properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterFlags {
    /// Killing it grants no reward
    pub no_reward: bool,
    /// Was neutral before turning hostile
    pub was_neutral: bool,
    /// Evil beyond what its holiness implies
    pub evil: bool,
    /// Unholy beyond what its holiness implies
    pub unholy: bool,
    pub shapeshifter: bool,
    /// Conjured image with no real body
    pub illusion: bool,
    /// Animated object rather than a creature
    pub object: bool,
    /// Creature of shadow
    pub shadow: bool,
}

/// Value copy of a monster at the moment a conduct was armed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Monster {
    /// Slot in the live monster table
    pub mindex: usize,
    pub name: String,
    pub genus: Genus,
    pub holiness: Holiness,
    pub attitude: Attitude,
    pub intelligence: Intelligence,
    /// Movement speed; 10 is normal
    pub speed: i32,
    pub experience_level: i32,
    /// Fuzzed difficulty estimate, in hundredths
    pub difficulty: i32,
    /// God the monster serves, if any
    pub god: DeityId,
    pub flags: MonsterFlags,
}

impl Default for Monster {
    fn default() -> Self {
        Self {
            mindex: 0,
            name: String::new(),
            genus: Genus::default(),
            holiness: Holiness::default(),
            attitude: Attitude::default(),
            intelligence: Intelligence::default(),
            speed: 10,
            experience_level: 1,
            difficulty: 0,
            god: DeityId::NoGod,
            flags: MonsterFlags::default(),
        }
    }
}

impl Monster {
    pub fn new(mindex: usize, name: impl Into<String>) -> Self {
        Self {
            mindex,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_genus(mut self, genus: Genus) -> Self {
        self.genus = genus;
        self
    }

    pub fn with_holiness(mut self, holiness: Holiness) -> Self {
        self.holiness = holiness;
        self
    }

    pub fn with_attitude(mut self, attitude: Attitude) -> Self {
        self.attitude = attitude;
        self
    }

    pub fn with_intelligence(mut self, intelligence: Intelligence) -> Self {
        self.intelligence = intelligence;
        self
    }

    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_experience_level(mut self, level: i32) -> Self {
        self.experience_level = level;
        self
    }

    pub fn with_difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_god(mut self, god: DeityId) -> Self {
        self.god = god;
        self
    }

    pub fn with_flags(mut self, flags: MonsterFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn is_holy(&self) -> bool {
        self.holiness == Holiness::Holy
    }

    pub fn is_evil(&self) -> bool {
        self.holiness == Holiness::Undead || self.flags.evil
    }

    pub fn is_unholy(&self) -> bool {
        self.holiness == Holiness::Demonic || self.flags.unholy
    }

    pub fn is_slime(&self) -> bool {
        self.genus == Genus::Slime
    }

    pub fn is_plant(&self) -> bool {
        self.holiness == Holiness::Plant
    }

    pub fn is_shapeshifter(&self) -> bool {
        self.flags.shapeshifter
    }

    pub fn is_illusion(&self) -> bool {
        self.flags.illusion
    }

    pub fn is_object(&self) -> bool {
        self.flags.object
    }

    pub fn friendly(&self) -> bool {
        self.attitude == Attitude::Friendly
    }

    pub fn neutral(&self) -> bool {
        matches!(
            self.attitude,
            Attitude::Neutral | Attitude::StrictNeutral | Attitude::GoodNeutral
        )
    }

    /// Whether stabbing or poisoning it is beneath notice for a chivalrous god:
    /// dim creatures, evil ones, and the nonliving.
    pub fn unchivalric_attack_safe(&self) -> bool {
        self.intelligence < Intelligence::Human
            || self.is_evil()
            || self.holiness == Holiness::Nonliving
    }
}
