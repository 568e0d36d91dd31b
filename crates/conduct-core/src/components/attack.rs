//! Attack Conduct Tracking
//!
//! A beam can hit the same monster several times in one action, and the
//! monster can change between hits: a fleeing target stops being a stab, a
//! converted orc turns friendly. The first hit on each monster fixes how the
//! rest of that turn's hits are classified.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use conduct_types::{ConductKind, Monster};

use crate::error::ConductError;
use crate::trigger::ConductTrigger;

/// Severity of attacking an ally or a neutral.
pub const ATTACK_ALLY_LEVEL: i32 = 5;
/// Severity of an unchivalric attack.
pub const UNCHIVALRIC_LEVEL: i32 = 4;

/// Slot of each axis in the three-trigger attack array.
pub const FRIEND_OR_NEUTRAL_SLOT: usize = 0;
pub const UNCHIVALRIC_SLOT: usize = 1;
pub const HOLY_SLOT: usize = 2;

/// Why an attack counts as a stab, as decided by the combat code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StabType {
    #[default]
    NoStab,
    Distracted,
    Confused,
    Fleeing,
    Invisible,
    HeldInNet,
    Petrified,
    Paralysed,
    Sleeping,
    Ally,
}

impl StabType {
    pub fn is_stab(self) -> bool {
        self != StabType::NoStab
    }
}

/// First-hit classification of one monster slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstAttack {
    /// Hit at least once this turn
    pub attacked: bool,
    pub unchivalric: bool,
    pub friendly: bool,
}

/// Resource: per-slot first-hit state, cleared at every player turn.
#[derive(Resource, Debug, Clone)]
pub struct AttackConductTracker {
    first_attacks: Vec<FirstAttack>,
}

impl AttackConductTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            first_attacks: vec![FirstAttack::default(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.first_attacks.len()
    }

    /// Forgets every first hit; call before any attack of a new turn.
    pub fn turn_start(&mut self) {
        self.first_attacks.fill(FirstAttack::default());
    }

    pub fn first_attack(&self, mindex: usize) -> Option<FirstAttack> {
        self.first_attacks.get(mindex).copied()
    }

    /// Arms the attack triggers for one hit on `mon`.
    ///
    /// Slot 0 carries attacking an ally or a neutral, slot 1 an unchivalric
    /// attack and slot 2 attacking a holy creature. Ally and unchivalric
    /// classifications are only armed on the first hit of the turn, or on
    /// later hits when the first hit already had them.
    pub fn set_attack_conducts(
        &mut self,
        conducts: &mut [ConductTrigger<'_>; 3],
        mon: &Monster,
        stab: StabType,
        known: bool,
    ) -> Result<(), ConductError> {
        let capacity = self.first_attacks.len();
        let first = self
            .first_attacks
            .get_mut(mon.mindex)
            .ok_or(ConductError::MonsterIndexOutOfRange {
                index: mon.mindex,
                capacity,
            })?;

        if mon.friendly() {
            if !first.attacked || first.friendly {
                conducts[FRIEND_OR_NEUTRAL_SLOT].set(
                    ConductKind::AttackFriend,
                    ATTACK_ALLY_LEVEL,
                    known,
                    Some(mon),
                );
                first.friendly = true;
            }
        } else if mon.neutral() {
            conducts[FRIEND_OR_NEUTRAL_SLOT].set(
                ConductKind::AttackNeutral,
                ATTACK_ALLY_LEVEL,
                known,
                Some(mon),
            );
        }

        if stab.is_stab() && (!first.attacked || first.unchivalric) {
            conducts[UNCHIVALRIC_SLOT].set(
                ConductKind::UnchivalricAttack,
                UNCHIVALRIC_LEVEL,
                known,
                Some(mon),
            );
            first.unchivalric = true;
        }

        if mon.is_holy() && !mon.is_illusion() {
            conducts[HOLY_SLOT].set(
                ConductKind::AttackHoly,
                mon.experience_level,
                known,
                Some(mon),
            );
        }

        tracing::trace!(mindex = mon.mindex, ?first, "attack conducts set");
        first.attacked = true;
        Ok(())
    }
}
