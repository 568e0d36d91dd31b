//! Divine Effects
//!
//! Side effects that fall outside the worshipped god's favour, queued for
//! the game to carry out.

use serde::{Deserialize, Serialize};

use conduct_types::ConductKind;

/// An effect another system must perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivineEffect {
    /// Beogh smites whoever destroyed an orcish idol
    BeoghIdolRevenge,
}

impl DivineEffect {
    /// Effect raised by `conduct` regardless of the player's religion.
    pub fn for_conduct(conduct: ConductKind) -> Option<Self> {
        match conduct {
            ConductKind::DestroyOrcishIdol => Some(DivineEffect::BeoghIdolRevenge),
            _ => None,
        }
    }
}

/// Queue of pending divine effects
#[derive(Debug, Clone, Default)]
pub struct EffectQueue {
    pub effects: Vec<DivineEffect>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: DivineEffect) {
        self.effects.push(effect);
    }

    pub fn drain(&mut self) -> Vec<DivineEffect> {
        std::mem::take(&mut self.effects)
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
