//! Piety Records
//!
//! The outputs of conduct resolution: a favour/penance change and the
//! divine speech that accompanied it.

use serde::{Deserialize, Serialize};

use crate::conduct::ConductKind;
use crate::deity::DeityId;

/// Change in standing produced by one resolved conduct.
///
/// A positive `piety_change` is a gain worth `piety_change / piety_denom`
/// piety; anything else is a loss of `-piety_change / piety_denom` plus
/// `penance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PietyChange {
    pub conduct: ConductKind,
    pub piety_change: i32,
    pub piety_denom: i32,
    pub penance: i32,
}

impl PietyChange {
    /// No change for this conduct.
    pub fn none(conduct: ConductKind) -> Self {
        Self {
            conduct,
            piety_change: 0,
            piety_denom: 1,
            penance: 0,
        }
    }

    /// Loss of piety plus penance, undivided.
    pub fn loss(conduct: ConductKind, piety_loss: i32, penance: i32) -> Self {
        Self {
            conduct,
            piety_change: piety_loss.saturating_neg(),
            piety_denom: 1,
            penance,
        }
    }

    /// Gain of `piety_change / piety_denom`.
    pub fn gain(conduct: ConductKind, piety_change: i32, piety_denom: i32) -> Self {
        Self {
            conduct,
            piety_change,
            piety_denom,
            penance: 0,
        }
    }

    pub fn is_gain(&self) -> bool {
        self.piety_change > 0
    }

    pub fn is_none(&self) -> bool {
        self.piety_change == 0 && self.penance == 0
    }
}

/// A line of divine speech, already prefixed with the speaker's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GodMessage {
    pub deity: DeityId,
    pub text: String,
}

impl GodMessage {
    /// Builds a message from a phrase that continues the god's name,
    /// e.g. `" accepts your kill."`.
    pub fn simple(deity: DeityId, phrase: &str) -> Self {
        Self {
            deity,
            text: format!("{}{}", deity.name(), phrase),
        }
    }
}
