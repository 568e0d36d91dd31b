//! Deity Types
//!
//! The playable gods, used as the index into every per-deity table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A god the player may worship.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DeityId {
    #[default]
    NoGod,
    Zin,
    ShiningOne,
    Kikubaaqudgha,
    Yredelemnul,
    Xom,
    Vehumet,
    Okawaru,
    Makhleb,
    SifMuna,
    Trog,
    NemelexXobeh,
    Elyvilon,
    Lugonu,
    Beogh,
    Jiyva,
    Fedhas,
    Cheibriados,
    Ashenzari,
    Dithmenos,
    Gozag,
    Qazlal,
    Ru,
}

impl DeityId {
    /// Number of deity values, including `NoGod`.
    pub const COUNT: usize = 23;

    /// Returns all deities in discriminant order.
    pub fn all() -> &'static [DeityId] {
        use DeityId::*;
        &[
            NoGod,
            Zin,
            ShiningOne,
            Kikubaaqudgha,
            Yredelemnul,
            Xom,
            Vehumet,
            Okawaru,
            Makhleb,
            SifMuna,
            Trog,
            NemelexXobeh,
            Elyvilon,
            Lugonu,
            Beogh,
            Jiyva,
            Fedhas,
            Cheibriados,
            Ashenzari,
            Dithmenos,
            Gozag,
            Qazlal,
            Ru,
        ]
    }

    /// Index into per-deity arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name as it prefixes divine speech.
    pub fn name(self) -> &'static str {
        match self {
            DeityId::NoGod => "No God",
            DeityId::Zin => "Zin",
            DeityId::ShiningOne => "The Shining One",
            DeityId::Kikubaaqudgha => "Kikubaaqudgha",
            DeityId::Yredelemnul => "Yredelemnul",
            DeityId::Xom => "Xom",
            DeityId::Vehumet => "Vehumet",
            DeityId::Okawaru => "Okawaru",
            DeityId::Makhleb => "Makhleb",
            DeityId::SifMuna => "Sif Muna",
            DeityId::Trog => "Trog",
            DeityId::NemelexXobeh => "Nemelex Xobeh",
            DeityId::Elyvilon => "Elyvilon",
            DeityId::Lugonu => "Lugonu",
            DeityId::Beogh => "Beogh",
            DeityId::Jiyva => "Jiyva",
            DeityId::Fedhas => "Fedhas",
            DeityId::Cheibriados => "Cheibriados",
            DeityId::Ashenzari => "Ashenzari",
            DeityId::Dithmenos => "Dithmenos",
            DeityId::Gozag => "Gozag",
            DeityId::Qazlal => "Qazlal",
            DeityId::Ru => "Ru",
        }
    }

    /// Gods that never grant or withdraw favour for any conduct.
    pub fn ignores_conduct(self) -> bool {
        matches!(self, DeityId::NoGod | DeityId::Xom)
    }
}

impl fmt::Display for DeityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
