//! Like Tables
//!
//! What each god rewards. Gains scale down as severity and experience rise:
//! the divisor is `piety_denom_bonus + level`, less `experience_level /
//! xl_denom` when `xl_denom` is non-zero.

use conduct_types::{ConductKind, DeityId};

use super::filters::VictimFilter;

/// How a god rewards a conduct it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeResponse {
    /// Added to the computed divisor to give the raw gain
    pub piety_bonus: i32,
    /// Added to the level to give the divisor
    pub piety_denom_bonus: i32,
    /// How strongly experience shrinks the divisor; zero disables it
    pub xl_denom: i32,
    pub message: Option<&'static str>,
    pub valid_victim: Option<VictimFilter>,
}

impl LikeResponse {
    pub const fn new(piety_bonus: i32, piety_denom_bonus: i32, xl_denom: i32) -> Self {
        Self {
            piety_bonus,
            piety_denom_bonus,
            xl_denom,
            message: None,
            valid_victim: None,
        }
    }

    pub const fn with_message(self, message: &'static str) -> Self {
        Self {
            message: Some(message),
            ..self
        }
    }

    pub const fn filtered(self, filter: VictimFilter) -> Self {
        Self {
            valid_victim: Some(filter),
            ..self
        }
    }

    /// Divisor for a conduct of `level` by a player of `experience_level`.
    /// May be below one; callers floor it.
    pub fn denominator(&self, level: i32, experience_level: i32) -> i32 {
        let mut denom = self.piety_denom_bonus.saturating_add(level);
        if self.xl_denom != 0 {
            denom = denom.saturating_sub(experience_level / self.xl_denom);
        }
        denom
    }
}

const ACCEPTS_KILL: &str = " accepts your kill.";
const ACCEPTS_SLAVE_KILL: &str = " accepts your slave's kill.";
const ACCEPTS_COLLATERAL_KILL: &str = " accepts your collateral kill.";

const KILL_LIVING: LikeResponse = LikeResponse::new(-6, 18, 2)
    .with_message(ACCEPTS_KILL)
    .filtered(VictimFilter::GodLikesKilling);

const KILL_UNDEAD: LikeResponse = LikeResponse::new(-5, 18, 2)
    .with_message(ACCEPTS_KILL)
    .filtered(VictimFilter::GodLikesKilling);

const KILL_DEMON: LikeResponse = LikeResponse::new(-4, 18, 2)
    .with_message(ACCEPTS_KILL)
    .filtered(VictimFilter::GodLikesKilling);

const GOOD_KILL: LikeResponse = LikeResponse::new(-4, 18, 0)
    .with_message(ACCEPTS_KILL)
    .filtered(VictimFilter::GodLikesKilling);

// Yredelemnul also uses this for artificial kills.
const KILL_HOLY: LikeResponse = LikeResponse::new(-3, 18, 0)
    .with_message(ACCEPTS_KILL)
    .filtered(VictimFilter::GodLikesKilling);

const UNDEAD_KILL_HOLY: LikeResponse = LikeResponse::new(-3, 18, 0)
    .with_message(ACCEPTS_SLAVE_KILL)
    .filtered(VictimFilter::GodLikesKilling);

const SERVANT_KILL_HOLY: LikeResponse = LikeResponse::new(-3, 18, 0)
    .with_message(ACCEPTS_COLLATERAL_KILL)
    .filtered(VictimFilter::GodLikesKilling);

const UNDEAD_KILL: LikeResponse = LikeResponse::new(-6, 10, 3).with_message(ACCEPTS_SLAVE_KILL);

const SERVANT_KILL: LikeResponse =
    LikeResponse::new(-6, 10, 3).with_message(ACCEPTS_COLLATERAL_KILL);

const GOOD_COLLATERAL: LikeResponse =
    LikeResponse::new(-6, 10, 0).with_message(ACCEPTS_COLLATERAL_KILL);

type LikeTable = &'static [(ConductKind, LikeResponse)];

const NONE: LikeTable = &[];

/// Likes shared by the gods who reward every kind of kill, directly or
/// through servants and undead slaves.
macro_rules! all_kills {
    ($($extra:expr),* $(,)?) => {
        &[
            (ConductKind::KillLiving, KILL_LIVING),
            (ConductKind::KillUndead, KILL_UNDEAD),
            (ConductKind::KillDemon, KILL_DEMON),
            (ConductKind::KillHoly, KILL_HOLY),
            (ConductKind::HolyKilledByUndeadSlave, UNDEAD_KILL_HOLY),
            (ConductKind::HolyKilledByServant, SERVANT_KILL_HOLY),
            (ConductKind::LivingKilledByUndeadSlave, UNDEAD_KILL),
            (ConductKind::LivingKilledByServant, SERVANT_KILL),
            (ConductKind::UndeadKilledByUndeadSlave, UNDEAD_KILL),
            (ConductKind::UndeadKilledByServant, SERVANT_KILL),
            (ConductKind::DemonKilledByUndeadSlave, UNDEAD_KILL),
            (ConductKind::DemonKilledByServant, SERVANT_KILL),
            $($extra,)*
        ]
    };
}

/// Likes per deity, indexed by [`DeityId::index`].
pub static DIVINE_LIKES: [LikeTable; DeityId::COUNT] = [
    // NoGod
    NONE,
    // Zin
    &[
        (ConductKind::KillUnclean, GOOD_KILL),
        (ConductKind::KillChaotic, GOOD_KILL),
        (ConductKind::UncleanKilledByServant, GOOD_COLLATERAL),
        (ConductKind::ChaoticKilledByServant, GOOD_COLLATERAL),
    ],
    // ShiningOne
    &[
        (
            ConductKind::KillUndead,
            LikeResponse::new(-5, 18, 0)
                .with_message(ACCEPTS_KILL)
                .filtered(VictimFilter::GodLikesKilling),
        ),
        (ConductKind::KillDemon, GOOD_KILL),
        (ConductKind::KillNaturalUnholy, GOOD_KILL),
        (ConductKind::KillNaturalEvil, GOOD_KILL),
        (ConductKind::UndeadKilledByServant, GOOD_COLLATERAL),
        (ConductKind::DemonKilledByServant, GOOD_COLLATERAL),
        (ConductKind::NaturalUnholyKilledByServant, GOOD_COLLATERAL),
        (ConductKind::NaturalEvilKilledByServant, GOOD_COLLATERAL),
    ],
    // Kikubaaqudgha
    &[
        (ConductKind::KillLiving, KILL_LIVING),
        (ConductKind::KillDemon, KILL_DEMON),
        (ConductKind::KillHoly, KILL_HOLY),
        (ConductKind::HolyKilledByUndeadSlave, UNDEAD_KILL_HOLY),
        (ConductKind::LivingKilledByUndeadSlave, UNDEAD_KILL),
        (ConductKind::DemonKilledByUndeadSlave, UNDEAD_KILL),
    ],
    // Yredelemnul
    &[
        (ConductKind::KillLiving, KILL_LIVING),
        (ConductKind::KillHoly, KILL_HOLY),
        (ConductKind::KillArtificial, KILL_HOLY),
        (ConductKind::HolyKilledByUndeadSlave, UNDEAD_KILL_HOLY),
        (ConductKind::ArtificialKilledByUndeadSlave, UNDEAD_KILL_HOLY),
        (ConductKind::LivingKilledByUndeadSlave, UNDEAD_KILL),
    ],
    // Xom
    NONE,
    // Vehumet
    &[
        (ConductKind::KillLiving, KILL_LIVING),
        (ConductKind::KillUndead, KILL_UNDEAD),
        (ConductKind::KillDemon, KILL_DEMON),
        (ConductKind::KillHoly, KILL_HOLY),
    ],
    // Okawaru
    NONE,
    // Makhleb
    all_kills!(),
    // SifMuna
    NONE,
    // Trog
    &[
        (ConductKind::KillLiving, KILL_LIVING),
        (ConductKind::KillDemon, KILL_DEMON),
        (ConductKind::KillHoly, KILL_HOLY),
        (ConductKind::HolyKilledByServant, SERVANT_KILL_HOLY),
        (ConductKind::LivingKilledByServant, SERVANT_KILL),
        (ConductKind::DemonKilledByServant, SERVANT_KILL),
        (
            ConductKind::KillWizard,
            LikeResponse::new(-6, 10, 0)
                .with_message(" appreciates your killing of a magic user.")
                .filtered(VictimFilter::GodLikesKilling),
        ),
    ],
    // NemelexXobeh
    NONE,
    // Elyvilon
    NONE,
    // Lugonu
    all_kills!((
        ConductKind::Banish,
        LikeResponse::new(-6, 18, 2).with_message(" claims a new guest.")
    )),
    // Beogh
    all_kills!((
        ConductKind::KillPriest,
        LikeResponse::new(-6, 10, 0)
            .with_message(" appreciates your killing of a heretic priest.")
            .filtered(VictimFilter::GodLikesKilling)
    )),
    // Jiyva
    NONE,
    // Fedhas
    NONE,
    // Cheibriados
    &[(
        ConductKind::KillFast,
        LikeResponse::new(-6, 18, 2).filtered(VictimFilter::GodLikesKilling),
    )],
    // Ashenzari
    NONE,
    // Dithmenos
    &[
        (ConductKind::KillLiving, KILL_LIVING),
        (ConductKind::KillUndead, KILL_UNDEAD),
        (ConductKind::KillDemon, KILL_DEMON),
        (ConductKind::KillHoly, KILL_HOLY),
        (
            ConductKind::KillFiery,
            LikeResponse::new(-6, 10, 0)
                .with_message(" appreciates your extinguishing a source of fire.")
                .filtered(VictimFilter::GodLikesKilling),
        ),
    ],
    // Gozag
    NONE,
    // Qazlal
    &[
        (ConductKind::KillLiving, KILL_LIVING),
        (ConductKind::KillUndead, KILL_UNDEAD),
        (ConductKind::KillDemon, KILL_DEMON),
        (ConductKind::KillHoly, KILL_HOLY),
        (ConductKind::HolyKilledByServant, SERVANT_KILL_HOLY),
        (ConductKind::LivingKilledByServant, SERVANT_KILL),
        (ConductKind::UndeadKilledByServant, SERVANT_KILL),
        (ConductKind::DemonKilledByServant, SERVANT_KILL),
    ],
    // Ru
    NONE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denominator_with_experience() {
        let response = LikeResponse::new(-6, 18, 2);
        assert_eq!(response.denominator(3, 10), 16);
    }

    #[test]
    fn test_denominator_ignores_experience_without_xl_denom() {
        let response = LikeResponse::new(-4, 18, 0);
        assert_eq!(response.denominator(3, 27), 21);
    }
}
