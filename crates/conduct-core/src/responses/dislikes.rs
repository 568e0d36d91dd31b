//! Dislike Tables
//!
//! What each god punishes, and by how much per level of severity.

use conduct_types::{ConductKind, DeityId};

use super::filters::VictimFilter;

/// How a god reacts to a conduct it dislikes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DislikeResponse {
    /// Piety lost per level
    pub piety_factor: i32,
    /// Penance gained per level
    pub penance_factor: i32,
    /// Spoken when the act was unwitting; its presence means unwitting
    /// acts are forgiven
    pub forgiveness_message: Option<&'static str>,
    pub message: Option<&'static str>,
    pub valid_victim: Option<VictimFilter>,
}

impl DislikeResponse {
    pub const fn new(piety_factor: i32, penance_factor: i32) -> Self {
        Self {
            piety_factor,
            penance_factor,
            forgiveness_message: None,
            message: None,
            valid_victim: None,
        }
    }

    pub const fn forgiving(self, forgiveness_message: &'static str) -> Self {
        Self {
            forgiveness_message: Some(forgiveness_message),
            ..self
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
}

const FORGIVE_UNHOLY: &str = " forgives your inadvertent unholy act, just this once.";

const GOOD_BLOOD: DislikeResponse = DislikeResponse::new(2, 1)
    .forgiving(" forgives your inadvertent blood-drinking, just this once.");

const RUDE_CANNIBALISM: DislikeResponse =
    DislikeResponse::new(5, 3).with_message(" expects more respect for your departed relatives.");

const GOOD_DESECRATE_HOLY: DislikeResponse =
    DislikeResponse::new(1, 1).with_message(" expects more respect for holy creatures!");

const GOOD_UNHOLY: DislikeResponse = DislikeResponse::new(1, 1).forgiving(FORGIVE_UNHOLY);

const GOOD_ATTACK_HOLY: DislikeResponse =
    DislikeResponse::new(1, 1).filtered(VictimFilter::AttackingHolyMatters);

const GOOD_KILL_HOLY: DislikeResponse =
    DislikeResponse::new(3, 3).filtered(VictimFilter::AttackingHolyMatters);

const TSO_UNCHIVALRIC: DislikeResponse = DislikeResponse::new(1, 2)
    .forgiving(" forgives your inadvertent dishonourable attack, just this once.")
    .filtered(VictimFilter::NotUnchivalricSafe);

const GOOD_ATTACK_NEUTRAL: DislikeResponse = DislikeResponse::new(1, 1)
    .forgiving(" forgives your inadvertent attack on a neutral, just this once.");

const ATTACK_FRIEND: DislikeResponse = DislikeResponse::new(1, 3)
    .forgiving(" forgives your inadvertent attack on an ally, just this once.")
    .filtered(VictimFilter::HatesAttackingFriend);

const ELY_FRIEND_DEATH: DislikeResponse =
    DislikeResponse::new(1, 0).filtered(VictimFilter::ElyvilonMartyr);

const FEDHAS_FRIEND_DEATH: DislikeResponse =
    DislikeResponse::new(1, 0).filtered(VictimFilter::FedhasProtected);

type PeeveTable = &'static [(ConductKind, DislikeResponse)];

const NONE: PeeveTable = &[];

/// Dislikes per deity, indexed by [`DeityId::index`].
pub static DIVINE_PEEVES: [PeeveTable; DeityId::COUNT] = [
    // NoGod
    NONE,
    // Zin
    &[
        (ConductKind::DrinkBlood, GOOD_BLOOD),
        (ConductKind::Cannibalism, RUDE_CANNIBALISM),
        (ConductKind::AttackHoly, GOOD_ATTACK_HOLY),
        (ConductKind::KillHoly, GOOD_KILL_HOLY),
        (ConductKind::HolyKilledByServant, GOOD_KILL_HOLY),
        (ConductKind::DesecrateHolyRemains, GOOD_DESECRATE_HOLY),
        (ConductKind::Necromancy, GOOD_UNHOLY),
        (ConductKind::Unholy, GOOD_UNHOLY),
        (ConductKind::AttackFriend, ATTACK_FRIEND),
    ],
    // ShiningOne
    &[
        (ConductKind::DrinkBlood, GOOD_BLOOD),
        (ConductKind::Cannibalism, RUDE_CANNIBALISM),
        (
            ConductKind::AttackHoly,
            DislikeResponse::new(1, 2).filtered(VictimFilter::AttackingHolyMatters),
        ),
        (ConductKind::KillHoly, GOOD_KILL_HOLY),
        (ConductKind::HolyKilledByServant, GOOD_KILL_HOLY),
        (
            ConductKind::DesecrateHolyRemains,
            DislikeResponse::new(1, 2).with_message(" expects more respect for holy creatures!"),
        ),
        (
            ConductKind::Necromancy,
            DislikeResponse::new(1, 2).forgiving(FORGIVE_UNHOLY),
        ),
        (ConductKind::Unholy, DislikeResponse::new(1, 2).forgiving(FORGIVE_UNHOLY)),
        (ConductKind::UnchivalricAttack, TSO_UNCHIVALRIC),
        (ConductKind::Poison, TSO_UNCHIVALRIC),
        (ConductKind::AttackNeutral, GOOD_ATTACK_NEUTRAL),
        (ConductKind::AttackFriend, ATTACK_FRIEND),
    ],
    // Kikubaaqudgha
    NONE,
    // Yredelemnul
    &[(
        ConductKind::Holy,
        DislikeResponse::new(1, 2)
            .forgiving(" forgives your inadvertent holy act, just this once."),
    )],
    // Xom
    NONE,
    // Vehumet
    NONE,
    // Okawaru
    &[(ConductKind::AttackFriend, ATTACK_FRIEND)],
    // Makhleb
    NONE,
    // SifMuna
    NONE,
    // Trog
    &[
        (ConductKind::SpellMemorise, DislikeResponse::new(10, 10)),
        (ConductKind::SpellCasting, DislikeResponse::new(1, 5)),
        (
            ConductKind::SpellPractise,
            DislikeResponse::new(1, 0).with_message(" doesn't appreciate your training magic!"),
        ),
    ],
    // NemelexXobeh
    NONE,
    // Elyvilon
    &[
        (ConductKind::DrinkBlood, GOOD_BLOOD),
        (ConductKind::Cannibalism, RUDE_CANNIBALISM),
        (ConductKind::AttackHoly, GOOD_ATTACK_HOLY),
        (ConductKind::KillHoly, GOOD_KILL_HOLY),
        (ConductKind::HolyKilledByServant, GOOD_KILL_HOLY),
        (ConductKind::DesecrateHolyRemains, GOOD_DESECRATE_HOLY),
        (ConductKind::Necromancy, GOOD_UNHOLY),
        (ConductKind::Unholy, GOOD_UNHOLY),
        (ConductKind::AttackNeutral, GOOD_ATTACK_NEUTRAL),
        (ConductKind::AttackFriend, ATTACK_FRIEND),
        (ConductKind::FriendDied, ELY_FRIEND_DEATH),
        (ConductKind::SouledFriendDied, ELY_FRIEND_DEATH),
        (
            ConductKind::KillLiving,
            DislikeResponse::new(1, 2)
                .with_message(
                    " does not appreciate your shedding blood when asking for salvation!",
                )
                .filtered(VictimFilter::DuringLifesaving),
        ),
    ],
    // Lugonu
    NONE,
    // Beogh
    &[
        (ConductKind::Cannibalism, RUDE_CANNIBALISM),
        (ConductKind::AttackFriend, ATTACK_FRIEND),
    ],
    // Jiyva
    &[
        (
            ConductKind::KillSlime,
            DislikeResponse::new(1, 2).filtered(VictimFilter::NotShapeshifter),
        ),
        (
            ConductKind::AttackNeutral,
            DislikeResponse::new(1, 1).filtered(VictimFilter::SlimeNotShapeshifter),
        ),
        (ConductKind::AttackFriend, ATTACK_FRIEND),
    ],
    // Fedhas
    &[
        (
            ConductKind::CorpseViolation,
            DislikeResponse::new(1, 1)
                .forgiving(" forgives your inadvertent necromancy, just this once."),
        ),
        (ConductKind::KillPlant, DislikeResponse::new(1, 0)),
        (ConductKind::PlantKilledByServant, DislikeResponse::new(1, 0)),
        (ConductKind::AttackFriend, ATTACK_FRIEND),
        (ConductKind::FriendDied, FEDHAS_FRIEND_DEATH),
        (ConductKind::SouledFriendDied, FEDHAS_FRIEND_DEATH),
    ],
    // Cheibriados
    NONE,
    // Ashenzari
    NONE,
    // Dithmenos
    NONE,
    // Gozag
    NONE,
    // Qazlal
    NONE,
    // Ru
    NONE,
];
