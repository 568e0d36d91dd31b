//! Conduct Types
//!
//! Every action category a god may have an opinion about.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorised action with religious significance.
///
/// Discriminants are stable and double as indices into per-conduct arrays;
/// `Nothing` is the "no conduct" sentinel and [`ConductKind::COUNT`] the
/// array bound.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ConductKind {
    #[default]
    Nothing,
    Necromancy,
    Holy,
    Unholy,
    AttackHoly,
    AttackNeutral,
    AttackFriend,
    FriendDied,
    UnchivalricAttack,
    Poison,
    KillLiving,
    KillUndead,
    KillDemon,
    KillNaturalUnholy,
    KillNaturalEvil,
    KillUnclean,
    KillChaotic,
    KillWizard,
    KillPriest,
    KillHoly,
    KillFast,
    LivingKilledByUndeadSlave,
    LivingKilledByServant,
    UndeadKilledByUndeadSlave,
    UndeadKilledByServant,
    DemonKilledByUndeadSlave,
    DemonKilledByServant,
    NaturalUnholyKilledByServant,
    NaturalEvilKilledByServant,
    HolyKilledByUndeadSlave,
    HolyKilledByServant,
    Banish,
    SpellMemorise,
    SpellCasting,
    SpellPractise,
    DrinkBlood,
    Cannibalism,
    DesecrateSouledBeing,
    DeliberateMutating,
    CauseGlowing,
    Unclean,
    Chaos,
    DesecrateOrcishRemains,
    DestroyOrcishIdol,
    KillSlime,
    KillPlant,
    PlantKilledByServant,
    Hasty,
    CorpseViolation,
    SouledFriendDied,
    UncleanKilledByServant,
    ChaoticKilledByServant,
    AttackInSanctuary,
    KillArtificial,
    ArtificialKilledByUndeadSlave,
    ArtificialKilledByServant,
    DestroySpellbook,
    Exploration,
    DesecrateHolyRemains,
    SeeMonster,
    Fire,
    KillFiery,
    SacrificeLove,
}

/// Display names, indexed by discriminant.
const CONDUCT_NAMES: [&str; ConductKind::COUNT] = [
    "",
    "Necromancy",
    "Holy",
    "Unholy",
    "Attack Holy",
    "Attack Neutral",
    "Attack Friend",
    "Friend Died",
    "Unchivalric Attack",
    "Poison",
    "Kill Living",
    "Kill Undead",
    "Kill Demon",
    "Kill Natural Unholy",
    "Kill Natural Evil",
    "Kill Unclean",
    "Kill Chaotic",
    "Kill Wizard",
    "Kill Priest",
    "Kill Holy",
    "Kill Fast",
    "Undead Slave Kill Living",
    "Servant Kill Living",
    "Undead Slave Kill Undead",
    "Servant Kill Undead",
    "Undead Slave Kill Demon",
    "Servant Kill Demon",
    "Servant Kill Natural Unholy",
    "Servant Kill Natural Evil",
    "Undead Slave Kill Holy",
    "Servant Kill Holy",
    "Banishment",
    "Spell Memorise",
    "Spell Cast",
    "Spell Practise",
    "Drink Blood",
    "Cannibalism",
    "Eat Souled Being",
    "Deliberate Mutation",
    "Cause Glowing",
    "Use Unclean",
    "Use Chaos",
    "Desecrate Orcish Remains",
    "Destroy Orcish Idol",
    "Kill Slime",
    "Kill Plant",
    "Servant Kill Plant",
    "Was Hasty",
    "Corpse Violation",
    "Souled Friend Died",
    "Servant Kill Unclean",
    "Servant Kill Chaotic",
    "Attack In Sanctuary",
    "Kill Artificial",
    "Undead Slave Kill Artificial",
    "Servant Kill Artificial",
    "Destroy Spellbook",
    "Exploration",
    "Desecrate Holy Remains",
    "Seen Monster",
    "Fire",
    "Kill Fiery",
    "Sacrificed Love",
];

impl ConductKind {
    /// Number of conduct kinds, including the `Nothing` sentinel.
    pub const COUNT: usize = 63;

    /// Returns all conduct kinds in discriminant order.
    pub fn all() -> &'static [ConductKind] {
        use ConductKind::*;
        &[
            Nothing,
            Necromancy,
            Holy,
            Unholy,
            AttackHoly,
            AttackNeutral,
            AttackFriend,
            FriendDied,
            UnchivalricAttack,
            Poison,
            KillLiving,
            KillUndead,
            KillDemon,
            KillNaturalUnholy,
            KillNaturalEvil,
            KillUnclean,
            KillChaotic,
            KillWizard,
            KillPriest,
            KillHoly,
            KillFast,
            LivingKilledByUndeadSlave,
            LivingKilledByServant,
            UndeadKilledByUndeadSlave,
            UndeadKilledByServant,
            DemonKilledByUndeadSlave,
            DemonKilledByServant,
            NaturalUnholyKilledByServant,
            NaturalEvilKilledByServant,
            HolyKilledByUndeadSlave,
            HolyKilledByServant,
            Banish,
            SpellMemorise,
            SpellCasting,
            SpellPractise,
            DrinkBlood,
            Cannibalism,
            DesecrateSouledBeing,
            DeliberateMutating,
            CauseGlowing,
            Unclean,
            Chaos,
            DesecrateOrcishRemains,
            DestroyOrcishIdol,
            KillSlime,
            KillPlant,
            PlantKilledByServant,
            Hasty,
            CorpseViolation,
            SouledFriendDied,
            UncleanKilledByServant,
            ChaoticKilledByServant,
            AttackInSanctuary,
            KillArtificial,
            ArtificialKilledByUndeadSlave,
            ArtificialKilledByServant,
            DestroySpellbook,
            Exploration,
            DesecrateHolyRemains,
            SeeMonster,
            Fire,
            KillFiery,
            SacrificeLove,
        ]
    }

    /// Index into per-conduct arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        CONDUCT_NAMES[self.index()]
    }

    /// Whether this is the "no conduct" sentinel.
    pub fn is_nothing(self) -> bool {
        self == ConductKind::Nothing
    }

    /// Kills that some gods rescale by victim difficulty or standing.
    pub fn is_direct_kill(self) -> bool {
        matches!(
            self,
            ConductKind::KillLiving
                | ConductKind::KillUndead
                | ConductKind::KillDemon
                | ConductKind::KillHoly
        )
    }
}

impl fmt::Display for ConductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nothing() {
            write!(f, "Nothing")
        } else {
            write!(f, "{}", self.name())
        }
    }
}
