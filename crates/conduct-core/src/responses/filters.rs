//! Victim Filters
//!
//! Named checks deciding whether a table response applies to a particular
//! victim. A response without a filter applies to every victim.

use conduct_types::{DeityId, Genus, Holiness, Monster};

use crate::components::PlayerState;

/// Closed set of victim checks used by the response tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VictimFilter {
    /// Attacking a holy creature only matters if it could not have been a
    /// reward or was once neutral.
    AttackingHolyMatters,
    /// The victim is not one a chivalrous god lets you stab.
    NotUnchivalricSafe,
    /// The god hates you attacking this ally.
    HatesAttackingFriend,
    /// A fallen Shining One convert, not an object or plant.
    ElyvilonMartyr,
    /// A plant or fungus under Fedhas's protection, ballistomycetes aside.
    FedhasProtected,
    /// Elyvilon's lifesaving prayer is in effect.
    DuringLifesaving,
    NotShapeshifter,
    SlimeNotShapeshifter,
    /// The god is willing to reward this kill.
    GodLikesKilling,
}

impl VictimFilter {
    pub fn admits(self, player: &PlayerState, victim: Option<&Monster>) -> bool {
        match self {
            VictimFilter::AttackingHolyMatters => {
                victim.map_or(true, |v| v.flags.no_reward || v.flags.was_neutral)
            }
            VictimFilter::NotUnchivalricSafe => {
                victim.map_or(true, |v| !v.unchivalric_attack_safe())
            }
            VictimFilter::HatesAttackingFriend => {
                let hates = god_hates_attacking_friend(player.religion, victim);
                tracing::trace!(hates, "hates attacking friend");
                hates
            }
            VictimFilter::ElyvilonMartyr => victim.map_or(false, |v| {
                !v.is_object() && !v.is_plant() && v.god == DeityId::ShiningOne
            }),
            VictimFilter::FedhasProtected => victim
                .map_or(false, |v| fedhas_protects(v) && v.genus != Genus::Ballistomycete),
            VictimFilter::DuringLifesaving => player.lifesaving,
            VictimFilter::NotShapeshifter => victim.map_or(false, |v| !v.is_shapeshifter()),
            VictimFilter::SlimeNotShapeshifter => {
                victim.map_or(false, |v| v.is_slime() && !v.is_shapeshifter())
            }
            VictimFilter::GodLikesKilling => {
                if player.worships(DeityId::Dithmenos) && victim.map_or(false, |v| v.flags.shadow)
                {
                    return false;
                }
                !god_hates_attacking_friend(player.religion, victim)
            }
        }
    }
}

/// Whether `god` objects to harm done to `victim` as one of its allies.
pub fn god_hates_attacking_friend(god: DeityId, victim: Option<&Monster>) -> bool {
    let Some(victim) = victim else {
        return false;
    };
    if !victim.friendly() || victim.is_object() {
        return false;
    }

    match god {
        DeityId::Zin | DeityId::ShiningOne | DeityId::Elyvilon | DeityId::Okawaru => true,
        DeityId::Beogh => victim.genus == Genus::Orc,
        DeityId::Jiyva => victim.is_slime(),
        DeityId::Fedhas => fedhas_protects(victim),
        _ => false,
    }
}

/// Plants and fungi count as Fedhas's charges; animated objects do not.
pub fn fedhas_protects(victim: &Monster) -> bool {
    !victim.is_object()
        && (victim.holiness == Holiness::Plant
            || matches!(
                victim.genus,
                Genus::Plant | Genus::Fungus | Genus::Ballistomycete
            ))
}
