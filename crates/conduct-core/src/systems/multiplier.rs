//! Piety Multipliers
//!
//! Extra scaling of table gains for the few (god, conduct) pairs whose
//! reward depends on chance or on who is asking.

use conduct_types::{ConductKind, DeityId, Monster};

use crate::components::PlayerState;
use crate::engine::GodConduct;
use crate::random::x_chance_in_y;

/// Multiplier applied to a like-table gain. Only affects gains.
pub fn piety_mult(engine: &mut GodConduct, conduct: ConductKind, victim: Option<&Monster>) -> i32 {
    match conduct {
        // Only Cheibriados likes fast kills.
        ConductKind::KillFast => chei_speed_piety_mult(engine, victim),
        ConductKind::KillHoly => {
            if !engine.player.worships(DeityId::Yredelemnul) {
                return 1;
            }
            engine.god_message(" appreciates your killing of a holy being.");
            2
        }
        _ => 1,
    }
}

/// How much faster than the player the victim was.
pub fn cheibriados_speed_delta(victim: &Monster, player: &PlayerState) -> i32 {
    victim.speed - player.movement_speed
}

fn chei_speed_piety_mult(engine: &mut GodConduct, victim: Option<&Monster>) -> i32 {
    let speed_delta = victim.map_or(0, |v| cheibriados_speed_delta(v, &engine.player));
    tracing::debug!(
        victim = victim.map_or("", |v| v.name.as_str()),
        speed_delta,
        "Cheibriados fast kill"
    );

    if speed_delta > 0 && x_chance_in_y(engine.rng(), speed_delta, 12) {
        engine.god_message(" thoroughly appreciates the change of pace.");
        return 2;
    }

    engine.god_message(" appreciates the change of pace.");
    1
}
