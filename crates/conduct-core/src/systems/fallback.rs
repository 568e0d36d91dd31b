//! Fallback Rules
//!
//! Conducts the response tables cannot express. Each rule is keyed by
//! conduct and returns the change to apply; gods with no stake in the
//! conduct get no change. Direct kills are then rescaled for Okawaru and
//! Dithmenos.

use conduct_types::{ConductKind, DeityId, PietyChange};

use crate::components::{PropValue, RU_AVAILABLE_SACRIFICES_KEY, RU_SACRIFICE_PROGRESS_KEY};
use crate::engine::{ConductEvent, GodConduct};
use crate::error::ConductError;
use crate::random::one_chance_in;
use crate::responses::god_hates_attacking_friend;

type FallbackRule = fn(&mut GodConduct, &ConductEvent<'_>) -> Result<PietyChange, ConductError>;

/// Okawaru's divisor for victim difficulty.
pub const OKAWARU_DIFFICULTY_DENOM: i32 = 600;
/// Piety gained per dungeon level explored under Ashenzari, before bondage.
pub const ASHENZARI_EXPLORATION_BASE: i32 = 8;
/// Piety gained per dungeon level explored under Nemelex Xobeh.
pub const NEMELEX_EXPLORATION_GAIN: i32 = 14;

fn fallback_rule(conduct: ConductKind) -> Option<FallbackRule> {
    let rule: FallbackRule = match conduct {
        ConductKind::DeliberateMutating | ConductKind::CauseGlowing => zin_mutation,
        ConductKind::DesecrateSouledBeing => zin_souled_being,
        ConductKind::Unclean => zin_unclean,
        ConductKind::Chaos => zin_chaos,
        ConductKind::AttackInSanctuary => zin_sanctuary,
        ConductKind::DesecrateOrcishRemains => beogh_orcish_remains,
        ConductKind::DestroyOrcishIdol => beogh_orcish_idol,
        ConductKind::Hasty => chei_hasty,
        ConductKind::DestroySpellbook => sif_spellbook,
        ConductKind::Exploration => exploration,
        ConductKind::SeeMonster => tso_see_monster,
        ConductKind::Fire => dithmenos_fire,
        ConductKind::SpellPractise => sif_spell_practise,
        _ => return None,
    };
    Some(rule)
}

/// Resolves a conduct with no table entry for the worshipped god.
pub fn resolve_fallback(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    let mut change = match fallback_rule(event.conduct) {
        Some(rule) => rule(engine, event)?,
        None => PietyChange::none(event.conduct),
    };

    if event.conduct.is_direct_kill()
        && !god_hates_attacking_friend(engine.player.religion, event.victim)
    {
        adjust_kill(engine, event, &mut change);
    }

    Ok(change)
}

fn adjust_kill(engine: &mut GodConduct, event: &ConductEvent<'_>, change: &mut PietyChange) {
    if engine.player.worships(DeityId::Okawaru) {
        let difficulty = event.victim.map_or(0, |v| v.difficulty);
        tracing::debug!(difficulty = difficulty as f32 * 0.01, "Okawaru kill");
        change.piety_change = difficulty;
        change.piety_denom = OKAWARU_DIFFICULTY_DENOM;
        if difficulty > 3200 {
            engine.god_message(" appreciates your kill.");
        } else if difficulty > 9 {
            engine.god_message(" accepts your kill.");
        }
    }

    if engine.player.worships(DeityId::Dithmenos) {
        // Full gains at low standing, shrinking as piety rank rises.
        change.piety_change = change
            .piety_change
            .saturating_mul(25 - engine.player.piety_rank());
        change.piety_denom = change.piety_denom.saturating_mul(24);
    }
}

fn zin_mutation(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    if !engine.player.worships(DeityId::Zin) {
        return Ok(PietyChange::none(event.conduct));
    }

    let glowing = event.conduct == ConductKind::CauseGlowing;
    if !event.known && !glowing {
        engine.god_message(" forgives your inadvertent chaotic act, just this once.");
        return Ok(PietyChange::none(event.conduct));
    }

    if glowing {
        if event.level == 0 {
            engine.god_message(" is not enthusiastic about the mutagenic glow surrounding you.");
        } else if engine.note_glowing_lecture() {
            engine.god_message(" does not appreciate the extra mutagenic glow surrounding you!");
        }
    }

    Ok(PietyChange::loss(event.conduct, event.level, 0))
}

fn zin_souled_being(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    if !engine.player.worships(DeityId::Zin) {
        return Ok(PietyChange::none(event.conduct));
    }
    engine.god_message(" expects more respect for this departed soul.");
    Ok(PietyChange::loss(
        event.conduct,
        event.level.saturating_mul(5),
        event.level.saturating_mul(3),
    ))
}

fn zin_unclean(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    zin_forgivable(
        engine,
        event,
        " forgives your inadvertent unclean act, just this once.",
    )
}

fn zin_chaos(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    zin_forgivable(
        engine,
        event,
        " forgives your inadvertent chaotic act, just this once.",
    )
}

fn zin_forgivable(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
    forgiveness: &str,
) -> Result<PietyChange, ConductError> {
    if !engine.player.worships(DeityId::Zin) {
        return Ok(PietyChange::none(event.conduct));
    }
    if !event.known {
        engine.god_message(forgiveness);
        return Ok(PietyChange::none(event.conduct));
    }
    Ok(PietyChange::loss(event.conduct, event.level, event.level))
}

fn zin_sanctuary(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    if !engine.player.worships(DeityId::Zin) {
        return Ok(PietyChange::none(event.conduct));
    }
    Ok(PietyChange::loss(event.conduct, event.level, event.level))
}

fn beogh_orcish_remains(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    if !engine.player.worships(DeityId::Beogh) {
        return Ok(PietyChange::none(event.conduct));
    }
    Ok(PietyChange::loss(event.conduct, event.level, 0))
}

fn beogh_orcish_idol(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    if !engine.player.worships(DeityId::Beogh) {
        return Ok(PietyChange::none(event.conduct));
    }
    Ok(PietyChange::loss(event.conduct, event.level, event.level.saturating_mul(3)))
}

/// Penance for acts whose severity above 5 is held against you.
fn excess_over_five(level: i32) -> i32 {
    level.saturating_sub(5).max(0)
}

fn chei_hasty(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    if !engine.player.worships(DeityId::Cheibriados) {
        return Ok(PietyChange::none(event.conduct));
    }
    if !event.known {
        engine.god_message(" forgives your accidental hurry, just this once.");
        return Ok(PietyChange::none(event.conduct));
    }
    engine.god_message(" thinks you should slow down.");
    Ok(PietyChange::loss(
        event.conduct,
        event.level,
        excess_over_five(event.level),
    ))
}

fn sif_spellbook(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    if !engine.player.worships(DeityId::SifMuna) {
        return Ok(PietyChange::none(event.conduct));
    }
    let penance = event.level.saturating_mul(if event.known { 2 } else { 1 });
    Ok(PietyChange::loss(event.conduct, event.level, penance))
}

fn exploration(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    match engine.player.religion {
        DeityId::Ashenzari => {
            // x1 to x2 in quarter steps with bondage level
            let base = ASHENZARI_EXPLORATION_BASE;
            let gain = base + base * engine.player.bondage_level / 4;
            Ok(PietyChange::gain(event.conduct, gain, event.level))
        }
        DeityId::NemelexXobeh => Ok(PietyChange::gain(
            event.conduct,
            NEMELEX_EXPLORATION_GAIN,
            event.level,
        )),
        DeityId::Ru => {
            ru_advance_sacrifice(engine)?;
            Ok(PietyChange::none(event.conduct))
        }
        _ => Ok(PietyChange::none(event.conduct)),
    }
}

/// With no sacrifice on offer, exploring occasionally brings the next one
/// closer.
fn ru_advance_sacrifice(engine: &mut GodConduct) -> Result<(), ConductError> {
    let progress = engine.player.prop_int(RU_SACRIFICE_PROGRESS_KEY)?;
    let sacrifice_count = engine.player.prop_list(RU_AVAILABLE_SACRIFICES_KEY)?.len();

    if sacrifice_count == 0 && one_chance_in(engine.rng(), 100) {
        tracing::debug!(progress = progress + 1, "Ru sacrifice progress");
        engine
            .player
            .set_prop(RU_SACRIFICE_PROGRESS_KEY, PropValue::Int(progress + 1));
    }
    Ok(())
}

fn tso_see_monster(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    if !engine.player.worships(DeityId::ShiningOne) {
        return Ok(PietyChange::none(event.conduct));
    }
    if event.victim.map_or(false, |v| v.is_evil() || v.is_unholy()) {
        return Ok(PietyChange::none(event.conduct));
    }

    let denom = event.level / 2 + 6 - engine.player.experience_level / 4;
    let gain = (denom - 4).max(0);
    Ok(PietyChange::gain(event.conduct, gain, denom.max(1)))
}

fn dithmenos_fire(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    if !engine.player.worships(DeityId::Dithmenos) {
        return Ok(PietyChange::none(event.conduct));
    }
    if !event.known {
        engine.god_message(" forgives your accidental fire-starting, just this once.");
        return Ok(PietyChange::none(event.conduct));
    }
    engine.god_message(" does not appreciate your starting fires!");
    Ok(PietyChange::loss(
        event.conduct,
        event.level,
        excess_over_five(event.level),
    ))
}

fn sif_spell_practise(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<PietyChange, ConductError> {
    if !engine.player.worships(DeityId::SifMuna) {
        return Ok(PietyChange::none(event.conduct));
    }
    Ok(PietyChange::gain(event.conduct, event.level, 4))
}
