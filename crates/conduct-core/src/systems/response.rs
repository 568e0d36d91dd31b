//! Response Evaluation
//!
//! Resolves a conduct for the worshipped god: dislike table, then like
//! table, then the fallback rules.

use conduct_types::{DeityId, PietyChange};

use crate::components::Branch;
use crate::engine::{ConductEvent, GodConduct};
use crate::error::ConductError;
use crate::responses::{dislike_response, like_response, DislikeResponse, LikeResponse};
use crate::systems::fallback::resolve_fallback;
use crate::systems::multiplier::piety_mult;

/// Applies the worshipped god's reaction to `event`.
pub fn handle_your_gods_response(
    engine: &mut GodConduct,
    event: &ConductEvent<'_>,
) -> Result<Option<PietyChange>, ConductError> {
    let religion = engine.player.religion;

    // Lugonu gives no piety in the Abyss.
    if religion == DeityId::Lugonu && engine.player.branch == Branch::Abyss {
        tracing::trace!(conduct = %event.conduct, "Lugonu ignores conduct in the Abyss");
        return Ok(None);
    }

    if let Some(peeve) = dislike_response(religion, event.conduct) {
        tracing::trace!(conduct = %event.conduct, "checking peeve data");
        return Ok(apply_dislike(engine, peeve, event));
    }

    if let Some(like) = like_response(religion, event.conduct) {
        tracing::trace!(conduct = %event.conduct, "checking like data");
        return Ok(apply_like(engine, like, event));
    }

    tracing::trace!(conduct = %event.conduct, "no data");

    if religion.ignores_conduct() {
        return Ok(None);
    }

    let change = resolve_fallback(engine, event)?;
    Ok(Some(engine.handle_piety_penance(change)))
}

fn apply_dislike(
    engine: &mut GodConduct,
    peeve: &DislikeResponse,
    event: &ConductEvent<'_>,
) -> Option<PietyChange> {
    if let Some(filter) = peeve.valid_victim {
        if !filter.admits(&engine.player, event.victim) {
            tracing::trace!(conduct = %event.conduct, ?filter, "invalid victim");
            return None;
        }
    }

    if !event.known {
        if let Some(forgiveness) = peeve.forgiveness_message {
            tracing::trace!(conduct = %event.conduct, "conduct forgiven");
            engine.god_message(forgiveness);
            return None;
        }
    }

    if let Some(message) = peeve.message {
        engine.god_message(message);
    }

    let change = PietyChange::loss(
        event.conduct,
        peeve.piety_factor.saturating_mul(event.level),
        peeve.penance_factor.saturating_mul(event.level),
    );
    Some(engine.handle_piety_penance(change))
}

fn apply_like(
    engine: &mut GodConduct,
    like: &LikeResponse,
    event: &ConductEvent<'_>,
) -> Option<PietyChange> {
    if let Some(filter) = like.valid_victim {
        if !filter.admits(&engine.player, event.victim) {
            tracing::trace!(conduct = %event.conduct, ?filter, "invalid victim");
            return None;
        }
    }

    if let Some(message) = like.message {
        engine.god_message(message);
    }

    let denom = like.denominator(event.level, engine.player.experience_level);
    let gain_mult = piety_mult(engine, event.conduct, event.victim);
    let gain = denom.saturating_add(like.piety_bonus).saturating_mul(gain_mult);

    let change = PietyChange::gain(event.conduct, gain.max(0), denom.max(1));
    Some(engine.handle_piety_penance(change))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::PlayerState;
    use conduct_types::{Attitude, ConductKind, Holiness, Monster, MonsterFlags};

    fn new_engine(player: PlayerState) -> GodConduct {
        GodConduct::new(player, 42).unwrap()
    }

    fn resolve(
        engine: &mut GodConduct,
        conduct: ConductKind,
        level: i32,
        known: bool,
        victim: Option<&Monster>,
    ) -> Option<PietyChange> {
        engine
            .did_god_conduct(conduct, level, known, victim)
            .unwrap()
    }

    #[test]
    fn test_like_arithmetic() {
        // KILL_LIVING: bonus -6, denom bonus 18, xl_denom 2.
        let player = PlayerState::new(DeityId::Trog)
            .with_experience_level(10)
            .with_piety(50);
        let mut engine = new_engine(player);
        let goblin = Monster::new(0, "goblin");

        let change = resolve(&mut engine, ConductKind::KillLiving, 3, true, Some(&goblin)).unwrap();
        assert_eq!(change.piety_change, 10);
        assert_eq!(change.piety_denom, 16);
        assert_eq!(change.penance, 0);
        assert_eq!(engine.messages.last_text(), Some("Trog accepts your kill."));
    }

    #[test]
    fn test_dislike_arithmetic() {
        // Trog's spell casting peeve: 1 piety and 5 penance per level.
        let mut engine = new_engine(PlayerState::new(DeityId::Trog).with_piety(100));

        let change = resolve(&mut engine, ConductKind::SpellCasting, 5, true, None).unwrap();
        assert_eq!(change.piety_change, -5);
        assert_eq!(change.penance, 25);
        assert_eq!(engine.player.piety, 95);
        assert_eq!(engine.player.current_penance(), 25);
        assert!(engine.messages.is_empty());
    }

    #[test]
    fn test_attack_friend_loss_and_penance() {
        // ATTACK_FRIEND: 1 piety and 3 penance per level.
        let mut engine = new_engine(PlayerState::new(DeityId::Okawaru).with_piety(40));
        let ally = Monster::new(0, "ally").with_attitude(Attitude::Friendly);

        let change = resolve(&mut engine, ConductKind::AttackFriend, 5, true, Some(&ally)).unwrap();
        assert_eq!(change.piety_change, -5);
        assert_eq!(change.penance, 15);
        assert_eq!(engine.player.piety, 35);
        assert_eq!(engine.player.current_penance(), 15);
    }

    #[test]
    fn test_unknown_dislike_forgiven() {
        let mut engine = new_engine(PlayerState::new(DeityId::Zin).with_piety(60));

        assert!(resolve(&mut engine, ConductKind::Unholy, 4, false, None).is_none());
        assert_eq!(engine.player.piety, 60);
        assert_eq!(engine.player.current_penance(), 0);
        assert_eq!(
            engine.messages.drain().iter().map(|m| m.text.as_str()).collect::<Vec<_>>(),
            vec!["Zin forgives your inadvertent unholy act, just this once."]
        );
    }

    #[test]
    fn test_unknown_without_forgiveness_still_punished() {
        let mut engine = new_engine(PlayerState::new(DeityId::Zin).with_piety(60));

        let change = resolve(&mut engine, ConductKind::Cannibalism, 1, false, None).unwrap();
        assert_eq!(change.piety_change, -5);
        assert_eq!(engine.player.piety, 55);
        assert_eq!(
            engine.messages.last_text(),
            Some("Zin expects more respect for your departed relatives.")
        );
    }

    #[test]
    fn test_filtered_victim_has_no_effect() {
        let mut engine = new_engine(PlayerState::new(DeityId::Zin).with_piety(60));
        // A holy creature that was always hostile and rewarding: attacking
        // it does not upset Zin.
        let angel = Monster::new(0, "angel").with_holiness(Holiness::Holy);

        assert!(resolve(&mut engine, ConductKind::AttackHoly, 12, true, Some(&angel)).is_none());
        assert_eq!(engine.player.piety, 60);
        assert!(engine.messages.is_empty());

        let once_neutral = angel.with_flags(MonsterFlags {
            was_neutral: true,
            ..MonsterFlags::default()
        });
        let change = resolve(&mut engine, ConductKind::AttackHoly, 12, true, Some(&once_neutral));
        assert_eq!(change.map(|c| c.penance), Some(12));
    }

    #[test]
    fn test_filtered_like_has_no_effect() {
        let mut engine = new_engine(PlayerState::new(DeityId::Beogh).with_piety(30));
        let follower = Monster::new(0, "orc follower")
            .with_genus(conduct_types::Genus::Orc)
            .with_attitude(Attitude::Friendly);

        assert!(resolve(&mut engine, ConductKind::KillLiving, 5, true, Some(&follower)).is_none());
        assert_eq!(engine.player.piety, 30);
        assert!(engine.messages.is_empty());
    }

    #[test]
    fn test_like_gain_floors_at_zero() {
        // High experience drives the divisor below the bonus.
        let player = PlayerState::new(DeityId::Vehumet).with_experience_level(27);
        let mut engine = new_engine(player.with_piety(20));

        let change = resolve(&mut engine, ConductKind::KillLiving, 1, true, None).unwrap();
        // denom = 18 + 1 - 13 = 6, gain = 6 - 6 = 0
        assert_eq!(change.piety_change, 0);
        assert_eq!(change.piety_denom, 6);
        assert_eq!(engine.player.piety, 20);
    }

    #[test]
    fn test_lugonu_abyss_no_change() {
        let mut player = PlayerState::new(DeityId::Lugonu).with_piety(10);
        player.branch = Branch::Abyss;
        let mut engine = new_engine(player);

        assert!(resolve(&mut engine, ConductKind::KillLiving, 5, true, None).is_none());
        assert!(resolve(&mut engine, ConductKind::Banish, 5, true, None).is_none());
        assert_eq!(engine.player.piety, 10);
        assert!(engine.messages.is_empty());
    }

    #[test]
    fn test_indifferent_gods() {
        for religion in [DeityId::NoGod, DeityId::Xom] {
            let mut engine = new_engine(PlayerState::new(religion).with_piety(10));
            for &conduct in ConductKind::all() {
                assert!(resolve(&mut engine, conduct, 5, true, None).is_none());
            }
            assert_eq!(engine.player.piety, 10);
            assert!(engine.messages.is_empty());
        }
    }

    #[test]
    fn test_yredelemnul_holy_kill_doubled() {
        let mut engine = new_engine(PlayerState::new(DeityId::Yredelemnul));
        let angel = Monster::new(0, "angel").with_holiness(Holiness::Holy);

        let change = resolve(&mut engine, ConductKind::KillHoly, 2, true, Some(&angel)).unwrap();
        // denom = 18 + 2 = 20, gain = (20 - 3) * 2
        assert_eq!(change.piety_change, 34);
        assert_eq!(change.piety_denom, 20);
        let texts: Vec<_> = engine.messages.iter().map(|m| m.text.clone()).collect();
        assert_eq!(
            texts,
            vec![
                "Yredelemnul accepts your kill.".to_string(),
                "Yredelemnul appreciates your killing of a holy being.".to_string(),
            ]
        );
    }

    #[test]
    fn test_elyvilon_mourns_fallen_converts_only() {
        let mut engine = new_engine(PlayerState::new(DeityId::Elyvilon).with_piety(50));
        let paladin = Monster::new(0, "paladin").with_god(DeityId::ShiningOne);
        let blessed_oak = Monster::new(1, "blessed oak")
            .with_holiness(Holiness::Plant)
            .with_god(DeityId::ShiningOne);

        assert!(resolve(&mut engine, ConductKind::FriendDied, 4, true, Some(&blessed_oak)).is_none());
        assert_eq!(engine.player.piety, 50);

        let change = resolve(&mut engine, ConductKind::FriendDied, 4, true, Some(&paladin)).unwrap();
        assert_eq!((change.piety_change, change.penance), (-4, 0));
        let change =
            resolve(&mut engine, ConductKind::SouledFriendDied, 3, true, Some(&paladin)).unwrap();
        assert_eq!((change.piety_change, change.penance), (-3, 0));
        assert_eq!(engine.player.piety, 43);
        assert_eq!(engine.player.current_penance(), 0);
    }

    #[test]
    fn test_jiyva_slime_conducts() {
        let mut engine = new_engine(PlayerState::new(DeityId::Jiyva).with_piety(50));
        let ooze = Monster::new(0, "ooze")
            .with_genus(conduct_types::Genus::Slime)
            .with_attitude(Attitude::Neutral);
        let shifter = ooze.clone().with_flags(MonsterFlags {
            shapeshifter: true,
            ..MonsterFlags::default()
        });
        let yak = Monster::new(1, "yak").with_attitude(Attitude::Neutral);

        assert!(resolve(&mut engine, ConductKind::KillSlime, 3, true, Some(&shifter)).is_none());
        assert!(resolve(&mut engine, ConductKind::AttackNeutral, 5, true, Some(&yak)).is_none());
        assert!(resolve(&mut engine, ConductKind::AttackNeutral, 5, true, Some(&shifter)).is_none());
        assert_eq!(engine.player.piety, 50);

        let change = resolve(&mut engine, ConductKind::KillSlime, 3, true, Some(&ooze)).unwrap();
        assert_eq!((change.piety_change, change.penance), (-3, 6));
        let change = resolve(&mut engine, ConductKind::AttackNeutral, 5, true, Some(&ooze)).unwrap();
        assert_eq!((change.piety_change, change.penance), (-5, 5));
        assert_eq!(engine.player.piety, 42);
        assert_eq!(engine.player.current_penance(), 11);
    }

    #[test]
    fn test_elyvilon_kill_during_lifesaving() {
        let mut engine = new_engine(PlayerState::new(DeityId::Elyvilon).with_piety(50));
        let goblin = Monster::new(0, "goblin");

        assert!(resolve(&mut engine, ConductKind::KillLiving, 4, true, Some(&goblin)).is_none());
        assert_eq!(engine.player.piety, 50);
        assert!(engine.messages.is_empty());

        engine.player.lifesaving = true;
        let change = resolve(&mut engine, ConductKind::KillLiving, 4, true, Some(&goblin)).unwrap();
        assert_eq!((change.piety_change, change.penance), (-4, 8));
        assert_eq!(engine.player.piety, 46);
        assert_eq!(
            engine.messages.last_text(),
            Some("Elyvilon does not appreciate your shedding blood when asking for salvation!")
        );
    }

    #[test]
    fn test_huge_levels_saturate() {
        let mut engine = new_engine(PlayerState::new(DeityId::Trog).with_piety(100));
        let change = resolve(&mut engine, ConductKind::SpellMemorise, i32::MAX / 5, true, None).unwrap();
        assert_eq!(change.piety_change, -i32::MAX);
        assert_eq!(change.penance, i32::MAX);
        assert_eq!(engine.player.piety, 0);
        assert_eq!(engine.player.current_penance(), i32::MAX);

        // Penance stays pinned rather than wrapping.
        resolve(&mut engine, ConductKind::SpellCasting, i32::MAX, true, None);
        assert_eq!(engine.player.current_penance(), i32::MAX);

        let change = resolve(&mut engine, ConductKind::KillLiving, i32::MAX, true, None).unwrap();
        assert!(change.piety_change > 0 && change.piety_denom > 0);
        assert!(engine.player.piety <= 1);

        let mut zin = new_engine(PlayerState::new(DeityId::Zin).with_piety(30));
        let change =
            resolve(&mut zin, ConductKind::DesecrateSouledBeing, i32::MAX, true, None).unwrap();
        assert_eq!((change.piety_change, change.penance), (-i32::MAX, i32::MAX));
        assert_eq!(zin.player.piety, 0);
    }
}
