//! Attack conduct tracking across strikes and turns
//!
//! Drives the tracker and the attack triggers the way combat code does:
//! one trigger array per action, several strikes per action, and a turn
//! boundary between actions of different turns.

use std::cell::RefCell;

use conduct_core::components::{AttackConductTracker, PlayerState, StabType};
use conduct_core::engine::GodConduct;
use conduct_core::trigger::{
    attack_conduct_triggers, disable_attack_conducts, enable_attack_conducts, ConductSink,
    ConductTrigger, EngineSink,
};
use conduct_types::fixtures::sample_monster;
use conduct_types::{Attitude, ConductKind, DeityId, Monster};

/// Sink that remembers every resolved conduct and its victim's name.
#[derive(Default)]
struct Recorder {
    resolved: RefCell<Vec<(ConductKind, i32, Option<String>)>>,
}

impl Recorder {
    fn resolved(&self) -> Vec<(ConductKind, i32, Option<String>)> {
        self.resolved.borrow().clone()
    }
}

impl ConductSink for Recorder {
    fn resolve(&self, conduct: ConductKind, level: i32, _known: bool, victim: Option<&Monster>) {
        self.resolved
            .borrow_mut()
            .push((conduct, level, victim.map(|v| v.name.clone())));
    }
}

fn engine_sink(religion: DeityId, piety: i32) -> EngineSink {
    let player = PlayerState::new(religion).with_piety(piety);
    EngineSink::new(GodConduct::new(player, 42).unwrap())
}

#[test]
fn test_unchivalric_classification_follows_first_strike() {
    let sink = Recorder::default();
    let mut tracker = AttackConductTracker::new(8);
    let m = sample_monster("orc_warrior");
    let n = sample_monster("centaur");

    {
        let mut conducts = attack_conduct_triggers(&sink);
        // M is asleep for the first strike only.
        tracker
            .set_attack_conducts(&mut conducts, &m, StabType::Sleeping, true)
            .unwrap();
        tracker
            .set_attack_conducts(&mut conducts, &m, StabType::NoStab, true)
            .unwrap();
        assert_eq!(conducts[1].conduct, ConductKind::UnchivalricAttack);
        assert!(tracker.first_attack(m.mindex).unwrap().unchivalric);

        // N is first struck fairly; a later stab on it is not charged.
        tracker
            .set_attack_conducts(&mut conducts, &n, StabType::NoStab, true)
            .unwrap();
        tracker
            .set_attack_conducts(&mut conducts, &n, StabType::Confused, true)
            .unwrap();
        assert!(!tracker.first_attack(n.mindex).unwrap().unchivalric);
    }

    assert_eq!(
        sink.resolved(),
        vec![(ConductKind::UnchivalricAttack, 4, Some("orc_warrior".to_string()))]
    );
}

#[test]
fn test_turn_start_forgets_first_strikes() {
    let sink = Recorder::default();
    let mut tracker = AttackConductTracker::new(8);
    let mut orc = sample_monster("orc_warrior");

    {
        let mut conducts = attack_conduct_triggers(&sink);
        tracker
            .set_attack_conducts(&mut conducts, &orc, StabType::NoStab, true)
            .unwrap();
        orc.attitude = Attitude::Friendly;
        tracker
            .set_attack_conducts(&mut conducts, &orc, StabType::NoStab, true)
            .unwrap();
    }
    assert!(sink.resolved().is_empty());
    assert!(tracker.first_attack(orc.mindex).unwrap().attacked);

    tracker.turn_start();
    assert!(!tracker.first_attack(orc.mindex).unwrap().attacked);

    {
        let mut conducts = attack_conduct_triggers(&sink);
        tracker
            .set_attack_conducts(&mut conducts, &orc, StabType::NoStab, true)
            .unwrap();
    }
    assert_eq!(
        sink.resolved(),
        vec![(ConductKind::AttackFriend, 5, Some("orc_warrior".to_string()))]
    );
}

#[test]
fn test_holy_and_neutral_armed_every_strike() {
    let sink = Recorder::default();
    let mut tracker = AttackConductTracker::new(8);
    let angel = sample_monster("angel");
    let jelly = sample_monster("jelly");

    let mut conducts = attack_conduct_triggers(&sink);
    tracker
        .set_attack_conducts(&mut conducts, &angel, StabType::NoStab, true)
        .unwrap();
    tracker
        .set_attack_conducts(&mut conducts, &jelly, StabType::NoStab, true)
        .unwrap();
    tracker
        .set_attack_conducts(&mut conducts, &angel, StabType::NoStab, true)
        .unwrap();
    assert_eq!(conducts[0].conduct, ConductKind::AttackNeutral);
    assert_eq!(conducts[2].conduct, ConductKind::AttackHoly);
    assert_eq!(conducts[2].level, angel.experience_level);
    drop(conducts);

    let kinds: Vec<_> = sink.resolved().into_iter().map(|(k, _, _)| k).collect();
    assert_eq!(kinds, vec![ConductKind::AttackNeutral, ConductKind::AttackHoly]);
}

#[test]
fn test_index_beyond_capacity_is_an_error() {
    let sink = Recorder::default();
    let mut tracker = AttackConductTracker::new(4);
    let imp = sample_monster("shadow_imp");

    let mut conducts = attack_conduct_triggers(&sink);
    assert!(tracker
        .set_attack_conducts(&mut conducts, &imp, StabType::NoStab, true)
        .is_err());
}

#[test]
fn test_attacking_ally_costs_shining_one_piety() {
    let sink = engine_sink(DeityId::ShiningOne, 60);
    let mut tracker = AttackConductTracker::new(8);
    let priest = sample_monster("orc_priest");

    {
        let mut conducts = attack_conduct_triggers(&sink);
        tracker
            .set_attack_conducts(&mut conducts, &priest, StabType::NoStab, true)
            .unwrap();
    }

    let engine = sink.into_inner();
    assert_eq!(engine.player.piety, 55);
    assert_eq!(engine.player.current_penance(), 15);
}

#[test]
fn test_disabled_attack_conducts_are_dropped() {
    let sink = engine_sink(DeityId::ShiningOne, 60);
    let mut tracker = AttackConductTracker::new(8);
    let priest = sample_monster("orc_priest");

    {
        let mut conducts = attack_conduct_triggers(&sink);
        tracker
            .set_attack_conducts(&mut conducts, &priest, StabType::Sleeping, true)
            .unwrap();
        disable_attack_conducts(&mut conducts);
        assert!(conducts.iter().all(|c| !c.enabled));
    }
    assert_eq!(sink.borrow().player.piety, 60);

    {
        let mut conducts = attack_conduct_triggers(&sink);
        tracker
            .set_attack_conducts(&mut conducts, &priest, StabType::NoStab, true)
            .unwrap();
        disable_attack_conducts(&mut conducts);
        enable_attack_conducts(&mut conducts);
    }
    assert_eq!(sink.borrow().player.piety, 55);
}

#[test]
fn test_victim_snapshot_survives_mutation() {
    let sink = engine_sink(DeityId::Zin, 100);
    let mut angel = sample_monster("angel");

    {
        let _trigger =
            ConductTrigger::new(&sink, ConductKind::AttackHoly, 12, true, Some(&angel));
        // Had the trigger kept a reference, the angel would now look like an
        // ordinary reward kill and Zin would not mind.
        angel.flags.was_neutral = false;
    }

    let engine = sink.into_inner();
    assert_eq!(engine.player.piety, 88);
    assert_eq!(engine.player.current_penance(), 12);
}
