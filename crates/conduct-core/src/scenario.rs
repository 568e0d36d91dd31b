//! Scenario Replay
//!
//! A scenario is a TOML file listing the monsters present and, turn by
//! turn, the conducts and attacks the player performs. Replaying it drives
//! the engine exactly as a game would: turn boundary first, then each
//! action with its conducts armed through triggers.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use conduct_types::{Attitude, ConductKind, GodMessage, Monster};

use crate::components::{AttackConductTracker, DivineEffect, StabType};
use crate::engine::GodConduct;
use crate::error::ConductError;
use crate::trigger::{attack_conduct_triggers, ConductTrigger, EngineSink};

/// A scripted sequence of player turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub monsters: Vec<Monster>,
    #[serde(default, rename = "turn")]
    pub turns: Vec<ScenarioTurn>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTurn {
    #[serde(default, rename = "action")]
    pub actions: Vec<ScenarioAction>,
}

/// One thing the player does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioAction {
    /// A conduct reported directly, optionally against a named monster
    Conduct {
        conduct: ConductKind,
        level: i32,
        #[serde(default = "default_known")]
        known: bool,
        #[serde(default)]
        victim: Option<String>,
    },
    /// One attack that may hit its target several times, as a bouncing
    /// beam does. Only the first hit can be a stab; it wakes the target.
    Attack {
        monster: String,
        #[serde(default = "default_hits")]
        hits: u32,
        #[serde(default)]
        stab: StabType,
        #[serde(default = "default_known")]
        known: bool,
        /// New attitude the target takes after the first hit
        #[serde(default)]
        attitude_after_first_hit: Option<Attitude>,
        /// Conduct for killing the target once the attack ends
        #[serde(default)]
        kill: Option<ConductKind>,
    },
}

fn default_known() -> bool {
    true
}

fn default_hits() -> u32 {
    1
}

impl Scenario {
    pub fn from_file(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(content)?)
    }
}

/// Outcome of one replayed turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReport {
    pub turn: u64,
    pub messages: Vec<GodMessage>,
    pub effects: Vec<DivineEffect>,
    pub piety: i32,
    pub penance: i32,
}

/// Outcome of a whole replay.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub turns: Vec<TurnReport>,
}

impl ScenarioReport {
    pub fn final_piety(&self) -> Option<i32> {
        self.turns.last().map(|t| t.piety)
    }

    pub fn final_penance(&self) -> Option<i32> {
        self.turns.last().map(|t| t.penance)
    }

    /// Every message spoken during the replay, in order.
    pub fn messages(&self) -> impl Iterator<Item = &GodMessage> {
        self.turns.iter().flat_map(|t| t.messages.iter())
    }
}

/// Errors that can occur while loading or replaying a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("scenario refers to unknown monster `{0}`")]
    UnknownMonster(String),

    #[error(transparent)]
    Conduct(#[from] ConductError),

    #[error("world is missing the {0} resource")]
    MissingResource(&'static str),
}

/// Replays `scenario` against the engine and tracker in `world`, running
/// `schedule` at the start of every turn.
pub fn run_scenario(
    world: &mut World,
    schedule: &mut Schedule,
    scenario: &Scenario,
) -> Result<ScenarioReport, ScenarioError> {
    let mut roster = scenario.monsters.clone();
    let mut report = ScenarioReport::default();

    for turn in &scenario.turns {
        if !world.contains_resource::<GodConduct>() {
            return Err(ScenarioError::MissingResource("GodConduct"));
        }
        if !world.contains_resource::<AttackConductTracker>() {
            return Err(ScenarioError::MissingResource("AttackConductTracker"));
        }
        schedule.run(world);

        let (engine, mut tracker) = take_resources(world)?;
        let sink = EngineSink::new(engine);
        let outcome = turn
            .actions
            .iter()
            .try_for_each(|action| play_action(&sink, &mut tracker, &mut roster, action))
            .and(sink.flush().map_err(ScenarioError::from));

        let mut engine = sink.into_inner();
        report.turns.push(TurnReport {
            turn: engine.player.num_turns,
            messages: engine.messages.drain(),
            effects: engine.effects.drain(),
            piety: engine.player.piety,
            penance: engine.player.current_penance(),
        });
        world.insert_resource(engine);
        world.insert_resource(tracker);
        outcome?;
    }

    Ok(report)
}

fn take_resources(world: &mut World) -> Result<(GodConduct, AttackConductTracker), ScenarioError> {
    let engine = world
        .remove_resource::<GodConduct>()
        .ok_or(ScenarioError::MissingResource("GodConduct"))?;
    match world.remove_resource::<AttackConductTracker>() {
        Some(tracker) => Ok((engine, tracker)),
        None => {
            world.insert_resource(engine);
            Err(ScenarioError::MissingResource("AttackConductTracker"))
        }
    }
}

fn find_monster<'a>(roster: &'a [Monster], name: &str) -> Result<&'a Monster, ScenarioError> {
    roster
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| ScenarioError::UnknownMonster(name.to_string()))
}

fn play_action(
    sink: &EngineSink,
    tracker: &mut AttackConductTracker,
    roster: &mut Vec<Monster>,
    action: &ScenarioAction,
) -> Result<(), ScenarioError> {
    match action {
        ScenarioAction::Conduct {
            conduct,
            level,
            known,
            victim,
        } => {
            let victim = victim
                .as_deref()
                .map(|name| find_monster(roster, name))
                .transpose()?;
            sink.borrow_mut()
                .did_god_conduct(*conduct, *level, *known, victim)?;
        }
        ScenarioAction::Attack {
            monster,
            hits,
            stab,
            known,
            attitude_after_first_hit,
            kill,
        } => {
            let mut conducts = attack_conduct_triggers(sink);
            for hit in 0..*hits {
                let target = find_monster(roster, monster)?;
                let stab = if hit == 0 { *stab } else { StabType::NoStab };
                tracker.set_attack_conducts(&mut conducts, target, stab, *known)?;

                if hit == 0 {
                    if let Some(attitude) = attitude_after_first_hit {
                        if let Some(target) = roster.iter_mut().find(|m| &m.name == monster) {
                            target.attitude = *attitude;
                        }
                    }
                }
            }
            drop(conducts);

            if let Some(kill) = kill {
                let index = roster
                    .iter()
                    .position(|m| &m.name == monster)
                    .ok_or_else(|| ScenarioError::UnknownMonster(monster.clone()))?;
                let corpse = roster.remove(index);
                let level = corpse.experience_level;
                let _kill = ConductTrigger::new(sink, *kill, level, true, Some(&corpse));
                drop(corpse);
            }
        }
    }
    Ok(())
}
