//! God Conduct Engine
//!
//! Owns the player's religious standing and resolves conducts against it.
//! Resolution order matters: the worshipped god's tables first, then the
//! fallback rules, then effects that apply whatever the player worships.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use conduct_types::{ConductKind, Monster, PietyChange};

use crate::components::{DivineEffect, EffectQueue, MessageLog, PlayerState};
use crate::config::ConductConfig;
use crate::error::ConductError;
use crate::responses::validate_response_tables;
use crate::systems::response::handle_your_gods_response;

/// Kind of game being played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    Normal,
    /// Monster-versus-monster spectating; the player has no god
    Arena,
}

/// One conduct as it reaches the resolver.
#[derive(Debug, Clone, Copy)]
pub struct ConductEvent<'a> {
    pub conduct: ConductKind,
    pub level: i32,
    pub known: bool,
    pub victim: Option<&'a Monster>,
}

/// Resource: the conduct resolver and the standing it mutates.
#[derive(Resource, Debug)]
pub struct GodConduct {
    pub player: PlayerState,
    pub messages: MessageLog,
    pub effects: EffectQueue,
    pub game_mode: GameMode,
    rng: SmallRng,
    last_glowing_lecture: Option<u64>,
}

impl GodConduct {
    /// Builds an engine, checking the response tables first.
    pub fn new(player: PlayerState, seed: u64) -> Result<Self, ConductError> {
        validate_response_tables()?;
        Ok(Self {
            player,
            messages: MessageLog::new(),
            effects: EffectQueue::new(),
            game_mode: GameMode::Normal,
            rng: SmallRng::seed_from_u64(seed),
            last_glowing_lecture: None,
        })
    }

    pub fn from_config(config: &ConductConfig) -> Result<Self, ConductError> {
        let mut engine = Self::new(config.player.to_player_state(), config.engine.seed)?;
        engine.game_mode = config.engine.game_mode;
        Ok(engine)
    }

    pub fn with_game_mode(mut self, game_mode: GameMode) -> Self {
        self.game_mode = game_mode;
        self
    }

    pub fn rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// Speaks `phrase` in the voice of the player's god.
    pub fn god_message(&mut self, phrase: &str) {
        self.messages.god_says(self.player.religion, phrase);
    }

    /// Records a glow lecture for the current turn. Returns false if one
    /// was already given this turn.
    pub(crate) fn note_glowing_lecture(&mut self) -> bool {
        let turn = self.player.num_turns;
        if self.last_glowing_lecture == Some(turn) {
            return false;
        }
        self.last_glowing_lecture = Some(turn);
        true
    }

    /// Resolves a conduct for the worshipped god, then raises any effects
    /// tied to the conduct itself.
    ///
    /// Returns the change applied to the player's standing, or `None` when
    /// the god ignored the conduct, the victim was not one the rule covers,
    /// or the act was forgiven.
    pub fn did_god_conduct(
        &mut self,
        conduct: ConductKind,
        level: i32,
        known: bool,
        victim: Option<&Monster>,
    ) -> Result<Option<PietyChange>, ConductError> {
        if self.game_mode == GameMode::Arena {
            return Err(ConductError::ArenaMode);
        }

        let event = ConductEvent {
            conduct,
            level,
            known,
            victim,
        };
        let change = handle_your_gods_response(self, &event)?;
        self.handle_other_gods_response(conduct);
        Ok(change)
    }

    fn handle_other_gods_response(&mut self, conduct: ConductKind) {
        if let Some(effect) = DivineEffect::for_conduct(conduct) {
            tracing::debug!(?effect, %conduct, "divine effect raised");
            self.effects.push(effect);
        }
    }

    /// Applies `change` to the player's piety and penance.
    pub fn handle_piety_penance(&mut self, change: PietyChange) -> PietyChange {
        let old_piety = self.player.piety;
        self.player.apply_piety_change(&change, &mut self.rng);

        if cfg!(feature = "diagnostics") && should_trace(&change, old_piety, self.player.piety) {
            tracing::debug!(
                target: "conduct::diagnostics",
                "conduct: {}; piety: {} ({:+}/{}); penance: {} ({:+})",
                change.conduct.name(),
                self.player.piety,
                change.piety_change,
                change.piety_denom,
                self.player.current_penance(),
                change.penance
            );
        }

        change
    }
}

/// Exploration is only worth a trace line when piety actually moved.
fn should_trace(change: &PietyChange, old_piety: i32, new_piety: i32) -> bool {
    ((change.piety_change != 0 || change.penance != 0)
        && change.conduct != ConductKind::Exploration)
        || old_piety != new_piety
}
