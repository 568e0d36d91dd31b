//! God conduct resolution: piety, penance, and divine messages in response
//! to what the player does.

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod random;
pub mod responses;
pub mod scenario;
pub mod systems;
pub mod trigger;

pub use components::{AttackConductTracker, PlayerState, StabType};
pub use config::{ConductConfig, ConfigError};
pub use engine::{ConductEvent, GameMode, GodConduct};
pub use error::ConductError;
pub use scenario::{run_scenario, Scenario, ScenarioError, ScenarioReport};
pub use trigger::{ConductSink, ConductTrigger, EngineSink};
