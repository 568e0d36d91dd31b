//! Shared conduct, deity and victim types for god-conduct resolution.
//!
//! This crate contains pure data structures with no resolution logic.
//! It is a dependency for all other crates in the workspace.

pub mod conduct;
pub mod deity;
pub mod monster;
pub mod piety;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

pub use conduct::ConductKind;
pub use deity::DeityId;
pub use monster::{Attitude, Genus, Holiness, Intelligence, Monster, MonsterFlags};
pub use piety::{GodMessage, PietyChange};
