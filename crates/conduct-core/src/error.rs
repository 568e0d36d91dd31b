//! Conduct Errors
//!
//! Conditions that indicate a caller bug rather than an in-game outcome.

use conduct_types::{ConductKind, DeityId};
use thiserror::Error;

/// Errors raised while resolving conducts or validating the response tables.
#[derive(Debug, Error)]
pub enum ConductError {
    #[error("god conduct resolved during an arena game")]
    ArenaMode,

    #[error("player property `{0}` is missing")]
    MissingProperty(&'static str),

    #[error("player property `{0}` has the wrong type")]
    PropertyType(&'static str),

    #[error("{deity} lists `{conduct}` more than once in its {table} table")]
    DuplicateResponse {
        deity: DeityId,
        conduct: ConductKind,
        table: &'static str,
    },

    #[error("monster slot {index} is outside the attack tracker ({capacity} slots)")]
    MonsterIndexOutOfRange { index: usize, capacity: usize },
}
