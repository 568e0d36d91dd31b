//! Response Registry
//!
//! Static per-deity tables of the conducts each god dislikes and likes.

pub mod dislikes;
pub mod filters;
pub mod likes;

pub use dislikes::{DislikeResponse, DIVINE_PEEVES};
pub use filters::{fedhas_protects, god_hates_attacking_friend, VictimFilter};
pub use likes::{LikeResponse, DIVINE_LIKES};

use conduct_types::{ConductKind, DeityId};

use crate::error::ConductError;

/// The dislike `deity` holds for `conduct`, if any.
pub fn dislike_response(deity: DeityId, conduct: ConductKind) -> Option<&'static DislikeResponse> {
    DIVINE_PEEVES[deity.index()]
        .iter()
        .find(|(kind, _)| *kind == conduct)
        .map(|(_, response)| response)
}

/// The like `deity` holds for `conduct`, if any.
pub fn like_response(deity: DeityId, conduct: ConductKind) -> Option<&'static LikeResponse> {
    DIVINE_LIKES[deity.index()]
        .iter()
        .find(|(kind, _)| *kind == conduct)
        .map(|(_, response)| response)
}

/// Checks that no deity lists a conduct twice in one table.
///
/// A conduct in both of a deity's tables is allowed and only logged: the
/// dislike is looked up first and applies.
pub fn validate_response_tables() -> Result<(), ConductError> {
    for &deity in DeityId::all() {
        let peeves = DIVINE_PEEVES[deity.index()];
        let likes = DIVINE_LIKES[deity.index()];

        check_unique(deity, peeves.iter().map(|(kind, _)| *kind), "dislike")?;
        check_unique(deity, likes.iter().map(|(kind, _)| *kind), "like")?;

        for conduct in overlapping_conducts(peeves, likes) {
            tracing::warn!(%deity, %conduct, "conduct is both liked and disliked; the dislike applies");
        }
    }
    Ok(())
}

/// Conducts present in both a dislike and a like table, in like-table order.
pub fn overlapping_conducts(
    peeves: &[(ConductKind, DislikeResponse)],
    likes: &[(ConductKind, LikeResponse)],
) -> Vec<ConductKind> {
    likes
        .iter()
        .map(|(kind, _)| *kind)
        .filter(|kind| peeves.iter().any(|(peeve, _)| peeve == kind))
        .collect()
}

fn check_unique(
    deity: DeityId,
    kinds: impl Iterator<Item = ConductKind>,
    table: &'static str,
) -> Result<(), ConductError> {
    let mut seen = [false; ConductKind::COUNT];
    for conduct in kinds {
        if std::mem::replace(&mut seen[conduct.index()], true) {
            return Err(ConductError::DuplicateResponse {
                deity,
                conduct,
                table,
            });
        }
    }
    Ok(())
}
