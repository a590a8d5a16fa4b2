//! Role derivation from positions.
//!
//! The backend assigns a user's role from their position; the client only mirrors that
//! for display. Everything that shows a role for a position goes through here.

use super::model::{Position, Role};

/// Role granted by `position`.
#[inline]
pub fn role_for_position(position: &Position) -> Role {
    position.role
}

/// Role for the position with `position_id`, or `fallback` when it is unset or unknown.
pub fn role_for_position_id(positions: &[Position], position_id: Option<u64>, fallback: Role) -> Role {
    position_id
        .and_then(|id| positions.iter().find(|p| p.id == id))
        .map(role_for_position)
        .unwrap_or(fallback)
}
