//! Resolution Systems
//!
//! Response evaluation, piety multipliers, fallback rules, and the turn
//! boundary system.

pub mod fallback;
pub mod multiplier;
pub mod response;
pub mod turn;

pub use fallback::resolve_fallback;
pub use multiplier::{cheibriados_speed_delta, piety_mult};
pub use response::handle_your_gods_response;
pub use turn::{begin_player_turn, turn_schedule};
