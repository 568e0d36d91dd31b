//! Engine Components
//!
//! Player standing, the message and effect queues, and per-turn attack state.

pub mod attack;
pub mod effects;
pub mod messages;
pub mod player;

pub use attack::*;
pub use effects::*;
pub use messages::*;
pub use player::*;
