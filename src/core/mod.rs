//! Core module - pure game logic with no terminal dependencies
//!
//! Everything here is deterministic given a seed and synchronous:
//! levels, tiles, flow evaluation, and the controller state machine.

pub mod board;
pub mod flow;
pub mod game_state;
pub mod level;
pub mod pieces;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use flow::{evaluate, FlowResult};
pub use game_state::{GameState, Phase, Status};
pub use level::{generate, LevelError, LevelLayout, LevelSpec, Tile};
pub use pieces::{base_openings, rotated_openings};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::{GameSnapshot, TileSnapshot};
