//! Terminal wire-rotation puzzle ("light the tree").
//!
//! A grid of rotatable pipe tiles must be oriented so that current from
//! the source tile reaches every bulb. The crate splits into a pure,
//! deterministic core and a thin terminal frontend:
//!
//! - [`core`]: piece catalog, rotation model, level generator, flow
//!   engine, and the controller state machine
//! - [`term`]: snapshot rendering and the crossterm-backed terminal
//! - [`input`]: key to action mapping
//! - [`types`]: shared pure data types

pub mod core;
pub mod input;
pub mod term;
pub mod types;
