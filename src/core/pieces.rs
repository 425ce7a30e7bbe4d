//! Pieces module - wire piece catalog and the rotation model
//!
//! Each piece kind has a fixed set of conduit openings at rotation 0;
//! everything else about a tile's connectivity is derived by rotating
//! that base array clockwise in quarter turns.

use crate::types::{Openings, PieceKind, Rotation};

/// Base openings at rotation 0, indexed [Up, Right, Down, Left].
pub fn base_openings(kind: PieceKind) -> Openings {
    match kind {
        PieceKind::Straight => [true, false, true, false],
        PieceKind::Elbow => [true, true, false, false],
        PieceKind::Tee => [false, true, true, true],
        PieceKind::Cross => [true, true, true, true],
    }
}

/// Effective openings after rotating the base array clockwise.
///
/// One clockwise step moves the Left opening into the Up slot, so the
/// opening at direction `d` is the base opening at `(d - steps) mod 4`.
/// Four steps always return the base array.
pub fn rotated_openings(kind: PieceKind, rotation: Rotation) -> Openings {
    let base = base_openings(kind);
    let steps = rotation.steps();
    let mut rotated = [false; 4];
    for (d, slot) in rotated.iter_mut().enumerate() {
        *slot = base[(d + 4 - steps) % 4];
    }
    rotated
}
