//! Flow module - propagates current through the wire grid
//!
//! Breadth-first traversal from the start tile. Current crosses an edge
//! only when both tiles open onto it: the exit side of the current tile
//! and the matching entry side of the neighbor. A tile never feeds
//! current back out of the side it was entered from.
//!
//! Pure and allocation-free: the queue is a fixed-capacity buffer with a
//! head cursor, and each tile is enqueued at most once.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::level::Tile;
use crate::types::{Direction, TileSet, MAX_TILES};

/// Outcome of one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowResult {
    /// Every tile reached by current.
    pub lit_tiles: TileSet,
    /// The subset of target tiles reached by current.
    pub lit_targets: TileSet,
}

impl FlowResult {
    /// True when every target in `targets` is lit.
    pub fn all_targets_lit(&self, targets: &[usize]) -> bool {
        self.lit_targets.len() == targets.len()
    }
}

/// Trace current from `start_index` and report lit tiles and targets.
///
/// Current arrives at the start tile from its upper-left, so the
/// traversal begins only if the start tile opens Right or Down, and its
/// entry port is Left. With `horizontal_only` set, current never exits a
/// tile vertically no matter which openings exist (the level-1 strip
/// rule).
pub fn evaluate(
    board: &Board,
    tiles: &[Tile],
    start_index: usize,
    targets: &[usize],
    horizontal_only: bool,
) -> FlowResult {
    let mut result = FlowResult::default();
    debug_assert!(tiles.len() <= MAX_TILES);
    if !board.contains(start_index) || start_index >= tiles.len() {
        return result;
    }

    let mut queue: ArrayVec<(usize, Direction), MAX_TILES> = ArrayVec::new();
    let mut head = 0;

    let start_openings = tiles[start_index].openings();
    if start_openings[Direction::Right.index()] || start_openings[Direction::Down.index()] {
        queue.push((start_index, Direction::Left));
        result.lit_tiles.insert(start_index);
    }

    while head < queue.len() {
        let (index, entry_port) = queue[head];
        head += 1;

        if targets.contains(&index) {
            result.lit_targets.insert(index);
        }

        let openings = tiles[index].openings();
        for exit in Direction::ALL {
            if exit == entry_port || !openings[exit.index()] {
                continue;
            }
            if horizontal_only && exit.is_vertical() {
                continue;
            }
            let Some(neighbor) = board.neighbor(index, exit) else {
                continue;
            };
            let neighbor_entry = exit.opposite();
            if !tiles[neighbor].openings()[neighbor_entry.index()] {
                continue;
            }
            if !result.lit_tiles.contains(neighbor) {
                result.lit_tiles.insert(neighbor);
                queue.push((neighbor, neighbor_entry));
            }
        }
    }

    result
}
