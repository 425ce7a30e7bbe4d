//! Read-only snapshot of the game for the presentation layer.
//!
//! The terminal view renders from this, never from live core state.

use arrayvec::ArrayVec;

use crate::core::game_state::{GameState, Phase, Status};
use crate::core::level::{Tile, MAX_TARGETS};
use crate::types::{PieceKind, Rotation, TileSet, MAX_TILES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSnapshot {
    pub index: usize,
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub fixed: bool,
}

impl From<&Tile> for TileSnapshot {
    fn from(tile: &Tile) -> Self {
        Self {
            index: tile.index,
            kind: tile.kind,
            rotation: tile.rotation,
            fixed: tile.fixed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub level: u32,
    pub rows: usize,
    pub cols: usize,
    pub start_index: usize,
    pub target_indices: ArrayVec<usize, MAX_TARGETS>,
    pub tiles: ArrayVec<TileSnapshot, MAX_TILES>,
    pub lit_tiles: TileSet,
    pub lit_targets: TileSet,
    pub phase: Phase,
    pub prompt: Status,
    pub status: Status,
}

impl GameSnapshot {
    pub fn of(game: &GameState) -> Self {
        let board = game.board();
        Self {
            level: game.level(),
            rows: board.rows(),
            cols: board.cols(),
            start_index: game.start_index(),
            target_indices: game.target_indices().iter().copied().collect(),
            tiles: game.tiles().iter().map(TileSnapshot::from).collect(),
            lit_tiles: game.flow().lit_tiles,
            lit_targets: game.flow().lit_targets,
            phase: game.phase(),
            prompt: game.prompt(),
            status: game.status(),
        }
    }

    pub fn total_tiles(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_target(&self, index: usize) -> bool {
        self.target_indices.contains(&index)
    }
}
