//! Level module - tiles, level descriptors, and the level generator
//!
//! Four handcrafted levels, each a start tile at index 0, one or two bulb
//! tiles, and a randomized interior. Random interior tiles never spawn at
//! rotation 0, so every level needs at least one rotation to solve.
//! Generating past the last level yields `Ok(None)`, the "game finished"
//! signal rather than an error.

use arrayvec::ArrayVec;
use derive_more::{Display, Error};

use crate::core::board::Board;
use crate::core::pieces::rotated_openings;
use crate::core::rng::RandomSource;
use crate::types::{Openings, PieceKind, Rotation, MAX_LEVEL};

/// Most bulbs any level places.
pub const MAX_TARGETS: usize = 2;

/// One grid cell: a wire piece in some orientation.
///
/// `kind` and `index` never change after generation; `rotation` is the
/// only player-mutable field, and only when `fixed` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub index: usize,
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub fixed: bool,
}

impl Tile {
    pub fn new(index: usize, kind: PieceKind, rotation: Rotation, fixed: bool) -> Self {
        Self {
            index,
            kind,
            rotation,
            fixed,
        }
    }

    /// Effective openings for the current rotation.
    pub fn openings(&self) -> Openings {
        rotated_openings(self.kind, self.rotation)
    }
}

/// Immutable per-level descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSpec {
    pub level: u32,
    pub rows: usize,
    pub cols: usize,
    /// Where current originates. Always tile 0 in the shipped levels.
    pub start_index: usize,
    pub target_indices: ArrayVec<usize, MAX_TARGETS>,
    /// Level 1 restricts flow to strictly horizontal movement.
    pub horizontal_only: bool,
}

impl LevelSpec {
    pub fn board(&self) -> Board {
        Board::new(self.rows, self.cols)
    }
}

/// A generated level: descriptor plus the freshly built tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLayout {
    pub spec: LevelSpec,
    pub tiles: Vec<Tile>,
}

/// Generator invariant violations. Fatal: an invalid layout is refused
/// rather than traversed.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    #[display("start index {index} out of bounds for {total} tiles")]
    StartOutOfBounds { index: usize, total: usize },
    #[display("target index {index} collides with the start tile")]
    TargetIsStart { index: usize },
    #[display("target index {index} out of bounds for {total} tiles")]
    TargetOutOfBounds { index: usize, total: usize },
    #[display("duplicate target index {index}")]
    DuplicateTarget { index: usize },
    #[display("level {level} built {built} tiles for a {total}-tile board")]
    TileCountMismatch { level: u32, built: usize, total: usize },
}

/// Build the layout for `level`, or `Ok(None)` once all levels are done.
pub fn generate(
    level: u32,
    rng: &mut impl RandomSource,
) -> Result<Option<LevelLayout>, LevelError> {
    if !(1..=MAX_LEVEL).contains(&level) {
        return Ok(None);
    }
    let layout = match level {
        1 => strip_of_straights(),
        2 => elbow_run(level, 2, 3, rng),
        3 => elbow_run(level, 4, 4, rng),
        _ => twin_bulbs(rng),
    };
    validate(&layout)?;
    Ok(Some(layout))
}

/// Level 1: a 1x4 strip of Straight pieces. The endpoints sit horizontal
/// and locked; the interior spawns vertical, so the player must rotate
/// each middle tile once.
fn strip_of_straights() -> LevelLayout {
    let (rows, cols) = (1, 4);
    let total = rows * cols;
    let last = total - 1;

    let tiles = (0..total)
        .map(|i| {
            let endpoint = i == 0 || i == last;
            let rotation = if endpoint {
                Rotation::Deg90
            } else {
                Rotation::Deg0
            };
            Tile::new(i, PieceKind::Straight, rotation, endpoint)
        })
        .collect();

    LevelLayout {
        spec: LevelSpec {
            level: 1,
            rows,
            cols,
            start_index: 0,
            target_indices: [last].into_iter().collect(),
            horizontal_only: true,
        },
        tiles,
    }
}

/// Levels 2 and 3: fixed Elbow endpoints (start at 90, bulb at 270) with
/// a fully randomized interior.
fn elbow_run(level: u32, rows: usize, cols: usize, rng: &mut impl RandomSource) -> LevelLayout {
    let total = rows * cols;
    let last = total - 1;

    let tiles = (0..total)
        .map(|i| match i {
            0 => Tile::new(i, PieceKind::Elbow, Rotation::Deg90, true),
            _ if i == last => Tile::new(i, PieceKind::Elbow, Rotation::Deg270, true),
            _ => random_tile(i, rng),
        })
        .collect();

    LevelLayout {
        spec: LevelSpec {
            level,
            rows,
            cols,
            start_index: 0,
            target_indices: [last].into_iter().collect(),
            horizontal_only: false,
        },
        tiles,
    }
}

/// Level 4: two bulbs on the right edge (indices 3 and 15). The start and
/// both bulbs are locked in deliberately awkward orientations; the flow
/// has to route through them as they stand.
fn twin_bulbs(rng: &mut impl RandomSource) -> LevelLayout {
    let (rows, cols) = (4, 4);
    let total = rows * cols;
    let last = total - 1;
    let corner = cols - 1;

    let tiles = (0..total)
        .map(|i| match i {
            0 => Tile::new(i, PieceKind::Elbow, Rotation::Deg270, true),
            _ if i == corner => Tile::new(i, PieceKind::Elbow, Rotation::Deg180, true),
            _ if i == last => Tile::new(i, PieceKind::Elbow, Rotation::Deg270, true),
            _ => random_tile(i, rng),
        })
        .collect();

    LevelLayout {
        spec: LevelSpec {
            level: 4,
            rows,
            cols,
            start_index: 0,
            target_indices: [corner, last].into_iter().collect(),
            horizontal_only: false,
        },
        tiles,
    }
}

/// Random movable tile: any kind, rotated at least one quarter turn so it
/// never spawns in its base orientation.
fn random_tile(index: usize, rng: &mut impl RandomSource) -> Tile {
    let kind = PieceKind::ALL[rng.next_range(4) as usize];
    let rotation = [Rotation::Deg90, Rotation::Deg180, Rotation::Deg270]
        [rng.next_range(3) as usize];
    Tile::new(index, kind, rotation, false)
}

fn validate(layout: &LevelLayout) -> Result<(), LevelError> {
    let spec = &layout.spec;
    let total = spec.rows * spec.cols;

    if spec.start_index >= total {
        return Err(LevelError::StartOutOfBounds {
            index: spec.start_index,
            total,
        });
    }
    for (i, &target) in spec.target_indices.iter().enumerate() {
        if target == spec.start_index {
            return Err(LevelError::TargetIsStart { index: target });
        }
        if target >= total {
            return Err(LevelError::TargetOutOfBounds {
                index: target,
                total,
            });
        }
        if spec.target_indices[..i].contains(&target) {
            return Err(LevelError::DuplicateTarget { index: target });
        }
    }
    if layout.tiles.len() != total {
        return Err(LevelError::TileCountMismatch {
            level: spec.level,
            built: layout.tiles.len(),
            total,
        });
    }
    Ok(())
}
