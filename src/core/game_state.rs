//! Game state module - the controller state machine
//!
//! Owns the single live game: current level, board, tiles, and the last
//! flow result. Player input arrives as rotate and advance requests; the
//! controller validates them, mutates tile state, and re-runs the flow
//! engine after every mutation so the phase is never derived from a
//! stale traversal.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::flow::{evaluate, FlowResult};
use crate::core::level::{generate, LevelError, Tile, MAX_TARGETS};
use crate::core::rng::SimpleRng;
use crate::types::MAX_LEVEL;

/// Where the game currently rests.
///
/// Level loads are synchronous and atomic, so there is no observable
/// "loading" phase: a load request lands directly in `Playing` (or
/// `LevelCleared`, if the random spawn happens to connect, or
/// `AllComplete` past the last level).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    LevelCleared,
    AllComplete,
}

/// Status semantics for the presentation layer to turn into strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Level banner with grid dimensions.
    Prompt { level: u32, rows: usize, cols: usize },
    /// Some bulb is still dark.
    Incorrect,
    /// Every bulb on this level is lit.
    Solved { level: u32 },
    /// The last level cleared; nothing left to play.
    AllSolved,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    rng: SimpleRng,
    level: u32,
    board: Board,
    tiles: Vec<Tile>,
    start_index: usize,
    target_indices: ArrayVec<usize, MAX_TARGETS>,
    horizontal_only: bool,
    flow: FlowResult,
    phase: Phase,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            level: 0,
            board: Board::new(0, 0),
            tiles: Vec::new(),
            start_index: 0,
            target_indices: ArrayVec::new(),
            horizontal_only: false,
            flow: FlowResult::default(),
            phase: Phase::Playing,
            started: false,
        }
    }

    /// Start the game on level 1.
    pub fn start(&mut self) -> Result<(), LevelError> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        self.load_level(1)
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn target_indices(&self) -> &[usize] {
        &self.target_indices
    }

    pub fn flow(&self) -> &FlowResult {
        &self.flow
    }

    /// Level banner for the presentation layer.
    pub fn prompt(&self) -> Status {
        Status::Prompt {
            level: self.level,
            rows: self.board.rows(),
            cols: self.board.cols(),
        }
    }

    /// Current status message.
    pub fn status(&self) -> Status {
        match self.phase {
            Phase::Playing => Status::Incorrect,
            Phase::LevelCleared if self.level < MAX_LEVEL => Status::Solved { level: self.level },
            Phase::LevelCleared | Phase::AllComplete => Status::AllSolved,
        }
    }

    /// Rotate request from the presentation layer.
    ///
    /// Applies one clockwise quarter turn and re-evaluates the flow.
    /// Returns false (and changes nothing) for an out-of-range index, a
    /// fixed tile, or any phase other than `Playing`.
    pub fn rotate_tile(&mut self, index: usize) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let Some(tile) = self.tiles.get_mut(index) else {
            return false;
        };
        if tile.fixed {
            return false;
        }

        tile.rotation = tile.rotation.rotate_cw();
        self.reevaluate();
        true
    }

    /// Advance request from the presentation layer.
    ///
    /// Valid only in `LevelCleared`; loading past the last level lands in
    /// `AllComplete`. Returns whether the request was accepted.
    pub fn advance_level(&mut self) -> Result<bool, LevelError> {
        if self.phase != Phase::LevelCleared {
            return Ok(false);
        }
        self.load_level(self.level + 1)?;
        Ok(true)
    }

    /// Replace the whole board with a freshly generated level.
    ///
    /// Past the last level this keeps the old tiles on display and parks
    /// the game in `AllComplete`.
    fn load_level(&mut self, level: u32) -> Result<(), LevelError> {
        let Some(layout) = generate(level, &mut self.rng)? else {
            self.level = level;
            self.phase = Phase::AllComplete;
            return Ok(());
        };

        self.level = layout.spec.level;
        self.board = layout.spec.board();
        self.start_index = layout.spec.start_index;
        self.target_indices = layout.spec.target_indices.clone();
        self.horizontal_only = layout.spec.horizontal_only;
        self.tiles = layout.tiles;
        self.reevaluate();
        Ok(())
    }

    /// Re-run the flow engine and settle the phase from the result.
    fn reevaluate(&mut self) {
        self.flow = evaluate(
            &self.board,
            &self.tiles,
            self.start_index,
            &self.target_indices,
            self.horizontal_only,
        );
        self.phase = if self.flow.all_targets_lit(&self.target_indices) {
            Phase::LevelCleared
        } else {
            Phase::Playing
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Rotation};

    fn started(seed: u32) -> GameState {
        let mut game = GameState::new(seed);
        game.start().unwrap();
        game
    }

    #[test]
    fn test_start_loads_level_1_dark() {
        let game = started(1);
        assert_eq!(game.level(), 1);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.status(), Status::Incorrect);
        assert_eq!(game.tiles().len(), 4);
        // Only the start tile carries current.
        assert_eq!(game.flow().lit_tiles.len(), 1);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut game = started(1);
        game.rotate_tile(1);
        game.start().unwrap();
        // A second start must not rebuild the board.
        assert_eq!(game.tiles()[1].rotation, Rotation::Deg90);
    }

    #[test]
    fn test_level_1_walkthrough() {
        let mut game = started(1);

        // Rotate the two interior straights from vertical to horizontal.
        assert!(game.rotate_tile(1));
        assert_eq!(game.phase(), Phase::Playing);
        assert!(game.rotate_tile(2));

        assert_eq!(game.phase(), Phase::LevelCleared);
        assert_eq!(game.status(), Status::Solved { level: 1 });
        assert!(game.flow().lit_targets.contains(3));
    }

    #[test]
    fn test_rotate_fixed_tile_is_a_noop() {
        let mut game = started(1);
        let before = game.tiles()[0];
        let flow_before = *game.flow();

        assert!(!game.rotate_tile(0));
        assert_eq!(game.tiles()[0], before);
        assert_eq!(*game.flow(), flow_before);
    }

    #[test]
    fn test_rotate_out_of_range_is_a_noop() {
        let mut game = started(1);
        assert!(!game.rotate_tile(99));
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_rotate_while_cleared_is_a_noop() {
        let mut game = started(1);
        game.rotate_tile(1);
        game.rotate_tile(2);
        assert_eq!(game.phase(), Phase::LevelCleared);

        assert!(!game.rotate_tile(1));
        assert_eq!(game.tiles()[1].rotation, Rotation::Deg90);
    }

    #[test]
    fn test_advance_while_playing_is_a_noop() {
        let mut game = started(1);
        assert!(!game.advance_level().unwrap());
        assert_eq!(game.level(), 1);
    }

    #[test]
    fn test_advance_moves_to_level_2() {
        let mut game = started(1);
        game.rotate_tile(1);
        game.rotate_tile(2);

        assert!(game.advance_level().unwrap());
        assert_eq!(game.level(), 2);
        assert_eq!(game.board().rows(), 2);
        assert_eq!(game.board().cols(), 3);
        assert_eq!(game.tiles().len(), 6);
    }

    /// Force-solve the current randomized level by rewriting every
    /// movable tile to a Cross; one rotation then reconnects everything.
    fn solve_randomized_level(game: &mut GameState) {
        for tile in &mut game.tiles {
            if !tile.fixed {
                tile.kind = PieceKind::Cross;
                tile.rotation = Rotation::Deg0;
            }
        }
        // Any movable rotation triggers the re-evaluation (a Cross is
        // rotation-invariant, so connectivity is unaffected).
        let movable = game.tiles.iter().find(|t| !t.fixed).unwrap().index;
        game.rotate_tile(movable);
    }

    #[test]
    fn test_cross_fill_clears_levels_2_and_3() {
        let mut game = started(5);
        game.rotate_tile(1);
        game.rotate_tile(2);
        game.advance_level().unwrap();

        // Level 2: start Elbow@90 opens Right+Down, bulb Elbow@270 opens
        // Up+Left; a Cross interior connects them.
        solve_randomized_level(&mut game);
        assert_eq!(game.phase(), Phase::LevelCleared);

        game.advance_level().unwrap();
        assert_eq!(game.level(), 3);
        solve_randomized_level(&mut game);
        assert_eq!(game.phase(), Phase::LevelCleared);
    }

    #[test]
    fn test_level_4_needs_both_bulbs() {
        let mut game = started(5);
        game.rotate_tile(1);
        game.rotate_tile(2);
        game.advance_level().unwrap();
        solve_randomized_level(&mut game);
        game.advance_level().unwrap();
        solve_randomized_level(&mut game);
        game.advance_level().unwrap();
        assert_eq!(game.level(), 4);

        // Level 4's start is an Elbow at 270 (opens Up+Left): even with a
        // Cross interior nothing seeds, so no bulb can light.
        solve_randomized_level(&mut game);
        assert_eq!(game.phase(), Phase::Playing);
        assert!(game.flow().lit_tiles.is_empty());

        // Unlock the special tiles into a connectable orientation; with
        // both bulbs reachable the level clears in one evaluation.
        for tile in &mut game.tiles {
            tile.kind = PieceKind::Cross;
            tile.fixed = false;
        }
        let reachable_both = {
            game.rotate_tile(0);
            game.phase() == Phase::LevelCleared
        };
        assert!(reachable_both);
        assert_eq!(game.status(), Status::AllSolved);
        assert_eq!(game.flow().lit_targets.len(), 2);
    }

    #[test]
    fn test_partial_level_4_stays_playing() {
        let mut game = started(5);
        game.rotate_tile(1);
        game.rotate_tile(2);
        game.advance_level().unwrap();
        solve_randomized_level(&mut game);
        game.advance_level().unwrap();
        solve_randomized_level(&mut game);
        game.advance_level().unwrap();

        // Hand-build a path that reaches bulb 3 but not bulb 15: a top
        // row of crosses, and horizontal straights below it that refuse
        // every vertical entry.
        for tile in &mut game.tiles {
            tile.fixed = false;
            if tile.index < 4 {
                tile.kind = PieceKind::Cross;
                tile.rotation = Rotation::Deg0;
            } else {
                tile.kind = PieceKind::Straight;
                tile.rotation = Rotation::Deg90;
            }
        }
        game.rotate_tile(0);

        assert!(game.flow().lit_targets.contains(3));
        assert!(!game.flow().lit_targets.contains(15));
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.status(), Status::Incorrect);
    }

    #[test]
    fn test_advance_past_level_4_completes_the_game() {
        let mut game = started(5);
        game.rotate_tile(1);
        game.rotate_tile(2);
        game.advance_level().unwrap();
        solve_randomized_level(&mut game);
        game.advance_level().unwrap();
        solve_randomized_level(&mut game);
        game.advance_level().unwrap();

        for tile in &mut game.tiles {
            tile.kind = PieceKind::Cross;
            tile.fixed = false;
        }
        game.rotate_tile(0);
        assert_eq!(game.phase(), Phase::LevelCleared);

        let old_tiles = game.tiles().to_vec();
        assert!(game.advance_level().unwrap());
        assert_eq!(game.phase(), Phase::AllComplete);
        assert_eq!(game.status(), Status::AllSolved);
        // The final board stays on display.
        assert_eq!(game.tiles(), old_tiles.as_slice());

        // Terminal: nothing moves anymore.
        assert!(!game.advance_level().unwrap());
        assert!(!game.rotate_tile(0));
    }

    #[test]
    fn test_reevaluates_after_every_rotation() {
        let mut game = started(1);
        game.rotate_tile(1);
        game.rotate_tile(2);
        assert_eq!(game.phase(), Phase::LevelCleared);

        // No stale cache: the cleared phase came from a fresh traversal.
        assert_eq!(game.flow().lit_tiles.len(), 4);
    }

    #[test]
    fn test_prompt_carries_grid_dimensions() {
        let game = started(1);
        assert_eq!(
            game.prompt(),
            Status::Prompt {
                level: 1,
                rows: 1,
                cols: 4
            }
        );
    }
}
