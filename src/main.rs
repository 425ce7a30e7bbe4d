//! Terminal wire-puzzle runner (default binary).
//!
//! Blocking event loop: draw, wait for a key, apply, repeat. The game
//! mutates only on input, so there is no tick timer.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_circuit::core::{Board, GameSnapshot, GameState};
use tui_circuit::input::{map_key, should_quit};
use tui_circuit::term::{GameView, TerminalRenderer};
use tui_circuit::types::{Direction, GameAction};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(wall_clock_seed());
    game.start()?;

    let view = GameView::default();
    let mut cursor: usize = 0;

    loop {
        let snapshot = GameSnapshot::of(&game);
        let frame = view.render(&snapshot, cursor);
        term.draw(&frame)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            match map_key(key) {
                Some(GameAction::MoveCursor(direction)) => {
                    cursor = step_cursor(game.board(), cursor, direction);
                }
                Some(GameAction::RotateTile) => {
                    game.rotate_tile(cursor);
                }
                Some(GameAction::AdvanceLevel) => {
                    if game.advance_level()? {
                        cursor = 0;
                    }
                }
                None => {}
            }
        }
    }
}

/// Move the cursor one tile, staying on the board.
fn step_cursor(board: Board, cursor: usize, direction: Direction) -> usize {
    board.neighbor(cursor, direction).unwrap_or(cursor)
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u32)
        .unwrap_or(1)
}
