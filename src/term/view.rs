//! GameView: maps a `GameSnapshot` into a grid of styled glyphs.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::GameSnapshot;
use crate::core::{rotated_openings, Phase, Status};
use crate::types::{Direction, Openings};

/// Abstract color roles; the renderer maps them to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Text,
    Dim,
    Lit,
    Source,
    BulbDark,
    BulbLit,
    Cursor,
    Good,
    Bad,
}

/// A single styled character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub tone: Tone,
}

impl Glyph {
    pub fn new(ch: char, tone: Tone) -> Self {
        Self { ch, tone }
    }

    fn blank() -> Self {
        Self::new(' ', Tone::Text)
    }
}

/// One rendered frame: rows of glyphs, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<Vec<Glyph>>,
}

/// Terminal columns per tile.
pub const TILE_W: usize = 7;
/// Terminal rows per tile.
pub const TILE_H: usize = 3;

/// Renders snapshots into frames. Stateless apart from its metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the snapshot with the cursor on the given tile.
    pub fn render(&self, snap: &GameSnapshot, cursor: usize) -> Frame {
        let mut lines = Vec::new();

        lines.push(text_line(&header_text(snap), Tone::Text));
        lines.push(Vec::new());

        let grid_rows = snap.rows * TILE_H;
        let grid_cols = snap.cols * TILE_W;
        let mut grid = vec![vec![Glyph::blank(); grid_cols]; grid_rows];
        for tile in &snap.tiles {
            self.draw_tile(snap, tile.index, &mut grid);
        }
        if snap.phase != Phase::AllComplete && snap.tiles.len() > cursor {
            self.draw_cursor(snap, cursor, &mut grid);
        }
        lines.extend(grid);

        lines.push(Vec::new());
        let (status, tone) = status_text(&snap.status);
        lines.push(text_line(&status, tone));
        lines.push(text_line(
            "arrows/hjkl move · space rotates · n next level · q quits",
            Tone::Dim,
        ));

        Frame { lines }
    }

    fn draw_tile(&self, snap: &GameSnapshot, index: usize, grid: &mut [Vec<Glyph>]) {
        let tile = &snap.tiles[index];
        let lit = snap.lit_tiles.contains(index);
        let origin_y = (index / snap.cols) * TILE_H;
        let origin_x = (index % snap.cols) * TILE_W;
        let (cx, cy) = (origin_x + TILE_W / 2, origin_y + TILE_H / 2);

        // The source and the bulbs hide their wiring; the player reads
        // them by what lights up.
        if index == snap.start_index {
            grid[cy][cx] = Glyph::new('S', Tone::Source);
            return;
        }
        if snap.is_target(index) {
            let glyph = if snap.lit_targets.contains(index) {
                Glyph::new('◉', Tone::BulbLit)
            } else {
                Glyph::new('◯', Tone::BulbDark)
            };
            grid[cy][cx] = glyph;
            return;
        }

        let openings = rotated_openings(tile.kind, tile.rotation);
        let tone = if lit { Tone::Lit } else { Tone::Dim };

        if openings[Direction::Left.index()] {
            for x in origin_x..cx {
                grid[cy][x] = Glyph::new('─', tone);
            }
        }
        if openings[Direction::Right.index()] {
            for x in cx + 1..origin_x + TILE_W {
                grid[cy][x] = Glyph::new('─', tone);
            }
        }
        if openings[Direction::Up.index()] {
            grid[origin_y][cx] = Glyph::new('│', tone);
        }
        if openings[Direction::Down.index()] {
            grid[origin_y + TILE_H - 1][cx] = Glyph::new('│', tone);
        }
        grid[cy][cx] = Glyph::new(joint_glyph(openings), tone);
    }

    fn draw_cursor(&self, snap: &GameSnapshot, cursor: usize, grid: &mut [Vec<Glyph>]) {
        let origin_y = (cursor / snap.cols) * TILE_H;
        let origin_x = (cursor % snap.cols) * TILE_W;
        let (right, bottom) = (origin_x + TILE_W - 1, origin_y + TILE_H - 1);

        grid[origin_y][origin_x] = Glyph::new('┌', Tone::Cursor);
        grid[origin_y][right] = Glyph::new('┐', Tone::Cursor);
        grid[bottom][origin_x] = Glyph::new('└', Tone::Cursor);
        grid[bottom][right] = Glyph::new('┘', Tone::Cursor);
    }
}

/// Box-drawing joint for a set of openings [Up, Right, Down, Left].
fn joint_glyph(openings: Openings) -> char {
    match openings {
        [true, false, true, false] => '│',
        [false, true, false, true] => '─',
        [true, true, false, false] => '└',
        [false, true, true, false] => '┌',
        [false, false, true, true] => '┐',
        [true, false, false, true] => '┘',
        [true, true, true, false] => '├',
        [false, true, true, true] => '┬',
        [true, false, true, true] => '┤',
        [true, true, false, true] => '┴',
        [true, true, true, true] => '┼',
        _ => '·',
    }
}

fn header_text(snap: &GameSnapshot) -> String {
    match snap.phase {
        Phase::AllComplete => "All challenges solved! Thanks for playing.".to_string(),
        _ => match snap.prompt {
            Status::Prompt { level, rows, cols } => {
                format!("Level {level} ({rows}x{cols}): light every bulb")
            }
            _ => String::new(),
        },
    }
}

fn status_text(status: &Status) -> (String, Tone) {
    match status {
        Status::Prompt { level, rows, cols } => {
            (format!("Level {level} ({rows}x{cols})"), Tone::Text)
        }
        Status::Incorrect => ("Incorrect connection!".to_string(), Tone::Bad),
        Status::Solved { level } => (
            format!("Level {level} solved! Press n for the next one."),
            Tone::Good,
        ),
        Status::AllSolved => (
            "All levels solved! Every bulb is lit.".to_string(),
            Tone::Good,
        ),
    }
}

fn text_line(text: &str, tone: Tone) -> Vec<Glyph> {
    text.chars().map(|ch| Glyph::new(ch, tone)).collect()
}
