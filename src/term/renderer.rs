//! TerminalRenderer: flushes a rendered frame to a real terminal.
//!
//! The game only changes in response to key presses, so every draw is a
//! full redraw; there is no frame pacing and nothing to diff.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::view::{Frame, Tone};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut current: Option<Tone> = None;
        for (y, line) in frame.lines.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, y as u16))?;
            for glyph in line {
                if current != Some(glyph.tone) {
                    self.stdout.queue(SetForegroundColor(tone_color(glyph.tone)))?;
                    current = Some(glyph.tone);
                }
                self.stdout.queue(Print(glyph.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Text => Color::White,
        Tone::Dim => Color::DarkGrey,
        Tone::Lit => Color::Yellow,
        Tone::Source => Color::Cyan,
        Tone::BulbDark => Color::DarkGrey,
        Tone::BulbLit => Color::Yellow,
        Tone::Cursor => Color::White,
        Tone::Good => Color::Green,
        Tone::Bad => Color::Red,
    }
}
