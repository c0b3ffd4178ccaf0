//! TerminalRenderer: draws the merged view to a real terminal.
//!
//! Full redraw per frame via queued crossterm commands. The board area is
//! small enough that diffing is not worth the bookkeeping here.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::GameState;
use crate::term::game_view::{merged_grid, status_lines};
use crate::types::{ColorTag, BOARD_WIDTH};

/// Each board cell is drawn two columns wide
const CELL: &str = "[]";
const EMPTY: &str = " .";

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Enter raw mode on the alternate screen
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame of the game
    pub fn draw(&mut self, state: &GameState) -> Result<()> {
        let grid = merged_grid(state);
        let status = status_lines(state);
        let inner_width = BOARD_WIDTH as usize * CELL.len();

        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(ResetColor)?;
        self.stdout
            .queue(Print(format!("+{}+", "-".repeat(inner_width))))?;

        for (y, row) in grid.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, y as u16 + 1))?;
            self.stdout.queue(ResetColor)?;
            self.stdout.queue(Print("|"))?;
            for cell in row {
                match cell {
                    Some(tag) => {
                        self.stdout.queue(SetForegroundColor(color_for(*tag)))?;
                        self.stdout.queue(Print(CELL))?;
                    }
                    None => {
                        self.stdout.queue(ResetColor)?;
                        self.stdout.queue(Print(EMPTY))?;
                    }
                }
            }
            self.stdout.queue(ResetColor)?;
            self.stdout.queue(Print("|"))?;
        }

        let bottom = grid.len() as u16 + 1;
        self.stdout.queue(cursor::MoveTo(0, bottom))?;
        self.stdout
            .queue(Print(format!("+{}+", "-".repeat(inner_width))))?;

        // Sidebar to the right of the well.
        let sidebar_x = (inner_width + 4) as u16;
        for (i, line) in status.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(sidebar_x, i as u16 + 1))?;
            self.stdout.queue(Print(line))?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal color for a cell's color tag
fn color_for(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Cyan => Color::Cyan,
        ColorTag::Yellow => Color::Yellow,
        ColorTag::Purple => Color::Magenta,
        ColorTag::Green => Color::Green,
        ColorTag::Red => Color::Red,
        ColorTag::Blue => Color::Blue,
        ColorTag::Orange => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
    }
}
