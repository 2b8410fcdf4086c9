use crate::Coords;
use std::{convert::TryFrom, io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

pub struct TermManager {
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), active: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("raw input mode is unavailable")?;
        self.active = true;
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide, cursor::DisableBlinking)
            .context("failed to enter the alternate screen")?;
        Ok(())
    }

    /// Puts the terminal back into normal mode. Safe to call more than once.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("failed to leave the alternate screen")?;
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        Ok(())
    }

    pub fn get_terminal_size(&self) -> Result<Coords> {
        let (w, h) = terminal::size().context("failed to read the terminal size")?;
        Ok((clamp_size(w), clamp_size(h)))
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    /// Drains every key event already buffered without waiting.
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn discard_pending_keys(&self) -> Result<()> {
        self.read_key_events_queue().map(|_| ())
    }

    /// Overwrites the screen from the top-left corner with `lines`.
    ///
    /// Each row is cleared to its end and everything below the frame is
    /// erased, so no trace of the previous frame is left.
    pub fn draw_frame(&mut self, lines: &[String]) -> Result<()> {
        for (y, line) in lines.iter().enumerate() {
            queue!(
                self.stdout,
                cursor::MoveTo(0, y as u16),
                style::Print(line),
                terminal::Clear(ClearType::UntilNewLine)
            )?;
        }
        queue!(
            self.stdout,
            cursor::MoveTo(0, lines.len() as u16),
            terminal::Clear(ClearType::FromCursorDown)
        )?;
        self.flush()
    }

    /// Prints `lines` starting at row `top`, leaving the rest of the screen alone.
    pub fn show_message(&mut self, top: u16, lines: &[String]) -> Result<()> {
        for (i, line) in lines.iter().enumerate() {
            queue!(
                self.stdout,
                cursor::MoveTo(0, top + i as u16),
                style::Print(line),
                terminal::Clear(ClearType::UntilNewLine)
            )?;
        }
        self.flush()
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
            .context("failed to clear the screen")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("failed to flush stdout")?;
        Ok(())
    }
}

/// Terminal extents beyond the board coordinate range saturate.
fn clamp_size(n: u16) -> i16 {
    i16::try_from(n).unwrap_or(i16::MAX)
}

impl Drop for TermManager {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
