use std::io::{self, Stdout, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};

use crate::errors::ViewerError;
use crate::traits::Surface;

/// Puts the terminal into full-screen mode for as long as it is alive.
///
/// Entering enables raw mode, switches to the alternate screen and hides the
/// cursor. Dropping the guard undoes all three.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> Result<Self, ViewerError> {
        terminal::enable_raw_mode().map_err(ViewerError::Terminal)?;
        let guard = TerminalGuard { _private: () };
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
        .map_err(ViewerError::Terminal)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, terminal::LeaveAlternateScreen, cursor::Show) {
            log::warn!("Error leaving the alternate screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Error disabling raw mode: {}", e);
        }
    }
}

/// [`Surface`] backed by stdout, drawn with queued crossterm commands.
pub struct TerminalSurface {
    stdout: Stdout,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }

    fn clear_from(&mut self, row: u16) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::FromCursorDown)
        )
    }

    fn put_line(&mut self, row: u16, text: &str) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(0, row),
            Print(text),
            terminal::Clear(ClearType::UntilNewLine)
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

/// Whether a key event asks to leave: `q` or Esc, on press only.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
}
