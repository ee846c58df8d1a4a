/// Terminal session that handles raw mode and the alternate screen
use ratatui::DefaultTerminal;
use std::ops::{Deref, DerefMut};

/// Owns the terminal for the lifetime of a game session.
/// Restores the terminal on drop so early returns and `?` leave the shell usable.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn enter() -> Self {
        // ratatui::init also installs a panic hook that restores the terminal
        let terminal = ratatui::init();
        tracing::debug!("terminal initialised");
        Self { terminal }
    }
}

impl Deref for TerminalSession {
    type Target = DefaultTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
        tracing::debug!("terminal restored");
    }
}
