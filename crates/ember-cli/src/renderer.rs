//! Terminal rendering module for rich markdown output
//!
//! Uses termimad for rich markdown display with a plain text fallback.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{
    crossterm::{
        cursor::MoveTo,
        execute,
        style::Color,
        terminal::{Clear, ClearType},
    },
    MadSkin,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::DarkYellow);
        skin.bold.set_fg(Color::Red);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks so cards stay easy to scan
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[33m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Clears the screen before a fresh board in `watch`.
    ///
    /// Plain output never clears, so a piped `watch` keeps every snapshot.
    pub fn clear_screen(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        if self.rich_enabled {
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        } else {
            writeln!(stdout, "---")?;
        }
        stdout.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        renderer.render("# 1. Read\n").unwrap();
    }

    #[test]
    fn test_plain_clear_screen_succeeds() {
        let renderer = TerminalRenderer::new(false);
        assert!(renderer.clear_screen().is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
