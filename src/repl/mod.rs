//! Interactive terminal front-end for jnav
//!
//! This module provides the full-screen explorer:
//! - Raw-mode terminal handling on stderr, so stdout stays free for the result
//! - Key bindings mapped onto explorer operations
//! - Scrolling of the contents pane
//! - Redraw of prompt, completions and contents after every event

pub mod keymap;
pub mod prompt;
pub mod render;
pub mod viewport;

use std::io::{self, Stderr};

use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use serde_json::Value;
use tracing::debug;

use crate::error::{JnavError, Result};
use crate::explorer::{Accept, Explorer};

pub use keymap::{Action, action_for};
pub use prompt::{PROMPT, QueryPrompt};
pub use render::{Contents, Renderer};
pub use viewport::Viewport;

/// Outcome of one action
#[derive(Debug, PartialEq)]
pub enum Step<'a> {
    /// Keep running the loop
    Continue,
    /// Enter was pressed with nothing to complete
    Done(Option<&'a Value>),
    /// Ctrl-C
    Abort,
}

/// Raw mode and alternate screen, restored on drop
struct TerminalGuard {
    out: Stderr,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = Self { out: io::stderr() };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Interactive explorer session on a terminal
#[derive(Debug)]
pub struct ExplorerUi {
    renderer: Renderer,
    viewport: Viewport,
}

impl ExplorerUi {
    /// Create a new front-end
    ///
    /// # Arguments
    /// * `use_colors` - Whether to style the screen
    ///
    /// # Returns
    /// * `Self` - New front-end
    pub fn new(use_colors: bool) -> Self {
        Self {
            renderer: Renderer::new(use_colors),
            viewport: Viewport::new(),
        }
    }

    /// Run the event loop until the user accepts a node or aborts
    ///
    /// # Arguments
    /// * `explorer` - Session to drive
    ///
    /// # Returns
    /// * `Result<Option<&Value>>` - Selected node, `None` for "no results"
    pub fn run<'a>(&mut self, explorer: &mut Explorer<'a, Value>) -> Result<Option<&'a Value>> {
        let mut guard = TerminalGuard::enter()?;
        debug!("entered interactive mode");
        self.redraw(&mut guard.out, explorer)?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    let Some(action) = action_for(key) else {
                        continue;
                    };
                    let (_, height) = terminal::size()?;
                    match self.apply(explorer, action, height as usize) {
                        Step::Continue => {}
                        Step::Done(node) => return Ok(node),
                        Step::Abort => return Err(JnavError::Interrupted),
                    }
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                }
                _ => continue,
            }
            self.redraw(&mut guard.out, explorer)?;
        }
    }

    /// Apply one action to the explorer and the viewport
    ///
    /// The viewport returns to the top whenever the query changes.
    ///
    /// # Arguments
    /// * `explorer` - Session to update
    /// * `action` - Action from the key map
    /// * `window_height` - Terminal height in rows
    ///
    /// # Returns
    /// * `Step` - Whether the loop continues
    pub fn apply<'a>(
        &mut self,
        explorer: &mut Explorer<'a, Value>,
        action: Action,
        window_height: usize,
    ) -> Step<'a> {
        let before = explorer.query().raw().to_string();

        match action {
            Action::Insert(ch) => explorer.insert_char(ch),
            Action::DeleteChar => explorer.delete_char(),
            Action::DeleteBeforeCursor => explorer.delete_before_cursor(),
            Action::DeleteAfterCursor => explorer.delete_after_cursor(),
            Action::CursorBackward => {
                explorer.cursor_backward();
            }
            Action::CursorForward => {
                explorer.cursor_forward();
            }
            Action::CursorHome => explorer.cursor_home(),
            Action::CursorEnd => explorer.cursor_end(),
            Action::Complete => explorer.tab_complete(),
            Action::CancelCompletion => explorer.cancel_completion(),
            Action::Accept => {
                if let Accept::Done(node) = explorer.accept() {
                    return Step::Done(node);
                }
            }
            Action::ToggleOnlyKeys => {
                explorer.toggle_only_keys();
                self.viewport.reset();
            }
            Action::ScrollUp => {
                self.viewport.scroll_up(window_height);
            }
            Action::ScrollDown => {
                self.viewport.scroll_down(window_height);
            }
            Action::NextScreen => {
                self.viewport.next_screen(window_height);
            }
            Action::PreviousScreen => {
                self.viewport.previous_screen(window_height);
            }
            Action::ScrollTop => self.viewport.scroll_to_top(),
            Action::ScrollBottom => {
                self.viewport.scroll_to_bottom(window_height);
            }
            Action::Abort => return Step::Abort,
        }

        if explorer.query().raw() != before {
            self.viewport.reset();
        }
        Step::Continue
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn redraw(&mut self, out: &mut Stderr, explorer: &Explorer<'_, Value>) -> Result<()> {
        let size = terminal::size()?;
        self.renderer
            .draw(out, &explorer.view(), &mut self.viewport, size)
    }
}
