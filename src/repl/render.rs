//! Full-screen redraw of the explorer
//!
//! Every redraw clears the screen and paints three areas: the prompt row, the completion
//! row, and the contents pane below them.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use nu_ansi_term::Color;
use serde_json::Value;

use super::prompt::QueryPrompt;
use super::viewport::{COMPLETION_ROW, CONTENTS_ROW, PROMPT_ROW, Viewport};
use crate::error::Result;
use crate::explorer::View;
use crate::formatter::{JsonLineStyler, key_lines, pretty_lines};

const NO_RESULTS: &str = "--- no results ---";
const NOT_A_CONTAINER: &str = "--- not an object or array ---";

/// What the contents pane shows for a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
    /// The query leads nowhere
    NoResults,
    /// Keys view of a scalar
    NotAContainer,
    /// Key names or array range
    Keys(Vec<String>),
    /// Pretty-printed JSON
    Json(Vec<String>),
}

impl Contents {
    /// Build the contents for the node in `view`
    pub fn from_view(view: &View<'_, '_, Value>) -> Result<Self> {
        let Some(node) = view.node else {
            return Ok(Self::NoResults);
        };
        if view.only_keys {
            return Ok(key_lines(node).map_or(Self::NotAContainer, Self::Keys));
        }
        Ok(Self::Json(pretty_lines(node)?))
    }

    /// Number of lines the pane can scroll through
    pub fn height(&self) -> usize {
        match self {
            Self::NoResults | Self::NotAContainer => 1,
            Self::Keys(lines) | Self::Json(lines) => lines.len(),
        }
    }
}

/// Draws explorer views onto a terminal
#[derive(Debug, Clone)]
pub struct Renderer {
    use_colors: bool,
    prompt: QueryPrompt,
    styler: JsonLineStyler,
}

impl Renderer {
    pub fn new(use_colors: bool) -> Self {
        Self {
            use_colors,
            prompt: QueryPrompt::new(use_colors),
            styler: JsonLineStyler::new(use_colors),
        }
    }

    /// Redraw the whole screen
    ///
    /// The viewport learns the new document height, so scrolling stays within bounds.
    pub fn draw<W: Write>(
        &self,
        out: &mut W,
        view: &View<'_, '_, Value>,
        viewport: &mut Viewport,
        (width, height): (u16, u16),
    ) -> Result<()> {
        let contents = Contents::from_view(view)?;
        viewport.set_doc_height(contents.height());

        queue!(
            out,
            Clear(ClearType::All),
            MoveTo(0, PROMPT_ROW),
            Print(self.prompt.render_query_line(view))
        )?;

        if let Some(row) = self.prompt.render_completions(view) {
            queue!(out, MoveTo(0, COMPLETION_ROW), Print(row))?;
        }

        let rows = self.content_rows(&contents, viewport.offset(), width as usize);
        let visible = Viewport::contents_height(height as usize);
        for (i, row) in rows.into_iter().take(visible).enumerate() {
            queue!(out, MoveTo(0, CONTENTS_ROW + i as u16), Print(row))?;
        }

        let column = QueryPrompt::cursor_column(view).min(width.saturating_sub(1) as usize);
        queue!(out, MoveTo(column as u16, PROMPT_ROW))?;
        out.flush()?;
        Ok(())
    }

    /// Styled rows of the contents pane, starting at `offset` and cut at `width` columns
    pub fn content_rows(&self, contents: &Contents, offset: usize, width: usize) -> Vec<String> {
        match contents {
            Contents::NoResults => vec![self.warning(NO_RESULTS)],
            Contents::NotAContainer => vec![self.warning(NOT_A_CONTAINER)],
            Contents::Keys(lines) => lines
                .iter()
                .skip(offset)
                .map(|line| truncate(line, width).to_string())
                .collect(),
            Contents::Json(lines) => lines
                .iter()
                .skip(offset)
                .map(|line| self.styler.style_line(truncate(line, width)))
                .collect(),
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.use_colors {
            Color::Red.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Cut `line` to at most `width` characters
fn truncate(line: &str, width: usize) -> &str {
    match line.char_indices().nth(width) {
        Some((end, _)) => &line[..end],
        None => line,
    }
}
