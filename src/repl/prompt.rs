//! Query prompt and completion row rendering

use nu_ansi_term::{Color, Style};

use crate::explorer::View;

/// Text in front of the query
pub const PROMPT: &str = ">>> ";

/// Renders the two header rows of the explorer
#[derive(Debug, Clone)]
pub struct QueryPrompt {
    /// Whether to emit ANSI styles
    use_colors: bool,
    /// Style of the typed query
    query_style: Style,
    /// Style of the ghost completion after the query
    hint_style: Style,
    /// Style of the candidate selected with Tab
    active_style: Style,
}

impl QueryPrompt {
    /// Create a new prompt renderer
    ///
    /// # Arguments
    /// * `use_colors` - Whether to emit ANSI styles
    ///
    /// # Returns
    /// * `Self` - New prompt
    pub fn new(use_colors: bool) -> Self {
        Self {
            use_colors,
            query_style: Style::new().fg(Color::Blue),
            hint_style: Style::new().fg(Color::Green),
            active_style: Style::new().bold(),
        }
    }

    /// Render the prompt row: prompt, query and ghost hint
    ///
    /// Without colors the hint is left out, since it could not be told apart from typed text.
    ///
    /// # Arguments
    /// * `view` - Explorer snapshot
    ///
    /// # Returns
    /// * `String` - Row text
    pub fn render_query_line<D: ?Sized>(&self, view: &View<'_, '_, D>) -> String {
        let raw = view.query.raw();
        if self.use_colors {
            format!(
                "{PROMPT}{}{}",
                self.query_style.paint(raw),
                self.hint_style.paint(view.hint.as_str())
            )
        } else {
            format!("{PROMPT}{raw}")
        }
    }

    /// Render the completion row
    ///
    /// Candidates are only listed while the user is cycling through more than one of them.
    ///
    /// # Arguments
    /// * `view` - Explorer snapshot
    ///
    /// # Returns
    /// * `Option<String>` - Row text, `None` when the row stays blank
    pub fn render_completions<D: ?Sized>(&self, view: &View<'_, '_, D>) -> Option<String> {
        let active = view.active_completion?;
        if view.completions.len() < 2 {
            return None;
        }

        let parts: Vec<String> = view
            .completions
            .iter()
            .enumerate()
            .map(|(i, candidate)| match (i == active, self.use_colors) {
                (true, true) => self.active_style.paint(candidate.as_str()).to_string(),
                (true, false) => format!("<{candidate}>"),
                (false, _) => candidate.clone(),
            })
            .collect();
        Some(parts.join(" "))
    }

    /// Terminal column of the text cursor on the prompt row
    pub fn cursor_column<D: ?Sized>(view: &View<'_, '_, D>) -> usize {
        PROMPT.chars().count() + view.query.cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::Explorer;
    use serde_json::json;

    #[test]
    fn test_plain_query_line_has_no_hint() {
        let doc = json!({"alpha": 1, "beta": 2});
        let mut explorer = Explorer::new(&doc, '.');
        explorer.insert_char('a');
        let prompt = QueryPrompt::new(false);
        assert_eq!(prompt.render_query_line(&explorer.view()), ">>> a");
        assert_eq!(QueryPrompt::cursor_column(&explorer.view()), 5);
    }

    #[test]
    fn test_colored_query_line() {
        let doc = json!({"alpha": 1});
        let mut explorer = Explorer::new(&doc, '.');
        explorer.insert_char('a');
        let line = QueryPrompt::new(true).render_query_line(&explorer.view());
        let query = Style::new().fg(Color::Blue).paint("a").to_string();
        let hint = Style::new().fg(Color::Green).paint("lpha").to_string();
        assert_eq!(line, format!(">>> {query}{hint}"));
    }

    #[test]
    fn test_completion_row_only_while_cycling() {
        let doc = json!({"abc": 1, "alpha": 2});
        let mut explorer = Explorer::new(&doc, '.');
        let prompt = QueryPrompt::new(false);
        assert_eq!(prompt.render_completions(&explorer.view()), None);

        explorer.tab_complete();
        explorer.tab_complete();
        assert_eq!(
            prompt.render_completions(&explorer.view()),
            Some("abc <alpha>".to_string())
        );
    }
}
