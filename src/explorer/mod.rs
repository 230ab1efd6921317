//! Interactive exploration session
//!
//! An [`Explorer`] ties the query pipeline to one loaded document. It owns the editable
//! query, keeps the resolved node and completion candidates in sync with it, and tracks
//! which candidate the user is cycling through. It knows nothing about terminals: the
//! front-end feeds it edits and draws the [`View`] it hands back.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Result, UsageError};
use crate::query::{Document, QueryState, Token, best_completion, completions, resolve};

/// Exploration session over a borrowed document
#[derive(Debug)]
pub struct Explorer<'a, D: Document + ?Sized = Value> {
    /// Document root, never mutated
    root: &'a D,

    /// Query being edited
    query: QueryState,

    /// Node shown to the user; `None` means "no results"
    node: Option<&'a D>,

    /// Whether the whole query matched
    fully_resolved: bool,

    /// Candidates for the token being typed
    completions: Vec<String>,

    /// Candidate selected by cycling with Tab
    active_completion: Option<usize>,

    /// List keys instead of the full node
    only_keys: bool,
}

/// Result of pressing Enter
#[derive(Debug, PartialEq)]
pub enum Accept<'a, D: ?Sized> {
    /// The session is over; this is the selected node
    Done(Option<&'a D>),
    /// A candidate was applied, keep editing
    Continue,
}

/// Snapshot of everything a renderer needs for one redraw
#[derive(Debug)]
pub struct View<'v, 'a, D: ?Sized> {
    pub query: &'v QueryState,
    pub node: Option<&'a D>,
    pub fully_resolved: bool,
    pub completions: &'v [String],
    pub active_completion: Option<usize>,
    /// Ghost text shown after the query
    pub hint: String,
    pub only_keys: bool,
}

impl<'a, D: Document + ?Sized> Explorer<'a, D> {
    /// Start a session on `root` with an empty query
    pub fn new(root: &'a D, separator: char) -> Self {
        let mut explorer = Self {
            root,
            query: QueryState::new(separator),
            node: None,
            fully_resolved: false,
            completions: Vec::new(),
            active_completion: None,
            only_keys: false,
        };
        explorer.sync_with_query();
        explorer
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn node(&self) -> Option<&'a D> {
        self.node
    }

    pub fn is_fully_resolved(&self) -> bool {
        self.fully_resolved
    }

    pub fn completions(&self) -> &[String] {
        &self.completions
    }

    pub fn active_completion(&self) -> Option<usize> {
        self.active_completion
    }

    pub fn only_keys(&self) -> bool {
        self.only_keys
    }

    pub fn set_only_keys(&mut self, only_keys: bool) {
        self.only_keys = only_keys;
    }

    /// Switch between the keys view and the full node; drops any active candidate
    pub fn toggle_only_keys(&mut self) {
        self.active_completion = None;
        self.only_keys = !self.only_keys;
    }

    /// Re-resolve the current query and refresh completions
    ///
    /// When the query does not fully resolve and nothing can complete it, the node is
    /// dropped so the user sees that the path leads nowhere.
    pub fn sync_with_query(&mut self) {
        let resolution = resolve(self.root, self.query.path());
        self.node = resolution.node;
        self.fully_resolved = resolution.fully_resolved;
        self.completions.clear();

        if !self.fully_resolved {
            self.completions = completions(self.node, self.query.path());
            if self.completions.is_empty() {
                self.node = None;
            }
        }

        trace!(
            query = self.query.raw(),
            fully_resolved = self.fully_resolved,
            candidates = self.completions.len(),
            "synced query"
        );
    }

    pub fn insert_char(&mut self, ch: char) {
        self.active_completion = None;
        self.query.insert_char(ch);
        self.sync_with_query();
    }

    pub fn delete_char(&mut self) {
        self.active_completion = None;
        self.query.delete_char_before_cursor();
        self.sync_with_query();
    }

    pub fn delete_before_cursor(&mut self) {
        self.active_completion = None;
        self.query.truncate_before_cursor();
        self.sync_with_query();
    }

    pub fn delete_after_cursor(&mut self) {
        self.active_completion = None;
        self.query.truncate_after_cursor();
        self.sync_with_query();
    }

    /// Replace the whole query
    pub fn set_query(&mut self, raw: &str) {
        self.active_completion = None;
        self.query.set_raw(raw);
        self.query.move_end();
        self.sync_with_query();
    }

    pub fn cursor_backward(&mut self) -> bool {
        self.query.move_left()
    }

    pub fn cursor_forward(&mut self) -> bool {
        self.query.move_right()
    }

    pub fn cursor_home(&mut self) {
        self.query.move_home();
    }

    pub fn cursor_end(&mut self) {
        self.query.move_end();
    }

    /// Tab: apply the only candidate, or cycle through several
    pub fn tab_complete(&mut self) {
        match self.completions.len() {
            0 => {}
            1 => {
                let candidate = self.completions[0].clone();
                self.apply_completion(&candidate);
            }
            len => {
                self.active_completion = match self.active_completion {
                    Some(i) if i + 1 < len => Some(i + 1),
                    _ => Some(0),
                };
            }
        }
    }

    /// Stop cycling candidates without applying one
    pub fn cancel_completion(&mut self) {
        self.active_completion = None;
    }

    /// Enter: apply the active candidate, or finish with the current node
    pub fn accept(&mut self) -> Accept<'a, D> {
        let Some(index) = self.active_completion else {
            debug!(query = self.query.raw(), "query accepted");
            return Accept::Done(self.node);
        };
        if let Some(candidate) = self.completions.get(index).cloned() {
            self.apply_completion(&candidate);
        }
        self.active_completion = None;
        Accept::Continue
    }

    /// Run a whole query at once, as the non-interactive mode does
    ///
    /// Anything short of a full resolution is a usage error naming the failing token.
    pub fn execute(&mut self, raw: &str) -> Result<&'a D> {
        self.set_query(raw);
        match self.node {
            Some(node) if self.fully_resolved => Ok(node),
            _ => Err(UsageError::BadQuery {
                query: raw.to_string(),
                token: self.query.last_token().to_string(),
            }
            .into()),
        }
    }

    /// Snapshot for the renderer
    pub fn view(&self) -> View<'_, 'a, D> {
        View {
            query: &self.query,
            node: self.node,
            fully_resolved: self.fully_resolved,
            completions: &self.completions,
            active_completion: self.active_completion,
            hint: self.hint(),
            only_keys: self.only_keys,
        }
    }

    /// Inline suggestion for the token being typed
    pub fn hint(&self) -> String {
        best_completion(self.query.last_token(), &self.completions)
    }

    /// Last token of the current query
    pub fn last_token(&self) -> &Token {
        self.query.last_token()
    }

    fn apply_completion(&mut self, candidate: &str) {
        debug!(candidate, "applying completion");
        self.query.complete_with(candidate);
        self.sync_with_query();
    }
}

#[cfg(test)]
mod tests;
