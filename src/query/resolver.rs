//! Path resolution against a read-only document tree

use serde_json::Value;

use super::token::Token;

/// Read-only view of a document node
///
/// The resolver and the completion engine only ever borrow nodes through this trait,
/// so any tree-shaped document can be explored.
pub trait Document {
    /// Field names when the node is object-like, `None` otherwise
    fn field_names(&self) -> Option<Vec<&str>>;

    /// Element count when the node is array-like, `None` otherwise
    fn array_len(&self) -> Option<usize>;

    /// Child field by name
    fn get_field(&self, name: &str) -> Option<&Self>;

    /// Array element by position; callers check bounds with [`Document::array_len`] first
    fn get_index(&self, index: usize) -> Option<&Self>;
}

impl Document for Value {
    fn field_names(&self) -> Option<Vec<&str>> {
        self.as_object()
            .map(|map| map.keys().map(String::as_str).collect())
    }

    fn array_len(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }

    fn get_field(&self, name: &str) -> Option<&Self> {
        self.as_object().and_then(|map| map.get(name))
    }

    fn get_index(&self, index: usize) -> Option<&Self> {
        self.as_array().and_then(|items| items.get(index))
    }
}

/// Outcome of walking a path
#[derive(Debug)]
pub struct Resolution<'a, D: ?Sized> {
    /// Addressed node when fully resolved, otherwise the best-effort container (if any)
    pub node: Option<&'a D>,
    /// Every token matched an existing node
    pub fully_resolved: bool,
}

impl<D: ?Sized> Clone for Resolution<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for Resolution<'_, D> {}

impl<'a, D: ?Sized> Resolution<'a, D> {
    fn complete(node: &'a D) -> Self {
        Self {
            node: Some(node),
            fully_resolved: true,
        }
    }

    fn partial(node: &'a D) -> Self {
        Self {
            node: Some(node),
            fully_resolved: false,
        }
    }

    fn failed() -> Self {
        Self {
            node: None,
            fully_resolved: false,
        }
    }
}

/// Walk `path` from `root`
///
/// - a missing key as the last token yields its parent, so completion can list siblings
/// - a missing key anywhere else, an out-of-range index, an `ErrKey` or a wildcard fail
/// - an `ErrIndex` stops at the current node without failing it
pub fn resolve<'a, D: Document + ?Sized>(root: &'a D, path: &[Token]) -> Resolution<'a, D> {
    let mut node = root;
    let last = path.len().saturating_sub(1);

    for (step, token) in path.iter().enumerate() {
        node = match token {
            Token::Index(index) => match node.array_len() {
                Some(len) if *index < len => match node.get_index(*index) {
                    Some(child) => child,
                    None => return Resolution::failed(),
                },
                _ => return Resolution::failed(),
            },
            Token::Key(name) => match node.get_field(name) {
                Some(child) => child,
                None if step == last => return Resolution::partial(node),
                None => return Resolution::failed(),
            },
            Token::ErrIndex(_) => return Resolution::partial(node),
            Token::ErrKey(_) => return Resolution::failed(),
            // Wildcards are recognized by the grammar but not traversed
            Token::Wildcard(_) => return Resolution::failed(),
        };
    }

    Resolution::complete(node)
}
