//! Type definitions for node paths.

/// A single step into a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Object property access.
    Key(String),
    /// Array element access.
    Index(usize),
}

impl Step {
    /// Create a key step.
    pub fn key(key: impl Into<String>) -> Self {
        Step::Key(key.into())
    }

    /// Create an index step.
    pub fn index(index: usize) -> Self {
        Step::Index(index)
    }

    /// The object key, if this is a key step.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Step::Key(key) => Some(key),
            Step::Index(_) => None,
        }
    }

    /// The array index, if this is an index step.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Step::Index(index) => Some(*index),
            Step::Key(_) => None,
        }
    }
}

impl From<&str> for Step {
    fn from(key: &str) -> Self {
        Step::Key(key.to_string())
    }
}

impl From<String> for Step {
    fn from(key: String) -> Self {
        Step::Key(key)
    }
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

/// A path from the document root to a node.
///
/// The empty path addresses the root itself.
pub type Path = Vec<Step>;
