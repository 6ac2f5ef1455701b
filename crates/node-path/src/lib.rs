//! Typed paths into JSON documents.
//!
//! A [`Path`] locates one node inside a parsed JSON tree as a sequence of
//! [`Step`]s, each either an object key or an array index. Keeping the two
//! apart as variants means traversal code can never read a numeric string
//! key as an array index by accident.
//!
//! # Example
//!
//! ```
//! use json_node_path::{format_query, resolve, Step};
//! use serde_json::json;
//!
//! let path = vec![Step::key("customer"), Step::index(0), Step::key("id")];
//! assert_eq!(format_query(&path), r#"$["customer"][0]["id"]"#);
//!
//! let doc = json!({"customer": [{"id": 7}]});
//! assert_eq!(resolve(&doc, &path).unwrap(), &json!(7));
//! ```

use thiserror::Error;

mod types;
pub use types::{Path, Step};

mod format;
pub use format::format_query;

mod resolve;
pub use resolve::{get, resolve};

/// Failure of a path traversal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// An object key named by the path is absent.
    #[error("NOT_FOUND")]
    NotFound,
    /// An array index named by the path is past the end.
    #[error("INDEX_OUT_OF_BOUNDS")]
    IndexOutOfBounds,
    /// A key step met an array, or an index step met an object.
    #[error("STEP_MISMATCH")]
    StepMismatch,
    /// The path descends into a scalar.
    #[error("NOT_A_CONTAINER")]
    NotAContainer,
}

/// Check if a path addresses the document root.
pub fn is_root(path: &[Step]) -> bool {
    path.is_empty()
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`PathError::NotFound`] if the path is the root.
pub fn parent(path: &[Step]) -> Result<Vec<Step>, PathError> {
    if path.is_empty() {
        return Err(PathError::NotFound);
    }
    Ok(path[..path.len() - 1].to_vec())
}
