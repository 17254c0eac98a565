use crate::ast::NodeKind;
use thiserror::Error;

/// Construction-time validation failures. No partial node exists once one
/// of these is returned; callers surface them at template-definition time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("unknown element kind `{0}`, expected one of: sentence, fragment, template")]
    UnknownElementKind(String),

    #[error("invalid child at index {index} of {parent} node: found {found}, expected {expected}")]
    InvalidChildKind {
        parent: NodeKind,
        index: usize,
        found: String,
        expected: &'static str,
    },
}
