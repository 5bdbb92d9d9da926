//! Errors raised while building a markup tree.

use thiserror::Error;

use super::ElementKind;

/// Misuse of the markup builder.
///
/// Both variants describe programming mistakes rather than runtime
/// conditions: they are reported at the call that broke the contract and are
/// never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// The attribute is not on the element kind's whitelist.
    #[error("`{attribute}` is not a valid attribute for element `{kind}`")]
    InvalidAttribute {
        attribute: String,
        kind: ElementKind,
    },

    /// The element kind does not support the requested structural operation.
    #[error("element `{kind}` does not support {operation}")]
    UnsupportedOperation {
        operation: &'static str,
        kind: ElementKind,
    },
}
