//! Decoder error types.

use sdoc_cmark::NodeType;

/// Error decoding a documentation comment.
///
/// Decoding stops at the first error; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The tree root is not a document node.
    #[error("Comment root must be a document, found {0}")]
    NotADocument(NodeType),
    /// The comment uses markup outside the supported grammar.
    #[error("Unsupported markup in comment: {kind}")]
    UnsupportedNode {
        /// Type of the offending node.
        kind: NodeType,
    },
    /// A supported node appears where it is not allowed.
    #[error("Unexpected {kind} inside {parent}")]
    UnexpectedChild {
        /// Type of the misplaced node.
        kind: NodeType,
        /// Type of its parent.
        parent: NodeType,
    },
}
