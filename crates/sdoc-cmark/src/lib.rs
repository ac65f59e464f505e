//! CommonMark bridge.
//!
//! This crate owns the CommonMark side of comment processing:
//! - [`Parser`]: streaming front-end that folds pulldown-cmark events into an
//!   owned syntax tree ([`AstRoot`], [`Node`])
//! - [`render_commonmark`]: writer that renders a tree back to CommonMark text
//!
//! Trees are built bottom-up with [`Node::append_child`] and are owned by
//! their root, so a subtree handed to a parent is never shared.
//!
//! # Example
//!
//! ```
//! use sdoc_cmark::{Parser, RenderOptions, render_commonmark};
//!
//! let mut parser = Parser::new();
//! parser.feed("Hello\n");
//! parser.feed("world.");
//! let root = parser.finish();
//!
//! let text = render_commonmark(root.get(), &RenderOptions { no_breaks: true });
//! assert_eq!(text, "Hello world.\n");
//! ```

mod ast;
mod commonmark;
mod parser;

pub use ast::{AstRoot, ListType, Node, NodeKind, NodeType};
pub use commonmark::{RenderOptions, render_commonmark};
pub use parser::{ParseOptions, Parser};
