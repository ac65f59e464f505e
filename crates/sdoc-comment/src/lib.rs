//! Documentation comment decoder.
//!
//! Turns comment text (already stripped of comment markers) into markup
//! entities:
//! - [`read_ast`] parses the text into a CommonMark tree
//! - [`translate_ast`] translates the tree into a [`TranslatedAst`]
//! - [`CommentParser`] runs both for a sequence of comments
//!
//! # Example
//!
//! ```
//! use sdoc_comment::CommentParser;
//! use sdoc_markup::{Entity, GeneratorOptions, MarkdownGenerator};
//!
//! let mut parser = CommentParser::new();
//! let details = parser.parse("Hello\nworld.").unwrap().into_details().unwrap();
//!
//! let generator = MarkdownGenerator::new(GeneratorOptions::default());
//! let paragraph = details.children()[0].clone();
//! assert_eq!(generator.render(&Entity::from(paragraph)), "Hello world.\n");
//! ```

mod decoder;
mod error;
mod parser;

pub use decoder::{Section, TranslatedAst, read_ast, translate_ast};
pub use error::DecodeError;
pub use parser::CommentParser;
