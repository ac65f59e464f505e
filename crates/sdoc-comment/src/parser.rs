//! Reusable comment parser.

use sdoc_cmark::{ParseOptions, Parser};

use crate::decoder::{TranslatedAst, read_ast, translate_ast};
use crate::error::DecodeError;

/// Decodes consecutive comments with one underlying [`Parser`].
#[derive(Debug, Default)]
pub struct CommentParser {
    parser: Parser,
    decoded: usize,
}

impl CommentParser {
    /// Create a parser with smart punctuation and normalization enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            parser: Parser::with_options(options),
            decoded: 0,
        }
    }

    /// Decode one comment.
    ///
    /// Each call is independent of the previous ones.
    pub fn parse(&mut self, comment: &str) -> Result<TranslatedAst, DecodeError> {
        let root = read_ast(&mut self.parser, comment);
        let result = translate_ast(&root);
        self.decoded += 1;
        match &result {
            Ok(translated) => tracing::debug!(
                comment = self.decoded,
                sections = translated.sections.len(),
                "Decoded comment"
            ),
            Err(e) => tracing::debug!(comment = self.decoded, error = %e, "Failed to decode comment"),
        }
        result
    }

    /// Number of comments decoded so far.
    pub fn decoded(&self) -> usize {
        self.decoded
    }
}
