//! Code blocks made of typed source tokens.

use crate::kind::EntityKind;
use crate::link::{DocumentationLink, ExternalLink};
use crate::phrasing::write_plain_text;

/// Syntactic category of a code token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    StringLiteral,
    IntLiteral,
    FloatLiteral,
    Punctuation,
    Preprocessor,
    /// Whitespace and anything else without a category.
    Text,
}

impl TokenKind {
    /// Name used in highlighter CSS classes (`standardese-code-<name>`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::StringLiteral => "string-literal",
            Self::IntLiteral => "int-literal",
            Self::FloatLiteral => "float-literal",
            Self::Punctuation => "punctuation",
            Self::Preprocessor => "preprocessor",
            Self::Text => "text",
        }
    }
}

/// Token of source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeToken {
    kind: TokenKind,
    text: String,
}

impl CodeToken {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn token_kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> EntityKind {
        match self.kind {
            TokenKind::Keyword => EntityKind::CodeBlockKeyword,
            TokenKind::Identifier => EntityKind::CodeBlockIdentifier,
            TokenKind::StringLiteral => EntityKind::CodeBlockStringLiteral,
            TokenKind::IntLiteral => EntityKind::CodeBlockIntLiteral,
            TokenKind::FloatLiteral => EntityKind::CodeBlockFloatLiteral,
            TokenKind::Punctuation => EntityKind::CodeBlockPunctuation,
            TokenKind::Preprocessor => EntityKind::CodeBlockPreprocessor,
            TokenKind::Text => EntityKind::Text,
        }
    }
}

/// Piece of a code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeFragment {
    Token(CodeToken),
    /// Cross-reference whose text is part of the code.
    Link(DocumentationLink),
    ExternalLink(ExternalLink),
}

impl CodeFragment {
    /// Append the source text of this fragment.
    pub fn write_source(&self, out: &mut String) {
        match self {
            Self::Token(token) => out.push_str(token.text()),
            Self::Link(link) => write_plain_text(link.children(), out),
            Self::ExternalLink(link) => write_plain_text(link.children(), out),
        }
    }
}

impl From<CodeToken> for CodeFragment {
    fn from(token: CodeToken) -> Self {
        Self::Token(token)
    }
}

impl From<DocumentationLink> for CodeFragment {
    fn from(link: DocumentationLink) -> Self {
        Self::Link(link)
    }
}

impl From<ExternalLink> for CodeFragment {
    fn from(link: ExternalLink) -> Self {
        Self::ExternalLink(link)
    }
}

/// Block of source code in a given language.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeBlock {
    language: String,
    fragments: Vec<CodeFragment>,
}

impl CodeBlock {
    /// Create a code block; `language` may be empty.
    #[must_use]
    pub fn new(language: impl Into<String>, fragments: Vec<CodeFragment>) -> Self {
        Self {
            language: language.into(),
            fragments,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn fragments(&self) -> &[CodeFragment] {
        &self.fragments
    }

    /// Source text: the fragment texts concatenated in order.
    #[must_use]
    pub fn source(&self) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            fragment.write_source(&mut out);
        }
        out
    }
}
