//! Inline-level entities.

use crate::kind::EntityKind;
use crate::link::{DocumentationLink, ExternalLink};

/// Inline-level entity, valid only inside block containers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phrasing {
    Text(Text),
    Emphasis(Emphasis),
    StrongEmphasis(StrongEmphasis),
    Code(Code),
    SoftBreak,
    HardBreak,
    ExternalLink(ExternalLink),
    DocumentationLink(DocumentationLink),
}

impl Phrasing {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Text(_) => EntityKind::Text,
            Self::Emphasis(_) => EntityKind::Emphasis,
            Self::StrongEmphasis(_) => EntityKind::StrongEmphasis,
            Self::Code(_) => EntityKind::Code,
            Self::SoftBreak => EntityKind::SoftBreak,
            Self::HardBreak => EntityKind::HardBreak,
            Self::ExternalLink(_) => EntityKind::ExternalLink,
            Self::DocumentationLink(_) => EntityKind::DocumentationLink,
        }
    }

    /// Shorthand for a text entity.
    #[must_use]
    pub fn text(string: impl Into<String>) -> Self {
        Self::Text(Text::new(string))
    }

    /// Append the plain text content, dropping all markup.
    ///
    /// Soft breaks contribute a space, hard breaks a newline.
    pub fn write_plain_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text.string()),
            Self::Emphasis(emph) => write_plain_text(emph.children(), out),
            Self::StrongEmphasis(strong) => write_plain_text(strong.children(), out),
            Self::Code(code) => write_plain_text(code.children(), out),
            Self::SoftBreak => out.push(' '),
            Self::HardBreak => out.push('\n'),
            Self::ExternalLink(link) => write_plain_text(link.children(), out),
            Self::DocumentationLink(link) => write_plain_text(link.children(), out),
        }
    }
}

/// Append the plain text of a sequence of phrasing entities.
pub fn write_plain_text(children: &[Phrasing], out: &mut String) {
    for child in children {
        child.write_plain_text(out);
    }
}

/// Literal text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    string: String,
}

impl Text {
    #[must_use]
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
        }
    }

    pub fn string(&self) -> &str {
        &self.string
    }
}

/// Emphasized text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Emphasis {
    children: Vec<Phrasing>,
}

impl Emphasis {
    #[must_use]
    pub fn new(children: Vec<Phrasing>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Phrasing] {
        &self.children
    }
}

/// Strongly emphasized text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StrongEmphasis {
    children: Vec<Phrasing>,
}

impl StrongEmphasis {
    #[must_use]
    pub fn new(children: Vec<Phrasing>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Phrasing] {
        &self.children
    }
}

/// Inline code span.
///
/// The children are rendered as plain text; links inside keep only their text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Code {
    children: Vec<Phrasing>,
}

impl Code {
    #[must_use]
    pub fn new(children: Vec<Phrasing>) -> Self {
        Self { children }
    }

    /// Code span holding a single text.
    #[must_use]
    pub fn from_text(string: impl Into<String>) -> Self {
        Self::new(vec![Phrasing::text(string)])
    }

    pub fn children(&self) -> &[Phrasing] {
        &self.children
    }
}

impl From<Text> for Phrasing {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Emphasis> for Phrasing {
    fn from(emph: Emphasis) -> Self {
        Self::Emphasis(emph)
    }
}

impl From<StrongEmphasis> for Phrasing {
    fn from(strong: StrongEmphasis) -> Self {
        Self::StrongEmphasis(strong)
    }
}

impl From<Code> for Phrasing {
    fn from(code: Code) -> Self {
        Self::Code(code)
    }
}

impl From<ExternalLink> for Phrasing {
    fn from(link: ExternalLink) -> Self {
        Self::ExternalLink(link)
    }
}

impl From<DocumentationLink> for Phrasing {
    fn from(link: DocumentationLink) -> Self {
        Self::DocumentationLink(link)
    }
}
