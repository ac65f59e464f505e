//! Block-level entities.

use crate::code_block::CodeBlock;
use crate::documentation::{EntityDocumentation, FileDocumentation, ModuleDocumentation};
use crate::index::{EntityIndex, FileIndex, ModuleIndex};
use crate::kind::EntityKind;
use crate::list::{OrderedList, UnorderedList};
use crate::phrasing::Phrasing;

/// Structural entity valid at document level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
    Subheading(Subheading),
    UnorderedList(UnorderedList),
    OrderedList(OrderedList),
    BlockQuote(BlockQuote),
    CodeBlock(CodeBlock),
    ThematicBreak,
    FileDocumentation(FileDocumentation),
    EntityDocumentation(EntityDocumentation),
    ModuleDocumentation(ModuleDocumentation),
    FileIndex(FileIndex),
    EntityIndex(EntityIndex),
    ModuleIndex(ModuleIndex),
}

impl Block {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Paragraph(_) => EntityKind::Paragraph,
            Self::Heading(_) => EntityKind::Heading,
            Self::Subheading(_) => EntityKind::Subheading,
            Self::UnorderedList(_) => EntityKind::UnorderedList,
            Self::OrderedList(_) => EntityKind::OrderedList,
            Self::BlockQuote(_) => EntityKind::BlockQuote,
            Self::CodeBlock(_) => EntityKind::CodeBlock,
            Self::ThematicBreak => EntityKind::ThematicBreak,
            Self::FileDocumentation(_) => EntityKind::FileDocumentation,
            Self::EntityDocumentation(_) => EntityKind::EntityDocumentation,
            Self::ModuleDocumentation(_) => EntityKind::ModuleDocumentation,
            Self::FileIndex(_) => EntityKind::FileIndex,
            Self::EntityIndex(_) => EntityKind::EntityIndex,
            Self::ModuleIndex(_) => EntityKind::ModuleIndex,
        }
    }
}

/// Paragraph of inline content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paragraph {
    children: Vec<Phrasing>,
}

impl Paragraph {
    #[must_use]
    pub fn new(children: Vec<Phrasing>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Phrasing] {
        &self.children
    }
}

/// Heading, rendered at level 4 on its own.
///
/// Also used as the text of documentation headers and index headings, where
/// the container decides the level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Heading {
    children: Vec<Phrasing>,
}

impl Heading {
    #[must_use]
    pub fn new(children: Vec<Phrasing>) -> Self {
        Self { children }
    }

    /// Heading holding a single text.
    #[must_use]
    pub fn from_text(string: impl Into<String>) -> Self {
        Self::new(vec![Phrasing::text(string)])
    }

    pub fn children(&self) -> &[Phrasing] {
        &self.children
    }
}

/// Subheading, rendered at level 5.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subheading {
    children: Vec<Phrasing>,
}

impl Subheading {
    #[must_use]
    pub fn new(children: Vec<Phrasing>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Phrasing] {
        &self.children
    }
}

/// Block quote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockQuote {
    children: Vec<Block>,
}

impl BlockQuote {
    #[must_use]
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Block] {
        &self.children
    }
}

macro_rules! impl_from_for_block {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Block {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_block!(
    Paragraph,
    Heading,
    Subheading,
    UnorderedList,
    OrderedList,
    BlockQuote,
    CodeBlock,
    FileDocumentation,
    EntityDocumentation,
    ModuleDocumentation,
    FileIndex,
    EntityIndex,
    ModuleIndex,
);
