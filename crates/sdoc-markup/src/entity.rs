//! Root sum type of standalone-renderable entities.

use crate::block::Block;
use crate::code_block::CodeToken;
use crate::kind::EntityKind;
use crate::phrasing::Phrasing;

/// Entity that can be rendered on its own.
///
/// Child-only types (list items, sections, index items, namespace
/// documentation, documents, ...) have no conversion into `Entity`, so
/// rendering one as a root does not compile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    Block(Block),
    Phrasing(Phrasing),
    /// A single token of a code block.
    CodeToken(CodeToken),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Block(block) => block.kind(),
            Self::Phrasing(phrasing) => phrasing.kind(),
            Self::CodeToken(token) => token.kind(),
        }
    }
}

impl From<Block> for Entity {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}

impl From<Phrasing> for Entity {
    fn from(phrasing: Phrasing) -> Self {
        Self::Phrasing(phrasing)
    }
}

impl From<CodeToken> for Entity {
    fn from(token: CodeToken) -> Self {
        Self::CodeToken(token)
    }
}

macro_rules! impl_from_via {
    ($via:ident: $($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Entity {
                fn from(value: $ty) -> Self {
                    Self::from($via::from(value))
                }
            }
        )*
    };
}

impl_from_via!(
    Block: crate::block::Paragraph,
    crate::block::Heading,
    crate::block::Subheading,
    crate::block::BlockQuote,
    crate::list::UnorderedList,
    crate::list::OrderedList,
    crate::code_block::CodeBlock,
    crate::documentation::FileDocumentation,
    crate::documentation::EntityDocumentation,
    crate::documentation::ModuleDocumentation,
    crate::index::FileIndex,
    crate::index::EntityIndex,
    crate::index::ModuleIndex,
);

impl_from_via!(
    Phrasing: crate::phrasing::Text,
    crate::phrasing::Emphasis,
    crate::phrasing::StrongEmphasis,
    crate::phrasing::Code,
    crate::link::ExternalLink,
    crate::link::DocumentationLink,
);
