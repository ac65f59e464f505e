//! Documentation entity model and markup generator.
//!
//! Documentation is described as a tree of immutable entities:
//! - Blocks ([`Paragraph`], [`CodeBlock`], lists, ...) and phrasing
//!   ([`Text`], [`Emphasis`], links, ...)
//! - Documentation entities ([`FileDocumentation`], [`EntityDocumentation`],
//!   ...) built with a [`DocumentationBuilder`]
//! - Indexes ([`FileIndex`], [`EntityIndex`], [`ModuleIndex`])
//! - Output [`Document`]s
//!
//! [`MarkdownGenerator`] renders a tree as CommonMark, optionally with raw
//! HTML anchors and highlighted code. Documentation links are resolved at
//! render time through a [`Linker`].
//!
//! Only [`Entity`] can be rendered on its own; child-only types such as
//! [`ListItem`] or [`InlineSection`] do not convert into it.
//!
//! # Example
//!
//! ```
//! use sdoc_markup::{
//!     DocumentationLink, Entity, GeneratorOptions, Linker, MarkdownGenerator, OutputName,
//!     Paragraph, Phrasing,
//! };
//!
//! let mut linker = Linker::new();
//! linker.register("bar", OutputName::from_name("foo"));
//!
//! let paragraph = Paragraph::new(vec![
//!     Phrasing::text("See "),
//!     DocumentationLink::unresolved("bar", vec![Phrasing::text("bar")]).into(),
//!     Phrasing::text("."),
//! ]);
//!
//! let generator = MarkdownGenerator::new(GeneratorOptions {
//!     linker: Some(&linker),
//!     ..GeneratorOptions::default()
//! });
//! assert_eq!(
//!     generator.render(&Entity::from(paragraph)),
//!     "See [bar](foo.md#standardese-bar).\n"
//! );
//! ```

mod block;
mod code_block;
mod doc_section;
mod document;
mod documentation;
mod entity;
mod highlight;
mod id;
mod index;
mod kind;
mod link;
mod linker;
mod list;
mod markdown;
mod phrasing;
mod util;

pub use block::{Block, BlockQuote, Heading, Paragraph, Subheading};
pub use code_block::{CodeBlock, CodeFragment, CodeToken, TokenKind};
pub use doc_section::{
    BriefSection, DetailsSection, DocSection, InlineSection, ListSection, SectionKind,
};
pub use document::{Document, DocumentKind};
pub use documentation::{
    Documentation, DocumentationBody, DocumentationBuilder, DocumentationHeader,
    EntityDocumentation, FileDocumentation, ModuleDocumentation, NamespaceDocumentation,
};
pub use entity::Entity;
pub use highlight::{Highlighter, HtmlHighlighter};
pub use id::{EntityId, OutputName};
pub use index::{EntityIndex, EntityIndexItem, FileIndex, IndexEntry, ModuleIndex};
pub use kind::EntityKind;
pub use link::{DocumentationLink, ExternalLink, LinkDestination};
pub use linker::{LinkResolver, Linker};
pub use list::{
    Description, ListEntry, ListItem, OrderedList, Term, TermDescriptionItem, UnorderedList,
};
pub use markdown::{GeneratorOptions, MarkdownGenerator};
pub use phrasing::{Code, Emphasis, Phrasing, StrongEmphasis, Text, write_plain_text};
pub use util::escape_html;
