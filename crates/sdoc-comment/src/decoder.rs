//! Translation of a parsed comment into markup entities.
//!
//! The supported grammar is paragraphs of text: paragraphs become
//! [`Paragraph`] entities, text keeps its literal and soft breaks collapse to
//! a single space. Everything else (headings, lists, emphasis, links, ...) is
//! rejected with [`DecodeError::UnsupportedNode`].

use sdoc_cmark::{AstRoot, Node, NodeKind, NodeType, Parser};
use sdoc_markup::{
    Block, BriefSection, DetailsSection, InlineSection, ListSection, Paragraph, Phrasing,
};

use crate::error::DecodeError;

/// Section of a decoded comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Brief(BriefSection),
    Details(DetailsSection),
    Inline(InlineSection),
    List(ListSection),
}

/// Decoded comment.
///
/// The current grammar produces a single [`Section::Details`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslatedAst {
    pub sections: Vec<Section>,
}

impl TranslatedAst {
    /// The first details section, if any.
    pub fn details(&self) -> Option<&DetailsSection> {
        self.sections.iter().find_map(|section| match section {
            Section::Details(details) => Some(details),
            Section::Brief(_) | Section::Inline(_) | Section::List(_) => None,
        })
    }

    /// Consume the result and return the first details section, if any.
    #[must_use]
    pub fn into_details(self) -> Option<DetailsSection> {
        self.sections.into_iter().find_map(|section| match section {
            Section::Details(details) => Some(details),
            Section::Brief(_) | Section::Inline(_) | Section::List(_) => None,
        })
    }
}

/// Parse one comment with `parser`.
///
/// The parser is reset afterwards and can be used for the next comment.
pub fn read_ast(parser: &mut Parser, comment: &str) -> AstRoot {
    parser.feed(comment);
    parser.finish()
}

/// Translate a parsed comment.
pub fn translate_ast(root: &AstRoot) -> Result<TranslatedAst, DecodeError> {
    let document = root.get();
    if document.node_type() != NodeType::Document {
        return Err(DecodeError::NotADocument(document.node_type()));
    }

    let blocks = translate_blocks(document)?;
    Ok(TranslatedAst {
        sections: vec![Section::Details(DetailsSection::new(blocks))],
    })
}

fn translate_blocks(parent: &Node) -> Result<Vec<Block>, DecodeError> {
    parent
        .children()
        .iter()
        .map(|child| match child.kind() {
            NodeKind::Paragraph => Ok(Paragraph::new(translate_phrasing(child)?).into()),
            NodeKind::Text { .. } | NodeKind::SoftBreak => Err(unexpected(child, parent)),
            NodeKind::Document
            | NodeKind::BlockQuote
            | NodeKind::List { .. }
            | NodeKind::Item
            | NodeKind::CodeBlock { .. }
            | NodeKind::HtmlBlock { .. }
            | NodeKind::CustomBlock
            | NodeKind::Heading { .. }
            | NodeKind::ThematicBreak
            | NodeKind::LineBreak
            | NodeKind::Code { .. }
            | NodeKind::HtmlInline { .. }
            | NodeKind::CustomInline
            | NodeKind::Emphasis
            | NodeKind::Strong
            | NodeKind::Link { .. }
            | NodeKind::Image { .. } => Err(unsupported(child)),
        })
        .collect()
}

fn translate_phrasing(parent: &Node) -> Result<Vec<Phrasing>, DecodeError> {
    parent
        .children()
        .iter()
        .map(|child| match child.kind() {
            NodeKind::Text { literal } => Ok(Phrasing::text(literal.as_str())),
            NodeKind::SoftBreak => Ok(Phrasing::text(" ")),
            NodeKind::Paragraph => Err(unexpected(child, parent)),
            NodeKind::Document
            | NodeKind::BlockQuote
            | NodeKind::List { .. }
            | NodeKind::Item
            | NodeKind::CodeBlock { .. }
            | NodeKind::HtmlBlock { .. }
            | NodeKind::CustomBlock
            | NodeKind::Heading { .. }
            | NodeKind::ThematicBreak
            | NodeKind::LineBreak
            | NodeKind::Code { .. }
            | NodeKind::HtmlInline { .. }
            | NodeKind::CustomInline
            | NodeKind::Emphasis
            | NodeKind::Strong
            | NodeKind::Link { .. }
            | NodeKind::Image { .. } => Err(unsupported(child)),
        })
        .collect()
}

fn unsupported(node: &Node) -> DecodeError {
    DecodeError::UnsupportedNode {
        kind: node.node_type(),
    }
}

fn unexpected(node: &Node, parent: &Node) -> DecodeError {
    DecodeError::UnexpectedChild {
        kind: node.node_type(),
        parent: parent.node_type(),
    }
}
