//! Output documents.

use crate::block::Block;
use crate::id::OutputName;
use crate::kind::EntityKind;

/// Role of an output document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Top-level document, e.g. the index page.
    Main,
    /// Document generated for one file.
    Sub,
    /// Document produced from a user template.
    Template,
}

/// Document written to one output file.
///
/// Documents are rendered through
/// [`MarkdownGenerator::render_document`](crate::MarkdownGenerator::render_document),
/// which emits their children directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    kind: DocumentKind,
    title: String,
    output_name: OutputName,
    children: Vec<Block>,
}

impl Document {
    #[must_use]
    pub fn new(
        kind: DocumentKind,
        title: impl Into<String>,
        output_name: OutputName,
        children: Vec<Block>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            output_name,
            children,
        }
    }

    pub fn document_kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn kind(&self) -> EntityKind {
        match self.kind {
            DocumentKind::Main => EntityKind::MainDocument,
            DocumentKind::Sub => EntityKind::Subdocument,
            DocumentKind::Template => EntityKind::TemplateDocument,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn output_name(&self) -> &OutputName {
        &self.output_name
    }

    pub fn children(&self) -> &[Block] {
        &self.children
    }
}
