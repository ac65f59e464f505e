//! Markdown generator.
//!
//! Converts an entity tree into a CommonMark syntax tree and serializes it
//! with [`render_commonmark`]. Each render builds its own tree and keeps its
//! own ancestor stack, so one generator can serve concurrent renders.
//!
//! # Heading levels
//!
//! | Entity | Level |
//! |---|---|
//! | File documentation header | 1 |
//! | Index heading | 1 |
//! | Entity, module or namespace documentation header | 2, or 3 below entity or namespace documentation |
//! | Heading | 4 |
//! | List section heading | 4 |
//! | Subheading | 5 |

use std::io;

use sdoc_cmark::{ListType, Node, NodeKind, RenderOptions, render_commonmark};

use crate::block::Block;
use crate::code_block::CodeBlock;
use crate::document::Document;
use crate::documentation::{
    Documentation, DocumentationBody, DocumentationHeader, EntityDocumentation, FileDocumentation,
};
use crate::entity::Entity;
use crate::highlight::{Highlighter, HtmlHighlighter};
use crate::index::IndexEntry;
use crate::kind::EntityKind;
use crate::link::LinkDestination;
use crate::linker::{LinkResolver, Linker};
use crate::list::ListEntry;
use crate::phrasing::{Phrasing, write_plain_text};
use crate::util::{anchor_id, escape_html};

/// Options of a [`MarkdownGenerator`].
#[derive(Clone, Debug)]
pub struct GeneratorOptions<'a> {
    /// Emit raw HTML: entity anchors, highlighted code blocks and `&mdash;`
    /// separators.
    pub html: bool,
    /// Prepended to every internal link URL.
    pub link_prefix: String,
    /// Extension of linked documents, without the dot.
    pub link_extension: String,
    /// Table consulted for unresolved documentation links.
    pub linker: Option<&'a Linker>,
}

impl Default for GeneratorOptions<'_> {
    fn default() -> Self {
        Self {
            html: false,
            link_prefix: String::new(),
            link_extension: "md".to_owned(),
            linker: None,
        }
    }
}

/// Renders entities as CommonMark, optionally with embedded HTML.
///
/// # Example
///
/// ```
/// use sdoc_markup::{Entity, GeneratorOptions, MarkdownGenerator, Paragraph, Phrasing};
///
/// let paragraph = Paragraph::new(vec![Phrasing::text("Hello world.")]);
/// let generator = MarkdownGenerator::new(GeneratorOptions::default());
/// assert_eq!(generator.render(&Entity::from(paragraph)), "Hello world.\n");
/// ```
pub struct MarkdownGenerator<'a> {
    options: GeneratorOptions<'a>,
    highlighter: Box<dyn Highlighter + 'a>,
}

impl<'a> MarkdownGenerator<'a> {
    /// Create a generator using [`HtmlHighlighter`] for HTML code blocks.
    #[must_use]
    pub fn new(options: GeneratorOptions<'a>) -> Self {
        Self {
            options,
            highlighter: Box::new(HtmlHighlighter),
        }
    }

    /// Replace the highlighter used for code blocks in HTML mode.
    #[must_use]
    pub fn with_highlighter<H: Highlighter + 'a>(mut self, highlighter: H) -> Self {
        self.highlighter = Box::new(highlighter);
        self
    }

    pub fn options(&self) -> &GeneratorOptions<'a> {
        &self.options
    }

    /// Render a standalone entity.
    ///
    /// Phrasing entities are wrapped in a paragraph, everything else in a
    /// document.
    #[must_use]
    pub fn render(&self, entity: &Entity) -> String {
        tracing::debug!(kind = %entity.kind(), html = self.options.html, "Rendering entity");
        render_commonmark(&self.entity_ast(entity), &Self::render_options())
    }

    /// Render the children of a document.
    #[must_use]
    pub fn render_document(&self, document: &Document) -> String {
        tracing::debug!(
            kind = %document.kind(),
            name = document.output_name().name(),
            "Rendering document"
        );
        render_commonmark(&self.document_ast(document), &Self::render_options())
    }

    /// Render a standalone entity into `out`.
    pub fn write_entity<W: io::Write>(&self, out: &mut W, entity: &Entity) -> io::Result<()> {
        out.write_all(self.render(entity).as_bytes())
    }

    /// Render the children of a document into `out`.
    pub fn write_document<W: io::Write>(&self, out: &mut W, document: &Document) -> io::Result<()> {
        out.write_all(self.render_document(document).as_bytes())
    }

    /// Build the CommonMark syntax tree of a standalone entity.
    #[must_use]
    pub fn entity_ast(&self, entity: &Entity) -> Node {
        let mut builder = TreeBuilder::new(self);
        match entity {
            Entity::Phrasing(phrasing) => {
                let mut root = Node::new(NodeKind::Paragraph);
                builder.phrasing(&mut root, phrasing);
                root
            }
            Entity::CodeToken(token) => Node::with_children(
                NodeKind::Paragraph,
                vec![Node::new(NodeKind::Code {
                    literal: token.text().to_owned(),
                })],
            ),
            Entity::Block(block) => {
                let mut root = Node::new(NodeKind::Document);
                builder.block(&mut root, block);
                root
            }
        }
    }

    /// Build the CommonMark syntax tree of a document.
    #[must_use]
    pub fn document_ast(&self, document: &Document) -> Node {
        let mut builder = TreeBuilder::new(self);
        let mut root = Node::new(NodeKind::Document);
        builder.blocks(&mut root, document.children());
        root
    }

    fn render_options() -> RenderOptions {
        RenderOptions { no_breaks: true }
    }
}

/// Per-render state.
struct TreeBuilder<'g> {
    html: bool,
    links: LinkResolver<'g>,
    highlighter: &'g dyn Highlighter,
    /// Kinds of the documentation entities enclosing the current one.
    ancestors: Vec<EntityKind>,
}

impl<'g> TreeBuilder<'g> {
    fn new(generator: &'g MarkdownGenerator<'_>) -> Self {
        let options = &generator.options;
        Self {
            html: options.html,
            links: LinkResolver::new(&options.link_prefix, &options.link_extension, options.linker),
            highlighter: generator.highlighter.as_ref(),
            ancestors: Vec::new(),
        }
    }

    fn blocks(&mut self, parent: &mut Node, blocks: &[Block]) {
        for block in blocks {
            self.block(parent, block);
        }
    }

    fn block(&mut self, parent: &mut Node, block: &Block) {
        match block {
            Block::Paragraph(paragraph) => {
                parent.append_child(self.paragraph(paragraph.children()));
            }
            Block::Heading(heading) => {
                parent.append_child(self.heading(4, heading.children()));
            }
            Block::Subheading(subheading) => {
                parent.append_child(self.heading(5, subheading.children()));
            }
            Block::UnorderedList(list) => {
                parent.append_child(self.list(ListType::Bullet, false, list.items()));
            }
            Block::OrderedList(list) => {
                parent.append_child(self.list(ListType::Ordered { start: 1 }, false, list.items()));
            }
            Block::BlockQuote(quote) => {
                let mut node = Node::new(NodeKind::BlockQuote);
                self.blocks(&mut node, quote.children());
                parent.append_child(node);
            }
            Block::CodeBlock(code) => parent.append_child(self.code_block(code)),
            Block::ThematicBreak => parent.append_child(Node::new(NodeKind::ThematicBreak)),
            Block::FileDocumentation(doc) => self.file_documentation(parent, doc),
            Block::EntityDocumentation(doc) => self.entity_documentation(parent, doc),
            Block::ModuleDocumentation(doc) => {
                // A grouping is a list item; outside an index it needs its own list.
                let mut list = Node::list(ListType::Bullet, false);
                self.grouping(&mut list, doc, EntityKind::ModuleDocumentation);
                parent.append_child(list);
            }
            Block::FileIndex(index) => {
                self.index(parent, index.heading().children(), index.entries());
            }
            Block::EntityIndex(index) => {
                self.index(parent, index.heading().children(), index.entries());
            }
            Block::ModuleIndex(index) => {
                self.index(parent, index.heading().children(), index.entries());
            }
        }
    }

    fn paragraph(&mut self, children: &[Phrasing]) -> Node {
        let mut node = Node::new(NodeKind::Paragraph);
        self.phrasings(&mut node, children);
        node
    }

    fn heading(&mut self, level: u8, children: &[Phrasing]) -> Node {
        let mut node = Node::heading(level);
        self.phrasings(&mut node, children);
        node
    }

    fn list(&mut self, list_type: ListType, tight: bool, entries: &[ListEntry]) -> Node {
        let mut list = Node::list(list_type, tight);
        for entry in entries {
            let mut item = Node::new(NodeKind::Item);
            match entry {
                ListEntry::Item(list_item) => self.blocks(&mut item, list_item.children()),
                ListEntry::TermDescription(term_description) => {
                    let paragraph = self.term_description(
                        term_description.term().children(),
                        Some(term_description.description().children()),
                    );
                    item.append_child(paragraph);
                }
            }
            list.append_child(item);
        }
        list
    }

    /// Paragraph `term - description`, or just `term` without description.
    fn term_description(&mut self, term: &[Phrasing], description: Option<&[Phrasing]>) -> Node {
        let mut paragraph = Node::new(NodeKind::Paragraph);
        self.phrasings(&mut paragraph, term);
        if let Some(description) = description {
            if self.html {
                paragraph.append_child(Node::new(NodeKind::HtmlInline {
                    literal: " &mdash; ".to_owned(),
                }));
            } else {
                paragraph.append_child(Node::text(" - "));
            }
            self.phrasings(&mut paragraph, description);
        }
        paragraph
    }

    fn code_block(&mut self, code: &CodeBlock) -> Node {
        if self.html {
            Node::html_block(self.highlighter.highlight(code, &self.links))
        } else {
            Node::new(NodeKind::CodeBlock {
                info: code.language().to_owned(),
                literal: code.source(),
            })
        }
    }

    /// Level of an entity, module or namespace documentation header.
    fn documentation_level(&self) -> u8 {
        let nested = self.ancestors.iter().any(|kind| {
            matches!(
                kind,
                EntityKind::EntityDocumentation | EntityKind::NamespaceDocumentation
            )
        });
        if nested { 3 } else { 2 }
    }

    fn header(&mut self, parent: &mut Node, header: Option<&DocumentationHeader>, level: u8) {
        let Some(header) = header else {
            return;
        };
        let mut heading = self.heading(level, header.heading().children());
        if let Some(module) = header.module() {
            heading.append_child(Node::text(format!(" [{module}]")));
        }
        parent.append_child(heading);
    }

    fn documentation_body(&mut self, parent: &mut Node, body: &DocumentationBody) {
        if self.html {
            // The open tag must end its line to start an HTML block.
            parent.append_child(Node::html_block(format!(
                "<a id=\"{}\">\n</a>",
                escape_html(&anchor_id(body.id().as_str()))
            )));
        }

        if let Some(synopsis) = body.synopsis() {
            parent.append_child(self.code_block(synopsis));
        }

        if let Some(brief) = body.brief() {
            parent.append_child(self.paragraph(brief.children()));
        }

        for section in body.inline_sections() {
            let mut paragraph = Node::new(NodeKind::Paragraph);
            paragraph.append_child(Node::with_children(
                NodeKind::Emphasis,
                vec![Node::text(section.name())],
            ));
            paragraph.append_child(Node::text(": "));
            self.phrasings(&mut paragraph, section.children());
            parent.append_child(paragraph);
        }

        if let Some(details) = body.details() {
            self.blocks(parent, details.children());
        }

        for section in body.list_sections() {
            parent.append_child(self.heading(4, &[Phrasing::text(section.name())]));
            parent.append_child(self.list(ListType::Bullet, true, section.items()));
        }
    }

    fn file_documentation(&mut self, parent: &mut Node, doc: &FileDocumentation) {
        self.header(parent, doc.body().header(), 1);
        self.documentation_body(parent, doc.body());

        self.ancestors.push(EntityKind::FileDocumentation);
        for child in doc.children() {
            self.entity_documentation(parent, child);
        }
        self.ancestors.pop();
    }

    fn entity_documentation(&mut self, parent: &mut Node, doc: &EntityDocumentation) {
        let level = self.documentation_level();
        self.header(parent, doc.body().header(), level);
        self.documentation_body(parent, doc.body());

        self.ancestors.push(EntityKind::EntityDocumentation);
        for child in doc.children() {
            self.entity_documentation(parent, child);
        }
        self.ancestors.pop();

        if doc.body().header().is_some() {
            parent.append_child(Node::new(NodeKind::ThematicBreak));
        }
    }

    /// Namespace or module documentation as an item of `list`.
    fn grouping<D>(&mut self, list: &mut Node, doc: &D, kind: EntityKind)
    where
        D: Documentation<Child = IndexEntry>,
    {
        let mut item = Node::new(NodeKind::Item);
        let level = self.documentation_level();
        self.header(&mut item, doc.body().header(), level);
        self.documentation_body(&mut item, doc.body());

        self.ancestors.push(kind);
        let entries = self.index_entries(doc.children());
        self.ancestors.pop();

        if !entries.children().is_empty() {
            item.append_child(entries);
        }
        list.append_child(item);
    }

    fn index(&mut self, parent: &mut Node, heading: &[Phrasing], entries: &[IndexEntry]) {
        parent.append_child(self.heading(1, heading));
        let list = self.index_entries(entries);
        if !list.children().is_empty() {
            parent.append_child(list);
        }
    }

    fn index_entries(&mut self, entries: &[IndexEntry]) -> Node {
        let mut list = Node::list(ListType::Bullet, false);
        for entry in entries {
            match entry {
                IndexEntry::Item(item) => {
                    let paragraph = self.term_description(
                        item.entity().children(),
                        item.brief().map(|brief| brief.children()),
                    );
                    list.append_child(Node::with_children(NodeKind::Item, vec![paragraph]));
                }
                IndexEntry::Namespace(doc) => {
                    self.grouping(&mut list, doc, EntityKind::NamespaceDocumentation);
                }
                IndexEntry::Module(doc) => {
                    self.grouping(&mut list, doc, EntityKind::ModuleDocumentation);
                }
            }
        }
        list
    }

    fn phrasings(&mut self, parent: &mut Node, children: &[Phrasing]) {
        for child in children {
            self.phrasing(parent, child);
        }
    }

    fn phrasing(&mut self, parent: &mut Node, phrasing: &Phrasing) {
        match phrasing {
            Phrasing::Text(text) => parent.append_child(Node::text(text.string())),
            Phrasing::Emphasis(emph) => {
                let mut node = Node::new(NodeKind::Emphasis);
                self.phrasings(&mut node, emph.children());
                parent.append_child(node);
            }
            Phrasing::StrongEmphasis(strong) => {
                let mut node = Node::new(NodeKind::Strong);
                self.phrasings(&mut node, strong.children());
                parent.append_child(node);
            }
            Phrasing::Code(code) => {
                // Code spans hold plain text only.
                let mut literal = String::new();
                write_plain_text(code.children(), &mut literal);
                parent.append_child(Node::new(NodeKind::Code { literal }));
            }
            Phrasing::SoftBreak => parent.append_child(Node::new(NodeKind::SoftBreak)),
            Phrasing::HardBreak => parent.append_child(Node::new(NodeKind::LineBreak)),
            Phrasing::ExternalLink(link) => {
                let mut node = Node::link(link.url(), link.title());
                self.phrasings(&mut node, link.children());
                parent.append_child(node);
            }
            Phrasing::DocumentationLink(link) => {
                if let Some(url) = self.links.url(link.destination()) {
                    let mut node = Node::link(url, link.title());
                    self.phrasings(&mut node, link.children());
                    parent.append_child(node);
                } else {
                    if let LinkDestination::Unresolved(id) = link.destination() {
                        tracing::warn!(id = %id, "Unresolved documentation link, rendering text only");
                    }
                    self.phrasings(parent, link.children());
                }
            }
        }
    }
}
