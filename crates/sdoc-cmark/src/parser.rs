//! Streaming CommonMark parser producing an owned syntax tree.
//!
//! Text is fed in one or more chunks and parsed once on [`Parser::finish`]
//! by pulldown-cmark. The event stream is folded into a [`Node`] tree with
//! the shape of the CommonMark reference model: list items always contain
//! block children, and adjacent text runs are merged when normalization is
//! enabled.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Tag, TagEnd};

use crate::ast::{AstRoot, ListType, Node, NodeKind, NodeType};

/// Parser configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Replace straight quotes, `--`, `---` and `...` with typographic punctuation.
    pub smart_punctuation: bool,
    /// Merge adjacent text nodes.
    pub normalize: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            smart_punctuation: true,
            normalize: true,
        }
    }
}

/// Streaming front-end over pulldown-cmark.
///
/// A parser accumulates text across [`feed`](Self::feed) calls that belong to
/// one document and resets itself on [`finish`](Self::finish), so one
/// instance can be reused sequentially for many documents.
#[derive(Debug, Default)]
pub struct Parser {
    options: ParseOptions,
    buffer: String,
}

impl Parser {
    /// Create a parser with smart punctuation and normalization enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    #[must_use]
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            buffer: String::new(),
        }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Append a chunk of input.
    pub fn feed(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Parse everything fed so far and reset the buffer.
    #[must_use = "the parsed tree is returned, the parser keeps nothing"]
    pub fn finish(&mut self) -> AstRoot {
        let text = std::mem::take(&mut self.buffer);
        let mut options = Options::empty();
        if self.options.smart_punctuation {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }

        let mut builder = TreeBuilder::new(self.options.normalize);
        for event in pulldown_cmark::Parser::new_ext(&text, options) {
            builder.event(event);
        }
        builder.finish()
    }
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Open node on the builder stack.
struct Frame {
    node: Node,
    /// Paragraph inserted around inline content of a tight list item.
    implicit: bool,
}

/// Folds pulldown-cmark events into a tree.
struct TreeBuilder {
    stack: Vec<Frame>,
    normalize: bool,
}

impl TreeBuilder {
    fn new(normalize: bool) -> Self {
        Self {
            stack: vec![Frame {
                node: Node::new(NodeKind::Document),
                implicit: false,
            }],
            normalize,
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.leaf(Node::new(NodeKind::Code {
                literal: code.into_string(),
            })),
            Event::Html(html) => {
                if self.top_type() == NodeType::HtmlBlock {
                    self.top_mut().append_literal(&html);
                } else {
                    self.leaf(Node::new(NodeKind::HtmlInline {
                        literal: html.into_string(),
                    }));
                }
            }
            Event::InlineHtml(html) => self.leaf(Node::new(NodeKind::HtmlInline {
                literal: html.into_string(),
            })),
            Event::SoftBreak => self.leaf(Node::new(NodeKind::SoftBreak)),
            Event::HardBreak => self.leaf(Node::new(NodeKind::LineBreak)),
            Event::Rule => self.leaf(Node::new(NodeKind::ThematicBreak)),
            Event::FootnoteReference(label)
            | Event::InlineMath(label)
            | Event::DisplayMath(label) => self.leaf(Node::with_children(
                NodeKind::CustomInline,
                vec![Node::text(label.into_string())],
            )),
            Event::TaskListMarker(_) => self.leaf(Node::new(NodeKind::CustomInline)),
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        let kind = match tag {
            Tag::Paragraph => {
                self.close_implicit();
                self.mark_list_loose();
                NodeKind::Paragraph
            }
            Tag::Heading { level, .. } => NodeKind::Heading {
                level: heading_level_to_num(level),
            },
            Tag::BlockQuote(_) => NodeKind::BlockQuote,
            Tag::CodeBlock(kind) => NodeKind::CodeBlock {
                info: match kind {
                    CodeBlockKind::Fenced(info) => info.into_string(),
                    CodeBlockKind::Indented => String::new(),
                },
                literal: String::new(),
            },
            Tag::HtmlBlock => NodeKind::HtmlBlock {
                literal: String::new(),
            },
            Tag::List(start) => NodeKind::List {
                list_type: match start {
                    Some(start) => ListType::Ordered { start },
                    None => ListType::Bullet,
                },
                tight: true,
            },
            Tag::Item => NodeKind::Item,
            Tag::Emphasis => NodeKind::Emphasis,
            Tag::Strong => NodeKind::Strong,
            Tag::Link {
                dest_url, title, ..
            } => NodeKind::Link {
                url: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => NodeKind::Image {
                url: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::Strikethrough | Tag::Superscript | Tag::Subscript => NodeKind::CustomInline,
            Tag::FootnoteDefinition(_)
            | Tag::MetadataBlock(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition
            | Tag::Table(_)
            | Tag::TableHead
            | Tag::TableRow
            | Tag::TableCell => NodeKind::CustomBlock,
        };
        self.open(Node::new(kind));
    }

    fn end_tag(&mut self, _tag: TagEnd) {
        self.close_implicit();
        self.close();
    }

    fn text(&mut self, text: &str) {
        match self.top_type() {
            NodeType::CodeBlock | NodeType::HtmlBlock => {
                self.top_mut().append_literal(text);
            }
            _ => {
                if self.normalize
                    && let Some(last) = self.top_mut().children_mut().last_mut()
                    && last.node_type() == NodeType::Text
                {
                    last.append_literal(text);
                } else {
                    self.leaf(Node::text(text));
                }
            }
        }
    }

    fn open(&mut self, node: Node) {
        self.prepare_for(node.node_type());
        self.stack.push(Frame {
            node,
            implicit: false,
        });
    }

    fn leaf(&mut self, node: Node) {
        self.prepare_for(node.node_type());
        self.top_mut().append_child(node);
    }

    /// Keep block and inline content in valid containers.
    fn prepare_for(&mut self, node_type: NodeType) {
        if node_type.is_block() {
            self.close_implicit();
        } else if self.top_type() == NodeType::Item {
            self.stack.push(Frame {
                node: Node::new(NodeKind::Paragraph),
                implicit: true,
            });
        }
    }

    fn close_implicit(&mut self) {
        while self.stack.last().is_some_and(|frame| frame.implicit) {
            self.close();
        }
    }

    /// A paragraph directly inside an item makes the enclosing list loose.
    fn mark_list_loose(&mut self) {
        if self.top_type() != NodeType::Item {
            return;
        }
        let len = self.stack.len();
        if len >= 2
            && let NodeKind::List { tight, .. } = self.stack[len - 2].node.kind_mut()
        {
            *tight = false;
        }
    }

    fn close(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        if let Some(frame) = self.stack.pop() {
            self.top_mut().append_child(frame.node);
        }
    }

    fn top_type(&self) -> NodeType {
        self.stack
            .last()
            .map_or(NodeType::Document, |frame| frame.node.node_type())
    }

    fn top_mut(&mut self) -> &mut Node {
        let last = self.stack.len() - 1;
        &mut self.stack[last].node
    }

    fn finish(mut self) -> AstRoot {
        while self.stack.len() > 1 {
            self.close();
        }
        let root = self
            .stack
            .pop()
            .map_or_else(|| Node::new(NodeKind::Document), |frame| frame.node);
        AstRoot::new(root)
    }
}
