//! Owned CommonMark syntax tree.
//!
//! The node set mirrors the CommonMark reference model: every node has one
//! [`NodeKind`] and an ordered list of children. Leaf data (literals, URLs,
//! fence info) lives inside the kind.

use std::fmt;

/// List marker style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListType {
    /// `-` bullet list.
    Bullet,
    /// Numbered list starting at `start`.
    Ordered {
        /// Number of the first item.
        start: u64,
    },
}

/// Kind and payload of a syntax tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    BlockQuote,
    List {
        list_type: ListType,
        /// Tight lists separate items without blank lines.
        tight: bool,
    },
    Item,
    CodeBlock {
        /// Fence info string (language), empty for none.
        info: String,
        literal: String,
    },
    HtmlBlock {
        literal: String,
    },
    /// Block construct outside the CommonMark core (tables, footnotes, ...).
    CustomBlock,
    Paragraph,
    Heading {
        /// Heading level (1-6).
        level: u8,
    },
    ThematicBreak,
    Text {
        literal: String,
    },
    SoftBreak,
    LineBreak,
    Code {
        literal: String,
    },
    HtmlInline {
        literal: String,
    },
    /// Inline construct outside the CommonMark core (strikethrough, math, ...).
    CustomInline,
    Emphasis,
    Strong,
    Link {
        url: String,
        title: String,
    },
    Image {
        url: String,
        title: String,
    },
}

impl NodeKind {
    /// Payload-free type tag of this kind.
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Document => NodeType::Document,
            Self::BlockQuote => NodeType::BlockQuote,
            Self::List { .. } => NodeType::List,
            Self::Item => NodeType::Item,
            Self::CodeBlock { .. } => NodeType::CodeBlock,
            Self::HtmlBlock { .. } => NodeType::HtmlBlock,
            Self::CustomBlock => NodeType::CustomBlock,
            Self::Paragraph => NodeType::Paragraph,
            Self::Heading { .. } => NodeType::Heading,
            Self::ThematicBreak => NodeType::ThematicBreak,
            Self::Text { .. } => NodeType::Text,
            Self::SoftBreak => NodeType::SoftBreak,
            Self::LineBreak => NodeType::LineBreak,
            Self::Code { .. } => NodeType::Code,
            Self::HtmlInline { .. } => NodeType::HtmlInline,
            Self::CustomInline => NodeType::CustomInline,
            Self::Emphasis => NodeType::Emphasis,
            Self::Strong => NodeType::Strong,
            Self::Link { .. } => NodeType::Link,
            Self::Image { .. } => NodeType::Image,
        }
    }
}

/// Type tag of a node, without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeType {
    Document,
    BlockQuote,
    List,
    Item,
    CodeBlock,
    HtmlBlock,
    CustomBlock,
    Paragraph,
    Heading,
    ThematicBreak,
    Text,
    SoftBreak,
    LineBreak,
    Code,
    HtmlInline,
    CustomInline,
    Emphasis,
    Strong,
    Link,
    Image,
}

impl NodeType {
    /// Snake-case name of the type, as used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::BlockQuote => "block_quote",
            Self::List => "list",
            Self::Item => "item",
            Self::CodeBlock => "code_block",
            Self::HtmlBlock => "html_block",
            Self::CustomBlock => "custom_block",
            Self::Paragraph => "paragraph",
            Self::Heading => "heading",
            Self::ThematicBreak => "thematic_break",
            Self::Text => "text",
            Self::SoftBreak => "softbreak",
            Self::LineBreak => "linebreak",
            Self::Code => "code",
            Self::HtmlInline => "html_inline",
            Self::CustomInline => "custom_inline",
            Self::Emphasis => "emph",
            Self::Strong => "strong",
            Self::Link => "link",
            Self::Image => "image",
        }
    }

    /// Whether nodes of this type are block-level containers or leaves.
    #[must_use]
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Self::Document
                | Self::BlockQuote
                | Self::List
                | Self::Item
                | Self::CodeBlock
                | Self::HtmlBlock
                | Self::CustomBlock
                | Self::Paragraph
                | Self::Heading
                | Self::ThematicBreak
        )
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A syntax tree node owning its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Node>,
}

impl Node {
    /// Create a node without children.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Create a node with the given children.
    #[must_use]
    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    /// Create a text node.
    #[must_use]
    pub fn text(literal: impl Into<String>) -> Self {
        Self::new(NodeKind::Text {
            literal: literal.into(),
        })
    }

    /// Create a heading node without content.
    #[must_use]
    pub fn heading(level: u8) -> Self {
        Self::new(NodeKind::Heading { level })
    }

    /// Create an empty list.
    #[must_use]
    pub fn list(list_type: ListType, tight: bool) -> Self {
        Self::new(NodeKind::List { list_type, tight })
    }

    /// Create a raw HTML block.
    #[must_use]
    pub fn html_block(literal: impl Into<String>) -> Self {
        Self::new(NodeKind::HtmlBlock {
            literal: literal.into(),
        })
    }

    /// Create a link node.
    #[must_use]
    pub fn link(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(NodeKind::Link {
            url: url.into(),
            title: title.into(),
        })
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    /// Children in document order (the sibling chain).
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    pub fn last_child(&self) -> Option<&Node> {
        self.children.last()
    }

    pub(crate) fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Append a child at the end of the sibling chain.
    pub fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Literal content of text, code, code block and HTML nodes.
    pub fn literal(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { literal }
            | NodeKind::Code { literal }
            | NodeKind::CodeBlock { literal, .. }
            | NodeKind::HtmlBlock { literal }
            | NodeKind::HtmlInline { literal } => Some(literal),
            _ => None,
        }
    }

    /// Append to the literal of a literal-carrying node.
    ///
    /// Returns `false` if the node has no literal.
    pub fn append_literal(&mut self, text: &str) -> bool {
        match &mut self.kind {
            NodeKind::Text { literal }
            | NodeKind::Code { literal }
            | NodeKind::CodeBlock { literal, .. }
            | NodeKind::HtmlBlock { literal }
            | NodeKind::HtmlInline { literal } => {
                literal.push_str(text);
                true
            }
            _ => false,
        }
    }
}

/// Root of a parsed document.
///
/// Owns the whole tree; the tree is dropped together with the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstRoot {
    root: Node,
}

impl AstRoot {
    /// Wrap a node as a root.
    #[must_use]
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn get(&self) -> &Node {
        &self.root
    }

    /// Consume the root and return the node.
    #[must_use]
    pub fn into_node(self) -> Node {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_chain() {
        let mut paragraph = Node::new(NodeKind::Paragraph);
        paragraph.append_child(Node::text("a"));
        paragraph.append_child(Node::new(NodeKind::SoftBreak));
        paragraph.append_child(Node::text("b"));

        assert_eq!(paragraph.first_child().and_then(Node::literal), Some("a"));
        assert_eq!(paragraph.last_child().and_then(Node::literal), Some("b"));
        assert_eq!(paragraph.children().len(), 3);
    }

    #[test]
    fn test_append_literal() {
        let mut block = Node::new(NodeKind::CodeBlock {
            info: String::new(),
            literal: "int".to_owned(),
        });
        assert!(block.append_literal(" x;"));
        assert_eq!(block.literal(), Some("int x;"));

        let mut emph = Node::new(NodeKind::Emphasis);
        assert!(!emph.append_literal("x"));
    }

    #[test]
    fn test_node_type_names() {
        assert_eq!(NodeType::BlockQuote.to_string(), "block_quote");
        assert_eq!(NodeType::SoftBreak.to_string(), "softbreak");
        assert!(NodeType::Paragraph.is_block());
        assert!(!NodeType::Emphasis.is_block());
    }
}
