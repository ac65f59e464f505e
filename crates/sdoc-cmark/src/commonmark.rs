//! CommonMark writer for the syntax tree.
//!
//! Renders a [`Node`] back into CommonMark text. Containers render their
//! children to text first and then prefix the resulting lines (`> ` for
//! block quotes, the list marker and its indentation for items), so nesting
//! works to any depth. Lines are never wrapped.

use crate::ast::{ListType, Node, NodeKind, NodeType};

/// Rendering options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render soft breaks as spaces instead of newlines.
    pub no_breaks: bool,
}

/// Render a tree as CommonMark text.
///
/// Block nodes render as blocks; a bare inline node renders as one line.
#[must_use]
pub fn render_commonmark(root: &Node, options: &RenderOptions) -> String {
    let writer = CommonMarkWriter {
        options: *options,
        in_heading: false,
    };
    if root.node_type().is_block() {
        writer.block(root)
    } else {
        let mut out = String::new();
        writer.inline(root, &mut out);
        out.push('\n');
        out
    }
}

struct CommonMarkWriter {
    options: RenderOptions,
    /// Heading content must stay on one line.
    in_heading: bool,
}

impl CommonMarkWriter {
    /// Render a sequence of sibling blocks separated by blank lines.
    ///
    /// List tightness only affects the separation between items, see
    /// [`Self::list`].
    fn blocks(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        let mut previous: Option<&Node> = None;
        for node in nodes {
            let rendered = self.block(node);
            if rendered.is_empty() {
                continue;
            }
            if let Some(previous) = previous {
                if is_same_list(previous, node) {
                    out.push_str("\n<!-- end list -->\n\n");
                } else {
                    out.push('\n');
                }
            }
            out.push_str(&rendered);
            previous = Some(node);
        }
        out
    }

    fn block(&self, node: &Node) -> String {
        match node.kind() {
            NodeKind::Document | NodeKind::CustomBlock => self.blocks(node.children()),
            NodeKind::Paragraph => {
                let mut out = String::new();
                self.inlines(node.children(), &mut out);
                out.push('\n');
                out
            }
            NodeKind::Heading { level } => {
                let writer = CommonMarkWriter {
                    options: RenderOptions { no_breaks: true },
                    in_heading: true,
                };
                let mut content = String::new();
                writer.inlines(node.children(), &mut content);
                let content = escape_closing_sequence(&content.replace('\n', " "));
                let marker = "#".repeat(usize::from(*level));
                if content.is_empty() {
                    format!("{marker}\n")
                } else {
                    format!("{marker} {content}\n")
                }
            }
            NodeKind::ThematicBreak => "-----\n".to_owned(),
            NodeKind::CodeBlock { info, literal } => code_block(info, literal),
            NodeKind::HtmlBlock { literal } => {
                let mut out = literal.clone();
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                out
            }
            NodeKind::BlockQuote => {
                let content = self.blocks(node.children());
                if content.is_empty() {
                    return ">\n".to_owned();
                }
                let mut out = String::with_capacity(content.len() * 2);
                for line in content.lines() {
                    if line.is_empty() {
                        out.push_str(">\n");
                    } else {
                        out.push_str("> ");
                        out.push_str(line);
                        out.push('\n');
                    }
                }
                out
            }
            NodeKind::List { list_type, tight } => self.list(node, *list_type, *tight),
            NodeKind::Item => self.item(node, "-"),
            NodeKind::Text { .. }
            | NodeKind::SoftBreak
            | NodeKind::LineBreak
            | NodeKind::Code { .. }
            | NodeKind::HtmlInline { .. }
            | NodeKind::CustomInline
            | NodeKind::Emphasis
            | NodeKind::Strong
            | NodeKind::Link { .. }
            | NodeKind::Image { .. } => {
                let mut out = String::new();
                self.inline(node, &mut out);
                out.push('\n');
                out
            }
        }
    }

    fn list(&self, node: &Node, list_type: ListType, tight: bool) -> String {
        let mut out = String::new();
        for (index, item) in node.children().iter().enumerate() {
            if index > 0 && !tight {
                out.push('\n');
            }
            let marker = match list_type {
                ListType::Bullet => "-".to_owned(),
                ListType::Ordered { start } => format!("{}.", start + index as u64),
            };
            out.push_str(&self.item(item, &marker));
        }
        out
    }

    fn item(&self, item: &Node, marker: &str) -> String {
        let content = self.blocks(item.children());
        if content.is_empty() {
            return format!("{marker}\n");
        }

        let indent = " ".repeat(marker.len() + 1);
        let mut out = String::with_capacity(content.len() + indent.len() * 4);
        for (index, line) in content.lines().enumerate() {
            if index == 0 {
                out.push_str(marker);
                out.push(' ');
                out.push_str(line);
                out.push('\n');
            } else if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&indent);
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    fn inlines(&self, nodes: &[Node], out: &mut String) {
        for node in nodes {
            self.inline(node, out);
        }
    }

    fn inline(&self, node: &Node, out: &mut String) {
        match node.kind() {
            NodeKind::Text { literal } => {
                let at_line_start = out.is_empty() || out.ends_with('\n');
                escape_text(literal, at_line_start, out);
            }
            NodeKind::SoftBreak => {
                out.push(if self.options.no_breaks { ' ' } else { '\n' });
            }
            NodeKind::LineBreak if self.in_heading => out.push(' '),
            NodeKind::LineBreak => out.push_str("\\\n"),
            NodeKind::Code { literal } => code_span(literal, out),
            NodeKind::HtmlInline { literal } => out.push_str(literal),
            NodeKind::Emphasis | NodeKind::Strong => self.delimited(node, '*', out),
            NodeKind::Link { url, title } => {
                out.push('[');
                self.inlines(node.children(), out);
                out.push_str("](");
                link_destination(url, title, out);
                out.push(')');
            }
            NodeKind::Image { url, title } => {
                out.push_str("![");
                self.inlines(node.children(), out);
                out.push_str("](");
                link_destination(url, title, out);
                out.push(')');
            }
            NodeKind::CustomInline
            | NodeKind::Document
            | NodeKind::BlockQuote
            | NodeKind::List { .. }
            | NodeKind::Item
            | NodeKind::CodeBlock { .. }
            | NodeKind::HtmlBlock { .. }
            | NodeKind::CustomBlock
            | NodeKind::Paragraph
            | NodeKind::Heading { .. }
            | NodeKind::ThematicBreak => self.inlines(node.children(), out),
        }
    }

    /// Emphasis or strong emphasis delimited by `c`.
    ///
    /// A nested emphasis touching the delimiters of its parent switches to
    /// the other delimiter character, otherwise `*` inside `*` would read as
    /// strong emphasis. Leading and trailing whitespace goes outside the
    /// delimiters so they stay flanking.
    fn delimited(&self, node: &Node, c: char, out: &mut String) {
        let count = if node.node_type() == NodeType::Strong { 2 } else { 1 };
        let other = if c == '*' { '_' } else { '*' };

        let mut content = String::new();
        let children = node.children();
        for (index, child) in children.iter().enumerate() {
            let at_boundary = index == 0 || index + 1 == children.len();
            match child.kind() {
                NodeKind::Emphasis | NodeKind::Strong if at_boundary => {
                    self.delimited(child, other, &mut content);
                }
                _ => self.inline(child, &mut content),
            }
        }

        let trimmed = content.trim_start_matches([' ', '\t', '\n']);
        let leading = &content[..content.len() - trimmed.len()];
        let inner = trimmed.trim_end_matches([' ', '\t', '\n']);
        let trailing = &trimmed[inner.len()..];

        out.push_str(leading);
        if !inner.is_empty() {
            let delimiter = c.to_string().repeat(count);
            out.push_str(&delimiter);
            out.push_str(inner);
            out.push_str(&delimiter);
        }
        out.push_str(trailing);
    }
}

/// Two adjacent lists of the same type would merge into one when re-parsed.
fn is_same_list(previous: &Node, next: &Node) -> bool {
    match (previous.kind(), next.kind()) {
        (NodeKind::List { list_type: a, .. }, NodeKind::List { list_type: b, .. }) => {
            matches!(
                (a, b),
                (ListType::Bullet, ListType::Bullet)
                    | (ListType::Ordered { .. }, ListType::Ordered { .. })
            )
        }
        _ => false,
    }
}

/// Escape a trailing `#` run that would read as a closing sequence.
fn escape_closing_sequence(content: &str) -> String {
    let inner = content.trim_end_matches('#');
    if inner.len() == content.len() || !(inner.is_empty() || inner.ends_with([' ', '\t'])) {
        return content.to_owned();
    }
    format!("{inner}\\{}", &content[inner.len()..])
}

/// Length of the longest run of `c` in `s`.
fn longest_run(s: &str, c: char) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for ch in s.chars() {
        if ch == c {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

fn code_block(info: &str, literal: &str) -> String {
    let fence_char = if info.contains('`') { '~' } else { '`' };
    let fence = fence_char
        .to_string()
        .repeat((longest_run(literal, fence_char) + 1).max(3));

    let mut out = String::with_capacity(literal.len() + fence.len() * 2 + info.len() + 2);
    out.push_str(&fence);
    out.push_str(info);
    out.push('\n');
    out.push_str(literal);
    if !literal.is_empty() && !literal.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&fence);
    out.push('\n');
    out
}

fn code_span(literal: &str, out: &mut String) {
    let literal = literal.replace('\n', " ");

    // Shortest backtick string that does not occur as a run in the content.
    let mut runs = Vec::new();
    let mut current = 0;
    for ch in literal.chars().chain(std::iter::once('\0')) {
        if ch == '`' {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    let mut count = 1;
    while runs.contains(&count) {
        count += 1;
    }
    let fence = "`".repeat(count);

    let all_spaces = literal.chars().all(|c| c == ' ');
    let pad = literal.starts_with('`')
        || literal.ends_with('`')
        || (!all_spaces && literal.starts_with(' ') && literal.ends_with(' '));

    out.push_str(&fence);
    if pad {
        out.push(' ');
    }
    out.push_str(&literal);
    if pad {
        out.push(' ');
    }
    out.push_str(&fence);
}

fn link_destination(url: &str, title: &str, out: &mut String) {
    let needs_brackets = url.is_empty()
        || url
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '(' | ')' | '<' | '>'));
    if needs_brackets {
        out.push('<');
        for c in url.chars() {
            if matches!(c, '<' | '>' | '\\') {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('>');
    } else {
        out.push_str(url);
    }

    if !title.is_empty() {
        out.push_str(" \"");
        for c in title.chars() {
            if matches!(c, '"' | '\\') {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('"');
    }
}

/// Whether `s` starts with something that looks like an HTML entity.
fn starts_with_entity(s: &str) -> bool {
    let Some(end) = s.find(';') else {
        return false;
    };
    let name = &s[1..end];
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '#')
}

/// Escape text so it re-parses as the same literal.
fn escape_text(literal: &str, mut at_line_start: bool, out: &mut String) {
    let mut chars = literal.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        let next = chars.peek().map(|&(_, next)| next);
        if at_line_start {
            match c {
                '#' | '>' | '~' | '|' => out.push('\\'),
                '-' | '+' | '=' if next.is_none_or(|n| n == ' ' || n == c) => out.push('\\'),
                '0'..='9' => {
                    // `1.` or `1)` at line start starts an ordered list.
                    let digits: String = literal[index..]
                        .chars()
                        .take_while(char::is_ascii_digit)
                        .collect();
                    let after = literal[index + digits.len()..].chars().next();
                    if matches!(after, Some('.' | ')')) {
                        out.push_str(&digits);
                        out.push('\\');
                        for _ in 1..digits.len() {
                            chars.next();
                        }
                        at_line_start = false;
                        continue;
                    }
                }
                _ => {}
            }
        }

        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' => out.push('\\'),
            '&' if starts_with_entity(&literal[index..]) => out.push('\\'),
            _ => {}
        }
        out.push(c);
        at_line_start = c == '\n';
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::parser::Parser;

    fn render(root: &Node) -> String {
        render_commonmark(root, &RenderOptions { no_breaks: true })
    }

    fn paragraph(children: Vec<Node>) -> Node {
        Node::with_children(NodeKind::Paragraph, children)
    }

    fn document(children: Vec<Node>) -> Node {
        Node::with_children(NodeKind::Document, children)
    }

    fn item(children: Vec<Node>) -> Node {
        Node::with_children(NodeKind::Item, children)
    }

    fn reparse(text: &str) -> Node {
        let mut parser = Parser::new();
        parser.feed(text);
        parser.finish().into_node()
    }

    #[test]
    fn test_soft_break_as_space() {
        let root = paragraph(vec![
            Node::text("Hello"),
            Node::new(NodeKind::SoftBreak),
            Node::text("world."),
        ]);
        assert_eq!(render(&root), "Hello world.\n");
        assert_eq!(
            render_commonmark(&root, &RenderOptions::default()),
            "Hello\nworld.\n"
        );
    }

    #[test]
    fn test_paragraphs_separated_by_blank_line() {
        let root = document(vec![
            paragraph(vec![Node::text("one")]),
            paragraph(vec![Node::text("two")]),
        ]);
        assert_eq!(render(&root), "one\n\ntwo\n");
    }

    #[test]
    fn test_heading_levels() {
        let mut heading = Node::heading(4);
        heading.append_child(Node::text("Parameters"));
        assert_eq!(render(&document(vec![heading])), "#### Parameters\n");
        assert_eq!(render(&document(vec![Node::heading(2)])), "##\n");
    }

    #[test]
    fn test_inline_markup() {
        let root = paragraph(vec![
            Node::with_children(NodeKind::Emphasis, vec![Node::text("a")]),
            Node::text(" "),
            Node::with_children(NodeKind::Strong, vec![Node::text("b")]),
            Node::text(" "),
            Node::new(NodeKind::Code {
                literal: "c".to_owned(),
            }),
        ]);
        assert_eq!(render(&root), "*a* **b** `c`\n");
    }

    #[test]
    fn test_link_with_title() {
        let mut link = Node::link("foo.md#standardese-bar", "Bar");
        link.append_child(Node::text("bar"));
        assert_eq!(
            render(&paragraph(vec![link])),
            "[bar](foo.md#standardese-bar \"Bar\")\n"
        );
    }

    #[test]
    fn test_link_destination_with_spaces() {
        let mut link = Node::link("a b", "");
        link.append_child(Node::text("x"));
        assert_eq!(render(&paragraph(vec![link])), "[x](<a b>)\n");
    }

    #[test]
    fn test_code_block_fences() {
        let root = document(vec![Node::new(NodeKind::CodeBlock {
            info: "cpp".to_owned(),
            literal: "int x;".to_owned(),
        })]);
        assert_eq!(render(&root), "```cpp\nint x;\n```\n");

        let root = document(vec![Node::new(NodeKind::CodeBlock {
            info: String::new(),
            literal: "````\n".to_owned(),
        })]);
        assert_eq!(render(&root), "`````\n````\n`````\n");
    }

    #[test]
    fn test_code_span_with_backticks() {
        let root = paragraph(vec![Node::new(NodeKind::Code {
            literal: "a`b".to_owned(),
        })]);
        assert_eq!(render(&root), "``a`b``\n");

        let root = paragraph(vec![Node::new(NodeKind::Code {
            literal: "`a".to_owned(),
        })]);
        assert_eq!(render(&root), "`` `a ``\n");
    }

    #[test]
    fn test_tight_bullet_list() {
        let mut list = Node::list(ListType::Bullet, true);
        list.append_child(item(vec![paragraph(vec![Node::text("one")])]));
        list.append_child(item(vec![paragraph(vec![Node::text("two")])]));
        assert_eq!(render(&document(vec![list])), "- one\n- two\n");
    }

    #[test]
    fn test_tight_item_with_several_blocks() {
        let mut list = Node::list(ListType::Bullet, true);
        list.append_child(item(vec![
            paragraph(vec![Node::text("first")]),
            paragraph(vec![Node::text("second")]),
            Node::new(NodeKind::ThematicBreak),
        ]));
        list.append_child(item(vec![paragraph(vec![Node::text("next")])]));

        let output = render(&document(vec![list]));
        assert_eq!(output, "- first\n\n  second\n\n  -----\n- next\n");

        let reparsed = reparse(&output);
        let list = &reparsed.children()[0];
        assert_eq!(list.node_type(), NodeType::List);
        let types: Vec<NodeType> = list.children()[0]
            .children()
            .iter()
            .map(Node::node_type)
            .collect();
        assert_eq!(
            types,
            vec![NodeType::Paragraph, NodeType::Paragraph, NodeType::ThematicBreak]
        );
    }

    #[test]
    fn test_nested_emphasis_keeps_structure() {
        let root = paragraph(vec![Node::with_children(
            NodeKind::Emphasis,
            vec![Node::with_children(NodeKind::Emphasis, vec![Node::text("a")])],
        )]);
        let output = render(&root);
        assert_eq!(output, "*_a_*\n");

        let reparsed = reparse(&output);
        let emphasis = &reparsed.children()[0].children()[0];
        assert_eq!(emphasis.node_type(), NodeType::Emphasis);
        assert_eq!(emphasis.children()[0].node_type(), NodeType::Emphasis);

        let root = paragraph(vec![Node::with_children(
            NodeKind::Strong,
            vec![
                Node::with_children(NodeKind::Emphasis, vec![Node::text("a")]),
                Node::text(" b"),
            ],
        )]);
        assert_eq!(render(&root), "**_a_ b**\n");
    }

    #[test]
    fn test_emphasis_whitespace_outside_delimiters() {
        let root = paragraph(vec![Node::with_children(
            NodeKind::Emphasis,
            vec![Node::text(" note ")],
        )]);
        assert_eq!(render(&root), " *note* \n");

        let root = paragraph(vec![
            Node::text("a"),
            Node::with_children(NodeKind::Emphasis, vec![Node::text(" note")]),
        ]);
        let output = render(&root);
        assert_eq!(output, "a *note*\n");
        let reparsed = reparse(&output);
        let paragraph = &reparsed.children()[0];
        assert_eq!(paragraph.node_type(), NodeType::Paragraph);
        assert_eq!(paragraph.children()[1].node_type(), NodeType::Emphasis);
    }

    #[test]
    fn test_heading_closing_sequence_escaped() {
        let mut heading = Node::heading(4);
        heading.append_child(Node::text("operator #"));
        let output = render(&document(vec![heading]));
        assert_eq!(output, "#### operator \\#\n");

        let reparsed = reparse(&output);
        assert_eq!(
            reparsed.children()[0].children()[0].literal(),
            Some("operator #")
        );

        let mut heading = Node::heading(4);
        heading.append_child(Node::text("a#"));
        assert_eq!(render(&document(vec![heading])), "#### a#\n");
    }

    #[test]
    fn test_heading_line_break_as_space() {
        let mut heading = Node::heading(4);
        heading.append_child(Node::text("a"));
        heading.append_child(Node::new(NodeKind::LineBreak));
        heading.append_child(Node::text("b"));
        assert_eq!(render(&document(vec![heading])), "#### a b\n");
    }

    #[test]
    fn test_loose_ordered_list() {
        let mut list = Node::list(ListType::Ordered { start: 1 }, false);
        list.append_child(item(vec![paragraph(vec![Node::text("one")])]));
        list.append_child(item(vec![
            paragraph(vec![Node::text("two")]),
            paragraph(vec![Node::text("more")]),
        ]));
        assert_eq!(
            render(&document(vec![list])),
            "1. one\n\n2. two\n\n   more\n"
        );
    }

    #[test]
    fn test_nested_list_indentation() {
        let mut inner = Node::list(ListType::Bullet, false);
        inner.append_child(item(vec![paragraph(vec![Node::text("inner")])]));
        let mut outer = Node::list(ListType::Bullet, false);
        outer.append_child(item(vec![paragraph(vec![Node::text("outer")]), inner]));
        assert_eq!(render(&document(vec![outer])), "- outer\n\n  - inner\n");
    }

    #[test]
    fn test_adjacent_lists_are_separated() {
        let mut first = Node::list(ListType::Bullet, true);
        first.append_child(item(vec![paragraph(vec![Node::text("a")])]));
        let mut second = Node::list(ListType::Bullet, true);
        second.append_child(item(vec![paragraph(vec![Node::text("b")])]));
        assert_eq!(
            render(&document(vec![first, second])),
            "- a\n\n<!-- end list -->\n\n- b\n"
        );
    }

    #[test]
    fn test_block_quote() {
        let quote = Node::with_children(
            NodeKind::BlockQuote,
            vec![
                paragraph(vec![Node::text("one")]),
                paragraph(vec![Node::text("two")]),
            ],
        );
        assert_eq!(render(&document(vec![quote])), "> one\n>\n> two\n");
    }

    #[test]
    fn test_thematic_break_and_html() {
        let root = document(vec![
            Node::html_block("<a id=\"standardese-foo\"/>"),
            Node::new(NodeKind::ThematicBreak),
        ]);
        assert_eq!(render(&root), "<a id=\"standardese-foo\"/>\n\n-----\n");
    }

    #[test]
    fn test_escaping() {
        let mut out = String::new();
        escape_text("a *b* [c] `d` <e>", false, &mut out);
        assert_eq!(out, r"a \*b\* \[c\] \`d\` \<e>");

        let mut out = String::new();
        escape_text("# not a heading", true, &mut out);
        assert_eq!(out, r"\# not a heading");

        let mut out = String::new();
        escape_text("1. not a list", true, &mut out);
        assert_eq!(out, r"1\. not a list");

        let mut out = String::new();
        escape_text("- item", true, &mut out);
        assert_eq!(out, r"\- item");

        let mut out = String::new();
        escape_text("-5 and a & b", true, &mut out);
        assert_eq!(out, "-5 and a & b");

        let mut out = String::new();
        escape_text("&amp;", false, &mut out);
        assert_eq!(out, r"\&amp;");
    }

    #[test]
    fn test_escaped_text_reparses_to_literal() {
        let literal = "# a *b* 1. [c](d) &amp; <e>";
        let root = document(vec![paragraph(vec![Node::text(literal)])]);
        let reparsed = reparse(&render(&root));
        let paragraph = &reparsed.children()[0];
        assert_eq!(paragraph.children().len(), 1);
        assert_eq!(paragraph.children()[0].literal(), Some(literal));
    }
}
