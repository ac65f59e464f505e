//! Code block highlighting for HTML output.

use std::fmt::Write;

use crate::code_block::{CodeBlock, CodeFragment, TokenKind};
use crate::linker::LinkResolver;
use crate::phrasing::write_plain_text;
use crate::util::escape_html;

/// Renders a code block as raw HTML.
///
/// Used by the generator in HTML mode instead of a fenced code block. The
/// result is embedded as an HTML block, so it must not contain blank lines
/// outside of a `<pre>` element.
pub trait Highlighter: Send + Sync {
    fn highlight(&self, block: &CodeBlock, links: &LinkResolver<'_>) -> String;
}

/// Default highlighter.
///
/// Produces `<pre><code class="standardese-language-<lang>">` with one
/// `<span class="standardese-code-<kind>">` per token. Plain text tokens are
/// not wrapped; links become `<a>` elements when they resolve.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlHighlighter;

impl Highlighter for HtmlHighlighter {
    fn highlight(&self, block: &CodeBlock, links: &LinkResolver<'_>) -> String {
        let mut out = String::with_capacity(128);
        if block.language().is_empty() {
            out.push_str("<pre><code>");
        } else {
            write!(
                out,
                r#"<pre><code class="standardese-language-{}">"#,
                escape_html(block.language())
            )
            .unwrap();
        }

        for fragment in block.fragments() {
            match fragment {
                CodeFragment::Token(token) => match token.token_kind() {
                    TokenKind::Text => out.push_str(&escape_html(token.text())),
                    kind => write!(
                        out,
                        r#"<span class="standardese-code-{}">{}</span>"#,
                        kind.as_str(),
                        escape_html(token.text())
                    )
                    .unwrap(),
                },
                CodeFragment::Link(link) => {
                    let url = links.url(link.destination());
                    anchor(&mut out, url.as_deref(), link.title(), |text| {
                        write_plain_text(link.children(), text);
                    });
                }
                CodeFragment::ExternalLink(link) => {
                    anchor(&mut out, Some(link.url()), link.title(), |text| {
                        write_plain_text(link.children(), text);
                    });
                }
            }
        }

        out.push_str("</code></pre>\n");
        out
    }
}

/// Write link text, wrapped in `<a>` if there is a URL.
fn anchor(out: &mut String, url: Option<&str>, title: &str, content: impl FnOnce(&mut String)) {
    let mut text = String::new();
    content(&mut text);
    let text = escape_html(&text);

    let Some(url) = url else {
        out.push_str(&text);
        return;
    };
    write!(out, r#"<a href="{}""#, escape_html(url)).unwrap();
    if !title.is_empty() {
        write!(out, r#" title="{}""#, escape_html(title)).unwrap();
    }
    write!(out, ">{text}</a>").unwrap();
}
