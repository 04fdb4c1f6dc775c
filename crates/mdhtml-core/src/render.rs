//! HTML renderer: a single pre-order traversal of the AST.
//!
//! The renderer writes to any `io::Write` sink and never mutates the
//! tree, so rendering the same document twice produces identical
//! output. A sink write failure aborts the traversal immediately and
//! surfaces to the caller; partial output already written is the
//! caller's to keep or discard.
//!
//! Text and code content are HTML-escaped. The matches over both node
//! enums are exhaustive, so adding a variant without a rendering rule
//! is a compile error.

use std::io::{self, Write};

use crate::ast::{Block, CodeBlock, Document, Inline};

/// Tree-walking HTML renderer over an output sink.
pub struct Renderer<W: Write> {
    w: W,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer writing to the given sink.
    #[inline]
    pub fn new(w: W) -> Self {
        Self { w }
    }

    /// Render a document as an HTML fragment (no `<html>`/`<body>`
    /// wrapper).
    pub fn render(&mut self, doc: &Document) -> io::Result<()> {
        for block in &doc.blocks {
            self.render_block(block)?;
        }
        Ok(())
    }

    fn render_block(&mut self, block: &Block) -> io::Result<()> {
        match block {
            Block::Paragraph(p) => {
                self.w.write_all(b"<p>")?;
                self.render_inlines(&p.content)?;
                self.w.write_all(b"</p>\n")
            }
            Block::Heading(h) => {
                write!(self.w, "<h{}>", h.level)?;
                self.render_inlines(&h.content)?;
                writeln!(self.w, "</h{}>", h.level)
            }
            Block::List(l) => {
                self.w.write_all(b"<ul>")?;
                for item in &l.items {
                    self.w.write_all(b"<li>")?;
                    self.render_inlines(&item.content)?;
                    self.w.write_all(b"</li>\n")?;
                }
                self.w.write_all(b"</ul>\n")
            }
            Block::CodeBlock(c) => self.render_code_block(c),
        }
    }

    fn render_code_block(&mut self, code: &CodeBlock) -> io::Result<()> {
        if code.lang.is_empty() {
            self.w.write_all(b"<pre><code>")?;
        } else {
            self.w.write_all(b"<pre><code class=\"language-")?;
            write_escaped(&mut self.w, &code.lang)?;
            self.w.write_all(b"\">")?;
        }
        write_escaped(&mut self.w, &code.content)?;
        self.w.write_all(b"</code></pre>\n")
    }

    fn render_inlines(&mut self, inlines: &[Inline]) -> io::Result<()> {
        for inline in inlines {
            self.render_inline(inline)?;
        }
        Ok(())
    }

    fn render_inline(&mut self, inline: &Inline) -> io::Result<()> {
        match inline {
            Inline::Text(text) => write_escaped(&mut self.w, text),
            Inline::Emphasis(children) => {
                self.w.write_all(b"<em>")?;
                self.render_inlines(children)?;
                self.w.write_all(b"</em>")
            }
            Inline::Strong(children) => {
                self.w.write_all(b"<strong>")?;
                self.render_inlines(children)?;
                self.w.write_all(b"</strong>")
            }
            Inline::Code(text) => {
                self.w.write_all(b"<code>")?;
                write_escaped(&mut self.w, text)?;
                self.w.write_all(b"</code>")
            }
        }
    }
}

/// Render a document into an owned string.
pub fn render_to_string(doc: &Document) -> String {
    let mut buf = Vec::new();
    Renderer::new(&mut buf)
        .render(doc)
        .expect("write to Vec<u8> cannot fail");
    String::from_utf8(buf).expect("renderer emits UTF-8")
}

/// Write `text` with `&`, `<`, `>` and `"` escaped.
fn write_escaped<W: Write>(w: &mut W, text: &str) -> io::Result<()> {
    let bytes = text.as_bytes();
    let mut last = 0;

    for (i, b) in bytes.iter().enumerate() {
        let escaped: &str = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            _ => continue,
        };
        w.write_all(&bytes[last..i])?;
        w.write_all(escaped.as_bytes())?;
        last = i + 1;
    }

    w.write_all(&bytes[last..])
}
