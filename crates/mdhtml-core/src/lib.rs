//! # mdhtml-core
//!
//! A Markdown-subset to HTML-fragment conversion core.
//!
//! Conversion runs in two phases: a line-oriented block parser builds
//! the document tree (paragraphs, headings, flat lists, fenced and
//! indented code), invoking a delimiter-stack inline resolver on any
//! text that needs emphasis/strong markup; a tree-walking renderer
//! then emits the HTML fragment in one pass.
//!
//! Parsing is total: every input produces a document, and malformed
//! syntax degrades to literal text instead of an error. The only
//! fallible operation is writing rendered output to an I/O sink.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = mdhtml_core::markdown_to_html("# Hello\n\nSome *text*.\n");
//! assert_eq!(html, "<h1>Hello</h1>\n<p>Some <em>text</em>.</p>\n");
//! ```
//!
//! For control over the output sink, parse and render separately:
//!
//! ```rust
//! use mdhtml_core::{parse, Renderer};
//!
//! let doc = parse("- one\n- two\n");
//! let mut out = Vec::new();
//! Renderer::new(&mut out).render(&doc).unwrap();
//! ```

pub mod ast;
pub mod inline;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod span;

pub use ast::{Block, Document, Inline};
pub use parser::parse;
pub use render::{render_to_string, Renderer};
pub use span::Span;

/// Convert Markdown source to an HTML fragment in one call.
pub fn markdown_to_html(input: &str) -> String {
    render_to_string(&parse(input))
}
