//! Abstract Syntax Tree for parsed Markdown documents.
//!
//! Both node categories are closed sum types, so the renderer's match
//! is exhaustive and a new variant cannot be silently skipped. Nodes
//! own their data; the tree holds no references into the input (block
//! text is re-assembled from trimmed lines during parsing, so there is
//! nothing left to borrow from).

use crate::span::Span;

/// A parsed document: the root of the AST.
///
/// Owns its blocks in source order. Rendering never mutates the tree,
/// so a document can be rendered any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Content blocks in document order.
    pub blocks: Vec<Block>,
    /// Span covering the entire input.
    pub span: Span,
}

/// Block-level AST nodes.
///
/// Blocks never contain other blocks: lists are flat and list items
/// hold inline content only.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Text paragraph with inline formatting.
    Paragraph(Paragraph),
    /// Section heading (levels 1-6).
    Heading(Heading),
    /// Flat unordered list.
    List(List),
    /// Fenced or indented code block.
    CodeBlock(CodeBlock),
}

/// Text paragraph containing inline elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    /// Inline content with formatting.
    pub content: Vec<Inline>,
    /// Source span.
    pub span: Span,
}

/// Section heading with level and inline content.
///
/// `level` equals the number of leading `#` characters and is always
/// in `1..=6`; anything else was rejected during parsing and became a
/// paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    /// Heading level (1-6).
    pub level: u8,
    /// Inline content (may include formatting).
    pub content: Vec<Inline>,
    /// Source span.
    pub span: Span,
}

/// A flat unordered list.
///
/// Any of the `- `, `* `, `+ ` markers continues the same list, so a
/// single `List` can come from mixed-marker source lines.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    /// List items, one per marker line.
    pub items: Vec<ListItem>,
    /// Source span.
    pub span: Span,
}

/// A single list item: inline content drawn from one source line.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    /// Inline content after the marker.
    pub content: Vec<Inline>,
    /// Source span.
    pub span: Span,
}

/// A code block, fenced or indented.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    /// Language tag from the opening fence; empty when the fence had
    /// none and always empty for indented blocks.
    pub lang: String,
    /// Raw content, one trailing `\n` per retained line.
    pub content: String,
    /// Source span.
    pub span: Span,
}

/// Inline-level AST nodes (within paragraphs, headings, list items).
///
/// A finished tree contains no unresolved delimiter runs: whatever the
/// resolver could not pair has already degraded to literal `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Plain text content.
    Text(String),
    /// Emphasized text (`*italic*`).
    Emphasis(Vec<Inline>),
    /// Strong text (`**bold**`).
    Strong(Vec<Inline>),
    /// Span-level code. The tokenizer does not produce this yet; the
    /// variant exists so the renderer is ready for it.
    Code(String),
}
