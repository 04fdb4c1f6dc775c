//! Block parser: classify lines and accumulate multi-line constructs.
//!
//! One forward pass over the input's lines. Every line lands in
//! exactly one block category, so parsing is total: malformed syntax
//! degrades to paragraph text instead of failing. Multi-line blocks
//! (code, lists, paragraphs) consume their lines in a sub-loop and
//! the cursor never backtracks past a consumed line.

use crate::ast::{Block, CodeBlock, Document, Heading, List, ListItem, Paragraph};
use crate::inline::parse_inlines;
use crate::lexer::{Lexer, Line};
use crate::span::Span;

/// Unordered list markers. Any of them continues an open list, so
/// mixed-marker lines form a single list.
const LIST_MARKERS: [&str; 3] = ["- ", "* ", "+ "];

/// Parse an entire Markdown document.
///
/// Pure function of the input: no shared state, so concurrent calls
/// on different inputs are safe by construction.
pub fn parse(input: &str) -> Document {
    let mut parser = BlockParser::new(input);
    let blocks = parser.parse_blocks();
    Document {
        blocks,
        span: Span::new(0, input.len() as u32),
    }
}

struct BlockParser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> BlockParser<'a> {
    #[inline]
    fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
        }
    }

    fn parse_blocks(&mut self) -> Vec<Block> {
        let mut blocks = Vec::with_capacity(16);

        loop {
            let line = match self.lexer.peek_line() {
                Some(line) => *line,
                None => break,
            };

            // Indented code is the one classification that looks at
            // the untrimmed line.
            if line.text.starts_with("    ") || line.text.starts_with('\t') {
                if let Some(block) = self.parse_indented_code() {
                    blocks.push(block);
                }
                continue;
            }

            let trimmed = line.trimmed();

            if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
                if let Some(block) = self.parse_fenced_code() {
                    blocks.push(block);
                }
                continue;
            }

            if unordered_marker(trimmed).is_some() {
                if let Some(block) = self.parse_list() {
                    blocks.push(block);
                }
                continue;
            }

            // Ordered lists are recognized but not supported: the
            // marker line is skipped without emitting a node.
            if starts_ordered_marker(trimmed) {
                self.lexer.next_line();
                continue;
            }

            if line.is_blank() {
                self.lexer.next_line();
                continue;
            }

            if trimmed.starts_with('#') {
                if let Some(block) = self.parse_heading() {
                    blocks.push(block);
                    continue;
                }
                // Invalid heading marker: fall through to paragraph.
            }

            if let Some(block) = self.parse_paragraph() {
                blocks.push(block);
            }
        }

        blocks
    }

    /// Indented code block: four spaces or one tab.
    ///
    /// The prefix is fixed by the first qualifying line; subsequent
    /// lines must share that exact prefix. A line failing the prefix
    /// test (blank lines included) ends the block.
    fn parse_indented_code(&mut self) -> Option<Block> {
        let first = *self.lexer.peek_line()?;
        let prefix = if first.text.starts_with("    ") {
            "    "
        } else {
            "\t"
        };

        let mut content = String::new();
        let mut span = first.span;

        loop {
            let line = match self.lexer.peek_line() {
                Some(line) => *line,
                None => break,
            };
            let rest = match line.text.strip_prefix(prefix) {
                Some(rest) => rest,
                None => break,
            };
            self.lexer.next_line();

            content.push_str(rest);
            content.push('\n');
            span = span.merge(line.span);
        }

        Some(Block::CodeBlock(CodeBlock {
            lang: String::new(),
            content,
            span,
        }))
    }

    /// Fenced code block opened by ``` or ~~~.
    ///
    /// Lines are kept verbatim until a line whose trimmed form equals
    /// the opening marker; that closing line is consumed and dropped.
    /// An unterminated fence absorbs the rest of the input.
    fn parse_fenced_code(&mut self) -> Option<Block> {
        let open = self.lexer.next_line()?;
        let trimmed = open.trimmed();
        let marker = &trimmed[..3];
        let lang = trimmed[3..].trim().to_string();

        let mut content = String::new();
        let mut span = open.span;

        loop {
            let line = match self.lexer.next_line() {
                Some(line) => line,
                None => break,
            };
            span = span.merge(line.span);
            if line.trimmed() == marker {
                break;
            }
            content.push_str(line.text);
            content.push('\n');
        }

        Some(Block::CodeBlock(CodeBlock {
            lang,
            content,
            span,
        }))
    }

    /// Flat unordered list: one item per marker line, any marker
    /// continues the list.
    fn parse_list(&mut self) -> Option<Block> {
        let mut items = Vec::with_capacity(8);
        let mut span: Option<Span> = None;

        loop {
            let line = match self.lexer.peek_line() {
                Some(line) => *line,
                None => break,
            };
            let rest = match unordered_marker(line.trimmed()) {
                Some(rest) => rest,
                None => break,
            };
            self.lexer.next_line();

            items.push(ListItem {
                content: parse_inlines(rest.trim()),
                span: line.span,
            });
            span = Some(match span {
                Some(span) => span.merge(line.span),
                None => line.span,
            });
        }

        Some(Block::List(List {
            items,
            span: span?,
        }))
    }

    /// Single-line heading. Returns `None` without consuming the line
    /// when the marker is invalid (no space, `####x`, level > 6), so
    /// the caller can reclassify it as paragraph text.
    fn parse_heading(&mut self) -> Option<Block> {
        let line = *self.lexer.peek_line()?;
        let trimmed = line.trimmed();

        let (marker, rest) = trimmed.split_once(' ')?;
        let level = marker.len();
        if level == 0 || level > 6 || !marker.bytes().all(|b| b == b'#') {
            return None;
        }
        self.lexer.next_line();

        Some(Block::Heading(Heading {
            level: level as u8,
            content: parse_inlines(rest.trim()),
            span: line.span,
        }))
    }

    /// Default classification: consecutive lines up to a block
    /// boundary, trimmed individually and joined with single spaces.
    /// The boundary line is left for the outer loop to reclassify.
    fn parse_paragraph(&mut self) -> Option<Block> {
        let first = self.lexer.next_line()?;
        let mut text = first.trimmed().to_string();
        let mut span = first.span;

        loop {
            let line = match self.lexer.peek_line() {
                Some(line) => *line,
                None => break,
            };
            if line.is_blank() || is_block_boundary(line.trimmed()) {
                break;
            }
            self.lexer.next_line();

            text.push(' ');
            text.push_str(line.trimmed());
            span = span.merge(line.span);
        }

        Some(Block::Paragraph(Paragraph {
            content: parse_inlines(&text),
            span,
        }))
    }
}

/// Strip an unordered list marker from a trimmed line.
#[inline]
fn unordered_marker(trimmed: &str) -> Option<&str> {
    for marker in LIST_MARKERS {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return Some(rest);
        }
    }
    None
}

/// Ordered-list marker: a leading ASCII digit followed by `". "`.
#[inline]
fn starts_ordered_marker(trimmed: &str) -> bool {
    let bytes = trimmed.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2] == b' '
}

/// A line that ends an in-progress paragraph: it either starts a
/// different block type or is blank (blank is checked by the caller).
#[inline]
fn is_block_boundary(trimmed: &str) -> bool {
    trimmed.starts_with('#')
        || trimmed.starts_with("```")
        || trimmed.starts_with("~~~")
        || unordered_marker(trimmed).is_some()
        || starts_ordered_marker(trimmed)
}
