//! Inline resolver: tokenize a span of text, then match delimiter
//! runs into nested emphasis/strong nodes.
//!
//! Two passes. The tokenize pass splits the text into literal runs
//! and `*`-delimiter runs. The resolve pass pairs delimiter runs with
//! a LIFO opener stack; every successful match splices the token list
//! and restarts the scan from the head with a cleared stack. That full
//! re-scan is O(n²) worst case and deliberately so: after a splice the
//! stack's view of the sequence is stale, and rebuilding it from
//! scratch keeps the matching correct.
//!
//! Delimiter tokens never escape this module. Whatever survives
//! resolution with an unconsumed count degrades to literal `*` text.

use memchr::memchr;

use crate::ast::Inline;

/// Parse inline elements from a span of text.
///
/// Total over all inputs: unmatched or malformed delimiter runs come
/// back as literal text, never as an error.
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    if text.is_empty() {
        return Vec::new();
    }
    resolve(tokenize(text))
}

/// A token produced by the tokenize pass.
///
/// `Node` carries finished inline nodes; during resolution the spliced
/// replacements land here too.
enum Tok {
    Node(Inline),
    Delim(Delim),
}

/// A `*` delimiter run with its transient resolution state.
struct Delim {
    /// Unconsumed count, decremented as pairs are matched.
    remaining: usize,
    /// Whether the run may open a pair (followed by non-whitespace).
    can_open: bool,
    /// Whether the run may close a pair (preceded by non-whitespace).
    can_close: bool,
}

#[inline]
fn remaining(tok: &Tok) -> usize {
    match tok {
        Tok::Delim(d) => d.remaining,
        Tok::Node(_) => 0,
    }
}

/// Tokenize pass: split `text` into literal runs and delimiter runs.
///
/// Only `*` is a delimiter character. Backtick code spans are not
/// tokenized here; span-level code is reserved.
fn tokenize(text: &str) -> Vec<Tok> {
    let bytes = text.as_bytes();
    let mut toks = Vec::with_capacity(8);
    let mut pos = 0;

    while pos < bytes.len() {
        let star = match memchr(b'*', &bytes[pos..]) {
            Some(off) => pos + off,
            None => {
                toks.push(Tok::Node(Inline::Text(text[pos..].to_string())));
                break;
            }
        };

        if star > pos {
            toks.push(Tok::Node(Inline::Text(text[pos..star].to_string())));
        }

        let mut end = star;
        while end < bytes.len() && bytes[end] == b'*' {
            end += 1;
        }

        toks.push(Tok::Delim(Delim {
            remaining: end - star,
            can_open: end < bytes.len() && !bytes[end].is_ascii_whitespace(),
            can_close: star > 0 && !bytes[star - 1].is_ascii_whitespace(),
        }));
        pos = end;
    }

    toks
}

/// Resolve pass: pair delimiter runs into Strong/Emphasis nodes.
fn resolve(mut toks: Vec<Tok>) -> Vec<Inline> {
    'rescan: loop {
        let mut openers: Vec<usize> = Vec::new();

        let mut i = 0;
        while i < toks.len() {
            let (can_open, can_close) = match &toks[i] {
                Tok::Delim(d) if d.remaining > 0 => (d.can_open, d.can_close),
                _ => {
                    i += 1;
                    continue;
                }
            };

            // Nearest unmatched opener wins. Any opener with a
            // non-zero remaining count is eligible; whether the pair
            // forms Strong or Emphasis is decided at match time.
            if can_close {
                if let Some(pos) = openers.iter().rposition(|&j| remaining(&toks[j]) >= 1) {
                    match_pair(&mut toks, openers[pos], i);
                    continue 'rescan;
                }
            }

            if can_open {
                openers.push(i);
            }
            i += 1;
        }

        break;
    }

    finish(toks)
}

/// Consume a matched opener/closer pair.
///
/// Forms Strong when both sides have at least two unconsumed
/// delimiters, Emphasis otherwise. The tokens strictly between the
/// pair become the new node's children via a recursive resolve.
/// Partially consumed runs stay in the sequence next to the node and
/// are re-evaluated on the next scan.
fn match_pair(toks: &mut Vec<Tok>, open: usize, close: usize) {
    let n = if remaining(&toks[open]) >= 2 && remaining(&toks[close]) >= 2 {
        2
    } else {
        1
    };

    let inner: Vec<Tok> = toks.drain(open + 1..close).collect();
    let children = resolve(inner);

    let node = if n == 2 {
        Inline::Strong(children)
    } else {
        Inline::Emphasis(children)
    };

    // After the drain the closer sits right after the opener.
    let keep_open = {
        match &mut toks[open] {
            Tok::Delim(d) => {
                d.remaining -= n;
                d.remaining > 0
            }
            Tok::Node(_) => false,
        }
    };
    let keep_close = {
        match &mut toks[open + 1] {
            Tok::Delim(d) => {
                d.remaining -= n;
                d.remaining > 0
            }
            Tok::Node(_) => false,
        }
    };

    match (keep_open, keep_close) {
        (true, true) => toks.insert(open + 1, Tok::Node(node)),
        (true, false) => toks[open + 1] = Tok::Node(node),
        (false, true) => toks[open] = Tok::Node(node),
        (false, false) => {
            toks[open] = Tok::Node(node);
            toks.remove(open + 1);
        }
    }
}

/// Convert leftover delimiters to literal text and merge adjacent
/// text nodes.
///
/// A partially consumed run degrades to its *leftover* characters, so
/// the literal output can be shorter than the original run. Merging
/// keeps `"hello *world"` a single text node rather than three.
fn finish(toks: Vec<Tok>) -> Vec<Inline> {
    let mut out: Vec<Inline> = Vec::with_capacity(toks.len());

    for tok in toks {
        let node = match tok {
            Tok::Node(n) => n,
            Tok::Delim(d) => {
                if d.remaining == 0 {
                    continue;
                }
                Inline::Text("*".repeat(d.remaining))
            }
        };

        if let Inline::Text(cur) = &node {
            if let Some(Inline::Text(prev)) = out.last_mut() {
                prev.push_str(cur);
                continue;
            }
        }
        out.push(node);
    }

    out
}
