//! Integration tests for the block parser

use mdhtml_core::{parse, Block, Inline};

// ============================================================================
// Heading Tests
// ============================================================================

#[test]
fn test_parse_heading_levels() {
    let input = "# H1\n## H2\n### H3\n#### H4\n##### H5\n###### H6";
    let doc = parse(input);

    assert_eq!(doc.blocks.len(), 6);

    for (i, block) in doc.blocks.iter().enumerate() {
        if let Block::Heading(h) = block {
            assert_eq!(h.level, (i + 1) as u8);
        } else {
            panic!("Expected heading, got {:?}", block);
        }
    }
}

#[test]
fn test_parse_heading_content() {
    let doc = parse("# Hello, world!");

    if let Block::Heading(h) = &doc.blocks[0] {
        assert_eq!(h.level, 1);
        assert_eq!(h.content, vec![Inline::Text("Hello, world!".to_string())]);
    } else {
        panic!("Expected heading");
    }
}

#[test]
fn test_invalid_heading_no_space() {
    let doc = parse("#NoSpace");
    assert!(matches!(&doc.blocks[0], Block::Paragraph(_)));
}

#[test]
fn test_heading_level_too_high() {
    let doc = parse("####### Seven hashes");
    assert!(matches!(&doc.blocks[0], Block::Paragraph(_)));
}

#[test]
fn test_heading_marker_with_trailing_garbage() {
    // `####x` is not a run of hashes, so the line is paragraph text.
    let doc = parse("####x not a heading");

    if let Block::Paragraph(p) = &doc.blocks[0] {
        assert_eq!(p.content, vec![Inline::Text("####x not a heading".to_string())]);
    } else {
        panic!("Expected paragraph, got {:?}", doc.blocks[0]);
    }
}

#[test]
fn test_heading_with_inline_formatting() {
    let doc = parse("## Hello **World**");

    if let Block::Heading(h) = &doc.blocks[0] {
        assert_eq!(h.level, 2);
        assert_eq!(h.content.len(), 2);
        assert!(matches!(&h.content[1], Inline::Strong(_)));
    } else {
        panic!("Expected heading");
    }
}

// ============================================================================
// Paragraph Tests
// ============================================================================

#[test]
fn test_parse_simple_paragraph() {
    let doc = parse("Hello, world!");

    assert_eq!(doc.blocks.len(), 1);
    if let Block::Paragraph(p) = &doc.blocks[0] {
        assert_eq!(p.content, vec![Inline::Text("Hello, world!".to_string())]);
    } else {
        panic!("Expected paragraph");
    }
}

#[test]
fn test_parse_multiline_paragraph_joins_with_spaces() {
    let doc = parse("Line one\n  Line two  \nLine three");

    assert_eq!(doc.blocks.len(), 1);
    if let Block::Paragraph(p) = &doc.blocks[0] {
        assert_eq!(
            p.content,
            vec![Inline::Text("Line one Line two Line three".to_string())]
        );
    } else {
        panic!("Expected paragraph");
    }
}

#[test]
fn test_parse_multiple_paragraphs() {
    let doc = parse("First paragraph.\n\nSecond paragraph.");
    assert_eq!(doc.blocks.len(), 2);
}

#[test]
fn test_paragraph_stops_at_heading() {
    let doc = parse("Some text\n# Heading");

    assert_eq!(doc.blocks.len(), 2);
    assert!(matches!(&doc.blocks[0], Block::Paragraph(_)));
    assert!(matches!(&doc.blocks[1], Block::Heading(_)));
}

#[test]
fn test_paragraph_stops_at_list() {
    let doc = parse("Some text\n- item");

    assert_eq!(doc.blocks.len(), 2);
    assert!(matches!(&doc.blocks[0], Block::Paragraph(_)));
    assert!(matches!(&doc.blocks[1], Block::List(_)));
}

#[test]
fn test_paragraph_stops_at_fence() {
    let doc = parse("Some text\n```\ncode\n```");

    assert_eq!(doc.blocks.len(), 2);
    assert!(matches!(&doc.blocks[0], Block::Paragraph(_)));
    assert!(matches!(&doc.blocks[1], Block::CodeBlock(_)));
}

#[test]
fn test_paragraph_with_inline_formatting() {
    let doc = parse("This is *emphasized* text.");

    if let Block::Paragraph(p) = &doc.blocks[0] {
        assert!(p.content.iter().any(|i| matches!(i, Inline::Emphasis(_))));
    } else {
        panic!("Expected paragraph");
    }
}

// ============================================================================
// Fenced Code Block Tests
// ============================================================================

#[test]
fn test_parse_fenced_code_block() {
    let doc = parse("```bash  \nthis is some code\n\nhi\n```");

    assert_eq!(doc.blocks.len(), 1);
    if let Block::CodeBlock(c) = &doc.blocks[0] {
        assert_eq!(c.lang, "bash");
        assert_eq!(c.content, "this is some code\n\nhi\n");
    } else {
        panic!("Expected code block");
    }
}

#[test]
fn test_parse_fenced_code_block_no_lang() {
    let doc = parse("```\nplain code\n```");

    if let Block::CodeBlock(c) = &doc.blocks[0] {
        assert!(c.lang.is_empty());
        assert_eq!(c.content, "plain code\n");
    } else {
        panic!("Expected code block");
    }
}

#[test]
fn test_parse_tilde_fence() {
    let doc = parse("~~~python\nprint('hi')\n~~~");

    if let Block::CodeBlock(c) = &doc.blocks[0] {
        assert_eq!(c.lang, "python");
        assert_eq!(c.content, "print('hi')\n");
    } else {
        panic!("Expected code block");
    }
}

#[test]
fn test_fence_close_must_match_marker() {
    // A ~~~ line inside a backtick fence is content, not a close.
    let doc = parse("```\nx\n~~~\n```");

    if let Block::CodeBlock(c) = &doc.blocks[0] {
        assert_eq!(c.content, "x\n~~~\n");
    } else {
        panic!("Expected code block");
    }
}

#[test]
fn test_parse_unclosed_fence_absorbs_to_eof() {
    let doc = parse("```rust\nfn main() {}\nstill code");

    assert_eq!(doc.blocks.len(), 1);
    if let Block::CodeBlock(c) = &doc.blocks[0] {
        assert_eq!(c.lang, "rust");
        assert_eq!(c.content, "fn main() {}\nstill code\n");
    } else {
        panic!("Expected code block");
    }
}

#[test]
fn test_fenced_code_keeps_lines_verbatim() {
    let doc = parse("```\n    indented line\n```");

    if let Block::CodeBlock(c) = &doc.blocks[0] {
        assert_eq!(c.content, "    indented line\n");
    } else {
        panic!("Expected code block");
    }
}

// ============================================================================
// Indented Code Block Tests
// ============================================================================

#[test]
fn test_parse_tab_indented_code_block() {
    let doc = parse("\tthis is some code\n\t\n\thi\n");

    assert_eq!(doc.blocks.len(), 1);
    if let Block::CodeBlock(c) = &doc.blocks[0] {
        assert!(c.lang.is_empty());
        assert_eq!(c.content, "this is some code\n\nhi\n");
    } else {
        panic!("Expected code block");
    }
}

#[test]
fn test_parse_space_indented_code_block() {
    let doc = parse("    line one\n    line two\n");

    if let Block::CodeBlock(c) = &doc.blocks[0] {
        assert!(c.lang.is_empty());
        assert_eq!(c.content, "line one\nline two\n");
    } else {
        panic!("Expected code block");
    }
}

#[test]
fn test_indented_code_blank_line_terminates() {
    let doc = parse("    code\n\n    more\n");

    // The blank line has neither prefix, so two separate blocks.
    assert_eq!(doc.blocks.len(), 2);
    if let (Block::CodeBlock(a), Block::CodeBlock(b)) = (&doc.blocks[0], &doc.blocks[1]) {
        assert_eq!(a.content, "code\n");
        assert_eq!(b.content, "more\n");
    } else {
        panic!("Expected two code blocks");
    }
}

#[test]
fn test_indented_code_prefix_is_fixed_by_first_line() {
    // A tab line does not share the four-space prefix.
    let doc = parse("    spaces\n\ttab\n");

    assert_eq!(doc.blocks.len(), 2);
    if let (Block::CodeBlock(a), Block::CodeBlock(b)) = (&doc.blocks[0], &doc.blocks[1]) {
        assert_eq!(a.content, "spaces\n");
        assert_eq!(b.content, "tab\n");
    } else {
        panic!("Expected two code blocks");
    }
}

// ============================================================================
// List Tests
// ============================================================================

#[test]
fn test_parse_unordered_list() {
    let doc = parse("- Item one\n- Item two\n- Item three");

    if let Block::List(l) = &doc.blocks[0] {
        assert_eq!(l.items.len(), 3);
        assert_eq!(
            l.items[0].content,
            vec![Inline::Text("Item one".to_string())]
        );
    } else {
        panic!("Expected list");
    }
}

#[test]
fn test_mixed_markers_continue_one_list() {
    let doc = parse("- a\n* b\n+ c");

    assert_eq!(doc.blocks.len(), 1);
    if let Block::List(l) = &doc.blocks[0] {
        assert_eq!(l.items.len(), 3);
        assert_eq!(l.items[0].content, vec![Inline::Text("a".to_string())]);
        assert_eq!(l.items[1].content, vec![Inline::Text("b".to_string())]);
        assert_eq!(l.items[2].content, vec![Inline::Text("c".to_string())]);
    } else {
        panic!("Expected list");
    }
}

#[test]
fn test_list_ends_at_non_marker_line() {
    let doc = parse("- a\n- b\nplain text");

    assert_eq!(doc.blocks.len(), 2);
    if let Block::List(l) = &doc.blocks[0] {
        assert_eq!(l.items.len(), 2);
    } else {
        panic!("Expected list");
    }
    assert!(matches!(&doc.blocks[1], Block::Paragraph(_)));
}

#[test]
fn test_list_item_inline_formatting() {
    let doc = parse("- plain\n- *em* text");

    if let Block::List(l) = &doc.blocks[0] {
        assert!(l.items[1]
            .content
            .iter()
            .any(|i| matches!(i, Inline::Emphasis(_))));
    } else {
        panic!("Expected list");
    }
}

#[test]
fn test_ordered_list_marker_is_skipped() {
    // Ordered lists are recognized but deliberately unsupported.
    let doc = parse("1. one\n2. two");
    assert_eq!(doc.blocks.len(), 0);
}

#[test]
fn test_ordered_marker_ends_paragraph() {
    let doc = parse("text before\n3. ordered\ntext after");

    assert_eq!(doc.blocks.len(), 2);
    assert!(matches!(&doc.blocks[0], Block::Paragraph(_)));
    assert!(matches!(&doc.blocks[1], Block::Paragraph(_)));
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_parse_empty_input() {
    let doc = parse("");
    assert_eq!(doc.blocks.len(), 0);
}

#[test]
fn test_parse_whitespace_only() {
    let doc = parse("   \n\n   \n");
    assert_eq!(doc.blocks.len(), 0);
}

#[test]
fn test_crlf_line_endings() {
    let doc = parse("# Hello\r\n\r\nWorld\r\n");

    assert_eq!(doc.blocks.len(), 2);
    assert!(matches!(&doc.blocks[0], Block::Heading(_)));
    assert!(matches!(&doc.blocks[1], Block::Paragraph(_)));
}

#[test]
fn test_span_tracking() {
    let input = "# Hello";
    let doc = parse(input);

    assert_eq!(doc.span.start, 0);
    assert_eq!(doc.span.end, input.len() as u32);

    if let Block::Heading(h) = &doc.blocks[0] {
        assert_eq!(h.span.start, 0);
        assert_eq!(h.span.end, 7);
    } else {
        panic!("Expected heading");
    }
}

#[test]
fn test_block_spans_cover_multi_line_blocks() {
    let input = "- a\n- b";
    let doc = parse(input);

    if let Block::List(l) = &doc.blocks[0] {
        assert_eq!(l.span.start, 0);
        assert_eq!(l.span.end, input.len() as u32);
    } else {
        panic!("Expected list");
    }
}

// ============================================================================
// Complex Document Tests
// ============================================================================

#[test]
fn test_parse_complex_document() {
    let input = "# Introduction\n\
                 \n\
                 This is a **complex** document with *multiple* features.\n\
                 \n\
                 - First item\n\
                 * Second item\n\
                 \n\
                 ```rust\n\
                 fn example() {}\n\
                 ```\n\
                 \n\
                 \tindented code\n\
                 \n\
                 Final paragraph.\n";

    let doc = parse(input);

    assert_eq!(doc.blocks.len(), 6);
    assert!(matches!(&doc.blocks[0], Block::Heading(_)));
    assert!(matches!(&doc.blocks[1], Block::Paragraph(_)));
    assert!(matches!(&doc.blocks[2], Block::List(_)));
    assert!(matches!(&doc.blocks[3], Block::CodeBlock(_)));
    assert!(matches!(&doc.blocks[4], Block::CodeBlock(_)));
    assert!(matches!(&doc.blocks[5], Block::Paragraph(_)));
}
