//! mdhtml - Convert a Markdown subset to an HTML fragment
//!
//! Usage:
//!   mdhtml [OPTIONS] [COMMAND] [FILE]
//!
//! Commands:
//!   render    Render the document as HTML (default)
//!   ast       Display the parsed document structure
//!   stats     Show document statistics
//!
//! With no file (or `-`), input is read from standard input.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use mdhtml_core::{parse, Block, Document, Inline, Renderer};
use serde::Serialize;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = read_input(config.file.as_deref())?;
    let doc = parse(&input);

    match config.command {
        Command::Render => cmd_render(&doc),
        Command::Ast => cmd_ast(&doc, &config),
        Command::Stats => cmd_stats(&doc, &input),
    }
}

fn read_input(file: Option<&str>) -> Result<String, String> {
    match file {
        Some("-") | None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| format!("failed to read stdin: {}", e))?;
            Ok(input)
        }
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path, e))
        }
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: Option<String>,
    format: OutputFormat,
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Render,
    Ast,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Render;
    let mut format = OutputFormat::Text;
    let mut verbose = false;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("mdhtml {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "render" => command = Command::Render,
            "ast" => command = Command::Ast,
            "stats" => command = Command::Stats,
            "-" => file = Some(arg.clone()),
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    Ok(Config {
        command,
        file,
        format,
        verbose,
    })
}

fn print_help() {
    eprintln!(
        r#"mdhtml - Markdown to HTML fragment converter

USAGE:
    mdhtml [OPTIONS] [COMMAND] [FILE]

COMMANDS:
    render      Render the document as HTML (default)
    ast         Display the parsed document structure
    stats       Show document statistics

OPTIONS:
    -v, --verbose    Show detailed AST structure (ast command)
    -j, --json       Output in JSON format
    -h, --help       Print help information
    -V, --version    Print version information

With no FILE, or when FILE is `-`, input is read from standard input.

EXAMPLES:
    mdhtml README.md            Render a file to HTML on stdout
    echo '# hi' | mdhtml        Render from stdin
    mdhtml ast -v README.md     Show the parsed block structure
    mdhtml ast -j README.md     Dump the AST as JSON
    mdhtml stats README.md      Show document statistics
"#
    );
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(doc: &Document) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    Renderer::new(&mut out)
        .render(doc)
        .and_then(|_| out.flush())
        .map_err(|e| format!("failed to write output: {}", e))
}

// =============================================================================
// Ast Command
// =============================================================================

fn cmd_ast(doc: &Document, config: &Config) -> Result<(), String> {
    match config.format {
        OutputFormat::Json => print_json(doc)?,
        OutputFormat::Text => {
            if config.verbose {
                print_document_verbose(doc);
            } else {
                print_document_summary(doc);
            }
        }
    }
    Ok(())
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(doc: &Document, input: &str) -> Result<(), String> {
    let stats = DocumentStats::from_document(doc, input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Blocks:");
    println!("  Total:          {}", stats.total_blocks);
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Code blocks:    {}", stats.code_blocks);
    println!("  Lists:          {}", stats.lists);
    println!("  List items:     {}", stats.list_items);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);

    Ok(())
}

#[derive(Serialize)]
struct DocumentStats {
    total_blocks: usize,
    headings: usize,
    paragraphs: usize,
    code_blocks: usize,
    lists: usize,
    list_items: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_document(doc: &Document, input: &str) -> Self {
        let mut stats = Self {
            total_blocks: doc.blocks.len(),
            headings: 0,
            paragraphs: 0,
            code_blocks: 0,
            lists: 0,
            list_items: 0,
            chars: input.len(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
        };

        for block in &doc.blocks {
            match block {
                Block::Heading(_) => stats.headings += 1,
                Block::Paragraph(_) => stats.paragraphs += 1,
                Block::CodeBlock(_) => stats.code_blocks += 1,
                Block::List(l) => {
                    stats.lists += 1;
                    stats.list_items += l.items.len();
                }
            }
        }

        stats
    }
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
struct JsonDocument<'a> {
    blocks: Vec<JsonBlock<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonBlock<'a> {
    Heading {
        level: u8,
        content: Vec<JsonInline<'a>>,
    },
    Paragraph {
        content: Vec<JsonInline<'a>>,
    },
    CodeBlock {
        lang: &'a str,
        content: &'a str,
    },
    List {
        items: Vec<Vec<JsonInline<'a>>>,
    },
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonInline<'a> {
    Text { content: &'a str },
    Emphasis { content: Vec<JsonInline<'a>> },
    Strong { content: Vec<JsonInline<'a>> },
    Code { content: &'a str },
}

fn print_json(doc: &Document) -> Result<(), String> {
    let json_doc = convert_document(doc);
    let rendered = serde_json::to_string_pretty(&json_doc)
        .map_err(|e| format!("failed to serialize AST: {}", e))?;
    println!("{}", rendered);
    Ok(())
}

fn convert_document(doc: &Document) -> JsonDocument<'_> {
    JsonDocument {
        blocks: doc.blocks.iter().map(convert_block).collect(),
    }
}

fn convert_block(block: &Block) -> JsonBlock<'_> {
    match block {
        Block::Heading(h) => JsonBlock::Heading {
            level: h.level,
            content: h.content.iter().map(convert_inline).collect(),
        },
        Block::Paragraph(p) => JsonBlock::Paragraph {
            content: p.content.iter().map(convert_inline).collect(),
        },
        Block::CodeBlock(c) => JsonBlock::CodeBlock {
            lang: &c.lang,
            content: &c.content,
        },
        Block::List(l) => JsonBlock::List {
            items: l
                .items
                .iter()
                .map(|item| item.content.iter().map(convert_inline).collect())
                .collect(),
        },
    }
}

fn convert_inline(inline: &Inline) -> JsonInline<'_> {
    match inline {
        Inline::Text(t) => JsonInline::Text { content: t },
        Inline::Emphasis(children) => JsonInline::Emphasis {
            content: children.iter().map(convert_inline).collect(),
        },
        Inline::Strong(children) => JsonInline::Strong {
            content: children.iter().map(convert_inline).collect(),
        },
        Inline::Code(c) => JsonInline::Code { content: c },
    }
}

// =============================================================================
// Text Output
// =============================================================================

fn print_document_summary(doc: &Document) {
    println!("Blocks: {}", doc.blocks.len());
    for (i, block) in doc.blocks.iter().enumerate() {
        println!("  [{}] {}", i + 1, describe_block(block));
    }
}

fn print_document_verbose(doc: &Document) {
    println!("=== Document AST ===");
    println!();
    println!("Span: {}..{}", doc.span.start, doc.span.end);
    println!();
    println!("--- Blocks ---");

    for (i, block) in doc.blocks.iter().enumerate() {
        println!();
        println!("[{}] {}", i + 1, describe_block(block));
        print_block_verbose(block, 1);
    }
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Heading(h) => format!("Heading (level {})", h.level),
        Block::Paragraph(_) => "Paragraph".to_string(),
        Block::List(l) => format!("List ({} items)", l.items.len()),
        Block::CodeBlock(c) => format!("CodeBlock (lang: {})", c.lang),
    }
}

fn print_block_verbose(block: &Block, indent: usize) {
    let prefix = "  ".repeat(indent);

    match block {
        Block::Heading(h) => {
            println!("{}Content: {}", prefix, format_inlines(&h.content));
        }
        Block::Paragraph(p) => {
            println!("{}Content: {}", prefix, format_inlines(&p.content));
        }
        Block::List(l) => {
            for (i, item) in l.items.iter().enumerate() {
                println!("{}Item {}: {}", prefix, i + 1, format_inlines(&item.content));
            }
        }
        Block::CodeBlock(c) => {
            let preview: String = c.content.chars().take(60).collect();
            let ellipsis = if c.content.len() > 60 { "..." } else { "" };
            println!(
                "{}Content: {}{}",
                prefix,
                preview.replace('\n', "\\n"),
                ellipsis
            );
        }
    }
}

fn format_inlines(inlines: &[Inline]) -> String {
    let mut result = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) => result.push_str(t),
            Inline::Emphasis(children) => {
                result.push('*');
                result.push_str(&format_inlines(children));
                result.push('*');
            }
            Inline::Strong(children) => {
                result.push_str("**");
                result.push_str(&format_inlines(children));
                result.push_str("**");
            }
            Inline::Code(c) => {
                result.push('`');
                result.push_str(c);
                result.push('`');
            }
        }
    }
    result
}
