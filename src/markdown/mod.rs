//! Markdown to styled nodes.
//!
//! [`render`] turns chat text into a tree of [`Block`]s that the egui view
//! paints. Parsing is delegated to `pulldown-cmark`; this module only folds
//! its event stream into the handful of node kinds the chat bubbles style.

pub mod highlight;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

/// Inline formatting flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub strikethrough: bool,
    pub code: bool,
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inline {
    pub text: String,
    pub style: SpanStyle,
    pub link: Option<String>,
}

impl Inline {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::default(),
            link: None,
        }
    }
}

/// A block of code, without its fence markers and final newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub code: String,
}

impl CodeBlock {
    /// Only blocks tagged with a language are highlighted.
    pub fn is_highlighted(&self) -> bool {
        self.language.is_some()
    }

    /// Highlighted blocks carry the language label and copy button.
    pub fn has_copy_action(&self) -> bool {
        self.is_highlighted()
    }
}

pub type Cell = Vec<Inline>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Heading { level: u8, content: Vec<Inline> },
    List { start: Option<u64>, items: Vec<Vec<Block>> },
    BlockQuote(Vec<Block>),
    Code(CodeBlock),
    Table { header: Vec<Cell>, rows: Vec<Vec<Cell>> },
    Rule,
}

/// Parse `text` into styled nodes. Pure: equal input gives equal output.
pub fn render(text: &str) -> Vec<Block> {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(text, options) {
        builder.event(event);
    }
    builder.finish()
}

/// Leading word characters of a fence info string, e.g. `python` in
/// "```python title=x".
fn language_tag(info: &str) -> Option<String> {
    let tag: String = info
        .trim()
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    (!tag.is_empty()).then_some(tag)
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn push_merged(inlines: &mut Vec<Inline>, inline: Inline) {
    if inline.text.is_empty() {
        return;
    }
    if let Some(last) = inlines.last_mut() {
        if last.style == inline.style && last.link == inline.link {
            last.text.push_str(&inline.text);
            return;
        }
    }
    inlines.push(inline);
}

enum SpanTag {
    Strong,
    Emphasis,
    Strikethrough,
    Link,
}

/// Open container while folding the event stream.
enum Frame {
    Root(Vec<Block>),
    Quote(Vec<Block>),
    Paragraph(Vec<Inline>),
    Heading(u8, Vec<Inline>),
    List {
        start: Option<u64>,
        items: Vec<Vec<Block>>,
    },
    // Tight list items hold text directly, without a paragraph.
    Item {
        blocks: Vec<Block>,
        inlines: Vec<Inline>,
    },
    Code(CodeBlock),
    Table {
        header: Vec<Cell>,
        rows: Vec<Vec<Cell>>,
    },
    Row {
        head: bool,
        cells: Vec<Cell>,
    },
    Cell(Vec<Inline>),
    Span(SpanTag),
    Skip,
}

struct TreeBuilder {
    stack: Vec<Frame>,
    strong: u32,
    emphasis: u32,
    strikethrough: u32,
    links: Vec<String>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Frame::Root(Vec::new())],
            strong: 0,
            emphasis: 0,
            strikethrough: 0,
            links: Vec::new(),
        }
    }

    fn finish(self) -> Vec<Block> {
        match self.stack.into_iter().next() {
            Some(Frame::Root(blocks)) => blocks,
            _ => Vec::new(),
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(_) => self.end(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                let mut style = self.style();
                style.code = true;
                self.inline(&code, style);
            }
            Event::SoftBreak => self.text(" "),
            Event::HardBreak => self.text("\n"),
            Event::Rule => self.block(Block::Rule),
            Event::TaskListMarker(checked) => self.text(if checked { "[x] " } else { "[ ] " }),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph => Frame::Paragraph(Vec::new()),
            Tag::Heading { level, .. } => Frame::Heading(heading_level(level), Vec::new()),
            Tag::BlockQuote(_) => Frame::Quote(Vec::new()),
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => language_tag(&info),
                    CodeBlockKind::Indented => None,
                };
                Frame::Code(CodeBlock {
                    language,
                    code: String::new(),
                })
            }
            Tag::List(start) => Frame::List {
                start,
                items: Vec::new(),
            },
            Tag::Item => Frame::Item {
                blocks: Vec::new(),
                inlines: Vec::new(),
            },
            Tag::Table(_) => Frame::Table {
                header: Vec::new(),
                rows: Vec::new(),
            },
            Tag::TableHead => Frame::Row {
                head: true,
                cells: Vec::new(),
            },
            Tag::TableRow => Frame::Row {
                head: false,
                cells: Vec::new(),
            },
            Tag::TableCell => Frame::Cell(Vec::new()),
            Tag::Strong => {
                self.strong += 1;
                Frame::Span(SpanTag::Strong)
            }
            Tag::Emphasis => {
                self.emphasis += 1;
                Frame::Span(SpanTag::Emphasis)
            }
            Tag::Strikethrough => {
                self.strikethrough += 1;
                Frame::Span(SpanTag::Strikethrough)
            }
            // Images degrade to a link labelled with their alt text.
            Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. } => {
                self.links.push(dest_url.to_string());
                Frame::Span(SpanTag::Link)
            }
            _ => Frame::Skip,
        };
        self.stack.push(frame);
    }

    fn end(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        let Some(frame) = self.stack.pop() else {
            return;
        };
        match frame {
            Frame::Root(_) | Frame::Skip => {}
            Frame::Paragraph(content) => {
                if !content.is_empty() {
                    self.block(Block::Paragraph(content));
                }
            }
            Frame::Heading(level, content) => self.block(Block::Heading { level, content }),
            Frame::Quote(blocks) => self.block(Block::BlockQuote(blocks)),
            Frame::Code(mut code) => {
                if code.code.ends_with('\n') {
                    code.code.pop();
                }
                self.block(Block::Code(code));
            }
            Frame::List { start, items } => self.block(Block::List { start, items }),
            Frame::Item {
                mut blocks,
                inlines,
            } => {
                if !inlines.is_empty() {
                    blocks.push(Block::Paragraph(inlines));
                }
                if let Some(Frame::List { items, .. }) = self.stack.last_mut() {
                    items.push(blocks);
                }
            }
            Frame::Table { header, rows } => self.block(Block::Table { header, rows }),
            Frame::Row { head, cells } => {
                if let Some(Frame::Table { header, rows }) = self.stack.last_mut() {
                    if head {
                        *header = cells;
                    } else {
                        rows.push(cells);
                    }
                }
            }
            Frame::Cell(content) => {
                if let Some(Frame::Row { cells, .. }) = self.stack.last_mut() {
                    cells.push(content);
                }
            }
            Frame::Span(tag) => match tag {
                SpanTag::Strong => self.strong = self.strong.saturating_sub(1),
                SpanTag::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
                SpanTag::Strikethrough => {
                    self.strikethrough = self.strikethrough.saturating_sub(1)
                }
                SpanTag::Link => {
                    self.links.pop();
                }
            },
        }
    }

    fn skipping(&self) -> bool {
        self.stack.iter().any(|frame| matches!(frame, Frame::Skip))
    }

    fn style(&self) -> SpanStyle {
        SpanStyle {
            strong: self.strong > 0,
            emphasis: self.emphasis > 0,
            strikethrough: self.strikethrough > 0,
            code: false,
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(Frame::Code(code)) = self.stack.last_mut() {
            code.code.push_str(text);
            return;
        }
        let style = self.style();
        self.inline(text, style);
    }

    fn inline(&mut self, text: &str, style: SpanStyle) {
        if self.skipping() {
            return;
        }
        let inline = Inline {
            text: text.to_string(),
            style,
            link: self.links.last().cloned(),
        };
        for frame in self.stack.iter_mut().rev() {
            match frame {
                Frame::Paragraph(content)
                | Frame::Heading(_, content)
                | Frame::Cell(content)
                | Frame::Item {
                    inlines: content, ..
                } => {
                    push_merged(content, inline);
                    return;
                }
                Frame::Span(_) => continue,
                _ => return,
            }
        }
    }

    fn block(&mut self, block: Block) {
        if self.skipping() {
            return;
        }
        for frame in self.stack.iter_mut().rev() {
            match frame {
                Frame::Root(blocks) | Frame::Quote(blocks) => {
                    blocks.push(block);
                    return;
                }
                Frame::Item { blocks, inlines } => {
                    if !inlines.is_empty() {
                        blocks.push(Block::Paragraph(std::mem::take(inlines)));
                    }
                    blocks.push(block);
                    return;
                }
                _ => continue,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_blocks(blocks: &[Block]) -> Vec<&CodeBlock> {
        let mut found = Vec::new();
        for block in blocks {
            match block {
                Block::Code(code) => found.push(code),
                Block::BlockQuote(inner) => found.extend(code_blocks(inner)),
                Block::List { items, .. } => {
                    for item in items {
                        found.extend(code_blocks(item));
                    }
                }
                _ => {}
            }
        }
        found
    }

    fn styled(text: &str, style: SpanStyle) -> Inline {
        Inline {
            text: text.to_string(),
            style,
            link: None,
        }
    }

    #[test]
    fn tagged_fence_is_highlighted_with_copy_action() {
        let blocks = render("```python\nprint(1)\n```");
        assert_eq!(
            blocks,
            vec![Block::Code(CodeBlock {
                language: Some("python".to_string()),
                code: "print(1)".to_string(),
            })]
        );
        let code = code_blocks(&blocks)[0];
        assert!(code.is_highlighted());
        assert!(code.has_copy_action());
    }

    #[test]
    fn inline_code_is_plain_without_copy_action() {
        let blocks = render("`x`");
        let code = SpanStyle {
            code: true,
            ..SpanStyle::default()
        };
        assert_eq!(blocks, vec![Block::Paragraph(vec![styled("x", code)])]);
        assert!(code_blocks(&blocks).is_empty());
    }

    #[test]
    fn untagged_and_indented_code_are_not_highlighted() {
        for text in ["```\nplain\n```", "    indented\n"] {
            let blocks = render(text);
            let code = code_blocks(&blocks);
            assert_eq!(code.len(), 1, "{text:?}");
            assert_eq!(code[0].language, None);
            assert!(!code[0].has_copy_action());
        }
    }

    #[test]
    fn language_tag_keeps_leading_word_characters() {
        assert_eq!(language_tag("tsx"), Some("tsx".to_string()));
        assert_eq!(language_tag(" rust ignore"), Some("rust".to_string()));
        assert_eq!(language_tag("c++"), Some("c".to_string()));
        assert_eq!(language_tag("   "), None);
    }

    #[test]
    fn code_keeps_inner_blank_lines() {
        let blocks = render("```js\nconst a = 1;\n\nconst b = 2;\n```");
        let code = code_blocks(&blocks);
        assert_eq!(code[0].code, "const a = 1;\n\nconst b = 2;");
    }

    #[test]
    fn headings_keep_their_level() {
        let blocks = render("# One\n## Two\n### Three\n#### Four");
        let levels: Vec<u8> = blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading { level, .. } => Some(*level),
                _ => None,
            })
            .collect();
        assert_eq!(levels, vec![1, 2, 3, 4]);
    }

    #[test]
    fn inline_styles_are_split_into_runs() {
        let blocks = render("**bold** and *it* ~~gone~~");
        let strong = SpanStyle {
            strong: true,
            ..SpanStyle::default()
        };
        let emphasis = SpanStyle {
            emphasis: true,
            ..SpanStyle::default()
        };
        let struck = SpanStyle {
            strikethrough: true,
            ..SpanStyle::default()
        };
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                styled("bold", strong),
                Inline::plain(" and "),
                styled("it", emphasis),
                Inline::plain(" "),
                styled("gone", struck),
            ])]
        );
    }

    #[test]
    fn soft_breaks_join_lines() {
        assert_eq!(
            render("first\nsecond"),
            vec![Block::Paragraph(vec![Inline::plain("first second")])]
        );
    }

    #[test]
    fn links_keep_their_target() {
        let blocks = render("see [docs](https://example.com)");
        let Block::Paragraph(content) = &blocks[0] else {
            panic!("expected paragraph, got {blocks:?}");
        };
        assert_eq!(content[1].text, "docs");
        assert_eq!(content[1].link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn tight_and_ordered_lists() {
        let blocks = render("3. three\n4. four\n\n- a\n- b");
        assert_eq!(
            blocks,
            vec![
                Block::List {
                    start: Some(3),
                    items: vec![
                        vec![Block::Paragraph(vec![Inline::plain("three")])],
                        vec![Block::Paragraph(vec![Inline::plain("four")])],
                    ],
                },
                Block::List {
                    start: None,
                    items: vec![
                        vec![Block::Paragraph(vec![Inline::plain("a")])],
                        vec![Block::Paragraph(vec![Inline::plain("b")])],
                    ],
                },
            ]
        );
    }

    #[test]
    fn nested_list_follows_item_text() {
        let blocks = render("- outer\n  - inner");
        let Block::List { items, .. } = &blocks[0] else {
            panic!("expected list, got {blocks:?}");
        };
        assert_eq!(items[0][0], Block::Paragraph(vec![Inline::plain("outer")]));
        assert!(matches!(items[0][1], Block::List { .. }));
    }

    #[test]
    fn blockquote_wraps_paragraphs() {
        assert_eq!(
            render("> quoted"),
            vec![Block::BlockQuote(vec![Block::Paragraph(vec![
                Inline::plain("quoted")
            ])])]
        );
    }

    #[test]
    fn tables_split_header_and_rows() {
        let blocks = render("| a | b |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |");
        assert_eq!(
            blocks,
            vec![Block::Table {
                header: vec![vec![Inline::plain("a")], vec![Inline::plain("b")]],
                rows: vec![
                    vec![vec![Inline::plain("1")], vec![Inline::plain("2")]],
                    vec![vec![Inline::plain("3")], vec![Inline::plain("4")]],
                ],
            }]
        );
    }

    #[test]
    fn raw_html_is_dropped() {
        let blocks = render("<div>hidden</div>\n\nshown");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![Inline::plain("shown")])]
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let text = crate::chat::responses::DEFAULT_RESPONSES.join("\n\n");
        assert_eq!(render(&text), render(&text));
        assert_eq!(code_blocks(&render(&text)).len(), 3);
    }
}
