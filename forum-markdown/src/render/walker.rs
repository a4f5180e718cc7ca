use super::element_renderer::{ElementRenderer, ListStyle};
use crate::{Alignment, BlockKind, BlockRef, Document, Inline, LineBreakMode};

/// Drives an [`ElementRenderer`] over a [`Document`].
///
/// The nesting counters live here so that every dialect rotates list styles
/// and alternates quotes the same way.
#[derive(Debug)]
pub struct TreeWalker<R> {
    renderer: R,
    line_breaks: LineBreakMode,
    list_depth: usize,
    quote_depth: usize,
}

impl<R: ElementRenderer> TreeWalker<R> {
    pub fn new(renderer: R, line_breaks: LineBreakMode) -> Self {
        Self {
            renderer,
            line_breaks,
            list_depth: 0,
            quote_depth: 0,
        }
    }

    pub fn run(&mut self, document: &Document) -> Result<(), R::Error> {
        self.list_depth = 0;
        self.quote_depth = 0;
        self.children(document.root(), false)
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Renders the children of `parent`. Paragraphs are written without
    /// their own tags inside tight list items, and when they are the only
    /// content of a list item or block quote.
    fn children(&mut self, parent: BlockRef<'_>, tight: bool) -> Result<(), R::Error> {
        let children: Vec<BlockRef<'_>> = parent.children().collect();
        let content = children
            .iter()
            .filter(|child| !matches!(child.kind(), BlockKind::Blank(_)))
            .count();
        let unwrap = tight
            || (content == 1
                && matches!(parent.kind(), BlockKind::ListItem | BlockKind::BlockQuote));

        for (i, &child) in children.iter().enumerate() {
            match child.kind() {
                &BlockKind::Blank(lines) => {
                    let between = i > 0 && i + 1 < children.len();
                    if between
                        && lines >= 2
                        && self
                            .line_breaks
                            .contains(LineBreakMode::CONVERT_BLANK_LINE_RUNS)
                    {
                        for _ in 1..lines {
                            self.renderer.render_hard_break()?;
                        }
                    }
                }
                BlockKind::Paragraph if unwrap => self.leaf_inlines(child)?,
                _ => self.block(child)?,
            }
        }
        Ok(())
    }

    fn block(&mut self, block: BlockRef<'_>) -> Result<(), R::Error> {
        match block.kind() {
            BlockKind::Root | BlockKind::Blank(_) | BlockKind::TableRow { .. } => Ok(()),
            BlockKind::Paragraph => {
                self.renderer.render_paragraph_start()?;
                self.leaf_inlines(block)?;
                self.renderer.render_paragraph_end()
            }
            &BlockKind::Heading { level, .. } => {
                self.renderer.render_heading_start(level)?;
                self.leaf_inlines(block)?;
                self.renderer.render_heading_end(level)
            }
            BlockKind::ThematicBreak => self.renderer.render_thematic_break(),
            BlockKind::BlockQuote => {
                let alternate = self.quote_depth % 2 == 1;
                self.renderer.render_blockquote_start(alternate)?;
                self.quote_depth += 1;
                self.children(block, false)?;
                self.quote_depth -= 1;
                self.renderer.render_blockquote_end()
            }
            &BlockKind::List {
                ordered,
                start,
                tight,
                ..
            } => {
                let style = ListStyle::for_depth(ordered, self.list_depth);
                self.renderer.render_list_start(ordered, start, style)?;
                self.list_depth += 1;
                for item in block.children() {
                    self.renderer.render_list_item_start()?;
                    self.children(item, tight)?;
                    self.renderer.render_list_item_end()?;
                }
                self.list_depth -= 1;
                self.renderer.render_list_end(ordered)
            }
            BlockKind::ListItem => self.children(block, false),
            BlockKind::IndentedCode | BlockKind::FencedCode { .. } => {
                self.renderer
                    .render_code_block_start(block.kind().language())?;
                self.renderer.render_code_block_text(&joined_lines(block))?;
                self.renderer.render_code_block_end()
            }
            BlockKind::HtmlBlock(_) => self.renderer.render_html_block(&joined_lines(block)),
            BlockKind::Table(alignments) => {
                self.renderer.render_table_start(alignments)?;
                for row in block.children() {
                    let header = matches!(row.kind(), BlockKind::TableRow { header: true });
                    if header {
                        self.renderer.render_table_head_start()?;
                    } else {
                        self.renderer.render_table_row_start()?;
                    }
                    for (i, cell) in row.inlines().iter().enumerate() {
                        let alignment = alignments.get(i).copied().unwrap_or(Alignment::None);
                        self.renderer.render_table_cell_start(header, alignment)?;
                        self.inlines(cell)?;
                        self.renderer.render_table_cell_end(header)?;
                    }
                    if header {
                        self.renderer.render_table_head_end()?;
                    } else {
                        self.renderer.render_table_row_end()?;
                    }
                }
                self.renderer.render_table_end()
            }
        }
    }

    fn leaf_inlines(&mut self, block: BlockRef<'_>) -> Result<(), R::Error> {
        for nodes in block.inlines() {
            self.inlines(nodes)?;
        }
        Ok(())
    }

    fn inlines(&mut self, nodes: &[Inline]) -> Result<(), R::Error> {
        for node in nodes {
            self.inline(node)?;
        }
        Ok(())
    }

    fn inline(&mut self, node: &Inline) -> Result<(), R::Error> {
        match node {
            Inline::Text(text) => self.renderer.render_text(text),
            Inline::Code(code) => self.renderer.render_code_inline(code),
            Inline::Html(html) => self.renderer.render_raw_html(html),
            Inline::SoftBreak => {
                if self
                    .line_breaks
                    .contains(LineBreakMode::CONVERT_MID_PARAGRAPH_BREAKS)
                {
                    self.renderer.render_hard_break()
                } else {
                    self.renderer.render_soft_break()
                }
            }
            Inline::HardBreak => self.renderer.render_hard_break(),
            Inline::Autolink { url, email } => self.renderer.render_autolink(url, *email),
            Inline::Emphasis(children) => {
                self.renderer.render_emphasis_start()?;
                self.inlines(children)?;
                self.renderer.render_emphasis_end()
            }
            Inline::Strong(children) => {
                self.renderer.render_strong_start()?;
                self.inlines(children)?;
                self.renderer.render_strong_end()
            }
            Inline::Strikethrough(children) => {
                self.renderer.render_strikethrough_start()?;
                self.inlines(children)?;
                self.renderer.render_strikethrough_end()
            }
            Inline::Link(link) => {
                self.renderer
                    .render_link_start(link.link_type, &link.url, &link.title)?;
                self.inlines(&link.children)?;
                self.renderer.render_link_end()
            }
            Inline::Image(link) => {
                let mut alt = String::new();
                for child in &link.children {
                    child.write_plain_text(&mut alt);
                }
                self.renderer.render_image(&link.url, &link.title, &alt)
            }
        }
    }
}

/// The lines of a code or HTML block, each terminated by a newline.
fn joined_lines(block: BlockRef<'_>) -> String {
    let lines = block.lines();
    let mut text = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::render::HtmlWriter;
    use crate::{Dialect, Options, Parser};

    fn walk(input: &str, line_breaks: LineBreakMode) -> String {
        let document = Parser::new(Options::new(Dialect::Strict)).parse_document(input, false);
        let mut walker = TreeWalker::new(HtmlWriter::strict(String::new()), line_breaks);
        walker.run(&document).unwrap();
        walker.into_renderer().writer
    }

    #[test]
    fn tight_items_are_unwrapped() {
        assert_eq!(
            walk("- a\n- b\n", LineBreakMode::empty()),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn loose_items_keep_paragraphs() {
        assert_eq!(
            walk("- a\n\n  more\n- b\n", LineBreakMode::empty()),
            "<ul>\n<li>\n<p>a</p>\n<p>more</p>\n</li>\n<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn nested_lists_rotate_style() {
        assert_eq!(
            walk("- a\n  - b\n    - c\n", LineBreakMode::empty()),
            "<ul>\n<li>a\n<ul style=\"list-style-type: circle\">\n<li>b\n\
             <ul style=\"list-style-type: square\">\n<li>c</li>\n</ul>\n</li>\n</ul>\n</li>\n</ul>\n"
        );
    }

    #[test]
    fn nested_quotes_alternate() {
        assert_eq!(
            walk("> a\n>\n> > b\n", LineBreakMode::empty()),
            "<blockquote>\n<p>a</p>\n<blockquote class=\"alternate\">\nb\n</blockquote>\n</blockquote>\n"
        );
    }

    #[test]
    fn blank_runs_become_breaks() {
        let input = "a\n\n\n\nb\n";
        assert_eq!(walk(input, LineBreakMode::empty()), "<p>a</p>\n<p>b</p>\n");
        assert_eq!(
            walk(input, LineBreakMode::CONVERT_BLANK_LINE_RUNS),
            "<p>a</p>\n<br />\n<br />\n<p>b</p>\n"
        );
    }

    #[test]
    fn soft_breaks_become_hard() {
        assert_eq!(
            walk("a\nb", LineBreakMode::CONVERT_MID_PARAGRAPH_BREAKS),
            "<p>a<br />\nb</p>\n"
        );
    }
}
