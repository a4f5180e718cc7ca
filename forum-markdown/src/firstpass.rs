//! The first pass resolves all block structure, generating the block tree.
//! Leaf blocks keep their text as lines; inline structure is resolved later.

use std::borrow::Cow;

use log::trace;

use crate::linklabel::{extract_refdefs, RefDefs};
use crate::parse::Block;
use crate::preprocess::{is_indent_char, restore_tabs};
use crate::scanners::*;
use crate::tree::{Tree, TreeIndex};
use crate::{Alignment, BlockKind, HeadingLevel};

/// Containers nested deeper than this are not opened.
pub(crate) const MAX_CONTAINER_DEPTH: usize = 128;

/// Runs the first pass over preprocessed text, reusing the allocation of
/// `tree`, and returns the finished tree and its root.
pub(crate) fn run_first_pass(
    text: &str,
    mut tree: Tree<Block>,
    refdefs: &mut RefDefs,
) -> (Tree<Block>, TreeIndex) {
    tree.clear();
    let root = tree.append(Block::new(BlockKind::Root));
    tree.push();
    let mut first_pass = FirstPass {
        tree,
        root,
        refdefs,
    };
    let mut lines = 0;
    for line in text.lines() {
        first_pass.incorporate_line(line);
        lines += 1;
    }
    while first_pass.tree.spine_len() > 0 {
        first_pass.close_top();
    }
    trace!(
        "first pass: {} lines, {} nodes, {} reference definitions",
        lines,
        first_pass.tree.len(),
        first_pass.refdefs.len()
    );
    (first_pass.tree, root)
}

/// Outcome of matching one open block against the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Continuation {
    Matched,
    Failed,
    /// The line ended the block and nothing is left of it.
    Consumed,
}

/// State for the first parsing pass.
struct FirstPass<'r> {
    tree: Tree<Block>,
    root: TreeIndex,
    refdefs: &'r mut RefDefs,
}

impl FirstPass<'_> {
    /// The deepest open block.
    fn tip(&self) -> TreeIndex {
        self.tree.peek_up().unwrap_or(self.root)
    }

    fn kind(&self, ix: TreeIndex) -> &BlockKind {
        &self.tree[ix].item.kind
    }

    fn incorporate_line(&mut self, line: &str) {
        let mut line_start = LineStart::new(line);

        // the root always matches
        let mut matched = 1;
        while let Some(ix) = self.tree.spine_at(matched) {
            match self.continuation(ix, &mut line_start) {
                Continuation::Matched => matched += 1,
                Continuation::Failed => break,
                Continuation::Consumed => {
                    while self.tree.spine_len() > matched {
                        self.close_top();
                    }
                    return;
                }
            }
        }
        let all_matched = matched == self.tree.spine_len();
        let mut container_depth = matched - 1;
        let mut started = false;

        loop {
            let Some(container) = self.tree.spine_at(container_depth) else {
                break;
            };
            if matches!(
                self.kind(container),
                BlockKind::FencedCode { .. } | BlockKind::IndentedCode | BlockKind::HtmlBlock(_)
            ) || line_start.is_blank()
            {
                break;
            }
            let tip_is_paragraph = matches!(
                self.kind(self.tip()),
                BlockKind::Paragraph | BlockKind::Table(_)
            );
            let indent = line_start.indent_len();
            if indent >= 4 {
                if !tip_is_paragraph {
                    line_start.scan_space(4);
                    self.close_unmatched(container_depth);
                    self.add_child(Block::new(BlockKind::IndentedCode), true);
                    container_depth += 1;
                    started = true;
                }
                break;
            }

            let save = line_start.clone();
            line_start.scan_all_space();
            let rest = line_start.rest();
            let container_is_paragraph = matches!(self.kind(container), BlockKind::Paragraph);

            if rest.starts_with('>') && container_depth + 1 < MAX_CONTAINER_DEPTH {
                line_start = save;
                line_start.scan_blockquote_marker();
                self.close_unmatched(container_depth);
                self.add_child(Block::new(BlockKind::BlockQuote), true);
                container_depth = self.tree.spine_len() - 1;
                started = true;
                continue;
            }

            if let Some((level, content)) = scan_atx_heading(rest) {
                self.close_unmatched(container_depth);
                self.add_heading(level, content);
                return;
            }

            if let Some((fence_char, fence_len, info)) = scan_code_fence(rest) {
                let info = unescape(&restore_tabs(info)).into_owned();
                let mut block = Block::new(BlockKind::FencedCode { info });
                block.fence = Some((fence_char, fence_len));
                block.indent = indent;
                self.close_unmatched(container_depth);
                self.add_child(block, true);
                return;
            }

            if rest.starts_with('<') {
                let interrupts_paragraph =
                    container_is_paragraph || (!all_matched && tip_is_paragraph);
                if let Some(condition) =
                    scan_html_block_start(&restore_tabs(rest), interrupts_paragraph)
                {
                    line_start = save;
                    self.close_unmatched(container_depth);
                    self.add_child(Block::new(BlockKind::HtmlBlock(condition)), true);
                    container_depth = self.tree.spine_len() - 1;
                    started = true;
                    break;
                }
            }

            if container_is_paragraph {
                if let Some(level) = scan_setext_heading(rest) {
                    if self.convert_to_setext_heading(container, level) {
                        return;
                    }
                }
                if let Some(alignments) = scan_table_delimiter_row(rest) {
                    if self.convert_to_table(container, alignments) {
                        return;
                    }
                }
            }

            if scan_hrule(rest) {
                self.close_unmatched(container_depth);
                self.add_child(Block::new(BlockKind::ThematicBreak), false);
                return;
            }

            line_start = save;
            if container_depth + 1 < MAX_CONTAINER_DEPTH {
                let mut marker_start = line_start.clone();
                if let Some((marker, start, content_indent)) = marker_start.scan_list_marker() {
                    // an item interrupting a paragraph must have content, and
                    // an ordered one must start at 1
                    let allowed = !container_is_paragraph
                        || ((start == 1 || !matches!(marker, '.' | ')'))
                            && !marker_start.is_blank());
                    if allowed {
                        line_start = marker_start;
                        self.close_unmatched(container_depth);
                        self.add_list_item(marker, start, content_indent);
                        container_depth = self.tree.spine_len() - 1;
                        started = true;
                        continue;
                    }
                }
            }
            break;
        }

        let blank = line_start.is_blank();
        if !started
            && !all_matched
            && !blank
            && matches!(self.kind(self.tip()), BlockKind::Paragraph)
        {
            // lazy continuation line
            let tip = self.tip();
            self.push_line(tip, trim_indent_start(line_start.rest()));
            return;
        }

        self.close_unmatched(container_depth);
        let tip = self.tip();
        match *self.kind(tip) {
            BlockKind::FencedCode { .. } | BlockKind::IndentedCode => {
                self.push_line(tip, line_start.rest());
            }
            BlockKind::HtmlBlock(condition) => {
                let rest = line_start.rest();
                self.push_line(tip, rest);
                if html_block_ends(condition, rest) {
                    self.close_top();
                }
            }
            BlockKind::Paragraph => {
                self.push_line(tip, trim_indent_start(line_start.rest()));
            }
            BlockKind::Table(ref alignments) => {
                let columns = alignments.len();
                self.add_table_row(columns, line_start.rest());
            }
            _ if blank => {
                if !started {
                    self.add_blank_line();
                }
            }
            _ => {
                self.add_child(Block::new(BlockKind::Paragraph), true);
                let tip = self.tip();
                self.push_line(tip, trim_indent_start(line_start.rest()));
            }
        }
    }

    /// Matches the open block `ix` against the line, consuming its marker
    /// or indentation on success.
    fn continuation(&self, ix: TreeIndex, line_start: &mut LineStart<'_>) -> Continuation {
        let node = &self.tree[ix];
        let block = &node.item;
        match block.kind {
            BlockKind::BlockQuote => {
                if line_start.scan_blockquote_marker() {
                    Continuation::Matched
                } else {
                    Continuation::Failed
                }
            }
            BlockKind::ListItem => {
                if line_start.is_blank() {
                    // an item can begin with at most one blank line
                    if node.child.is_none() {
                        return Continuation::Failed;
                    }
                    line_start.scan_all_space();
                    Continuation::Matched
                } else if line_start.indent_len() >= block.indent {
                    line_start.scan_space(block.indent);
                    Continuation::Matched
                } else {
                    Continuation::Failed
                }
            }
            BlockKind::List { .. } => Continuation::Matched,
            BlockKind::Paragraph | BlockKind::Table(_) => {
                if line_start.is_blank() {
                    Continuation::Failed
                } else {
                    Continuation::Matched
                }
            }
            BlockKind::IndentedCode => {
                if line_start.indent_len() >= 4 {
                    line_start.scan_space(4);
                    Continuation::Matched
                } else if line_start.is_blank() {
                    line_start.scan_all_space();
                    Continuation::Matched
                } else {
                    Continuation::Failed
                }
            }
            BlockKind::FencedCode { .. } => {
                if let Some((fence_char, fence_len)) = block.fence {
                    if scan_closing_code_fence(line_start.rest(), fence_char, fence_len) {
                        return Continuation::Consumed;
                    }
                }
                line_start.scan_space_upto(block.indent);
                Continuation::Matched
            }
            BlockKind::HtmlBlock(condition) => {
                if condition >= 6 && line_start.is_blank() {
                    Continuation::Failed
                } else {
                    Continuation::Matched
                }
            }
            _ => Continuation::Failed,
        }
    }

    /// Closes open blocks until the one at spine depth `depth` is the tip.
    fn close_unmatched(&mut self, depth: usize) {
        while self.tree.spine_len() > depth + 1 {
            self.close_top();
        }
    }

    fn close_top(&mut self) {
        if let Some(ix) = self.tree.pop() {
            self.finalize(ix);
        }
    }

    /// Appends a block to the tip, closing open blocks until one can hold
    /// it. Open blocks become the new tip.
    fn add_child(&mut self, block: Block, open: bool) -> TreeIndex {
        while self.tree.spine_len() > 1 && !can_contain(self.kind(self.tip()), &block.kind) {
            self.close_top();
        }
        let ix = self.tree.append(block);
        if open {
            self.tree.push();
        }
        ix
    }

    fn add_list_item(&mut self, marker: char, start: u64, content_indent: usize) {
        let ordered = matches!(marker, '.' | ')');
        let continues_list = matches!(
            *self.kind(self.tip()),
            BlockKind::List { ordered: o, marker: m, .. } if o == ordered && m == marker
        );
        if !continues_list {
            let list = BlockKind::List {
                ordered,
                start,
                marker,
                tight: true,
            };
            self.add_child(Block::new(list), true);
        }
        let mut item = Block::new(BlockKind::ListItem);
        item.indent = content_indent;
        self.add_child(item, true);
    }

    fn add_heading(&mut self, level: HeadingLevel, content: &str) {
        let mut heading = Block::new(BlockKind::Heading {
            level,
            setext: false,
        });
        heading.lines.push(restore_tabs(content).into_owned());
        self.add_child(heading, false);
    }

    fn add_table_row(&mut self, columns: usize, line: &str) {
        let mut cells = split_table_cells(&restore_tabs(line));
        cells.resize(columns, String::new());
        let mut row = Block::new(BlockKind::TableRow { header: false });
        row.lines = cells;
        self.tree.append(row);
    }

    fn add_blank_line(&mut self) {
        if let Some(last) = self.tree.cur() {
            if let BlockKind::Blank(n) = &mut self.tree[last].item.kind {
                *n += 1;
                return;
            }
        }
        self.add_child(Block::new(BlockKind::Blank(1)), false);
    }

    fn push_line(&mut self, ix: TreeIndex, line: &str) {
        self.tree[ix].item.lines.push(line.to_owned());
    }

    /// Turns the open paragraph `ix` into a heading, unless nothing but
    /// reference definitions is left of it.
    fn convert_to_setext_heading(&mut self, ix: TreeIndex, level: HeadingLevel) -> bool {
        if !self.strip_refdefs(ix) {
            return false;
        }
        self.tree[ix].item.kind = BlockKind::Heading { level, setext: true };
        self.close_top();
        true
    }

    /// Turns the open single-line paragraph `ix` into a table whose header
    /// row is that line, if the cell count matches the delimiter row.
    fn convert_to_table(&mut self, ix: TreeIndex, alignments: Vec<Alignment>) -> bool {
        let block = &self.tree[ix].item;
        if block.lines.len() != 1 {
            return false;
        }
        let header = split_table_cells(&restore_tabs(&block.lines[0]));
        if header.len() != alignments.len() {
            return false;
        }
        let block = &mut self.tree[ix].item;
        block.kind = BlockKind::Table(alignments);
        block.lines.clear();
        let mut row = Block::new(BlockKind::TableRow { header: true });
        row.lines = header;
        self.tree.append(row);
        true
    }

    /// Registers the reference definitions at the front of paragraph `ix`
    /// and keeps the rest as its lines. Returns false when nothing is left.
    fn strip_refdefs(&mut self, ix: TreeIndex) -> bool {
        let text = restore_tabs(&self.tree[ix].item.lines.join("\n")).into_owned();
        let consumed = extract_refdefs(&text, self.refdefs);
        let rest = &text[consumed..];
        let block = &mut self.tree[ix].item;
        if rest.trim().is_empty() {
            block.lines.clear();
            return false;
        }
        if consumed > 0 || block.lines.len() > 1 {
            block.lines = rest.split('\n').map(str::to_owned).collect();
        } else {
            block.lines = vec![text];
        }
        true
    }

    /// Called right after `ix` was popped off the spine.
    fn finalize(&mut self, ix: TreeIndex) {
        match self.tree[ix].item.kind {
            BlockKind::Paragraph => {
                if !self.strip_refdefs(ix) {
                    self.tree.remove_cur();
                }
            }
            BlockKind::IndentedCode => {
                let block = &mut self.tree[ix].item;
                let mut trailing_blank = 0;
                while block
                    .lines
                    .last()
                    .is_some_and(|line| line.chars().all(is_indent_char))
                {
                    block.lines.pop();
                    trailing_blank += 1;
                }
                restore_lines(&mut block.lines);
                if trailing_blank > 0 {
                    self.tree.append(Block::new(BlockKind::Blank(trailing_blank)));
                }
            }
            BlockKind::Heading { .. } | BlockKind::FencedCode { .. } | BlockKind::HtmlBlock(_) => {
                restore_lines(&mut self.tree[ix].item.lines);
            }
            BlockKind::List { .. } => self.finish_list(ix),
            _ => {}
        }
    }

    /// Decides whether the list is tight and drops the blank lines between
    /// its items.
    fn finish_list(&mut self, ix: TreeIndex) {
        let children: Vec<TreeIndex> = self.tree.children(ix).collect();
        let is_item = |tree: &Tree<Block>, c: TreeIndex| {
            matches!(tree[c].item.kind, BlockKind::ListItem)
        };
        let mut tight = true;
        for (i, &child) in children.iter().enumerate() {
            let item_follows = children[i + 1..].iter().any(|&c| is_item(&self.tree, c));
            if !is_item(&self.tree, child) {
                let item_precedes = children[..i].iter().any(|&c| is_item(&self.tree, c));
                if item_precedes && item_follows {
                    tight = false;
                }
                continue;
            }
            if item_follows && ends_with_blank(&self.tree, child) {
                tight = false;
            }
            let inner: Vec<TreeIndex> = self.tree.children(child).collect();
            for (j, &sub) in inner.iter().enumerate() {
                let content_follows = inner[j + 1..]
                    .iter()
                    .any(|&c| !matches!(self.tree[c].item.kind, BlockKind::Blank(_)));
                if content_follows && ends_with_blank(&self.tree, sub) {
                    tight = false;
                }
            }
        }
        if let BlockKind::List { tight: t, .. } = &mut self.tree[ix].item.kind {
            *t = tight;
        }

        let items: Vec<TreeIndex> = children
            .into_iter()
            .filter(|&c| is_item(&self.tree, c))
            .collect();
        self.tree[ix].child = items.first().copied();
        for pair in items.windows(2) {
            self.tree[pair[0]].next = Some(pair[1]);
        }
        if let Some(&last) = items.last() {
            self.tree[last].next = None;
        }
    }
}

fn can_contain(parent: &BlockKind, child: &BlockKind) -> bool {
    match parent {
        BlockKind::Root | BlockKind::BlockQuote | BlockKind::ListItem => {
            !matches!(child, BlockKind::ListItem)
        }
        BlockKind::List { .. } => matches!(child, BlockKind::ListItem | BlockKind::Blank(_)),
        BlockKind::Table(_) => matches!(child, BlockKind::TableRow { .. }),
        _ => false,
    }
}

fn ends_with_blank(tree: &Tree<Block>, ix: TreeIndex) -> bool {
    match tree[ix].item.kind {
        BlockKind::Blank(_) => true,
        BlockKind::List { .. } | BlockKind::ListItem => tree
            .last_child(ix)
            .is_some_and(|last| ends_with_blank(tree, last)),
        _ => false,
    }
}

fn restore_lines(lines: &mut [String]) {
    for line in lines {
        if let Cow::Owned(restored) = restore_tabs(line) {
            *line = restored;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::preprocess::preprocess;

    fn build(text: &str) -> (Tree<Block>, TreeIndex, RefDefs) {
        let mut refdefs = RefDefs::default();
        let (tree, root) = run_first_pass(
            &preprocess(text, false),
            Tree::with_capacity(16),
            &mut refdefs,
        );
        (tree, root, refdefs)
    }

    fn kinds(tree: &Tree<Block>, ix: TreeIndex) -> Vec<BlockKind> {
        tree.children(ix).map(|c| tree[c].item.kind.clone()).collect()
    }

    fn only_child(tree: &Tree<Block>, ix: TreeIndex) -> TreeIndex {
        let children: Vec<_> = tree.children(ix).collect();
        assert_eq!(children.len(), 1, "{:?}", tree);
        children[0]
    }

    #[test]
    fn paragraphs_and_blank_runs() {
        let (tree, root, _) = build("a\nb\n\n\n\nc\n");
        assert_eq!(
            kinds(&tree, root),
            vec![BlockKind::Paragraph, BlockKind::Blank(3), BlockKind::Paragraph]
        );
        let first = tree[root].child.unwrap();
        assert_eq!(tree[first].item.lines, vec!["a", "b"]);
    }

    #[test]
    fn nested_list() {
        let (tree, root, _) = build("- a\n  - b\n- c");
        let list = only_child(&tree, root);
        assert!(matches!(
            tree[list].item.kind,
            BlockKind::List { ordered: false, marker: '-', tight: true, .. }
        ));
        let items: Vec<_> = tree.children(list).collect();
        assert_eq!(items.len(), 2);
        assert_eq!(
            kinds(&tree, items[0]),
            vec![
                BlockKind::Paragraph,
                BlockKind::List {
                    ordered: false,
                    start: 1,
                    marker: '-',
                    tight: true
                }
            ]
        );
    }

    #[test]
    fn blank_between_items_makes_list_loose() {
        let (tree, root, _) = build("1. a\n\n2. b\n");
        let list = only_child(&tree, root);
        assert!(matches!(
            tree[list].item.kind,
            BlockKind::List { ordered: true, start: 1, marker: '.', tight: false }
        ));
        assert!(tree
            .children(list)
            .all(|c| tree[c].item.kind == BlockKind::ListItem));
    }

    #[test]
    fn marker_change_starts_new_list() {
        let (tree, root, _) = build("- a\n+ b\n");
        assert_eq!(tree.children(root).count(), 2);
    }

    #[test]
    fn ordered_item_interrupting_paragraph_must_start_at_one() {
        let (tree, root, _) = build("text\n2. no\n");
        assert_eq!(kinds(&tree, root), vec![BlockKind::Paragraph]);
        let (tree, root, _) = build("text\n1. yes\n");
        assert_eq!(tree.children(root).count(), 2);
        let (tree, root, _) = build("text\n-\n");
        assert!(matches!(
            kinds(&tree, root)[0],
            BlockKind::Heading { level: HeadingLevel::H2, setext: true }
        ));
    }

    #[test]
    fn lazy_continuation_in_quote() {
        let (tree, root, _) = build("> a\nb\n");
        let quote = only_child(&tree, root);
        let para = only_child(&tree, quote);
        assert_eq!(tree[para].item.lines, vec!["a", "b"]);
    }

    #[test]
    fn fenced_code_keeps_lines() {
        let (tree, root, _) = build("```rust\n  let x;\n\n*y*\n```\nafter");
        let code = tree[root].child.unwrap();
        assert_eq!(tree[code].item.kind.language(), Some("rust"));
        assert_eq!(tree[code].item.lines, vec!["  let x;", "", "*y*"]);
        assert_eq!(kinds(&tree, root)[1], BlockKind::Paragraph);
    }

    #[test]
    fn indented_code_trailing_blanks_move_out() {
        let (tree, root, _) = build("    a\n\tb\n\n\nc");
        assert_eq!(
            kinds(&tree, root),
            vec![BlockKind::IndentedCode, BlockKind::Blank(2), BlockKind::Paragraph]
        );
        let code = tree[root].child.unwrap();
        assert_eq!(tree[code].item.lines, vec!["a", "b"]);
    }

    #[test]
    fn tab_inside_code_is_restored() {
        let (tree, root, _) = build("    a\tb");
        let code = only_child(&tree, root);
        assert_eq!(tree[code].item.lines, vec!["a\tb"]);
    }

    #[test]
    fn setext_after_refdef_only_is_not_a_heading() {
        let (tree, root, refdefs) = build("[a]: /u\n===\n");
        assert_eq!(refdefs.len(), 1);
        let para = only_child(&tree, root);
        assert_eq!(tree[para].item.kind, BlockKind::Paragraph);
        assert_eq!(tree[para].item.lines, vec!["==="]);
    }

    #[test]
    fn refdef_only_paragraph_is_dropped() {
        let (tree, root, refdefs) = build("[x]: http://example.com \"T\"\n\n[see][x]");
        assert_eq!(refdefs.get("x").unwrap().title, "T");
        assert_eq!(kinds(&tree, root), vec![BlockKind::Blank(1), BlockKind::Paragraph]);
    }

    #[test]
    fn table_shape() {
        let (tree, root, _) = build("a|b\n-|-\n1|2");
        let table = only_child(&tree, root);
        assert_eq!(
            tree[table].item.kind,
            BlockKind::Table(vec![Alignment::None, Alignment::None])
        );
        let rows: Vec<_> = tree.children(table).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(tree[rows[0]].item.kind, BlockKind::TableRow { header: true });
        assert_eq!(tree[rows[0]].item.lines, vec!["a", "b"]);
        assert_eq!(tree[rows[1]].item.lines, vec!["1", "2"]);
    }

    #[test]
    fn table_rows_are_padded_and_truncated() {
        let (tree, root, _) = build("| a | b |\n|---|:-:|\n| 1 |\n| 1 | 2 | 3 |\n");
        let table = only_child(&tree, root);
        let rows: Vec<_> = tree.children(table).collect();
        assert_eq!(tree[rows[1]].item.lines, vec!["1", ""]);
        assert_eq!(tree[rows[2]].item.lines, vec!["1", "2"]);
    }

    #[test]
    fn table_needs_matching_header() {
        let (tree, root, _) = build("a|b|c\n-|-\n");
        assert_eq!(kinds(&tree, root), vec![BlockKind::Paragraph]);
    }

    #[test]
    fn html_blocks() {
        let (tree, root, _) = build("<div>\n*a*\n\ntext\n<!-- c\n-->\nafter");
        assert_eq!(
            kinds(&tree, root),
            vec![
                BlockKind::HtmlBlock(6),
                BlockKind::Blank(1),
                BlockKind::Paragraph,
                BlockKind::HtmlBlock(2),
                BlockKind::Paragraph,
            ]
        );
    }

    #[test]
    fn html_type_7_cannot_interrupt_paragraph() {
        let (tree, root, _) = build("text\n<custom>\n");
        assert_eq!(kinds(&tree, root), vec![BlockKind::Paragraph]);
    }

    #[test]
    fn container_depth_is_capped() {
        let input = ">".repeat(MAX_CONTAINER_DEPTH + 10);
        let (tree, root, _) = build(&input);
        let mut depth = 0;
        let mut ix = root;
        while let Some(child) = tree[ix].child {
            depth += 1;
            ix = child;
        }
        assert!(depth <= MAX_CONTAINER_DEPTH);
        assert_eq!(tree[ix].item.kind, BlockKind::Paragraph);
    }

    #[test]
    fn empty_item_followed_by_blank_ends() {
        let (tree, root, _) = build("-\n\n  foo\n");
        let children = kinds(&tree, root);
        assert!(matches!(children[0], BlockKind::List { .. }));
        assert_eq!(children.last(), Some(&BlockKind::Paragraph));
    }
}
