// Copyright 2017 Google Inc. All rights reserved.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! Tree-based two pass parser.

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use log::trace;

use crate::firstpass::run_first_pass;
use crate::inline::parse_inlines;
use crate::linklabel::RefDefs;
use crate::preprocess::preprocess;
use crate::render;
use crate::tree::{Tree, TreeIndex};
use crate::{BlockKind, Inline, Options};

/// Reference links never expand to less than this many bytes in total.
const MIN_LINK_EXPANSION_LIMIT: usize = 100_000;

/// A node of the block tree.
#[derive(Debug, Default, Clone)]
pub(crate) struct Block {
    pub kind: BlockKind,
    /// Content column of a list item, or the indentation of a code fence.
    pub indent: usize,
    /// Character and length of the opening code fence.
    pub fence: Option<(char, usize)>,
    /// Raw text lines of a leaf block, or the cells of a table row.
    pub lines: Vec<String>,
    /// Parsed inline content: one entry for a paragraph or heading, one per
    /// cell for a table row.
    pub inlines: Vec<Vec<Inline>>,
}

impl Block {
    pub(crate) fn new(kind: BlockKind) -> Self {
        Block {
            kind,
            ..Default::default()
        }
    }
}

/// A Markdown parser for one set of [`Options`].
///
/// All state of a parse is reset at the start of the next one; only the
/// allocations are kept. `parse` takes `&mut self`, so an instance is never
/// entered by two parses at once.
pub struct Parser {
    options: Options,
    tree: Tree<Block>,
    refdefs: RefDefs,
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only print the fields that have public types.
        f.debug_struct("Parser")
            .field("options", &self.options)
            .finish()
    }
}

impl Parser {
    pub fn new(options: Options) -> Self {
        Parser {
            options,
            tree: Tree::with_capacity(128),
            refdefs: RefDefs::default(),
        }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Parses `input` into a document tree without rendering it.
    ///
    /// The document takes the parser's tree allocation with it. Pass it to
    /// [`Parser::recycle`] once done to keep that allocation for the next
    /// parse.
    pub fn parse_document(&mut self, input: &str, already_rendered_once: bool) -> Document {
        let text = preprocess(input, already_rendered_once);
        self.refdefs.clear();
        let tree = mem::replace(&mut self.tree, Tree::with_capacity(0));
        let (mut tree, root) = run_first_pass(&text, tree, &mut self.refdefs);

        // always allow 100KiB
        let mut link_budget = text.len().saturating_mul(2).max(MIN_LINK_EXPANSION_LIMIT);
        let mut leaves = 0;
        let mut stack = vec![root];
        while let Some(ix) = stack.pop() {
            stack.extend(tree.children(ix));
            let block = &mut tree[ix].item;
            let inlines = match block.kind {
                BlockKind::Paragraph | BlockKind::Heading { .. } => {
                    let joined = block.lines.join("\n");
                    vec![parse_inlines(
                        joined.trim_start_matches([' ', '\t']),
                        &self.refdefs,
                        &mut link_budget,
                    )]
                }
                BlockKind::TableRow { .. } => block
                    .lines
                    .iter()
                    .map(|cell| parse_inlines(cell, &self.refdefs, &mut link_budget))
                    .collect(),
                _ => continue,
            };
            block.inlines = inlines;
            leaves += 1;
        }
        trace!("inline pass: {} leaf blocks", leaves);
        Document { tree, root }
    }

    /// Parses `input` and renders it with this parser's options.
    pub fn parse(&mut self, input: &str, already_rendered_once: bool) -> String {
        let document = self.parse_document(input, already_rendered_once);
        let mut out = String::with_capacity(input.len() + input.len() / 2);
        render::push_markup(&mut out, &document, self.options);
        self.recycle(document);
        out
    }

    /// Hands the allocation of a finished document back to the parser.
    pub fn recycle(&mut self, document: Document) {
        self.tree = document.tree;
    }
}

/// A parsed document: the block tree with inline content resolved. It can
/// be rendered to any dialect.
#[derive(Clone)]
pub struct Document {
    tree: Tree<Block>,
    root: TreeIndex,
}

impl Document {
    /// The root block, whose children are the top-level blocks.
    pub fn root(&self) -> BlockRef<'_> {
        BlockRef {
            tree: &self.tree,
            ix: self.root,
        }
    }

    /// Renders the document with `options`.
    pub fn render(&self, options: Options) -> String {
        let mut out = String::new();
        render::push_markup(&mut out, self, options);
        out
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

/// A borrowed view of one block of a [`Document`].
#[derive(Clone, Copy)]
pub struct BlockRef<'a> {
    tree: &'a Tree<Block>,
    ix: TreeIndex,
}

impl<'a> BlockRef<'a> {
    pub fn kind(&self) -> &'a BlockKind {
        &self.tree[self.ix].item.kind
    }

    /// Raw lines of a code or HTML block, or the cell sources of a table
    /// row. Empty for containers.
    pub fn lines(&self) -> &'a [String] {
        &self.tree[self.ix].item.lines
    }

    /// Inline content of a paragraph or heading (one entry) or of each cell
    /// of a table row. Empty for every other block.
    pub fn inlines(&self) -> &'a [Vec<Inline>] {
        &self.tree[self.ix].item.inlines
    }

    pub fn children(&self) -> BlockChildren<'a> {
        BlockChildren {
            tree: self.tree,
            next: self.tree[self.ix].child,
        }
    }
}

impl fmt::Debug for BlockRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockRef")
            .field("kind", self.kind())
            .field("lines", &self.lines())
            .finish()
    }
}

/// Iterator over the children of a block, see [`BlockRef::children`].
#[derive(Clone)]
pub struct BlockChildren<'a> {
    tree: &'a Tree<Block>,
    next: Option<TreeIndex>,
}

impl<'a> Iterator for BlockChildren<'a> {
    type Item = BlockRef<'a>;

    fn next(&mut self) -> Option<BlockRef<'a>> {
        let ix = self.next?;
        self.next = self.tree[ix].next;
        Some(BlockRef {
            tree: self.tree,
            ix,
        })
    }
}

impl FusedIterator for BlockChildren<'_> {}

impl fmt::Debug for BlockChildren<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Dialect, HeadingLevel, LinkType};

    fn parser() -> Parser {
        Parser::new(Options::new(Dialect::Strict))
    }

    #[test]
    fn inlines_are_attached_to_leaves() {
        let doc = parser().parse_document("# *Hi*\n\ntext", false);
        let blocks: Vec<_> = doc.root().children().collect();
        assert_eq!(
            blocks[0].kind(),
            &BlockKind::Heading {
                level: HeadingLevel::H1,
                setext: false
            }
        );
        assert_eq!(
            blocks[0].inlines(),
            &[vec![Inline::Emphasis(vec![Inline::Text("Hi".to_owned())])]]
        );
        assert_eq!(blocks[1].kind(), &BlockKind::Blank(1));
        assert_eq!(blocks[2].inlines(), &[vec![Inline::Text("text".to_owned())]]);
    }

    #[test]
    fn reused_parser_forgets_reference_definitions() {
        let mut p = parser();
        let first = p.parse_document("[a]: /x\n\n[a]", false);
        let para = first.root().children().last().unwrap();
        assert!(matches!(
            &para.inlines()[0][0],
            Inline::Link(link) if link.link_type == LinkType::Shortcut && link.url == "/x"
        ));
        let second = p.parse_document("[a]", false);
        let para = second.root().children().next().unwrap();
        assert_eq!(para.inlines(), &[vec![Inline::Text("[a]".to_owned())]]);
    }

    #[test]
    fn parse_is_stable_across_reuse() {
        let mut p = parser();
        let input = "> quote\n\n- a\n- b\n\n| x | y |\n|---|---|\n| 1 | 2 |\n";
        let first = p.parse(input, false);
        let second = p.parse(input, false);
        assert_eq!(first, second);
    }

    #[test]
    fn recycled_document_returns_its_tree() {
        let mut p = parser();
        let doc = p.parse_document("- a\n- b\n\n> c\n", false);
        assert_eq!(p.tree.len(), 0);
        let nodes = doc.tree.len();
        p.recycle(doc);
        assert_eq!(p.tree.len(), nodes);
        assert_eq!(
            p.parse("- a\n- b\n\n> c\n", false),
            parser().parse("- a\n- b\n\n> c\n", false)
        );
    }

    #[test]
    fn table_cells_get_inlines() {
        let doc = parser().parse_document("a|*b*\n-|-\n", false);
        let table = doc.root().children().next().unwrap();
        let header = table.children().next().unwrap();
        assert_eq!(header.inlines().len(), 2);
        assert_eq!(
            header.inlines()[1],
            vec![Inline::Emphasis(vec![Inline::Text("b".to_owned())])]
        );
    }
}
