// Copyright 2018 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A Vec-based container for a tree structure.

use std::num::NonZeroUsize;

/// Handle of a node inside a [`Tree`]. Never zero, so `Option<TreeIndex>`
/// is the size of a `usize`.
#[derive(Debug, Eq, PartialEq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct TreeIndex(NonZeroUsize);

impl TreeIndex {
    fn new(i: usize) -> Self {
        TreeIndex(NonZeroUsize::new(i).expect("tree indices start at one"))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

#[derive(Debug, Clone)]
pub struct Node<T> {
    pub child: Option<TreeIndex>,
    pub next: Option<TreeIndex>,
    pub item: T,
}

/// A tree abstraction, intended for fast building as a preorder traversal.
///
/// The spine holds the indices of every node on the path from the root to
/// the current insertion point. Nodes on the spine are the open nodes.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
    spine: Vec<TreeIndex>, // indices of nodes on path to current node
    cur: Option<TreeIndex>,
}

impl<T: Default> Tree<T> {
    // Indices start at one, so we place a dummy value at index zero.
    // The alternative would be subtracting one from every TreeIndex
    // every time we convert it to usize to index our nodes.
    pub fn with_capacity(cap: usize) -> Tree<T> {
        let mut nodes = Vec::with_capacity(cap);
        nodes.push(Node {
            child: None,
            next: None,
            item: <T as Default>::default(),
        });
        Tree {
            nodes,
            spine: Vec::new(),
            cur: None,
        }
    }

    /// Drops every node and returns to the freshly constructed state,
    /// keeping the allocation.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.spine.clear();
        self.cur = None;
    }
}

impl<T> Tree<T> {
    /// Returns the index of the element currently in focus.
    pub fn cur(&self) -> Option<TreeIndex> {
        self.cur
    }

    /// Append one item to the current position in the tree.
    pub fn append(&mut self, item: T) -> TreeIndex {
        let ix = self.create_node(item);
        let this = Some(ix);

        if let Some(ix) = self.cur {
            self[ix].next = this;
        } else if let Some(&parent) = self.spine.last() {
            self[parent].child = this;
        }
        self.cur = this;
        ix
    }

    /// Create an isolated node.
    pub fn create_node(&mut self, item: T) -> TreeIndex {
        let this = self.nodes.len();
        self.nodes.push(Node {
            child: None,
            next: None,
            item,
        });
        TreeIndex::new(this)
    }

    /// Push down one level, so that new items become children of the current node.
    /// The new focus index is returned.
    pub fn push(&mut self) -> Option<TreeIndex> {
        let cur_ix = self.cur?;
        self.spine.push(cur_ix);
        self.cur = self[cur_ix].child;
        // keep appending after the last existing child
        while let Some(ix) = self.cur {
            match self[ix].next {
                Some(next) => self.cur = Some(next),
                None => break,
            }
        }
        Some(cur_ix)
    }

    /// Pop back up a level.
    pub fn pop(&mut self) -> Option<TreeIndex> {
        let ix = self.spine.pop()?;
        self.cur = Some(ix);
        Some(ix)
    }

    /// Unlinks the node in focus from its parent. Focus moves to its
    /// previous sibling, if any.
    pub fn remove_cur(&mut self) {
        let Some(cur_ix) = self.cur else { return };
        let Some(&parent) = self.spine.last() else {
            return;
        };
        let mut prev = None;
        let mut scan = self[parent].child;
        while let Some(ix) = scan {
            if ix == cur_ix {
                break;
            }
            prev = Some(ix);
            scan = self[ix].next;
        }
        let next = self[cur_ix].next;
        match prev {
            Some(prev_ix) => self[prev_ix].next = next,
            None => self[parent].child = next,
        }
        self.cur = prev;
    }

    /// Look at the parent node.
    pub fn peek_up(&self) -> Option<TreeIndex> {
        self.spine.last().cloned()
    }

    /// Returns the number of nodes ever created, including unlinked ones.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Returns the length of the spine.
    pub fn spine_len(&self) -> usize {
        self.spine.len()
    }

    /// Returns the spine entry at the given depth.
    pub fn spine_at(&self, depth: usize) -> Option<TreeIndex> {
        self.spine.get(depth).copied()
    }

    /// Iterates over the direct children of a node.
    pub fn children(&self, ix: TreeIndex) -> Children<'_, T> {
        Children {
            tree: self,
            next: self[ix].child,
        }
    }

    /// Returns the last direct child of a node.
    pub fn last_child(&self, ix: TreeIndex) -> Option<TreeIndex> {
        self.children(ix).last()
    }
}

/// Iterator over sibling nodes, see [`Tree::children`].
#[derive(Clone)]
pub struct Children<'a, T> {
    tree: &'a Tree<T>,
    next: Option<TreeIndex>,
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = TreeIndex;

    fn next(&mut self) -> Option<TreeIndex> {
        let ix = self.next?;
        self.next = self.tree[ix].next;
        Some(ix)
    }
}

impl<T> std::fmt::Debug for Tree<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        fn debug_tree<T>(
            tree: &Tree<T>,
            cur: TreeIndex,
            indent: usize,
            f: &mut std::fmt::Formatter,
        ) -> std::fmt::Result
        where
            T: std::fmt::Debug,
        {
            for _ in 0..indent {
                write!(f, "  ")?;
            }
            writeln!(f, "{:?}", &tree[cur].item)?;
            if let Some(child_ix) = tree[cur].child {
                debug_tree(tree, child_ix, indent + 1, f)?;
            }
            if let Some(next_ix) = tree[cur].next {
                debug_tree(tree, next_ix, indent, f)?;
            }
            Ok(())
        }

        if self.nodes.len() > 1 {
            let cur = TreeIndex::new(1);
            debug_tree(self, cur, 0, f)
        } else {
            write!(f, "Empty tree")
        }
    }
}

impl<T> std::ops::Index<TreeIndex> for Tree<T> {
    type Output = Node<T>;

    fn index(&self, ix: TreeIndex) -> &Self::Output {
        self.nodes.index(ix.get())
    }
}

impl<T> std::ops::IndexMut<TreeIndex> for Tree<T> {
    fn index_mut(&mut self, ix: TreeIndex) -> &mut Node<T> {
        self.nodes.index_mut(ix.get())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn append_push_pop_builds_preorder() {
        let mut tree: Tree<u32> = Tree::with_capacity(8);
        let root = tree.append(1);
        tree.push();
        let a = tree.append(2);
        let b = tree.append(3);
        tree.pop();
        assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(tree.cur(), Some(root));
    }

    #[test]
    fn push_resumes_after_last_child() {
        let mut tree: Tree<u32> = Tree::with_capacity(8);
        let root = tree.append(1);
        tree.push();
        let a = tree.append(2);
        tree.pop();
        tree.push();
        let b = tree.append(3);
        assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn remove_cur_unlinks_last_child() {
        let mut tree: Tree<u32> = Tree::with_capacity(8);
        let root = tree.append(1);
        tree.push();
        let a = tree.append(2);
        tree.append(3);
        tree.remove_cur();
        assert_eq!(tree.cur(), Some(a));
        let c = tree.append(4);
        assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![a, c]);
    }

    #[test]
    fn clear_resets_focus() {
        let mut tree: Tree<u32> = Tree::with_capacity(8);
        tree.append(1);
        tree.push();
        tree.clear();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.spine_len(), 0);
        assert_eq!(tree.cur(), None);
    }
}
