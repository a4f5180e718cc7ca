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

//! Delimiter resolution: matching runs of `*`, `_` and `~` into emphasis,
//! strong emphasis and strikethrough nodes.
//!
//! The input is the flat sequence produced by the delimiter scanner. It is
//! threaded into a linked list of slots so that a match can collapse
//! everything between its opener and closer into one node without moving
//! the rest of the sequence.

use std::cmp::min;

use log::debug;

use crate::Inline;

/// Opener candidates that may be examined while resolving one block. Once
/// spent, every remaining delimiter stays literal text.
pub(crate) const DELIMITER_WORK_LIMIT: usize = 1_000_000;

/// One element of a block's inline sequence before delimiter resolution.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Piece {
    Node(Inline),
    Delim(Delim),
    /// `[` or `![` that has not been closed (yet). `pos` is its source offset.
    Bracket { image: bool, active: bool, pos: usize },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Delim {
    /// b'*', b'_', or b'~'
    pub c: u8,
    /// number of delimiters available for matching
    pub count: usize,
    /// length of the run that these delimiters came from
    pub run_length: usize,
    pub can_open: bool,
    pub can_close: bool,
}

impl Piece {
    /// What is left of the piece once resolution is over.
    fn into_inline(self) -> Option<Inline> {
        match self {
            Piece::Node(node) => Some(node),
            Piece::Delim(delim) if delim.count == 0 => None,
            Piece::Delim(delim) => Some(Inline::Text(
                char::from(delim.c).to_string().repeat(delim.count),
            )),
            Piece::Bracket { image: true, .. } => Some(Inline::Text("![".to_owned())),
            Piece::Bracket { .. } => Some(Inline::Text("[".to_owned())),
        }
    }
}

/// Appends `node` to `out`, merging adjacent text.
pub(crate) fn push_inline(out: &mut Vec<Inline>, node: Inline) {
    if let Inline::Text(text) = &node {
        if text.is_empty() {
            return;
        }
        if let Some(Inline::Text(last)) = out.last_mut() {
            last.push_str(text);
            return;
        }
    }
    out.push(node);
}

/// Resolves every delimiter run in `pieces` and returns the finished inline
/// sequence. `budget` is shared by all calls for one block.
pub(crate) fn resolve(pieces: Vec<Piece>, budget: &mut usize) -> Vec<Inline> {
    let mut resolver = Resolver::new(pieces, budget);
    // the second sweep gives runs blocked by the rule of three another chance
    resolver.process(true);
    resolver.process(false);
    resolver.finish()
}

#[derive(Debug)]
struct Slot {
    piece: Option<Piece>,
    next: Option<usize>,
}

#[derive(Copy, Clone, Debug)]
struct InlineEl {
    /// slot of the opening run
    slot: usize,
    count: usize,
    run_length: usize,
    c: u8,
    /// can both open and close
    both: bool,
}

#[derive(Debug, Clone, Default)]
struct InlineStack {
    stack: Vec<InlineEl>,
    // Lower bounds for matching indices in the stack. For example
    // a strikethrough delimiter will never match with any element
    // in the stack with index smaller than
    // `lower_bounds[InlineStack::TILDES_BASE + run_length - 1]`.
    lower_bounds: [usize; 10],
}

impl InlineStack {
    /// These are indices into the lower bounds array.
    /// Not both refers to the property that the delimiter can not both
    /// be opener as a closer.
    const UNDERSCORE_NOT_BOTH: usize = 0;
    const ASTERISK_NOT_BOTH: usize = 1;
    const ASTERISK_BASE: usize = 2;
    const TILDES_BASE: usize = 5;
    const UNDERSCORE_BASE: usize = 7;

    fn clear(&mut self) {
        self.stack.clear();
        self.lower_bounds = [0; 10];
    }

    /// Tilde runs only pair with runs of the same length, so each length
    /// keeps its own bound.
    fn tildes(run_length: usize) -> usize {
        InlineStack::TILDES_BASE + min(run_length, 2) - 1
    }

    fn get_lowerbound(&self, c: u8, count: usize, both: bool) -> usize {
        let (base, not_both) = match c {
            b'_' => (InlineStack::UNDERSCORE_BASE, InlineStack::UNDERSCORE_NOT_BOTH),
            b'*' => (InlineStack::ASTERISK_BASE, InlineStack::ASTERISK_NOT_BOTH),
            _ => return self.lower_bounds[InlineStack::tildes(count)],
        };
        let mod3_lower = self.lower_bounds[base + count % 3];
        if both {
            mod3_lower
        } else {
            min(mod3_lower, self.lower_bounds[not_both])
        }
    }

    fn set_lowerbound(&mut self, c: u8, count: usize, both: bool, new_bound: usize) {
        match c {
            b'_' => {
                if both {
                    self.lower_bounds[InlineStack::UNDERSCORE_BASE + count % 3] = new_bound;
                } else {
                    self.lower_bounds[InlineStack::UNDERSCORE_NOT_BOTH] = new_bound;
                }
            }
            b'*' => {
                self.lower_bounds[InlineStack::ASTERISK_BASE + count % 3] = new_bound;
                if !both {
                    self.lower_bounds[InlineStack::ASTERISK_NOT_BOTH] = new_bound;
                }
            }
            _ => self.lower_bounds[InlineStack::tildes(count)] = new_bound,
        }
    }

    fn truncate(&mut self, new_bound: usize) {
        self.stack.truncate(new_bound);
        for lower_bound in &mut self.lower_bounds {
            if *lower_bound > new_bound {
                *lower_bound = new_bound;
            }
        }
    }

    /// Finds the nearest opener for a closing run and pops it, together
    /// with every opener above it. Returns `None` when there is no match or
    /// the budget ran out.
    fn find_match(
        &mut self,
        c: u8,
        run_length: usize,
        both: bool,
        rule_of_three: bool,
        budget: &mut usize,
    ) -> Option<InlineEl> {
        let lowerbound = min(self.stack.len(), self.get_lowerbound(c, run_length, both));
        let candidates = self.stack.len() - lowerbound;
        if candidates > *budget {
            *budget = 0;
            return None;
        }
        *budget -= candidates;

        let res = self.stack[lowerbound..]
            .iter()
            .copied()
            .enumerate()
            .rfind(|(_, el)| {
                if el.c != c {
                    return false;
                }
                if c == b'~' {
                    return run_length == el.run_length;
                }
                !rule_of_three
                    || (!both && !el.both)
                    || (run_length + el.run_length) % 3 != 0
                    || (run_length % 3 == 0 && el.run_length % 3 == 0)
            });

        if let Some((matching_ix, matching_el)) = res {
            self.truncate(matching_ix + lowerbound);
            Some(matching_el)
        } else {
            self.set_lowerbound(c, run_length, both, self.stack.len());
            None
        }
    }

    fn trim_lower_bound(&mut self, ix: usize) {
        self.lower_bounds[ix] = self.lower_bounds[ix].min(self.stack.len());
    }

    fn push(&mut self, el: InlineEl) {
        if el.c == b'~' {
            self.trim_lower_bound(InlineStack::tildes(el.run_length));
        }
        self.stack.push(el)
    }
}

struct Resolver<'b> {
    slots: Vec<Slot>,
    stack: InlineStack,
    budget: &'b mut usize,
    exhausted: bool,
}

impl<'b> Resolver<'b> {
    fn new(pieces: Vec<Piece>, budget: &'b mut usize) -> Self {
        let len = pieces.len();
        let slots = pieces
            .into_iter()
            .enumerate()
            .map(|(i, piece)| Slot {
                piece: Some(piece),
                next: (i + 1 < len).then_some(i + 1),
            })
            .collect();
        Resolver {
            slots,
            stack: InlineStack::default(),
            budget,
            exhausted: false,
        }
    }

    fn head(&self) -> Option<usize> {
        (!self.slots.is_empty()).then_some(0)
    }

    fn delim(&self, ix: usize) -> Option<Delim> {
        match self.slots[ix].piece {
            Some(Piece::Delim(delim)) if delim.count > 0 => Some(delim),
            _ => None,
        }
    }

    fn set_count(&mut self, ix: usize, count: usize) {
        if let Some(Piece::Delim(delim)) = &mut self.slots[ix].piece {
            delim.count = count;
        }
    }

    /// One left to right sweep over the sequence.
    fn process(&mut self, rule_of_three: bool) {
        self.stack.clear();
        let mut cur = self.head();
        while let Some(ix) = cur {
            if let Some(delim) = self.delim(ix) {
                let both = rule_of_three && delim.can_open && delim.can_close;
                let mut count = delim.count;
                if delim.can_close && !self.exhausted {
                    while count > 0 {
                        let Some(opener) = self.stack.find_match(
                            delim.c,
                            delim.run_length,
                            both,
                            rule_of_three,
                            self.budget,
                        ) else {
                            break;
                        };
                        count = self.wrap(opener, ix, count);
                    }
                    if *self.budget == 0 && !self.exhausted {
                        debug!("delimiter work limit reached, leaving remaining runs literal");
                        self.exhausted = true;
                    }
                }
                if count > 0 && delim.can_open {
                    self.stack.push(InlineEl {
                        slot: ix,
                        count,
                        run_length: delim.run_length,
                        c: delim.c,
                        both,
                    });
                }
            }
            cur = self.slots[ix].next;
        }
    }

    /// Builds the node for a matched pair and links it in between opener
    /// and closer. Returns what is left of the closing run.
    fn wrap(&mut self, opener: InlineEl, closer: usize, closer_count: usize) -> usize {
        let mut open_left = opener.count;
        let mut close_left = closer_count;
        // outermost first; when both runs have delimiters to spare, they
        // nest inside the node just built
        let mut sizes = Vec::new();
        while open_left > 0 && close_left > 0 {
            let n = if opener.c == b'~' {
                min(open_left, close_left)
            } else {
                min(min(open_left, close_left), 2)
            };
            sizes.push(n);
            open_left -= n;
            close_left -= n;
        }

        let mut children = self.take_between(opener.slot, closer);
        for &n in sizes.iter().rev() {
            let node = match (opener.c, n) {
                (b'~', _) => Inline::Strikethrough(children),
                (_, 2) => Inline::Strong(children),
                _ => Inline::Emphasis(children),
            };
            children = vec![node];
        }

        let node_ix = self.slots.len();
        self.slots.push(Slot {
            piece: children.pop().map(Piece::Node),
            next: Some(closer),
        });
        self.slots[opener.slot].next = Some(node_ix);
        self.set_count(opener.slot, open_left);
        self.set_count(closer, close_left);

        if open_left > 0 {
            self.stack.push(InlineEl {
                count: open_left,
                ..opener
            });
        }
        close_left
    }

    /// Removes every piece strictly between `from` and `to` and returns
    /// them as inlines, delimiters demoted to text.
    fn take_between(&mut self, from: usize, to: usize) -> Vec<Inline> {
        let mut out = Vec::new();
        let mut cur = self.slots[from].next;
        while let Some(ix) = cur {
            if ix == to {
                break;
            }
            if let Some(node) = self.slots[ix].piece.take().and_then(Piece::into_inline) {
                push_inline(&mut out, node);
            }
            cur = self.slots[ix].next;
        }
        out
    }

    fn finish(mut self) -> Vec<Inline> {
        let mut out = Vec::new();
        let mut cur = self.head();
        while let Some(ix) = cur {
            if let Some(node) = self.slots[ix].piece.take().and_then(Piece::into_inline) {
                push_inline(&mut out, node);
            }
            cur = self.slots[ix].next;
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn text(s: &str) -> Piece {
        Piece::Node(Inline::Text(s.to_owned()))
    }

    fn delim(c: u8, n: usize, can_open: bool, can_close: bool) -> Piece {
        Piece::Delim(Delim {
            c,
            count: n,
            run_length: n,
            can_open,
            can_close,
        })
    }

    fn run(pieces: Vec<Piece>) -> Vec<Inline> {
        let mut budget = DELIMITER_WORK_LIMIT;
        resolve(pieces, &mut budget)
    }

    fn t(s: &str) -> Inline {
        Inline::Text(s.to_owned())
    }

    #[test]
    fn single_emphasis() {
        let out = run(vec![delim(b'*', 1, true, false), text("a"), delim(b'*', 1, false, true)]);
        assert_eq!(out, vec![Inline::Emphasis(vec![t("a")])]);
    }

    #[test]
    fn triple_run_is_strong_around_emphasis() {
        let out = run(vec![delim(b'*', 3, true, false), text("a"), delim(b'*', 3, false, true)]);
        assert_eq!(out, vec![Inline::Strong(vec![Inline::Emphasis(vec![t("a")])])]);
    }

    #[test]
    fn rule_of_three_keeps_inner_strong() {
        // *foo**bar**baz*
        let out = run(vec![
            delim(b'*', 1, true, false),
            text("foo"),
            delim(b'*', 2, true, true),
            text("bar"),
            delim(b'*', 2, true, true),
            text("baz"),
            delim(b'*', 1, false, true),
        ]);
        assert_eq!(
            out,
            vec![Inline::Emphasis(vec![
                t("foo"),
                Inline::Strong(vec![t("bar")]),
                t("baz")
            ])]
        );
    }

    #[test]
    fn leftover_opener_stays_outside() {
        // **a*
        let out = run(vec![delim(b'*', 2, true, false), text("a"), delim(b'*', 1, false, true)]);
        assert_eq!(out, vec![t("*"), Inline::Emphasis(vec![t("a")])]);
    }

    #[test]
    fn tildes_need_equal_runs() {
        let out = run(vec![delim(b'~', 2, true, false), text("a"), delim(b'~', 1, false, true)]);
        assert_eq!(out, vec![t("~~a~")]);
        let out = run(vec![delim(b'~', 2, true, false), text("a"), delim(b'~', 2, false, true)]);
        assert_eq!(out, vec![Inline::Strikethrough(vec![t("a")])]);
    }

    #[test]
    fn failed_tilde_closer_does_not_hide_other_lengths() {
        // ~~a~ b~~
        let out = run(vec![
            delim(b'~', 2, true, false),
            text("a"),
            delim(b'~', 1, false, true),
            text(" b"),
            delim(b'~', 2, false, true),
        ]);
        assert_eq!(out, vec![Inline::Strikethrough(vec![t("a~ b")])]);
        // ~a~~ b~
        let out = run(vec![
            delim(b'~', 1, true, false),
            text("a"),
            delim(b'~', 2, false, true),
            text(" b"),
            delim(b'~', 1, false, true),
        ]);
        assert_eq!(out, vec![Inline::Strikethrough(vec![t("a~~ b")])]);
    }

    #[test]
    fn unmatched_become_text() {
        let out = run(vec![
            Piece::Bracket {
                image: true,
                active: true,
                pos: 0,
            },
            delim(b'_', 2, true, false),
            text("x"),
        ]);
        assert_eq!(out, vec![t("![__x")]);
    }

    #[test]
    fn mismatched_characters_do_not_pair() {
        let out = run(vec![delim(b'*', 1, true, false), text("a"), delim(b'_', 1, false, true)]);
        assert_eq!(out, vec![t("*a_")]);
    }

    #[test]
    fn second_sweep_ignores_rule_of_three() {
        // both-flanking `*` followed by a closing `**`
        let out = run(vec![
            text("foo"),
            delim(b'*', 1, true, true),
            text("bar"),
            delim(b'*', 2, false, true),
        ]);
        assert_eq!(out, vec![t("foo"), Inline::Emphasis(vec![t("bar")]), t("*")]);
    }

    #[test]
    fn exhausted_budget_leaves_text() {
        let mut pieces = Vec::new();
        for _ in 0..10 {
            pieces.push(delim(b'*', 1, true, false));
        }
        pieces.push(text("a"));
        pieces.push(delim(b'*', 1, false, true));
        let mut budget = 3;
        let out = resolve(pieces, &mut budget);
        assert_eq!(out, vec![t("**********a*")]);
    }
}
