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

//! Inline parsing of a leaf block's text.
//!
//! The first pass cuts out the spans that bind tighter than anything else:
//! backslash escapes, entities, code spans, autolinks and raw HTML. The
//! second pass walks the remaining text, collects delimiter runs and
//! brackets, and resolves links as soon as their `]` is seen. Emphasis is
//! resolved last, see [`crate::emphasis`].

use std::borrow::Cow;
use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::emphasis::{self, Delim, Piece, DELIMITER_WORK_LIMIT};
use crate::linklabel::{scan_link_label, RefDefs};
use crate::scanners::{
    is_ascii_punctuation, is_punctuation, scan_autolink, scan_ch_repeat, scan_entity,
    scan_inline_html, scan_inline_link, HtmlScanGuard,
};
use crate::{Inline, Link, LinkType};

/// Parses the text of one paragraph, heading or table cell.
///
/// `link_budget` caps the bytes of destination text reference links may
/// still expand to during this parse.
pub(crate) fn parse_inlines(text: &str, refdefs: &RefDefs, link_budget: &mut usize) -> Vec<Inline> {
    let text = text.trim_end_matches([' ', '\t', '\n']);
    let tokens = tokenize(text);
    InlineParser {
        text,
        tokens: &tokens,
        refdefs,
        link_budget,
        work: DELIMITER_WORK_LIMIT,
        pieces: Vec::new(),
        brackets: Vec::new(),
    }
    .run()
}

#[derive(Clone, Debug, PartialEq)]
enum TokenKind {
    /// Source text still to be scanned for delimiters.
    Text,
    /// An escaped character or a decoded entity.
    Literal(Cow<'static, str>),
    Code(String),
    Html,
    Autolink { email: bool },
}

/// A span of the block text as cut by the first pass.
#[derive(Clone, Debug, PartialEq)]
struct Token {
    kind: TokenKind,
    start: usize,
    end: usize,
}

/// Positions of backtick runs by length, collected once per block the
/// first time a code span opener needs a closer.
#[derive(Debug, Default)]
struct CodeDelims {
    inner: HashMap<usize, VecDeque<usize>>,
    populated: bool,
}

impl CodeDelims {
    fn populate(&mut self, bytes: &[u8], mut ix: usize) {
        self.populated = true;
        while ix < bytes.len() {
            if bytes[ix] == b'`' {
                let count = scan_ch_repeat(&bytes[ix..], b'`');
                self.inner.entry(count).or_default().push_back(ix);
                ix += count;
            } else {
                ix += 1;
            }
        }
    }

    /// Finds the first run of exactly `count` backticks at or after `from`.
    fn find(&mut self, bytes: &[u8], from: usize, count: usize) -> Option<usize> {
        if !self.populated {
            self.populate(bytes, from);
        }
        let runs = self.inner.get_mut(&count)?;
        while let Some(&ix) = runs.front() {
            runs.pop_front();
            if ix >= from {
                return Some(ix);
            }
        }
        None
    }
}

/// Line endings become spaces, and one space is stripped from each side
/// when both sides have one and the content is not all spaces.
fn code_span_content(raw: &str) -> String {
    let content = raw.replace('\n', " ");
    let bytes = content.as_bytes();
    if bytes.len() >= 2
        && bytes[0] == b' '
        && bytes[bytes.len() - 1] == b' '
        && !bytes.iter().all(|&b| b == b' ')
    {
        content[1..content.len() - 1].to_owned()
    } else {
        content
    }
}

fn tokenize(text: &str) -> Vec<Token> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut code_delims = CodeDelims::default();
    let mut html_guard = HtmlScanGuard::default();
    let mut mark = 0;
    let mut ix = 0;

    let flush = |tokens: &mut Vec<Token>, mark: usize, ix: usize| {
        if ix > mark {
            tokens.push(Token {
                kind: TokenKind::Text,
                start: mark,
                end: ix,
            });
        }
    };

    while ix < bytes.len() {
        let special = match bytes[ix] {
            b'\\' if bytes.get(ix + 1).copied().is_some_and(is_ascii_punctuation) => Some((
                TokenKind::Literal(Cow::Owned(text[ix + 1..ix + 2].to_owned())),
                ix + 2,
            )),
            b'&' => match scan_entity(&bytes[ix..]) {
                (n, Some(value)) => Some((TokenKind::Literal(value), ix + n)),
                _ => None,
            },
            b'`' => {
                let count = scan_ch_repeat(&bytes[ix..], b'`');
                match code_delims.find(bytes, ix + count, count) {
                    Some(close) => Some((
                        TokenKind::Code(code_span_content(&text[ix + count..close])),
                        close + count,
                    )),
                    None => {
                        // an unmatched run is literal as a whole
                        ix += count;
                        continue;
                    }
                }
            }
            b'<' => {
                if let Some((end, _, email)) = scan_autolink(text, ix) {
                    Some((TokenKind::Autolink { email }, end))
                } else {
                    scan_inline_html(bytes, ix, &mut html_guard).map(|end| (TokenKind::Html, end))
                }
            }
            _ => None,
        };
        match special {
            Some((kind, end)) => {
                flush(&mut tokens, mark, ix);
                tokens.push(Token {
                    kind,
                    start: ix,
                    end,
                });
                ix = end;
                mark = end;
            }
            None => ix += 1,
        }
    }
    flush(&mut tokens, mark, bytes.len());
    tokens
}

/// Computes whether a run of `count` delimiter characters at `ix` may open
/// or close, from the characters on either side of it.
fn flanking(text: &str, ix: usize, count: usize, c: u8) -> (bool, bool) {
    let prev = text[..ix].chars().next_back();
    let next = text[ix + count..].chars().next();
    let prev_white = prev.map_or(true, char::is_whitespace);
    let next_white = next.map_or(true, char::is_whitespace);
    let prev_punct = prev.is_some_and(is_punctuation);
    let next_punct = next.is_some_and(is_punctuation);

    let left_flanking = !next_white && (!next_punct || prev_white || prev_punct);
    let right_flanking = !prev_white && (!prev_punct || next_white || next_punct);
    if c == b'_' {
        (
            left_flanking && (!right_flanking || prev_punct),
            right_flanking && (!left_flanking || next_punct),
        )
    } else {
        (left_flanking, right_flanking)
    }
}

struct InlineParser<'a, 'b> {
    text: &'a str,
    tokens: &'a [Token],
    refdefs: &'b RefDefs,
    link_budget: &'b mut usize,
    work: usize,
    pieces: Vec<Piece>,
    /// indices into `pieces` of the brackets still waiting for `]`
    brackets: Vec<usize>,
}

impl InlineParser<'_, '_> {
    fn run(mut self) -> Vec<Inline> {
        let mut ti = 0;
        let mut resume = None;
        while let Some(token) = self.tokens.get(ti) {
            let token_text = &self.text[token.start..token.end];
            match &token.kind {
                TokenKind::Text => {
                    let start = resume.take().unwrap_or(token.start);
                    if let Some(link_end) = self.scan_text(start, token.end) {
                        ti = self.tokens.partition_point(|t| t.end <= link_end);
                        if self.tokens.get(ti).is_some_and(|t| t.start < link_end) {
                            resume = Some(link_end);
                        }
                        continue;
                    }
                }
                TokenKind::Literal(value) => self.push_text(value),
                TokenKind::Code(content) => self.push_node(Inline::Code(content.clone())),
                TokenKind::Html => self.push_node(Inline::Html(token_text.to_owned())),
                TokenKind::Autolink { email } => self.push_node(Inline::Autolink {
                    url: token_text[1..token_text.len() - 1].to_owned(),
                    email: *email,
                }),
            }
            ti += 1;
        }
        let mut work = self.work;
        emphasis::resolve(self.pieces, &mut work)
    }

    fn push_node(&mut self, node: Inline) {
        self.pieces.push(Piece::Node(node));
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Piece::Node(Inline::Text(last))) = self.pieces.last_mut() {
            last.push_str(text);
        } else {
            self.pieces.push(Piece::Node(Inline::Text(text.to_owned())));
        }
    }

    /// Scans `text[start..end]`, which belongs to a single text token.
    ///
    /// Returns the source offset to continue from when a link consumed
    /// input past the end of the token.
    fn scan_text(&mut self, start: usize, end: usize) -> Option<usize> {
        let text = self.text;
        let bytes = text.as_bytes();
        let mut ix = start;
        let mut mark = start;
        while ix < end {
            match bytes[ix] {
                c @ (b'*' | b'_' | b'~') => {
                    self.push_text(&text[mark..ix]);
                    let count = scan_ch_repeat(&bytes[ix..end], c);
                    self.push_delim_run(ix, count, c);
                    ix += count;
                    mark = ix;
                }
                b'[' => {
                    self.push_text(&text[mark..ix]);
                    self.push_bracket(false, ix);
                    ix += 1;
                    mark = ix;
                }
                b'!' if ix + 1 < end && bytes[ix + 1] == b'[' => {
                    self.push_text(&text[mark..ix]);
                    self.push_bracket(true, ix);
                    ix += 2;
                    mark = ix;
                }
                b']' => {
                    self.push_text(&text[mark..ix]);
                    if let Some(link_end) = self.close_bracket(ix) {
                        if link_end <= end {
                            ix = link_end;
                            mark = ix;
                            continue;
                        }
                        return Some(link_end);
                    }
                    ix += 1;
                    mark = ix;
                }
                b'\n' => {
                    let line = &text[mark..ix];
                    let trimmed = line.trim_end_matches(' ');
                    let node = if line.len() - trimmed.len() >= 2 {
                        self.push_text(trimmed);
                        Inline::HardBreak
                    } else if let Some(before) = trimmed.strip_suffix('\\') {
                        self.push_text(before);
                        Inline::HardBreak
                    } else {
                        self.push_text(trimmed);
                        Inline::SoftBreak
                    };
                    self.push_node(node);
                    ix += 1;
                    while ix < end && matches!(bytes[ix], b' ' | b'\t') {
                        ix += 1;
                    }
                    mark = ix;
                }
                _ => ix += 1,
            }
        }
        self.push_text(&text[mark..end]);
        None
    }

    fn push_delim_run(&mut self, ix: usize, count: usize, c: u8) {
        let (can_open, can_close) = flanking(self.text, ix, count, c);
        if c == b'~' && count > 2 {
            // strikethrough runs are capped at two, the excess stays literal
            let excess = "~".repeat(count - 2);
            let delim = Delim {
                c,
                count: 2,
                run_length: 2,
                can_open,
                can_close,
            };
            if can_close && !can_open {
                self.pieces.push(Piece::Delim(delim));
                self.push_text(&excess);
            } else {
                self.push_text(&excess);
                self.pieces.push(Piece::Delim(delim));
            }
            return;
        }
        self.pieces.push(Piece::Delim(Delim {
            c,
            count,
            run_length: count,
            can_open,
            can_close,
        }));
    }

    fn push_bracket(&mut self, image: bool, pos: usize) {
        self.brackets.push(self.pieces.len());
        self.pieces.push(Piece::Bracket {
            image,
            active: true,
            pos,
        });
    }

    /// Handles the `]` at `ix`. On success the link or image replaces its
    /// opener and the offset after the whole construct is returned.
    /// Otherwise a literal `]` is emitted.
    fn close_bracket(&mut self, ix: usize) -> Option<usize> {
        let Some(&piece_ix) = self.brackets.last() else {
            self.push_text("]");
            return None;
        };
        let (image, active, pos) = match self.pieces[piece_ix] {
            Piece::Bracket { image, active, pos } => (image, active, pos),
            _ => (false, false, 0),
        };
        if !active {
            self.brackets.pop();
            self.push_text("]");
            return None;
        }

        match self.scan_link_tail(pos, image, ix) {
            Some((end, link_type, url, title)) => {
                self.make_link(piece_ix, image, link_type, url, title);
                Some(end)
            }
            None => {
                // the opener falls back to text when resolution is over
                self.brackets.pop();
                self.push_text("]");
                None
            }
        }
    }

    /// Tries the inline form, then full, collapsed and shortcut references.
    fn scan_link_tail(
        &mut self,
        opener_pos: usize,
        image: bool,
        ix: usize,
    ) -> Option<(usize, LinkType, String, String)> {
        let text = self.text;
        let after = ix + 1;

        if text.as_bytes().get(after) == Some(&b'(') {
            if let Some((end, url, title)) = scan_inline_link(text, after) {
                if self.ends_in_text(end) {
                    return Some((end, LinkType::Inline, url, title));
                }
            }
        }

        let label_start = opener_pos + usize::from(image);
        let (end, link_type, label) = if text[after..].starts_with("[]") {
            let (_, label) = scan_link_label(&text[label_start..=ix])?;
            (after + 2, LinkType::Collapsed, label)
        } else if let Some((len, label)) = scan_link_label(&text[after..]) {
            (after + len, LinkType::Reference, label)
        } else {
            let (_, label) = scan_link_label(&text[label_start..=ix])?;
            (after, LinkType::Shortcut, label)
        };
        if !self.ends_in_text(end) {
            return None;
        }
        let def = self.refdefs.get(&label)?;
        if def.dest.len() > *self.link_budget {
            debug!("reference link expansion limit reached, keeping [{}] literal", label);
            return None;
        }
        *self.link_budget -= def.dest.len();
        Some((end, link_type, def.dest.clone(), def.title.clone()))
    }

    /// True unless `end` falls strictly inside a span the first pass cut
    /// out, such as a code span.
    fn ends_in_text(&self, end: usize) -> bool {
        let ti = self.tokens.partition_point(|t| t.end <= end);
        match self.tokens.get(ti) {
            Some(token) if token.start < end => token.kind == TokenKind::Text,
            _ => true,
        }
    }

    fn make_link(
        &mut self,
        piece_ix: usize,
        image: bool,
        link_type: LinkType,
        url: String,
        title: String,
    ) {
        let inner: Vec<Piece> = self.pieces.drain(piece_ix + 1..).collect();
        self.pieces.pop();
        self.brackets.pop();
        let children = emphasis::resolve(inner, &mut self.work);
        let link = Link {
            link_type,
            url,
            title,
            children,
        };
        self.pieces.push(Piece::Node(if image {
            Inline::Image(link)
        } else {
            Inline::Link(link)
        }));
        if !image {
            // links do not nest, but images may hold them
            for &bracket in &self.brackets {
                if let Piece::Bracket {
                    image: false,
                    active,
                    ..
                } = &mut self.pieces[bracket]
                {
                    *active = false;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::linklabel::{extract_refdefs, RefDefs};

    fn parse(text: &str) -> Vec<Inline> {
        parse_with_refs(text, "")
    }

    fn parse_with_refs(text: &str, defs: &str) -> Vec<Inline> {
        let mut refdefs = RefDefs::default();
        extract_refdefs(defs, &mut refdefs);
        let mut budget = 100_000;
        parse_inlines(text, &refdefs, &mut budget)
    }

    fn t(s: &str) -> Inline {
        Inline::Text(s.to_owned())
    }

    fn link(link_type: LinkType, url: &str, title: &str, children: Vec<Inline>) -> Inline {
        Inline::Link(Link {
            link_type,
            url: url.to_owned(),
            title: title.to_owned(),
            children,
        })
    }

    #[test]
    fn code_span_normalization() {
        assert_eq!(parse("`` a`b ``"), vec![Inline::Code("a`b".to_owned())]);
        assert_eq!(parse("`  `"), vec![Inline::Code("  ".to_owned())]);
        assert_eq!(parse("`a\nb`"), vec![Inline::Code("a b".to_owned())]);
        assert_eq!(parse("`unterminated"), vec![t("`unterminated")]);
        assert_eq!(parse("``a`"), vec![t("``a`")]);
    }

    #[test]
    fn code_span_beats_emphasis() {
        assert_eq!(
            parse("*a `*` b*"),
            vec![Inline::Emphasis(vec![
                t("a "),
                Inline::Code("*".to_owned()),
                t(" b")
            ])]
        );
    }

    #[test]
    fn escapes_and_entities() {
        assert_eq!(parse("\\*not\\* &amp; &#35; &bogus;"), vec![t("*not* & # &bogus;")]);
        assert_eq!(parse("&#0;"), vec![t("\u{FFFD}")]);
        assert_eq!(parse("\\a"), vec![t("\\a")]);
    }

    #[test]
    fn autolinks_and_html() {
        assert_eq!(
            parse("<http://a.b/c> <me@example.com>"),
            vec![
                Inline::Autolink {
                    url: "http://a.b/c".to_owned(),
                    email: false
                },
                t(" "),
                Inline::Autolink {
                    url: "me@example.com".to_owned(),
                    email: true
                },
            ]
        );
        assert_eq!(
            parse("a <b class=\"x\">c</b>"),
            vec![
                t("a "),
                Inline::Html("<b class=\"x\">".to_owned()),
                t("c"),
                Inline::Html("</b>".to_owned())
            ]
        );
        assert_eq!(parse("a < b"), vec![t("a < b")]);
    }

    #[test]
    fn line_breaks() {
        assert_eq!(
            parse("a  \nb\\\nc\nd"),
            vec![
                t("a"),
                Inline::HardBreak,
                t("b"),
                Inline::HardBreak,
                t("c"),
                Inline::SoftBreak,
                t("d")
            ]
        );
        assert_eq!(parse("trailing  "), vec![t("trailing")]);
    }

    #[test]
    fn emphasis_forms() {
        assert_eq!(parse("*a*"), vec![Inline::Emphasis(vec![t("a")])]);
        assert_eq!(parse("__a__"), vec![Inline::Strong(vec![t("a")])]);
        assert_eq!(
            parse("***a***"),
            vec![Inline::Strong(vec![Inline::Emphasis(vec![t("a")])])]
        );
        assert_eq!(parse("snake_case_name"), vec![t("snake_case_name")]);
        assert_eq!(parse("* a *"), vec![t("* a *")]);
    }

    #[test]
    fn strikethrough_runs() {
        assert_eq!(parse("~~a~~"), vec![Inline::Strikethrough(vec![t("a")])]);
        assert_eq!(parse("~a~"), vec![Inline::Strikethrough(vec![t("a")])]);
        assert_eq!(
            parse("~~~a~~~"),
            vec![t("~"), Inline::Strikethrough(vec![t("a")]), t("~")]
        );
    }

    #[test]
    fn inline_link_contains_emphasis() {
        assert_eq!(
            parse("[*foo*](bar)"),
            vec![link(
                LinkType::Inline,
                "bar",
                "",
                vec![Inline::Emphasis(vec![t("foo")])]
            )]
        );
    }

    #[test]
    fn emphasis_does_not_cross_link() {
        assert_eq!(
            parse("*[a*](b)"),
            vec![t("*"), link(LinkType::Inline, "b", "", vec![t("a*")])]
        );
    }

    #[test]
    fn link_destination_with_angle_brackets_and_title() {
        assert_eq!(
            parse("[a](<b c> \"t\") x"),
            vec![link(LinkType::Inline, "b c", "t", vec![t("a")]), t(" x")]
        );
    }

    #[test]
    fn links_do_not_nest() {
        assert_eq!(
            parse("[a [b](c) d](e)"),
            vec![
                t("[a "),
                link(LinkType::Inline, "c", "", vec![t("b")]),
                t(" d](e)")
            ]
        );
    }

    #[test]
    fn image_may_contain_link() {
        let out = parse("![a [b](c)](d)");
        let Inline::Image(image) = &out[0] else {
            panic!("expected image, got {:?}", out);
        };
        assert_eq!(image.url, "d");
        assert_eq!(
            image.children,
            vec![t("a "), link(LinkType::Inline, "c", "", vec![t("b")])]
        );
    }

    #[test]
    fn reference_forms() {
        let defs = "[x]: http://example.com \"T\"\n[Foo Bar]: /fb";
        assert_eq!(
            parse_with_refs("[see][x]", defs),
            vec![link(LinkType::Reference, "http://example.com", "T", vec![t("see")])]
        );
        assert_eq!(
            parse_with_refs("[foo  bar][]", defs),
            vec![link(LinkType::Collapsed, "/fb", "", vec![t("foo  bar")])]
        );
        assert_eq!(
            parse_with_refs("[X] tail", defs),
            vec![link(LinkType::Shortcut, "http://example.com", "T", vec![t("X")]), t(" tail")]
        );
        assert_eq!(parse_with_refs("[nope]", defs), vec![t("[nope]")]);
        assert_eq!(parse_with_refs("[x][nope]", defs), vec![t("[x][nope]")]);
    }

    #[test]
    fn unmatched_brackets_are_text() {
        assert_eq!(parse("[foo"), vec![t("[foo")]);
        assert_eq!(parse("a]b"), vec![t("a]b")]);
        assert_eq!(parse("![x](y"), vec![t("![x](y")]);
    }

    #[test]
    fn link_cannot_end_inside_code_span() {
        assert_eq!(
            parse("[a](b`c)`"),
            vec![t("[a](b"), Inline::Code("c)".to_owned())]
        );
    }

    #[test]
    fn link_budget_caps_expansion() {
        let mut refdefs = RefDefs::default();
        extract_refdefs("[x]: /0123456789", &mut refdefs);
        let mut budget = 15;
        let out = parse_inlines("[x] [x]", &refdefs, &mut budget);
        assert_eq!(
            out,
            vec![link(LinkType::Shortcut, "/0123456789", "", vec![t("x")]), t(" [x]")]
        );
    }
}
