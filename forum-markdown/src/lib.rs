// Copyright 2015 Google Inc. All rights reserved.
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

//! Markdown engine for forum posts.
//!
//! Input is parsed as [CommonMark](https://commonmark.org) with the GitHub
//! table and strikethrough extensions into a [`Document`], which can then be
//! rendered to any of the supported [`Dialect`]s without parsing again.
//!
//! # Example
//! ```rust
//! use forum_markdown::{parse, Dialect, Options};
//!
//! let options = Options::new(Dialect::Strict);
//! let html = parse("Hello *forum*, this is ~~hard~~ easy.", false, options);
//! assert_eq!(html, "<p>Hello <em>forum</em>, this is <del>hard</del> easy.</p>\n");
//! ```
//!
//! A [`Parser`] keeps its allocations between calls. Services rendering many
//! posts share instances through a [`ParserPool`]:
//!
//! ```rust
//! use forum_markdown::{Dialect, Options, ParserPool};
//!
//! let pool = ParserPool::new();
//! let mut parser = pool.get(Options::new(Dialect::Lightweight));
//! assert_eq!(parser.parse("**loud**", false), "[b]loud[/b]\n");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod render;

mod emphasis;
mod entities;
mod error;
mod firstpass;
mod inline;
mod linklabel;
mod parse;
mod pool;
mod preprocess;
mod puncttable;
mod scanners;
mod tree;

use std::fmt::Display;

pub use crate::error::Error;
pub use crate::parse::{BlockChildren, BlockRef, Document, Parser};
pub use crate::pool::{ParserPool, PooledParser};

/// Output markup a document is rendered to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dialect {
    /// HTML with self-closing void elements (`<br />`).
    #[default]
    Strict,
    /// HTML with bare void elements (`<br>`).
    Lenient,
    /// Bracket-tag markup. Literal text passes through unescaped.
    Lightweight,
}

bitflags::bitflags! {
    /// Render-time treatment of line breaks the author typed.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct LineBreakMode: u8 {
        /// A run of N >= 2 blank lines between blocks renders N-1 hard breaks.
        const CONVERT_BLANK_LINE_RUNS = 1 << 0;
        /// Every soft break inside a paragraph, heading or table cell renders
        /// as a hard break.
        const CONVERT_MID_PARAGRAPH_BREAKS = 1 << 1;
    }
}

/// Everything that changes the output of a parse. Parsers are pooled per
/// distinct value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Options {
    pub dialect: Dialect,
    pub line_breaks: LineBreakMode,
}

impl Options {
    pub fn new(dialect: Dialect) -> Self {
        Options {
            dialect,
            line_breaks: LineBreakMode::empty(),
        }
    }

    pub fn with_line_breaks(mut self, line_breaks: LineBreakMode) -> Self {
        self.line_breaks = line_breaks;
        self
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeadingLevel {
    H1 = 1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "h{}", *self as usize)
    }
}

/// Returned when trying to convert a `usize` into a `HeadingLevel` but it fails
/// because the usize isn't a valid heading level
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct InvalidHeadingLevel(usize);

impl TryFrom<usize> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::H1),
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            4 => Ok(Self::H4),
            5 => Ok(Self::H5),
            6 => Ok(Self::H6),
            _ => Err(InvalidHeadingLevel(value)),
        }
    }
}

/// Table column text alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alignment {
    /// Default text alignment.
    None,
    Left,
    Center,
    Right,
}

/// How a link or image found its destination.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LinkType {
    /// Inline link like `[foo](bar)`
    Inline,
    /// Reference link like `[foo][bar]`
    Reference,
    /// Collapsed link like `[foo][]`
    Collapsed,
    /// Shortcut link like `[foo]`
    Shortcut,
}

/// Destination and content of a link or image.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Link {
    pub link_type: LinkType,
    pub url: String,
    pub title: String,
    /// Link text, or the alt text of an image.
    pub children: Vec<Inline>,
}

/// A node of the inline tree of a paragraph, heading or table cell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Inline {
    Text(String),
    /// Content of a code span, with line endings turned into spaces.
    Code(String),
    /// A raw HTML tag, comment, declaration or processing instruction.
    Html(String),
    SoftBreak,
    HardBreak,
    /// `<scheme:...>` or `<user@host>`.
    Autolink { url: String, email: bool },
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link(Link),
    Image(Link),
}

impl Inline {
    /// Appends the text content of this node, without any markup, to `buf`.
    pub fn write_plain_text(&self, buf: &mut String) {
        match self {
            Inline::Text(s) | Inline::Code(s) => buf.push_str(s),
            Inline::Html(_) => {}
            Inline::SoftBreak | Inline::HardBreak => buf.push(' '),
            Inline::Autolink { url, .. } => buf.push_str(url),
            Inline::Emphasis(children)
            | Inline::Strong(children)
            | Inline::Strikethrough(children) => {
                children.iter().for_each(|c| c.write_plain_text(buf));
            }
            Inline::Link(link) | Inline::Image(link) => {
                link.children.iter().for_each(|c| c.write_plain_text(buf));
            }
        }
    }
}

/// Kind of a block node, together with the properties fixed when it opened.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlockKind {
    /// The document itself.
    #[default]
    Root,
    /// A run of consecutive blank lines.
    Blank(usize),
    Paragraph,
    Heading {
        level: HeadingLevel,
        /// Underlined with `=` or `-` rather than prefixed with `#`.
        setext: bool,
    },
    ThematicBreak,
    BlockQuote,
    List {
        ordered: bool,
        /// First item number of an ordered list, 1 for bullet lists.
        start: u64,
        /// `-`, `+` or `*` for bullets, `.` or `)` for ordered lists.
        marker: char,
        tight: bool,
    },
    ListItem,
    IndentedCode,
    FencedCode {
        /// Everything after the opening fence, unescaped.
        info: String,
    },
    /// Raw HTML block. The variant (1 through 7) is the start condition that
    /// opened it, which also decides how it ends.
    HtmlBlock(u8),
    Table(Vec<Alignment>),
    TableRow {
        header: bool,
    },
}

impl BlockKind {
    /// The language of a fenced code block: the first word of its info string.
    pub fn language(&self) -> Option<&str> {
        match self {
            BlockKind::FencedCode { info } => info.split_whitespace().next(),
            _ => None,
        }
    }
}

/// Parses `input` and renders it with `options`.
///
/// `already_rendered_once` marks input that went through an earlier rendering
/// pass, so that the line breaks and entities it introduced are decoded first.
pub fn parse(input: &str, already_rendered_once: bool, options: Options) -> String {
    Parser::new(options).parse(input, already_rendered_once)
}

/// Like [`parse`], for input that has not been validated as UTF-8 yet.
pub fn parse_bytes(
    input: &[u8],
    already_rendered_once: bool,
    options: Options,
) -> Result<String, Error> {
    let text = std::str::from_utf8(input)?;
    Ok(parse(text, already_rendered_once, options))
}
