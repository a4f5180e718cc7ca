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

//! Scanners for fragments of CommonMark syntax.
//!
//! Block scanners see preprocessed lines, where tabs are already expanded to
//! one-column placeholders, so every whitespace test there goes through
//! [`is_indent_char`]. Inline scanners see restored leaf text.

use std::borrow::Cow;
use std::char;

use crate::preprocess::is_indent_char;
pub(crate) use crate::puncttable::{is_ascii_punctuation, is_punctuation};
use crate::{entities, Alignment, HeadingLevel};

use memchr::memchr;

/// Maximum nesting of balanced parentheses in a link destination.
pub(crate) const LINK_MAX_NESTED_PARENS: usize = 32;

// sorted for binary search
const HTML_TAGS: [&str; 62] = [
    "address",
    "article",
    "aside",
    "base",
    "basefont",
    "blockquote",
    "body",
    "caption",
    "center",
    "col",
    "colgroup",
    "dd",
    "details",
    "dialog",
    "dir",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "frame",
    "frameset",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "head",
    "header",
    "hr",
    "html",
    "iframe",
    "legend",
    "li",
    "link",
    "main",
    "menu",
    "menuitem",
    "nav",
    "noframes",
    "ol",
    "optgroup",
    "option",
    "p",
    "param",
    "search",
    "section",
    "summary",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "title",
    "tr",
    "track",
    "ul",
];

const HTML_RAW_TAGS: [&str; 4] = ["pre", "script", "style", "textarea"];

/// Cursor over the start of one preprocessed line, consuming indentation
/// and container markers column by column.
#[derive(Clone, Debug)]
pub(crate) struct LineStart<'a> {
    text: &'a str,
    ix: usize,
}

impl<'a> LineStart<'a> {
    pub(crate) fn new(text: &'a str) -> LineStart<'a> {
        LineStart { text, ix: 0 }
    }

    /// Number of indentation columns ahead of the cursor.
    pub(crate) fn indent_len(&self) -> usize {
        self.rest().chars().take_while(|&c| is_indent_char(c)).count()
    }

    /// Try to scan a number of spaces.
    ///
    /// Returns true if all spaces were consumed.
    ///
    /// Note: consumes some spaces even if not successful.
    pub(crate) fn scan_space(&mut self, n_space: usize) -> bool {
        self.scan_space_upto(n_space) == n_space
    }

    /// Scan a number of spaces up to a maximum.
    ///
    /// Returns number of spaces scanned.
    pub(crate) fn scan_space_upto(&mut self, n_space: usize) -> usize {
        let mut scanned = 0;
        for c in self.text[self.ix..].chars() {
            if scanned == n_space || !is_indent_char(c) {
                break;
            }
            self.ix += c.len_utf8();
            scanned += 1;
        }
        scanned
    }

    /// Scan all available whitespace.
    pub(crate) fn scan_all_space(&mut self) {
        let n = self.indent_len();
        self.scan_space_upto(n);
    }

    /// True when nothing but whitespace is left on the line.
    pub(crate) fn is_blank(&self) -> bool {
        self.rest().chars().all(is_indent_char)
    }

    fn scan_ch(&mut self, c: u8) -> bool {
        if self.text.as_bytes().get(self.ix) == Some(&c) {
            self.ix += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn scan_blockquote_marker(&mut self) -> bool {
        let save = self.clone();
        let _ = self.scan_space(3);
        if self.scan_ch(b'>') {
            let _ = self.scan_space(1);
            true
        } else {
            *self = save;
            false
        }
    }

    /// Scan a list marker.
    ///
    /// Return value is the character, the start index, and the column of the
    /// item content relative to the cursor position before the call. For
    /// ordered list markers, the character will be one of '.' or ')'. For
    /// bullet list markers, it will be one of '-', '+', or '*'.
    pub(crate) fn scan_list_marker(&mut self) -> Option<(char, u64, usize)> {
        let save = self.clone();
        let indent = self.scan_space_upto(4);
        if indent < 4 {
            let text = self.text;
            let bytes = text.as_bytes();
            match bytes.get(self.ix).copied() {
                Some(c @ (b'-' | b'+' | b'*')) => {
                    self.ix += 1;
                    if self.scan_space(1) || self.is_at_eol() {
                        return Some(self.finish_list_marker(c as char, 1, indent + 2));
                    }
                }
                Some(c) if c.is_ascii_digit() => {
                    let (digits, start) = parse_decimal(&bytes[self.ix..], 9);
                    let ix = self.ix + digits;
                    if let Some(&delim @ (b'.' | b')')) = bytes.get(ix) {
                        self.ix = ix + 1;
                        if self.scan_space(1) || self.is_at_eol() {
                            return Some(self.finish_list_marker(
                                delim as char,
                                start as u64,
                                indent + digits + 2,
                            ));
                        }
                    }
                }
                _ => {}
            }
        }
        *self = save;
        None
    }

    fn finish_list_marker(&mut self, c: char, start: u64, mut indent: usize) -> (char, u64, usize) {
        // the column right after the marker counts even when the line ends there
        if self.is_blank() {
            return (c, start, indent);
        }

        let save = self.clone();
        let post_indent = self.scan_space_upto(4);
        if post_indent < 4 {
            indent += post_indent;
        } else {
            *self = save;
        }
        (c, start, indent)
    }

    fn is_at_eol(&self) -> bool {
        self.ix >= self.text.len()
    }

    pub(crate) fn bytes_scanned(&self) -> usize {
        self.ix
    }

    /// The unconsumed part of the line.
    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.ix..]
    }
}

/// Strips leading indentation characters.
pub(crate) fn trim_indent_start(s: &str) -> &str {
    s.trim_start_matches(is_indent_char)
}

pub(crate) fn trim_indent(s: &str) -> &str {
    s.trim_matches(is_indent_char)
}

pub(crate) fn is_ascii_whitespace(c: u8) -> bool {
    (0x09..=0x0d).contains(&c) || c == b' '
}

pub(crate) fn is_ascii_whitespace_no_nl(c: u8) -> bool {
    c == b'\t' || c == 0x0b || c == 0x0c || c == b' '
}

fn is_ascii_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

fn is_ascii_alphanumeric(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z')
}

fn is_ascii_letterdigitdash(c: u8) -> bool {
    c == b'-' || is_ascii_alphanumeric(c)
}

fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

fn is_valid_unquoted_attr_value_char(c: u8) -> bool {
    !matches!(
        c,
        b'\'' | b'"' | b' ' | b'=' | b'>' | b'<' | b'`' | b'\n' | b'\r'
    )
}

// scan a single character
pub(crate) fn scan_ch(data: &[u8], c: u8) -> usize {
    if !data.is_empty() && data[0] == c {
        1
    } else {
        0
    }
}

pub(crate) fn scan_while<F>(data: &[u8], mut f: F) -> usize
where
    F: FnMut(u8) -> bool,
{
    data.iter().take_while(|&&c| f(c)).count()
}

pub(crate) fn scan_ch_repeat(data: &[u8], c: u8) -> usize {
    scan_while(data, |x| x == c)
}

fn scan_attr_value_chars(data: &[u8]) -> usize {
    scan_while(data, is_valid_unquoted_attr_value_char)
}

/// Scans inline whitespace including at most one line ending.
pub(crate) fn scan_link_space(data: &[u8]) -> usize {
    let mut i = scan_while(data, is_ascii_whitespace_no_nl);
    if scan_ch(&data[i..], b'\n') == 1 {
        i += 1;
        i += scan_while(&data[i..], is_ascii_whitespace_no_nl);
    }
    i
}

/// Whether the line is a thematic break: three or more of the same `*`, `-`
/// or `_`, optionally separated by whitespace.
pub(crate) fn scan_hrule(s: &str) -> bool {
    let c = match s.chars().next() {
        Some(c @ ('*' | '-' | '_')) => c,
        _ => return false,
    };
    let mut n = 0;
    for ch in s.chars() {
        if ch == c {
            n += 1;
        } else if !is_indent_char(ch) {
            return false;
        }
    }
    n >= 3
}

/// Scan an ATX heading opening sequence.
///
/// Returns the level and the heading text with the optional closing
/// sequence removed.
pub(crate) fn scan_atx_heading(s: &str) -> Option<(HeadingLevel, &str)> {
    let level = scan_ch_repeat(s.as_bytes(), b'#');
    let tail = &s[level..];
    if !tail.chars().next().map_or(true, is_indent_char) {
        return None;
    }
    let level = HeadingLevel::try_from(level).ok()?;
    let mut content = trim_indent(tail);
    let without_hashes = content.trim_end_matches('#');
    if without_hashes.is_empty() {
        content = "";
    } else if without_hashes.len() < content.len()
        && without_hashes.ends_with(is_indent_char)
    {
        content = without_hashes.trim_end_matches(is_indent_char);
    }
    Some((level, content))
}

/// Scan a setext heading underline.
pub(crate) fn scan_setext_heading(s: &str) -> Option<HeadingLevel> {
    let level = match s.as_bytes().first()? {
        b'=' => HeadingLevel::H1,
        b'-' => HeadingLevel::H2,
        _ => return None,
    };
    let c = s.as_bytes()[0];
    let run = scan_ch_repeat(s.as_bytes(), c);
    s[run..].chars().all(is_indent_char).then_some(level)
}

/// Scan code fence.
///
/// Returns the fence character, the length of the run and the info string.
pub(crate) fn scan_code_fence(s: &str) -> Option<(char, usize, &str)> {
    let c = *s.as_bytes().first()?;
    if !(c == b'`' || c == b'~') {
        return None;
    }
    let n = scan_ch_repeat(s.as_bytes(), c);
    if n < 3 {
        return None;
    }
    let info = trim_indent(&s[n..]);
    if c == b'`' && memchr(b'`', info.as_bytes()).is_some() {
        return None;
    }
    Some((c as char, n, info))
}

/// Whether the line, indentation included, closes a fence of `n_fence_char`
/// or more `fence_char`s.
pub(crate) fn scan_closing_code_fence(s: &str, fence_char: char, n_fence_char: usize) -> bool {
    let mut line = LineStart::new(s);
    if line.indent_len() > 3 {
        return false;
    }
    line.scan_all_space();
    let rest = line.rest();
    let run = rest.chars().take_while(|&c| c == fence_char).count();
    run >= n_fence_char && rest[run..].chars().all(is_indent_char)
}

/// Scans a table delimiter row such as `| :-- | --: |`, returning the
/// alignment of every column.
pub(crate) fn scan_table_delimiter_row(s: &str) -> Option<Vec<Alignment>> {
    let mut row = trim_indent(s);
    let mut found_separator = false;
    if let Some(stripped) = row.strip_prefix('|') {
        row = stripped;
        found_separator = true;
    }
    if let Some(stripped) = row.strip_suffix('|') {
        row = stripped;
        found_separator = true;
    }
    let mut cols = vec![];
    for cell in row.split('|') {
        let cell = trim_indent(cell);
        let left = cell.starts_with(':');
        let right = cell.len() > 1 && cell.ends_with(':');
        let dashes = &cell[usize::from(left)..cell.len() - usize::from(right)];
        if dashes.is_empty() || !dashes.bytes().all(|b| b == b'-') {
            return None;
        }
        found_separator |= left || right;
        cols.push(match (left, right) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        });
    }
    if cols.len() > 1 {
        found_separator = true;
    }
    found_separator.then_some(cols)
}

/// Splits a table row into trimmed cells on unescaped pipes. An escaped pipe
/// turns into a literal one inside the cell.
pub(crate) fn split_table_cells(row: &str) -> Vec<String> {
    let mut row = row.trim();
    if let Some(stripped) = row.strip_prefix('|') {
        row = stripped;
    }
    let bytes = row.as_bytes();
    let mut cells = vec![];
    let mut cell = String::new();
    let mut mark = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'|') => {
                cell.push_str(&row[mark..i]);
                mark = i + 1;
                i += 2;
            }
            b'|' => {
                cell.push_str(&row[mark..i]);
                cells.push(cell.trim().to_owned());
                cell.clear();
                i += 1;
                mark = i;
            }
            _ => i += 1,
        }
    }
    cell.push_str(&row[mark..]);
    if !cell.trim().is_empty() || cells.is_empty() {
        cells.push(cell.trim().to_owned());
    }
    cells
}

// returns (number of bytes, parsed decimal)
fn parse_decimal(bytes: &[u8], limit: usize) -> (usize, usize) {
    match bytes
        .iter()
        .take(limit)
        .take_while(|&&b| is_digit(b))
        .try_fold((0, 0usize), |(count, acc), c| {
            let digit = usize::from(c - b'0');
            match acc
                .checked_mul(10)
                .and_then(|ten_acc| ten_acc.checked_add(digit))
            {
                Some(number) => Ok((count + 1, number)),
                // stop early on overflow
                None => Err((count, acc)),
            }
        }) {
        Ok(p) | Err(p) => p,
    }
}

// returns (number of bytes, parsed hex)
fn parse_hex(bytes: &[u8], limit: usize) -> (usize, usize) {
    match bytes
        .iter()
        .take(limit)
        .try_fold((0, 0usize), |(count, acc), c| {
            let mut c = *c;
            let digit = if c.is_ascii_digit() {
                usize::from(c - b'0')
            } else {
                // make lower case
                c |= 0x20;
                if (b'a'..=b'f').contains(&c) {
                    usize::from(c - b'a' + 10)
                } else {
                    return Err((count, acc));
                }
            };
            match acc
                .checked_mul(16)
                .and_then(|sixteen_acc| sixteen_acc.checked_add(digit))
            {
                Some(number) => Ok((count + 1, number)),
                // stop early on overflow
                None => Err((count, acc)),
            }
        }) {
        Ok(p) | Err(p) => p,
    }
}

fn char_from_codepoint(input: usize) -> Option<char> {
    let codepoint = input.try_into().ok()?;
    if codepoint == 0 {
        return None;
    }
    char::from_u32(codepoint)
}

// doesn't bother to check data[0] == '&'
pub(crate) fn scan_entity(bytes: &[u8]) -> (usize, Option<Cow<'static, str>>) {
    let mut end = 1;
    if scan_ch(&bytes[end..], b'#') == 1 {
        end += 1;
        let (bytecount, codepoint) = if end < bytes.len() && bytes[end] | 0x20 == b'x' {
            end += 1;
            parse_hex(&bytes[end..], 6)
        } else {
            parse_decimal(&bytes[end..], 7)
        };
        end += bytecount;
        return if bytecount == 0 || scan_ch(&bytes[end..], b';') == 0 {
            (0, None)
        } else {
            let c = char_from_codepoint(codepoint).unwrap_or('\u{FFFD}');
            (end + 1, Some(Cow::Owned(c.to_string())))
        };
    }
    end += scan_while(&bytes[end..], is_ascii_alphanumeric);
    if scan_ch(&bytes[end..], b';') == 1 {
        if let Some(value) = entities::get_entity(&bytes[1..end]) {
            return (end + 1, Some(Cow::Borrowed(value)));
        }
    }
    (0, None)
}

// Remove backslash escapes and resolve entities
pub(crate) fn unescape(input: &str) -> Cow<'_, str> {
    let mut result = String::new();
    let mut mark = 0;
    let mut i = 0;
    let bytes = input.as_bytes();
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() && is_ascii_punctuation(bytes[i + 1]) => {
                result.push_str(&input[mark..i]);
                mark = i + 1;
                i += 2;
            }
            b'&' => match scan_entity(&bytes[i..]) {
                (n, Some(value)) => {
                    result.push_str(&input[mark..i]);
                    result.push_str(&value);
                    i += n;
                    mark = i;
                }
                _ => i += 1,
            },
            _ => i += 1,
        }
    }
    if mark == 0 {
        Cow::Borrowed(input)
    } else {
        result.push_str(&input[mark..]);
        Cow::Owned(result)
    }
}

// note: dest returned is raw, still needs to be unescaped
pub(crate) fn scan_link_dest(
    data: &str,
    start_ix: usize,
    max_next: usize,
) -> Option<(usize, &str)> {
    let bytes = &data.as_bytes()[start_ix..];
    let mut i = scan_ch(bytes, b'<');

    if i != 0 {
        // pointy links
        while i < bytes.len() {
            match bytes[i] {
                b'\n' | b'\r' | b'<' => return None,
                b'>' => return Some((i + 1, &data[(start_ix + 1)..(start_ix + i)])),
                b'\\' if i + 1 < bytes.len() && is_ascii_punctuation(bytes[i + 1]) => {
                    i += 1;
                }
                _ => {}
            }
            i += 1;
        }
        None
    } else {
        // non-pointy links
        let mut nest = 0;
        while i < bytes.len() {
            match bytes[i] {
                0x0..=0x20 => {
                    break;
                }
                b'(' => {
                    if nest >= max_next {
                        return None;
                    }
                    nest += 1;
                }
                b')' => {
                    if nest == 0 {
                        break;
                    }
                    nest -= 1;
                }
                b'\\' if i + 1 < bytes.len() && is_ascii_punctuation(bytes[i + 1]) => {
                    i += 1;
                }
                _ => {}
            }
            i += 1;
        }
        if nest != 0 {
            return None;
        }
        Some((i, &data[start_ix..(start_ix + i)]))
    }
}

/// Scans a link title in double quotes, single quotes or parentheses.
///
/// Returns bytes scanned and the raw title, which still needs unescaping.
/// A title cannot contain a blank line.
pub(crate) fn scan_link_title(text: &str, start_ix: usize) -> Option<(usize, &str)> {
    let bytes = text.as_bytes();
    let open = match bytes.get(start_ix) {
        Some(b @ b'\'') | Some(b @ b'"') | Some(b @ b'(') => *b,
        _ => return None,
    };
    let close = if open == b'(' { b')' } else { open };
    let mut i = start_ix + 1;
    while i < bytes.len() {
        let c = bytes[i];
        if c == close {
            return Some((i + 1 - start_ix, &text[start_ix + 1..i]));
        }
        if c == open && open == b'(' {
            return None;
        }
        if c == b'\n' && scan_blank_line_after(&bytes[i + 1..]) {
            return None;
        }
        if c == b'\\' && i + 1 < bytes.len() && is_ascii_punctuation(bytes[i + 1]) {
            i += 1;
        }
        i += 1;
    }
    None
}

fn scan_blank_line_after(bytes: &[u8]) -> bool {
    let i = scan_while(bytes, is_ascii_whitespace_no_nl);
    i == bytes.len() || bytes[i] == b'\n'
}

/// Scans the `(destination "title")` part of an inline link, starting at the
/// opening parenthesis.
///
/// Returns the offset after the closing parenthesis, the unescaped
/// destination and the unescaped title.
pub(crate) fn scan_inline_link(text: &str, mut ix: usize) -> Option<(usize, String, String)> {
    let bytes = text.as_bytes();
    if scan_ch(&bytes[ix..], b'(') == 0 {
        return None;
    }
    ix += 1;
    ix += scan_link_space(&bytes[ix..]);

    let (dest_length, dest) = scan_link_dest(text, ix, LINK_MAX_NESTED_PARENS)?;
    let dest = unescape(dest).into_owned();
    ix += dest_length;

    let separator = scan_link_space(&bytes[ix..]);
    ix += separator;

    let title = if separator > 0 || dest_length == 0 {
        match scan_link_title(text, ix) {
            Some((bytes_scanned, t)) => {
                ix += bytes_scanned;
                ix += scan_link_space(&bytes[ix..]);
                unescape(t).into_owned()
            }
            None => String::new(),
        }
    } else {
        String::new()
    };
    if scan_ch(&bytes[ix..], b')') == 0 {
        return None;
    }
    Some((ix + 1, dest, title))
}

/// Classifies the opening line of an HTML block, see [`html_block_ends`].
///
/// Returns the start condition (1 through 7) the line satisfies. Condition 7
/// cannot interrupt a paragraph and is only reported when
/// `interrupts_paragraph` is false.
pub(crate) fn scan_html_block_start(s: &str, interrupts_paragraph: bool) -> Option<u8> {
    let bytes = s.as_bytes();
    if scan_ch(bytes, b'<') == 0 {
        return None;
    }
    let tail = &bytes[1..];
    if starts_with_raw_tag(tail) {
        Some(1)
    } else if tail.starts_with(b"!--") {
        Some(2)
    } else if tail.starts_with(b"?") {
        Some(3)
    } else if tail.len() >= 2 && tail[0] == b'!' && is_ascii_alpha(tail[1]) {
        Some(4)
    } else if tail.starts_with(b"![CDATA[") {
        Some(5)
    } else if starts_html_block_type_6(tail) {
        Some(6)
    } else if !interrupts_paragraph && scan_html_type_7(bytes).is_some() {
        Some(7)
    } else {
        None
    }
}

/// Whether `line` contains the end condition of an HTML block of the given
/// start condition. Conditions 6 and 7 end on a blank line instead.
pub(crate) fn html_block_ends(condition: u8, line: &str) -> bool {
    match condition {
        1 => {
            let lower = line.to_ascii_lowercase();
            HTML_RAW_TAGS
                .iter()
                .any(|tag| lower.contains(&format!("</{}>", tag)))
        }
        2 => line.contains("-->"),
        3 => line.contains("?>"),
        4 => line.contains('>'),
        5 => line.contains("]]>"),
        _ => false,
    }
}

/// Assumes `data` is preceded by `<`.
fn starts_with_raw_tag(data: &[u8]) -> bool {
    let n = scan_while(data, is_ascii_alpha);
    let name = &data[..n];
    if !HTML_RAW_TAGS
        .iter()
        .any(|tag| tag.as_bytes().eq_ignore_ascii_case(name))
    {
        return false;
    }
    match data.get(n) {
        None => true,
        Some(&c) => c == b'>' || is_ascii_whitespace(c),
    }
}

/// Assumes `data` is preceded by `<`.
pub(crate) fn starts_html_block_type_6(data: &[u8]) -> bool {
    let i = scan_ch(data, b'/');
    let tail = &data[i..];
    let n = scan_while(tail, is_ascii_alphanumeric);
    if !is_html_tag(&tail[..n]) {
        return false;
    }
    // Starting condition says the next byte must be either a space, a tab,
    // the end of the line, the string >, or the string />
    let tail = &tail[n..];
    tail.is_empty()
        || tail[0] == b' '
        || tail[0] == b'\t'
        || tail[0] == b'\r'
        || tail[0] == b'\n'
        || tail[0] == b'>'
        || tail.len() >= 2 && &tail[..2] == b"/>"
}

fn is_html_tag(tag: &[u8]) -> bool {
    HTML_TAGS
        .binary_search_by(|probe| {
            let probe_bytes_iter = probe.as_bytes().iter();
            let tag_bytes_iter = tag.iter();

            probe_bytes_iter
                .zip(tag_bytes_iter)
                .find_map(|(&a, &b)| {
                    // We can compare case insensitively because the probes are
                    // all lower case alpha strings.
                    match a.cmp(&(b | 0x20)) {
                        std::cmp::Ordering::Equal => None,
                        inequality => Some(inequality),
                    }
                })
                .unwrap_or_else(|| probe.len().cmp(&tag.len()))
        })
        .is_ok()
}

/// Assumes that `data` starts with `<`.
/// Returns the index into data directly after the html tag on success.
fn scan_html_type_7(data: &[u8]) -> Option<usize> {
    let i = scan_html_tag(data)?;
    data[i..]
        .iter()
        .all(|&b| is_ascii_whitespace(b))
        .then_some(i)
}

/// Returns bytes scanned
fn scan_attribute_name(data: &[u8]) -> Option<usize> {
    let (&c, tail) = data.split_first()?;
    if is_ascii_alpha(c) || c == b'_' || c == b':' {
        Some(
            1 + scan_while(tail, |c| {
                is_ascii_alphanumeric(c) || c == b'_' || c == b'.' || c == b':' || c == b'-'
            }),
        )
    } else {
        None
    }
}

/// Returns the index immediately following the attribute on success.
fn scan_attribute(data: &[u8], mut ix: usize) -> Option<usize> {
    ix += scan_attribute_name(&data[ix..])?;
    let ix_after_attribute = ix;
    ix += scan_while(&data[ix..], is_ascii_whitespace);
    if scan_ch(&data[ix..], b'=') == 1 {
        ix += 1;
        ix += scan_while(&data[ix..], is_ascii_whitespace);
        scan_attribute_value(data, ix)
    } else {
        // Leave whitespace for next attribute.
        Some(ix_after_attribute)
    }
}

/// Returns the index immediately following the attribute value on success.
fn scan_attribute_value(data: &[u8], mut i: usize) -> Option<usize> {
    match *data.get(i)? {
        b @ b'"' | b @ b'\'' => {
            i += 1;
            let end = memchr(b, &data[i..])?;
            Some(i + end + 1)
        }
        b' ' | b'=' | b'>' | b'<' | b'`' | b'\n' | b'\r' => None,
        _ => {
            // unquoted attribute value
            i += scan_attr_value_chars(&data[i..]);
            Some(i)
        }
    }
}

/// Scans an opening or closing tag. Assumes that `data` starts with `<`.
/// Returns the number of bytes scanned on success.
pub(crate) fn scan_html_tag(data: &[u8]) -> Option<usize> {
    let close_tag_bytes = scan_ch(&data[1..], b'/');
    let l = scan_while(&data[(1 + close_tag_bytes)..], is_ascii_alpha);
    if l == 0 {
        return None;
    }
    let mut i = 1 + close_tag_bytes + l;
    i += scan_while(&data[i..], is_ascii_letterdigitdash);

    if close_tag_bytes == 0 {
        loop {
            let old_i = i;
            i += scan_while(&data[i..], is_ascii_whitespace);
            if let Some(b'/') | Some(b'>') = data.get(i) {
                break;
            }
            if old_i == i {
                // No whitespace, which is mandatory.
                return None;
            }
            i = scan_attribute(data, i)?;
        }
    }

    i += scan_while(&data[i..], is_ascii_whitespace);

    if close_tag_bytes == 0 {
        i += scan_ch(&data[i..], b'/');
    }

    if scan_ch(&data[i..], b'>') == 0 {
        None
    } else {
        Some(i + 1)
    }
}

/// Offsets before which a scan for an unterminated construct is known to
/// fail, so that repeated attempts on the same block stay linear.
#[derive(Clone, Debug, Default)]
pub(crate) struct HtmlScanGuard {
    pub cdata: usize,
    pub processing: usize,
    pub declaration: usize,
    pub comment: usize,
}

/// Scans raw inline HTML starting at the `<` at `ix`.
/// Returns the offset after the construct.
pub(crate) fn scan_inline_html(
    bytes: &[u8],
    ix: usize,
    scan_guard: &mut HtmlScanGuard,
) -> Option<usize> {
    match bytes.get(ix + 1)? {
        b'!' => scan_inline_html_comment(bytes, ix + 2, scan_guard),
        b'?' => scan_inline_html_processing(bytes, ix + 2, scan_guard),
        _ => scan_html_tag(&bytes[ix..]).map(|n| ix + n),
    }
}

/// Scan comment, declaration, or CDATA section, with initial "<!" already consumed.
/// Returns byte offset on match.
fn scan_inline_html_comment(
    bytes: &[u8],
    mut ix: usize,
    scan_guard: &mut HtmlScanGuard,
) -> Option<usize> {
    let c = *bytes.get(ix)?;
    ix += 1;
    match c {
        // An HTML comment consists of `<!-->`, `<!--->`, or  `<!--`, a string of characters not
        // including the string `-->`, and `-->`.
        b'-' if ix > scan_guard.comment => {
            // HTML comment needs two hyphens after the !.
            if *bytes.get(ix)? != b'-' {
                return None;
            }
            // Yes, we're intentionally going backwards.
            // We want the cursor to point here:
            //
            //     <!--
            //       ^
            //
            // This way, the `<!-->` case is covered by the loop below.
            ix -= 1;

            while let Some(x) = memchr(b'-', &bytes[ix..]) {
                ix += x + 1;
                if scan_ch(&bytes[ix..], b'-') == 1 && scan_ch(&bytes[ix + 1..], b'>') == 1 {
                    return Some(ix + 2);
                }
            }
            scan_guard.comment = bytes.len();
            None
        }
        // A CDATA section consists of the string `<![CDATA[`, a string of characters not
        // including the string `]]>`, and the string `]]>`.
        b'[' if bytes[ix..].starts_with(b"CDATA[") && ix > scan_guard.cdata => {
            ix += b"CDATA[".len();
            while let Some(x) = memchr(b']', &bytes[ix..]) {
                ix += x;
                let close_brackets = scan_ch_repeat(&bytes[ix..], b']');
                ix += close_brackets;
                if close_brackets >= 2 && scan_ch(&bytes[ix..], b'>') == 1 {
                    return Some(ix + 1);
                }
            }
            scan_guard.cdata = bytes.len();
            None
        }
        // A declaration consists of the string `<!`, an ASCII letter, zero or more characters not
        // including the character >, and the character >.
        _ if c.is_ascii_alphabetic() && ix > scan_guard.declaration => {
            ix = memchr(b'>', &bytes[ix..]).map_or(bytes.len(), |x| ix + x);
            if scan_ch(&bytes[ix..], b'>') == 0 {
                scan_guard.declaration = ix;
                None
            } else {
                Some(ix + 1)
            }
        }
        _ => None,
    }
}

/// Scan processing directive, with initial "<?" already consumed.
/// Returns the next byte offset on success.
fn scan_inline_html_processing(
    bytes: &[u8],
    mut ix: usize,
    scan_guard: &mut HtmlScanGuard,
) -> Option<usize> {
    if ix <= scan_guard.processing {
        return None;
    }
    while let Some(offset) = memchr(b'?', &bytes[ix..]) {
        ix += offset + 1;
        if scan_ch(&bytes[ix..], b'>') == 1 {
            return Some(ix + 1);
        }
    }
    scan_guard.processing = ix;
    None
}

/// Finds every absolute URI in `text`: a scheme of 2 to 32 characters, a
/// colon, and a run without whitespace, `<` or `>`.
pub(crate) fn detect_urls(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_ascii_whitespace() || c == '<' || c == '>')
        .filter(|token| is_absolute_uri(token))
        .collect()
}

fn is_absolute_uri(token: &str) -> bool {
    let bytes = token.as_bytes();
    if bytes.is_empty() || !is_ascii_alpha(bytes[0]) {
        return false;
    }
    let scheme_len = 1 + scan_while(&bytes[1..], |c| {
        is_ascii_alphanumeric(c) || c == b'.' || c == b'-' || c == b'+'
    });
    (2..=32).contains(&scheme_len)
        && bytes.get(scheme_len) == Some(&b':')
        && bytes.iter().all(|&c| c > b' ')
}

/// Scans an autolink starting at the `<` at `start_ix`.
///
/// Returns the offset after the closing `>`, the link target and whether it
/// is an email address.
pub(crate) fn scan_autolink(text: &str, start_ix: usize) -> Option<(usize, &str, bool)> {
    let inner_start = start_ix + 1;
    let inner_len = memchr(b'>', &text.as_bytes()[inner_start..])?;
    let inner = &text[inner_start..inner_start + inner_len];
    if detect_urls(inner) == [inner] {
        return Some((inner_start + inner_len + 1, inner, false));
    }
    scan_email(text, inner_start).map(|(end, email)| (end, email, true))
}

/// Returns (next_byte_offset, email)
fn scan_email(text: &str, start_ix: usize) -> Option<(usize, &str)> {
    // using a regex library would be convenient, but doing it by hand is not too bad
    let bytes = &text.as_bytes()[start_ix..];
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        i += 1;
        match c {
            c if is_ascii_alphanumeric(c) => (),
            b'.' | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'/' | b'=' | b'?'
            | b'^' | b'_' | b'`' | b'{' | b'|' | b'}' | b'~' | b'-' => (),
            b'@' if i > 1 => break,
            _ => return None,
        }
    }

    loop {
        let label_start_ix = i;
        let mut fresh_label = true;

        while i < bytes.len() {
            match bytes[i] {
                c if is_ascii_alphanumeric(c) => (),
                b'-' if fresh_label => {
                    return None;
                }
                b'-' => (),
                _ => break,
            }
            fresh_label = false;
            i += 1;
        }

        if i == label_start_ix || i - label_start_ix > 63 || bytes[i - 1] == b'-' {
            return None;
        }

        if scan_ch(&bytes[i..], b'.') == 0 {
            break;
        }
        i += 1;
    }

    if scan_ch(&bytes[i..], b'>') == 0 {
        return None;
    }

    Some((start_ix + i + 1, &text[start_ix..(start_ix + i)]))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::preprocess::{TAB_HEAD, TAB_PAD};

    #[test]
    fn overflow_list() {
        let mut line = LineStart::new("4444444444444444444444444444444444444444444444444444444444!");
        assert!(line.scan_list_marker().is_none());
    }

    #[test]
    fn ordered_marker_has_at_most_nine_digits() {
        assert!(LineStart::new("123456789. a").scan_list_marker().is_some());
        assert!(LineStart::new("1234567890. a").scan_list_marker().is_none());
    }

    #[test]
    fn list_marker_content_column() {
        let mut line = LineStart::new("  -   foo");
        assert_eq!(line.scan_list_marker(), Some(('-', 1, 6)));
        assert_eq!(line.rest(), "foo");

        // five spaces after the marker start indented code inside the item
        let mut line = LineStart::new("1.     code");
        assert_eq!(line.scan_list_marker(), Some(('.', 1, 3)));
        assert_eq!(line.rest(), "    code");

        let mut line = LineStart::new("7)");
        assert_eq!(line.scan_list_marker(), Some((')', 7, 3)));
    }

    #[test]
    fn placeholders_count_as_columns() {
        let line: String = ['>', TAB_HEAD, TAB_PAD, TAB_PAD, 'x'].iter().collect();
        let mut start = LineStart::new(&line);
        assert!(start.scan_blockquote_marker());
        assert_eq!(start.indent_len(), 2);
        assert!(start.scan_space(2));
        assert_eq!(start.rest(), "x");
    }

    #[test]
    fn atx_closing_sequence() {
        assert_eq!(scan_atx_heading("# foo ##"), Some((HeadingLevel::H1, "foo")));
        assert_eq!(scan_atx_heading("### foo#"), Some((HeadingLevel::H3, "foo#")));
        assert_eq!(scan_atx_heading("## foo \\#"), Some((HeadingLevel::H2, "foo \\#")));
        assert_eq!(scan_atx_heading("# ###"), Some((HeadingLevel::H1, "")));
        assert_eq!(scan_atx_heading("#5 bolt"), None);
        assert_eq!(scan_atx_heading("####### seven"), None);
    }

    #[test]
    fn thematic_breaks() {
        assert!(scan_hrule("***"));
        assert!(scan_hrule("- - -"));
        assert!(!scan_hrule("--"));
        assert!(!scan_hrule("*-*"));
    }

    #[test]
    fn code_fences() {
        assert_eq!(scan_code_fence("```rust  "), Some(('`', 3, "rust")));
        assert_eq!(scan_code_fence("~~~~ a`b"), Some(('~', 4, "a`b")));
        assert_eq!(scan_code_fence("``` a`b"), None);
        assert!(scan_closing_code_fence("   ````  ", '`', 3));
        assert!(!scan_closing_code_fence("    ```", '`', 3));
        assert!(!scan_closing_code_fence("``", '`', 3));
    }

    #[test]
    fn delimiter_rows() {
        assert_eq!(
            scan_table_delimiter_row("| :-- | :-: | --: | - |"),
            Some(vec![
                Alignment::Left,
                Alignment::Center,
                Alignment::Right,
                Alignment::None
            ])
        );
        assert_eq!(scan_table_delimiter_row("-|-"), Some(vec![Alignment::None; 2]));
        assert_eq!(scan_table_delimiter_row(":-"), Some(vec![Alignment::Left]));
        assert_eq!(scan_table_delimiter_row("---"), None);
        assert_eq!(scan_table_delimiter_row("|-x-|"), None);
    }

    #[test]
    fn table_cells_split_on_unescaped_pipes() {
        assert_eq!(split_table_cells("| a | b |"), vec!["a", "b"]);
        assert_eq!(split_table_cells("a|b"), vec!["a", "b"]);
        assert_eq!(split_table_cells("a \\| b | c"), vec!["a | b", "c"]);
        assert_eq!(split_table_cells("|"), vec![""]);
    }

    #[test]
    fn html_block_conditions() {
        assert_eq!(scan_html_block_start("<script>", true), Some(1));
        assert_eq!(scan_html_block_start("<!-- x", true), Some(2));
        assert_eq!(scan_html_block_start("<?php", true), Some(3));
        assert_eq!(scan_html_block_start("<!DOCTYPE html>", true), Some(4));
        assert_eq!(scan_html_block_start("<![CDATA[", true), Some(5));
        assert_eq!(scan_html_block_start("<div class=\"x\">", true), Some(6));
        assert_eq!(scan_html_block_start("<custom a='1'>", true), None);
        assert_eq!(scan_html_block_start("<custom a='1'>", false), Some(7));
        assert_eq!(scan_html_block_start("<custom> text", false), None);
        assert!(html_block_ends(1, "x</STYLE>"));
        assert!(!html_block_ends(6, "</div>"));
    }

    #[test]
    fn entities_and_escapes() {
        assert_eq!(unescape("\\*a\\b &amp; &#35; &#x22; &#0; &bogus;"), "*a\\b & # \" \u{FFFD} &bogus;");
    }

    #[test]
    fn inline_link_tail() {
        let text = "(/url \"title\") rest";
        assert_eq!(
            scan_inline_link(text, 0),
            Some((14, "/url".to_owned(), "title".to_owned()))
        );
        assert_eq!(scan_inline_link("(<a b>)", 0), Some((7, "a b".to_owned(), String::new())));
        assert_eq!(
            scan_inline_link("(/url\"title\")", 0),
            Some((13, "/url\"title\"".to_owned(), String::new()))
        );
        assert_eq!(scan_inline_link("(/url \"unclosed)", 0), None);
        assert_eq!(scan_inline_link("( )", 0), Some((3, String::new(), String::new())));
    }

    #[test]
    fn nested_parens_are_capped() {
        let deep = format!("({}x{})", "(".repeat(32), ")".repeat(32));
        assert!(scan_inline_link(&deep, 0).is_some());
        let too_deep = format!("({}x{})", "(".repeat(33), ")".repeat(33));
        assert!(scan_inline_link(&too_deep, 0).is_none());
    }

    #[test]
    fn autolinks() {
        assert_eq!(
            scan_autolink("<http://a.b/c?d>", 0),
            Some((16, "http://a.b/c?d", false))
        );
        assert_eq!(scan_autolink("<a@b.c>", 0), Some((7, "a@b.c", true)));
        assert_eq!(scan_autolink("<http://a b>", 0), None);
        assert_eq!(scan_autolink("<m:abc>", 0), None);
    }

    #[test]
    fn url_detection() {
        assert_eq!(
            detect_urls("see http://x.y and irc://z"),
            vec!["http://x.y", "irc://z"]
        );
        assert!(detect_urls("no links here").is_empty());
    }

    #[test]
    fn good_emails() {
        const EMAILS: &[&str] = &[
            "<a@b.c>",
            "<a@b>",
            "<a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-@example.com>",
            "<a@sixty-three-letters-in-this-identifier-----------------------63>",
        ];
        for email in EMAILS {
            assert!(scan_email(email, 1).is_some());
        }
    }

    #[test]
    fn bad_emails() {
        const EMAILS: &[&str] = &[
            "<@b.c>",
            "<foo@-example.com>",
            "<foo@example-.com>",
            "<a@notrailingperiod.>",
            "<a(noparens)@example.com>",
            "<\"noquotes\"@example.com>",
            "<a@sixty-four-letters-in-this-identifier-------------------------64>",
        ];
        for email in EMAILS {
            assert!(scan_email(email, 1).is_none());
        }
    }

    #[test]
    fn unterminated_comment_is_remembered() {
        let mut guard = HtmlScanGuard::default();
        let text = b"<!-- a <!-- b";
        assert_eq!(scan_inline_html(text, 0, &mut guard), None);
        assert_eq!(scan_inline_html(text, 7, &mut guard), None);
        assert_eq!(guard.comment, text.len());
    }
}
