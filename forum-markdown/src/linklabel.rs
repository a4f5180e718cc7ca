// Copyright 2018 Google LLC
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

//! Link label parsing and matching, and the table of reference definitions.

use std::collections::HashMap;

use unicase::UniCase;

use crate::scanners::{
    is_ascii_whitespace_no_nl, scan_ch, scan_link_dest, scan_link_space, scan_link_title,
    scan_while, unescape, LINK_MAX_NESTED_PARENS,
};

pub(crate) type LinkLabel = UniCase<String>;

/// Labels longer than this many code points never match.
const LINK_LABEL_MAX_CODEPOINTS: usize = 999;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LinkDef {
    pub dest: String,
    pub title: String,
}

/// Reference definitions collected while building the block tree. The first
/// definition of a label wins.
#[derive(Clone, Debug, Default)]
pub(crate) struct RefDefs {
    map: HashMap<LinkLabel, LinkDef>,
}

impl RefDefs {
    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    /// Registers a definition unless the label is already taken.
    pub(crate) fn insert(&mut self, label: LinkLabel, def: LinkDef) {
        self.map.entry(label).or_insert(def);
    }

    /// Looks up an already normalized label.
    pub(crate) fn get(&self, label: &str) -> Option<&LinkDef> {
        self.map.get(&UniCase::new(label.to_owned()))
    }
}

/// Scans a bracketed link label at the start of `text`.
///
/// Returns the number of bytes (including brackets) and the normalized label
/// on success: surrounding whitespace trimmed and inner runs collapsed to a
/// single space. Case is folded at comparison time.
pub(crate) fn scan_link_label(text: &str) -> Option<(usize, String)> {
    if text.len() < 2 || text.as_bytes()[0] != b'[' {
        return None;
    }
    let (byte_index, label) = scan_link_label_rest(&text[1..])?;
    Some((byte_index + 1, label))
}

/// Assumes the opening bracket has already been scanned.
/// Returns the number of bytes read (including closing bracket) and label on success.
pub(crate) fn scan_link_label_rest(text: &str) -> Option<(usize, String)> {
    let mut char_iter = text.chars().peekable();
    let mut byte_index = 0;
    let mut only_white_space = true;
    let mut codepoints = 0;
    let mut label = String::new();

    loop {
        if codepoints > LINK_LABEL_MAX_CODEPOINTS {
            return None;
        }
        let c = char_iter.next()?;
        byte_index += c.len_utf8();

        match c {
            '[' => return None,
            ']' => break,
            '\\' => {
                let next = char_iter.next()?;
                byte_index += next.len_utf8();
                codepoints += 2;
                only_white_space = false;
                label.push(c);
                label.push(next);
            }
            _ if c.is_whitespace() => {
                // collapse the run, line endings included
                while let Some(&w) = char_iter.peek() {
                    if !w.is_whitespace() {
                        break;
                    }
                    byte_index += w.len_utf8();
                    codepoints += 1;
                    char_iter.next();
                }
                codepoints += 1;
                if !label.is_empty() {
                    label.push(' ');
                }
            }
            _ => {
                only_white_space = false;
                codepoints += 1;
                label.push(c);
            }
        }
    }

    if only_white_space || codepoints > LINK_LABEL_MAX_CODEPOINTS {
        return None;
    }
    let trimmed = label.trim_end_matches(' ').len();
    label.truncate(trimmed);
    Some((byte_index, label))
}

/// Returns the offset just past the end of the line at `ix` when only
/// whitespace is left on it.
fn scan_to_eol(bytes: &[u8], ix: usize) -> Option<usize> {
    let i = ix + scan_while(&bytes[ix..], is_ascii_whitespace_no_nl);
    match bytes.get(i) {
        None => Some(i),
        Some(b'\n') => Some(i + 1),
        Some(_) => None,
    }
}

/// Scans one `[label]: destination "title"` definition at `start`, which
/// must be the beginning of a line.
///
/// Returns the bytes consumed including the line ending, the label and the
/// definition.
pub(crate) fn scan_refdef(text: &str, start: usize) -> Option<(usize, String, LinkDef)> {
    let bytes = text.as_bytes();
    let (label_len, label) = scan_link_label(&text[start..])?;
    let mut i = start + label_len;
    if scan_ch(&bytes[i..], b':') == 0 {
        return None;
    }
    i += 1;
    i += scan_link_space(&bytes[i..]);

    let (dest_length, dest) = scan_link_dest(text, i, LINK_MAX_NESTED_PARENS)?;
    if dest_length == 0 {
        return None;
    }
    let dest = unescape(dest).into_owned();
    i += dest_length;

    let untitled_end = scan_to_eol(bytes, i);

    let space = scan_link_space(&bytes[i..]);
    if space > 0 {
        if let Some((title_length, title)) = scan_link_title(text, i + space) {
            // a title followed by anything but whitespace spoils the line,
            // which only matters if the title started on the same line
            if let Some(end) = scan_to_eol(bytes, i + space + title_length) {
                let title = unescape(title).into_owned();
                return Some((end - start, label, LinkDef { dest, title }));
            }
        }
    }

    untitled_end.map(|end| {
        (
            end - start,
            label,
            LinkDef {
                dest,
                title: String::new(),
            },
        )
    })
}

/// Strips every reference definition from the front of a paragraph's text
/// and registers it. Returns the number of bytes consumed.
pub(crate) fn extract_refdefs(text: &str, defs: &mut RefDefs) -> usize {
    let mut ix = 0;
    while let Some((consumed, label, def)) = scan_refdef(text, ix) {
        defs.insert(UniCase::new(label), def);
        ix += consumed;
    }
    ix
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn label_normalization() {
        assert_eq!(
            scan_link_label("[  Foo \n  bar ]: x"),
            Some((15, "Foo bar".to_owned()))
        );
        assert_eq!(scan_link_label("[a\\]b]"), Some((6, "a\\]b".to_owned())));
        assert_eq!(scan_link_label("[a[b]"), None);
        assert_eq!(scan_link_label("[ \n ]"), None);
        assert_eq!(scan_link_label("[unclosed"), None);
    }

    #[test]
    fn label_length_limit() {
        let ok = format!("[{}]", "x".repeat(999));
        assert!(scan_link_label(&ok).is_some());
        let long = format!("[{}]", "x".repeat(1000));
        assert!(scan_link_label(&long).is_none());
    }

    #[test]
    fn refdef_with_title() {
        let (n, label, def) = scan_refdef("[x]: http://example.com \"T\"\nrest", 0).unwrap();
        assert_eq!(n, 28);
        assert_eq!(label, "x");
        assert_eq!(def.dest, "http://example.com");
        assert_eq!(def.title, "T");
    }

    #[test]
    fn refdef_title_on_next_line_with_junk() {
        let text = "[a]: /u\n\"t\" junk";
        let (n, _, def) = scan_refdef(text, 0).unwrap();
        assert_eq!(&text[n..], "\"t\" junk");
        assert_eq!(def.title, "");
        assert!(scan_refdef("[a]: /u \"t\" junk", 0).is_none());
    }

    #[test]
    fn refdef_needs_destination() {
        assert!(scan_refdef("[a]:", 0).is_none());
        assert!(scan_refdef("[a]: <>", 0).is_some());
        assert!(scan_refdef("[a] /u", 0).is_none());
    }

    #[test]
    fn first_definition_wins() {
        let mut defs = RefDefs::default();
        let text = "[Foo]: /one\n[FOO]: /two\nparagraph";
        let consumed = extract_refdefs(text, &mut defs);
        assert_eq!(&text[consumed..], "paragraph");
        assert_eq!(defs.len(), 1);
        assert_eq!(defs.get("foo").map(|d| d.dest.as_str()), Some("/one"));
    }
}
