//! Input normalization ahead of block parsing.
//!
//! Tabs are expanded to 4-column stops here, once, against the physical
//! line start. Each tab becomes a [`TAB_HEAD`] followed by enough
//! [`TAB_PAD`]s to reach the next stop, so that every placeholder is exactly
//! one column of whitespace to the block builder. Leaf text is handed back
//! through [`restore_tabs`] before inline parsing, which turns an intact
//! head-and-pads group into a literal tab again and any pad whose head was
//! eaten by container indentation into a space.

use std::borrow::Cow;

use memchr::{memchr, memchr2};

pub(crate) const TAB_HEAD: char = '\u{E000}';
pub(crate) const TAB_PAD: char = '\u{E001}';
pub(crate) const TAB_STOP: usize = 4;

/// Stands in for input code points that would collide with the placeholders.
const COLLISION_REPLACEMENT: char = '\u{FFFD}';

/// Returns true for any character that counts as one column of indentation.
#[inline]
pub(crate) fn is_indent_char(c: char) -> bool {
    c == ' ' || c == TAB_HEAD || c == TAB_PAD
}

/// Normalizes raw input into the form the block builder consumes.
pub(crate) fn preprocess(input: &str, already_rendered_once: bool) -> String {
    let normalized = normalize_line_endings(input);
    let decoded = if already_rendered_once {
        Cow::Owned(decode_render_artifacts(&normalized))
    } else {
        normalized
    };
    expand_tabs(&decoded)
}

fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if memchr(b'\r', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Undoes the markup an earlier rendering pass left in stored text: line
/// break tags in front of a newline, and the handful of entities it used to
/// protect whitespace and angle brackets.
fn decode_render_artifacts(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut mark = 0;
    let mut ix = 0;
    while let Some(pos) = memchr2(b'<', b'&', &bytes[ix..]) {
        ix += pos;
        let rest = &bytes[ix..];
        let (consumed, replacement) = if rest[0] == b'<' {
            match scan_br_before_newline(rest) {
                Some(n) => (n, ""),
                None => (0, ""),
            }
        } else {
            match scan_artifact_entity(rest) {
                Some((n, s)) => (n, s),
                None => (0, ""),
            }
        };
        if consumed == 0 {
            ix += 1;
            continue;
        }
        out.push_str(&text[mark..ix]);
        out.push_str(replacement);
        ix += consumed;
        mark = ix;
    }
    out.push_str(&text[mark..]);
    out
}

/// Matches `<br>`, `<br/>` or `<br />` (any case) directly before `\n`.
/// The newline itself is kept.
fn scan_br_before_newline(bytes: &[u8]) -> Option<usize> {
    if bytes.len() < 4 || !bytes[1..3].eq_ignore_ascii_case(b"br") {
        return None;
    }
    let mut i = 3;
    while bytes.get(i) == Some(&b' ') {
        i += 1;
    }
    if bytes.get(i) == Some(&b'/') {
        i += 1;
    }
    if bytes.get(i) != Some(&b'>') {
        return None;
    }
    i += 1;
    (bytes.get(i) == Some(&b'\n')).then_some(i)
}

fn scan_artifact_entity(bytes: &[u8]) -> Option<(usize, &'static str)> {
    const ARTIFACTS: [(&[u8], &str); 4] = [
        (b"&nbsp;", " "),
        (b"&lt;", "<"),
        (b"&gt;", ">"),
        (b"&amp;", "&"),
    ];
    ARTIFACTS
        .iter()
        .find(|(pat, _)| bytes.starts_with(pat))
        .map(|(pat, s)| (pat.len(), *s))
}

fn expand_tabs(text: &str) -> String {
    let has_tab = memchr(b'\t', text.as_bytes()).is_some();
    let has_collision = text.contains([TAB_HEAD, TAB_PAD]);
    if !has_tab && !has_collision {
        return text.to_owned();
    }
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let width = TAB_STOP - column % TAB_STOP;
                out.push(TAB_HEAD);
                for _ in 1..width {
                    out.push(TAB_PAD);
                }
                column += width;
            }
            '\n' => {
                out.push('\n');
                column = 0;
            }
            TAB_HEAD | TAB_PAD => {
                out.push(COLLISION_REPLACEMENT);
                column += 1;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Turns placeholders back into the whitespace they stand for.
pub(crate) fn restore_tabs(text: &str) -> Cow<'_, str> {
    if !text.contains([TAB_HEAD, TAB_PAD]) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut in_tab = false;
    for c in text.chars() {
        match c {
            TAB_HEAD => {
                out.push('\t');
                in_tab = true;
            }
            TAB_PAD if in_tab => {}
            TAB_PAD => out.push(' '),
            _ => {
                out.push(c);
                in_tab = false;
            }
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn crlf_and_cr_become_lf() {
        assert_eq!(preprocess("a\r\nb\rc\n", false), "a\nb\nc\n");
    }

    #[test]
    fn tab_expands_to_next_stop() {
        let out = preprocess("a\tb", false);
        let expected: String = ['a', TAB_HEAD, TAB_PAD, TAB_PAD, 'b'].iter().collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn tab_columns_reset_per_line() {
        let out = preprocess("abc\n\tx", false);
        let expected: String = ['a', 'b', 'c', '\n', TAB_HEAD, TAB_PAD, TAB_PAD, TAB_PAD, 'x']
            .iter()
            .collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn restore_round_trips_whole_tabs() {
        let input = "\tfoo\tbar\t\tbaz";
        assert_eq!(restore_tabs(&preprocess(input, false)), input);
    }

    #[test]
    fn orphan_pads_become_spaces() {
        let partial: String = [TAB_PAD, TAB_PAD, 'x'].iter().collect();
        assert_eq!(restore_tabs(&partial), "  x");
    }

    #[test]
    fn placeholder_code_points_in_input_cannot_collide() {
        let input = format!("a{}b{}c", TAB_HEAD, TAB_PAD);
        let out = preprocess(&input, false);
        assert_eq!(out, "a\u{FFFD}b\u{FFFD}c");
        assert_eq!(restore_tabs(&out), out);
    }

    #[test]
    fn render_artifacts_only_decoded_when_requested() {
        let input = "&gt; quoted<br />\nnext&nbsp;word &amp;lt;";
        assert_eq!(preprocess(input, false), input);
        assert_eq!(preprocess(input, true), "> quoted\nnext word &lt;");
    }

    #[test]
    fn br_without_newline_is_kept() {
        assert_eq!(preprocess("a<br>b", true), "a<br>b");
        assert_eq!(preprocess("a<BR/>\nb", true), "a\nb");
    }
}
