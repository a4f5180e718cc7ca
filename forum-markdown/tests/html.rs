// Tests for the strict and lenient HTML dialects.

use forum_markdown::{parse, Dialect, LineBreakMode, Options};
use pretty_assertions::assert_eq;

fn strict(input: &str) -> String {
    parse(input, false, Options::new(Dialect::Strict))
}

fn lenient(input: &str) -> String {
    parse(input, false, Options::new(Dialect::Lenient))
}

#[test]
fn html_test_paragraphs() {
    assert_eq!(
        strict("Hello *forum*\n\nsecond\nline"),
        "<p>Hello <em>forum</em></p>\n<p>second\nline</p>\n"
    );
}

#[test]
fn html_test_emphasis_forms() {
    assert_eq!(strict("*a*"), "<p><em>a</em></p>\n");
    assert_eq!(strict("**a**"), "<p><strong>a</strong></p>\n");
    assert_eq!(strict("***a***"), "<p><strong><em>a</em></strong></p>\n");
    assert_eq!(
        strict("*foo**bar**baz*"),
        "<p><em>foo<strong>bar</strong>baz</em></p>\n"
    );
    assert_eq!(strict("snake_case_name"), "<p>snake_case_name</p>\n");
}

#[test]
fn html_test_strikethrough() {
    assert_eq!(strict("~~gone~~"), "<p><del>gone</del></p>\n");
    assert_eq!(strict("x ~~~a~~~"), "<p>x ~<del>a</del>~</p>\n");
}

#[test]
fn html_test_link_over_emphasis() {
    assert_eq!(
        strict("[*foo*](bar)"),
        "<p><a href=\"bar\"><em>foo</em></a></p>\n"
    );
    assert_eq!(strict("*[foo*](bar)"), "<p>*<a href=\"bar\">foo*</a></p>\n");
}

#[test]
fn html_test_reference_link() {
    assert_eq!(
        strict("[x]: http://example.com \"T\"\n\n[see][x]"),
        "<p><a href=\"http://example.com\" title=\"T\">see</a></p>\n"
    );
    assert_eq!(strict("[see][nowhere]"), "<p>[see][nowhere]</p>\n");
}

#[test]
fn html_test_autolinks() {
    assert_eq!(
        strict("<me@example.com>"),
        "<p><a href=\"mailto:me@example.com\">me@example.com</a></p>\n"
    );
    assert_eq!(
        strict("<https://x.org/a?b=1&c=2>"),
        "<p><a href=\"https://x.org/a?b=1&amp;c=2\">https://x.org/a?b=1&amp;c=2</a></p>\n"
    );
}

#[test]
fn html_test_image_alt_is_flattened() {
    assert_eq!(
        strict("![a *b*](/i.png \"t\")"),
        "<p><img src=\"/i.png\" alt=\"a b\" title=\"t\" /></p>\n"
    );
    assert_eq!(
        lenient("![a](/i.png)"),
        "<p><img src=\"/i.png\" alt=\"a\"></p>\n"
    );
}

#[test]
fn html_test_entities_and_escaping() {
    assert_eq!(
        strict("&amp; &copy; &#35; &bogus; a < b"),
        "<p>&amp; © # &amp;bogus; a &lt; b</p>\n"
    );
    assert_eq!(strict("\\*not\\*"), "<p>*not*</p>\n");
}

#[test]
fn html_test_code() {
    assert_eq!(strict("`a < b`"), "<p><code>a &lt; b</code></p>\n");
    assert_eq!(
        strict("```rust\nfn main() {}\n```"),
        "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>\n"
    );
    assert_eq!(strict("    a < b"), "<pre><code>a &lt; b\n</code></pre>\n");
}

#[test]
fn html_test_headings_and_rules() {
    assert_eq!(strict("# One"), "<h1>One</h1>\n");
    assert_eq!(strict("Two\n---"), "<h2>Two</h2>\n");
    assert_eq!(strict("a\n\n***"), "<p>a</p>\n<hr />\n");
    assert_eq!(lenient("a\n\n***"), "<p>a</p>\n<hr>\n");
}

#[test]
fn html_test_lists() {
    assert_eq!(
        strict("3. a\n4. b"),
        "<ol start=\"3\">\n<li>a</li>\n<li>b</li>\n</ol>\n"
    );
    assert_eq!(
        strict("1. a\n   1. b"),
        "<ol>\n<li>a\n<ol style=\"list-style-type: lower-alpha\">\n<li>b</li>\n</ol>\n</li>\n</ol>\n"
    );
}

#[test]
fn html_test_block_quote() {
    assert_eq!(
        strict(">no blank before eof"),
        "<blockquote>\nno blank before eof\n</blockquote>\n"
    );
    assert_eq!(
        strict("> a\n>\n> b"),
        "<blockquote>\n<p>a</p>\n<p>b</p>\n</blockquote>\n"
    );
}

#[test]
fn html_test_table() {
    assert_eq!(
        strict("| a | b |\n|:--|--:|\n| 1 | 2 |"),
        "<table><thead><tr><th style=\"text-align: left\">a</th>\
         <th style=\"text-align: right\">b</th></tr></thead><tbody>\n\
         <tr><td style=\"text-align: left\">1</td>\
         <td style=\"text-align: right\">2</td></tr>\n</tbody></table>\n"
    );
}

#[test]
fn html_test_html_block() {
    assert_eq!(
        strict("<div>\nhi\n</div>\n\ntext"),
        "<div>\nhi\n</div>\n<p>text</p>\n"
    );
}

#[test]
fn html_test_hard_breaks() {
    assert_eq!(strict("a  \nb"), "<p>a<br />\nb</p>\n");
    assert_eq!(lenient("a\\\nb"), "<p>a<br>\nb</p>\n");
}

#[test]
fn html_test_line_break_modes() {
    let options = Options::new(Dialect::Strict).with_line_breaks(LineBreakMode::all());
    assert_eq!(
        parse("a\nb\n\n\n\nc", false, options),
        "<p>a<br />\nb</p>\n<br />\n<br />\n<p>c</p>\n"
    );
}

#[test]
fn html_test_already_rendered() {
    let options = Options::new(Dialect::Strict);
    assert_eq!(
        parse("&gt; hi", true, options),
        "<blockquote>\nhi\n</blockquote>\n"
    );
    assert_eq!(parse("&gt; hi", false, options), "<p>&gt; hi</p>\n");
    assert_eq!(
        parse("one<br />\ntwo", true, options),
        "<p>one\ntwo</p>\n"
    );
}

#[test]
fn html_test_degenerate_input() {
    assert_eq!(strict("[foo"), "<p>[foo</p>\n");
    assert_eq!(strict("**"), "<p>**</p>\n");
    assert_eq!(strict("`unterminated"), "<p>`unterminated</p>\n");
    assert_eq!(strict(""), "");
}
