// Tests for the lightweight bracket-tag dialect.

use forum_markdown::{parse, Dialect, Options};
use pretty_assertions::assert_eq;

fn lightweight(input: &str) -> String {
    parse(input, false, Options::new(Dialect::Lightweight))
}

#[test]
fn lightweight_test_inline_tags() {
    assert_eq!(lightweight("**loud**"), "[b]loud[/b]\n");
    assert_eq!(
        lightweight("*a* ~~b~~ `c`"),
        "[i]a[/i] [s]b[/s] [icode]c[/icode]\n"
    );
}

#[test]
fn lightweight_test_text_is_not_escaped() {
    assert_eq!(lightweight("a < b & c"), "a < b & c\n");
    assert_eq!(lightweight("`<tag>`"), "[icode]<tag>[/icode]\n");
}

#[test]
fn lightweight_test_links() {
    assert_eq!(
        lightweight("[site](http://x.org)"),
        "[url=http://x.org]site[/url]\n"
    );
    assert_eq!(
        lightweight("<http://x.org>"),
        "[url]http://x.org[/url]\n"
    );
    assert_eq!(
        lightweight("<me@example.com>"),
        "[email]me@example.com[/email]\n"
    );
    assert_eq!(
        lightweight("![cat](/c.png)"),
        "[img alt=\"cat\"]/c.png[/img]\n"
    );
}

#[test]
fn lightweight_test_blocks() {
    assert_eq!(lightweight("a\n\nb"), "a\n\nb\n");
    assert_eq!(lightweight("## Hi"), "[heading=2]Hi[/heading]\n");
    assert_eq!(lightweight("> quoted"), "[quote]\nquoted\n[/quote]\n");
    assert_eq!(
        lightweight("```js\nlet a = 1 < 2;\n```"),
        "[code=js]\nlet a = 1 < 2;\n[/code]\n"
    );
    assert_eq!(lightweight("---"), "[hr]\n");
}

#[test]
fn lightweight_test_lists() {
    assert_eq!(lightweight("- a\n- b"), "[list]\n[*]a\n[*]b\n[/list]\n");
    assert_eq!(
        lightweight("1. a\n   1. b"),
        "[list=1]\n[*]a\n[list=a]\n[*]b\n[/list]\n[/list]\n"
    );
    // the tag has no start attribute, numbering restarts at one
    assert_eq!(
        lightweight("10. a\n11. b"),
        "[list=1]\n[*]a\n[*]b\n[/list]\n"
    );
}

#[test]
fn lightweight_test_table() {
    assert_eq!(
        lightweight("a|b\n-|-\n1|2"),
        "[table]\n[tr][th]a[/th][th]b[/th][/tr]\n[tr][td]1[/td][td]2[/td][/tr]\n[/table]\n"
    );
}
