// Malformed and adversarial input must always render.

use forum_markdown::{parse, parse_bytes, Dialect, Error, LineBreakMode, Options};

const DIALECTS: [Dialect; 3] = [Dialect::Strict, Dialect::Lenient, Dialect::Lightweight];

fn render_everywhere(input: &str) {
    for dialect in DIALECTS {
        let options = Options::new(dialect).with_line_breaks(LineBreakMode::all());
        let _ = parse(input, false, options);
        let _ = parse(input, true, options);
    }
}

#[test]
fn test_degenerate_snippets() {
    for input in [
        "[foo",
        "**",
        "`unterminated",
        ">no blank before eof",
        "]",
        "[]()",
        "![",
        "<",
        "&",
        "&#",
        "&#x;",
        "\\",
        "~~~",
        "|",
        "|-|",
        "- ",
        "1.",
        "#",
        "```",
        "    ",
        "\t\t\t",
        "\r\r\n\r",
        "\u{e000}\u{e001}\t",
        "[a]: <",
        "[a]:\n",
        "<!--",
        "<?",
        "*_~*_~",
    ] {
        render_everywhere(input);
    }
}

#[test]
fn test_nested_containers() {
    render_everywhere(&"> ".repeat(1000));
    render_everywhere(&"- ".repeat(1000));
    render_everywhere(&"1. ".repeat(500));
    let mut staircase = String::new();
    for i in 0..300 {
        staircase.push_str(&" ".repeat(i * 2));
        staircase.push_str("- x\n");
    }
    render_everywhere(&staircase);
}

#[test]
fn test_nested_delimiters() {
    render_everywhere(&format!("{}a{}", "*".repeat(500), "*".repeat(500)));
    render_everywhere(&"*a ".repeat(5000));
    render_everywhere(&"a* ".repeat(5000));
    render_everywhere(&"*_".repeat(5000));
    render_everywhere(&"~~a ".repeat(3000));
    render_everywhere(&"**_".repeat(3000));
}

#[test]
fn test_nested_brackets() {
    render_everywhere(&"[".repeat(5000));
    render_everywhere(&"[a](".repeat(2000));
    render_everywhere(&format!("{}{}", "[".repeat(2000), "]".repeat(2000)));
    render_everywhere(&format!("{}a{}", "(".repeat(100), ")".repeat(100)));
    render_everywhere(&"![".repeat(2000));
}

#[test]
fn test_unclosed_code_and_html() {
    render_everywhere(&"`".repeat(3000));
    render_everywhere(&"` a ``".repeat(1000));
    render_everywhere(&"<a ".repeat(3000));
    render_everywhere(&"<!-- ".repeat(3000));
}

#[test]
fn test_reference_expansion_is_bounded() {
    let mut input = format!("[x]: /{}\n\n", "y".repeat(1000));
    input.push_str(&"[x]".repeat(5000));
    let html = parse(&input, false, Options::new(Dialect::Strict));
    // the budget runs out long before every reference is expanded
    assert!(html.len() < 5000 * 1000);
    assert!(html.contains("[x]"));
}

#[test]
fn test_invalid_utf8() {
    let err = parse_bytes(b"ok \xf0\x28 no", false, Options::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidUtf8 { offset: 3 }));
    assert_eq!(
        parse_bytes("*é*".as_bytes(), false, Options::default()).unwrap(),
        "<p><em>é</em></p>\n"
    );
}
