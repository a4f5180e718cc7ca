// Shape of parsed documents.

use forum_markdown::{
    Alignment, BlockKind, BlockRef, Dialect, Document, Inline, Link, LinkType, Options, Parser,
};
use pretty_assertions::assert_eq;

fn document(input: &str) -> Document {
    Parser::new(Options::new(Dialect::Strict)).parse_document(input, false)
}

fn text(s: &str) -> Inline {
    Inline::Text(s.to_owned())
}

fn blocks(block: BlockRef<'_>) -> Vec<BlockRef<'_>> {
    block
        .children()
        .filter(|b| !matches!(b.kind(), BlockKind::Blank(_)))
        .collect()
}

fn only_inlines(input: &str) -> Vec<Inline> {
    let doc = document(input);
    let top = blocks(doc.root());
    assert_eq!(top.len(), 1);
    top[0].inlines()[0].clone()
}

#[test]
fn emphasis_shapes() {
    assert_eq!(only_inlines("*a*"), vec![Inline::Emphasis(vec![text("a")])]);
    assert_eq!(only_inlines("**a**"), vec![Inline::Strong(vec![text("a")])]);
    assert_eq!(
        only_inlines("***a***"),
        vec![Inline::Strong(vec![Inline::Emphasis(vec![text("a")])])]
    );
    assert_eq!(
        only_inlines("*foo**bar**baz*"),
        vec![Inline::Emphasis(vec![
            text("foo"),
            Inline::Strong(vec![text("bar")]),
            text("baz"),
        ])]
    );
}

#[test]
fn strikethrough_skips_shorter_tilde_runs() {
    assert_eq!(
        only_inlines("~~a~ b~~"),
        vec![Inline::Strikethrough(vec![text("a~ b")])]
    );
    assert_eq!(
        only_inlines("~a~~ b~"),
        vec![Inline::Strikethrough(vec![text("a~~ b")])]
    );
    let html = Parser::new(Options::new(Dialect::Strict)).parse("~~a~ b~~", false);
    assert_eq!(html, "<p><del>a~ b</del></p>\n");
}

#[test]
fn link_wraps_emphasis() {
    assert_eq!(
        only_inlines("[*foo*](bar)"),
        vec![Inline::Link(Link {
            link_type: LinkType::Inline,
            url: "bar".to_owned(),
            title: String::new(),
            children: vec![Inline::Emphasis(vec![text("foo")])],
        })]
    );
}

#[test]
fn reference_resolution() {
    let doc = document("[x]: http://example.com \"T\"\n\n[see][x]");
    let top = blocks(doc.root());
    assert_eq!(top.len(), 1);
    match &top[0].inlines()[0][..] {
        [Inline::Link(link)] => {
            assert_eq!(link.link_type, LinkType::Reference);
            assert_eq!(link.url, "http://example.com");
            assert_eq!(link.title, "T");
            assert_eq!(link.children, vec![text("see")]);
        }
        other => panic!("expected a single link, got {:?}", other),
    }
}

#[test]
fn list_nesting() {
    let doc = document("- a\n  - b\n- c");
    let top = blocks(doc.root());
    assert_eq!(top.len(), 1);
    assert!(matches!(top[0].kind(), BlockKind::List { ordered: false, tight: true, .. }));
    let items = blocks(top[0]);
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.kind() == &BlockKind::ListItem));

    let first = blocks(items[0]);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].inlines(), &[vec![text("a")]]);
    assert!(matches!(first[1].kind(), BlockKind::List { .. }));
    let nested = blocks(first[1]);
    assert_eq!(nested.len(), 1);
    assert_eq!(blocks(nested[0])[0].inlines(), &[vec![text("b")]]);
}

#[test]
fn table_shape() {
    let doc = document("a|b\n-|-\n1|2");
    let top = blocks(doc.root());
    assert_eq!(top.len(), 1);
    assert_eq!(
        top[0].kind(),
        &BlockKind::Table(vec![Alignment::None, Alignment::None])
    );
    let rows = blocks(top[0]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].kind(), &BlockKind::TableRow { header: true });
    assert_eq!(rows[0].inlines(), &[vec![text("a")], vec![text("b")]]);
    assert_eq!(rows[1].kind(), &BlockKind::TableRow { header: false });
    assert_eq!(rows[1].inlines(), &[vec![text("1")], vec![text("2")]]);
}

#[test]
fn fenced_code_keeps_lines() {
    let doc = document("```py\n  x = 1\n\n*y*\n```");
    let top = blocks(doc.root());
    assert_eq!(
        top[0].kind(),
        &BlockKind::FencedCode {
            info: "py".to_owned()
        }
    );
    assert_eq!(top[0].kind().language(), Some("py"));
    assert_eq!(top[0].lines(), &["  x = 1", "", "*y*"]);
}

#[test]
fn blank_runs_are_counted() {
    let doc = document("a\n\n\n\nb");
    let kinds: Vec<BlockKind> = doc.root().children().map(|b| b.kind().clone()).collect();
    assert_eq!(
        kinds,
        vec![BlockKind::Paragraph, BlockKind::Blank(3), BlockKind::Paragraph]
    );
}

#[test]
fn one_document_renders_to_every_dialect() {
    let doc = document("**a**");
    assert_eq!(
        doc.render(Options::new(Dialect::Strict)),
        "<p><strong>a</strong></p>\n"
    );
    assert_eq!(
        doc.render(Options::new(Dialect::Lightweight)),
        "[b]a[/b]\n"
    );
}
