#[cfg(feature = "serde")]
mod tests {
    use forum_markdown::{BlockKind, Dialect, Inline, LineBreakMode, Link, LinkType, Options};

    #[test]
    fn options_round_trip_json() {
        let options = Options::new(Dialect::Lightweight)
            .with_line_breaks(LineBreakMode::CONVERT_BLANK_LINE_RUNS);
        let encoded = serde_json::to_string(&options).unwrap();
        let decoded: Options = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, options);
    }

    #[test]
    fn inline_tree_round_trip_json() {
        let tree = vec![
            Inline::Text("a".to_owned()),
            Inline::Strong(vec![Inline::Emphasis(vec![Inline::Code("b".to_owned())])]),
            Inline::Link(Link {
                link_type: LinkType::Reference,
                url: "/x".to_owned(),
                title: "T".to_owned(),
                children: vec![Inline::HardBreak],
            }),
            Inline::Autolink {
                url: "me@example.com".to_owned(),
                email: true,
            },
        ];
        let encoded = serde_json::to_string(&tree).unwrap();
        let decoded: Vec<Inline> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, tree);
    }

    #[test]
    fn block_kind_round_trip_json() {
        let kind = BlockKind::List {
            ordered: true,
            start: 7,
            marker: ')',
            tight: false,
        };
        let encoded = serde_json::to_string(&kind).unwrap();
        let decoded: BlockKind = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, kind);
    }
}
