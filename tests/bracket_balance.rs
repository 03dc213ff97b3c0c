use proptest::prelude::*;
use rdxmark::token::Bracket;
use rdxmark::{Block, Content, Document, Inline, LinkDefinition, LinkTarget, Token, render};

fn arb_target() -> impl Strategy<Value = LinkTarget> {
    prop_oneof![
        ("[a-z /%]{0,8}", proptest::option::of("[a-z]{0,4}"))
            .prop_map(|(destination, title)| LinkTarget::Inline { destination, title }),
        prop_oneof![Just("foo"), Just("missing"), Just("")]
            .prop_map(|label| LinkTarget::Reference(label.to_string())),
    ]
}

fn arb_inline() -> impl Strategy<Value = Inline> {
    let leaf = prop_oneof![
        "[a-z ]{0,6}".prop_map(Inline::Text),
        "<[a-z]{1,3}>".prop_map(Inline::RawHtml),
        Just(Inline::SoftBreak),
        Just(Inline::HardBreak),
        (0usize..4).prop_map(Inline::Indent),
        "[a-z]{1,3}".prop_map(Inline::LinkLabel),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        let children = prop::collection::vec(inner, 0..4);
        prop_oneof![
            children.clone().prop_map(Inline::Emphasis),
            children.clone().prop_map(Inline::Strong),
            children.clone().prop_map(Inline::CodeSpan),
            children.clone().prop_map(Inline::HtmlTag),
            children.clone().prop_map(Inline::Autolink),
            (arb_target(), children.clone())
                .prop_map(|(target, children)| Inline::Link { target, children }),
            (arb_target(), children).prop_map(|(target, children)| Inline::Image { target, children }),
        ]
    })
}

fn arb_block() -> impl Strategy<Value = Block> {
    let inlines = || prop::collection::vec(arb_inline(), 0..4);
    let leaf = prop_oneof![
        inlines().prop_map(Block::Paragraph),
        Just(Block::ThematicBreak),
        (1u8..=6, inlines()).prop_map(|(level, children)| Block::Heading { level, children }),
        (proptest::option::of("[a-z ]{0,6}"), inlines())
            .prop_map(|(info, children)| Block::CodeBlock { info, children }),
        inlines().prop_map(|children| Block::HtmlBlock(Content::Inlines(children))),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        let children = prop::collection::vec(inner, 0..4);
        prop_oneof![
            children.clone().prop_map(Block::BlockQuote),
            (any::<bool>(), children.clone())
                .prop_map(|(ordered, children)| Block::List { ordered, children }),
            (any::<bool>(), children.clone())
                .prop_map(|(tight, children)| Block::ListItem { tight, children }),
            children.prop_map(|children| Block::HtmlBlock(Content::Blocks(children))),
        ]
    })
}

fn assert_balanced(tokens: &[Token]) -> Result<(), TestCaseError> {
    let mut stack: Vec<&str> = Vec::new();
    for token in tokens {
        match token.bracket() {
            Some(Bracket::Open(kind)) => stack.push(kind),
            Some(Bracket::Close(kind)) => {
                prop_assert_eq!(stack.pop(), Some(kind), "unmatched {}", token.kind);
            }
            None => {}
        }
    }
    prop_assert!(stack.is_empty(), "unclosed: {:?}", stack);
    Ok(())
}

proptest! {
    #[test]
    fn prop_open_close_tokens_nest(blocks in prop::collection::vec(arb_block(), 0..4)) {
        let references = [("foo", LinkDefinition::new("/foo", Some("Foo".to_string())))]
            .into_iter()
            .collect();
        let tokens = render(&Document { blocks, references });
        assert_balanced(&tokens)?;
    }

    #[test]
    fn prop_hrefs_are_normalized(blocks in prop::collection::vec(arb_block(), 0..4)) {
        let tokens = render(&Document { blocks, references: Default::default() });
        for token in &tokens {
            for name in ["href", "src"] {
                if let Some(uri) = token.attr(name) {
                    prop_assert_eq!(rdxmark::uri::normalize_uri(uri), uri);
                }
            }
        }
    }
}

#[test]
fn tight_item_nested_paragraphs_keep_wrappers() {
    let tokens = render(&Document {
        blocks: vec![Block::ListItem {
            tight: true,
            children: vec![Block::List {
                ordered: false,
                children: vec![Block::ListItem {
                    tight: false,
                    children: vec![Block::Paragraph(vec![Inline::Text("deep".to_string())])],
                }],
            }],
        }],
        references: Default::default(),
    });
    let kinds: Vec<&str> = tokens.iter().map(|t| t.kind.as_str()).collect();
    assert!(kinds.contains(&"paragraph_open"));
    assert!(kinds.contains(&"paragraph_close"));
}
