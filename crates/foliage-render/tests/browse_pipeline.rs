//! End-to-end pipeline tests: document text -> scanner -> builder ->
//! converter -> nav model -> canvas, over realistic markup.

use foliage_dom::parse;
use foliage_render::{Canvas, NavModel, NodeId, RenderChild, RenderTree, atom_weight, convert};

fn pipeline(doc: &str) -> (RenderTree, NavModel) {
    let tree = convert(&parse(doc));
    let nav = NavModel::new(&tree);
    (tree, nav)
}

/// Strip escape sequences from painted output.
fn visible(bytes: &[u8]) -> String {
    let mut out = Vec::new();
    let mut iter = bytes.iter().copied();
    while let Some(b) = iter.next() {
        if b == 0x1b {
            for f in iter.by_ref() {
                if f.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(b);
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn collect_tags<'t>(tree: &'t RenderTree, id: NodeId, out: &mut Vec<&'t str>) {
    out.push(tree.node(id).tag());
    for child in tree.node(id).child_nodes() {
        collect_tags(tree, child, out);
    }
}

const PAGE: &str = r#"<!doctype html>
<html>
<head><title>ignored</title><style>p { color: red }</style></head>
<body>
  <h1>Heading &amp; more</h1>
  <p>First paragraph with a <a href="/x">link</a> and <b>bold</b> text.
  <p>Second paragraph, never closed.
  <ul>
    <li>alpha
    <li>beta 日本語テキスト
  </ul>
  <img src="x.png" alt="a diagram">
</body>
</html>"#;

#[test]
fn malformed_page_builds_a_complete_tree() {
    let (tree, _) = pipeline(PAGE);
    let mut tags = Vec::new();
    collect_tags(&tree, tree.root(), &mut tags);
    // head/style/title vanish, html collapses around its lone body, and
    // the two auto-closed paragraphs survive as separate nodes.
    assert_eq!(tags.iter().filter(|t| **t == "p").count(), 2);
    assert_eq!(tags.iter().filter(|t| **t == "h1").count(), 1);
    assert_eq!(tags.iter().filter(|t| **t == "ul").count(), 1);
    assert!(!tags.contains(&"html"));
    assert!(!tags.contains(&"head"));
    assert!(!tags.contains(&"style"));
}

#[test]
fn table_rows_survive_conversion() {
    let (tree, _) = pipeline("<table><tr><td>a</td><td>b</td></tr></table>");
    let mut tags = Vec::new();
    collect_tags(&tree, tree.root(), &mut tags);
    assert_eq!(tags.iter().filter(|t| **t == "tr").count(), 1);
    assert_eq!(tags.iter().filter(|t| **t == "td").count(), 2);
}

#[test]
fn weights_are_additive_over_the_whole_page() {
    let (tree, _) = pipeline(PAGE);
    check_weights(&tree, tree.root());
}

fn check_weights(tree: &RenderTree, id: NodeId) {
    let node = tree.node(id);
    let sum: usize = node
        .children()
        .iter()
        .map(|child| match child {
            RenderChild::Atom(atom) => atom_weight(atom),
            RenderChild::Node(id) => {
                check_weights(tree, *id);
                tree.node(*id).weight()
            }
        })
        .sum();
    assert_eq!(node.weight(), sum, "weight mismatch at {id:?}");
}

#[test]
fn navigation_walks_every_visible_level() {
    let (tree, mut nav) = pipeline(PAGE);
    let root = nav.cursor();
    nav.into_first_child(&tree);
    assert_ne!(nav.cursor(), root);
    // next then prev is identity at every depth.
    for _ in 0..4 {
        let here = nav.cursor();
        nav.next();
        nav.prev();
        assert_eq!(nav.cursor(), here);
        nav.into_first_child(&tree);
    }
    // Climb all the way back.
    for _ in 0..16 {
        nav.into_parent();
    }
    assert_eq!(nav.cursor(), root);
}

#[test]
fn browse_session_repaints_incrementally() {
    let (tree, mut nav) = pipeline(PAGE);
    let mut canvas = Canvas::new(60);
    let mut out = Vec::new();
    let first = canvas.render(&mut out, &tree, &nav).unwrap();
    assert!(first > 0);

    // Each cursor move changes at least the highlighted line.
    nav.into_first_child(&tree);
    nav.into_first_child(&tree);
    let mut step = Vec::new();
    assert!(canvas.render(&mut step, &tree, &nav).unwrap() >= 1);

    nav.next();
    let mut step = Vec::new();
    let repainted = canvas.render(&mut step, &tree, &nav).unwrap();
    assert!(repainted >= 1);
    assert!(
        repainted < canvas.height(),
        "sibling move repaints a strict subset"
    );

    // A no-op frame paints nothing at all.
    let mut idle = Vec::new();
    assert_eq!(canvas.render(&mut idle, &tree, &nav).unwrap(), 0);
}

#[test]
fn painted_text_shows_placeholders_and_entities() {
    let (tree, mut nav) = pipeline(PAGE);
    open_all(&tree, &mut nav);
    let mut canvas = Canvas::new(60);
    let mut out = Vec::new();
    canvas.render(&mut out, &tree, &nav).unwrap();
    let text = visible(&out);
    assert!(text.contains("Heading & more"), "entity decoded in {text:?}");
    assert!(text.contains("[a diagram]"), "image placeholder in {text:?}");
    assert!(text.contains("alpha"));
    assert!(text.contains('日'));
}

/// Open every structural node by walking the cursor over the whole tree.
fn open_all(tree: &RenderTree, nav: &mut NavModel) {
    if !nav.is_open(nav.cursor()) {
        nav.toggle_open();
    }
    let children = tree.node(nav.cursor()).child_nodes().count();
    if children == 0 {
        return;
    }
    nav.into_first_child(tree);
    for _ in 0..children {
        open_all(tree, nav);
        nav.next();
    }
    nav.into_parent();
}
