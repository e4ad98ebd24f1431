use super::*;

#[test]
fn merge_lets_later_values_win() {
    let base = Style::new().px("fontSize", 40.0).kw("color", "#000");
    let user = Style::new().kw("color", "#f00").num("opacity", 0.5);
    let merged = base.merge(&user);
    assert_eq!(merged.keyword("color"), Some("#f00"));
    assert_eq!(merged.number("fontSize"), Some(40.0));
    assert_eq!(merged.number("opacity"), Some(0.5));
}

#[test]
fn identity_transforms_are_skipped() {
    let s = Style::new().transform(vec![
        TransformOp::Translate(Vec2::ZERO),
        TransformOp::Scale(1.0),
    ]);
    assert!(s.get("transform").is_none());
    let s = Style::new().transform(vec![TransformOp::Scale(0.5)]);
    assert!(s.get("transform").is_some());
}

#[test]
fn transform_composes_in_css_order() {
    let ops = [
        TransformOp::Translate(Vec2::new(10.0, 0.0)),
        TransformOp::Scale(2.0),
    ];
    let a = transform_to_affine(&ops);
    let p = a * kurbo::Point::new(1.0, 1.0);
    assert_eq!(p, kurbo::Point::new(12.0, 2.0));
}

#[test]
fn text_content_walks_pre_order() {
    let tree = VisualNode::container(Style::new())
        .with_child(VisualNode::text("Hello", Style::new()))
        .with_child(
            VisualNode::container(Style::new())
                .with_child(VisualNode::text(", world", Style::new())),
        );
    assert_eq!(tree.text_content(), "Hello, world");
    assert_eq!(tree.node_count(), 4);
}

#[test]
fn json_shape_is_compact() {
    let node = VisualNode::image("logo.png", Style::new());
    let json = serde_json::to_string(&node).unwrap();
    assert_eq!(json, r#"{"kind":{"Image":{"src":"logo.png"}}}"#);
    let back: VisualNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}
