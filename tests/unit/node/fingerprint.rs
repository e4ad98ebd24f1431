use super::*;

fn sample(opacity: f64) -> VisualNode {
    VisualNode::container(Style::new().num("opacity", opacity))
        .with_child(VisualNode::text("x", Style::new().px("fontSize", 40.0)))
}

#[test]
fn equal_trees_share_a_fingerprint() {
    assert_eq!(fingerprint(&sample(0.5)), fingerprint(&sample(0.5)));
}

#[test]
fn any_difference_changes_the_fingerprint() {
    let base = fingerprint(&sample(0.5));
    assert_ne!(base, fingerprint(&sample(0.5000000001)));

    let mut other = sample(0.5);
    other.children[0].text = Some("y".to_owned());
    assert_ne!(base, fingerprint(&other));

    let px = VisualNode::container(Style::new().px("width", 1.0));
    let pct = VisualNode::container(Style::new().pct("width", 1.0));
    assert_ne!(fingerprint(&px), fingerprint(&pct));
}

#[test]
fn media_kind_is_part_of_the_fingerprint() {
    let image = VisualNode::image("clip.mp4", Style::new());
    let video = VisualNode::video("clip.mp4", Style::new());
    assert_ne!(fingerprint(&image), fingerprint(&video));
}
