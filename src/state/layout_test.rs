use super::*;

fn node(id: &str, order: i64) -> LessonNode {
    LessonNode {
        id: id.to_owned(),
        title: id.to_uppercase(),
        summary: String::new(),
        content: String::new(),
        order,
        difficulty: None,
        kind: None,
    }
}

fn ids(laid: &[PositionedNode]) -> Vec<&str> {
    laid.iter().map(|p| p.node.id.as_str()).collect()
}

#[test]
fn first_node_sits_at_origin() {
    let laid = layout_nodes(&[node("a", 0)]);
    assert_eq!(laid[0].pos, Vec2::ZERO);
}

#[test]
fn odd_positions_get_vertical_jitter() {
    let laid = layout_nodes(&[node("a", 0), node("b", 1), node("c", 2)]);
    assert_eq!(laid[1].pos.x, STEP_X);
    let expected = (1.0_f64 / DAMPENING).sin() * AMPLITUDE + VERTICAL_JITTER;
    assert!((laid[1].pos.y - expected).abs() < 1e-9);
    let expected = (2.0_f64 / DAMPENING).sin() * AMPLITUDE;
    assert!((laid[2].pos.y - expected).abs() < 1e-9);
}

#[test]
fn layout_ignores_input_permutation() {
    let sorted = layout_nodes(&[node("a", 0), node("b", 1), node("c", 2), node("d", 3)]);
    let shuffled = layout_nodes(&[node("c", 2), node("a", 0), node("d", 3), node("b", 1)]);
    assert_eq!(sorted, shuffled);
    assert_eq!(ids(&shuffled), vec!["a", "b", "c", "d"]);
}

#[test]
fn layout_is_deterministic() {
    let nodes = [node("x", 5), node("y", -1), node("z", 9)];
    assert_eq!(layout_nodes(&nodes), layout_nodes(&nodes));
}

#[test]
fn empty_layout_uses_default_canvas() {
    let laid = layout_nodes(&[]);
    assert!(laid.is_empty());
    let bounds = world_bounds(&laid);
    assert_eq!(bounds.origin, Vec2::ZERO);
    assert_eq!(bounds.size, EMPTY_WORLD);
}

#[test]
fn non_empty_bounds_never_start_at_zero() {
    let laid = layout_nodes(&[node("a", 0), node("b", 1), node("c", 2), node("d", 3), node("e", 4)]);
    let bounds = world_bounds(&laid);
    assert_eq!(bounds.origin.x, NODE_RADIUS - WORLD_PADDING / 2.0);
    assert!(bounds.origin.y < 0.0);
}

#[test]
fn bounds_pad_node_extents() {
    let laid = layout_nodes(&[node("a", 0), node("b", 1), node("c", 2)]);
    let bounds = world_bounds(&laid);
    let min_y = laid.iter().map(|p| p.pos.y).fold(f64::INFINITY, f64::min);
    let max_y = laid.iter().map(|p| p.pos.y).fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(bounds.size.width, 2.0 * STEP_X + WORLD_PADDING);
    assert!((bounds.size.height - (max_y - min_y + WORLD_PADDING)).abs() < 1e-9);
}

#[test]
fn bounds_centre_the_node_anchors() {
    let laid = layout_nodes(&[node("a", 0), node("b", 1), node("c", 2)]);
    let bounds = world_bounds(&laid);
    let first = laid[0].anchor();
    let last = laid[2].anchor();
    let box_mid_x = bounds.origin.x + bounds.size.width / 2.0;
    assert!((box_mid_x - (first.x + last.x) / 2.0).abs() < 1e-9);
}

#[test]
fn connector_runs_between_anchors() {
    let laid = layout_nodes(&[node("a", 0), node("b", 1)]);
    let d = connector_path(&laid[0], &laid[1]);
    assert!(d.starts_with("M 36 36 C 146 36,"));
    let end = laid[1].anchor();
    assert!(d.ends_with(&format!("{} {}", end.x, end.y)));
}
