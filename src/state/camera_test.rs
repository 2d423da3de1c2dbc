use super::*;

fn bounds(x: f64, y: f64, w: f64, h: f64) -> WorldBounds {
    WorldBounds {
        origin: Vec2::new(x, y),
        size: Size::new(w, h),
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Zoom
// =============================================================

#[test]
fn default_camera_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.zoom(), 1.0);
    assert_eq!(cam.offset, Vec2::ZERO);
    assert!(!cam.is_dragging());
}

#[test]
fn zoom_stays_in_range_for_any_sequence() {
    let mut cam = Camera::default();
    let deltas = [0.2, 0.2, 0.2, 5.0, -0.1, -100.0, 0.3, 2.0, -0.7, f64::MAX, f64::MIN];
    for d in deltas {
        cam.zoom_by(d);
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&cam.zoom()), "zoom {}", cam.zoom());
    }
}

#[test]
fn wheel_direction_sets_sign() {
    let mut cam = Camera::default();
    cam.wheel(120.0);
    assert!(approx(cam.zoom(), 0.9));
    cam.wheel(-3.0);
    cam.wheel(-3.0);
    assert!(approx(cam.zoom(), 1.1));
}

#[test]
fn zoom_out_clamps_at_min() {
    let mut cam = Camera::default();
    for _ in 0..10 {
        cam.zoom_by(-BUTTON_ZOOM_STEP);
    }
    assert_eq!(cam.zoom(), MIN_ZOOM);
}

// =============================================================
// Pan and drag
// =============================================================

#[test]
fn pan_is_unconstrained() {
    let mut cam = Camera::default();
    cam.pan_by(-10_000.0, 5_000.0);
    assert_eq!(cam.offset, Vec2::new(-10_000.0, 5_000.0));
}

#[test]
fn drag_applies_incremental_deltas() {
    let mut cam = Camera::default();
    cam.pointer_down(Vec2::new(100.0, 100.0));
    assert!(cam.pointer_move(Vec2::new(110.0, 95.0)));
    assert!(cam.pointer_move(Vec2::new(130.0, 95.0)));
    assert_eq!(cam.offset, Vec2::new(30.0, -5.0));
    cam.pointer_up();
    assert!(!cam.pointer_move(Vec2::new(500.0, 500.0)));
    assert_eq!(cam.offset, Vec2::new(30.0, -5.0));
}

#[test]
fn moves_while_idle_do_not_rerender() {
    let cam = Rc::new(Camera::default());
    let next = cam.clone().reduce(CameraAction::PointerMove(Vec2::new(3.0, 4.0)));
    assert!(Rc::ptr_eq(&cam, &next));
    let next = cam.clone().reduce(CameraAction::PointerUp);
    assert!(Rc::ptr_eq(&cam, &next));
}

#[test]
fn reducer_drag_round_trip() {
    let cam = Rc::new(Camera::default())
        .reduce(CameraAction::PointerDown(Vec2::new(0.0, 0.0)))
        .reduce(CameraAction::PointerMove(Vec2::new(5.0, 7.0)))
        .reduce(CameraAction::PointerUp);
    assert_eq!(cam.offset, Vec2::new(5.0, 7.0));
    assert_eq!(cam.drag, Drag::Idle);
}

// =============================================================
// Fit and centre
// =============================================================

#[test]
fn fit_centres_world_at_origin() {
    let mut cam = Camera::default();
    cam.fit_to_view(Size::new(1000.0, 460.0), &bounds(0.0, 0.0, 800.0, 400.0), FIT_PADDING);
    // min((1000-120)/800, (460-120)/400) = min(1.1, 0.85)
    assert!(approx(cam.zoom(), 0.85));
    assert!(approx(cam.offset.x, (1000.0 - 800.0 * 0.85) / 2.0));
    assert!(approx(cam.offset.y, (460.0 - 400.0 * 0.85) / 2.0));
}

#[test]
fn fit_accounts_for_bounds_origin() {
    let mut cam = Camera::default();
    let b = bounds(-124.0, -200.0, 1200.0, 600.0);
    let vp = Size::new(900.0, 460.0);
    cam.fit_to_view(vp, &b, FIT_PADDING);
    let centre = b.origin + b.size.to_vec2() / 2.0;
    let on_screen = cam.world_to_screen(centre);
    assert!(approx(on_screen.x, 450.0));
    assert!(approx(on_screen.y, 230.0));
}

#[test]
fn fit_offset_is_origin_relative_centring_shifted_by_origin() {
    let b = bounds(-124.0, -124.0, 1200.0, 600.0);
    let vp = Size::new(1000.0, 460.0);
    let mut cam = Camera::default();
    cam.fit_to_view(vp, &b, FIT_PADDING);
    let z = cam.zoom();
    let plain_x = (vp.width - b.size.width * z) / 2.0;
    let plain_y = (vp.height - b.size.height * z) / 2.0;
    assert!(approx(cam.offset.x, plain_x + 124.0 * z));
    assert!(approx(cam.offset.y, plain_y + 124.0 * z));
    assert!(cam.offset.x > plain_x);
}

#[test]
fn fit_is_idempotent() {
    let b = bounds(-124.0, -244.0, 1420.0, 590.0);
    let vp = Size::new(1024.0, 460.0);
    let mut cam = Camera::default();
    cam.pan_by(77.0, -3.0);
    cam.fit_to_view(vp, &b, FIT_PADDING);
    let once = cam.clone();
    cam.fit_to_view(vp, &b, FIT_PADDING);
    assert_eq!(cam, once);
}

#[test]
fn fit_clamps_tiny_and_huge_worlds() {
    let vp = Size::new(1000.0, 460.0);
    let mut cam = Camera::default();
    cam.fit_to_view(vp, &bounds(0.0, 0.0, 100_000.0, 100.0), FIT_PADDING);
    assert_eq!(cam.zoom(), MIN_ZOOM);
    cam.fit_to_view(vp, &bounds(0.0, 0.0, 10.0, 10.0), FIT_PADDING);
    assert_eq!(cam.zoom(), MAX_ZOOM);
}

#[test]
fn fit_waits_for_measured_viewport() {
    let mut cam = Camera::default();
    cam.pan_by(12.0, 34.0);
    let before = cam.clone();
    cam.fit_to_view(Size::new(0.0, 460.0), &WorldBounds::default(), FIT_PADDING);
    cam.fit_to_view(Size::default(), &WorldBounds::default(), FIT_PADDING);
    assert_eq!(cam, before);
}

#[test]
fn center_on_keeps_zoom_and_centres_anchor() {
    let mut cam = Camera::default();
    cam.zoom_by(0.5);
    let vp = Size::new(800.0, 460.0);
    let anchor = Vec2::new(476.0, 150.0);
    cam.center_on(anchor, vp);
    assert!(approx(cam.zoom(), 1.5));
    let on_screen = cam.world_to_screen(anchor);
    assert!(approx(on_screen.x, 400.0));
    assert!(approx(on_screen.y, 230.0));
    let again = cam.clone();
    cam.center_on(anchor, vp);
    assert_eq!(cam, again);
}

#[test]
fn world_to_screen_scales_then_translates() {
    let mut cam = Camera::default();
    cam.zoom_by(1.0);
    cam.pan_by(-40.0, 25.0);
    assert_eq!(cam.world_to_screen(Vec2::new(100.0, -10.0)), Vec2::new(160.0, 5.0));
}

#[test]
fn css_transform_lists_translate_then_scale() {
    let mut cam = Camera::default();
    cam.pan_by(10.0, -4.5);
    assert_eq!(cam.css_transform(), "translate(10px, -4.5px) scale(1)");
}
