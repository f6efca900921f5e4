use panelkit_designer::{CanvasRect, Outline, Point, Viewport};

fn viewport() -> Viewport {
    let canvas = CanvasRect::new(40.0, 60.0, 400.0, 300.0);
    let mut outline = Outline::new(200.0, 100.0);
    outline.attach(&canvas);
    let mut viewport = Viewport::new(canvas);
    viewport.set_origin(outline.origin_offset());
    viewport
}

#[test]
fn test_panel_origin_on_screen() {
    let viewport = viewport();
    assert_eq!(viewport.origin(), Point::new(100.0, 200.0));
    assert_eq!(viewport.panel_to_screen(Point::new(0.0, 0.0)), (140.0, 260.0));
}

#[test]
fn test_y_axis_points_up() {
    let viewport = viewport();
    let low = viewport.screen_to_panel(150.0, 250.0);
    let high = viewport.screen_to_panel(150.0, 200.0);
    assert!(high.y > low.y);
    assert_eq!(low, Point::new(10.0, 10.0));
}

#[test]
fn test_screen_panel_round_trip() {
    let viewport = viewport();
    let panel = Point::new(37.5, 12.25);
    let (sx, sy) = viewport.panel_to_screen(panel);
    assert_eq!(viewport.screen_to_panel(sx, sy), panel);
}

#[test]
fn test_canvas_offset_is_removed() {
    let viewport = viewport();
    assert_eq!(viewport.screen_to_canvas(40.0, 60.0), Point::new(0.0, 0.0));
}

#[test]
fn test_default_origin_is_canvas_bottom_left() {
    let viewport = Viewport::new(CanvasRect::new(0.0, 0.0, 800.0, 600.0));
    assert_eq!(viewport.origin(), Point::new(0.0, 600.0));
    assert_eq!(viewport.screen_to_panel(0.0, 600.0), Point::new(0.0, 0.0));
}
