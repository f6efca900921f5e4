use panelkit_designer::{CanvasRect, Cutout, CutoutId, PlacementModel, Point};

fn model() -> PlacementModel {
    let mut model = PlacementModel::new(CanvasRect::new(0.0, 0.0, 400.0, 300.0));
    model.add_outline(200.0, 100.0);
    model
}

fn place(model: &mut PlacementModel, size: &str, x: f64, y: f64) -> CutoutId {
    let id = model.add_cutout(Cutout::new(size));
    model.move_cutout_to(id, Point::new(x, y)).unwrap();
    id
}

/// Screen position of a panel-local point in the test canvas.
fn screen(model: &PlacementModel, x: f64, y: f64) -> (f64, f64) {
    model.panel_to_screen(Point::new(x, y))
}

#[test]
fn test_hit_inside_radius() {
    let mut model = model();
    let a = place(&mut model, "10", 50.0, 50.0);
    let (sx, sy) = screen(&model, 56.0, 50.0);
    assert_eq!(model.cutout_from_point(sx, sy), Some(a));
}

#[test]
fn test_miss_outside_radius() {
    let mut model = model();
    place(&mut model, "10", 50.0, 50.0);
    // Hit radius is 0.7 x 10 = 7.
    let (sx, sy) = screen(&model, 57.5, 50.0);
    assert_eq!(model.cutout_from_point(sx, sy), None);
}

#[test]
fn test_nearest_cutout_wins() {
    let mut model = model();
    let _a = place(&mut model, "10", 20.0, 50.0);
    let b = place(&mut model, "10", 30.0, 50.0);
    let (sx, sy) = screen(&model, 26.0, 50.0);
    assert_eq!(model.cutout_from_point(sx, sy), Some(b));
}

#[test]
fn test_tie_goes_to_first_inserted() {
    let mut model = model();
    let a = place(&mut model, "10", 20.0, 50.0);
    let _b = place(&mut model, "10", 30.0, 50.0);
    let (sx, sy) = screen(&model, 25.0, 50.0);
    assert_eq!(model.cutout_from_point(sx, sy), Some(a));
}

#[test]
fn test_larger_cutout_reaches_farther() {
    let mut model = model();
    let big = place(&mut model, "20", 100.0, 50.0);
    let (sx, sy) = screen(&model, 113.0, 50.0);
    assert_eq!(model.cutout_from_point(sx, sy), Some(big));
}

#[test]
fn test_empty_model_has_no_hit() {
    let model = model();
    assert_eq!(model.cutout_from_point(150.0, 150.0), None);
}

#[test]
fn test_removed_cutout_is_not_hit() {
    let mut model = model();
    let a = place(&mut model, "10", 50.0, 50.0);
    model.remove_cutout(a).unwrap();
    let (sx, sy) = screen(&model, 50.0, 50.0);
    assert_eq!(model.cutout_from_point(sx, sy), None);
}
