use panelkit_designer::{
    CanvasRect, Change, Cutout, CutoutId, DesignerError, PlacementModel, Point,
};

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

fn clash(model: &PlacementModel, id: CutoutId) -> bool {
    model.cutout(id).unwrap().has_clash()
}

fn zone(model: &PlacementModel, id: CutoutId) -> bool {
    model.cutout(id).unwrap().is_zone_visible()
}

#[test]
fn test_two_overlapping_cutouts_clash() {
    let mut model = model();
    // Screen (120, 180) and (121, 180) are panel (20, 20) and (21, 20).
    let a = model.add_cutout(Cutout::new("10"));
    model.move_cutout(a, 120.0, 180.0).unwrap();
    assert!(!clash(&model, a));

    let b = model.add_cutout(Cutout::new("10"));
    model.move_cutout(b, 121.0, 180.0).unwrap();

    assert!(clash(&model, a));
    assert!(clash(&model, b));
    assert!(zone(&model, a));
    assert_eq!(model.cutout(a).unwrap().position(), Point::new(20.0, 20.0));
    assert_eq!(model.cutout(b).unwrap().position(), Point::new(21.0, 20.0));
}

#[test]
fn test_moving_away_clears_peer() {
    let mut model = model();
    let a = place(&mut model, "10", 20.0, 20.0);
    let b = place(&mut model, "10", 21.0, 20.0);
    assert!(clash(&model, a));

    let changes = model.move_cutout_to(b, Point::new(60.0, 20.0)).unwrap();
    assert!(!clash(&model, a));
    assert!(!zone(&model, a));
    assert!(!clash(&model, b));
    assert_eq!(changes.clash_of(a), Some(false));
    assert!(changes
        .iter()
        .any(|c| *c == Change::ZoneVisibility { id: a, visible: false }));
}

#[test]
fn test_keepout_zones_touching_clash() {
    let mut model = model();
    // Keep-out radii 10 + 10, centers 20 apart.
    let a = place(&mut model, "10", 30.0, 50.0);
    let b = place(&mut model, "10", 50.0, 50.0);
    assert!(clash(&model, a));
    assert!(clash(&model, b));
}

#[test]
fn test_peer_recompute_sees_only_moved_cutout() {
    let mut model = model();
    let a = place(&mut model, "10", 30.0, 50.0);
    let b = place(&mut model, "10", 45.0, 50.0);
    assert!(clash(&model, a));
    assert!(clash(&model, b));

    // Placing c recomputes a and b against c only.
    let c = place(&mut model, "10", 150.0, 50.0);
    assert!(!clash(&model, a));
    assert!(!clash(&model, b));
    assert!(!clash(&model, c));
}

#[test]
fn test_boundary_clash_does_not_touch_peers() {
    let mut model = model();
    let a = place(&mut model, "10", 100.0, 50.0);
    let b = place(&mut model, "10", 5.0, 50.0);
    assert!(clash(&model, b));
    assert!(!clash(&model, a));
}

#[test]
fn test_remove_leaves_flags_as_they_were() {
    let mut model = model();
    let a = place(&mut model, "10", 20.0, 20.0);
    let b = place(&mut model, "10", 21.0, 20.0);
    let removed = model.remove_cutout(b).unwrap();
    assert_eq!(removed.id(), b);
    assert!(clash(&model, a));
    assert_eq!(model.cutout_count(), 1);
}

#[test]
fn test_repeated_identical_moves_are_stable() {
    let mut model = model();
    let a = place(&mut model, "10", 60.0, 30.0);
    let b = model.add_cutout(Cutout::new("10"));
    let (sx, sy) = model.panel_to_screen(Point::new(65.0, 30.0));

    model.move_cutout(b, sx, sy).unwrap();
    let first = (model.cutout(b).unwrap().position(), clash(&model, a), clash(&model, b));
    for _ in 0..5 {
        model.move_cutout(b, sx, sy).unwrap();
    }
    let last = (model.cutout(b).unwrap().position(), clash(&model, a), clash(&model, b));
    assert_eq!(first, last);
    assert_eq!(first.0, Point::new(65.0, 30.0));
}

#[test]
fn test_selection_is_idempotent() {
    let mut model = model();
    let a = place(&mut model, "10", 20.0, 20.0);
    let b = place(&mut model, "10", 80.0, 20.0);

    model.select_cutout(b, true).unwrap();
    model.select_cutout(a, true).unwrap();
    let again = model.select_cutout(a, true).unwrap();
    assert!(again.is_empty());
    assert_eq!(model.selection(), vec![a, b]);

    model.select_cutout(a, false).unwrap();
    assert_eq!(model.selection(), vec![b]);
}

#[test]
fn test_selection_does_not_change_clash() {
    let mut model = model();
    let a = place(&mut model, "10", 5.0, 50.0);
    model.select_cutout(a, true).unwrap();
    assert!(clash(&model, a));
    assert!(model.cutout(a).unwrap().is_selected());
}

#[test]
fn test_cutout_info_reports_every_cutout() {
    let mut model = model();
    let a = place(&mut model, "10", 20.0, 20.0);
    place(&mut model, "6.5", 80.0, 40.0);
    model.select_cutout(a, true).unwrap();

    let info = model.cutout_info();
    assert_eq!(info.len(), 2);
    assert_eq!(info[0].id, a.to_string());
    assert_eq!(info[0].placement.x, 20.0);
    assert_eq!(info[1].size, "6.5");
    assert_eq!(info[1].placement.y, 40.0);
}

#[test]
fn test_new_outline_discards_cutouts() {
    let mut model = model();
    let a = place(&mut model, "10", 20.0, 20.0);
    model.add_outline(300.0, 200.0);
    assert_eq!(model.cutout_count(), 0);
    assert!(model.cutout_info().is_empty());
    assert_eq!(
        model.select_cutout(a, true),
        Err(DesignerError::unknown_cutout(a.value()))
    );

    let b = model.add_cutout(Cutout::new("10"));
    assert_ne!(a, b);
    assert_eq!(model.outline().map(|o| o.width), Some(300.0));
}

#[test]
fn test_resize_grows_keepout_into_peer() {
    let mut model = model();
    let a = place(&mut model, "10", 40.0, 50.0);
    let b = place(&mut model, "10", 70.0, 50.0);
    assert!(!clash(&model, a));

    model.resize_cutout(b, "20").unwrap();
    assert_eq!(model.cutout(b).unwrap().keepout_diameter(), 40.0);
    assert!(clash(&model, a));
    assert!(clash(&model, b));
}

#[test]
fn test_show_zone_reports_only_real_changes() {
    let mut model = model();
    let a = model.add_cutout(Cutout::new("10"));
    assert!(model.show_zone(a, true).unwrap().is_empty());
    let hidden = model.show_zone(a, false).unwrap();
    assert_eq!(hidden.len(), 1);
    assert!(!zone(&model, a));
}
