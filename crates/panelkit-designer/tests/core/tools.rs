use panelkit_core::constants::CLASH_MESSAGE;
use panelkit_designer::{
    CanvasRect, DeleteTool, DesignerError, ListTool, MoveTool, NotificationLevel, PlaceTool,
    SelectTool, ToolController, ToolKind, ToolResponse,
};

/// Panel origin sits at screen (100, 200): panel (x, y) is screen (100 + x, 200 - y).
fn controller() -> ToolController {
    let mut controller = ToolController::new(CanvasRect::new(0.0, 0.0, 400.0, 300.0));
    controller.new_panel(200.0, 100.0);
    controller
}

fn place(controller: &mut ToolController, size: &str, sx: f64, sy: f64) {
    controller
        .start_tool(Box::new(PlaceTool::new(size)))
        .unwrap();
    controller.pointer_move(sx, sy).unwrap();
    let outcome = controller.click(sx, sy).unwrap();
    assert_eq!(outcome.response, ToolResponse::Finish);
}

#[test]
fn test_place_tool_rejects_clashing_click() {
    let mut controller = controller();
    controller
        .start_tool(Box::new(PlaceTool::new("10")))
        .unwrap();
    assert_eq!(controller.active_tool(), Some("place"));

    controller.pointer_move(105.0, 150.0).unwrap();
    let outcome = controller.click(105.0, 150.0).unwrap();
    assert_eq!(outcome.response, ToolResponse::Continue);
    let notification = outcome.notification.unwrap();
    assert_eq!(notification.level, NotificationLevel::Warning);
    assert_eq!(notification.message, CLASH_MESSAGE);
    assert_eq!(controller.active_tool(), Some("place"));

    controller.pointer_move(150.0, 150.0).unwrap();
    let outcome = controller.click(150.0, 150.0).unwrap();
    assert_eq!(outcome.response, ToolResponse::Finish);
    assert!(outcome.notification.is_none());
    assert_eq!(controller.active_tool(), None);

    let cutout = controller.model().cutouts().next().unwrap();
    assert!(!cutout.is_zone_visible());
    assert!(!cutout.has_clash());
    assert_eq!(controller.model().cutout_count(), 1);
}

#[test]
fn test_place_tool_creates_cutout_on_first_move() {
    let mut controller = controller();
    controller
        .start_tool(Box::new(PlaceTool::new("10")))
        .unwrap();
    assert_eq!(controller.model().cutout_count(), 0);

    let outcome = controller.click(150.0, 150.0).unwrap();
    assert_eq!(outcome.response, ToolResponse::Continue);

    controller.pointer_move(150.0, 150.0).unwrap();
    controller.pointer_move(160.0, 150.0).unwrap();
    assert_eq!(controller.model().cutout_count(), 1);
    let cutout = controller.model().cutouts().next().unwrap();
    assert!(cutout.is_zone_visible());
    assert_eq!(cutout.position().x, 60.0);
}

#[test]
fn test_stopping_place_tool_discards_pending_cutout() {
    let mut controller = controller();
    controller
        .start_tool(Box::new(PlaceTool::new("10")))
        .unwrap();
    controller.pointer_move(150.0, 150.0).unwrap();
    assert_eq!(controller.model().cutout_count(), 1);

    let changes = controller.stop_tool().unwrap();
    assert_eq!(changes.removed().count(), 1);
    assert_eq!(controller.model().cutout_count(), 0);
}

#[test]
fn test_size_change_resizes_pending_cutout() {
    let mut controller = controller();
    controller
        .start_tool(Box::new(PlaceTool::new("10")))
        .unwrap();
    controller.pointer_move(130.0, 150.0).unwrap();
    assert!(!controller.model().cutouts().next().unwrap().has_clash());

    // Keep-out radius 40 now reaches past the left edge.
    controller.set_cutout_size("40").unwrap();
    let cutout = controller.model().cutouts().next().unwrap();
    assert_eq!(cutout.size(), "40");
    assert!(cutout.has_clash());
}

#[test]
fn test_size_change_without_tool_fails() {
    let mut controller = controller();
    assert_eq!(
        controller.set_cutout_size("12"),
        Err(DesignerError::NoActiveTool)
    );
}

#[test]
fn test_place_without_outline_stops_tool() {
    let mut controller = ToolController::new(CanvasRect::new(0.0, 0.0, 400.0, 300.0));
    controller
        .start_tool(Box::new(PlaceTool::new("10")))
        .unwrap();
    assert_eq!(
        controller.pointer_move(150.0, 150.0),
        Err(DesignerError::NoOutline)
    );
    assert_eq!(controller.active_tool(), None);
    assert_eq!(controller.model().cutout_count(), 0);
}

#[test]
fn test_select_tool_toggles() {
    let mut controller = controller();
    place(&mut controller, "10", 150.0, 150.0);
    controller.start_tool(Box::new(SelectTool::new())).unwrap();

    controller.click(151.0, 150.0).unwrap();
    assert_eq!(controller.model().selection().len(), 1);
    controller.click(151.0, 150.0).unwrap();
    assert!(controller.model().selection().is_empty());

    // Misses leave the tool running.
    let outcome = controller.click(10.0, 10.0).unwrap();
    assert_eq!(outcome.response, ToolResponse::Continue);
    assert_eq!(controller.active_tool(), Some("select"));
}

#[test]
fn test_delete_tool_removes_selection() {
    let mut controller = controller();
    place(&mut controller, "10", 130.0, 150.0);
    place(&mut controller, "10", 250.0, 150.0);
    controller.start_tool(Box::new(SelectTool::new())).unwrap();
    controller.click(130.0, 150.0).unwrap();

    let outcome = controller.start_tool(Box::new(DeleteTool::new())).unwrap();
    assert_eq!(outcome.response, ToolResponse::Finish);
    assert_eq!(outcome.changes.removed().count(), 1);
    assert_eq!(controller.active_tool(), None);
    assert_eq!(controller.model().cutout_count(), 1);
    assert_eq!(
        controller.model().cutouts().next().unwrap().position().x,
        150.0
    );
}

#[test]
fn test_move_tool_without_selection_finishes() {
    let mut controller = controller();
    place(&mut controller, "10", 150.0, 150.0);
    let outcome = controller.start_tool(Box::new(MoveTool::new())).unwrap();
    assert_eq!(outcome.response, ToolResponse::Finish);
    assert_eq!(controller.active_tool(), None);
}

#[test]
fn test_move_tool_drags_first_selected() {
    let mut controller = controller();
    place(&mut controller, "10", 150.0, 150.0);
    controller.start_tool(Box::new(SelectTool::new())).unwrap();
    controller.click(150.0, 150.0).unwrap();

    controller.start_tool(Box::new(MoveTool::new())).unwrap();
    assert!(controller.model().cutouts().next().unwrap().is_zone_visible());

    controller.pointer_move(200.0, 160.0).unwrap();
    let outcome = controller.click(200.0, 160.0).unwrap();
    assert_eq!(outcome.response, ToolResponse::Finish);

    let cutout = controller.model().cutouts().next().unwrap();
    assert_eq!(cutout.position().x, 100.0);
    assert_eq!(cutout.position().y, 40.0);
    assert!(!cutout.is_selected());
    assert!(!cutout.is_zone_visible());
}

#[test]
fn test_list_tool_reports_json() {
    let mut controller = controller();
    place(&mut controller, "10", 150.0, 150.0);
    let outcome = controller.start_tool(Box::new(ListTool::new())).unwrap();
    let notification = outcome.notification.unwrap();
    assert_eq!(notification.level, NotificationLevel::Info);
    assert_eq!(
        notification.message,
        r#"{"id":"cutout-1","placement":{"x":50.0,"y":50.0},"size":"10"}"#
    );
}

#[test]
fn test_starting_tool_stops_previous() {
    let mut controller = controller();
    controller
        .start_tool(ToolKind::Place { size: "10".into() }.into_tool())
        .unwrap();
    controller.pointer_move(150.0, 150.0).unwrap();

    let outcome = controller.start_tool(ToolKind::Select.into_tool()).unwrap();
    assert_eq!(outcome.changes.removed().count(), 1);
    assert_eq!(controller.active_tool(), Some("select"));
    assert_eq!(controller.model().cutout_count(), 0);
}

#[test]
fn test_events_without_tool_are_ignored() {
    let mut controller = controller();
    let outcome = controller.click(150.0, 150.0).unwrap();
    assert!(outcome.changes.is_empty());
    assert!(controller.pointer_move(10.0, 10.0).unwrap().changes.is_empty());
    assert!(controller.stop_tool().unwrap().is_empty());
}

#[test]
fn test_new_panel_stops_place_tool() {
    let mut controller = controller();
    controller
        .start_tool(Box::new(PlaceTool::new("10")))
        .unwrap();
    controller.pointer_move(150.0, 150.0).unwrap();
    let pending = controller.model().cutouts().next().unwrap().id();

    let changes = controller.new_panel(300.0, 200.0);
    assert!(changes.scene_cleared);
    assert!(changes.removed().any(|id| id == pending));
    assert_eq!(controller.active_tool(), None);
    assert_eq!(controller.model().cutout_count(), 0);

    // Pointer input after the new panel is a no-op, not a stale-handle error.
    let outcome = controller.pointer_move(150.0, 150.0).unwrap();
    assert!(outcome.changes.is_empty());

    controller
        .start_tool(Box::new(PlaceTool::new("10")))
        .unwrap();
    controller.pointer_move(200.0, 150.0).unwrap();
    assert_eq!(controller.model().cutout_count(), 1);
}

#[test]
fn test_new_panel_stops_move_tool_without_error() {
    let mut controller = controller();
    place(&mut controller, "10", 150.0, 150.0);
    controller
        .start_tool(Box::new(SelectTool::new()))
        .unwrap();
    controller.click(150.0, 150.0).unwrap();
    controller.start_tool(Box::new(MoveTool::new())).unwrap();
    assert_eq!(controller.active_tool(), Some("move"));

    controller.new_panel(200.0, 100.0);
    assert_eq!(controller.active_tool(), None);
    assert!(controller.click(150.0, 150.0).unwrap().changes.is_empty());
}
