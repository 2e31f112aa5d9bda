#![allow(clippy::float_cmp)]

use super::*;
use crate::store::{SequentialIds, Store};

// =============================================================
// Helpers
// =============================================================

fn engine() -> Engine {
    engine_with(&Config::default())
}

fn engine_with(config: &Config) -> Engine {
    let store = SharedStore::new(Store::with_ids(SequentialIds::default()));
    Engine::with_colors(store, config, ColorPicker::seeded(1))
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn drag(engine: &mut Engine, from: Point, to: Point) -> Vec<Action> {
    engine.on_pointer_down(from);
    engine.on_pointer_move(to);
    engine.on_pointer_up(to)
}

// =============================================================
// Drawing
// =============================================================

#[test]
fn pointer_down_on_empty_canvas_starts_drawing() {
    let mut engine = engine();
    assert!(engine.on_pointer_down(pt(10.0, 10.0)).is_empty());
    assert_eq!(engine.input(), &InputState::Drawing { anchor: pt(10.0, 10.0) });
    assert!(engine.store().snapshot().is_drawing());
}

#[test]
fn drag_commits_tablet_at_normalised_top_left() {
    let mut engine = engine();
    let actions = drag(&mut engine, pt(60.0, 40.0), pt(10.0, 10.0));
    assert_eq!(actions, vec![Action::TabletCreated("tablet-1".into()), Action::RenderNeeded]);

    let state = engine.store().snapshot();
    let part = &state.tablets[0].parts[0];
    assert_eq!((part.x, part.y, part.width, part.height), (10.0, 10.0, 50.0, 30.0));
    assert_eq!(engine.input(), &InputState::Idle);
}

#[test]
fn small_drag_is_discarded() {
    let mut engine = engine();
    let actions = drag(&mut engine, pt(0.0, 0.0), pt(30.0, 30.0));
    assert_eq!(actions, vec![Action::DrawDiscarded, Action::RenderNeeded]);
    assert!(engine.store().snapshot().tablets.is_empty());
}

#[test]
fn move_below_gate_requests_no_render() {
    let mut engine = engine();
    engine.on_pointer_down(pt(0.0, 0.0));
    assert!(engine.on_pointer_move(pt(20.0, 20.0)).is_empty());
    assert_eq!(engine.on_pointer_move(pt(50.0, 30.0)), vec![Action::RenderNeeded]);
}

#[test]
fn shrinking_below_gate_keeps_last_accepted_size() {
    let mut engine = engine();
    engine.on_pointer_down(pt(0.0, 0.0));
    engine.on_pointer_move(pt(80.0, 40.0));
    engine.on_pointer_move(pt(10.0, 10.0));
    let current = engine.store().snapshot().current_tablet().cloned().unwrap();
    assert_eq!((current.original_width, current.original_height), (80.0, 40.0));
}

#[test]
fn commit_matches_last_shown_draft_after_shrinking_below_gate() {
    let mut engine = engine();
    engine.on_pointer_down(pt(100.0, 100.0));
    engine.on_pointer_move(pt(40.0, 40.0));
    engine.on_pointer_move(pt(90.0, 90.0));
    let draft = engine.scene().draft.unwrap();

    let actions = engine.on_pointer_up(pt(90.0, 90.0));
    assert_eq!(actions[0], Action::TabletCreated("tablet-1".into()));

    let state = engine.store().snapshot();
    let part = &state.tablets[0].parts[0];
    assert_eq!((part.x, part.y, part.width, part.height), (draft.x, draft.y, draft.width, draft.height));
    assert_eq!((part.x, part.y, part.width, part.height), (40.0, 40.0, 60.0, 60.0));
}

#[test]
fn release_without_move_is_discarded() {
    let mut engine = engine();
    engine.on_pointer_down(pt(5.0, 5.0));
    assert_eq!(engine.on_pointer_up(pt(5.0, 5.0)), vec![Action::DrawDiscarded, Action::RenderNeeded]);
}

#[test]
fn cancel_discards_draft() {
    let mut engine = engine();
    engine.on_pointer_down(pt(0.0, 0.0));
    engine.on_pointer_move(pt(100.0, 100.0));
    assert_eq!(engine.on_pointer_cancel(), vec![Action::DrawDiscarded, Action::RenderNeeded]);
    let state = engine.store().snapshot();
    assert!(state.tablets.is_empty());
    assert!(!state.is_drawing());
}

#[test]
fn idle_events_do_nothing() {
    let mut engine = engine();
    assert!(engine.on_pointer_move(pt(1.0, 1.0)).is_empty());
    assert!(engine.on_pointer_up(pt(1.0, 1.0)).is_empty());
    assert!(engine.on_pointer_cancel().is_empty());
}

#[test]
fn drawn_tablets_get_colours_from_the_picker() {
    let mut engine = engine();
    drag(&mut engine, pt(0.0, 0.0), pt(50.0, 30.0));
    let mut expected = ColorPicker::seeded(1);
    assert_eq!(engine.store().snapshot().tablets[0].color, expected.next_color());
}

// =============================================================
// Part drags
// =============================================================

#[test]
fn pointer_down_on_part_starts_part_drag() {
    let mut engine = engine();
    drag(&mut engine, pt(0.0, 0.0), pt(100.0, 40.0));
    engine.on_pointer_down(pt(10.0, 10.0));
    assert!(matches!(engine.input(), InputState::DraggingPart { part_id, .. } if part_id == "tablet-1-part-0"));
    assert!(!engine.store().snapshot().is_drawing());
}

#[test]
fn part_drag_previews_then_moves_by_pointer_delta() {
    let mut engine = engine();
    drag(&mut engine, pt(0.0, 0.0), pt(100.0, 40.0));

    engine.on_pointer_down(pt(10.0, 10.0));
    let preview = engine.on_pointer_move(pt(30.0, 15.0));
    assert_eq!(
        preview,
        vec![Action::PartDragPreview {
            tablet_id: "tablet-1".into(),
            part_id: "tablet-1-part-0".into(),
            x: 20.0,
            y: 5.0,
        }]
    );
    let part = &engine.store().snapshot().tablets[0].parts[0];
    assert_eq!((part.x, part.y), (0.0, 0.0));

    let actions = engine.on_pointer_up(pt(60.0, 70.0));
    assert_eq!(
        actions,
        vec![
            Action::PartMoved { tablet_id: "tablet-1".into(), part_id: "tablet-1-part-0".into() },
            Action::RenderNeeded,
        ]
    );
    let part = &engine.store().snapshot().tablets[0].parts[0];
    assert_eq!((part.x, part.y), (50.0, 60.0));
}

#[test]
fn pointer_down_on_part_closes_unfinished_draw() {
    let mut engine = engine();
    drag(&mut engine, pt(0.0, 0.0), pt(100.0, 40.0));
    engine.on_pointer_down(pt(200.0, 200.0));
    engine.on_pointer_move(pt(300.0, 300.0));

    engine.on_pointer_down(pt(10.0, 10.0));
    assert!(matches!(engine.input(), InputState::DraggingPart { .. }));
    engine.on_pointer_up(pt(10.0, 10.0));

    let state = engine.store().snapshot();
    assert!(!state.is_drawing());
    assert!(engine.scene().draft.is_none());
    assert_eq!(state.tablets.len(), 1);
}

#[test]
fn pointer_down_on_empty_canvas_replaces_unfinished_draw() {
    let mut engine = engine();
    engine.on_pointer_down(pt(200.0, 200.0));
    engine.on_pointer_move(pt(300.0, 300.0));
    engine.on_pointer_down(pt(0.0, 0.0));
    assert_eq!(engine.input(), &InputState::Drawing { anchor: pt(0.0, 0.0) });
    let current = engine.store().snapshot().current_tablet().cloned().unwrap();
    assert_eq!((current.start_x, current.start_y, current.original_width), (0.0, 0.0, 0.0));
}

#[test]
fn cancelled_part_drag_does_not_move() {
    let mut engine = engine();
    drag(&mut engine, pt(0.0, 0.0), pt(100.0, 40.0));
    engine.on_pointer_down(pt(10.0, 10.0));
    engine.on_pointer_move(pt(90.0, 90.0));
    engine.on_pointer_cancel();
    let part = &engine.store().snapshot().tablets[0].parts[0];
    assert_eq!((part.x, part.y), (0.0, 0.0));
}

#[test]
fn part_drag_racing_a_split_is_silently_dropped() {
    let mut engine = engine();
    drag(&mut engine, pt(0.0, 0.0), pt(100.0, 40.0));
    engine.on_pointer_down(pt(10.0, 10.0));
    engine.store().dispatch(Transition::SplitTablets(SplitLine::vertical(50.0)));
    let before = engine.store().snapshot();
    assert_eq!(engine.on_pointer_up(pt(30.0, 30.0)), vec![Action::RenderNeeded]);
    assert_eq!(engine.store().snapshot(), before);
}

// =============================================================
// Taps
// =============================================================

#[test]
fn tap_sets_vertical_line_and_requests_split() {
    let mut engine = engine();
    let actions = engine.on_tap(pt(42.0, 7.0));
    assert_eq!(actions, vec![Action::RenderNeeded, Action::ScheduleSplit(SplitLine::vertical(42.0))]);
    assert_eq!(engine.store().snapshot().split_line, Some(SplitLine::vertical(42.0)));
}

#[test]
fn tap_uses_configured_orientation() {
    let config = Config { split_orientation: Orientation::Horizontal, ..Config::default() };
    let mut engine = engine_with(&config);
    let actions = engine.on_tap(pt(42.0, 7.0));
    assert_eq!(actions[1], Action::ScheduleSplit(SplitLine::horizontal(7.0)));
}

#[test]
fn tap_does_not_split_by_itself() {
    let mut engine = engine();
    drag(&mut engine, pt(0.0, 0.0), pt(100.0, 40.0));
    engine.on_tap(pt(50.0, 10.0));
    assert_eq!(engine.store().snapshot().part_count(), 1);
}

// =============================================================
// Scene
// =============================================================

#[test]
fn scene_shows_draft_and_line() {
    let mut engine = engine();
    engine.on_tap(pt(5.0, 5.0));
    engine.on_pointer_down(pt(0.0, 0.0));
    engine.on_pointer_move(pt(60.0, 30.0));
    let scene = engine.scene();
    assert!(scene.draft.is_some());
    assert_eq!(scene.split_line, Some(SplitLine::vertical(5.0)));
}
