//! End-to-end drag lifecycle tests for the split container.

use std::cell::RefCell;
use std::rc::Rc;

use panekit_core::event::{PointerButton, PointerEvent, PointerEventKind};
use panekit_core::geometry::{Axis, Rect};
use panekit_core::pointer_surface::{CursorIcon, DocumentSurface, ListenerKind, SharedSurface};
use panekit_widgets::split::{
    MeasuredBounds, SizeValue, Split, SplitConfig, SplitIgnoredReason, SplitOutcome, WatchProps,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    /// Listener count observed when `on_drag_start` ran.
    Start { listeners: usize },
    Move,
    /// Listener count and cursor observed when `on_drag_end` ran.
    End { listeners: usize, cursor: CursorIcon },
    Update(SizeValue),
}

struct Harness {
    split: Split,
    doc: Rc<RefCell<DocumentSurface>>,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl Harness {
    fn new(config: SplitConfig) -> Self {
        let doc = DocumentSurface::shared();
        let surface: SharedSurface = doc.clone();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let on_start = (Rc::clone(&calls), Rc::clone(&doc));
        let on_move = Rc::clone(&calls);
        let on_end = (Rc::clone(&calls), Rc::clone(&doc));
        let on_update = Rc::clone(&calls);

        let split = Split::new(config, surface)
            .on_drag_start(move |_| {
                let listeners = on_start.1.borrow().listener_count();
                on_start.0.borrow_mut().push(Call::Start { listeners });
            })
            .on_drag_move(move |_| on_move.borrow_mut().push(Call::Move))
            .on_drag_end(move |_| {
                let doc = on_end.1.borrow();
                on_end.0.borrow_mut().push(Call::End {
                    listeners: doc.listener_count(),
                    cursor: doc.cursor(),
                });
            })
            .on_update_size(move |size| on_update.borrow_mut().push(Call::Update(size)));

        Self { split, doc, calls }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| pred(call)).count()
    }

    fn updates(&self) -> Vec<SizeValue> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Update(size) => Some(*size),
                _ => None,
            })
            .collect()
    }
}

fn container(width: f64, height: f64) -> Rect {
    Rect::new(0.0, 0.0, width, height)
}

// ═══════════════════════════════════════════════════════════════════════
// Resolver scenarios through the full widget
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn scenario_a_fraction_follows_pointer() {
    let mut h = Harness::new(SplitConfig::new().resize_trigger_size(0.0));
    let area = container(400.0, 300.0);
    let bounds = h.split.measure(area);

    let down = h.split.pointer_down(&PointerEvent::down(200.0, 10.0), &bounds);
    assert_eq!(down.outcome, SplitOutcome::DragStarted);
    assert_eq!(h.split.session().map(|s| s.offset()), Some(0.0));

    let moved = h.split.pointer_move(&PointerEvent::moved(300.0, 10.0), &bounds);
    assert_eq!(moved.resolved, Some(SizeValue::Fraction(0.75)));
    assert_eq!(moved.committed, Some(SizeValue::Fraction(0.75)));
    assert_eq!(h.split.size(), SizeValue::Fraction(0.75));
}

#[test]
fn scenario_b_bounds_clamp_to_max() {
    let mut h = Harness::new(
        SplitConfig::new()
            .resize_trigger_size(0.0)
            .min(0.2)
            .max(0.6),
    );
    let bounds = h.split.measure(container(400.0, 300.0));
    h.split.pointer_down(&PointerEvent::down(200.0, 10.0), &bounds);
    h.split.pointer_move(&PointerEvent::moved(360.0, 10.0), &bounds);
    assert_eq!(h.split.size(), SizeValue::Fraction(0.6));

    h.split.pointer_move(&PointerEvent::moved(-50.0, 10.0), &bounds);
    assert_eq!(h.split.size(), SizeValue::Fraction(0.2));
}

#[test]
fn scenario_c_pixel_unit_is_preserved() {
    let mut h = Harness::new(
        SplitConfig::new()
            .resize_trigger_size(0.0)
            .default_size(SizeValue::Pixels(100.0))
            .max(0.8),
    );
    let bounds = h.split.measure(container(500.0, 300.0));
    assert_eq!(bounds.trigger, Some(Rect::new(100.0, 0.0, 0.0, 300.0)));

    h.split.pointer_down(&PointerEvent::down(100.0, 10.0), &bounds);
    h.split.pointer_move(&PointerEvent::moved(450.0, 10.0), &bounds);
    assert_eq!(h.split.size(), SizeValue::Pixels(400.0));
    assert_eq!(
        h.updates(),
        vec![SizeValue::Pixels(100.0), SizeValue::Pixels(400.0)]
    );
}

#[test]
fn scenario_d_disabled_split_ignores_pointer_down() {
    let mut h = Harness::new(SplitConfig::new().disabled(true));
    let bounds = h.split.measure(container(400.0, 300.0));
    assert_eq!(bounds.trigger, None);

    let dispatch = h.split.pointer_down(&PointerEvent::down(200.0, 10.0), &bounds);
    assert_eq!(
        dispatch.outcome,
        SplitOutcome::Ignored(SplitIgnoredReason::Disabled)
    );
    assert!(!h.split.is_dragging());
    assert_eq!(h.doc.borrow().listener_count(), 0);
    assert_eq!(h.doc.borrow().cursor(), CursorIcon::Default);
    assert!(h.calls().is_empty());
}

#[test]
fn scenario_e_teardown_mid_drag_releases_surface() {
    let h = Harness::new(SplitConfig::new());
    let Harness {
        mut split,
        doc,
        calls,
    } = h;
    let bounds = split.measure(container(403.0, 300.0));
    split.pointer_down(&PointerEvent::down(201.0, 10.0), &bounds);
    split.pointer_move(&PointerEvent::moved(250.0, 10.0), &bounds);
    assert_eq!(doc.borrow().listener_count(), 2);
    assert_eq!(doc.borrow().cursor(), CursorIcon::ColResize);

    drop(split);

    assert_eq!(doc.borrow().listener_count(), 0);
    assert_eq!(doc.borrow().cursor(), CursorIcon::Default);
    assert!(
        !calls.borrow().iter().any(|call| matches!(call, Call::End { .. })),
        "teardown must not report a drag end"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Callback order and counts
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn eager_drag_reports_every_resolve() {
    let mut h = Harness::new(SplitConfig::new().resize_trigger_size(0.0));
    let bounds = h.split.measure(container(400.0, 300.0));

    h.split.pointer_down(&PointerEvent::down(200.0, 10.0), &bounds);
    for x in [220.0, 240.0, 300.0] {
        h.split.pointer_move(&PointerEvent::moved(x, 10.0), &bounds);
    }
    h.split.pointer_up(&PointerEvent::up(300.0, 10.0));

    assert_eq!(
        h.calls(),
        vec![
            Call::Start { listeners: 0 },
            Call::Update(SizeValue::Fraction(0.5)),
            Call::Update(SizeValue::Fraction(0.55)),
            Call::Move,
            Call::Update(SizeValue::Fraction(0.6)),
            Call::Move,
            Call::Update(SizeValue::Fraction(0.75)),
            Call::Move,
            Call::End {
                listeners: 0,
                cursor: CursorIcon::Default,
            },
        ]
    );
}

#[test]
fn lazy_drag_commits_once_on_release() {
    let mut h = Harness::new(SplitConfig::new().resize_trigger_size(0.0).lazy(true));
    let area = container(400.0, 300.0);
    let bounds = h.split.measure(area);

    h.split.pointer_down(&PointerEvent::down(200.0, 10.0), &bounds);
    for x in [100.0, 150.0, 120.0] {
        let dispatch = h.split.pointer_move(&PointerEvent::moved(x, 10.0), &bounds);
        assert_eq!(dispatch.committed, None);
    }
    assert_eq!(h.split.size(), SizeValue::Fraction(0.5));
    assert_eq!(
        h.split.layout(area).indicator,
        Some(Rect::new(120.0, 0.0, 1.0, 300.0))
    );

    let up = h.split.pointer_up(&PointerEvent::up(120.0, 10.0));
    assert_eq!(up.committed, Some(SizeValue::Fraction(0.3)));
    assert_eq!(h.split.size(), SizeValue::Fraction(0.3));
    assert_eq!(h.split.layout(area).indicator, None);

    assert_eq!(h.updates(), vec![SizeValue::Fraction(0.3)]);
    assert_eq!(h.count(|c| matches!(c, Call::Move)), 3);
    assert_eq!(h.count(|c| matches!(c, Call::Start { .. })), 1);
    assert_eq!(h.count(|c| matches!(c, Call::End { .. })), 1);
    let calls = h.calls();
    assert_eq!(calls[calls.len() - 2], Call::Update(SizeValue::Fraction(0.3)));
}

#[test]
fn lazy_release_without_move_commits_snap_value() {
    let mut h = Harness::new(SplitConfig::new().resize_trigger_size(0.0).lazy(true));
    let bounds = h.split.measure(container(400.0, 300.0));

    let down = h.split.pointer_down(&PointerEvent::down(100.0, 10.0), &bounds);
    assert_eq!(down.resolved, Some(SizeValue::Fraction(0.25)));
    assert_eq!(down.committed, None);

    let up = h.split.pointer_up(&PointerEvent::up(100.0, 10.0));
    assert_eq!(up.committed, Some(SizeValue::Fraction(0.25)));
    assert_eq!(h.split.size(), SizeValue::Fraction(0.25));
    assert_eq!(
        h.calls(),
        vec![
            Call::Start { listeners: 0 },
            Call::Update(SizeValue::Fraction(0.25)),
            Call::End {
                listeners: 0,
                cursor: CursorIcon::Default,
            },
        ]
    );
}

#[test]
fn lazy_cancel_discards_pending_value() {
    let mut h = Harness::new(SplitConfig::new().resize_trigger_size(0.0).lazy(true));
    let bounds = h.split.measure(container(400.0, 300.0));
    h.split.pointer_down(&PointerEvent::down(200.0, 10.0), &bounds);
    h.split.pointer_move(&PointerEvent::moved(100.0, 10.0), &bounds);

    assert_eq!(h.split.cancel().outcome, SplitOutcome::Canceled);
    assert_eq!(h.split.size(), SizeValue::Fraction(0.5));
    assert!(h.updates().is_empty());
    assert_eq!(h.doc.borrow().listener_count(), 0);
}

// ═══════════════════════════════════════════════════════════════════════
// Session guards
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn second_pointer_down_does_not_stack_listeners() {
    let mut h = Harness::new(SplitConfig::new());
    let bounds = h.split.measure(container(403.0, 300.0));
    h.split.pointer_down(&PointerEvent::down(201.0, 10.0), &bounds);
    let again = h.split.pointer_down(&PointerEvent::down(201.0, 10.0), &bounds);
    assert_eq!(
        again.outcome,
        SplitOutcome::Ignored(SplitIgnoredReason::SessionAlreadyActive)
    );
    assert_eq!(h.doc.borrow().listener_count_of(ListenerKind::PointerMove), 1);
    assert_eq!(h.doc.borrow().listener_count_of(ListenerKind::PointerUp), 1);
}

#[test]
fn events_after_release_are_ignored() {
    let mut h = Harness::new(SplitConfig::new());
    let bounds = h.split.measure(container(403.0, 300.0));
    h.split.pointer_down(&PointerEvent::down(201.0, 10.0), &bounds);
    h.split.pointer_up(&PointerEvent::up(201.0, 10.0));

    let late_move = h.split.pointer_move(&PointerEvent::moved(300.0, 10.0), &bounds);
    let late_up = h.split.pointer_up(&PointerEvent::up(300.0, 10.0));
    assert!(late_move.is_ignored());
    assert_eq!(
        late_up.outcome,
        SplitOutcome::Ignored(SplitIgnoredReason::NoActiveSession)
    );
    assert_eq!(h.count(|c| matches!(c, Call::End { .. })), 1);
}

#[test]
fn any_button_release_ends_the_drag() {
    let mut h = Harness::new(SplitConfig::new());
    let bounds = h.split.measure(container(403.0, 300.0));
    h.split.pointer_down(&PointerEvent::down(201.0, 10.0), &bounds);
    let up = PointerEvent::new(PointerEventKind::Up(PointerButton::Secondary), 201.0, 10.0);
    assert_eq!(h.split.pointer_up(&up).outcome, SplitOutcome::DragEnded);
    assert!(!h.split.is_dragging());
}

#[test]
fn disabling_mid_drag_cancels_without_drag_end() {
    let mut h = Harness::new(SplitConfig::new());
    let bounds = h.split.measure(container(403.0, 300.0));
    h.split.pointer_down(&PointerEvent::down(201.0, 10.0), &bounds);
    h.split.set_disabled(true);
    assert!(!h.split.is_dragging());
    assert_eq!(h.doc.borrow().listener_count(), 0);
    assert_eq!(h.count(|c| matches!(c, Call::End { .. })), 0);
}

#[test]
fn release_while_surface_borrowed_is_retried() {
    let mut h = Harness::new(SplitConfig::new());
    let bounds = h.split.measure(container(403.0, 300.0));
    h.split.pointer_down(&PointerEvent::down(201.0, 10.0), &bounds);

    let held = h.doc.borrow();
    let up = h.split.pointer_up(&PointerEvent::up(201.0, 10.0));
    assert_eq!(up.outcome, SplitOutcome::DragEnded);
    assert!(!h.split.is_dragging());
    assert!(h.split.has_unreleased_grab());
    assert_eq!(held.listener_count(), 2);
    assert!(!h.split.flush_surface());
    drop(held);

    assert!(h.split.flush_surface());
    assert!(!h.split.has_unreleased_grab());
    assert_eq!(h.doc.borrow().listener_count(), 0);
    assert_eq!(h.doc.borrow().cursor(), CursorIcon::Default);
}

#[test]
fn deferred_release_is_flushed_by_next_pointer_down() {
    let mut h = Harness::new(SplitConfig::new());
    let bounds = h.split.measure(container(403.0, 300.0));
    h.split.pointer_down(&PointerEvent::down(201.0, 10.0), &bounds);
    {
        let _held = h.doc.borrow();
        h.split.cancel();
    }

    h.split.pointer_down(&PointerEvent::down(201.0, 10.0), &bounds);
    assert!(!h.split.has_unreleased_grab());
    assert_eq!(h.doc.borrow().listener_count_of(ListenerKind::PointerMove), 1);
    assert_eq!(h.doc.borrow().listener_count_of(ListenerKind::PointerUp), 1);

    h.split.pointer_up(&PointerEvent::up(201.0, 10.0));
    assert_eq!(h.doc.borrow().listener_count(), 0);
}

#[test]
fn pointer_down_while_surface_borrowed_is_ignored() {
    let mut h = Harness::new(SplitConfig::new());
    let bounds = h.split.measure(container(403.0, 300.0));
    let held = h.doc.borrow();

    let down = h.split.pointer_down(&PointerEvent::down(201.0, 10.0), &bounds);
    assert_eq!(
        down.outcome,
        SplitOutcome::Ignored(SplitIgnoredReason::SurfaceBusy)
    );
    assert!(!h.split.is_dragging());
    assert_eq!(held.listener_count(), 0);
    drop(held);
    assert!(h.calls().is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Geometry edge cases
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn vertical_drag_uses_signed_offset() {
    let mut h = Harness::new(SplitConfig::new().direction(Axis::Vertical));
    let area = container(200.0, 403.0);
    let bounds = h.split.measure(area);
    assert_eq!(bounds.trigger, Some(Rect::new(0.0, 200.0, 200.0, 3.0)));

    h.split.pointer_down(&PointerEvent::down(50.0, 201.0), &bounds);
    assert_eq!(h.split.session().map(|s| s.offset()), Some(-1.0));
    assert_eq!(h.doc.borrow().cursor(), CursorIcon::RowResize);
    assert_eq!(h.updates(), vec![SizeValue::Fraction(0.5)]);

    h.split.pointer_move(&PointerEvent::moved(50.0, 301.0), &bounds);
    assert_eq!(h.split.size(), SizeValue::Fraction(0.75));
}

#[test]
fn unavailable_geometry_skips_updates_but_not_moves() {
    let mut h = Harness::new(SplitConfig::new());
    let bounds = MeasuredBounds::unavailable();
    let down = h.split.pointer_down(&PointerEvent::down(10.0, 10.0), &bounds);
    assert_eq!(down.outcome, SplitOutcome::DragStarted);
    assert_eq!(down.resolved, None);

    let moved = h.split.pointer_move(&PointerEvent::moved(20.0, 10.0), &bounds);
    assert_eq!(moved.resolved, None);
    assert!(h.updates().is_empty());
    assert_eq!(h.count(|c| matches!(c, Call::Move)), 1);
    assert_eq!(h.split.size(), SizeValue::Fraction(0.5));
}

#[test]
fn container_shift_mid_drag_is_picked_up() {
    let mut h = Harness::new(SplitConfig::new().resize_trigger_size(0.0));
    let bounds = h.split.measure(container(400.0, 300.0));
    h.split.pointer_down(&PointerEvent::down(200.0, 10.0), &bounds);

    let shifted = MeasuredBounds::new(
        Rect::new(100.0, 0.0, 400.0, 300.0),
        Rect::new(300.0, 0.0, 0.0, 300.0),
    );
    h.split.pointer_move(&PointerEvent::moved(200.0, 10.0), &shifted);
    assert_eq!(h.split.size(), SizeValue::Fraction(0.25));
}

// ═══════════════════════════════════════════════════════════════════════
// Controlled and watched sizes
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn controlled_split_reports_but_waits_for_host() {
    let mut h = Harness::new(SplitConfig::new().resize_trigger_size(0.0).size(0.3));
    let bounds = h.split.measure(container(400.0, 300.0));
    assert_eq!(bounds.trigger, Some(Rect::new(120.0, 0.0, 0.0, 300.0)));

    h.split.pointer_down(&PointerEvent::down(120.0, 10.0), &bounds);
    h.split.pointer_move(&PointerEvent::moved(200.0, 10.0), &bounds);
    assert_eq!(h.updates().last(), Some(&SizeValue::Fraction(0.5)));
    assert_eq!(h.split.size(), SizeValue::Fraction(0.3));

    h.split.set_size(Some(SizeValue::Fraction(0.5)));
    assert_eq!(h.split.size(), SizeValue::Fraction(0.5));
}

#[test]
fn watched_default_during_drag_lands_after_release() {
    let mut h = Harness::new(
        SplitConfig::new()
            .resize_trigger_size(0.0)
            .watch_props(WatchProps::DEFAULT_SIZE),
    );
    let bounds = h.split.measure(container(400.0, 300.0));
    h.split.pointer_down(&PointerEvent::down(200.0, 10.0), &bounds);
    h.split.set_default_size(SizeValue::Fraction(0.2));
    h.split.pointer_move(&PointerEvent::moved(300.0, 10.0), &bounds);
    assert_eq!(h.split.size(), SizeValue::Fraction(0.75));

    h.split.pointer_up(&PointerEvent::up(300.0, 10.0));
    assert_eq!(h.split.size(), SizeValue::Fraction(0.2));
}
