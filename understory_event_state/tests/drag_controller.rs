// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `understory_event_state::controller`.
//!
//! These drive a [`DragController`] with scripted pointer sequences and check
//! the exact notifications a host receives.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size};
use understory_dock::{Corner, CornerId};
use understory_event_state::controller::{DragConfig, DragController, DragHost, Release};
use understory_event_state::effects::{AmbientEffects, AmbientStyle};
use understory_event_state::gesture::GesturePhase;
use understory_event_state::pointer::{ContactId, PointerButton, PointerInput};

#[derive(Clone, Debug, PartialEq)]
enum Note {
    Position(Point),
    Dragging(bool),
    Started,
    Ended,
    Snapped(CornerId),
    Released(Release),
}

struct Host {
    position: Point,
    extent: Size,
    viewport: Size,
    notes: Vec<Note>,
}

impl Host {
    fn at(position: Point) -> Self {
        Self {
            position,
            extent: Size::new(320.0, 180.0),
            viewport: Size::new(1000.0, 800.0),
            notes: Vec::new(),
        }
    }

    fn positions(&self) -> Vec<Point> {
        self.notes
            .iter()
            .filter_map(|n| match n {
                Note::Position(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    fn releases(&self) -> Vec<Release> {
        self.notes
            .iter()
            .filter_map(|n| match n {
                Note::Released(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    fn count(&self, note: &Note) -> usize {
        self.notes.iter().filter(|n| *n == note).count()
    }
}

impl DragHost for Host {
    fn position(&self) -> Point {
        self.position
    }

    fn extent(&self) -> Size {
        self.extent
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
        self.notes.push(Note::Position(position));
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.notes.push(Note::Dragging(dragging));
    }

    fn drag_started(&mut self) {
        self.notes.push(Note::Started);
    }

    fn drag_ended(&mut self) {
        self.notes.push(Note::Ended);
    }

    fn snapped(&mut self, corner: Corner) {
        self.notes.push(Note::Snapped(corner.id));
    }

    fn released(&mut self, release: Release) {
        self.notes.push(Note::Released(release));
    }
}

#[derive(Clone, Default)]
struct Ambient(Rc<RefCell<Vec<&'static str>>>);

impl AmbientEffects for Ambient {
    fn apply(&mut self, _style: &AmbientStyle) {
        self.0.borrow_mut().push("apply");
    }

    fn clear(&mut self) {
        self.0.borrow_mut().push("clear");
    }
}

impl Ambient {
    fn log(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }
}

fn controller() -> (DragController<Ambient>, Ambient) {
    let ambient = Ambient::default();
    let mut drag = DragController::new(DragConfig::default(), ambient.clone());
    drag.start();
    (drag, ambient)
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn jitter_within_threshold_is_a_click() {
    let (mut drag, ambient) = controller();
    let mut host = Host::at(p(200.0, 200.0));

    assert!(drag.handle(&PointerInput::mouse_down(p(250.0, 250.0), 1_000), &mut host));
    assert!(drag.handle(&PointerInput::mouse_move(p(252.0, 251.0), 1_010), &mut host));
    assert!(drag.handle(&PointerInput::mouse_move(p(253.0, 254.0), 1_020), &mut host));
    assert!(drag.handle(&PointerInput::mouse_up(p(253.0, 254.0), 1_100), &mut host));

    assert!(host.positions().is_empty(), "no position updates for a click");
    let releases = host.releases();
    assert_eq!(releases.len(), 1);
    assert!(!releases[0].was_dragging);
    assert!(!releases[0].moved);
    assert!(releases[0].is_click);
    assert_eq!(host.count(&Note::Started), 0);
    assert!(ambient.log().is_empty());
    assert_eq!(drag.phase(), GesturePhase::Idle);
}

#[test]
fn long_press_is_not_a_click() {
    let (mut drag, _) = controller();
    let mut host = Host::at(p(0.0, 0.0));

    drag.handle(&PointerInput::mouse_down(p(20.0, 20.0), 0), &mut host);
    drag.handle(&PointerInput::mouse_up(p(20.0, 20.0), 650), &mut host);

    let release = host.releases()[0];
    assert!(!release.was_dragging);
    assert!(!release.is_click);
    assert_eq!(release.elapsed_ms, 650);
}

#[test]
fn drag_start_precedes_first_position_exactly_once() {
    let (mut drag, ambient) = controller();
    let mut host = Host::at(p(300.0, 300.0));

    drag.handle(&PointerInput::mouse_down(p(400.0, 400.0), 0), &mut host);
    drag.handle(&PointerInput::mouse_move(p(410.0, 400.0), 16), &mut host);
    drag.handle(&PointerInput::mouse_move(p(430.0, 410.0), 32), &mut host);
    drag.handle(&PointerInput::mouse_move(p(440.0, 420.0), 48), &mut host);

    assert_eq!(
        &host.notes[..3],
        &[
            Note::Started,
            Note::Dragging(true),
            Note::Position(p(310.0, 300.0)),
        ]
    );
    assert_eq!(host.count(&Note::Started), 1);
    assert_eq!(
        host.positions(),
        vec![p(310.0, 300.0), p(330.0, 310.0), p(340.0, 320.0)]
    );
    assert!(drag.holds_ambient_effects());

    drag.handle(&PointerInput::mouse_up(p(440.0, 420.0), 64), &mut host);
    let release = host.releases()[0];
    assert!(release.was_dragging);
    assert!(release.moved);
    assert!(!release.is_click);
    assert_eq!(ambient.log(), ["apply", "clear"]);
    assert!(!drag.holds_ambient_effects());
}

#[test]
fn release_near_corner_snaps_exactly() {
    let (mut drag, _) = controller();
    let mut host = Host::at(p(400.0, 300.0));

    drag.handle(&PointerInput::mouse_down(p(500.0, 350.0), 0), &mut host);
    // Origin follows to (650, 30): about 28px from the top-right anchor.
    drag.handle(&PointerInput::mouse_move(p(750.0, 80.0), 16), &mut host);
    drag.handle(&PointerInput::mouse_up(p(750.0, 80.0), 32), &mut host);

    assert_eq!(host.position, p(670.0, 10.0));
    let tail: Vec<Note> = host.notes[host.notes.len() - 5..].to_vec();
    assert_eq!(tail[0], Note::Position(p(670.0, 10.0)));
    assert_eq!(tail[1], Note::Snapped(CornerId::TopRight));
    assert_eq!(tail[2], Note::Dragging(false));
    assert_eq!(tail[3], Note::Ended);
    assert!(matches!(tail[4], Note::Released(r) if r.was_dragging));
}

#[test]
fn release_far_from_corners_keeps_dragged_position() {
    let (mut drag, _) = controller();
    let mut host = Host::at(p(100.0, 100.0));

    drag.handle(&PointerInput::mouse_down(p(150.0, 150.0), 0), &mut host);
    drag.handle(&PointerInput::mouse_move(p(390.0, 350.0), 16), &mut host);
    drag.handle(&PointerInput::mouse_up(p(390.0, 350.0), 32), &mut host);

    assert_eq!(host.position, p(340.0, 300.0));
    assert!(!host.notes.iter().any(|n| matches!(n, Note::Snapped(_))));
}

#[test]
fn drag_is_clamped_to_viewport() {
    let (mut drag, _) = controller();
    let mut host = Host::at(p(300.0, 300.0));

    drag.handle(&PointerInput::mouse_down(p(310.0, 310.0), 0), &mut host);
    drag.handle(&PointerInput::mouse_move(p(-500.0, 2_000.0), 16), &mut host);

    assert_eq!(host.position, p(0.0, 620.0));
}

#[test]
fn snapping_can_be_turned_off() {
    let config = DragConfig {
        snap_to_corners: false,
        ..DragConfig::default()
    };
    let mut drag = DragController::new(config, ());
    drag.start();
    let mut host = Host::at(p(600.0, 100.0));

    drag.handle(&PointerInput::mouse_down(p(700.0, 150.0), 0), &mut host);
    drag.handle(&PointerInput::mouse_move(p(750.0, 80.0), 16), &mut host);
    drag.handle(&PointerInput::mouse_up(p(750.0, 80.0), 32), &mut host);

    assert_eq!(host.position, p(650.0, 30.0));
}

#[test]
fn disable_mid_drag_cancels_without_drag_end() {
    let (mut drag, ambient) = controller();
    let mut host = Host::at(p(100.0, 100.0));

    drag.handle(&PointerInput::mouse_down(p(120.0, 120.0), 0), &mut host);
    drag.handle(&PointerInput::mouse_move(p(170.0, 170.0), 16), &mut host);
    assert_eq!(host.position, p(150.0, 150.0));
    assert_eq!(drag.phase(), GesturePhase::Dragging);

    drag.set_disabled(true, &mut host);

    assert_eq!(host.notes.last(), Some(&Note::Dragging(false)));
    assert_eq!(host.count(&Note::Ended), 0);
    assert!(host.releases().is_empty());
    assert_eq!(ambient.log(), ["apply", "clear"]);
    assert_eq!(drag.phase(), GesturePhase::Idle);

    // The release that eventually arrives belongs to a discarded contact.
    assert!(!drag.handle(&PointerInput::mouse_up(p(170.0, 170.0), 40), &mut host));
    assert!(host.releases().is_empty());
}

#[test]
fn disabled_blocks_presses_until_cleared() {
    let (mut drag, _) = controller();
    let mut host = Host::at(p(0.0, 0.0));

    drag.set_disabled(true, &mut host);
    assert!(!drag.handle(&PointerInput::mouse_down(p(5.0, 5.0), 0), &mut host));

    // Rapid toggling must not leave the engine wedged.
    for _ in 0..3 {
        drag.set_disabled(false, &mut host);
        drag.set_disabled(true, &mut host);
    }
    drag.set_disabled(false, &mut host);

    assert!(drag.handle(&PointerInput::mouse_down(p(5.0, 5.0), 10), &mut host));
    assert_eq!(drag.phase(), GesturePhase::Armed);
}

#[test]
fn disabling_an_armed_press_reports_nothing() {
    let (mut drag, _) = controller();
    let mut host = Host::at(p(0.0, 0.0));

    drag.handle(&PointerInput::mouse_down(p(5.0, 5.0), 0), &mut host);
    drag.set_disabled(true, &mut host);

    assert!(host.notes.is_empty());
}

#[test]
fn presses_on_controls_and_secondary_buttons_pass_through() {
    let (mut drag, _) = controller();
    let mut host = Host::at(p(0.0, 0.0));

    let on_button = PointerInput::mouse_down(p(5.0, 5.0), 0).on_control();
    assert!(!drag.handle(&on_button, &mut host));
    assert!(!drag.handle(&PointerInput::mouse_up(p(5.0, 5.0), 50), &mut host));

    let right = PointerInput::mouse_down(p(5.0, 5.0), 100).with_button(PointerButton::Secondary);
    assert!(!drag.handle(&right, &mut host));

    assert!(host.notes.is_empty(), "control presses are never armed or clicked");
    assert_eq!(drag.phase(), GesturePhase::Idle);
}

#[test]
fn stale_moves_after_release_are_rejected() {
    let (mut drag, _) = controller();
    let mut host = Host::at(p(50.0, 50.0));

    drag.handle(&PointerInput::mouse_down(p(60.0, 60.0), 0), &mut host);
    drag.handle(&PointerInput::mouse_move(p(200.0, 200.0), 16), &mut host);
    drag.handle(&PointerInput::mouse_up(p(200.0, 200.0), 32), &mut host);
    let before = host.notes.len();

    assert!(!drag.handle(&PointerInput::mouse_move(p(300.0, 300.0), 48), &mut host));
    assert!(!drag.handle(&PointerInput::mouse_up(p(300.0, 300.0), 64), &mut host));
    assert_eq!(host.notes.len(), before);
}

#[test]
fn second_press_while_tracking_is_ignored() {
    let (mut drag, _) = controller();
    let mut host = Host::at(p(50.0, 50.0));

    drag.handle(&PointerInput::mouse_down(p(60.0, 60.0), 0), &mut host);
    assert!(!drag.handle(&PointerInput::touch_start(1, 1, p(90.0, 90.0), 5), &mut host));
    assert_eq!(drag.gesture().map(|g| g.contact), Some(ContactId::Mouse));
}

#[test]
fn touch_drag_matches_mouse_drag() {
    let run = |inputs: &[PointerInput]| {
        let (mut drag, _) = controller();
        let mut host = Host::at(p(300.0, 300.0));
        for input in inputs {
            drag.handle(input, &mut host);
        }
        host.notes
            .into_iter()
            .map(|n| match n {
                Note::Released(mut r) => {
                    r.contact = ContactId::Mouse;
                    Note::Released(r)
                }
                other => other,
            })
            .collect::<Vec<_>>()
    };

    let mouse = run(&[
        PointerInput::mouse_down(p(350.0, 350.0), 0),
        PointerInput::mouse_move(p(380.0, 360.0), 16),
        PointerInput::mouse_up(p(380.0, 360.0), 32),
    ]);
    let touch = run(&[
        PointerInput::touch_start(9, 1, p(350.0, 350.0), 0),
        PointerInput::touch_move(9, 1, p(380.0, 360.0), 16),
        PointerInput::touch_end(9, 0, p(380.0, 360.0), 32),
    ]);
    assert_eq!(mouse, touch);
}

#[test]
fn extra_touch_contacts_are_ignored() {
    let (mut drag, _) = controller();
    let mut host = Host::at(p(300.0, 300.0));

    assert!(!drag.handle(&PointerInput::touch_start(1, 2, p(10.0, 10.0), 0), &mut host));
    assert_eq!(drag.phase(), GesturePhase::Idle);

    assert!(drag.handle(&PointerInput::touch_start(1, 1, p(350.0, 350.0), 10), &mut host));
    // Second finger lands; moves while two are down are ignored.
    assert!(!drag.handle(&PointerInput::touch_start(2, 2, p(500.0, 500.0), 20), &mut host));
    assert!(!drag.handle(&PointerInput::touch_move(1, 2, p(450.0, 450.0), 30), &mut host));
    assert!(host.positions().is_empty());
    // Second finger lifts; it is not the tracked contact.
    assert!(!drag.handle(&PointerInput::touch_end(2, 1, p(500.0, 500.0), 40), &mut host));
    // Tracking resumes with the first finger.
    assert!(drag.handle(&PointerInput::touch_move(1, 1, p(360.0, 350.0), 50), &mut host));
    assert_eq!(host.positions(), vec![p(310.0, 300.0)]);
}

#[test]
fn touch_cancel_resets_but_allows_new_presses() {
    let (mut drag, ambient) = controller();
    let mut host = Host::at(p(300.0, 300.0));

    drag.handle(&PointerInput::touch_start(4, 1, p(350.0, 350.0), 0), &mut host);
    drag.handle(&PointerInput::touch_move(4, 1, p(400.0, 350.0), 16), &mut host);
    assert!(drag.handle(&PointerInput::touch_cancel(4, p(400.0, 350.0), 20), &mut host));

    assert_eq!(host.notes.last(), Some(&Note::Dragging(false)));
    assert_eq!(ambient.log(), ["apply", "clear"]);
    assert!(drag.handle(&PointerInput::touch_start(5, 1, p(350.0, 350.0), 30), &mut host));
}

#[test]
fn invalid_viewport_substitutes_last_good_position() {
    let (mut drag, _) = controller();
    let mut host = Host::at(p(100.0, 100.0));

    drag.handle(&PointerInput::mouse_down(p(100.0, 100.0), 0), &mut host);
    drag.handle(&PointerInput::mouse_move(p(150.0, 100.0), 16), &mut host);
    assert_eq!(host.position, p(150.0, 100.0));

    host.viewport = Size::new(f64::NAN, 800.0);
    drag.handle(&PointerInput::mouse_move(p(200.0, 100.0), 32), &mut host);
    assert_eq!(host.positions().last(), Some(&p(150.0, 100.0)));

    host.viewport = Size::new(1000.0, 800.0);
    drag.handle(&PointerInput::mouse_move(p(220.0, 100.0), 48), &mut host);
    assert_eq!(host.position, p(220.0, 100.0));
}

#[test]
fn stopped_controller_ignores_input_and_clears_effects() {
    let (mut drag, ambient) = controller();
    let mut host = Host::at(p(100.0, 100.0));

    drag.handle(&PointerInput::mouse_down(p(100.0, 100.0), 0), &mut host);
    drag.handle(&PointerInput::mouse_move(p(150.0, 100.0), 16), &mut host);
    drag.stop();
    drag.stop();

    assert!(!drag.is_listening());
    assert_eq!(ambient.log(), ["apply", "clear"]);
    assert!(!drag.handle(&PointerInput::mouse_down(p(100.0, 100.0), 30), &mut host));

    drag.start();
    assert!(drag.handle(&PointerInput::mouse_down(p(100.0, 100.0), 40), &mut host));
}

#[test]
fn dropping_mid_drag_clears_effects() {
    let (mut drag, ambient) = controller();
    let mut host = Host::at(p(100.0, 100.0));

    drag.handle(&PointerInput::mouse_down(p(100.0, 100.0), 0), &mut host);
    drag.handle(&PointerInput::mouse_move(p(150.0, 100.0), 16), &mut host);
    drop(drag);

    assert_eq!(ambient.log(), ["apply", "clear"]);
}

#[test]
fn release_snaps_from_host_corrected_position() {
    let (mut drag, _) = controller();
    let mut host = Host::at(p(300.0, 300.0));

    drag.handle(&PointerInput::mouse_down(p(400.0, 350.0), 0), &mut host);
    drag.handle(&PointerInput::mouse_move(p(450.0, 300.0), 16), &mut host);
    assert_eq!(host.position, p(350.0, 250.0));

    // The host moves the subject on its own between moves.
    host.position = p(640.0, 40.0);
    drag.handle(&PointerInput::mouse_up(p(450.0, 300.0), 32), &mut host);

    assert_eq!(host.position, p(670.0, 10.0));
    assert_eq!(host.count(&Note::Snapped(CornerId::TopRight)), 1);
}
