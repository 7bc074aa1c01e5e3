use peek_common::{OverlayPosition, Point, Size};

use super::*;
use crate::control::FrameMessage;
use crate::embed::{self, EmbedSource};
use crate::surface::SurfaceCommand;

const VIEWPORT: Size = Size::new(1280, 720);
const PANEL: Size = Size::new(480, 300);

fn source(id: &str) -> EmbedSource {
    embed::parse(&format!(
        r#"<iframe src="https://example.com/embed/{id}"></iframe>"#
    ))
    .unwrap()
}

fn machine() -> OverlayStateMachine {
    OverlayStateMachine::new(OverlayPosition::new(20, 20))
}

#[test]
fn starts_hidden_without_content() {
    let m = machine();
    assert_eq!(m.state().visibility(), Visibility::Hidden);
    assert_eq!(m.state().drag_phase(), DragPhase::Idle);
    assert_eq!(m.state().position(), OverlayPosition::new(20, 20));
    assert!(m.state().content().is_none());
}

#[test]
fn toggle_shows_then_hides() {
    let mut m = machine();
    assert_eq!(m.toggle_visibility(), vec![SurfaceCommand::Show]);
    assert!(m.state().is_visible());
    assert!(!m.state().is_dragging());

    assert_eq!(m.toggle_visibility(), vec![SurfaceCommand::Hide]);
    assert_eq!(m.state().visibility(), Visibility::Hidden);
}

#[test]
fn toggle_while_dragging_ends_drag_first() {
    let mut m = machine();
    m.toggle_visibility();
    m.start_drag(Point::new(30, 30));
    let cmds = m.toggle_visibility();
    assert_eq!(
        cmds,
        vec![SurfaceCommand::SetInputCapture(false), SurfaceCommand::Hide]
    );
    assert_eq!(m.state().drag_phase(), DragPhase::Idle);
    assert_eq!(m.state().visibility(), Visibility::Hidden);
}

#[test]
fn load_content_attaches_frame() {
    let mut m = machine();
    let src = source("abc");
    assert_eq!(
        m.load_content(src.clone()),
        vec![SurfaceCommand::AttachFrame(src.clone())]
    );
    assert_eq!(m.state().content(), Some(&src));
    assert_eq!(m.state().visibility(), Visibility::Hidden);
}

#[test]
fn second_load_tears_down_first_frame() {
    let mut m = machine();
    m.load_content(source("a"));
    let b = source("b");
    assert_eq!(
        m.load_content(b.clone()),
        vec![SurfaceCommand::TeardownFrame, SurfaceCommand::AttachFrame(b)]
    );
}

#[test]
fn load_content_keeps_drag_phase() {
    let mut m = machine();
    m.toggle_visibility();
    m.start_drag(Point::new(0, 0));
    m.load_content(source("abc"));
    assert!(m.state().is_dragging());
}

#[test]
fn close_neutralizes_and_hides() {
    let mut m = machine();
    m.load_content(source("abc"));
    m.toggle_visibility();
    m.start_drag(Point::new(0, 0));

    let cmds = m.close();
    assert_eq!(
        cmds,
        vec![
            SurfaceCommand::SetInputCapture(false),
            SurfaceCommand::NeutralizeFrame,
            SurfaceCommand::Hide,
        ]
    );
    assert!(m.state().content().is_none());
    assert_eq!(m.state().visibility(), Visibility::Hidden);
    assert_eq!(m.state().drag_phase(), DragPhase::Idle);
}

#[test]
fn close_when_hidden_and_empty_is_noop() {
    let mut m = machine();
    assert!(m.close().is_empty());
}

#[test]
fn close_then_toggle_playback_posts_nothing() {
    let mut m = machine();
    m.load_content(source("abc"));
    m.toggle_visibility();
    m.close();
    assert!(m.toggle_playback().is_empty());
}

#[test]
fn toggle_playback_without_content_is_noop() {
    let mut m = machine();
    m.toggle_visibility();
    assert!(m.toggle_playback().is_empty());
}

#[test]
fn toggle_playback_posts_control_message() {
    let mut m = machine();
    m.load_content(source("abc"));
    assert_eq!(
        m.toggle_playback(),
        vec![SurfaceCommand::PostToFrame(FrameMessage::playback_toggle())]
    );
}

#[test]
fn start_drag_requires_visible() {
    let mut m = machine();
    assert!(m.start_drag(Point::new(0, 0)).is_empty());
    assert!(!m.state().is_dragging());
}

#[test]
fn start_drag_twice_keeps_first_session() {
    let mut m = machine();
    m.toggle_visibility();
    assert_eq!(
        m.start_drag(Point::new(0, 0)),
        vec![SurfaceCommand::SetInputCapture(true)]
    );
    assert!(m.start_drag(Point::new(100, 100)).is_empty());

    m.update_drag(Point::new(10, 10), VIEWPORT, PANEL);
    assert_eq!(m.state().position(), OverlayPosition::new(30, 30));
}

#[test]
fn update_drag_moves_and_clamps() {
    let mut m = machine();
    m.toggle_visibility();
    m.start_drag(Point::new(25, 25));

    let cmds = m.update_drag(Point::new(125, 75), VIEWPORT, PANEL);
    assert_eq!(cmds, vec![SurfaceCommand::MoveTo(OverlayPosition::new(120, 70))]);

    m.update_drag(Point::new(10_000, -10_000), VIEWPORT, PANEL);
    assert_eq!(m.state().position(), OverlayPosition::new(800, 0));
}

#[test]
fn update_drag_when_idle_is_ignored() {
    let mut m = machine();
    m.toggle_visibility();
    assert!(m.update_drag(Point::new(500, 500), VIEWPORT, PANEL).is_empty());
    assert_eq!(m.state().position(), OverlayPosition::new(20, 20));
}

#[test]
fn end_drag_twice_equals_once() {
    let mut m = machine();
    m.toggle_visibility();
    m.start_drag(Point::new(0, 0));

    assert_eq!(m.end_drag(), vec![SurfaceCommand::SetInputCapture(false)]);
    let after_once = m.state().clone();
    assert!(m.end_drag().is_empty());
    assert_eq!(m.state(), &after_once);
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Load,
    Toggle,
    Close,
    Start,
    Update,
    End,
    Play,
}

const OPS: [Op; 7] = [
    Op::Load,
    Op::Toggle,
    Op::Close,
    Op::Start,
    Op::Update,
    Op::End,
    Op::Play,
];

fn run(m: &mut OverlayStateMachine, op: Op) {
    match op {
        Op::Load => {
            m.load_content(source("x"));
        }
        Op::Toggle => {
            m.toggle_visibility();
        }
        Op::Close => {
            m.close();
        }
        Op::Start => {
            m.start_drag(Point::new(50, 50));
        }
        Op::Update => {
            m.update_drag(Point::new(i32::MAX, i32::MIN), VIEWPORT, PANEL);
        }
        Op::End => {
            m.end_drag();
        }
        Op::Play => {
            let had_content = m.state().content().is_some();
            let cmds = m.toggle_playback();
            assert_eq!(cmds.is_empty(), !had_content);
        }
    }
}

#[test]
fn invariants_hold_for_every_sequence() {
    const DEPTH: u32 = 5;
    let total = OPS.len().pow(DEPTH);

    for mut n in 0..total {
        let mut m = machine();
        let mut trace = Vec::new();
        for _ in 0..DEPTH {
            let op = OPS[n % OPS.len()];
            n /= OPS.len();
            trace.push(op);
            run(&mut m, op);

            assert!(m.state().is_consistent(), "dragging while hidden after {trace:?}");
            assert!(m.session_matches_phase(), "session mismatch after {trace:?}");
            assert!(
                m.state().position().is_within(VIEWPORT, PANEL),
                "out of bounds after {trace:?}"
            );
        }
    }
}
