use peek_common::{OverlayPosition, Point, Size};
use tracing::debug;

use crate::control::FrameMessage;
use crate::drag::{self, DragSession};
use crate::embed::EmbedSource;
use crate::surface::SurfaceCommand;

use super::{DragPhase, OverlayState, Visibility};

/// Transitions over the overlay's three states: hidden, visible and idle,
/// visible and dragging.
#[derive(Debug, Clone)]
pub struct OverlayStateMachine {
    state: OverlayState,
    session: Option<DragSession>,
    /// A frame element exists on the surface, possibly neutralized.
    frame_attached: bool,
}

impl OverlayStateMachine {
    /// Hidden, no content, at `initial`.
    pub fn new(initial: OverlayPosition) -> Self {
        Self {
            state: OverlayState::new(initial),
            session: None,
            frame_attached: false,
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Replace the content. Visibility and drag phase are left alone.
    pub fn load_content(&mut self, source: EmbedSource) -> Vec<SurfaceCommand> {
        let mut cmds = Vec::with_capacity(2);
        if self.frame_attached {
            cmds.push(SurfaceCommand::TeardownFrame);
        }
        cmds.push(SurfaceCommand::AttachFrame(source.clone()));

        debug!(url = %source.resource_url(), "content loaded");
        self.state.content = Some(source);
        self.frame_attached = true;
        cmds
    }

    /// Hidden goes to visible and idle; visible goes to hidden, ending any
    /// drag first.
    pub fn toggle_visibility(&mut self) -> Vec<SurfaceCommand> {
        match self.state.visibility {
            Visibility::Hidden => {
                self.state.visibility = Visibility::Visible;
                vec![SurfaceCommand::Show]
            }
            Visibility::Visible => {
                let mut cmds = self.end_drag();
                self.state.visibility = Visibility::Hidden;
                cmds.push(SurfaceCommand::Hide);
                cmds
            }
        }
    }

    /// End any drag, blank the frame so playback stops, drop the content,
    /// and hide.
    pub fn close(&mut self) -> Vec<SurfaceCommand> {
        let mut cmds = self.end_drag();
        if self.frame_attached && self.state.content.is_some() {
            cmds.push(SurfaceCommand::NeutralizeFrame);
        }
        self.state.content = None;
        if self.state.visibility == Visibility::Visible {
            self.state.visibility = Visibility::Hidden;
            cmds.push(SurfaceCommand::Hide);
        }
        cmds
    }

    /// Begin dragging from the handle. Only valid while visible and idle.
    pub fn start_drag(&mut self, pointer: Point) -> Vec<SurfaceCommand> {
        if self.state.visibility != Visibility::Visible
            || self.state.drag_phase != DragPhase::Idle
        {
            return Vec::new();
        }
        self.session = Some(drag::begin(pointer, self.state.position));
        self.state.drag_phase = DragPhase::Dragging;
        vec![SurfaceCommand::SetInputCapture(true)]
    }

    /// Follow the pointer. Ignored unless dragging.
    pub fn update_drag(
        &mut self,
        pointer: Point,
        viewport: Size,
        panel: Size,
    ) -> Vec<SurfaceCommand> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        let position = drag::update(session, pointer, viewport, panel);
        self.state.position = position;
        vec![SurfaceCommand::MoveTo(position)]
    }

    /// Stop dragging. Calling it again is a no-op.
    pub fn end_drag(&mut self) -> Vec<SurfaceCommand> {
        let Some(session) = self.session.take() else {
            return Vec::new();
        };
        drag::end(session);
        self.state.drag_phase = DragPhase::Idle;
        vec![SurfaceCommand::SetInputCapture(false)]
    }

    /// Ask the embedded player to play or pause. Nothing happens without
    /// content.
    pub fn toggle_playback(&mut self) -> Vec<SurfaceCommand> {
        if self.state.content.is_none() {
            return Vec::new();
        }
        vec![SurfaceCommand::PostToFrame(FrameMessage::playback_toggle())]
    }

    /// Whether a drag session exists exactly when the phase says dragging.
    #[cfg(test)]
    pub(crate) fn session_matches_phase(&self) -> bool {
        self.session.is_some() == self.state.is_dragging()
    }
}
