//! Overlay visibility, drag, and content state.
//!
//! [`OverlayStateMachine`] owns the single [`OverlayState`] of a page
//! context. Every transition is synchronous and total, and returns the
//! [`SurfaceCommand`](crate::surface::SurfaceCommand)s the caller must
//! apply to bring the surface in line.

mod machine;

#[cfg(test)]
mod tests;

pub use machine::OverlayStateMachine;

use peek_common::OverlayPosition;
use serde::Serialize;

use crate::embed::EmbedSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// The overlay as the user sees it. Only the state machine mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayState {
    visibility: Visibility,
    drag_phase: DragPhase,
    position: OverlayPosition,
    content: Option<EmbedSource>,
}

impl OverlayState {
    fn new(position: OverlayPosition) -> Self {
        Self {
            visibility: Visibility::Hidden,
            drag_phase: DragPhase::Idle,
            position,
            content: None,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag_phase
    }

    pub fn position(&self) -> OverlayPosition {
        self.position
    }

    pub fn content(&self) -> Option<&EmbedSource> {
        self.content.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_phase == DragPhase::Dragging
    }

    /// A drag can only be in progress while the panel is shown.
    pub fn is_consistent(&self) -> bool {
        !self.is_dragging() || self.is_visible()
    }
}
