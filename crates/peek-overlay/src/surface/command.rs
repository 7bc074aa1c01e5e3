use peek_common::{OverlayPosition, PlaybackSignalError};

use crate::control::FrameMessage;
use crate::embed::EmbedSource;

use super::OverlaySurface;

/// One instruction from the state machine to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCommand {
    Show,
    Hide,
    MoveTo(OverlayPosition),
    AttachFrame(EmbedSource),
    TeardownFrame,
    NeutralizeFrame,
    SetInputCapture(bool),
    PostToFrame(FrameMessage),
}

impl SurfaceCommand {
    /// Apply this command to `surface`.
    ///
    /// Only a frame post can fail.
    pub fn apply(&self, surface: &mut dyn OverlaySurface) -> Result<(), PlaybackSignalError> {
        match self {
            Self::Show => surface.set_visible(true),
            Self::Hide => surface.set_visible(false),
            Self::MoveTo(pos) => surface.move_to(*pos),
            Self::AttachFrame(source) => surface.attach_frame(source),
            Self::TeardownFrame => surface.teardown_frame(),
            Self::NeutralizeFrame => surface.neutralize_frame(),
            Self::SetInputCapture(active) => surface.set_input_capture(*active),
            Self::PostToFrame(msg) => return surface.post_to_frame(&msg.to_json()),
        }
        Ok(())
    }

    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Hide => "hide",
            Self::MoveTo(_) => "move_to",
            Self::AttachFrame(_) => "attach_frame",
            Self::TeardownFrame => "teardown_frame",
            Self::NeutralizeFrame => "neutralize_frame",
            Self::SetInputCapture(_) => "set_input_capture",
            Self::PostToFrame(_) => "post_to_frame",
        }
    }
}
