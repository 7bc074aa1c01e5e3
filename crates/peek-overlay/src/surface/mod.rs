//! Rendering surface for the overlay panel.
//!
//! The state machine never touches a surface directly: it emits
//! [`SurfaceCommand`]s and the runtime applies them here.

mod command;
mod headless;

pub use command::SurfaceCommand;
pub use headless::HeadlessSurface;

use peek_common::{OverlayPosition, PlaybackSignalError, Size};

use crate::embed::EmbedSource;

/// The panel element and everything it contains: the drag handle, the
/// close button, the embedded frame, and the transparent input-capture
/// layer shown during drags.
pub trait OverlaySurface {
    fn set_visible(&mut self, visible: bool);

    /// Place the panel's top-left corner, in viewport pixels.
    fn move_to(&mut self, position: OverlayPosition);

    /// Create the embedded frame for `source`.
    fn attach_frame(&mut self, source: &EmbedSource);

    /// Remove the current frame entirely.
    fn teardown_frame(&mut self);

    /// Point the frame at nothing, which stops any playback.
    fn neutralize_frame(&mut self);

    /// Show or hide the layer that keeps the frame from swallowing pointer
    /// moves while dragging.
    fn set_input_capture(&mut self, active: bool);

    /// Post a string message into the embedded frame.
    fn post_to_frame(&mut self, message: &str) -> Result<(), PlaybackSignalError>;

    fn panel_size(&self) -> Size;

    /// Tooltip of the close button.
    fn set_close_title(&mut self, title: &str);
}
