//! The overlay panel: embed parsing, drag geometry, the visibility/drag
//! state machine, rendering surfaces, and the runtime that ties them to a
//! host page.

pub mod control;
pub mod drag;
pub mod embed;
pub mod page;
pub mod runtime;
pub mod state;
pub mod surface;

pub use control::FrameMessage;
pub use embed::EmbedSource;
pub use page::{PageContext, PageError};
pub use runtime::OverlayRuntime;
pub use state::{DragPhase, OverlayState, OverlayStateMachine, Visibility};
pub use surface::{HeadlessSurface, OverlaySurface, SurfaceCommand};
