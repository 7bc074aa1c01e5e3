pub mod actions;
pub mod errors;
pub mod protocol;
pub mod types;

pub use actions::OverlayAction;
pub use errors::{BridgeError, ConfigError, EmbedError, PeekError, PlaybackSignalError};
pub use protocol::{BridgeRequest, BridgeResponse, PONG};
pub use types::{ContextId, OverlayPosition, Point, Size};

pub type Result<T> = std::result::Result<T, PeekError>;
