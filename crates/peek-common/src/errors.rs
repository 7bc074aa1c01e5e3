use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure to turn a pasted snippet into a playable source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmbedError {
    #[error("invalid embed code: {0}")]
    InvalidEmbedCode(String),
}

/// Failures of the cross-context command protocol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// No overlay runtime answered the liveness probe.
    #[error("overlay runtime unreachable")]
    Unreachable,

    #[error("failed to install overlay runtime: {0}")]
    InjectionFailure(String),

    #[error("command not acknowledged: {0}")]
    DeliveryFailure(String),
}

/// A play/pause signal the embedded frame did not accept.
///
/// Only ever logged; the overlay state is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackSignalError {
    #[error("no frame attached")]
    NoFrame,

    #[error("playback signal rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PeekError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Embed(#[from] EmbedError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Playback(#[from] PlaybackSignalError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
