use peek_common::ContextId;

/// Transport-level failures. The bridge maps these into
/// [`BridgeError`](peek_common::BridgeError).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// The page exists but nothing in it listens for messages.
    #[error("could not establish connection: receiving end does not exist")]
    NoReceiver,

    /// The page refused the operation.
    #[error("{0}")]
    Rejected(String),

    #[error("no such page context: {0}")]
    Closed(ContextId),
}
