//! Transport seams between the trigger surface and page contexts.

use async_trait::async_trait;
use peek_common::{BridgeRequest, BridgeResponse, ContextId};

use crate::errors::RelayError;

/// Request/response messaging into a page context.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    async fn send_message(
        &self,
        target: ContextId,
        request: BridgeRequest,
    ) -> Result<BridgeResponse, RelayError>;
}

/// Script and stylesheet injection into a page context.
#[async_trait]
pub trait ScriptInjector: Send + Sync {
    /// Run the overlay runtime script in `target`.
    async fn execute_script(&self, target: ContextId) -> Result<(), RelayError>;

    /// Insert the overlay stylesheet into `target`.
    async fn insert_css(&self, target: ContextId) -> Result<(), RelayError>;
}
