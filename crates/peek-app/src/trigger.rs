//! The trigger surface: takes pasted embed markup and drives delivery into
//! the active page.

use peek_bridge::CommandBridge;
use peek_common::{BridgeError, ContextId};
use tokio::sync::Mutex;
use tracing::{error, info};

/// What the user is told when a submission does not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriggerError {
    #[error("Please enter an embed code")]
    EmptyInput,

    #[error("Invalid embed code. Please make sure to paste the complete iframe code.")]
    InvalidEmbed,

    #[error("An error occurred. Please refresh the page and try again.")]
    DeliveryFailed(BridgeError),

    #[error("A previous embed is still being delivered")]
    Busy,
}

pub struct Trigger {
    bridge: CommandBridge,
    target: ContextId,
    in_flight: Mutex<()>,
}

impl Trigger {
    pub fn new(bridge: CommandBridge, target: ContextId) -> Self {
        Self {
            bridge,
            target,
            in_flight: Mutex::new(()),
        }
    }

    /// Validate `markup` and deliver it to the target page.
    ///
    /// A second submission while one is still being delivered is refused.
    pub async fn submit(&self, markup: &str) -> Result<(), TriggerError> {
        let markup = markup.trim();
        if markup.is_empty() {
            return Err(TriggerError::EmptyInput);
        }
        if peek_overlay::embed::parse(markup).is_err() {
            return Err(TriggerError::InvalidEmbed);
        }

        let Ok(_guard) = self.in_flight.try_lock() else {
            return Err(TriggerError::Busy);
        };

        match self.bridge.deliver(self.target, markup).await {
            Ok(()) => {
                info!(context = %self.target, "embed loaded");
                Ok(())
            }
            Err(e) => {
                error!(context = %self.target, error = %e, "embed delivery failed");
                Err(TriggerError::DeliveryFailed(e))
            }
        }
    }
}
