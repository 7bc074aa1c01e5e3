//! Command bridge timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timeouts and delays of the probe / install / send protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Bounded wait for the liveness probe reply.
    pub probe_timeout_ms: u64,
    /// Pause after installing the runtime so it can register its listeners.
    pub settle_delay_ms: u64,
    /// Bounded wait for the load command acknowledgment.
    pub delivery_timeout_ms: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            probe_timeout_ms: 500,
            settle_delay_ms: 100,
            delivery_timeout_ms: 5000,
        }
    }
}

impl BridgeConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn delivery_timeout(&self) -> Duration {
        Duration::from_millis(self.delivery_timeout_ms)
    }
}
