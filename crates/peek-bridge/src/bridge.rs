//! Probe, install, and send against one page context.

use std::sync::Arc;
use std::time::Duration;

use peek_common::{BridgeError, BridgeRequest, BridgeResponse, ContextId};
use peek_config::schema::BridgeConfig;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::pipeline::DeliveryPipeline;
use crate::transport::{MessageRelay, ScriptInjector};

/// Bounds on each round trip of the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeTiming {
    pub probe_timeout: Duration,
    pub settle_delay: Duration,
    pub delivery_timeout: Duration,
}

impl Default for BridgeTiming {
    fn default() -> Self {
        Self::from(&BridgeConfig::default())
    }
}

impl From<&BridgeConfig> for BridgeTiming {
    fn from(config: &BridgeConfig) -> Self {
        Self {
            probe_timeout: config.probe_timeout(),
            settle_delay: config.settle_delay(),
            delivery_timeout: config.delivery_timeout(),
        }
    }
}

/// Gets a load command to the overlay runtime of a page, installing the
/// runtime first when it is not there yet.
#[derive(Clone)]
pub struct CommandBridge {
    relay: Arc<dyn MessageRelay>,
    injector: Arc<dyn ScriptInjector>,
    timing: BridgeTiming,
}

impl CommandBridge {
    pub fn new(
        relay: Arc<dyn MessageRelay>,
        injector: Arc<dyn ScriptInjector>,
        timing: BridgeTiming,
    ) -> Self {
        Self {
            relay,
            injector,
            timing,
        }
    }

    pub fn timing(&self) -> BridgeTiming {
        self.timing
    }

    /// Liveness probe. Only a literal `"pong"` within the probe timeout
    /// counts as present.
    pub async fn ensure_present(&self, target: ContextId) -> Result<(), BridgeError> {
        let reply = timeout(
            self.timing.probe_timeout,
            self.relay.send_message(target, BridgeRequest::Ping),
        )
        .await;

        match reply {
            Ok(Ok(resp)) if resp.is_pong() => {
                debug!(context = %target, "runtime present");
                Ok(())
            }
            Ok(Ok(resp)) => {
                debug!(context = %target, ?resp, "unexpected probe reply");
                Err(BridgeError::Unreachable)
            }
            Ok(Err(e)) => {
                debug!(context = %target, error = %e, "probe rejected");
                Err(BridgeError::Unreachable)
            }
            Err(_) => {
                debug!(context = %target, "probe timed out");
                Err(BridgeError::Unreachable)
            }
        }
    }

    /// Run the runtime script, insert the stylesheet, then give the runtime
    /// time to register its listeners.
    pub async fn install(&self, target: ContextId) -> Result<(), BridgeError> {
        self.injector
            .execute_script(target)
            .await
            .map_err(|e| BridgeError::InjectionFailure(e.to_string()))?;
        self.injector
            .insert_css(target)
            .await
            .map_err(|e| BridgeError::InjectionFailure(e.to_string()))?;

        sleep(self.timing.settle_delay).await;
        info!(context = %target, "overlay runtime installed");
        Ok(())
    }

    /// Send the load command and wait for a success acknowledgment.
    pub async fn send(&self, target: ContextId, embed_code: &str) -> Result<(), BridgeError> {
        let reply = timeout(
            self.timing.delivery_timeout,
            self.relay
                .send_message(target, BridgeRequest::embed_video(embed_code)),
        )
        .await;

        match reply {
            Ok(Ok(resp)) if resp.is_success() => {
                info!(context = %target, "embed delivered");
                Ok(())
            }
            Ok(Ok(BridgeResponse::Ack {
                error: Some(reason),
                ..
            })) => Err(BridgeError::DeliveryFailure(reason)),
            Ok(Ok(resp)) => Err(BridgeError::DeliveryFailure(format!(
                "unexpected reply: {resp:?}"
            ))),
            Ok(Err(e)) => Err(BridgeError::DeliveryFailure(e.to_string())),
            Err(_) => {
                warn!(context = %target, "embed delivery timed out");
                Err(BridgeError::DeliveryFailure(format!(
                    "no reply within {}ms",
                    self.timing.delivery_timeout.as_millis()
                )))
            }
        }
    }

    /// Probe, install if absent, then send. Never retries.
    pub async fn deliver(&self, target: ContextId, embed_code: &str) -> Result<(), BridgeError> {
        let mut pipeline = DeliveryPipeline::new(target);
        pipeline.run(self, embed_code).await
    }
}
