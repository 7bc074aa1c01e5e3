//! Delivery as an explicit sequence of stages.
//!
//! `Unknown -> Present | Absent -> Installed -> Sent`. An absent runtime
//! gets exactly one install attempt; any failure is terminal.

use peek_common::{BridgeError, ContextId};
use serde::Serialize;
use tracing::{debug, warn};

use crate::bridge::CommandBridge;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", content = "error", rename_all = "lowercase")]
pub enum DeliveryStage {
    /// Nothing known about the target yet.
    Unknown,
    Present,
    Absent,
    Installed,
    Sent,
    Failed(String),
}

impl DeliveryStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Sent | Self::Failed(_))
    }
}

/// One delivery to one page context, with its stage history.
#[derive(Debug, Clone)]
pub struct DeliveryPipeline {
    target: ContextId,
    history: Vec<DeliveryStage>,
    error: Option<BridgeError>,
}

impl DeliveryPipeline {
    pub fn new(target: ContextId) -> Self {
        Self {
            target,
            history: vec![DeliveryStage::Unknown],
            error: None,
        }
    }

    pub fn target(&self) -> ContextId {
        self.target
    }

    pub fn stage(&self) -> &DeliveryStage {
        // history always holds at least the initial stage
        &self.history[self.history.len() - 1]
    }

    /// Every stage visited, starting with `Unknown`.
    pub fn history(&self) -> &[DeliveryStage] {
        &self.history
    }

    /// Take one step. Does nothing once terminal.
    pub async fn advance(&mut self, bridge: &CommandBridge, embed_code: &str) {
        let next = match self.stage().clone() {
            DeliveryStage::Unknown => match bridge.ensure_present(self.target).await {
                Ok(()) => DeliveryStage::Present,
                Err(_) => DeliveryStage::Absent,
            },
            DeliveryStage::Absent => match bridge.install(self.target).await {
                Ok(()) => DeliveryStage::Installed,
                Err(e) => self.fail(e),
            },
            DeliveryStage::Present | DeliveryStage::Installed => {
                match bridge.send(self.target, embed_code).await {
                    Ok(()) => DeliveryStage::Sent,
                    Err(e) => self.fail(e),
                }
            }
            DeliveryStage::Sent | DeliveryStage::Failed(_) => return,
        };
        debug!(context = %self.target, stage = ?next, "delivery stage");
        self.history.push(next);
    }

    /// Advance until `Sent` or failed.
    pub async fn run(
        &mut self,
        bridge: &CommandBridge,
        embed_code: &str,
    ) -> Result<(), BridgeError> {
        while !self.stage().is_terminal() {
            self.advance(bridge, embed_code).await;
        }
        match self.error.clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&mut self, error: BridgeError) -> DeliveryStage {
        warn!(context = %self.target, error = %error, "delivery failed");
        let stage = DeliveryStage::Failed(error.to_string());
        self.error = Some(error);
        stage
    }
}
