//! Recording transport double shared by the bridge tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use peek_common::{BridgeRequest, BridgeResponse, ContextId};

use crate::bridge::BridgeTiming;
use crate::errors::RelayError;
use crate::transport::{MessageRelay, ScriptInjector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Ping,
    EmbedVideo(String),
    ExecuteScript,
    InsertCss,
}

#[derive(Debug, Clone, Copy)]
pub enum Probe {
    Pong,
    Reject,
    Hang,
    Other,
}

#[derive(Debug, Clone, Copy)]
pub enum Embed {
    Ack,
    Nack,
    Reject,
    Hang,
    Other,
}

pub struct RecordingTransport {
    probe: Probe,
    embed: Embed,
    fail_injection: bool,
    calls: Mutex<Vec<Call>>,
}

impl RecordingTransport {
    pub fn new(probe: Probe, embed: Embed) -> Self {
        Self {
            probe,
            embed,
            fail_injection: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_injection(mut self) -> Self {
        self.fail_injection = true;
        self
    }

    pub fn timing() -> BridgeTiming {
        BridgeTiming {
            probe_timeout: Duration::from_millis(20),
            settle_delay: Duration::from_millis(1),
            delivery_timeout: Duration::from_millis(20),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MessageRelay for RecordingTransport {
    async fn send_message(
        &self,
        _target: ContextId,
        request: BridgeRequest,
    ) -> Result<BridgeResponse, RelayError> {
        match request {
            BridgeRequest::Ping => {
                self.record(Call::Ping);
                match self.probe {
                    Probe::Pong => Ok(BridgeResponse::pong()),
                    Probe::Reject => Err(RelayError::NoReceiver),
                    Probe::Hang => std::future::pending().await,
                    Probe::Other => Ok(BridgeResponse::Text("hello".into())),
                }
            }
            BridgeRequest::EmbedVideo { embed_code } => {
                self.record(Call::EmbedVideo(embed_code));
                match self.embed {
                    Embed::Ack => Ok(BridgeResponse::ack()),
                    Embed::Nack => Ok(BridgeResponse::nack("bad markup")),
                    Embed::Reject => Err(RelayError::NoReceiver),
                    Embed::Hang => std::future::pending().await,
                    Embed::Other => Ok(BridgeResponse::pong()),
                }
            }
        }
    }
}

#[async_trait]
impl ScriptInjector for RecordingTransport {
    async fn execute_script(&self, _target: ContextId) -> Result<(), RelayError> {
        self.record(Call::ExecuteScript);
        if self.fail_injection {
            return Err(RelayError::Rejected("cannot access a chrome:// URL".into()));
        }
        Ok(())
    }

    async fn insert_css(&self, _target: ContextId) -> Result<(), RelayError> {
        self.record(Call::InsertCss);
        Ok(())
    }
}
