//! Cross-context wire protocol between the trigger surface and the overlay
//! runtime living in a page context.

use serde::{Deserialize, Serialize};

/// Literal reply to a liveness probe.
pub const PONG: &str = "pong";

/// Requests the trigger surface sends into a page context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum BridgeRequest {
    #[serde(rename = "ping")]
    Ping,

    #[serde(rename = "embedVideo")]
    EmbedVideo {
        #[serde(rename = "embedCode")]
        embed_code: String,
    },
}

impl BridgeRequest {
    pub fn embed_video(embed_code: impl Into<String>) -> Self {
        Self::EmbedVideo {
            embed_code: embed_code.into(),
        }
    }

    /// Short name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::EmbedVideo { .. } => "embedVideo",
        }
    }
}

/// Replies sent back by the overlay runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BridgeResponse {
    /// Bare string reply; `"pong"` for a live runtime.
    Text(String),

    Ack {
        success: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl BridgeResponse {
    pub fn pong() -> Self {
        Self::Text(PONG.to_string())
    }

    pub fn ack() -> Self {
        Self::Ack {
            success: true,
            error: None,
        }
    }

    pub fn nack(error: impl Into<String>) -> Self {
        Self::Ack {
            success: false,
            error: Some(error.into()),
        }
    }

    pub fn is_pong(&self) -> bool {
        matches!(self, Self::Text(s) if s == PONG)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ack { success: true, .. })
    }
}
