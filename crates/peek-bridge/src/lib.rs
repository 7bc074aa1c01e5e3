//! peek-bridge: delivers commands from the trigger surface to the overlay
//! runtime in a target page context.
//!
//! The bridge probes the target for a live runtime, installs one when the
//! probe goes unanswered, then sends the load command. Transport is behind
//! the [`MessageRelay`] and [`ScriptInjector`] traits; [`LocalPages`]
//! implements both over in-memory headless pages.

pub mod bridge;
pub mod errors;
pub mod local;
pub mod pipeline;
pub mod transport;

pub use bridge::{BridgeTiming, CommandBridge};
pub use errors::RelayError;
pub use local::LocalPages;
pub use pipeline::{DeliveryPipeline, DeliveryStage};
pub use transport::{MessageRelay, ScriptInjector};

#[cfg(test)]
mod testing;
