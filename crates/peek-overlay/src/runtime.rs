//! The overlay runtime living inside one host page.
//!
//! Owns the state machine and the surface, routes pointer events and
//! chord actions into transitions, and answers requests arriving over the
//! cross-context bridge.

use peek_common::{
    BridgeRequest, BridgeResponse, EmbedError, OverlayAction, OverlayPosition, Size,
};
use peek_platform::{ChordRegistry, PointerEvent, PointerPhase, PointerTarget};
use tracing::{debug, info, warn};

use crate::embed;
use crate::state::{OverlayState, OverlayStateMachine};
use crate::surface::{OverlaySurface, SurfaceCommand};

pub struct OverlayRuntime<S: OverlaySurface> {
    machine: OverlayStateMachine,
    surface: S,
    viewport: Size,
}

impl<S: OverlaySurface> OverlayRuntime<S> {
    /// Build the panel on `surface`, hidden at `initial`.
    pub fn new(mut surface: S, initial: OverlayPosition, viewport: Size) -> Self {
        let registry = ChordRegistry::new();
        let title = match registry.display_for(OverlayAction::Close) {
            Some(chord) => format!("Close ({chord})"),
            None => "Close".to_string(),
        };
        surface.set_close_title(&title);
        surface.move_to(initial);
        surface.set_visible(false);

        Self {
            machine: OverlayStateMachine::new(initial),
            surface,
            viewport,
        }
    }

    pub fn state(&self) -> &OverlayState {
        self.machine.state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The host window was resized. The panel is not moved until the next
    /// drag update.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Run a chord action.
    pub fn dispatch(&mut self, action: OverlayAction) {
        debug!(action = action.label(), "dispatching action");
        let cmds = match action {
            OverlayAction::ToggleVisibility => self.machine.toggle_visibility(),
            OverlayAction::Close => self.machine.close(),
            OverlayAction::TogglePlayback => self.machine.toggle_playback(),
        };
        self.apply(cmds);
    }

    /// Route a pointer event from the page.
    ///
    /// Pressing the handle starts a drag; pressing the close button closes
    /// and never starts a drag. Moves and releases anywhere in the window
    /// update and end an active drag.
    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        let cmds = match (event.phase, event.target) {
            (PointerPhase::Down, PointerTarget::DragHandle) => {
                self.machine.start_drag(event.position)
            }
            (PointerPhase::Down, PointerTarget::CloseButton) => self.machine.close(),
            (PointerPhase::Down, _) => Vec::new(),
            (PointerPhase::Move, _) => {
                let panel = self.surface.panel_size();
                self.machine
                    .update_drag(event.position, self.viewport, panel)
            }
            (PointerPhase::Up, _) => self.machine.end_drag(),
        };
        self.apply(cmds);
    }

    /// Parse `markup`, load it, and toggle visibility.
    ///
    /// On a parse failure the state is left unchanged.
    pub fn load_embed(&mut self, markup: &str) -> Result<(), EmbedError> {
        let source = embed::parse(markup)?;
        info!(url = %source.resource_url(), "loading embed");
        let mut cmds = self.machine.load_content(source);
        cmds.extend(self.machine.toggle_visibility());
        self.apply(cmds);
        Ok(())
    }

    /// Answer a request sent over the bridge.
    pub fn handle_request(&mut self, request: &BridgeRequest) -> BridgeResponse {
        match request {
            BridgeRequest::Ping => BridgeResponse::pong(),
            BridgeRequest::EmbedVideo { embed_code } => match self.load_embed(embed_code) {
                Ok(()) => BridgeResponse::ack(),
                Err(e) => {
                    warn!(error = %e, "rejecting embed request");
                    BridgeResponse::nack(e.to_string())
                }
            },
        }
    }

    fn apply(&mut self, cmds: Vec<SurfaceCommand>) {
        for cmd in cmds {
            if let Err(e) = cmd.apply(&mut self.surface) {
                warn!(command = cmd.name(), error = %e, "PlaybackSignalFailure");
            }
        }
    }
}
