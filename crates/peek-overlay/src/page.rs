//! Headless host page.
//!
//! One [`PageContext`] stands in for one browser tab: it owns the overlay
//! runtime once installed, the capture-stage key listeners, and a log of
//! the key events that got through to the host page.

use peek_common::{BridgeRequest, BridgeResponse, ContextId, OverlayPosition, Size};
use peek_platform::{CaptureSentinel, InputEvent, InputSource, KeyEvent, ShortcutInterceptor};
use tracing::{debug, info};

use crate::runtime::OverlayRuntime;
use crate::state::OverlayState;
use crate::surface::OverlaySurface;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// Browser-internal and store pages refuse script injection.
    #[error("{0} does not allow script injection")]
    Restricted(ContextId),

    #[error("no overlay runtime in {0}")]
    NoRuntime(ContextId),
}

pub struct PageContext<S: OverlaySurface> {
    id: ContextId,
    viewport: Size,
    restricted: bool,
    sentinel: CaptureSentinel,
    listeners: Vec<ShortcutInterceptor>,
    runtime: Option<OverlayRuntime<S>>,
    stylesheet: bool,
    host_received: Vec<KeyEvent>,
}

impl<S: OverlaySurface> PageContext<S> {
    pub fn new(id: ContextId, viewport: Size) -> Self {
        Self {
            id,
            viewport,
            restricted: false,
            sentinel: CaptureSentinel::new(),
            listeners: Vec::new(),
            runtime: None,
            stylesheet: false,
            host_received: Vec::new(),
        }
    }

    /// Mark the page as refusing injection.
    pub fn restricted(mut self) -> Self {
        self.restricted = true;
        self
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn is_restricted(&self) -> bool {
        self.restricted
    }

    pub fn has_runtime(&self) -> bool {
        self.runtime.is_some()
    }

    pub fn has_stylesheet(&self) -> bool {
        self.stylesheet
    }

    /// Number of capture-stage key listeners registered on the window.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Key events that were not consumed by the overlay.
    pub fn host_received(&self) -> &[KeyEvent] {
        &self.host_received
    }

    pub fn runtime(&self) -> Option<&OverlayRuntime<S>> {
        self.runtime.as_ref()
    }

    pub fn overlay_state(&self) -> Option<&OverlayState> {
        self.runtime.as_ref().map(OverlayRuntime::state)
    }

    /// Run the overlay runtime script in this page.
    ///
    /// Running it again keeps the existing panel, and the key listener is
    /// only ever registered once.
    pub fn install_runtime(
        &mut self,
        surface: impl FnOnce() -> S,
        initial: OverlayPosition,
    ) -> Result<(), PageError> {
        if self.restricted {
            return Err(PageError::Restricted(self.id));
        }

        if self.runtime.is_none() {
            self.runtime = Some(OverlayRuntime::new(surface(), initial, self.viewport));
            info!(context = %self.id, "overlay runtime installed");
        } else {
            debug!(context = %self.id, "overlay runtime already present");
        }

        if self.sentinel.claim() {
            self.listeners.push(ShortcutInterceptor::new());
        }
        Ok(())
    }

    pub fn install_stylesheet(&mut self) -> Result<(), PageError> {
        if self.restricted {
            return Err(PageError::Restricted(self.id));
        }
        self.stylesheet = true;
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        if let Some(rt) = self.runtime.as_mut() {
            rt.set_viewport(viewport);
        }
    }

    /// Deliver a cross-context request to the runtime.
    pub fn handle_request(&mut self, request: &BridgeRequest) -> Result<BridgeResponse, PageError> {
        let rt = self.runtime.as_mut().ok_or(PageError::NoRuntime(self.id))?;
        Ok(rt.handle_request(request))
    }

    /// Feed one window event through the page.
    ///
    /// Key events pass the capture-stage listeners first; only events none
    /// of them consumed reach the host page.
    pub fn dispatch_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(mut key) => {
                for listener in &self.listeners {
                    if let Some(action) = listener.intercept(&mut key) {
                        if let Some(rt) = self.runtime.as_mut() {
                            rt.dispatch(action);
                        }
                    }
                    if key.is_propagation_stopped() {
                        break;
                    }
                }
                if !key.is_propagation_stopped() {
                    self.host_received.push(key);
                }
            }
            InputEvent::Pointer(pointer) => {
                if let Some(rt) = self.runtime.as_mut() {
                    rt.handle_pointer(&pointer);
                }
            }
        }
    }

    /// Drain `source`, dispatching every event. Returns how many were
    /// processed.
    pub fn pump(&mut self, source: &mut dyn InputSource) -> usize {
        let mut n = 0;
        while let Some(event) = source.next_event() {
            self.dispatch_event(event);
            n += 1;
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Visibility;
    use crate::surface::HeadlessSurface;
    use peek_platform::{PointerEvent, PointerTarget, SyntheticInput};

    const EMBED: &str = r#"<iframe src="https://example.com/embed/abc"></iframe>"#;

    fn page() -> PageContext<HeadlessSurface> {
        PageContext::new(ContextId(1), Size::new(1280, 720))
    }

    fn install(page: &mut PageContext<HeadlessSurface>) {
        page.install_runtime(
            || HeadlessSurface::new(Size::new(480, 300)),
            OverlayPosition::new(20, 20),
        )
        .unwrap();
    }

    fn chord(s: &str) -> KeyEvent {
        KeyEvent::from_chord(s).unwrap()
    }

    #[test]
    fn reinstall_keeps_one_listener() {
        let mut p = page();
        install(&mut p);
        install(&mut p);
        assert_eq!(p.listener_count(), 1);

        let mut input = SyntheticInput::new().key(chord("Ctrl+Shift+Z"));
        p.pump(&mut input);
        assert_eq!(
            p.overlay_state().map(OverlayState::visibility),
            Some(Visibility::Visible)
        );
    }

    #[test]
    fn chord_a_twice_returns_to_hidden() {
        let mut p = page();
        install(&mut p);
        let mut input = SyntheticInput::new().key(chord("Ctrl+Shift+Z"));
        p.pump(&mut input);
        assert_eq!(
            p.overlay_state().map(OverlayState::visibility),
            Some(Visibility::Visible)
        );

        let mut input = SyntheticInput::new().key(chord("Ctrl+Shift+Z"));
        p.pump(&mut input);
        assert_eq!(
            p.overlay_state().map(OverlayState::visibility),
            Some(Visibility::Hidden)
        );
    }

    #[test]
    fn consumed_chords_never_reach_host() {
        let mut p = page();
        install(&mut p);
        let mut input = SyntheticInput::new()
            .key(chord("Ctrl+Shift+Space"))
            .key(KeyEvent::new("a", "KeyA"))
            .key(chord("Ctrl+Shift+X"));
        assert_eq!(p.pump(&mut input), 3);
        assert_eq!(p.host_received().len(), 1);
        assert_eq!(p.host_received()[0].key, "a");
    }

    #[test]
    fn without_runtime_keys_reach_host() {
        let mut p = page();
        let mut input = SyntheticInput::new().key(chord("Ctrl+Shift+Z"));
        p.pump(&mut input);
        assert_eq!(p.host_received().len(), 1);
    }

    #[test]
    fn restricted_page_refuses_injection() {
        let mut p = page().restricted();
        assert_eq!(
            p.install_runtime(
                || HeadlessSurface::new(Size::new(480, 300)),
                OverlayPosition::new(20, 20)
            ),
            Err(PageError::Restricted(ContextId(1)))
        );
        assert_eq!(
            p.install_stylesheet(),
            Err(PageError::Restricted(ContextId(1)))
        );
        assert!(!p.has_runtime());
    }

    #[test]
    fn request_without_runtime_fails() {
        let mut p = page();
        assert_eq!(
            p.handle_request(&BridgeRequest::Ping),
            Err(PageError::NoRuntime(ContextId(1)))
        );
    }

    #[test]
    fn embed_then_drag_through_page() {
        let mut p = page();
        install(&mut p);
        assert!(p
            .handle_request(&BridgeRequest::embed_video(EMBED))
            .unwrap()
            .is_success());

        let mut input = SyntheticInput::new()
            .pointer(PointerEvent::down(PointerTarget::DragHandle, 50, 30))
            .pointer(PointerEvent::moved(2000, 2000))
            .pointer(PointerEvent::up(2000, 2000));
        p.pump(&mut input);

        let state = p.overlay_state().unwrap();
        assert_eq!(state.position(), OverlayPosition::new(800, 420));
        assert!(!state.is_dragging());
    }

    #[test]
    fn viewport_change_reaches_runtime() {
        let mut p = page();
        install(&mut p);
        p.set_viewport(Size::new(800, 600));
        assert_eq!(p.runtime().map(|rt| rt.viewport()), Some(Size::new(800, 600)));
    }
}
