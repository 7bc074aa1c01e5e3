//! In-memory page contexts reachable through the bridge traits.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use peek_common::{BridgeRequest, BridgeResponse, ContextId, OverlayPosition, Size};
use peek_overlay::{HeadlessSurface, PageContext, PageError};
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::RelayError;
use crate::transport::{MessageRelay, ScriptInjector};

type Page = PageContext<HeadlessSurface>;

/// Thread-safe set of headless pages, keyed by context.
#[derive(Clone)]
pub struct LocalPages {
    pages: Arc<RwLock<HashMap<ContextId, Page>>>,
    panel: Size,
    initial: OverlayPosition,
}

impl LocalPages {
    /// Panels created by injected runtimes get `panel` size and start at
    /// `initial`.
    pub fn new(panel: Size, initial: OverlayPosition) -> Self {
        Self {
            pages: Arc::new(RwLock::new(HashMap::new())),
            panel,
            initial,
        }
    }

    /// Add a page. Replaces any page with the same context id.
    pub async fn open(&self, page: Page) {
        let mut map = self.pages.write().await;
        map.insert(page.id(), page);
    }

    /// Run `f` against the page, if it exists.
    pub async fn with_page<R>(
        &self,
        id: ContextId,
        f: impl FnOnce(&mut Page) -> R,
    ) -> Option<R> {
        let mut map = self.pages.write().await;
        map.get_mut(&id).map(f)
    }

    pub async fn count(&self) -> usize {
        self.pages.read().await.len()
    }
}

fn relay_error(e: PageError) -> RelayError {
    match e {
        PageError::Restricted(id) => RelayError::Rejected(format!("cannot inject into {id}")),
        PageError::NoRuntime(_) => RelayError::NoReceiver,
    }
}

#[async_trait]
impl MessageRelay for LocalPages {
    async fn send_message(
        &self,
        target: ContextId,
        request: BridgeRequest,
    ) -> Result<BridgeResponse, RelayError> {
        debug!(context = %target, request = request.name(), "relaying request");
        let mut map = self.pages.write().await;
        let page = map.get_mut(&target).ok_or(RelayError::Closed(target))?;
        page.handle_request(&request).map_err(relay_error)
    }
}

#[async_trait]
impl ScriptInjector for LocalPages {
    async fn execute_script(&self, target: ContextId) -> Result<(), RelayError> {
        let panel = self.panel;
        let mut map = self.pages.write().await;
        let page = map.get_mut(&target).ok_or(RelayError::Closed(target))?;
        page.install_runtime(|| HeadlessSurface::new(panel), self.initial)
            .map_err(relay_error)
    }

    async fn insert_css(&self, target: ContextId) -> Result<(), RelayError> {
        let mut map = self.pages.write().await;
        let page = map.get_mut(&target).ok_or(RelayError::Closed(target))?;
        page.install_stylesheet().map_err(relay_error)
    }
}
