/// Marks a page context as already carrying the capture-stage listener.
///
/// Re-initializing the overlay in the same page must not register the
/// listener again, or every chord would be dispatched twice.
#[derive(Debug, Default)]
pub struct CaptureSentinel {
    installed: bool,
}

impl CaptureSentinel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly once: for the first caller.
    pub fn claim(&mut self) -> bool {
        if self.installed {
            return false;
        }
        self.installed = true;
        true
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }
}
