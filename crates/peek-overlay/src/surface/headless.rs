use peek_common::{OverlayPosition, PlaybackSignalError, Size};
use serde::Serialize;

use crate::embed::EmbedSource;

use super::OverlaySurface;

/// In-memory surface that records what a real panel would display.
///
/// Used by the headless page context, the CLI, and tests.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessSurface {
    visible: bool,
    position: OverlayPosition,
    panel: Size,
    /// `None` when no frame exists; `Some("")` once neutralized.
    frame_src: Option<String>,
    input_capture: bool,
    close_title: String,
    posted: Vec<String>,
    attach_count: usize,
    teardown_count: usize,
    #[serde(skip)]
    reject_posts: bool,
}

impl HeadlessSurface {
    pub fn new(panel: Size) -> Self {
        Self {
            visible: false,
            position: OverlayPosition::default(),
            panel,
            frame_src: None,
            input_capture: false,
            close_title: String::new(),
            posted: Vec::new(),
            attach_count: 0,
            teardown_count: 0,
            reject_posts: false,
        }
    }

    /// Make every subsequent frame post fail.
    pub fn reject_posts(mut self) -> Self {
        self.reject_posts = true;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> OverlayPosition {
        self.position
    }

    pub fn frame_src(&self) -> Option<&str> {
        self.frame_src.as_deref()
    }

    pub fn input_capture(&self) -> bool {
        self.input_capture
    }

    pub fn close_title(&self) -> &str {
        &self.close_title
    }

    /// Messages the frame accepted, oldest first.
    pub fn posted(&self) -> &[String] {
        &self.posted
    }

    pub fn attach_count(&self) -> usize {
        self.attach_count
    }

    pub fn teardown_count(&self) -> usize {
        self.teardown_count
    }
}

impl OverlaySurface for HeadlessSurface {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn move_to(&mut self, position: OverlayPosition) {
        self.position = position;
    }

    fn attach_frame(&mut self, source: &EmbedSource) {
        self.frame_src = Some(source.locator());
        self.attach_count += 1;
    }

    fn teardown_frame(&mut self) {
        if self.frame_src.take().is_some() {
            self.teardown_count += 1;
        }
    }

    fn neutralize_frame(&mut self) {
        if let Some(src) = self.frame_src.as_mut() {
            src.clear();
        }
    }

    fn set_input_capture(&mut self, active: bool) {
        self.input_capture = active;
    }

    fn post_to_frame(&mut self, message: &str) -> Result<(), PlaybackSignalError> {
        match self.frame_src.as_deref() {
            None | Some("") => Err(PlaybackSignalError::NoFrame),
            Some(_) if self.reject_posts => Err(PlaybackSignalError::Rejected(
                "frame did not accept the message".into(),
            )),
            Some(_) => {
                self.posted.push(message.to_string());
                Ok(())
            }
        }
    }

    fn panel_size(&self) -> Size {
        self.panel
    }

    fn set_close_title(&mut self, title: &str) {
        self.close_title = title.to_string();
    }
}
