//! Injected input stream.
//!
//! The page's window-level listeners are modelled as an [`InputSource`]
//! that yields events one at a time. A live page adapts its event loop to
//! this trait; tests and the CLI use [`SyntheticInput`].

use std::collections::VecDeque;

use peek_common::Point;
use serde::{Deserialize, Serialize};

use crate::keys::KeyEvent;

/// The overlay element a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// Handle bar, including its label.
    DragHandle,
    CloseButton,
    /// Embedded frame area (or the capture surface above it).
    Frame,
    /// Anything outside the overlay.
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub target: PointerTarget,
    pub position: Point,
}

impl PointerEvent {
    pub fn down(target: PointerTarget, x: i32, y: i32) -> Self {
        Self {
            phase: PointerPhase::Down,
            target,
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self {
            phase: PointerPhase::Move,
            target: PointerTarget::Page,
            position: Point::new(x, y),
        }
    }

    pub fn up(x: i32, y: i32) -> Self {
        Self {
            phase: PointerPhase::Up,
            target: PointerTarget::Page,
            position: Point::new(x, y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Key(KeyEvent),
    Pointer(PointerEvent),
}

/// A source of window-level input events.
pub trait InputSource {
    /// Next event, or `None` when the stream is exhausted.
    fn next_event(&mut self) -> Option<InputEvent>;
}

/// A pre-recorded event stream.
#[derive(Debug, Clone, Default)]
pub struct SyntheticInput {
    queue: VecDeque<InputEvent>,
}

impl SyntheticInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, event: KeyEvent) -> Self {
        self.queue.push_back(InputEvent::Key(event));
        self
    }

    pub fn pointer(mut self, event: PointerEvent) -> Self {
        self.queue.push_back(InputEvent::Pointer(event));
        self
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for SyntheticInput {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}

impl FromIterator<InputEvent> for SyntheticInput {
    fn from_iter<I: IntoIterator<Item = InputEvent>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}
