//! Capture-stage chord interception.
//!
//! [`ShortcutInterceptor`] decides whether a key event is one of the
//! overlay's reserved chords; [`CaptureSentinel`] guarantees it is
//! registered at most once per page context.

mod interceptor;
mod sentinel;

pub use interceptor::ShortcutInterceptor;
pub use sentinel::CaptureSentinel;
