//! The render loop and its cooperative cancellation.

/// Frame loop, output directory handling and encoder hand-off.
pub mod animator;
/// Cooperative cancellation.
pub mod cancel;
