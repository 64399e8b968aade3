//! Render options and the once-per-render scene setup.

/// User-facing option surface.
pub mod opts;
/// Derived scalars resolved from a dataset and options.
pub mod setup;
