//! Time windows and point bucketing.
//!
//! Windows are half-open on the left: a window starting at `t` selects points with
//! `t < time <= t + step`, so a point lying exactly on a boundary belongs to the later window.

/// [`window::TimeWindow`] and [`window::Timeline`].
pub mod window;
