//! Structured point datasets.
//!
//! A [`Dataset`] is a table of named numeric columns. Rendering reads five of them, selected by a
//! [`FieldMap`], and resolves them into [`PointRecord`]s.

/// Dataset table, field mapping and JSON loading.
pub mod dataset;
