//! Stitching rendered frame files into a looping animation.

/// Encoder contract, encoder selection and shared process helpers.
pub mod encoder;
/// ffmpeg-backed encoder.
pub mod ffmpeg;
/// In-process GIF encoder.
pub mod gif;
/// ImageMagick-backed encoder.
pub mod magick;
