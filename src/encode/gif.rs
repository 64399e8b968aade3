use crate::encode::encoder::{FrameEncoder, ensure_parent_dir, require_frames};
use crate::foundation::error::{AnimatorError, AnimatorResult};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// In-process GIF encoder built on the `image` crate. Needs no external tools.
#[derive(Clone, Debug)]
pub struct GifEncoder {
    delay_cs: u16,
    speed: i32,
}

impl GifEncoder {
    /// Encoder with the given per-frame delay in centiseconds.
    pub fn new(delay_cs: u16) -> Self {
        Self {
            delay_cs,
            speed: 10,
        }
    }
}

impl FrameEncoder for GifEncoder {
    fn name(&self) -> &str {
        "builtin-gif"
    }

    #[tracing::instrument(skip_all, fields(frames = frames.len(), out = %out.display()))]
    fn encode(&mut self, frames: &[PathBuf], out: &Path) -> AnimatorResult<PathBuf> {
        require_frames(frames)?;
        ensure_parent_dir(out)?;

        let file = File::create(out).map_err(|e| {
            AnimatorError::encoding(format!("failed to create '{}': {e}", out.display()))
        })?;
        let mut encoder =
            image::codecs::gif::GifEncoder::new_with_speed(BufWriter::new(file), self.speed);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .map_err(|e| AnimatorError::encoding(format!("failed to set GIF repeat: {e}")))?;

        let delay = image::Delay::from_numer_denom_ms(u32::from(self.delay_cs) * 10, 1);
        let mut size: Option<(u32, u32)> = None;
        for path in frames {
            let rgba = image::open(path)
                .map_err(|e| {
                    AnimatorError::encoding(format!("failed to read '{}': {e}", path.display()))
                })?
                .to_rgba8();
            let dims = rgba.dimensions();
            match size {
                None => size = Some(dims),
                Some(expected) if expected != dims => {
                    return Err(AnimatorError::encoding(format!(
                        "frame '{}' is {}x{}, expected {}x{}",
                        path.display(),
                        dims.0,
                        dims.1,
                        expected.0,
                        expected.1
                    )));
                }
                Some(_) => {}
            }
            encoder
                .encode_frame(image::Frame::from_parts(rgba, 0, 0, delay))
                .map_err(|e| {
                    AnimatorError::encoding(format!(
                        "failed to encode GIF frame '{}': {e}",
                        path.display()
                    ))
                })?;
        }

        tracing::info!(
            "encoded {} frames to GIF at {} (delay={}cs)",
            frames.len(),
            out.display(),
            self.delay_cs
        );
        Ok(out.to_path_buf())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
