use crate::encode::encoder::{
    FrameEncoder, ensure_parent_dir, is_on_path, require_frames, run_tool,
};
use crate::foundation::core::FrameNumber;
use crate::foundation::error::{AnimatorError, AnimatorResult};
use std::path::{Path, PathBuf};
use std::process::Command;

// Two-pass palette so the GIF keeps the colormap gradient instead of ffmpeg's default palette.
const PALETTE_FILTER: &str = "split[a][b];[a]palettegen[p];[b][p]paletteuse";

/// Encoder that shells out to `ffmpeg`, reading frames through a numbered input pattern.
#[derive(Clone, Debug)]
pub struct FfmpegEncoder {
    delay_cs: u16,
}

impl FfmpegEncoder {
    /// Encoder with the given per-frame delay in centiseconds.
    pub fn new(delay_cs: u16) -> Self {
        Self { delay_cs }
    }

    /// Input framerate as a rational `100/<delay_cs>`.
    pub fn framerate(&self) -> String {
        format!("100/{}", self.delay_cs.max(1))
    }
}

/// `printf`-style input pattern (`dir/%03d.png`) for contiguous frames numbered from 1.
///
/// Fails when the files are not one directory of equally padded, gap-free numbers.
pub fn input_pattern(frames: &[PathBuf]) -> AnimatorResult<PathBuf> {
    require_frames(frames)?;
    let first = &frames[0];
    let dir = first.parent().unwrap_or_else(|| Path::new(""));
    let ext = first.extension().and_then(|e| e.to_str()).unwrap_or("png");
    let pad = first
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::len)
        .unwrap_or(FrameNumber::MIN_PAD);

    for (i, f) in frames.iter().enumerate() {
        let expected = dir.join(format!("{}.{ext}", FrameNumber(i as u32 + 1).stem(pad)));
        if *f != expected {
            return Err(AnimatorError::encoding(format!(
                "ffmpeg needs contiguous frames numbered from 1; expected '{}', found '{}'",
                expected.display(),
                f.display()
            )));
        }
    }
    Ok(dir.join(format!("%0{pad}d.{ext}")))
}

impl FrameEncoder for FfmpegEncoder {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    #[tracing::instrument(skip_all, fields(frames = frames.len(), out = %out.display()))]
    fn encode(&mut self, frames: &[PathBuf], out: &Path) -> AnimatorResult<PathBuf> {
        let pattern = input_pattern(frames)?;
        ensure_parent_dir(out)?;
        if !is_on_path("ffmpeg", "-version") {
            return Err(AnimatorError::encoding(
                "ffmpeg encoder selected, but ffmpeg was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.args(["-y", "-loglevel", "error", "-framerate"])
            .arg(self.framerate())
            .args(["-start_number", "1", "-i"])
            .arg(&pattern)
            .args(["-vf", PALETTE_FILTER, "-loop", "0"])
            .arg(out);
        run_tool(cmd, "ffmpeg")?;

        tracing::info!(
            "encoded {} frames to {} with ffmpeg (framerate={})",
            frames.len(),
            out.display(),
            self.framerate()
        );
        Ok(out.to_path_buf())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
