use crate::foundation::error::{AnimatorError, AnimatorResult};
use anyhow::Context as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Combines an ordered list of frame files into one animation file.
///
/// `frames` is sorted lexically by file name, which equals numeric order for the zero-padded
/// names the renderer writes. Implementations must not modify or remove the frame files.
pub trait FrameEncoder {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    /// Write the animation to `out` and return the path of the produced file.
    fn encode(&mut self, frames: &[PathBuf], out: &Path) -> AnimatorResult<PathBuf>;
}

impl<E: FrameEncoder + ?Sized> FrameEncoder for Box<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn encode(&mut self, frames: &[PathBuf], out: &Path) -> AnimatorResult<PathBuf> {
        (**self).encode(frames, out)
    }
}

/// Built-in encoder choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncoderKind {
    /// ImageMagick `magick` / `convert`.
    #[default]
    Magick,
    /// `ffmpeg` with a generated palette.
    Ffmpeg,
    /// In-process GIF encoding, no external tool.
    Builtin,
}

impl EncoderKind {
    /// Instantiate the encoder with a per-frame delay in centiseconds.
    pub fn build(self, delay_cs: u16) -> Box<dyn FrameEncoder> {
        match self {
            Self::Magick => Box::new(crate::encode::magick::MagickEncoder::new(delay_cs)),
            Self::Ffmpeg => Box::new(crate::encode::ffmpeg::FfmpegEncoder::new(delay_cs)),
            Self::Builtin => Box::new(crate::encode::gif::GifEncoder::new(delay_cs)),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Magick => "magick",
            Self::Ffmpeg => "ffmpeg",
            Self::Builtin => "builtin",
        }
    }
}

impl std::fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EncoderKind {
    type Err = AnimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "magick" | "imagemagick" | "convert" => Ok(Self::Magick),
            "ffmpeg" => Ok(Self::Ffmpeg),
            "builtin" | "gif" => Ok(Self::Builtin),
            other => Err(AnimatorError::validation(format!(
                "unknown encoder '{other}' (expected magick, ffmpeg or builtin)"
            ))),
        }
    }
}

/// Frame files in `dir`: files named `<digits>.<ext>`, sorted lexically by file name.
pub fn collect_frames(dir: &Path, ext: &str) -> AnimatorResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("read frames directory '{}'", dir.display()))?;
    let mut frames = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("read frames directory '{}'", dir.display()))?
            .path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(ext) {
            continue;
        }
        let numeric = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()));
        if numeric {
            frames.push(path);
        }
    }
    frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(frames)
}

/// Return `true` when `program` can be invoked from `PATH` with `version_arg`.
pub fn is_on_path(program: &str, version_arg: &str) -> bool {
    Command::new(program)
        .arg(version_arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> AnimatorResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Run an external tool to completion, mapping spawn failures and non-zero exits to
/// [`AnimatorError::Encoding`] with the tool's stderr.
pub(crate) fn run_tool(mut cmd: Command, tool: &str) -> AnimatorResult<()> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());
    tracing::debug!(?cmd, "running {tool}");
    let output = cmd.output().map_err(|e| {
        AnimatorError::encoding(format!(
            "failed to spawn {tool} (is it installed and on PATH?): {e}"
        ))
    })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AnimatorError::encoding(format!(
            "{tool} exited with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

pub(crate) fn require_frames(frames: &[PathBuf]) -> AnimatorResult<()> {
    if frames.is_empty() {
        return Err(AnimatorError::encoding("no frames to encode"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/encoder.rs"]
mod tests;
