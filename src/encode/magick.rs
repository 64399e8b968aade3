use crate::encode::encoder::{
    FrameEncoder, ensure_parent_dir, is_on_path, require_frames, run_tool,
};
use crate::foundation::error::{AnimatorError, AnimatorResult};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Programs tried in order when none is configured: ImageMagick 7, then the v6 entry point.
pub const MAGICK_PROGRAMS: [&str; 2] = ["magick", "convert"];

/// Encoder that shells out to ImageMagick:
/// `convert -delay <cs> -loop 0 <frames...> <out>`.
#[derive(Clone, Debug)]
pub struct MagickEncoder {
    delay_cs: u16,
    program: Option<String>,
}

impl MagickEncoder {
    /// Encoder with the given per-frame delay; the program is discovered on `PATH`.
    pub fn new(delay_cs: u16) -> Self {
        Self {
            delay_cs,
            program: None,
        }
    }

    /// Use a specific executable instead of discovering one.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Arguments passed to the program.
    pub fn args(&self, frames: &[PathBuf], out: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-delay".into(),
            self.delay_cs.to_string().into(),
            "-loop".into(),
            "0".into(),
        ];
        args.extend(frames.iter().map(|f| f.as_os_str().to_owned()));
        args.push(out.as_os_str().to_owned());
        args
    }

    fn program(&self) -> AnimatorResult<String> {
        if let Some(p) = &self.program {
            return Ok(p.clone());
        }
        MAGICK_PROGRAMS
            .iter()
            .find(|p| is_on_path(p, "-version"))
            .map(|p| (*p).to_string())
            .ok_or_else(|| {
                AnimatorError::encoding(
                    "ImageMagick is required to combine frames, \
                     but neither `magick` nor `convert` was found on PATH",
                )
            })
    }
}

impl FrameEncoder for MagickEncoder {
    fn name(&self) -> &str {
        "imagemagick"
    }

    #[tracing::instrument(skip_all, fields(frames = frames.len(), out = %out.display()))]
    fn encode(&mut self, frames: &[PathBuf], out: &Path) -> AnimatorResult<PathBuf> {
        require_frames(frames)?;
        ensure_parent_dir(out)?;
        let program = self.program()?;

        let mut cmd = Command::new(&program);
        cmd.args(self.args(frames, out));
        run_tool(cmd, &program)?;

        tracing::info!(
            "encoded {} frames to {} with {program} (delay={}cs)",
            frames.len(),
            out.display(),
            self.delay_cs
        );
        Ok(out.to_path_buf())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/magick.rs"]
mod tests;
