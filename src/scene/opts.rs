use crate::data::dataset::FieldMap;
use crate::encode::encoder::EncoderKind;
use crate::foundation::core::{Canvas, Limits};
use crate::foundation::error::{AnimatorError, AnimatorResult};
use crate::render::colormap::Colormap;
use crate::render::marker::Marker;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Options controlling a render.
///
/// Every field has a default, so `AnimateOpts::default()` renders any valid dataset. Option files
/// are JSON objects using the same field names; omitted fields keep their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimateOpts {
    /// Plot title drawn above the axes.
    pub title: String,
    /// Output directory. Destroyed and recreated at the start of every render.
    pub path: PathBuf,
    /// Time step per frame. `None` targets exactly 50 frames.
    pub tstep: Option<f64>,

    /// Dataset column holding x.
    pub xname: String,
    /// Dataset column holding y.
    pub yname: String,
    /// Dataset column holding z.
    pub zname: String,
    /// Dataset column holding the weight.
    pub wname: String,
    /// Dataset column holding time.
    pub tname: String,

    /// Explicit x axis limits.
    pub xlim: Option<Limits>,
    /// Explicit y axis limits.
    pub ylim: Option<Limits>,
    /// Explicit z axis limits.
    pub zlim: Option<Limits>,
    /// Explicit color scale limits. Defaults to `[0, max(w)]`.
    pub wlim: Option<Limits>,
    /// Explicit time interval to animate.
    pub tlim: Option<Limits>,

    /// x axis label.
    pub xlabel: String,
    /// y axis label.
    pub ylabel: String,
    /// z axis label.
    pub zlabel: String,
    /// Colorbar label.
    pub wlabel: String,
    /// Unit appended to the elapsed-time annotation.
    pub tlabel: String,

    /// Draw muted shadow projections onto the three back planes.
    pub projections: bool,
    /// Depth-shade the primary markers instead of drawing them fully opaque.
    pub transparency: bool,
    /// Delete the frames directory after a successful encode.
    pub delete: bool,
    /// Suppress console progress output.
    pub quiet: bool,
    /// Scale marker size with each point's weight.
    pub scalesize: bool,
    /// Encode the frames into an animation after rendering them.
    pub renderframes: bool,

    /// Marker glyph.
    pub marker: Marker,
    /// Base marker size (area, pt^2).
    pub msize: f64,
    /// Colormap for the weight channel.
    pub colormap: Colormap,

    /// Output frame size.
    pub canvas: Canvas,
    /// Delay between animation frames, in centiseconds.
    pub delay_cs: u16,
    /// Which encoder assembles the animation.
    pub encoder: EncoderKind,
}

impl Default for AnimateOpts {
    fn default() -> Self {
        Self {
            title: "Animator5D".to_string(),
            path: PathBuf::from("Animator5D Rendering"),
            tstep: None,
            xname: "x".to_string(),
            yname: "y".to_string(),
            zname: "z".to_string(),
            wname: "w".to_string(),
            tname: "t".to_string(),
            xlim: None,
            ylim: None,
            zlim: None,
            wlim: None,
            tlim: None,
            xlabel: "x".to_string(),
            ylabel: "y".to_string(),
            zlabel: "z".to_string(),
            wlabel: "w".to_string(),
            tlabel: "units".to_string(),
            projections: true,
            transparency: false,
            delete: false,
            quiet: false,
            scalesize: true,
            renderframes: true,
            marker: Marker::Pixel,
            msize: 100.0,
            colormap: Colormap::Rainbow,
            canvas: Canvas::default(),
            delay_cs: 10,
            encoder: EncoderKind::Magick,
        }
    }
}

impl AnimateOpts {
    /// Parse options from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> AnimatorResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| AnimatorError::validation(format!("parse options JSON: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AnimatorResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AnimatorError::validation(format!("open options JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Column mapping for the five logical roles.
    pub fn field_map(&self) -> FieldMap {
        FieldMap {
            x: self.xname.clone(),
            y: self.yname.clone(),
            z: self.zname.clone(),
            t: self.tname.clone(),
            w: self.wname.clone(),
        }
    }

    /// Check option values that do not depend on the dataset.
    pub fn validate(&self) -> AnimatorResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(AnimatorError::validation("output path must be non-empty"));
        }
        if let Some(step) = self.tstep
            && (!step.is_finite() || step <= 0.0)
        {
            return Err(AnimatorError::validation(format!(
                "tstep must be finite and > 0 (got {step})"
            )));
        }
        if !self.msize.is_finite() || self.msize <= 0.0 {
            return Err(AnimatorError::validation(format!(
                "msize must be finite and > 0 (got {})",
                self.msize
            )));
        }
        self.canvas.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/opts.rs"]
mod tests;
