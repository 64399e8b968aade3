use std::path::PathBuf;

use animator5d::{
    AnimateOpts, Animator, AnimatorError, CancelToken, Colormap, Dataset, EncoderKind,
    FrameNumber, Limits, Marker,
};
use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "animator5d", version, about)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every frame and combine them into `<path>/animation.gif`.
    Render(RenderArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input dataset JSON (records or columns).
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    opts: OptsArgs,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Input dataset JSON (records or columns).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame number (1-based).
    #[arg(long)]
    frame: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    opts: OptsArgs,
}

/// Option overrides, applied on top of defaults and `--config`.
#[derive(Args, Debug, Default)]
struct OptsArgs {
    /// JSON options file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory (wiped on every render).
    #[arg(long)]
    path: Option<PathBuf>,
    /// Plot title.
    #[arg(long)]
    title: Option<String>,
    /// Time step per frame.
    #[arg(long)]
    tstep: Option<f64>,

    /// Column holding x.
    #[arg(long)]
    xname: Option<String>,
    /// Column holding y.
    #[arg(long)]
    yname: Option<String>,
    /// Column holding z.
    #[arg(long)]
    zname: Option<String>,
    /// Column holding the weight.
    #[arg(long)]
    wname: Option<String>,
    /// Column holding time.
    #[arg(long)]
    tname: Option<String>,

    /// x axis limits, `MIN,MAX`.
    #[arg(long, value_parser = parse_limits)]
    xlim: Option<Limits>,
    /// y axis limits, `MIN,MAX`.
    #[arg(long, value_parser = parse_limits)]
    ylim: Option<Limits>,
    /// z axis limits, `MIN,MAX`.
    #[arg(long, value_parser = parse_limits)]
    zlim: Option<Limits>,
    /// Color scale limits, `MIN,MAX`.
    #[arg(long, value_parser = parse_limits)]
    wlim: Option<Limits>,
    /// Time interval, `MIN,MAX`.
    #[arg(long, value_parser = parse_limits)]
    tlim: Option<Limits>,

    /// x axis label.
    #[arg(long)]
    xlabel: Option<String>,
    /// y axis label.
    #[arg(long)]
    ylabel: Option<String>,
    /// z axis label.
    #[arg(long)]
    zlabel: Option<String>,
    /// Colorbar label.
    #[arg(long)]
    wlabel: Option<String>,
    /// Time unit shown next to the elapsed time.
    #[arg(long)]
    tlabel: Option<String>,

    /// Draw shadows on the back planes.
    #[arg(long)]
    projections: Option<bool>,
    /// Depth-shade markers.
    #[arg(long)]
    transparency: Option<bool>,
    /// Delete frames after a successful encode.
    #[arg(long)]
    delete: Option<bool>,
    /// Scale marker size with weight.
    #[arg(long)]
    scalesize: Option<bool>,
    /// Encode frames into an animation.
    #[arg(long)]
    renderframes: Option<bool>,
    /// Suppress progress output. `--quiet false` overrides a config file.
    #[arg(long, short = 'q', num_args = 0..=1, default_missing_value = "true")]
    quiet: Option<bool>,

    /// Marker code (`,` `.` `o` `s` `^` `v` `D` `+` `x` `*`).
    #[arg(long, allow_hyphen_values = true)]
    marker: Option<Marker>,
    /// Marker size (area, pt^2).
    #[arg(long)]
    msize: Option<f64>,
    /// Weight colormap: rainbow or gray.
    #[arg(long)]
    colormap: Option<Colormap>,

    /// Frame width in pixels.
    #[arg(long)]
    width: Option<u32>,
    /// Frame height in pixels.
    #[arg(long)]
    height: Option<u32>,
    /// Delay between frames in centiseconds.
    #[arg(long)]
    delay: Option<u16>,
    /// Encoder: magick, ffmpeg or builtin.
    #[arg(long)]
    encoder: Option<EncoderKind>,
}

impl OptsArgs {
    fn resolve(self) -> anyhow::Result<AnimateOpts> {
        let mut o = match &self.config {
            Some(p) => AnimateOpts::from_path(p)?,
            None => AnimateOpts::default(),
        };

        macro_rules! set {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = self.$field {
                    o.$field = v;
                })*
            };
        }
        macro_rules! set_opt {
            ($($field:ident),* $(,)?) => {
                $(if self.$field.is_some() {
                    o.$field = self.$field;
                })*
            };
        }
        set!(path, title, xname, yname, zname, wname, tname);
        set!(xlabel, ylabel, zlabel, wlabel, tlabel);
        set!(projections, transparency, delete, quiet, scalesize, renderframes);
        set!(marker, msize, colormap, encoder);
        set_opt!(tstep, xlim, ylim, zlim, wlim, tlim);
        if let Some(w) = self.width {
            o.canvas.width = w;
        }
        if let Some(h) = self.height {
            o.canvas.height = h;
        }
        if let Some(d) = self.delay {
            o.delay_cs = d;
        }

        o.validate()?;
        Ok(o)
    }
}

fn parse_limits(s: &str) -> Result<Limits, String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected MIN,MAX, got '{s}'"))?;
    let min: f64 = a.trim().parse().map_err(|e| format!("bad min '{a}': {e}"))?;
    let max: f64 = b.trim().parse().map_err(|e| format!("bad max '{b}': {e}"))?;
    Limits::new(min, max).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let data = Dataset::from_path(&args.in_path)?;
    let opts = args.opts.resolve()?;

    let cancel = CancelToken::new();
    install_interrupt_handlers(&cancel)?;

    match Animator::new(opts).with_cancel(cancel).render(&data) {
        Ok(report) => {
            if let Some(anim) = &report.animation {
                eprintln!("wrote {}", anim.display());
            }
            Ok(())
        }
        Err(AnimatorError::Cancelled { frames_written }) => {
            println!("(!) Rendering aborted: interrupted.");
            tracing::info!(frames_written, "render interrupted");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// First SIGINT/SIGTERM cancels the render between frames; a second one exits immediately.
fn install_interrupt_handlers(cancel: &CancelToken) -> anyhow::Result<()> {
    for sig in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
        // Order matters: the shutdown check must see the flag before this signal sets it.
        signal_hook::flag::register_conditional_shutdown(sig, 130, cancel.flag())
            .with_context(|| format!("register shutdown for signal {sig}"))?;
        signal_hook::flag::register(sig, cancel.flag())
            .with_context(|| format!("register handler for signal {sig}"))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let data = Dataset::from_path(&args.in_path)?;
    let opts = args.opts.resolve()?;
    let frame = Animator::new(opts).render_window(&data, FrameNumber(args.frame))?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
