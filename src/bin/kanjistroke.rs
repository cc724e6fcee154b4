use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    rc::Rc,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kanjistroke", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the parsed strokes and their timing as JSON.
    Inspect(InspectArgs),
    /// Render the drawing at one point in time as a PNG.
    Frame(FrameArgs),
    /// Play the drawing and write every frame as a numbered PNG.
    Animate(AnimateArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// KanjiVG SVG file; every `<path>` is one stroke, in document order.
    #[arg(long, conflicts_with = "path")]
    svg: Option<PathBuf>,

    /// Path data of one stroke (repeat in stroke order).
    #[arg(long = "path", value_name = "DATA")]
    path: Vec<String>,

    /// Animator config JSON (duration mode, start delay).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Square canvas size in pixels.
    #[arg(long, default_value_t = 218)]
    size: u32,

    /// Render style JSON.
    #[arg(long)]
    style: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    render: RenderArgs,

    /// Time since the start of the run, in milliseconds (start delay included).
    #[arg(long, default_value_t = u64::MAX)]
    at_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    render: RenderArgs,

    /// Host frame rate, 1 to 1000.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=1000))]
    fps: u32,

    /// Directory for `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    enable_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn enable_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let format = fmt::format().without_time().with_target(false).compact();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .event_format(format)
        .init();
}

fn read_text(path: &Path, what: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {what} '{}'", path.display()))
}

fn load_engine(input: &InputArgs) -> anyhow::Result<kanjistroke::StrokeEngine> {
    let config = match &input.config {
        Some(path) => kanjistroke::AnimatorConfig::from_json(&read_text(path, "config")?)
            .with_context(|| format!("parse config '{}'", path.display()))?,
        None => kanjistroke::AnimatorConfig::default(),
    };
    let mut engine = kanjistroke::StrokeEngine::with_config(config);

    match &input.svg {
        Some(path) => engine
            .load_svg(&read_text(path, "svg")?)
            .with_context(|| format!("load strokes from '{}'", path.display()))?,
        None => {
            if input.path.is_empty() {
                anyhow::bail!("no strokes given: pass --svg FILE or one --path per stroke");
            }
            engine
                .load_path_data(&input.path)
                .context("load strokes from --path")?;
        }
    }
    Ok(engine)
}

fn make_renderer(args: &RenderArgs) -> anyhow::Result<kanjistroke::CpuRenderer> {
    let style = match &args.style {
        Some(path) => kanjistroke::RenderStyle::from_json(&read_text(path, "style")?)
            .with_context(|| format!("parse style '{}'", path.display()))?,
        None => kanjistroke::RenderStyle::default(),
    };
    let viewport = kanjistroke::Viewport::kanjivg(kanjistroke::Canvas::square(args.size))?;
    Ok(kanjistroke::CpuRenderer::new(viewport, style)?)
}

fn write_png(path: &Path, frame: &kanjistroke::FrameRGBA) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.to_straight_alpha(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

#[derive(serde::Serialize)]
struct Inspection<'a> {
    strokes: &'a kanjistroke::StrokeSet,
    total_length: f64,
    draw_ms: u128,
    config: &'a kanjistroke::AnimatorConfig,
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let engine = load_engine(&args.input)?;
    let report = Inspection {
        strokes: engine.strokes(),
        total_length: engine.strokes().total_length(),
        draw_ms: engine.draw_duration().as_millis(),
        config: engine.config(),
    };
    let json = serde_json::to_string_pretty(&report).context("serialize strokes")?;
    println!("{json}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut engine = load_engine(&args.input)?;
    let mut renderer = make_renderer(&args.render)?;

    engine.start_draw_animation()?;
    engine.tick(Duration::from_millis(args.at_ms));
    let geometry = engine
        .current_frame()
        .context("animation produced no frame")?;
    let frame = renderer.render(engine.strokes(), &geometry);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Renders each frame it receives and writes it as the next PNG of a sequence.
struct PngSequenceSink {
    renderer: kanjistroke::CpuRenderer,
    strokes: std::sync::Arc<kanjistroke::StrokeSet>,
    out_dir: PathBuf,
    written: usize,
    completed: bool,
    error: Option<anyhow::Error>,
}

impl kanjistroke::FrameSink for PngSequenceSink {
    fn frame(&mut self, geometry: &kanjistroke::VisibleGeometry) {
        if self.error.is_some() {
            return;
        }
        let frame = self.renderer.render(&self.strokes, geometry);
        let path = self.out_dir.join(format!("frame_{:05}.png", self.written));
        match write_png(&path, &frame) {
            Ok(()) => self.written += 1,
            Err(err) => self.error = Some(err),
        }
    }

    fn complete(&mut self) {
        self.completed = true;
    }
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let mut engine = load_engine(&args.input)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let sink = Rc::new(RefCell::new(PngSequenceSink {
        renderer: make_renderer(&args.render)?,
        strokes: engine.shared_strokes(),
        out_dir: args.out_dir.clone(),
        written: 0,
        completed: false,
        error: None,
    }));
    engine.attach_sink(Rc::clone(&sink));
    engine.start_draw_animation()?;

    let dt = Duration::from_secs(1) / args.fps;
    while engine.tick(dt) == kanjistroke::Phase::Running {
        if sink.borrow().error.is_some() {
            engine.cancel();
            break;
        }
    }

    let mut sink = sink.borrow_mut();
    if let Some(err) = sink.error.take() {
        return Err(err);
    }
    tracing::info!(
        frames = sink.written,
        completed = sink.completed,
        "animation written"
    );
    eprintln!(
        "wrote {} frames to {}",
        sink.written,
        args.out_dir.display()
    );
    Ok(())
}
