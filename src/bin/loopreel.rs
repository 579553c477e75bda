use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use loopreel::{
    BackendKind, Category, CycleOpts, FfmpegSink, FfmpegSinkOpts, Framing, Gallery, Library,
    PngSequenceSink, Progress, RenderBackend, Settings, SvgOptions, create_backend, frame_at,
    frame_to_svg, render_cycle, run_gallery, write_png,
};
use tracing_subscriber::EnvFilter;

/// Progress grid used by `check`.
const CHECK_SAMPLES: u64 = 240;

#[derive(Parser, Debug)]
#[command(name = "loopreel", version, about = "Looping concept animations for LLM internals")]
struct Cli {
    /// Settings JSON (all fields optional).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs here instead of stderr. `RUST_LOG` sets the filter (default `warn`).
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the catalog.
    List(ListArgs),
    /// Render one frame as PNG, SVG or JSON (chosen by the output extension).
    Frame(FrameArgs),
    /// Render looping cycles to an MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Write one cycle as a numbered PNG sequence.
    Strip(StripArgs),
    /// Browse the gallery in the terminal.
    Gallery(GalleryArgs),
    /// Verify catalog/registry consistency and render every animation over a progress grid.
    Check,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Only list one category.
    #[arg(long)]
    category: Option<Category>,

    /// Emit JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Animation key, e.g. `rag`.
    #[arg(long)]
    key: String,

    /// Wrap the animation in its viewer card.
    #[arg(long)]
    card: bool,

    /// Pixels per canvas unit (overrides settings).
    #[arg(long)]
    scale: Option<f64>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    output: OutputArgs,

    /// Progress in [0, 1).
    #[arg(long, default_value_t = 0.0)]
    progress: f64,

    /// Output path; `.png`, `.svg` or `.json`.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    output: OutputArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Frames per second (overrides settings).
    #[arg(long)]
    fps: Option<u32>,

    /// Number of loops to encode.
    #[arg(long, default_value_t = 1)]
    cycles: u32,
}

#[derive(Args, Debug)]
struct StripArgs {
    #[command(flatten)]
    output: OutputArgs,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Frames in the cycle.
    #[arg(long, default_value_t = 12)]
    frames: u64,
}

#[derive(Args, Debug)]
struct GalleryArgs {
    /// Key selected on start (overrides settings).
    #[arg(long)]
    key: Option<String>,
}

#[derive(Clone, Copy, Debug)]
enum FrameFormat {
    Png,
    Svg,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = match (&cli.log_file, &cli.cmd) {
        (Some(path), _) => Some(path.clone()),
        (None, Command::Gallery(_)) => Some(std::env::temp_dir().join("loopreel.log")),
        (None, _) => None,
    };
    init_logging(log_file.as_deref())?;

    let library = Library::builtin()?;
    let mut settings = Settings::load_or_default(cli.config.as_deref())?;
    match cli.cmd {
        Command::List(args) => cmd_list(library, args),
        Command::Frame(args) => {
            apply_output_overrides(&mut settings, &args.output);
            settings.validate(library)?;
            cmd_frame(library, &settings, args)
        }
        Command::Render(args) => {
            apply_output_overrides(&mut settings, &args.output);
            if let Some(fps) = args.fps {
                settings.render.fps = fps;
            }
            settings.validate(library)?;
            cmd_render(library, &settings, args)
        }
        Command::Strip(args) => {
            apply_output_overrides(&mut settings, &args.output);
            settings.validate(library)?;
            cmd_strip(library, &settings, args)
        }
        Command::Gallery(args) => {
            if let Some(key) = args.key {
                settings.initial_key = key;
            }
            settings.validate(library)?;
            cmd_gallery(library, &settings)
        }
        Command::Check => cmd_check(library),
    }
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create log file '{}'", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))
}

fn apply_output_overrides(settings: &mut Settings, output: &OutputArgs) {
    if let Some(scale) = output.scale {
        settings.render.scale = scale;
    }
}

fn framing(output: &OutputArgs) -> Framing {
    if output.card {
        Framing::Card
    } else {
        Framing::Bare
    }
}

fn backend(settings: &Settings) -> anyhow::Result<Box<dyn RenderBackend>> {
    Ok(create_backend(BackendKind::Cpu, settings.render_settings())?)
}

fn cmd_list(library: &Library, args: ListArgs) -> anyhow::Result<()> {
    let entries = library.catalog().list_filtered(args.category);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for e in entries {
        let tag = if e.metaphor { "  (metaphorical)" } else { "" };
        println!(
            "{:<16} {:<4} {:<15} {}{tag}",
            e.key,
            e.icon,
            e.category.display_name(),
            e.label
        );
    }
    Ok(())
}

fn frame_format(path: &Path) -> anyhow::Result<FrameFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => Ok(FrameFormat::Png),
        Some("svg") => Ok(FrameFormat::Svg),
        Some("json") => Ok(FrameFormat::Json),
        _ => anyhow::bail!(
            "cannot infer output format from '{}' (use .png, .svg or .json)",
            path.display()
        ),
    }
}

fn cmd_frame(library: &Library, settings: &Settings, args: FrameArgs) -> anyhow::Result<()> {
    let format = frame_format(&args.out)?;
    let (entry, animation) = library.resolve(&args.output.key)?;
    let progress = Progress::new(args.progress)?;
    let frame = frame_at(entry, animation.as_ref(), progress, framing(&args.output));

    loopreel::ensure_parent_dir(&args.out)?;
    match format {
        FrameFormat::Png => {
            let pixels = backend(settings)?.render(&frame)?;
            write_png(&args.out, &pixels)?;
        }
        FrameFormat::Svg => {
            let svg = frame_to_svg(
                &frame,
                &SvgOptions {
                    scale: settings.render.scale,
                    background: Some(settings.render.background),
                    ..SvgOptions::default()
                },
            );
            std::fs::write(&args.out, svg)
                .with_context(|| format!("write svg '{}'", args.out.display()))?;
        }
        FrameFormat::Json => {
            let json = serde_json::to_string_pretty(&frame)?;
            std::fs::write(&args.out, json)
                .with_context(|| format!("write json '{}'", args.out.display()))?;
        }
    }
    eprintln!("wrote {} ({})", args.out.display(), frame.caption());
    Ok(())
}

fn cmd_render(library: &Library, settings: &Settings, args: RenderArgs) -> anyhow::Result<()> {
    let (entry, animation) = library.resolve(&args.output.key)?;
    let mut opts = CycleOpts::at_fps(settings.render.fps, settings.cycle_secs)?;
    opts.cycles = args.cycles;
    opts.framing = framing(&args.output);

    let mut backend = backend(settings)?;
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&args.out, settings.render.background));
    let stats = render_cycle(entry, animation.as_ref(), &opts, backend.as_mut(), &mut sink)?;
    eprintln!(
        "wrote {} ({} frames, {}x{})",
        args.out.display(),
        stats.frames,
        stats.width,
        stats.height
    );
    Ok(())
}

fn cmd_strip(library: &Library, settings: &Settings, args: StripArgs) -> anyhow::Result<()> {
    let (entry, animation) = library.resolve(&args.output.key)?;
    let opts = CycleOpts {
        frames_per_cycle: args.frames,
        cycles: 1,
        fps: settings.render.fps,
        framing: framing(&args.output),
    };
    let mut backend = backend(settings)?;
    let mut sink = PngSequenceSink::new(&args.out_dir, entry.key.clone());
    let stats = render_cycle(entry, animation.as_ref(), &opts, backend.as_mut(), &mut sink)?;
    eprintln!("wrote {} frames to {}", stats.frames, args.out_dir.display());
    Ok(())
}

fn cmd_gallery(library: &Library, settings: &Settings) -> anyhow::Result<()> {
    let ctx = settings.playback_context()?;
    let mut gallery = Gallery::with_selection(library, ctx, &settings.initial_key)?;
    run_gallery(&mut gallery)
}

fn cmd_check(library: &Library) -> anyhow::Result<()> {
    loopreel::check_consistency(library.catalog(), library.registry())?;
    let mut failures = Vec::new();
    for entry in library.catalog().list_all() {
        let (_, animation) = library.resolve(&entry.key)?;
        for i in 0..CHECK_SAMPLES {
            let p = Progress::from_frame(i, CHECK_SAMPLES)?;
            let frame = animation.render(p);
            let again = animation.render(p);
            if !frame.is_well_formed() {
                failures.push(format!("{}: non-finite geometry at p={}", entry.key, p.value()));
            } else if frame.fingerprint() != again.fingerprint() {
                failures.push(format!("{}: non-deterministic at p={}", entry.key, p.value()));
            } else if frame.caption().is_empty() {
                failures.push(format!("{}: empty caption at p={}", entry.key, p.value()));
            }
        }
    }
    if !failures.is_empty() {
        for f in &failures {
            eprintln!("{f}");
        }
        anyhow::bail!("{} check failure(s)", failures.len());
    }
    println!(
        "ok: {} animations x {CHECK_SAMPLES} samples",
        library.catalog().len()
    );
    Ok(())
}
