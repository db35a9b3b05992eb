use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sierpinski", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the fractal as a PNG.
    Frame(FrameArgs),
    /// Write the recorded draw commands as JSON.
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Config JSON (canvas + triangle_length). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the canvas to a square of this many pixels.
    #[arg(long)]
    size: Option<u32>,

    /// Override the base triangle edge length in pixels.
    #[arg(long)]
    length: Option<u32>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn resolve_config(args: &ConfigArgs) -> anyhow::Result<sierpinski::SierpinskiConfig> {
    let mut cfg = match &args.config {
        Some(path) => sierpinski::SierpinskiConfig::from_json_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => sierpinski::SierpinskiConfig::default(),
    };
    if let Some(size) = args.size {
        cfg.canvas = sierpinski::Canvas::square(size);
    }
    if let Some(length) = args.length {
        cfg.triangle_length = length;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(&args.config)?;
    let frame = sierpinski::render_frame(&cfg)?;

    ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    tracing::info!(path = %args.out.display(), "wrote frame");
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(&args.config)?;
    let plan = sierpinski::DrawPlan::record(&cfg)?;

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, plan.to_json_pretty()?)
        .with_context(|| format!("write plan '{}'", args.out.display()))?;

    tracing::info!(
        path = %args.out.display(),
        fills = plan.fill_count(),
        "wrote plan"
    );
    Ok(())
}
