use std::{
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hero-motion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Map one scroll progress value to layer parameters.
    Scroll(ScrollArgs),
    /// Print the entrance descriptor of every hero element.
    Descriptors(ConfigArgs),
    /// Simulate a mount and print one JSON frame per line.
    Timeline(TimelineArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Motion config JSON. Built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ScrollArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Scroll progress in `[0, 1]`. Omit for the neutral frame.
    #[arg(long, allow_negative_numbers = true)]
    progress: Option<f64>,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Seconds to simulate after mount. Defaults to the settle time.
    #[arg(long)]
    duration: Option<f64>,

    /// Sampling rate in frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Constant scroll progress applied to every frame.
    #[arg(long, allow_negative_numbers = true)]
    scroll: Option<f64>,

    /// Canvas width.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Canvas height.
    #[arg(long, default_value_t = 800)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hero_motion=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Scroll(args) => cmd_scroll(args),
        Command::Descriptors(args) => cmd_descriptors(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<hero_motion::MotionConfig> {
    let Some(path) = path else {
        return Ok(hero_motion::MotionConfig::default());
    };
    hero_motion::MotionConfig::from_path(path)
        .with_context(|| format!("load motion config '{}'", path.display()))
}

fn cmd_scroll(args: ScrollArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.config.as_deref())?;
    let frame = config.scroll.map(args.progress);
    let out = std::io::stdout().lock();
    serde_json::to_writer_pretty(out, &frame).context("write scroll frame")?;
    println!();
    Ok(())
}

fn cmd_descriptors(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let panel = hero_motion::HeroPanel::new(hero_motion::HeroLayout::standard(), config)?;
    let descriptors: Vec<_> = panel.descriptors().collect();
    let out = std::io::stdout().lock();
    serde_json::to_writer_pretty(out, &descriptors).context("write descriptors")?;
    println!();
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.config.as_deref())?;
    let fps = hero_motion::Fps::new(args.fps, 1)?;
    let mut panel = hero_motion::HeroPanel::new(hero_motion::HeroLayout::standard(), config)?
        .with_canvas(hero_motion::Canvas {
            width: args.width,
            height: args.height,
        });

    let duration = args.duration.unwrap_or_else(|| panel.settle_secs());
    if !duration.is_finite() || duration < 0.0 {
        anyhow::bail!("--duration must be a non-negative number of seconds");
    }
    let frames = fps.frames_for_secs(duration);

    panel.mount(0.0);
    let mut out = BufWriter::new(std::io::stdout().lock());
    for i in 0..=frames {
        let now = fps.frame_to_secs(hero_motion::FrameIndex(i));
        let frame = panel.frame(now, args.scroll);
        serde_json::to_writer(&mut out, &frame)
            .with_context(|| format!("write frame {i}"))?;
        writeln!(out)?;
    }
    out.flush().context("flush timeline output")?;

    let unfinished = panel.unmount();
    tracing::info!(frames = frames + 1, unfinished, "timeline done");
    Ok(())
}
