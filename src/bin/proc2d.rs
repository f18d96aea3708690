use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use proc2d::{Color, FnSketch, FrameDriver, Proc, ProcConfig, ScriptedHost, StrokeCap, TextAlign};

#[derive(Parser, Debug)]
#[command(name = "proc2d", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a built-in sketch headlessly and save its last frame.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Built-in sketch to run.
    #[arg(long, value_enum, default_value_t = Demo::Shapes)]
    demo: Demo,

    /// Number of frame ticks to run.
    #[arg(long, default_value_t = 1)]
    frames: usize,

    /// Output image; the format follows the extension (PNG fallback).
    #[arg(long)]
    out: PathBuf,

    /// Canvas configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// TrueType/OpenType font used by sketches that draw text.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Demo {
    Hello,
    Shapes,
    Curves,
    Transforms,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
    }
}

fn load_config(args: &FrameArgs) -> anyhow::Result<ProcConfig> {
    let cfg = match &args.config {
        Some(path) => ProcConfig::from_path(path)?,
        None => ProcConfig::default(),
    };
    Ok(cfg.with_env_overrides())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.frames > 0, "--frames must be > 0");

    let cfg = load_config(&args)?;
    let mut p = Proc::from_config(&cfg)?;
    if let Some(path) = &args.font {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        let id = p.load_font(bytes)?;
        p.text_font(id);
    }

    let mut sketch = match args.demo {
        Demo::Hello => FnSketch::new(hello),
        Demo::Shapes => FnSketch::new(shapes),
        Demo::Curves => FnSketch::new(curves),
        Demo::Transforms => FnSketch::new(transforms),
    };
    let mut host = ScriptedHost::ticks(args.frames);
    FrameDriver::new().run(&mut p, &mut sketch, &mut host)?;

    p.screenshot(&args.out)
        .with_context(|| format!("write '{}'", args.out.display()))?;
    eprintln!(
        "wrote {} ({} frame(s), {}x{})",
        args.out.display(),
        p.frame_count(),
        p.width(),
        p.height()
    );
    Ok(())
}

fn hello(p: &mut Proc) {
    let (w, h) = (f64::from(p.width()), f64::from(p.height()));
    p.background(Color::gray(230));
    p.fill(Color::rgb(240, 80, 60));
    p.stroke(Color::BLACK);
    p.stroke_width(3.0);
    p.circle(w / 2.0, h / 2.0, w.min(h) / 2.0);
    p.text_size(32.0);
    p.text_align(TextAlign::Center);
    p.text_color(Color::BLACK);
    p.text("hello", w / 2.0, h - 20.0);
}

fn shapes(p: &mut Proc) {
    p.background(Color::gray(220));
    p.fill(Color::rgba(255, 0, 0, 128));
    p.ellipse(50.0, 50.0, 80.0, 80.0);

    p.push();
    p.fill(Color::rgb(0, 255, 0));
    p.rect(200.0, 200.0, 50.0, 100.0);
    p.pop();

    p.triangle(100.0, 100.0, 120.0, 120.0, 80.0, 120.0);
    p.no_fill();
    p.stroke_dash(0.0, &[6.0, 4.0]);
    p.polygon(&[(260.0, 40.0), (360.0, 60.0), (330.0, 140.0), (260.0, 40.0)]);
}

fn curves(p: &mut Proc) {
    p.background(Color::WHITE);
    p.no_fill();
    p.stroke(Color::rgb(30, 60, 200));
    p.stroke_width(4.0);
    p.stroke_cap(StrokeCap::Round);
    for (i, tension) in [-1.0, 0.0, 0.5, 1.0].into_iter().enumerate() {
        let dy = 80.0 * i as f64;
        p.curve_tightness(tension);
        p.curve(0.0, 40.0 + dy, 80.0, 20.0 + dy, 320.0, 80.0 + dy, 400.0, 60.0 + dy);
    }
    p.stroke(Color::rgb(200, 30, 60));
    p.bezier(40.0, 360.0, 120.0, 300.0, 280.0, 400.0, 360.0, 340.0);
    p.arc(200.0, 200.0, 120.0, 80.0, 0.0, std::f64::consts::PI);
}

fn transforms(p: &mut Proc) {
    let (w, h) = (f64::from(p.width()), f64::from(p.height()));
    p.background(Color::gray(30));
    p.no_stroke();
    let n = 12;
    for i in 0..n {
        p.push();
        p.translate(w / 2.0, h / 2.0);
        p.rotate(std::f64::consts::TAU * i as f64 / n as f64 + 0.05 * p.frame_count() as f64);
        let shade = 255 * (i + 1) / n;
        p.fill(Color::rgb(shade as u8, 120, 255 - shade as u8));
        p.rect(40.0, -10.0, 120.0, 20.0);
        p.pop();
    }
}
