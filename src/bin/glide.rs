use std::{
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use glide::{AnimationState, Animator, Combinator, PathGeometry, PauseSignals};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glide", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Index a path and sample evenly spaced points along it.
    Path(PathArgs),
    /// Drive a combinator descriptor with a fixed tick and print the trajectory.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Path data (`M x,y C ...`).
    #[arg(long)]
    d: String,

    /// Number of points to sample, including both ends.
    #[arg(long, default_value_t = 11)]
    samples: usize,

    /// Accept lines, quadratics, arcs and close commands.
    #[arg(long, default_value_t = false)]
    normalize: bool,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Combinator descriptor JSON.
    #[arg(long)]
    config: PathBuf,

    /// Initial value handed to `start`.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Tick interval in milliseconds.
    #[arg(long, default_value_t = 16.0)]
    tick_ms: f64,

    /// Stop after this many ticks even if the animation is still running.
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,

    /// Hold a pause signal during `[from, to)` ms, as `NAME:FROM-TO`.
    #[arg(long = "pause", value_parser = parse_pause_window)]
    pauses: Vec<PauseWindow>,
}

#[derive(Clone, Debug)]
struct PauseWindow {
    signal: String,
    from_ms: f64,
    to_ms: f64,
}

fn parse_pause_window(s: &str) -> Result<PauseWindow, String> {
    let (signal, range) = s
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:FROM-TO, got '{s}'"))?;
    let (from, to) = range
        .split_once('-')
        .ok_or_else(|| format!("expected FROM-TO after ':', got '{range}'"))?;
    let from_ms: f64 = from.trim().parse().map_err(|e| format!("bad FROM: {e}"))?;
    let to_ms: f64 = to.trim().parse().map_err(|e| format!("bad TO: {e}"))?;
    if signal.is_empty() || from_ms.is_nan() || to_ms.is_nan() || from_ms >= to_ms {
        return Err(format!("invalid pause window '{s}'"));
    }
    Ok(PauseWindow {
        signal: signal.to_owned(),
        from_ms,
        to_ms,
    })
}

#[derive(serde::Serialize)]
struct PathReport<'a> {
    total_length: f64,
    serialized: String,
    curves: &'a [glide::Curve],
    points: Vec<SamplePoint>,
}

#[derive(serde::Serialize)]
struct SamplePoint {
    length: f64,
    x: f64,
    y: f64,
}

#[derive(serde::Serialize)]
struct TickRecord {
    tick: u64,
    now: f64,
    current: f64,
    velocity: f64,
    finished: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Path(args) => cmd_path(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let path = if args.normalize {
        PathGeometry::parse_normalized(&args.d)
    } else {
        PathGeometry::parse(&args.d)
    }
    .context("parse path data")?;

    let total = path.total_length();
    let n = args.samples.max(2);
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let length = total * (i as f64) / ((n - 1) as f64);
        let p = path
            .point_at_length(length.min(total))
            .with_context(|| format!("sample point at length {length}"))?;
        points.push(SamplePoint {
            length,
            x: p.x,
            y: p.y,
        });
    }

    let report = PathReport {
        total_length: total,
        serialized: path.serialize(),
        curves: path.curves(),
        points,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serialize path report")?
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.tick_ms > 0.0 && args.tick_ms.is_finite(),
        "--tick-ms must be > 0"
    );
    let json = std::fs::read_to_string(&args.config)
        .with_context(|| format!("read descriptor '{}'", args.config.display()))?;

    let mut signals = PauseSignals::new();
    let mut anim = Combinator::from_json(&json, &mut signals)
        .with_context(|| format!("build combinator from '{}'", args.config.display()))?;

    for w in &args.pauses {
        anyhow::ensure!(
            signals.get(&w.signal).is_some(),
            "pause signal '{}' is not used by the descriptor",
            w.signal
        );
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut state = AnimationState::new();
    anim.start(&mut state, args.from, 0.0, None);

    let mut finished = false;
    let mut tick = 0u64;
    while !finished && tick < args.max_ticks {
        tick += 1;
        let now = tick as f64 * args.tick_ms;
        for (name, flag) in signals.iter() {
            let paused = args
                .pauses
                .iter()
                .any(|w| w.signal == name && w.from_ms <= now && now < w.to_ms);
            flag.set(paused);
        }

        finished = anim.step(&mut state, now);
        let record = TickRecord {
            tick,
            now,
            current: state.current,
            velocity: state.velocity,
            finished,
        };
        serde_json::to_writer(&mut out, &record).context("write tick record")?;
        writeln!(out).context("write tick record")?;
    }
    out.flush().context("flush output")?;

    if !finished {
        tracing::warn!(ticks = tick, "animation still running at --max-ticks");
    }
    Ok(())
}
