use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ratecurve_cli::{build_profile, load_settings, sample_curve, simulate};
use ratecurve_shared::{EaseSetting, ProfileSettings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Deterministic download speed curves", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON settings file; individual flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Target speed in units per second
    #[arg(long, global = true)]
    speed: Option<f64>,

    /// Total units to transfer
    #[arg(long, global = true)]
    size: Option<f64>,

    /// Noise seed (must be below 2^32)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Ease curve for the steady-phase noise
    #[arg(long, global = true, value_enum)]
    ease: Option<EaseArg>,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample the speed curve over the whole transfer
    Curve {
        /// Number of points to sample
        #[arg(short, long)]
        samples: Option<usize>,
    },

    /// Run a simulated download on a virtual clock
    Simulate {
        /// Clock step between ticks in milliseconds
        #[arg(short, long)]
        tick_ms: Option<f64>,

        /// Stop after this many ticks
        #[arg(short, long)]
        max_ticks: Option<u32>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EaseArg {
    Cosine,
    Smoothstep,
    Decel,
}

impl From<EaseArg> for EaseSetting {
    fn from(arg: EaseArg) -> Self {
        match arg {
            EaseArg::Cosine => EaseSetting::Cosine,
            EaseArg::Smoothstep => EaseSetting::Smoothstep,
            EaseArg::Decel => EaseSetting::Decel,
        }
    }
}

impl Args {
    fn settings(&self) -> Result<ProfileSettings> {
        let mut settings = load_settings(self.config.as_deref())?;
        if let Some(speed) = self.speed {
            settings.speed = speed;
        }
        if let Some(size) = self.size {
            settings.size = size;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(ease) = self.ease {
            settings.ease = ease.into();
        }
        match self.command {
            Command::Curve { samples } => {
                if let Some(samples) = samples {
                    settings.samples = samples;
                }
            }
            Command::Simulate { tick_ms, .. } => {
                if let Some(tick_ms) = tick_ms {
                    settings.tick_ms = tick_ms;
                }
            }
        }
        Ok(settings)
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = args.settings()?;
    log::info!(
        "Speed {} units/s, size {} units, seed {}",
        settings.speed,
        settings.size,
        settings.seed
    );

    match args.command {
        Command::Curve { .. } => {
            let profile = build_profile(&settings)?;
            let report = sample_curve(&profile, settings.samples);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{:>12} {:>10} {:>12}", "elapsed_ms", "normal", "speed");
                for point in &report.points {
                    println!(
                        "{:>12.1} {:>10.4} {:>12.3}",
                        point.elapsed_ms, point.normal_value, point.value
                    );
                }
                println!("range: {:.3} .. {:.3}", report.min, report.max);
            }
        }
        Command::Simulate { max_ticks, .. } => {
            let reports = simulate(&settings, max_ticks)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                println!(
                    "{:>6} {:>12} {:>12} {:>5} {:>10}",
                    "tick", "elapsed_ms", "downloaded", "%", "speed"
                );
                for r in &reports {
                    println!(
                        "{:>6} {:>12.1} {:>12.2} {:>5} {:>10.3}",
                        r.ticks, r.elapsed_ms, r.downloaded, r.percent, r.speed
                    );
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    run(&args).context("ratecurve failed")?;

    Ok(())
}
