//! joystick-core demo binary
//!
//! Replays a recorded pointer trace (or an interactive REPL feed) through
//! one or more joystick instances and logs every published reading.

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use joystick_core::config::AppConfig;
use joystick_core::{cli, replay, JoystickTracker};

/// Joystick core demo - replay pointer traces through configured joysticks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Trace file to replay (overrides the config's trace)
    #[arg(short, long)]
    trace: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Honor per-row delays while replaying
    #[arg(long)]
    realtime: bool,

    /// Start an interactive sample REPL instead of replaying a trace
    #[arg(long)]
    repl: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    let config = AppConfig::load(&args.config).await?;
    info!(
        "Loaded {} joystick instance(s) from {}",
        config.joysticks.len(),
        args.config
    );

    let mut joysticks = Vec::new();
    for entry in &config.joysticks {
        let mut tracker = JoystickTracker::new(entry.area.clone())
            .with_context(|| format!("Invalid control area for joystick '{}'", entry.name))?;
        let name = entry.name.clone();
        tracker.monitor_mut().subscribe(move |out| {
            info!(
                "🕹️  [{}] thumb=({:.2}, {:.2}) emit=({:.2}, {:.2}) polar=({:.1}°, {:.2})",
                name,
                out.displayed.x,
                out.displayed.y,
                out.emitted.x,
                out.emitted.y,
                out.polar.degrees,
                out.polar.distance
            );
        });
        joysticks.push((entry.name.clone(), tracker));
    }

    if args.repl {
        return cli::run_repl(&mut joysticks);
    }

    let trace_path = args
        .trace
        .or_else(|| config.trace.clone())
        .context("No trace file given: set `trace:` in the config, pass --trace, or use --repl")?;
    let records = replay::load_trace(&trace_path)?;
    info!("Replaying {} sample(s) from {}", records.len(), trace_path);

    for record in &records {
        if args.realtime && record.dt_ms > 0 {
            tokio::time::sleep(Duration::from_millis(record.dt_ms)).await;
        }
        for (_, tracker) in joysticks.iter_mut() {
            tracker.handle(record.sample());
        }
    }

    // Final readings as JSON for downstream tooling.
    let mut summary = serde_json::Map::new();
    for (name, tracker) in &joysticks {
        let out = tracker.monitor().output();
        summary.insert(
            name.clone(),
            serde_json::json!({
                "displayed": { "x": out.displayed.x, "y": out.displayed.y },
                "emitted": { "x": out.emitted.x, "y": out.emitted.y },
                "polar": { "degrees": out.polar.degrees, "distance": out.polar.distance },
            }),
        );
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(summary))?
    );

    Ok(())
}

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();
}
