//! `scalar-kalman` binary: runs every configured track from a JSON config (or
//! the built-in position/velocity defaults), exports one belief trace per
//! track and runs the dropout sweep.
//!
//! ```bash
//! scalar-kalman --config run.json --output traces/ --format tsv
//! scalar-kalman --schema
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use scalar_kalman::config::{OutputParameters, TrackingConfig};
use scalar_kalman::evaluation::{TraceFormat, TracingSink};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "scalar-kalman",
    version,
    about = "Scalar Kalman filter over a simulated noisy sensor"
)]
struct Args {
    /// JSON configuration file. Defaults are used when absent.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write one belief trace per track into this directory (overrides the config).
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Trace format: csv, tsv or json.
    #[arg(long)]
    format: Option<TraceFormat>,

    /// Skip the dropout sweep.
    #[arg(long, default_value_t = false)]
    no_sweep: bool,

    /// Log every recorded belief.
    #[arg(long, default_value_t = false)]
    log_beliefs: bool,

    /// Print the configuration JSON Schema and exit.
    #[arg(long, default_value_t = false)]
    schema: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_target(false)
        .init();

    if args.schema {
        println!("{}", serde_json::to_string_pretty(&TrackingConfig::schema())?);
        return Ok(());
    }

    let mut config = match args.config.as_deref() {
        Some(path) => TrackingConfig::from_json_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => {
            info!("no configuration file provided, using defaults");
            TrackingConfig::default()
        }
    };

    if let Some(directory) = args.output {
        let format = args
            .format
            .or(config.output.as_ref().map(|o| o.format))
            .unwrap_or_default();
        config.output = Some(OutputParameters { directory, format });
    } else if let (Some(format), Some(out)) = (args.format, config.output.as_mut()) {
        out.format = format;
    }
    if args.no_sweep {
        config.sweep = None;
    }

    let runs = config.build_runs().context("invalid tracking configuration")?;
    if let Some(out) = &config.output {
        std::fs::create_dir_all(&out.directory).with_context(|| {
            format!("failed to create trace directory {}", out.directory.display())
        })?;
    }

    for (name, mut run) in runs {
        if args.log_beliefs {
            run = run.with_sink(Box::new(TracingSink::new(name.as_str())));
        }
        let summary = run
            .run()
            .with_context(|| format!("tracking run '{name}' failed"))?;

        info!(
            track = %name,
            started_at = %summary.started_at.to_rfc3339(),
            seconds = summary.seconds,
            "final belief {} after {} timesteps ({} missed)",
            summary.final_belief,
            summary.timesteps,
            summary.missed
        );
        let (lo, hi) = summary.final_belief.sigma_band(2.0);
        info!(
            track = %name,
            "μ ± 2σ = [{lo:.3}, {hi:.3}] holds {:.2}% of the belief",
            100.0 * summary.final_belief.probability_within(2.0)
        );
        info!(
            track = %name,
            "estimation error: mean={:.4}, std_dev={:.4}",
            summary.estimation_error.mean(),
            summary.estimation_error.std_dev()
        );

        if let Some(out) = &config.output {
            let path = out.path_for(&name);
            run.trace()
                .export(&path, out.format)
                .with_context(|| format!("failed to write trace to {}", path.display()))?;
            info!(track = %name, path = %path.display(), format = %out.format, "belief trace written");
        }
    }

    if let Some(sweep) = config.build_sweep().context("invalid sweep configuration")? {
        for outcome in sweep.run().context("dropout sweep failed")? {
            info!(
                "for pfail={} mean error: {:.2}, std dev: {:.2}",
                outcome.dropout_probability,
                outcome.estimation_error.mean(),
                outcome.estimation_error.std_dev()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Args::try_parse_from(["scalar-kalman", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn log_level_parses_and_defaults_to_info() {
        let args = Args::try_parse_from(["scalar-kalman"]).unwrap();
        assert_eq!(args.log_level, LevelFilter::INFO);

        let args = Args::try_parse_from(["scalar-kalman", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_level, LevelFilter::DEBUG);
    }

    #[test]
    fn output_flag_takes_a_directory() {
        let args =
            Args::try_parse_from(["scalar-kalman", "-o", "traces", "--format", "tsv"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("traces")));
        assert_eq!(args.format, Some(TraceFormat::Tsv));
    }
}
