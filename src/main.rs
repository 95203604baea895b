use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bucketry::{profiles, EpochMillis, Fidelity, Resolution, Resolver, Settings, TimeRange};
use clap::{Args as ClapArgs, Parser, Subcommand};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bucketry")]
#[command(about = "Resolve time ranges to chart and query bucket sizes")]
struct Args {
    /// Settings file (TOML, JSON or YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the bucket size for one range
    Resolve {
        #[command(flatten)]
        range: RangeArgs,

        /// Fidelity profile (defaults to the configured one)
        #[arg(short, long, conflicts_with = "series_api")]
        fidelity: Option<Fidelity>,

        /// Use the events series API ladder
        #[arg(long)]
        series_api: bool,

        /// Print the full resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve one range under every fidelity profile
    Compare {
        #[command(flatten)]
        range: RangeArgs,

        /// Print resolutions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every ladder table
    Profiles,
}

#[derive(ClapArgs, Debug)]
struct RangeArgs {
    /// Relative period (e.g., "24h", "90d")
    #[arg(short, long)]
    period: Option<String>,

    /// Range start (RFC 3339 or epoch milliseconds)
    #[arg(long, requires = "end")]
    start: Option<String>,

    /// Range end (RFC 3339 or epoch milliseconds)
    #[arg(long, requires = "start")]
    end: Option<String>,
}

impl RangeArgs {
    fn to_range(&self) -> Result<TimeRange> {
        Ok(TimeRange {
            period: self.period.clone(),
            start: self.start.as_deref().map(parse_timestamp).transpose()?,
            end: self.end.as_deref().map(parse_timestamp).transpose()?,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref()).with_context(|| match &args.config {
        Some(path) => format!("Failed to load settings from {}", path.display()),
        None => "Failed to load settings from environment".to_string(),
    })?;
    init_logging(&settings);

    let resolver = Resolver::new(&settings);

    match args.command {
        Command::Resolve {
            range,
            fidelity,
            series_api,
            json,
        } => {
            let range = range.to_range()?;
            let resolution = if series_api {
                resolver.resolve_series_api(&range)?
            } else {
                resolver.resolve(&range, fidelity.unwrap_or(settings.default_fidelity))?
            };
            print_resolutions(&[resolution], json)
        }
        Command::Compare { range, json } => {
            let resolutions = resolver.resolve_all(&range.to_range()?)?;
            print_resolutions(&resolutions, json)
        }
        Command::Profiles => {
            print_profiles();
            Ok(())
        }
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over the settings filter.
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse RFC 3339 or integer epoch milliseconds
fn parse_timestamp(s: &str) -> Result<EpochMillis> {
    let s = s.trim();
    if let Ok(millis) = s.parse::<i64>() {
        return Ok(EpochMillis(millis));
    }
    match OffsetDateTime::parse(s, &Rfc3339) {
        Ok(dt) => Ok(EpochMillis((dt.unix_timestamp_nanos() / 1_000_000) as i64)),
        Err(e) => bail!("Invalid timestamp {:?}: {}", s, e),
    }
}

fn print_resolutions(resolutions: &[Resolution], json: bool) -> Result<()> {
    if json {
        let out = match resolutions {
            [single] => serde_json::to_string_pretty(single)?,
            _ => serde_json::to_string_pretty(resolutions)?,
        };
        println!("{}", out);
        return Ok(());
    }

    match resolutions {
        [single] => println!("{}", single.interval),
        _ => {
            for r in resolutions {
                let name = r.fidelity.map_or("series-api", |f| f.as_str());
                println!(
                    "{:<10} {:>5} ({} buckets over {} min)",
                    name,
                    r.interval.to_string(),
                    r.bucket_count,
                    r.minutes
                );
            }
        }
    }
    Ok(())
}

fn print_profiles() {
    let ladders = Fidelity::ALL
        .into_iter()
        .map(|f| (f.as_str(), profiles::ladder(f)))
        .chain(std::iter::once(("series-api", profiles::series_api_ladder())));

    for (name, ladder) in ladders {
        let steps: Vec<String> = ladder
            .steps()
            .iter()
            .map(|s| format!("{}→{}", s.threshold_minutes, s.interval))
            .collect();
        println!("{:<10} {}", name, steps.join(", "));
    }
}
