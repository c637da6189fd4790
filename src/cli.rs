use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use crate::ntp;

/// Check an NTP server for mode 6 and mode 7 amplification
#[derive(Debug, Parser)]
#[command(name = "ntp-ampcheck", version)]
pub struct Cli {
  /// Single IP address or hostname to test
  #[arg(short, long)]
  pub target: String,

  /// Port to test
  #[arg(short, long, default_value_t = ntp::PORT,
        value_parser = clap::value_parser!(u16).range(1..))]
  pub port: u16,

  /// Seconds to wait for a response before sending the next request
  #[arg(long, default_value = "2", value_parser = parse_timeout)]
  pub timeout: Duration,

  /// Smallest amplification factor to report
  #[arg(long, default_value_t = 10.0, value_parser = parse_threshold)]
  pub threshold: f64,

  /// Print progress for every request to stdout
  #[arg(long)]
  pub verbose: bool,

  /// Print request and response bytes as well
  #[arg(short, long)]
  pub debug: bool,

  /// TOML configuration file
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Probe all 32 opcodes and 46 request codes instead of the curated subset
  #[arg(long)]
  pub exhaustive: bool,

  /// Print every result as a JSON document instead of the report
  #[arg(long)]
  pub json: bool,
}

/// Longest wait per request, one hour.
const MAX_TIMEOUT_SECS: f64 = 3600.0;

fn parse_timeout(arg: &str) -> Result<Duration, String> {
  let secs: f64 = arg.parse().map_err(|_| format!("{:?} isn't a number of seconds", arg))?;
  if secs.is_nan() || secs <= 0.0 {
    return Err("the timeout must be more than zero seconds".to_owned());
  }
  if secs > MAX_TIMEOUT_SECS {
    return Err(format!("the timeout can't be longer than {} seconds", MAX_TIMEOUT_SECS));
  }
  Duration::try_from_secs_f64(secs).map_err(|err| err.to_string())
}

fn parse_threshold(arg: &str) -> Result<f64, String> {
  let threshold: f64 = arg.parse().map_err(|_| format!("{:?} isn't a number", arg))?;
  if !threshold.is_finite() || threshold < 0.0 {
    return Err("the threshold must be a finite number, zero or more".to_owned());
  }
  Ok(threshold)
}
