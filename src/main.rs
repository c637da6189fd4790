#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

use clap::Parser;
use std::process;

#[macro_use]
mod macros;

mod analyze;
mod cli;
mod config;
mod ntp;
mod probe;
mod report;

/// Initialize Logging Subsystem
///
/// Warnings and errors go to stderr, everything else to stdout so that
/// progress lines follow the report's stream.
fn logging(cfg: &config::Log, level: log::LevelFilter) -> Result<(), fern::InitError> {
  let mut dispatch = fern::Dispatch::new()
    .format(|out, msg, record| {
      out.finish(format_args!("{} [{}] {}", record.level(), chrono::Local::now().to_rfc3339(), msg))
    })
    .level(level)
    .chain(fern::Dispatch::new()
      .filter(|metadata| metadata.level() > log::Level::Warn)
      .chain(std::io::stdout()))
    .chain(fern::Dispatch::new().level(log::LevelFilter::Warn).chain(std::io::stderr()));

  // If specified, log to a file
  if let Some(ref filename) = cfg.file {
    dispatch = dispatch.chain(fern::log_file(filename)?);
  }

  dispatch.apply()?;
  Ok(())
}

fn main() {
  let cli = cli::Cli::parse();

  // Apply configuration
  let cfg = match cli.config {
    Some(ref path) => {
      config::Config::read(path).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
      })
    }
    None => config::Config::default(),
  };

  let mut level = cfg.log.level_filter().unwrap_or_else(|err| {
    eprintln!("{}", err);
    process::exit(1);
  });
  if cli.verbose {
    level = level.max(log::LevelFilter::Info);
  }
  if cli.debug {
    level = level.max(log::LevelFilter::Debug);
  }

  // Init logging
  logging(&cfg.log, level).unwrap_or_else(|err| {
    eprintln!("Couldn't start logging: {}", err);
    process::exit(1);
  });

  let plan = if cli.exhaustive {
    probe::ProbePlan::exhaustive()
  } else {
    cfg.probe.plan()
  };

  // resolved exactly once, before any socket exists
  let target = probe::ProbeTarget::resolve(&cli.target, cli.port, cli.timeout, cli.threshold)
    .unwrap_or_else(|err| fatal!("{}", err));
  info!("Probing {} ({}) with {} requests, waiting up to {:?} for each",
        target.host,
        target.addr,
        plan.len(),
        target.timeout);

  let mut runner = probe::ProbeRunner::new(&target).unwrap_or_else(|err| fatal!("{}", err));
  let results = runner.sweep(&plan);

  if cli.json {
    match report::json_report(&target, &results, cli.debug) {
      Ok(doc) => println!("{}", doc),
      Err(err) => fatal!("Couldn't serialize results: {}", err),
    }
  } else {
    let amplifying = analyze::analyze(&results, target.threshold);
    report::print_report(&target, &results, &amplifying);
  }
}
