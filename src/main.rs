use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use tracing::{error, info};

use wp_perf_monitor::config::{Config, OutputFormat};
use wp_perf_monitor::observability::SnapshotMetrics;
use wp_perf_monitor::{logging, render, Dashboard, Error, HostReport, VERSION};

const USAGE: &str = "\
Usage: wp_perf_monitor [HOST_REPORT_FILE | -]

Reads a WordPress host export (JSON) and prints a performance dashboard.
With no file, HOST_REPORT is used, then stdin.

Options:
  -h, --help       Print this help
  -V, --version    Print version

Environment:
  SAVEQUERIES, SLOW_QUERY_THRESHOLD_MS, HOST_REPORT, OUTPUT_FORMAT,
  SLOW_QUERY_LIMIT, LOG_LEVEL, RUST_LOG, LOG_FORMAT, SERVICE_NAME";

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Version,
    /// Build a report; `None` falls back to HOST_REPORT or stdin.
    Report(Option<PathBuf>),
}

fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut source = None;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-" => source = Some(PathBuf::from(&arg)),
            flag if flag.starts_with('-') => return Err(format!("unknown option '{}'", flag)),
            _ if source.is_some() => return Err(format!("unexpected argument '{}'", arg)),
            _ => source = Some(PathBuf::from(&arg)),
        }
    }

    Ok(Command::Report(source))
}

fn main() {
    let source = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return;
        }
        Ok(Command::Version) => {
            println!("wp_perf_monitor {}", VERSION);
            return;
        }
        Ok(Command::Report(source)) => source,
        Err(message) => {
            eprintln!("wp_perf_monitor: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("wp_perf_monitor: {}", e);
            std::process::exit(2);
        }
    };

    logging::init(&config.logging);
    info!("Starting wp_perf_monitor {}", VERSION);
    config.log_summary();

    if let Err(e) = run(&config, source) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config, source: Option<PathBuf>) -> Result<(), Error> {
    // Positional argument wins over HOST_REPORT; "-" means stdin
    let source = source.or_else(|| config.output.host_report.clone());

    let host = load_host_report(source)?;
    let report = Dashboard::new(&host, config.monitor.clone()).report();

    let output = match config.output.format {
        OutputFormat::Text => render::text(&report, config.output.slow_query_limit),
        OutputFormat::Json => render::json(&report)?,
        OutputFormat::Prometheus => {
            let metrics = SnapshotMetrics::new()?;
            metrics.record(&report);
            metrics.export()?
        }
    };

    println!("{}", output);
    Ok(())
}

fn load_host_report(source: Option<PathBuf>) -> Result<HostReport, Error> {
    match source {
        Some(path) if path.as_os_str() != "-" => {
            info!("Reading host report from {}", path.display());
            let file = File::open(&path).map_err(|error| Error::Io {
                path: path.display().to_string(),
                error,
            })?;
            Ok(HostReport::from_reader(BufReader::new(file))?)
        }
        _ => {
            info!("Reading host report from stdin");
            Ok(HostReport::from_reader(io::stdin().lock())?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_parse_report_source() {
        assert_eq!(parse(&[]), Ok(Command::Report(None)));
        assert_eq!(
            parse(&["export.json"]),
            Ok(Command::Report(Some(PathBuf::from("export.json"))))
        );
        assert_eq!(parse(&["-"]), Ok(Command::Report(Some(PathBuf::from("-")))));
    }

    #[test]
    fn test_parse_flags() {
        assert_eq!(parse(&["--help"]), Ok(Command::Help));
        assert_eq!(parse(&["-h"]), Ok(Command::Help));
        assert_eq!(parse(&["export.json", "--version"]), Ok(Command::Version));
    }

    #[test]
    fn test_flags_are_not_paths() {
        assert_eq!(parse(&["--verbose"]), Err("unknown option '--verbose'".to_string()));
        assert!(parse(&["a.json", "b.json"]).is_err());
    }
}
