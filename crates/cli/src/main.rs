use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use tianqi_core::{FetchConfig, WeatherClient, WeatherReport, extract_report};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fetch a weather.com.cn city forecast and print it as JSON
#[derive(Parser, Debug)]
#[command(name = "tianqi")]
#[command(version)]
#[command(about = "Fetch a city's multi-day forecast and life indices as JSON", long_about = None)]
struct Args {
    /// City code assigned by the weather.com.cn directory (e.g. 101010100)
    #[arg(value_name = "CITY_CODE")]
    city_code: String,

    /// Extract from a saved HTML file (or "-" for stdin) instead of fetching
    #[arg(long, value_name = "FILE")]
    from_file: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pretty-print the JSON document
    #[arg(long)]
    pretty: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for the page request
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable verbose progress output
    #[arg(short, long)]
    verbose: bool,
}

/// Print a styled banner for verbose mode
fn print_banner() {
    eprintln!("\n{} {} {}", "tianqi".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    eprintln!("{}", "Fetch city forecasts from weather.com.cn".dimmed());
    eprintln!();
}

/// Print a styled step message
fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an error message
fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

async fn build_report(args: &Args) -> anyhow::Result<WeatherReport> {
    let report = match &args.from_file {
        Some(path) if path == "-" => {
            if args.verbose {
                print_step(1, 2, "Reading markup from stdin");
            }
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            extract_report(&buffer, &args.city_code)
        }
        Some(path) => {
            if args.verbose {
                print_step(1, 2, &format!("Reading markup from {}", path.bright_white()));
            }
            let html = fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
            extract_report(&html, &args.city_code)
        }
        None => {
            if args.verbose {
                print_step(
                    1,
                    2,
                    &format!("Fetching forecast for city {}", args.city_code.bright_white()),
                );
            }
            let config = FetchConfig { timeout: args.timeout, ..FetchConfig::default() };
            let config = match &args.user_agent {
                Some(ua) => FetchConfig { user_agent: ua.clone(), ..config },
                None => config,
            };
            WeatherClient::with_config(config).report(&args.city_code).await
        }
    };

    Ok(report)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
    }

    let report = build_report(&args).await?;

    if args.verbose {
        print_step(2, 2, "Writing document");
    }

    let document = if args.pretty {
        report.to_json_pretty().context("Failed to serialize report")?
    } else {
        report.to_json().context("Failed to serialize report")?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &document).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            if args.verbose {
                print_success(&format!("Document written to {}", path.display()));
            }
        }
        None => {
            println!("{}", document);
        }
    }

    if report.is_failure() {
        if args.verbose {
            print_error(&format!("Lookup failed for city {}", args.city_code));
        }
        std::process::exit(1);
    }

    Ok(())
}
