mod cli;

use agriclimate::config::Config;
use agriclimate::error::{AgriClimateError, Result};
use agriclimate::logic::{Dashboard, ImpactEngine};
use agriclimate::models::WeatherPayload;
use agriclimate::report;
use chrono::{Local, NaiveDate};
use clap::Parser;
use cli::{Cli, Commands};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            Ok(())
        }
        Some(Commands::Check) => check(&cli),
        None => show(&cli),
    }
}

fn show(cli: &Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.clone())?;
    let payload = read_payload(payload_source(cli, &config)?)?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let forecast_days = config.forecast_days(cli.days)?;

    let dashboard = Dashboard::build(&payload, today, forecast_days);
    if !dashboard.has_data() {
        tracing::warn!("Payload has no current conditions and no forecast days");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!(
            "{}",
            report::render(
                &dashboard,
                &config.crop.name,
                config.dashboard.location.as_deref()
            )
        );
    }

    Ok(())
}

fn check(cli: &Cli) -> Result<()> {
    let config = match Config::load_or_default(cli.config.clone()) {
        Ok(c) => {
            println!("Config: OK");
            c
        }
        Err(e) => {
            println!("Config: FAILED ({})", e);
            return Err(e);
        }
    };

    let source = payload_source(cli, &config)?;
    let payload = read_payload(source.clone())?;
    println!("Payload: OK ({})", describe_source(&source));
    println!(
        "  Location: {}",
        payload
            .location()
            .or(config.dashboard.location.as_deref())
            .unwrap_or("unknown")
    );
    println!(
        "  Current conditions: {}",
        if payload.current_conditions.is_some() {
            "present"
        } else {
            "missing"
        }
    );

    if payload.current_conditions.is_none() && payload.days.is_empty() {
        return Err(AgriClimateError::InvalidData(
            "payload has neither current conditions nor forecast days".into(),
        ));
    }

    let bad_dates = payload
        .days
        .iter()
        .filter(|d| NaiveDate::parse_from_str(&d.datetime, "%Y-%m-%d").is_err())
        .count();
    println!(
        "  Forecast days: {} ({} with unparsable dates)",
        payload.days.len(),
        bad_dates
    );

    for (rule, count) in ImpactEngine::new().match_counts(&payload.days) {
        println!("    {}: {} day(s)", rule, count);
    }

    Ok(())
}

/// `--input` wins over the config's default payload; `-` means stdin
fn payload_source(cli: &Cli, config: &Config) -> Result<PathBuf> {
    cli.input
        .clone()
        .or_else(|| config.dashboard.payload.clone())
        .ok_or_else(|| {
            AgriClimateError::NotFound(
                "no weather payload given; pass --input <FILE> or set dashboard.payload".into(),
            )
        })
}

fn describe_source(path: &Path) -> String {
    if path == Path::new("-") {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

fn read_payload(path: PathBuf) -> Result<WeatherPayload> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&path).map_err(|e| {
            AgriClimateError::NotFound(format!("payload {}: {}", path.display(), e))
        })?
    };

    tracing::debug!(bytes = json.len(), "Read weather payload");
    WeatherPayload::from_json(&json)
}
