//! # Temporal Hours Application Entry Point
//!
//! This binary wires the calculation engine to the terminal: it loads the
//! location from configuration (or flags), captures "now" exactly once,
//! and renders either the single-day panel or the year chart, as text or
//! as JSON.

// Test modules
#[cfg(test)]
mod tests;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use std::env;
use temporal_hours_lib::config::Config;
use temporal_hours_lib::renderer;
use temporal_hours_lib::report::{DayReport, YearReport};
use temporal_hours_lib::temporal::{
    calculate_temporal_hours, calculate_year_data, current_temporal_hour, day_of_year, local_noon,
    location_name,
};

#[derive(Debug, Default)]
struct CliArgs {
    latitude: Option<f64>,
    longitude: Option<f64>,
    date: Option<NaiveDate>,
    year_mode: bool,
    year_value: Option<i32>,
    json: bool,
    config_path: Option<String>,
    help: bool,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut args = raw.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lat" => {
                cli.latitude = Some(
                    next_value(&mut args, "--lat")?
                        .parse()
                        .context("--lat expects a decimal latitude")?,
                )
            }
            "--lon" => {
                cli.longitude = Some(
                    next_value(&mut args, "--lon")?
                        .parse()
                        .context("--lon expects a decimal longitude")?,
                )
            }
            "--date" => {
                let value = next_value(&mut args, "--date")?;
                cli.date = Some(
                    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                        .context("--date expects YYYY-MM-DD")?,
                )
            }
            "--year" => {
                cli.year_mode = true;
                // Optional numeric value; "--year 2027" selects the year,
                // bare "--year" charts the current one.
                if let Some(next) = args.peek() {
                    if let Ok(year) = next.parse::<i32>() {
                        cli.year_value = Some(year);
                        args.next();
                    }
                }
            }
            "--json" => cli.json = true,
            "--config" => cli.config_path = Some(next_value(&mut args, "--config")?),
            "--help" | "-h" => cli.help = true,
            other => bail!("unknown argument: {other} (try --help)"),
        }
    }

    Ok(cli)
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .with_context(|| format!("{flag} expects a value"))
}

fn print_usage() {
    println!("temporal-hours — temporal (unequal) hour calculator");
    println!();
    println!("USAGE:");
    println!("  temporal-hours [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  --lat <DEG>      Latitude override (north positive)");
    println!("  --lon <DEG>      Longitude override (east positive)");
    println!("  --date <DATE>    Compute for this date (YYYY-MM-DD) instead of now");
    println!("  --year [YEAR]    Render the year chart (default: current year)");
    println!("  --json           Machine-readable output");
    println!("  --config <PATH>  Config file (default: temporal-config.toml)");
    println!("  -h, --help       Show this help");
}

/// Main application entry point.
fn main() -> Result<()> {
    let cli = parse_args(env::args().skip(1))?;
    if cli.help {
        print_usage();
        return Ok(());
    }

    let config = match &cli.config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };

    let latitude = cli.latitude.unwrap_or(config.location.latitude);
    let longitude = cli.longitude.unwrap_or(config.location.longitude);
    // Flag-supplied coordinates have no configured name to go with them.
    let label = if cli.latitude.is_some() || cli.longitude.is_some() {
        location_name(latitude, longitude)
    } else {
        format!(
            "{} ({})",
            config.location.name,
            location_name(latitude, longitude)
        )
    };

    // The engine never reads the clock; "now" is captured exactly once,
    // here. An explicit --date is anchored at its local noon.
    let now = Local::now();
    let query = match cli.date {
        Some(date) => local_noon(&Local, date),
        None => now,
    };

    if cli.year_mode {
        let year = cli.year_value.unwrap_or_else(|| query.year());
        let data = calculate_year_data(latitude, longitude, year, &Local);
        let today = (query.year() == year).then(|| day_of_year(query.date_naive()));

        if cli.json {
            let report = YearReport::new(latitude, longitude, year, today, data);
            println!("{}", report.to_json().context("serializing year report")?);
        } else {
            println!("Hour length through the year — {}", label);
            renderer::draw_year(&data, today, &config.chart);
        }
        return Ok(());
    }

    let temporal = calculate_temporal_hours(latitude, longitude, query.clone());
    let current = current_temporal_hour(latitude, longitude, query.clone());

    if cli.json {
        let report = DayReport::new(latitude, longitude, query.date_naive(), &temporal, current);
        println!("{}", report.to_json().context("serializing day report")?);
    } else {
        renderer::draw_day(&label, query.date_naive(), &temporal, &current);
    }

    Ok(())
}
