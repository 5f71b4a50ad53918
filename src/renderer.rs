//! # Terminal Visualization Rendering
//!
//! Renders the temporal-hour engine's outputs as plain-text charts: the
//! year-long hour-length curves and the single-day comparison between
//! temporal and fixed clock hours. Everything builds a `Vec<String>` first
//! so tests can assert on content; the `draw_*` wrappers print.

use crate::config::ChartConfig;
use crate::temporal::format_minutes;
use crate::{CurrentHourPosition, TemporalHours, YearDataPoint};
use chrono::{NaiveDate, TimeZone, Timelike};
use std::fmt;

/// Width reserved on the left for Y-axis labels plus the axis line.
const Y_AXIS_WIDTH: usize = 7;

/// Month label positions on the year axis (non-leap offsets, matching the
/// series' fixed 365-day layout).
const MONTH_STARTS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Comparison-bar window: 4:00 to 22:00, the daylight band of interest.
const BAR_START_HOUR: f64 = 4.0;
const BAR_END_HOUR: f64 = 22.0;
const BAR_WIDTH: usize = 64;

/// Build the year chart: both hour-length curves over the 365-day series,
/// a dashed 60-minute reference, month labels, and an `X` today marker.
pub fn year_chart_lines(
    data: &[YearDataPoint],
    today: Option<u32>,
    config: &ChartConfig,
) -> Vec<String> {
    let rows = config.rows.max(2);
    let day_step = config.day_step.max(1);
    let columns = data.len().div_ceil(day_step);

    if data.is_empty() {
        return vec!["(no data)".to_string()];
    }

    // Scale over both curves, like the chart's shared Y axis.
    let (min_val, max_val) = data.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), point| {
            (
                min.min(point.day_hour_minutes).min(point.night_hour_minutes),
                max.max(point.day_hour_minutes).max(point.night_hour_minutes),
            )
        },
    );
    let range = if (max_val - min_val).abs() < f64::EPSILON {
        1.0
    } else {
        max_val - min_val
    };

    let value_to_row = |minutes: f64| {
        let normalized = (minutes - min_val) / range;
        ((1.0 - normalized) * (rows as f64 - 1.0)).round() as usize
    };

    let mut grid = vec![vec![' '; columns + Y_AXIS_WIDTH]; rows];

    // Y-axis labels at the extremes and the 60-minute reference row.
    let mut label_row = |minutes: f64, row: usize| {
        let label = format!("{:>width$}m", format_minutes(minutes), width = Y_AXIS_WIDTH - 2);
        for (i, ch) in label.chars().enumerate() {
            if i < Y_AXIS_WIDTH - 1 {
                grid[row][i] = ch;
            }
        }
        grid[row][Y_AXIS_WIDTH - 1] = '│';
    };
    label_row(max_val, 0);
    label_row(min_val, rows - 1);

    let sixty_row = value_to_row(60.0);
    if (min_val..=max_val).contains(&60.0) {
        label_row(60.0, sixty_row);
        // Dashed reference line; the curves draw over it.
        for column in 0..columns {
            if column % 2 == 0 {
                grid[sixty_row][column + Y_AXIS_WIDTH] = '-';
            }
        }
    }

    for row in grid.iter_mut() {
        if row[Y_AXIS_WIDTH - 1] == ' ' {
            row[Y_AXIS_WIDTH - 1] = '│';
        }
    }

    // Today's column gets a full-height marker line under the curves.
    let today_column = today.map(|d| (d as usize / day_step).min(columns - 1));
    if let Some(column) = today_column {
        for row in grid.iter_mut() {
            if row[column + Y_AXIS_WIDTH] == ' ' {
                row[column + Y_AXIS_WIDTH] = '|';
            }
        }
    }

    // Night curve first, day curve second so daylight wins shared cells.
    for column in 0..columns {
        let point = &data[(column * day_step).min(data.len() - 1)];
        let night_row = value_to_row(point.night_hour_minutes);
        let day_row = value_to_row(point.day_hour_minutes);

        grid[night_row][column + Y_AXIS_WIDTH] = '·';
        grid[day_row][column + Y_AXIS_WIDTH] = '•';

        if today_column == Some(column) {
            grid[night_row][column + Y_AXIS_WIDTH] = 'X';
            grid[day_row][column + Y_AXIS_WIDTH] = 'X';
        }
    }

    let mut lines: Vec<String> = grid
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect();

    // Month axis below the chart.
    let mut months = vec![' '; columns + Y_AXIS_WIDTH];
    for (name, start) in MONTH_NAMES.iter().zip(MONTH_STARTS.iter()) {
        let column = Y_AXIS_WIDTH + *start as usize / day_step;
        for (i, ch) in name.chars().enumerate() {
            if column + i < months.len() {
                months[column + i] = ch;
            }
        }
    }
    lines.push(months.into_iter().collect());

    lines.push(format!(
        "{}• day hours   · night hours   X today",
        " ".repeat(Y_AXIS_WIDTH)
    ));
    if data.iter().any(|p| p.is_polar) {
        lines.push(format!(
            "{}⚠ polar period plotted at placeholder values",
            " ".repeat(Y_AXIS_WIDTH)
        ));
    }

    lines
}

/// Render the year chart to stdout.
pub fn draw_year(data: &[YearDataPoint], today: Option<u32>, config: &ChartConfig) {
    for line in year_chart_lines(data, today, config) {
        println!("{}", line);
    }
}

/// Build the single-day panel: sunrise/sunset, hour lengths, the current
/// temporal hour, and the temporal-vs-modern tick comparison bars.
pub fn day_summary_lines<Tz>(
    location_label: &str,
    date: NaiveDate,
    temporal: &TemporalHours<Tz>,
    position: &CurrentHourPosition,
) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut lines = Vec::new();
    lines.push(format!(
        "Temporal hours — {} — {}",
        location_label,
        date.format("%Y-%m-%d")
    ));

    if temporal.is_polar_day_or_night() {
        let regime = if temporal.is_polar_day {
            "Polar day — the sun does not set today."
        } else if temporal.is_polar_night {
            "Polar night — the sun does not rise today."
        } else {
            "Polar conditions — no usable sunrise/sunset today."
        };
        lines.push(regime.to_string());
        lines.push(format!(
            "Day hour {} min   Night hour {} min",
            format_minutes(temporal.day_hour_minutes),
            format_minutes(temporal.night_hour_minutes)
        ));
        return lines;
    }

    // Non-polar: both events are present.
    let (sunrise, sunset) = match (&temporal.sunrise, &temporal.sunset) {
        (Some(r), Some(s)) => (r, s),
        _ => return lines,
    };

    lines.push(format!(
        "Sunrise {}   Sunset {}",
        sunrise.format("%H:%M"),
        sunset.format("%H:%M")
    ));
    lines.push(format!(
        "Daylight {} min (hour = {} min)   Night {} min (hour = {} min)",
        format_minutes(temporal.daylight_minutes),
        format_minutes(temporal.day_hour_minutes),
        format_minutes(temporal.night_minutes),
        format_minutes(temporal.night_hour_minutes)
    ));
    lines.push(format!(
        "Now: {} hour {} of 12 · {} min in",
        if position.is_day { "day" } else { "night" },
        position.hour,
        format_minutes(position.minutes_into_hour)
    ));

    let sunrise_hour = sunrise.hour() as f64 + sunrise.minute() as f64 / 60.0;
    let sunset_hour = sunset.hour() as f64 + sunset.minute() as f64 / 60.0;

    lines.push(String::new());
    lines.push("How the two clocks carve the same day (4:00–22:00):".to_string());

    // Temporal ticks stretch with the daylight; modern ticks stand still.
    let day_hour_in_hours = temporal.day_hour_minutes / 60.0;
    let temporal_ticks: Vec<f64> = (0..=4)
        .map(|k| sunrise_hour + (k * 3) as f64 * day_hour_in_hours)
        .collect();
    let modern_ticks: Vec<f64> = vec![6.0, 9.0, 12.0, 15.0, 18.0];

    lines.push(format!(
        "temporal {}",
        comparison_bar(sunrise_hour, sunset_hour, &temporal_ticks)
    ));
    lines.push(format!(
        "modern   {}",
        comparison_bar(sunrise_hour, sunset_hour, &modern_ticks)
    ));
    lines.push("Same sun. Different clocks.".to_string());

    lines
}

/// Render the single-day panel to stdout.
pub fn draw_day<Tz>(
    location_label: &str,
    date: NaiveDate,
    temporal: &TemporalHours<Tz>,
    position: &CurrentHourPosition,
) where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    for line in day_summary_lines(location_label, date, temporal, position) {
        println!("{}", line);
    }
}

/// One timeline bar: daylight span filled, tick marks overlaid.
fn comparison_bar(sunrise_hour: f64, sunset_hour: f64, ticks: &[f64]) -> String {
    let mut bar = vec!['.'; BAR_WIDTH];

    let start = hour_to_column(sunrise_hour);
    let end = hour_to_column(sunset_hour);
    for cell in bar.iter_mut().take(end).skip(start) {
        *cell = '#';
    }

    for tick in ticks {
        bar[hour_to_column(*tick).min(BAR_WIDTH - 1)] = '+';
    }

    bar.into_iter().collect()
}

fn hour_to_column(hour: f64) -> usize {
    let normalized = (hour - BAR_START_HOUR) / (BAR_END_HOUR - BAR_START_HOUR);
    (normalized.clamp(0.0, 1.0) * (BAR_WIDTH as f64 - 1.0)).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::temporal::{calculate_temporal_hours, current_temporal_hour};
    use chrono::{TimeZone, Utc};

    fn test_year() -> Vec<YearDataPoint> {
        // A plausible mid-latitude year: day hours swing 45..75 minutes,
        // night hours mirror them.
        (0..365u32)
            .map(|day_of_year| {
                let phase = (day_of_year as f64 - 172.0) / 365.0 * std::f64::consts::TAU;
                let day = 60.0 + 15.0 * phase.cos();
                YearDataPoint {
                    date: NaiveDate::from_ymd_opt(2025, 1, 1)
                        .unwrap()
                        .checked_add_days(chrono::Days::new(u64::from(day_of_year)))
                        .unwrap(),
                    day_of_year,
                    day_hour_minutes: day,
                    night_hour_minutes: 120.0 - day,
                    is_polar: false,
                }
            })
            .collect()
    }

    #[test]
    fn test_year_chart_contains_both_curves_and_marker() {
        let config = Config::default();
        let lines = year_chart_lines(&test_year(), Some(180), &config.chart);

        let joined = lines.join("\n");
        assert!(joined.contains('•'), "day curve missing");
        assert!(joined.contains('·'), "night curve missing");
        assert!(joined.contains('X'), "today marker missing");
        assert!(joined.contains("Jan") && joined.contains("Dec"));

        // Chart rows plus month axis plus legend.
        assert_eq!(lines.len(), config.chart.rows + 2);
    }

    #[test]
    fn test_year_chart_polar_note() {
        let mut data = test_year();
        data[0].is_polar = true;
        data[0].day_hour_minutes = 120.0;
        data[0].night_hour_minutes = 0.0;

        let config = Config::default();
        let lines = year_chart_lines(&data, None, &config.chart);
        assert!(lines.last().unwrap().contains("polar"));
    }

    #[test]
    fn test_day_summary_for_a_plain_day() {
        let noon = Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap();
        let temporal = calculate_temporal_hours(0.0, 0.0, noon);
        let position = current_temporal_hour(0.0, 0.0, noon);

        let lines = day_summary_lines(
            "0.0°N, 0.0°E",
            noon.date_naive(),
            &temporal,
            &position,
        );
        let joined = lines.join("\n");

        assert!(joined.contains("Sunrise"));
        assert!(joined.contains("Sunset"));
        assert!(joined.contains("Now: day hour"));
        assert!(joined.contains("temporal "));
        assert!(joined.contains("modern   "));
    }

    #[test]
    fn test_day_summary_polar_day() {
        let noon = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let temporal = calculate_temporal_hours(69.65, 18.96, noon);
        let position = current_temporal_hour(69.65, 18.96, noon);

        let lines = day_summary_lines("69.7°N, 19.0°E", noon.date_naive(), &temporal, &position);
        let joined = lines.join("\n");

        assert!(joined.contains("Polar day"));
        assert!(joined.contains('∞'));
    }

    #[test]
    fn test_comparison_bar_daylight_span() {
        let bar = comparison_bar(6.0, 18.0, &[6.0, 12.0, 18.0]);
        assert_eq!(bar.len(), BAR_WIDTH);
        assert!(bar.contains('#'));
        assert!(bar.contains('+'));
        // Pre-dawn cells stay empty.
        assert!(bar.starts_with('.'));
    }
}
