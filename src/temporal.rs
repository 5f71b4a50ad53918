//! # Temporal-Hour Engine
//!
//! The calculation core: variable hour lengths from sunrise/sunset, the
//! position of a moment within the twelve-hour grid, and the year series
//! the chart consumes.
//!
//! Everything here is a pure function of its arguments:
//!
//! - Time is threaded explicitly. Nothing calls the wall clock; pass the
//!   instant you care about and the result is reproducible.
//! - Polar conditions are data, not errors. A day with no sunrise/sunset
//!   yields an infinite hour length on one side and zero on the other, and
//!   the flags tell the caller which regime owns the day.
//! - The hemisphere sign decides the polar classification: both events
//!   missing at northern latitudes reads as polar day, at southern
//!   latitudes as polar night.
//!
//! ## Boundary conventions
//!
//! The daytime interval is `[sunrise, sunset)` — the sunrise instant itself
//! is the first moment of day hour 1, the sunset instant the first moment
//! of night hour 1. A query between midnight and sunrise belongs to the
//! night that began at the *previous* day's sunset.

use crate::solar::{self, SolarTimes};
use crate::{CurrentHourPosition, TemporalHours, YearDataPoint};
use chrono::{DateTime, Datelike, Days, Duration, LocalResult, NaiveDate, TimeZone};

/// Minutes in a civil day.
const MINUTES_PER_DAY: f64 = 1440.0;

/// Temporal hours per regime (daylight or night).
const HOURS_PER_REGIME: f64 = 12.0;

/// Samples in one year series. Always 365: the chart never plots a leap
/// year's Dec 31.
const YEAR_SERIES_LEN: u32 = 365;

/// Chart placeholder for an hour that never ends (polar regime).
const POLAR_PLACEHOLDER_MINUTES: f64 = 120.0;

/// Derive the temporal-hour breakdown for the calendar day containing
/// `date` at the given position.
///
/// Coordinates are signed decimal degrees and are not validated; garbage
/// in, garbage out — but never a panic. See [`TemporalHours`] for the
/// invariants the result upholds.
pub fn calculate_temporal_hours<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    date: DateTime<Tz>,
) -> TemporalHours<Tz> {
    let SolarTimes { sunrise, sunset } = solar::solar_times(&date, latitude, longitude);

    match (sunrise, sunset) {
        (Some(sunrise), Some(sunset)) => {
            let daylight_minutes = minutes_between(&sunset, &sunrise);
            let night_minutes = MINUTES_PER_DAY - daylight_minutes;
            TemporalHours {
                day_hour_minutes: daylight_minutes / HOURS_PER_REGIME,
                night_hour_minutes: night_minutes / HOURS_PER_REGIME,
                sunrise: Some(sunrise),
                sunset: Some(sunset),
                is_polar_day: false,
                is_polar_night: false,
                daylight_minutes,
                night_minutes,
            }
        }
        (sunrise, sunset) => {
            let both_missing = sunrise.is_none() && sunset.is_none();
            let is_polar_day = both_missing && latitude > 0.0;
            let is_polar_night = both_missing && latitude < 0.0;
            TemporalHours {
                day_hour_minutes: if is_polar_day { f64::INFINITY } else { 0.0 },
                night_hour_minutes: if is_polar_day { 0.0 } else { f64::INFINITY },
                sunrise,
                sunset,
                is_polar_day,
                is_polar_night,
                daylight_minutes: if is_polar_day { MINUTES_PER_DAY } else { 0.0 },
                night_minutes: if is_polar_day { 0.0 } else { MINUTES_PER_DAY },
            }
        }
    }
}

/// Locate `date` within the temporal-hour grid of its day.
///
/// Returns the 1-indexed hour of the active regime and the minutes already
/// spent inside it. Under polar conditions there is nothing to subdivide
/// and the degenerate `{hour: 0, minutes_into_hour: 0}` comes back, with
/// `is_day` reporting whether the standing sun or the absent sun rules.
pub fn current_temporal_hour<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    date: DateTime<Tz>,
) -> CurrentHourPosition {
    let temporal = calculate_temporal_hours(latitude, longitude, date.clone());

    let (sunrise, sunset) = match (&temporal.sunrise, &temporal.sunset) {
        (Some(sunrise), Some(sunset)) => (sunrise.clone(), sunset.clone()),
        _ => {
            return CurrentHourPosition {
                hour: 0,
                is_day: temporal.is_polar_day,
                minutes_into_hour: 0.0,
            }
        }
    };

    if date >= sunrise && date < sunset {
        // Daytime; the sunrise instant itself belongs to hour 1.
        let since_sunrise = minutes_between(&date, &sunrise);
        CurrentHourPosition {
            hour: (since_sunrise / temporal.day_hour_minutes).floor() as u32 + 1,
            is_day: true,
            minutes_into_hour: since_sunrise % temporal.day_hour_minutes,
        }
    } else {
        let since_sunset = if date >= sunset {
            minutes_between(&date, &sunset)
        } else {
            // Between midnight and sunrise the running night began at the
            // previous day's sunset.
            let yesterday =
                calculate_temporal_hours(latitude, longitude, date.clone() - Duration::days(1));
            match yesterday.sunset {
                Some(prev_sunset) => minutes_between(&date, &prev_sunset),
                // First morning after a polar period: no sunset to measure
                // from, so report the degenerate position.
                None => {
                    return CurrentHourPosition {
                        hour: 0,
                        is_day: false,
                        minutes_into_hour: 0.0,
                    }
                }
            }
        };
        CurrentHourPosition {
            hour: (since_sunset / temporal.night_hour_minutes).floor() as u32 + 1,
            is_day: false,
            minutes_into_hour: since_sunset % temporal.night_hour_minutes,
        }
    }
}

/// Materialize the year series for charting: one sample per day from
/// Jan 1, exactly 365 samples regardless of leap status.
///
/// Each day is anchored at its local noon in `tz` for the solar query.
/// Polar days carry finite placeholders (120-minute ceiling for the regime
/// that never ends, zero for the other) so the chart has a value to plot.
pub fn calculate_year_data<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    year: i32,
    tz: &Tz,
) -> Vec<YearDataPoint> {
    let mut data = Vec::with_capacity(YEAR_SERIES_LEN as usize);
    let jan1 = match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(d) => d,
        None => return data,
    };

    for day_of_year in 0..YEAR_SERIES_LEN {
        let date = match jan1.checked_add_days(Days::new(u64::from(day_of_year))) {
            Some(d) => d,
            None => break,
        };
        let temporal = calculate_temporal_hours(latitude, longitude, local_noon(tz, date));

        let is_polar = temporal.is_polar_day_or_night();
        let (day_hour_minutes, night_hour_minutes) = if is_polar {
            (
                if temporal.is_polar_day {
                    POLAR_PLACEHOLDER_MINUTES
                } else {
                    0.0
                },
                if temporal.is_polar_night {
                    POLAR_PLACEHOLDER_MINUTES
                } else {
                    0.0
                },
            )
        } else {
            (temporal.day_hour_minutes, temporal.night_hour_minutes)
        };

        data.push(YearDataPoint {
            date,
            day_of_year,
            day_hour_minutes,
            night_hour_minutes,
            is_polar,
        });
    }

    data
}

/// Resolve a calendar date to its local noon in `tz`.
///
/// Noon is the most stable per-day anchor for solar queries: DST
/// transitions happen at night, so 12:00 always exists. The fallback arms
/// cover exotic zone changes only.
pub fn local_noon<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let noon = date
        .and_hms_opt(12, 0, 0)
        .expect("12:00 is a valid wall-clock time");
    match tz.from_local_datetime(&noon) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(t, _) => t,
        LocalResult::None => tz.from_utc_datetime(&noon),
    }
}

/// Render minutes with at most one decimal place.
///
/// Trailing `.0` is trimmed, exact zero prints as `"0"`, and non-finite
/// values (the polar sentinels) print as the infinity sign.
pub fn format_minutes(minutes: f64) -> String {
    if !minutes.is_finite() {
        return "∞".to_string();
    }
    if minutes == 0.0 {
        return "0".to_string();
    }

    let rounded = (minutes * 10.0).round() / 10.0;
    let text = format!("{:.1}", rounded);
    text.strip_suffix(".0").unwrap_or(&text).to_string()
}

/// Cardinal-direction label for a coordinate pair, e.g. `"40.7°N, 74.0°W"`.
pub fn location_name(latitude: f64, longitude: f64) -> String {
    let lat_dir = if latitude >= 0.0 { 'N' } else { 'S' };
    let lon_dir = if longitude >= 0.0 { 'E' } else { 'W' };
    format!(
        "{:.1}°{}, {:.1}°{}",
        latitude.abs(),
        lat_dir,
        longitude.abs(),
        lon_dir
    )
}

/// 0-indexed ordinal of a date within its own year (Jan 1 = 0). Positions
/// "today" on the year chart's horizontal axis.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal0()
}

/// Signed minutes from `earlier` to `later`, at millisecond resolution.
fn minutes_between<Tz: TimeZone>(later: &DateTime<Tz>, earlier: &DateTime<Tz>) -> f64 {
    (later.clone() - earlier.clone()).num_milliseconds() as f64 / 60_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn equator_equinox_hours_are_near_sixty() {
        let noon = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let t = calculate_temporal_hours(0.0, 0.0, noon);

        assert!(!t.is_polar_day_or_night());
        assert!(
            (t.day_hour_minutes - 60.0).abs() < 1.5,
            "day hour {} should be near 60 at the equator on the equinox",
            t.day_hour_minutes
        );
        assert!(
            (t.night_hour_minutes - 60.0).abs() < 1.5,
            "night hour {} should be near 60 at the equator on the equinox",
            t.night_hour_minutes
        );
    }

    #[test]
    fn daylight_and_night_sum_to_a_full_day() {
        let noon = Utc.with_ymd_and_hms(2025, 7, 24, 12, 0, 0).unwrap();
        let t = calculate_temporal_hours(41.9, 12.5, noon);

        assert!((t.daylight_minutes + t.night_minutes - 1440.0).abs() < 1e-9);
        assert_eq!(t.day_hour_minutes, t.daylight_minutes / 12.0);
        assert_eq!(t.night_hour_minutes, t.night_minutes / 12.0);
    }

    #[test]
    fn arctic_summer_is_polar_day() {
        // Tromsø in late June: midnight sun.
        let noon = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let t = calculate_temporal_hours(69.65, 18.96, noon);

        assert!(t.is_polar_day);
        assert!(!t.is_polar_night);
        assert!(t.is_polar_day_or_night());
        assert!(t.day_hour_minutes.is_infinite());
        assert_eq!(t.night_hour_minutes, 0.0);
        assert_eq!(t.daylight_minutes, 1440.0);
        assert_eq!(t.night_minutes, 0.0);
    }

    #[test]
    fn antarctic_winter_is_polar_night() {
        // McMurdo in late June: the sun never rises.
        let noon = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let t = calculate_temporal_hours(-77.85, 166.67, noon);

        assert!(t.is_polar_night);
        assert!(!t.is_polar_day);
        assert!(t.night_hour_minutes.is_infinite());
        assert_eq!(t.day_hour_minutes, 0.0);
        assert_eq!(t.daylight_minutes, 0.0);
        assert_eq!(t.night_minutes, 1440.0);
    }

    #[test]
    fn sunrise_instant_opens_day_hour_one() {
        let noon = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let t = calculate_temporal_hours(0.0, 0.0, noon);
        let sunrise = t.sunrise.clone().unwrap();

        let pos = current_temporal_hour(0.0, 0.0, sunrise);
        assert_eq!(pos.hour, 1);
        assert!(pos.is_day);
        assert_eq!(pos.minutes_into_hour, 0.0);
    }

    #[test]
    fn year_series_has_365_points_even_in_leap_years() {
        let leap = calculate_year_data(41.9, 12.5, 2024, &Utc);
        let common = calculate_year_data(41.9, 12.5, 2025, &Utc);

        assert_eq!(leap.len(), 365);
        assert_eq!(common.len(), 365);

        // A leap year's series stops at Dec 30; a common year's reaches
        // Dec 31.
        assert_eq!(
            leap.last().unwrap().date,
            NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()
        );
        assert_eq!(
            common.last().unwrap().date,
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
    }

    #[test]
    fn polar_summer_charts_as_placeholder_values() {
        let data = calculate_year_data(69.65, 18.96, 2024, &Utc);
        // June 21, 2024 is ordinal0 172.
        let midsummer = &data[172];

        assert!(midsummer.is_polar);
        assert_eq!(midsummer.day_hour_minutes, 120.0);
        assert_eq!(midsummer.night_hour_minutes, 0.0);

        // The hemisphere sign drives the classification, so Tromsø's polar
        // winter charts the same way as its summer.
        let midwinter = &data[0];
        assert!(midwinter.is_polar);
        assert_eq!(midwinter.day_hour_minutes, 120.0);
        assert_eq!(midwinter.night_hour_minutes, 0.0);

        // A southern polar winter takes the night placeholder.
        let south = calculate_year_data(-77.85, 166.67, 2024, &Utc);
        let june = &south[172];
        assert!(june.is_polar);
        assert_eq!(june.day_hour_minutes, 0.0);
        assert_eq!(june.night_hour_minutes, 120.0);
    }
}
