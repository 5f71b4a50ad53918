//! # Temporal Hours Core Library
//!
//! This library computes "temporal hours" — the ancient convention that
//! divides daylight into twelve equal hours and night into twelve equal
//! hours, so that the length of an hour stretches and shrinks with the
//! season and the observer's latitude.
//!
//! ## Design Philosophy
//!
//! ### Pure computation
//! - **Explicit time**: every function takes the instant or date it should
//!   compute for; the library never reads the wall clock. The caller (the
//!   CLI binary, a UI, a test) owns the notion of "now".
//! - **Stateless**: no caches, no globals, no shared mutable state. The same
//!   inputs always produce the same outputs.
//! - **Data, not errors**: the one abnormal condition — a polar day or polar
//!   night with no sunrise/sunset — is modeled as absent events and
//!   infinite/zero hour lengths, never as a panic or an error value.
//!
//! ### Data Flow
//! 1. **Solar provider**: [`solar::solar_times`] turns a date and position
//!    into tagged sunrise/sunset instants (`None` = no horizon crossing).
//! 2. **Calculator**: [`temporal::calculate_temporal_hours`] derives the
//!    variable hour lengths and polar classification.
//! 3. **Consumers**: [`temporal::current_temporal_hour`] locates a moment
//!    within the twelve-hour grid, [`temporal::calculate_year_data`]
//!    materializes a 365-point series for charting, and the [`renderer`]
//!    and [`report`] modules present the results.
//!
//! ## Core Types
//!
//! - [`TemporalHours`]: one day's sunrise/sunset and hour lengths
//! - [`CurrentHourPosition`]: which temporal hour a moment falls in
//! - [`YearDataPoint`]: one charting sample of the year series

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

// Module declarations
pub mod config;
pub mod renderer;
pub mod report;
pub mod solar;
pub mod temporal;

/// Temporal-hour breakdown of a single day at a single location.
///
/// Immutable once computed. `sunrise`/`sunset` are `None` when the sun does
/// not cross the horizon on that date (polar day or polar night); in that
/// case one hour length is `f64::INFINITY` and the other is `0.0`, and the
/// full 1440 minutes belong to whichever regime applies.
///
/// Non-polar invariants:
/// - `daylight_minutes + night_minutes == 1440`
/// - `day_hour_minutes == daylight_minutes / 12.0`
/// - `night_hour_minutes == night_minutes / 12.0`
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use temporal_hours_lib::temporal::calculate_temporal_hours;
///
/// let noon = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
/// let hours = calculate_temporal_hours(0.0, 0.0, noon);
/// assert!(!hours.is_polar_day_or_night());
/// assert!((hours.daylight_minutes + hours.night_minutes - 1440.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct TemporalHours<Tz: TimeZone> {
    /// Length of one daylight temporal hour, in real minutes.
    pub day_hour_minutes: f64,
    /// Length of one night temporal hour, in real minutes.
    pub night_hour_minutes: f64,
    /// Sunrise instant, if the sun rises on this date.
    pub sunrise: Option<DateTime<Tz>>,
    /// Sunset instant, if the sun sets on this date.
    pub sunset: Option<DateTime<Tz>>,
    /// Both events missing at a northern latitude.
    pub is_polar_day: bool,
    /// Both events missing at a southern latitude.
    pub is_polar_night: bool,
    /// Total daylight for the day, in minutes.
    pub daylight_minutes: f64,
    /// Total night for the day, in minutes.
    pub night_minutes: f64,
}

impl<Tz: TimeZone> TemporalHours<Tz> {
    /// True when either solar event is missing and the twelve-hour grid is
    /// therefore undefined for this date.
    pub fn is_polar_day_or_night(&self) -> bool {
        self.sunrise.is_none() || self.sunset.is_none()
    }
}

/// Position of a moment within the temporal-hour grid.
///
/// `hour` is 1-indexed (first hour of day or night = 1). Under polar
/// conditions there is no meaningful subdivision of an infinite hour, so
/// the degenerate position `{hour: 0, minutes_into_hour: 0}` is returned
/// with `is_day` reporting the active polar regime.
///
/// # Example
/// ```
/// use temporal_hours_lib::CurrentHourPosition;
///
/// let pos = CurrentHourPosition { hour: 3, is_day: true, minutes_into_hour: 12.5 };
/// assert!(pos.is_day);
/// assert_eq!(pos.hour, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentHourPosition {
    /// 1..=12 within the active regime; 0 in the polar degenerate case.
    pub hour: u32,
    /// True during daylight (or polar day).
    pub is_day: bool,
    /// Minutes elapsed within the current temporal hour.
    pub minutes_into_hour: f64,
}

/// One charting sample of the year series: hour lengths for a single date.
///
/// Polar dates carry finite placeholder values (a 120-minute ceiling for
/// the regime that never ends, zero for the other) so a line chart has
/// something to plot; the infinite values live only in [`TemporalHours`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearDataPoint {
    /// Calendar date of the sample.
    pub date: NaiveDate,
    /// 0-based ordinal of the date within the series (0 = Jan 1).
    pub day_of_year: u32,
    /// Daylight temporal-hour length in minutes (placeholder when polar).
    pub day_hour_minutes: f64,
    /// Night temporal-hour length in minutes (placeholder when polar).
    pub night_hour_minutes: f64,
    /// True when this date had no sunrise or no sunset.
    pub is_polar: bool,
}
