//! # Machine-Readable Reports
//!
//! Serializable snapshots of the engine's outputs for scripting and
//! sharing. The JSON shapes carry both the raw numbers and the formatted
//! strings, because the polar sentinels (`∞`) do not survive a trip
//! through JSON floats.

use crate::temporal::{format_minutes, location_name};
use crate::{CurrentHourPosition, TemporalHours, YearDataPoint};
use chrono::{NaiveDate, TimeZone};
use serde::Serialize;
use std::fmt;

/// One day's temporal-hour snapshot.
#[derive(Debug, Serialize)]
pub struct DayReport {
    /// Cardinal-direction coordinate label
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
    /// Local wall-clock sunrise, absent under polar conditions
    pub sunrise: Option<String>,
    /// Local wall-clock sunset, absent under polar conditions
    pub sunset: Option<String>,
    pub daylight_minutes: f64,
    pub night_minutes: f64,
    /// Raw hour lengths; JSON renders the polar infinities as null
    pub day_hour_minutes: f64,
    pub night_hour_minutes: f64,
    /// Formatted hour lengths, polar-safe (`"∞"`)
    pub day_hour: String,
    pub night_hour: String,
    pub polar: bool,
    pub current: CurrentHourPosition,
    /// One-line human summary, share-ready
    pub summary: String,
}

impl DayReport {
    /// Assemble a report from the engine's outputs for one day.
    pub fn new<Tz>(
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
        temporal: &TemporalHours<Tz>,
        current: CurrentHourPosition,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let location = location_name(latitude, longitude);
        let day_hour = format_minutes(temporal.day_hour_minutes);
        let night_hour = format_minutes(temporal.night_hour_minutes);

        let summary = if temporal.is_polar_day {
            format!("Polar day at {}: daylight has no end today.", location)
        } else if temporal.is_polar_night {
            format!("Polar night at {}: the sun never rises today.", location)
        } else if temporal.is_polar_day_or_night() {
            format!("Polar conditions at {}: no usable sunrise/sunset.", location)
        } else {
            format!(
                "At {} a daylight hour lasts {} minutes today, a night hour {}.",
                location, day_hour, night_hour
            )
        };

        DayReport {
            location,
            latitude,
            longitude,
            date,
            sunrise: temporal
                .sunrise
                .as_ref()
                .map(|t| t.format("%H:%M").to_string()),
            sunset: temporal
                .sunset
                .as_ref()
                .map(|t| t.format("%H:%M").to_string()),
            daylight_minutes: temporal.daylight_minutes,
            night_minutes: temporal.night_minutes,
            day_hour_minutes: temporal.day_hour_minutes,
            night_hour_minutes: temporal.night_hour_minutes,
            day_hour,
            night_hour,
            polar: temporal.is_polar_day_or_night(),
            current,
            summary,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The full 365-point year series with its framing.
#[derive(Debug, Serialize)]
pub struct YearReport {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub year: i32,
    /// 0-based day-of-year of "today", when the series covers it
    pub today: Option<u32>,
    pub points: Vec<YearDataPoint>,
}

impl YearReport {
    pub fn new(
        latitude: f64,
        longitude: f64,
        year: i32,
        today: Option<u32>,
        points: Vec<YearDataPoint>,
    ) -> Self {
        YearReport {
            location: location_name(latitude, longitude),
            latitude,
            longitude,
            year,
            today,
            points,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
