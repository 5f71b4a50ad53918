//! Sunrise & sunset solver — low-precision NOAA solar position
//!
//! Closed-form approximation after Meeus, *Astronomical Algorithms* ch. 25,
//! in the arrangement tabulated by the NOAA solar calculator.
//! Accuracy: a minute or two for dates within a few centuries of J2000,
//! which is all the temporal-hour grid needs.
//!
//! The solver answers one question per calendar day: at which instants does
//! the solar disc cross the official horizon (0.833° below geometric)? At
//! polar latitudes there may be no crossing at all; that absence is the
//! tagged `None` the rest of the crate branches on.

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, TimeZone, Timelike, Utc};

/// Solar zenith defining official sunrise/sunset: 90° plus 34' of
/// atmospheric refraction plus 16' of solar semi-diameter.
const ZENITH_DEG: f64 = 90.833;

/// Tagged sunrise/sunset pair for one calendar day at one location.
///
/// `None` means the sun never crosses the horizon on that day — the
/// midnight sun or the polar night, depending on the season.
#[derive(Clone, Debug)]
pub struct SolarTimes<Tz: TimeZone> {
    pub sunrise: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
}

/// Compute sunrise and sunset for the calendar day containing `date`.
///
/// `latitude`/`longitude` are signed decimal degrees (north/east positive).
/// The calendar day is taken in `date`'s own timezone and the returned
/// instants are converted back into it. Coordinates are not validated;
/// out-of-range or non-finite values degrade to "no crossing", never to a
/// panic.
pub fn solar_times<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SolarTimes<Tz> {
    let day = date.date_naive();

    // ---------- 1. Sun geometry at the day's midpoint ----------
    // Declination and the equation of time move slowly enough that one
    // sample at 12:00 UT serves the whole day.
    let noon = match day.and_hms_opt(12, 0, 0) {
        Some(n) => n,
        None => return SolarTimes { sunrise: None, sunset: None },
    };
    let t = julian_century(julian_date(&noon));
    let decl = solar_declination(t);
    let eqtime = equation_of_time(t);

    // ---------- 2. Hour angle of the horizon crossing ----------
    let lat_r = latitude.to_radians();
    let decl_r = decl.to_radians();
    let cos_ha = (ZENITH_DEG.to_radians().cos() - lat_r.sin() * decl_r.sin())
        / (lat_r.cos() * decl_r.cos());

    // |cos ω| > 1: the sun never reaches the horizon on this day.
    // NaN input falls through here as well.
    if !(-1.0..=1.0).contains(&cos_ha) {
        return SolarTimes {
            sunrise: None,
            sunset: None,
        };
    }
    let ha_deg = cos_ha.acos().to_degrees();

    // ---------- 3. UT minutes past midnight, back to instants ----------
    // 4 minutes of clock time per degree; longitude east-positive.
    let sunrise_min = 720.0 - 4.0 * (longitude + ha_deg) - eqtime;
    let sunset_min = 720.0 - 4.0 * (longitude - ha_deg) - eqtime;

    let midnight = match day.and_hms_opt(0, 0, 0) {
        Some(m) => Utc.from_utc_datetime(&m),
        None => return SolarTimes { sunrise: None, sunset: None },
    };
    let tz = date.timezone();
    let to_instant = |minutes: f64| {
        (midnight + Duration::milliseconds((minutes * 60_000.0).round() as i64))
            .with_timezone(&tz)
    };

    SolarTimes {
        sunrise: Some(to_instant(sunrise_min)),
        sunset: Some(to_instant(sunset_min)),
    }
}

// ---------- Meeus series (angles in degrees unless noted) ----------

/// Civil date/time (UT) to Julian Date.
fn julian_date(dt: &NaiveDateTime) -> f64 {
    let (mut y, mut m) = (dt.year() as f64, dt.month() as f64);
    if m <= 2.0 {
        y -= 1.0;
        m += 12.0;
    }
    let day = dt.day() as f64
        + (dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0) / 24.0;

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian centuries since J2000.0.
fn julian_century(jd: f64) -> f64 {
    (jd - 2451545.0) / 36525.0
}

fn normalize_degrees(deg: f64) -> f64 {
    let d = deg % 360.0;
    if d < 0.0 {
        d + 360.0
    } else {
        d
    }
}

fn sun_mean_longitude(t: f64) -> f64 {
    normalize_degrees(280.46646 + t * (36000.76983 + t * 0.0003032))
}

fn sun_mean_anomaly(t: f64) -> f64 {
    normalize_degrees(357.52911 + t * (35999.05029 - t * 0.0001537))
}

fn earth_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + t * 0.0000001267)
}

fn sun_equation_of_center(t: f64) -> f64 {
    let m = sun_mean_anomaly(t).to_radians();
    m.sin() * (1.914602 - t * (0.004817 + t * 0.000014))
        + (2.0 * m).sin() * (0.019993 - t * 0.000101)
        + (3.0 * m).sin() * 0.000289
}

/// Apparent ecliptic longitude, nutation-corrected.
fn sun_apparent_longitude(t: f64) -> f64 {
    let omega = (125.04 - 1934.136 * t).to_radians();
    sun_mean_longitude(t) + sun_equation_of_center(t) - 0.00569 - 0.00478 * omega.sin()
}

/// Obliquity of the ecliptic, corrected for nutation.
fn obliquity_corrected(t: f64) -> f64 {
    let mean =
        23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0;
    let omega = (125.04 - 1934.136 * t).to_radians();
    mean + 0.00256 * omega.cos()
}

/// Solar declination in degrees.
fn solar_declination(t: f64) -> f64 {
    let e = obliquity_corrected(t).to_radians();
    let lambda = sun_apparent_longitude(t).to_radians();
    (e.sin() * lambda.sin()).asin().to_degrees()
}

/// Equation of time in minutes (sundial minus clock).
fn equation_of_time(t: f64) -> f64 {
    let e = obliquity_corrected(t).to_radians();
    let l0 = sun_mean_longitude(t).to_radians();
    let ecc = earth_eccentricity(t);
    let m = sun_mean_anomaly(t).to_radians();

    let y = (e / 2.0).tan().powi(2);

    let eq = y * (2.0 * l0).sin() - 2.0 * ecc * m.sin()
        + 4.0 * ecc * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * ecc * ecc * (2.0 * m).sin();

    4.0 * eq.to_degrees()
}
