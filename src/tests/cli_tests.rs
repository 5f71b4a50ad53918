//! # CLI Argument Parsing Tests

use crate::parse_args;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn defaults_to_day_mode_with_config_location() {
    let cli = parse_args(args(&[])).unwrap();
    assert!(cli.latitude.is_none());
    assert!(cli.longitude.is_none());
    assert!(cli.date.is_none());
    assert!(!cli.year_mode);
    assert!(!cli.json);
}

#[test]
fn coordinate_overrides_parse_signed_decimals() {
    let cli = parse_args(args(&["--lat", "-33.8688", "--lon", "151.2093"])).unwrap();
    assert_eq!(cli.latitude, Some(-33.8688));
    assert_eq!(cli.longitude, Some(151.2093));
}

#[test]
fn year_flag_takes_an_optional_value() {
    let bare = parse_args(args(&["--year"])).unwrap();
    assert!(bare.year_mode);
    assert_eq!(bare.year_value, None);

    let valued = parse_args(args(&["--year", "2027", "--json"])).unwrap();
    assert!(valued.year_mode);
    assert_eq!(valued.year_value, Some(2027));
    assert!(valued.json);

    // A following flag is not mistaken for a year value.
    let followed = parse_args(args(&["--year", "--json"])).unwrap();
    assert!(followed.year_mode);
    assert_eq!(followed.year_value, None);
    assert!(followed.json);
}

#[test]
fn date_flag_requires_iso_format() {
    let cli = parse_args(args(&["--date", "2026-08-06"])).unwrap();
    assert_eq!(
        cli.date,
        chrono::NaiveDate::from_ymd_opt(2026, 8, 6)
    );

    assert!(parse_args(args(&["--date", "08/06/2026"])).is_err());
    assert!(parse_args(args(&["--date"])).is_err());
}

#[test]
fn unknown_arguments_are_rejected() {
    assert!(parse_args(args(&["--frobnicate"])).is_err());
    assert!(parse_args(args(&["--lat", "not-a-number"])).is_err());
}
