//! Binary-side test suites.

mod cli_tests;
