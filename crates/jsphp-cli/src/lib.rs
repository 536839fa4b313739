//! Native CLI support for the jsphp binary.

pub mod args;
pub mod config;
pub mod driver;

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
