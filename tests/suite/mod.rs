//! Integration test suite modules

mod config;
mod properties;
mod render;
mod scenarios;
