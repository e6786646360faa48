#![deny(warnings)]
pub mod cli;
pub mod config;
pub mod logging;
pub mod plan;
pub mod prompt;
pub mod report;
pub mod runner;
