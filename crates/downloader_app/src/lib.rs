//! Terminal front end for the simulated downloader.
pub mod cli;
pub mod config;
pub mod platform;
