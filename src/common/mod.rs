//! Common utilities shared by the configure, test and verify commands

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod ui;

pub use error::{Error, Result};
