//! Social authentication setup for the Tourisme Flutter application
//!
//! Scaffolds the Google, Facebook and Apple sign-in configuration files of
//! the mobile app and its backend, runs the related test suites, and
//! verifies that the configuration is complete.

pub mod cli;
pub mod commands;
pub mod common;
pub mod configure;
pub mod testing;
pub mod verify;

pub use common::{Error, Result};
