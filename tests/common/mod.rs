//! Common test utilities for Runcast CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project/home directories plus a scripted `gcloud`
//! - `TestResult`: captured exit code and output of one run

pub mod env;

pub use env::*;
