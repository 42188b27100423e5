//! Library side of the NLU results CLI.
//!
//! Exposes argument parsing, configuration and the compare / format
//! pipelines so the binary stays a thin wrapper and `nlu-e2e-tests` can
//! drive the same code paths.

pub mod cli;
pub mod commands;
pub mod config;
pub mod inputs;
pub mod output;
pub mod pipeline;
