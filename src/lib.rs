//! Roughset: Reduct Rule Inference Library
//!
//! A library for inferring decision rules from symbolic decision tables
//! using rough-set reduct search, with support/confidence/lift scoring.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
