//! Presentation layer for the settlement estimator.
//!
//! Everything here is a thin caller of `settlement-core`: argument parsing,
//! won formatting, and plain-text report rendering.

pub mod report;
pub mod utils;
