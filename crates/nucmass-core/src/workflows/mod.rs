//! # Workflows Module
//!
//! Top-level entry points that take a list of nuclei and a validated
//! [`ReportConfig`](crate::engine::config::ReportConfig), evaluate every nucleus and
//! return the collected results.
//!
//! - **Report Workflow** ([`report`]) - Evaluates mass, radius, binding energy per
//!   nucleon, beta stability and the even-even fission flag for each nucleus, in parallel,
//!   and exposes the `(Z, value)` series used for plotting.

pub mod report;
