//! # Engine Module
//!
//! Support layer for evaluation workflows: validated run configuration, progress
//! reporting and the error type returned by the workflows.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - [`ReportConfig`](config::ReportConfig) and its builder,
//!   which validates a [`MassModel`](crate::core::formula::model::MassModel) before use
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for front-ends
//! - **Error Handling** ([`error`]) - [`EngineError`](error::EngineError), wrapping the
//!   configuration, model loading and nuclide I/O errors

pub mod config;
pub mod error;
pub mod progress;
