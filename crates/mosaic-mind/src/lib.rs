//! MosaicMind: a personality-assessment engine.
//!
//! The [`assessment`] module holds the whole pipeline; [`config`],
//! [`telemetry`], and [`error`] carry the application shell shared with the
//! service binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
