// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for translating Mono/.NET exceptions into crash records.
//!
//! This crate holds the data shared by the translator (`loom-crash-mono`) and
//! anything that consumes its output:
//!
//! - [`SourceError`]: the managed exception as handed over by the runtime
//!   (type name, message, raw stack trace, inner errors)
//! - [`Frame`] and [`ExceptionRecord`]: the normalized, JVM-shaped record a
//!   crash reporting pipeline consumes
//! - [`TranslatorConfig`]: the synthetic names used when a trace line carries
//!   no real location
//!
//! # Overview
//!
//! A single inner error produces a linked chain of records (`cause`), while an
//! aggregate of inner errors is flattened into one frame list with a marker
//! frame in front of each inner error. See [`ErrorShape`].

pub mod config;
pub mod error;
pub mod frame;
pub mod record;
pub mod source;

pub use config::{
	TranslatorConfig, DEFAULT_MARKER_CLASS_NAME, DEFAULT_PATH_SEPARATOR, DEFAULT_SOURCE_EXTENSION,
	DEFAULT_UNKNOWN_FILE_NAME,
};
pub use error::{MonoCrashError, Result};
pub use frame::{Frame, UNKNOWN_LINE};
pub use record::{Chain, ExceptionRecord};
pub use source::{ErrorShape, SourceError};

/// Format an exception title as `"(TypeName) Message"`.
///
/// Used for both the record message and the marker frames of aggregates.
pub fn exception_title(type_name: &str, message: &str) -> String {
	format!("({type_name}) {message}")
}
