// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for Mono crash translation.
//!
//! Translation itself is total and never returns these. They only surface
//! when loading and validating configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur around exception translation.
#[derive(Debug, Error)]
pub enum MonoCrashError {
	/// I/O error reading a config file or input document
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// TOML parsing error
	#[error("TOML parse error in {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// Configuration failed validation
	#[error("validation error: {0}")]
	Validation(String),

	#[error("invalid value for {field}: {message}")]
	InvalidValue { field: String, message: String },
}

impl MonoCrashError {
	/// Create a validation error
	pub fn validation(msg: impl Into<String>) -> Self {
		Self::Validation(msg.into())
	}

	/// Create an invalid value error
	pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			field: field.into(),
			message: message.into(),
		}
	}
}

/// Result type for Mono crash operations.
pub type Result<T> = std::result::Result<T, MonoCrashError>;
