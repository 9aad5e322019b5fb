// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translator configuration.
//!
//! Every field has a default matching what crash reporting backends expect
//! from Mono traces, so an empty TOML document is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{MonoCrashError, Result};

pub const DEFAULT_MARKER_CLASS_NAME: &str = "NEXT-INNER-EXCEPTION";
pub const DEFAULT_UNKNOWN_FILE_NAME: &str = "unknown.cs";
pub const DEFAULT_SOURCE_EXTENSION: &str = "cs";
pub const DEFAULT_PATH_SEPARATOR: char = '/';

/// Synthetic names used when a trace line carries no real location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
	/// Class name of the frame separating inner errors of an aggregate
	pub marker_class_name: String,
	/// File name for marker frames and unparseable lines
	pub unknown_file_name: String,
	/// Extension appended to synthesized file names, without the dot
	pub source_extension: String,
	/// Replaces namespace dots in synthesized file names
	pub path_separator: char,
}

impl Default for TranslatorConfig {
	fn default() -> Self {
		Self {
			marker_class_name: DEFAULT_MARKER_CLASS_NAME.to_string(),
			unknown_file_name: DEFAULT_UNKNOWN_FILE_NAME.to_string(),
			source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
			path_separator: DEFAULT_PATH_SEPARATOR,
		}
	}
}

impl TranslatorConfig {
	/// Parse and validate a TOML document. `path` is only used for error reporting.
	pub fn from_toml_str(content: &str, path: impl Into<PathBuf>) -> Result<Self> {
		let config: Self = toml::from_str(content).map_err(|source| MonoCrashError::TomlParse {
			path: path.into(),
			source,
		})?;
		config.validate()?;
		Ok(config)
	}

	/// Load and validate a TOML config file.
	pub fn load(path: &Path) -> Result<Self> {
		debug!(path = %path.display(), "loading translator config");
		let content = std::fs::read_to_string(path)?;
		Self::from_toml_str(&content, path)
	}

	pub fn validate(&self) -> Result<()> {
		if self.marker_class_name.trim().is_empty() {
			return Err(MonoCrashError::invalid_value(
				"marker_class_name",
				"must not be empty",
			));
		}
		if self.unknown_file_name.trim().is_empty() {
			return Err(MonoCrashError::invalid_value(
				"unknown_file_name",
				"must not be empty",
			));
		}
		if self.path_separator.is_alphanumeric()
			|| self.path_separator == '_'
			|| self.path_separator.is_whitespace()
		{
			return Err(MonoCrashError::invalid_value(
				"path_separator",
				format!("'{}' would be indistinguishable from a name", self.path_separator),
			));
		}

		let ext = &self.source_extension;
		if ext.is_empty() {
			return Err(MonoCrashError::invalid_value(
				"source_extension",
				"must not be empty",
			));
		}
		if ext.starts_with('.') {
			return Err(MonoCrashError::invalid_value(
				"source_extension",
				"must not start with '.'",
			));
		}
		if ext.contains(self.path_separator) {
			return Err(MonoCrashError::validation(format!(
				"source_extension '{ext}' contains the path separator"
			)));
		}

		Ok(())
	}
}
