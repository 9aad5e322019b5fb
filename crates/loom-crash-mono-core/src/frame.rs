// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack frame records.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::config::TranslatorConfig;
use crate::exception_title;

/// Line number recorded when the trace carries no usable line.
pub const UNKNOWN_LINE: u32 = 1;

/// A single call site parsed from a managed stack trace.
///
/// Shaped like a JVM `StackTraceElement`, which is what the crash reporting
/// pipeline on the other side expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
	/// Declaring class, or the raw line for unparseable input
	pub class_name: String,
	/// Method name, argument list and IL offset, concatenated
	pub method_signature: String,
	/// Real source file, or a path synthesized from the class name
	pub file_name: String,
	/// Always positive; [`UNKNOWN_LINE`] when not reported
	#[serde(deserialize_with = "deserialize_line_number")]
	pub line_number: u32,
}

impl Frame {
	pub fn new(
		class_name: impl Into<String>,
		method_signature: impl Into<String>,
		file_name: impl Into<String>,
		line_number: u32,
	) -> Self {
		Self {
			class_name: class_name.into(),
			method_signature: method_signature.into(),
			file_name: file_name.into(),
			line_number: line_number.max(UNKNOWN_LINE),
		}
	}

	/// Frame carrying a line that matched no known trace format.
	///
	/// The line is kept verbatim in `class_name` so nothing is lost.
	pub fn unparsed(line: &str, config: &TranslatorConfig) -> Self {
		Self::new(line, "", config.unknown_file_name.as_str(), UNKNOWN_LINE)
	}

	/// Separator frame placed before each inner error of an aggregate.
	pub fn inner_marker(type_name: &str, message: &str, config: &TranslatorConfig) -> Self {
		Self::new(
			config.marker_class_name.as_str(),
			exception_title(type_name, message),
			config.unknown_file_name.as_str(),
			UNKNOWN_LINE,
		)
	}

	/// Whether this frame separates inner errors of an aggregate.
	///
	/// A trace line whose text equals the marker name becomes an unparsed
	/// frame with an empty signature, so it never passes this check.
	pub fn is_inner_marker(&self, config: &TranslatorConfig) -> bool {
		self.class_name == config.marker_class_name
			&& !self.method_signature.is_empty()
			&& self.file_name == config.unknown_file_name
			&& self.line_number == UNKNOWN_LINE
	}
}

fn deserialize_line_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
	D: Deserializer<'de>,
{
	u32::deserialize(deserializer).map(|line| line.max(UNKNOWN_LINE))
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}.{}({}:{})",
			self.class_name, self.method_signature, self.file_name, self.line_number
		)
	}
}
