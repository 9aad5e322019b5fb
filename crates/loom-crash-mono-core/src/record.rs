// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Normalized exception records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::frame::Frame;

/// A translated exception: title, parsed frames, and an optional cause.
///
/// Records are built once per translation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionRecord {
	/// `"(TypeName) Message"`
	pub message: String,
	/// Outermost call first, in trace order
	pub frames: Vec<Frame>,
	/// Translated inner error; `None` for leaves and flattened aggregates
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub cause: Option<Box<ExceptionRecord>>,
}

impl ExceptionRecord {
	pub fn new(message: impl Into<String>, frames: Vec<Frame>) -> Self {
		Self {
			message: message.into(),
			frames,
			cause: None,
		}
	}

	pub fn with_cause(mut self, cause: ExceptionRecord) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}

	/// Iterate over this record followed by each nested cause.
	pub fn chain(&self) -> Chain<'_> {
		Chain { next: Some(self) }
	}

	/// Number of records in the cause chain, including this one.
	pub fn depth(&self) -> usize {
		self.chain().count()
	}

	/// The innermost record of the chain.
	pub fn root_cause(&self) -> &ExceptionRecord {
		let mut current = self;
		while let Some(cause) = current.cause.as_deref() {
			current = cause;
		}
		current
	}
}

/// Iterator over a record and its causes, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
	next: Option<&'a ExceptionRecord>,
}

impl<'a> Iterator for Chain<'a> {
	type Item = &'a ExceptionRecord;

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.next?;
		self.next = current.cause.as_deref();
		Some(current)
	}
}

/// Renders the chain the way a JVM prints a throwable.
impl fmt::Display for ExceptionRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, record) in self.chain().enumerate() {
			if i > 0 {
				write!(f, "Caused by: ")?;
			}
			writeln!(f, "{}", record.message)?;
			for frame in &record.frames {
				writeln!(f, "\tat {frame}")?;
			}
		}
		Ok(())
	}
}
