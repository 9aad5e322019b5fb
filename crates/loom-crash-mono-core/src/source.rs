// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Managed exceptions as handed over by the runtime.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::exception_title;

/// A managed exception before translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceError {
	/// Short type name, e.g. `InvalidOperationException`
	pub type_name: String,
	#[serde(default)]
	pub message: String,
	/// Raw multi-line trace, `\n` or `\r\n` separated
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub stack_trace: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub inner: Option<Box<SourceError>>,
	/// Present only on aggregates
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub inner_errors: Option<Vec<SourceError>>,
}

/// How an error is translated, decided once per error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorShape<'a> {
	/// No nested errors.
	Leaf,
	/// Exactly one nested error, translated into a `cause` chain.
	OneInner(&'a SourceError),
	/// Aggregate; inner errors are flattened into a marker-delimited frame list.
	ManyInner(Vec<&'a SourceError>),
}

impl SourceError {
	pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			type_name: type_name.into(),
			message: message.into(),
			..Self::default()
		}
	}

	pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
		self.stack_trace = Some(stack_trace.into());
		self
	}

	pub fn with_inner(mut self, inner: SourceError) -> Self {
		self.inner = Some(Box::new(inner));
		self
	}

	/// Turn this error into an aggregate of `inner_errors`.
	pub fn with_inner_errors(mut self, inner_errors: Vec<SourceError>) -> Self {
		self.inner_errors = Some(inner_errors);
		self
	}

	/// `"(TypeName) Message"`
	pub fn title(&self) -> String {
		exception_title(&self.type_name, &self.message)
	}

	/// The raw trace, or an empty string when the runtime reported none.
	pub fn stack_trace_text(&self) -> &str {
		self.stack_trace.as_deref().unwrap_or_default()
	}

	pub fn is_aggregate(&self) -> bool {
		self.inner_errors.is_some()
	}

	/// Classify the error. Aggregates win over a single inner error.
	pub fn shape(&self) -> ErrorShape<'_> {
		if self.is_aggregate() {
			ErrorShape::ManyInner(self.flattened_inner_errors())
		} else if let Some(inner) = self.inner.as_deref() {
			ErrorShape::OneInner(inner)
		} else {
			ErrorShape::Leaf
		}
	}

	/// Inner errors of an aggregate with nested aggregates expanded.
	///
	/// Nested aggregates are replaced by their own inner errors, breadth first,
	/// so direct children come before anything unwrapped from a nested
	/// aggregate. A nested aggregate's own trace is dropped. Returns an empty
	/// list for non-aggregates.
	pub fn flattened_inner_errors(&self) -> Vec<&SourceError> {
		let mut flattened = Vec::new();
		let mut pending: VecDeque<&[SourceError]> = VecDeque::new();
		if let Some(inner_errors) = self.inner_errors.as_deref() {
			pending.push_back(inner_errors);
		}

		while let Some(level) = pending.pop_front() {
			for error in level {
				match error.inner_errors.as_deref() {
					Some(nested) => pending.push_back(nested),
					None => flattened.push(error),
				}
			}
		}

		flattened
	}
}
