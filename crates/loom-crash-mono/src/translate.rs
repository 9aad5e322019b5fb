// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Exception translation.

use loom_crash_mono_core::{ErrorShape, ExceptionRecord, Frame, SourceError, TranslatorConfig};
use tracing::debug;

use crate::parse::parse_stack;

/// Translate an error with the default configuration.
pub fn translate(error: &SourceError) -> ExceptionRecord {
	Translator::default().translate(error)
}

/// Converts managed exceptions into [`ExceptionRecord`]s.
///
/// Holds no state besides its configuration and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Translator {
	config: TranslatorConfig,
}

impl Translator {
	pub fn new(config: TranslatorConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &TranslatorConfig {
		&self.config
	}

	/// Parse raw trace text with this translator's configuration.
	pub fn parse_stack<'a>(&'a self, stack: &'a str) -> impl Iterator<Item = Frame> + 'a {
		parse_stack(stack, &self.config)
	}

	/// Translate an error and its inner errors.
	///
	/// Single inner errors become a `cause` chain, one record per level. The
	/// chain is walked and built iteratively. Dropping a deeply nested input or
	/// result still recurses through the boxed causes.
	pub fn translate(&self, error: &SourceError) -> ExceptionRecord {
		let mut outer = Vec::new();
		let mut current = error;

		let innermost = loop {
			match current.shape() {
				ErrorShape::OneInner(inner) => {
					debug!(type_name = %current.type_name, "translating chained exception");
					outer.push(self.leaf_record(current));
					current = inner;
				}
				ErrorShape::ManyInner(inner_errors) => {
					break self.aggregate_record(current, &inner_errors);
				}
				ErrorShape::Leaf => break self.leaf_record(current),
			}
		};

		outer
			.into_iter()
			.rev()
			.fold(innermost, |cause, record| record.with_cause(cause))
	}

	fn leaf_record(&self, error: &SourceError) -> ExceptionRecord {
		ExceptionRecord::new(error.title(), self.parse_stack(error.stack_trace_text()).collect())
	}

	/// Flatten an aggregate into one frame list, each inner error introduced by
	/// a marker frame. Inner error messages are never parsed as trace text.
	fn aggregate_record(&self, error: &SourceError, inner_errors: &[&SourceError]) -> ExceptionRecord {
		debug!(
			type_name = %error.type_name,
			inner_count = inner_errors.len(),
			"flattening aggregate exception"
		);

		let mut frames: Vec<Frame> = self.parse_stack(error.stack_trace_text()).collect();
		for inner in inner_errors {
			frames.push(Frame::inner_marker(
				&inner.type_name,
				&inner.message,
				&self.config,
			));
			frames.extend(self.parse_stack(inner.stack_trace_text()));
		}

		ExceptionRecord::new(error.title(), frames)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const OUTER_TRACE: &str = "  at MyApp.Outer.Run () [0x00010] in /src/Outer.cs:12\n  at MyApp.Program.Main () [0x00000] in <filename unknown>:0";
	const INNER_TRACE: &str = "  at MyApp.Inner.Load (System.String path) [0x00004] in /src/Inner.cs:7";

	#[test]
	fn leaf_error() {
		let error = SourceError::new("InvalidOperationException", "nope").with_stack_trace(OUTER_TRACE);
		let record = translate(&error);

		assert_eq!(record.message, "(InvalidOperationException) nope");
		assert_eq!(record.frames.len(), 2);
		assert_eq!(record.frames[0], Frame::new("MyApp.Outer", "Run()[0x00010]", "/src/Outer.cs", 12));
		assert_eq!(
			record.frames[1],
			Frame::new("MyApp.Program", "Main()[0x00000]", "MyApp/Program0x00000.cs", 1)
		);
		assert!(record.cause.is_none());
	}

	#[test]
	fn missing_trace_yields_no_frames() {
		let record = translate(&SourceError::new("Exception", "no trace"));
		assert!(record.frames.is_empty());

		let record = translate(&SourceError::new("Exception", "empty").with_stack_trace(""));
		assert!(record.frames.is_empty());
	}

	#[test]
	fn single_inner_error_becomes_cause_chain() {
		let error = SourceError::new("TargetInvocationException", "outer")
			.with_stack_trace(OUTER_TRACE)
			.with_inner(
				SourceError::new("IOException", "middle")
					.with_stack_trace(INNER_TRACE)
					.with_inner(SourceError::new("UnauthorizedAccessException", "inner")),
			);

		let record = translate(&error);

		assert_eq!(record.depth(), 3);
		assert_eq!(record.frames.len(), 2);

		let middle = record.cause.as_deref().unwrap();
		assert_eq!(middle.message, "(IOException) middle");
		assert_eq!(middle.frames[0].file_name, "/src/Inner.cs");

		let inner = middle.cause.as_deref().unwrap();
		assert_eq!(inner.message, "(UnauthorizedAccessException) inner");
		assert!(inner.frames.is_empty());
		assert!(inner.cause.is_none());
	}

	#[test]
	fn aggregate_is_flattened_with_markers() {
		let error = SourceError::new("AggregateException", "One or more errors occurred.")
			.with_stack_trace(OUTER_TRACE)
			.with_inner_errors(vec![
				SourceError::new("IOException", "disk").with_stack_trace(INNER_TRACE),
				SourceError::new("TimeoutException", "slow"),
			]);

		let record = translate(&error);
		let config = TranslatorConfig::default();

		assert!(record.cause.is_none());
		assert_eq!(record.frames.len(), 2 + 1 + 1 + 1);
		assert!(record.frames[2].is_inner_marker(&config));
		assert_eq!(record.frames[2].method_signature, "(IOException) disk");
		assert_eq!(record.frames[3].class_name, "MyApp.Inner");
		assert!(record.frames[4].is_inner_marker(&config));
		assert_eq!(record.frames[4].method_signature, "(TimeoutException) slow");
	}

	#[test]
	fn aggregate_inside_chain_terminates_chain() {
		let error = SourceError::new("TargetInvocationException", "outer").with_inner(
			SourceError::new("AggregateException", "agg")
				.with_inner_errors(vec![SourceError::new("IOException", "disk")]),
		);

		let record = translate(&error);

		assert_eq!(record.depth(), 2);
		let aggregate = record.cause.as_deref().unwrap();
		assert_eq!(aggregate.frames.len(), 1);
		assert!(aggregate.cause.is_none());
	}

	#[test]
	fn inner_errors_of_aggregate_do_not_chain() {
		let error = SourceError::new("AggregateException", "agg").with_inner_errors(vec![
			SourceError::new("IOException", "disk")
				.with_inner(SourceError::new("SocketException", "reset").with_stack_trace(INNER_TRACE)),
		]);

		let record = translate(&error);

		assert!(record.cause.is_none());
		assert_eq!(record.frames.len(), 1);
	}

	#[test]
	fn marker_message_is_not_reparsed() {
		let error = SourceError::new("AggregateException", "agg").with_inner_errors(vec![
			SourceError::new("FormatException", "bad\n  at Evil.Type.Method () [0x0] in /x.cs:1"),
		]);

		let record = translate(&error);

		assert_eq!(record.frames.len(), 1);
		assert_eq!(
			record.frames[0].method_signature,
			"(FormatException) bad\n  at Evil.Type.Method () [0x0] in /x.cs:1"
		);
	}

	#[test]
	fn trace_line_equal_to_marker_name_is_not_a_marker() {
		let error = SourceError::new("Exception", "x")
			.with_stack_trace("at A.B () [0x0] in /a.cs:1\nNEXT-INNER-EXCEPTION");
		let config = TranslatorConfig::default();

		let record = translate(&error);

		assert_eq!(record.frames.len(), 2);
		assert_eq!(record.frames[1].class_name, "NEXT-INNER-EXCEPTION");
		assert!(record.frames.iter().all(|f| !f.is_inner_marker(&config)));
	}

	#[test]
	fn custom_marker_name_is_used() {
		let translator = Translator::new(TranslatorConfig {
			marker_class_name: "INNER".to_string(),
			..Default::default()
		});
		let error = SourceError::new("AggregateException", "agg")
			.with_inner_errors(vec![SourceError::new("IOException", "disk")]);

		let record = translator.translate(&error);

		assert_eq!(record.frames[0].class_name, "INNER");
		assert!(record.frames[0].is_inner_marker(translator.config()));
	}

	#[test]
	fn deep_chain_does_not_overflow() {
		let mut error = SourceError::new("Exception", "leaf");
		for i in 0..10_000 {
			error = SourceError::new("Exception", format!("level {i}")).with_inner(error);
		}

		let record = translate(&error);
		assert_eq!(record.depth(), 10_001);
		assert_eq!(record.root_cause().message, "(Exception) leaf");

		// Dropping deeply nested boxes recurses, so unwind both trees by hand.
		unwind_source(error);
		unwind_record(record);
	}

	fn unwind_source(mut error: SourceError) {
		while let Some(inner) = error.inner.take() {
			error = *inner;
		}
	}

	fn unwind_record(mut record: ExceptionRecord) {
		while let Some(cause) = record.cause.take() {
			record = *cause;
		}
	}
}
