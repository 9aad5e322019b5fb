// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack trace text to frames.

use loom_crash_mono_core::{Frame, TranslatorConfig, UNKNOWN_LINE};
use tracing::trace;

use crate::filename::synthesize_file_name;
use crate::patterns::{classify_line, CallSite, TraceLine};

/// Parse a raw stack trace into frames, lazily and in input order.
///
/// Lines are separated by `\n` or `\r\n`; empty lines are skipped. Every other
/// line yields exactly one frame, so unrecognized text is never dropped.
pub fn parse_stack<'a>(
	stack: &'a str,
	config: &'a TranslatorConfig,
) -> impl Iterator<Item = Frame> + 'a {
	split_lines(stack).map(move |line| parse_line(line, config))
}

/// Parse a single trace line.
pub fn parse_line(line: &str, config: &TranslatorConfig) -> Frame {
	match classify_line(line) {
		TraceLine::Located { site, file, line } => located_frame(&site, file, line, config),
		TraceLine::Unlocated(site) => unlocated_frame(&site, config),
		TraceLine::Unrecognized(raw) => {
			trace!(line = raw, "unrecognized stack trace line");
			Frame::unparsed(raw, config)
		}
	}
}

fn split_lines(stack: &str) -> impl Iterator<Item = &str> {
	stack
		.split('\n')
		.map(|line| line.strip_suffix('\r').unwrap_or(line))
		.filter(|line| !line.is_empty())
}

fn located_frame(site: &CallSite<'_>, file: &str, line: &str, config: &TranslatorConfig) -> Frame {
	// Mono reports line 0 when it has no debug symbols.
	match line.parse::<u32>() {
		Ok(number) if number != 0 => {
			Frame::new(site.class_name, site.method_signature(), file, number)
		}
		_ => {
			trace!(class = site.class_name, line, "no usable line number");
			unlocated_frame(site, config)
		}
	}
}

fn unlocated_frame(site: &CallSite<'_>, config: &TranslatorConfig) -> Frame {
	Frame::new(
		site.class_name,
		site.method_signature(),
		synthesize_file_name(site.class_name, site.offset, config),
		UNKNOWN_LINE,
	)
}
