// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Mono stack trace line formats.
//!
//! Two formats are recognized, both anchored to the whole line:
//!
//! ```text
//! at <Class>.<Method> (<Args>) <Offset> in <File>:<Line>
//! at <Class>.<Method> <Args> <Offset>
//! ```

use regex::{Captures, Regex};
use std::sync::LazyLock;

static WITH_LINE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^\s*at (?P<class>\S*)\.(?P<method>\S*) (?P<args>\(.*\)) (?P<offset>.*) in (?P<file>.*):(?P<line>\d*)\s*$",
	)
	.expect("WITH_LINE_NUMBER: pattern is valid")
});

// Arguments prefer a parenthesized list so multi-word parameters stay together.
static WITHOUT_LINE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^\s*at (?P<class>\S*)\.(?P<method>\S*) (?P<args>\(.*\)|\S*) (?P<offset>.*?)\s*$",
	)
	.expect("WITHOUT_LINE_NUMBER: pattern is valid")
});

/// The call site part shared by both line formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
	pub class_name: &'a str,
	pub method_name: &'a str,
	pub arguments: &'a str,
	/// IL offset, e.g. `[0x0001a]`
	pub offset: &'a str,
}

impl CallSite<'_> {
	/// Method name, arguments and offset concatenated without separators.
	pub fn method_signature(&self) -> String {
		[self.method_name, self.arguments, self.offset].concat()
	}
}

/// A classified stack trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLine<'a> {
	/// Carries an `in <file>:<line>` suffix. `line` is the raw digit text and
	/// may be empty.
	Located {
		site: CallSite<'a>,
		file: &'a str,
		line: &'a str,
	},
	Unlocated(CallSite<'a>),
	/// Matches neither format.
	Unrecognized(&'a str),
}

/// Match a single line against the known formats, most specific first.
pub fn classify_line(line: &str) -> TraceLine<'_> {
	if let Some(caps) = WITH_LINE_NUMBER.captures(line) {
		return TraceLine::Located {
			site: call_site(&caps),
			file: group(&caps, "file"),
			line: group(&caps, "line"),
		};
	}

	if let Some(caps) = WITHOUT_LINE_NUMBER.captures(line) {
		return TraceLine::Unlocated(call_site(&caps));
	}

	TraceLine::Unrecognized(line)
}

fn call_site<'a>(caps: &Captures<'a>) -> CallSite<'a> {
	CallSite {
		class_name: group(caps, "class"),
		method_name: group(caps, "method"),
		arguments: group(caps, "args"),
		offset: group(caps, "offset"),
	}
}

fn group<'a>(caps: &Captures<'a>, name: &str) -> &'a str {
	caps.name(name).map_or("", |m| m.as_str())
}
