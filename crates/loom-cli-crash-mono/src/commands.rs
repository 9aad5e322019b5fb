// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Subcommand implementations. Output goes to the given writer, logs to stderr.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use loom_crash_mono::{Frame, SourceError, Translator};
use serde::Serialize;
use tracing::{debug, info};

use crate::args::{OutputArgs, OutputFormat};

/// Read a JSON-encoded [`SourceError`] and write the translated record.
pub fn translate(
	translator: &Translator,
	input: Option<&Path>,
	output: OutputArgs,
	out: &mut impl Write,
) -> Result<()> {
	let document = read_input(input)?;
	let error: SourceError =
		serde_json::from_str(&document).context("Failed to decode exception JSON")?;

	let record = translator.translate(&error);
	info!(
		message = %record.message,
		frames = record.frames.len(),
		depth = record.depth(),
		"translated exception"
	);

	match output.format {
		OutputFormat::Json => write_json(&record, output.pretty, out),
		OutputFormat::Text => write!(out, "{record}").context("Failed to write output"),
	}
}

/// Read raw trace text and write the parsed frames.
pub fn parse(
	translator: &Translator,
	input: Option<&Path>,
	output: OutputArgs,
	out: &mut impl Write,
) -> Result<()> {
	let text = read_input(input)?;
	let frames: Vec<Frame> = translator.parse_stack(&text).collect();
	info!(frames = frames.len(), "parsed stack trace");

	match output.format {
		OutputFormat::Json => write_json(&frames, output.pretty, out),
		OutputFormat::Text => {
			for frame in &frames {
				writeln!(out, "\tat {frame}").context("Failed to write output")?;
			}
			Ok(())
		}
	}
}

fn read_input(input: Option<&Path>) -> Result<String> {
	match input {
		Some(path) if path != Path::new("-") => {
			debug!(path = %path.display(), "reading input file");
			std::fs::read_to_string(path)
				.with_context(|| format!("Failed to read {}", path.display()))
		}
		_ => {
			debug!("reading input from stdin");
			let mut buf = String::new();
			io::stdin()
				.read_to_string(&mut buf)
				.context("Failed to read stdin")?;
			Ok(buf)
		}
	}
}

fn write_json<T: Serialize>(value: &T, pretty: bool, out: &mut impl Write) -> Result<()> {
	if pretty {
		serde_json::to_writer_pretty(&mut *out, value)?;
	} else {
		serde_json::to_writer(&mut *out, value)?;
	}
	writeln!(out).context("Failed to write output")
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write as _;
	use tempfile::NamedTempFile;

	fn json_output() -> OutputArgs {
		OutputArgs {
			format: OutputFormat::Json,
			pretty: false,
		}
	}

	fn text_output() -> OutputArgs {
		OutputArgs {
			format: OutputFormat::Text,
			pretty: false,
		}
	}

	fn input_file(content: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(content.as_bytes()).unwrap();
		file
	}

	#[test]
	fn translate_writes_json_record() {
		let file = input_file(
			r#"{"type_name":"IOException","message":"disk","stack_trace":"at A.B () [0x0] in /a.cs:3"}"#,
		);
		let mut out = Vec::new();

		translate(&Translator::default(), Some(file.path()), json_output(), &mut out).unwrap();

		let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
		assert_eq!(value["message"], "(IOException) disk");
		assert_eq!(value["frames"][0]["line_number"], 3);
	}

	#[test]
	fn translate_writes_text_trace() {
		let file = input_file(
			r#"{"type_name":"IOException","message":"disk","stack_trace":"at A.B () [0x0] in /a.cs:3"}"#,
		);
		let mut out = Vec::new();

		translate(&Translator::default(), Some(file.path()), text_output(), &mut out).unwrap();

		assert_eq!(
			String::from_utf8(out).unwrap(),
			"(IOException) disk\n\tat A.B()[0x0](/a.cs:3)\n"
		);
	}

	#[test]
	fn translate_rejects_invalid_json() {
		let file = input_file("not json");
		let mut out = Vec::new();

		let err = translate(&Translator::default(), Some(file.path()), json_output(), &mut out)
			.unwrap_err();
		assert!(err.to_string().contains("Failed to decode exception JSON"));
		assert!(out.is_empty());
	}

	#[test]
	fn parse_writes_one_frame_per_line() {
		let file = input_file("at A.B () [0x0]\n\ngarbage\n");
		let mut out = Vec::new();

		parse(&Translator::default(), Some(file.path()), text_output(), &mut out).unwrap();

		assert_eq!(
			String::from_utf8(out).unwrap(),
			"\tat A.B()[0x0](A0x0.cs:1)\n\tat garbage.(unknown.cs:1)\n"
		);
	}

	#[test]
	fn parse_writes_json_array() {
		let file = input_file("at A.B () [0x0]\r\nat C.D () [0x1] in /c.cs:9\r\n");
		let mut out = Vec::new();

		parse(&Translator::default(), Some(file.path()), json_output(), &mut out).unwrap();

		let frames: Vec<Frame> = serde_json::from_slice(&out).unwrap();
		assert_eq!(frames.len(), 2);
		assert_eq!(frames[1].file_name, "/c.cs");
	}

	#[test]
	fn missing_input_file_is_reported() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.json");
		let mut out = Vec::new();

		let err = parse(&Translator::default(), Some(&path), json_output(), &mut out).unwrap_err();
		assert!(err.to_string().starts_with("Failed to read"));
	}
}
