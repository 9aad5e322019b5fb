// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Translate Mono/.NET exceptions into structured crash records
#[derive(Parser, Debug)]
#[command(name = "loom-crash-mono", version)]
pub struct Cli {
	/// Translator config file (TOML)
	#[arg(long, global = true, env = "LOOM_CRASH_MONO_CONFIG")]
	pub config: Option<PathBuf>,

	/// Log filter, e.g. `debug` or `loom_crash_mono=trace` (overrides RUST_LOG)
	#[arg(long, global = true, env = "LOOM_CRASH_MONO_LOG")]
	pub log_level: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Translate a JSON-encoded exception into a crash record
	Translate {
		/// JSON document, `-` or omitted for stdin
		input: Option<PathBuf>,

		#[command(flatten)]
		output: OutputArgs,
	},

	/// Parse raw stack trace text into frames
	Parse {
		/// Trace text, `-` or omitted for stdin
		input: Option<PathBuf>,

		#[command(flatten)]
		output: OutputArgs,
	},
}

#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
	#[arg(long, value_enum, default_value_t = OutputFormat::Json)]
	pub format: OutputFormat,

	/// Pretty-print JSON output
	#[arg(long)]
	pub pretty: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
	Json,
	/// JVM-style printed trace
	Text,
}
