// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loom Mono crash CLI
//!
//! Reads a managed exception (JSON) or raw stack trace text and prints the
//! structured crash record that the reporting pipeline consumes.

mod args;
mod commands;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use loom_crash_mono::{Translator, TranslatorConfig};

use args::{Cli, Command};

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.log_level.as_deref());

	let config = match &cli.config {
		Some(path) => TranslatorConfig::load(path)
			.with_context(|| format!("Failed to load config from {}", path.display()))?,
		None => TranslatorConfig::default(),
	};
	debug!(?config, "translator configured");
	let translator = Translator::new(config);

	let stdout = io::stdout();
	let mut out = stdout.lock();

	match cli.command {
		Command::Translate { input, output } => {
			commands::translate(&translator, input.as_deref(), output, &mut out)
		}
		Command::Parse { input, output } => {
			commands::parse(&translator, input.as_deref(), output, &mut out)
		}
	}
}

/// Logs go to stderr so stdout stays machine readable.
fn init_tracing(filter: Option<&str>) {
	let filter = filter
		.map(EnvFilter::new)
		.or_else(|| EnvFilter::try_from_default_env().ok())
		.unwrap_or_else(|| EnvFilter::new("warn"));

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(io::stderr))
		.init();
}
