// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pseudo file names for frames without a reported location.

use loom_crash_mono_core::TranslatorConfig;

/// Build a stable file name from a class name and IL offset.
///
/// Namespace dots become path separators, anything that is not a word
/// character or separator is dropped, and the source extension is appended:
/// `MyApp.Foo` + `[0x0001a]` becomes `MyApp/Foo0x0001a.cs`.
pub fn synthesize_file_name(class_name: &str, offset: &str, config: &TranslatorConfig) -> String {
	let separator = config.path_separator;
	let mut name: String = class_name
		.chars()
		.chain(offset.chars())
		.map(|c| if c == '.' { separator } else { c })
		.filter(|&c| c.is_alphanumeric() || c == '_' || c == separator)
		.collect();

	name.push('.');
	name.push_str(&config.source_extension);
	name
}
