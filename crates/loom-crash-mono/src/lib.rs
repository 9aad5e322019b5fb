// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Mono stack trace translation for Loom crash analytics.
//!
//! This crate turns a managed exception (see [`SourceError`]) into an
//! [`ExceptionRecord`] whose frames look like JVM stack trace elements:
//! - Trace lines are matched against the Mono frame formats, with and without
//!   a `in <file>:<line>` suffix
//! - Lines without a usable location get a file name synthesized from the
//!   class namespace
//! - Lines matching neither format are kept verbatim as fallback frames
//! - A single inner error becomes a `cause` chain, an aggregate is flattened
//!   into one frame list with marker frames between its inner errors
//!
//! Translation never fails and has no side effects beyond `tracing` events.
//!
//! # Example
//!
//! ```
//! use loom_crash_mono::{translate, SourceError};
//!
//! let error = SourceError::new("InvalidOperationException", "Sequence contains no elements")
//!     .with_stack_trace(
//!         "  at MyApp.Foo.Bar (System.Int32 x) [0x0001a] in /src/Foo.cs:42\n\
//!          at MyApp.Program.Main () [0x00000] in <filename unknown>:0",
//!     );
//!
//! let record = translate(&error);
//! assert_eq!(record.message, "(InvalidOperationException) Sequence contains no elements");
//! assert_eq!(record.frames[0].file_name, "/src/Foo.cs");
//! assert_eq!(record.frames[1].file_name, "MyApp/Program0x00000.cs");
//! ```

pub mod filename;
pub mod parse;
pub mod patterns;
pub mod translate;

pub use filename::synthesize_file_name;
pub use parse::{parse_line, parse_stack};
pub use patterns::{classify_line, CallSite, TraceLine};
pub use translate::{translate, Translator};

pub use loom_crash_mono_core::{
	ErrorShape, ExceptionRecord, Frame, MonoCrashError, SourceError, TranslatorConfig,
};
