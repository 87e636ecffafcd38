// Copyright 2026 the Linefold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unicode line breaking for text layout.
//!
//! This crate implements the [Unicode Line Breaking Algorithm][UAX #14] over
//! UTF-16 text, together with the codepoint classification and decoding
//! substrate the algorithm depends on. It is intended as the line-break
//! engine of a larger text layout stack: the caller hands a fully
//! materialized code-unit buffer to [`LineBreaker`] and pulls break
//! opportunities on demand.
//!
//! Property lookups are backed by ICU4X compiled data; the tracked Unicode
//! version is exposed as [`UNICODE_VERSION`].
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for
//!   forward compatibility.
//!
//! ## Example
//!
//! ```
//! use linefold::{LineBreak, LineBreaker};
//!
//! let units: Vec<u16> = "Hello world".encode_utf16().collect();
//! let breaks: Vec<LineBreak> = LineBreaker::new(&units).collect();
//!
//! assert_eq!(breaks.len(), 2);
//! assert_eq!((breaks[0].wrap, breaks[0].offset), (5, 6));
//! assert_eq!((breaks[1].wrap, breaks[1].offset), (11, 11));
//! assert!(breaks.iter().all(|b| !b.mandatory));
//! ```
//!
//! [UAX #14]: https://www.unicode.org/reports/tr14/
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

mod code_point;
mod line_break;
mod properties;
mod utf16;

pub use code_point::{CodePoint, CodePointError};
pub use line_break::{BreakClass, LineBreak, LineBreaker, PairBreak};
pub use properties::{PropertySources, UNICODE_VERSION};
pub use utf16::{decode_at, decode_before};

// Re-exported so callers share the property vocabulary without naming the
// data crate themselves.
pub use icu_properties::props::{BidiClass, GeneralCategory, GraphemeClusterBreak};
