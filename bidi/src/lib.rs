// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words uax isolates

//! # r3bl_bidi
//!
//! Bidirectional text support for a fixed-width terminal grid. Given one logical line of
//! codepoints (the order they are stored in cell storage), this crate computes the
//! order in which they must be drawn on screen when the line mixes left-to-right (LTR)
//! and right-to-left (RTL) scripts. This is the [Unicode Bidirectional Algorithm] (UAX
//! #9) specialized for terminal lines.
//!
//! ## Pipeline
//!
//! ```text
//! codepoints ─► fast path gate ─┬─► (not needed) identity line
//!                               │
//!                               └─► bidi classes ─► embedding levels ─► reorder
//!                                                    (P, X, W, N, I)    (L1, L2, L4)
//!                                                                          │
//!                                  logical → visual map + mirror flags ◄───╯
//! ```
//!
//! 1. [`needs_analysis`] / [`needs_analysis_with_policy`]: a single linear scan that
//!    decides whether the line needs the rule engine at all. Pure Latin, Cyrillic,
//!    Greek or Han lines stop here and use the identity map.
//! 2. [`bidi_class()`] and [`bracket_type`]: per codepoint properties from embedded
//!    Unicode Character Database tables.
//! 3. [`resolve_levels`]: paragraph level (P2, P3), explicit embeddings and isolates
//!    (X1 to X10), weak types (W1 to W7), bracket pairs and neutrals (N0 to N2), and
//!    implicit levels (I1, I2). The result is an immutable [`AnalysisResult`].
//! 4. [`reorder()`]: line level resets (L1), run reversal (L2) and mirroring flags (L4).
//!    The map is always **logical to visual**: entry `i` is the visual position of
//!    logical character `i`. Use [`ReorderMap::invert`] for the other orientation.
//!
//! The renderer facing entry point is [`analyze_line()`], which returns a [`BidiLine`]
//! with cursor movement helpers, visual runs and terminal column positions.
//!
//! ## Example
//!
//! ```
//! use r3bl_bidi::{BidiConfig, analyze_line};
//!
//! let codepoints: Vec<char> = "Hello مرحبا World".chars().collect();
//! let line = analyze_line(&codepoints, &BidiConfig::default()).unwrap();
//!
//! // The Latin words keep their order, the Arabic word is reversed in place.
//! assert_eq!(line.visual_pos(0), Some(0));
//! assert_eq!(line.visual_pos(6), Some(10));
//! assert_eq!(line.visual_pos(10), Some(6));
//! assert_eq!(line.visual_pos(12), Some(12));
//! ```
//!
//! ## Logging
//!
//! Events are emitted with [`tracing`] and gated by the `DEBUG_BIDI_*` consts in each
//! module. This crate never installs a subscriber, that is the host application's job.
//!
//! [Unicode Bidirectional Algorithm]: https://www.unicode.org/reports/tr9/

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod bidi_class;
pub mod common;
pub mod fast_path;
pub mod line;
pub mod reorder;
pub mod resolver;
pub mod script;

// Re-export stable public API using glob imports for a flat API surface.
#[allow(ambiguous_glob_reexports)]
pub use bidi_class::*;
#[allow(ambiguous_glob_reexports)]
pub use common::*;
#[allow(ambiguous_glob_reexports)]
pub use fast_path::*;
#[allow(ambiguous_glob_reexports)]
pub use line::*;
#[allow(ambiguous_glob_reexports)]
pub use reorder::*;
#[allow(ambiguous_glob_reexports)]
pub use resolver::*;
#[allow(ambiguous_glob_reexports)]
pub use script::*;
