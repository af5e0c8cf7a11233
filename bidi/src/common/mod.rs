// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod bidi_error;
pub mod buffers;
pub mod config;
pub mod decl_macros;
pub mod sizes;

// Re-export.
pub use bidi_error::*;
pub use buffers::*;
pub use config::*;
pub use sizes::*;
