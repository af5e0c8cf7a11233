// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod bidi_class_type;
pub mod lookup;
mod ucd_tables;

// Re-export.
pub use bidi_class_type::*;
pub use lookup::*;
