// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Enable or disable debug logging for line analysis.
pub const DEBUG_BIDI_LINE: bool = false;

// Attach sources.
pub mod analyze_line;
pub mod bidi_line;
pub mod visual_run;

// Re-export.
pub use analyze_line::*;
pub use bidi_line::*;
pub use visual_run::*;
