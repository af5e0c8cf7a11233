// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Enable or disable debug logging for the reorder engine.
pub const DEBUG_BIDI_REORDER: bool = false;

// Attach sources.
pub mod line_reset;
pub mod reorder_engine;
pub mod reorder_map;

// Re-export.
pub use line_reset::*;
pub use reorder_engine::*;
pub use reorder_map::*;
