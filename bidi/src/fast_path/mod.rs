// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Enable or disable debug logging for the fast path gate.
pub const DEBUG_BIDI_FAST_PATH: bool = false;

// Attach sources.
pub mod gate;

// Re-export.
pub use gate::*;
