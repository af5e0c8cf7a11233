// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Level;

/// How the paragraph embedding level of a line is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum_macros::Display)]
pub enum ParagraphDirection {
    /// Rules P2 and P3: the first strong character outside of isolates decides, LTR if
    /// there is none.
    #[default]
    Auto,
    /// Paragraph level 0.
    Ltr,
    /// Paragraph level 1. Lines with this setting always get full analysis, since the
    /// identity map is only correct at paragraph level 0.
    Rtl,
}

impl ParagraphDirection {
    /// The forced paragraph level, `None` for [`ParagraphDirection::Auto`].
    #[must_use]
    pub fn forced_level(self) -> Option<Level> {
        match self {
            ParagraphDirection::Auto => None,
            ParagraphDirection::Ltr => Some(Level::LTR),
            ParagraphDirection::Rtl => Some(Level::RTL),
        }
    }
}

/// Which codepoints make the fast path gate run the full analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum_macros::Display)]
pub enum FastPathPolicy {
    /// Only codepoints in complex script ranges (Arabic, Hebrew, Devanagari, Thai). RTL
    /// text outside those ranges (eg: Syriac, Thaana, N'Ko) or explicit formatting
    /// characters in otherwise Latin text are rendered in logical order.
    ScriptRanges,
    /// Complex script ranges, plus any codepoint whose bidi class is `R`, `AL`, `AN` or
    /// an explicit embedding, override or isolate formatting character.
    #[default]
    BidiTypes,
}

/// Knobs for [`analyze_line`] and friends. Cheap to copy, build it once per terminal
/// session.
///
/// ```
/// use r3bl_bidi::{BidiConfig, FastPathPolicy, ParagraphDirection};
///
/// let config = BidiConfig::default()
///     .with_paragraph_direction(ParagraphDirection::Rtl)
///     .with_fast_path(FastPathPolicy::ScriptRanges);
/// assert_eq!(config.paragraph_direction, ParagraphDirection::Rtl);
/// ```
///
/// [`analyze_line`]: fn@crate::analyze_line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BidiConfig {
    pub paragraph_direction: ParagraphDirection,
    pub fast_path: FastPathPolicy,
}

impl BidiConfig {
    #[must_use]
    pub fn with_paragraph_direction(mut self, arg: ParagraphDirection) -> Self {
        self.paragraph_direction = arg;
        self
    }

    #[must_use]
    pub fn with_fast_path(mut self, arg: FastPathPolicy) -> Self {
        self.fast_path = arg;
        self
    }
}
