// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BidiClass, Level};

/// Output of [`resolve_levels`]: one resolved embedding level per input character, plus
/// the paragraph level. The original bidi classes are kept alongside because the line
/// rules (L1) need them.
///
/// Immutable once returned. The reorder engine only ever reads it, so an analysis can
/// be reordered any number of times (or shared between threads) without recomputing.
///
/// Invariants:
/// - `levels().len() == classes().len()` and both match the input length.
/// - `paragraph_level()` is [`Level::LTR`] or [`Level::RTL`].
///
/// [`resolve_levels`]: crate::resolve_levels
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisResult {
    paragraph_level: Level,
    levels: Vec<Level>,
    classes: Vec<BidiClass>,
}

impl AnalysisResult {
    pub(crate) fn new(
        paragraph_level: Level,
        levels: Vec<Level>,
        classes: Vec<BidiClass>,
    ) -> Self {
        debug_assert_eq!(levels.len(), classes.len());
        Self {
            paragraph_level,
            levels,
            classes,
        }
    }

    #[must_use]
    pub fn paragraph_level(&self) -> Level { self.paragraph_level }

    /// Resolved levels, before the line rules reset trailing whitespace.
    #[must_use]
    pub fn levels(&self) -> &[Level] { &self.levels }

    /// Original `Bidi_Class` of each character.
    #[must_use]
    pub fn classes(&self) -> &[BidiClass] { &self.classes }

    #[must_use]
    pub fn len(&self) -> usize { self.levels.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.levels.is_empty() }

    /// Highest resolved level, the paragraph level for an empty line.
    #[must_use]
    pub fn max_level(&self) -> Level {
        self.levels
            .iter()
            .copied()
            .max()
            .unwrap_or(self.paragraph_level)
    }

    /// `true` if nothing in the line would be reordered: every level equals the
    /// paragraph level and that level is even.
    #[must_use]
    pub fn is_pure_ltr(&self) -> bool {
        self.paragraph_level.is_ltr() && self.levels.iter().all(|&it| it == self.paragraph_level)
    }
}
