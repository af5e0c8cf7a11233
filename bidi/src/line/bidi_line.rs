// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

use crate::{Level, ReorderMap, mirrored_glyph};

/// The result of running one terminal line through the engine, in the shape the
/// renderer wants: a logical to visual map, the mirroring flags, and helpers to move a
/// cursor or lay the line out on the grid.
///
/// A line that the fast path gate let through (or that failed analysis) is the
/// *identity line*: every character is at level 0, drawn at its logical position, and
/// nothing is mirrored. It holds no per character buffers at all.
///
/// Methods that draw characters take the `codepoints` the line was analyzed from. This
/// type does not keep a copy of them, cell storage already owns them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BidiLine {
    pub(crate) paragraph_level: Level,
    pub(crate) map: ReorderMap,
    pub(crate) analysis: Option<LineAnalysis>,
}

/// Per character buffers, only present when the rule engine ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineAnalysis {
    /// Levels after the line rules (L1).
    pub(crate) levels: Vec<Level>,
    pub(crate) visual_to_logical: Vec<usize>,
    pub(crate) mirror: Vec<bool>,
}

impl BidiLine {
    /// The identity line of `len` characters.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self {
            paragraph_level: Level::LTR,
            map: ReorderMap::identity(len),
            analysis: None,
        }
    }

    #[must_use]
    pub fn paragraph_level(&self) -> Level { self.paragraph_level }

    #[must_use]
    pub fn reorder_map(&self) -> &ReorderMap { &self.map }

    #[must_use]
    pub fn len(&self) -> usize { self.map.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// `false` for the identity line, ie: the rule engine did not run.
    #[must_use]
    pub fn was_analyzed(&self) -> bool { self.analysis.is_some() }

    /// Final level of every character, in logical order. Borrowed when the line was
    /// analyzed, otherwise a fresh buffer of level 0 entries.
    #[must_use]
    pub fn levels(&self) -> Cow<'_, [Level]> {
        match &self.analysis {
            Some(analysis) => Cow::Borrowed(&analysis.levels),
            None => Cow::Owned(vec![Level::LTR; self.len()]),
        }
    }

    /// Mirroring flags in logical order, see [`crate::ReorderOutput::mirror`].
    #[must_use]
    pub fn mirror(&self) -> Cow<'_, [bool]> {
        match &self.analysis {
            Some(analysis) => Cow::Borrowed(&analysis.mirror),
            None => Cow::Owned(vec![false; self.len()]),
        }
    }

    #[must_use]
    pub fn level_at(&self, logical: usize) -> Option<Level> {
        match &self.analysis {
            Some(analysis) => analysis.levels.get(logical).copied(),
            None => (logical < self.len()).then_some(Level::LTR),
        }
    }

    #[must_use]
    pub fn is_mirrored_at(&self, logical: usize) -> bool {
        self.analysis
            .as_ref()
            .and_then(|analysis| analysis.mirror.get(logical).copied())
            .unwrap_or(false)
    }

    /// `true` if the character at `logical` is in a right-to-left run.
    #[must_use]
    pub fn is_rtl_at(&self, logical: usize) -> bool {
        self.level_at(logical).is_some_and(|it| it.is_rtl())
    }

    /// Visual position (screen order) of the character at `logical`.
    #[must_use]
    pub fn visual_pos(&self, logical: usize) -> Option<usize> { self.map.visual_pos(logical) }

    /// Logical position of the character drawn at `visual`.
    #[must_use]
    pub fn logical_pos(&self, visual: usize) -> Option<usize> {
        match &self.analysis {
            Some(analysis) => analysis.visual_to_logical.get(visual).copied(),
            None => (visual < self.len()).then_some(visual),
        }
    }

    /// The glyph to draw at `visual`, with the mirrored glyph substituted for flagged
    /// characters (eg: `(` drawn as `)` in an RTL run).
    #[must_use]
    pub fn char_at_visual(&self, codepoints: &[char], visual: usize) -> Option<char> {
        let logical = self.logical_pos(visual)?;
        let ch = *codepoints.get(logical)?;
        if self.is_mirrored_at(logical) {
            Some(mirrored_glyph(ch).unwrap_or(ch))
        } else {
            Some(ch)
        }
    }

    /// The whole line in the order it is drawn, left to right.
    ///
    /// ```
    /// use r3bl_bidi::{BidiConfig, analyze_line};
    ///
    /// let codepoints: Vec<char> = "אב(ג)".chars().collect();
    /// let line = analyze_line(&codepoints, &BidiConfig::default()).unwrap();
    /// assert_eq!(line.visual_string(&codepoints), "(ג)בא");
    /// ```
    #[must_use]
    pub fn visual_string(&self, codepoints: &[char]) -> String {
        (0..self.len())
            .filter_map(|visual| self.char_at_visual(codepoints, visual))
            .collect()
    }

    /// Logical index of the character drawn just right of the one at `logical`. At the
    /// right edge of the line (or for an out of range index) `logical` is returned as
    /// is.
    #[must_use]
    pub fn move_visual_right(&self, logical: usize) -> usize {
        self.visual_pos(logical)
            .and_then(|visual| self.logical_pos(visual + 1))
            .unwrap_or(logical)
    }

    /// Logical index of the character drawn just left of the one at `logical`. At the
    /// left edge of the line (or for an out of range index) `logical` is returned as
    /// is.
    #[must_use]
    pub fn move_visual_left(&self, logical: usize) -> usize {
        self.visual_pos(logical)
            .and_then(|visual| visual.checked_sub(1))
            .and_then(|visual| self.logical_pos(visual))
            .unwrap_or(logical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BidiConfig, analyze_line, assert_eq2};

    fn chars(text: &str) -> Vec<char> { text.chars().collect() }

    #[test]
    fn test_identity_line() {
        let line = BidiLine::identity(3);
        assert!(!line.was_analyzed());
        assert_eq2!(line.len(), 3);
        assert_eq2!(line.paragraph_level(), Level::LTR);
        assert_eq2!(line.levels().to_vec(), vec![Level::LTR; 3]);
        assert_eq2!(line.mirror().to_vec(), vec![false; 3]);
        assert_eq2!(line.visual_pos(2), Some(2));
        assert_eq2!(line.logical_pos(2), Some(2));
        assert_eq2!(line.logical_pos(3), None);
        assert!(!line.is_rtl_at(0));
        assert_eq2!(line.visual_string(&chars("(a)")), "(a)");
        assert!(BidiLine::default().is_empty());
    }

    #[test]
    fn test_positions_round_trip() {
        let codepoints = chars("ab אבג cd");
        let line = analyze_line(&codepoints, &BidiConfig::default()).unwrap();
        assert!(line.was_analyzed());
        for logical in 0..line.len() {
            let visual = line.visual_pos(logical).unwrap();
            assert_eq2!(line.logical_pos(visual), Some(logical));
        }
        assert!(line.is_rtl_at(3));
        assert!(!line.is_rtl_at(0));
        assert_eq2!(line.visual_string(&codepoints), "ab גבא cd");
    }

    #[test]
    fn test_cursor_moves_in_visual_order() {
        // Logical: a b ' ' א ב ג, visual: a b ' ' ג ב א.
        let codepoints = chars("ab אבג");
        let line = analyze_line(&codepoints, &BidiConfig::default()).unwrap();
        assert_eq2!(line.visual_string(&codepoints), "ab גבא");

        // Moving right from the space lands on ג (logical 5), the leftmost RTL glyph.
        assert_eq2!(line.move_visual_right(2), 5);
        assert_eq2!(line.move_visual_right(5), 4);
        assert_eq2!(line.move_visual_right(4), 3);
        // א is drawn last, so it is the right edge.
        assert_eq2!(line.move_visual_right(3), 3);

        assert_eq2!(line.move_visual_left(3), 4);
        assert_eq2!(line.move_visual_left(5), 2);
        assert_eq2!(line.move_visual_left(0), 0);
        assert_eq2!(line.move_visual_left(99), 99);
    }

    #[test]
    fn test_char_at_visual_mirrors_brackets_in_rtl() {
        let codepoints = chars("א(ב)");
        let line = analyze_line(&codepoints, &BidiConfig::default()).unwrap();
        // Visual: ) ב ( א, each bracket flipped back so the pair still reads as (ב).
        assert_eq2!(line.char_at_visual(&codepoints, 0), Some('('));
        assert_eq2!(line.char_at_visual(&codepoints, 2), Some(')'));
        assert_eq2!(line.char_at_visual(&codepoints, 4), None);
        assert_eq2!(line.mirror().to_vec(), vec![false, true, false, true]);
    }
}
