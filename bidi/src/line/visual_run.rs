// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use unicode_width::UnicodeWidthChar;

use super::BidiLine;
use crate::{BidiResult, InlineVec, Level, try_vec_with_capacity};

/// A maximal run of characters with the same final level. Runs are contiguous both in
/// logical and visual order, so the renderer can draw a line run by run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualRun {
    pub logical_range: Range<usize>,
    pub level: Level,
}

impl VisualRun {
    /// `true` if the run is drawn right to left, ie: its last logical character is its
    /// leftmost glyph.
    #[must_use]
    pub fn is_rtl(&self) -> bool { self.level.is_rtl() }

    #[must_use]
    pub fn len(&self) -> usize { self.logical_range.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.logical_range.is_empty() }
}

impl BidiLine {
    /// The runs of the line, listed in visual order (left to right on screen).
    ///
    /// ```
    /// use r3bl_bidi::{BidiConfig, analyze_line};
    ///
    /// let codepoints: Vec<char> = "ab אב".chars().collect();
    /// let line = analyze_line(&codepoints, &BidiConfig::default()).unwrap();
    /// let runs = line.visual_runs();
    /// assert_eq!(runs.len(), 2);
    /// assert_eq!(runs[0].logical_range, 0..3);
    /// assert!(runs[1].is_rtl());
    /// ```
    #[must_use]
    pub fn visual_runs(&self) -> InlineVec<VisualRun> {
        let mut acc = InlineVec::<VisualRun>::new();
        let Some(analysis) = &self.analysis else {
            if !self.is_empty() {
                acc.push(VisualRun {
                    logical_range: 0..self.len(),
                    level: Level::LTR,
                });
            }
            return acc;
        };

        for &logical in &analysis.visual_to_logical {
            let level = analysis.levels[logical];
            if let Some(run) = acc.last_mut() {
                let range = &mut run.logical_range;
                if run.level == level && logical + 1 == range.start {
                    range.start = logical;
                    continue;
                }
                if run.level == level && logical == range.end {
                    range.end = logical + 1;
                    continue;
                }
            }
            acc.push(VisualRun {
                logical_range: logical..logical + 1,
                level,
            });
        }
        acc
    }

    /// For each visual position, the grid column the glyph starts in. Wide characters
    /// take two cells, zero width ones (eg: combining marks, formatting characters) none.
    ///
    /// # Errors
    ///
    /// Returns [`BidiError::ResourceExhaustion`] if the buffer can't be reserved.
    ///
    /// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
    pub fn visual_columns(&self, codepoints: &[char]) -> BidiResult<Vec<usize>> {
        let mut acc = try_vec_with_capacity("visual columns", self.len())?;
        let mut column = 0;
        for visual in 0..self.len() {
            acc.push(column);
            column += self
                .char_at_visual(codepoints, visual)
                .map_or(0, cell_width);
        }
        Ok(acc)
    }

    /// Total number of grid cells the line takes. Reordering does not change it.
    #[must_use]
    pub fn display_width(&self, codepoints: &[char]) -> usize {
        codepoints.iter().take(self.len()).map(|&ch| cell_width(ch)).sum()
    }
}

fn cell_width(ch: char) -> usize { UnicodeWidthChar::width(ch).unwrap_or(0) }
