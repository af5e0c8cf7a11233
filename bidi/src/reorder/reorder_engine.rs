// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DEBUG_BIDI_REORDER, ReorderMap, line_levels};
use crate::{AnalysisResult, BidiResult, Level, is_bidi_mirrored, try_vec_from_iter};

/// What the renderer needs to draw one line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReorderOutput {
    /// Logical to visual map.
    pub map: ReorderMap,
    /// `mirror[i]` is `true` when the character at logical position `i` must be drawn
    /// with its mirrored glyph, eg: `(` drawn as `)`.
    pub mirror: Vec<bool>,
    /// Levels after the line rules (L1), the ones the map was built from.
    pub line_levels: Vec<Level>,
}

/// Rule L2 only: reverses, from the highest level down to the lowest odd level, every
/// maximal run of characters at that level or higher. Returns the logical to visual
/// map. Levels that are all even (eg: a pure LTR line) give the identity map.
///
/// ```
/// use r3bl_bidi::{level, reorder_levels};
///
/// // "ab" then an RTL run of three, then "c".
/// let levels = [0_u8, 0, 1, 1, 1, 0].map(level);
/// let map = reorder_levels(&levels).unwrap();
/// assert_eq!(map.to_vec().unwrap(), vec![0, 1, 4, 3, 2, 5]);
/// ```
///
/// # Errors
///
/// Returns [`BidiError::ResourceExhaustion`] if the buffer can't be reserved.
///
/// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
pub fn reorder_levels(levels: &[Level]) -> BidiResult<ReorderMap> {
    let Some(lowest_odd) = levels
        .iter()
        .filter(|it| it.is_rtl())
        .min()
        .copied()
    else {
        return Ok(ReorderMap::identity(levels.len()));
    };
    let highest = levels.iter().copied().max().unwrap_or(lowest_odd);

    // Visual to logical order, reversed in place run by run.
    let mut order = try_vec_from_iter("visual order", 0..levels.len())?;
    let mut current = highest;
    while current >= lowest_odd {
        let mut pos = 0;
        while pos < order.len() {
            if levels[order[pos]] < current {
                pos += 1;
                continue;
            }
            let start = pos;
            while pos < order.len() && levels[order[pos]] >= current {
                pos += 1;
            }
            order[start..pos].reverse();
        }
        current = Level(current.value() - 1);
    }

    ReorderMap::from_visual_to_logical(&order)
}

/// Runs the line rules over an analysis: L1 resets, L2 reversal, and L4 mirroring
/// flags. `codepoints` must be the line the analysis was made from. The analysis is
/// only read, so it can be reordered again at any time with the same result.
///
/// # Errors
///
/// Returns [`BidiError::ResourceExhaustion`] if a buffer can't be reserved.
///
/// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
pub fn reorder(analysis: &AnalysisResult, codepoints: &[char]) -> BidiResult<ReorderOutput> {
    debug_assert_eq!(analysis.len(), codepoints.len());

    let line_levels = line_levels(
        analysis.levels(),
        analysis.classes(),
        analysis.paragraph_level(),
    )?;
    let map = reorder_levels(&line_levels)?;

    // L4.
    let mirror = try_vec_from_iter(
        "mirror flags",
        codepoints
            .iter()
            .zip(&line_levels)
            .map(|(&ch, level)| level.is_rtl() && is_bidi_mirrored(ch)),
    )?;

    DEBUG_BIDI_REORDER.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "bidi reorder: line reordered",
            max_level = ?line_levels.iter().max(),
            is_identity = %map.is_identity(),
        );
    });

    Ok(ReorderOutput {
        map,
        mirror,
        line_levels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParagraphDirection, analyze, assert_eq2, level};

    fn map_of(levels: &[u8]) -> Vec<usize> {
        let levels: Vec<Level> = levels.iter().map(|&it| level(it)).collect();
        reorder_levels(&levels).unwrap().to_vec().unwrap()
    }

    #[test]
    fn test_all_even_is_identity() {
        assert_eq2!(map_of(&[0, 0, 0]), vec![0, 1, 2]);
        assert_eq2!(map_of(&[0, 2, 2, 0]), vec![0, 1, 2, 3]);
        assert!(reorder_levels(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_single_rtl_run() {
        assert_eq2!(map_of(&[1, 1, 1, 1, 1]), vec![4, 3, 2, 1, 0]);
        assert_eq2!(map_of(&[1]), vec![0]);
    }

    #[test]
    fn test_nested_runs() {
        // R R (L L inside RTL at level 2) R.
        assert_eq2!(map_of(&[1, 1, 2, 2, 1]), vec![4, 3, 1, 2, 0]);
        // LTR paragraph with an RTL run containing a number.
        assert_eq2!(map_of(&[0, 1, 1, 2, 2, 1, 0]), vec![0, 5, 4, 2, 3, 1, 6]);
        // Three levels deep.
        assert_eq2!(map_of(&[1, 2, 3, 3, 2, 1]), vec![5, 1, 3, 2, 4, 0]);
    }

    #[test]
    fn test_reorder_with_mirroring() {
        let codepoints: Vec<char> = "א(ב)".chars().collect();
        let analysis = analyze(&codepoints, ParagraphDirection::Auto).unwrap();
        let output = reorder(&analysis, &codepoints).unwrap();
        assert_eq2!(output.map.to_vec().unwrap(), vec![3, 2, 1, 0]);
        assert_eq2!(output.mirror, vec![false, true, false, true]);

        let codepoints: Vec<char> = "a(b)".chars().collect();
        let analysis = analyze(&codepoints, ParagraphDirection::Auto).unwrap();
        let output = reorder(&analysis, &codepoints).unwrap();
        assert!(output.map.is_identity());
        assert_eq2!(output.mirror, vec![false; 4]);
    }

    #[test]
    fn test_trailing_whitespace_stays_at_line_end() {
        // RTL paragraph: trailing space is at paragraph level 1, so it ends up on the
        // left edge together with the rest of the reversed line.
        let codepoints: Vec<char> = "אב ".chars().collect();
        let analysis = analyze(&codepoints, ParagraphDirection::Auto).unwrap();
        let output = reorder(&analysis, &codepoints).unwrap();
        assert_eq2!(output.map.to_vec().unwrap(), vec![2, 1, 0]);

        // LTR paragraph ending with Hebrew then a space: the space resets to 0.
        let codepoints: Vec<char> = "a אב ".chars().collect();
        let analysis = analyze(&codepoints, ParagraphDirection::Auto).unwrap();
        let output = reorder(&analysis, &codepoints).unwrap();
        assert_eq2!(output.map.to_vec().unwrap(), vec![0, 1, 3, 2, 4]);
    }

    #[test]
    fn test_reorder_does_not_mutate_analysis() {
        let codepoints: Vec<char> = "abc אבג ".chars().collect();
        let analysis = analyze(&codepoints, ParagraphDirection::Auto).unwrap();
        let before = analysis.clone();
        let first = reorder(&analysis, &codepoints).unwrap();
        let second = reorder(&analysis, &codepoints).unwrap();
        assert_eq2!(analysis, before);
        assert_eq2!(first, second);
    }
}
