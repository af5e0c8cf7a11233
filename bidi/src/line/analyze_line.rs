// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{BidiLine, DEBUG_BIDI_LINE, bidi_line::LineAnalysis};
use crate::{BidiConfig, BidiResult, ParagraphDirection, ReorderOutput, analyze,
            needs_analysis_with_policy, reorder, try_vec_with_capacity};

/// Runs one logical line through the whole pipeline: the fast path gate, then (only if
/// the gate asks for it) classification, level resolution and reordering.
///
/// A line forced to [`ParagraphDirection::Rtl`] is always analyzed, since the identity
/// map is only right at paragraph level 0.
///
/// # Errors
///
/// Returns [`BidiError::ResourceExhaustion`] if a working buffer can't be reserved.
///
/// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
pub fn analyze_line(codepoints: &[char], config: &BidiConfig) -> BidiResult<BidiLine> {
    let is_forced_rtl = config.paragraph_direction == ParagraphDirection::Rtl;
    if !is_forced_rtl && !needs_analysis_with_policy(codepoints, config.fast_path) {
        return Ok(BidiLine::identity(codepoints.len()));
    }

    let analysis = analyze(codepoints, config.paragraph_direction)?;
    let ReorderOutput {
        map,
        mirror,
        line_levels,
    } = reorder(&analysis, codepoints)?;
    let visual_to_logical = map.invert()?;

    DEBUG_BIDI_LINE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "bidi line: analyzed",
            len = %codepoints.len(),
            paragraph_level = ?analysis.paragraph_level(),
            max_level = ?analysis.max_level(),
        );
    });

    Ok(BidiLine {
        paragraph_level: analysis.paragraph_level(),
        map,
        analysis: Some(LineAnalysis {
            levels: line_levels,
            visual_to_logical,
            mirror,
        }),
    })
}

/// A line that was handed over as UTF-8, along with its decoded codepoints, which the
/// drawing methods of [`BidiLine`] need.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedBidiLine {
    pub codepoints: Vec<char>,
    pub line: BidiLine,
}

/// Decodes `bytes` as UTF-8 and runs [`analyze_line`] on the result.
///
/// ```
/// use r3bl_bidi::{BidiConfig, BidiError, analyze_utf8_line};
///
/// let decoded = analyze_utf8_line("ab אב".as_bytes(), &BidiConfig::default()).unwrap();
/// assert_eq!(decoded.line.visual_string(&decoded.codepoints), "ab בא");
///
/// let error = analyze_utf8_line(b"ab\xFF", &BidiConfig::default()).unwrap_err();
/// assert_eq!(error, BidiError::Decode { valid_up_to: 2, error_len: Some(1) });
/// ```
///
/// # Errors
///
/// Returns [`BidiError::Decode`] if `bytes` is not valid UTF-8, the line is not
/// analyzed at all in that case. Returns [`BidiError::ResourceExhaustion`] if a buffer
/// can't be reserved.
///
/// [`BidiError::Decode`]: crate::BidiError::Decode
/// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
pub fn analyze_utf8_line(bytes: &[u8], config: &BidiConfig) -> BidiResult<DecodedBidiLine> {
    let text = std::str::from_utf8(bytes)?;
    let mut codepoints = try_vec_with_capacity("codepoints", text.chars().count())?;
    codepoints.extend(text.chars());
    let line = analyze_line(&codepoints, config)?;
    Ok(DecodedBidiLine { codepoints, line })
}

/// The renderer's entry point. Same as [`analyze_line`], except that a failure is
/// logged and replaced with [`BidiLine::identity`], so one bad line only ever renders
/// in logical order and never takes the session down.
#[must_use]
pub fn analyze_line_or_identity(codepoints: &[char], config: &BidiConfig) -> BidiLine {
    match analyze_line(codepoints, config) {
        Ok(line) => line,
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "bidi line: analysis failed, rendering in logical order",
                len = %codepoints.len(),
                error = ?error,
            );
            BidiLine::identity(codepoints.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BidiError, FastPathPolicy, Level, assert_eq2};

    fn chars(text: &str) -> Vec<char> { text.chars().collect() }

    #[test]
    fn test_fast_path_skips_analysis() {
        let codepoints = chars("Hello World!");
        let line = analyze_line(&codepoints, &BidiConfig::default()).unwrap();
        assert!(!line.was_analyzed());
        assert!(line.reorder_map().is_identity());
        assert_eq2!(line.len(), 12);
    }

    #[test]
    fn test_forced_rtl_always_analyzes() {
        let codepoints = chars("abc");
        let config = BidiConfig::default().with_paragraph_direction(ParagraphDirection::Rtl);
        let line = analyze_line(&codepoints, &config).unwrap();
        assert!(line.was_analyzed());
        assert_eq2!(line.paragraph_level(), Level::RTL);
        // LTR text in an RTL paragraph keeps its own order.
        assert_eq2!(line.visual_string(&codepoints), "abc");
    }

    #[test]
    fn test_policy_decides_for_formatting_characters() {
        // a RLO b c PDF: b and c are forced RTL.
        let codepoints = chars("a\u{202E}bc\u{202C}");
        let widened = analyze_line(&codepoints, &BidiConfig::default()).unwrap();
        assert!(widened.was_analyzed());
        assert_eq2!(widened.visual_pos(2), Some(3));
        assert_eq2!(widened.visual_pos(3), Some(2));

        let narrow = BidiConfig::default().with_fast_path(FastPathPolicy::ScriptRanges);
        let line = analyze_line(&codepoints, &narrow).unwrap();
        assert!(!line.was_analyzed());
    }

    #[test]
    fn test_utf8_line() {
        let decoded = analyze_utf8_line("".as_bytes(), &BidiConfig::default()).unwrap();
        assert!(decoded.line.is_empty());
        assert!(decoded.codepoints.is_empty());

        let error = analyze_utf8_line(b"\xE2\x82", &BidiConfig::default()).unwrap_err();
        assert_eq2!(
            error,
            BidiError::Decode {
                valid_up_to: 0,
                error_len: None
            }
        );
    }

    #[test]
    fn test_or_identity_passes_results_through() {
        let codepoints = chars("ab אב");
        let config = BidiConfig::default();
        assert_eq2!(
            analyze_line_or_identity(&codepoints, &config),
            analyze_line(&codepoints, &config).unwrap()
        );
    }
}
