// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words sos eos

//! The embedding level resolver. The rule passes run in this order:
//!
//! | Pass                   | Rules          | Source                 |
//! | :--------------------- | :------------- | :--------------------- |
//! | paragraph level        | P2, P3         | [`paragraph`]          |
//! | explicit levels        | X1 to X8       | [`explicit`]           |
//! | run sequences          | X9, X10        | [`run_sequence`]       |
//! | weak types             | W1 to W7       | [`weak`]               |
//! | brackets and neutrals  | N0 to N2       | [`neutral`]            |
//! | implicit levels        | I1, I2         | [`implicit`]           |
//!
//! The weak, neutral and implicit passes run once per isolating run sequence.

use crate::{BidiClass, BidiResult, BracketType, ParagraphDirection, bidi_classes_of,
            bracket_types_of};

/// Enable or disable debug logging for the level resolver.
pub const DEBUG_BIDI_RESOLVER: bool = false;

// Attach sources.
pub mod analysis_result;
pub mod explicit;
pub mod implicit;
pub mod level;
pub mod neutral;
pub mod paragraph;
pub mod run_sequence;
pub mod weak;

// Re-export.
pub use analysis_result::*;
pub use level::*;
pub use paragraph::*;
pub use run_sequence::*;

/// Resolves one embedding level per character. `classes` and `brackets` are the
/// per character `Bidi_Class` and `Bidi_Paired_Bracket_Type` of the line, see
/// [`bidi_classes_of`] and [`bracket_types_of`]. A `brackets` slice that is shorter than
/// `classes` is treated as [`BracketType::None`] for the missing entries.
///
/// Empty input returns an empty result at [`Level::LTR`] without touching any of the
/// rule machinery. Input made only of explicit formatting characters still produces a
/// level for every one of them.
///
/// # Errors
///
/// Returns [`BidiError::ResourceExhaustion`] if a working buffer can't be reserved.
///
/// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
pub fn resolve_levels(
    classes: &[BidiClass],
    brackets: &[BracketType],
    paragraph_direction: ParagraphDirection,
) -> BidiResult<AnalysisResult> {
    if classes.is_empty() {
        return Ok(AnalysisResult::default());
    }

    // P2, P3.
    let paragraph_level = paragraph_direction
        .forced_level()
        .unwrap_or_else(|| paragraph_level_of(classes));

    // X1 to X8.
    let explicit::ExplicitResult {
        mut levels,
        classes: mut resolved_classes,
    } = explicit::resolve_explicit(classes, paragraph_level)?;

    // X9, X10.
    let sequences = isolating_run_sequences(classes, &levels, paragraph_level)?;

    DEBUG_BIDI_RESOLVER.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "bidi resolver: explicit levels done",
            paragraph_level = ?paragraph_level,
            sequence_count = %sequences.len(),
        );
    });

    for sequence in &sequences {
        weak::resolve_weak_types(sequence, &mut resolved_classes);
        neutral::resolve_paired_brackets(sequence, classes, brackets, &mut resolved_classes);
        neutral::resolve_neutral_types(sequence, &mut resolved_classes);
        implicit::resolve_implicit_levels(sequence, &resolved_classes, &mut levels);
    }

    implicit::assign_removed_levels(classes, &mut levels, paragraph_level);

    let mut original_classes = resolved_classes;
    original_classes.copy_from_slice(classes);

    Ok(AnalysisResult::new(paragraph_level, levels, original_classes))
}

/// Looks up the bidi properties of `codepoints` and runs [`resolve_levels`] on them.
///
/// ```
/// use r3bl_bidi::{Level, ParagraphDirection, analyze};
///
/// let codepoints: Vec<char> = "abc אבג".chars().collect();
/// let analysis = analyze(&codepoints, ParagraphDirection::Auto).unwrap();
/// assert_eq!(analysis.paragraph_level(), Level::LTR);
/// assert_eq!(analysis.levels()[5], Level::RTL);
/// ```
///
/// # Errors
///
/// Returns [`BidiError::ResourceExhaustion`] if a working buffer can't be reserved.
///
/// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
pub fn analyze(
    codepoints: &[char],
    paragraph_direction: ParagraphDirection,
) -> BidiResult<AnalysisResult> {
    if codepoints.is_empty() {
        return Ok(AnalysisResult::default());
    }
    let classes = bidi_classes_of(codepoints)?;
    let brackets = bracket_types_of(codepoints)?;
    resolve_levels(&classes, &brackets, paragraph_direction)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{MAX_RESOLVED_LEVEL, assert_eq2};

    fn levels_of(text: &str, paragraph_direction: ParagraphDirection) -> (u8, Vec<u8>) {
        let codepoints: Vec<char> = text.chars().collect();
        let analysis = analyze(&codepoints, paragraph_direction).unwrap();
        assert_eq2!(analysis.len(), codepoints.len());
        (
            analysis.paragraph_level().value(),
            analysis.levels().iter().map(Level::value).collect(),
        )
    }

    #[test]
    fn test_level_is_exported_from_crate_root() {
        let analysis = analyze(&['\u{05D0}'], ParagraphDirection::Auto).unwrap();
        let root_level: crate::Level = analysis.paragraph_level();
        assert_eq2!(root_level, crate::Level::RTL);
        assert_eq2!(crate::level(1), level::Level::RTL);
    }

    #[test]
    fn test_empty_input() {
        let analysis = resolve_levels(&[], &[], ParagraphDirection::Rtl).unwrap();
        assert!(analysis.is_empty());
        assert_eq2!(analysis.paragraph_level(), Level::LTR);
    }

    #[test_case("Hello World!", 0, &[0; 12]; "latin")]
    #[test_case("مرحبا", 1, &[1; 5]; "arabic")]
    #[test_case("Hello مرحبا World", 0, &[0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0]; "mixed")]
    #[test_case("abc 123", 0, &[0, 0, 0, 0, 0, 0, 0]; "european numbers after latin")]
    #[test_case("אבג 123", 1, &[1, 1, 1, 1, 2, 2, 2]; "european numbers after hebrew")]
    #[test_case("ab (cd) אב", 0, &[0, 0, 0, 0, 0, 0, 0, 0, 1, 1]; "brackets in ltr")]
    #[test_case("אב (גד) ab", 1, &[1, 1, 1, 1, 1, 1, 1, 1, 2, 2]; "brackets in rtl")]
    #[test_case("שלום, world!", 1, &[1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 1]; "trailing punctuation takes paragraph direction")]
    #[test_case("\u{0627}\u{0661}\u{0662}", 1, &[1, 2, 2]; "arabic digits")]
    #[test_case("\u{0627}12", 1, &[1, 2, 2]; "european digits after arabic letter become AN")]
    fn test_auto_levels(text: &str, expected_paragraph: u8, expected: &[u8]) {
        let (paragraph_level, levels) = levels_of(text, ParagraphDirection::Auto);
        assert_eq2!(paragraph_level, expected_paragraph);
        assert_eq2!(levels, expected.to_vec());
    }

    #[test]
    fn test_forced_paragraph_direction() {
        let (paragraph_level, levels) = levels_of("abc", ParagraphDirection::Rtl);
        assert_eq2!(paragraph_level, 1);
        assert_eq2!(levels, vec![2, 2, 2]);

        let (paragraph_level, levels) = levels_of("אב", ParagraphDirection::Ltr);
        assert_eq2!(paragraph_level, 0);
        assert_eq2!(levels, vec![1, 1]);
    }

    #[test]
    fn test_isolate_keeps_outer_text_together() {
        // a RLI b PDI c: the isolate content is level 1 but its L resolves to 2.
        let (_, levels) = levels_of("a\u{2067}b\u{2069}c", ParagraphDirection::Auto);
        assert_eq2!(levels, vec![0, 0, 2, 0, 0]);

        // An isolate hides its content from the paragraph level scan.
        let (paragraph_level, _) =
            levels_of("\u{2067}אב\u{2069}xy", ParagraphDirection::Auto);
        assert_eq2!(paragraph_level, 0);
    }

    #[test]
    fn test_override_and_removed_characters() {
        // a RLO b c PDF d: the override makes b and c R at level 1. The RLO and PDF
        // take the level of the character before them.
        let (_, levels) = levels_of("a\u{202E}bc\u{202C}d", ParagraphDirection::Auto);
        assert_eq2!(levels, vec![0, 0, 1, 1, 1, 0]);
    }

    #[test]
    fn test_only_explicit_formatting_characters() {
        let (paragraph_level, levels) =
            levels_of("\u{202B}\u{202C}\u{2067}\u{2069}", ParagraphDirection::Auto);
        assert_eq2!(paragraph_level, 0);
        assert_eq2!(levels.len(), 4);
    }

    #[test]
    fn test_deep_nesting_is_bounded() {
        let mut text = String::new();
        for _ in 0..200 {
            text.push('\u{202B}');
            text.push('\u{202A}');
        }
        text.push_str("a1");
        let (_, levels) = levels_of(&text, ParagraphDirection::Auto);
        assert!(levels.iter().all(|&it| it <= MAX_RESOLVED_LEVEL));
    }

    #[test]
    fn test_idempotent() {
        let codepoints: Vec<char> = "Hello (مرحبا) 123 עולם!".chars().collect();
        let first = analyze(&codepoints, ParagraphDirection::Auto).unwrap();
        let second = analyze(&codepoints, ParagraphDirection::Auto).unwrap();
        assert_eq2!(first, second);
    }
}
