// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Per codepoint property lookups backed by the generated tables in `ucd_tables`. Every
//! lookup is a binary search over a sorted static slice, so there is no initialization
//! and nothing to cache.

use super::{BidiClass, BracketType,
            ucd_tables::{BIDI_CLASS_RANGES, BIDI_MIRRORED_RANGES, BRACKET_PAIRS,
                         MIRRORING_GLYPHS}};
use crate::{BidiResult, try_vec_from_iter};

/// `Bidi_Class` of `ch`. Total: unlisted codepoints are `L`, and unassigned codepoints
/// in RTL blocks already carry their default class in the table.
#[must_use]
pub fn bidi_class(ch: char) -> BidiClass {
    let cp = u32::from(ch);
    let pos = BIDI_CLASS_RANGES.partition_point(|&(_, end, _)| end < cp);
    match BIDI_CLASS_RANGES.get(pos) {
        Some(&(start, _, class)) if start <= cp => class,
        _ => BidiClass::L,
    }
}

/// `Bidi_Mirrored=Yes`. These are the characters that get a mirroring flag when their
/// resolved level is odd (rule L4).
#[must_use]
pub fn is_bidi_mirrored(ch: char) -> bool {
    let cp = u32::from(ch);
    let pos = BIDI_MIRRORED_RANGES.partition_point(|&(_, end)| end < cp);
    matches!(BIDI_MIRRORED_RANGES.get(pos), Some(&(start, _)) if start <= cp)
}

/// The `Bidi_Mirroring_Glyph` of `ch`, eg: `(` for `)`. Some mirrored characters have
/// no mirror image glyph in Unicode, for those this returns `None` and the renderer has
/// to draw the original.
#[must_use]
pub fn mirrored_glyph(ch: char) -> Option<char> {
    let cp = u32::from(ch);
    MIRRORING_GLYPHS
        .binary_search_by_key(&cp, |&(from, _)| from)
        .ok()
        .and_then(|index| char::from_u32(MIRRORING_GLYPHS[index].1))
}

/// `Bidi_Paired_Bracket_Type` of `ch`, with canonical equivalents folded together.
#[must_use]
pub fn bracket_type(ch: char) -> BracketType {
    if let Ok(index) = BRACKET_PAIRS.binary_search_by_key(&ch, |&(open, _)| open) {
        return BracketType::Open(canonical_bracket(BRACKET_PAIRS[index].0));
    }
    match BRACKET_PAIRS.iter().find(|&&(_, close)| close == ch) {
        Some(&(open, _)) => BracketType::Close(canonical_bracket(open)),
        None => BracketType::None,
    }
}

/// Folds the two bracket characters that have a canonical decomposition onto their
/// decomposition (U+2329 to U+3008 and U+232A to U+3009). Every other char is returned
/// as is.
#[must_use]
pub fn canonical_bracket(ch: char) -> char {
    match ch {
        '\u{2329}' => '\u{3008}',
        '\u{232A}' => '\u{3009}',
        _ => ch,
    }
}

/// [`bidi_class`] for a whole line.
///
/// # Errors
///
/// Returns [`BidiError::ResourceExhaustion`] if the buffer can't be reserved.
///
/// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
pub fn bidi_classes_of(codepoints: &[char]) -> BidiResult<Vec<BidiClass>> {
    try_vec_from_iter("bidi classes", codepoints.iter().map(|&ch| bidi_class(ch)))
}

/// [`bracket_type`] for a whole line.
///
/// # Errors
///
/// Returns [`BidiError::ResourceExhaustion`] if the buffer can't be reserved.
///
/// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
pub fn bracket_types_of(codepoints: &[char]) -> BidiResult<Vec<BracketType>> {
    try_vec_from_iter("bracket types", codepoints.iter().map(|&ch| bracket_type(ch)))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case('a', BidiClass::L; "latin small letter a")]
    #[test_case('Z', BidiClass::L; "latin capital letter z")]
    #[test_case('ж', BidiClass::L; "cyrillic small letter zhe")]
    #[test_case('中', BidiClass::L; "cjk unified ideograph-4e2d")]
    #[test_case('א', BidiClass::R; "hebrew letter alef")]
    #[test_case('م', BidiClass::AL; "arabic letter meem")]
    #[test_case('5', BidiClass::EN; "digit five")]
    #[test_case('+', BidiClass::ES; "plus sign")]
    #[test_case('-', BidiClass::ES; "hyphen-minus")]
    #[test_case('$', BidiClass::ET; "dollar sign")]
    #[test_case('%', BidiClass::ET; "percent sign")]
    #[test_case('\u{0661}', BidiClass::AN; "arabic-indic digit one")]
    #[test_case(',', BidiClass::CS; "comma")]
    #[test_case(':', BidiClass::CS; "colon")]
    #[test_case('\u{0301}', BidiClass::NSM; "combining acute accent")]
    #[test_case('\u{200B}', BidiClass::BN; "zero width space")]
    #[test_case('\u{0000}', BidiClass::BN; "null")]
    #[test_case('\n', BidiClass::B; "line feed")]
    #[test_case('\u{2029}', BidiClass::B; "paragraph separator")]
    #[test_case('\t', BidiClass::S; "tab")]
    #[test_case(' ', BidiClass::WS; "space")]
    #[test_case('!', BidiClass::ON; "exclamation mark")]
    #[test_case('(', BidiClass::ON; "left parenthesis")]
    #[test_case('\u{202A}', BidiClass::LRE; "left-to-right embedding")]
    #[test_case('\u{202B}', BidiClass::RLE; "right-to-left embedding")]
    #[test_case('\u{202C}', BidiClass::PDF; "pop directional formatting")]
    #[test_case('\u{202D}', BidiClass::LRO; "left-to-right override")]
    #[test_case('\u{202E}', BidiClass::RLO; "right-to-left override")]
    #[test_case('\u{2066}', BidiClass::LRI; "left-to-right isolate")]
    #[test_case('\u{2067}', BidiClass::RLI; "right-to-left isolate")]
    #[test_case('\u{2068}', BidiClass::FSI; "first strong isolate")]
    #[test_case('\u{2069}', BidiClass::PDI; "pop directional isolate")]
    #[test_case('\u{200E}', BidiClass::L; "left-to-right mark")]
    #[test_case('\u{200F}', BidiClass::R; "right-to-left mark")]
    #[test_case('\u{061C}', BidiClass::AL; "arabic letter mark is AL")]
    #[test_case('\u{0710}', BidiClass::AL; "syriac")]
    #[test_case('\u{07C0}', BidiClass::R; "nko digit")]
    #[test_case('\u{05FF}', BidiClass::R; "unassigned in hebrew block")]
    #[test_case('\u{10FFFF}', BidiClass::BN; "noncharacter")]
    #[test_case('\u{0ECE}', BidiClass::NSM; "lao yamakkan")]
    #[test_case('\u{1CCF0}', BidiClass::EN; "outlined digit zero")]
    #[test_case('\u{0897}', BidiClass::NSM; "arabic pepet")]
    #[test_case('\u{10D40}', BidiClass::AN; "garay digit zero")]
    #[test_case('\u{086B}', BidiClass::AL; "unassigned in syriac supplement")]
    #[test_case('\u{1EC70}', BidiClass::AL; "unassigned in indic siyaq numbers")]
    #[test_case('\u{10D28}', BidiClass::AL; "unassigned in hanifi rohingya")]
    fn test_bidi_class(ch: char, expected: BidiClass) {
        assert_eq2!(bidi_class(ch), expected);
    }

    #[test]
    fn test_mirroring() {
        assert!(is_bidi_mirrored('('));
        assert!(is_bidi_mirrored(']'));
        assert!(is_bidi_mirrored('<'));
        assert!(is_bidi_mirrored('\u{221A}'));
        assert!(!is_bidi_mirrored('a'));
        assert!(!is_bidi_mirrored('-'));

        assert_eq2!(mirrored_glyph('('), Some(')'));
        assert_eq2!(mirrored_glyph(')'), Some('('));
        assert_eq2!(mirrored_glyph('<'), Some('>'));
        assert_eq2!(mirrored_glyph('«'), Some('»'));
        assert_eq2!(mirrored_glyph('a'), None);
        // Mirrored, but without a mirror image character.
        assert_eq2!(mirrored_glyph('\u{221A}'), None);
    }

    #[test]
    fn test_bracket_type() {
        assert_eq2!(bracket_type('('), BracketType::Open('('));
        assert_eq2!(bracket_type(')'), BracketType::Close('('));
        assert_eq2!(bracket_type('}'), BracketType::Close('{'));
        assert_eq2!(bracket_type('<'), BracketType::None);
        assert_eq2!(bracket_type('a'), BracketType::None);

        // Canonical equivalents pair with each other.
        assert_eq2!(bracket_type('\u{2329}'), BracketType::Open('\u{3008}'));
        assert_eq2!(bracket_type('\u{3009}'), BracketType::Close('\u{3008}'));
        assert_eq2!(bracket_type('\u{232A}'), BracketType::Close('\u{3008}'));
    }

    #[test]
    fn test_every_bracket_is_mirrored_other_neutral() {
        for &(open, close) in BRACKET_PAIRS {
            for ch in [open, close] {
                assert_eq2!(bidi_class(ch), BidiClass::ON);
                assert!(is_bidi_mirrored(ch));
            }
        }
    }

    #[test]
    fn test_tables_are_sorted() {
        assert!(BIDI_CLASS_RANGES.windows(2).all(|w| w[0].1 < w[1].0));
        assert!(BIDI_CLASS_RANGES.iter().all(|&(start, end, _)| start <= end));
        assert!(BIDI_MIRRORED_RANGES.windows(2).all(|w| w[0].1 < w[1].0));
        assert!(MIRRORING_GLYPHS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(BRACKET_PAIRS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_whole_line_lookups() {
        let codepoints: Vec<char> = "a(ב)".chars().collect();
        assert_eq2!(
            bidi_classes_of(&codepoints).unwrap(),
            vec![BidiClass::L, BidiClass::ON, BidiClass::R, BidiClass::ON]
        );
        assert_eq2!(
            bracket_types_of(&codepoints).unwrap(),
            vec![
                BracketType::None,
                BracketType::Open('('),
                BracketType::None,
                BracketType::Close('(')
            ]
        );
    }
}
