// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words devanagari hiragana katakana hangul

//! Coarse script classification by codepoint range. This only feeds the fast path gate
//! and default direction hints. It must never be used to decide the actual reordering,
//! that is what [`crate::bidi_class()`] and the rule engine are for.

#![allow(clippy::unreadable_literal)]

/// Script category of a codepoint. Anything outside the ranges known here (punctuation,
/// digits, symbols, and scripts this crate has no special handling for) is
/// [`Script::Common`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::AsRefStr,
    strum_macros::Display,
)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Script {
    Latin,
    Greek,
    Cyrillic,
    Armenian,
    Hebrew,
    Arabic,
    Devanagari,
    Thai,
    Hangul,
    Hiragana,
    Katakana,
    Han,
    Common,
}

impl Script {
    /// Scripts that need contextual shaping or non Latin directional handling.
    #[must_use]
    pub fn is_complex(self) -> bool {
        matches!(
            self,
            Script::Arabic | Script::Hebrew | Script::Devanagari | Script::Thai
        )
    }

    /// Scripts with an inherent right-to-left reading order.
    #[must_use]
    pub fn is_rtl(self) -> bool { matches!(self, Script::Arabic | Script::Hebrew) }
}

/// Sorted, non overlapping `(first, last, script)` ranges.
#[rustfmt::skip]
static SCRIPT_RANGES: &[(u32, u32, Script)] = &[
    (0x0041, 0x005A, Script::Latin),
    (0x0061, 0x007A, Script::Latin),
    (0x00AA, 0x00AA, Script::Latin),
    (0x00BA, 0x00BA, Script::Latin),
    (0x00C0, 0x00D6, Script::Latin),
    (0x00D8, 0x00F6, Script::Latin),
    (0x00F8, 0x02AF, Script::Latin),
    (0x0370, 0x0373, Script::Greek),
    (0x0375, 0x037D, Script::Greek),
    (0x037F, 0x03FF, Script::Greek),
    (0x0400, 0x052F, Script::Cyrillic),
    (0x0531, 0x058F, Script::Armenian),
    (0x0590, 0x05FF, Script::Hebrew),
    (0x0600, 0x06FF, Script::Arabic),
    (0x0750, 0x077F, Script::Arabic),
    (0x0870, 0x08FF, Script::Arabic),
    (0x0900, 0x097F, Script::Devanagari),
    (0x0E00, 0x0E7F, Script::Thai),
    (0x1100, 0x11FF, Script::Hangul),
    (0x1C80, 0x1C8F, Script::Cyrillic),
    (0x1D00, 0x1D25, Script::Latin),
    (0x1E00, 0x1EFF, Script::Latin),
    (0x1F00, 0x1FFF, Script::Greek),
    (0x2C60, 0x2C7F, Script::Latin),
    (0x2DE0, 0x2DFF, Script::Cyrillic),
    (0x2E80, 0x2FDF, Script::Han),
    (0x3005, 0x3005, Script::Han),
    (0x3007, 0x3007, Script::Han),
    (0x3021, 0x3029, Script::Han),
    (0x3038, 0x303B, Script::Han),
    (0x3041, 0x309F, Script::Hiragana),
    (0x30A1, 0x30FA, Script::Katakana),
    (0x30FD, 0x30FF, Script::Katakana),
    (0x3131, 0x318F, Script::Hangul),
    (0x31F0, 0x31FF, Script::Katakana),
    (0x3400, 0x4DBF, Script::Han),
    (0x4E00, 0x9FFF, Script::Han),
    (0xA640, 0xA69F, Script::Cyrillic),
    (0xA720, 0xA7FF, Script::Latin),
    (0xA8E0, 0xA8FF, Script::Devanagari),
    (0xA960, 0xA97F, Script::Hangul),
    (0xAB30, 0xAB64, Script::Latin),
    (0xAC00, 0xD7FF, Script::Hangul),
    (0xF900, 0xFAFF, Script::Han),
    (0xFB00, 0xFB06, Script::Latin),
    (0xFB13, 0xFB17, Script::Armenian),
    (0xFB1D, 0xFB4F, Script::Hebrew),
    (0xFB50, 0xFDFF, Script::Arabic),
    (0xFE70, 0xFEFF, Script::Arabic),
    (0xFF21, 0xFF3A, Script::Latin),
    (0xFF41, 0xFF5A, Script::Latin),
    (0xFF66, 0xFF6F, Script::Katakana),
    (0xFF71, 0xFF9D, Script::Katakana),
    (0xFFA0, 0xFFDC, Script::Hangul),
    (0x10E60, 0x10E7F, Script::Arabic),
    (0x1EE00, 0x1EEFF, Script::Arabic),
    (0x20000, 0x3134F, Script::Han),
];

/// Script of `ch`. Total: defaults to [`Script::Common`].
#[must_use]
pub fn classify(ch: char) -> Script {
    let cp = u32::from(ch);
    // ASCII is by far the most common input, answer it without the binary search.
    if cp < 0x80 {
        return if ch.is_ascii_alphabetic() {
            Script::Latin
        } else {
            Script::Common
        };
    }
    let pos = SCRIPT_RANGES.partition_point(|&(_, end, _)| end < cp);
    match SCRIPT_RANGES.get(pos) {
        Some(&(start, _, script)) if start <= cp => script,
        _ => Script::Common,
    }
}
