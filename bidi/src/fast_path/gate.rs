// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::DEBUG_BIDI_FAST_PATH;
use crate::{BidiClass, FastPathPolicy, bidi_class, classify};

/// First codepoint of the Hebrew block. Nothing below it has an RTL, Arabic number or
/// explicit formatting bidi class, so the class lookup is skipped for it.
const FIRST_RTL_CODEPOINT: char = '\u{0590}';

/// The narrow gate: `true` on the first codepoint whose script is complex (see
/// [`Script::is_complex`]). When this returns `false` the logical order is the visual
/// order, and the line never needs the rule engine.
///
/// ```
/// use r3bl_bidi::needs_analysis;
///
/// let latin: Vec<char> = "Hello World!".chars().collect();
/// assert!(!needs_analysis(&latin));
///
/// let arabic: Vec<char> = "Hello مرحبا".chars().collect();
/// assert!(needs_analysis(&arabic));
/// ```
///
/// [`Script::is_complex`]: crate::Script::is_complex
#[must_use]
pub fn needs_analysis(codepoints: &[char]) -> bool {
    needs_analysis_with_policy(codepoints, FastPathPolicy::ScriptRanges)
}

/// Same single linear scan as [`needs_analysis`], with the trigger picked by `policy`.
/// [`FastPathPolicy::BidiTypes`] also triggers on RTL text outside the complex script
/// ranges (eg: Syriac) and on explicit embedding, override or isolate characters.
#[must_use]
pub fn needs_analysis_with_policy(codepoints: &[char], policy: FastPathPolicy) -> bool {
    let trigger = codepoints.iter().position(|&ch| match policy {
        FastPathPolicy::ScriptRanges => is_complex_script(ch),
        FastPathPolicy::BidiTypes => is_complex_script(ch) || has_rtl_bidi_class(ch),
    });

    DEBUG_BIDI_FAST_PATH.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "bidi fast path: decision",
            policy = %policy,
            len = %codepoints.len(),
            trigger = ?trigger,
        );
    });

    trigger.is_some()
}

fn is_complex_script(ch: char) -> bool { ch >= FIRST_RTL_CODEPOINT && classify(ch).is_complex() }

fn has_rtl_bidi_class(ch: char) -> bool {
    if ch < FIRST_RTL_CODEPOINT {
        return false;
    }
    let class = bidi_class(ch);
    matches!(class, BidiClass::R | BidiClass::AL | BidiClass::AN) || class.is_explicit_format()
}
