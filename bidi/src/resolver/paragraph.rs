// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! "First strong character" scans. Rules P2 and P3 use them to pick the paragraph
//! level, rule X5c uses them to resolve the direction of an `FSI`, and the default
//! direction heuristic uses them for text that never goes through full analysis.

use crate::{BidiClass, Level, StrongDirection, bidi_class};

/// Where a first strong scan stops when it finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEnd {
    /// Scan to the end of the paragraph (P2).
    EndOfParagraph,
    /// Stop at the `PDI` matching the isolate initiator just before the scanned text
    /// (X5c).
    MatchingPdi,
}

/// Direction of the first strong character in `classes`, skipping anything between an
/// isolate initiator and its matching `PDI` (or the end of the paragraph if it has none).
/// Stops at the first paragraph separator. Returns [`StrongDirection::Neither`] if no
/// strong character is found.
#[must_use]
pub fn first_strong_direction(
    classes: impl IntoIterator<Item = BidiClass>,
    scan_end: ScanEnd,
) -> StrongDirection {
    let mut isolate_depth = 0_usize;
    for class in classes {
        match class {
            BidiClass::B => break,
            BidiClass::LRI | BidiClass::RLI | BidiClass::FSI => isolate_depth += 1,
            BidiClass::PDI => {
                if isolate_depth > 0 {
                    isolate_depth -= 1;
                } else if scan_end == ScanEnd::MatchingPdi {
                    break;
                }
            }
            _ if isolate_depth == 0 && class.is_strong() => {
                return class.strong_direction();
            }
            _ => {}
        }
    }
    StrongDirection::Neither
}

/// Rules P2 and P3: level 1 if the first strong character is `R` or `AL`, otherwise 0.
#[must_use]
pub fn paragraph_level_of(classes: &[BidiClass]) -> Level {
    match first_strong_direction(classes.iter().copied(), ScanEnd::EndOfParagraph) {
        StrongDirection::Rtl => Level::RTL,
        StrongDirection::Ltr | StrongDirection::Neither => Level::LTR,
    }
}

/// Base direction of a line of codepoints using the P2 and P3 scan, without running the
/// rest of the algorithm. Never returns [`StrongDirection::Neither`]: a line with no
/// strong character is [`StrongDirection::Ltr`].
#[must_use]
pub fn paragraph_direction_of(codepoints: &[char]) -> StrongDirection {
    base_direction(codepoints.iter().map(|&ch| bidi_class(ch)))
}

/// Base direction of raw text, eg: a window title or a pasted string. Same rules as
/// [`paragraph_direction_of`].
///
/// ```
/// use r3bl_bidi::{StrongDirection, default_direction};
///
/// assert_eq!(default_direction("123 שלום"), StrongDirection::Rtl);
/// assert_eq!(default_direction("123"), StrongDirection::Ltr);
/// ```
#[must_use]
pub fn default_direction(text: &str) -> StrongDirection {
    base_direction(text.chars().map(bidi_class))
}

fn base_direction(classes: impl IntoIterator<Item = BidiClass>) -> StrongDirection {
    match first_strong_direction(classes, ScanEnd::EndOfParagraph) {
        StrongDirection::Rtl => StrongDirection::Rtl,
        StrongDirection::Ltr | StrongDirection::Neither => StrongDirection::Ltr,
    }
}
