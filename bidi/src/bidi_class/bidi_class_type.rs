// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words neutrals

/// The `Bidi_Class` property of a codepoint, using the short names from UAX #9 table 4.
/// These short names are what every rule in the algorithm is written in terms of, so
/// they are kept as is.
#[allow(clippy::upper_case_acronyms)]
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
pub enum BidiClass {
    // Strong.
    /// Left-to-right.
    L,
    /// Right-to-left.
    R,
    /// Right-to-left Arabic.
    AL,

    // Weak.
    /// European number.
    EN,
    /// European number separator.
    ES,
    /// European number terminator.
    ET,
    /// Arabic number.
    AN,
    /// Common number separator.
    CS,
    /// Nonspacing mark.
    NSM,
    /// Boundary neutral.
    BN,

    // Neutral.
    /// Paragraph separator.
    B,
    /// Segment separator.
    S,
    /// Whitespace.
    WS,
    /// Other neutrals.
    ON,

    // Explicit formatting.
    /// Left-to-right embedding.
    LRE,
    /// Left-to-right override.
    LRO,
    /// Right-to-left embedding.
    RLE,
    /// Right-to-left override.
    RLO,
    /// Pop directional format.
    PDF,
    /// Left-to-right isolate.
    LRI,
    /// Right-to-left isolate.
    RLI,
    /// First strong isolate.
    FSI,
    /// Pop directional isolate.
    PDI,
}

/// Result of asking whether a [`BidiClass`] is strong, used for the "first strong
/// character" scans (P2, P3, FSI) and for the default direction heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum StrongDirection {
    Ltr,
    Rtl,
    Neither,
}

impl StrongDirection {
    #[must_use]
    pub fn is_rtl(self) -> bool { matches!(self, StrongDirection::Rtl) }
}

impl BidiClass {
    /// `L` is LTR, `R` and `AL` are RTL, everything else is neither.
    #[must_use]
    pub fn strong_direction(self) -> StrongDirection {
        match self {
            BidiClass::L => StrongDirection::Ltr,
            BidiClass::R | BidiClass::AL => StrongDirection::Rtl,
            _ => StrongDirection::Neither,
        }
    }

    #[must_use]
    pub fn is_strong(self) -> bool {
        !matches!(self.strong_direction(), StrongDirection::Neither)
    }

    /// Characters that rule X9 removes from the rest of the algorithm.
    #[must_use]
    pub fn is_removed_by_x9(self) -> bool {
        matches!(
            self,
            BidiClass::RLE
                | BidiClass::LRE
                | BidiClass::RLO
                | BidiClass::LRO
                | BidiClass::PDF
                | BidiClass::BN
        )
    }

    /// `LRI`, `RLI` and `FSI`.
    #[must_use]
    pub fn is_isolate_initiator(self) -> bool {
        matches!(self, BidiClass::LRI | BidiClass::RLI | BidiClass::FSI)
    }

    /// Isolate initiators and `PDI`.
    #[must_use]
    pub fn is_isolate_control(self) -> bool {
        self.is_isolate_initiator() || matches!(self, BidiClass::PDI)
    }

    /// Any explicit embedding, override or isolate formatting character.
    #[must_use]
    pub fn is_explicit_format(self) -> bool {
        matches!(
            self,
            BidiClass::RLE
                | BidiClass::LRE
                | BidiClass::RLO
                | BidiClass::LRO
                | BidiClass::PDF
        ) || self.is_isolate_control()
    }

    /// The `NI` group of rules N1 and N2: neutrals and isolate formatting characters.
    #[must_use]
    pub fn is_neutral_or_isolate(self) -> bool {
        matches!(self, BidiClass::B | BidiClass::S | BidiClass::WS | BidiClass::ON)
            || self.is_isolate_control()
    }
}

/// The `Bidi_Paired_Bracket_Type` of a codepoint. Both variants carry the canonical
/// *opening* bracket of the pair, so an opening and a closing bracket match exactly when
/// their ids are equal. Canonical equivalents (U+2329 and U+3008, U+232A and U+3009)
/// share one id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BracketType {
    #[default]
    None,
    Open(char),
    Close(char),
}
