// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, AddAssign}};

use crate::{BidiClass, StrongDirection};

/// Deepest embedding level the explicit rules (X1 to X8) will push. The implicit rules
/// can raise a character by at most 2 more, so a resolved level is at most
/// [`MAX_RESOLVED_LEVEL`].
pub const MAX_DEPTH: u8 = 125;

/// Upper bound for any level in an [`AnalysisResult`].
///
/// [`AnalysisResult`]: crate::AnalysisResult
pub const MAX_RESOLVED_LEVEL: u8 = MAX_DEPTH + 1;

/// An embedding level. Levels are a nesting depth, not a position: even levels are a
/// left-to-right context, odd levels a right-to-left one.
///
/// Levels can be created using [`Level::new`], the [`level`] function, or by converting
/// from a [u8].
///
/// ```
/// use r3bl_bidi::{Level, level};
///
/// let outer = level(0);
/// assert!(outer.is_ltr());
/// assert_eq!(outer.least_greater_odd(), Level::new(1));
/// assert_eq!(level(1).least_greater_odd(), level(3));
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Level(pub u8);

/// Creates a new [Level], equivalent to calling [`Level::new`].
#[must_use]
pub fn level(arg_level: impl Into<Level>) -> Level { arg_level.into() }

impl Debug for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level({:?})", self.0)
    }
}

mod construct {
    use super::{BidiClass, Level, StrongDirection};

    impl Level {
        /// Paragraph level of a left-to-right paragraph.
        pub const LTR: Level = Level(0);
        /// Paragraph level of a right-to-left paragraph.
        pub const RTL: Level = Level(1);

        #[must_use]
        pub fn new(arg_level: impl Into<Level>) -> Self { arg_level.into() }

        #[must_use]
        pub fn value(&self) -> u8 { self.0 }

        #[must_use]
        pub fn as_usize(&self) -> usize { usize::from(self.0) }

        #[must_use]
        pub fn is_rtl(&self) -> bool { self.0 % 2 == 1 }

        #[must_use]
        pub fn is_ltr(&self) -> bool { !self.is_rtl() }

        /// Smallest odd level greater than this one, eg: 0 to 1, and 1 to 3.
        #[must_use]
        pub fn least_greater_odd(&self) -> Level {
            if self.is_rtl() {
                Level(self.0.saturating_add(2))
            } else {
                Level(self.0.saturating_add(1))
            }
        }

        /// Smallest even level greater than this one, eg: 0 to 2, and 1 to 2.
        #[must_use]
        pub fn least_greater_even(&self) -> Level {
            if self.is_rtl() {
                Level(self.0.saturating_add(1))
            } else {
                Level(self.0.saturating_add(2))
            }
        }

        /// Strong type matching the direction of this level. This is the embedding
        /// direction of rules N0 to N2, and the `sos` / `eos` type of rule X10.
        #[must_use]
        pub fn direction_class(&self) -> BidiClass {
            if self.is_rtl() { BidiClass::R } else { BidiClass::L }
        }

        #[must_use]
        pub fn direction(&self) -> StrongDirection {
            if self.is_rtl() {
                StrongDirection::Rtl
            } else {
                StrongDirection::Ltr
            }
        }
    }

    impl From<u8> for Level {
        fn from(val: u8) -> Self { Level(val) }
    }

    impl From<Level> for u8 {
        fn from(arg: Level) -> Self { arg.0 }
    }
}

mod ops {
    use super::{Add, AddAssign, Level};

    impl Add<u8> for Level {
        type Output = Level;

        fn add(self, rhs: u8) -> Self::Output { Level(self.0.saturating_add(rhs)) }
    }

    impl AddAssign<u8> for Level {
        fn add_assign(&mut self, rhs: u8) { self.0 = self.0.saturating_add(rhs); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_parity() {
        assert!(Level::LTR.is_ltr());
        assert!(Level::RTL.is_rtl());
        assert!(level(2).is_ltr());
        assert!(level(MAX_DEPTH).is_rtl());
    }

    #[test]
    fn test_least_greater() {
        assert_eq2!(level(0).least_greater_odd(), level(1));
        assert_eq2!(level(1).least_greater_odd(), level(3));
        assert_eq2!(level(0).least_greater_even(), level(2));
        assert_eq2!(level(1).least_greater_even(), level(2));
        assert_eq2!(level(124).least_greater_odd(), level(125));
    }

    #[test]
    fn test_direction() {
        assert_eq2!(level(4).direction_class(), BidiClass::L);
        assert_eq2!(level(5).direction_class(), BidiClass::R);
        assert_eq2!(level(5).direction(), StrongDirection::Rtl);
    }

    #[test]
    fn test_ops_and_debug() {
        let mut it = level(1);
        it += 1;
        assert_eq2!(it, level(2));
        assert_eq2!(it + 2, level(4));
        assert_eq2!(format!("{it:?}"), "Level(2)");
        assert_eq2!(u8::from(it), 2);
    }
}
