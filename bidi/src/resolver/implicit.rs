// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rules I1 and I2, plus the level given to characters removed by X9.

use super::IsolatingRunSequence;
use crate::{BidiClass, Level};

/// I1 and I2. At an even level `R` goes up one and numbers go up two. At an odd level
/// `L` and numbers go up one.
pub fn resolve_implicit_levels(
    sequence: &IsolatingRunSequence,
    classes: &[BidiClass],
    levels: &mut [Level],
) {
    for &index in &sequence.indices {
        let level = &mut levels[index];
        match (level.is_ltr(), classes[index]) {
            (true, BidiClass::R) | (false, BidiClass::L | BidiClass::EN | BidiClass::AN) => {
                *level += 1;
            }
            (true, BidiClass::AN | BidiClass::EN) => *level += 2,
            _ => {}
        }
    }
}

/// Characters removed by X9 take the level of the character before them, or the
/// paragraph level at the start of the line. This keeps them in place in the visual
/// order, next to the text they were typed with.
pub fn assign_removed_levels(
    original: &[BidiClass],
    levels: &mut [Level],
    paragraph_level: Level,
) {
    let mut previous = paragraph_level;
    for (class, level) in original.iter().zip(levels.iter_mut()) {
        if class.is_removed_by_x9() {
            *level = previous;
        }
        previous = *level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, level};

    use BidiClass::{AN, BN, EN, L, ON, PDF, R, RLE};

    #[test]
    fn test_implicit_levels() {
        let classes = [L, R, EN, AN, ON, L, R, EN, AN];
        let mut levels: Vec<Level> = [0, 0, 0, 0, 0, 1, 1, 1, 1]
            .iter()
            .map(|&it| level(it))
            .collect();
        let sequence = IsolatingRunSequence {
            indices: (0..classes.len()).collect(),
            level: Level::LTR,
            sos: L,
            eos: L,
        };
        resolve_implicit_levels(&sequence, &classes, &mut levels);
        let values: Vec<u8> = levels.iter().map(Level::value).collect();
        assert_eq2!(values, vec![0, 1, 2, 2, 0, 2, 1, 2, 2]);
    }

    #[test]
    fn test_removed_levels() {
        let original = [RLE, R, PDF, BN, L];
        let mut levels: Vec<Level> = [0, 1, 1, 0, 0].iter().map(|&it| level(it)).collect();
        assign_removed_levels(&original, &mut levels, Level::LTR);
        let values: Vec<u8> = levels.iter().map(Level::value).collect();
        assert_eq2!(values, vec![0, 1, 1, 1, 0]);
    }
}
