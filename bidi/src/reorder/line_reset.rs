// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BidiClass, BidiResult, Level, try_vec_with_capacity};

/// Rule L1 on a copy of `levels`. These go back to the paragraph level:
/// 1. Segment separators (tab) and paragraph separators.
/// 2. Any run of whitespace and isolate formatting characters right before one of
///    those, or at the end of the line. Characters removed by X9 inside such a run are
///    reset too.
///
/// `classes` must be the *original* bidi classes, not the resolved ones.
///
/// # Errors
///
/// Returns [`BidiError::ResourceExhaustion`] if the buffer can't be reserved.
///
/// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
pub fn line_levels(
    levels: &[Level],
    classes: &[BidiClass],
    paragraph_level: Level,
) -> BidiResult<Vec<Level>> {
    let mut acc = try_vec_with_capacity("line levels", levels.len())?;
    acc.extend_from_slice(levels);

    // Walk backwards, `in_trailing_run` is true while everything seen since the last
    // separator (or the end of the line) could be reset.
    let mut in_trailing_run = true;
    for (level, &class) in acc.iter_mut().zip(classes).rev() {
        match class {
            BidiClass::S | BidiClass::B => {
                *level = paragraph_level;
                in_trailing_run = true;
            }
            _ if in_trailing_run
                && (class == BidiClass::WS
                    || class.is_isolate_control()
                    || class.is_removed_by_x9()) =>
            {
                *level = paragraph_level;
            }
            _ => in_trailing_run = false,
        }
    }

    Ok(acc)
}
