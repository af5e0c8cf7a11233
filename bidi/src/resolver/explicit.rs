// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rules X1 to X8: explicit embeddings, overrides and isolates.

use smallvec::SmallVec;

use super::paragraph::{ScanEnd, first_strong_direction};
use crate::{BidiClass, BidiResult, Level, MAX_DEPTH, StatusStackVec, try_vec_filled,
            try_vec_with_capacity};

/// Levels and classes after the explicit rules. `classes` is the input with directional
/// overrides applied, the rule passes that follow keep rewriting it in place.
#[derive(Debug)]
pub struct ExplicitResult {
    pub levels: Vec<Level>,
    pub classes: Vec<BidiClass>,
}

/// One entry of the directional status stack.
#[derive(Debug, Clone, Copy)]
struct DirectionalStatus {
    level: Level,
    /// `Some(L)` or `Some(R)` while an override is active.
    override_class: Option<BidiClass>,
    isolate: bool,
}

/// Runs X1 to X8 over `original`. Every character gets the level of the top of the
/// stack when it is reached. Characters that X9 removes get a level here too, it is
/// replaced once the rest of the rules have run.
///
/// Overflow (an embedding or isolate that would go deeper than [`MAX_DEPTH`]) is
/// counted and never pushed, so the matching `PDF` or `PDI` is consumed by the counter
/// instead of popping a valid entry.
#[allow(clippy::too_many_lines)]
pub fn resolve_explicit(
    original: &[BidiClass],
    paragraph_level: Level,
) -> BidiResult<ExplicitResult> {
    let mut levels = try_vec_filled("levels", paragraph_level, original.len())?;
    let mut classes = try_vec_with_capacity("classes", original.len())?;
    classes.extend_from_slice(original);

    // X1.
    let initial = DirectionalStatus {
        level: paragraph_level,
        override_class: None,
        isolate: false,
    };
    let mut stack: StatusStackVec<DirectionalStatus> = SmallVec::new();
    stack.push(initial);
    let top = |stack: &StatusStackVec<DirectionalStatus>| -> DirectionalStatus {
        stack.last().copied().unwrap_or(initial)
    };

    let mut overflow_isolate_count = 0_usize;
    let mut overflow_embedding_count = 0_usize;
    let mut valid_isolate_count = 0_usize;

    for (index, &class) in original.iter().enumerate() {
        let current = top(&stack);
        match class {
            // X2 to X5.
            BidiClass::RLE | BidiClass::LRE | BidiClass::RLO | BidiClass::LRO => {
                levels[index] = current.level;
                let new_level = if matches!(class, BidiClass::RLE | BidiClass::RLO) {
                    current.level.least_greater_odd()
                } else {
                    current.level.least_greater_even()
                };
                if new_level.value() <= MAX_DEPTH
                    && overflow_isolate_count == 0
                    && overflow_embedding_count == 0
                {
                    let override_class = match class {
                        BidiClass::RLO => Some(BidiClass::R),
                        BidiClass::LRO => Some(BidiClass::L),
                        _ => None,
                    };
                    stack.push(DirectionalStatus {
                        level: new_level,
                        override_class,
                        isolate: false,
                    });
                } else if overflow_isolate_count == 0 {
                    overflow_embedding_count += 1;
                }
            }

            // X5a to X5c.
            BidiClass::RLI | BidiClass::LRI | BidiClass::FSI => {
                levels[index] = current.level;
                if let Some(override_class) = current.override_class {
                    classes[index] = override_class;
                }
                let is_rtl = match class {
                    BidiClass::RLI => true,
                    BidiClass::FSI => first_strong_direction(
                        original[index + 1..].iter().copied(),
                        ScanEnd::MatchingPdi,
                    )
                    .is_rtl(),
                    _ => false,
                };
                let new_level = if is_rtl {
                    current.level.least_greater_odd()
                } else {
                    current.level.least_greater_even()
                };
                if new_level.value() <= MAX_DEPTH
                    && overflow_isolate_count == 0
                    && overflow_embedding_count == 0
                {
                    valid_isolate_count += 1;
                    stack.push(DirectionalStatus {
                        level: new_level,
                        override_class: None,
                        isolate: true,
                    });
                } else {
                    overflow_isolate_count += 1;
                }
            }

            // X6a.
            BidiClass::PDI => {
                if overflow_isolate_count > 0 {
                    overflow_isolate_count -= 1;
                } else if valid_isolate_count > 0 {
                    overflow_embedding_count = 0;
                    while stack.len() > 1 && stack.last().is_some_and(|it| !it.isolate) {
                        stack.pop();
                    }
                    if stack.len() > 1 {
                        stack.pop();
                    }
                    valid_isolate_count -= 1;
                }
                let after_pop = top(&stack);
                levels[index] = after_pop.level;
                if let Some(override_class) = after_pop.override_class {
                    classes[index] = override_class;
                }
            }

            // X7.
            BidiClass::PDF => {
                levels[index] = current.level;
                if overflow_isolate_count > 0 {
                    // Inside an overflowed isolate, nothing to pop.
                } else if overflow_embedding_count > 0 {
                    overflow_embedding_count -= 1;
                } else if !current.isolate && stack.len() >= 2 {
                    stack.pop();
                }
            }

            // X8. A paragraph separator inside the line terminates everything.
            BidiClass::B => {
                levels[index] = paragraph_level;
                stack.truncate(1);
                overflow_isolate_count = 0;
                overflow_embedding_count = 0;
                valid_isolate_count = 0;
            }

            BidiClass::BN => levels[index] = current.level,

            // X6.
            _ => {
                levels[index] = current.level;
                if let Some(override_class) = current.override_class {
                    classes[index] = override_class;
                }
            }
        }
    }

    Ok(ExplicitResult { levels, classes })
}
