// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rules N0 to N2: paired brackets first, then the remaining neutrals and isolate
//! formatting characters.

use smallvec::SmallVec;

use super::IsolatingRunSequence;
use crate::{BidiClass, BracketStackVec, BracketType, InlineVec, MAX_BRACKET_STACK_DEPTH};

/// How N0 to N2 see a resolved type: numbers count as `R`. `None` for neutrals.
fn strong_for_neutrals(class: BidiClass) -> Option<BidiClass> {
    match class {
        BidiClass::L => Some(BidiClass::L),
        BidiClass::R | BidiClass::AL | BidiClass::EN | BidiClass::AN => Some(BidiClass::R),
        _ => None,
    }
}

/// BD16: bracket pairs of the sequence as `(open, close)` positions into
/// `sequence.indices`, sorted by the opening position. Only characters whose current
/// class is still `ON` take part, so overridden brackets never pair.
fn bracket_pairs(
    sequence: &IsolatingRunSequence,
    brackets: &[BracketType],
    classes: &[BidiClass],
) -> InlineVec<(usize, usize)> {
    let mut stack: BracketStackVec<(char, usize)> = SmallVec::new();
    let mut pairs: InlineVec<(usize, usize)> = SmallVec::new();

    for (pos, &index) in sequence.indices.iter().enumerate() {
        if classes[index] != BidiClass::ON {
            continue;
        }
        match brackets.get(index).copied().unwrap_or_default() {
            BracketType::Open(id) => {
                if stack.len() >= MAX_BRACKET_STACK_DEPTH {
                    break;
                }
                stack.push((id, pos));
            }
            BracketType::Close(id) => {
                if let Some(depth) = stack.iter().rposition(|&(open_id, _)| open_id == id) {
                    pairs.push((stack[depth].1, pos));
                    stack.truncate(depth);
                }
            }
            BracketType::None => {}
        }
    }

    pairs.sort_unstable();
    pairs
}

/// N0.
pub fn resolve_paired_brackets(
    sequence: &IsolatingRunSequence,
    original: &[BidiClass],
    brackets: &[BracketType],
    classes: &mut [BidiClass],
) {
    let indices = &sequence.indices;
    let embedding = sequence.embedding_direction();

    for (open, close) in bracket_pairs(sequence, brackets, classes) {
        // N0 b and c: look for strong types inside the pair.
        let mut found_embedding = false;
        let mut found_opposite = false;
        for &index in &indices[open + 1..close] {
            match strong_for_neutrals(classes[index]) {
                Some(strong) if strong == embedding => {
                    found_embedding = true;
                    break;
                }
                Some(_) => found_opposite = true,
                None => {}
            }
        }

        let resolved = if found_embedding {
            embedding
        } else if found_opposite {
            // N0 c: the context before the opening bracket decides. It is either the
            // opposite direction (c.1) or the embedding direction (c.2).
            indices[..open]
                .iter()
                .rev()
                .find_map(|&index| strong_for_neutrals(classes[index]))
                .unwrap_or(sequence.sos)
        } else {
            // N0 d: nothing strong inside, leave the pair to N1 and N2.
            continue;
        };

        for bracket_pos in [open, close] {
            classes[indices[bracket_pos]] = resolved;
            // Marks that followed the bracket (ON after W1) take the bracket's type.
            for &index in &indices[bracket_pos + 1..] {
                if original[index] != BidiClass::NSM {
                    break;
                }
                classes[index] = resolved;
            }
        }
    }
}

/// N1 and N2.
pub fn resolve_neutral_types(sequence: &IsolatingRunSequence, classes: &mut [BidiClass]) {
    let indices = &sequence.indices;
    let embedding = sequence.embedding_direction();

    let mut pos = 0;
    while pos < indices.len() {
        if !classes[indices[pos]].is_neutral_or_isolate() {
            pos += 1;
            continue;
        }
        let start = pos;
        while pos < indices.len() && classes[indices[pos]].is_neutral_or_isolate() {
            pos += 1;
        }

        let leading = match start {
            0 => Some(sequence.sos),
            _ => strong_for_neutrals(classes[indices[start - 1]]),
        };
        let trailing = match indices.get(pos) {
            None => Some(sequence.eos),
            Some(&index) => strong_for_neutrals(classes[index]),
        };
        let resolved = match (leading, trailing) {
            (Some(leading), Some(trailing)) if leading == trailing => leading,
            _ => embedding,
        };
        for &index in &indices[start..pos] {
            classes[index] = resolved;
        }
    }
}
