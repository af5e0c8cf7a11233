// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rules W1 to W7. Each rule is a separate pass over the sequence, since later rules
//! must see the output of the earlier ones. Characters removed by X9 are not part of
//! the sequence, which is how "ignore BN" falls out for free.

use super::IsolatingRunSequence;
use crate::BidiClass;

pub fn resolve_weak_types(sequence: &IsolatingRunSequence, classes: &mut [BidiClass]) {
    let indices = &sequence.indices;

    // W1. NSM takes the type of the previous character, or ON after an isolate control.
    let mut previous = sequence.sos;
    for &index in indices {
        if classes[index] == BidiClass::NSM {
            classes[index] = if previous.is_isolate_control() {
                BidiClass::ON
            } else {
                previous
            };
        }
        previous = classes[index];
    }

    // W2. EN after AL (looking back to the first strong type) becomes AN.
    let mut last_strong = sequence.sos;
    for &index in indices {
        match classes[index] {
            BidiClass::L | BidiClass::R | BidiClass::AL => last_strong = classes[index],
            BidiClass::EN if last_strong == BidiClass::AL => classes[index] = BidiClass::AN,
            _ => {}
        }
    }

    // W3.
    for &index in indices {
        if classes[index] == BidiClass::AL {
            classes[index] = BidiClass::R;
        }
    }

    // W4. A single ES between ENs, or a single CS between two numbers of the same type.
    for pos in 1..indices.len().saturating_sub(1) {
        let before = classes[indices[pos - 1]];
        let after = classes[indices[pos + 1]];
        let current = &mut classes[indices[pos]];
        match *current {
            BidiClass::ES if before == BidiClass::EN && after == BidiClass::EN => {
                *current = BidiClass::EN;
            }
            BidiClass::CS
                if before == after && matches!(before, BidiClass::EN | BidiClass::AN) =>
            {
                *current = before;
            }
            _ => {}
        }
    }

    // W5. A sequence of ETs next to an EN becomes EN.
    let mut pos = 0;
    while pos < indices.len() {
        if classes[indices[pos]] != BidiClass::ET {
            pos += 1;
            continue;
        }
        let start = pos;
        while pos < indices.len() && classes[indices[pos]] == BidiClass::ET {
            pos += 1;
        }
        let en_before = start > 0 && classes[indices[start - 1]] == BidiClass::EN;
        let en_after = pos < indices.len() && classes[indices[pos]] == BidiClass::EN;
        if en_before || en_after {
            for &index in &indices[start..pos] {
                classes[index] = BidiClass::EN;
            }
        }
    }

    // W6. Remaining separators and terminators become ON.
    for &index in indices {
        if matches!(classes[index], BidiClass::ES | BidiClass::ET | BidiClass::CS) {
            classes[index] = BidiClass::ON;
        }
    }

    // W7. EN after L (looking back to the first strong type) becomes L.
    let mut last_strong = sequence.sos;
    for &index in indices {
        match classes[index] {
            BidiClass::L | BidiClass::R => last_strong = classes[index],
            BidiClass::EN if last_strong == BidiClass::L => classes[index] = BidiClass::L,
            _ => {}
        }
    }
}
