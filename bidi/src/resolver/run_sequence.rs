// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words sos eos

//! Rules X9 and X10 (with BD9 and BD13): drop the removed characters and group the
//! rest into isolating run sequences, the unit the weak, neutral and implicit rules run
//! on.

use std::ops::Range;

use smallvec::SmallVec;

use crate::{BidiClass, BidiResult, InlineVec, Level, try_vec_filled, try_vec_with_capacity};

/// A sequence of level runs, all at the same level, joined across isolates: a run that
/// ends with an isolate initiator continues with the run that starts with its matching
/// `PDI`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolatingRunSequence {
    /// Text indices in logical order. Characters removed by X9 are not listed.
    pub indices: Vec<usize>,
    pub level: Level,
    /// Start of sequence type, `L` or `R`.
    pub sos: BidiClass,
    /// End of sequence type, `L` or `R`.
    pub eos: BidiClass,
}

impl IsolatingRunSequence {
    /// Embedding direction of the sequence, `L` or `R`.
    #[must_use]
    pub fn embedding_direction(&self) -> BidiClass { self.level.direction_class() }
}

/// BD9: for each isolate initiator, the index of its matching `PDI`, if any. Matching is
/// purely textual and ends at a paragraph separator.
fn matching_pdis(original: &[BidiClass]) -> BidiResult<Vec<Option<usize>>> {
    let mut matches = try_vec_filled("matching pdi", None, original.len())?;
    let mut open_isolates: InlineVec<usize> = SmallVec::new();
    for (index, &class) in original.iter().enumerate() {
        match class {
            BidiClass::LRI | BidiClass::RLI | BidiClass::FSI => open_isolates.push(index),
            BidiClass::PDI => {
                if let Some(initiator) = open_isolates.pop() {
                    matches[initiator] = Some(index);
                }
            }
            BidiClass::B => open_isolates.clear(),
            _ => {}
        }
    }
    Ok(matches)
}

/// Builds the isolating run sequences of a paragraph, in the order their first
/// character appears in the text.
///
/// - `original` are the classes before any rule ran (used for X9 and BD9).
/// - `levels` are the levels assigned by the explicit rules.
pub fn isolating_run_sequences(
    original: &[BidiClass],
    levels: &[Level],
    paragraph_level: Level,
) -> BidiResult<Vec<IsolatingRunSequence>> {
    // X9.
    let kept_count = original.iter().filter(|it| !it.is_removed_by_x9()).count();
    let mut kept = try_vec_with_capacity("kept indices", kept_count)?;
    kept.extend(
        original
            .iter()
            .enumerate()
            .filter(|(_, class)| !class.is_removed_by_x9())
            .map(|(index, _)| index),
    );

    // BD7: level runs, as ranges into `kept`.
    let mut runs: Vec<Range<usize>> = vec![];
    let mut run_start = 0;
    for pos in 1..=kept.len() {
        if pos == kept.len() || levels[kept[pos]] != levels[kept[pos - 1]] {
            runs.push(run_start..pos);
            run_start = pos;
        }
    }

    // Which run (if any) starts at a given text index.
    let mut run_starting_at = try_vec_filled("run starts", None, original.len())?;
    for (run_id, run) in runs.iter().enumerate() {
        run_starting_at[kept[run.start]] = Some(run_id);
    }

    let matching_pdi = matching_pdis(original)?;
    let mut consumed = try_vec_filled("consumed runs", false, runs.len())?;
    let mut sequences = vec![];

    // BD13.
    for first_run in 0..runs.len() {
        if consumed[first_run] {
            continue;
        }
        consumed[first_run] = true;

        let mut indices = try_vec_with_capacity("sequence", runs[first_run].len())?;
        indices.extend_from_slice(&kept[runs[first_run].clone()]);

        let mut last_run = first_run;
        loop {
            let last_index = kept[runs[last_run].end - 1];
            if !original[last_index].is_isolate_initiator() {
                break;
            }
            let next_run = matching_pdi[last_index]
                .and_then(|pdi| run_starting_at[pdi])
                .filter(|&run_id| !consumed[run_id]);
            let Some(next_run) = next_run else { break };
            consumed[next_run] = true;
            indices.extend_from_slice(&kept[runs[next_run].clone()]);
            last_run = next_run;
        }

        // X10: sos and eos.
        let level = levels[kept[runs[first_run].start]];
        let level_before = match runs[first_run].start {
            0 => paragraph_level,
            pos => levels[kept[pos - 1]],
        };
        let last_index = kept[runs[last_run].end - 1];
        let level_after = if original[last_index].is_isolate_initiator()
            && matching_pdi[last_index].is_none()
        {
            paragraph_level
        } else {
            kept.get(runs[last_run].end)
                .map_or(paragraph_level, |&next| levels[next])
        };

        sequences.push(IsolatingRunSequence {
            indices,
            level,
            sos: level.max(level_before).direction_class(),
            eos: level.max(level_after).direction_class(),
        });
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, level};

    fn levels(values: &[u8]) -> Vec<Level> { values.iter().map(|&it| level(it)).collect() }

    #[test]
    fn test_level_runs_become_sequences() {
        use BidiClass::{L, R};

        let original = [L, L, R, R, L];
        let sequences =
            isolating_run_sequences(&original, &levels(&[0, 0, 1, 1, 0]), Level::LTR)
                .unwrap();
        assert_eq2!(sequences.len(), 3);
        assert_eq2!(sequences[0].indices, vec![0, 1]);
        assert_eq2!(sequences[1].indices, vec![2, 3]);
        assert_eq2!(sequences[2].indices, vec![4]);

        // L run at level 0 next to a level 1 run: the higher level decides.
        assert_eq2!((sequences[0].sos, sequences[0].eos), (L, R));
        assert_eq2!((sequences[1].sos, sequences[1].eos), (R, R));
        assert_eq2!((sequences[2].sos, sequences[2].eos), (R, L));
    }

    #[test]
    fn test_isolate_joins_runs() {
        use BidiClass::{L, PDI, R, RLI};

        // L RLI R PDI L: the outer text is one sequence, the isolate content another.
        let original = [L, RLI, R, PDI, L];
        let sequences =
            isolating_run_sequences(&original, &levels(&[0, 0, 1, 0, 0]), Level::LTR)
                .unwrap();
        assert_eq2!(sequences.len(), 2);
        assert_eq2!(sequences[0].indices, vec![0, 1, 3, 4]);
        assert_eq2!(sequences[0].level, Level::LTR);
        assert_eq2!(sequences[1].indices, vec![2]);
        assert_eq2!((sequences[1].sos, sequences[1].eos), (R, R));
    }

    #[test]
    fn test_removed_characters_are_skipped() {
        use BidiClass::{BN, L, PDF, R, RLE};

        // L RLE R PDF BN L.
        let original = [L, RLE, R, PDF, BN, L];
        let sequences = isolating_run_sequences(
            &original,
            &levels(&[0, 0, 1, 1, 0, 0]),
            Level::LTR,
        )
        .unwrap();
        let all: Vec<Vec<usize>> = sequences.iter().map(|it| it.indices.clone()).collect();
        assert_eq2!(all, vec![vec![0], vec![2], vec![5]]);
    }

    #[test]
    fn test_unmatched_isolate_initiator_uses_paragraph_level_for_eos() {
        use BidiClass::{LRI, R};

        // R LRI at paragraph level 1, with the isolate never closed.
        let original = [R, LRI];
        let sequences =
            isolating_run_sequences(&original, &levels(&[1, 1]), Level::RTL).unwrap();
        assert_eq2!(sequences.len(), 1);
        assert_eq2!((sequences[0].sos, sequences[0].eos), (R, R));
    }

    #[test]
    fn test_empty() {
        let sequences = isolating_run_sequences(&[], &[], Level::LTR).unwrap();
        assert!(sequences.is_empty());
    }
}
