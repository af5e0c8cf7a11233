// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Properties of the public contract that must hold for any line: the fast path, the
//! map being a permutation, round trips, idempotence, and mirroring.

use r3bl_bidi::{BidiConfig, FastPathPolicy, Level, ParagraphDirection, ReorderMap, analyze,
                analyze_line, assert_eq2, needs_analysis, reorder};
use rand::{Rng, SeedableRng, rngs::StdRng};
use test_case::test_case;

fn chars(text: &str) -> Vec<char> { text.chars().collect() }

/// Characters picked to hit every rule family: strong letters of both directions,
/// numbers of both kinds, separators, brackets, whitespace, marks, and every explicit
/// formatting character.
const ALPHABET: &[char] = &[
    'a', 'Z', 'é', 'ж', '日', 'א', 'ש', 'م', 'ر', '\u{0710}', '1', '9', '\u{0661}',
    '\u{06F5}', '+', '-', ',', '.', ':', '%', '$', '(', ')', '[', ']', '{', '}', '«', '»',
    '\u{2329}', '\u{3009}', ' ', '\t', '!', '"', '\u{0300}', '\u{064B}', '\u{200B}',
    '\u{202A}', '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}', '\u{2066}', '\u{2067}',
    '\u{2068}', '\u{2069}', '\u{2029}',
];

fn random_line(rng: &mut StdRng) -> Vec<char> {
    let len = rng.random_range(0..40);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

fn is_permutation(map: &[usize]) -> bool {
    let mut sorted = map.to_vec();
    sorted.sort_unstable();
    sorted.iter().enumerate().all(|(index, &it)| index == it)
}

#[test_case("Hello World!"; "latin")]
#[test_case("Привет, мир!"; "cyrillic")]
#[test_case("Καλημέρα κόσμε"; "greek")]
#[test_case("你好，世界"; "han")]
#[test_case("ls -la /tmp | grep 'x' > out.txt 2>&1"; "shell command")]
fn test_no_complex_script_means_identity(text: &str) {
    let codepoints = chars(text);
    assert!(!needs_analysis(&codepoints));

    // The identity map is also what the full analysis produces.
    let analysis = analyze(&codepoints, ParagraphDirection::Auto).unwrap();
    assert_eq2!(analysis.paragraph_level(), Level::LTR);
    let output = reorder(&analysis, &codepoints).unwrap();
    assert_eq2!(output.map, ReorderMap::identity(codepoints.len()));
}

#[test]
fn test_pure_latin_is_identity() {
    let codepoints = chars("Hello World!");
    let analysis = analyze(&codepoints, ParagraphDirection::Auto).unwrap();
    assert_eq2!(analysis.paragraph_level(), Level::LTR);
    let output = reorder(&analysis, &codepoints).unwrap();
    assert_eq2!(output.map.to_vec().unwrap(), (0..12).collect::<Vec<_>>());
}

#[test]
fn test_pure_arabic_is_reversed() {
    let codepoints = chars("مرحبا");
    let analysis = analyze(&codepoints, ParagraphDirection::Auto).unwrap();
    assert_eq2!(analysis.paragraph_level(), Level::RTL);
    let output = reorder(&analysis, &codepoints).unwrap();
    assert_eq2!(output.map.to_vec().unwrap(), vec![4, 3, 2, 1, 0]);
}

#[test]
fn test_mixed_line_keeps_ltr_islands_in_order() {
    let codepoints = chars("Hello مرحبا World");
    let line = analyze_line(&codepoints, &BidiConfig::default()).unwrap();
    let map = line.reorder_map().to_vec().unwrap();

    let mut expected: Vec<usize> = (0..6).collect();
    expected.extend((6..11).rev());
    expected.extend(11..17);
    assert_eq2!(map, expected);
    assert_eq2!(line.visual_string(&codepoints), "Hello ابحرم World");
}

#[test]
fn test_brackets_mirror_only_in_rtl_runs() {
    let config = BidiConfig::default();

    let rtl = chars("שלום (עולם)");
    let line = analyze_line(&rtl, &config).unwrap();
    assert!(line.mirror()[5]);
    assert!(line.mirror()[10]);
    assert_eq2!(line.mirror().iter().filter(|&&it| it).count(), 2);

    let ltr = chars("hello (world)");
    let line = analyze_line(&ltr, &config.with_fast_path(FastPathPolicy::BidiTypes)).unwrap();
    assert!(line.mirror().iter().all(|&it| !it));

    // Forced analysis of the same LTR text still mirrors nothing.
    let analysis = analyze(&ltr, ParagraphDirection::Auto).unwrap();
    let output = reorder(&analysis, &ltr).unwrap();
    assert!(output.mirror.iter().all(|&it| !it));
}

#[test]
fn test_random_lines_hold_invariants() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let codepoints = random_line(&mut rng);
        for paragraph_direction in [
            ParagraphDirection::Auto,
            ParagraphDirection::Ltr,
            ParagraphDirection::Rtl,
        ] {
            let analysis = analyze(&codepoints, paragraph_direction).unwrap();
            assert_eq2!(analysis.len(), codepoints.len());
            assert!(analysis.max_level().value() <= r3bl_bidi::MAX_RESOLVED_LEVEL);

            let output = reorder(&analysis, &codepoints).unwrap();
            let map = output.map.to_vec().unwrap();
            assert!(is_permutation(&map), "{codepoints:?} gave {map:?}");
            assert!(output.map.is_permutation().unwrap());

            // Round trip: logical to visual, then back.
            let inverse = output.map.invert().unwrap();
            for (logical, &visual) in map.iter().enumerate() {
                assert_eq2!(inverse[visual], logical);
            }

            // Idempotence: no hidden state between calls.
            let again = analyze(&codepoints, paragraph_direction).unwrap();
            assert_eq2!(again.levels(), analysis.levels());
            assert_eq2!(reorder(&again, &codepoints).unwrap(), output);

            // Mirroring only ever happens at an odd line level.
            for (flag, level) in output.mirror.iter().zip(&output.line_levels) {
                assert!(!flag || level.is_rtl());
            }
        }
    }
}

#[test]
fn test_random_lines_through_the_line_facade() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = BidiConfig::default();
    for _ in 0..300 {
        let codepoints = random_line(&mut rng);
        let line = analyze_line(&codepoints, &config).unwrap();
        assert_eq2!(line.len(), codepoints.len());
        assert_eq2!(line.visual_string(&codepoints).chars().count(), codepoints.len());

        for logical in 0..line.len() {
            let visual = line.visual_pos(logical).unwrap();
            assert_eq2!(line.logical_pos(visual), Some(logical));
        }

        let runs = line.visual_runs();
        assert_eq2!(
            runs.iter().map(|it| it.logical_range.len()).sum::<usize>(),
            codepoints.len()
        );

        let columns = line.visual_columns(&codepoints).unwrap();
        assert!(columns.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

#[test]
fn test_empty_line() {
    for paragraph_direction in [ParagraphDirection::Auto, ParagraphDirection::Rtl] {
        let config = BidiConfig::default().with_paragraph_direction(paragraph_direction);
        let line = analyze_line(&[], &config).unwrap();
        assert!(line.is_empty());
        assert!(line.reorder_map().is_identity());
        assert_eq2!(line.paragraph_level(), Level::LTR);
    }
}
