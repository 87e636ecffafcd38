// Copyright 2026 the Linefold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line break scenarios and quantified invariants.

use linefold::{LineBreak, LineBreaker};

fn utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

fn breaks(text: &str) -> Vec<(usize, usize, bool)> {
    let units = utf16(text);
    breaks_of(&units)
}

fn breaks_of(units: &[u16]) -> Vec<(usize, usize, bool)> {
    LineBreaker::new(units)
        .map(|b| (b.wrap, b.offset, b.mandatory))
        .collect()
}

#[test]
fn soft_break_after_space() {
    assert_eq!(breaks("Hello world"), [(5, 6, false), (11, 11, false)]);
    assert_eq!(breaks("word word"), [(4, 5, false), (9, 9, false)]);
}

#[test]
fn mandatory_break_after_line_feed() {
    assert_eq!(breaks("Hello\nworld"), [(5, 6, true), (11, 11, false)]);
}

#[test]
fn carriage_return_line_feed_is_one_terminator() {
    assert_eq!(breaks("a\r\nb"), [(1, 3, true), (4, 4, false)]);
}

#[test]
fn lone_carriage_return() {
    assert_eq!(breaks("a\rb"), [(1, 2, true), (3, 3, false)]);
}

#[test]
fn regional_indicators_break_between_pairs_only() {
    // GB + DE flags: four RI codepoints, eight code units.
    assert_eq!(breaks("🇬🇧🇩🇪"), [(4, 4, false), (8, 8, false)]);
    assert_eq!(
        breaks("🇬🇧🇩🇪🇫🇷"),
        [(4, 4, false), (8, 8, false), (12, 12, false)]
    );
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(breaks(""), []);
}

#[test]
fn trailing_terminators() {
    assert_eq!(breaks("\n"), [(0, 1, true)]);
    assert_eq!(breaks("ab\n"), [(2, 3, true)]);
    assert_eq!(breaks("a\r"), [(1, 2, true)]);
    assert_eq!(breaks("a\r\n"), [(1, 3, true)]);
}

#[test]
fn spaces_stay_on_the_previous_line() {
    assert_eq!(breaks("a  b"), [(1, 3, false), (4, 4, false)]);
    assert_eq!(breaks("trail  "), [(5, 7, false)]);
    assert_eq!(breaks("  lead"), [(0, 2, false), (6, 6, false)]);
    assert_eq!(breaks(" "), [(0, 1, false)]);
}

#[test]
fn break_after_hyphen() {
    assert_eq!(breaks("a-b"), [(2, 2, false), (3, 3, false)]);
}

#[test]
fn hebrew_letter_hyphen_glues() {
    // LB21a: no break after Hebrew letter + hyphen.
    assert_eq!(breaks("\u{5D0}-b"), [(3, 3, false)]);
}

#[test]
fn no_break_inside_parentheses() {
    assert_eq!(breaks("a (b)"), [(1, 2, false), (5, 5, false)]);
}

#[test]
fn glue_characters() {
    // U+00A0 no-break space.
    assert_eq!(breaks("foo\u{A0}bar"), [(7, 7, false)]);
    // LB7: no break before zero width space, direct break after it.
    assert_eq!(breaks("x \u{200B}a"), [(3, 3, false), (4, 4, false)]);
}

#[test]
fn zero_width_joiner_glues() {
    assert_eq!(breaks("a\u{200D}b"), [(3, 3, false)]);
    assert_eq!(breaks("a\u{200D} b"), [(2, 3, false), (4, 4, false)]);
    assert_eq!(breaks("\u{200D}a"), [(2, 2, false)]);
}

#[test]
fn combining_marks_attach() {
    assert_eq!(breaks("e\u{301}m"), [(3, 3, false)]);
    assert_eq!(
        breaks("a b\u{301} c"),
        [(1, 2, false), (4, 5, false), (6, 6, false)]
    );
    // A mark on open punctuation stays glued through it.
    assert_eq!(breaks("(\u{301}a"), [(3, 3, false)]);
}

#[test]
fn numeric_sequences_hold_together() {
    assert_eq!(breaks("5/8"), [(3, 3, false)]);
    assert_eq!(breaks("100%"), [(4, 4, false)]);
    assert_eq!(breaks("$100"), [(4, 4, false)]);
    assert_eq!(breaks("a, b"), [(2, 3, false), (4, 4, false)]);
}

#[test]
fn inseparable_ellipsis() {
    // LB22: no break before the ellipsis after alphabetics, break after it.
    assert_eq!(breaks("ab\u{2026}c"), [(3, 3, false), (4, 4, false)]);
    assert_eq!(breaks("a \u{2026}"), [(1, 2, false), (3, 3, false)]);
}

#[test]
fn ideographs_break_anywhere() {
    assert_eq!(
        breaks("日本語"),
        [(1, 1, false), (2, 2, false), (3, 3, false)]
    );
}

#[test]
fn full_sentence() {
    assert_eq!(
        breaks("The quick (\u{201C}brown\u{201D}) fox can\u{2019}t jump 32.3 feet, right?"),
        [
            (3, 4, false),
            (9, 10, false),
            (19, 20, false),
            (23, 24, false),
            (29, 30, false),
            (34, 35, false),
            (39, 40, false),
            (45, 46, false),
            (52, 52, false),
        ]
    );
}

#[test]
fn malformed_utf16_is_replaced_not_rejected() {
    // Lone surrogates decode to U+FFFD, which behaves like an alphabetic.
    assert_eq!(breaks_of(&[0xD800]), [(1, 1, false)]);
    assert_eq!(breaks_of(&[0x61, 0xDC00, 0x62]), [(3, 3, false)]);
    assert_eq!(
        breaks_of(&[0x61, 0x20, 0xD800, 0x62]),
        [(1, 2, false), (4, 4, false)]
    );
}

const CORPUS: &[&str] = &[
    "Hello world",
    "Hello\nworld",
    "a\r\nb",
    "a\rb",
    "🇬🇧🇩🇪",
    "🇬🇧🇩🇪🇫🇷",
    "a  b",
    "a-b",
    "a (b)",
    "foo\u{A0}bar",
    "\n",
    "ab\n",
    "a\u{200D}b",
    "a\u{200D} b",
    "e\u{301}m",
    "5/8",
    "word word",
    "日本語と English が混ざる文。",
    "Price: $100.00 (20% off)\r\nends 2026-03-01!",
    "emoji 👍🏽 and flags 🇬🇧🇩🇪 together\u{2028}next line",
    "  lead",
    "trail  ",
    " ",
];

#[test]
fn offsets_are_strictly_increasing_and_contained() {
    for text in CORPUS {
        let len = utf16(text).len();
        let emissions = breaks(text);
        assert!(!emissions.is_empty(), "{text:?}");
        let mut previous = None;
        for &(wrap, offset, _) in &emissions {
            assert!(wrap <= offset, "{text:?}");
            assert!(offset <= len, "{text:?}");
            if let Some(p) = previous {
                assert!(offset > p, "{text:?}");
            }
            previous = Some(offset);
        }
        let at_end = emissions.iter().filter(|&&(_, o, _)| o == len).count();
        assert_eq!(at_end, 1, "{text:?}");
    }
}

#[test]
fn exhausted_breaker_stays_exhausted() {
    for text in CORPUS {
        let units = utf16(text);
        let mut breaker = LineBreaker::new(&units);
        while breaker.next_break().is_some() {}
        assert_eq!(breaker.next_break(), None, "{text:?}");
        assert_eq!(breaker.next_break(), None, "{text:?}");
    }
}

#[test]
fn mandatory_only_after_hard_terminators() {
    for text in CORPUS {
        let units = utf16(text);
        for LineBreak {
            offset, mandatory, ..
        } in LineBreaker::new(&units)
        {
            let hard = matches!(
                units.get(offset.wrapping_sub(1)),
                Some(0x0A | 0x0B | 0x0C | 0x0D | 0x85 | 0x2028 | 0x2029)
            );
            if mandatory {
                assert!(hard, "{text:?} at {offset}");
            }
        }
    }
}

#[test]
fn regional_indicator_runs_pair_up() {
    // 1 through 7 flags; breaks fall between pairs, never within one.
    let ri = '\u{1F1E6}';
    for count in 1..=7 {
        let text: String = core::iter::repeat(ri).take(count).collect();
        let emissions = breaks(&text);
        let internal: Vec<usize> = emissions
            .iter()
            .map(|&(_, offset, _)| offset)
            .filter(|&offset| offset != count * 2)
            .collect();
        let expected: Vec<usize> = (1..=(count - 1) / 2).map(|k| k * 4).collect();
        assert_eq!(internal, expected, "{count} regional indicators");
    }
}

#[test]
fn no_break_immediately_after_zwj() {
    for text in CORPUS {
        let units = utf16(text);
        let zwj_ends: Vec<usize> = units
            .iter()
            .enumerate()
            .filter(|&(_, &u)| u == 0x200D)
            .map(|(i, _)| i + 1)
            .collect();
        for brk in LineBreaker::new(&units) {
            assert!(!zwj_ends.contains(&brk.offset), "{text:?} at {}", brk.offset);
        }
    }
}
