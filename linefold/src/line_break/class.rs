// Copyright 2026 the Linefold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icu_properties::props::LineBreak;

/// UAX #14 line breaking class.
///
/// The discriminants are the pair-table indices: classes `OpenPunctuation`
/// through `Contingent` form the 33-class table core, and the remaining
/// classes are resolved or intercepted before the table is consulted
/// (`Ambiguous`, `Surrogate`, `Unknown`, `ComplexContext` and
/// `ConditionalJapaneseStarter` by LB1, the hard terminators and `Space` by
/// the scanner itself).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum BreakClass {
    /// OP: Open punctuation.
    OpenPunctuation = 0,
    /// CL: Close punctuation.
    ClosePunctuation = 1,
    /// CP: Close parenthesis.
    CloseParenthesis = 2,
    /// QU: Quotation.
    Quotation = 3,
    /// GL: Non-breaking ("glue").
    Glue = 4,
    /// NS: Nonstarter.
    NonStarter = 5,
    /// EX: Exclamation/interrogation.
    Exclamation = 6,
    /// SY: Symbols allowing break after.
    Symbol = 7,
    /// IS: Infix numeric separator.
    InfixSeparator = 8,
    /// PR: Prefix numeric.
    Prefix = 9,
    /// PO: Postfix numeric.
    Postfix = 10,
    /// NU: Numeric.
    Numeric = 11,
    /// AL: Alphabetic.
    Alphabetic = 12,
    /// HL: Hebrew letter.
    HebrewLetter = 13,
    /// ID: Ideographic.
    Ideographic = 14,
    /// IN: Inseparable.
    Inseparable = 15,
    /// HY: Hyphen.
    Hyphen = 16,
    /// BA: Break after.
    After = 17,
    /// BB: Break before.
    Before = 18,
    /// B2: Break opportunity before and after.
    BeforeAndAfter = 19,
    /// ZW: Zero width space.
    ZeroWidthSpace = 20,
    /// CM: Combining mark.
    CombiningMark = 21,
    /// WJ: Word joiner.
    WordJoiner = 22,
    /// H2: Hangul LV syllable.
    HangulLvSyllable = 23,
    /// H3: Hangul LVT syllable.
    HangulLvtSyllable = 24,
    /// JL: Hangul L Jamo.
    HangulLJamo = 25,
    /// JV: Hangul V Jamo.
    HangulVJamo = 26,
    /// JT: Hangul T Jamo.
    HangulTJamo = 27,
    /// RI: Regional indicator.
    RegionalIndicator = 28,
    /// EB: Emoji base.
    EmojiBase = 29,
    /// EM: Emoji modifier.
    EmojiModifier = 30,
    /// ZWJ: Zero width joiner.
    ZeroWidthJoiner = 31,
    /// CB: Contingent break.
    Contingent = 32,
    /// AI: Ambiguous (alphabetic or ideographic).
    Ambiguous = 33,
    /// BK: Mandatory break.
    Mandatory = 34,
    /// CJ: Conditional Japanese starter.
    ConditionalJapaneseStarter = 35,
    /// CR: Carriage return.
    CarriageReturn = 36,
    /// LF: Line feed.
    LineFeed = 37,
    /// NL: Next line.
    NextLine = 38,
    /// SA: Complex context dependent (South East Asian).
    ComplexContext = 39,
    /// SG: Surrogate.
    Surrogate = 40,
    /// SP: Space.
    Space = 41,
    /// XX: Unknown.
    Unknown = 42,
}

#[allow(
    unused_imports,
    reason = "the aliases mirror the UAX #14 vocabulary; not every module uses all of them"
)]
pub(crate) use self::BreakClass::{
    After as BA, Alphabetic as AL, Ambiguous as AI, Before as BB, BeforeAndAfter as B2,
    CarriageReturn as CR, CloseParenthesis as CP, ClosePunctuation as CL, CombiningMark as CM,
    ComplexContext as SA, ConditionalJapaneseStarter as CJ, Contingent as CB, EmojiBase as EB,
    EmojiModifier as EM, Exclamation as EX, Glue as GL, HangulLJamo as JL, HangulLvSyllable as H2,
    HangulLvtSyllable as H3, HangulTJamo as JT, HangulVJamo as JV, HebrewLetter as HL,
    Hyphen as HY, Ideographic as ID, InfixSeparator as IS, Inseparable as IN, LineFeed as LF,
    Mandatory as BK, NextLine as NL, NonStarter as NS, Numeric as NU, OpenPunctuation as OP,
    Postfix as PO, Prefix as PR, Quotation as QU, RegionalIndicator as RI, Space as SP,
    Surrogate as SG, Symbol as SY, Unknown as XX, WordJoiner as WJ, ZeroWidthJoiner as ZWJ,
    ZeroWidthSpace as ZW,
};

impl BreakClass {
    /// Converts from the ICU property value.
    ///
    /// Classes introduced after this enum's closed set (the Unicode 15.1
    /// Brahmic additions) resolve to `Alphabetic`, the same resolution LB1
    /// applies to `Unknown`.
    pub(crate) fn from_icu(value: LineBreak) -> Self {
        match value {
            LineBreak::OpenPunctuation => OP,
            LineBreak::ClosePunctuation => CL,
            LineBreak::CloseParenthesis => CP,
            LineBreak::Quotation => QU,
            LineBreak::Glue => GL,
            LineBreak::Nonstarter => NS,
            LineBreak::Exclamation => EX,
            LineBreak::BreakSymbols => SY,
            LineBreak::InfixNumeric => IS,
            LineBreak::PrefixNumeric => PR,
            LineBreak::PostfixNumeric => PO,
            LineBreak::Numeric => NU,
            LineBreak::Alphabetic => AL,
            LineBreak::HebrewLetter => HL,
            LineBreak::Ideographic => ID,
            LineBreak::Inseparable => IN,
            LineBreak::Hyphen => HY,
            LineBreak::BreakAfter => BA,
            LineBreak::BreakBefore => BB,
            LineBreak::BreakBoth => B2,
            LineBreak::ZWSpace => ZW,
            LineBreak::CombiningMark => CM,
            LineBreak::WordJoiner => WJ,
            LineBreak::H2 => H2,
            LineBreak::H3 => H3,
            LineBreak::JL => JL,
            LineBreak::JV => JV,
            LineBreak::JT => JT,
            LineBreak::RegionalIndicator => RI,
            LineBreak::EBase => EB,
            LineBreak::EModifier => EM,
            LineBreak::ZWJ => ZWJ,
            LineBreak::ContingentBreak => CB,
            LineBreak::Ambiguous => AI,
            LineBreak::MandatoryBreak => BK,
            LineBreak::ConditionalJapaneseStarter => CJ,
            LineBreak::CarriageReturn => CR,
            LineBreak::LineFeed => LF,
            LineBreak::NextLine => NL,
            LineBreak::ComplexContext => SA,
            LineBreak::Surrogate => SG,
            LineBreak::Space => SP,
            LineBreak::Unknown => XX,
            _ => AL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_indices() {
        assert_eq!(OP as usize, 0);
        assert_eq!(CB as usize, 32);
        assert_eq!(ZWJ as usize, 31);
        assert_eq!(XX as usize, 42);
    }

    #[test]
    fn icu_conversion() {
        assert_eq!(BreakClass::from_icu(LineBreak::MandatoryBreak), BK);
        assert_eq!(BreakClass::from_icu(LineBreak::ZWJ), ZWJ);
        assert_eq!(BreakClass::from_icu(LineBreak::RegionalIndicator), RI);
        assert_eq!(BreakClass::from_icu(LineBreak::Unknown), XX);
    }
}
