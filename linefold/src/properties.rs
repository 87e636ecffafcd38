// Copyright 2026 the Linefold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unicode character property lookups.
//!
//! Lookups are backed by the ICU4X compiled property data, so the tables are
//! process-wide, immutable and cost nothing to "load": the sources below are
//! borrows of `'static` baked data.

use core::fmt;

use icu_properties::CodePointMapDataBorrowed;
use icu_properties::props::{BidiClass, GeneralCategory, GraphemeClusterBreak, LineBreak};

use crate::code_point::{ASCII_INFO, CATEGORY_MASK, CodePoint};
use crate::line_break::BreakClass;

/// The [Unicode version](https://www.unicode.org/versions/) of the compiled
/// property data.
pub const UNICODE_VERSION: (u8, u8, u8) = (16, 0, 0);

/// Borrowed handles to the per-codepoint property maps.
///
/// Cheap to construct; typically created once per scanner.
pub struct PropertySources {
    general_category: CodePointMapDataBorrowed<'static, GeneralCategory>,
    line_break: CodePointMapDataBorrowed<'static, LineBreak>,
    grapheme_cluster: CodePointMapDataBorrowed<'static, GraphemeClusterBreak>,
    bidi_class: CodePointMapDataBorrowed<'static, BidiClass>,
}

impl PropertySources {
    /// Creates handles to the compiled property data.
    #[must_use]
    pub fn new() -> Self {
        Self {
            general_category: CodePointMapDataBorrowed::<GeneralCategory>::new(),
            line_break: CodePointMapDataBorrowed::<LineBreak>::new(),
            grapheme_cluster: CodePointMapDataBorrowed::<GraphemeClusterBreak>::new(),
            bidi_class: CodePointMapDataBorrowed::<BidiClass>::new(),
        }
    }

    /// Returns the general category of a codepoint.
    ///
    /// ASCII answers from the packed info table without touching the trie.
    #[must_use]
    pub fn general_category(&self, cp: CodePoint) -> GeneralCategory {
        if cp.is_ascii() {
            let packed = ASCII_INFO[cp.value() as usize] & CATEGORY_MASK;
            return GeneralCategory::try_from(packed).unwrap_or(GeneralCategory::Unassigned);
        }
        self.general_category.get(cp.to_char())
    }

    /// Returns the raw UAX #14 line breaking class, before LB1 resolution.
    #[must_use]
    pub fn break_class(&self, cp: CodePoint) -> BreakClass {
        BreakClass::from_icu(self.line_break.get(cp.to_char()))
    }

    /// Returns the grapheme cluster break class.
    ///
    /// Not consumed by the line breaker; exposed so segmentation consumers
    /// share the same entry points.
    #[must_use]
    pub fn grapheme_cluster_class(&self, cp: CodePoint) -> GraphemeClusterBreak {
        self.grapheme_cluster.get(cp.to_char())
    }

    /// Returns the bidirectional character type.
    #[must_use]
    pub fn bidi_class(&self, cp: CodePoint) -> BidiClass {
        self.bidi_class.get(cp.to_char())
    }
}

impl Default for PropertySources {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PropertySources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertySources").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_classes() {
        let props = PropertySources::new();
        let class = |value: u32| props.break_class(CodePoint::new(value).unwrap());
        assert_eq!(class(0x0A), BreakClass::LineFeed);
        assert_eq!(class(0x0D), BreakClass::CarriageReturn);
        assert_eq!(class(0x20), BreakClass::Space);
        assert_eq!(class(0x2CF3), BreakClass::Alphabetic);
        assert_eq!(class(0x1F1EC), BreakClass::RegionalIndicator);
        assert_eq!(class(0x200D), BreakClass::ZeroWidthJoiner);
        assert_eq!(class(0x4E00), BreakClass::Ideographic);
    }

    #[test]
    fn ascii_general_category_matches_trie() {
        let props = PropertySources::new();
        for value in 0..0x80 {
            let cp = CodePoint::new(value).unwrap();
            assert_eq!(
                props.general_category(cp),
                props.general_category.get(cp.to_char()),
                "U+{value:04X}"
            );
        }
    }

    #[test]
    fn bidi_and_grapheme() {
        let props = PropertySources::new();
        let space = CodePoint::from_char(' ');
        assert_eq!(props.bidi_class(space), BidiClass::WhiteSpace);
        let cr = CodePoint::new(0x0D).unwrap();
        assert_eq!(props.grapheme_cluster_class(cr), GraphemeClusterBreak::CR);
    }
}
