// Copyright 2026 the Linefold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The UAX #14 pair table.
//!
//! The 33x33 core (classes OP through CB) is the standard table derived from
//! the rule chain LB7-LB31: a cell classifies the join between the class of
//! the last accepted codepoint (row) and the class of the next one (column).
//! Rows and columns past CB are never consulted by the scanner; they pad the
//! table to the full class count with direct breaks.

use self::PairBreak::{
    CombiningIndirect as CI, CombiningProhibited as CP, Direct as DI, Indirect as IN,
    Prohibited as PR,
};

/// Classification of the join between two adjacent break classes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PairBreak {
    /// Break permitted between the pair.
    Direct,
    /// Break permitted only with intervening spaces.
    Indirect,
    /// Indirect break for a combining mark following a space.
    CombiningIndirect,
    /// No break for a combining mark, even with intervening spaces.
    CombiningProhibited,
    /// No break permitted, even with intervening spaces.
    Prohibited,
}

/// Pair table indexed by `[current][next]` class discriminants.
#[rustfmt::skip]
pub(crate) static PAIR_TABLE: [[PairBreak; 43]; 43] = [
    [PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, PR, CP, PR, PR, PR, PR, PR, PR, PR, PR, PR, CP, PR, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // OP
    [DI, PR, PR, IN, IN, PR, PR, PR, PR, IN, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // CL
    [DI, PR, PR, IN, IN, PR, PR, PR, PR, IN, IN, IN, IN, IN, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // CP
    [PR, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, PR, CI, PR, IN, IN, IN, IN, IN, IN, IN, IN, CI, IN, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // QU
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, PR, CI, PR, IN, IN, IN, IN, IN, IN, IN, IN, CI, IN, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // GL
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // NS
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // EX
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, IN, DI, IN, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // SY
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, IN, IN, IN, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // IS
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, IN, IN, IN, IN, IN, IN, IN, DI, DI, PR, CI, PR, IN, IN, IN, IN, IN, DI, IN, IN, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // PR
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, IN, IN, IN, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // PO
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // NU
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // AL
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // HL
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // ID
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // IN
    [DI, PR, PR, IN, DI, IN, PR, PR, PR, DI, DI, IN, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // HY
    [DI, PR, PR, IN, DI, IN, PR, PR, PR, DI, DI, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // BA
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, PR, CI, PR, IN, IN, IN, IN, IN, IN, IN, IN, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // BB
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, DI, DI, DI, DI, IN, IN, IN, DI, PR, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // B2
    [DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, PR, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // ZW
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // CM
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, IN, PR, CI, PR, IN, IN, IN, IN, IN, IN, IN, IN, CI, IN, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // WJ
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, IN, IN, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // H2
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, IN, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // H3
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, IN, IN, IN, IN, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // JL
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, IN, IN, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // JV
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, IN, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // JT
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, DI, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, IN, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // RI
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, IN, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // EB
    [DI, PR, PR, IN, IN, IN, PR, PR, PR, DI, IN, DI, DI, DI, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // EM
    [IN, PR, PR, IN, IN, IN, PR, PR, PR, IN, IN, IN, IN, IN, DI, IN, IN, IN, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // ZWJ
    [DI, PR, PR, IN, IN, DI, PR, PR, PR, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, PR, CI, PR, DI, DI, DI, DI, DI, DI, DI, DI, CI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // CB
    [DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // AI
    [DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // BK
    [DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // CJ
    [DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // CR
    [DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // LF
    [DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // NL
    [DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // SA
    [DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // SG
    [DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // SP
    [DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI, DI], // XX
];

#[cfg(test)]
mod tests {
    use super::super::class::{AL, B2, BA, BreakClass, CM, GL, HY, NU, OP, QU, RI, ZW};
    use super::{PAIR_TABLE, PairBreak};

    fn cell(row: BreakClass, col: BreakClass) -> PairBreak {
        PAIR_TABLE[row as usize][col as usize]
    }

    #[test]
    fn core_cells() {
        // LB14: nothing breaks after open punctuation, even with spaces.
        assert!(PAIR_TABLE[OP as usize]
            .iter()
            .all(|&c| matches!(c, PairBreak::Prohibited | PairBreak::CombiningProhibited | PairBreak::Direct)));
        // LB28 is indirect: an intervening space allows the break.
        assert_eq!(cell(AL, AL), PairBreak::Indirect);
        // LB8: direct break after zero width space.
        assert_eq!(cell(ZW, AL), PairBreak::Direct);
        assert_eq!(cell(ZW, ZW), PairBreak::Prohibited);
        // LB17.
        assert_eq!(cell(B2, B2), PairBreak::Prohibited);
        // LB25.
        assert_eq!(cell(HY, NU), PairBreak::Indirect);
        // LB12a carve-out for break-after classes.
        assert_eq!(cell(BA, GL), PairBreak::Direct);
        // Combining mark columns.
        assert_eq!(cell(QU, CM), PairBreak::CombiningIndirect);
        assert_eq!(cell(OP, CM), PairBreak::CombiningProhibited);
        // LB30a pairs regional indicators in the table; the scanner's run
        // counter forces the even-pair breaks.
        assert_eq!(cell(RI, RI), PairBreak::Indirect);
    }
}
