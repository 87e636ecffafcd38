// Copyright 2026 the Linefold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The UAX #14 line breaking state machine.

mod class;
mod pair_table;

pub use class::BreakClass;
pub use pair_table::PairBreak;

use icu_properties::props::GeneralCategory;

use self::class::{
    AI, AL, BA, BK, CB, CJ, CL, CM, CP, CR, EX, HL, HY, IN, IS, LF, NL, NS, NU, OP, PO, PR, RI,
    SA, SG, SP, SY, WJ, XX, ZW, ZWJ,
};
use self::pair_table::PAIR_TABLE;
use crate::code_point::CodePoint;
use crate::properties::PropertySources;
use crate::utf16;

/// A line break opportunity.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct LineBreak {
    /// Code-unit index at which the visible line content ends, before any
    /// trailing spaces and the line terminator itself.
    pub wrap: usize,
    /// Code-unit index just past the break, where the next line starts.
    pub offset: usize,
    /// Whether the break is mandatory rather than an opportunity.
    pub mandatory: bool,
}

/// A cursor over a UTF-16 source yielding line break opportunities.
///
/// The sequence is lazy, finite and single-pass: each call to
/// [`next_break`](Self::next_break) advances past one break opportunity, and
/// the final emission (whose [`offset`](LineBreak::offset) equals the source
/// length) is followed by `None`. Restarting means constructing a fresh
/// breaker. The breaker borrows the source and allocates nothing per step.
#[derive(Debug)]
pub struct LineBreaker<'a> {
    source: &'a [u16],
    props: PropertySources,
    /// Code-unit cursor; always at a codepoint boundary.
    pos: usize,
    /// Class of the last accepted codepoint, after LB1 and first-codepoint
    /// mapping.
    current: BreakClass,
    /// Class of the most recently consumed codepoint.
    next: BreakClass,
    first: bool,
    finished: bool,
    // UAX #14 exception state. The pair table plus these flags form the
    // complete transition function; none of them can be folded into another.
    lb8a: bool,
    lb21a: bool,
    lb22ex: bool,
    lb24ex: bool,
    lb25ex: bool,
    lb30: bool,
    lb31: bool,
    /// Regional-indicator run parity.
    lb30a: u8,
    /// Length of the current AL/HL/NU run, plus trailing combining marks.
    alpha_numeric_count: usize,
}

impl<'a> LineBreaker<'a> {
    /// Creates a breaker over a UTF-16 code-unit buffer.
    #[must_use]
    pub fn new(source: &'a [u16]) -> Self {
        Self {
            source,
            props: PropertySources::new(),
            pos: 0,
            current: XX,
            next: XX,
            first: true,
            finished: false,
            lb8a: false,
            lb21a: false,
            lb22ex: false,
            lb24ex: false,
            lb25ex: false,
            lb30: false,
            lb31: false,
            lb30a: 0,
            alpha_numeric_count: 0,
        }
    }

    /// Rule LB1: resolves the ambiguous, surrogate, unknown, complex-context
    /// and conditional classes before the state machine sees them.
    fn folded_class(&self, cp: CodePoint) -> BreakClass {
        match self.props.break_class(cp) {
            AI | SG | XX => AL,
            SA => match self.props.general_category(cp) {
                GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark => CM,
                _ => AL,
            },
            CJ => NS,
            class => class,
        }
    }

    /// Consumes the codepoint at the cursor, updating the exception state.
    fn consume(&mut self) -> BreakClass {
        let (cp, width) = utf16::decode_at(self.source, self.pos);
        let class = self.folded_class(cp);
        let previous = self.current;

        if matches!(previous, AL | HL | NU) || (self.alpha_numeric_count > 0 && class == CM) {
            self.alpha_numeric_count += 1;
        }
        if class == CM && matches!(previous, BK | CB | EX | LF | NL | SP | ZW | CR) {
            self.lb22ex = true;
        }
        if self.first && class == CM {
            self.lb31 = true;
        }
        if class == CM && matches!(previous, BK | CB | EX | LF | NL | SP | ZW | CR | ZWJ) {
            self.lb31 = true;
        }
        if self.first && matches!(class, PO | PR | SP) {
            self.lb31 = true;
        }
        if previous == AL && matches!(class, PO | PR | SP) {
            self.lb31 = true;
        }
        if self.lb31 && !matches!(previous, PO | PR) && class == OP && cp.value() == 0x0028 {
            self.lb31 = false;
        }
        if self.first && matches!(class, CL | CP) {
            self.lb24ex = true;
        }
        if self.first && matches!(class, CL | IS | SY) {
            self.lb25ex = true;
        }
        if matches!(class, SP | WJ | AL) && self.pos + width < self.source.len() {
            let (peeked, _) = utf16::decode_at(self.source, self.pos + width);
            if matches!(self.folded_class(peeked), CL | IS | SY) {
                self.lb25ex = true;
            }
        }
        self.lb30 = self.alpha_numeric_count > 0
            && class == OP
            && !matches!(cp.value(), 0x0028 | 0x005B | 0x007B);

        self.pos += width;
        self.next = class;
        class
    }

    /// Steps back past one line terminator (a CR LF pair counts as one) and
    /// any run of spaces preceding `from`.
    fn find_prior_non_whitespace(&self, from: usize) -> usize {
        let mut index = from;
        if index > 0 {
            let (cp, width) = utf16::decode_before(self.source, index);
            let class = self.folded_class(cp);
            if matches!(class, BK | LF | CR) {
                index -= width;
                if class == LF && index > 0 {
                    let (prior, prior_width) = utf16::decode_before(self.source, index);
                    if self.folded_class(prior) == CR {
                        index -= prior_width;
                    }
                }
            }
        }
        while index > 0 {
            let (cp, width) = utf16::decode_before(self.source, index);
            if self.folded_class(cp) != SP {
                break;
            }
            index -= width;
        }
        index
    }

    fn emit(&self, offset: usize, mandatory: bool) -> LineBreak {
        LineBreak {
            wrap: self.find_prior_non_whitespace(offset),
            offset,
            mandatory,
        }
    }

    /// Advances past the next break opportunity and returns it.
    ///
    /// Returns `None` exactly once, after the terminal break (the emission at
    /// the source length) has been produced, or immediately for empty input.
    pub fn next_break(&mut self) -> Option<LineBreak> {
        if self.finished {
            return None;
        }
        if self.first {
            if self.source.is_empty() {
                self.finished = true;
                return None;
            }
            let first_class = self.consume();
            self.first = false;
            self.current = map_first(first_class);
            self.lb8a = first_class == ZWJ;
        }
        while self.pos < self.source.len() {
            let last_position = self.pos;
            let last_class = self.next;
            let next_class = self.consume();

            // LB4/LB5: explicit newlines break unconditionally.
            if self.current == BK || (self.current == CR && next_class != LF) {
                self.current = map_first(next_class);
                return Some(self.emit(last_position, true));
            }

            // LB6/LB7: terminators and spaces never allow a break before
            // themselves; they only shift the state.
            match next_class {
                SP => continue,
                BK | LF | NL => {
                    self.current = BK;
                    continue;
                }
                CR => {
                    self.current = CR;
                    continue;
                }
                _ => {}
            }

            let mut should_break;
            match PAIR_TABLE[self.current as usize][next_class as usize] {
                PairBreak::Direct => should_break = true,
                PairBreak::Indirect => {
                    if self.lb31 && next_class == OP {
                        should_break = true;
                        self.lb31 = false;
                    } else if self.lb30 {
                        should_break = true;
                        self.lb30 = false;
                        self.alpha_numeric_count = 0;
                    } else if self.lb25ex && matches!(next_class, PR | NU) {
                        should_break = true;
                        self.lb25ex = false;
                    } else if self.lb24ex && matches!(next_class, PO | PR) {
                        should_break = true;
                        self.lb24ex = false;
                    } else {
                        should_break = last_class == SP;
                    }
                }
                PairBreak::CombiningIndirect => {
                    // LB9: the mark attaches to the previous codepoint, which
                    // keeps its class.
                    should_break = last_class == SP;
                    if !should_break {
                        continue;
                    }
                }
                PairBreak::CombiningProhibited => {
                    if last_class != SP {
                        continue;
                    }
                    should_break = false;
                }
                PairBreak::Prohibited => should_break = false,
            }

            // LB22: no break before inseparable characters except after a
            // terminator, space or flagged combining mark.
            if next_class == IN {
                match last_class {
                    BK | CB | EX | LF | NL | SP | ZW => {}
                    CM => {
                        if self.lb22ex {
                            self.lb22ex = false;
                        } else {
                            should_break = false;
                        }
                    }
                    _ => should_break = false,
                }
            }

            // LB8a: no break after a zero width joiner.
            if self.lb8a {
                should_break = false;
            }

            // LB21a: no break after Hebrew letter + hyphen.
            if self.lb21a && matches!(self.current, HY | BA) {
                should_break = false;
                self.lb21a = false;
            } else {
                self.lb21a = self.current == HL;
            }

            // LB30a: break between regional indicator pairs, never within.
            if self.current == RI {
                self.lb30a += 1;
                if self.lb30a == 2 && next_class == RI {
                    should_break = true;
                    self.lb30a = 0;
                }
            } else {
                self.lb30a = 0;
            }

            self.current = next_class;
            self.lb8a = next_class == ZWJ;
            if should_break {
                return Some(self.emit(last_position, false));
            }
        }

        // Synthetic terminal break at the end of input.
        self.finished = true;
        let mandatory = self.current == BK || (self.current == CR && self.next != LF);
        Some(self.emit(self.source.len(), mandatory))
    }
}

impl Iterator for LineBreaker<'_> {
    type Item = LineBreak;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_break()
    }
}

/// Maps the class of the first codepoint (and of the codepoint after an
/// explicit newline) before it becomes the current class.
fn map_first(class: BreakClass) -> BreakClass {
    match class {
        LF | NL => BK,
        SP => WJ,
        _ => class,
    }
}
