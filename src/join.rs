use super::printer::PrintGroup;
use super::record::Record;

use std::cmp::Ordering::{Equal, Greater, Less};
use std::error::Error;
use std::io;

/// What the run emits: matched pairs, or left lines with no match.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum JoinMode {
    Inner,
    UnmatchedLeft,
}

impl JoinMode {
    /// Maps the positional mode argument: the exact token "V" selects
    /// unmatched-only output, anything else the inner join.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "V" {
            JoinMode::UnmatchedLeft
        } else {
            JoinMode::Inner
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JoinOptions {
    show_left: bool,
    show_right: bool,
    show_both: bool,
}

impl JoinOptions {
    pub fn new(show_left: bool, show_right: bool, show_both: bool) -> Self {
        JoinOptions {
            show_left: show_left,
            show_right: show_right,
            show_both: show_both,
        }
    }

    pub fn from_mode(mode: JoinMode) -> Self {
        match mode {
            JoinMode::Inner => JoinOptions::new(false, false, true),
            JoinMode::UnmatchedLeft => JoinOptions::new(true, false, false),
        }
    }
}

/// Walks a key-sorted run of records one maximal equal-key group at a time.
pub struct GroupCursor {
    run: Vec<Record>,
    start: usize,
    end: usize,
}

impl GroupCursor {
    pub fn new(run: Vec<Record>) -> Self {
        GroupCursor {
            run: run,
            start: 0,
            end: 0,
        }
    }

    /// Move to the next group. Returns `false` once the run is exhausted.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.start = self.end;
        if self.start >= self.run.len() {
            return false;
        }
        let mut end = self.start + 1;
        while end < self.run.len() && self.run[end].key() == self.run[self.start].key() {
            end += 1;
        }
        self.end = end;
        true
    }

    /// The key of the current group.
    #[inline]
    pub fn key(&self) -> &[u8] {
        self.run[self.start].key()
    }

    /// The records of the current group, in input order.
    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.run[self.start..self.end]
    }
}

/// Merge-join two key-sorted runs, emitting groups per `opts`.
///
/// Precondition: both cursors walk runs sorted ascending by key. The
/// sorter establishes this; it is not re-checked here, and unsorted input
/// yields unspecified pairing. Duplicate keys on either side are expected:
/// an equal-key pairing expands to the full cartesian product of the two
/// groups, left records in input order, and for each left record every
/// right record before the next left one.
pub fn join<W, P>(
    left: &mut GroupCursor,
    right: &mut GroupCursor,
    w: &mut W,
    mut p: P,
    opts: JoinOptions,
) -> Result<(), Box<dyn Error>>
where
    W: io::Write,
    P: PrintGroup<W>,
{
    let mut ord = Equal;
    let mut l = true;
    let mut r = true;
    loop {
        match ord {
            Less => {
                l = left.advance();
            }
            Greater => {
                r = right.advance();
            }
            Equal => {
                l = left.advance();
                r = right.advance();
            }
        }
        ord = match (l, r) {
            (true, true) => {
                let key_ord = left.key().cmp(right.key());
                match key_ord {
                    Less => {
                        if opts.show_left {
                            p.print_left(w, left.records())?;
                        }
                    }
                    Greater => {
                        if opts.show_right {
                            p.print_right(w, right.records())?;
                        }
                    }
                    Equal => {
                        if opts.show_both {
                            p.print_both(w, left.records(), right.records())?;
                        }
                    }
                }
                key_ord
            }
            (true, false) => {
                if opts.show_left {
                    p.print_left(w, left.records())?;
                }
                Less
            }
            (false, true) => {
                if opts.show_right {
                    p.print_right(w, right.records())?;
                }
                Greater
            }
            (false, false) => return Ok(()),
        }
    }
}
