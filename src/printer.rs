use super::plan::OutputColumnPlan;
use super::record::Record;

use std::error::Error;
use std::io;

/// A trait for printing groups of equal-key records in a desired format.
pub trait PrintGroup<W: io::Write> {
    /// Print a left group on its own (no matching right group).
    fn print_left(&mut self, w: &mut W, recs: &[Record]) -> Result<(), Box<dyn Error>>;
    /// Print a right group on its own (no matching left group).
    fn print_right(&mut self, w: &mut W, recs: &[Record]) -> Result<(), Box<dyn Error>>;
    /// Print the pairing of a left and a right group with equal keys.
    fn print_both(
        &mut self,
        w: &mut W,
        left: &[Record],
        right: &[Record],
    ) -> Result<(), Box<dyn Error>>;
}

/// Prints rows key-first: the left record projected through the column
/// plan, then, when a right record is paired, its non-key fields.
pub struct KeyFirst {
    delimiter: u8,
    terminator: u8,
    plan: OutputColumnPlan,
}

impl KeyFirst {
    pub fn new(delimiter: u8, terminator: u8, plan: OutputColumnPlan) -> Self {
        KeyFirst {
            delimiter: delimiter,
            terminator: terminator,
            plan: plan,
        }
    }

    // Fields the plan names but the record lacks print as empty, the way
    // `join -o` pads short lines.
    #[inline]
    fn write_planned<W: io::Write>(&self, w: &mut W, rec: &Record) -> Result<(), Box<dyn Error>> {
        let mut is_first = true;
        for &i in self.plan.cols() {
            if !is_first {
                w.write_all(&[self.delimiter])?;
            } else {
                is_first = false;
            }
            w.write_all(rec.get_field(i).unwrap_or(b""))?;
        }
        Ok(())
    }
}

impl<W: io::Write> PrintGroup<W> for KeyFirst {
    #[inline]
    fn print_left(&mut self, w: &mut W, recs: &[Record]) -> Result<(), Box<dyn Error>> {
        for rec in recs {
            self.write_planned(w, rec)?;
            w.write_all(&[self.terminator])?;
        }
        Ok(())
    }

    #[inline]
    fn print_right(&mut self, w: &mut W, recs: &[Record]) -> Result<(), Box<dyn Error>> {
        // the plan describes the left file only; the right side prints
        // key-first from its own shape
        for rec in recs {
            w.write_all(rec.key())?;
            for f in rec.non_key_fields() {
                w.write_all(&[self.delimiter])?;
                w.write_all(f)?;
            }
            w.write_all(&[self.terminator])?;
        }
        Ok(())
    }

    #[inline]
    fn print_both(
        &mut self,
        w: &mut W,
        left: &[Record],
        right: &[Record],
    ) -> Result<(), Box<dyn Error>> {
        for l in left {
            for r in right {
                self.write_planned(w, l)?;
                for f in r.non_key_fields() {
                    w.write_all(&[self.delimiter])?;
                    w.write_all(f)?;
                }
                w.write_all(&[self.terminator])?;
            }
        }
        Ok(())
    }
}
