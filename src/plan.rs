use super::record::Record;

/// The ordered projection of file-1 fields for every output row: the join
/// key hoisted first, then the remaining fields in natural order. Derived
/// once per run from the shape of file 1's first non-blank record; later
/// rows are padded or truncated to it.
#[derive(Debug, Eq, PartialEq)]
pub struct OutputColumnPlan {
    cols: Vec<usize>,
}

impl OutputColumnPlan {
    pub fn from_record(rec: &Record) -> Self {
        let key_idx = rec.key_idx();
        let mut cols = Vec::with_capacity(rec.len() + 1);
        cols.push(key_idx);
        for i in 0..rec.len() {
            if i != key_idx {
                cols.push(i);
            }
        }
        OutputColumnPlan { cols: cols }
    }

    /// 0-based file-1 field indices, in output order.
    #[inline]
    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.cols.len()
    }
}

/// Derive the plan from the first non-blank record of a run. `None` means
/// there is nothing to derive a shape from and the run degenerates to an
/// empty output.
pub fn from_run(run: &[Record]) -> Option<OutputColumnPlan> {
    run.iter()
        .find(|r| !r.is_blank())
        .map(OutputColumnPlan::from_record)
}

#[cfg(test)]
mod tests {
    use super::{from_run, OutputColumnPlan};
    use record::Record;

    #[test]
    fn key_first_then_rest() {
        let mut rec = Record::new(0);
        rec.load(b"1AB", &[1, 2, 3]);
        let plan = OutputColumnPlan::from_record(&rec);
        assert_eq!(plan.cols(), &[0, 1, 2]);
        assert_eq!(plan.width(), 3);
    }

    #[test]
    fn key_is_hoisted() {
        let mut rec = Record::new(2);
        rec.load(b"abc", &[1, 2, 3]);
        let plan = OutputColumnPlan::from_record(&rec);
        assert_eq!(plan.cols(), &[2, 0, 1]);
    }

    #[test]
    fn short_record_still_plans_the_key() {
        let mut rec = Record::new(4);
        rec.load(b"ab", &[1, 2]);
        let plan = OutputColumnPlan::from_record(&rec);
        assert_eq!(plan.cols(), &[4, 0, 1]);
    }

    #[test]
    fn empty_run_has_no_plan() {
        assert_eq!(from_run(&[]), None);
    }

    #[test]
    fn blank_records_are_skipped() {
        let mut blank = Record::new(0);
        blank.load(b"", &[0]);
        let mut rec = Record::new(0);
        rec.load(b"kv", &[1, 2]);
        let plan = from_run(&[blank, rec]).unwrap();
        assert_eq!(plan.cols(), &[0, 1]);
    }
}
