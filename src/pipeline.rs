use super::join::{join, GroupCursor, JoinMode, JoinOptions};
use super::plan;
use super::printer::KeyFirst;
use super::reader::ReaderBuilder;
use super::sort::read_sorted;

use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// One run's configuration. Key indices are 0-based here; the CLI boundary
/// converts from the 1-based public contract.
pub struct JoinSpec {
    left_path: PathBuf,
    right_path: PathBuf,
    left_key: usize,
    right_key: usize,
    mode: JoinMode,
    out_path: PathBuf,
}

impl JoinSpec {
    pub fn new<P0, P1, P2>(
        left_path: P0,
        right_path: P1,
        left_key: usize,
        right_key: usize,
        mode: JoinMode,
        out_path: P2,
    ) -> Self
    where
        P0: Into<PathBuf>,
        P1: Into<PathBuf>,
        P2: Into<PathBuf>,
    {
        JoinSpec {
            left_path: left_path.into(),
            right_path: right_path.into(),
            left_key: left_key,
            right_key: right_key,
            mode: mode,
            out_path: out_path.into(),
        }
    }

    pub fn left_path(&self) -> &Path {
        &self.left_path
    }
    pub fn right_path(&self) -> &Path {
        &self.right_path
    }
    pub fn left_key(&self) -> usize {
        self.left_key
    }
    pub fn right_key(&self) -> usize {
        self.right_key
    }
    pub fn mode(&self) -> JoinMode {
        self.mode
    }
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }
}

/// Sort both inputs, derive the column plan, merge-join into the output
/// file. All-or-nothing per stage: a failure while opening or sorting
/// aborts before the output file is touched.
pub fn run(spec: &JoinSpec) -> Result<(), Box<dyn Error>> {
    const OUTBUF_CAP: usize = 4 * (1 << 14);

    let file0 = File::open(spec.left_path())
        .map_err(|e| format!("initialization error: {}: {}", spec.left_path().display(), e))?;
    let file1 = File::open(spec.right_path())
        .map_err(|e| format!("initialization error: {}: {}", spec.right_path().display(), e))?;

    let mut rdr0 = ReaderBuilder::default().from_reader(file0);
    let mut rdr1 = ReaderBuilder::default().from_reader(file1);
    let run0 = read_sorted(&mut rdr0, spec.left_key())
        .map_err(|e| format!("initialization error: {}", e))?;
    let run1 = read_sorted(&mut rdr1, spec.right_key())
        .map_err(|e| format!("initialization error: {}", e))?;

    let out = File::create(spec.out_path()).map_err(|e| {
        format!(
            "error joining the two datasets: {}: {}",
            spec.out_path().display(),
            e
        )
    })?;
    let mut w = io::BufWriter::with_capacity(OUTBUF_CAP, out);

    // an empty left input has no column plan; the output stays empty
    if let Some(plan) = plan::from_run(&run0) {
        let printer = KeyFirst::new(b'\t', b'\n', plan);
        let opts = JoinOptions::from_mode(spec.mode());
        join(
            &mut GroupCursor::new(run0),
            &mut GroupCursor::new(run1),
            &mut w,
            printer,
            opts,
        )
        .map_err(|e| format!("error joining the two datasets: {}", e))?;
    }
    w.flush()
        .map_err(|e| format!("error joining the two datasets: {}", e))?;
    Ok(())
}
