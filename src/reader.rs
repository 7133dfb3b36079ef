use super::record::Record;
use super::csv_core;

use std::error::Error;
use std::io::{self, BufRead};

/// Configures a `Reader`. The defaults match this tool's input contract:
/// tab-delimited fields, newline-terminated records, no quoting.
pub struct ReaderBuilder {
    delimiter: u8,
    terminator: u8,
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        ReaderBuilder {
            delimiter: b'\t',
            terminator: b'\n',
        }
    }
}

impl ReaderBuilder {
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn terminator(mut self, terminator: u8) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn from_reader<R: io::Read>(self, rdr: R) -> Reader<R> {
        let core = csv_core::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .terminator(csv_core::Terminator::Any(self.terminator))
            .quoting(false)
            .build();
        Reader {
            core: Box::new(core),
            rdr: io::BufReader::new(rdr),
            eof: false,
        }
    }
}

/// Reads delimited records incrementally from an underlying reader.
pub struct Reader<R> {
    core: Box<csv_core::Reader>,
    rdr: io::BufReader<R>,
    eof: bool,
}

impl<R: io::Read> Reader<R> {
    /// Read the next record into `record`, growing its buffers as needed.
    /// Returns `false` once the input is exhausted.
    #[inline]
    pub fn read_record(&mut self, record: &mut Record) -> Result<bool, Box<dyn Error>> {
        use csv_core::ReadRecordResult::*;

        record.clear();
        if self.eof {
            return Ok(false);
        }
        let (mut outlen, mut endlen) = (0, 0);
        loop {
            let (res, nin, nout, nend) = {
                let input = self.rdr.fill_buf()?;
                let (fields, ends) = record.fields_mut();
                self.core
                    .read_record(input, &mut fields[outlen..], &mut ends[endlen..])
            };
            self.rdr.consume(nin);
            outlen += nout;
            endlen += nend;
            match res {
                InputEmpty => continue,
                OutputFull => {
                    record.expand_fields();
                    continue;
                }
                OutputEndsFull => {
                    record.expand_bounds();
                    continue;
                }
                Record => {
                    record.set_len(endlen);
                    return Ok(true);
                }
                End => {
                    self.eof = true;
                    return Ok(false);
                }
            }
        }
    }
}
