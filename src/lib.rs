extern crate csv_core;
#[cfg(test)]
extern crate tempfile;

pub mod record;
pub mod reader;
pub mod plan;
pub mod sort;
pub mod join;
pub mod printer;
pub mod pipeline;
