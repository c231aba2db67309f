//! CSV export of raw samples.

use std::io::Write;
use std::path::Path;

/// One timed execution of one strategy
#[derive(Clone, Debug, PartialEq)]
pub struct RawSample {
    pub strategy: &'static str,
    pub repetition: usize,
    pub len: usize,
    pub elapsed_ns: u128,
    pub result: f64,
}

/// Write samples as CSV, one row per execution.
pub fn write_csv<W: Write>(mut out: W, seed: u64, samples: &[RawSample]) -> std::io::Result<()> {
    writeln!(out, "strategy,repetition,len,seed,elapsed_ns,result")?;
    for s in samples {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            s.strategy, s.repetition, s.len, seed, s.elapsed_ns, s.result
        )?;
    }
    out.flush()
}

/// Export samples to a CSV file, replacing it if present
pub fn export_csv(path: &Path, seed: u64, samples: &[RawSample]) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), seed, samples)
}
