// src/output.rs
use crate::harness::KernelRun;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub const RUNS_CSV_HEADER: &str =
    "kernel,options,trajectories,repetitions,time_ms,throughput_traj_per_sec,mean_price,mean_abs_error";

/// Write harness runs as CSV, preceded by `# key: value` metadata lines
pub fn write_runs_csv<P: AsRef<Path>>(
    path: P,
    runs: &[KernelRun],
    metadata: &[(&str, String)],
) -> io::Result<()> {
    let mut file = File::create(path)?;
    for (key, value) in metadata {
        writeln!(file, "# {}: {}", key, value)?;
    }
    writeln!(file, "{}", RUNS_CSV_HEADER)?;
    for run in runs {
        writeln!(
            file,
            "{},{},{},{},{:.2},{:.0},{:.6},{:.6}",
            run.kernel,
            run.options,
            run.trajectories,
            run.repetitions,
            run.time_ms,
            run.throughput_traj_per_sec,
            run.mean_price,
            run.mean_abs_error
        )?;
    }
    Ok(())
}
