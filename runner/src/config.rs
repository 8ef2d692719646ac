use std::env;
use std::fs;
use std::num::NonZeroUsize;

use anyhow::{Context, Result};
use scheduler::{Pid, Process, SchedulingError};

/// The round robin quantum used when `TIMESLICE` is not set.
const DEFAULT_TIMESLICE: &str = "3";

/// The runner configuration, read from the environment.
#[derive(Debug)]
pub struct Config {
    /// The round robin quantum (`TIMESLICE`).
    pub quantum: NonZeroUsize,

    /// The processes to schedule, loaded from the JSON file named by
    /// `PROCESSES`, or the demonstration set.
    pub processes: Vec<Process>,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        let timeslice = env::var("TIMESLICE").unwrap_or_else(|_| DEFAULT_TIMESLICE.to_owned());
        let quantum = parse_quantum(&timeslice)?;

        let processes = match env::var("PROCESSES") {
            Ok(path) => {
                let json = fs::read_to_string(&path)
                    .with_context(|| format!("cannot read processes from {path}"))?;
                parse_processes(&json).with_context(|| format!("invalid processes in {path}"))?
            }
            Err(_) => demo(),
        };

        Ok(Config { quantum, processes })
    }
}

/// Parses a round robin quantum, rejecting 0.
pub fn parse_quantum(timeslice: &str) -> Result<NonZeroUsize> {
    let quantum = timeslice
        .trim()
        .parse::<usize>()
        .with_context(|| format!("TIMESLICE {timeslice:?} is not a number"))?;
    Ok(NonZeroUsize::new(quantum).ok_or(SchedulingError::InvalidQuantum(quantum))?)
}

/// Parses a JSON array of processes.
///
/// ```json
/// [{ "pid": 1, "arrival": 0, "burst": 6, "priority": 2 }]
/// ```
pub fn parse_processes(json: &str) -> Result<Vec<Process>> {
    Ok(serde_json::from_str(json)?)
}

/// The demonstration process set.
pub fn demo() -> Vec<Process> {
    [(0, 6, 2), (1, 2, 1), (2, 8, 3), (3, 3, 2), (4, 4, 1)]
        .into_iter()
        .zip(1..)
        .filter_map(|((arrival, burst, priority), pid)| {
            Pid::new(pid).map(|pid| Process::new(pid, arrival, burst, priority))
        })
        .collect()
}
