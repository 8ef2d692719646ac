//! The scheduling policies.
//!
//! Each policy lives in its own file and is exported here.
//! The helpers below are shared by all of them.

use std::collections::HashSet;

use crate::scheduler::Field;
use crate::{Process, SchedulingError};

mod fcfs;
pub use fcfs::Fcfs;

mod round_robin;
pub use round_robin::RoundRobin;

mod priority;
pub use priority::Priority;

/// Checks the constraints that every policy relies on.
fn validate(processes: &[Process]) -> Result<(), SchedulingError> {
    if processes.is_empty() {
        return Err(SchedulingError::EmptyInput);
    }

    let mut pids = HashSet::with_capacity(processes.len());
    for process in processes {
        if !pids.insert(process.pid) {
            return Err(SchedulingError::DuplicatePid(process.pid));
        }
        if process.burst == 0 {
            return Err(SchedulingError::NegativeValue {
                pid: process.pid,
                field: Field::Burst,
                value: 0,
            });
        }
    }

    Ok(())
}

/// Moves `clock` forward by `amount` time units spent running `process`.
fn advance(clock: usize, process: &Process, amount: usize) -> Result<usize, SchedulingError> {
    clock
        .checked_add(amount)
        .ok_or(SchedulingError::TimeOverflow {
            pid: process.pid,
            clock,
        })
}

/// Returns a working copy of `processes` sorted by arrival.
///
/// The sort is stable, processes arriving together keep their input order.
fn by_arrival(processes: &[Process]) -> Vec<Process> {
    let mut sorted = processes.to_vec();
    sorted.sort_by_key(|process| process.arrival);
    sorted
}
