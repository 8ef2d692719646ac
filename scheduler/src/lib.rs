//! A CPU scheduling simulation library.
//!
//! This library provides the process model, the [`Scheduler`] trait and
//! three classical policies: first come first served, round robin and
//! non preemptive priority scheduling. Every policy is a pure function of
//! its input and returns the per process results together with the
//! execution timeline.
//!

use std::num::NonZeroUsize;

mod metrics;
mod scheduler;

pub use crate::metrics::{averages, Averages};
pub use crate::scheduler::{
    Field, Pid, Policy, Process, Schedule, Scheduler, SchedulingError, SchedulingResult,
    TimelineEntry,
};

mod schedulers;

pub use schedulers::{Fcfs, Priority, RoundRobin};

/// Returns a structure that implements the `Scheduler` trait with a first come, first served policy
pub fn fcfs() -> Fcfs {
    Fcfs::new()
}

/// Returns a structure that implements the `Scheduler` trait with a round robin scheduler policy
///
/// * `quantum` - the time quanta that a process can run before it is preempted,
///               it has to be positive.
pub fn round_robin(quantum: usize) -> Result<RoundRobin, SchedulingError> {
    NonZeroUsize::new(quantum)
        .map(RoundRobin::new)
        .ok_or(SchedulingError::InvalidQuantum(quantum))
}

/// Returns a structure that implements the `Scheduler` trait with a non preemptive priority policy
///
/// Lower priority values are scheduled first.
pub fn priority() -> Priority {
    Priority::new()
}
