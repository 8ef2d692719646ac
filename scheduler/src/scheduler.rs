use std::error::Error;
use std::fmt::{self, Display};
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// The PID of a process
///
/// The PID cannot be 0, PIDs start from 1.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Pid(NonZeroUsize);

impl Pid {
    /// Returns [`None`] if `pid` is 0.
    pub fn new(pid: usize) -> Option<Pid> {
        NonZeroUsize::new(pid).map(Pid)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A process descriptor, the input of every scheduler.
///
/// Schedulers only borrow descriptors, so the same set can be handed
/// to several policies one after another (or in parallel).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// The PID of the process, unique within a run.
    pub pid: Pid,

    /// The time at which the process becomes ready.
    pub arrival: usize,

    /// The total CPU time the process needs.
    pub burst: usize,

    /// The process priority, lower values are more important.
    /// Only the priority policy looks at it.
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    pub fn new(pid: Pid, arrival: usize, burst: usize, priority: i32) -> Self {
        Process {
            pid,
            arrival,
            burst,
            priority,
        }
    }
}

/// The outcome of scheduling a single process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulingResult {
    pub pid: Pid,
    pub arrival: usize,
    pub burst: usize,
    pub priority: i32,

    /// The time at which the last unit of the burst finished.
    pub completion: usize,

    /// `completion - arrival`
    pub turnaround: usize,

    /// `turnaround - burst`
    pub waiting: usize,
}

impl SchedulingResult {
    /// Builds the result of `process` finishing at `completion`.
    ///
    /// Fails with [`SchedulingError::Stalled`] if `completion` is too early
    /// for the process to have run its whole burst.
    pub fn completed(process: &Process, completion: usize) -> Result<Self, SchedulingError> {
        let turnaround = completion
            .checked_sub(process.arrival)
            .ok_or(SchedulingError::Stalled { clock: completion })?;
        let waiting = turnaround
            .checked_sub(process.burst)
            .ok_or(SchedulingError::Stalled { clock: completion })?;

        Ok(SchedulingResult {
            pid: process.pid,
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            completion,
            turnaround,
            waiting,
        })
    }
}

/// An execution interval `[start, end)` of a process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub pid: Pid,
    pub start: usize,
    pub end: usize,
}

impl TimelineEntry {
    pub fn new(pid: Pid, start: usize, end: usize) -> Self {
        TimelineEntry { pid, start, end }
    }

    pub fn duration(&self) -> usize {
        self.end - self.start
    }
}

impl Display for TimelineEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}, {})", self.pid, self.start, self.end)
    }
}

/// Everything a scheduler produces for one run.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Schedule {
    /// One result per input process.
    pub results: Vec<SchedulingResult>,

    /// The execution intervals, in execution order.
    pub timeline: Vec<TimelineEntry>,
}

/// The scheduling policy implemented by a [`Scheduler`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Policy {
    /// First come, first served.
    Fcfs,
    /// Preemptive round robin with a fixed quantum.
    RoundRobin { quantum: NonZeroUsize },
    /// Non preemptive priority scheduling.
    Priority,
}

impl Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "FCFS"),
            Policy::RoundRobin { quantum } => write!(f, "Round Robin (q={})", quantum),
            Policy::Priority => write!(f, "Priority"),
        }
    }
}

/// A descriptor field that failed validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Burst,
    Priority,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Burst => write!(f, "burst"),
            Field::Priority => write!(f, "priority"),
        }
    }
}

/// The errors reported by the schedulers and the metrics calculator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// No processes were given, or no results were given to the metrics calculator.
    EmptyInput,

    /// The round robin quantum is 0.
    InvalidQuantum(usize),

    /// Two processes share the same PID.
    DuplicatePid(Pid),

    /// A field holds a value outside of its domain: a burst of 0
    /// or a negative priority.
    NegativeValue {
        pid: Pid,
        field: Field,
        value: i64,
    },

    /// Running `pid` would move the clock past the largest representable time.
    TimeOverflow { pid: Pid, clock: usize },

    /// The simulation cannot make progress.
    ///
    /// This is an internal invariant violation, reported instead of looping.
    Stalled {
        /// The simulated time at which the scheduler got stuck.
        clock: usize,
    },
}

impl Display for SchedulingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingError::EmptyInput => write!(f, "Empty input, nothing to schedule"),
            SchedulingError::InvalidQuantum(quantum) => {
                write!(f, "Invalid quantum {}, it must be positive", quantum)
            }
            SchedulingError::DuplicatePid(pid) => write!(f, "Duplicate pid {}", pid),
            SchedulingError::NegativeValue { pid, field, value } => {
                write!(f, "Invalid {} {} for process {}", field, value, pid)
            }
            SchedulingError::TimeOverflow { pid, clock } => {
                write!(f, "Time overflow running process {} at time {}", pid, clock)
            }
            SchedulingError::Stalled { clock } => {
                write!(f, "Scheduler stalled at time {}", clock)
            }
        }
    }
}

impl Error for SchedulingError {}

/// The trait that any scheduler has to implement.
pub trait Scheduler: Send + Sync {
    /// Returns the policy that the scheduler implements.
    fn policy(&self) -> Policy;

    /// Simulates the execution of `processes`.
    ///
    /// The descriptors are only read. Any working state lives inside
    /// the call, so the same slice can be scheduled again by another
    /// scheduler and yield an independent result.
    fn schedule(&self, processes: &[Process]) -> Result<Schedule, SchedulingError>;
}
