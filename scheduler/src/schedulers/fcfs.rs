use log::debug;

use crate::schedulers::{advance, by_arrival, validate};
use crate::{Policy, Process, Schedule, Scheduler, SchedulingError, SchedulingResult, TimelineEntry};

/// First come, first served.
///
/// Processes run to completion in the order they arrive.
#[derive(Debug, Default, Copy, Clone)]
pub struct Fcfs;

impl Fcfs {
    pub fn new() -> Self {
        Fcfs
    }
}

impl Scheduler for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn schedule(&self, processes: &[Process]) -> Result<Schedule, SchedulingError> {
        validate(processes)?;

        let mut schedule = Schedule::default();
        let mut clock = 0;

        for process in by_arrival(processes) {
            if clock < process.arrival {
                debug!("idle from {} to {}", clock, process.arrival);
                clock = process.arrival;
            }

            let start = clock;
            clock = advance(clock, &process, process.burst)?;
            debug!("run {} from {} to {}", process.pid, start, clock);

            schedule
                .timeline
                .push(TimelineEntry::new(process.pid, start, clock));
            schedule
                .results
                .push(SchedulingResult::completed(&process, clock)?);
        }

        Ok(schedule)
    }
}
