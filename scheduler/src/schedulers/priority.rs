use log::{debug, trace};

use crate::scheduler::Field;
use crate::schedulers::{advance, validate};
use crate::{Policy, Process, Schedule, Scheduler, SchedulingError, SchedulingResult, TimelineEntry};

/// Non preemptive priority scheduling.
///
/// Whenever the CPU is free, the ready process with the lowest priority
/// value runs to completion. Ties go to the earliest arrival, then to
/// the process given first.
#[derive(Debug, Default, Copy, Clone)]
pub struct Priority;

impl Priority {
    pub fn new() -> Self {
        Priority
    }
}

impl Scheduler for Priority {
    fn policy(&self) -> Policy {
        Policy::Priority
    }

    fn schedule(&self, processes: &[Process]) -> Result<Schedule, SchedulingError> {
        validate(processes)?;
        if let Some(process) = processes.iter().find(|process| process.priority < 0) {
            return Err(SchedulingError::NegativeValue {
                pid: process.pid,
                field: Field::Priority,
                value: process.priority.into(),
            });
        }

        let mut schedule = Schedule::default();
        // keeps the input index, it is the last tie breaker
        let mut pending: Vec<(usize, Process)> = processes.iter().copied().enumerate().collect();
        let mut clock = 0;

        while !pending.is_empty() {
            let selected = pending
                .iter()
                .enumerate()
                .filter(|(_, (_, process))| process.arrival <= clock)
                .min_by_key(|(_, (index, process))| (process.priority, process.arrival, *index))
                .map(|(position, _)| position);

            let Some(position) = selected else {
                let next = pending
                    .iter()
                    .map(|(_, process)| process.arrival)
                    .min()
                    .ok_or(SchedulingError::Stalled { clock })?;
                debug!("idle from {} to {}", clock, next);
                clock = next;
                continue;
            };

            let (_, process) = pending.remove(position);
            trace!("select {} with priority {} at {}", process.pid, process.priority, clock);

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

        schedule.results.sort_by_key(|result| result.pid);
        Ok(schedule)
    }
}
