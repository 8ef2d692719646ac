use std::collections::VecDeque;
use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::schedulers::{advance, by_arrival, validate};
use crate::{Policy, Process, Schedule, Scheduler, SchedulingError, SchedulingResult, TimelineEntry};

/// The working copy of a process.
#[derive(Copy, Clone, PartialEq)]
struct PCB {
    process: Process,
    remaining: usize,
}

impl PCB {
    fn new(process: Process) -> Self {
        PCB {
            process,
            remaining: process.burst,
        }
    }
}

/// The mutable state of a single round robin run.
struct RunQueue {
    /// Processes that have arrived and wait for the CPU.
    ready_queue: VecDeque<PCB>,
    /// Processes that have not arrived yet, sorted by arrival.
    arrivals: VecDeque<PCB>,
    clock: usize,
}

impl RunQueue {
    fn new(processes: &[Process]) -> Self {
        RunQueue {
            ready_queue: VecDeque::with_capacity(processes.len()),
            arrivals: by_arrival(processes).into_iter().map(PCB::new).collect(),
            clock: 0,
        }
    }

    /// Moves every process that has arrived by now to the ready queue.
    fn admit(&mut self) {
        while let Some(pcb) = self.arrivals.pop_front() {
            if pcb.process.arrival > self.clock {
                self.arrivals.push_front(pcb);
                break;
            }
            trace!("admit {} at {}", pcb.process.pid, self.clock);
            self.ready_queue.push_back(pcb);
        }
    }

    /// Jumps to the next arrival when the CPU would otherwise idle.
    fn skip_idle(&mut self) -> Result<(), SchedulingError> {
        match self.arrivals.front() {
            Some(pcb) if pcb.process.arrival > self.clock => {
                debug!("idle from {} to {}", self.clock, pcb.process.arrival);
                self.clock = pcb.process.arrival;
                Ok(())
            }
            _ => Err(SchedulingError::Stalled { clock: self.clock }),
        }
    }
}

/// Preemptive round robin.
///
/// Every process runs for at most `timeslice` time units before it is
/// placed back at the end of the ready queue.
#[derive(Debug, Copy, Clone)]
pub struct RoundRobin {
    timeslice: NonZeroUsize,
}

impl RoundRobin {
    pub fn new(timeslice: NonZeroUsize) -> Self {
        RoundRobin { timeslice }
    }
}

impl Scheduler for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin {
            quantum: self.timeslice,
        }
    }

    fn schedule(&self, processes: &[Process]) -> Result<Schedule, SchedulingError> {
        validate(processes)?;

        let mut schedule = Schedule::default();
        let mut queue = RunQueue::new(processes);

        while schedule.results.len() < processes.len() {
            queue.admit();

            let Some(mut pcb) = queue.ready_queue.pop_front() else {
                queue.skip_idle()?;
                continue;
            };

            let executed = pcb.remaining.min(self.timeslice.get());
            let start = queue.clock;
            queue.clock = advance(queue.clock, &pcb.process, executed)?;
            pcb.remaining -= executed;
            debug!("run {} from {} to {}", pcb.process.pid, start, queue.clock);
            schedule
                .timeline
                .push(TimelineEntry::new(pcb.process.pid, start, queue.clock));

            // processes that arrived during the slice go ahead of the preempted one
            queue.admit();

            if pcb.remaining == 0 {
                schedule
                    .results
                    .push(SchedulingResult::completed(&pcb.process, queue.clock)?);
            } else {
                queue.ready_queue.push_back(pcb);
            }
        }

        schedule.results.sort_by_key(|result| result.pid);
        Ok(schedule)
    }
}
