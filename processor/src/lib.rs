//! A processor simulation library
//!
//! This is used for running the schedulers from the [`scheduler`] crate
//! and for rendering their output as tables and text Gantt charts.

use std::fmt::{self, Display, Write};
use std::num::NonZeroUsize;
use std::thread;

use log::info;
use scheduler::{
    averages, Averages, Fcfs, Pid, Policy, Priority, Process, RoundRobin, Schedule, Scheduler,
    SchedulingError, SchedulingResult, TimelineEntry,
};

/// The outcome of one simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The policy that produced the schedule.
    pub policy: Policy,

    /// The per process results and the timeline.
    pub schedule: Schedule,

    /// Average waiting and turnaround times.
    pub averages: Averages,
}

impl Report {
    fn new(policy: Policy, schedule: Schedule, averages: Averages) -> Report {
        Report {
            policy,
            schedule,
            averages,
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "===== {} =====", self.policy)?;
        writeln!(f, "PID\tARRIVAL\tBURST\tPRI\tCOMPLETION\tTURNAROUND\tWAITING")?;
        for result in &self.schedule.results {
            writeln!(f, "{}", ResultRow(result))?;
        }
        writeln!(f, "Average Waiting Time: {:.2}", self.averages.waiting)?;
        writeln!(f, "Average Turnaround Time: {:.2}", self.averages.turnaround)?;
        writeln!(f)?;
        write!(f, "{}", format_timeline(&self.schedule.timeline))
    }
}

struct ResultRow<'a>(&'a SchedulingResult);

impl Display for ResultRow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let result = self.0;
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            result.pid,
            result.arrival,
            result.burst,
            result.priority,
            result.completion,
            result.turnaround,
            result.waiting
        )
    }
}

/// The processor simulator.
pub struct Processor;

impl Processor {
    /// Simulate `processes` with `scheduler`.
    ///
    /// * `scheduler` - the scheduler to use for the simulation.
    /// * `processes` - the processes to schedule, they are not modified.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    /// use scheduler::{Pid, Process};
    ///
    /// let processes = [
    ///     Process::new(Pid::new(1).unwrap(), 0, 4, 0),
    ///     Process::new(Pid::new(2).unwrap(), 1, 2, 0),
    /// ];
    /// let report = Processor::run(&scheduler::round_robin(2).unwrap(), &processes).unwrap();
    /// assert_eq!(report.schedule.timeline.len(), 3);
    /// ```
    pub fn run<S>(scheduler: &S, processes: &[Process]) -> Result<Report, SchedulingError>
    where
        S: Scheduler + ?Sized,
    {
        let policy = scheduler.policy();
        let schedule = scheduler.schedule(processes)?;
        let averages = averages(&schedule.results)?;
        info!(
            "{}: {} processes, average waiting {:.2}, average turnaround {:.2}",
            policy,
            schedule.results.len(),
            averages.waiting,
            averages.turnaround
        );
        Ok(Report::new(policy, schedule, averages))
    }
}

/// Run the three policies side by side.
///
/// Every policy runs on its own thread with its own copy of `processes`.
/// The reports are returned in a fixed order: FCFS, round robin, priority.
///
/// * `processes` - the processes to schedule.
/// * `quantum` - the round robin time quanta.
pub fn compare(
    processes: &[Process],
    quantum: NonZeroUsize,
) -> Result<Vec<Report>, SchedulingError> {
    let schedulers: [Box<dyn Scheduler>; 3] = [
        Box::new(Fcfs::new()),
        Box::new(RoundRobin::new(quantum)),
        Box::new(Priority::new()),
    ];

    thread::scope(|s| {
        let handles = schedulers
            .iter()
            .map(|scheduler| {
                let processes = processes.to_vec();
                s.spawn(move || Processor::run(scheduler.as_ref(), &processes))
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(report) => report,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

/// The longest timeline drawn as a bar chart, longer ones are listed.
pub const MAX_CHART_WIDTH: usize = 120;

/// Render `timeline` as a text Gantt chart.
///
/// Each process gets a row, in the order in which it first runs. A `#`
/// marks a time unit in which the process runs, a `.` one in which it
/// does not. Timelines ending after [`MAX_CHART_WIDTH`] list the
/// intervals of each process instead.
///
/// ```rust
/// use processor::format_timeline;
/// use scheduler::{Pid, TimelineEntry};
///
/// let timeline = [
///     TimelineEntry::new(Pid::new(1).unwrap(), 0, 2),
///     TimelineEntry::new(Pid::new(2).unwrap(), 3, 4),
/// ];
/// assert_eq!(format_timeline(&timeline), "P1\t|##..|\nP2\t|...#|\n");
/// ```
pub fn format_timeline(timeline: &[TimelineEntry]) -> String {
    let length = timeline.iter().map(|entry| entry.end).max().unwrap_or(0);

    let mut pids: Vec<Pid> = Vec::new();
    for entry in timeline {
        if !pids.contains(&entry.pid) {
            pids.push(entry.pid);
        }
    }

    let mut s = String::new();
    for pid in pids {
        let entries = timeline.iter().filter(|entry| entry.pid == pid);
        // writing to a String cannot fail
        if length > MAX_CHART_WIDTH {
            let intervals: Vec<String> = entries
                .map(|entry| format!("[{}, {})", entry.start, entry.end))
                .collect();
            let _ = writeln!(s, "{}\t{}", pid, intervals.join(" "));
        } else {
            let mut row = vec!['.'; length];
            for entry in entries {
                row[entry.start..entry.end].fill('#');
            }
            let row: String = row.into_iter().collect();
            let _ = writeln!(s, "{}\t|{}|", pid, row);
        }
    }
    s
}

/// Format the averages of several [`Report`]s as a table.
pub fn format_summary(reports: &[Report]) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "===== Summary =====");
    let _ = writeln!(s, "ALGORITHM\tAVG WAITING\tAVG TURNAROUND");
    for report in reports {
        let _ = writeln!(
            s,
            "{}\t{:.2}\t{:.2}",
            report.policy, report.averages.waiting, report.averages.turnaround
        );
    }
    s
}

/// Format the [`Report`]s returned by the [`Processor`] to a [`String`],
/// followed by their summary.
///
/// * `reports` - the reports returned by the [`Processor`].
pub fn format_reports(reports: &[Report]) -> String {
    let mut s = String::new();
    for report in reports {
        let _ = fmt::write(&mut s, format_args!("{}\n", report));
    }
    s.push_str(&format_summary(reports));
    s
}
